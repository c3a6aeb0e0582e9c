use std::io::{self, Write};

use ansi_term::Colour::{Blue, Red};

/// An operation to be applied to the lines of the input file. Given the line together with the
/// byte boundaries of the substring matching the regex pattern, if any.
pub trait Operation {
    fn apply(
        &mut self,
        out: &mut dyn Write,
        line: &str,
        found: Option<(usize, usize)>,
        prepend: &str,
    ) -> io::Result<()>;

    /// For operations that have something to "report" after processing all the lines. Like the
    /// count operation.
    fn final_report(&self) -> Option<String> {
        None
    }
}

/// Pick the operation named on the command line.
pub fn from_name(name: &str, color: bool) -> Option<Box<dyn Operation>> {
    let operation: Box<dyn Operation> = match name {
        "p" => Box::new(PrintMatchingLine { color }),
        "ip" => Box::new(PrintNonMatchingLine { color }),
        "m" => Box::new(PrintMatch { color }),
        "im" => Box::new(PrintExceptMatch { color }),
        "c" => Box::new(Count { count: 0 }),
        _ => return None,
    };
    Some(operation)
}

fn write_prepend(out: &mut dyn Write, prepend: &str, color: bool) -> io::Result<()> {
    if color {
        write!(out, "{}", Blue.paint(prepend))
    } else {
        write!(out, "{}", prepend)
    }
}

pub struct PrintMatchingLine {
    pub color: bool,
}

impl Operation for PrintMatchingLine {
    /// Print the given line if it contains a matching substring.
    fn apply(
        &mut self,
        out: &mut dyn Write,
        line: &str,
        found: Option<(usize, usize)>,
        prepend: &str,
    ) -> io::Result<()> {
        let (match_start, match_end) = match found {
            Some(bounds) => bounds,
            None => return Ok(()),
        };

        write_prepend(out, prepend, self.color)?;

        if self.color {
            return writeln!(
                out,
                "{}{}{}",
                &line[..match_start],
                Red.paint(&line[match_start..match_end]),
                &line[match_end..]
            );
        }
        writeln!(out, "{}", line)
    }
}

pub struct PrintNonMatchingLine {
    pub color: bool,
}

impl Operation for PrintNonMatchingLine {
    /// Print the given line if it does not contain a matching substring.
    fn apply(
        &mut self,
        out: &mut dyn Write,
        line: &str,
        found: Option<(usize, usize)>,
        prepend: &str,
    ) -> io::Result<()> {
        if found.is_some() {
            return Ok(());
        }

        write_prepend(out, prepend, self.color)?;
        writeln!(out, "{}", line)
    }
}

pub struct PrintMatch {
    pub color: bool,
}

impl Operation for PrintMatch {
    /// Print the matching substring of a matching line.
    fn apply(
        &mut self,
        out: &mut dyn Write,
        line: &str,
        found: Option<(usize, usize)>,
        prepend: &str,
    ) -> io::Result<()> {
        if let Some((match_start, match_end)) = found {
            write_prepend(out, prepend, self.color)?;
            writeln!(out, "{}", &line[match_start..match_end])?;
        }
        Ok(())
    }
}

pub struct PrintExceptMatch {
    pub color: bool,
}

impl Operation for PrintExceptMatch {
    /// Print all but the matching substring of a matching line.
    fn apply(
        &mut self,
        out: &mut dyn Write,
        line: &str,
        found: Option<(usize, usize)>,
        prepend: &str,
    ) -> io::Result<()> {
        if let Some((match_start, match_end)) = found {
            write_prepend(out, prepend, self.color)?;
            writeln!(out, "{}{}", &line[..match_start], &line[match_end..])?;
        }
        Ok(())
    }
}

pub struct Count {
    pub count: usize,
}

impl Operation for Count {
    fn apply(
        &mut self,
        _out: &mut dyn Write,
        _line: &str,
        found: Option<(usize, usize)>,
        _prepend: &str,
    ) -> io::Result<()> {
        if found.is_some() {
            self.count += 1
        }
        Ok(())
    }

    fn final_report(&self) -> Option<String> {
        Some(self.count.to_string())
    }
}
