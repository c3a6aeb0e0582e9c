use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use walkdir::{DirEntry, WalkDir};

use clap::{App, Arg};
use log::debug;

use orban::regex::Regex;

mod operations;

use operations::Operation;

fn main() -> io::Result<()> {
    env_logger::init();

    let matches = App::new("orban")
        .about("A stream filter built on Thompson's construction. Patterns may use literal characters and the operators ( ) | * + ?. Supported OPERATION's are: p (print matching lines), ip (inverse print, print non-matching lines), m (print only matching substrings), im (print the matching lines with the matching substrings removed) and c (count matching lines). Default is p.")
        .arg(Arg::with_name("PATTERN")
             .help("The pattern to match")
             .required(true)
             .index(1))
        .arg(Arg::with_name("FILE")
             .help("The file to search. If none read stdin. If recursive search then this is the directory, or current directory if none.")
             .index(2))
        .arg(Arg::with_name("color")
             .short("c")
             .long("color")
             .help("Enable colors"))
        .arg(Arg::with_name("recursive")
             .short("r")
             .long("recursive")
             .help("Search all files in the directory FILE recursively."))
        .arg(Arg::with_name("operation")
             .short("o")
             .long("operation")
             .value_name("OPERATION")
             .takes_value(true)
             .help("Operation to preform on the lines of the FILE."))
        .get_matches();

    let pattern = matches.value_of("PATTERN").unwrap_or_default();
    let regex = match Regex::new(pattern) {
        Err(e) => return Err(io::Error::new(io::ErrorKind::InvalidInput, e)),
        Ok(r) => r,
    };

    let color = matches.is_present("color");
    let operation_name = matches.value_of("operation").unwrap_or("p");
    let mut operation = match operations::from_name(operation_name, color) {
        Some(operation) => operation,
        None => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unsupported operation '{}'", operation_name),
            ))
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if matches.is_present("recursive") {
        let directory_name = matches.value_of("FILE").unwrap_or(".");
        for entry in WalkDir::new(directory_name)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| !is_hidden(e))
            .filter_map(Result::ok)
            .filter(|e| !e.file_type().is_dir())
        {
            let path = entry.path().display().to_string();
            debug!("searching {}", path);

            let file = File::open(entry.path())?;
            let mut reader = BufReader::new(file);
            apply_operation_to_reader(
                &mut reader,
                &regex,
                operation.as_mut(),
                &mut out,
                &format!("{}:", path),
            )?;
        }
    } else if let Some(file_name) = matches.value_of("FILE") {
        let file = File::open(file_name)?;
        let mut reader = BufReader::new(file);
        apply_operation_to_reader(&mut reader, &regex, operation.as_mut(), &mut out, "")?;
    } else {
        let stdin = io::stdin();
        let mut reader = stdin.lock();
        apply_operation_to_reader(&mut reader, &regex, operation.as_mut(), &mut out, "")?;
    }

    if let Some(report) = operation.final_report() {
        writeln!(out, "{}", report)?;
    }

    Ok(())
}

fn apply_operation_to_reader(
    reader: &mut dyn BufRead,
    regex: &Regex,
    operation: &mut dyn Operation,
    out: &mut dyn Write,
    prepend: &str,
) -> io::Result<()> {
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = match reader.read_line(&mut line) {
            Ok(bytes_read) => bytes_read,
            // Binary files are skipped when searching recursively
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                debug!("skipping non UTF-8 input: {}", e);
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        if bytes_read == 0 {
            break;
        }

        // Strip newline from string used to match against
        let line_no_newline = line.trim_end_matches(&['\n', '\r'][..]);

        operation.apply(out, line_no_newline, regex.find(line_no_newline), prepend)?;
    }

    Ok(())
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.') && s != "." && s != "..")
        .unwrap_or(false)
}
