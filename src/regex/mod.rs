//! Regular expressions string matching by converting the regular expression to
//! a NFA (non-deterministic finite automaton).
//!
//! Works by first checking the syntax of the regular expression, converting it
//! to postfix notation and building a syntax tree, then applying Thompson's
//! construction to that tree. The NFA is simulated without backtracking, being
//! in all the states it could be in at once.
//!
//! Supported are literal characters and the operators `( ) | * + ?`. There are
//! no escapes, every other character is a literal.
mod ast;
mod error;
mod matcher;
mod postfix;
mod state_machine;
mod syntax;
mod token;

pub use ast::Node;
pub use error::CompileError;
pub use matcher::{LiteralMatcher, Matcher, NFAMatcher};
pub use postfix::{insert_concat, to_postfix};
pub use state_machine::machine::{State, StateId, NFA};
pub use state_machine::tree_to_nfa;
pub use syntax::validate;
pub use token::{render, tokenize, Token};

/// Compile a regex into a NFA.
pub fn compile(regex: &str) -> Result<NFA, CompileError> {
    state_machine::regex_to_nfa(regex)
}

/// Does the NFA accept the entire input?
pub fn matches(nfa: &NFA, input: &str) -> bool {
    nfa.is_match(input)
}

/// Does the NFA accept some substring of the input?
pub fn contains_match(nfa: &NFA, input: &str) -> bool {
    nfa.contains_match(input)
}

/// A regular expression string, and functions to match a string to it.
pub struct Regex {
    pub regex: String,

    matcher: Box<dyn Matcher>,
}

impl Regex {
    /// Create a new regex object given the regex string.
    ///
    /// A regex without any operators is matched by plain substring search,
    /// otherwise this will construct the NFA needed to do the matching.
    pub fn new(regex: &str) -> Result<Regex, CompileError> {
        let matcher: Box<dyn Matcher> = if is_literal(regex) {
            Box::new(LiteralMatcher {
                to_find: regex.to_string(),
            })
        } else {
            Box::new(NFAMatcher {
                nfa: compile(regex)?,
            })
        };

        Ok(Regex {
            regex: regex.to_string(),
            matcher,
        })
    }

    /// Match the regex to the entire `input`.
    pub fn is_match(&self, input: &str) -> bool {
        self.matcher.is_match(input)
    }

    /// Match the regex to a substring of `input`.
    pub fn contains_match(&self, input: &str) -> bool {
        self.matcher.contains_match(input)
    }

    /// Find the matching substring of `input`. Returns the char byte index of
    /// the char where the leftmost matching substring starts and the first
    /// char after the longest match from there.
    pub fn find(&self, input: &str) -> Option<(usize, usize)> {
        self.matcher.find(input)
    }
}

/// A non-empty regex of only literal characters.
fn is_literal(regex: &str) -> bool {
    !regex.is_empty() && tokenize(regex).iter().all(|token| token.is_literal())
}

// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_and_match() -> Result<(), CompileError> {
        let nfa = compile("a")?;

        assert!(matches(&nfa, "a"));
        assert!(!matches(&nfa, ""));
        assert!(!matches(&nfa, "aa"));
        assert!(contains_match(&nfa, "bab"));
        assert!(!contains_match(&nfa, "bbb"));
        Ok(())
    }

    #[test]
    fn test_compile_invalid() {
        for regex in &["()*", "()+", "()?", "()|", "(|)", "*", "+", "?", "|", "((a)"] {
            assert_eq!(
                compile(regex).err(),
                Some(CompileError::Syntax(regex.to_string()))
            );
        }
    }

    #[test]
    fn test_regex_substring_matching() -> Result<(), CompileError> {
        let regex = Regex::new("a(b|c)*d")?;

        assert_eq!(regex.find("xxabcbdyy"), Some((2, 7)));
        assert_eq!(regex.find("ad"), Some((0, 2)));
        assert_eq!(regex.find("abc"), None);
        assert!(regex.contains_match("zzad"));
        assert!(!regex.is_match("zzad"));
        assert!(regex.is_match("acd"));
        Ok(())
    }

    #[test]
    fn test_regex_substring_matching_pure_literal() -> Result<(), CompileError> {
        let regex = Regex::new("a testcase")?;

        assert_eq!(
            regex.find("Contains a testcase"),
            Some(("Contains ".len(), "Contains a testcase".len()))
        );
        assert_eq!(regex.find("Some other string"), None);
        assert!(regex.is_match("a testcase"));
        Ok(())
    }

    #[test]
    fn test_literal_and_nfa_agree() -> Result<(), CompileError> {
        let literal = Regex::new("abc")?;
        let nfa = NFAMatcher {
            nfa: compile("abc")?,
        };

        for input in &["abc", "xabcx", "ab", "", "abcabc"] {
            assert_eq!(literal.find(input), nfa.find(input));
            assert_eq!(literal.is_match(input), nfa.is_match(input));
            assert_eq!(literal.contains_match(input), nfa.contains_match(input));
        }
        Ok(())
    }

    #[test]
    fn test_empty_regex() {
        assert!(Regex::new("").is_err());
    }
}
