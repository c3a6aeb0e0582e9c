//! A small regular expression engine built on Thompson's construction.
//!
//! ```
//! use orban::regex::{compile, contains_match, matches};
//!
//! let nfa = compile("a(b|c)*d").unwrap();
//! assert!(matches(&nfa, "abcbd"));
//! assert!(!matches(&nfa, "abx"));
//! assert!(contains_match(&nfa, "xxacdyy"));
//! ```
pub mod regex;
