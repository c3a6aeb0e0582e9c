mod builder;
pub mod machine;

use log::debug;

use super::ast::Node;
use super::error::CompileError;
use super::postfix::{insert_concat, to_postfix};
use super::syntax::validate;
use super::token::{render, tokenize};
use builder::NFABuilder;
use machine::NFA;

/// Convert a regular expression to a NFA.
///
/// The regex is first checked for syntax errors. Then the implicit
/// concatenation is made explicit and the Shunting-Yard algorithm converts
/// the infix regex to postfix, from which a syntax tree is built. Finally
/// Thompson's construction turns the tree into a NFA.
pub fn regex_to_nfa(regex: &str) -> Result<NFA, CompileError> {
    if !validate(regex) {
        return Err(CompileError::Syntax(regex.to_string()));
    }

    let infix = insert_concat(&tokenize(regex));
    debug!("explicit concatenation: {}", render(&infix));

    let postfix = to_postfix(&infix)?;
    debug!("postfix: {}", render(&postfix));

    let tree = Node::from_postfix(&postfix)?;
    tree_to_nfa(&tree)
}

/// Apply Thompson's construction to a syntax tree.
pub fn tree_to_nfa(tree: &Node) -> Result<NFA, CompileError> {
    let nfa = NFABuilder::new().finalize(tree)?;
    debug!("constructed NFA with {} states", nfa.len());

    Ok(nfa)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_literal() -> Result<(), CompileError> {
        let nfa = regex_to_nfa("a")?;

        assert!(nfa.is_match("a"));
        assert!(!nfa.is_match(""));
        assert!(!nfa.is_match("aa"));
        Ok(())
    }

    #[test]
    fn test_kleene_closure() -> Result<(), CompileError> {
        let nfa = regex_to_nfa("a*")?;

        assert!(nfa.is_match(""));
        assert!(nfa.is_match("aaaaaaaaa"));
        assert!(!nfa.is_match("aaaaabbbbaaaa"));
        assert!(!nfa.is_match("bbba"));
        Ok(())
    }

    #[test]
    fn test_regex_nfa_matching_1() -> Result<(), CompileError> {
        // Test alteration, unicode, concatenation
        let nfa = regex_to_nfa("(a|⻘)c")?;

        assert!(nfa.is_match("ac"));
        assert!(nfa.is_match("⻘c"));
        assert!(!nfa.is_match("a")); // Missing c
        assert!(!nfa.is_match("c")); // Missing first char
        assert!(!nfa.is_match("xc")); // Wrong first char
        Ok(())
    }

    #[test]
    fn test_regex_nfa_matching_2() -> Result<(), CompileError> {
        // Test one or more, zero or more
        let nfa = regex_to_nfa("(a|b)*c+")?;

        assert!(nfa.is_match("ac"));
        assert!(nfa.is_match("c"));
        assert!(nfa.is_match("aaaac"));
        assert!(nfa.is_match("accccc"));
        assert!(nfa.is_match("bc"));
        assert!(nfa.is_match("abc")); // Both characters allowed in zero or more
        assert!(!nfa.is_match("b")); // Too few c
        assert!(!nfa.is_match("")); // Too few c
        Ok(())
    }

    #[test]
    fn test_regex_nfa_matching_3() -> Result<(), CompileError> {
        // Test zero or more, one or more, zero or one
        let nfa = regex_to_nfa("a*ø?⻘+")?;

        assert!(nfa.is_match("a⻘"));
        assert!(nfa.is_match("aø⻘"));
        assert!(nfa.is_match("⻘"));
        assert!(nfa.is_match("ø⻘"));
        assert!(nfa.is_match("aaaaaaaaaaaa⻘⻘⻘⻘⻘⻘"));
        assert!(!nfa.is_match("aøø⻘")); // Too many ø
        assert!(!nfa.is_match("aø")); // Too few ⻘
        Ok(())
    }

    #[test]
    fn test_regex_nfa_matching_4() -> Result<(), CompileError> {
        let nfa = regex_to_nfa("a(b|c)*d")?;

        assert!(nfa.is_match("ad"));
        assert!(nfa.is_match("abcbcd"));
        assert!(!nfa.is_match("abca"));
        assert!(!nfa.is_match("abxd"));
        Ok(())
    }

    #[test]
    fn test_one_or_more_group() -> Result<(), CompileError> {
        let nfa = regex_to_nfa("a(bb)+a")?;

        assert!(nfa.is_match("abba"));
        assert!(nfa.is_match("abbbbbba"));
        assert!(!nfa.is_match("aa"));
        assert!(!nfa.is_match("abbba"));
        Ok(())
    }

    // Test that grouping without applying any operation on the group gives
    // the same results as if the group was not there.
    #[test]
    fn test_grouping_with_no_operator() -> Result<(), CompileError> {
        let nfa = regex_to_nfa("x(y)z")?;

        assert!(!nfa.is_match("xy"));
        assert!(!nfa.is_match("xz"));
        assert!(nfa.is_match("xyz"));
        Ok(())
    }

    #[test]
    fn test_dot_is_a_literal() -> Result<(), CompileError> {
        let nfa = regex_to_nfa("a.b")?;

        assert!(nfa.is_match("a.b"));
        assert!(!nfa.is_match("axb"));
        Ok(())
    }

    #[test]
    fn test_invalid_regex() {
        assert_eq!(
            regex_to_nfa("()*").err(),
            Some(CompileError::Syntax("()*".to_string()))
        );
        assert!(regex_to_nfa("(a").is_err());
        assert!(regex_to_nfa("").is_err());
    }

    #[test]
    fn test_no_exponential_blowup() -> Result<(), CompileError> {
        // a?^n a^n against a^n, the classic worst case of backtracking
        let n = 64;
        let regex = format!("{}{}", "a?".repeat(n), "a".repeat(n));
        let nfa = regex_to_nfa(&regex)?;

        assert!(nfa.is_match(&"a".repeat(n)));
        assert!(nfa.is_match(&"a".repeat(2 * n)));
        assert!(!nfa.is_match(&"a".repeat(2 * n + 1)));
        Ok(())
    }

    #[test]
    fn test_repeated_simulation_is_deterministic() -> Result<(), CompileError> {
        let nfa = regex_to_nfa("(a|b)*abb")?;

        for _ in 0..10 {
            assert!(nfa.is_match("babb"));
            assert!(!nfa.is_match("bab"));
        }
        Ok(())
    }
}
