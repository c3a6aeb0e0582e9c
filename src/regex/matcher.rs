use super::state_machine::machine::NFA;

/// A matcher is some strategy for matching a given regex to a given input string. Different
/// matchers perform well in different situations, and which matcher to use can be decided based on
/// the regex.
pub trait Matcher {
    /// Does the regex match the entire input?
    fn is_match(&self, input: &str) -> bool;

    /// Does the regex match a substring of the input?
    fn contains_match(&self, input: &str) -> bool;

    /// Given an input line, return the byte index boundary of the first matching substring. The
    /// leftmost start is chosen, and from there the longest match.
    fn find(&self, input: &str) -> Option<(usize, usize)>;
}

/// Pure state-machine based matching, with no literal optimizations.
pub struct NFAMatcher {
    pub nfa: NFA,
}

impl Matcher for NFAMatcher {
    fn is_match(&self, input: &str) -> bool {
        self.nfa.is_match(input)
    }

    fn contains_match(&self, input: &str) -> bool {
        self.nfa.contains_match(input)
    }

    fn find(&self, input: &str) -> Option<(usize, usize)> {
        // The empty suffix is a start position too, a regex like `a*` matches
        // the empty string at the end of any input.
        input
            .char_indices()
            .map(|(byte_index, _)| byte_index)
            .chain(std::iter::once(input.len()))
            .find_map(|byte_index| {
                self.nfa
                    .simulate(&input[byte_index..], true)
                    .map(|relative_match_end| (byte_index, byte_index + relative_match_end))
            })
    }
}

/// Pure literal string finder. Meaning the regex contained no operators.
pub struct LiteralMatcher {
    pub to_find: String,
}

impl Matcher for LiteralMatcher {
    fn is_match(&self, input: &str) -> bool {
        input == self.to_find
    }

    fn contains_match(&self, input: &str) -> bool {
        input.contains(self.to_find.as_str())
    }

    fn find(&self, input: &str) -> Option<(usize, usize)> {
        input
            .find(self.to_find.as_str())
            .map(|byte_index| (byte_index, byte_index + self.to_find.len()))
    }
}
