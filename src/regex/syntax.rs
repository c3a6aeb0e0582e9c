//! The syntax sieve. Only syntactically correct patterns are allowed through
//! to the later compilation stages.

/// Characters an operator may not directly follow. A closing parenthesis is
/// missing since operators may legally follow a group.
const OPERAND_REQUIRED_AFTER: [char; 5] = ['(', '+', '*', '?', '|'];

/// Check that a pattern is a syntactically valid regex.
///
/// Only literal characters and the operators `( ) | * + ?` are supported,
/// there are no escapes. A pattern is rejected if its parentheses do not
/// balance, a group is empty, or an operator has nothing to operate on. The
/// empty pattern is also rejected.
pub fn validate(pattern: &str) -> bool {
    let regex: Vec<char> = pattern.chars().collect();
    is_valid(&regex)
}

fn is_valid(regex: &[char]) -> bool {
    if regex.is_empty() {
        return false;
    }

    let mut paren_balance: usize = 0;
    // One counter of operands per nesting level, the last being the
    // innermost currently open group.
    let mut nonop_token_count: Vec<usize> = vec![0];

    for (i, &character) in regex.iter().enumerate() {
        match character {
            '(' => {
                paren_balance += 1;
                nonop_token_count.push(0);
            }
            ')' => {
                if paren_balance == 0 {
                    return false;
                }
                paren_balance -= 1;

                // Parenthesis contents can not be empty
                if nonop_token_count.pop().unwrap_or(0) == 0 {
                    return false;
                }
                // The group as a whole is an operand of the enclosing level.
                if let Some(count) = nonop_token_count.last_mut() {
                    *count += 1;
                }
            }
            '*' | '+' | '?' => {
                if current_count(&nonop_token_count) == 0 {
                    return false;
                }
                if i > 0 && OPERAND_REQUIRED_AFTER.contains(&regex[i - 1]) {
                    return false;
                }
            }
            '|' => {
                if current_count(&nonop_token_count) == 0 {
                    return false;
                }

                // The contents of each side are checked by this same scan,
                // so it is enough that both sides start with an operand.
                let left = alternation_left(regex, i);
                let right = alternation_right(regex, i);
                if !starts_with_operand(left) || !starts_with_operand(right) {
                    return false;
                }
            }
            _ => {
                if let Some(count) = nonop_token_count.last_mut() {
                    *count += 1;
                }
            }
        }
    }

    paren_balance == 0
}

/// A non-empty side of an alternation that does not open with an operator.
fn starts_with_operand(side: &[char]) -> bool {
    match side.first() {
        Some(first) => !['*', '+', '?', '|', ')'].contains(first),
        None => false,
    }
}

fn current_count(nonop_token_count: &[usize]) -> usize {
    nonop_token_count.last().copied().unwrap_or(0)
}

/// The left hand side of the alternation at `index`. Backtracks until the
/// enclosing opening parenthesis, a previous alternation on the same level, or
/// the start of the regex.
fn alternation_left(regex: &[char], index: usize) -> &[char] {
    let mut depth: usize = 0;
    let mut start: usize = 0;

    for j in (0..index).rev() {
        match regex[j] {
            ')' => depth += 1,
            '(' | '|' if depth == 0 => {
                start = j + 1;
                break;
            }
            '(' => depth -= 1,
            _ => (),
        }
    }

    &regex[start..index]
}

/// The right hand side of the alternation at `index`. Looks forward until the
/// enclosing closing parenthesis, the next alternation on the same level, or
/// the end of the regex.
fn alternation_right(regex: &[char], index: usize) -> &[char] {
    let mut depth: usize = 0;
    let mut end: usize = regex.len();

    for (j, &character) in regex.iter().enumerate().skip(index + 1) {
        match character {
            '(' => depth += 1,
            ')' | '|' if depth == 0 => {
                end = j;
                break;
            }
            ')' => depth -= 1,
            _ => (),
        }
    }

    &regex[(index + 1)..end]
}
