use super::error::CompileError;
use super::token::Token;

/// How operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Associativity {
    Left,
    Right,
}

/// Make the implicit concatenation in a infix regex explicit by inserting a
/// `Token::Concat` between every two tokens that are concatenated.
///
/// `a(b|c)*d` becomes `a.(b|c)*.d`. Applying it twice gives the same result
/// as applying it once.
pub fn insert_concat(infix: &[Token]) -> Vec<Token> {
    if infix.len() <= 1 {
        return infix.to_vec();
    }

    let mut output: Vec<Token> = Vec::with_capacity(2 * infix.len());
    for (i, &token) in infix.iter().enumerate() {
        output.push(token);

        if let Some(&next_token) = infix.get(i + 1) {
            if are_concatenated(token, next_token) {
                output.push(Token::Concat);
            }
        }
    }

    output
}

/// Determine if two tokens are concatenated if they appear after each other
/// in a infix regex.
fn are_concatenated(token: Token, next_token: Token) -> bool {
    let operand_ends = !matches!(
        token,
        Token::OpenParen | Token::Alternation | Token::Concat
    );
    let operand_starts = !(next_token.is_unary()
        || matches!(
            next_token,
            Token::CloseParen | Token::Alternation | Token::Concat
        ));

    operand_ends && operand_starts
}

/// Use the Shunting-Yard algorithm to convert a regex written in infix
/// notation, with explicit concatenation, to postfix notation.
///
/// `a.(b|c)*.d` becomes `abc|*.d.`. Grouping parentheses do not survive
/// the conversion. A closing parenthesis without a matching opening one, or
/// the other way around, is an error.
pub fn to_postfix(infix: &[Token]) -> Result<Vec<Token>, CompileError> {
    let mut output: Vec<Token> = Vec::with_capacity(infix.len());
    let mut operator_stack: Vec<Token> = Vec::new();

    for &token in infix {
        match token {
            Token::Literal(_) => output.push(token),
            Token::OpenParen => operator_stack.push(token),
            Token::CloseParen => loop {
                // Pop the operator stack until we find the start of the group
                match operator_stack.pop() {
                    Some(Token::OpenParen) => break,
                    Some(operator) => output.push(operator),
                    None => return Err(CompileError::MismatchedGrouping),
                }
            },
            operator => {
                while let Some(&top) = operator_stack.last() {
                    if !should_pop(top, operator) {
                        break;
                    }
                    output.push(top);
                    operator_stack.pop();
                }
                operator_stack.push(operator);
            }
        }
    }

    // If there are any operators left on the operator stack, add them to the
    // output. A parenthesis left here was never closed.
    while let Some(operator) = operator_stack.pop() {
        if operator == Token::OpenParen {
            return Err(CompileError::MismatchedGrouping);
        }
        output.push(operator);
    }

    Ok(output)
}

/// Should the operator on top of the operator stack be moved to the output
/// before pushing `operator`?
fn should_pop(top: Token, operator: Token) -> bool {
    if top == Token::OpenParen {
        return false;
    }

    let (top_precedence, top_associativity) = precedence(top);
    let (operator_precedence, _) = precedence(operator);

    match top_associativity {
        Associativity::Left => top_precedence >= operator_precedence,
        Associativity::Right => top_precedence > operator_precedence,
    }
}

/// Operator precedence for regex operators. Higher value means higher
/// precedence.
fn precedence(operator: Token) -> (usize, Associativity) {
    match operator {
        Token::ZeroOrMore | Token::OneOrMore | Token::ZeroOrOne => (3, Associativity::Right),
        Token::Concat => (2, Associativity::Left),
        Token::Alternation => (1, Associativity::Left),
        // Parentheses and literals never compete for precedence
        Token::OpenParen | Token::CloseParen | Token::Literal(_) => (0, Associativity::Left),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regex::token::{render, tokenize};
    use pretty_assertions::assert_eq;

    fn concat(pattern: &str) -> String {
        render(&insert_concat(&tokenize(pattern)))
    }

    /// The test patterns are written with `.` as the concatenation operator.
    fn postfix(infix: &str) -> Result<String, CompileError> {
        let tokens: Vec<Token> = infix
            .chars()
            .map(|c| match c {
                '.' => Token::Concat,
                _ => Token::from_char(c),
            })
            .collect();
        Ok(render(&to_postfix(&tokens)?))
    }

    #[test]
    fn test_concat_single_char_nonop() {
        assert_eq!(concat("a"), "a");
        assert_eq!(concat(""), "");
    }

    #[test]
    fn test_concat_between_chars_nonop() {
        assert_eq!(concat("ab"), "a.b");
    }

    #[test]
    fn test_concat_with_ops() {
        assert_eq!(concat("a*"), "a*");
        assert_eq!(concat("aa*"), "a.a*");
        assert_eq!(concat("a(a)*"), "a.(a)*");
        assert_eq!(concat("a(b|c)*d"), "a.(b|c)*.d");
        assert_eq!(concat("a(bb)+a"), "a.(b.b)+.a");
        assert_eq!(concat("(a|b)(c)"), "(a|b).(c)");
    }

    #[test]
    fn test_concat_is_idempotent() {
        for pattern in &["ab", "a(b|c)*d", "a(bb)+a", "x?y+(z)"] {
            let once = insert_concat(&tokenize(pattern));
            assert_eq!(insert_concat(&once), once);
        }
    }

    #[test]
    fn test_to_postfix() -> Result<(), CompileError> {
        assert_eq!(postfix("a*")?, "a*");
        assert_eq!(postfix("a|b")?, "ab|");
        assert_eq!(postfix("a.(b|c)*.d")?, "abc|*.d.");
        assert_eq!(postfix("a.(b.b)+.a")?, "abb.+.a.");
        Ok(())
    }

    #[test]
    fn test_to_postfix_precedence() -> Result<(), CompileError> {
        // Concatenation binds tighter than alternation
        assert_eq!(postfix("a.b|c")?, "ab.c|");
        assert_eq!(postfix("a|b.c")?, "abc.|");
        // Repetition binds tighter than concatenation
        assert_eq!(postfix("a.b*")?, "ab*.");
        assert_eq!(postfix("a*.b")?, "a*b.");
        // Left associativity
        assert_eq!(postfix("a.b.c")?, "ab.c.");
        assert_eq!(postfix("a|b|c")?, "ab|c|");
        Ok(())
    }

    #[test]
    fn test_to_postfix_mismatched_grouping() {
        assert_eq!(postfix("a)"), Err(CompileError::MismatchedGrouping));
        assert_eq!(postfix("(a"), Err(CompileError::MismatchedGrouping));
        assert_eq!(postfix("(a.b))"), Err(CompileError::MismatchedGrouping));
    }
}
