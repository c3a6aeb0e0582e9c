use std::fmt;

/// A single token of a regex, either a literal character or one of the
/// supported operators.
///
/// The concatenation operator never appears in a user written pattern, it
/// is inserted between adjacent operands by `insert_concat`. Keeping it as
/// its own token means a literal `.` can not be mistaken for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Literal(char),
    Concat,
    Alternation,
    ZeroOrMore,
    OneOrMore,
    ZeroOrOne,
    OpenParen,
    CloseParen,
}

impl Token {
    /// The token a pattern character stands for.
    pub fn from_char(character: char) -> Token {
        match character {
            '|' => Token::Alternation,
            '*' => Token::ZeroOrMore,
            '+' => Token::OneOrMore,
            '?' => Token::ZeroOrOne,
            '(' => Token::OpenParen,
            ')' => Token::CloseParen,
            _ => Token::Literal(character),
        }
    }

    /// The character used when rendering the token.
    pub fn as_char(self) -> char {
        match self {
            Token::Literal(c) => c,
            Token::Concat => '.',
            Token::Alternation => '|',
            Token::ZeroOrMore => '*',
            Token::OneOrMore => '+',
            Token::ZeroOrOne => '?',
            Token::OpenParen => '(',
            Token::CloseParen => ')',
        }
    }

    pub fn is_literal(self) -> bool {
        matches!(self, Token::Literal(_))
    }

    /// One of the repetition operators `*`, `+` or `?`.
    pub fn is_unary(self) -> bool {
        matches!(self, Token::ZeroOrMore | Token::OneOrMore | Token::ZeroOrOne)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Split a pattern into its tokens.
pub fn tokenize(pattern: &str) -> Vec<Token> {
    pattern.chars().map(Token::from_char).collect()
}

/// Render a token stream back into a string, using `.` for concatenation.
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.as_char()).collect()
}
