use thiserror::Error;

/// Reasons a pattern can fail to compile into a NFA.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The pattern did not pass the syntax check.
    #[error("invalid regex syntax: `{0}`")]
    Syntax(String),

    /// There were no tokens to build a syntax tree from.
    #[error("empty expression, there is nothing to build a syntax tree from")]
    EmptyExpression,

    /// A closing parenthesis without an opening one, or the other way around.
    #[error("mismatched parenthesis in regex")]
    MismatchedGrouping,

    /// An operator was found with too few operands to apply it to.
    #[error("operator `{0}` is missing an operand")]
    MissingOperand(char),

    /// Tokens left over after the syntax tree was complete.
    #[error("{0} token(s) left over after building the syntax tree")]
    TrailingTokens(usize),

    /// A backpatch slot was never resolved during construction.
    #[error("state {0} was left with an unresolved target")]
    UnresolvedPlaceholder(usize),
}
