use super::error::CompileError;
use super::token::Token;

/// A node in the abstract syntax tree of a regex.
///
/// There is no node for one or more (`+`), `A+` is built as `A*A` when the
/// tree is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Exactly one occurrence of the character.
    Literal(char),
    /// The left node followed by the right node.
    Concat(Box<Node>, Box<Node>),
    /// Either the left or the right node.
    Or(Box<Node>, Box<Node>),
    /// Zero or more repetitions.
    Kleene(Box<Node>),
    /// Zero or one occurrence.
    Question(Box<Node>),
}

impl Node {
    pub fn concat(left: Node, right: Node) -> Node {
        Node::Concat(Box::new(left), Box::new(right))
    }

    pub fn or(left: Node, right: Node) -> Node {
        Node::Or(Box::new(left), Box::new(right))
    }

    pub fn kleene(child: Node) -> Node {
        Node::Kleene(Box::new(child))
    }

    pub fn question(child: Node) -> Node {
        Node::Question(Box::new(child))
    }

    /// One or more, as zero or more followed by exactly one.
    ///
    /// The child is duplicated, so each level of nested `+` doubles the
    /// size of the compiled NFA. `((a+)+)+` is exponential in state count.
    pub fn plus(child: Node) -> Node {
        Node::concat(Node::kleene(child.clone()), child)
    }

    /// Build the syntax tree of a regex in postfix notation.
    ///
    /// All tokens must be consumed by the tree, anything left over means the
    /// postfix regex was ill formed.
    pub fn from_postfix(postfix: &[Token]) -> Result<Node, CompileError> {
        if postfix.is_empty() {
            return Err(CompileError::EmptyExpression);
        }

        let (node, residual) = Node::parse(postfix)?;
        if !residual.is_empty() {
            return Err(CompileError::TrailingTokens(residual.len()));
        }

        Ok(node)
    }

    /// Build a node from the end of `postfix`, returning it together with the
    /// tokens in front of it that it did not use.
    ///
    /// The operands of an operator come before it in postfix notation, so
    /// the right operand of a binary operator is built before the left.
    fn parse(postfix: &[Token]) -> Result<(Node, &[Token]), CompileError> {
        let (&last, rest) = match postfix.split_last() {
            Some(split) => split,
            None => return Err(CompileError::EmptyExpression),
        };

        match last {
            Token::Literal(c) => Ok((Node::Literal(c), rest)),
            Token::Concat | Token::Alternation => {
                let (right, rest) = Node::operand_of(last, rest)?;
                let (left, rest) = Node::operand_of(last, rest)?;

                let node = if last == Token::Concat {
                    Node::concat(left, right)
                } else {
                    Node::or(left, right)
                };
                Ok((node, rest))
            }
            Token::ZeroOrMore | Token::OneOrMore | Token::ZeroOrOne => {
                let (child, rest) = Node::operand_of(last, rest)?;

                let node = match last {
                    Token::ZeroOrMore => Node::kleene(child),
                    Token::OneOrMore => Node::plus(child),
                    _ => Node::question(child),
                };
                Ok((node, rest))
            }
            // Groups are gone after the conversion to postfix
            Token::OpenParen | Token::CloseParen => Err(CompileError::MismatchedGrouping),
        }
    }

    fn operand_of(operator: Token, postfix: &[Token]) -> Result<(Node, &[Token]), CompileError> {
        if postfix.is_empty() {
            return Err(CompileError::MissingOperand(operator.as_char()));
        }
        Node::parse(postfix)
    }
}
