use super::machine::{StateId, StateRegister, NFA};
use crate::regex::ast::Node;
use crate::regex::error::CompileError;

/// Thompson's construction over a syntax tree.
///
/// Every node is compiled given its continuation, the state to move on to
/// once the node has matched. The first continuation is the match state,
/// so the NFA is built from its end towards its start.
pub struct NFABuilder {
    pub register: StateRegister,
}

impl NFABuilder {
    pub fn new() -> NFABuilder {
        NFABuilder {
            register: StateRegister::new(),
        }
    }

    /// Compile the whole tree, ending in the single match state.
    pub fn finalize(mut self, tree: &Node) -> Result<NFA, CompileError> {
        let match_state = self.register.match_state();
        let start_state = self.compile(tree, match_state);

        self.register.into_nfa(start_state)
    }

    /// Create the states for `node`, leading into `continuation`. Returns the
    /// entry state of the node.
    pub fn compile(&mut self, node: &Node, continuation: StateId) -> StateId {
        match node {
            Node::Literal(c) => self.register.new_consume(*c, continuation),
            // The right hand side goes first, its entry is where the left
            // hand side continues.
            Node::Concat(left, right) => {
                let right_start = self.compile(right, continuation);
                self.compile(left, right_start)
            }
            Node::Or(left, right) => {
                let left_start = self.compile(left, continuation);
                let right_start = self.compile(right, continuation);
                self.register.new_split(left_start, right_start)
            }
            Node::Kleene(child) => self.compile_zero_or_more(child, continuation),
            Node::Question(child) => self.compile_zero_or_one(child, continuation),
        }
    }

    /// The body loops back to a split choosing between another round and
    /// the continuation. The split needs the entry of the body, which needs
    /// a continuation of its own, so the body leads into a placeholder
    /// patched to the split afterwards.
    fn compile_zero_or_more(&mut self, child: &Node, continuation: StateId) -> StateId {
        let placeholder = self.register.new_placeholder();
        let body_start = self.compile(child, placeholder);
        let split = self.register.new_split(body_start, continuation);
        self.register.backpatch(placeholder, split);

        placeholder
    }

    fn compile_zero_or_one(&mut self, child: &Node, continuation: StateId) -> StateId {
        let placeholder = self.register.new_placeholder();
        self.register.backpatch(placeholder, continuation);
        let body_start = self.compile(child, placeholder);

        self.register.new_split(body_start, continuation)
    }
}
