use std::fmt;
use std::vec::Vec;

use log::trace;

use crate::regex::error::CompileError;

/// States are referenced by their id, which is their position in the
/// register that owns them.
pub type StateId = usize;

/// A state in a NFA (non-deterministic finite automaton).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Accepts exactly one character equal to the literal, then moves on to
    /// the out state.
    Consume(char, StateId),
    /// Connects to two states via empty/epsilon arrows.
    Split(StateId, StateId),
    /// A single empty/epsilon arrow whose target is only known after the
    /// state was created. The target is written exactly once.
    Placeholder(StateId),
    /// The special state representing a match to the regex. No outgoing
    /// arrows.
    Match,
}

/// What the simulation is fed: the next character of the input, or the
/// knowledge that there are no more characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Char(char),
    End,
}

/// The state register contains and owns states while a NFA is under
/// construction.
pub struct StateRegister {
    states: Vec<State>,
    // Placeholders that have not yet been given a target.
    unresolved: Vec<StateId>,
}

impl StateRegister {
    pub fn new() -> StateRegister {
        StateRegister {
            states: Vec::new(),
            unresolved: Vec::new(),
        }
    }

    /// Register a new state.
    /// Return the unique id of that state.
    fn new_state(&mut self, state: State) -> StateId {
        self.states.push(state);
        self.states.len() - 1
    }

    pub fn new_consume(&mut self, literal: char, out_state: StateId) -> StateId {
        self.new_state(State::Consume(literal, out_state))
    }

    pub fn new_split(&mut self, out_state_1: StateId, out_state_2: StateId) -> StateId {
        self.new_state(State::Split(out_state_1, out_state_2))
    }

    /// Register a placeholder with no target yet. Until `backpatch` is called
    /// it points to itself.
    pub fn new_placeholder(&mut self) -> StateId {
        let id = self.states.len();
        self.unresolved.push(id);
        self.new_state(State::Placeholder(id))
    }

    pub fn match_state(&mut self) -> StateId {
        self.new_state(State::Match)
    }

    /// Give an unresolved placeholder its target. Placeholders are only
    /// written once, so patching an already resolved one does nothing.
    pub fn backpatch(&mut self, placeholder: StateId, target: StateId) {
        if let Some(position) = self.unresolved.iter().position(|&id| id == placeholder) {
            self.unresolved.swap_remove(position);
            self.states[placeholder] = State::Placeholder(target);
        }
    }

    /// Hand the states over to an immutable NFA entered at `start_state`.
    pub fn into_nfa(self, start_state: StateId) -> Result<NFA, CompileError> {
        if let Some(&placeholder) = self.unresolved.first() {
            return Err(CompileError::UnresolvedPlaceholder(placeholder));
        }

        Ok(NFA {
            states: self.states,
            start_state,
        })
    }
}

/// A non-deterministic finite automaton.
///
/// Defined by all the states it contains, and the id of the entry point
/// (start state) of the NFA. Once built it is never modified, so it can be
/// simulated any number of times.
#[derive(Debug, Clone)]
pub struct NFA {
    states: Vec<State>,
    start_state: StateId,
}

impl NFA {
    pub fn start_state(&self) -> StateId {
        self.start_state
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn get_state(&self, state_id: StateId) -> Option<&State> {
        self.states.get(state_id)
    }

    /// Does the NFA accept the entire input?
    pub fn is_match(&self, input: &str) -> bool {
        let mut current_states: Vec<StateId> = vec![self.start_state];

        for character in input.chars() {
            current_states = self.advance(&current_states, Symbol::Char(character));

            // If there are no surviving states there is no need to continue
            // iterating over the characters.
            if current_states.is_empty() {
                return false;
            }
        }

        self.accepts(&current_states)
    }

    /// Is there a match starting at any position of the input?
    pub fn contains_match(&self, input: &str) -> bool {
        input
            .char_indices()
            .map(|(byte_index, _)| byte_index)
            .chain(std::iter::once(input.len()))
            .any(|byte_index| self.simulate(&input[byte_index..], false).is_some())
    }

    /// Simulate the NFA with a given input string, looking for a match on a
    /// prefix of it.
    ///
    /// The simulation can be in multiple NFA states at the same time.
    /// `greedy` controls wether or not we will match the tail of the regex
    /// greedily or not. If true the returned byte index will be the first
    /// character after the longest matching prefix of `input`, if `false`
    /// it will be the index after the shortest matching prefix.
    /// If no match returns `None`.
    pub fn simulate(&self, input: &str, greedy: bool) -> Option<usize> {
        let mut current_states: Vec<StateId> = vec![self.start_state];

        // Char byte index of the character after the longest matching prefix
        // found this far. The empty string is also considered a valid prefix,
        // so a result of `Some(0)` is a match on the empty string.
        let mut first_non_matching_char_index: Option<usize> = None;
        if self.accepts(&current_states) {
            first_non_matching_char_index = Some(0);
            if !greedy {
                return first_non_matching_char_index;
            }
        }

        for (byte_index, character) in input.char_indices() {
            current_states = self.advance(&current_states, Symbol::Char(character));
            trace!(
                "{} state(s) alive after {:?} at byte {}",
                current_states.len(),
                character,
                byte_index
            );

            if current_states.is_empty() {
                break;
            }

            if self.accepts(&current_states) {
                first_non_matching_char_index = Some(byte_index + character.len_utf8());
                if !greedy {
                    break;
                }
            }
        }

        first_non_matching_char_index
    }

    /// Would the NFA accept if the input ended now?
    fn accepts(&self, current_states: &[StateId]) -> bool {
        self.advance(current_states, Symbol::End)
            .iter()
            .any(|&state_id| self.states.get(state_id) == Some(&State::Match))
    }

    /// Feed one symbol to the simulation. Starting from `current_states`
    /// every empty arrow is followed until a state that needs input is
    /// reached. Those states are then given `symbol`, and the states they
    /// move on to are returned.
    ///
    /// Repetitions make the graph cyclic, so each state is visited at most
    /// once per call.
    fn advance(&self, current_states: &[StateId], symbol: Symbol) -> Vec<StateId> {
        let mut visited: Vec<bool> = vec![false; self.states.len()];
        let mut next_states: Vec<StateId> = Vec::with_capacity(current_states.len());
        let mut stack: Vec<StateId> = current_states.iter().rev().copied().collect();

        while let Some(state_id) = stack.pop() {
            match visited.get_mut(state_id) {
                Some(seen) if !*seen => *seen = true,
                _ => continue,
            }

            match self.states[state_id] {
                State::Consume(literal, out) => {
                    if symbol == Symbol::Char(literal) {
                        next_states.push(out);
                    }
                }
                State::Split(out_1, out_2) => {
                    stack.push(out_2);
                    stack.push(out_1);
                }
                State::Placeholder(out) => stack.push(out),
                State::Match => {
                    if symbol == Symbol::End {
                        next_states.push(state_id);
                    }
                }
            }
        }

        next_states
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            State::Consume(c, out) => write!(f, "Consume ({}) -> {}", c, out),
            State::Split(out_1, out_2) => write!(f, "Split {} <- () -> {}", out_1, out_2),
            State::Placeholder(out) => write!(f, "Placeholder () -> {}", out),
            State::Match => write!(f, "MATCH ()"),
        }
    }
}

impl fmt::Display for NFA {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (state_id, state) in self.states.iter().enumerate() {
            let marker = if state_id == self.start_state { ">" } else { " " };
            writeln!(f, "{}{:>4}: {}", marker, state_id, state)?;
        }
        Ok(())
    }
}
