//! Clause numbering and definition lettering.

use contract_core::Label;

use crate::sections::{classify_clause, ClauseRole};

/// Counters for one render pass.
///
/// A fresh state is built for every pass so repeated or concurrent renders
/// never share numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberingState {
    clause_counter: u32,
    definition_counter: u32,
    inside_definitions: bool,
}

impl NumberingState {
    pub fn new() -> Self {
        Self {
            clause_counter: 1,
            definition_counter: 1,
            inside_definitions: false,
        }
    }

    /// Compute the label of the next clause and advance the counters.
    ///
    /// The "Definitions" clause switches lettering on and restarts it at `a`,
    /// but is itself numbered. Once inside, every clause whose title mentions
    /// "definition" is lettered; the switch is never turned off in a pass.
    pub fn enter_clause(&mut self, title: Option<&str>) -> Label {
        match classify_clause(title) {
            ClauseRole::DefinitionsHeading => {
                self.inside_definitions = true;
                self.definition_counter = 1;
                self.next_number()
            }
            ClauseRole::Definition if self.inside_definitions => {
                let letter = self.definition_counter;
                self.definition_counter += 1;
                Label::Letter(letter)
            }
            ClauseRole::Definition | ClauseRole::Regular => self.next_number(),
        }
    }

    fn next_number(&mut self) -> Label {
        let number = self.clause_counter;
        self.clause_counter += 1;
        Label::Number(number)
    }

    /// Restore the start-of-pass state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn inside_definitions(&self) -> bool {
        self.inside_definitions
    }

    /// Number of clauses numbered so far
    pub fn numbered(&self) -> u32 {
        self.clause_counter - 1
    }

    /// Number of clauses lettered since the last "Definitions" clause
    pub fn lettered(&self) -> u32 {
        self.definition_counter - 1
    }
}

impl Default for NumberingState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(titles: &[&str]) -> Vec<String> {
        let mut state = NumberingState::new();
        titles
            .iter()
            .map(|t| state.enter_clause(Some(t)).to_string())
            .collect()
    }

    #[test]
    fn test_plain_clauses_are_numbered() {
        assert_eq!(labels(&["Scope", "Term", "Fees"]), ["1", "2", "3"]);
    }

    #[test]
    fn test_definitions_clause_is_numbered_not_lettered() {
        let mut state = NumberingState::new();
        assert_eq!(state.enter_clause(Some("Scope")), Label::Number(1));
        assert_eq!(state.enter_clause(Some("DEFINITIONS")), Label::Number(2));
        assert!(state.inside_definitions());
    }

    #[test]
    fn test_definition_clauses_are_lettered_after_entry() {
        assert_eq!(
            labels(&[
                "Definition of Terms",
                "Definitions",
                "Service Definition",
                "Term",
                "definition: Fees",
            ]),
            ["1", "2", "a", "3", "b"]
        );
    }

    #[test]
    fn test_second_definitions_clause_restarts_letters() {
        assert_eq!(
            labels(&["Definitions", "A definition", "Definitions", "B definition"]),
            ["1", "a", "2", "a"]
        );
    }

    #[test]
    fn test_untitled_clause_is_numbered() {
        let mut state = NumberingState::new();
        state.enter_clause(Some("Definitions"));
        assert_eq!(state.enter_clause(None), Label::Number(2));
    }

    #[test]
    fn test_reset() {
        let mut state = NumberingState::new();
        state.enter_clause(Some("Definitions"));
        state.enter_clause(Some("X definition"));
        assert_eq!(state.numbered(), 1);
        assert_eq!(state.lettered(), 1);

        state.reset();
        assert_eq!(state, NumberingState::new());
        assert_eq!(state.enter_clause(Some("X definition")), Label::Number(1));
    }
}
