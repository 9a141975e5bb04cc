use crate::error::SearchError;
use crate::game::GameState;

use super::minimax::Decision;

/// Universal interface for move selectors.
pub trait Agent {
    /// Select a column for the current player of `state`. Errors with
    /// [`SearchError::NoLegalMove`] when the position admits no move;
    /// callers should check `is_terminal` before asking.
    fn select_action(&mut self, state: &GameState) -> Result<usize, SearchError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Diagnostics from the most recent selection, for agents that search.
    fn last_decision(&self) -> Option<&Decision> {
        None
    }
}
