//! Game session controller: owns the live game state and the two move
//! selectors, and drives them ply by ply. The presentation layer consumes
//! the returned [`TurnRecord`]s and the session's state; it never touches
//! the board directly.

use crate::ai::{Agent, Decision};
use crate::error::SessionError;
use crate::game::{GameOutcome, GameState, Player};

/// One completed ply, with search diagnostics when the mover produced any.
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub player: Player,
    pub column: usize,
    pub decision: Option<Decision>,
}

/// Owns turn order and game-over detection for one match.
pub struct GameSession {
    state: GameState,
    red: Box<dyn Agent>,
    yellow: Box<dyn Agent>,
}

impl GameSession {
    /// Start a session. When `starting_player` is `None`, the first mover
    /// is drawn at random.
    pub fn new(
        red: Box<dyn Agent>,
        yellow: Box<dyn Agent>,
        starting_player: Option<Player>,
    ) -> Self {
        let first = starting_player.unwrap_or_else(|| {
            if rand::random() {
                Player::Red
            } else {
                Player::Yellow
            }
        });
        GameSession {
            state: GameState::with_starting_player(first),
            red,
            yellow,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn agent_name(&self, player: Player) -> &str {
        match player {
            Player::Red => self.red.name(),
            Player::Yellow => self.yellow.name(),
        }
    }

    /// Play a single ply: ask the side to move for a column and commit it
    /// to the live board.
    pub fn step(&mut self) -> Result<TurnRecord, SessionError> {
        if self.state.is_terminal() {
            return Err(SessionError::GameOver);
        }

        let player = self.state.current_player();
        let agent = match player {
            Player::Red => &mut self.red,
            Player::Yellow => &mut self.yellow,
        };

        let column = agent.select_action(&self.state)?;
        self.state
            .apply_move_mut(column)
            .map_err(|source| SessionError::IllegalMove { column, source })?;

        Ok(TurnRecord {
            player,
            column,
            decision: agent.last_decision().cloned(),
        })
    }

    /// Play the session to termination and return the outcome.
    pub fn run(&mut self) -> Result<GameOutcome, SessionError> {
        while !self.state.is_terminal() {
            self.step()?;
        }
        match self.state.outcome() {
            Some(outcome) => Ok(outcome),
            None => Err(SessionError::GameOver),
        }
    }
}
