use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SearchError;
use crate::game::{Board, GameState, Player, COLS};

use super::agent::Agent;
use super::heuristic::{Heuristic, WindowHeuristic};

/// Default search depth in plies.
pub const DEFAULT_DEPTH: usize = 5;

/// Value of a position the maximizing side has won. Large enough that no
/// sum of heuristic terms can reach it.
pub const WIN_VALUE: f64 = 10_000.0;

/// A move chosen at an interior search node.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub column: usize,
    pub value: f64,
    /// Running best value at the moment each column last improved it.
    /// Columns that never improved the running best keep the ±∞ sentinel.
    /// Diagnostic only; the search never reads it.
    pub trace: [f64; COLS],
}

/// Result of evaluating one search node.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult {
    /// Interior node: a column was chosen.
    Decision(Decision),
    /// Terminal position or depth cutoff; there is no move to report.
    Leaf { value: f64 },
}

impl SearchResult {
    pub fn value(&self) -> f64 {
        match self {
            SearchResult::Decision(decision) => decision.value,
            SearchResult::Leaf { value } => *value,
        }
    }

    pub fn column(&self) -> Option<usize> {
        match self {
            SearchResult::Decision(decision) => Some(decision.column),
            SearchResult::Leaf { .. } => None,
        }
    }
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// The search is single-threaded and runs to completion once invoked;
/// every recursion frame owns an independent copy of its board, so the
/// live board handed to [`MinimaxAgent::decide`] is never mutated.
pub struct MinimaxAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
    rng: StdRng,
    last_decision: Option<Decision>,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        Self::with_rng(depth, StdRng::from_os_rng())
    }

    /// Seeded constructor for reproducible play.
    pub fn with_seed(depth: usize, seed: u64) -> Self {
        Self::with_rng(depth, StdRng::seed_from_u64(seed))
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent {
            depth,
            heuristic,
            rng: StdRng::from_os_rng(),
            last_decision: None,
        }
    }

    fn with_rng(depth: usize, rng: StdRng) -> Self {
        MinimaxAgent {
            depth,
            heuristic: Box::new(WindowHeuristic),
            rng,
            last_decision: None,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Choose a column for `player` on `board` at the configured depth,
    /// searching the full (−∞, +∞) window.
    ///
    /// Errors with [`SearchError::NoLegalMove`] on a finished position;
    /// callers should check `is_terminal` first.
    pub fn decide(&mut self, board: &Board, player: Player) -> Result<Decision, SearchError> {
        let valid = board.valid_columns();
        if valid.is_empty() || board.is_terminal() {
            return Err(SearchError::NoLegalMove);
        }

        let result = self.search(
            board,
            player,
            self.depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            true,
        );
        let decision = match result {
            SearchResult::Decision(decision) => decision,
            // Depth 0: no lookahead ranked the columns, fall back to a
            // uniformly random legal one.
            SearchResult::Leaf { value } => Decision {
                column: valid[self.rng.random_range(0..valid.len())],
                value,
                trace: [f64::NEG_INFINITY; COLS],
            },
        };

        self.last_decision = Some(decision.clone());
        Ok(decision)
    }

    /// Minimax over hypothetical boards. `player` is the side being
    /// optimized for; `maximizing` tells whose turn it is at this node.
    ///
    /// Won positions count ±[`WIN_VALUE`], draws 0; at depth exhaustion the
    /// heuristic stands in for the unexplored subtree. Sibling columns stop
    /// being examined once `alpha >= beta`, which cannot change the chosen
    /// column or value, only the work done.
    pub fn search(
        &mut self,
        board: &Board,
        player: Player,
        depth: usize,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> SearchResult {
        if board.is_terminal() {
            let value = if board.has_four_in_a_row(player.to_cell()) {
                WIN_VALUE
            } else if board.has_four_in_a_row(player.other().to_cell()) {
                -WIN_VALUE
            } else {
                0.0
            };
            return SearchResult::Leaf { value };
        }

        if depth == 0 {
            return SearchResult::Leaf {
                value: self.heuristic.evaluate(board, player),
            };
        }

        let valid = board.valid_columns();

        if maximizing {
            let mut value = f64::NEG_INFINITY;
            let mut trace = [f64::NEG_INFINITY; COLS];
            let mut best = valid[self.rng.random_range(0..valid.len())];

            for &col in &valid {
                let mut child = *board;
                child
                    .drop_piece(col, player.to_cell())
                    .expect("column came from valid_columns");
                let score = self.search(&child, player, depth - 1, alpha, beta, false).value();

                if score > value {
                    value = score;
                    best = col;
                    trace[col] = value;
                }
                alpha = alpha.max(value);
                if alpha >= beta {
                    break;
                }
            }

            SearchResult::Decision(Decision {
                column: best,
                value,
                trace,
            })
        } else {
            let mut value = f64::INFINITY;
            let mut trace = [f64::INFINITY; COLS];
            let mut best = valid[self.rng.random_range(0..valid.len())];

            for &col in &valid {
                let mut child = *board;
                child
                    .drop_piece(col, player.other().to_cell())
                    .expect("column came from valid_columns");
                let score = self.search(&child, player, depth - 1, alpha, beta, true).value();

                if score < value {
                    value = score;
                    best = col;
                    trace[col] = value;
                }
                beta = beta.min(value);
                if alpha >= beta {
                    break;
                }
            }

            SearchResult::Decision(Decision {
                column: best,
                value,
                trace,
            })
        }
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, SearchError> {
        let decision = self.decide(state.board(), state.current_player())?;
        Ok(decision.column)
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn last_decision(&self) -> Option<&Decision> {
        self.last_decision.as_ref()
    }
}
