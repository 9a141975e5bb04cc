use crate::game::{Board, Cell, Player, COLS, ROWS, WINDOW_LEN};

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> f64;
}

/// Weight of each own piece in the center column. More winning lines pass
/// through the center than through any other column.
const CENTER_WEIGHT: f64 = 10.0;

/// Default heuristic that scans all 4-cell windows and scores threats.
///
/// Only meaningful on non-terminal boards; the search consults it at the
/// depth cutoff, never at won/drawn positions.
pub struct WindowHeuristic;

impl WindowHeuristic {
    /// Score a single window from its piece counts. An opponent three with an
    /// open cell must outweigh any sum of positive terms, so the search
    /// prefers blocking over building.
    fn evaluate_window(own: usize, opp: usize, empty: usize) -> f64 {
        let mut score = 0.0;

        if own == 4 {
            score += 50.0;
        } else if own == 3 && empty == 1 {
            score += 25.0;
        } else if own == 2 && empty == 2 {
            score += 10.0;
        }

        if opp == 3 && empty == 1 {
            score -= 1000.0;
        } else if opp == 2 && empty == 2 {
            score -= 50.0;
        }

        score
    }

    fn window(
        board: &Board,
        own_cell: Cell,
        opp_cell: Cell,
        cells: impl Iterator<Item = (usize, usize)>,
    ) -> f64 {
        let mut own = 0;
        let mut opp = 0;
        let mut empty = 0;
        for (row, col) in cells {
            match board.get(row, col) {
                c if c == own_cell => own += 1,
                c if c == opp_cell => opp += 1,
                _ => empty += 1,
            }
        }
        Self::evaluate_window(own, opp, empty)
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();
        let mut score = 0.0;

        // Center column occupancy bonus
        let center = COLS / 2;
        for row in 0..ROWS {
            if board.get(row, center) == own_cell {
                score += CENTER_WEIGHT;
            }
        }

        // Horizontal windows
        for row in 0..ROWS {
            for col in 0..=COLS - WINDOW_LEN {
                score += Self::window(
                    board,
                    own_cell,
                    opp_cell,
                    (0..WINDOW_LEN).map(|i| (row, col + i)),
                );
            }
        }

        // Vertical windows
        for col in 0..COLS {
            for row in 0..=ROWS - WINDOW_LEN {
                score += Self::window(
                    board,
                    own_cell,
                    opp_cell,
                    (0..WINDOW_LEN).map(|i| (row + i, col)),
                );
            }
        }

        // Rising diagonals (/)
        for row in 0..=ROWS - WINDOW_LEN {
            for col in 0..=COLS - WINDOW_LEN {
                score += Self::window(
                    board,
                    own_cell,
                    opp_cell,
                    (0..WINDOW_LEN).map(|i| (row + i, col + i)),
                );
            }
        }

        // Falling diagonals (\)
        for row in 0..=ROWS - WINDOW_LEN {
            for col in 0..=COLS - WINDOW_LEN {
                score += Self::window(
                    board,
                    own_cell,
                    opp_cell,
                    (0..WINDOW_LEN).map(|i| (row + WINDOW_LEN - 1 - i, col + i)),
                );
            }
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn window_scores_match_weights() {
        assert_eq!(WindowHeuristic::evaluate_window(4, 0, 0), 50.0);
        assert_eq!(WindowHeuristic::evaluate_window(3, 0, 1), 25.0);
        assert_eq!(WindowHeuristic::evaluate_window(2, 0, 2), 10.0);
        assert_eq!(WindowHeuristic::evaluate_window(0, 3, 1), -1000.0);
        assert_eq!(WindowHeuristic::evaluate_window(0, 2, 2), -50.0);
    }

    #[test]
    fn blocked_window_scores_zero() {
        // A window already containing both colors is dead for everyone
        assert_eq!(WindowHeuristic::evaluate_window(2, 1, 1), 0.0);
        assert_eq!(WindowHeuristic::evaluate_window(1, 3, 0), 0.0);
    }

    #[test]
    fn heuristic_empty_board_is_zero() {
        let board = Board::new();
        let h = WindowHeuristic;
        assert_eq!(h.evaluate(&board, Player::Red), 0.0);
        assert_eq!(h.evaluate(&board, Player::Yellow), 0.0);
    }

    #[test]
    fn heuristic_center_preference() {
        let h = WindowHeuristic;
        let mut board_center = Board::new();
        board_center.drop_piece(3, Cell::Red).unwrap();
        let mut board_edge = Board::new();
        board_edge.drop_piece(0, Cell::Red).unwrap();

        let score_center = h.evaluate(&board_center, Player::Red);
        let score_edge = h.evaluate(&board_edge, Player::Red);
        assert!(
            score_center > score_edge,
            "Center ({score_center}) should score higher than edge ({score_edge})"
        );
    }

    #[test]
    fn heuristic_three_in_a_row_scores_high() {
        let h = WindowHeuristic;
        let mut board = Board::new();
        board.drop_piece(0, Cell::Red).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();
        board.drop_piece(2, Cell::Red).unwrap();
        // 3 red in a row with the completing window open: +25 for the open
        // three, +10 for the trailing open pair
        let score = h.evaluate(&board, Player::Red);
        assert_eq!(score, 35.0);
    }

    #[test]
    fn heuristic_opponent_threat_dominates() {
        let h = WindowHeuristic;
        let mut board = Board::new();
        // Yellow has a three with its extension at column 3 still open
        board.drop_piece(0, Cell::Yellow).unwrap();
        board.drop_piece(1, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(6, Cell::Red).unwrap();

        let score = h.evaluate(&board, Player::Red);
        assert!(
            score <= -1000.0,
            "An opponent open three must dominate, got {score}"
        );
    }

    #[test]
    fn heuristic_is_relative_to_the_asked_player() {
        let h = WindowHeuristic;
        let mut board = Board::new();
        board.drop_piece(4, Cell::Red).unwrap();
        board.drop_piece(5, Cell::Red).unwrap();

        assert!(h.evaluate(&board, Player::Red) > 0.0);
        assert!(h.evaluate(&board, Player::Yellow) < 0.0);
    }
}
