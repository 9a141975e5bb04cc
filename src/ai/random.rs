use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SearchError;
use crate::game::GameState;

use super::agent::Agent;

/// An agent that selects uniformly at random from legal columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded constructor for reproducible play.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, SearchError> {
        let actions = state.legal_actions();
        if actions.is_empty() {
            return Err(SearchError::NoLegalMove);
        }
        Ok(actions[self.rng.random_range(0..actions.len())])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_agent_selects_legal_action() {
        let mut agent = RandomAgent::new();
        let state = GameState::initial();
        let legal = state.legal_actions();

        for _ in 0..100 {
            let action = agent.select_action(&state).unwrap();
            assert!(legal.contains(&action), "Action {} is not legal", action);
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent1 = RandomAgent::new();
        let mut agent2 = RandomAgent::new();
        let mut state = GameState::initial();

        let mut turn = 0;
        while !state.is_terminal() {
            let action = if turn % 2 == 0 {
                agent1.select_action(&state).unwrap()
            } else {
                agent2.select_action(&state).unwrap()
            };
            state = state.apply_move(action).unwrap();
            turn += 1;
        }

        assert!(state.is_terminal());
        assert!(state.outcome().is_some());
    }

    #[test]
    fn test_errors_when_game_is_over() {
        let mut state = GameState::initial();
        // Red wins down column 0
        for _ in 0..3 {
            state = state.apply_move(0).unwrap();
            state = state.apply_move(1).unwrap();
        }
        state = state.apply_move(0).unwrap();
        assert!(state.is_terminal());

        let mut agent = RandomAgent::new();
        assert_eq!(agent.select_action(&state), Err(SearchError::NoLegalMove));
    }

    #[test]
    fn test_seeded_agents_agree() {
        let mut a = RandomAgent::with_seed(42);
        let mut b = RandomAgent::with_seed(42);
        let state = GameState::initial();
        for _ in 0..20 {
            assert_eq!(
                a.select_action(&state).unwrap(),
                b.select_action(&state).unwrap()
            );
        }
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
