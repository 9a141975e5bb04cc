mod agent;
mod heuristic;
mod minimax;
mod random;

pub use agent::Agent;
pub use heuristic::{Heuristic, WindowHeuristic};
pub use minimax::{Decision, MinimaxAgent, SearchResult, DEFAULT_DEPTH, WIN_VALUE};
pub use random::RandomAgent;
