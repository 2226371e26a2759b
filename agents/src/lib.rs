pub mod greedy;
pub mod minimax;
pub mod random;
pub mod search;

use pursuit_core::{Coord, GridState, Role};

/// Something that picks the next cell for an agent.
pub trait Policy {
    /// Returns the destination for `role`. Staying in place is a valid answer.
    fn choose_move(&mut self, role: Role, state: &GridState) -> Coord;

    /// Get the policy's name
    fn name(&self) -> &str;
}

pub use greedy::GreedyPolicy;
pub use minimax::MinimaxEngine;
pub use random::RandomWalkPolicy;
pub use search::{MoveSelector, SearchResult, DEFAULT_DEPTH};
