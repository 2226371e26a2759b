use crate::Policy;
use pursuit_core::{BoardExtent, Coord, Direction, GridState, Role};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

/// Undirected wandering: draw one of the four directions uniformly.
///
/// A draw that would leave the board is not retried; the agent stays where it is.
pub struct RandomWalkPolicy {
    name: String,
    rng: StdRng,
}

impl RandomWalkPolicy {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        RandomWalkPolicy {
            name: "Random".to_string(),
            rng,
        }
    }

    pub fn choose_move(&mut self, from: Coord, extent: BoardExtent) -> Coord {
        let direction = Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())];

        match from.step(direction).filter(|&to| extent.contains(to)) {
            Some(to) => to,
            None => {
                trace!(%from, ?direction, "random step left the board, staying put");
                from
            }
        }
    }
}

impl Default for RandomWalkPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for RandomWalkPolicy {
    fn choose_move(&mut self, role: Role, state: &GridState) -> Coord {
        RandomWalkPolicy::choose_move(self, role.position_of(state), state.extent())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
