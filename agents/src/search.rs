use crate::minimax::MinimaxEngine;
use crate::Policy;
use pursuit_core::{legal_moves, Coord, GridState, Role, Score};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

pub const DEFAULT_DEPTH: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// None only when the agent has no legal step.
    pub best_move: Option<Coord>,
    pub score: Option<Score>,
    pub depth: u8,
    pub nodes: u64,
}

/// Picks a real move by running `MinimaxEngine` on each candidate.
///
/// Candidates are shuffled before the scan and only a strictly better value
/// replaces the incumbent, so ties go to a uniformly random candidate.
pub struct MoveSelector {
    name: String,
    depth: u8,
    rng: StdRng,
}

impl MoveSelector {
    pub fn new(depth: u8) -> Self {
        Self::with_rng(depth, StdRng::from_entropy())
    }

    /// A selector whose tie-breaking is reproducible.
    pub fn with_seed(depth: u8, seed: u64) -> Self {
        Self::with_rng(depth, StdRng::seed_from_u64(seed))
    }

    fn with_rng(depth: u8, rng: StdRng) -> Self {
        MoveSelector {
            name: format!("Minimax(depth={})", depth),
            depth,
            rng,
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn search(&mut self, role: Role, state: &GridState) -> SearchResult {
        let extent = state.extent();
        let engine = MinimaxEngine::new(extent);
        let other = role.opponent_position_of(state);

        let mut candidates = legal_moves(role.position_of(state), extent).to_vec();
        candidates.shuffle(&mut self.rng);

        let mut result = SearchResult {
            best_move: candidates.first().copied(),
            score: None,
            depth: self.depth,
            nodes: 0,
        };
        let mut best = role.worst_score(extent);

        for &candidate in &candidates {
            let (evader, pursuer) = role.arrange(candidate, other);
            let value = engine.evaluate_counted(
                self.depth,
                role.opponent(),
                evader,
                pursuer,
                &mut result.nodes,
            );
            debug!(%role, %candidate, value, "scored candidate");

            if role.prefers(value, best) {
                best = value;
                result.best_move = Some(candidate);
                result.score = Some(value);
            }
        }

        result
    }

    /// The searched move, or the current position when there is nowhere to go.
    pub fn select_move(&mut self, role: Role, state: &GridState) -> Coord {
        self.search(role, state)
            .best_move
            .unwrap_or_else(|| role.position_of(state))
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Policy for MoveSelector {
    fn choose_move(&mut self, role: Role, state: &GridState) -> Coord {
        self.select_move(role, state)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pursuit_core::BoardExtent;
    use std::collections::HashSet;

    fn state(rows: u16, cols: u16, evader: (u16, u16), pursuer: (u16, u16)) -> GridState {
        GridState::new(
            BoardExtent::new(rows, cols).unwrap(),
            Coord::new(evader.0, evader.1),
            Coord::new(pursuer.0, pursuer.1),
        )
        .unwrap()
    }

    #[test]
    fn test_pursuer_takes_capture() {
        let state = state(5, 10, (2, 2), (2, 3));
        for seed in 0..8 {
            let result = MoveSelector::with_seed(DEFAULT_DEPTH, seed).search(Role::Pursuer, &state);
            assert_eq!(result.best_move, Some(Coord::new(2, 2)));
            assert_eq!(result.score, Some(0));
        }
    }

    #[test]
    fn test_ties_are_broken_randomly() {
        let state = state(5, 10, (0, 0), (4, 9));
        let picks: HashSet<Coord> = (0..32)
            .map(|seed| MoveSelector::with_seed(DEFAULT_DEPTH, seed).select_move(Role::Evader, &state))
            .collect();

        let expected: HashSet<Coord> = [Coord::new(1, 0), Coord::new(0, 1)].into();
        assert_eq!(picks, expected);
    }

    #[test]
    fn test_same_seed_same_move() {
        let state = state(6, 6, (2, 2), (4, 4));
        let a = MoveSelector::with_seed(2, 7).search(Role::Evader, &state);
        let b = MoveSelector::with_seed(2, 7).search(Role::Evader, &state);
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_candidates_stays_put() {
        let state = state(1, 1, (0, 0), (0, 0));
        let mut selector = MoveSelector::default();

        let result = selector.search(Role::Evader, &state);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, None);
        assert_eq!(result.nodes, 0);
        assert_eq!(selector.select_move(Role::Pursuer, &state), Coord::new(0, 0));
    }

    #[test]
    fn test_node_count() {
        // Two evader candidates, each answered by two pursuer replies.
        let state = state(5, 10, (0, 0), (4, 9));
        let result = MoveSelector::with_seed(1, 0).search(Role::Evader, &state);
        assert_eq!(result.nodes, 2 * (1 + 2));
        assert_eq!(result.depth, 1);
    }

    #[test]
    fn test_policy_name() {
        assert_eq!(MoveSelector::new(4).name(), "Minimax(depth=4)");
    }
}
