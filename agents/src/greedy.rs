use crate::Policy;
use pursuit_core::{legal_moves, manhattan, Coord, GridState, Role, Score};

/// One-ply baseline: take the step with the best immediate distance.
///
/// Ignores the opponent's replies. Ties go to the earliest move in
/// up/down/left/right order.
pub struct GreedyPolicy {
    name: String,
}

impl GreedyPolicy {
    pub fn new() -> Self {
        GreedyPolicy {
            name: "Greedy".to_string(),
        }
    }

    pub fn choose_move(&self, role: Role, state: &GridState) -> Coord {
        let from = role.position_of(state);
        let target = role.opponent_position_of(state);

        let mut best_move = from;
        let mut best = role.worst_score(state.extent());

        for &candidate in legal_moves(from, state.extent()).iter() {
            let distance = manhattan(candidate, target) as Score;
            if role.prefers(distance, best) {
                best = distance;
                best_move = candidate;
            }
        }

        best_move
    }
}

impl Default for GreedyPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for GreedyPolicy {
    fn choose_move(&mut self, role: Role, state: &GridState) -> Coord {
        GreedyPolicy::choose_move(self, role, state)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pursuit_core::BoardExtent;

    fn state(evader: (u16, u16), pursuer: (u16, u16)) -> GridState {
        GridState::new(
            BoardExtent::new(5, 10).unwrap(),
            Coord::new(evader.0, evader.1),
            Coord::new(pursuer.0, pursuer.1),
        )
        .unwrap()
    }

    #[test]
    fn test_evader_moves_away() {
        let greedy = GreedyPolicy::new();
        // Down and right both close in; up and left both open up. Up comes first.
        let state = state((2, 2), (4, 4));
        assert_eq!(greedy.choose_move(Role::Evader, &state), Coord::new(1, 2));
    }

    #[test]
    fn test_pursuer_closes_in() {
        let greedy = GreedyPolicy::new();
        // Up and left both close in; up comes first.
        let state = state((0, 0), (4, 9));
        assert_eq!(greedy.choose_move(Role::Pursuer, &state), Coord::new(3, 9));
    }

    #[test]
    fn test_pursuer_captures_when_adjacent() {
        let greedy = GreedyPolicy::new();
        let state = state((2, 2), (2, 3));
        assert_eq!(greedy.choose_move(Role::Pursuer, &state), Coord::new(2, 2));
    }

    #[test]
    fn test_no_moves_stays_put() {
        let greedy = GreedyPolicy::new();
        let extent = BoardExtent::new(1, 1).unwrap();
        let state = GridState::corners(extent);
        assert_eq!(greedy.choose_move(Role::Evader, &state), Coord::new(0, 0));
    }
}
