use crate::distance::manhattan;
use crate::error::Result;
use crate::types::{BoardExtent, Coord, Role};

/// Board extent plus the positions of both agents.
/// Values are copied into searches, so hypothetical play never touches the live state.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct GridState {
    extent: BoardExtent,
    evader: Coord,
    pursuer: Coord,
}

impl GridState {
    /// Creates a state, rejecting agents placed off the board.
    pub fn new(extent: BoardExtent, evader: Coord, pursuer: Coord) -> Result<Self> {
        Ok(Self {
            extent,
            evader: extent.check(evader)?,
            pursuer: extent.check(pursuer)?,
        })
    }

    /// The conventional opening: evader at the origin, pursuer in the far corner.
    pub fn corners(extent: BoardExtent) -> Self {
        Self {
            extent,
            evader: Coord::new(0, 0),
            pursuer: extent.far_corner(),
        }
    }

    pub fn extent(&self) -> BoardExtent {
        self.extent
    }

    pub fn evader(&self) -> Coord {
        self.evader
    }

    pub fn pursuer(&self) -> Coord {
        self.pursuer
    }

    /// Returns true when both agents share a cell.
    pub fn is_capture(&self) -> bool {
        self.evader == self.pursuer
    }

    /// Current Manhattan distance between the agents.
    pub fn distance(&self) -> u32 {
        manhattan(self.evader, self.pursuer)
    }
}

impl Role {
    /// Where this agent currently stands.
    pub fn position_of(self, state: &GridState) -> Coord {
        match self {
            Role::Evader => state.evader,
            Role::Pursuer => state.pursuer,
        }
    }

    /// Where the other agent currently stands.
    pub fn opponent_position_of(self, state: &GridState) -> Coord {
        self.opponent().position_of(state)
    }

    /// Returns a copy of `state` with this agent moved to `to`.
    pub fn apply_move(self, state: &GridState, to: Coord) -> Result<GridState> {
        let to = state.extent.check(to)?;
        let mut next = *state;
        match self {
            Role::Evader => next.evader = to,
            Role::Pursuer => next.pursuer = to,
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;

    fn extent() -> BoardExtent {
        BoardExtent::new(5, 10).unwrap()
    }

    #[test]
    fn test_corners() {
        let state = GridState::corners(extent());
        assert_eq!(state.evader(), Coord::new(0, 0));
        assert_eq!(state.pursuer(), Coord::new(4, 9));
        assert_eq!(state.distance(), 13);
        assert!(!state.is_capture());
    }

    #[test]
    fn test_capture_reported_at_construction() {
        let state = GridState::new(extent(), Coord::new(2, 3), Coord::new(2, 3)).unwrap();
        assert!(state.is_capture());
        assert_eq!(state.distance(), 0);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let err = GridState::new(extent(), Coord::new(5, 0), Coord::new(0, 0)).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                position: Coord::new(5, 0),
                rows: 5,
                cols: 10,
            }
        );
        assert!(err.is_configuration());
        assert!(GridState::new(extent(), Coord::new(0, 0), Coord::new(0, 10)).is_err());
    }

    #[test]
    fn test_role_accessors() {
        let state = GridState::corners(extent());
        assert_eq!(Role::Evader.position_of(&state), Coord::new(0, 0));
        assert_eq!(Role::Evader.opponent_position_of(&state), Coord::new(4, 9));
        assert_eq!(Role::Pursuer.position_of(&state), Coord::new(4, 9));
        assert_eq!(Role::Pursuer.opponent_position_of(&state), Coord::new(0, 0));
    }

    #[test]
    fn test_apply_move_leaves_original_untouched() {
        let state = GridState::corners(extent());
        let next = Role::Pursuer.apply_move(&state, Coord::new(3, 9)).unwrap();

        assert_eq!(next.pursuer(), Coord::new(3, 9));
        assert_eq!(next.evader(), state.evader());
        assert_eq!(state.pursuer(), Coord::new(4, 9));

        assert!(Role::Evader.apply_move(&state, Coord::new(9, 9)).is_err());
    }
}
