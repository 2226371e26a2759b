use crate::error::{GridError, Result};
use std::fmt;
use std::str::FromStr;

/// A cell on the board, addressed by row and column from the top-left corner.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coord {
    pub row: u16,
    pub col: u16,
}

impl Coord {
    /// Creates a coordinate. Bounds are checked against a `BoardExtent`, not here.
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Returns the neighbouring cell in `direction`, or None if it would
    /// leave the non-negative quadrant.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Self { row, col })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parses `"row,col"`, e.g. `"4,9"`.
impl FromStr for Coord {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || GridError::InvalidCoord(s.to_string());
        let (row, col) = s.split_once(',').ok_or_else(invalid)?;
        let row = row.trim().parse().map_err(|_| invalid())?;
        let col = col.trim().parse().map_err(|_| invalid())?;
        Ok(Self { row, col })
    }
}

/// The four orthogonal steps an agent can take.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Canonical order used by move generation and tie-breaking.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the (row, col) offset of this direction.
    pub const fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Size of the board. Both dimensions are at least 1.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct BoardExtent {
    rows: u16,
    cols: u16,
}

impl BoardExtent {
    /// Creates an extent, rejecting boards without any cells.
    pub fn new(rows: u16, cols: u16) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyBoard { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub const fn rows(self) -> u16 {
        self.rows
    }

    pub const fn cols(self) -> u16 {
        self.cols
    }

    /// Returns true if `coord` lies in `[0, rows) x [0, cols)`.
    pub const fn contains(self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Fails with `OutOfBounds` unless `coord` is on the board.
    pub fn check(self, coord: Coord) -> Result<Coord> {
        if self.contains(coord) {
            Ok(coord)
        } else {
            Err(GridError::OutOfBounds {
                position: coord,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Largest Manhattan distance between two cells of this board.
    pub const fn max_distance(self) -> u32 {
        (self.rows as u32 - 1) + (self.cols as u32 - 1)
    }

    /// The opposite corner from the origin.
    pub const fn far_corner(self) -> Coord {
        Coord::new(self.rows - 1, self.cols - 1)
    }
}

/// The classic 5x10 board.
impl Default for BoardExtent {
    fn default() -> Self {
        Self { rows: 5, cols: 10 }
    }
}

impl fmt::Display for BoardExtent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Search value. Real values are Manhattan distances; sentinels sit outside
/// `[0, max_distance]`.
pub type Score = i32;

/// One of the two agents on the board.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Role {
    /// Tries to maximize distance.
    Evader,
    /// Tries to minimize distance.
    Pursuer,
}

impl Role {
    /// Returns the other agent.
    pub const fn opponent(self) -> Self {
        match self {
            Role::Evader => Role::Pursuer,
            Role::Pursuer => Role::Evader,
        }
    }

    /// Returns true if `candidate` is strictly better than `incumbent` for this role.
    pub const fn prefers(self, candidate: Score, incumbent: Score) -> bool {
        match self {
            Role::Evader => candidate > incumbent,
            Role::Pursuer => candidate < incumbent,
        }
    }

    /// A value every reachable score beats, for seeding a best-so-far search.
    pub const fn worst_score(self, extent: BoardExtent) -> Score {
        match self {
            Role::Evader => -1,
            Role::Pursuer => extent.max_distance() as Score + 1,
        }
    }

    /// Orders `own` and `other` as `(evader, pursuer)`, where `own` belongs to this role.
    pub const fn arrange(self, own: Coord, other: Coord) -> (Coord, Coord) {
        match self {
            Role::Evader => (own, other),
            Role::Pursuer => (other, own),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Role::Evader => "evader",
            Role::Pursuer => "pursuer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "evader" => Ok(Role::Evader),
            "pursuer" => Ok(Role::Pursuer),
            _ => Err(GridError::UnknownRole(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_opponent() {
        assert_eq!(Role::Evader.opponent(), Role::Pursuer);
        assert_eq!(Role::Pursuer.opponent(), Role::Evader);
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("evader".parse::<Role>().unwrap(), Role::Evader);
        assert_eq!("Pursuer".parse::<Role>().unwrap(), Role::Pursuer);

        let err = "cat".parse::<Role>().unwrap_err();
        assert_eq!(err, GridError::UnknownRole("cat".to_string()));
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_worst_score_is_outside_distance_range() {
        let extent = BoardExtent::new(5, 10).unwrap();
        assert_eq!(extent.max_distance(), 13);
        assert!(Role::Evader.worst_score(extent) < 0);
        assert!(Role::Pursuer.worst_score(extent) > 13);
    }

    #[test]
    fn test_prefers_is_strict() {
        assert!(Role::Evader.prefers(3, 2));
        assert!(!Role::Evader.prefers(2, 2));
        assert!(Role::Pursuer.prefers(1, 2));
        assert!(!Role::Pursuer.prefers(2, 2));
    }

    #[test]
    fn test_extent_rejects_empty_board() {
        assert_eq!(
            BoardExtent::new(0, 4),
            Err(GridError::EmptyBoard { rows: 0, cols: 4 })
        );
        assert!(BoardExtent::new(3, 0).is_err());
        assert!(BoardExtent::new(1, 1).is_ok());
    }

    #[test]
    fn test_coord_step() {
        let origin = Coord::new(0, 0);
        assert_eq!(origin.step(Direction::Up), None);
        assert_eq!(origin.step(Direction::Left), None);
        assert_eq!(origin.step(Direction::Down), Some(Coord::new(1, 0)));
        assert_eq!(origin.step(Direction::Right), Some(Coord::new(0, 1)));
    }

    #[test]
    fn test_coord_parse() {
        assert_eq!("4,9".parse::<Coord>().unwrap(), Coord::new(4, 9));
        assert_eq!(" 2 , 3 ".parse::<Coord>().unwrap(), Coord::new(2, 3));
        assert!(matches!(
            "4;9".parse::<Coord>(),
            Err(GridError::InvalidCoord(_))
        ));
        assert!("-1,2".parse::<Coord>().is_err());
    }
}
