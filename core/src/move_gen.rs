use crate::types::{BoardExtent, Coord, Direction};

const MAX_MOVES: usize = 4;

/// Destinations reachable in one step, with a fixed capacity to avoid allocations.
#[derive(Clone, Copy, Debug)]
pub struct MoveList {
    moves: [Coord; MAX_MOVES],
    count: usize,
}

impl MoveList {
    /// Creates an empty move list.
    pub const fn new() -> Self {
        Self {
            moves: [Coord::new(0, 0); MAX_MOVES],
            count: 0,
        }
    }

    /// Adds a destination to the list.
    pub fn push(&mut self, to: Coord) {
        debug_assert!(self.count < MAX_MOVES, "Move list overflow");
        self.moves[self.count] = to;
        self.count += 1;
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn as_slice(&self) -> &[Coord] {
        &self.moves[..self.count]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coord> {
        self.as_slice().iter()
    }

    pub fn contains(&self, to: &Coord) -> bool {
        self.as_slice().contains(to)
    }

    /// Copies the moves into a vector, e.g. for shuffling.
    pub fn to_vec(&self) -> Vec<Coord> {
        self.as_slice().to_vec()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl From<MoveList> for Vec<Coord> {
    fn from(list: MoveList) -> Self {
        list.to_vec()
    }
}

/// Generates the orthogonal neighbours of `from` that lie on the board,
/// in `Direction::ALL` order (up, down, left, right).
///
/// A 1x1 board yields an empty list.
pub fn legal_moves(from: Coord, extent: BoardExtent) -> MoveList {
    let mut moves = MoveList::new();

    for direction in Direction::ALL {
        if let Some(to) = from.step(direction) {
            if extent.contains(to) {
                moves.push(to);
            }
        }
    }

    moves
}
