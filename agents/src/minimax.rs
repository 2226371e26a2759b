use pursuit_core::{legal_moves, manhattan, BoardExtent, Coord, Role, Score};

/// Exhaustive depth-bounded minimax over Manhattan distance.
///
/// The engine holds only the board extent. Every call explores the full tree
/// below it; there is no pruning and nothing is cached between calls, so the
/// result depends on the arguments alone.
#[derive(Clone, Copy, Debug)]
pub struct MinimaxEngine {
    extent: BoardExtent,
}

impl MinimaxEngine {
    pub fn new(extent: BoardExtent) -> Self {
        Self { extent }
    }

    pub fn extent(&self) -> BoardExtent {
        self.extent
    }

    /// Scores a hypothetical position with `to_move` about to play and
    /// `depth` plies left to explore.
    ///
    /// Leaves (depth exhausted, capture, or a mover with no legal step)
    /// score as the static distance between the agents.
    pub fn evaluate(&self, depth: u8, to_move: Role, evader: Coord, pursuer: Coord) -> Score {
        let mut nodes = 0;
        self.evaluate_counted(depth, to_move, evader, pursuer, &mut nodes)
    }

    /// Same as `evaluate`, adding the number of visited nodes to `nodes`.
    pub fn evaluate_counted(
        &self,
        depth: u8,
        to_move: Role,
        evader: Coord,
        pursuer: Coord,
        nodes: &mut u64,
    ) -> Score {
        *nodes += 1;

        let static_value = manhattan(evader, pursuer) as Score;
        if depth == 0 || evader == pursuer {
            return static_value;
        }

        let (own, other) = to_move.arrange(evader, pursuer);
        let moves = legal_moves(own, self.extent);
        if moves.is_empty() {
            return static_value;
        }

        let mut best = to_move.worst_score(self.extent);
        for &to in moves.iter() {
            let (evader, pursuer) = to_move.arrange(to, other);
            let value = self.evaluate_counted(depth - 1, to_move.opponent(), evader, pursuer, nodes);
            if to_move.prefers(value, best) {
                best = value;
            }
        }

        best
    }
}
