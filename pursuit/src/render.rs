use crate::simulation::{MoveRecord, Phase};
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use pursuit_core::{Coord, GridState};
use std::io::{self, Write};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Cell {
    Empty,
    Evader,
    Pursuer,
    Capture,
}

impl Cell {
    fn at(state: &GridState, coord: Coord) -> Self {
        match (coord == state.evader(), coord == state.pursuer()) {
            (true, true) => Cell::Capture,
            (true, false) => Cell::Evader,
            (false, true) => Cell::Pursuer,
            (false, false) => Cell::Empty,
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Evader => 'E',
            Cell::Pursuer => 'P',
            Cell::Capture => 'X',
        }
    }

    fn color(self) -> Color {
        match self {
            Cell::Empty => Color::DarkGrey,
            Cell::Evader => Color::Green,
            Cell::Pursuer => Color::Red,
            Cell::Capture => Color::Yellow,
        }
    }
}

/// Plain rows of the board, one string per row, cells separated by spaces.
pub fn board_lines(state: &GridState) -> Vec<String> {
    let extent = state.extent();
    (0..extent.rows())
        .map(|row| {
            (0..extent.cols())
                .map(|col| Cell::at(state, Coord::new(row, col)).symbol().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

pub fn draw_board(out: &mut impl Write, state: &GridState) -> io::Result<()> {
    let extent = state.extent();

    for row in 0..extent.rows() {
        for col in 0..extent.cols() {
            let cell = Cell::at(state, Coord::new(row, col));
            queue!(
                out,
                SetForegroundColor(cell.color()),
                Print(cell.symbol()),
                ResetColor,
                Print(' ')
            )?;
        }
        queue!(out, Print('\n'))?;
    }

    out.flush()
}

pub fn header(record: &MoveRecord) -> String {
    let label = match record.phase {
        Phase::Wandering => "EVADER WANDERING",
        Phase::Pursuit => "PURSUIT",
    };
    format!(
        "--- [{}] Turn {} (round {}) | {} ({}) {} -> {} ---",
        label, record.phase_turn, record.round, record.role, record.policy, record.from, record.to
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pursuit_core::{BoardExtent, Role};

    #[test]
    fn test_board_lines() {
        let state = GridState::corners(BoardExtent::new(2, 3).unwrap());
        assert_eq!(board_lines(&state), vec!["E . .", ". . P"]);
    }

    #[test]
    fn test_capture_cell() {
        let extent = BoardExtent::new(1, 2).unwrap();
        let state = GridState::new(extent, Coord::new(0, 1), Coord::new(0, 1)).unwrap();
        assert_eq!(board_lines(&state), vec![". X"]);
    }

    #[test]
    fn test_header() {
        let record = MoveRecord {
            round: 33,
            phase: Phase::Pursuit,
            phase_turn: 3,
            role: Role::Pursuer,
            policy: "Minimax(depth=3)".to_string(),
            from: Coord::new(4, 9),
            to: Coord::new(3, 9),
        };
        assert_eq!(
            header(&record),
            "--- [PURSUIT] Turn 3 (round 33) | pursuer (Minimax(depth=3)) (4, 9) -> (3, 9) ---"
        );
    }
}
