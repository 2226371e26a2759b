use crate::types::Coord;

/// Manhattan distance between two cells: `|dr| + |dc|`.
///
/// This is the only evaluation signal: the evader wants it large, the pursuer small.
pub fn manhattan(a: Coord, b: Coord) -> u32 {
    u32::from(a.row.abs_diff(b.row)) + u32::from(a.col.abs_diff(b.col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan() {
        assert_eq!(manhattan(Coord::new(0, 0), Coord::new(4, 9)), 13);
        assert_eq!(manhattan(Coord::new(3, 1), Coord::new(1, 3)), 4);
        assert_eq!(manhattan(Coord::new(2, 2), Coord::new(2, 2)), 0);
    }

    #[test]
    fn test_manhattan_metric_properties() {
        let cells: Vec<Coord> = (0..4)
            .flat_map(|row| (0..5).map(move |col| Coord::new(row, col)))
            .collect();

        for &a in &cells {
            assert_eq!(manhattan(a, a), 0);
            for &b in &cells {
                assert_eq!(manhattan(a, b), manhattan(b, a));
                assert_eq!(manhattan(a, b) == 0, a == b);
                for &c in &cells {
                    assert!(manhattan(a, c) <= manhattan(a, b) + manhattan(b, c));
                }
            }
        }
    }
}
