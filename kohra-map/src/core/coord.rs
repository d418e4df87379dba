//! Grid coordinate type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell position as (row, column), row 0 at the top of the map.
///
/// Plain value type: compared, hashed, and ordered by value. Signed so that
/// neighbor arithmetic at the map edge never wraps; out-of-range coordinates
/// are rejected by the grid's bounds checks, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// The four cardinal offsets in the fixed expansion order:
    /// Up, Right, Down, Left. Searches that expand in insertion order
    /// inherit their tie-breaking from this ordering.
    pub const OFFSETS4: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another coordinate.
    #[inline]
    pub fn manhattan(&self, other: &Coord) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The coordinate one step away at the given offset.
    #[inline]
    pub fn offset(&self, dr: i32, dc: i32) -> Coord {
        Coord::new(self.row + dr, self.col + dc)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        let a = Coord::new(0, 0);
        let b = Coord::new(2, 3);
        assert_eq!(a.manhattan(&b), 5);
        assert_eq!(b.manhattan(&a), 5);
        assert_eq!(a.manhattan(&a), 0);
    }

    #[test]
    fn test_offsets_order_is_up_right_down_left() {
        let c = Coord::new(5, 5);
        let stepped: Vec<Coord> = Coord::OFFSETS4
            .iter()
            .map(|&(dr, dc)| c.offset(dr, dc))
            .collect();
        assert_eq!(
            stepped,
            vec![
                Coord::new(4, 5),
                Coord::new(5, 6),
                Coord::new(6, 5),
                Coord::new(5, 4),
            ]
        );
    }
}
