//! Bounded board geometry.
//!
//! `Position` is a row/column pair constrained to the 8x8 board, ordered
//! row-major so board iteration is deterministic. `Direction` is an
//! unconstrained delta; stepping a position by a direction yields `None`
//! once the board edge is crossed.

/// A coordinate on the board. Row 0 is white's home rank, column 0 is the
/// a-file. Both components are always in `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: i8,
    column: i8,
}

impl Position {
    /// Creates a position from literal coordinates.
    ///
    /// Panics if either coordinate is outside `0..=7`; out-of-range input is
    /// a caller precondition violation, not a runtime condition.
    pub fn new(row: i8, column: i8) -> Self {
        assert!(
            (0..=7).contains(&row) && (0..=7).contains(&column),
            "position ({row}, {column}) is off the board"
        );
        Self { row, column }
    }

    /// Creates a position if both coordinates are in bounds.
    #[inline]
    pub fn checked(row: i8, column: i8) -> Option<Self> {
        if (0..=7).contains(&row) && (0..=7).contains(&column) {
            Some(Self { row, column })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    pub const fn column(self) -> i8 {
        self.column
    }

    /// Steps one direction unit away, or `None` past the board edge.
    #[inline]
    pub fn offset(self, direction: Direction) -> Option<Self> {
        Self::checked(
            self.row + direction.row_delta,
            self.column + direction.column_delta,
        )
    }
}

/// An integer row/column delta used for rays and single steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub row_delta: i8,
    pub column_delta: i8,
}

impl Direction {
    pub const ORTHOGONALS: [Direction; 4] = [
        Direction::new(1, 0),
        Direction::new(0, 1),
        Direction::new(-1, 0),
        Direction::new(0, -1),
    ];

    pub const DIAGONALS: [Direction; 4] = [
        Direction::new(1, -1),
        Direction::new(1, 1),
        Direction::new(-1, 1),
        Direction::new(-1, -1),
    ];

    #[inline]
    pub const fn new(row_delta: i8, column_delta: i8) -> Self {
        Self {
            row_delta,
            column_delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_stays_on_board() {
        let d4 = Position::new(3, 3);
        let moved = d4.offset(Direction::new(1, 1));
        assert_eq!(moved, Some(Position::new(4, 4)));
    }

    #[test]
    fn offset_past_edge_is_none() {
        let a1 = Position::new(0, 0);
        assert_eq!(a1.offset(Direction::new(-1, 0)), None);
        assert_eq!(a1.offset(Direction::new(0, -1)), None);
        let h8 = Position::new(7, 7);
        assert_eq!(h8.offset(Direction::new(1, 1)), None);
    }

    #[test]
    fn ordering_is_row_major() {
        let a2 = Position::new(1, 0);
        let h1 = Position::new(0, 7);
        assert!(h1 < a2);
        assert!(Position::new(1, 0) < Position::new(1, 1));
    }

    #[test]
    #[should_panic]
    fn constructor_rejects_out_of_range() {
        let _ = Position::new(8, 0);
    }
}
