use std::fmt;

use super::geometry::Region;

/// Identifier of a square. Assigned in increasing order by the partition
/// store and never reused while the board lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SquareId(pub u64);

impl fmt::Display for SquareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Square is the atomic unit of the partition.
/// It occupies `[row, row + size) × [col, col + size)` in board units and is
/// never changed after creation: edits retire squares and create new ones.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Square {
    pub id: SquareId,
    pub row: f64,
    pub col: f64,
    pub size: f64,
    /// Produced by subdividing `parent` (display only)
    pub subdivided: bool,
    pub parent: Option<SquareId>,
}

impl Square {
    /// A fresh square with no history
    pub const fn new(id: SquareId, row: f64, col: f64, size: f64) -> Self {
        Self {
            id,
            row,
            col,
            size,
            subdivided: false,
            parent: None,
        }
    }

    /// A square produced by subdividing `parent`
    pub const fn child_of(parent: SquareId, id: SquareId, row: f64, col: f64, size: f64) -> Self {
        Self {
            id,
            row,
            col,
            size,
            subdivided: true,
            parent: Some(parent),
        }
    }

    pub fn region(&self) -> Region {
        Region::square(self.row, self.col, self.size)
    }

    /// Larger than one board cell, i.e. the result of a merge
    pub fn is_merged(&self) -> bool {
        self.size > 1.0 + super::geometry::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_matches_extent() {
        let sq = Square::new(SquareId(3), 1.0, 2.0, 0.5);
        let r = sq.region();
        assert_eq!(r.min_row, 1.0);
        assert_eq!(r.min_col, 2.0);
        assert_eq!(r.max_row, 1.5);
        assert_eq!(r.max_col, 2.5);
    }

    #[test]
    fn test_child_carries_parent() {
        let sq = Square::child_of(SquareId(1), SquareId(9), 0.0, 0.0, 0.25);
        assert!(sq.subdivided);
        assert_eq!(sq.parent, Some(SquareId(1)));
        assert!(!sq.is_merged());
    }

    #[test]
    fn test_ids_order_by_creation() {
        assert!(SquareId(2) < SquareId(10));
        assert_eq!(SquareId(7).to_string(), "#7");
    }
}
