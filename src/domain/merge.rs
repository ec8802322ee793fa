//! Merge feasibility and execution.
//!
//! A set of squares may merge only if together they tile one square region
//! with no gaps and no overlaps. Feasibility is decided on a temporary
//! coverage grid whose row and column lines are the distinct edges of the
//! candidates, so every candidate covers a whole block of grid cells
//! whatever its size. The grid has at most `2n × 2n` cells for `n`
//! candidates.

use super::geometry::{boundary_index, distinct_boundaries, Region};
use super::partition::PartitionStore;
use super::square::{Square, SquareId};
use super::BoardError;

/// A merge that passed the feasibility test
#[derive(Clone, Debug, PartialEq)]
pub struct MergePlan {
    squares: Vec<Square>,
    region: Region,
}

impl MergePlan {
    /// Region the merged square will occupy
    pub fn region(&self) -> Region {
        self.region
    }

    pub fn ids(&self) -> impl Iterator<Item = SquareId> + '_ {
        self.squares.iter().map(|sq| sq.id)
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}

/// Bounding box of the union of all squares
fn bounding_region(squares: &[Square]) -> Option<Region> {
    squares
        .iter()
        .map(Square::region)
        .reduce(|acc, r| acc.union(&r))
}

/// Cell span `[start, end)` covered by the edge pair `(min, max)`
fn cell_span(lines: &[f64], min: f64, max: f64) -> Option<std::ops::Range<usize>> {
    Some(boundary_index(lines, min)?..boundary_index(lines, max)?)
}

/// Decide whether `squares` exactly tile one square region.
///
/// Fails with the first constraint that does not hold, checked in order:
/// count, square outline, overlap, gap.
pub fn check_merge(squares: &[Square]) -> Result<MergePlan, BoardError> {
    if squares.len() < 2 {
        return Err(BoardError::TooFewSquares(squares.len()));
    }
    let bounds = bounding_region(squares).ok_or(BoardError::TooFewSquares(0))?;

    if !bounds.is_square() {
        return Err(BoardError::NotSquareShape {
            width: bounds.width(),
            height: bounds.height(),
        });
    }

    let rows = distinct_boundaries(squares.iter().flat_map(|sq| [sq.row, sq.row + sq.size]));
    let cols = distinct_boundaries(squares.iter().flat_map(|sq| [sq.col, sq.col + sq.size]));
    let width = cols.len().saturating_sub(1);
    let mut coverage = vec![false; rows.len().saturating_sub(1) * width];

    for sq in squares {
        let region = sq.region();
        let (Some(row_span), Some(col_span)) = (
            cell_span(&rows, region.min_row, region.max_row),
            cell_span(&cols, region.min_col, region.max_col),
        ) else {
            return Err(BoardError::GapDetected);
        };

        for r in row_span {
            for c in col_span.clone() {
                let cell = &mut coverage[r * width + c];
                if *cell {
                    return Err(BoardError::OverlapDetected);
                }
                *cell = true;
            }
        }
    }

    if coverage.iter().any(|covered| !covered) {
        return Err(BoardError::GapDetected);
    }

    Ok(MergePlan {
        squares: squares.to_vec(),
        region: bounds,
    })
}

/// Boolean view of [`check_merge`]
pub fn can_merge(squares: &[Square]) -> bool {
    check_merge(squares).is_ok()
}

/// Replace the planned squares with one square spanning their region.
///
/// Fails without touching the store if any planned square is no longer
/// live exactly as it was when the plan was made.
pub fn perform_merge(store: &mut PartitionStore, plan: MergePlan) -> Result<Square, BoardError> {
    if let Some(stale) = plan
        .squares
        .iter()
        .find(|sq| store.get(sq.id).map_or(true, |live| live != *sq))
    {
        return Err(BoardError::NotFound(stale.id));
    }

    let ids: Vec<SquareId> = plan.ids().collect();
    store.remove(&ids);

    let region = plan.region;
    let merged = Square::new(
        store.allocate_id(),
        region.min_row,
        region.min_col,
        region.height().max(region.width()),
    );
    store.insert(merged);

    tracing::debug!(id = %merged.id, removed = ids.len(), size = merged.size, "squares merged");
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geometry::approx_eq;

    fn sq(id: u64, row: f64, col: f64, size: f64) -> Square {
        Square::new(SquareId(id), row, col, size)
    }

    fn two_by_two() -> Vec<Square> {
        vec![
            sq(0, 0.0, 0.0, 1.0),
            sq(1, 0.0, 1.0, 1.0),
            sq(2, 1.0, 0.0, 1.0),
            sq(3, 1.0, 1.0, 1.0),
        ]
    }

    #[test]
    fn test_rejects_empty_and_single() {
        assert_eq!(check_merge(&[]), Err(BoardError::TooFewSquares(0)));
        assert_eq!(
            check_merge(&[sq(0, 0.0, 0.0, 1.0)]),
            Err(BoardError::TooFewSquares(1))
        );
    }

    #[test]
    fn test_accepts_two_by_two() {
        let plan = check_merge(&two_by_two()).unwrap();
        assert_eq!(plan.region(), Region::new(0.0, 0.0, 2.0, 2.0));
        assert_eq!(plan.len(), 4);
    }

    #[test]
    fn test_detects_overlap() {
        let mut squares = two_by_two();
        squares.push(sq(4, 0.5, 0.5, 1.0));
        assert_eq!(check_merge(&squares), Err(BoardError::OverlapDetected));
    }

    #[test]
    fn test_duplicate_square_overlaps() {
        let mut squares = two_by_two();
        squares.push(squares[2]);
        assert_eq!(check_merge(&squares), Err(BoardError::OverlapDetected));
    }

    #[test]
    fn test_detects_gap() {
        let squares = two_by_two();
        assert_eq!(check_merge(&squares[..3]), Err(BoardError::GapDetected));
    }

    #[test]
    fn test_rejects_rectangle() {
        let squares = [sq(0, 0.0, 0.0, 1.0), sq(1, 0.0, 1.0, 1.0)];
        assert!(matches!(
            check_merge(&squares),
            Err(BoardError::NotSquareShape { .. })
        ));
    }

    #[test]
    fn test_mixed_sizes_tile() {
        // Three unit squares and a unit cell split into quarters
        let mut squares = vec![
            sq(0, 0.0, 0.0, 1.0),
            sq(1, 0.0, 1.0, 1.0),
            sq(2, 1.0, 0.0, 1.0),
        ];
        let mut id = 3;
        for r in [1.0, 1.5] {
            for c in [1.0, 1.5] {
                squares.push(sq(id, r, c, 0.5));
                id += 1;
            }
        }
        let plan = check_merge(&squares).unwrap();
        assert!(approx_eq(plan.region().width(), 2.0));
    }

    #[test]
    fn test_half_beside_sixths() {
        // A 1/2 square in the corner, the rest of the unit cell in sixths
        let mut squares = vec![sq(0, 0.0, 0.0, 0.5)];
        let sixth = 1.0 / 6.0;
        let mut id = 1;
        for r in 0..6 {
            for c in 0..6 {
                if r < 3 && c < 3 {
                    continue;
                }
                squares.push(sq(id, r as f64 * sixth, c as f64 * sixth, sixth));
                id += 1;
            }
        }
        let plan = check_merge(&squares).unwrap();
        assert_eq!(plan.len(), 28);
        assert!(approx_eq(plan.region().height(), 1.0));
    }

    #[test]
    fn test_unrelated_sizes_overlap() {
        let squares = [
            sq(0, 0.0, 0.0, 1.0),
            sq(1, 0.0, 1.0, 1.0),
            sq(2, 1.0, 0.0, 1.0),
            sq(3, 1.0, 1.0, 1.0),
            sq(4, 0.0, 0.0, std::f64::consts::SQRT_2),
        ];
        assert_eq!(check_merge(&squares), Err(BoardError::OverlapDetected));
    }

    #[test]
    fn test_sevenths_beside_thirds_tile() {
        // Unit square: a left column of thirds, a 2/3 square bottom-right,
        // and the two top-right thirds split into sevenths
        let third = 1.0 / 3.0;
        let mut squares = vec![sq(0, third, third, 2.0 * third)];
        let mut id = 1;
        for r in 0..3 {
            squares.push(sq(id, r as f64 * third, 0.0, third));
            id += 1;
        }
        for c in 1..3 {
            let seventh = third / 7.0;
            for i in 0..7 {
                for j in 0..7 {
                    let (row, col) = (i as f64 * seventh, c as f64 * third + j as f64 * seventh);
                    squares.push(sq(id, row, col, seventh));
                    id += 1;
                }
            }
        }
        assert!(can_merge(&squares));
        squares.pop();
        assert_eq!(check_merge(&squares), Err(BoardError::GapDetected));
    }

    #[test]
    fn test_check_is_repeatable() {
        let squares = two_by_two();
        assert_eq!(check_merge(&squares[1..]), check_merge(&squares[1..]));
        assert!(!can_merge(&squares[1..]));
        assert!(can_merge(&squares));
    }

    #[test]
    fn test_perform_merge_on_store() {
        let mut store = PartitionStore::with_size(3).unwrap();
        let squares = store
            .get_many(&[SquareId(0), SquareId(1), SquareId(3), SquareId(4)])
            .unwrap();
        let plan = check_merge(&squares).unwrap();
        let merged = perform_merge(&mut store, plan).unwrap();

        assert_eq!(merged.id, SquareId(9));
        assert_eq!((merged.row, merged.col, merged.size), (0.0, 0.0, 2.0));
        assert!(!merged.subdivided);
        assert_eq!(store.square_count(), 6);
        assert_eq!(store.owner_at(1, 1), Some(SquareId(9)));
        assert!(store.validate().is_ok());
    }

    #[test]
    fn test_stale_plan_is_rejected_untouched() {
        let mut store = PartitionStore::with_size(2).unwrap();
        let squares = store.all_squares().copied().collect::<Vec<_>>();
        let plan = check_merge(&squares).unwrap();
        store.remove(&[SquareId(2)]);

        assert_eq!(perform_merge(&mut store, plan), Err(BoardError::NotFound(SquareId(2))));
        assert_eq!(store.square_count(), 3);
    }
}
