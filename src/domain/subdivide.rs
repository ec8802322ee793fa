use super::partition::PartitionStore;
use super::square::{Square, SquareId};
use super::{BoardError, MAX_GRID_SIZE, MIN_GRID_SIZE, MIN_SQUARE_SIZE};

/// Split one square into a `grid_size × grid_size` grid of equal squares.
///
/// The children exactly fill the parent's region, so the partition stays
/// valid without a coverage check. Children are returned row-major.
pub fn subdivide(
    store: &mut PartitionStore,
    id: SquareId,
    grid_size: usize,
) -> Result<Vec<Square>, BoardError> {
    if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&grid_size) {
        return Err(BoardError::InvalidGridSize(grid_size));
    }
    let target = *store.get(id)?;

    let child_size = target.size / grid_size as f64;
    if child_size < MIN_SQUARE_SIZE {
        return Err(BoardError::SquareTooSmall { size: child_size });
    }
    store.remove(&[target.id]);

    let children: Vec<Square> = (0..grid_size)
        .flat_map(|i| (0..grid_size).map(move |j| (i, j)))
        .map(|(i, j)| {
            Square::child_of(
                target.id,
                store.allocate_id(),
                target.row + i as f64 * child_size,
                target.col + j as f64 * child_size,
                child_size,
            )
        })
        .collect();

    for child in &children {
        store.insert(*child);
    }

    tracing::debug!(
        id = %target.id,
        grid_size,
        created = children.len(),
        "square subdivided"
    );
    Ok(children)
}
