use std::collections::BTreeMap;

use rayon::prelude::*;

use super::geometry::{rectangles_overlap, Region, EPSILON};
use super::square::{Square, SquareId};
use super::{BoardError, MAX_BOARD_SIZE};

/// PartitionStore owns the live squares of a board.
///
/// After every successful edit the live squares are pairwise disjoint and
/// their union is exactly `[0, size) × [0, size)`. Subdivision keeps that by
/// construction; merge keeps it because the merge engine proves coverage
/// before it calls [`PartitionStore::remove`] and [`PartitionStore::insert`].
///
/// The store also keeps a coarse `size × size` cell lookup (which live square
/// holds each integer cell's top-left corner). It only speeds up hit-testing;
/// geometry is always decided on the real-valued coordinates.
#[derive(Clone, Debug, Default)]
pub struct PartitionStore {
    size: usize,
    squares: BTreeMap<SquareId, Square>,
    cells: Vec<Option<SquareId>>,
    next_id: u64,
}

impl PartitionStore {
    /// Empty store with no board
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding a freshly initialized `size × size` board
    pub fn with_size(size: usize) -> Result<Self, BoardError> {
        let mut store = Self::new();
        store.initialize(size)?;
        Ok(store)
    }

    /// Clear all state and lay out `size²` unit squares, row-major.
    /// Ids restart at zero.
    pub fn initialize(&mut self, size: usize) -> Result<(), BoardError> {
        if size < 1 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize(size));
        }

        self.size = size;
        self.squares.clear();
        self.cells = vec![None; size * size];
        self.next_id = 0;

        for row in 0..size {
            for col in 0..size {
                let id = self.allocate_id();
                self.insert(Square::new(id, row as f64, col as f64, 1.0));
            }
        }

        tracing::debug!(size, squares = self.squares.len(), "board initialized");
        Ok(())
    }

    /// Board edge length in cells (0 before initialization)
    pub const fn board_size(&self) -> usize {
        self.size
    }

    pub fn board_region(&self) -> Region {
        Region::square(0.0, 0.0, self.size as f64)
    }

    pub fn get(&self, id: SquareId) -> Result<&Square, BoardError> {
        self.squares.get(&id).ok_or(BoardError::NotFound(id))
    }

    pub fn contains(&self, id: SquareId) -> bool {
        self.squares.contains_key(&id)
    }

    /// Number of live squares
    pub fn square_count(&self) -> usize {
        self.squares.len()
    }

    /// Live squares in id order (read-only snapshot for rendering)
    pub fn all_squares(&self) -> impl Iterator<Item = &Square> + '_ {
        self.squares.values()
    }

    /// Look up several squares at once, failing on the first stale id
    pub fn get_many(&self, ids: &[SquareId]) -> Result<Vec<Square>, BoardError> {
        ids.iter().map(|&id| self.get(id).copied()).collect()
    }

    /// Square owning the integer cell `(row, col)`
    pub fn owner_at(&self, row: usize, col: usize) -> Option<SquareId> {
        (row < self.size && col < self.size)
            .then(|| self.cells[row * self.size + col])
            .flatten()
    }

    /// Live square containing the board point `(row, col)`
    pub fn square_at(&self, row: f64, col: f64) -> Option<&Square> {
        if !self.board_region().contains_point(row, col) {
            return None;
        }

        // Fast path: the owner of the enclosing cell usually covers the point
        let cell_row = (row.max(0.0) as usize).min(self.size - 1);
        let cell_col = (col.max(0.0) as usize).min(self.size - 1);
        if let Some(sq) = self
            .owner_at(cell_row, cell_col)
            .and_then(|id| self.squares.get(&id))
            .filter(|sq| sq.region().contains_point(row, col))
        {
            return Some(sq);
        }

        self.squares
            .values()
            .find(|sq| sq.region().contains_point(row, col))
    }

    /// Hand out the next id. Ids are never reused within one board.
    pub(crate) fn allocate_id(&mut self) -> SquareId {
        let id = SquareId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a square and claim the cells whose top-left corner it holds.
    /// Callers must have proven the square fills a hole left by `remove`.
    pub(crate) fn insert(&mut self, square: Square) {
        for (row, col) in self.cells_cornered_by(&square.region()) {
            self.cells[row * self.size + col] = Some(square.id);
        }
        self.squares.insert(square.id, square);
    }

    /// Retire squares, releasing their cells. Unknown ids are ignored.
    pub(crate) fn remove(&mut self, ids: &[SquareId]) -> Vec<Square> {
        let removed: Vec<Square> = ids
            .iter()
            .filter_map(|id| self.squares.remove(id))
            .collect();

        for square in &removed {
            for (row, col) in self.cells_cornered_by(&square.region()) {
                let cell = &mut self.cells[row * self.size + col];
                if *cell == Some(square.id) {
                    *cell = None;
                }
            }
        }
        removed
    }

    /// Integer cells whose top-left corner lies inside `region`
    fn cells_cornered_by(&self, region: &Region) -> impl Iterator<Item = (usize, usize)> + use<> {
        let span = |min: f64, max: f64, limit: usize| {
            let start = ((min - EPSILON).ceil().max(0.0) as usize).min(limit);
            let end = ((max - EPSILON).ceil().max(0.0) as usize).min(limit);
            start..end
        };
        let rows = span(region.min_row, region.max_row, self.size);
        let cols = span(region.min_col, region.max_col, self.size);
        rows.flat_map(move |row| cols.clone().map(move |col| (row, col)))
    }

    /// Full check of the partition invariant.
    ///
    /// Every square must sit inside the board, no two squares may overlap,
    /// the areas must sum to the board area and every cell must be owned by
    /// a live square. Disjoint pieces inside the board with the full area
    /// cover it exactly.
    pub fn validate(&self) -> Result<(), BoardError> {
        let board = self.board_region();
        let squares: Vec<&Square> = self.squares.values().collect();

        if let Some(sq) = squares
            .iter()
            .find(|sq| sq.size <= EPSILON || !board.contains(&sq.region()))
        {
            return Err(BoardError::CorruptPartition(format!(
                "square {} at ({}, {}) size {} is outside the board",
                sq.id, sq.row, sq.col, sq.size
            )));
        }

        let overlap = (0..squares.len()).into_par_iter().find_map_any(|i| {
            let a = squares[i].region();
            squares[i + 1..]
                .iter()
                .find(|b| rectangles_overlap(&a, &b.region()))
                .map(|b| (squares[i].id, b.id))
        });
        if let Some((a, b)) = overlap {
            return Err(BoardError::CorruptPartition(format!(
                "squares {a} and {b} overlap"
            )));
        }

        let area: f64 = squares.par_iter().map(|sq| sq.size * sq.size).sum();
        if (area - board.area()).abs() > EPSILON * squares.len().max(1) as f64 {
            return Err(BoardError::CorruptPartition(format!(
                "squares cover {area} of {} board area",
                board.area()
            )));
        }

        for (idx, cell) in self.cells.iter().enumerate() {
            let (row, col) = (idx / self.size, idx % self.size);
            match cell {
                Some(id) if self.squares.contains_key(id) => {}
                Some(id) => {
                    return Err(BoardError::CorruptPartition(format!(
                        "cell ({row}, {col}) points at retired square {id}"
                    )));
                }
                None => {
                    return Err(BoardError::CorruptPartition(format!(
                        "cell ({row}, {col}) has no owner"
                    )));
                }
            }
        }

        Ok(())
    }
}
