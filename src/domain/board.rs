use std::collections::BTreeSet;

use super::merge::{self, MergePlan};
use super::partition::PartitionStore;
use super::selection::{Selection, SelectionRequest};
use super::square::{Square, SquareId};
use super::subdivide;
use super::BoardError;

/// Board is the single entry point for editing a partition.
///
/// It owns the partition store and the selection together, so every
/// structural edit also prunes ids it retired from the selection.
#[derive(Clone, Debug, Default)]
pub struct Board {
    store: PartitionStore,
    selection: Selection,
}

fn rejected<T>(op: &'static str, result: Result<T, BoardError>) -> Result<T, BoardError> {
    result.inspect_err(|err| tracing::warn!(op, %err, "edit rejected"))
}

impl Board {
    /// Board with no squares; call [`Board::initialize`] before editing
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(size: usize) -> Result<Self, BoardError> {
        let mut board = Self::new();
        board.initialize(size)?;
        Ok(board)
    }

    /// Replace everything with a fresh `size × size` grid of unit squares
    pub fn initialize(&mut self, size: usize) -> Result<(), BoardError> {
        rejected("initialize", self.store.initialize(size))?;
        self.selection.clear();
        Ok(())
    }

    pub fn store(&self) -> &PartitionStore {
        &self.store
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn board_size(&self) -> usize {
        self.store.board_size()
    }

    pub fn square_count(&self) -> usize {
        self.store.square_count()
    }

    pub fn get(&self, id: SquareId) -> Result<&Square, BoardError> {
        self.store.get(id)
    }

    /// Read-only snapshot of the live squares
    pub fn all_squares(&self) -> impl Iterator<Item = &Square> + '_ {
        self.store.all_squares()
    }

    pub fn is_selected(&self, id: SquareId) -> bool {
        self.selection.contains(id)
    }

    // --- structural edits ---

    /// Split a square into a `grid_size × grid_size` grid
    pub fn subdivide(&mut self, id: SquareId, grid_size: usize) -> Result<Vec<Square>, BoardError> {
        let children = rejected("subdivide", subdivide::subdivide(&mut self.store, id, grid_size))?;
        self.selection.retain_live(&self.store);
        Ok(children)
    }

    /// Subdivide the one selected square, then clear the selection
    pub fn subdivide_selected(&mut self, grid_size: usize) -> Result<Vec<Square>, BoardError> {
        let Some(id) = self.selection.single() else {
            let found = self.selection.len();
            return rejected("subdivide", Err(BoardError::SelectionCount { expected: 1, found }));
        };
        let children = self.subdivide(id, grid_size)?;
        self.selection.clear();
        Ok(children)
    }

    /// Feasibility of merging `ids`, with the reason when it is not
    pub fn check_merge(&self, ids: &[SquareId]) -> Result<MergePlan, BoardError> {
        let squares = self.store.get_many(ids)?;
        merge::check_merge(&squares)
    }

    pub fn can_merge(&self, ids: &[SquareId]) -> bool {
        self.check_merge(ids).is_ok()
    }

    /// Merge `ids` into one square if they exactly tile a square region
    pub fn merge(&mut self, ids: &[SquareId]) -> Result<Square, BoardError> {
        let plan = rejected("merge", self.check_merge(ids))?;
        let merged = rejected("merge", merge::perform_merge(&mut self.store, plan))?;
        self.selection.retain_live(&self.store);
        Ok(merged)
    }

    /// Merge the selected squares, then clear the selection
    pub fn merge_selected(&mut self) -> Result<Square, BoardError> {
        let ids = self.selection.to_vec();
        let merged = self.merge(&ids)?;
        self.selection.clear();
        Ok(merged)
    }

    // --- selection ---

    pub fn toggle_selection(&mut self, id: SquareId) -> Result<&BTreeSet<SquareId>, BoardError> {
        self.selection.toggle(&self.store, id)
    }

    pub fn select_rectangle(
        &mut self,
        start: SquareId,
        end: SquareId,
    ) -> Result<&BTreeSet<SquareId>, BoardError> {
        self.selection.select_rectangle(&self.store, start, end)
    }

    pub fn apply_selection(
        &mut self,
        request: SelectionRequest,
    ) -> Result<&BTreeSet<SquareId>, BoardError> {
        self.selection.apply(&self.store, request)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn begin_sweep(&mut self) {
        self.selection.begin_sweep();
    }

    pub fn end_sweep(&mut self) {
        self.selection.end_sweep();
    }

    pub fn cancel_sweep(&mut self) {
        self.selection.cancel_sweep();
    }

    /// Subdivide is offered only for exactly one selected square
    pub fn can_subdivide_selection(&self) -> bool {
        self.selection.len() == 1
    }

    /// Merge is offered once two or more squares are selected
    pub fn can_merge_selection(&self) -> bool {
        self.selection.len() >= 2
    }

    /// Full partition invariant check
    pub fn validate(&self) -> Result<(), BoardError> {
        self.store.validate()
    }
}
