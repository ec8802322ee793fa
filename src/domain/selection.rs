use std::collections::BTreeSet;

use rayon::prelude::*;

use super::geometry::{rectangles_overlap, Region};
use super::partition::PartitionStore;
use super::square::{Square, SquareId};
use super::BoardError;

/// How a selection change was produced
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionRequest {
    /// Click on one square: add it, or drop it if already chosen
    Toggle(SquareId),
    /// Drag from one square to another: choose everything in between
    Rectangle { start: SquareId, end: SquareId },
}

/// Selection tracks which live squares are currently chosen.
///
/// Ids are only ever added after checking the store, and
/// [`Selection::retain_live`] drops ids retired by an edit.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    selected: BTreeSet<SquareId>,
    /// Selection as it was before the running sweep began
    before_sweep: Option<BTreeSet<SquareId>>,
}

/// Region spanned by the combined extents of two squares
pub fn sweep_region(start: &Square, end: &Square) -> Region {
    start.region().union(&end.region())
}

/// Every live square overlapping `region`.
/// Squares differ in size, so a square counts if any part of it is inside,
/// not just its top-left corner.
pub fn squares_overlapping(store: &PartitionStore, region: &Region) -> BTreeSet<SquareId> {
    let squares: Vec<&Square> = store.all_squares().collect();
    squares
        .par_iter()
        .filter(|sq| rectangles_overlap(&sq.region(), region))
        .map(|sq| sq.id)
        .collect()
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &BTreeSet<SquareId> {
        &self.selected
    }

    /// Chosen ids in creation order
    pub fn to_vec(&self) -> Vec<SquareId> {
        self.selected.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, id: SquareId) -> bool {
        self.selected.contains(&id)
    }

    /// The only chosen id, if exactly one is chosen
    pub fn single(&self) -> Option<SquareId> {
        match self.selected.len() {
            1 => self.selected.first().copied(),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        self.before_sweep = None;
    }

    /// Apply a click or a drag result
    pub fn apply(
        &mut self,
        store: &PartitionStore,
        request: SelectionRequest,
    ) -> Result<&BTreeSet<SquareId>, BoardError> {
        match request {
            SelectionRequest::Toggle(id) => self.toggle(store, id),
            SelectionRequest::Rectangle { start, end } => self.select_rectangle(store, start, end),
        }
    }

    /// Add `id` if absent, remove it if present
    pub fn toggle(
        &mut self,
        store: &PartitionStore,
        id: SquareId,
    ) -> Result<&BTreeSet<SquareId>, BoardError> {
        store.get(id)?;
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
        Ok(&self.selected)
    }

    /// Replace the selection with every square overlapping the rectangle
    /// spanned by `start` and `end`. Recomputed from scratch on each call.
    pub fn select_rectangle(
        &mut self,
        store: &PartitionStore,
        start: SquareId,
        end: SquareId,
    ) -> Result<&BTreeSet<SquareId>, BoardError> {
        let region = sweep_region(store.get(start)?, store.get(end)?);
        self.selected = squares_overlapping(store, &region);
        Ok(&self.selected)
    }

    /// Start a drag gesture. The previous selection is set aside and cleared.
    pub fn begin_sweep(&mut self) {
        let previous = std::mem::take(&mut self.selected);
        self.before_sweep = Some(previous);
    }

    pub fn is_sweeping(&self) -> bool {
        self.before_sweep.is_some()
    }

    /// Keep whatever the sweep selected
    pub fn end_sweep(&mut self) {
        self.before_sweep = None;
    }

    /// Abort the sweep and restore the selection it replaced
    pub fn cancel_sweep(&mut self) {
        if let Some(previous) = self.before_sweep.take() {
            self.selected = previous;
        }
    }

    /// Drop ids that are no longer live
    pub fn retain_live(&mut self, store: &PartitionStore) {
        self.selected.retain(|id| store.contains(*id));
        if let Some(previous) = self.before_sweep.as_mut() {
            previous.retain(|id| store.contains(*id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::subdivide::subdivide;

    #[test]
    fn test_toggle_adds_and_removes() {
        let store = PartitionStore::with_size(3).unwrap();
        let mut selection = Selection::new();

        selection.toggle(&store, SquareId(4)).unwrap();
        assert!(selection.contains(SquareId(4)));
        assert_eq!(selection.single(), Some(SquareId(4)));

        selection.toggle(&store, SquareId(4)).unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_unknown_id() {
        let store = PartitionStore::with_size(2).unwrap();
        let mut selection = Selection::new();
        assert_eq!(
            selection.toggle(&store, SquareId(40)),
            Err(BoardError::NotFound(SquareId(40)))
        );
        assert!(selection.is_empty());
    }

    #[test]
    fn test_rectangle_on_unit_board() {
        let store = PartitionStore::with_size(5).unwrap();
        let mut selection = Selection::new();

        // (0,0) is id 0, (2,2) is id 12
        let ids = selection.select_rectangle(&store, SquareId(0), SquareId(12)).unwrap();
        assert_eq!(ids.len(), 9);
        for id in ids {
            let sq = store.get(*id).unwrap();
            assert!(sq.row <= 2.0 && sq.col <= 2.0);
        }
    }

    #[test]
    fn test_rectangle_is_direction_independent() {
        let store = PartitionStore::with_size(4).unwrap();
        let mut a = Selection::new();
        let mut b = Selection::new();
        a.select_rectangle(&store, SquareId(1), SquareId(14)).unwrap();
        b.select_rectangle(&store, SquareId(14), SquareId(1)).unwrap();
        assert_eq!(a.ids(), b.ids());
        assert_eq!(a.len(), 8);
    }

    #[test]
    fn test_rectangle_catches_larger_overlapping_square() {
        let mut store = PartitionStore::with_size(2).unwrap();
        let children = subdivide(&mut store, SquareId(0), 2).unwrap();
        let mut selection = Selection::new();

        // Sweep over the bottom-right quarter of cell (0,0) and cell (1,1)
        let ids = selection
            .select_rectangle(&store, children[3].id, SquareId(3))
            .unwrap();
        assert_eq!(ids.len(), 4);
        assert!(ids.contains(&SquareId(1)));
        assert!(ids.contains(&SquareId(2)));
    }

    #[test]
    fn test_rectangle_replaces_previous() {
        let store = PartitionStore::with_size(3).unwrap();
        let mut selection = Selection::new();
        selection.toggle(&store, SquareId(8)).unwrap();
        selection
            .apply(&store, SelectionRequest::Rectangle { start: SquareId(0), end: SquareId(1) })
            .unwrap();
        assert_eq!(selection.to_vec(), vec![SquareId(0), SquareId(1)]);
    }

    #[test]
    fn test_cancelled_sweep_restores() {
        let store = PartitionStore::with_size(3).unwrap();
        let mut selection = Selection::new();
        selection.toggle(&store, SquareId(8)).unwrap();

        selection.begin_sweep();
        assert!(selection.is_empty());
        selection.select_rectangle(&store, SquareId(0), SquareId(4)).unwrap();
        selection.cancel_sweep();

        assert_eq!(selection.to_vec(), vec![SquareId(8)]);
        assert!(!selection.is_sweeping());
    }

    #[test]
    fn test_finished_sweep_keeps_result() {
        let store = PartitionStore::with_size(3).unwrap();
        let mut selection = Selection::new();
        selection.begin_sweep();
        selection.select_rectangle(&store, SquareId(0), SquareId(4)).unwrap();
        selection.end_sweep();
        selection.cancel_sweep();
        assert_eq!(selection.len(), 4);
    }

    #[test]
    fn test_retain_live_drops_retired() {
        let mut store = PartitionStore::with_size(2).unwrap();
        let mut selection = Selection::new();
        selection.toggle(&store, SquareId(0)).unwrap();
        selection.toggle(&store, SquareId(1)).unwrap();

        subdivide(&mut store, SquareId(0), 2).unwrap();
        selection.retain_live(&store);
        assert_eq!(selection.to_vec(), vec![SquareId(1)]);
    }
}
