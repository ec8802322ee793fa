//! Core partition logic: geometry, the partition store, the subdivide and
//! merge engines and the selection model. No drawing or input here.

mod board;
mod error;
pub mod geometry;
pub mod merge;
mod partition;
pub mod selection;
mod square;
pub mod subdivide;

pub use board::Board;
pub use error::BoardError;
pub use geometry::{is_square_region, rectangles_overlap, Region, EPSILON};
pub use merge::{can_merge, check_merge, MergePlan};
pub use partition::PartitionStore;
pub use selection::{Selection, SelectionRequest};
pub use square::{Square, SquareId};

/// Largest board edge, in cells
pub const MAX_BOARD_SIZE: usize = 64;

/// Smallest subdivision grid
pub const MIN_GRID_SIZE: usize = 2;

/// Largest subdivision grid; bounds square-count growth per edit
pub const MAX_GRID_SIZE: usize = 20;

/// Smallest square edge a subdivision may create. Well above [`EPSILON`]
/// so that distinct edges of live squares never compare equal.
pub const MIN_SQUARE_SIZE: f64 = 100.0 * EPSILON;
