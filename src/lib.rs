// Domain layer - Core partition logic
pub mod domain;

// Application layer - Coordination of board, gestures and messages
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Board, BoardError, PartitionStore, Selection, Square, SquareId};
pub use application::{AppState, Camera, Settings};
pub use ui::Button;
