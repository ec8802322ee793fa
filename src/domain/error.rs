use thiserror::Error;

use super::square::SquareId;

/// Errors returned by board operations.
/// A rejected operation leaves the board exactly as it was.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BoardError {
    #[error("Invalid board size {0} (must be between 1 and {max})", max = super::MAX_BOARD_SIZE)]
    InvalidSize(usize),

    #[error(
        "Invalid grid size {0} (must be between {min} and {max})",
        min = super::MIN_GRID_SIZE,
        max = super::MAX_GRID_SIZE
    )]
    InvalidGridSize(usize),

    #[error("Square {0} not found")]
    NotFound(SquareId),

    #[error("Select at least 2 squares to merge (got {0})")]
    TooFewSquares(usize),

    #[error("Selection is {height:.3} tall and {width:.3} wide, not a square")]
    NotSquareShape { width: f64, height: f64 },

    #[error("Selected squares overlap")]
    OverlapDetected,

    #[error("Selected squares leave a gap")]
    GapDetected,

    #[error(
        "Subdivision would create squares of edge {size:.2e} (smallest allowed is {min:.0e})",
        min = super::MIN_SQUARE_SIZE
    )]
    SquareTooSmall { size: f64 },

    #[error("Select exactly {expected} square(s) (got {found})")]
    SelectionCount { expected: usize, found: usize },

    #[error("Partition is corrupt: {0}")]
    CorruptPartition(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_constraint() {
        assert_eq!(
            BoardError::InvalidGridSize(25).to_string(),
            "Invalid grid size 25 (must be between 2 and 20)"
        );
        assert_eq!(BoardError::NotFound(SquareId(4)).to_string(), "Square #4 not found");
        assert_eq!(
            BoardError::SelectionCount { expected: 1, found: 3 }.to_string(),
            "Select exactly 1 square(s) (got 3)"
        );
    }
}
