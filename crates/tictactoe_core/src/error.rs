//! Error types for the rules engine.

/// Error raised when a requested move cannot be applied.
///
/// Both variants are local, recoverable conditions: the caller should
/// ignore the requested action. Session-level entry points swallow them
/// into no-ops; nothing in this crate panics on illegal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// Coordinates fall outside the 3x3 grid.
    #[display("Coordinates ({row}, {col}) are out of range (must be 0-2)")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl std::error::Error for IllegalMove {}
