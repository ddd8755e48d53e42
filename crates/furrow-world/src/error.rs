//! Error types for the `furrow-world` crate.
//!
//! These are contract violations (bad coordinates, malformed catalogs),
//! never gameplay failures. Gameplay failures are reported through
//! [`ActionReport`](furrow_types::ActionReport).

use furrow_types::TilePos;

/// Errors that can occur during world operations.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// A tile coordinate lies outside the grid.
    #[error("tile {pos} is outside the {rows}x{cols} grid")]
    TileOutOfBounds {
        /// The offending coordinate.
        pos: TilePos,
        /// Grid row count.
        rows: usize,
        /// Grid column count.
        cols: usize,
    },

    /// Grid dimensions are zero or too large.
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// No crop with the given name exists in the catalog.
    #[error("unknown crop: {0}")]
    UnknownCrop(String),

    /// Two catalog entries share a name.
    #[error("duplicate crop name: {0}")]
    DuplicateCrop(String),

    /// A catalog was built with no crops.
    #[error("crop catalog is empty")]
    EmptyCatalog,

    /// A crop definition breaks one of its invariants.
    #[error("invalid crop definition {name}: {reason}")]
    InvalidCropDefinition {
        /// The crop's name.
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Arithmetic overflow during a checked operation.
    #[error("arithmetic overflow in world calculation")]
    ArithmeticOverflow,
}
