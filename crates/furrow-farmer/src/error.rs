//! Error types for the furrow-farmer crate.
//!
//! Rule violations a player can trigger are reports, not errors. What lands
//! here is a broken contract: an unknown rank name, a coordinate outside the
//! grid, or money arithmetic that overflowed.

use furrow_world::WorldError;

/// Errors that can occur while resolving actions or updating progression.
#[derive(Debug, thiserror::Error)]
pub enum FarmerError {
    /// A world lookup failed (out-of-bounds tile, unknown crop).
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },

    /// No rank matches the requested name.
    #[error("unknown rank: {0}")]
    UnknownRank(String),

    /// A cost or experience value in [`ActionCosts`](crate::ActionCosts) is
    /// negative.
    #[error("invalid action cost {field}: must not be negative")]
    NegativeCost {
        /// Name of the offending field.
        field: &'static str,
    },

    /// Arithmetic overflow while updating the player's balance or
    /// experience.
    #[error("arithmetic overflow: {context}")]
    ArithmeticOverflow {
        /// What was being computed.
        context: String,
    },
}
