//! Tile actions, player progression, and ranks for the Furrow simulation.
//!
//! This crate holds the rules layer: everything that decides what an action
//! does to a tile and what it costs the player. It sits between
//! `furrow-world` (which owns the physical farm) and `furrow-core` (which
//! sequences commands and applies their side effects).
//!
//! # Modules
//!
//! - [`actions`] -- Guard chains, handlers, fixed costs, and report messages.
//! - [`config`] -- Tunable action economics ([`ActionCosts`]).
//! - [`error`] -- Error types for contract violations ([`FarmerError`]).
//! - [`progression`] -- Coins, experience, level, and held rank
//!   ([`ProgressionStats`]).
//! - [`rank`] -- The rank table and registration rules ([`RankTable`]).

pub mod actions;
pub mod config;
pub mod error;
pub mod progression;
pub mod rank;

// Re-export primary types at crate root.
pub use actions::handlers::ActionContext;
pub use config::ActionCosts;
pub use error::FarmerError;
pub use progression::{ProgressionStats, level_for};
pub use rank::{RankDefinition, RankTable};
