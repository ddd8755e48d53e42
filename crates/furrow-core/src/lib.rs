//! Game session and configuration for the Furrow simulation.
//!
//! This crate ties the world and the rules together. A [`GameSession`]
//! owns the grid, the catalogs, and the player, and resolves one
//! [`Command`](furrow_types::Command) at a time into an
//! [`ActionReport`](furrow_types::ActionReport).
//!
//! # Modules
//!
//! - [`config`] -- YAML configuration ([`GameConfig`]).
//! - [`session`] -- The command loop and end-of-game checks
//!   ([`GameSession`], [`EndReason`]).

pub mod config;
pub mod session;

// Re-export primary types at crate root.
pub use config::{ConfigError, EconomyConfig, FarmConfig, GameConfig};
pub use session::{EndReason, GameSession, SessionError};
