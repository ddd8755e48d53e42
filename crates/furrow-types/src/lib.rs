//! Shared type definitions for the Furrow farm simulation.
//!
//! This crate is the single source of truth for the vocabulary shared by the
//! world model, the action resolver, the session controller, and any front end
//! driving the engine. Everything here is plain data: no game rules live in
//! this crate.
//!
//! # Modules
//!
//! - [`enums`] -- Enumeration types (crop categories, lifecycle status, ranks,
//!   action kinds, and the rejection taxonomy)
//! - [`commands`] -- The command surface submitted by a front end
//! - [`report`] -- [`ActionReport`], the sole output contract of every command
//! - [`views`] -- Read-only snapshots of tiles, crops, and player stats

pub mod commands;
pub mod enums;
pub mod report;
pub mod views;

// Re-export all public types at crate root for convenience.
pub use commands::Command;
pub use enums::{
    ActionType, CropCategory, CropStatus, Rank, RankIneligibility, RejectionReason, TileConflict,
    WitherReason,
};
pub use report::{ActionPayload, ActionReport};
pub use views::{CropView, PlayerView, RankPerks, TilePos, TileView};
