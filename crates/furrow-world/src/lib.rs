//! Crops, tiles, and the farm grid for the Furrow simulation.
//!
//! This crate models the physical farm: a static catalog of crop species, the
//! per-crop lifecycle state machine, individual tiles, and the rectangular
//! grid that owns them.
//!
//! # Modules
//!
//! - [`catalog`] -- [`CropDefinition`] and the order-stable [`CropCatalog`].
//! - [`crop`] -- [`CropInstance`]: growth, watering, withering, and pricing.
//! - [`error`] -- Error types for contract violations ([`WorldError`]).
//! - [`grid`] -- [`FarmGrid`]: rock placement, adjacency rules, and bulk
//!   day/cap operations.
//! - [`random`] -- The injectable [`RandomSource`] used for yields and rocks.
//! - [`tile`] -- [`Tile`]: plow/rock/crop state of a single square.

pub mod catalog;
pub mod crop;
pub mod error;
pub mod grid;
pub mod random;
pub mod tile;

// Re-export primary types at crate root.
pub use catalog::{CropCatalog, CropDefinition};
pub use crop::CropInstance;
pub use error::WorldError;
pub use grid::{DayTransitions, FarmGrid, ROCK_PLACEMENT_ATTEMPTS};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use tile::Tile;
