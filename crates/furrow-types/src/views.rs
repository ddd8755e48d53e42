//! Read-only snapshots for front ends.
//!
//! Views are detached copies: holding one never borrows engine state.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::{CropCategory, CropStatus, Rank};

/// Grid coordinate of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TilePos {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl TilePos {
    /// Create a position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for TilePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Farming perks attached to a rank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankPerks {
    /// Added to the base sell price of every unit sold.
    pub bonus_earnings: Decimal,
    /// Subtracted from every seed's base cost.
    pub seed_cost_reduction: Decimal,
    /// Added to the water cap of every crop.
    pub water_cap_increase: u32,
    /// Added to the fertilizer cap of every crop.
    pub fertilizer_cap_increase: u32,
}

/// Snapshot of a planted crop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropView {
    /// Species name.
    pub name: String,
    /// Species category.
    pub category: CropCategory,
    /// Days since planting.
    pub age: u32,
    /// Age at which the crop becomes harvestable.
    pub harvest_age: u32,
    /// Water received so far.
    pub water: u32,
    /// Water needed by harvest age.
    pub water_needed: u32,
    /// Maximum water the crop can hold.
    pub water_cap: u32,
    /// Fertilizer received so far.
    pub fertilizer: u32,
    /// Fertilizer needed by harvest age.
    pub fertilizer_needed: u32,
    /// Maximum fertilizer the crop can hold.
    pub fertilizer_cap: u32,
    /// Lifecycle status.
    pub status: CropStatus,
}

/// Snapshot of a tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    /// Tile coordinate.
    pub pos: TilePos,
    /// Whether a rock sits on the tile.
    pub rock: bool,
    /// Whether the tile is plowed.
    pub plowed: bool,
    /// The crop on the tile, if any.
    pub crop: Option<CropView>,
}

/// Snapshot of the player's economy and rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    /// Current rank.
    pub rank: Rank,
    /// Coin balance.
    pub coins: Decimal,
    /// Level, `floor(experience / 100)`.
    pub level: u32,
    /// Total experience earned.
    pub experience: Decimal,
    /// Perks of the current rank.
    pub perks: RankPerks,
}
