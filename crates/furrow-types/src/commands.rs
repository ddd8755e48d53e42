//! The command surface a front end submits to the engine.
//!
//! Each command targets at most one tile. Commands are deserializable so a
//! host can read them straight off a wire or a script.

use serde::{Deserialize, Serialize};

use crate::enums::ActionType;
use crate::views::TilePos;

/// A single player command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Command {
    /// Plow the tile.
    Plow {
        /// Target tile.
        tile: TilePos,
    },
    /// Plant a crop on the tile.
    Plant {
        /// Target tile.
        tile: TilePos,
        /// Crop name, matched case-insensitively against the catalog.
        crop: String,
    },
    /// Water the crop on the tile.
    Water {
        /// Target tile.
        tile: TilePos,
    },
    /// Fertilize the crop on the tile.
    Fertilize {
        /// Target tile.
        tile: TilePos,
    },
    /// Harvest the crop on the tile.
    Harvest {
        /// Target tile.
        tile: TilePos,
    },
    /// Use the shovel on the tile.
    Dig {
        /// Target tile.
        tile: TilePos,
    },
    /// Use the pickaxe on the tile.
    Mine {
        /// Target tile.
        tile: TilePos,
    },
    /// End the current day.
    AdvanceDay,
    /// Register for a farmer rank.
    Register {
        /// Rank name, e.g. `"Registered"` or `"Registered Farmer"`.
        rank: String,
    },
}

impl Command {
    /// The action kind this command resolves to.
    pub const fn action_type(&self) -> ActionType {
        match self {
            Self::Plow { .. } => ActionType::Plow,
            Self::Plant { .. } => ActionType::Plant,
            Self::Water { .. } => ActionType::Water,
            Self::Fertilize { .. } => ActionType::Fertilize,
            Self::Harvest { .. } => ActionType::Harvest,
            Self::Dig { .. } => ActionType::Dig,
            Self::Mine { .. } => ActionType::Mine,
            Self::AdvanceDay => ActionType::AdvanceDay,
            Self::Register { .. } => ActionType::Register,
        }
    }

    /// The targeted tile, for tile commands.
    pub const fn tile(&self) -> Option<TilePos> {
        match self {
            Self::Plow { tile }
            | Self::Plant { tile, .. }
            | Self::Water { tile }
            | Self::Fertilize { tile }
            | Self::Harvest { tile }
            | Self::Dig { tile }
            | Self::Mine { tile } => Some(*tile),
            Self::AdvanceDay | Self::Register { .. } => None,
        }
    }
}
