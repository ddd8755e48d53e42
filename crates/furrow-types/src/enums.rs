//! Enumeration types for the Furrow simulation.
//!
//! Crop categories, the crop lifecycle status, farmer ranks, action kinds, and
//! the taxonomy of reasons an action can be rejected.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Crops
// ---------------------------------------------------------------------------

/// The category a crop species belongs to.
///
/// Categories drive two rules: flowers sell at a premium, and fruit trees
/// need open ground around them before they can be planted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropCategory {
    /// Turnips, carrots, potatoes.
    RootCrop,
    /// Roses, tulips, sunflowers. Sold at a 10% premium.
    Flower,
    /// Mangoes, apples. Require all eight neighbours to be free.
    FruitTree,
}

impl CropCategory {
    /// Multiplier applied to the final sell price of this category.
    ///
    /// Flowers earn 1.1x, everything else 1.0x.
    pub const fn premium_rate(self) -> Decimal {
        match self {
            Self::Flower => Decimal::from_parts(11, 0, 0, false, 1),
            Self::RootCrop | Self::FruitTree => Decimal::ONE,
        }
    }

    /// Whether planting this category requires an interior tile with all
    /// adjacent tiles unoccupied.
    pub const fn requires_open_ground(self) -> bool {
        matches!(self, Self::FruitTree)
    }

    /// Human-readable category name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RootCrop => "Root Crop",
            Self::Flower => "Flower",
            Self::FruitTree => "Fruit Tree",
        }
    }
}

impl fmt::Display for CropCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a crop withered. Only the first matching condition is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WitherReason {
    /// The crop reached harvest age without enough water.
    LacksWater,
    /// The crop reached harvest age without enough fertilizer.
    LacksFertilizer,
    /// The crop was left unharvested past its harvest age.
    Overripe,
}

impl fmt::Display for WitherReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LacksWater => "lacks water",
            Self::LacksFertilizer => "lacks fertilizer",
            Self::Overripe => "overripe",
        })
    }
}

/// Lifecycle status of a planted crop.
///
/// `Growing` moves to either `Harvestable` or `Withered`. A harvestable crop
/// left in the ground one more day withers as overripe. `Withered` is
/// terminal until the crop is dug up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropStatus {
    /// Still maturing.
    #[default]
    Growing,
    /// Ready to harvest today.
    Harvestable,
    /// Dead; can only be dug up.
    Withered(WitherReason),
}

impl CropStatus {
    /// Whether the crop has withered.
    pub const fn is_withered(self) -> bool {
        matches!(self, Self::Withered(_))
    }

    /// Whether the crop can be harvested right now.
    pub const fn is_harvestable(self) -> bool {
        matches!(self, Self::Harvestable)
    }

    /// The withering reason, if any.
    pub const fn wither_reason(self) -> Option<WitherReason> {
        match self {
            Self::Withered(reason) => Some(reason),
            Self::Growing | Self::Harvestable => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Ranks
// ---------------------------------------------------------------------------

/// Farmer rank. Variant order is tier order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    /// Tier 0, every farmer starts here.
    #[default]
    Default,
    /// Tier 1.
    Registered,
    /// Tier 2.
    Distinguished,
    /// Tier 3.
    Legendary,
}

impl Rank {
    /// All ranks in ascending tier order.
    pub const ALL: [Self; 4] = [
        Self::Default,
        Self::Registered,
        Self::Distinguished,
        Self::Legendary,
    ];

    /// Numeric tier: 0 for `Default` through 3 for `Legendary`.
    pub const fn tier(self) -> u8 {
        match self {
            Self::Default => 0,
            Self::Registered => 1,
            Self::Distinguished => 2,
            Self::Legendary => 3,
        }
    }

    /// Display name, e.g. `"Registered Farmer"`.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default Farmer",
            Self::Registered => "Registered Farmer",
            Self::Distinguished => "Distinguished Farmer",
            Self::Legendary => "Legendary Farmer",
        }
    }

    /// Look up a rank by name, case-insensitively.
    ///
    /// Accepts both the short form (`"registered"`) and the display name
    /// (`"Registered Farmer"`).
    pub fn from_name(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        Self::ALL.into_iter().find(|rank| {
            rank.display_name().eq_ignore_ascii_case(trimmed)
                || rank
                    .display_name()
                    .split_whitespace()
                    .next()
                    .is_some_and(|short| short.eq_ignore_ascii_case(trimmed))
        })
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// The kind of command that produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Prepare a tile for planting.
    Plow,
    /// Put a seed into a plowed tile.
    Plant,
    /// Add one unit of water to a crop.
    Water,
    /// Add one unit of fertilizer to a crop.
    Fertilize,
    /// Collect a ripe crop and sell its produce.
    Harvest,
    /// Shovel: remove a crop or unplow a tile.
    Dig,
    /// Pickaxe: break a rock.
    Mine,
    /// End the day and let every crop grow.
    AdvanceDay,
    /// Pay for a higher farmer rank.
    Register,
}

impl ActionType {
    /// Lowercase identifier, matching the wire form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plow => "plow",
            Self::Plant => "plant",
            Self::Water => "water",
            Self::Fertilize => "fertilize",
            Self::Harvest => "harvest",
            Self::Dig => "dig",
            Self::Mine => "mine",
            Self::AdvanceDay => "advance_day",
            Self::Register => "register",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Rejections
// ---------------------------------------------------------------------------

/// Why a gameplay action did not go through.
///
/// Rejections are not errors. The front end shows the report's message and
/// lets the player pick another action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// The player cannot pay for the action.
    InsufficientFunds,
    /// The tile's plow/crop/rock combination does not allow the action.
    InvalidTileState(TileConflict),
    /// A fruit tree needs an interior tile with eight free neighbours.
    AdjacencyBlocked,
    /// The crop is still growing.
    CropNotHarvestable,
    /// The crop is withered.
    CropWithered,
    /// The tile holds no crop.
    NoCropPresent,
    /// The tile holds no rock.
    NoRockPresent,
    /// The player may not register for the requested rank.
    RankIneligible(RankIneligibility),
}

/// The specific tile state that blocked an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileConflict {
    /// A rock occupies the tile.
    RockPresent,
    /// A crop occupies the tile.
    CropPresent,
    /// The tile is already plowed.
    AlreadyPlowed,
    /// The tile has not been plowed.
    NotPlowed,
}

/// Why a rank registration was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankIneligibility {
    /// The player already holds a higher rank.
    HigherRankHeld,
    /// The player already holds this rank.
    SameRankHeld,
    /// The player's level is below the rank's requirement.
    LevelTooLow,
    /// The player cannot pay the registration fee.
    InsufficientFunds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_order_matches_tier() {
        for pair in Rank::ALL.windows(2) {
            if let [lower, higher] = pair {
                assert!(lower < higher);
                assert!(lower.tier() < higher.tier());
            }
        }
    }

    #[test]
    fn rank_lookup_accepts_short_and_display_names() {
        assert_eq!(Rank::from_name("registered"), Some(Rank::Registered));
        assert_eq!(Rank::from_name("Legendary Farmer"), Some(Rank::Legendary));
        assert_eq!(Rank::from_name("  DISTINGUISHED "), Some(Rank::Distinguished));
        assert_eq!(Rank::from_name("farmer"), None);
    }

    #[test]
    fn only_flowers_earn_premium() {
        assert_eq!(CropCategory::Flower.premium_rate(), Decimal::new(11, 1));
        assert_eq!(CropCategory::RootCrop.premium_rate(), Decimal::ONE);
        assert_eq!(CropCategory::FruitTree.premium_rate(), Decimal::ONE);
    }

    #[test]
    fn only_fruit_trees_need_open_ground() {
        assert!(CropCategory::FruitTree.requires_open_ground());
        assert!(!CropCategory::Flower.requires_open_ground());
        assert!(!CropCategory::RootCrop.requires_open_ground());
    }

    #[test]
    fn status_helpers() {
        let withered = CropStatus::Withered(WitherReason::Overripe);
        assert!(withered.is_withered());
        assert_eq!(withered.wither_reason(), Some(WitherReason::Overripe));
        assert!(CropStatus::Harvestable.is_harvestable());
        assert_eq!(CropStatus::Growing.wither_reason(), None);
    }

    #[test]
    fn rejection_serializes_snake_case() {
        let json = serde_json::to_string(&RejectionReason::InvalidTileState(
            TileConflict::RockPresent,
        ));
        assert_eq!(
            json.ok().as_deref(),
            Some(r#"{"invalid_tile_state":"rock_present"}"#)
        );
    }
}
