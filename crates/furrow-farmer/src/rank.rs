//! The rank table and registration eligibility.
//!
//! Ranks form a strict ladder. Each rung has a registration fee, a minimum
//! level, and four farming perks:
//!
//! | Rank          | Fee | Level | Bonus/unit | Seed discount | Water cap | Fert cap |
//! |---------------|-----|-------|------------|---------------|-----------|----------|
//! | Default       | 0   | 0     | 0          | 0             | +0        | +0       |
//! | Registered    | 200 | 5     | 1          | 1             | +0        | +0       |
//! | Distinguished | 300 | 10    | 2          | 2             | +1        | +0       |
//! | Legendary     | 400 | 15    | 4          | 3             | +2        | +1       |
//!
//! Registration is refused, in this order, when the target tier is below
//! the current one, equal to it, above the player's level, or above the
//! player's balance.

use rust_decimal::Decimal;
use serde::Serialize;

use furrow_types::{Rank, RankIneligibility, RankPerks};

use crate::error::FarmerError;

/// One rung of the rank ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankDefinition {
    /// The rank this row describes.
    pub rank: Rank,
    /// Registration fee.
    pub fee: Decimal,
    /// Minimum player level.
    pub required_level: u32,
    /// Perks while the rank is held.
    pub perks: RankPerks,
}

impl RankDefinition {
    /// Tier of the rank, `0` for the default rank.
    pub const fn tier(&self) -> u8 {
        self.rank.tier()
    }

    /// Display name, e.g. `"Legendary Farmer"`.
    pub const fn name(&self) -> &'static str {
        self.rank.display_name()
    }
}

/// Ordered rank definitions, lowest tier first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTable {
    ranks: Vec<RankDefinition>,
}

impl RankTable {
    /// The four standard ranks.
    pub fn standard() -> Self {
        let ranks = vec![
            rung(Rank::Default, 0, 0, [0, 0], [0, 0]),
            rung(Rank::Registered, 200, 5, [1, 1], [0, 0]),
            rung(Rank::Distinguished, 300, 10, [2, 2], [1, 0]),
            rung(Rank::Legendary, 400, 15, [4, 3], [2, 1]),
        ];
        Self { ranks }
    }

    /// The definition for `rank`.
    pub fn get(&self, rank: Rank) -> Option<&RankDefinition> {
        self.ranks.iter().find(|def| def.rank == rank)
    }

    /// Look up a rank by name, short (`"registered"`) or full
    /// (`"Registered Farmer"`), case-insensitively.
    pub fn lookup(&self, name: &str) -> Result<&RankDefinition, FarmerError> {
        Rank::from_name(name)
            .and_then(|rank| self.get(rank))
            .ok_or_else(|| FarmerError::UnknownRank(name.to_owned()))
    }

    /// Perks of `rank`, or no perks if the table lacks it.
    pub fn perks(&self, rank: Rank) -> RankPerks {
        self.get(rank).map(|def| def.perks).unwrap_or_default()
    }

    /// Iterate definitions in tier order.
    pub fn iter(&self) -> impl Iterator<Item = &RankDefinition> {
        self.ranks.iter()
    }
}

impl Default for RankTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Decide whether a player holding `current` at `level` with `coins` may
/// register for `target`.
pub fn check_eligibility(
    current: Rank,
    level: u32,
    coins: Decimal,
    target: &RankDefinition,
) -> Result<(), RankIneligibility> {
    if target.tier() < current.tier() {
        return Err(RankIneligibility::HigherRankHeld);
    }
    if target.tier() == current.tier() {
        return Err(RankIneligibility::SameRankHeld);
    }
    if level < target.required_level {
        return Err(RankIneligibility::LevelTooLow);
    }
    if coins < target.fee {
        return Err(RankIneligibility::InsufficientFunds);
    }
    Ok(())
}

/// Build a row. `[bonus, discount]` are whole coins, `[water, fertilizer]`
/// are cap increases.
fn rung(rank: Rank, fee: i64, required_level: u32, money: [i64; 2], caps: [u32; 2]) -> RankDefinition {
    let [bonus_earnings, seed_cost_reduction] = money.map(Decimal::from);
    let [water_cap_increase, fertilizer_cap_increase] = caps;
    RankDefinition {
        rank,
        fee: Decimal::from(fee),
        required_level,
        perks: RankPerks {
            bonus_earnings,
            seed_cost_reduction,
            water_cap_increase,
            fertilizer_cap_increase,
        },
    }
}
