//! Guard chains for the tile actions.
//!
//! Each action checks its preconditions in a fixed order and stops at the
//! first one that fails:
//!
//! | Action    | Guards, in order                                            |
//! |-----------|-------------------------------------------------------------|
//! | Plow      | rock, already plowed, crop                                  |
//! | Plant     | rock, crop, not plowed, fruit-tree adjacency, funds         |
//! | Water     | no crop, withered                                           |
//! | Fertilize | no crop, withered, funds                                    |
//! | Harvest   | no crop, not harvestable                                    |
//! | Mine      | no rock, funds                                              |
//!
//! Dig is not a guard chain: every branch past the funds check charges
//! money, so it is classified into a [`DigOutcome`] instead.
//!
//! Each guard returns `Ok(())` or the [`RejectionReason`] of the first
//! failure. None of them mutate anything.

use rust_decimal::Decimal;

use furrow_types::{RejectionReason, TileConflict};
use furrow_world::Tile;

/// Fail with [`RejectionReason::InsufficientFunds`] when `coins < cost`.
pub fn validate_funds(coins: Decimal, cost: Decimal) -> Result<(), RejectionReason> {
    if coins < cost {
        return Err(RejectionReason::InsufficientFunds);
    }
    Ok(())
}

/// Plow: the tile must be bare, unplowed ground.
pub const fn validate_plow(tile: &Tile) -> Result<(), RejectionReason> {
    if tile.has_rock() {
        return Err(RejectionReason::InvalidTileState(TileConflict::RockPresent));
    }
    if tile.is_plowed() {
        return Err(RejectionReason::InvalidTileState(TileConflict::AlreadyPlowed));
    }
    if tile.has_crop() {
        return Err(RejectionReason::InvalidTileState(TileConflict::CropPresent));
    }
    Ok(())
}

/// Plant: the tile must be plowed and empty, the surroundings must suit the
/// crop's category, and the player must afford the discounted seed.
///
/// `open_ground` is the grid's verdict on the surroundings (always `true`
/// for categories without an adjacency rule).
pub fn validate_plant(
    tile: &Tile,
    open_ground: bool,
    coins: Decimal,
    seed_cost: Decimal,
) -> Result<(), RejectionReason> {
    if tile.has_rock() {
        return Err(RejectionReason::InvalidTileState(TileConflict::RockPresent));
    }
    if tile.has_crop() {
        return Err(RejectionReason::InvalidTileState(TileConflict::CropPresent));
    }
    if !tile.is_plowed() {
        return Err(RejectionReason::InvalidTileState(TileConflict::NotPlowed));
    }
    if !open_ground {
        return Err(RejectionReason::AdjacencyBlocked);
    }
    validate_funds(coins, seed_cost)
}

/// Water: a live crop must be present. Watering at the cap is allowed.
pub fn validate_water(tile: &Tile) -> Result<(), RejectionReason> {
    validate_live_crop(tile)
}

/// Fertilize: a live crop must be present and the player must afford it.
pub fn validate_fertilize(tile: &Tile, coins: Decimal, cost: Decimal) -> Result<(), RejectionReason> {
    validate_live_crop(tile)?;
    validate_funds(coins, cost)
}

/// Harvest: the crop must be ready.
pub fn validate_harvest(tile: &Tile) -> Result<(), RejectionReason> {
    match tile.crop() {
        None => Err(RejectionReason::NoCropPresent),
        Some(crop) if !crop.is_harvestable() => Err(RejectionReason::CropNotHarvestable),
        Some(_) => Ok(()),
    }
}

/// Mine: there must be a rock and the player must afford it.
pub fn validate_mine(tile: &Tile, coins: Decimal, cost: Decimal) -> Result<(), RejectionReason> {
    if !tile.has_rock() {
        return Err(RejectionReason::NoRockPresent);
    }
    validate_funds(coins, cost)
}

fn validate_live_crop(tile: &Tile) -> Result<(), RejectionReason> {
    match tile.crop() {
        None => Err(RejectionReason::NoCropPresent),
        Some(crop) if crop.is_withered() => Err(RejectionReason::CropWithered),
        Some(_) => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Dig
// ---------------------------------------------------------------------------

/// Which dig branch applies to a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigOutcome {
    /// The player cannot pay. Nothing is charged.
    Unaffordable,
    /// A rock is in the way. Charged, no experience, nothing changes.
    RockPresent,
    /// Bare, unplowed ground. Charged with experience, nothing changes.
    NothingToDo,
    /// A crop is growing. Charged with experience; crop removed, tile
    /// unplowed.
    RemoveCrop,
    /// Plowed and empty. Charged with experience; tile unplowed.
    Unplow,
}

impl DigOutcome {
    /// Whether this branch charges the dig cost.
    pub const fn charges(self) -> bool {
        !matches!(self, Self::Unaffordable)
    }

    /// Whether this branch awards dig experience.
    pub const fn awards_exp(self) -> bool {
        !matches!(self, Self::Unaffordable | Self::RockPresent)
    }
}

/// Pick the dig branch for `tile`. Exactly one branch applies.
pub fn classify_dig(tile: &Tile, coins: Decimal, cost: Decimal) -> DigOutcome {
    if coins < cost {
        DigOutcome::Unaffordable
    } else if tile.has_rock() {
        DigOutcome::RockPresent
    } else if !tile.is_plowed() {
        DigOutcome::NothingToDo
    } else if tile.has_crop() {
        DigOutcome::RemoveCrop
    } else {
        DigOutcome::Unplow
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use furrow_types::TilePos;
    use furrow_world::{CropCatalog, CropInstance};
    use rust_decimal_macros::dec;

    use super::*;

    fn bare() -> Tile {
        Tile::new(TilePos::new(1, 1))
    }

    fn rocky() -> Tile {
        let mut tile = bare();
        tile.place_rock().unwrap();
        tile
    }

    fn plowed() -> Tile {
        let mut tile = bare();
        tile.plow().unwrap();
        tile
    }

    fn planted(name: &str) -> Tile {
        let catalog = CropCatalog::standard();
        let mut tile = plowed();
        let def = catalog.get(name).unwrap();
        tile.place_crop(CropInstance::plant(Arc::clone(def), 0, 0))
            .unwrap();
        tile
    }

    fn withered() -> Tile {
        let mut tile = planted("Rose");
        tile.advance_day();
        assert!(tile.crop().unwrap().is_withered());
        tile
    }

    #[test]
    fn plow_guard_order() {
        assert_eq!(
            validate_plow(&rocky()),
            Err(RejectionReason::InvalidTileState(TileConflict::RockPresent))
        );
        assert_eq!(
            validate_plow(&plowed()),
            Err(RejectionReason::InvalidTileState(TileConflict::AlreadyPlowed))
        );
        assert_eq!(validate_plow(&bare()), Ok(()));
    }

    #[test]
    fn plant_guard_order() {
        let coins = dec!(100);
        let cost = dec!(5);
        assert_eq!(
            validate_plant(&rocky(), true, coins, cost),
            Err(RejectionReason::InvalidTileState(TileConflict::RockPresent))
        );
        assert_eq!(
            validate_plant(&planted("Turnip"), true, coins, cost),
            Err(RejectionReason::InvalidTileState(TileConflict::CropPresent))
        );
        assert_eq!(
            validate_plant(&bare(), true, coins, cost),
            Err(RejectionReason::InvalidTileState(TileConflict::NotPlowed))
        );
        assert_eq!(
            validate_plant(&plowed(), false, dec!(0), cost),
            Err(RejectionReason::AdjacencyBlocked)
        );
        assert_eq!(
            validate_plant(&plowed(), true, dec!(4.99), cost),
            Err(RejectionReason::InsufficientFunds)
        );
        assert_eq!(validate_plant(&plowed(), true, cost, cost), Ok(()));
    }

    #[test]
    fn water_needs_live_crop() {
        assert_eq!(validate_water(&plowed()), Err(RejectionReason::NoCropPresent));
        assert_eq!(validate_water(&withered()), Err(RejectionReason::CropWithered));
        assert_eq!(validate_water(&planted("Turnip")), Ok(()));
    }

    #[test]
    fn fertilize_checks_funds_last() {
        assert_eq!(
            validate_fertilize(&withered(), dec!(0), dec!(10)),
            Err(RejectionReason::CropWithered)
        );
        assert_eq!(
            validate_fertilize(&planted("Turnip"), dec!(9), dec!(10)),
            Err(RejectionReason::InsufficientFunds)
        );
        assert_eq!(validate_fertilize(&planted("Turnip"), dec!(10), dec!(10)), Ok(()));
    }

    #[test]
    fn harvest_requires_ready_crop() {
        assert_eq!(validate_harvest(&bare()), Err(RejectionReason::NoCropPresent));
        assert_eq!(
            validate_harvest(&planted("Turnip")),
            Err(RejectionReason::CropNotHarvestable)
        );
        assert_eq!(
            validate_harvest(&withered()),
            Err(RejectionReason::CropNotHarvestable)
        );
    }

    #[test]
    fn mine_checks_rock_before_funds() {
        assert_eq!(
            validate_mine(&bare(), dec!(0), dec!(50)),
            Err(RejectionReason::NoRockPresent)
        );
        assert_eq!(
            validate_mine(&rocky(), dec!(49), dec!(50)),
            Err(RejectionReason::InsufficientFunds)
        );
        assert_eq!(validate_mine(&rocky(), dec!(50), dec!(50)), Ok(()));
    }

    #[test]
    fn dig_branches_are_total() {
        let cost = dec!(7);
        let cases = [
            (rocky(), DigOutcome::RockPresent),
            (bare(), DigOutcome::NothingToDo),
            (planted("Turnip"), DigOutcome::RemoveCrop),
            (withered(), DigOutcome::RemoveCrop),
            (plowed(), DigOutcome::Unplow),
        ];
        for (tile, expected) in &cases {
            let outcome = classify_dig(tile, dec!(7), cost);
            assert_eq!(outcome, *expected);
            assert!(outcome.charges());
            assert_eq!(classify_dig(tile, dec!(6), cost), DigOutcome::Unaffordable);
        }
        assert!(!DigOutcome::Unaffordable.charges());
        assert!(!DigOutcome::RockPresent.awards_exp());
        assert!(DigOutcome::NothingToDo.awards_exp());
    }
}
