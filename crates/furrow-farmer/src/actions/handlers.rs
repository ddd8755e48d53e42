//! Execution handlers for the tile actions.
//!
//! Each handler runs its guard chain from [`validation`], then applies the
//! change to the tile and returns the [`ActionReport`]. A failed guard is
//! still `Ok`: the report says what went wrong. `Err` is reserved for
//! contract violations such as an out-of-bounds coordinate.
//!
//! Handlers never touch the player's balance or experience. They report the
//! cost and experience; the session applies them.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use furrow_types::{
    ActionPayload, ActionReport, ActionType, RankPerks, RejectionReason, TileConflict, TilePos,
};
use furrow_world::{CropDefinition, CropInstance, FarmGrid, RandomSource};

use crate::config::ActionCosts;
use crate::error::FarmerError;

use super::costs;
use super::messages;
use super::validation::{self, DigOutcome};

/// What a handler needs to know about the player.
///
/// Assembled by the session from the current progression state for each
/// command.
#[derive(Debug, Clone, Copy)]
pub struct ActionContext<'a> {
    /// Fixed action costs and experience.
    pub costs: &'a ActionCosts,
    /// The player's current balance.
    pub coins: Decimal,
    /// Perks of the player's current rank.
    pub perks: RankPerks,
}

fn reject(action: ActionType, pos: TilePos, reason: RejectionReason) -> ActionReport {
    ActionReport::rejected(action, Some(pos), reason, messages::rejection(action, reason))
}

/// Plow a tile.
pub fn execute_plow(
    grid: &mut FarmGrid,
    pos: TilePos,
    ctx: &ActionContext<'_>,
) -> Result<ActionReport, FarmerError> {
    let tile = grid.tile_mut(pos)?;
    if let Err(reason) = validation::validate_plow(tile) {
        return Ok(reject(ActionType::Plow, pos, reason));
    }
    if let Err(conflict) = tile.plow() {
        return Ok(reject(
            ActionType::Plow,
            pos,
            RejectionReason::InvalidTileState(conflict),
        ));
    }
    Ok(
        ActionReport::succeeded(ActionType::Plow, Some(pos), messages::PLOW_SUCCESS)
            .with_exp(ctx.costs.plow_exp),
    )
}

/// Plant a crop on a plowed tile.
///
/// The seed price is the species' base cost minus the rank's reduction.
/// The new crop's caps include the rank's cap increases.
pub fn execute_plant(
    grid: &mut FarmGrid,
    pos: TilePos,
    crop: &Arc<CropDefinition>,
    ctx: &ActionContext<'_>,
) -> Result<ActionReport, FarmerError> {
    let open_ground = grid.allows_category(pos, crop.category)?;
    let seed_cost = crop.discounted_seed_cost(ctx.perks.seed_cost_reduction);

    let tile = grid.tile_mut(pos)?;
    if let Err(reason) = validation::validate_plant(tile, open_ground, ctx.coins, seed_cost) {
        return Ok(reject(ActionType::Plant, pos, reason));
    }

    let instance = CropInstance::plant(
        Arc::clone(crop),
        ctx.perks.water_cap_increase,
        ctx.perks.fertilizer_cap_increase,
    );
    if let Err(conflict) = tile.place_crop(instance) {
        return Ok(reject(
            ActionType::Plant,
            pos,
            RejectionReason::InvalidTileState(conflict),
        ));
    }

    Ok(
        ActionReport::succeeded(ActionType::Plant, Some(pos), messages::PLANT_SUCCESS)
            .with_cost(seed_cost)
            .with_exp(costs::PLANT_EXP)
            .with_payload(ActionPayload::Planted {
                crop: crop.name.clone(),
            }),
    )
}

/// Water the crop on a tile. Succeeds at the cap too; the extra water is
/// dropped.
pub fn execute_water(
    grid: &mut FarmGrid,
    pos: TilePos,
    ctx: &ActionContext<'_>,
) -> Result<ActionReport, FarmerError> {
    let tile = grid.tile_mut(pos)?;
    if let Err(reason) = validation::validate_water(tile) {
        return Ok(reject(ActionType::Water, pos, reason));
    }
    if let Some(crop) = tile.crop_mut() {
        crop.add_water();
    }
    Ok(
        ActionReport::succeeded(ActionType::Water, Some(pos), messages::WATER_SUCCESS)
            .with_exp(ctx.costs.water_exp),
    )
}

/// Fertilize the crop on a tile.
pub fn execute_fertilize(
    grid: &mut FarmGrid,
    pos: TilePos,
    ctx: &ActionContext<'_>,
) -> Result<ActionReport, FarmerError> {
    let tile = grid.tile_mut(pos)?;
    if let Err(reason) =
        validation::validate_fertilize(tile, ctx.coins, ctx.costs.fertilize_cost)
    {
        return Ok(reject(ActionType::Fertilize, pos, reason));
    }
    if let Some(crop) = tile.crop_mut() {
        crop.add_fertilizer();
    }
    Ok(
        ActionReport::succeeded(ActionType::Fertilize, Some(pos), messages::FERTILIZE_SUCCESS)
            .with_cost(ctx.costs.fertilize_cost)
            .with_exp(ctx.costs.fertilize_exp),
    )
}

/// Harvest a ready crop.
///
/// Rolls the yield from `rng`, prices it at the current water and
/// fertilizer levels, and returns the tile to bare unplowed ground. The
/// profit is revenue carried in the payload, not a cost.
pub fn execute_harvest<R: RandomSource + ?Sized>(
    grid: &mut FarmGrid,
    pos: TilePos,
    ctx: &ActionContext<'_>,
    rng: &mut R,
) -> Result<ActionReport, FarmerError> {
    let tile = grid.tile_mut(pos)?;
    if let Err(reason) = validation::validate_harvest(tile) {
        return Ok(reject(ActionType::Harvest, pos, reason));
    }
    let Some(crop) = tile.crop() else {
        return Ok(reject(ActionType::Harvest, pos, RejectionReason::NoCropPresent));
    };

    let units_produced = crop.roll_yield(rng);
    let profit = crop.sell_price(units_produced, ctx.perks.bonus_earnings)?;
    let exp = crop
        .definition()
        .exp_per_unit
        .checked_mul(Decimal::from(units_produced))
        .ok_or_else(|| FarmerError::ArithmeticOverflow {
            context: String::from("harvest experience"),
        })?;
    let name = crop.name().to_owned();
    tile.clear();

    debug!(crop = %name, units_produced, %profit, "Crop harvested");

    Ok(
        ActionReport::succeeded(ActionType::Harvest, Some(pos), messages::HARVEST_SUCCESS)
            .with_exp(exp)
            .with_payload(ActionPayload::Harvested {
                crop: name,
                units_produced,
                profit,
            }),
    )
}

/// Dig a tile with the shovel.
///
/// Every branch except the unaffordable one charges the dig cost, even when
/// nothing happens. Only pulling out a crop counts as a success.
pub fn execute_dig(
    grid: &mut FarmGrid,
    pos: TilePos,
    ctx: &ActionContext<'_>,
) -> Result<ActionReport, FarmerError> {
    let cost = ctx.costs.dig_cost;
    let exp = ctx.costs.dig_exp;
    let tile = grid.tile_mut(pos)?;
    let outcome = validation::classify_dig(tile, ctx.coins, cost);

    let report = match outcome {
        DigOutcome::Unaffordable => {
            reject(ActionType::Dig, pos, RejectionReason::InsufficientFunds)
        }
        DigOutcome::RockPresent => reject(
            ActionType::Dig,
            pos,
            RejectionReason::InvalidTileState(TileConflict::RockPresent),
        ),
        DigOutcome::NothingToDo => reject(
            ActionType::Dig,
            pos,
            RejectionReason::InvalidTileState(TileConflict::NotPlowed),
        ),
        DigOutcome::RemoveCrop => {
            let crop = tile
                .clear()
                .map(|removed| removed.name().to_owned())
                .unwrap_or_default();
            ActionReport::succeeded(ActionType::Dig, Some(pos), messages::DIG_CROP_REMOVED)
                .with_payload(ActionPayload::CropRemoved { crop })
        }
        DigOutcome::Unplow => {
            tile.clear();
            reject(ActionType::Dig, pos, RejectionReason::NoCropPresent)
        }
    };

    let report = if outcome.charges() {
        report.with_cost(cost)
    } else {
        report
    };
    Ok(if outcome.awards_exp() {
        report.with_exp(exp)
    } else {
        report
    })
}

/// Break the rock on a tile.
pub fn execute_mine(
    grid: &mut FarmGrid,
    pos: TilePos,
    ctx: &ActionContext<'_>,
) -> Result<ActionReport, FarmerError> {
    let tile = grid.tile_mut(pos)?;
    if let Err(reason) = validation::validate_mine(tile, ctx.coins, ctx.costs.mine_cost) {
        return Ok(reject(ActionType::Mine, pos, reason));
    }
    tile.remove_rock();
    Ok(
        ActionReport::succeeded(ActionType::Mine, Some(pos), messages::MINE_SUCCESS)
            .with_cost(ctx.costs.mine_cost)
            .with_exp(ctx.costs.mine_exp),
    )
}
