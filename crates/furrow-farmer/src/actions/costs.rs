//! Default money cost and experience for each tile action.
//!
//! These seed [`ActionCosts`](crate::ActionCosts); a config file may
//! override any of them. Planting costs the seed price and harvesting pays
//! out the sell price, so neither appears here. Neither grants fixed
//! experience: planting grants none and harvesting grants experience per
//! unit.

use rust_decimal::Decimal;

/// Experience for plowing a tile: 0.5.
pub const PLOW_EXP: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Experience for watering a crop: 0.5.
pub const WATER_EXP: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Price of one fertilizer application.
pub const FERTILIZE_COST: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Experience for fertilizing a crop.
pub const FERTILIZE_EXP: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// Price of digging a tile, charged even when there is nothing to dig.
pub const DIG_COST: Decimal = Decimal::from_parts(7, 0, 0, false, 0);

/// Experience for digging a tile.
pub const DIG_EXP: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Price of breaking a rock.
pub const MINE_COST: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Experience for breaking a rock.
pub const MINE_EXP: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// Experience for planting. Planting only costs money.
pub const PLANT_EXP: Decimal = Decimal::ZERO;
