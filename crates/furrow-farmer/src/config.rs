//! Tunable action economics.
//!
//! [`ActionCosts`] bundles every fixed cost and experience award so the
//! session (and tests) can override the defaults in
//! [`actions::costs`](crate::actions::costs). It deserializes from the
//! `actions` section of `furrow-config.yaml`; missing keys fall back to the
//! defaults.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::actions::costs;
use crate::error::FarmerError;

/// Money cost and experience for the fixed-price tile actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionCosts {
    /// Experience for plowing (default: 0.5).
    pub plow_exp: Decimal,

    /// Experience for watering (default: 0.5).
    pub water_exp: Decimal,

    /// Price of one fertilizer application (default: 10).
    pub fertilize_cost: Decimal,

    /// Experience for fertilizing (default: 4).
    pub fertilize_exp: Decimal,

    /// Price of digging (default: 7).
    pub dig_cost: Decimal,

    /// Experience for digging (default: 2).
    pub dig_exp: Decimal,

    /// Price of mining a rock (default: 50).
    pub mine_cost: Decimal,

    /// Experience for mining a rock (default: 15).
    pub mine_exp: Decimal,
}

impl Default for ActionCosts {
    fn default() -> Self {
        Self {
            plow_exp: costs::PLOW_EXP,
            water_exp: costs::WATER_EXP,
            fertilize_cost: costs::FERTILIZE_COST,
            fertilize_exp: costs::FERTILIZE_EXP,
            dig_cost: costs::DIG_COST,
            dig_exp: costs::DIG_EXP,
            mine_cost: costs::MINE_COST,
            mine_exp: costs::MINE_EXP,
        }
    }
}

impl ActionCosts {
    /// Reject negative costs or experience values.
    pub fn validate(&self) -> Result<(), FarmerError> {
        let fields = [
            ("plow_exp", self.plow_exp),
            ("water_exp", self.water_exp),
            ("fertilize_cost", self.fertilize_cost),
            ("fertilize_exp", self.fertilize_exp),
            ("dig_cost", self.dig_cost),
            ("dig_exp", self.dig_exp),
            ("mine_cost", self.mine_cost),
            ("mine_exp", self.mine_exp),
        ];
        match fields.iter().find(|(_, value)| value.is_sign_negative()) {
            Some(&(field, _)) => Err(FarmerError::NegativeCost { field }),
            None => Ok(()),
        }
    }
}
