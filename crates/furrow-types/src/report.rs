//! Action reports: the only thing a command hands back to its caller.
//!
//! A report is created fresh for every command and never retained by the
//! engine. Gameplay failures are reports with `success == false`, never
//! Rust errors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::{ActionType, Rank, RejectionReason, WitherReason};
use crate::views::TilePos;

/// Outcome of a single command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionReport {
    /// Which command produced this report.
    pub action: ActionType,
    /// The targeted tile, for tile commands.
    pub tile: Option<TilePos>,
    /// Whether the action went through.
    pub success: bool,
    /// Human-readable outcome message.
    pub message: String,
    /// Money actually charged. Dig may charge on a failed outcome.
    pub money_cost: Decimal,
    /// Experience awarded.
    pub exp_gained: Decimal,
    /// Why the action failed, when it did.
    pub rejection: Option<RejectionReason>,
    /// Action-specific details.
    pub payload: ActionPayload,
}

impl ActionReport {
    /// A successful report with no cost, experience, or payload yet.
    pub fn succeeded(action: ActionType, tile: Option<TilePos>, message: impl Into<String>) -> Self {
        Self {
            action,
            tile,
            success: true,
            message: message.into(),
            money_cost: Decimal::ZERO,
            exp_gained: Decimal::ZERO,
            rejection: None,
            payload: ActionPayload::None,
        }
    }

    /// A failed report carrying its rejection reason.
    pub fn rejected(
        action: ActionType,
        tile: Option<TilePos>,
        reason: RejectionReason,
        message: impl Into<String>,
    ) -> Self {
        Self {
            action,
            tile,
            success: false,
            message: message.into(),
            money_cost: Decimal::ZERO,
            exp_gained: Decimal::ZERO,
            rejection: Some(reason),
            payload: ActionPayload::None,
        }
    }

    /// Set the money charged.
    #[must_use]
    pub const fn with_cost(mut self, money_cost: Decimal) -> Self {
        self.money_cost = money_cost;
        self
    }

    /// Set the experience awarded.
    #[must_use]
    pub const fn with_exp(mut self, exp_gained: Decimal) -> Self {
        self.exp_gained = exp_gained;
        self
    }

    /// Attach an action-specific payload.
    #[must_use]
    pub fn with_payload(mut self, payload: ActionPayload) -> Self {
        self.payload = payload;
        self
    }

    /// Revenue credited by this report (harvest profit), zero otherwise.
    pub const fn revenue(&self) -> Decimal {
        match &self.payload {
            ActionPayload::Harvested { profit, .. } => *profit,
            _ => Decimal::ZERO,
        }
    }
}

/// Details specific to the action that produced a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionPayload {
    /// Nothing beyond the common fields.
    #[default]
    None,
    /// A crop went into the ground.
    Planted {
        /// Crop species name.
        crop: String,
    },
    /// A crop was harvested and sold.
    Harvested {
        /// Crop species name.
        crop: String,
        /// Units produced (uniform in the species' yield range).
        units_produced: u32,
        /// Revenue from selling the produce. May be negative when the crop
        /// was harvested with no water recorded.
        profit: Decimal,
    },
    /// Dig pulled a crop out of the ground.
    CropRemoved {
        /// Crop species name.
        crop: String,
    },
    /// The day ended.
    DayAdvanced {
        /// The day that just began.
        day: u32,
        /// Tiles whose crop became harvestable.
        harvestable: Vec<TilePos>,
        /// Tiles whose crop withered, with the reason.
        withered: Vec<(TilePos, WitherReason)>,
    },
    /// A new rank was granted.
    RankGranted {
        /// The rank now held.
        rank: Rank,
        /// Water cap increase every live crop receives.
        water_cap_increase: u32,
        /// Fertilizer cap increase every live crop receives.
        fertilizer_cap_increase: u32,
    },
}
