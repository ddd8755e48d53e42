//! Player economy: coins, experience, level, and held rank.
//!
//! [`ProgressionStats`] is mutated in exactly two ways:
//!
//! - [`apply_report`](ProgressionStats::apply_report) books the cost,
//!   revenue, and experience of any report;
//! - [`register`](ProgressionStats::register) swaps the held rank when a
//!   registration is allowed.
//!
//! Experience only ever grows and the level is always
//! `floor(experience / 100)`.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::info;

use furrow_types::{
    ActionPayload, ActionReport, ActionType, PlayerView, Rank, RankPerks, RejectionReason,
};

use crate::actions::messages;
use crate::error::FarmerError;
use crate::rank::{self, RankDefinition};

/// Experience per level.
const EXP_PER_LEVEL: Decimal = Decimal::ONE_HUNDRED;

/// Level reached with `experience`: `floor(experience / 100)`.
pub fn level_for(experience: Decimal) -> u32 {
    if experience.is_sign_negative() {
        return 0;
    }
    experience
        .checked_div(EXP_PER_LEVEL)
        .map(|levels| levels.floor())
        .and_then(|levels| levels.to_u32())
        .unwrap_or(u32::MAX)
}

/// The player's economic state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressionStats {
    coins: Decimal,
    experience: Decimal,
    level: u32,
    rank: Rank,
    perks: RankPerks,
}

impl ProgressionStats {
    /// A new player at the default rank with `starting_coins`.
    pub fn new(starting_coins: Decimal) -> Self {
        Self {
            coins: starting_coins,
            experience: Decimal::ZERO,
            level: 0,
            rank: Rank::Default,
            perks: RankPerks::default(),
        }
    }

    /// Current balance.
    pub const fn coins(&self) -> Decimal {
        self.coins
    }

    /// Total experience earned.
    pub const fn experience(&self) -> Decimal {
        self.experience
    }

    /// Current level.
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Held rank.
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Perks of the held rank.
    pub const fn perks(&self) -> RankPerks {
        self.perks
    }

    /// Add experience and recompute the level. Negative amounts are
    /// ignored.
    ///
    /// Returns the level after the addition.
    pub fn add_experience(&mut self, amount: Decimal) -> Result<u32, FarmerError> {
        if amount.is_sign_positive() && !amount.is_zero() {
            self.experience = self.experience.checked_add(amount).ok_or_else(|| {
                FarmerError::ArithmeticOverflow {
                    context: String::from("experience"),
                }
            })?;
            self.level = self.level.max(level_for(self.experience));
        }
        Ok(self.level)
    }

    /// Book a report: debit its cost, credit its revenue, add its
    /// experience.
    pub fn apply_report(&mut self, report: &ActionReport) -> Result<(), FarmerError> {
        self.coins = self
            .coins
            .checked_sub(report.money_cost)
            .and_then(|coins| coins.checked_add(report.revenue()))
            .ok_or_else(|| FarmerError::ArithmeticOverflow {
                context: format!("balance after {}", report.action),
            })?;
        self.add_experience(report.exp_gained)?;
        Ok(())
    }

    /// Try to register for `target`.
    ///
    /// On success the held rank and perks are replaced and the report
    /// carries the fee as its cost, plus the cap increases every live crop
    /// should receive. The fee is charged when the report is applied, like
    /// any other cost. On refusal nothing changes.
    pub fn register(&mut self, target: &RankDefinition) -> ActionReport {
        if let Err(why) = rank::check_eligibility(self.rank, self.level, self.coins, target) {
            let reason = RejectionReason::RankIneligible(why);
            return ActionReport::rejected(
                ActionType::Register,
                None,
                reason,
                messages::rejection(ActionType::Register, reason),
            );
        }

        let water_cap_increase = target
            .perks
            .water_cap_increase
            .saturating_sub(self.perks.water_cap_increase);
        let fertilizer_cap_increase = target
            .perks
            .fertilizer_cap_increase
            .saturating_sub(self.perks.fertilizer_cap_increase);

        info!(from = %self.rank, to = %target.rank, fee = %target.fee, "Rank registered");
        self.rank = target.rank;
        self.perks = target.perks;

        ActionReport::succeeded(ActionType::Register, None, messages::REGISTER_SUCCESS)
            .with_cost(target.fee)
            .with_payload(ActionPayload::RankGranted {
                rank: target.rank,
                water_cap_increase,
                fertilizer_cap_increase,
            })
    }

    /// Detached snapshot for display.
    pub const fn view(&self) -> PlayerView {
        PlayerView {
            rank: self.rank,
            coins: self.coins,
            level: self.level,
            experience: self.experience,
            perks: self.perks,
        }
    }
}
