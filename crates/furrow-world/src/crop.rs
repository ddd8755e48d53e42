//! Planted crop state: growth, watering, withering, and sell price.
//!
//! # Lifecycle
//!
//! A crop ages by one on every day advance, withered or not. Once its age
//! reaches the species' harvest age, the first matching rule decides its
//! status:
//!
//! 1. water below requirement -> withered, lacks water
//! 2. fertilizer below requirement -> withered, lacks fertilizer
//! 3. age past harvest age -> withered, overripe
//! 4. otherwise -> harvestable
//!
//! Withered is final: later days keep aging the crop but never touch its
//! status again.
//!
//! # Pricing
//!
//! ```text
//! base       = units * (base_sell_price + bonus_earnings)
//! water      = base * 0.2 * (water - 1)
//! fertilizer = base * 0.5 * fertilizer
//! profit     = (base + water + fertilizer) * premium_rate
//! ```
//!
//! A crop harvested with no water recorded gets a negative water term.

use std::sync::Arc;

use rust_decimal::Decimal;

use furrow_types::{CropStatus, CropView, WitherReason};

use crate::catalog::CropDefinition;
use crate::error::WorldError;
use crate::random::RandomSource;

/// Water bonus factor per unit of water beyond the first.
const WATER_BONUS_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// Fertilizer bonus factor per unit of fertilizer.
const FERTILIZER_BONUS_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// A crop growing on a tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropInstance {
    definition: Arc<CropDefinition>,
    age: u32,
    water: u32,
    water_cap: u32,
    fertilizer: u32,
    fertilizer_cap: u32,
    status: CropStatus,
}

impl CropInstance {
    /// Plant a fresh crop. Caps start at the species' caps raised by the
    /// given bonuses.
    pub fn plant(definition: Arc<CropDefinition>, water_bonus: u32, fertilizer_bonus: u32) -> Self {
        let water_cap = definition.water_cap.saturating_add(water_bonus);
        let fertilizer_cap = definition.fertilizer_cap.saturating_add(fertilizer_bonus);
        Self {
            definition,
            age: 0,
            water: 0,
            water_cap,
            fertilizer: 0,
            fertilizer_cap,
            status: CropStatus::Growing,
        }
    }

    /// The species definition.
    pub fn definition(&self) -> &CropDefinition {
        &self.definition
    }

    /// Species name.
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// Days since planting.
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Water received so far.
    pub const fn water(&self) -> u32 {
        self.water
    }

    /// Current water cap.
    pub const fn water_cap(&self) -> u32 {
        self.water_cap
    }

    /// Fertilizer received so far.
    pub const fn fertilizer(&self) -> u32 {
        self.fertilizer
    }

    /// Current fertilizer cap.
    pub const fn fertilizer_cap(&self) -> u32 {
        self.fertilizer_cap
    }

    /// Lifecycle status.
    pub const fn status(&self) -> CropStatus {
        self.status
    }

    /// Whether the crop has withered.
    pub const fn is_withered(&self) -> bool {
        self.status.is_withered()
    }

    /// Whether the crop can be harvested now.
    pub const fn is_harvestable(&self) -> bool {
        self.status.is_harvestable()
    }

    /// Age the crop one day and re-evaluate its status.
    ///
    /// Returns the new status when it changed.
    pub fn advance_day(&mut self) -> Option<CropStatus> {
        self.age = self.age.saturating_add(1);

        if self.status.is_withered() || self.age < self.definition.harvest_age {
            return None;
        }

        let next = if self.water < self.definition.water_needed {
            CropStatus::Withered(WitherReason::LacksWater)
        } else if self.fertilizer < self.definition.fertilizer_needed {
            CropStatus::Withered(WitherReason::LacksFertilizer)
        } else if self.age > self.definition.harvest_age {
            CropStatus::Withered(WitherReason::Overripe)
        } else {
            CropStatus::Harvestable
        };

        if next == self.status {
            None
        } else {
            self.status = next;
            Some(next)
        }
    }

    /// Add one unit of water, clamped at the cap.
    pub fn add_water(&mut self) {
        self.water = self.water.saturating_add(1).min(self.water_cap);
    }

    /// Add one unit of fertilizer, clamped at the cap.
    pub fn add_fertilizer(&mut self) {
        self.fertilizer = self.fertilizer.saturating_add(1).min(self.fertilizer_cap);
    }

    /// Raise both caps. Current levels are kept as they are.
    pub const fn raise_caps(&mut self, water: u32, fertilizer: u32) {
        self.water_cap = self.water_cap.saturating_add(water);
        self.fertilizer_cap = self.fertilizer_cap.saturating_add(fertilizer);
    }

    /// Roll the number of units this crop produces.
    pub fn roll_yield<R: RandomSource + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.roll(self.definition.min_yield, self.definition.max_yield)
    }

    /// Sell price for `units` of produce at the current water and fertilizer
    /// levels.
    pub fn sell_price(&self, units: u32, bonus_earnings: Decimal) -> Result<Decimal, WorldError> {
        let def = &self.definition;
        let unit_price = def.base_sell_price.checked_add(bonus_earnings);
        let base = unit_price.and_then(|price| price.checked_mul(Decimal::from(units)));

        let water_term = Decimal::from(self.water).checked_sub(Decimal::ONE);
        let water_bonus = base
            .and_then(|b| b.checked_mul(WATER_BONUS_RATE))
            .zip(water_term)
            .and_then(|(b, w)| b.checked_mul(w));

        let fertilizer_bonus = base
            .and_then(|b| b.checked_mul(FERTILIZER_BONUS_RATE))
            .and_then(|b| b.checked_mul(Decimal::from(self.fertilizer)));

        base.zip(water_bonus)
            .and_then(|(b, w)| b.checked_add(w))
            .zip(fertilizer_bonus)
            .and_then(|(sum, f)| sum.checked_add(f))
            .and_then(|sum| sum.checked_mul(def.premium_rate()))
            .ok_or(WorldError::ArithmeticOverflow)
    }

    /// Detached snapshot for display.
    pub fn view(&self) -> CropView {
        CropView {
            name: self.definition.name.clone(),
            category: self.definition.category,
            age: self.age,
            harvest_age: self.definition.harvest_age,
            water: self.water,
            water_needed: self.definition.water_needed,
            water_cap: self.water_cap,
            fertilizer: self.fertilizer,
            fertilizer_needed: self.definition.fertilizer_needed,
            fertilizer_cap: self.fertilizer_cap,
            status: self.status,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use furrow_types::CropCategory;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::random::ScriptedRandom;

    fn definition(category: CropCategory) -> Arc<CropDefinition> {
        Arc::new(CropDefinition {
            name: "Turnip".to_owned(),
            category,
            base_seed_cost: dec!(2),
            base_sell_price: dec!(1),
            exp_per_unit: dec!(5),
            harvest_age: 2,
            min_yield: 1,
            max_yield: 2,
            water_needed: 1,
            water_cap: 2,
            fertilizer_needed: 0,
            fertilizer_cap: 1,
        })
    }

    fn turnip() -> CropInstance {
        CropInstance::plant(definition(CropCategory::RootCrop), 0, 0)
    }

    #[test]
    fn watered_crop_becomes_harvestable_on_time() {
        let mut crop = turnip();
        crop.add_water();
        assert_eq!(crop.advance_day(), None);
        assert_eq!(crop.advance_day(), Some(CropStatus::Harvestable));
        assert_eq!(crop.age(), 2);
    }

    #[test]
    fn dry_crop_withers_for_water() {
        let mut crop = turnip();
        crop.advance_day();
        assert_eq!(
            crop.advance_day(),
            Some(CropStatus::Withered(WitherReason::LacksWater))
        );
    }

    #[test]
    fn water_is_checked_before_fertilizer() {
        let mut def = definition(CropCategory::RootCrop).as_ref().clone();
        def.fertilizer_needed = 1;
        let mut crop = CropInstance::plant(Arc::new(def), 0, 0);
        crop.advance_day();
        assert_eq!(
            crop.advance_day(),
            Some(CropStatus::Withered(WitherReason::LacksWater))
        );
    }

    #[test]
    fn missing_fertilizer_withers() {
        let mut def = definition(CropCategory::RootCrop).as_ref().clone();
        def.fertilizer_needed = 1;
        let mut crop = CropInstance::plant(Arc::new(def), 0, 0);
        crop.add_water();
        crop.advance_day();
        assert_eq!(
            crop.advance_day(),
            Some(CropStatus::Withered(WitherReason::LacksFertilizer))
        );
    }

    #[test]
    fn unharvested_crop_goes_overripe() {
        let mut crop = turnip();
        crop.add_water();
        crop.advance_day();
        crop.advance_day();
        assert_eq!(
            crop.advance_day(),
            Some(CropStatus::Withered(WitherReason::Overripe))
        );
    }

    #[test]
    fn withered_status_is_frozen_but_age_continues() {
        let mut crop = turnip();
        crop.advance_day();
        crop.advance_day();
        let frozen = crop.status();
        for _ in 0..5 {
            assert_eq!(crop.advance_day(), None);
            assert_eq!(crop.status(), frozen);
        }
        assert_eq!(crop.age(), 7);
    }

    #[test]
    fn water_and_fertilizer_clamp_at_caps() {
        let mut crop = turnip();
        for _ in 0..10 {
            crop.add_water();
            crop.add_fertilizer();
            assert!(crop.water() <= crop.water_cap());
            assert!(crop.fertilizer() <= crop.fertilizer_cap());
        }
        assert_eq!(crop.water(), 2);
        assert_eq!(crop.fertilizer(), 1);
    }

    #[test]
    fn raised_caps_keep_progress() {
        let mut crop = turnip();
        crop.add_water();
        crop.add_water();
        crop.raise_caps(2, 1);
        assert_eq!(crop.water(), 2);
        assert_eq!(crop.water_cap(), 4);
        assert_eq!(crop.fertilizer_cap(), 2);
        crop.add_water();
        assert_eq!(crop.water(), 3);
    }

    #[test]
    fn plant_applies_cap_bonuses() {
        let crop = CropInstance::plant(definition(CropCategory::RootCrop), 2, 1);
        assert_eq!(crop.water_cap(), 4);
        assert_eq!(crop.fertilizer_cap(), 2);
    }

    #[test]
    fn sell_price_follows_formula() {
        let mut crop = turnip();
        crop.add_water();
        crop.add_water();
        crop.add_fertilizer();
        // base = 2 * (1 + 1) = 4; water = 4 * 0.2 * 1 = 0.8; fert = 4 * 0.5 * 1 = 2
        assert_eq!(crop.sell_price(2, dec!(1)).ok(), Some(dec!(6.8)));
    }

    #[test]
    fn zero_water_gives_negative_water_bonus() {
        let crop = turnip();
        // base = 1; water = 1 * 0.2 * -1 = -0.2
        assert_eq!(crop.sell_price(1, Decimal::ZERO).ok(), Some(dec!(0.8)));
    }

    #[test]
    fn flowers_sell_at_premium() {
        let mut crop = CropInstance::plant(definition(CropCategory::Flower), 0, 0);
        crop.add_water();
        // base = 10; water bonus 0; fert 0; premium 1.1
        assert_eq!(crop.sell_price(10, Decimal::ZERO).ok(), Some(dec!(11.0)));
    }

    #[test]
    fn yield_uses_injected_source() {
        let crop = turnip();
        let mut rng = ScriptedRandom::new([2, 1]);
        assert_eq!(crop.roll_yield(&mut rng), 2);
        assert_eq!(crop.roll_yield(&mut rng), 1);
    }

    #[test]
    fn view_mirrors_state() {
        let mut crop = turnip();
        crop.add_water();
        let view = crop.view();
        assert_eq!(view.name, "Turnip");
        assert_eq!(view.water, 1);
        assert_eq!(view.water_needed, 1);
        assert_eq!(view.status, CropStatus::Growing);
    }
}
