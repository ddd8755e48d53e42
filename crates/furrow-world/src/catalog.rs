//! Crop species definitions and the catalog that holds them.
//!
//! A [`CropDefinition`] is immutable data describing one species. The
//! [`CropCatalog`] is built once at session start and handed to whoever needs
//! it; planted crops share their definition through an [`Arc`].
//!
//! The standard catalog carries eight species:
//!
//! | Name      | Category   | Seed | Sell | Exp  | Days | Water | Fert | Yield |
//! |-----------|------------|------|------|------|------|-------|------|-------|
//! | Turnip    | Root crop  | 5    | 6    | 5    | 2    | 1/2   | 0/1  | 1-2   |
//! | Carrot    | Root crop  | 10   | 9    | 7.5  | 3    | 1/2   | 0/1  | 1-2   |
//! | Potato    | Root crop  | 20   | 3    | 12.5 | 5    | 3/4   | 1/2  | 1-10  |
//! | Rose      | Flower     | 5    | 5    | 2.5  | 1    | 1/2   | 0/1  | 1     |
//! | Tulips    | Flower     | 10   | 9    | 5    | 2    | 2/3   | 0/1  | 1     |
//! | Sunflower | Flower     | 20   | 19   | 7.5  | 3    | 2/3   | 1/2  | 1     |
//! | Mango     | Fruit tree | 100  | 8    | 25   | 10   | 7/7   | 4/4  | 5-15  |
//! | Apple     | Fruit tree | 200  | 5    | 25   | 10   | 7/7   | 5/5  | 10-15 |

use std::collections::BTreeSet;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use furrow_types::CropCategory;

use crate::error::WorldError;

// ---------------------------------------------------------------------------
// CropDefinition
// ---------------------------------------------------------------------------

/// Static description of a crop species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropDefinition {
    /// Species name, unique within a catalog.
    pub name: String,
    /// Species category.
    pub category: CropCategory,
    /// Seed price before rank discounts.
    pub base_seed_cost: Decimal,
    /// Sell price per unit before rank bonuses.
    pub base_sell_price: Decimal,
    /// Experience awarded per unit harvested.
    pub exp_per_unit: Decimal,
    /// Age in days at which the crop is ready.
    pub harvest_age: u32,
    /// Smallest possible harvest.
    pub min_yield: u32,
    /// Largest possible harvest.
    pub max_yield: u32,
    /// Water required by harvest age.
    pub water_needed: u32,
    /// Water cap before rank bonuses.
    pub water_cap: u32,
    /// Fertilizer required by harvest age.
    pub fertilizer_needed: u32,
    /// Fertilizer cap before rank bonuses.
    pub fertilizer_cap: u32,
}

impl CropDefinition {
    /// Price multiplier for this species' category.
    pub const fn premium_rate(&self) -> Decimal {
        self.category.premium_rate()
    }

    /// Seed price after a rank discount, never below zero.
    pub fn discounted_seed_cost(&self, reduction: Decimal) -> Decimal {
        self.base_seed_cost
            .checked_sub(reduction)
            .unwrap_or(Decimal::ZERO)
            .max(Decimal::ZERO)
    }

    /// Check the definition's invariants.
    ///
    /// `min_yield <= max_yield`, and every money value is non-negative.
    pub fn validate(&self) -> Result<(), WorldError> {
        let invalid = |reason: &str| WorldError::InvalidCropDefinition {
            name: self.name.clone(),
            reason: reason.to_owned(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name is empty"));
        }
        if self.min_yield > self.max_yield {
            return Err(invalid("min_yield exceeds max_yield"));
        }
        if self.base_seed_cost.is_sign_negative() {
            return Err(invalid("base_seed_cost is negative"));
        }
        if self.base_sell_price.is_sign_negative() {
            return Err(invalid("base_sell_price is negative"));
        }
        if self.exp_per_unit.is_sign_negative() {
            return Err(invalid("exp_per_unit is negative"));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// CropCatalog
// ---------------------------------------------------------------------------

/// Order-stable registry of crop species.
///
/// Lookups by name are case-insensitive. Iteration follows insertion order,
/// which is the order a front end should list the crops in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropCatalog {
    crops: Vec<Arc<CropDefinition>>,
}

impl CropCatalog {
    /// The eight standard species.
    pub fn standard() -> Self {
        let crops = vec![
            species("Turnip", CropCategory::RootCrop, (5, 0), (6, 0), (5, 0), 2, (1, 2), (1, 2), (0, 1)),
            species("Carrot", CropCategory::RootCrop, (10, 0), (9, 0), (75, 1), 3, (1, 2), (1, 2), (0, 1)),
            species("Potato", CropCategory::RootCrop, (20, 0), (3, 0), (125, 1), 5, (1, 10), (3, 4), (1, 2)),
            species("Rose", CropCategory::Flower, (5, 0), (5, 0), (25, 1), 1, (1, 1), (1, 2), (0, 1)),
            species("Tulips", CropCategory::Flower, (10, 0), (9, 0), (5, 0), 2, (1, 1), (2, 3), (0, 1)),
            species("Sunflower", CropCategory::Flower, (20, 0), (19, 0), (75, 1), 3, (1, 1), (2, 3), (1, 2)),
            species("Mango", CropCategory::FruitTree, (100, 0), (8, 0), (25, 0), 10, (5, 15), (7, 7), (4, 4)),
            species("Apple", CropCategory::FruitTree, (200, 0), (5, 0), (25, 0), 10, (10, 15), (7, 7), (5, 5)),
        ];
        Self {
            crops: crops.into_iter().map(Arc::new).collect(),
        }
    }

    /// Build a catalog from custom definitions.
    ///
    /// Rejects an empty list, duplicate names (case-insensitive), and any
    /// definition that fails [`CropDefinition::validate`].
    pub fn from_definitions(definitions: Vec<CropDefinition>) -> Result<Self, WorldError> {
        if definitions.is_empty() {
            return Err(WorldError::EmptyCatalog);
        }

        let mut seen = BTreeSet::new();
        for definition in &definitions {
            definition.validate()?;
            if !seen.insert(definition.name.to_lowercase()) {
                return Err(WorldError::DuplicateCrop(definition.name.clone()));
            }
        }

        Ok(Self {
            crops: definitions.into_iter().map(Arc::new).collect(),
        })
    }

    /// Find a species by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&Arc<CropDefinition>> {
        let wanted = name.trim();
        self.crops
            .iter()
            .find(|crop| crop.name.eq_ignore_ascii_case(wanted))
    }

    /// Find a species by name, or fail with [`WorldError::UnknownCrop`].
    pub fn lookup(&self, name: &str) -> Result<&Arc<CropDefinition>, WorldError> {
        self.get(name)
            .ok_or_else(|| WorldError::UnknownCrop(name.to_owned()))
    }

    /// Iterate species in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CropDefinition> {
        self.crops.iter().map(AsRef::as_ref)
    }

    /// The species with the lowest base seed cost. Ties go to the earlier
    /// entry.
    pub fn cheapest(&self) -> Option<&CropDefinition> {
        self.iter().reduce(|best, crop| {
            if crop.base_seed_cost < best.base_seed_cost {
                crop
            } else {
                best
            }
        })
    }

    /// Number of species.
    pub const fn len(&self) -> usize {
        self.crops.len()
    }

    /// Whether the catalog is empty. Catalogs built through
    /// [`from_definitions`](Self::from_definitions) never are.
    pub const fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}

impl Default for CropCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Build a standard definition. Money values are `(mantissa, scale)` pairs.
#[allow(clippy::too_many_arguments)]
fn species(
    name: &str,
    category: CropCategory,
    seed_cost: (i64, u32),
    sell_price: (i64, u32),
    exp_per_unit: (i64, u32),
    harvest_age: u32,
    (min_yield, max_yield): (u32, u32),
    (water_needed, water_cap): (u32, u32),
    (fertilizer_needed, fertilizer_cap): (u32, u32),
) -> CropDefinition {
    CropDefinition {
        name: name.to_owned(),
        category,
        base_seed_cost: Decimal::new(seed_cost.0, seed_cost.1),
        base_sell_price: Decimal::new(sell_price.0, sell_price.1),
        exp_per_unit: Decimal::new(exp_per_unit.0, exp_per_unit.1),
        harvest_age,
        min_yield,
        max_yield,
        water_needed,
        water_cap,
        fertilizer_needed,
        fertilizer_cap,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
