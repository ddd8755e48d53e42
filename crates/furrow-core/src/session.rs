//! The game session: the one place commands are sequenced.
//!
//! Each [`GameSession::submit`] call runs one full turn:
//!
//! 1. **Dispatch** -- tile commands go to the action handlers, `Register`
//!    goes to progression, `AdvanceDay` ticks the grid.
//! 2. **Apply** -- the report's cost, revenue, and experience are booked on
//!    the player. A rank change pushes its cap increases onto every live
//!    crop.
//! 3. **End check** -- the session ends when the player is bankrupt (no
//!    live crop and no affordable seed) or every tile holds a withered crop.
//!
//! Gameplay failures come back as unsuccessful reports. `Err` means the
//! caller broke the contract: a tile off the grid, an unknown crop or rank
//! name, or a command after the session ended.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use furrow_farmer::actions::{handlers, messages};
use furrow_farmer::{ActionContext, ActionCosts, FarmerError, ProgressionStats, RankTable};
use furrow_types::{ActionPayload, ActionReport, ActionType, Command, PlayerView, TileView};
use furrow_world::{CropCatalog, FarmGrid, RandomSource, WorldError};

use crate::config::{ConfigError, GameConfig};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Contract violations raised by a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A world lookup failed (tile off the grid, unknown crop).
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },

    /// Action resolution or progression failed.
    #[error("farmer error: {source}")]
    Farmer {
        /// The underlying farmer error.
        #[from]
        source: FarmerError,
    },

    /// The session could not be built from its configuration.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// A command arrived after the session ended.
    #[error("the session is over: {0}")]
    SessionOver(EndReason),

    /// The day counter overflowed.
    #[error("day counter overflow")]
    DayOverflow,
}

// ---------------------------------------------------------------------------
// End conditions
// ---------------------------------------------------------------------------

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// No live crop remains and the cheapest seed is out of reach.
    Bankrupt,
    /// Every tile holds a withered crop.
    AllTilesWithered,
}

impl EndReason {
    /// Message shown to the player.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Bankrupt => "No growing crops and cannot afford to buy new ones.",
            Self::AllTilesWithered => "All tiles are occupied by withered crops.",
        }
    }
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// A single-player farm game.
///
/// The session is the sole writer of the grid and the player's stats.
/// Commands are resolved one at a time, fully, in submission order.
#[derive(Debug)]
pub struct GameSession<R: RandomSource> {
    grid: FarmGrid,
    catalog: CropCatalog,
    ranks: RankTable,
    costs: ActionCosts,
    stats: ProgressionStats,
    rng: R,
    day: u32,
    outcome: Option<EndReason>,
}

impl<R: RandomSource> GameSession<R> {
    /// Start a session on an existing grid with the standard rank table.
    pub fn new(
        grid: FarmGrid,
        catalog: CropCatalog,
        costs: ActionCosts,
        starting_coins: Decimal,
        rng: R,
    ) -> Self {
        Self {
            grid,
            catalog,
            ranks: RankTable::standard(),
            costs,
            stats: ProgressionStats::new(starting_coins),
            rng,
            day: 1,
            outcome: None,
        }
    }

    /// Start a session from validated configuration, scattering the
    /// configured rocks with `rng`.
    pub fn from_config(config: &GameConfig, mut rng: R) -> Result<Self, SessionError> {
        config.validate()?;
        let catalog = config.catalog()?;
        let (grid, rocks) =
            FarmGrid::with_rocks(config.farm.rows, config.farm.columns, config.farm.rocks, &mut rng)?;
        info!(
            rows = config.farm.rows,
            columns = config.farm.columns,
            rocks,
            crops = catalog.len(),
            coins = %config.economy.starting_coins,
            "Session started"
        );
        Ok(Self::new(
            grid,
            catalog,
            config.actions.clone(),
            config.economy.starting_coins,
            rng,
        ))
    }

    /// Replace the rank table.
    #[must_use]
    pub fn with_rank_table(mut self, ranks: RankTable) -> Self {
        self.ranks = ranks;
        self
    }

    /// Replace the player's progression, e.g. to resume from a known state.
    #[must_use]
    pub fn with_progression(mut self, stats: ProgressionStats) -> Self {
        self.stats = stats;
        self
    }

    /// Resolve one command.
    pub fn submit(&mut self, command: &Command) -> Result<ActionReport, SessionError> {
        if let Some(reason) = self.outcome {
            return Err(SessionError::SessionOver(reason));
        }

        let report = self.dispatch(command)?;
        self.apply(&report)?;

        debug!(
            day = self.day,
            action = %report.action,
            tile = ?report.tile,
            success = report.success,
            cost = %report.money_cost,
            exp = %report.exp_gained,
            coins = %self.stats.coins(),
            "Command resolved"
        );

        self.outcome = self.check_end();
        if let Some(reason) = self.outcome {
            info!(day = self.day, reason = %reason, "Session over");
        }
        Ok(report)
    }

    fn dispatch(&mut self, command: &Command) -> Result<ActionReport, SessionError> {
        let ctx = ActionContext {
            costs: &self.costs,
            coins: self.stats.coins(),
            perks: self.stats.perks(),
        };
        let grid = &mut self.grid;

        let report = match command {
            Command::Plow { tile } => handlers::execute_plow(grid, *tile, &ctx)?,
            Command::Plant { tile, crop } => {
                let definition = Arc::clone(self.catalog.lookup(crop)?);
                handlers::execute_plant(grid, *tile, &definition, &ctx)?
            }
            Command::Water { tile } => handlers::execute_water(grid, *tile, &ctx)?,
            Command::Fertilize { tile } => handlers::execute_fertilize(grid, *tile, &ctx)?,
            Command::Harvest { tile } => {
                handlers::execute_harvest(grid, *tile, &ctx, &mut self.rng)?
            }
            Command::Dig { tile } => handlers::execute_dig(grid, *tile, &ctx)?,
            Command::Mine { tile } => handlers::execute_mine(grid, *tile, &ctx)?,
            Command::AdvanceDay => {
                let day = self.day.checked_add(1).ok_or(SessionError::DayOverflow)?;
                let transitions = grid.advance_day();
                self.day = day;
                ActionReport::succeeded(ActionType::AdvanceDay, None, messages::NEXT_DAY)
                    .with_payload(ActionPayload::DayAdvanced {
                        day,
                        harvestable: transitions.harvestable,
                        withered: transitions.withered,
                    })
            }
            Command::Register { rank } => {
                let target = *self.ranks.lookup(rank)?;
                self.stats.register(&target)
            }
        };
        Ok(report)
    }

    fn apply(&mut self, report: &ActionReport) -> Result<(), SessionError> {
        self.stats.apply_report(report)?;
        if let ActionPayload::RankGranted {
            water_cap_increase,
            fertilizer_cap_increase,
            ..
        } = report.payload
        {
            let updated = self
                .grid
                .propagate_cap_increase(water_cap_increase, fertilizer_cap_increase);
            info!(
                rank = %self.stats.rank(),
                water_cap_increase,
                fertilizer_cap_increase,
                crops = updated,
                "Rank perks applied to live crops"
            );
        }
        Ok(())
    }

    /// Evaluate both losing conditions against the current state.
    pub fn check_end(&self) -> Option<EndReason> {
        if self.grid.all_tiles_withered() {
            return Some(EndReason::AllTilesWithered);
        }
        if !self.grid.has_live_crop() && !self.can_afford_any_seed() {
            return Some(EndReason::Bankrupt);
        }
        None
    }

    fn can_afford_any_seed(&self) -> bool {
        let reduction = self.stats.perks().seed_cost_reduction;
        self.catalog
            .cheapest()
            .is_some_and(|crop| self.stats.coins() >= crop.discounted_seed_cost(reduction))
    }

    // ---- Queries ----

    /// Current day, starting at 1.
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Why the session ended, if it has.
    pub const fn outcome(&self) -> Option<EndReason> {
        self.outcome
    }

    /// Whether the session has ended.
    pub const fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The farm grid.
    pub const fn grid(&self) -> &FarmGrid {
        &self.grid
    }

    /// The crop catalog, in menu order.
    pub const fn catalog(&self) -> &CropCatalog {
        &self.catalog
    }

    /// The rank table, in tier order.
    pub const fn ranks(&self) -> &RankTable {
        &self.ranks
    }

    /// The player's progression.
    pub const fn stats(&self) -> &ProgressionStats {
        &self.stats
    }

    /// Snapshot of the player.
    pub const fn player_view(&self) -> PlayerView {
        self.stats.view()
    }

    /// Snapshot of every tile, row-major.
    pub fn tile_views(&self) -> Vec<TileView> {
        self.grid.view()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use furrow_types::{Rank, TilePos};
    use furrow_world::{ScriptedRandom, SeededRandom};
    use rust_decimal_macros::dec;

    use super::*;

    fn session(rows: usize, cols: usize, coins: Decimal) -> GameSession<ScriptedRandom> {
        GameSession::new(
            FarmGrid::new(rows, cols).unwrap(),
            CropCatalog::standard(),
            ActionCosts::default(),
            coins,
            ScriptedRandom::default(),
        )
    }

    #[test]
    fn day_starts_at_one_and_advances() {
        let mut game = session(5, 10, dec!(100));
        assert_eq!(game.day(), 1);
        let report = game.submit(&Command::AdvanceDay).unwrap();
        assert_eq!(report.message, "Moved on to the next day!");
        assert_eq!(game.day(), 2);
        assert!(matches!(
            report.payload,
            ActionPayload::DayAdvanced { day: 2, .. }
        ));
    }

    #[test]
    fn costs_and_experience_are_booked() {
        let mut game = session(5, 10, dec!(100));
        let tile = TilePos::new(1, 1);
        game.submit(&Command::Plow { tile }).unwrap();
        game.submit(&Command::Plant {
            tile,
            crop: "carrot".to_owned(),
        })
        .unwrap();
        game.submit(&Command::Fertilize { tile }).unwrap();
        assert_eq!(game.stats().coins(), dec!(80));
        assert_eq!(game.stats().experience(), dec!(4.5));
    }

    #[test]
    fn unknown_crop_is_a_contract_violation() {
        let mut game = session(5, 10, dec!(100));
        let result = game.submit(&Command::Plant {
            tile: TilePos::new(1, 1),
            crop: "kale".to_owned(),
        });
        assert!(matches!(
            result,
            Err(SessionError::World {
                source: WorldError::UnknownCrop(_)
            })
        ));
    }

    #[test]
    fn unknown_rank_is_a_contract_violation() {
        let mut game = session(5, 10, dec!(100));
        let result = game.submit(&Command::Register {
            rank: "emperor".to_owned(),
        });
        assert!(matches!(
            result,
            Err(SessionError::Farmer {
                source: FarmerError::UnknownRank(_)
            })
        ));
    }

    #[test]
    fn refused_rank_leaves_player_untouched() {
        let mut game = session(5, 10, dec!(1000));
        let before = game.player_view();
        let report = game
            .submit(&Command::Register {
                rank: "Registered".to_owned(),
            })
            .unwrap();
        assert!(!report.success);
        assert_eq!(game.player_view(), before);
        assert_eq!(game.stats().rank(), Rank::Default);
    }

    #[test]
    fn from_config_places_requested_rocks() {
        let config = GameConfig::parse("farm:\n  rocks: 15\n  seed: 3\n").unwrap();
        let game = GameSession::from_config(&config, SeededRandom::new(3)).unwrap();
        assert_eq!(game.grid().rock_count(), 15);
        assert_eq!(game.stats().coins(), dec!(100));
        assert_eq!(game.tile_views().len(), 50);
    }

    #[test]
    fn end_reason_messages() {
        assert_eq!(
            EndReason::Bankrupt.to_string(),
            "No growing crops and cannot afford to buy new ones."
        );
        assert_eq!(
            EndReason::AllTilesWithered.to_string(),
            "All tiles are occupied by withered crops."
        );
    }
}
