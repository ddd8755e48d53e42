//! Messages written to stdout, one JSON object per line.
//!
//! Every message is tagged with `"type"`:
//!
//! - `welcome` -- sent once before any command is read: the crop menu, the
//!   rank ladder, the starting player, and the starting farm;
//! - `report` -- the [`ActionReport`] for one command plus the player after
//!   it was booked;
//! - `error` -- the input line was not a valid command or broke the session
//!   contract (off-grid tile, unknown crop or rank name);
//! - `game_over` -- the session ended; no further input is read.

use serde::Serialize;

use furrow_core::{EndReason, GameSession};
use furrow_farmer::RankDefinition;
use furrow_types::{ActionReport, PlayerView, TileView};
use furrow_world::{CropDefinition, RandomSource};

/// One line of engine output.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outbound<'a> {
    /// Session start.
    Welcome {
        /// Current day.
        day: u32,
        /// Crop menu in catalog order.
        crops: Vec<&'a CropDefinition>,
        /// Rank ladder in tier order.
        ranks: Vec<&'a RankDefinition>,
        /// Starting player.
        player: PlayerView,
        /// Starting farm, row-major.
        tiles: Vec<TileView>,
    },

    /// Outcome of one command.
    Report {
        /// Day after the command.
        day: u32,
        /// The command's report.
        report: &'a ActionReport,
        /// Player after the report was booked.
        player: PlayerView,
    },

    /// The input line was rejected without touching the session.
    Error {
        /// What went wrong.
        error: String,
    },

    /// The session ended.
    GameOver {
        /// Day the session ended on.
        day: u32,
        /// Why it ended.
        reason: EndReason,
        /// Message shown to the player.
        message: &'static str,
        /// Final player state.
        player: PlayerView,
    },
}

impl<'a> Outbound<'a> {
    /// Opening message for `session`.
    pub fn welcome<R: RandomSource>(session: &'a GameSession<R>) -> Self {
        Self::Welcome {
            day: session.day(),
            crops: session.catalog().iter().collect(),
            ranks: session.ranks().iter().collect(),
            player: session.player_view(),
            tiles: session.tile_views(),
        }
    }

    /// Report message for a resolved command.
    pub const fn report<R: RandomSource>(
        session: &GameSession<R>,
        report: &'a ActionReport,
    ) -> Self {
        Self::Report {
            day: session.day(),
            report,
            player: session.player_view(),
        }
    }

    /// Closing message for a session that ended with `reason`.
    pub const fn game_over<R: RandomSource>(session: &GameSession<R>, reason: EndReason) -> Self {
        Self::GameOver {
            day: session.day(),
            reason,
            message: reason.message(),
            player: session.player_view(),
        }
    }
}
