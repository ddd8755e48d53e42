//! Human-readable report messages.
//!
//! Every [`ActionReport`](furrow_types::ActionReport) carries one of these.
//! Success messages are per action; rejection messages are looked up from
//! the action and the [`RejectionReason`] through [`rejection`].

use furrow_types::{ActionType, RankIneligibility, RejectionReason, TileConflict};

// ---- Success ----

/// Plow succeeded.
pub const PLOW_SUCCESS: &str = "The tile was successfully plowed!";
/// Plant succeeded.
pub const PLANT_SUCCESS: &str = "The crop was successfully planted on the tile!";
/// Water succeeded.
pub const WATER_SUCCESS: &str = "The crop was successfully watered!";
/// Fertilize succeeded.
pub const FERTILIZE_SUCCESS: &str = "The crop was successfully fertilized!";
/// Harvest succeeded.
pub const HARVEST_SUCCESS: &str = "The crop was successfully harvested!";
/// Dig pulled out a crop.
pub const DIG_CROP_REMOVED: &str = "The crop was removed!";
/// Dig unplowed an empty plowed tile.
pub const DIG_TILE_UNPLOWED: &str = "The tile was unplowed!";
/// Mine succeeded.
pub const MINE_SUCCESS: &str = "The rock was successfully removed!";
/// The day advanced.
pub const NEXT_DAY: &str = "Moved on to the next day!";
/// Rank registration succeeded.
pub const REGISTER_SUCCESS: &str = "Registration successful!";

// ---- Rejection ----

const ROCK_PRESENT: &str = "The tile is occupied by a rock!";
const CROP_PRESENT: &str = "The tile is occupied by a crop!";
const ALREADY_PLOWED: &str = "The tile is already plowed!";
const NOT_PLOWED: &str = "The tile is not yet plowed!";
const DIG_NOTHING: &str = "The tile is not plowed! There is nothing to do!";
const INSUFFICIENT_MONEY: &str = "You have insufficient money!";
const ADJACENCY_BLOCKED: &str =
    "You cannot plant this crop here because some of the surrounding tiles are occupied!";
const CROP_WITHERED: &str = "The crop is withered!";
const NOT_HARVESTABLE: &str = "This crop is not harvestable!";
const NO_ROCK: &str = "There is no rock to mine!";
const HIGHER_RANK_HELD: &str = "You have already registered for a higher rank!";
const SAME_RANK_HELD: &str = "You are currently registered for this rank!";
const LEVEL_TOO_LOW: &str = "You have not reached the required level for the rank!";
const RANK_FEE_UNAFFORDABLE: &str = "You have insufficient money to register for this rank!";

/// Message for a rejected `action`.
pub const fn rejection(action: ActionType, reason: RejectionReason) -> &'static str {
    match reason {
        RejectionReason::InsufficientFunds => INSUFFICIENT_MONEY,
        RejectionReason::InvalidTileState(conflict) => tile_conflict(action, conflict),
        RejectionReason::AdjacencyBlocked => ADJACENCY_BLOCKED,
        RejectionReason::CropNotHarvestable => NOT_HARVESTABLE,
        RejectionReason::CropWithered => CROP_WITHERED,
        RejectionReason::NoCropPresent => no_crop(action),
        RejectionReason::NoRockPresent => NO_ROCK,
        RejectionReason::RankIneligible(why) => match why {
            RankIneligibility::HigherRankHeld => HIGHER_RANK_HELD,
            RankIneligibility::SameRankHeld => SAME_RANK_HELD,
            RankIneligibility::LevelTooLow => LEVEL_TOO_LOW,
            RankIneligibility::InsufficientFunds => RANK_FEE_UNAFFORDABLE,
        },
    }
}

const fn tile_conflict(action: ActionType, conflict: TileConflict) -> &'static str {
    match conflict {
        TileConflict::RockPresent => ROCK_PRESENT,
        TileConflict::CropPresent => CROP_PRESENT,
        TileConflict::AlreadyPlowed => ALREADY_PLOWED,
        TileConflict::NotPlowed => match action {
            ActionType::Dig => DIG_NOTHING,
            _ => NOT_PLOWED,
        },
    }
}

const fn no_crop(action: ActionType) -> &'static str {
    match action {
        ActionType::Water => "There is no crop to water!",
        ActionType::Fertilize => "There is no crop to fertilize!",
        ActionType::Harvest => "There is no crop to harvest!",
        ActionType::Dig => DIG_TILE_UNPLOWED,
        _ => "There is no crop on this tile!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_crop_message_names_the_action() {
        assert_eq!(
            rejection(ActionType::Water, RejectionReason::NoCropPresent),
            "There is no crop to water!"
        );
        assert_eq!(
            rejection(ActionType::Harvest, RejectionReason::NoCropPresent),
            "There is no crop to harvest!"
        );
    }

    #[test]
    fn dig_on_bare_ground_has_its_own_message() {
        let reason = RejectionReason::InvalidTileState(TileConflict::NotPlowed);
        assert_eq!(rejection(ActionType::Dig, reason), DIG_NOTHING);
        assert_eq!(rejection(ActionType::Plant, reason), NOT_PLOWED);
    }

    #[test]
    fn rank_reasons_map_to_distinct_messages() {
        let messages: Vec<&str> = [
            RankIneligibility::HigherRankHeld,
            RankIneligibility::SameRankHeld,
            RankIneligibility::LevelTooLow,
            RankIneligibility::InsufficientFunds,
        ]
        .into_iter()
        .map(|why| rejection(ActionType::Register, RejectionReason::RankIneligible(why)))
        .collect();
        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i.saturating_add(1)) {
                assert_ne!(a, b);
            }
        }
    }
}
