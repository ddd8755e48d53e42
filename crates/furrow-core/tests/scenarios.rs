//! End-to-end play through [`GameSession`]: the documented scenarios, the
//! rank propagation rule, and both losing conditions.

#![allow(clippy::unwrap_used)]

use furrow_core::{EndReason, GameSession, SessionError};
use furrow_farmer::{ActionCosts, ProgressionStats};
use furrow_types::{
    ActionPayload, Command, CropCategory, CropStatus, Rank, RejectionReason, TilePos,
    WitherReason,
};
use furrow_world::{CropCatalog, CropDefinition, FarmGrid, ScriptedRandom};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const TILE: TilePos = TilePos::new(2, 5);

/// Turnip with the figures used throughout the scenarios below.
fn scenario_turnip() -> CropDefinition {
    CropDefinition {
        name: "Turnip".to_owned(),
        category: CropCategory::RootCrop,
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
    }
}

fn scenario_session(coins: Decimal) -> GameSession<ScriptedRandom> {
    GameSession::new(
        FarmGrid::new(5, 10).unwrap(),
        CropCatalog::from_definitions(vec![scenario_turnip()]).unwrap(),
        ActionCosts::default(),
        coins,
        ScriptedRandom::new([2]),
    )
}

fn standard_session(rows: usize, cols: usize, coins: Decimal) -> GameSession<ScriptedRandom> {
    GameSession::new(
        FarmGrid::new(rows, cols).unwrap(),
        CropCatalog::standard(),
        ActionCosts::default(),
        coins,
        ScriptedRandom::default(),
    )
}

fn plant(crop: &str, tile: TilePos) -> Command {
    Command::Plant {
        tile,
        crop: crop.to_owned(),
    }
}

fn status_at(game: &GameSession<ScriptedRandom>, tile: TilePos) -> Option<CropStatus> {
    game.grid().tile(tile).unwrap().crop().map(|crop| crop.status())
}

#[test]
fn scenario_a_watered_turnip_becomes_harvestable() {
    let mut game = scenario_session(dec!(100));
    assert!(game.submit(&Command::Plow { tile: TILE }).unwrap().success);

    let report = game.submit(&plant("Turnip", TILE)).unwrap();
    assert!(report.success);
    assert_eq!(report.money_cost, dec!(2));
    assert_eq!(game.stats().coins(), dec!(98));

    assert!(game.submit(&Command::Water { tile: TILE }).unwrap().success);
    game.submit(&Command::AdvanceDay).unwrap();
    let report = game.submit(&Command::AdvanceDay).unwrap();

    assert_eq!(status_at(&game, TILE), Some(CropStatus::Harvestable));
    assert!(matches!(
        report.payload,
        ActionPayload::DayAdvanced { day: 3, ref harvestable, .. } if harvestable == &[TILE]
    ));

    // Two units at (1 + 0) each, water 1 so no water bonus.
    let report = game.submit(&Command::Harvest { tile: TILE }).unwrap();
    assert!(report.success);
    assert_eq!(report.revenue(), dec!(2.0));
    assert_eq!(report.exp_gained, dec!(10));
    assert_eq!(game.stats().coins(), dec!(100));
    let tile = game.grid().tile(TILE).unwrap();
    assert!(!tile.has_crop());
    assert!(!tile.is_plowed());
}

#[test]
fn scenario_b_unwatered_turnip_withers() {
    let mut game = scenario_session(dec!(100));
    game.submit(&Command::Plow { tile: TILE }).unwrap();
    game.submit(&plant("Turnip", TILE)).unwrap();
    game.submit(&Command::AdvanceDay).unwrap();
    let report = game.submit(&Command::AdvanceDay).unwrap();

    assert_eq!(
        status_at(&game, TILE),
        Some(CropStatus::Withered(WitherReason::LacksWater))
    );
    assert!(matches!(
        report.payload,
        ActionPayload::DayAdvanced { ref withered, .. }
            if withered == &[(TILE, WitherReason::LacksWater)]
    ));

    // Withered is final.
    for _ in 0..3 {
        game.submit(&Command::AdvanceDay).unwrap();
    }
    assert_eq!(
        status_at(&game, TILE),
        Some(CropStatus::Withered(WitherReason::LacksWater))
    );
    let report = game.submit(&Command::Water { tile: TILE }).unwrap();
    assert_eq!(report.rejection, Some(RejectionReason::CropWithered));
}

#[test]
fn scenario_c_apple_needs_interior_open_ground() {
    let mut game = standard_session(5, 10, dec!(1000));
    let neighbour = TilePos::new(1, 5);
    for tile in [TILE, neighbour, TilePos::new(0, 5)] {
        game.submit(&Command::Plow { tile }).unwrap();
    }
    assert!(game.submit(&plant("Turnip", neighbour)).unwrap().success);
    let coins = game.stats().coins();

    let report = game.submit(&plant("Apple", TILE)).unwrap();
    assert!(!report.success);
    assert_eq!(report.rejection, Some(RejectionReason::AdjacencyBlocked));
    assert_eq!(
        report.message,
        "You cannot plant this crop here because some of the surrounding tiles are occupied!"
    );

    let report = game.submit(&plant("Apple", TilePos::new(0, 5))).unwrap();
    assert_eq!(report.rejection, Some(RejectionReason::AdjacencyBlocked));
    assert_eq!(game.stats().coins(), coins);

    // Clear the neighbour and the interior tile accepts the tree.
    game.submit(&Command::Dig { tile: neighbour }).unwrap();
    let report = game.submit(&plant("Apple", TILE)).unwrap();
    assert!(report.success);
    assert_eq!(report.money_cost, dec!(200));
}

#[test]
fn scenario_d_registration_charges_fee_and_reaches_live_crops() {
    let mut stats = ProgressionStats::new(dec!(250));
    stats.add_experience(dec!(1000)).unwrap();
    assert_eq!(stats.level(), 10);

    let mut game = standard_session(5, 10, dec!(0)).with_progression(stats);
    game.submit(&Command::Plow { tile: TILE }).unwrap();
    game.submit(&plant("Turnip", TILE)).unwrap();
    assert_eq!(game.stats().coins(), dec!(245));
    let cap_before = game.grid().tile(TILE).unwrap().crop().unwrap().water_cap();

    let report = game
        .submit(&Command::Register {
            rank: "Registered".to_owned(),
        })
        .unwrap();
    assert!(report.success);
    assert_eq!(report.money_cost, dec!(200));
    assert_eq!(game.stats().coins(), dec!(45));
    assert_eq!(game.stats().rank(), Rank::Registered);

    // Registered carries no cap increase, so the live crop is unchanged.
    let registered = game.ranks().get(Rank::Registered).unwrap();
    assert_eq!(registered.perks.water_cap_increase, 0);
    let cap_after = game.grid().tile(TILE).unwrap().crop().unwrap().water_cap();
    assert_eq!(cap_after, cap_before);
}

#[test]
fn scenario_d_exact_balance() {
    let mut stats = ProgressionStats::new(dec!(250));
    stats.add_experience(dec!(1000)).unwrap();
    let mut game = standard_session(5, 10, dec!(0)).with_progression(stats);

    let report = game
        .submit(&Command::Register {
            rank: "registered".to_owned(),
        })
        .unwrap();
    assert!(report.success);
    assert_eq!(game.stats().coins(), dec!(50));
}

#[test]
fn rank_upgrade_raises_caps_of_live_crops_only() {
    let mut stats = ProgressionStats::new(dec!(1000));
    stats.add_experience(dec!(1000)).unwrap();
    let mut game = standard_session(5, 10, dec!(0)).with_progression(stats);

    let live = TilePos::new(1, 1);
    let dead = TilePos::new(3, 3);
    for tile in [live, dead] {
        game.submit(&Command::Plow { tile }).unwrap();
    }
    game.submit(&plant("Turnip", live)).unwrap();
    game.submit(&plant("Rose", dead)).unwrap();
    game.submit(&Command::AdvanceDay).unwrap();
    assert!(status_at(&game, dead).unwrap().is_withered());

    let report = game
        .submit(&Command::Register {
            rank: "Distinguished Farmer".to_owned(),
        })
        .unwrap();
    assert!(matches!(
        report.payload,
        ActionPayload::RankGranted {
            rank: Rank::Distinguished,
            water_cap_increase: 1,
            fertilizer_cap_increase: 0,
        }
    ));

    let live_crop = game.grid().tile(live).unwrap().crop().unwrap();
    assert_eq!(live_crop.water_cap(), 3);
    let dead_crop = game.grid().tile(dead).unwrap().crop().unwrap();
    assert_eq!(dead_crop.water_cap(), 2);

    // New plantings get the perk at planting time.
    let fresh = TilePos::new(1, 7);
    game.submit(&Command::Plow { tile: fresh }).unwrap();
    let report = game.submit(&plant("Carrot", fresh)).unwrap();
    assert_eq!(report.money_cost, dec!(8));
    let fresh_crop = game.grid().tile(fresh).unwrap().crop().unwrap();
    assert_eq!(fresh_crop.water_cap(), 3);
}

#[test]
fn scenario_e_dig_on_rock_still_costs() {
    let mut game = standard_session(5, 10, dec!(100));
    assert!(matches!(
        game.submit(&Command::Mine { tile: TILE }).unwrap().rejection,
        Some(RejectionReason::NoRockPresent)
    ));

    let mut rocky = FarmGrid::new(5, 10).unwrap();
    rocky.place_rock(TILE).unwrap();
    let mut game = GameSession::new(
        rocky,
        CropCatalog::standard(),
        ActionCosts::default(),
        dec!(100),
        ScriptedRandom::default(),
    );

    let report = game.submit(&Command::Dig { tile: TILE }).unwrap();
    assert!(!report.success);
    assert_eq!(report.message, "The tile is occupied by a rock!");
    assert_eq!(report.money_cost, dec!(7));
    assert_eq!(game.stats().coins(), dec!(93));
    assert!(game.grid().tile(TILE).unwrap().has_rock());

    let report = game.submit(&Command::Mine { tile: TILE }).unwrap();
    assert!(report.success);
    assert_eq!(game.stats().coins(), dec!(43));
    assert_eq!(game.stats().experience(), dec!(15));
}

#[test]
fn bankrupt_player_ends_the_session() {
    let mut game = standard_session(5, 10, dec!(12));
    let tile = TilePos::new(1, 1);
    game.submit(&Command::Plow { tile }).unwrap();
    game.submit(&plant("Turnip", tile)).unwrap();
    assert_eq!(game.stats().coins(), dec!(7));
    assert!(!game.is_over());

    // Digging the only crop costs 7 and leaves no money for seeds.
    game.submit(&Command::Dig { tile }).unwrap();
    assert_eq!(game.stats().coins(), Decimal::ZERO);
    assert_eq!(game.outcome(), Some(EndReason::Bankrupt));

    let result = game.submit(&Command::AdvanceDay);
    assert!(matches!(
        result,
        Err(SessionError::SessionOver(EndReason::Bankrupt))
    ));
}

#[test]
fn live_crop_keeps_a_broke_player_in_the_game() {
    let mut game = standard_session(5, 10, dec!(5));
    let tile = TilePos::new(1, 1);
    game.submit(&Command::Plow { tile }).unwrap();
    game.submit(&plant("Turnip", tile)).unwrap();
    assert_eq!(game.stats().coins(), Decimal::ZERO);
    assert!(!game.is_over());
}

#[test]
fn all_withered_tiles_end_the_session() {
    let mut game = standard_session(1, 2, dec!(100));
    for col in 0..2 {
        let tile = TilePos::new(0, col);
        game.submit(&Command::Plow { tile }).unwrap();
        game.submit(&plant("Rose", tile)).unwrap();
    }
    assert!(!game.is_over());
    game.submit(&Command::AdvanceDay).unwrap();
    assert_eq!(game.outcome(), Some(EndReason::AllTilesWithered));
}

#[test]
fn one_free_tile_keeps_the_session_alive() {
    let mut game = standard_session(1, 3, dec!(100));
    for col in 0..2 {
        let tile = TilePos::new(0, col);
        game.submit(&Command::Plow { tile }).unwrap();
        game.submit(&plant("Rose", tile)).unwrap();
    }
    game.submit(&Command::AdvanceDay).unwrap();
    assert!(!game.is_over());
}

#[test]
fn out_of_bounds_tile_is_an_error() {
    let mut game = standard_session(5, 10, dec!(100));
    let result = game.submit(&Command::Plow {
        tile: TilePos::new(5, 0),
    });
    assert!(result.is_err());
    assert!(!game.is_over());
    assert_eq!(game.stats().coins(), dec!(100));
}

#[test]
fn commands_round_trip_through_json() {
    let mut game = scenario_session(dec!(100));
    let lines = [
        r#"{"action":"plow","tile":{"row":2,"col":5}}"#,
        r#"{"action":"plant","tile":{"row":2,"col":5},"crop":"turnip"}"#,
        r#"{"action":"water","tile":{"row":2,"col":5}}"#,
        r#"{"action":"advance_day"}"#,
        r#"{"action":"advance_day"}"#,
        r#"{"action":"harvest","tile":{"row":2,"col":5}}"#,
    ];
    let mut last = None;
    for line in lines {
        let command: Command = serde_json::from_str(line).unwrap();
        last = Some(game.submit(&command).unwrap());
    }
    let report = last.unwrap();
    assert!(report.success);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["payload"]["kind"], "harvested");
    assert_eq!(json["payload"]["units_produced"], 2);
}
