//! World directory lifecycle and submap persistence.

use std::sync::Arc;

use ashfall_core::{
    Command, FieldCell, FieldKind, GameConfig, GameRng, Item, Point, Submap, SubmapCoord,
    TerrainId, World, fast_forward,
};
use ashfall_content::{items, ter, traps};
use ashfall_runtime::{FlatGenerator, MemorySubmapStore, SessionError, WorldSession};

#[test]
fn session_round_trip_preserves_every_tile() {
    let dir = tempfile::tempdir().unwrap();
    let spot = Point::new(14, 14);

    let mut session = WorldSession::create(dir.path(), 99).unwrap();
    session.world.map.set_trap(spot, traps::TRIPWIRE);
    let mut crate_item = Item::new(items::GLASS_BOTTLE, 3);
    crate_item.contents.push(Item::with_charges(items::AMMO_9MM, 50, 3));
    let rng = &mut session.world.rng;
    session.world.map.add_item(spot, crate_item, rng);
    session
        .world
        .map
        .add_field(Point::new(20, 20), FieldKind::Blood, 2);
    session.world.map.add_radiation(Point::new(9, 9), 13);
    let player_pos = session.world.player.pos;

    let before: Vec<Submap> = (0..3)
        .flat_map(|gy| (0..3).map(move |gx| (gx, gy)))
        .map(|(gx, gy)| session.world.map.submap(gx, gy).clone())
        .collect();
    session.close().unwrap();

    let reopened = WorldSession::open(dir.path()).unwrap();
    assert_eq!(reopened.world.player.pos, player_pos);
    assert_eq!(reopened.world.turn, 0);
    for (i, (gx, gy)) in (0..3)
        .flat_map(|gy| (0..3).map(move |gx| (gx, gy)))
        .enumerate()
    {
        assert_eq!(
            reopened.world.map.submap(gx, gy),
            &before[i],
            "submap ({gx},{gy}) changed across save/open"
        );
    }
    assert_eq!(reopened.world.map.trap_at(spot), traps::TRIPWIRE);
    let pile = reopened.world.map.items(spot);
    assert_eq!(pile.len(), 1);
    assert_eq!(pile[0].contents[0].charges, 50);
    assert_eq!(
        reopened.world.map.field_at(Point::new(20, 20)),
        FieldCell::new(FieldKind::Blood, 2, 0)
    );
    assert_eq!(reopened.world.map.radiation(Point::new(9, 9)), 13);
}

#[test]
fn submap_files_use_the_legacy_names() {
    let dir = tempfile::tempdir().unwrap();
    let session = WorldSession::create(dir.path(), 5).unwrap();
    session.close().unwrap();
    for (x, y) in [(0, 0), (1, 1), (2, 2)] {
        let path = dir.path().join("save").join(format!("m.{x}.{y}.0"));
        assert!(path.exists(), "missing {}", path.display());
    }
    assert!(dir.path().join("world.ron").exists());
}

#[test]
fn opening_a_random_directory_is_invalid() {
    let dir = tempfile::tempdir().unwrap();
    match WorldSession::open(dir.path()) {
        Err(err @ SessionError::InvalidWorldDir(_)) => assert_eq!(err.exit_code(), 1),
        Err(err) => panic!("expected InvalidWorldDir, got {err}"),
        Ok(_) => panic!("opened an empty directory as a world"),
    }
}

#[test]
fn corrupt_submap_refuses_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let session = WorldSession::create(dir.path(), 5).unwrap();
    session.close().unwrap();
    std::fs::write(dir.path().join("save").join("m.1.1.0"), "garbage\n").unwrap();
    match WorldSession::open(dir.path()) {
        Err(err @ SessionError::CorruptSubmap { .. }) => assert_eq!(err.exit_code(), 2),
        Err(err) => panic!("expected CorruptSubmap, got {err}"),
        Ok(_) => panic!("opened a world with a corrupt submap"),
    }
}

#[test]
fn io_failure_keeps_the_world_alive() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = WorldSession::create(dir.path(), 5).unwrap();
    // Make the save directory unusable by replacing it with a file.
    std::fs::remove_dir_all(dir.path().join("save")).unwrap();
    std::fs::write(dir.path().join("save"), "not a directory").unwrap();
    let err = session.save().unwrap_err();
    assert_eq!(err.exit_code(), 3);
    // In-memory state is still sane; the player is where they were.
    assert!(session.world.map.move_cost(session.world.player.pos) > 0);
}

#[test]
fn absent_submaps_fast_forward_their_fields() {
    let catalog = ashfall_content::catalog();
    let mut submap = Submap::filled(ter::DIRT);
    submap.fields[4][4] = FieldCell::new(FieldKind::Acid, 3, 1);
    submap.radiation[2][2] = 50;
    submap.turn_last_touched = 0;

    let mut rng = GameRng::new(1);
    fast_forward(&mut submap, &catalog, &mut rng, 8000);

    // A thousand catch-up ticks dwarf acid's half-life.
    assert_eq!(submap.fields[4][4], FieldCell::default());
    // Radiation bled off one point per hundred turns.
    assert_eq!(submap.radiation[2][2], 0);
    assert_eq!(submap.turn_last_touched, 8000);
}

#[test]
fn fresh_submaps_are_not_fast_forwarded() {
    let catalog = ashfall_content::catalog();
    let mut submap = Submap::filled(ter::DIRT);
    submap.fields[4][4] = FieldCell::new(FieldKind::Acid, 2, 1);
    submap.turn_last_touched = 100;
    let mut rng = GameRng::new(1);
    fast_forward(&mut submap, &catalog, &mut rng, 103);
    // Three turns is below one catch-up tick.
    assert_eq!(submap.fields[4][4], FieldCell::new(FieldKind::Acid, 2, 1));
}

#[test]
fn world_survives_walking_far_and_coming_home() {
    // Shift the bubble out and back; the revisited ground must match what
    // we left behind, modulo field aging.
    let mut world = World::new(
        Arc::new(ashfall_content::catalog()),
        GameConfig::new(77),
        SubmapCoord::new(0, 0, 0),
        0,
        Box::new(MemorySubmapStore::new()),
        Box::new(FlatGenerator(TerrainId(1))),
    )
    .unwrap();

    let landmark = Point::new(14, 18);
    world.map.set_trap(landmark, traps::BOARD);
    world.map.set_ter(Point::new(15, 18), ter::RUBBLE);

    // March east across two submap boundaries, then back.
    for _ in 0..30 {
        world
            .advance(Command::Move(ashfall_core::Direction::East))
            .unwrap();
    }
    assert!(world.map.origin().x >= 2);
    for _ in 0..30 {
        world
            .advance(Command::Move(ashfall_core::Direction::West))
            .unwrap();
    }
    assert_eq!(world.map.origin().x, 0);
    assert_eq!(world.map.trap_at(landmark), traps::BOARD);
    assert_eq!(world.map.ter(Point::new(15, 18)), ter::RUBBLE);
}
