//! Built-in terrain table. Ids are stable: they appear in submap files as
//! `id + 42`, so new entries go at the end.

use ashfall_core::{
    BashRoll, BashSpec, CountRoll, Debris, ShootSpec, TerrainDef, TerrainFlags, TerrainId,
};

use crate::items as item;

/// Stable terrain indices.
pub mod ter {
    use ashfall_core::TerrainId;

    pub const NULL: TerrainId = TerrainId(0);
    pub const DIRT: TerrainId = TerrainId(1);
    pub const DIRT_MOUND: TerrainId = TerrainId(2);
    pub const GRASS: TerrainId = TerrainId(3);
    pub const FLOOR: TerrainId = TerrainId(4);
    pub const RUBBLE: TerrainId = TerrainId(5);
    pub const PIT: TerrainId = TerrainId(6);
    pub const PIT_SPIKED: TerrainId = TerrainId(7);
    pub const WALL: TerrainId = TerrainId(8);
    pub const WALL_GLASS: TerrainId = TerrainId(9);
    pub const REINFORCED_GLASS: TerrainId = TerrainId(10);
    pub const WINDOW: TerrainId = TerrainId(11);
    pub const WINDOW_FRAME: TerrainId = TerrainId(12);
    pub const WINDOW_BOARDED: TerrainId = TerrainId(13);
    pub const DOOR_CLOSED: TerrainId = TerrainId(14);
    pub const DOOR_OPEN: TerrainId = TerrainId(15);
    pub const DOOR_LOCKED: TerrainId = TerrainId(16);
    pub const DOOR_BROKEN: TerrainId = TerrainId(17);
    pub const DOOR_FRAME: TerrainId = TerrainId(18);
    pub const DOOR_BOARDED: TerrainId = TerrainId(19);
    pub const DOOR_METAL_CLOSED: TerrainId = TerrainId(20);
    pub const DOOR_METAL_OPEN: TerrainId = TerrainId(21);
    pub const PAPER_WALL: TerrainId = TerrainId(22);
    pub const TREE: TerrainId = TerrainId(23);
    pub const TREE_YOUNG: TerrainId = TerrainId(24);
    pub const UNDERBRUSH: TerrainId = TerrainId(25);
    pub const WATER_SHALLOW: TerrainId = TerrainId(26);
    pub const WATER_DEEP: TerrainId = TerrainId(27);
    pub const GAS_PUMP: TerrainId = TerrainId(28);
    pub const GAS_PUMP_SMASHED: TerrainId = TerrainId(29);
}

pub fn terrains() -> Vec<TerrainDef> {
    use TerrainFlags as F;

    let plain = |name: &'static str, symbol: char, move_cost: u8, flags: TerrainFlags| {
        TerrainDef {
            name,
            symbol,
            move_cost,
            flags,
            open_to: None,
            close_to: None,
            bash: None,
            shoot: None,
            burns_to: None,
            explodes_to: None,
        }
    };

    static BOARDS_FEW: &[Debris] = &[Debris {
        item: item::TWO_BY_FOUR,
        count: CountRoll::Rng(0, 2),
    }];
    static BOARDS_SOME: &[Debris] = &[Debris {
        item: item::TWO_BY_FOUR,
        count: CountRoll::Rng(2, 6),
    }];
    static BOARDS_SPLINTERS: &[Debris] = &[Debris {
        item: item::TWO_BY_FOUR,
        count: CountRoll::RngMul((0, 2), (0, 1)),
    }];
    static STICKS: &[Debris] = &[Debris {
        item: item::STICK,
        count: CountRoll::Rng(0, 3),
    }];

    vec![
        // 0: the out-of-bubble sentinel.
        plain("nothing", ' ', 0, F::empty()),
        // 1
        plain("dirt", '.', 2, F::TRANSPARENT | F::DIGGABLE),
        // 2
        plain("mound of dirt", '#', 3, F::TRANSPARENT | F::DIGGABLE),
        // 3
        TerrainDef {
            burns_to: Some(ter::RUBBLE),
            ..plain("grass", ',', 2, F::TRANSPARENT | F::DIGGABLE | F::FLAMMABLE)
        },
        // 4
        TerrainDef {
            burns_to: Some(ter::RUBBLE),
            ..plain("floor", '.', 2, F::TRANSPARENT | F::FLAMMABLE | F::INDOORS)
        },
        // 5
        plain("pile of rubble", '^', 4, F::TRANSPARENT | F::ROUGH | F::NOITEM),
        // 6
        plain("pit", '0', 10, F::TRANSPARENT | F::PIT | F::DIGGABLE),
        // 7
        plain("spiked pit", '0', 10, F::TRANSPARENT | F::PIT | F::SHARP),
        // 8
        plain("wall", '|', 0, F::empty()),
        // 9
        TerrainDef {
            bash: Some(BashSpec {
                threshold: BashRoll::Rng(0, 20),
                whiff_one_in: None,
                becomes: ter::FLOOR,
                success_sound: "glass breaking!",
                fail_sound: "whack!",
                debris: &[],
            }),
            shoot: Some(ShootSpec {
                reduce: (0, 8),
                becomes: Some(ter::FLOOR),
                hit_one_in: None,
                miss_reduce: (0, 0),
                incendiary_ignites: false,
            }),
            ..plain("glass wall", '|', 0, F::TRANSPARENT)
        },
        // 10
        TerrainDef {
            bash: Some(BashSpec {
                threshold: BashRoll::Rng(60, 100),
                whiff_one_in: None,
                becomes: ter::FLOOR,
                success_sound: "glass breaking!",
                fail_sound: "whack!",
                debris: &[],
            }),
            ..plain("reinforced glass", '|', 0, F::TRANSPARENT)
        },
        // 11
        TerrainDef {
            bash: Some(BashSpec {
                threshold: BashRoll::Rng(0, 6),
                whiff_one_in: None,
                becomes: ter::WINDOW_FRAME,
                success_sound: "glass breaking!",
                fail_sound: "whack!",
                debris: &[],
            }),
            shoot: Some(ShootSpec {
                reduce: (0, 5),
                becomes: Some(ter::WINDOW_FRAME),
                hit_one_in: None,
                miss_reduce: (0, 0),
                incendiary_ignites: false,
            }),
            ..plain("window", '"', 0, F::TRANSPARENT | F::FLAMMABLE)
        },
        // 12
        plain("window frame", '0', 8, F::TRANSPARENT | F::SHARP | F::NOITEM),
        // 13
        TerrainDef {
            bash: Some(BashSpec {
                threshold: BashRoll::Dice(3, 30),
                whiff_one_in: None,
                becomes: ter::WINDOW_FRAME,
                success_sound: "crash!",
                fail_sound: "wham!",
                debris: BOARDS_SPLINTERS,
            }),
            shoot: Some(ShootSpec {
                reduce: (10, 30),
                becomes: Some(ter::WINDOW_FRAME),
                hit_one_in: None,
                miss_reduce: (0, 0),
                incendiary_ignites: false,
            }),
            ..plain("boarded up window", '#', 0, F::FLAMMABLE)
        },
        // 14
        TerrainDef {
            open_to: Some(ter::DOOR_OPEN),
            bash: Some(BashSpec {
                threshold: BashRoll::Rng(0, 40),
                whiff_one_in: None,
                becomes: ter::DOOR_BROKEN,
                success_sound: "smash!",
                fail_sound: "whump!",
                debris: &[],
            }),
            shoot: Some(ShootSpec {
                reduce: (15, 30),
                becomes: Some(ter::DOOR_BROKEN),
                hit_one_in: None,
                miss_reduce: (0, 0),
                incendiary_ignites: false,
            }),
            burns_to: Some(ter::RUBBLE),
            ..plain("closed wood door", '+', 0, F::FLAMMABLE)
        },
        // 15
        TerrainDef {
            close_to: Some(ter::DOOR_CLOSED),
            burns_to: Some(ter::RUBBLE),
            ..plain("open wood door", '\'', 2, F::TRANSPARENT | F::FLAMMABLE)
        },
        // 16
        TerrainDef {
            open_to: Some(ter::DOOR_OPEN),
            bash: Some(BashSpec {
                threshold: BashRoll::Rng(0, 40),
                whiff_one_in: None,
                becomes: ter::DOOR_BROKEN,
                success_sound: "smash!",
                fail_sound: "whump!",
                debris: &[],
            }),
            shoot: Some(ShootSpec {
                reduce: (15, 30),
                becomes: Some(ter::DOOR_BROKEN),
                hit_one_in: None,
                miss_reduce: (0, 0),
                incendiary_ignites: false,
            }),
            burns_to: Some(ter::RUBBLE),
            ..plain("locked wood door", '+', 0, F::FLAMMABLE | F::LOCKED)
        },
        // 17
        TerrainDef {
            bash: Some(BashSpec {
                threshold: BashRoll::Rng(0, 30),
                whiff_one_in: None,
                becomes: ter::DOOR_FRAME,
                success_sound: "crash!",
                fail_sound: "wham!",
                debris: BOARDS_SOME,
            }),
            shoot: Some(ShootSpec {
                reduce: (10, 30),
                becomes: Some(ter::DOOR_FRAME),
                // Mostly a hole already; the shot usually slips through.
                hit_one_in: Some(8),
                miss_reduce: (0, 1),
                incendiary_ignites: false,
            }),
            burns_to: Some(ter::RUBBLE),
            ..plain("broken wood door", '&', 2, F::TRANSPARENT | F::FLAMMABLE | F::NOITEM)
        },
        // 18
        plain("door frame", '.', 2, F::TRANSPARENT),
        // 19
        TerrainDef {
            bash: Some(BashSpec {
                threshold: BashRoll::Dice(3, 50),
                whiff_one_in: None,
                becomes: ter::DOOR_FRAME,
                success_sound: "crash!",
                fail_sound: "wham!",
                debris: BOARDS_FEW,
            }),
            shoot: Some(ShootSpec {
                reduce: (15, 35),
                becomes: Some(ter::DOOR_BROKEN),
                hit_one_in: None,
                miss_reduce: (0, 0),
                incendiary_ignites: false,
            }),
            burns_to: Some(ter::RUBBLE),
            ..plain("boarded up door", '#', 0, F::FLAMMABLE)
        },
        // 20
        TerrainDef {
            open_to: Some(ter::DOOR_METAL_OPEN),
            ..plain("closed metal door", '+', 0, F::empty())
        },
        // 21
        TerrainDef {
            close_to: Some(ter::DOOR_METAL_CLOSED),
            ..plain("open metal door", '\'', 2, F::TRANSPARENT)
        },
        // 22
        TerrainDef {
            bash: Some(BashSpec {
                threshold: BashRoll::Dice(2, 6),
                whiff_one_in: None,
                becomes: ter::DIRT,
                success_sound: "rrrrip!",
                fail_sound: "slap!",
                debris: &[],
            }),
            shoot: Some(ShootSpec {
                reduce: (4, 16),
                becomes: Some(ter::DIRT),
                hit_one_in: None,
                miss_reduce: (0, 0),
                incendiary_ignites: true,
            }),
            burns_to: Some(ter::DIRT),
            ..plain("paper wall", '#', 0, F::FLAMMABLE)
        },
        // 23
        TerrainDef {
            burns_to: Some(ter::RUBBLE),
            ..plain("tree", '7', 0, F::FLAMMABLE)
        },
        // 24
        TerrainDef {
            bash: Some(BashSpec {
                threshold: BashRoll::Rng(0, 50),
                whiff_one_in: None,
                becomes: ter::UNDERBRUSH,
                success_sound: "crunch!",
                fail_sound: "whack!",
                debris: STICKS,
            }),
            burns_to: Some(ter::RUBBLE),
            ..plain("young tree", '1', 4, F::TRANSPARENT | F::FLAMMABLE)
        },
        // 25
        TerrainDef {
            bash: Some(BashSpec {
                threshold: BashRoll::Rng(0, 30),
                whiff_one_in: Some(4),
                becomes: ter::DIRT,
                success_sound: "crunch.",
                fail_sound: "brush.",
                debris: &[],
            }),
            burns_to: Some(ter::RUBBLE),
            ..plain("underbrush", '#', 6, F::TRANSPARENT | F::FLAMMABLE | F::DIGGABLE)
        },
        // 26
        plain("shallow water", '~', 4, F::TRANSPARENT | F::SWIMMABLE | F::LIQUID),
        // 27
        plain("deep water", '~', 8, F::TRANSPARENT | F::SWIMMABLE | F::LIQUID),
        // 28
        TerrainDef {
            explodes_to: Some(ter::GAS_PUMP_SMASHED),
            shoot: Some(ShootSpec {
                reduce: (60, 60),
                becomes: Some(ter::GAS_PUMP_SMASHED),
                hit_one_in: Some(3),
                miss_reduce: (0, 0),
                incendiary_ignites: false,
            }),
            ..plain("gas pump", '&', 0, F::TRANSPARENT | F::EXPLODES | F::NOITEM)
        },
        // 29
        plain("smashed gas pump", '&', 0, F::TRANSPARENT | F::NOITEM),
    ]
}
