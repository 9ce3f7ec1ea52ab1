//! Built-in trap table. Ids are stable; they appear in submap `T` records.

use ashfall_core::{ItemId, TrapDef, TrapId, TrapKind};

use crate::items as item;
use crate::terrain::ter;

pub const NONE: TrapId = TrapId(0);
pub const BUBBLEWRAP: TrapId = TrapId(1);
pub const COT: TrapId = TrapId(2);
pub const BEARTRAP: TrapId = TrapId(3);
pub const BOARD: TrapId = TrapId(4);
pub const TRIPWIRE: TrapId = TrapId(5);
pub const CROSSBOW: TrapId = TrapId(6);
pub const SHOTGUN_2: TrapId = TrapId(7);
pub const SHOTGUN_1: TrapId = TrapId(8);
pub const BLADE: TrapId = TrapId(9);
pub const SNARE_LIGHT: TrapId = TrapId(10);
pub const SNARE_HEAVY: TrapId = TrapId(11);
pub const LANDMINE: TrapId = TrapId(12);
pub const BOOBYTRAP: TrapId = TrapId(13);
pub const TELEPAD: TrapId = TrapId(14);
pub const GOO: TrapId = TrapId(15);
pub const DISSECTOR: TrapId = TrapId(16);
pub const PIT: TrapId = TrapId(17);
pub const PIT_SPIKES: TrapId = TrapId(18);
pub const SHADOW: TrapId = TrapId(19);
pub const SNAKE: TrapId = TrapId(20);
pub const DRAIN: TrapId = TrapId(21);
pub const HUM: TrapId = TrapId(22);
pub const GLOW: TrapId = TrapId(23);

pub fn traps() -> Vec<TrapDef> {
    let def = |name: &'static str,
               symbol: char,
               visibility: i32,
               avoidance: i32,
               difficulty: i32,
               components: &'static [ItemId],
               kind: TrapKind| TrapDef {
        name,
        symbol,
        visibility,
        avoidance,
        difficulty,
        components,
        kind,
    };

    static BEARTRAP_PARTS: &[ItemId] = &[item::BEARTRAP];
    static BOARD_PARTS: &[ItemId] = &[item::TWO_BY_FOUR];
    static TRIPWIRE_PARTS: &[ItemId] = &[item::STRING_LONG];
    static CROSSBOW_PARTS: &[ItemId] = &[item::CROSSBOW, item::STRING_SHORT, item::BOLT_STEEL];
    static SHOTGUN_PARTS: &[ItemId] = &[item::SHOTGUN_SAWN, item::STRING_SHORT];
    static SNARE_LIGHT_PARTS: &[ItemId] = &[item::STRING_LONG, item::SNARE_TRIGGER];
    static SNARE_HEAVY_PARTS: &[ItemId] = &[item::ROPE_SHORT, item::SNARE_TRIGGER];

    vec![
        // 0
        def("none", ' ', 99, 0, 0, &[], TrapKind::None),
        // 1
        def("bubblewrap", '}', 0, 8, 0, &[], TrapKind::Bubblewrap),
        // 2
        def("cot", '#', 0, 0, 0, &[], TrapKind::Cot),
        // 3
        def(
            "bear trap",
            '^',
            2,
            7,
            3,
            BEARTRAP_PARTS,
            TrapKind::Beartrap {
                item: item::BEARTRAP,
            },
        ),
        // 4
        def("spiked board", '_', 1, 6, 0, BOARD_PARTS, TrapKind::Board),
        // 5
        def("tripwire", '^', 6, 4, 3, TRIPWIRE_PARTS, TrapKind::Tripwire),
        // 6
        def(
            "crossbow trap",
            '^',
            8,
            5,
            6,
            CROSSBOW_PARTS,
            TrapKind::Crossbow {
                bow: item::CROSSBOW,
                string: item::STRING_SHORT,
                bolt: item::BOLT_STEEL,
            },
        ),
        // 7
        def(
            "shotgun trap",
            '^',
            8,
            5,
            6,
            SHOTGUN_PARTS,
            TrapKind::Shotgun {
                barrels: 2,
                gun: item::SHOTGUN_SAWN,
                string: item::STRING_SHORT,
                single_barrel: SHOTGUN_1,
            },
        ),
        // 8
        def(
            "shotgun trap",
            '^',
            8,
            5,
            6,
            SHOTGUN_PARTS,
            TrapKind::Shotgun {
                barrels: 1,
                gun: item::SHOTGUN_SAWN,
                string: item::STRING_SHORT,
                single_barrel: SHOTGUN_1,
            },
        ),
        // 9
        def("spinning blade", '_', 99, 99, 99, &[], TrapKind::Blade),
        // 10
        def(
            "light snare",
            '\\',
            5,
            10,
            2,
            SNARE_LIGHT_PARTS,
            TrapKind::SnareLight {
                string: item::STRING_LONG,
                trigger: item::SNARE_TRIGGER,
            },
        ),
        // 11
        def(
            "heavy snare",
            '\\',
            3,
            10,
            4,
            SNARE_HEAVY_PARTS,
            TrapKind::SnareHeavy {
                rope: item::ROPE_SHORT,
                trigger: item::SNARE_TRIGGER,
            },
        ),
        // 12
        def("land mine", '_', 10, 14, 10, &[], TrapKind::Landmine),
        // 13
        def("booby trap", '^', 4, 7, 5, &[], TrapKind::Boobytrap),
        // 14
        def("teleport pad", '=', 0, 15, 20, &[], TrapKind::Telepad),
        // 15
        def(
            "goo pit",
            '_',
            0,
            15,
            15,
            &[],
            TrapKind::Goo {
                blob: crate::monsters::BLOB,
            },
        ),
        // 16
        def("dissector", '7', 2, 20, 99, &[], TrapKind::Dissector),
        // 17
        def("pit", '0', 0, 8, 0, &[], TrapKind::Pit),
        // 18
        def(
            "spiked pit",
            '0',
            0,
            8,
            0,
            &[],
            TrapKind::PitSpikes {
                pit_terrain: ter::PIT,
                pit_trap: PIT,
                spear: item::SPEAR_WOOD,
            },
        ),
        // 19
        def(
            "shadow trap",
            '_',
            99,
            13,
            99,
            &[],
            TrapKind::Shadow {
                monster: crate::monsters::SHADOW,
            },
        ),
        // 20
        def(
            "snake trap",
            '_',
            99,
            8,
            99,
            &[],
            TrapKind::Snake {
                monster: crate::monsters::SHADOW_SNAKE,
            },
        ),
        // 21
        def("life drain", '_', 99, 20, 99, &[], TrapKind::Drain),
        // 22
        def("humming field", '_', 99, 20, 99, &[], TrapKind::Hum),
        // 23
        def("glowing field", '_', 99, 20, 99, &[], TrapKind::Glow),
    ]
}
