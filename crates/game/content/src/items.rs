//! Built-in item table. Ids are stable; new entries go at the end.

use ashfall_core::{
    AmmoClass, AmmoDef, AmmoEffects, GunDef, GunFlags, GunSkill, ItemDef, ItemId, ItemKind,
    Material, ToolDef,
};

pub const NULL: ItemId = ItemId(0);
pub const TWO_BY_FOUR: ItemId = ItemId(1);
pub const STICK: ItemId = ItemId(2);
pub const ROCK: ItemId = ItemId(3);
pub const STRING_SHORT: ItemId = ItemId(4);
pub const STRING_LONG: ItemId = ItemId(5);
pub const ROPE_SHORT: ItemId = ItemId(6);
pub const SNARE_TRIGGER: ItemId = ItemId(7);
pub const BEARTRAP: ItemId = ItemId(8);
pub const CROSSBOW: ItemId = ItemId(9);
pub const BOLT_STEEL: ItemId = ItemId(10);
pub const SHOTGUN_SAWN: ItemId = ItemId(11);
pub const SHOT_00: ItemId = ItemId(12);
pub const SHOT_HULL: ItemId = ItemId(13);
pub const PISTOL_9MM: ItemId = ItemId(14);
pub const AMMO_9MM: ItemId = ItemId(15);
pub const CASING_9MM: ItemId = ItemId(16);
pub const RIFLE_308: ItemId = ItemId(17);
pub const AMMO_308: ItemId = ItemId(18);
pub const CASING_308: ItemId = ItemId(19);
pub const LONGBOW: ItemId = ItemId(20);
pub const ARROW_WOOD: ItemId = ItemId(21);
pub const WHISKEY: ItemId = ItemId(22);
pub const GLASS_BOTTLE: ItemId = ItemId(23);
pub const SPEAR_WOOD: ItemId = ItemId(24);
pub const GASOLINE: ItemId = ItemId(25);
pub const STEEL_CHUNK: ItemId = ItemId(26);
pub const PAPER_SCRAP: ItemId = ItemId(27);
pub const RAGS: ItemId = ItemId(28);
pub const MEAT: ItemId = ItemId(29);
pub const FLASHLIGHT: ItemId = ItemId(30);
pub const FLASHLIGHT_ON: ItemId = ItemId(31);
pub const CHARGE_RIFLE: ItemId = ItemId(32);

pub fn items() -> Vec<ItemDef> {
    let simple = |name: &'static str,
                  symbol: char,
                  volume: i32,
                  weight: i32,
                  melee_dam: i32,
                  melee_cut: i32,
                  material: Material| ItemDef {
        name,
        symbol,
        volume,
        weight,
        melee_dam,
        melee_cut,
        material,
        material2: Material::Null,
        kind: ItemKind::Simple,
    };

    vec![
        // 0
        simple("none", '#', 0, 0, 0, 0, Material::Null),
        // 1
        simple("two by four", '/', 6, 6, 5, 0, Material::Wood),
        // 2
        simple("heavy stick", '/', 6, 5, 3, 0, Material::Wood),
        // 3
        simple("rock", '*', 1, 3, 7, 0, Material::Stone),
        // 4
        simple("short string", ',', 0, 0, 0, 0, Material::Cotton),
        // 5
        simple("long string", ',', 1, 0, 0, 0, Material::Cotton),
        // 6
        simple("short rope", ',', 2, 3, 0, 0, Material::Cotton),
        // 7
        simple("snare trigger", ';', 0, 0, 0, 0, Material::Wood),
        // 8
        simple("bear trap", '^', 12, 9, 3, 0, Material::Steel),
        // 9
        ItemDef {
            kind: ItemKind::Gun(GunDef {
                skill: GunSkill::Archery,
                ammo: AmmoClass::Bolt,
                damage: 18,
                accuracy: 6,
                recoil: 0,
                durability: 6,
                burst: 1,
                clip: 1,
                flags: GunFlags::empty(),
            }),
            ..simple("crossbow", ')', 6, 9, 6, 0, Material::Wood)
        },
        // 10
        ItemDef {
            kind: ItemKind::Ammo(AmmoDef {
                class: AmmoClass::Bolt,
                damage: 16,
                pierce: 8,
                range: 10,
                accuracy: 6,
                recoil: 0,
                count: 10,
                effects: AmmoEffects::empty(),
                casing: None,
            }),
            ..simple("steel bolt", '=', 1, 1, 2, 4, Material::Steel)
        },
        // 11
        ItemDef {
            kind: ItemKind::Gun(GunDef {
                skill: GunSkill::Shotgun,
                ammo: AmmoClass::Shot,
                damage: 4,
                accuracy: 12,
                recoil: 12,
                durability: 7,
                burst: 1,
                clip: 2,
                flags: GunFlags::empty(),
            }),
            ..simple("sawn-off shotgun", ')', 6, 7, 9, 0, Material::Steel)
        },
        // 12
        ItemDef {
            kind: ItemKind::Ammo(AmmoDef {
                class: AmmoClass::Shot,
                damage: 18,
                pierce: 0,
                range: 6,
                accuracy: 2,
                recoil: 28,
                count: 25,
                effects: AmmoEffects::empty(),
                casing: Some(SHOT_HULL),
            }),
            ..simple("00 shot", '=', 1, 1, 1, 0, Material::Plastic)
        },
        // 13
        ItemDef {
            kind: ItemKind::Ammo(AmmoDef {
                class: AmmoClass::Shot,
                damage: 0,
                pierce: 0,
                range: 0,
                accuracy: 0,
                recoil: 0,
                count: 25,
                effects: AmmoEffects::empty(),
                casing: None,
            }),
            ..simple("shotgun hull", '=', 0, 0, 0, 0, Material::Plastic)
        },
        // 14
        ItemDef {
            kind: ItemKind::Gun(GunDef {
                skill: GunSkill::Pistol,
                ammo: AmmoClass::Pistol,
                damage: 2,
                accuracy: 5,
                recoil: 4,
                durability: 8,
                burst: 1,
                clip: 15,
                flags: GunFlags::empty(),
            }),
            ..simple("9mm pistol", ')', 2, 4, 5, 0, Material::Steel)
        },
        // 15
        ItemDef {
            kind: ItemKind::Ammo(AmmoDef {
                class: AmmoClass::Pistol,
                damage: 18,
                pierce: 2,
                range: 14,
                accuracy: 5,
                recoil: 10,
                count: 50,
                effects: AmmoEffects::empty(),
                casing: Some(CASING_9MM),
            }),
            ..simple("9mm FMJ", '=', 1, 1, 1, 0, Material::Steel)
        },
        // 16
        ItemDef {
            kind: ItemKind::Ammo(AmmoDef {
                class: AmmoClass::Pistol,
                damage: 0,
                pierce: 0,
                range: 0,
                accuracy: 0,
                recoil: 0,
                count: 50,
                effects: AmmoEffects::empty(),
                casing: None,
            }),
            ..simple("9mm casing", '=', 0, 0, 0, 0, Material::Steel)
        },
        // 17
        ItemDef {
            kind: ItemKind::Gun(GunDef {
                skill: GunSkill::Rifle,
                ammo: AmmoClass::Rifle,
                damage: 6,
                accuracy: 3,
                recoil: 6,
                durability: 9,
                burst: 1,
                clip: 5,
                flags: GunFlags::empty(),
            }),
            ..simple(".308 hunting rifle", ')', 12, 8, 9, 0, Material::Steel)
        },
        // 18
        ItemDef {
            kind: ItemKind::Ammo(AmmoDef {
                class: AmmoClass::Rifle,
                damage: 36,
                pierce: 8,
                range: 36,
                accuracy: 4,
                recoil: 20,
                count: 20,
                effects: AmmoEffects::empty(),
                casing: Some(CASING_308),
            }),
            ..simple(".308 Winchester", '=', 1, 1, 1, 0, Material::Steel)
        },
        // 19
        ItemDef {
            kind: ItemKind::Ammo(AmmoDef {
                class: AmmoClass::Rifle,
                damage: 0,
                pierce: 0,
                range: 0,
                accuracy: 0,
                recoil: 0,
                count: 20,
                effects: AmmoEffects::empty(),
                casing: None,
            }),
            ..simple(".308 casing", '=', 0, 0, 0, 0, Material::Steel)
        },
        // 20
        ItemDef {
            kind: ItemKind::Gun(GunDef {
                skill: GunSkill::Archery,
                ammo: AmmoClass::Arrow,
                damage: 10,
                accuracy: 8,
                recoil: 0,
                durability: 6,
                burst: 1,
                clip: 1,
                flags: GunFlags::STR8_DRAW,
            }),
            ..simple("longbow", ')', 7, 3, 2, 0, Material::Wood)
        },
        // 21
        ItemDef {
            kind: ItemKind::Ammo(AmmoDef {
                class: AmmoClass::Arrow,
                damage: 12,
                pierce: 2,
                range: 12,
                accuracy: 8,
                recoil: 0,
                count: 10,
                effects: AmmoEffects::empty(),
                casing: None,
            }),
            ..simple("wood arrow", '=', 1, 1, 1, 2, Material::Wood)
        },
        // 22
        simple("whiskey", '!', 2, 2, 2, 0, Material::Liquid),
        // 23
        simple("glass bottle", '!', 2, 1, 2, 0, Material::Glass),
        // 24
        simple("wood spear", '/', 8, 6, 6, 8, Material::Wood),
        // 25
        simple("gasoline", '~', 2, 2, 0, 0, Material::Liquid),
        // 26
        simple("chunk of steel", '*', 2, 6, 8, 0, Material::Steel),
        // 27
        simple("scrap of paper", ',', 0, 0, 0, 0, Material::Paper),
        // 28
        simple("rags", ',', 1, 1, 0, 0, Material::Cotton),
        // 29
        simple("chunk of meat", '%', 1, 2, 0, 0, Material::Flesh),
        // 30
        simple("flashlight (off)", ';', 1, 2, 1, 0, Material::Plastic),
        // 31
        ItemDef {
            kind: ItemKind::Tool(ToolDef {
                turns_per_charge: 15,
                revert_to: Some(FLASHLIGHT),
            }),
            ..simple("flashlight (on)", ';', 1, 2, 1, 0, Material::Plastic)
        },
        // 32
        ItemDef {
            kind: ItemKind::Gun(GunDef {
                skill: GunSkill::Rifle,
                ammo: AmmoClass::Charge,
                damage: 0,
                accuracy: 2,
                recoil: 0,
                durability: 9,
                burst: 1,
                clip: 8,
                flags: GunFlags::CHARGE,
            }),
            ..simple("charge rifle", ')', 10, 6, 6, 0, Material::Steel)
        },
    ]
}
