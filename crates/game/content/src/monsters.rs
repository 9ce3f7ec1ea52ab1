//! Built-in monster table. Ids are stable; they appear in submap `S`
//! records.

use ashfall_core::{
    DeathEffect, Material, MonsterDef, MonsterFlags, MonsterId, MonsterSize, SpecialAttack,
};

use crate::items as item;

pub const NULL: MonsterId = MonsterId(0);
pub const ZOMBIE: MonsterId = MonsterId(1);
pub const ZOMBIE_FAST: MonsterId = MonsterId(2);
pub const ZOMBIE_SPITTER: MonsterId = MonsterId(3);
pub const BOOMER: MonsterId = MonsterId(4);
pub const ZOMBIE_SHRIEKER: MonsterId = MonsterId(5);
pub const ZOMBIE_BRUTE: MonsterId = MonsterId(6);
pub const ZOMBIE_ELECTRIC: MonsterId = MonsterId(7);
pub const BLOB: MonsterId = MonsterId(8);
pub const SQUIRREL: MonsterId = MonsterId(9);
pub const WOLF: MonsterId = MonsterId(10);
pub const WORM: MonsterId = MonsterId(11);
pub const SEWER_SNAKE: MonsterId = MonsterId(12);
pub const SHADOW: MonsterId = MonsterId(13);
pub const SHADOW_SNAKE: MonsterId = MonsterId(14);
pub const FLYING_POLYP: MonsterId = MonsterId(15);
pub const BLANK_BODY: MonsterId = MonsterId(16);

/// Creatures a fatigue rift can pull through.
pub fn nether() -> Vec<MonsterId> {
    vec![SHADOW, SHADOW_SNAKE, FLYING_POLYP, BLANK_BODY]
}

pub fn monsters() -> Vec<MonsterDef> {
    use MonsterFlags as F;

    let base = MonsterDef {
        name: "nothing",
        symbol: '?',
        size: MonsterSize::Medium,
        material: Material::Flesh,
        hp: 1,
        speed: 100,
        melee_skill: 0,
        melee_dice: 0,
        melee_sides: 0,
        melee_cut: 0,
        dodge: 0,
        armor_bash: 0,
        armor_cut: 0,
        agro: 0,
        flags: F::empty(),
        sp_freq: 0,
        special: SpecialAttack::None,
        death: DeathEffect::Normal,
        anger_on_friend_attacked: false,
        fear_on_friend_attacked: false,
        drops: &[],
    };

    vec![
        // 0
        base.clone(),
        // 1
        MonsterDef {
            name: "zombie",
            symbol: 'Z',
            hp: 60,
            speed: 70,
            melee_skill: 4,
            melee_dice: 3,
            melee_sides: 5,
            dodge: 1,
            agro: 100,
            flags: F::SEES | F::HEARS | F::SMELLS | F::STUMBLES | F::BASHES | F::WARM
                | F::BLEED,
            drops: &[(item::RAGS, 50)],
            ..base.clone()
        },
        // 2
        MonsterDef {
            name: "fast zombie",
            symbol: 'Z',
            hp: 40,
            speed: 105,
            melee_skill: 5,
            melee_dice: 2,
            melee_sides: 4,
            melee_cut: 2,
            dodge: 2,
            agro: 100,
            flags: F::SEES | F::HEARS | F::SMELLS | F::STUMBLES | F::BASHES | F::WARM
                | F::HIT_AND_RUN,
            drops: &[(item::RAGS, 50)],
            ..base.clone()
        },
        // 3
        MonsterDef {
            name: "spitter zombie",
            symbol: 'Z',
            hp: 50,
            speed: 90,
            melee_skill: 4,
            melee_dice: 2,
            melee_sides: 5,
            dodge: 1,
            agro: 100,
            flags: F::SEES | F::HEARS | F::SMELLS | F::STUMBLES | F::BASHES | F::WARM
                | F::ACIDPROOF,
            sp_freq: 10,
            special: SpecialAttack::AcidSpit { range: 10 },
            death: DeathEffect::AcidSplatter,
            drops: &[(item::RAGS, 50)],
            ..base.clone()
        },
        // 4
        MonsterDef {
            name: "boomer",
            symbol: 'Z',
            hp: 40,
            speed: 55,
            melee_skill: 3,
            melee_dice: 2,
            melee_sides: 4,
            agro: 100,
            flags: F::SEES | F::HEARS | F::SMELLS | F::STUMBLES | F::WARM,
            death: DeathEffect::BoomerBile,
            drops: &[(item::RAGS, 50)],
            ..base.clone()
        },
        // 5
        MonsterDef {
            name: "shrieker zombie",
            symbol: 'Z',
            hp: 50,
            speed: 95,
            melee_skill: 4,
            melee_dice: 1,
            melee_sides: 6,
            dodge: 1,
            agro: 100,
            flags: F::SEES | F::HEARS | F::SMELLS | F::STUMBLES | F::BASHES | F::WARM,
            sp_freq: 10,
            special: SpecialAttack::Shriek { volume: 30 },
            drops: &[(item::RAGS, 50)],
            ..base.clone()
        },
        // 6
        MonsterDef {
            name: "zombie brute",
            symbol: 'Z',
            size: MonsterSize::Large,
            hp: 90,
            speed: 80,
            melee_skill: 5,
            melee_dice: 4,
            melee_sides: 6,
            melee_cut: 2,
            armor_bash: 2,
            armor_cut: 3,
            agro: 100,
            flags: F::SEES | F::HEARS | F::SMELLS | F::STUMBLES | F::BASHES | F::WARM,
            drops: &[(item::RAGS, 80)],
            ..base.clone()
        },
        // 7
        MonsterDef {
            name: "electric zombie",
            symbol: 'Z',
            hp: 50,
            speed: 70,
            melee_skill: 4,
            melee_dice: 1,
            melee_sides: 4,
            dodge: 1,
            agro: 100,
            flags: F::SEES | F::HEARS | F::SMELLS | F::STUMBLES | F::WARM,
            sp_freq: 5,
            special: SpecialAttack::ShockField,
            drops: &[(item::RAGS, 50)],
            ..base.clone()
        },
        // 8
        MonsterDef {
            name: "blob",
            symbol: 'O',
            size: MonsterSize::Small,
            material: Material::Liquid,
            hp: 85,
            speed: 85,
            melee_skill: 9,
            melee_dice: 2,
            melee_sides: 4,
            agro: 100,
            flags: F::SMELLS | F::HEARS | F::SLUDGETRAIL | F::NOHEAD | F::ACIDPROOF,
            ..base.clone()
        },
        // 9
        MonsterDef {
            name: "squirrel",
            symbol: 'r',
            size: MonsterSize::Tiny,
            hp: 10,
            speed: 110,
            melee_skill: 0,
            dodge: 4,
            agro: -5,
            flags: F::SEES | F::HEARS | F::SMELLS | F::ANIMAL | F::WARM | F::KEENNOSE
                | F::HARDTOSHOOT,
            drops: &[(item::MEAT, 90)],
            ..base.clone()
        },
        // 10
        MonsterDef {
            name: "wolf",
            symbol: 'w',
            hp: 40,
            speed: 165,
            melee_skill: 6,
            melee_dice: 2,
            melee_sides: 3,
            melee_cut: 4,
            dodge: 3,
            agro: 10,
            flags: F::SEES | F::HEARS | F::SMELLS | F::ANIMAL | F::WARM | F::KEENNOSE
                | F::BLEED | F::HIT_AND_RUN,
            anger_on_friend_attacked: true,
            fear_on_friend_attacked: true,
            drops: &[(item::MEAT, 90)],
            ..base.clone()
        },
        // 11
        MonsterDef {
            name: "graboid worm",
            symbol: 'S',
            size: MonsterSize::Large,
            hp: 50,
            speed: 80,
            melee_skill: 7,
            melee_dice: 3,
            melee_sides: 6,
            melee_cut: 2,
            agro: 30,
            flags: F::HEARS | F::SMELLS | F::DIGS,
            drops: &[(item::MEAT, 60)],
            ..base.clone()
        },
        // 12
        MonsterDef {
            name: "sewer snake",
            symbol: 's',
            size: MonsterSize::Small,
            hp: 15,
            speed: 60,
            melee_skill: 4,
            melee_dice: 1,
            melee_sides: 2,
            melee_cut: 1,
            dodge: 2,
            agro: 15,
            flags: F::SEES | F::SMELLS | F::SWIMS | F::ANIMAL | F::VENOM,
            drops: &[(item::MEAT, 40)],
            ..base.clone()
        },
        // 13
        MonsterDef {
            name: "shadow",
            symbol: 'S',
            size: MonsterSize::Small,
            material: Material::Null,
            hp: 60,
            speed: 90,
            melee_skill: 5,
            melee_dice: 2,
            melee_sides: 3,
            melee_cut: 1,
            dodge: 7,
            agro: 100,
            flags: F::SEES | F::HEARS | F::SMELLS | F::FLIES | F::HARDTOSHOOT | F::NOHEAD
                | F::GRABS,
            ..base.clone()
        },
        // 14
        MonsterDef {
            name: "shadow snake",
            symbol: 's',
            size: MonsterSize::Small,
            material: Material::Null,
            hp: 40,
            speed: 90,
            melee_skill: 6,
            melee_dice: 1,
            melee_sides: 4,
            melee_cut: 1,
            dodge: 8,
            agro: 60,
            flags: F::SEES | F::HEARS | F::SMELLS | F::SWIMS | F::HARDTOSHOOT,
            ..base.clone()
        },
        // 15
        MonsterDef {
            name: "flying polyp",
            symbol: 'P',
            size: MonsterSize::Huge,
            hp: 280,
            speed: 280,
            melee_skill: 7,
            melee_dice: 4,
            melee_sides: 4,
            melee_cut: 6,
            dodge: 6,
            agro: 100,
            flags: F::SEES | F::HEARS | F::SMELLS | F::FLIES | F::ATTACKMON | F::NOHEAD
                | F::HIT_AND_RUN,
            ..base.clone()
        },
        // 16
        MonsterDef {
            name: "blank body",
            symbol: '5',
            hp: 70,
            speed: 80,
            melee_skill: 9,
            melee_dice: 1,
            melee_sides: 3,
            dodge: 1,
            agro: 5,
            flags: F::SEES | F::HEARS | F::SMELLS | F::ANIMAL,
            ..base.clone()
        },
    ]
}
