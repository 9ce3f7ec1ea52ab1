//! The field simulator: per-tile environmental effects evolved one tick per
//! world turn, before actor planning.
//!
//! Cells created this turn (age 0) are skipped by their kind rule so a field
//! never acts twice in the tick it was born; the shared half-life decay at
//! the bottom of the tick still ages them.

use std::sync::Arc;

use crate::actor::{BodyPart, DiseaseKind, Monster, MonsterEffectKind};
use crate::catalog::{FieldKind, Material, MonsterFlags, TerrainFlags};
use crate::config::GameConfig;
use crate::geom::Point;
use crate::map::FieldCell;
use crate::world::World;

const BUBBLE: i32 = GameConfig::BUBBLE_SIZE as i32;

impl World {
    /// Advance every field cell in the bubble one tick. Returns whether any
    /// live field was seen.
    pub fn process_fields(&mut self) -> bool {
        let catalog = Arc::clone(&self.catalog);
        let mut found_field = false;
        // Explosions and spawns are collected during the scan and applied
        // after it, so the sweep never observes its own side effects.
        let mut explosions: Vec<(Point, i32, i32, bool)> = Vec::new();
        let mut spawns: Vec<(crate::catalog::MonsterId, Point)> = Vec::new();

        for x in 0..BUBBLE {
            for y in 0..BUBBLE {
                let p = Point::new(x, y);
                let mut cur = self.map.field_at(p);
                if cur.kind != FieldKind::None {
                    found_field = true;
                }
                debug_assert!(cur.intensity <= 3, "field intensity {}", cur.intensity);

                // Newborn cells skip their kind rule this tick.
                let kind = if cur.age == 0 { FieldKind::None } else { cur.kind };

                match kind {
                    FieldKind::None | FieldKind::Sludge => {}

                    FieldKind::Blood | FieldKind::Bile => {
                        // Washes away fast in water.
                        if self.map.has_flag(TerrainFlags::SWIMMABLE, p) {
                            cur.age += 250;
                        }
                    }

                    FieldKind::Acid => {
                        if self.map.has_flag(TerrainFlags::SWIMMABLE, p) {
                            cur.age += 20;
                        }
                        // Corrode what lies in it; destroyed items dilute the
                        // pool by their volume.
                        if let Some(pile) = self.map.pile_mut(p) {
                            let mut i = 0;
                            let mut spilled = Vec::new();
                            while i < pile.len() {
                                let def = catalog.item(pile[i].id);
                                use Material::*;
                                let corrodes = def.made_of(Liquid)
                                    || def.made_of(Veggy)
                                    || def.made_of(Flesh)
                                    || def.made_of(Powder)
                                    || def.made_of(Cotton)
                                    || def.made_of(Wool)
                                    || def.made_of(Paper)
                                    || def.made_of(Plastic)
                                    || (def.made_of(Glass) && !self.rng.one_in(3))
                                    || self.rng.one_in(4);
                                if corrodes {
                                    pile[i].damage += 1;
                                    if pile[i].damage >= def.damage_tolerance() {
                                        cur.age += def.volume;
                                        spilled.append(&mut pile[i].contents);
                                        pile.remove(i);
                                        continue;
                                    }
                                }
                                i += 1;
                            }
                            pile.append(&mut spilled);
                        }
                    }

                    FieldKind::Fire => {
                        self.burn_tile(p, &mut cur, &mut explosions);
                    }

                    FieldKind::Smoke => {
                        self.gas_tick(p, &mut cur, FieldKind::Smoke, 2);
                    }

                    FieldKind::TearGas => {
                        self.gas_tick(p, &mut cur, FieldKind::TearGas, 3);
                    }

                    FieldKind::NukeGas => {
                        let rad = self.rng.rng(0, cur.intensity as i32) as u32;
                        self.map.add_radiation(p, rad);
                        self.gas_tick(p, &mut cur, FieldKind::NukeGas, 2);
                    }

                    FieldKind::Electricity => {
                        self.electricity_tick(p, &mut cur);
                    }

                    FieldKind::Fatigue => {
                        if cur.intensity < 3 {
                            if self.turn % 3600 == 0 && self.rng.one_in(10) {
                                cur.intensity += 1;
                            }
                        } else if self.rng.one_in(3600) && !catalog.nether.is_empty() {
                            // The rift is wide enough to pull something
                            // through.
                            let idx =
                                self.rng.rng(0, catalog.nether.len() as i32 - 1) as usize;
                            let q = Point::new(
                                p.x + self.rng.rng(-3, 3),
                                p.y + self.rng.rng(-3, 3),
                            );
                            spawns.push((catalog.nether[idx], q));
                        }
                    }
                }

                // Shared half-life decay.
                let halflife = catalog.field(cur.kind).halflife;
                if halflife > 0 {
                    cur.age += 1;
                    if cur.age > 0
                        && self.rng.dice(3, cur.age) > self.rng.dice(3, halflife)
                    {
                        cur.age = 0;
                        cur.intensity = cur.intensity.saturating_sub(1);
                    }
                    if cur.intensity == 0 {
                        cur.clear();
                    }
                }
                if let Some(slot) = self.map.field_mut(p) {
                    *slot = cur;
                }
            }
        }

        for (pos, power, shrapnel, fire) in explosions {
            self.explosion(pos, power, shrapnel, fire);
        }
        for (kind, pos) in spawns {
            if self.is_empty(pos) {
                self.spawn_monster(kind, pos);
            }
        }
        found_field
    }

    /// Fire: consume fuel and terrain, grow, spread, throw smoke.
    fn burn_tile(
        &mut self,
        p: Point,
        cur: &mut FieldCell,
        explosions: &mut Vec<(Point, i32, i32, bool)>,
    ) {
        let catalog = Arc::clone(&self.catalog);
        let intensity = cur.intensity as i32;

        // Items as fuel. Burning them pushes age negative, feeding growth.
        if let Some(pile) = self.map.pile_mut(p) {
            let mut i = 0;
            let mut spilled = Vec::new();
            while i < pile.len() {
                let def = catalog.item(pile[i].id);
                let vol = def.volume;
                let mut destroyed = false;
                use Material::*;
                if def.as_ammo().is_some() {
                    // Cooking off ammunition flares and dies back.
                    cur.age /= 2;
                    cur.age -= 300;
                    destroyed = true;
                } else if def.made_of(Paper) {
                    cur.age -= vol * 10;
                    destroyed = true;
                } else if (def.made_of(Wood) || def.made_of(Veggy))
                    && (cur.intensity == 3 || {
                        let burn_cap = intensity * 10
                            - if cur.age > 0 { self.rng.rng(0, cur.age / 10) } else { 0 };
                        vol <= burn_cap
                    })
                {
                    cur.age -= vol * 10;
                    destroyed = true;
                } else if (def.made_of(Cotton) || def.made_of(Flesh) || def.made_of(Wool))
                    && (vol <= intensity * 2
                        || (cur.intensity == 3 && self.rng.one_in(vol)))
                {
                    cur.age -= vol * 5;
                    destroyed = true;
                } else if def.made_of(Liquid)
                    || def.made_of(Powder)
                    || def.made_of(Plastic)
                    || (cur.intensity >= 2 && def.made_of(Glass))
                    || (cur.intensity == 3 && def.made_of(Iron))
                {
                    // Strong spirits feed the flames.
                    if def.name.contains("whiskey") || def.name.contains("vodka") {
                        cur.age -= 220;
                    }
                    destroyed = true;
                }
                if destroyed {
                    spilled.append(&mut pile[i].contents);
                    pile.remove(i);
                } else {
                    i += 1;
                }
            }
            pile.append(&mut spilled);
        }

        // The terrain itself.
        let ter = self.map.terrain(p).clone();
        if ter.flags.contains(TerrainFlags::FLAMMABLE) && self.rng.one_in(8 - intensity) {
            cur.age -= intensity * intensity * 40;
            if cur.intensity == 3
                && let Some(burnt) = ter.burns_to
            {
                self.map.set_ter(p, burnt);
            }
        } else if ter.flags.contains(TerrainFlags::EXPLODES) {
            if let Some(next) = ter.explodes_to {
                self.map.set_ter(p, next);
            }
            cur.age = 0;
            cur.intensity = 3;
            explosions.push((p, 40, 0, true));
        } else if ter.flags.contains(TerrainFlags::SWIMMABLE) {
            // Flames die quickly on water.
            cur.age += 800;
        }

        // If we consumed a lot, the flames grow higher.
        while cur.intensity < 3 && cur.age < 0 {
            cur.age += 300;
            cur.intensity += 1;
        }

        // Big flames feed adjacent flames. Fire in a pit stays in pits.
        let in_pit = self.map.has_flag(TerrainFlags::PIT, p);
        if cur.intensity == 3 && cur.age < 0 {
            let starti = self.rng.rng(0, 2);
            let startj = self.rng.rng(0, 2);
            'promote: for i in 0..3 {
                for j in 0..3 {
                    if cur.age >= 0 {
                        break 'promote;
                    }
                    let q = Point::new(
                        p.x + ((i + starti) % 3) - 1,
                        p.y + ((j + startj) % 3) - 1,
                    );
                    let neigh = self.map.field_at(q);
                    if neigh.kind == FieldKind::Fire
                        && neigh.intensity < 3
                        && (!in_pit || self.map.has_flag(TerrainFlags::PIT, q))
                        && let Some(slot) = self.map.field_mut(q)
                    {
                        slot.intensity += 1;
                        slot.age = 0;
                        cur.age = 0;
                    }
                }
            }
        }

        // Consume adjacent fuel and terrain to spread.
        let intensity = cur.intensity as i32;
        for i in -1..=1 {
            for j in -1..=1 {
                let q = Point::new(p.x + i, p.y + j);
                if !self.map.inbounds(q) {
                    continue;
                }
                if self.map.has_flag(TerrainFlags::EXPLODES, q)
                    && self.rng.one_in(8 - intensity)
                {
                    if let Some(next) = self.map.terrain(q).explodes_to {
                        self.map.set_ter(q, next);
                    }
                    explosions.push((q, 40, 0, true));
                } else if (i != 0 || j != 0)
                    && (!self.map.items(q).is_empty()
                        || self.rng.rng(15, 120) < intensity * 10)
                {
                    if self.map.field_at(q).kind == FieldKind::Smoke {
                        if let Some(slot) = self.map.field_mut(q) {
                            *slot = FieldCell::new(FieldKind::Fire, 1, 0);
                        }
                    } else if !in_pit || self.map.has_flag(TerrainFlags::PIT, q) {
                        self.map.add_field(q, FieldKind::Fire, 1);
                    }
                } else if self.map.move_cost(q) > 0
                    && self.rng.rng(7, 40) < intensity * 10
                    && cur.age < 1000
                {
                    let smoke = self.rng.rng(1, intensity) as u8;
                    self.map.add_field(q, FieldKind::Smoke, smoke);
                }
            }
        }
    }

    /// Smoke-class gases: kill scent, thin outdoors, drift and thicken.
    /// Tear gas converts smoke; nuke gas converts both.
    fn gas_tick(&mut self, p: Point, cur: &mut FieldCell, kind: FieldKind, spread_one_in: i32) {
        for q in p.neighborhood() {
            self.map.set_scent(q, 0);
        }
        if self.map.is_outside(p) {
            cur.age += self.catalog.field(kind).outdoor_age;
        }
        if !self.rng.one_in(spread_one_in) {
            return;
        }

        // Gases lower in the conversion order get absorbed by this one.
        let converts = |other: FieldKind| match kind {
            FieldKind::TearGas => other == FieldKind::Smoke,
            FieldKind::NukeGas => other == FieldKind::Smoke || other == FieldKind::TearGas,
            _ => false,
        };

        let mut spread = Vec::new();
        for q in p.neighborhood() {
            let neigh = self.map.field_at(q);
            if ((neigh.kind == kind || converts(neigh.kind)) && neigh.intensity < 3)
                || (neigh.is_null() && self.map.move_cost(q) > 0)
            {
                spread.push(q);
            }
        }
        if cur.intensity == 0 || cur.age <= 0 || spread.is_empty() {
            return;
        }
        let q = spread[self.rng.rng(0, spread.len() as i32 - 1) as usize];
        let neigh = self.map.field_at(q);
        if neigh.kind == kind && neigh.intensity < 3 {
            if let Some(slot) = self.map.field_mut(q) {
                slot.intensity += 1;
            }
            cur.intensity -= 1;
        } else if converts(neigh.kind) {
            if let Some(slot) = self.map.field_mut(q) {
                slot.kind = kind;
            }
        } else if self.map.move_cost(q) > 0 && self.map.add_field(q, kind, 1) {
            cur.intensity -= 1;
            if let Some(slot) = self.map.field_mut(q) {
                slot.age = cur.age;
            }
        }
    }

    /// Electricity hunts for ground, then dissipates through it.
    fn electricity_tick(&mut self, p: Point, cur: &mut FieldCell) {
        if self.rng.one_in(5) {
            return;
        }
        if self.map.move_cost(p) == 0 && cur.intensity > 1 {
            // Grounded: bleed charge into walkable neighbors.
            let mut tries = 0;
            while tries < 10 && cur.age < 50 {
                let q = Point::new(p.x + self.rng.rng(-1, 1), p.y + self.rng.rng(-1, 1));
                if self.map.move_cost(q) != 0 && self.map.field_at(q).kind == FieldKind::None
                {
                    self.map.add_field(q, FieldKind::Electricity, 1);
                    cur.intensity = cur.intensity.saturating_sub(1);
                    if cur.intensity == 0 {
                        break;
                    }
                    tries = 0;
                } else {
                    tries += 1;
                }
            }
        } else {
            // Not grounded: reach for impassable neighbors first.
            let mut valid = Vec::new();
            for q in p.neighborhood() {
                if self.map.move_cost(q) == 0
                    && self.map.inbounds(q)
                    && self.map.field_at(q).kind == FieldKind::None
                {
                    valid.push(q);
                }
            }
            if valid.is_empty() {
                let q = Point::new(p.x + self.rng.rng(-1, 1), p.y + self.rng.rng(-1, 1));
                if self.map.move_cost(q) > 0 {
                    let neigh = self.map.field_at(q);
                    if neigh.kind == FieldKind::Electricity && neigh.intensity < 3 {
                        if let Some(slot) = self.map.field_mut(q) {
                            slot.intensity += 1;
                        }
                    } else {
                        self.map.add_field(q, FieldKind::Electricity, 1);
                    }
                }
                cur.intensity = cur.intensity.saturating_sub(1);
            }
            while !valid.is_empty() && cur.intensity > 0 {
                let index = self.rng.rng(0, valid.len() as i32 - 1) as usize;
                self.map.add_field(valid[index], FieldKind::Electricity, 1);
                cur.intensity -= 1;
                valid.swap_remove(index);
            }
        }
    }

    /// The player walked into (or stands in) a field.
    pub fn step_in_field(&mut self, p: Point) {
        let cur = self.map.field_at(p);
        let intensity = cur.intensity as i32;
        match cur.kind {
            FieldKind::None | FieldKind::Blood | FieldKind::Bile | FieldKind::Sludge => {}

            FieldKind::Acid => {
                if intensity == 3 {
                    self.add_msg("The acid burns your legs and feet!");
                    let d1 = self.rng.rng(4, 10);
                    let d2 = self.rng.rng(4, 10);
                    let d3 = self.rng.rng(2, 8);
                    let d4 = self.rng.rng(2, 8);
                    self.player.hit(BodyPart::Feet, 0, 0, d1);
                    self.player.hit(BodyPart::Feet, 1, 0, d2);
                    self.player.hit(BodyPart::Legs, 0, 0, d3);
                    self.player.hit(BodyPart::Legs, 1, 0, d4);
                } else {
                    self.add_msg("The acid burns your feet!");
                    let d1 = self.rng.rng(intensity, 4 * intensity);
                    let d2 = self.rng.rng(intensity, 4 * intensity);
                    self.player.hit(BodyPart::Feet, 0, 0, d1);
                    self.player.hit(BodyPart::Feet, 1, 0, d2);
                }
            }

            FieldKind::Fire => match intensity {
                1 => {
                    self.add_msg("You burn your legs and feet!");
                    let d1 = self.rng.rng(2, 6);
                    let d2 = self.rng.rng(2, 6);
                    let d3 = self.rng.rng(1, 4);
                    let d4 = self.rng.rng(1, 4);
                    self.player.hit(BodyPart::Feet, 0, 0, d1);
                    self.player.hit(BodyPart::Feet, 1, 0, d2);
                    self.player.hit(BodyPart::Legs, 0, 0, d3);
                    self.player.hit(BodyPart::Legs, 1, 0, d4);
                }
                2 => {
                    self.add_msg("You're burning up!");
                    let d1 = self.rng.rng(2, 6);
                    let d2 = self.rng.rng(2, 6);
                    let d3 = self.rng.rng(4, 9);
                    self.player.hit(BodyPart::Legs, 0, 0, d1);
                    self.player.hit(BodyPart::Legs, 1, 0, d2);
                    self.player.hit(BodyPart::Torso, 0, 4, d3);
                    self.player.infect(DiseaseKind::Smoke, 20, Some(BodyPart::Mouth));
                }
                _ => {
                    self.add_msg("You're set ablaze!");
                    let d1 = self.rng.rng(2, 6);
                    let d2 = self.rng.rng(2, 6);
                    let d3 = self.rng.rng(4, 9);
                    self.player.hit(BodyPart::Legs, 0, 0, d1);
                    self.player.hit(BodyPart::Legs, 1, 0, d2);
                    self.player.hit(BodyPart::Torso, 0, 4, d3);
                    self.player.add_disease(DiseaseKind::OnFire, 5);
                    self.player.infect(DiseaseKind::Smoke, 30, Some(BodyPart::Mouth));
                }
            },

            FieldKind::Smoke => {
                if intensity == 3 {
                    self.player.infect(DiseaseKind::Smoke, 15, Some(BodyPart::Mouth));
                }
            }

            FieldKind::TearGas => {
                if intensity > 1 || !self.rng.one_in(3) {
                    self.player
                        .infect(DiseaseKind::TearGas, 20, Some(BodyPart::Mouth));
                }
            }

            FieldKind::NukeGas => {
                let rad = self.rng.rng(0, intensity * (intensity + 1)) as u32;
                self.player.radiation += rad;
                if intensity == 3 {
                    self.add_msg("This radioactive gas burns!");
                    let dam = self.rng.rng(1, 3);
                    self.player.hurt_all(dam);
                }
            }

            FieldKind::Electricity => {
                self.add_msg("You're electrocuted!");
                let dam = self.rng.rng(1, intensity);
                self.player.hurt_all(dam);
                if self.rng.one_in(8 - intensity)
                    && !self.rng.one_in(30 - self.player.stats.strength)
                {
                    self.add_msg("You're paralyzed!");
                    self.player.moves -= intensity * 150;
                }
            }

            FieldKind::Fatigue => {
                if self.rng.rng(0, 2) < intensity {
                    self.add_msg("You're violently teleported!");
                    let dam = intensity;
                    self.player.hurt_all(dam);
                    self.teleport_player();
                }
            }
        }
    }

    /// A monster moved into a field. The monster is checked out of the
    /// roster while this runs.
    pub fn mon_in_field(&mut self, mon: &mut Monster, p: Point) {
        let catalog = Arc::clone(&self.catalog);
        let def = catalog.monster(mon.kind);
        if def.flags.contains(MonsterFlags::DIGS) {
            // Underground; fields can't reach it.
            return;
        }
        let cur = self.map.field_at(p);
        let intensity = cur.intensity as i32;
        let mut dam = 0;
        match cur.kind {
            FieldKind::None | FieldKind::Blood | FieldKind::Bile | FieldKind::Sludge => {}

            FieldKind::Acid => {
                if !def.flags.contains(MonsterFlags::ACIDPROOF) {
                    dam = if intensity == 3 {
                        self.rng.rng(4, 10) + self.rng.rng(2, 8)
                    } else {
                        self.rng.rng(intensity, intensity * 4)
                    };
                }
            }

            FieldKind::Fire => {
                dam = match def.material {
                    Material::Flesh => 3,
                    Material::Veggy => 12,
                    Material::Paper
                    | Material::Liquid
                    | Material::Powder
                    | Material::Wood
                    | Material::Cotton
                    | Material::Wool => 50,
                    Material::Stone | Material::Kevlar | Material::Steel => -25,
                    _ => 0,
                };
                if def.flags.contains(MonsterFlags::FLIES) {
                    dam -= 20;
                }
                let fireproof = matches!(
                    def.material,
                    Material::Liquid | Material::Stone | Material::Kevlar | Material::Steel
                ) || def.flags.contains(MonsterFlags::FIREY);
                match intensity {
                    1 => dam += self.rng.rng(0, 8),
                    2 => {
                        dam += self.rng.rng(3, 12);
                        if !def.flags.contains(MonsterFlags::FLIES) {
                            mon.moves -= 20;
                            if !fireproof {
                                let dur = self.rng.rng(3, 8);
                                mon.add_effect(MonsterEffectKind::OnFire, dur);
                            }
                        }
                    }
                    _ => {
                        dam += self.rng.rng(5, 18);
                        if !def.flags.contains(MonsterFlags::FLIES) || self.rng.one_in(3) {
                            mon.moves -= 40;
                            if !fireproof {
                                let dur = self.rng.rng(8, 12);
                                mon.add_effect(MonsterEffectKind::OnFire, dur);
                            }
                        }
                    }
                }
            }

            FieldKind::Smoke => {
                if intensity == 3 {
                    mon.speed -= self.rng.rng(10, 20);
                }
                // Plants suffer from smoke even worse.
                if def.made_of(Material::Veggy) {
                    mon.speed -= self.rng.rng(1, intensity * 12);
                }
            }

            FieldKind::TearGas => {
                match intensity {
                    3 => {
                        mon.speed -= self.rng.rng(30, 60);
                        dam = self.rng.rng(8, 20);
                    }
                    2 => {
                        mon.speed -= self.rng.rng(10, 25);
                        dam = self.rng.rng(4, 10);
                    }
                    _ => mon.speed -= self.rng.rng(0, 6),
                }
                if def.made_of(Material::Veggy) {
                    mon.speed -= self.rng.rng(intensity * 5, intensity * 12);
                    dam += intensity * 10;
                }
            }

            FieldKind::NukeGas => {
                match intensity {
                    3 => {
                        mon.speed -= self.rng.rng(60, 120);
                        dam = self.rng.rng(30, 50);
                    }
                    2 => {
                        mon.speed -= self.rng.rng(20, 50);
                        dam = self.rng.rng(10, 25);
                    }
                    _ => {
                        mon.speed -= self.rng.rng(0, 15);
                        dam = self.rng.rng(0, 12);
                    }
                }
                if def.made_of(Material::Veggy) {
                    mon.speed -= self.rng.rng(intensity * 5, intensity * 12);
                    dam *= intensity;
                }
            }

            FieldKind::Electricity => {
                dam = self.rng.rng(1, intensity);
                if self.rng.one_in(8 - intensity)
                    && self.rng.one_in(def.armor_cut.max(1))
                {
                    mon.moves -= intensity * 150;
                }
            }

            FieldKind::Fatigue => {
                if self.rng.rng(0, 2) < intensity {
                    dam = intensity;
                    let mut dest = None;
                    for _ in 0..10 {
                        let q = Point::new(
                            p.x + self.rng.rng(-12, 12),
                            p.y + self.rng.rng(-12, 12),
                        );
                        if self.map.move_cost(q) != 0 {
                            dest = Some(q);
                            break;
                        }
                    }
                    match dest {
                        None => {
                            // Nowhere to rematerialize.
                            mon.hurt(9999);
                        }
                        Some(q) => {
                            if let Some(other) = self.mon_at(q) {
                                if self.u_see(p) {
                                    self.messages.add(format!(
                                        "The {} teleports into a {}, killing them both!",
                                        def.name,
                                        self.monsters[other].def(&catalog).name
                                    ));
                                }
                                self.explode_monster(other);
                                mon.hurt(9999);
                            } else {
                                mon.pos = q;
                            }
                        }
                    }
                }
            }
        }
        mon.hurt(dam);
    }

    /// Hazardous random relocation within the bubble.
    pub fn teleport_player(&mut self) {
        for _ in 0..20 {
            let q = Point::new(
                self.player.pos.x + self.rng.rng(-9, 9),
                self.player.pos.y + self.rng.rng(-9, 9),
            );
            if self.is_empty(q) {
                self.player.pos = q;
                return;
            }
        }
    }
}
