//! Trap effects: the routines dispatched when an actor enters a trapped
//! tile. Player and monster effects differ per trap; whether the trap clears
//! itself is decided by the effect routine.

use std::sync::Arc;

use crate::actor::{BodyPart, DiseaseKind, Monster, MonsterEffectKind, Skill};
use crate::catalog::{MonsterSize, TrapKind};
use crate::geom::Point;
use crate::item::Item;
use crate::world::{World, random_body_part};

/// Outcome of a disarm attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisarmOutcome {
    Disarmed,
    Failed,
    Triggered,
}

impl World {
    /// The player stepped onto a trapped tile.
    pub fn trigger_trap_player(&mut self, p: Point) {
        let trap_id = self.map.trap_at(p);
        let kind = self.catalog.trap(trap_id).kind;
        let turn = self.turn;
        match kind {
            TrapKind::None => {}

            TrapKind::Bubblewrap => {
                self.add_msg("You step on some bubblewrap!");
                self.sound(p, 18, "Pop!");
                self.map.remove_trap(p);
            }

            TrapKind::Cot => {
                self.add_msg("You stumble over the cot.");
                self.player.moves -= 100;
            }

            TrapKind::Beartrap { item } => {
                self.add_msg("A bear trap closes on your foot!");
                self.sound(p, 8, "SNAP!");
                let side = self.rng.rng(0, 1);
                self.player.hit(BodyPart::Legs, side, 10, 16);
                self.player.add_disease(DiseaseKind::Beartrap, -1);
                self.map.remove_trap(p);
                self.map.add_item(p, Item::new(item, turn), &mut self.rng);
            }

            TrapKind::Board => {
                self.add_msg("You step on a spiked board!");
                let d1 = self.rng.rng(6, 10);
                let d2 = self.rng.rng(6, 10);
                self.player.hit(BodyPart::Feet, 0, 0, d1);
                self.player.hit(BodyPart::Feet, 1, 0, d2);
            }

            TrapKind::Tripwire => {
                self.add_msg("You trip over a tripwire!");
                let mut valid = Vec::new();
                for q in p.adjacent() {
                    if self.is_empty(q) {
                        valid.push(q);
                    }
                }
                if !valid.is_empty() {
                    let q = valid[self.rng.rng(0, valid.len() as i32 - 1) as usize];
                    self.player.pos = q;
                }
                self.player.moves -= 150;
                if self.rng.rng(5, 20) > self.player.stats.dexterity {
                    let dam = self.rng.rng(1, 4);
                    self.player.hurt_all(dam);
                }
            }

            TrapKind::Crossbow { bow, string, bolt } => {
                self.add_msg("You trigger a crossbow trap!");
                let mut add_bolt = true;
                if !self.rng.one_in(4) && self.rng.rng(8, 20) > self.player.dodge() {
                    let part = random_body_part(&mut self.rng);
                    let side = self.rng.rng(0, 1);
                    let dam = self.rng.rng(20, 30);
                    self.add_msg(format!("Your {part} is hit!"));
                    self.player.hit(part, side, 0, dam);
                    add_bolt = !self.rng.one_in(10);
                } else {
                    self.add_msg("You dodge the shot!");
                }
                self.map.remove_trap(p);
                self.map.add_item(p, Item::new(bow, turn), &mut self.rng);
                self.map.add_item(p, Item::new(string, turn), &mut self.rng);
                if add_bolt {
                    self.map
                        .add_item(p, Item::with_charges(bolt, 1, turn), &mut self.rng);
                }
            }

            TrapKind::Shotgun {
                barrels,
                gun,
                string,
                single_barrel,
            } => {
                self.add_msg("You trigger a shotgun trap!");
                let mut shots = if self.rng.one_in(8)
                    || self.rng.one_in(20 - self.player.stats.strength)
                {
                    2
                } else {
                    1
                };
                if barrels < 2 {
                    shots = 1;
                }
                if self.rng.rng(5, 50) > self.player.dodge() {
                    let part = random_body_part(&mut self.rng);
                    let side = self.rng.rng(0, 1);
                    let dam = self.rng.rng(40 * shots, 60 * shots);
                    self.add_msg(format!("Your {part} is hit!"));
                    self.player.hit(part, side, 0, dam);
                } else {
                    self.add_msg("You dodge the shot!");
                }
                if shots == 2 || barrels < 2 {
                    self.map.remove_trap(p);
                    self.map.add_item(p, Item::new(gun, turn), &mut self.rng);
                    self.map.add_item(p, Item::new(string, turn), &mut self.rng);
                } else {
                    self.map.set_trap(p, single_barrel);
                }
            }

            TrapKind::Blade => {
                self.add_msg("A blade swings out and hacks your torso!");
                self.player.hit(BodyPart::Torso, 0, 12, 30);
            }

            TrapKind::SnareLight { string, trigger } => {
                self.sound(p, 2, "Snap!");
                self.add_msg("A snare closes on your leg.");
                let dur = self.rng.rng(10, 20);
                self.player.add_disease(DiseaseKind::LightSnare, dur);
                self.map.remove_trap(p);
                self.map.add_item(p, Item::new(string, turn), &mut self.rng);
                self.map.add_item(p, Item::new(trigger, turn), &mut self.rng);
            }

            TrapKind::SnareHeavy { rope, trigger } => {
                self.sound(p, 4, "Snap!");
                self.add_msg("A snare closes on your leg.");
                let side = self.rng.rng(0, 1);
                self.player.hit(BodyPart::Legs, side, 15, 20);
                let dur = self.rng.rng(20, 30);
                self.player.add_disease(DiseaseKind::HeavySnare, dur);
                self.map.remove_trap(p);
                self.map.add_item(p, Item::new(rope, turn), &mut self.rng);
                self.map.add_item(p, Item::new(trigger, turn), &mut self.rng);
            }

            TrapKind::Landmine => {
                self.add_msg("You trigger a landmine!");
                self.map.remove_trap(p);
                self.explosion(p, 10, 8, false);
            }

            TrapKind::Boobytrap => {
                self.add_msg("You trigger a boobytrap!");
                self.map.remove_trap(p);
                self.explosion(p, 18, 12, false);
            }

            TrapKind::Telepad => {
                self.sound(p, 6, "vvrrrRRMM*POP!*");
                self.add_msg("The air shimmers around you...");
                self.teleport_player();
            }

            TrapKind::Pit => {
                self.add_msg("You fall in a pit!");
                let dodge = self.player.dodge();
                let damage = self.rng.rng(10, 20) - self.rng.rng(dodge, dodge * 5);
                if damage > 0 {
                    self.add_msg("You hurt yourself!");
                    let dam = self.rng.rng(damage / 2, damage);
                    self.player.hurt_all(dam);
                    self.player.hit(BodyPart::Legs, 0, damage, 0);
                    self.player.hit(BodyPart::Legs, 1, damage, 0);
                } else {
                    self.add_msg("You land nimbly.");
                }
                self.player.add_disease(DiseaseKind::InPit, -1);
            }

            TrapKind::PitSpikes {
                pit_terrain,
                pit_trap,
                spear,
            } => {
                self.add_msg("You fall in a pit!");
                let dodge = self.player.dodge();
                let damage = self.rng.rng(20, 50);
                if self.rng.rng(5, 30) < dodge {
                    self.add_msg("You avoid the spikes within.");
                } else {
                    let part = match self.rng.rng(1, 10) {
                        1 | 2 => BodyPart::Legs,
                        3 | 4 => BodyPart::Arms,
                        _ => BodyPart::Torso,
                    };
                    let side = self.rng.rng(0, 1);
                    self.add_msg(format!("The spikes impale your {part}!"));
                    self.player.hit(part, side, 0, damage);
                    if self.rng.one_in(4) {
                        self.add_msg("The spears break!");
                        self.map.set_ter(p, pit_terrain);
                        self.map.set_trap(p, pit_trap);
                        for _ in 0..4 {
                            if self.rng.one_in(3) {
                                self.map
                                    .add_item(p, Item::new(spear, turn), &mut self.rng);
                            }
                        }
                    }
                }
                self.player.add_disease(DiseaseKind::InPit, -1);
            }

            TrapKind::Goo { .. } => {
                self.add_msg("You step in a puddle of thick goo.");
                self.player
                    .infect(DiseaseKind::Slimed, 20, Some(BodyPart::Feet));
                if self.rng.one_in(3) {
                    self.add_msg("The acidic goo eats away at your feet.");
                    self.player.hit(BodyPart::Feet, 0, 0, 5);
                    self.player.hit(BodyPart::Feet, 1, 0, 5);
                }
                self.map.remove_trap(p);
            }

            TrapKind::Dissector => {
                self.add_msg("Electrical beams emit from the floor and slice your flesh!");
                self.sound(p, 10, "BRZZZAP!");
                self.player.hit(BodyPart::Head, 0, 0, 15);
                self.player.hit(BodyPart::Torso, 0, 0, 20);
                self.player.hit(BodyPart::Arms, 0, 0, 12);
                self.player.hit(BodyPart::Arms, 1, 0, 12);
                self.player.hit(BodyPart::Hands, 0, 0, 10);
                self.player.hit(BodyPart::Hands, 1, 0, 10);
                self.player.hit(BodyPart::Legs, 0, 0, 12);
                self.player.hit(BodyPart::Legs, 1, 0, 12);
                self.player.hit(BodyPart::Feet, 0, 0, 10);
                self.player.hit(BodyPart::Feet, 1, 0, 10);
            }

            TrapKind::Shadow { monster } => {
                let mut spawned = false;
                for _ in 0..5 {
                    let (mx, my) = if self.rng.one_in(2) {
                        (
                            self.rng.rng(self.player.pos.x - 5, self.player.pos.x + 5),
                            if self.rng.one_in(2) {
                                self.player.pos.y - 5
                            } else {
                                self.player.pos.y + 5
                            },
                        )
                    } else {
                        (
                            if self.rng.one_in(2) {
                                self.player.pos.x - 5
                            } else {
                                self.player.pos.x + 5
                            },
                            self.rng.rng(self.player.pos.y - 5, self.player.pos.y + 5),
                        )
                    };
                    let q = Point::new(mx, my);
                    if self.is_empty(q) && self.map.sees(q, self.player.pos, 10).is_some() {
                        self.add_msg("A shadow forms nearby.");
                        let idx = self.spawn_monster(monster, q);
                        let timeout = self.rng.rng(2, 10);
                        self.monsters[idx].sp_timeout = timeout;
                        self.map.remove_trap(p);
                        spawned = true;
                        break;
                    }
                }
                let _ = spawned;
            }

            TrapKind::Snake { monster } => {
                if self.rng.one_in(3) {
                    for _ in 0..5 {
                        let q = Point::new(
                            self.rng.rng(self.player.pos.x - 5, self.player.pos.x + 5),
                            self.rng.rng(self.player.pos.y - 5, self.player.pos.y + 5),
                        );
                        if self.is_empty(q) {
                            self.add_msg("A shadowy snake forms nearby.");
                            self.spawn_monster(monster, q);
                            self.map.remove_trap(p);
                            return;
                        }
                    }
                }
                self.sound(p, 10, "ssssssss");
                if self.rng.one_in(6) {
                    self.map.remove_trap(p);
                }
            }

            TrapKind::Drain => {
                self.add_msg("You feel your life force sapping away.");
                self.player.hurt_all(1);
            }

            TrapKind::Hum => {
                let volume = self.rng.rng(1, 200);
                let sfx = hum_sound(volume);
                self.sound(p, volume, sfx);
            }

            TrapKind::Glow => {
                if self.rng.one_in(3) {
                    self.add_msg("You're bathed in radiation!");
                    let rad = self.rng.rng(10, 30) as u32;
                    self.player.radiation += rad;
                } else if self.rng.one_in(4) {
                    self.add_msg("A blinding flash strikes you!");
                    let pos = self.player.pos;
                    self.flashbang(pos);
                } else {
                    self.add_msg("Small flashes surround you.");
                }
            }
        }
    }

    /// A monster stepped onto a trapped tile (and failed its avoidance
    /// roll). The monster is checked out of the roster while this runs.
    pub fn trigger_trap_monster(&mut self, mon: &mut Monster, p: Point) {
        let catalog = Arc::clone(&self.catalog);
        let trap_id = self.map.trap_at(p);
        let kind = self.catalog.trap(trap_id).kind;
        let size = mon.def(&catalog).size;
        let name = mon.def(&catalog).name;
        let seen = self.u_see(p);
        let turn = self.turn;
        match kind {
            TrapKind::None => {}

            TrapKind::Bubblewrap => {
                // Tiny animals don't weigh enough to pop it.
                if size == MonsterSize::Tiny {
                    return;
                }
                self.sound(p, 18, "Pop!");
                self.map.remove_trap(p);
            }

            TrapKind::Cot => {
                if seen {
                    self.add_msg(format!("The {name} stumbles over the cot."));
                }
                mon.moves -= 100;
            }

            TrapKind::Beartrap { item } => {
                if size == MonsterSize::Tiny {
                    return;
                }
                self.sound(p, 8, "SNAP!");
                if mon.hurt(35) {
                    self.map.add_item(p, Item::new(item, turn), &mut self.rng);
                } else {
                    mon.moves = 0;
                    let dur = self.rng.rng(8, 15);
                    mon.add_effect(MonsterEffectKind::Beartrap, dur);
                    // The sprung trap rides along on the monster and drops
                    // with the corpse.
                    mon.inventory.push(Item::new(item, turn));
                }
                self.map.remove_trap(p);
            }

            TrapKind::Board => {
                if size == MonsterSize::Tiny {
                    return;
                }
                if seen {
                    self.add_msg(format!("The {name} steps on a spiked board!"));
                }
                let dam = self.rng.rng(6, 10);
                if !mon.hurt(dam) {
                    mon.moves -= 80;
                }
            }

            TrapKind::Tripwire => {
                if size == MonsterSize::Tiny {
                    return;
                }
                if seen {
                    self.add_msg(format!("The {name} trips over a tripwire!"));
                }
                self.stumble_checked_out(mon);
                let dodge = mon.def(&catalog).dodge;
                if self.rng.rng(0, 10) > dodge {
                    let dam = self.rng.rng(1, 4);
                    mon.hurt(dam);
                }
            }

            TrapKind::Crossbow { bow, string, bolt } => {
                let mut add_bolt = true;
                let chance = match size {
                    MonsterSize::Tiny => 50,
                    MonsterSize::Small => 8,
                    MonsterSize::Medium => 6,
                    MonsterSize::Large => 4,
                    MonsterSize::Huge => 1,
                };
                if self.rng.one_in(chance) {
                    if seen {
                        self.add_msg(format!("A bolt shoots out and hits the {name}!"));
                    }
                    let dam = self.rng.rng(20, 30);
                    mon.hurt(dam);
                    add_bolt = !self.rng.one_in(10);
                } else if seen {
                    self.add_msg(format!("A bolt shoots out, but misses the {name}."));
                }
                self.map.remove_trap(p);
                self.map.add_item(p, Item::new(bow, turn), &mut self.rng);
                self.map.add_item(p, Item::new(string, turn), &mut self.rng);
                if add_bolt {
                    self.map
                        .add_item(p, Item::with_charges(bolt, 1, turn), &mut self.rng);
                }
            }

            TrapKind::Shotgun {
                barrels,
                gun,
                string,
                single_barrel,
            } => {
                let chance = match size {
                    MonsterSize::Tiny => 100,
                    MonsterSize::Small => 16,
                    MonsterSize::Medium => 12,
                    MonsterSize::Large => 8,
                    MonsterSize::Huge => 2,
                };
                let mut shots = if self.rng.one_in(8) || self.rng.one_in(chance) {
                    2
                } else {
                    1
                };
                if barrels < 2 {
                    shots = 1;
                }
                if seen {
                    self.add_msg(format!("A shotgun fires and hits the {name}!"));
                }
                let dam = self.rng.rng(40 * shots, 60 * shots);
                mon.hurt(dam);
                if shots == 2 || barrels < 2 {
                    self.map.remove_trap(p);
                    self.map.add_item(p, Item::new(gun, turn), &mut self.rng);
                    self.map.add_item(p, Item::new(string, turn), &mut self.rng);
                } else {
                    self.map.set_trap(p, single_barrel);
                }
            }

            TrapKind::Blade => {
                if seen {
                    self.add_msg(format!("A blade swings out and hacks the {name}!"));
                }
                let def = mon.def(&catalog);
                let cut = (30 - def.armor_cut).max(0);
                let bash = (12 - def.armor_bash).max(0);
                mon.hurt(bash + cut);
            }

            TrapKind::SnareLight { string, trigger } => {
                self.sound(p, 2, "Snap!");
                match size {
                    MonsterSize::Tiny => {
                        if !mon.hurt(10) {
                            mon.add_effect(MonsterEffectKind::Beartrap, -1);
                        }
                    }
                    MonsterSize::Small => {
                        mon.moves = 0;
                        let dur = self.rng.rng(100, 150);
                        mon.add_effect(MonsterEffectKind::Beartrap, dur);
                    }
                    MonsterSize::Medium => {
                        mon.moves = 0;
                        let dur = self.rng.rng(20, 30);
                        mon.add_effect(MonsterEffectKind::Beartrap, dur);
                    }
                    // Shrugged off.
                    MonsterSize::Large | MonsterSize::Huge => {}
                }
                if seen {
                    self.add_msg(format!("The {name} is caught in a snare!"));
                }
                self.map.remove_trap(p);
                self.map.add_item(p, Item::new(string, turn), &mut self.rng);
                self.map.add_item(p, Item::new(trigger, turn), &mut self.rng);
            }

            TrapKind::SnareHeavy { rope, trigger } => {
                self.sound(p, 4, "Snap!");
                match size {
                    MonsterSize::Tiny | MonsterSize::Small => {
                        if !mon.hurt(20) {
                            mon.moves = 0;
                            mon.add_effect(MonsterEffectKind::Beartrap, -1);
                        }
                    }
                    MonsterSize::Medium => {
                        if !mon.hurt(10) {
                            mon.moves = 0;
                            let dur = self.rng.rng(100, 150);
                            mon.add_effect(MonsterEffectKind::Beartrap, dur);
                        }
                    }
                    MonsterSize::Large => {
                        mon.moves = 0;
                        let dur = self.rng.rng(20, 30);
                        mon.add_effect(MonsterEffectKind::Beartrap, dur);
                    }
                    MonsterSize::Huge => {}
                }
                if seen {
                    self.add_msg(format!("The {name} is caught in a snare!"));
                }
                self.map.remove_trap(p);
                self.map.add_item(p, Item::new(rope, turn), &mut self.rng);
                self.map.add_item(p, Item::new(trigger, turn), &mut self.rng);
            }

            TrapKind::Landmine => {
                if size == MonsterSize::Tiny {
                    return;
                }
                if seen {
                    self.add_msg(format!("The {name} steps on a landmine!"));
                }
                self.map.remove_trap(p);
                self.explosion(p, 10, 8, false);
            }

            TrapKind::Boobytrap => {
                if seen {
                    self.add_msg(format!("The {name} triggers a boobytrap!"));
                }
                self.map.remove_trap(p);
                self.explosion(p, 18, 12, false);
            }

            TrapKind::Telepad => {
                self.sound(p, 6, "vvrrrRRMM*POP!*");
                if seen {
                    self.add_msg(format!("The air shimmers around the {name}..."));
                }
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
                        mon.hurt(9999);
                    }
                    Some(q) => {
                        if let Some(other) = self.mon_at(q) {
                            if seen {
                                self.messages.add(format!(
                                    "The {} teleports into a {}, killing them both!",
                                    name,
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

            TrapKind::Pit => {
                if size == MonsterSize::Tiny {
                    return;
                }
                if seen {
                    self.add_msg(format!("The {name} falls in a pit!"));
                }
                let dam = self.rng.rng(10, 20);
                if !mon.hurt(dam) {
                    mon.moves = -1000;
                }
            }

            TrapKind::PitSpikes {
                pit_terrain,
                pit_trap,
                spear,
            } => {
                if size == MonsterSize::Tiny {
                    return;
                }
                if seen {
                    self.add_msg(format!("The {name} falls in a spiked pit!"));
                }
                let dam = self.rng.rng(20, 50);
                if !mon.hurt(dam) {
                    mon.moves = -1000;
                }
                if self.rng.one_in(4) {
                    if seen {
                        self.add_msg("The spears break!");
                    }
                    self.map.set_ter(p, pit_terrain);
                    self.map.set_trap(p, pit_trap);
                    for _ in 0..4 {
                        if self.rng.one_in(3) {
                            self.map.add_item(p, Item::new(spear, turn), &mut self.rng);
                        }
                    }
                }
            }

            TrapKind::Goo { blob } => {
                if mon.kind == blob {
                    mon.speed += 15;
                    mon.hp = mon.speed;
                } else {
                    mon.poly(&catalog, blob);
                    mon.speed -= 15;
                    mon.hp = mon.speed;
                }
                self.map.remove_trap(p);
            }

            TrapKind::Dissector => {
                self.sound(p, 10, "BRZZZAP!");
                if mon.hurt(60) {
                    // Sliced to pieces; the remains spray outward.
                    for q in p.neighborhood() {
                        if self.map.move_cost(q) > 0 && self.rng.one_in(2) {
                            self.add_blood(q, crate::catalog::FieldKind::Blood);
                        }
                    }
                }
            }

            // Atmospheric traps touch monsters lightly or not at all.
            TrapKind::Shadow { .. } => {}

            TrapKind::Snake { .. } => {
                self.sound(p, 10, "ssssssss");
                if self.rng.one_in(6) {
                    self.map.remove_trap(p);
                }
            }

            TrapKind::Drain => {
                mon.hurt(1);
            }

            TrapKind::Hum => {
                let volume = self.rng.rng(1, 200);
                if volume >= 150 {
                    mon.add_effect(MonsterEffectKind::Deaf, volume - 140);
                }
                let sfx = hum_sound(volume);
                self.sound(p, volume, sfx);
            }

            TrapKind::Glow => {
                if self.rng.one_in(3) {
                    let dam = self.rng.rng(5, 10);
                    mon.hurt(dam);
                    mon.speed = mon.speed * 9 / 10;
                }
            }
        }
    }

    /// Random sideways lurch for a checked-out monster (tripwires).
    fn stumble_checked_out(&mut self, mon: &mut Monster) {
        let mut valid = Vec::new();
        for q in mon.pos.adjacent() {
            if self.is_empty(q) {
                valid.push(q);
            }
        }
        if valid.is_empty() {
            return;
        }
        let q = valid[self.rng.rng(0, valid.len() as i32 - 1) as usize];
        mon.pos = q;
    }

    /// Player-initiated disarm: a trap-skill roll against the trap's
    /// difficulty. Close failures do nothing; bad ones spring the trap.
    pub fn disarm_trap(&mut self, p: Point) -> DisarmOutcome {
        let trap_id = self.map.trap_at(p);
        if trap_id.is_none() {
            return DisarmOutcome::Failed;
        }
        let def = self.catalog.trap(trap_id);
        let diff = def.difficulty;
        let components = def.components;
        let skill = self.player.skills.level(Skill::Traps);
        let mut roll = self.rng.rng(skill, 4 * skill);
        while roll < 50
            && (self.rng.rng(5, 20) < self.player.stats.perception
                || self.rng.rng(1, 20) < self.player.stats.dexterity)
        {
            roll += 1;
        }
        let turn = self.turn;
        if roll >= diff {
            self.add_msg("You disarm the trap!");
            for &component in components {
                self.map
                    .add_item(p, Item::new(component, turn), &mut self.rng);
            }
            self.map.remove_trap(p);
            DisarmOutcome::Disarmed
        } else if roll * 10 >= diff * 8 {
            self.add_msg("You fail to disarm the trap.");
            DisarmOutcome::Failed
        } else {
            self.add_msg("You fail to disarm the trap, and you set it off!");
            self.trigger_trap_player(p);
            DisarmOutcome::Triggered
        }
    }
}

fn hum_sound(volume: i32) -> &'static str {
    if volume <= 10 {
        "a faint hum."
    } else if volume <= 50 {
        "an annoying hum."
    } else if volume <= 100 {
        "a loud HUM."
    } else {
        "a deafening VRMMMMMM!"
    }
}
