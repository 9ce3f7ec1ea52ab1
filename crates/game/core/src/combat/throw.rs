//! The throw pipeline: a simplified ranged resolve with its own deviation
//! model, glass shatter, and blocked-tile fallback.

use std::sync::Arc;

use crate::actor::{BodyPart, Skill};
use crate::catalog::{AmmoEffects, Material};
use crate::error::ActionError;
use crate::geom::{Point, chebyshev_dist, line_to};
use crate::world::World;

impl World {
    /// Hurl the item in the given inventory slot at `target`.
    pub fn throw_item(&mut self, slot: usize, mut target: Point) -> Result<(), ActionError> {
        let catalog = Arc::clone(&self.catalog);
        if slot >= self.player.inventory.len() {
            return Err(ActionError::BadSlot);
        }
        let thrown = self.player.inventory.remove(slot);
        let def = *catalog.item(thrown.id);
        self.player.moves -= 125;

        let trange = 3 * chebyshev_dist(self.player.pos, target) / 2;
        let skill = self.player.skills.level(Skill::Throw);

        // Throws below basic competency are extra bad.
        let mut deviation = 0;
        if skill < 3 {
            deviation += self.rng.rng(0, 8 - skill);
        }
        if skill < 8 {
            deviation += self.rng.rng(0, 8 - skill);
        } else {
            deviation -= skill - 6;
        }
        deviation += self.player.throw_dex_mod();
        let per = self.player.stats.perception;
        if per < 6 {
            deviation += self.rng.rng(0, 8 - per);
        } else if per > 8 {
            deviation -= per - 8;
        }
        deviation += self.rng.rng(
            0,
            self.player.encumb(BodyPart::Hands) * 2 + self.player.encumb(BodyPart::Eyes) + 1,
        );
        if def.volume > 5 {
            deviation += self.rng.rng(0, 1 + (def.volume - 5) / 4);
        }
        if def.volume == 0 {
            deviation += self.rng.rng(0, 3);
        }
        deviation += self.rng.rng(0, 1 + (self.player.stats.strength - def.weight).abs());

        let mut missed_by = 0.01 * deviation as f64 * trange as f64;
        let mut missed = false;
        if missed_by >= 1.0 {
            missed_by = missed_by.min(9.0);
            let spread = missed_by.sqrt() as i32;
            target.x += self.rng.rng(-spread, spread);
            target.y += self.rng.rng(-spread, spread);
            missed = true;
            self.add_msg("You miss!");
        } else if missed_by >= 0.6 {
            missed = true;
            self.add_msg("You barely miss!");
        }

        let tiebreak = self.map.sees(self.player.pos, target, -1).unwrap_or(0);
        let trajectory = line_to(self.player.pos, target, tiebreak);

        let str_cur = self.player.stats.strength;
        let mut dam = (def.weight / 4 + def.melee_dam / 2 + str_cur / 2)
            / (2 + def.volume / 4).max(1);
        if dam > def.weight * 3 {
            dam = def.weight * 3;
        }

        let glass = def.made_of(Material::Glass) && !thrown.active;
        let mut thrown = Some(thrown);
        let mut landing = self.player.pos;
        let mut i = 0;
        while i < trajectory.len() && dam > -10 {
            let tx = trajectory[i];
            landing = tx;
            let mut goodhit = missed_by;

            if let Some(m) = self.mon_at(tx) {
                let size = self.monsters[m].def(&catalog).size as i32;
                if !missed || self.rng.one_in(7 - size) {
                    let armor = self.monsters[m].def(&catalog).armor_cut;
                    let name = self.monsters[m].def(&catalog).name;
                    let nohead = self.monsters[m]
                        .def(&catalog)
                        .flags
                        .contains(crate::catalog::MonsterFlags::NOHEAD);

                    // A skilled throw with an edged object cuts.
                    if self.rng.rng(0, 100) < 20 + skill * 12 && def.melee_cut > 0 {
                        self.add_msg(format!("You cut the {name}!"));
                        if def.melee_cut > armor {
                            dam += def.melee_cut - armor;
                        }
                    }
                    if let Some(it) = thrown.take() {
                        if glass
                            && self.rng.rng(0, def.volume + 8) - self.rng.rng(0, str_cur)
                                < def.volume
                        {
                            if self.u_see(tx) {
                                self.add_msg(format!("The {} shatters!", def.name));
                            }
                            for content in it.contents {
                                self.map.add_item(tx, content, &mut self.rng);
                            }
                            self.sound(tx, 16, "glass breaking!");
                            let glassdam = self.rng.rng(0, def.volume * 2);
                            if glassdam > armor {
                                dam += glassdam - armor;
                            }
                        } else {
                            self.map.add_item(tx, it, &mut self.rng);
                        }
                    }
                    if i < trajectory.len() - 1 {
                        goodhit = self.rng.rng(0, 9999) as f64 / 20000.0;
                    }
                    let mut message = "";
                    if goodhit < 0.1 && !nohead {
                        message = "Headshot!";
                        dam = self.rng.rng(dam, dam * 3);
                    } else if goodhit < 0.2 {
                        message = "Critical!";
                        dam = self.rng.rng(dam, dam * 2);
                    } else if goodhit < 0.4 {
                        dam = self.rng.rng(dam / 2, dam * 3 / 2);
                    } else if goodhit < 0.5 {
                        message = "Grazing hit.";
                        dam = self.rng.rng(0, dam);
                    }
                    self.add_msg(format!(
                        "{message} You hit the {name} for {dam} damage."
                    ));
                    self.monsters[m].hurt(dam);
                    return Ok(());
                }
            }
            // No monster hit, but the terrain might be.
            self.map
                .shoot(tx, &mut dam, false, AmmoEffects::empty(), &mut self.rng);
            if self.map.move_cost(tx) == 0 {
                // Bounced off something solid; fall one step back.
                landing = if i > 0 { trajectory[i - 1] } else { self.player.pos };
                break;
            }
            i += 1;
        }

        if let Some(it) = thrown {
            if glass
                && self.rng.rng(0, def.volume + 8) - self.rng.rng(0, str_cur) < def.volume
            {
                if self.u_see(landing) {
                    self.add_msg(format!("The {} shatters!", def.name));
                }
                for content in it.contents {
                    self.map.add_item(landing, content, &mut self.rng);
                }
                self.sound(landing, 16, "glass breaking!");
            } else {
                self.sound(landing, 8, "thud.");
                self.map.add_item(landing, it, &mut self.rng);
            }
        }
        Ok(())
    }
}
