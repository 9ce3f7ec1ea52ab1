//! The turn orchestrator: one command in, one world turn out.
//!
//! Order within a turn is fixed: fields tick, active items burn down, scent
//! diffuses, then actors act in stable order (player, NPCs, monsters), then
//! the dead are processed, pending spawns materialize, and the bubble
//! follows the player. Mutations apply immediately; every actor sees the
//! post-mutation world.

use std::sync::Arc;

use crate::actor::{ActivityKind, BodyPart, DiseaseKind, NpcAttitude, Skill};
use crate::ai;
use crate::catalog::{ItemKind, MonsterSize, TerrainFlags};
use crate::config::GameConfig;
use crate::error::StoreError;
use crate::geom::{Direction, Point, chebyshev_dist};
use crate::world::World;

const BUBBLE: i32 = GameConfig::BUBBLE_SIZE as i32;

/// Scent strength deposited on the player's tile every turn.
const PLAYER_SCENT: u32 = 800;

/// One discrete player order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    Wait,
    Move(Direction),
    Open(Direction),
    Close(Direction),
    Bash(Direction),
    Fire { target: Point, burst: bool },
    Throw { slot: usize, target: Point },
    Disarm(Direction),
    Reload,
}

impl World {
    /// Advance the world one turn, executing `command` for the player.
    pub fn advance(&mut self, command: Command) -> Result<(), StoreError> {
        self.turn += 1;

        self.process_fields();
        self.process_active_items();
        self.update_scent();

        // Player.
        self.player.moves += self.player.speed;
        self.player.tick_diseases();
        self.apply_player_diseases();
        self.player_activity(command);
        if self.player.activity.is_none() {
            self.player_command(command);
        }

        self.npc_turns();
        self.monster_turns();

        self.process_dead();
        self.materialize_spawns();
        self.update_map()?;
        Ok(())
    }

    // ===== player =====

    /// Multi-turn undertakings tick on Wait and cancel on anything else.
    fn player_activity(&mut self, command: Command) {
        let Some(mut act) = self.player.activity else {
            return;
        };
        if command != Command::Wait {
            self.add_msg("You stop what you were doing.");
            self.player.activity = None;
            return;
        }
        act.turns_left = act.turns_left.saturating_sub(1);
        self.player.moves = 0;
        if act.turns_left > 0 {
            self.player.activity = Some(act);
            return;
        }
        self.player.activity = None;
        match act.kind {
            ActivityKind::Reload => self.finish_reload(),
        }
    }

    fn player_command(&mut self, command: Command) {
        match command {
            Command::Wait => {
                self.player.moves = 0;
            }
            Command::Move(dir) => self.plmove(dir),
            Command::Open(dir) => {
                let p = self.player.pos + dir.offset();
                let inside = !self.map.is_outside(self.player.pos);
                if self.map.open_door(p, inside) {
                    self.player.moves -= 100;
                } else {
                    self.add_msg("You can't open that.");
                }
            }
            Command::Close(dir) => {
                let p = self.player.pos + dir.offset();
                if self.mon_at(p).is_some() {
                    self.add_msg("There's a monster in the way!");
                } else if !self.map.items(p).is_empty() {
                    self.add_msg("There's something in the way!");
                } else if self.map.close_door(p) {
                    self.player.moves -= 90;
                } else {
                    self.add_msg("You can't close that.");
                }
            }
            Command::Bash(dir) => {
                let p = self.player.pos + dir.offset();
                let strength = self.player.stats.strength
                    + self
                        .player
                        .weapon
                        .as_ref()
                        .map_or(0, |w| self.catalog.item(w.id).melee_dam);
                let result = self.map.bash(p, strength, &mut self.rng);
                if result.connected {
                    self.sound(p, 18, &result.sound);
                    self.player.moves -= 100;
                } else {
                    self.add_msg("You swing at empty air.");
                }
            }
            Command::Fire { target, burst } => {
                if let Err(err) = self.fire(target, burst) {
                    let text = err.to_string();
                    self.add_msg(format!("You can't fire: {text}."));
                }
            }
            Command::Throw { slot, target } => {
                if let Err(err) = self.throw_item(slot, target) {
                    let text = err.to_string();
                    self.add_msg(format!("You can't throw that: {text}."));
                }
            }
            Command::Disarm(dir) => {
                let p = self.player.pos + dir.offset();
                self.player.moves -= 100;
                if self.map.trap_at(p).is_none() {
                    self.add_msg("There is no trap there.");
                } else {
                    self.disarm_trap(p);
                }
            }
            Command::Reload => self.start_reload(),
        }
    }

    /// Walk one step. Bumping a monster attacks it; bumping a closed door
    /// opens it; entering a tile springs its trap and field.
    fn plmove(&mut self, dir: Direction) {
        let dest = self.player.pos + dir.offset();
        if !(0..BUBBLE).contains(&dest.x) || !(0..BUBBLE).contains(&dest.y) {
            // The bubble recenters after the move, so this cannot happen
            // from a legal position; refuse quietly.
            return;
        }

        if let Some(idx) = self.mon_at(dest) {
            self.player_melee(idx);
            return;
        }
        if self.npc_at(dest).is_some() {
            self.add_msg("There's someone in your way.");
            self.player.moves -= 100;
            return;
        }

        if self.map.move_cost(dest) > 0 {
            let cost = self.map.combined_movecost(self.player.pos, dest);
            self.player.moves -= cost;
            self.player.pos = dest;

            if self.map.has_flag(TerrainFlags::SHARP, dest) && !self.rng.one_in(4) {
                let side = self.rng.rng(0, 1);
                let dam = self.rng.rng(1, 4);
                self.add_msg("You cut yourself on something sharp!");
                self.player.hit(BodyPart::Legs, side, 0, dam);
            }

            if !self.map.trap_at(dest).is_none() {
                self.trigger_trap_player(dest);
            }
            self.step_in_field(dest);
        } else {
            let inside = !self.map.is_outside(self.player.pos);
            if self.map.open_door(dest, inside) {
                self.player.moves -= 100;
                self.add_msg("You open the door.");
            } else {
                self.add_msg(format!("There's a {} in the way.", self.map.tername(dest)));
            }
        }
    }

    /// Player melee against a monster. A bump attack: to-hit dice against
    /// the target's dodge, damage from strength and the wielded weapon.
    fn player_melee(&mut self, idx: usize) {
        let catalog = Arc::clone(&self.catalog);
        self.player.moves -= 80;
        let def = self.monsters[idx].def(&catalog);
        let name = def.name;
        let armor = def.armor_bash;
        let mut dodgedice = def.dodge * 2;
        let mut numdice = self.player.skills.level(Skill::Melee) + 2;
        match def.size {
            MonsterSize::Tiny => dodgedice += 4,
            MonsterSize::Small => dodgedice += 2,
            MonsterSize::Large => numdice += 1,
            MonsterSize::Huge => numdice += 2,
            MonsterSize::Medium => {}
        }

        if self.monsters[idx].hallucination {
            self.add_msg(format!("The {name} disappears!"));
            self.monsters[idx].dead = true;
            return;
        }

        if self.rng.dice(numdice, 10) <= self.rng.dice(dodgedice, 10) {
            self.add_msg(format!("You miss the {name}."));
            return;
        }
        let (weapon_dam, weapon_cut) = self
            .player
            .weapon
            .as_ref()
            .map_or((0, 0), |w| {
                let d = catalog.item(w.id);
                (d.melee_dam, d.melee_cut)
            });
        let str_cur = self.player.stats.strength;
        let mut dam = self.rng.rng(str_cur / 2, str_cur) + weapon_dam;
        dam = (dam - armor).max(0) + weapon_cut.saturating_sub(def.armor_cut).max(0);
        self.add_msg(format!("You hit the {name} for {dam} damage."));
        if self.monsters[idx].hurt(dam) {
            self.add_msg(format!("The {name} dies!"));
        }
        self.monsters[idx]
            .add_effect(crate::actor::MonsterEffectKind::HitByPlayer, 3);
    }

    fn start_reload(&mut self) {
        let Some(weapon) = self.player.weapon.as_ref() else {
            self.add_msg("You have nothing to reload.");
            return;
        };
        let Some(gun) = self.catalog.item(weapon.id).as_gun().copied() else {
            self.add_msg("That's not a firearm.");
            return;
        };
        if weapon.charges >= gun.clip {
            self.add_msg("Your weapon is fully loaded.");
            return;
        }
        let has_ammo = self.player.inventory.iter().any(|it| {
            self.catalog
                .item(it.id)
                .as_ammo()
                .is_some_and(|a| a.class == gun.ammo)
        });
        if !has_ammo {
            self.add_msg("You're out of ammunition.");
            return;
        }
        self.player.activity = Some(crate::actor::Activity {
            kind: ActivityKind::Reload,
            turns_left: 2,
        });
        self.player.moves = 0;
    }

    fn finish_reload(&mut self) {
        let Some(weapon) = self.player.weapon.as_ref() else {
            return;
        };
        let Some(gun) = self.catalog.item(weapon.id).as_gun().copied() else {
            return;
        };
        let slot = self.player.inventory.iter().position(|it| {
            self.catalog
                .item(it.id)
                .as_ammo()
                .is_some_and(|a| a.class == gun.ammo)
        });
        let Some(slot) = slot else { return };
        let ammo = self.player.inventory.remove(slot);
        let space = gun.clip
            - self.player.weapon.as_ref().map_or(0, |w| w.charges);
        let loaded = ammo.charges.min(space);
        if let Some(w) = self.player.weapon.as_mut() {
            w.charges += loaded;
            w.curammo = Some(ammo.id);
        }
        let leftover = ammo.charges - loaded;
        if leftover > 0 {
            let mut rest = ammo;
            rest.charges = leftover;
            let _ = self.player.inventory.try_push(rest);
        }
        self.add_msg("You reload your weapon.");
    }

    /// Ongoing conditions chew on the player each turn.
    fn apply_player_diseases(&mut self) {
        let mut fire_dam = 0;
        let mut bleed = false;
        for d in self.player.diseases.iter() {
            match d.kind {
                DiseaseKind::OnFire => fire_dam += 1,
                DiseaseKind::Bleed => bleed = true,
                _ => {}
            }
        }
        if fire_dam > 0 {
            let dam = self.rng.rng(1, 3);
            self.add_msg("You're on fire!");
            self.player.hit(BodyPart::Torso, 0, 0, dam * fire_dam);
        }
        if bleed && self.rng.one_in(2) {
            self.player.hit(BodyPart::Torso, 0, 1, 0);
        }
    }

    // ===== scent =====

    /// Deposit the player's scent and diffuse the whole grid one step.
    /// Impassable, unbashable tiles hold no scent.
    fn update_scent(&mut self) {
        let player = self.player.pos;
        self.map.set_scent(player, PLAYER_SCENT);
        let mut fresh = vec![[0u32; GameConfig::BUBBLE_SIZE]; GameConfig::BUBBLE_SIZE];
        for x in 0..BUBBLE {
            for y in 0..BUBBLE {
                let p = Point::new(x, y);
                if self.map.move_cost(p) == 0 && !self.map.is_bashable(p) {
                    continue;
                }
                let mut sum = 0u32;
                for q in p.neighborhood() {
                    sum += self.map.scent(q);
                }
                fresh[x as usize][y as usize] = sum / 10;
            }
        }
        for x in 0..BUBBLE {
            for y in 0..BUBBLE {
                self.map
                    .set_scent(Point::new(x, y), fresh[x as usize][y as usize]);
            }
        }
        self.map.set_scent(player, PLAYER_SCENT);
    }

    // ===== items =====

    /// Active items on the ground drain charges and revert or vanish.
    fn process_active_items(&mut self) {
        let catalog = Arc::clone(&self.catalog);
        let turn = self.turn;
        for x in 0..BUBBLE {
            for y in 0..BUBBLE {
                let p = Point::new(x, y);
                let Some(pile) = self.map.pile_mut(p) else {
                    continue;
                };
                let mut i = 0;
                while i < pile.len() {
                    if !pile[i].active {
                        i += 1;
                        continue;
                    }
                    let ItemKind::Tool(tool) = catalog.item(pile[i].id).kind else {
                        i += 1;
                        continue;
                    };
                    if tool.turns_per_charge > 0 && turn % tool.turns_per_charge == 0 {
                        pile[i].charges -= 1;
                    }
                    if pile[i].charges <= 0 {
                        match tool.revert_to {
                            Some(revert) => {
                                pile[i].id = revert;
                                pile[i].active = false;
                                i += 1;
                            }
                            None => {
                                pile.remove(i);
                            }
                        }
                    } else {
                        i += 1;
                    }
                }
            }
        }
    }

    // ===== NPCs =====

    fn npc_turns(&mut self) {
        for i in 0..self.npcs.len() {
            if self.npcs[i].dead {
                continue;
            }
            self.npcs[i].body.moves += self.npcs[i].body.speed;
            self.npcs[i].body.tick_diseases();
            let mut guard = 0;
            while self.npcs[i].body.moves > 0 && !self.npcs[i].dead && guard < 20 {
                self.npc_act(i);
                guard += 1;
            }
        }
    }

    /// One NPC decision: orders filtered through temperament. Bravery,
    /// altruism and what the NPC thinks of the player decide whether orders
    /// hold when something hostile gets close; collectors stop for loot.
    fn npc_act(&mut self, i: usize) {
        let pos = self.npcs[i].body.pos;
        let player = self.player.pos;
        let personality = self.npcs[i].personality;
        let opinion = self.npcs[i].opinion;
        let threat = self.nearest_hostile(pos);

        // Nerve to hold position with danger nearby.
        let courage = personality.bravery as i32 * 2
            + personality.altruism as i32 / 2
            + opinion.trust
            - opinion.fear;
        let mut attitude = self.npcs[i].attitude;
        if attitude != NpcAttitude::Flee
            && courage < 0
            && threat.is_some_and(|(_, dist)| dist <= 3)
        {
            attitude = NpcAttitude::Flee;
        }

        // Packrats stoop for whatever they're standing on.
        if attitude != NpcAttitude::Flee
            && personality.collector > 0
            && !self.map.items(pos).is_empty()
            && !self.npcs[i].body.inventory.is_full()
        {
            if let Some(item) = self.map.remove_item(pos, 0) {
                let _ = self.npcs[i].body.inventory.try_push(item);
                self.npcs[i].body.moves -= 100;
                return;
            }
        }

        match attitude {
            NpcAttitude::Wait | NpcAttitude::Talk => {
                self.npcs[i].body.moves = 0;
            }
            NpcAttitude::Kill | NpcAttitude::Defend => {
                if let Some((target, dist)) = threat {
                    if dist <= 1 {
                        self.npc_melee(i, target);
                        return;
                    }
                    if attitude == NpcAttitude::Kill {
                        let goal = self.monsters[target].pos;
                        self.npc_step_toward(i, goal);
                        return;
                    }
                }
                // Defenders without a target shadow the player.
                self.npc_shadow_player(i, 2);
            }
            NpcAttitude::Follow | NpcAttitude::Slave => {
                // Trusted company walks closer.
                let keep = if opinion.value >= 5 { 1 } else { 2 };
                self.npc_shadow_player(i, keep);
            }
            NpcAttitude::Flee => {
                let from = threat.map_or(player, |(t, _)| self.monsters[t].pos);
                self.npc_flee_from(i, from);
            }
        }
    }

    /// Nearest live hostile monster the NPC would notice.
    fn nearest_hostile(&self, pos: Point) -> Option<(usize, i32)> {
        self.monsters
            .iter()
            .enumerate()
            .filter(|(_, m)| !m.dead && m.friendly <= 0)
            .map(|(idx, m)| (idx, chebyshev_dist(pos, m.pos)))
            .filter(|&(_, dist)| dist <= 12)
            .min_by_key(|&(_, dist)| dist)
    }

    fn npc_shadow_player(&mut self, i: usize, keep: i32) {
        let pos = self.npcs[i].body.pos;
        let player = self.player.pos;
        if chebyshev_dist(pos, player) <= keep {
            self.npcs[i].body.moves = 0;
            return;
        }
        self.npc_step_toward(i, player);
    }

    fn npc_step_toward(&mut self, i: usize, goal: Point) {
        let pos = self.npcs[i].body.pos;
        let path = self.map.route(pos, goal);
        match path.first() {
            Some(&step) if self.is_empty(step) => {
                let cost = self.map.combined_movecost(pos, step);
                self.npcs[i].body.moves -= cost;
                self.npcs[i].body.pos = step;
            }
            _ => self.npcs[i].body.moves -= 100,
        }
    }

    fn npc_flee_from(&mut self, i: usize, from: Point) {
        let pos = self.npcs[i].body.pos;
        let mut best = pos;
        let mut best_dist = chebyshev_dist(pos, from);
        for q in pos.adjacent() {
            if self.is_empty(q) && chebyshev_dist(q, from) > best_dist {
                best = q;
                best_dist = chebyshev_dist(q, from);
            }
        }
        if best == pos {
            self.npcs[i].body.moves -= 100;
        } else {
            let cost = self.map.combined_movecost(pos, best);
            self.npcs[i].body.moves -= cost;
            self.npcs[i].body.pos = best;
        }
    }

    /// NPC melee swing at a monster. Aggression sharpens both the to-hit
    /// dice and the follow-through.
    fn npc_melee(&mut self, i: usize, target: usize) {
        let catalog = Arc::clone(&self.catalog);
        self.npcs[i].body.moves -= 80;
        let aggression = self.npcs[i].personality.aggression as i32;
        let def = self.monsters[target].def(&catalog);
        let name = def.name;
        let armor = def.armor_bash;
        let mut dodgedice = def.dodge * 2;
        let mut numdice =
            self.npcs[i].body.skills.level(Skill::Melee) + 2 + aggression.max(0) / 4;
        match def.size {
            MonsterSize::Tiny => dodgedice += 4,
            MonsterSize::Small => dodgedice += 2,
            MonsterSize::Large => numdice += 1,
            MonsterSize::Huge => numdice += 2,
            MonsterSize::Medium => {}
        }

        if self.monsters[target].hallucination {
            self.monsters[target].dead = true;
            return;
        }
        if self.rng.dice(numdice, 10) <= self.rng.dice(dodgedice, 10) {
            if self.u_see(self.npcs[i].body.pos) {
                let who = self.npcs[i].body.name.clone();
                self.add_msg(format!("{who} misses the {name}."));
            }
            return;
        }
        let (weapon_dam, weapon_cut) = self.npcs[i].body.weapon.as_ref().map_or((0, 0), |w| {
            let d = catalog.item(w.id);
            (d.melee_dam, d.melee_cut)
        });
        let str_cur = self.npcs[i].body.stats.strength;
        let mut dam = self.rng.rng(str_cur / 2, str_cur) + weapon_dam + aggression.max(0) / 2;
        dam = (dam - armor).max(0) + weapon_cut.saturating_sub(def.armor_cut).max(0);
        if self.u_see(self.npcs[i].body.pos) {
            let who = self.npcs[i].body.name.clone();
            self.add_msg(format!("{who} hits the {name} for {dam} damage."));
        }
        self.monsters[target].hurt(dam);
    }

    // ===== monsters =====

    fn monster_turns(&mut self) {
        let catalog = Arc::clone(&self.catalog);
        for idx in 0..self.monsters.len() {
            if self.monsters[idx].dead {
                continue;
            }
            let speed = self.monsters[idx].speed;
            self.monsters[idx].moves += speed;
            self.monsters[idx].made_footstep = false;
            {
                let (mon, rng) = (&mut self.monsters[idx], &mut self.rng);
                mon.tick_effects(&catalog, rng);
            }
            if self.monsters[idx].dead {
                continue;
            }
            ai::plan(self, idx);
            let mut guard = 0;
            while self.monsters[idx].moves > 0 && !self.monsters[idx].dead {
                ai::act(self, idx);
                guard += 1;
                if guard > 100 {
                    tracing::warn!(
                        monster = self.monsters[idx].def(&catalog).name,
                        "monster failed to spend its budget, forcing it"
                    );
                    self.monsters[idx].moves = 0;
                }
            }
            // Fields gnaw on whoever ends their turn standing in them.
            let pos = self.monsters[idx].pos;
            let has_field = self.map.field_at(pos).kind != crate::catalog::FieldKind::None;
            if has_field && !self.monsters[idx].dead {
                let mut mon = std::mem::replace(
                    &mut self.monsters[idx],
                    crate::actor::Monster::placeholder(),
                );
                self.mon_in_field(&mut mon, pos);
                self.monsters[idx] = mon;
            }
        }
    }
}

