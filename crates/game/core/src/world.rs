//! The world: all mutable simulation state plus the read-only catalog.
//!
//! Actors never hold references into the world; monsters and NPCs are
//! addressed by index and looked up per call. The AI checks a monster out of
//! the roster while it acts (leaving an inert placeholder) and checks it back
//! in afterwards, so world-level operations stay available mid-action.

use std::sync::Arc;

use sha2::{Digest, Sha256};

use crate::actor::{Character, DiseaseKind, Monster, MonsterEffectKind, Npc, NpcAttitude};
use crate::catalog::{Catalog, DeathEffect, FieldKind, Material, MonsterFlags, MonsterId};
use crate::config::GameConfig;
use crate::error::StoreError;
use crate::geom::{Point, SubmapCoord, chebyshev_dist, line_to};
use crate::item::Item;
use crate::map::{Map, SUBMAP_SIZE, SpawnPoint, SubmapGenerator, SubmapStore};
use crate::rng::GameRng;

/// Messages bound for the Presenter, drained each frame.
#[derive(Clone, Debug, Default)]
pub struct MessageLog {
    entries: Vec<String>,
}

impl MessageLog {
    pub fn add(&mut self, msg: impl Into<String>) {
        self.entries.push(msg.into());
    }

    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.entries)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// The simulation root. One logical thread owns it; nothing here blocks.
pub struct World {
    pub config: GameConfig,
    pub turn: u32,
    pub rng: GameRng,
    pub catalog: Arc<Catalog>,
    pub map: Map,
    pub player: Character,
    pub npcs: Vec<Npc>,
    pub monsters: Vec<Monster>,
    pub messages: MessageLog,
    pub(crate) store: Box<dyn SubmapStore>,
    pub(crate) generator: Box<dyn SubmapGenerator>,
}

impl World {
    /// Open a world: seed the RNG, place the player at the bubble center and
    /// pull in the initial 3x3 window.
    pub fn new(
        catalog: Arc<Catalog>,
        config: GameConfig,
        origin: SubmapCoord,
        turn: u32,
        store: Box<dyn SubmapStore>,
        generator: Box<dyn SubmapGenerator>,
    ) -> Result<Self, StoreError> {
        let mut rng = GameRng::new(config.seed);
        let mut map = Map::new(Arc::clone(&catalog), origin);
        let mut store = store;
        let mut generator = generator;
        map.load_all(store.as_mut(), generator.as_mut(), &mut rng, turn)?;
        let center = (GameConfig::BUBBLE_SIZE / 2) as i32;
        let mut world = Self {
            config,
            turn,
            rng,
            catalog,
            map,
            player: Character::new("survivor", Point::new(center, center)),
            npcs: Vec::new(),
            monsters: Vec::new(),
            messages: MessageLog::default(),
            store,
            generator,
        };
        world.materialize_spawns();
        Ok(world)
    }

    pub fn add_msg(&mut self, msg: impl Into<String>) {
        self.messages.add(msg);
    }

    // ===== actor lookup =====

    /// Index of the live monster on a tile, if any.
    pub fn mon_at(&self, p: Point) -> Option<usize> {
        self.monsters
            .iter()
            .position(|m| !m.dead && m.pos == p)
    }

    pub fn npc_at(&self, p: Point) -> Option<usize> {
        self.npcs
            .iter()
            .position(|n| !n.dead && n.body.pos == p)
    }

    /// Walkable and free of any actor.
    pub fn is_empty(&self, p: Point) -> bool {
        self.map.move_cost(p) > 0
            && self.player.pos != p
            && self.mon_at(p).is_none()
            && self.npc_at(p).is_none()
    }

    /// The player can see this tile.
    pub fn u_see(&self, p: Point) -> bool {
        self.map.sees(self.player.pos, p, 30).is_some()
    }

    /// A monster at `from` can see the player.
    pub fn sees_player(&self, from: Point, range: i32) -> Option<i32> {
        self.map.sees(from, self.player.pos, range)
    }

    // ===== sound =====

    /// Propagate a noise. Monsters that hear it drift toward it; the player
    /// gets a message when in earshot.
    pub fn sound(&mut self, p: Point, volume: i32, description: &str) {
        for mon in self.monsters.iter_mut() {
            if mon.dead || !mon.def(&self.catalog).flags.contains(MonsterFlags::HEARS) {
                continue;
            }
            if mon.has_effect(MonsterEffectKind::Deaf) {
                continue;
            }
            let dist = chebyshev_dist(mon.pos, p);
            if volume - dist > 0 {
                mon.wander_to(p, volume - dist);
            }
        }
        if !description.is_empty() && chebyshev_dist(self.player.pos, p) <= volume {
            if p == self.player.pos {
                self.messages.add(format!("You hear {description}"));
            } else {
                self.messages
                    .add(format!("From nearby you hear {description}"));
            }
        }
    }

    // ===== explosions =====

    /// Detonation at `p`. Damage falls off linearly to the blast radius;
    /// terrain is bashed, items are shredded, actors caught inside are hurt.
    /// Optional shrapnel rays and ignition.
    pub fn explosion(&mut self, p: Point, power: i32, shrapnel: i32, fire: bool) {
        let radius = ((power as f64 / 4.0).sqrt() as i32).max(1);
        self.sound(p, power * 3, "a huge explosion!");

        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let q = Point::new(p.x + dx, p.y + dy);
                let dist = chebyshev_dist(p, q);
                if dist > radius || !self.map.inbounds(q) {
                    continue;
                }
                let dam = power * (radius - dist + 1) / (radius + 1);
                if dam <= 0 {
                    continue;
                }
                let bash = self.map.bash(q, dam, &mut self.rng);
                if bash.connected && self.map.is_bashable(q) {
                    // A second blow for reinforced things.
                    self.map.bash(q, dam, &mut self.rng);
                }
                let mut item_dam = dam;
                self.map.shoot(
                    q,
                    &mut item_dam,
                    true,
                    crate::catalog::AmmoEffects::empty(),
                    &mut self.rng,
                );
                if fire && self.map.move_cost(q) > 0 {
                    self.map
                        .add_field(q, FieldKind::Fire, (3 - dist).clamp(1, 3) as u8);
                }
                if let Some(idx) = self.mon_at(q) {
                    let hurt = self.rng.rng(dam / 2, dam * 3 / 2);
                    if self.monsters[idx].hurt(hurt) {
                        self.messages.add(format!(
                            "The {} is blown apart!",
                            self.monsters[idx].def(&self.catalog).name
                        ));
                    }
                }
                if let Some(idx) = self.npc_at(q) {
                    let hurt = self.rng.rng(dam / 2, dam * 3 / 2);
                    self.npcs[idx].body.hurt_all(hurt / 2);
                }
                if self.player.pos == q {
                    let hurt = self.rng.rng(dam / 2, dam * 3 / 2);
                    self.messages.add("You're caught in the explosion!");
                    self.player.hurt_all(hurt / 2);
                }
            }
        }

        // Shrapnel flies further than the blast.
        for _ in 0..shrapnel {
            let target = Point::new(
                p.x + self.rng.rng(-2 * radius, 2 * radius),
                p.y + self.rng.rng(-2 * radius, 2 * radius),
            );
            let dam = self.rng.dice(3, 10);
            for q in line_to(p, target, 0) {
                if let Some(idx) = self.mon_at(q) {
                    self.monsters[idx].hurt(dam);
                    break;
                }
                if self.player.pos == q {
                    let part = random_body_part(&mut self.rng);
                    let side = self.rng.rng(0, 1);
                    self.player.hit(part, side, 0, dam);
                    self.messages.add("You're hit by shrapnel!");
                    break;
                }
                if self.map.move_cost(q) == 0 {
                    let mut tdam = dam;
                    self.map.shoot(
                        q,
                        &mut tdam,
                        false,
                        crate::catalog::AmmoEffects::empty(),
                        &mut self.rng,
                    );
                    break;
                }
            }
        }
    }

    /// Blinding flash and bang: stuns the player, deafens nearby monsters.
    pub fn flashbang(&mut self, p: Point) {
        self.sound(p, 12, "a huge boom!");
        let pdist = chebyshev_dist(self.player.pos, p);
        if pdist <= 8 {
            self.player
                .add_disease(DiseaseKind::Stunned, (10 - pdist).max(2));
            self.messages.add("BOOM! You're dazed!");
        }
        for mon in self.monsters.iter_mut() {
            if mon.dead {
                continue;
            }
            let dist = chebyshev_dist(mon.pos, p);
            if dist <= 8 {
                mon.add_effect(MonsterEffectKind::Deaf, 10 - dist);
                mon.add_effect(MonsterEffectKind::Stunned, (8 - dist).max(1));
            }
        }
    }

    // ===== monster lifecycle =====

    pub fn spawn_monster(&mut self, kind: MonsterId, pos: Point) -> usize {
        let mon = Monster::spawn(&self.catalog, kind, pos, &mut self.rng);
        self.monsters.push(mon);
        self.monsters.len() - 1
    }

    /// Bring a human into the world with standing orders.
    pub fn spawn_npc(
        &mut self,
        name: impl Into<String>,
        pos: Point,
        attitude: NpcAttitude,
    ) -> usize {
        let mut npc = Npc::new(Character::new(name, pos));
        npc.attitude = attitude;
        self.npcs.push(npc);
        self.npcs.len() - 1
    }

    /// Violent removal: gibs, no drops, no death routine.
    pub fn explode_monster(&mut self, idx: usize) {
        let pos = self.monsters[idx].pos;
        let fleshy = self.monsters[idx].made_of(&self.catalog, Material::Flesh);
        self.monsters[idx].dead = true;
        self.monsters[idx].hp = 0;
        if fleshy {
            for q in pos.neighborhood() {
                if self.map.move_cost(q) > 0 && self.rng.one_in(2) {
                    self.add_blood(q, FieldKind::Blood);
                }
            }
        }
    }

    /// Thicken or start a splatter field.
    pub fn add_blood(&mut self, p: Point, kind: FieldKind) {
        if let Some(cell) = self.map.field_mut(p)
            && cell.kind == kind
            && cell.intensity < 3
        {
            cell.intensity += 1;
            return;
        }
        self.map.add_field(p, kind, 1);
    }

    /// Run death routines, drop loot, and compact the dead out of the
    /// roster. Deferred to the end of the turn so mid-scan removal never
    /// invalidates indices.
    pub fn process_dead(&mut self) {
        let mut deferred_explosions = Vec::new();
        for idx in 0..self.monsters.len() {
            if !self.monsters[idx].dead || self.monsters[idx].kind == MonsterId::NULL {
                continue;
            }
            let pos = self.monsters[idx].pos;
            let def = self.monsters[idx].def(&self.catalog);
            let name = def.name;
            let death = def.death;
            let drops = def.drops;
            if self.monsters[idx].hallucination {
                continue;
            }
            let carried = std::mem::take(&mut self.monsters[idx].inventory);
            for item in carried {
                self.map.add_item(pos, item, &mut self.rng);
            }
            for (item, chance) in drops {
                if self.rng.rng(0, 99) < *chance {
                    let it = Item::new(*item, self.turn);
                    self.map.add_item(pos, it, &mut self.rng);
                }
            }
            match death {
                DeathEffect::Normal => {}
                DeathEffect::Explode => {
                    deferred_explosions.push((pos, 10, 0, false));
                    if self.u_see(pos) {
                        self.messages.add(format!("The {name} explodes!"));
                    }
                }
                DeathEffect::AcidSplatter => {
                    for q in pos.neighborhood() {
                        if self.map.move_cost(q) > 0 && !self.rng.one_in(3) {
                            self.add_blood(q, FieldKind::Acid);
                        }
                    }
                }
                DeathEffect::BoomerBile => {
                    for q in pos.neighborhood() {
                        if self.map.move_cost(q) > 0 {
                            self.add_blood(q, FieldKind::Bile);
                        }
                    }
                    self.sound(pos, 17, "a gut-wrenching splat!");
                }
            }
        }
        for (pos, power, shrapnel, fire) in deferred_explosions {
            self.explosion(pos, power, shrapnel, fire);
        }
        self.monsters.retain(|m| !m.dead);
        self.npcs.retain(|n| !n.dead);
    }

    // ===== spawning and paging =====

    /// Materialize every pending spawn point in the loaded submaps.
    pub fn materialize_spawns(&mut self) {
        for (kind, count, pos) in self.map.drain_spawns() {
            for _ in 0..count {
                let mut placed = None;
                for _ in 0..10 {
                    let q = Point::new(
                        pos.x + self.rng.rng(-3, 3),
                        pos.y + self.rng.rng(-3, 3),
                    );
                    if self.is_empty(q) {
                        placed = Some(q);
                        break;
                    }
                }
                if let Some(q) = placed {
                    self.spawn_monster(kind, q);
                }
            }
        }
    }

    /// Keep the player in the center submap, shifting the bubble as needed.
    /// Actors that fall off the loaded window are parked in the submap they
    /// were standing on as pending spawns.
    pub fn update_map(&mut self) -> Result<(), StoreError> {
        let step = SUBMAP_SIZE as i32;
        loop {
            let (mut dx, mut dy) = (0, 0);
            if self.player.pos.x < step {
                dx = -1;
            } else if self.player.pos.x >= step * 2 {
                dx = 1;
            }
            if self.player.pos.y < step {
                dy = -1;
            } else if self.player.pos.y >= step * 2 {
                dy = 1;
            }
            if dx == 0 && dy == 0 {
                return Ok(());
            }
            self.despawn_leaving(dx, dy);
            let turn = self.turn;
            self.map.shift(
                dx,
                dy,
                self.store.as_mut(),
                self.generator.as_mut(),
                &mut self.rng,
                turn,
            )?;
            self.player.pos.x -= dx * step;
            self.player.pos.y -= dy * step;
            for npc in self.npcs.iter_mut() {
                npc.body.pos.x -= dx * step;
                npc.body.pos.y -= dy * step;
            }
            for mon in self.monsters.iter_mut() {
                mon.shift(dx, dy);
            }
            self.monsters.retain(|m| !m.dead);
            self.materialize_spawns();
        }
    }

    /// Park monsters standing on submaps about to unload.
    fn despawn_leaving(&mut self, dx: i32, dy: i32) {
        let step = SUBMAP_SIZE as i32;
        let bubble = GameConfig::BUBBLE_SIZE as i32;
        for i in 0..self.monsters.len() {
            let pos = self.monsters[i].pos;
            let leaving = (dx == 1 && pos.x < step)
                || (dx == -1 && pos.x >= bubble - step)
                || (dy == 1 && pos.y < step)
                || (dy == -1 && pos.y >= bubble - step);
            if !leaving || self.monsters[i].dead {
                continue;
            }
            if self.monsters[i].hallucination {
                self.monsters[i].dead = true;
                continue;
            }
            let gx = (pos.x / step).clamp(0, 2) as usize;
            let gy = (pos.y / step).clamp(0, 2) as usize;
            let kind = self.monsters[i].kind;
            let local = Point::new(pos.x - gx as i32 * step, pos.y - gy as i32 * step);
            self.map.submap_mut(gx, gy).spawns.push(SpawnPoint {
                monster: kind,
                count: 1,
                pos: local,
            });
            self.monsters[i].dead = true;
        }
    }

    /// Flush every loaded submap to the store without disturbing memory.
    pub fn save(&mut self) -> Result<(), StoreError> {
        self.despawn_none();
        let turn = self.turn;
        self.map.save_all(self.store.as_mut(), turn)
    }

    /// Record live monsters into their submaps before a full save, so a
    /// close/reopen brings them back.
    fn despawn_none(&mut self) {
        let step = SUBMAP_SIZE as i32;
        for mon in self.monsters.iter() {
            if mon.dead || mon.hallucination {
                continue;
            }
            let gx = (mon.pos.x / step).clamp(0, 2) as usize;
            let gy = (mon.pos.y / step).clamp(0, 2) as usize;
            let local = Point::new(mon.pos.x - gx as i32 * step, mon.pos.y - gy as i32 * step);
            let kind = mon.kind;
            self.map.submap_mut(gx, gy).spawns.push(SpawnPoint {
                monster: kind,
                count: 1,
                pos: local,
            });
        }
        self.monsters.clear();
    }

    // ===== determinism =====

    /// SHA-256 over the canonical encoding of all simulation state. Two runs
    /// of the same seed and command script hash identically.
    pub fn state_digest(&self) -> [u8; 32] {
        let mut h = Sha256::new();
        h.update(self.turn.to_le_bytes());
        h.update(self.rng.draws().to_le_bytes());

        let ch = &self.player;
        h.update(ch.pos.x.to_le_bytes());
        h.update(ch.pos.y.to_le_bytes());
        h.update(ch.moves.to_le_bytes());
        h.update(ch.recoil.to_le_bytes());
        for hp in ch.hp {
            h.update(hp.to_le_bytes());
        }

        for mon in self.monsters.iter().filter(|m| !m.dead) {
            h.update(mon.kind.0.to_le_bytes());
            h.update(mon.pos.x.to_le_bytes());
            h.update(mon.pos.y.to_le_bytes());
            h.update(mon.hp.to_le_bytes());
            h.update(mon.moves.to_le_bytes());
        }

        for npc in self.npcs.iter().filter(|n| !n.dead) {
            h.update(npc.body.pos.x.to_le_bytes());
            h.update(npc.body.pos.y.to_le_bytes());
            h.update(npc.body.moves.to_le_bytes());
            for hp in npc.body.hp {
                h.update(hp.to_le_bytes());
            }
        }

        for gy in 0..GameConfig::SUBMAP_GRID {
            for gx in 0..GameConfig::SUBMAP_GRID {
                let sm = self.map.submap(gx, gy);
                for x in 0..SUBMAP_SIZE {
                    for y in 0..SUBMAP_SIZE {
                        h.update([sm.terrain[x][y].0, sm.traps[x][y].0]);
                        h.update(sm.radiation[x][y].to_le_bytes());
                        let f = sm.fields[x][y];
                        h.update([f.kind as u8, f.intensity]);
                        h.update(f.age.to_le_bytes());
                        for it in &sm.items[x][y] {
                            h.update(it.id.0.to_le_bytes());
                            h.update(it.charges.to_le_bytes());
                            h.update(it.damage.to_le_bytes());
                        }
                    }
                }
            }
        }
        h.finalize().into()
    }
}

/// Uniform-ish random body region for shrapnel and scatter effects.
pub(crate) fn random_body_part(rng: &mut GameRng) -> crate::actor::BodyPart {
    use crate::actor::BodyPart;
    match rng.rng(1, 10) {
        1 => BodyPart::Feet,
        2..=4 => BodyPart::Legs,
        5..=9 => BodyPart::Torso,
        _ => BodyPart::Head,
    }
}
