//! The tiled map: a 3x3 window of loaded submaps (the "reality bubble")
//! backed by a persistent chunk store.
//!
//! All map operations are total. Reads outside the bubble return sentinel
//! values (null terrain, empty pile, no trap, no field, zero radiation and
//! scent); writes outside the bubble are silently dropped.

mod los;
mod pathfind;
mod submap;
mod store;

pub use store::{SubmapGenerator, SubmapStore, fast_forward};
pub use submap::{FieldCell, SpawnPoint, Submap, SUBMAP_SIZE};

use std::sync::Arc;

use crate::catalog::{
    AmmoEffects, Catalog, FieldKind, TerrainDef, TerrainFlags, TerrainId, TrapId,
};
use crate::config::GameConfig;
use crate::error::StoreError;
use crate::geom::{Point, SubmapCoord};
use crate::item::{Item, ItemPile};
use crate::rng::GameRng;

const GRID: usize = GameConfig::SUBMAP_GRID;
const BUBBLE: usize = GameConfig::BUBBLE_SIZE;

static NO_ITEMS: &[Item] = &[];

/// Result of a bash attempt: whether anything was struck at all, and the
/// noise it made.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BashResult {
    /// False means the blow met empty air and the action is cancelled.
    pub connected: bool,
    pub sound: String,
}

/// The reality bubble plus its absolute position in the world.
pub struct Map {
    grid: Box<[Submap; GRID * GRID]>,
    /// Absolute coordinate of the north-west loaded submap.
    origin: SubmapCoord,
    scent: Box<[[u32; BUBBLE]; BUBBLE]>,
    catalog: Arc<Catalog>,
}

impl Map {
    pub fn new(catalog: Arc<Catalog>, origin: SubmapCoord) -> Self {
        Self {
            grid: Box::new(std::array::from_fn(|_| Submap::default())),
            origin,
            scent: Box::new([[0; BUBBLE]; BUBBLE]),
            catalog,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn origin(&self) -> SubmapCoord {
        self.origin
    }

    /// Absolute coordinate of the loaded submap at grid slot (gx, gy).
    pub fn abs_coord(&self, gx: usize, gy: usize) -> SubmapCoord {
        SubmapCoord::new(
            self.origin.x + gx as i32,
            self.origin.y + gy as i32,
            self.origin.z,
        )
    }

    pub fn submap(&self, gx: usize, gy: usize) -> &Submap {
        &self.grid[gx + gy * GRID]
    }

    pub fn submap_mut(&mut self, gx: usize, gy: usize) -> &mut Submap {
        &mut self.grid[gx + gy * GRID]
    }

    pub fn inbounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < BUBBLE && (p.y as usize) < BUBBLE
    }

    fn slot(&self, p: Point) -> (usize, usize, usize) {
        let nonant = (p.x as usize / SUBMAP_SIZE) + (p.y as usize / SUBMAP_SIZE) * GRID;
        (nonant, p.x as usize % SUBMAP_SIZE, p.y as usize % SUBMAP_SIZE)
    }

    // ===== terrain =====

    pub fn ter(&self, p: Point) -> TerrainId {
        if !self.inbounds(p) {
            return TerrainId::NULL;
        }
        let (n, x, y) = self.slot(p);
        self.grid[n].terrain[x][y]
    }

    pub fn set_ter(&mut self, p: Point, id: TerrainId) {
        if !self.inbounds(p) {
            return;
        }
        let (n, x, y) = self.slot(p);
        self.grid[n].terrain[x][y] = id;
    }

    pub fn terrain(&self, p: Point) -> &TerrainDef {
        self.catalog.terrain(self.ter(p))
    }

    pub fn tername(&self, p: Point) -> &'static str {
        self.terrain(p).name
    }

    /// Movement cost in half-turns; 0 is impassable. Out-of-bubble terrain
    /// reads as open floor so rays and routes degrade instead of walling off.
    pub fn move_cost(&self, p: Point) -> i32 {
        if !self.inbounds(p) {
            return 2;
        }
        self.terrain(p).move_cost as i32
    }

    /// Cost of one step between adjacent tiles, in move points.
    pub fn combined_movecost(&self, from: Point, to: Point) -> i32 {
        25 * (self.move_cost(from) + self.move_cost(to))
    }

    pub fn has_flag(&self, flag: TerrainFlags, p: Point) -> bool {
        if !self.inbounds(p) {
            // Unloaded ground is diggable for the sake of burrowers.
            return flag == TerrainFlags::DIGGABLE;
        }
        self.terrain(p).flags.contains(flag)
    }

    pub fn is_bashable(&self, p: Point) -> bool {
        self.inbounds(p) && self.terrain(p).is_bashable()
    }

    pub fn is_destructable(&self, p: Point) -> bool {
        self.inbounds(p) && self.terrain(p).is_destructable()
    }

    pub fn is_divable(&self, p: Point) -> bool {
        self.has_flag(TerrainFlags::SWIMMABLE, p)
    }

    /// A tile is outside when nothing in its 3x3 neighborhood is indoor
    /// flooring.
    pub fn is_outside(&self, p: Point) -> bool {
        !p.neighborhood()
            .any(|q| self.inbounds(q) && self.terrain(q).flags.contains(TerrainFlags::INDOORS))
    }

    /// Sight passes through: transparent terrain and no opaque field.
    /// Out-of-bubble reads true; ray loops must bound themselves.
    pub fn trans(&self, p: Point) -> bool {
        if !self.inbounds(p) {
            return true;
        }
        if !self.terrain(p).flags.contains(TerrainFlags::TRANSPARENT) {
            return false;
        }
        let field = self.field_at(p);
        field.kind == FieldKind::None
            || self.catalog.field(field.kind).transparent_at(field.intensity)
    }

    // ===== doors =====

    /// Open a door. Locked doors open only from the inside. Returns whether
    /// the operation changed state.
    pub fn open_door(&mut self, p: Point, inside: bool) -> bool {
        let def = self.terrain(p);
        if def.flags.contains(TerrainFlags::LOCKED) && !inside {
            return false;
        }
        match def.open_to {
            Some(open) => {
                self.set_ter(p, open);
                true
            }
            None => false,
        }
    }

    /// Close an open door. Returns whether the operation changed state.
    pub fn close_door(&mut self, p: Point) -> bool {
        match self.terrain(p).close_to {
            Some(closed) => {
                self.set_ter(p, closed);
                true
            }
            None => false,
        }
    }

    // ===== bash / destroy / shoot =====

    /// Smash a tile with `strength`. Glass items on the tile may shatter
    /// first; the terrain breaks if the strength beats its threshold roll.
    pub fn bash(&mut self, p: Point, strength: i32, rng: &mut GameRng) -> BashResult {
        let mut sound = String::new();

        // Destroy glass items (maybe), spilling their contents.
        let catalog = Arc::clone(&self.catalog);
        if let Some(pile) = self.pile_mut(p) {
            let mut i = 0;
            let mut shattered = 0;
            let mut spilled = Vec::new();
            while i < pile.len() {
                if catalog.item(pile[i].id).made_of(crate::catalog::Material::Glass)
                    && rng.one_in(2)
                {
                    spilled.append(&mut pile[i].contents);
                    pile.remove(i);
                    shattered += 1;
                } else {
                    i += 1;
                }
            }
            pile.append(&mut spilled);
            if shattered == 1 {
                sound.push_str("glass shattering! ");
            } else if shattered > 1 {
                sound.push_str("some items shatter! ");
            }
        }

        let def = self.terrain(p).clone();
        if let Some(spec) = &def.bash {
            let broke = strength >= spec.threshold.roll(rng)
                && !spec.whiff_one_in.is_some_and(|n| rng.one_in(n));
            if broke {
                sound.push_str(spec.success_sound);
                self.set_ter(p, spec.becomes);
                for debris in spec.debris {
                    for _ in 0..debris.count.roll(rng) {
                        self.add_item(p, Item::new(debris.item, 0), rng);
                    }
                }
            } else {
                sound.push_str(spec.fail_sound);
            }
            return BashResult {
                connected: true,
                sound,
            };
        }
        if def.move_cost == 0 {
            sound.push_str("thump!");
            return BashResult {
                connected: true,
                sound,
            };
        }
        // Kicking empty space cancels the action.
        BashResult {
            connected: false,
            sound,
        }
    }

    /// Level a tile outright (DESTROYS monsters, explosions). Returns true
    /// if the terrain detonates and the caller owes an explosion.
    pub fn destroy(&mut self, p: Point, rubble: TerrainId, rng: &mut GameRng) -> bool {
        let def = self.terrain(p).clone();
        let explodes = def.flags.contains(TerrainFlags::EXPLODES);
        if let Some(spec) = &def.bash {
            for debris in spec.debris {
                for _ in 0..debris.count.roll(rng) {
                    let spot = Point::new(p.x + rng.rng(-2, 2), p.y + rng.rng(-2, 2));
                    if self.move_cost(spot) > 0 && rng.one_in(3) {
                        self.add_item(spot, Item::new(debris.item, 0), rng);
                    }
                }
            }
        }
        self.set_ter(p, rubble);
        explodes
    }

    /// A bullet passes through. Terrain absorbs damage by kind; remaining
    /// damage may destroy items on the tile.
    pub fn shoot(
        &mut self,
        p: Point,
        dam: &mut i32,
        hit_items: bool,
        effects: AmmoEffects,
        rng: &mut GameRng,
    ) {
        let def = self.terrain(p).clone();
        match &def.shoot {
            Some(spec) => {
                let connects = spec.hit_one_in.is_none_or(|n| hit_items || rng.one_in(n));
                if connects {
                    *dam -= rng.rng(spec.reduce.0, spec.reduce.1);
                    if *dam > 0
                        && let Some(next) = spec.becomes
                    {
                        self.set_ter(p, next);
                    }
                    if spec.incendiary_ignites && effects.contains(AmmoEffects::INCENDIARY) {
                        self.add_field(p, FieldKind::Fire, 2);
                    }
                } else {
                    *dam -= rng.rng(spec.miss_reduce.0, spec.miss_reduce.1);
                }
            }
            None => {
                if def.move_cost == 0 && !def.flags.contains(TerrainFlags::TRANSPARENT) {
                    // Solid wall: the bullet stops here.
                    *dam = 0;
                } else {
                    *dam -= rng.rng(0, 1) * rng.rng(0, 1) * rng.rng(0, 1);
                }
            }
        }

        // Items on plain floor are spared unless the shot was aimed there.
        if (self.move_cost(p) == 2 && !hit_items) || !self.inbounds(p) {
            return;
        }
        use crate::catalog::Material::*;
        let catalog = Arc::clone(&self.catalog);
        if let Some(pile) = self.pile_mut(p) {
            let mut spilled = Vec::new();
            let mut i = 0;
            while i < pile.len() {
                let it = &mut pile[i];
                let def = catalog.item(it.id);
                let destroyed = match def.material {
                    Glass | Paper => *dam > rng.rng(2, 8) && rng.one_in(def.volume),
                    Plastic => *dam > rng.rng(2, 10) && rng.one_in(def.volume * 3),
                    Veggy | Flesh => *dam > rng.rng(10, 40),
                    Cotton | Wool => {
                        it.damage += 1;
                        it.damage >= 5
                    }
                    _ => false,
                };
                if destroyed {
                    spilled.append(&mut it.contents);
                    pile.remove(i);
                } else {
                    i += 1;
                }
            }
            pile.append(&mut spilled);
        }
    }

    // ===== radiation =====

    pub fn radiation(&self, p: Point) -> u32 {
        if !self.inbounds(p) {
            return 0;
        }
        let (n, x, y) = self.slot(p);
        self.grid[n].radiation[x][y]
    }

    pub fn add_radiation(&mut self, p: Point, amount: u32) {
        if !self.inbounds(p) {
            return;
        }
        let (n, x, y) = self.slot(p);
        self.grid[n].radiation[x][y] += amount;
    }

    // ===== items =====

    pub fn items(&self, p: Point) -> &[Item] {
        if !self.inbounds(p) {
            return NO_ITEMS;
        }
        let (n, x, y) = self.slot(p);
        &self.grid[n].items[x][y]
    }

    pub(crate) fn pile_mut(&mut self, p: Point) -> Option<&mut ItemPile> {
        if !self.inbounds(p) {
            return None;
        }
        let (n, x, y) = self.slot(p);
        Some(&mut self.grid[n].items[x][y])
    }

    pub fn clear_items(&mut self, p: Point) {
        if let Some(pile) = self.pile_mut(p) {
            pile.clear();
        }
    }

    pub fn remove_item(&mut self, p: Point, index: usize) -> Option<Item> {
        let pile = self.pile_mut(p)?;
        (index < pile.len()).then(|| pile.remove(index))
    }

    /// Place an item, overflowing onto a nearby walkable tile when this one
    /// can't take it. Gives up silently when nowhere within radius 2 can.
    pub fn add_item(&mut self, p: Point, item: Item, rng: &mut GameRng) {
        if !self.inbounds(p) {
            return;
        }
        if self.has_flag(TerrainFlags::NOITEM, p)
            || self.items(p).len() >= GameConfig::MAX_TILE_ITEMS
        {
            for radius in 1..=2 {
                let mut okay = Vec::new();
                for dy in -radius..=radius {
                    for dx in -radius..=radius {
                        let q = Point::new(p.x + dx, p.y + dy);
                        if self.inbounds(q)
                            && self.move_cost(q) > 0
                            && !self.has_flag(TerrainFlags::NOITEM, q)
                            && self.items(q).len() < GameConfig::MAX_TILE_ITEMS
                        {
                            okay.push(q);
                        }
                    }
                }
                if !okay.is_empty() {
                    let choice = okay[rng.rng(0, okay.len() as i32 - 1) as usize];
                    if let Some(pile) = self.pile_mut(choice) {
                        pile.push(item);
                    }
                    return;
                }
            }
            return;
        }
        if let Some(pile) = self.pile_mut(p) {
            pile.push(item);
        }
    }

    // ===== traps =====

    pub fn trap_at(&self, p: Point) -> TrapId {
        if !self.inbounds(p) {
            return TrapId::NONE;
        }
        let (n, x, y) = self.slot(p);
        self.grid[n].traps[x][y]
    }

    pub fn set_trap(&mut self, p: Point, trap: TrapId) {
        if !self.inbounds(p) {
            return;
        }
        let (n, x, y) = self.slot(p);
        self.grid[n].traps[x][y] = trap;
    }

    pub fn remove_trap(&mut self, p: Point) {
        self.set_trap(p, TrapId::NONE);
    }

    // ===== fields =====

    pub fn field_at(&self, p: Point) -> FieldCell {
        if !self.inbounds(p) {
            return FieldCell::default();
        }
        let (n, x, y) = self.slot(p);
        self.grid[n].fields[x][y]
    }

    pub fn field_mut(&mut self, p: Point) -> Option<&mut FieldCell> {
        if !self.inbounds(p) {
            return None;
        }
        let (n, x, y) = self.slot(p);
        Some(&mut self.grid[n].fields[x][y])
    }

    /// Start a field on a tile. Fails when a (non-splatter) field is already
    /// there or the intensity is zero.
    pub fn add_field(&mut self, p: Point, kind: FieldKind, intensity: u8) -> bool {
        if !self.inbounds(p) || intensity == 0 {
            return false;
        }
        let intensity = intensity.min(3);
        let cell = self.field_at(p);
        if !cell.is_null() {
            return false;
        }
        if let Some(slot) = self.field_mut(p) {
            *slot = FieldCell::new(kind, intensity, 0);
        }
        true
    }

    pub fn clear_field(&mut self, p: Point) {
        if let Some(cell) = self.field_mut(p) {
            cell.clear();
        }
    }

    // ===== scent =====

    pub fn scent(&self, p: Point) -> u32 {
        if !self.inbounds(p) {
            return 0;
        }
        self.scent[p.x as usize][p.y as usize]
    }

    pub fn set_scent(&mut self, p: Point, value: u32) {
        if self.inbounds(p) {
            self.scent[p.x as usize][p.y as usize] = value;
        }
    }

    // ===== paging =====

    /// Load all nine submaps around `origin`, generating the missing ones.
    pub fn load_all(
        &mut self,
        store: &mut dyn SubmapStore,
        generator: &mut dyn SubmapGenerator,
        rng: &mut GameRng,
        now: u32,
    ) -> Result<(), StoreError> {
        for gy in 0..GRID {
            for gx in 0..GRID {
                let coord = self.abs_coord(gx, gy);
                let mut submap = match store.load(coord)? {
                    Some(sm) => sm,
                    None => generator.generate(coord, rng),
                };
                fast_forward(&mut submap, &self.catalog, rng, now);
                self.grid[gx + gy * GRID] = submap;
            }
        }
        Ok(())
    }

    /// Save every loaded submap, stamping the turn of last visit.
    pub fn save_all(&mut self, store: &mut dyn SubmapStore, now: u32) -> Result<(), StoreError> {
        for gy in 0..GRID {
            for gx in 0..GRID {
                let coord = self.abs_coord(gx, gy);
                self.grid[gx + gy * GRID].turn_last_touched = now;
                store.save(coord, &self.grid[gx + gy * GRID])?;
            }
        }
        Ok(())
    }

    /// Shift the bubble by one submap. The row or column leaving is saved;
    /// the one entering is loaded or generated, and its fields are
    /// fast-forwarded over the time it sat unloaded.
    pub fn shift(
        &mut self,
        dx: i32,
        dy: i32,
        store: &mut dyn SubmapStore,
        generator: &mut dyn SubmapGenerator,
        rng: &mut GameRng,
        now: u32,
    ) -> Result<(), StoreError> {
        debug_assert!(dx.abs() <= 1 && dy.abs() <= 1);
        self.save_all(store, now)?;
        self.origin = SubmapCoord::new(self.origin.x + dx, self.origin.y + dy, self.origin.z);
        tracing::debug!(origin = %self.origin, "bubble shifted");

        let old: [Submap; GRID * GRID] = *std::mem::replace(
            &mut self.grid,
            Box::new(std::array::from_fn(|_| Submap::default())),
        );
        let mut old: Vec<Option<Submap>> = old.into_iter().map(Some).collect();
        for gy in 0..GRID as i32 {
            for gx in 0..GRID as i32 {
                let (ox, oy) = (gx + dx, gy + dy);
                let slot = (gx + gy * GRID as i32) as usize;
                if (0..GRID as i32).contains(&ox) && (0..GRID as i32).contains(&oy) {
                    self.grid[slot] = old[(ox + oy * GRID as i32) as usize]
                        .take()
                        .unwrap_or_default();
                } else {
                    let coord = self.abs_coord(gx as usize, gy as usize);
                    let mut submap = match store.load(coord)? {
                        Some(sm) => sm,
                        None => generator.generate(coord, rng),
                    };
                    fast_forward(&mut submap, &self.catalog, rng, now);
                    self.grid[slot] = submap;
                }
            }
        }

        // Scent rides along with the terrain.
        let step = SUBMAP_SIZE as i32;
        let mut scent = Box::new([[0u32; BUBBLE]; BUBBLE]);
        for x in 0..BUBBLE as i32 {
            for y in 0..BUBBLE as i32 {
                let (sx, sy) = (x + dx * step, y + dy * step);
                if (0..BUBBLE as i32).contains(&sx) && (0..BUBBLE as i32).contains(&sy) {
                    scent[x as usize][y as usize] = self.scent[sx as usize][sy as usize];
                }
            }
        }
        self.scent = scent;
        Ok(())
    }

    /// Drain the pending spawn points of every loaded submap, translating
    /// them into bubble coordinates.
    pub fn drain_spawns(&mut self) -> Vec<(crate::catalog::MonsterId, i32, Point)> {
        let mut out = Vec::new();
        for gy in 0..GRID {
            for gx in 0..GRID {
                for spawn in self.grid[gx + gy * GRID].spawns.drain(..) {
                    let pos = Point::new(
                        spawn.pos.x + (gx * SUBMAP_SIZE) as i32,
                        spawn.pos.y + (gy * SUBMAP_SIZE) as i32,
                    );
                    out.push((spawn.monster, spawn.count, pos));
                }
            }
        }
        out
    }
}
