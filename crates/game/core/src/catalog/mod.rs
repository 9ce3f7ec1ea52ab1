//! Immutable type registries: terrain, items, monsters, traps, fields.
//!
//! The catalog is initialized once at world open and never mutated. Actors
//! and tiles reference records by stable integer id; lookups on a bad id
//! degrade to the null record rather than panicking.

mod field;
mod item;
mod monster;
mod terrain;
mod trap;

pub use field::{FieldDef, FieldKind};
pub use item::{
    AmmoClass, AmmoDef, AmmoEffects, GunDef, GunFlags, GunSkill, ItemDef, ItemId, ItemKind,
    Material, ToolDef,
};
pub use monster::{
    DeathEffect, MonsterDef, MonsterFlags, MonsterId, MonsterSize, SpecialAttack,
};
pub use terrain::{BashRoll, BashSpec, CountRoll, Debris, ShootSpec, TerrainDef, TerrainFlags, TerrainId};
pub use trap::{TrapDef, TrapId, TrapKind};

/// The process-wide registry of shared, immutable type records.
///
/// Built by `ashfall-content` at startup; the world holds it as a read-only
/// field for the lifetime of the session.
pub struct Catalog {
    pub terrains: Vec<TerrainDef>,
    pub items: Vec<ItemDef>,
    pub monsters: Vec<MonsterDef>,
    pub traps: Vec<TrapDef>,
    pub fields: Vec<FieldDef>,
    /// Terrain left behind when a digging monster churns the ground.
    pub dig_mound: TerrainId,
    /// What demolished terrain collapses into.
    pub rubble: TerrainId,
    /// Creatures a mature fatigue rift may pull through.
    pub nether: Vec<MonsterId>,
}

impl Catalog {
    pub fn terrain(&self, id: TerrainId) -> &TerrainDef {
        match self.terrains.get(id.0 as usize) {
            Some(def) => def,
            None => {
                tracing::warn!("terrain id {} out of range, using null", id.0);
                &self.terrains[0]
            }
        }
    }

    pub fn item(&self, id: ItemId) -> &ItemDef {
        match self.items.get(id.0 as usize) {
            Some(def) => def,
            None => {
                tracing::warn!("item id {} out of range, using null", id.0);
                &self.items[0]
            }
        }
    }

    pub fn monster(&self, id: MonsterId) -> &MonsterDef {
        match self.monsters.get(id.0 as usize) {
            Some(def) => def,
            None => {
                tracing::warn!("monster id {} out of range, using null", id.0);
                &self.monsters[0]
            }
        }
    }

    pub fn trap(&self, id: TrapId) -> &TrapDef {
        match self.traps.get(id.0 as usize) {
            Some(def) => def,
            None => {
                tracing::warn!("trap id {} out of range, using none", id.0);
                &self.traps[0]
            }
        }
    }

    pub fn field(&self, kind: FieldKind) -> &FieldDef {
        &self.fields[kind as usize]
    }

    /// Resolve a terrain by name. Intended for content wiring and tests.
    pub fn terrain_by_name(&self, name: &str) -> Option<TerrainId> {
        self.terrains
            .iter()
            .position(|t| t.name == name)
            .map(|i| TerrainId(i as u8))
    }

    /// Resolve an item by name. Intended for content wiring and tests.
    pub fn item_by_name(&self, name: &str) -> Option<ItemId> {
        self.items
            .iter()
            .position(|t| t.name == name)
            .map(|i| ItemId(i as u16))
    }
}
