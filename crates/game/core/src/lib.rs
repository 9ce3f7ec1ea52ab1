//! Deterministic simulation core for a turn-based survival roguelike.
//!
//! `ashfall-core` owns the world state and the rules that advance it: the
//! chunked tile map and its reality bubble, the field simulator, trap
//! dispatch, monster AI, and the ranged combat resolver. All state mutation
//! flows through [`World::advance`], one command per turn, and every
//! stochastic decision routes through the world's single [`GameRng`], so a
//! fixed seed and command script replay bit for bit.
//!
//! The core performs no I/O. Persistence hangs off the [`SubmapStore`] and
//! [`SubmapGenerator`] seams; `ashfall-runtime` provides the disk-backed
//! implementations, and `ashfall-content` provides the immutable
//! [`Catalog`].
pub mod actor;
pub mod ai;
pub mod catalog;
pub mod combat;
pub mod config;
pub mod error;
pub mod field;
pub mod geom;
pub mod item;
pub mod map;
pub mod rng;
pub mod trap;
pub mod turn;
pub mod world;

pub use actor::{
    Activity, ActivityKind, BodyPart, Character, Disease, DiseaseKind, HpPart, Inventory,
    Monster, MonsterEffect, MonsterEffectKind, Npc, NpcAttitude, NpcOpinion, NpcPersonality,
    Skill, SkillSet, Stats,
};
pub use ai::{Attitude, SIGHT_RANGE, TargetRef};
pub use catalog::{
    AmmoClass, AmmoDef, AmmoEffects, BashRoll, BashSpec, Catalog, CountRoll, DeathEffect,
    Debris, FieldDef, FieldKind, GunDef, GunFlags, GunSkill, ItemDef, ItemId, ItemKind,
    Material, MonsterDef, MonsterFlags, MonsterId, MonsterSize, ShootSpec, SpecialAttack,
    TerrainDef, TerrainFlags, TerrainId, ToolDef, TrapDef, TrapId, TrapKind,
};
pub use combat::time_to_fire;
pub use config::GameConfig;
pub use error::{ActionError, StoreError};
pub use geom::{
    Direction, Point, SubmapCoord, chebyshev_dist, continue_line, line_to, trig_dist,
};
pub use item::{Item, ItemPile};
pub use map::{
    BashResult, FieldCell, Map, SUBMAP_SIZE, SpawnPoint, Submap, SubmapGenerator, SubmapStore,
    fast_forward,
};
pub use rng::{GameRng, djb2_hash};
pub use trap::DisarmOutcome;
pub use turn::Command;
pub use world::{MessageLog, World};
