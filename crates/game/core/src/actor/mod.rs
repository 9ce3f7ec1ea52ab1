//! Actors: the player, NPCs and monsters, as variants of a common
//! capability set (position, move budget, hit points, timed effects).

mod body;
mod character;
mod effects;
mod monster;
mod npc;

pub use body::{BodyPart, HpPart};
pub use character::{
    Activity, ActivityKind, Character, Inventory, Skill, SkillSet, Stats,
};
pub use effects::{Disease, DiseaseKind, MonsterEffect, MonsterEffectKind};
pub use monster::Monster;
pub use npc::{Npc, NpcAttitude, NpcOpinion, NpcPersonality};
