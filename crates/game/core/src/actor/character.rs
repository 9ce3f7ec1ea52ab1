use arrayvec::ArrayVec;

use crate::actor::body::{BodyPart, HpPart};
use crate::actor::effects::{Disease, DiseaseKind};
use crate::catalog::GunSkill;
use crate::config::GameConfig;
use crate::geom::Point;
use crate::item::Item;

/// Raw ability scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub strength: i32,
    pub dexterity: i32,
    pub intelligence: i32,
    pub perception: i32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            strength: 8,
            dexterity: 8,
            intelligence: 8,
            perception: 8,
        }
    }
}

/// Trained proficiencies exercised by the combat and trap code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Skill {
    Pistol,
    Shotgun,
    Smg,
    Rifle,
    Archery,
    Launcher,
    /// General firearms handling, on top of the per-class skill.
    Gun,
    Throw,
    Dodge,
    Melee,
    Traps,
}

impl Skill {
    pub const COUNT: usize = 11;

    pub fn from_gun(skill: GunSkill) -> Self {
        match skill {
            GunSkill::Pistol => Skill::Pistol,
            GunSkill::Shotgun => Skill::Shotgun,
            GunSkill::Smg => Skill::Smg,
            GunSkill::Rifle => Skill::Rifle,
            GunSkill::Archery => Skill::Archery,
            GunSkill::Launcher => Skill::Launcher,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillSet {
    levels: [u8; Skill::COUNT],
}

impl SkillSet {
    pub fn level(&self, skill: Skill) -> i32 {
        self.levels[skill as usize] as i32
    }

    pub fn set_level(&mut self, skill: Skill, level: u8) {
        self.levels[skill as usize] = level;
    }
}

/// A multi-turn undertaking; any other command cancels it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activity {
    pub kind: ActivityKind,
    pub turns_left: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivityKind {
    Reload,
}

pub type Inventory = ArrayVec<Item, { GameConfig::MAX_INVENTORY_SLOTS }>;

/// The humanoid actor body shared by the player and NPCs: position, move
/// budget, per-body-part hit points, and the inventory projection the
/// ranged resolver needs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub name: String,
    pub pos: Point,
    pub moves: i32,
    pub speed: i32,
    pub stats: Stats,
    pub skills: SkillSet,
    pub hp: [i32; HpPart::COUNT],
    pub hp_max: [i32; HpPart::COUNT],
    pub encumbrance: [i32; BodyPart::COUNT],
    pub weapon: Option<Item>,
    pub inventory: Inventory,
    pub recoil: i32,
    pub radiation: u32,
    /// Implanted targeting aid; shortens the effective range of a shot.
    pub targeting_aid: bool,
    pub diseases: Vec<Disease>,
    pub activity: Option<Activity>,
}

impl Character {
    pub fn new(name: impl Into<String>, pos: Point) -> Self {
        Self {
            name: name.into(),
            pos,
            moves: 0,
            speed: 100,
            stats: Stats::default(),
            skills: SkillSet::default(),
            hp: [60; HpPart::COUNT],
            hp_max: [60; HpPart::COUNT],
            encumbrance: [0; BodyPart::COUNT],
            weapon: None,
            inventory: Inventory::new(),
            recoil: 0,
            radiation: 0,
            targeting_aid: false,
            diseases: Vec::new(),
            activity: None,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.hp[HpPart::Head.index()] <= 0 || self.hp[HpPart::Torso.index()] <= 0
    }

    /// Evasion score fed into the melee and trap formulas.
    pub fn dodge(&self) -> i32 {
        (self.skills.level(Skill::Dodge) + (self.stats.dexterity - 8) / 2).max(0)
    }

    pub fn encumb(&self, part: BodyPart) -> i32 {
        self.encumbrance[part.index()]
    }

    /// Apply bash plus cut damage to a body region. Returns the total dealt.
    pub fn hit(&mut self, part: BodyPart, side: i32, bash: i32, cut: i32) -> i32 {
        let dam = (bash + cut).max(0);
        let pool = part.hp_part(side).index();
        self.hp[pool] -= dam;
        dam
    }

    /// Damage every hp pool at once (shockwaves, radiation burns).
    pub fn hurt_all(&mut self, dam: i32) {
        for hp in self.hp.iter_mut() {
            *hp -= dam;
        }
    }

    pub fn has_disease(&self, kind: DiseaseKind) -> bool {
        self.diseases.iter().any(|d| d.kind == kind)
    }

    /// Add a condition, keeping the longer duration when it already exists.
    pub fn add_disease(&mut self, kind: DiseaseKind, duration: i32) {
        self.infect(kind, duration, None);
    }

    pub fn infect(&mut self, kind: DiseaseKind, duration: i32, part: Option<BodyPart>) {
        if let Some(existing) = self.diseases.iter_mut().find(|d| d.kind == kind) {
            if existing.duration != -1 && (duration == -1 || duration > existing.duration) {
                existing.duration = duration;
            }
            return;
        }
        self.diseases.push(Disease {
            kind,
            duration,
            part,
        });
    }

    pub fn remove_disease(&mut self, kind: DiseaseKind) {
        self.diseases.retain(|d| d.kind != kind);
    }

    /// Age timed conditions one turn.
    pub fn tick_diseases(&mut self) {
        for d in self.diseases.iter_mut() {
            if d.duration > 0 {
                d.duration -= 1;
            }
        }
        self.diseases.retain(|d| d.duration != 0);
    }

    /// Deviation added to thrown objects by clumsiness.
    pub fn throw_dex_mod(&self) -> i32 {
        (8 - self.stats.dexterity).max(0)
    }

    /// Deviation added to gunfire by clumsiness.
    pub fn ranged_dex_mod(&self) -> i32 {
        (8 - self.stats.dexterity).max(0) * 2
    }

    /// Deviation added to gunfire by poor eyesight.
    pub fn ranged_per_mod(&self) -> i32 {
        (8 - self.stats.perception).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_drains_matching_pool() {
        let mut ch = Character::new("test", Point::new(0, 0));
        ch.hit(BodyPart::Legs, 0, 10, 5);
        assert_eq!(ch.hp[HpPart::LegLeft.index()], 45);
        assert_eq!(ch.hp[HpPart::LegRight.index()], 60);
    }

    #[test]
    fn persistent_disease_survives_ticks() {
        let mut ch = Character::new("test", Point::new(0, 0));
        ch.add_disease(DiseaseKind::Beartrap, -1);
        ch.add_disease(DiseaseKind::Poison, 2);
        ch.tick_diseases();
        ch.tick_diseases();
        assert!(ch.has_disease(DiseaseKind::Beartrap));
        assert!(!ch.has_disease(DiseaseKind::Poison));
    }

    #[test]
    fn infect_keeps_longer_duration() {
        let mut ch = Character::new("test", Point::new(0, 0));
        ch.add_disease(DiseaseKind::Smoke, 5);
        ch.add_disease(DiseaseKind::Smoke, 2);
        assert_eq!(ch.diseases[0].duration, 5);
        ch.add_disease(DiseaseKind::Smoke, 9);
        assert_eq!(ch.diseases[0].duration, 9);
    }
}
