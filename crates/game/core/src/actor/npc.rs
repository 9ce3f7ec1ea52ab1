use crate::actor::character::Character;

/// Personality axes steering NPC decisions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcPersonality {
    pub aggression: i8,
    pub bravery: i8,
    pub collector: i8,
    pub altruism: i8,
}

/// What this NPC currently thinks of the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcOpinion {
    pub trust: i32,
    pub fear: i32,
    pub value: i32,
}

/// Standing orders toward the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NpcAttitude {
    Follow,
    Defend,
    Kill,
    Flee,
    #[default]
    Wait,
    Talk,
    Slave,
}

/// A non-player human: a character body plus social state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Npc {
    pub body: Character,
    pub personality: NpcPersonality,
    pub opinion: NpcOpinion,
    pub attitude: NpcAttitude,
    pub dead: bool,
}

impl Npc {
    pub fn new(body: Character) -> Self {
        Self {
            body,
            personality: NpcPersonality::default(),
            opinion: NpcOpinion::default(),
            attitude: NpcAttitude::default(),
            dead: false,
        }
    }
}
