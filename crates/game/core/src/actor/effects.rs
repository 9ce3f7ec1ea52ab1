use crate::actor::body::BodyPart;

/// Timed conditions on humans. Duration -1 is persistent until removed by an
/// outside cause (struggling out of a bear trap, climbing from a pit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiseaseKind {
    Beartrap,
    LightSnare,
    HeavySnare,
    InPit,
    Slimed,
    Poison,
    BadPoison,
    Bleed,
    Smoke,
    TearGas,
    OnFire,
    Stunned,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Disease {
    pub kind: DiseaseKind,
    /// Remaining turns; -1 never expires on its own.
    pub duration: i32,
    /// Afflicted region, for site-specific conditions like bleeding.
    pub part: Option<BodyPart>,
}

/// Timed conditions on monsters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MonsterEffectKind {
    Beartrap,
    Stunned,
    Downed,
    OnFire,
    Bouldering,
    Deaf,
    Docile,
    /// Breaking away after a hit-and-run strike.
    Run,
    /// Recently traded blows with the player; a valid target for a while.
    HitByPlayer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterEffect {
    pub kind: MonsterEffectKind,
    /// Remaining turns; -1 never expires on its own.
    pub duration: i32,
}
