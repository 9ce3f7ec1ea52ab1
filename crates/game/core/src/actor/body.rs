/// Body regions for hit location and encumbrance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BodyPart {
    Head,
    Eyes,
    Mouth,
    Torso,
    Arms,
    Hands,
    Legs,
    Feet,
}

impl BodyPart {
    pub const COUNT: usize = 8;

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Hit point pools. Eyes, mouth, hands and feet fold into their parent limb.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HpPart {
    Head,
    Torso,
    ArmLeft,
    ArmRight,
    LegLeft,
    LegRight,
}

impl HpPart {
    pub const COUNT: usize = 6;

    pub fn index(self) -> usize {
        self as usize
    }
}

impl BodyPart {
    /// The hp pool damage to this region drains. `side` picks left/right
    /// for paired limbs.
    pub fn hp_part(self, side: i32) -> HpPart {
        match self {
            BodyPart::Head | BodyPart::Eyes | BodyPart::Mouth => HpPart::Head,
            BodyPart::Torso => HpPart::Torso,
            BodyPart::Arms | BodyPart::Hands => {
                if side == 0 {
                    HpPart::ArmLeft
                } else {
                    HpPart::ArmRight
                }
            }
            BodyPart::Legs | BodyPart::Feet => {
                if side == 0 {
                    HpPart::LegLeft
                } else {
                    HpPart::LegRight
                }
            }
        }
    }
}
