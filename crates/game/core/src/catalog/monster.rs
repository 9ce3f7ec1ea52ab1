use crate::catalog::item::{ItemId, Material};

/// Stable monster-type identifier. Index into [`Catalog::monsters`].
///
/// [`Catalog::monsters`]: crate::catalog::Catalog
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterId(pub u16);

impl MonsterId {
    pub const NULL: Self = Self(0);
}

/// Body size classes. Traps, snares and hit tables gate on these.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
pub enum MonsterSize {
    Tiny,
    Small,
    #[default]
    Medium,
    Large,
    Huge,
}

bitflags::bitflags! {
    /// Monster capability and behavior flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct MonsterFlags: u64 {
        const SEES = 1 << 0;
        const HEARS = 1 << 1;
        const SMELLS = 1 << 2;
        /// Extra-sensitive nose: tracks fainter scent.
        const KEENNOSE = 1 << 3;
        /// Shambles sideways at random while moving.
        const STUMBLES = 1 << 4;
        /// Smashes doors and windows on the way through.
        const BASHES = 1 << 5;
        /// Levels even solid walls, slowly.
        const DESTROYS = 1 << 6;
        const FLIES = 1 << 7;
        /// Tunnels through diggable ground, churning it behind itself.
        const DIGS = 1 << 8;
        const SWIMS = 1 << 9;
        /// Lives in water and cannot leave it.
        const AQUATIC = 1 << 10;
        /// Doesn't breathe; can walk submerged, avoids entering open water.
        const NO_BREATHE = 1 << 11;
        /// Leaves a trail of sludge fields in its wake.
        const SLUDGETRAIL = 1 << 12;
        /// Leaves a trail of acid.
        const ACIDTRAIL = 1 << 13;
        /// Poisonous melee.
        const VENOM = 1 << 14;
        /// Severely poisonous melee.
        const BADVENOM = 1 << 15;
        /// Deep cuts bleed.
        const BLEED = 1 << 16;
        /// May grab and follow up with a bonus attack.
        const GRABS = 1 << 17;
        /// Attacks other monsters regardless of allegiance.
        const ATTACKMON = 1 << 18;
        /// Strikes, then breaks away.
        const HIT_AND_RUN = 1 << 19;
        /// Small or erratic enough that aimed shots often pass through.
        const HARDTOSHOOT = 1 << 20;
        /// No head to headshot.
        const NOHEAD = 1 << 21;
        /// Rooted in place.
        const IMMOBILE = 1 << 22;
        /// Uses its special attack even while friendly.
        const FRIENDLY_SPECIAL = 1 << 23;
        /// Made of fire; immune to ignition.
        const FIREY = 1 << 24;
        const ACIDPROOF = 1 << 25;
        /// Natural animal: avoids hazards it can sense.
        const ANIMAL = 1 << 26;
        /// Wildlife temperament for flee/approach behavior.
        const WARM = 1 << 27;
    }
}

/// Special attack routines, fired when the cooldown expires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpecialAttack {
    #[default]
    None,
    /// A piercing scream that carries.
    Shriek { volume: i32 },
    /// Spits a glob of acid at a visible target.
    AcidSpit { range: i32 },
    /// Arcs electricity at adjacent targets.
    ShockField,
}

/// What happens to the corpse-to-be when the monster dies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeathEffect {
    /// Drop loot, nothing else.
    #[default]
    Normal,
    /// Violent end: gibs and a blast.
    Explode,
    /// Sprays acid over the surroundings.
    AcidSplatter,
    /// Bursts into a spray of bile.
    BoomerBile,
}

/// Immutable descriptor for one monster type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonsterDef {
    pub name: &'static str,
    pub symbol: char,
    pub size: MonsterSize,
    pub material: Material,
    pub hp: i32,
    pub speed: i32,
    /// Governs both to-hit and the dodge-reduction roll in melee.
    pub melee_skill: i32,
    pub melee_dice: i32,
    pub melee_sides: i32,
    pub melee_cut: i32,
    pub dodge: i32,
    pub armor_bash: i32,
    pub armor_cut: i32,
    /// Baseline aggressiveness; wounded monsters below this flee.
    pub agro: i32,
    pub flags: MonsterFlags,
    /// Turns between special attacks; 0 disables the cooldown roll.
    pub sp_freq: i32,
    pub special: SpecialAttack,
    pub death: DeathEffect,
    /// Nearby kin grow angrier when one of these is attacked.
    pub anger_on_friend_attacked: bool,
    /// Nearby kin lose morale when one of these is attacked.
    pub fear_on_friend_attacked: bool,
    /// Percent chance per drop entry when the monster dies.
    pub drops: &'static [(ItemId, i32)],
}

impl MonsterDef {
    pub fn made_of(&self, m: Material) -> bool {
        self.material == m
    }
}
