use crate::catalog::item::ItemId;
use crate::rng::GameRng;

/// Stable terrain identifier. Index into [`Catalog::terrains`]; persisted in
/// submap files as `id + 42`.
///
/// [`Catalog::terrains`]: crate::catalog::Catalog
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainId(pub u8);

impl TerrainId {
    /// The out-of-bubble sentinel: not walkable, not transparent.
    pub const NULL: Self = Self(0);
}

bitflags::bitflags! {
    /// Behavior flags attached to a terrain record.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct TerrainFlags: u32 {
        /// Line of sight passes through.
        const TRANSPARENT = 1 << 0;
        /// Burns when fire reaches it.
        const FLAMMABLE = 1 << 1;
        /// Detonates when fire reaches it.
        const EXPLODES = 1 << 2;
        /// Deep enough to swim or dive in.
        const SWIMMABLE = 1 << 3;
        /// Shallow liquid; dampens fire, drowns the knocked-back.
        const LIQUID = 1 << 4;
        /// Digging monsters can tunnel here.
        const DIGGABLE = 1 << 5;
        /// Damages non-tiny walkers badly (broken glass, wreckage).
        const SHARP = 1 << 6;
        /// Damages non-tiny walkers lightly.
        const ROUGH = 1 << 7;
        /// Items may not rest here; placement overflows to neighbors.
        const NOITEM = 1 << 8;
        /// Open pit; flames inside only spread to other pits.
        const PIT = 1 << 9;
        /// Locked door; opens from the inside only.
        const LOCKED = 1 << 10;
        /// Reads as indoor floor for weather/outdoor checks.
        const INDOORS = 1 << 11;
    }
}

/// Strength threshold a bash must beat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BashRoll {
    /// Uniform roll in `[lo, hi]`.
    Rng(i32, i32),
    /// Sum of `n` dice with `sides` sides.
    Dice(i32, i32),
}

impl BashRoll {
    pub fn roll(self, rng: &mut GameRng) -> i32 {
        match self {
            BashRoll::Rng(lo, hi) => rng.rng(lo, hi),
            BashRoll::Dice(n, sides) => rng.dice(n, sides),
        }
    }
}

/// How many debris items drop when a terrain breaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountRoll {
    Fixed(i32),
    Rng(i32, i32),
    /// Product of two uniform rolls (boarded windows drop `rng*rng` boards).
    RngMul((i32, i32), (i32, i32)),
}

impl CountRoll {
    pub fn roll(self, rng: &mut GameRng) -> i32 {
        match self {
            CountRoll::Fixed(n) => n,
            CountRoll::Rng(lo, hi) => rng.rng(lo, hi),
            CountRoll::RngMul((a, b), (c, d)) => rng.rng(a, b) * rng.rng(c, d),
        }
    }
}

/// One debris drop entry in a bash table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debris {
    pub item: ItemId,
    pub count: CountRoll,
}

/// Data-driven smash behavior for one terrain kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BashSpec {
    pub threshold: BashRoll,
    /// Even past the threshold, fail one time in N (tangled underbrush).
    pub whiff_one_in: Option<i32>,
    pub becomes: TerrainId,
    pub success_sound: &'static str,
    pub fail_sound: &'static str,
    pub debris: &'static [Debris],
}

/// Data-driven bullet interaction for one terrain kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShootSpec {
    /// Damage absorbed on a hit, rolled uniformly.
    pub reduce: (i32, i32),
    /// Terrain after the shot if damage remains positive.
    pub becomes: Option<TerrainId>,
    /// Partial cover: the shot only connects one time in N (broken doors).
    pub hit_one_in: Option<i32>,
    /// Damage absorbed when the shot slips past partial cover.
    pub miss_reduce: (i32, i32),
    /// Incendiary ammo ignites this terrain (paper walls).
    pub incendiary_ignites: bool,
}

/// Immutable descriptor for one terrain kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainDef {
    pub name: &'static str,
    pub symbol: char,
    /// Movement cost in half-turns; 0 means impassable.
    pub move_cost: u8,
    pub flags: TerrainFlags,
    /// Door transition when opened (locked doors need `LOCKED` honored).
    pub open_to: Option<TerrainId>,
    /// Door transition when closed.
    pub close_to: Option<TerrainId>,
    pub bash: Option<BashSpec>,
    pub shoot: Option<ShootSpec>,
    /// What a density-3 fire leaves behind, if the terrain is flammable.
    pub burns_to: Option<TerrainId>,
    /// Next state once an `EXPLODES` terrain detonates.
    pub explodes_to: Option<TerrainId>,
}

impl TerrainDef {
    pub fn is_passable(&self) -> bool {
        self.move_cost > 0
    }

    pub fn is_bashable(&self) -> bool {
        self.bash.is_some()
    }

    pub fn is_destructable(&self) -> bool {
        self.is_bashable()
            || (self.move_cost == 0 && !self.flags.contains(TerrainFlags::TRANSPARENT))
    }

    pub fn is_divable(&self) -> bool {
        self.flags.contains(TerrainFlags::SWIMMABLE)
    }
}
