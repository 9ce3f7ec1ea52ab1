use crate::catalog::item::ItemId;
use crate::catalog::monster::MonsterId;
use crate::catalog::terrain::TerrainId;

/// Stable trap identifier. Index into [`Catalog::traps`]; persisted in the
/// submap `T` records.
///
/// [`Catalog::traps`]: crate::catalog::Catalog
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrapId(pub u8);

impl TrapId {
    pub const NONE: Self = Self(0);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

/// The effect routine a trap dispatches to on entry, with its wiring into
/// the rest of the catalog. Whether the trap clears itself is a property of
/// the effect, not of the id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrapKind {
    #[default]
    None,
    /// Loud pop, then gone.
    Bubblewrap,
    /// Furniture to stumble over.
    Cot,
    /// Clamps a leg; the sprung trap ends up carried or dropped.
    Beartrap { item: ItemId },
    /// Nails through the feet.
    Board,
    /// Throws the victim into an adjacent tile.
    Tripwire,
    /// One bolt, then the rig falls apart.
    Crossbow { bow: ItemId, string: ItemId, bolt: ItemId },
    /// Rigged shotgun; the two-barrel variant degrades to the one-barrel
    /// trap after its first discharge.
    Shotgun { barrels: u8, gun: ItemId, string: ItemId, single_barrel: TrapId },
    /// A heavy blade swings across the tile.
    Blade,
    /// Light snare; holds small game, shrugged off by the large.
    SnareLight { string: ItemId, trigger: ItemId },
    /// Heavy snare; holds most things.
    SnareHeavy { rope: ItemId, trigger: ItemId },
    Landmine,
    Boobytrap,
    /// Teleports the victim through a hazardous scatter.
    Telepad,
    Pit,
    /// Spiked pit; broken spears degrade it to a plain pit.
    PitSpikes { pit_terrain: TerrainId, pit_trap: TrapId, spear: ItemId },
    /// Acidic goo; transforms monsters into blobs.
    Goo { blob: MonsterId },
    /// Sliced apart by electrical beams.
    Dissector,
    /// A shadow condenses nearby.
    Shadow { monster: MonsterId },
    /// A shadowy snake may form, or just hissing.
    Snake { monster: MonsterId },
    /// Saps life force.
    Drain,
    /// Unnerving humming, sometimes deafening.
    Hum,
    /// Radiation or blinding flashes.
    Glow,
}

/// Immutable descriptor for one trap kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrapDef {
    pub name: &'static str,
    pub symbol: char,
    /// How hard the trap is to notice; 0 is plainly visible.
    pub visibility: i32,
    /// Dodge-class difficulty of stepping around it once triggered.
    pub avoidance: i32,
    /// Disarm difficulty.
    pub difficulty: i32,
    /// Items recovered by a successful disarm.
    pub components: &'static [ItemId],
    pub kind: TrapKind,
}

impl TrapDef {
    /// Benign traps never harm; stepping on them is safe.
    pub fn is_benign(&self) -> bool {
        matches!(self.kind, TrapKind::None | TrapKind::Cot | TrapKind::Bubblewrap)
    }
}
