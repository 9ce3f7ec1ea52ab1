use crate::catalog::{FieldKind, MonsterId, TerrainId, TrapId};
use crate::config::GameConfig;
use crate::geom::Point;
use crate::item::ItemPile;

pub const SUBMAP_SIZE: usize = GameConfig::SUBMAP_SIZE;

/// One environmental field cell: kind, intensity 1..=3, age in turns.
///
/// Intensity 0 and kind `None` coincide; a cell decaying to 0 clears in the
/// same tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldCell {
    pub kind: FieldKind,
    pub intensity: u8,
    pub age: i32,
}

impl FieldCell {
    pub fn new(kind: FieldKind, intensity: u8, age: i32) -> Self {
        Self {
            kind,
            intensity: intensity.min(3),
            age,
        }
    }

    /// Blood-class splatter counts as null for placement purposes.
    pub fn is_null(&self) -> bool {
        matches!(
            self.kind,
            FieldKind::None | FieldKind::Blood | FieldKind::Bile
        )
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A monster due to materialize when the submap is simulated again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnPoint {
    pub monster: MonsterId,
    pub count: i32,
    /// Submap-local position.
    pub pos: Point,
}

/// A 12x12 block of tiles: the unit of generation and persistence.
///
/// Submaps exclusively own their tiles' terrain, items, traps, fields,
/// radiation and pending spawns.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Submap {
    pub terrain: [[TerrainId; SUBMAP_SIZE]; SUBMAP_SIZE],
    pub radiation: [[u32; SUBMAP_SIZE]; SUBMAP_SIZE],
    pub items: [[ItemPile; SUBMAP_SIZE]; SUBMAP_SIZE],
    pub traps: [[TrapId; SUBMAP_SIZE]; SUBMAP_SIZE],
    pub fields: [[FieldCell; SUBMAP_SIZE]; SUBMAP_SIZE],
    pub spawns: Vec<SpawnPoint>,
    /// World turn at which this submap was last simulated or saved.
    pub turn_last_touched: u32,
}

impl Submap {
    pub fn filled(terrain: TerrainId) -> Self {
        Self {
            terrain: [[terrain; SUBMAP_SIZE]; SUBMAP_SIZE],
            radiation: [[0; SUBMAP_SIZE]; SUBMAP_SIZE],
            items: std::array::from_fn(|_| std::array::from_fn(|_| Vec::new())),
            traps: [[TrapId::NONE; SUBMAP_SIZE]; SUBMAP_SIZE],
            fields: [[FieldCell::default(); SUBMAP_SIZE]; SUBMAP_SIZE],
            spawns: Vec::new(),
            turn_last_touched: 0,
        }
    }

    /// True if any non-null field cell exists.
    pub fn has_fields(&self) -> bool {
        self.fields
            .iter()
            .flatten()
            .any(|f| f.kind != FieldKind::None)
    }
}

impl Default for Submap {
    fn default() -> Self {
        Self::filled(TerrainId::NULL)
    }
}
