/// Simulation constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// World seed fed to the deterministic RNG at world creation.
    pub seed: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Side length of a submap in tiles. Submaps are the unit of generation
    /// and persistence.
    pub const SUBMAP_SIZE: usize = 12;
    /// Loaded window is SUBMAP_GRID x SUBMAP_GRID submaps (the reality bubble).
    pub const SUBMAP_GRID: usize = 3;
    /// Side length of the reality bubble in tiles.
    pub const BUBBLE_SIZE: usize = Self::SUBMAP_SIZE * Self::SUBMAP_GRID;
    /// Item pile cap per tile; add_item overflows onto neighbors past this.
    pub const MAX_TILE_ITEMS: usize = 24;
    /// Carried-item projection cap (enough for ranged/throw resolution).
    pub const MAX_INVENTORY_SLOTS: usize = 16;

    // ===== AI tunables =====
    /// Followers keep at least this many plan steps between them and the
    /// followed actor before closing in.
    pub const MONSTER_FOLLOW_DIST: usize = 8;
    /// Minimum scent a monster needs to track by smell. KEENNOSE lowers it.
    pub const MIN_SCENT: u32 = 2;

    // ===== ranged tunables =====
    /// Ranges beyond this compress for rifles and targeting aids.
    pub const LONG_RANGE: i32 = 10;

    // ===== field tunables =====
    /// One field tick is fast-forwarded per this many turns of absence.
    pub const FIELD_CATCHUP_TURNS: u32 = 8;
    /// Radiation decays by one point per this many turns of absence.
    pub const RAD_DECAY_TURNS: u32 = 100;

    pub fn new(seed: u32) -> Self {
        Self { seed }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(0)
    }
}
