/// Environmental field kinds. Discriminants are stable: they appear in
/// submap files as the `F` record's type column.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumIter,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum FieldKind {
    #[default]
    None = 0,
    Blood = 1,
    Bile = 2,
    Sludge = 3,
    Acid = 4,
    Fire = 5,
    Smoke = 6,
    TearGas = 7,
    NukeGas = 8,
    Electricity = 9,
    Fatigue = 10,
}

impl FieldKind {
    pub const COUNT: usize = 11;

    /// Smoke-class gases zero nearby scent and convert into one another.
    pub fn is_gas(self) -> bool {
        matches!(self, FieldKind::Smoke | FieldKind::TearGas | FieldKind::NukeGas)
    }
}

/// Static descriptor for one field kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDef {
    /// Display name by intensity (1..=3).
    pub names: [&'static str; 3],
    pub symbol: char,
    /// Whether sight passes through, by intensity.
    pub transparent: [bool; 3],
    /// Whether stepping in is harmful, by intensity.
    pub dangerous: [bool; 3],
    /// Expected half-life in turns; 0 means the field never decays.
    pub halflife: i32,
    /// Added age per tick when the cell sits outdoors (gases thin faster).
    pub outdoor_age: i32,
}

impl FieldDef {
    pub fn transparent_at(&self, intensity: u8) -> bool {
        self.transparent[(intensity.clamp(1, 3) - 1) as usize]
    }

    pub fn dangerous_at(&self, intensity: u8) -> bool {
        self.dangerous[(intensity.clamp(1, 3) - 1) as usize]
    }

    pub fn name_at(&self, intensity: u8) -> &'static str {
        self.names[(intensity.clamp(1, 3) - 1) as usize]
    }
}
