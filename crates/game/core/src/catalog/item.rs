/// Stable item-type identifier. Index into [`Catalog::items`].
///
/// [`Catalog::items`]: crate::catalog::Catalog
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u16);

impl ItemId {
    pub const NULL: Self = Self(0);
}

/// Primary material classes. Fields, fire and bullets all key their damage
/// rules on these.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
pub enum Material {
    #[default]
    Null,
    Liquid,
    Veggy,
    Flesh,
    Powder,
    Cotton,
    Wool,
    Paper,
    Wood,
    Plastic,
    Glass,
    Iron,
    Steel,
    Stone,
    Kevlar,
}

/// Which firearm skill a gun trains and times with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum GunSkill {
    Pistol,
    Shotgun,
    Smg,
    Rifle,
    Archery,
    Launcher,
}

/// Ammunition families. Guns accept one family; casings and flight behavior
/// follow the family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum AmmoClass {
    Shot,
    Pistol,
    Smg,
    Rifle,
    Bolt,
    Arrow,
    Fusion,
    Charge,
}

impl AmmoClass {
    /// Bolts and arrows fly silent and can be recovered after the shot.
    pub fn is_bolt(self) -> bool {
        matches!(self, AmmoClass::Bolt | AmmoClass::Arrow)
    }
}

bitflags::bitflags! {
    /// Ammunition side effects, applied at the end of a bullet's flight or
    /// on the struck target.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct AmmoEffects: u32 {
        const FLAME = 1 << 0;
        const INCENDIARY = 1 << 1;
        const EXPLOSIVE = 1 << 2;
        const EXPLOSIVE_BIG = 1 << 3;
        const FRAG = 1 << 4;
        const NAPALM = 1 << 5;
        const TEARGAS = 1 << 6;
        const SMOKE = 1 << 7;
        const FLASHBANG = 1 << 8;
    }
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct GunFlags: u32 {
        /// Bow needing strength 4 to draw.
        const STR8_DRAW = 1 << 0;
        /// Bow needing strength 5 to draw.
        const STR10_DRAW = 1 << 1;
        /// Charger gun: synthesizes ammo from accumulated charges.
        const CHARGE = 1 << 2;
        /// Each trigger pull burns 100 charges.
        const FIRE_100 = 1 << 3;
    }
}

/// Ballistics record for an ammunition type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AmmoDef {
    pub class: AmmoClass,
    pub damage: i32,
    pub pierce: i32,
    pub range: i32,
    /// Dispersion contribution in quarter-degrees; lower is tighter.
    pub accuracy: i32,
    pub recoil: i32,
    /// Rounds per stack of this ammunition (also casing stack size).
    pub count: i32,
    pub effects: AmmoEffects,
    pub casing: Option<ItemId>,
}

/// Firearm record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GunDef {
    pub skill: GunSkill,
    pub ammo: AmmoClass,
    pub damage: i32,
    /// Dispersion contribution in quarter-degrees.
    pub accuracy: i32,
    pub recoil: i32,
    /// Misfire odds are 1 in 2^durability per shot.
    pub durability: i32,
    pub burst: i32,
    pub clip: i32,
    pub flags: GunFlags,
}

/// Active tool behavior: charge drain and what the item reverts to when the
/// charge runs out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolDef {
    pub turns_per_charge: u32,
    pub revert_to: Option<ItemId>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ItemKind {
    #[default]
    Simple,
    Ammo(AmmoDef),
    Gun(GunDef),
    Tool(ToolDef),
}

/// Immutable descriptor for one item type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemDef {
    pub name: &'static str,
    pub symbol: char,
    pub volume: i32,
    pub weight: i32,
    pub melee_dam: i32,
    pub melee_cut: i32,
    pub material: Material,
    /// Secondary material, `Material::Null` when absent.
    pub material2: Material,
    pub kind: ItemKind,
}

impl ItemDef {
    pub fn made_of(&self, m: Material) -> bool {
        self.material == m || self.material2 == m
    }

    pub fn as_gun(&self) -> Option<&GunDef> {
        match &self.kind {
            ItemKind::Gun(gun) => Some(gun),
            _ => None,
        }
    }

    pub fn as_ammo(&self) -> Option<&AmmoDef> {
        match &self.kind {
            ItemKind::Ammo(ammo) => Some(ammo),
            _ => None,
        }
    }

    /// Damage an item of this type tolerates before being destroyed.
    /// Paper gives out early.
    pub fn damage_tolerance(&self) -> i32 {
        if self.made_of(Material::Paper) { 3 } else { 5 }
    }
}
