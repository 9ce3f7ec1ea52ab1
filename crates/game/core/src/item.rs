//! Item instances. Type data lives in the catalog; an instance carries only
//! mutable state plus its id.

use crate::catalog::{AmmoDef, Catalog, ItemId, Material};

/// One concrete item. Containers own their contents transitively.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub charges: i32,
    /// Wear accumulated from acid, gunfire, abuse. Past the type's tolerance
    /// the item is destroyed.
    pub damage: i32,
    pub active: bool,
    /// Turn the item came into existence.
    pub birthday: u32,
    /// Loaded ammunition type, for guns.
    pub curammo: Option<ItemId>,
    pub contents: Vec<Item>,
}

impl Item {
    pub fn new(id: ItemId, birthday: u32) -> Self {
        Self {
            id,
            birthday,
            ..Self::default()
        }
    }

    pub fn with_charges(id: ItemId, charges: i32, birthday: u32) -> Self {
        Self {
            id,
            charges,
            birthday,
            ..Self::default()
        }
    }

    pub fn volume(&self, catalog: &Catalog) -> i32 {
        catalog.item(self.id).volume
    }

    pub fn made_of(&self, catalog: &Catalog, m: Material) -> bool {
        catalog.item(self.id).made_of(m)
    }

    pub fn is_ammo(&self, catalog: &Catalog) -> bool {
        catalog.item(self.id).as_ammo().is_some()
    }

    /// Base projectile damage of this gun with its loaded ammunition.
    pub fn gun_damage(&self, catalog: &Catalog) -> i32 {
        let def = catalog.item(self.id);
        let Some(gun) = def.as_gun() else { return 0 };
        let ammo_dam = self
            .curammo
            .and_then(|a| catalog.item(a).as_ammo().map(|d| d.damage))
            .unwrap_or(0);
        gun.damage + ammo_dam - self.damage * 2
    }

    /// Ballistics of the loaded round, if any.
    pub fn loaded_ammo<'c>(&self, catalog: &'c Catalog) -> Option<&'c AmmoDef> {
        self.curammo.and_then(|a| catalog.item(a).as_ammo())
    }
}

/// Items stacked on one tile.
pub type ItemPile = Vec<Item>;
