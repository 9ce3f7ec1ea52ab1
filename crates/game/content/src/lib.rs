//! Built-in content: the immutable catalogs the simulation core consumes.
//!
//! Tables are keyed by stable integer id — terrain and trap ids appear
//! verbatim in submap files, monster ids in spawn records — so entries are
//! only ever appended, never reordered.

pub mod fields;
pub mod items;
pub mod monsters;
pub mod terrain;
pub mod traps;

pub use terrain::ter;

use ashfall_core::Catalog;

/// Assemble the full built-in catalog.
pub fn catalog() -> Catalog {
    Catalog {
        terrains: terrain::terrains(),
        items: items::items(),
        monsters: monsters::monsters(),
        traps: traps::traps(),
        fields: fields::fields(),
        dig_mound: ter::DIRT_MOUND,
        rubble: ter::RUBBLE,
        nether: monsters::nether(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ashfall_core::{FieldKind, TrapKind};
    use strum::IntoEnumIterator;

    #[test]
    fn id_constants_match_table_positions() {
        let cat = catalog();
        assert_eq!(cat.terrain_by_name("grass"), Some(ter::GRASS));
        assert_eq!(cat.terrain_by_name("wall"), Some(ter::WALL));
        assert_eq!(cat.item_by_name("two by four"), Some(items::TWO_BY_FOUR));
        assert_eq!(cat.monster(monsters::ZOMBIE).name, "zombie");
        assert_eq!(cat.trap(traps::BEARTRAP).name, "bear trap");
    }

    #[test]
    fn terrain_ids_fit_the_save_encoding() {
        // Submap files store terrain as `id + 42`, one printable byte each.
        let cat = catalog();
        assert!(cat.terrains.len() + 42 <= 127);
    }

    #[test]
    fn doors_open_and_close_symmetrically() {
        let cat = catalog();
        for def in cat.terrains.iter() {
            if let Some(open) = def.open_to {
                let opened = cat.terrain(open);
                assert!(opened.move_cost > 0, "open door {} is impassable", def.name);
                assert!(
                    opened.close_to.is_some(),
                    "door {} opens to a state that cannot close",
                    def.name
                );
            }
            if let Some(closed) = def.close_to {
                assert!(cat.terrain(closed).open_to.is_some());
            }
        }
    }

    #[test]
    fn bash_and_burn_targets_exist() {
        let cat = catalog();
        for def in cat.terrains.iter() {
            if let Some(spec) = &def.bash {
                assert!((spec.becomes.0 as usize) < cat.terrains.len());
                for debris in spec.debris {
                    assert!((debris.item.0 as usize) < cat.items.len());
                }
            }
            if let Some(burnt) = def.burns_to {
                assert!((burnt.0 as usize) < cat.terrains.len());
            }
        }
    }

    #[test]
    fn trap_wiring_points_at_real_records() {
        let cat = catalog();
        for def in cat.traps.iter() {
            for component in def.components {
                assert!((component.0 as usize) < cat.items.len());
            }
            match def.kind {
                TrapKind::Shotgun { single_barrel, .. } => {
                    assert!(matches!(
                        cat.trap(single_barrel).kind,
                        TrapKind::Shotgun { barrels: 1, .. }
                    ));
                }
                TrapKind::PitSpikes {
                    pit_terrain,
                    pit_trap,
                    ..
                } => {
                    assert!((pit_terrain.0 as usize) < cat.terrains.len());
                    assert_eq!(cat.trap(pit_trap).kind, TrapKind::Pit);
                }
                TrapKind::Goo { blob } => {
                    assert!((blob.0 as usize) < cat.monsters.len());
                }
                _ => {}
            }
        }
    }

    #[test]
    fn field_table_covers_every_kind() {
        let cat = catalog();
        assert_eq!(cat.fields.len(), FieldKind::COUNT);
        for kind in FieldKind::iter() {
            // Indexing by discriminant must agree with the enum.
            let _ = cat.field(kind);
        }
        // Gases go opaque at high intensity; fire stays visible through.
        assert!(!cat.field(FieldKind::Smoke).transparent_at(3));
        assert!(cat.field(FieldKind::Fire).transparent_at(3));
    }

    #[test]
    fn nether_spawns_are_valid_monsters() {
        let cat = catalog();
        assert!(!cat.nether.is_empty());
        for id in &cat.nether {
            assert!((id.0 as usize) < cat.monsters.len());
        }
    }
}
