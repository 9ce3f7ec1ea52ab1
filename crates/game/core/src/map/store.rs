//! Paging seams between the in-memory bubble and everything else.
//!
//! The core never touches the filesystem: the runtime hands the world a
//! [`SubmapStore`] for persistence and a [`SubmapGenerator`] for terrain that
//! has never existed. Both are consulted only at bubble boundaries.

use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::error::StoreError;
use crate::geom::SubmapCoord;
use crate::map::submap::Submap;
use crate::rng::GameRng;

/// Disk-backed (or otherwise persistent) submap storage keyed by absolute
/// submap coordinate.
pub trait SubmapStore {
    /// Fetch a previously saved submap. `Ok(None)` means the coordinate has
    /// never been saved and should be generated.
    fn load(&mut self, coord: SubmapCoord) -> Result<Option<Submap>, StoreError>;

    /// Persist a submap leaving the bubble.
    fn save(&mut self, coord: SubmapCoord, submap: &Submap) -> Result<(), StoreError>;
}

/// Procedural source for submaps with no saved state. An external
/// collaborator: the core only requires that it populate the block.
pub trait SubmapGenerator {
    fn generate(&mut self, coord: SubmapCoord, rng: &mut GameRng) -> Submap;
}

impl<F> SubmapGenerator for F
where
    F: FnMut(SubmapCoord, &mut GameRng) -> Submap,
{
    fn generate(&mut self, coord: SubmapCoord, rng: &mut GameRng) -> Submap {
        self(coord, rng)
    }
}

/// Bring a reloaded submap's fields and radiation up to date with the time
/// that passed while it was unloaded.
///
/// One decay tick stands in for every [`GameConfig::FIELD_CATCHUP_TURNS`]
/// turns of absence, capped in proportion to the field's half-life; spread is
/// not simulated in absentia. Radiation bleeds off one point per
/// [`GameConfig::RAD_DECAY_TURNS`].
pub fn fast_forward(submap: &mut Submap, catalog: &Catalog, rng: &mut GameRng, now: u32) {
    let elapsed = now.saturating_sub(submap.turn_last_touched);
    if elapsed == 0 {
        return;
    }

    let rad_decay = (elapsed / GameConfig::RAD_DECAY_TURNS) as u32;
    if rad_decay > 0 {
        for row in submap.radiation.iter_mut() {
            for rad in row.iter_mut() {
                *rad = rad.saturating_sub(rad_decay);
            }
        }
    }

    let ticks = (elapsed / GameConfig::FIELD_CATCHUP_TURNS) as i32;
    if ticks == 0 {
        return;
    }
    for row in submap.fields.iter_mut() {
        for cell in row.iter_mut() {
            let halflife = catalog.field(cell.kind).halflife;
            if halflife <= 0 {
                continue;
            }
            // Past a few half-lives the cell is gone with near certainty.
            let budget = ticks.min(halflife * 4);
            for _ in 0..budget {
                cell.age += 1;
                if cell.age > 0 && rng.dice(3, cell.age) > rng.dice(3, halflife) {
                    cell.age = 0;
                    cell.intensity = cell.intensity.saturating_sub(1);
                }
                if cell.intensity == 0 {
                    cell.clear();
                    break;
                }
            }
        }
    }
    submap.turn_last_touched = now;
}
