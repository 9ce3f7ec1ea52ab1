//! Error taxonomy for the simulation core.
//!
//! The core never aborts on recoverable conditions: out-of-bubble access and
//! missing catalog ids degrade to sentinel values at the call site. The types
//! here describe the conditions that *are* surfaced across the crate boundary.

use crate::geom::SubmapCoord;

/// Errors surfaced by the chunk store when paging submaps in and out.
///
/// Parse failures refuse the world; I/O failures leave in-memory state valid
/// so the host may retry.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("malformed submap {coord}: {detail}")]
    Parse { coord: SubmapCoord, detail: String },

    #[error("i/o failure on submap {coord}: {source}")]
    Io {
        coord: SubmapCoord,
        #[source]
        source: std::io::Error,
    },
}

/// A caller asked an actor to do something it cannot do right now.
///
/// Recovered locally: the action becomes a no-op plus a message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("nothing to fire with")]
    NoGun,
    #[error("the weapon has no ammunition")]
    NoAmmo,
    #[error("not strong enough to draw the bow")]
    TooWeak,
    #[error("no such inventory slot")]
    BadSlot,
    #[error("there is no trap there")]
    NoTrap,
    #[error("that cannot be opened")]
    CannotOpen,
    #[error("that cannot be closed")]
    CannotClose,
}
