//! Host-side runtime: world directories, the submap codec, and session
//! lifecycle around the simulation core.

pub mod codec;
pub mod generator;
pub mod session;
pub mod store;

pub use generator::{FlatGenerator, MeadowGenerator};
pub use session::{SessionError, WorldSession};
pub use store::{FileSubmapStore, MemorySubmapStore};
