//! Submap store implementations: one on disk, one in memory.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use ashfall_core::{StoreError, Submap, SubmapCoord, SubmapStore};

use crate::codec;

/// Disk-backed store: one text file per submap under `<world>/save/`,
/// named `m.<x>.<y>.<z>` by absolute submap coordinate.
pub struct FileSubmapStore {
    save_dir: PathBuf,
}

impl FileSubmapStore {
    pub fn new(save_dir: impl AsRef<Path>) -> Result<Self, std::io::Error> {
        let save_dir = save_dir.as_ref().to_path_buf();
        fs::create_dir_all(&save_dir)?;
        Ok(Self { save_dir })
    }

    fn path(&self, coord: SubmapCoord) -> PathBuf {
        self.save_dir
            .join(format!("m.{}.{}.{}", coord.x, coord.y, coord.z))
    }
}

impl SubmapStore for FileSubmapStore {
    fn load(&mut self, coord: SubmapCoord) -> Result<Option<Submap>, StoreError> {
        let path = self.path(coord);
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            coord,
            source,
        })?;
        let submap = codec::decode(&text).map_err(|e| StoreError::Parse {
            coord,
            detail: e.to_string(),
        })?;
        tracing::debug!(%coord, "loaded submap from {}", path.display());
        Ok(Some(submap))
    }

    fn save(&mut self, coord: SubmapCoord, submap: &Submap) -> Result<(), StoreError> {
        let path = self.path(coord);
        let temp = path.with_extension("tmp");
        let text = codec::encode(submap);
        fs::write(&temp, text).map_err(|source| StoreError::Io { coord, source })?;
        fs::rename(&temp, &path).map_err(|source| StoreError::Io { coord, source })?;
        tracing::debug!(%coord, "saved submap to {}", path.display());
        Ok(())
    }
}

/// In-memory store for tests and ephemeral worlds.
#[derive(Default)]
pub struct MemorySubmapStore {
    submaps: HashMap<SubmapCoord, Submap>,
}

impl MemorySubmapStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.submaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submaps.is_empty()
    }
}

impl SubmapStore for MemorySubmapStore {
    fn load(&mut self, coord: SubmapCoord) -> Result<Option<Submap>, StoreError> {
        Ok(self.submaps.get(&coord).cloned())
    }

    fn save(&mut self, coord: SubmapCoord, submap: &Submap) -> Result<(), StoreError> {
        self.submaps.insert(coord, submap.clone());
        Ok(())
    }
}
