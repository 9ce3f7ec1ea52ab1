//! World sessions: the lifecycle around a world directory.
//!
//! `new` seeds and generates, `open` restores, `save` flushes, `close`
//! saves and releases. Parse failures refuse the world; I/O failures leave
//! the in-memory world valid so the host may retry.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ashfall_core::{
    Character, GameConfig, StoreError, SubmapCoord, World,
};

use crate::generator::MeadowGenerator;
use crate::store::FileSubmapStore;

/// Name of the per-world metadata file.
const MANIFEST: &str = "world.ron";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("not a world directory: {0}")]
    InvalidWorldDir(PathBuf),

    #[error("corrupt submap {coord}: {detail}")]
    CorruptSubmap { coord: SubmapCoord, detail: String },

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt world manifest: {0}")]
    CorruptManifest(String),
}

impl SessionError {
    /// Process exit code for the host: 1 invalid directory, 2 corrupt
    /// submap, 3 I/O.
    pub fn exit_code(&self) -> i32 {
        match self {
            SessionError::InvalidWorldDir(_) => 1,
            SessionError::CorruptSubmap { .. } | SessionError::CorruptManifest(_) => 2,
            SessionError::Io(_) => 3,
        }
    }
}

impl From<StoreError> for SessionError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Parse { coord, detail } => {
                SessionError::CorruptSubmap { coord, detail }
            }
            StoreError::Io { source, .. } => SessionError::Io(source),
        }
    }
}

/// Everything persisted about a world besides its submaps.
#[derive(serde::Serialize, serde::Deserialize)]
struct Manifest {
    seed: u32,
    turn: u32,
    origin: SubmapCoord,
    player: Character,
}

/// An open world bound to a directory on disk.
pub struct WorldSession {
    root: PathBuf,
    pub world: World,
}

impl WorldSession {
    /// Resolve the world root: explicit path, or the `WORLD_DIR`
    /// environment variable.
    pub fn resolve_root(path: Option<&Path>) -> Result<PathBuf, SessionError> {
        match path {
            Some(p) => Ok(p.to_path_buf()),
            None => std::env::var_os("WORLD_DIR")
                .map(PathBuf::from)
                .ok_or_else(|| SessionError::InvalidWorldDir(PathBuf::from("<unset>"))),
        }
    }

    /// Create a fresh world under `root`.
    pub fn create(root: impl AsRef<Path>, seed: u32) -> Result<Self, SessionError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(root.join("save"))?;
        let store = FileSubmapStore::new(root.join("save"))?;
        let world = World::new(
            Arc::new(ashfall_content::catalog()),
            GameConfig::new(seed),
            SubmapCoord::new(0, 0, 0),
            0,
            Box::new(store),
            Box::new(MeadowGenerator::new(seed)),
        )?;
        let mut session = Self { root, world };
        session.save()?;
        tracing::info!(root = %session.root.display(), seed, "created world");
        Ok(session)
    }

    /// Open an existing world directory.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, SessionError> {
        let root = root.as_ref().to_path_buf();
        let manifest_path = root.join(MANIFEST);
        if !manifest_path.exists() {
            return Err(SessionError::InvalidWorldDir(root));
        }
        let text = fs::read_to_string(&manifest_path)?;
        let manifest: Manifest = ron::from_str(&text)
            .map_err(|e| SessionError::CorruptManifest(e.to_string()))?;

        let store = FileSubmapStore::new(root.join("save"))?;
        let mut world = World::new(
            Arc::new(ashfall_content::catalog()),
            GameConfig::new(manifest.seed),
            manifest.origin,
            manifest.turn,
            Box::new(store),
            Box::new(MeadowGenerator::new(manifest.seed)),
        )?;
        world.player = manifest.player;
        tracing::info!(root = %root.display(), turn = manifest.turn, "opened world");
        Ok(Self { root, world })
    }

    /// Flush submaps and the manifest. The in-memory world stays valid even
    /// when this fails.
    pub fn save(&mut self) -> Result<(), SessionError> {
        self.world.save()?;
        let manifest = Manifest {
            seed: self.world.config.seed,
            turn: self.world.turn,
            origin: self.world.map.origin(),
            player: self.world.player.clone(),
        };
        let text = ron::ser::to_string_pretty(&manifest, ron::ser::PrettyConfig::default())
            .map_err(|e| SessionError::CorruptManifest(e.to_string()))?;
        let path = self.root.join(MANIFEST);
        let temp = path.with_extension("ron.tmp");
        fs::write(&temp, text)?;
        fs::rename(&temp, &path)?;
        Ok(())
    }

    /// Save and end the session.
    pub fn close(mut self) -> Result<(), SessionError> {
        self.save()?;
        tracing::info!(root = %self.root.display(), "closed world");
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
