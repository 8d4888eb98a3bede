//! The persistence boundary: load the whole assignment list at startup,
//! write the whole list back after mutations. Nothing partial.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

use crate::fs::data_dir;
use crate::model::Assignment;

const FILE_NAME: &str = "assignments.toml";

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to access the assignment file: {0}")]
    Io(#[from] std::io::Error),
    #[error("The assignment file is not valid TOML: {0}")]
    Malformed(#[from] toml::de::Error),
    #[error("Failed to serialize assignments: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Failed to replace the assignment file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SaveFile {
    #[serde(default)]
    assignments: Vec<Assignment>,
}

/// Whole-list persistence for the canonical assignment list.
#[derive(Debug)]
pub struct Storage {
    backend: Backend,
}

#[derive(Debug)]
enum Backend {
    File(PathBuf),
    Memory(Vec<Assignment>),
}

impl Storage {
    /// Storage backed by the given TOML file.
    pub fn file(path: PathBuf) -> Self {
        Self {
            backend: Backend::File(path),
        }
    }

    /// Storage backed by the file at the default XDG data location.
    pub fn default_file() -> Self {
        Self::file(data_dir().join(FILE_NAME))
    }

    /// Storage that never touches the filesystem, for tests and hosts that
    /// manage persistence themselves.
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Vec::new()),
        }
    }

    /// Returns the full persisted list. A missing file is an empty list; a
    /// malformed file is an error, never silently discarded data.
    pub fn load(&self) -> Result<Vec<Assignment>> {
        match &self.backend {
            Backend::File(path) if !path.exists() => Ok(Vec::new()),
            Backend::File(path) => {
                let contents = std::fs::read_to_string(path)?;
                let save: SaveFile = toml::from_str(&contents)?;

                debug!(count = save.assignments.len(), "loaded assignments");
                Ok(save.assignments)
            }
            Backend::Memory(assignments) => Ok(assignments.clone()),
        }
    }

    /// Replaces the persisted list with `assignments`. The file write goes
    /// through a temp file in the same directory so a crash mid-write never
    /// leaves a torn file behind.
    pub fn save(&mut self, assignments: &[Assignment]) -> Result<()> {
        match &mut self.backend {
            Backend::File(path) => {
                let contents = toml::to_string_pretty(&SaveFile {
                    assignments: assignments.to_vec(),
                })?;

                let dir = path.parent().unwrap_or(Path::new("."));
                std::fs::create_dir_all(dir)?;

                let mut file = NamedTempFile::new_in(dir)?;
                file.write_all(contents.as_bytes())?;
                file.persist(path)?;

                debug!(count = assignments.len(), "saved assignments");
                Ok(())
            }
            Backend::Memory(stored) => {
                *stored = assignments.to_vec();
                Ok(())
            }
        }
    }
}
