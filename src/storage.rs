//! Saved narration audio
//!
//! Generated audio lands under the static web root so the `/audio/<file>`
//! URL handed back to the client is served by the same file service.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Writes generated audio files into the public audio directory
#[derive(Debug, Clone)]
pub struct AudioStore {
    dir: PathBuf,
}

impl AudioStore {
    /// Open a store, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            Error::Storage(format!(
                "failed to create audio directory {}: {e}",
                dir.display()
            ))
        })?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write OGG audio bytes under a timestamped name, returning the public
    /// URL path for the file.
    pub fn save(&self, audio: &[u8]) -> Result<String> {
        let file_name = format!("audio_{}.ogg", chrono::Utc::now().timestamp_millis());
        let path = self.dir.join(&file_name);

        std::fs::write(&path, audio)
            .map_err(|e| Error::Storage(format!("failed to write {}: {e}", path.display())))?;

        tracing::debug!(path = %path.display(), bytes = audio.len(), "saved narration audio");
        Ok(format!("/audio/{file_name}"))
    }
}
