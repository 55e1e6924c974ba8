//! Configuration for the karaoke gateway
//!
//! Credentials come from the environment; the original deployment refuses
//! to start without them, and so does this one.

use std::path::PathBuf;

use crate::{Error, Result};

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Inworld TTS API key, used verbatim in the Basic auth header
    pub api_key: String,

    /// Inworld JWT key/secret pair for LLM calls
    pub jwt_key: String,
    pub jwt_secret: String,

    /// Port to listen on
    pub port: u16,

    /// Static web root; generated audio goes under `<static_dir>/audio`
    pub static_dir: PathBuf,
}

impl Config {
    /// Load configuration, reading credentials from the environment.
    ///
    /// # Errors
    ///
    /// Fails when any of `INWORLD_API_KEY`, `INWORLD_JWT_KEY`, or
    /// `INWORLD_JWT_SECRET` is missing.
    pub fn load(port: u16, static_dir: PathBuf) -> Result<Self> {
        Ok(Self {
            api_key: required("INWORLD_API_KEY")?,
            jwt_key: required("INWORLD_JWT_KEY")?,
            jwt_secret: required("INWORLD_JWT_SECRET")?,
            port,
            static_dir,
        })
    }

    /// Directory generated audio files are written to
    #[must_use]
    pub fn audio_dir(&self) -> PathBuf {
        self.static_dir.join("audio")
    }
}

fn required(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| Error::Config(format!("{name} must be set")))
}
