//! Karaoke Gateway - narrated karaoke demo with word-level highlight sync
//!
//! This library provides the pieces behind the demo:
//! - The word-synchronization engine (markup filtering, display mapping,
//!   highlight resolution, per-narration playback sessions)
//! - Proxy endpoints for upstream text generation and speech synthesis
//! - Audio persistence under the static web root
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                  Web client                          │
//! │   playback events  │  word display  │  topic form   │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │               Karaoke Gateway                        │
//! │   sync engine  │  HTTP API  │  audio store          │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │             Inworld APIs                             │
//! │   LLM completions  │  TTS with word timestamps      │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod inworld;
pub mod storage;
pub mod sync;

pub use config::Config;
pub use error::{Error, Result};
pub use inworld::{ALLOWED_TOPICS, DEFAULT_VOICE, InworldClient, Voice};
pub use storage::AudioStore;
pub use sync::{
    DisplayToken, HighlightFrame, HighlightResolver, NarrationSession, TimestampEntry,
    WordAlignment, WordState, WordTimeline,
};
