//! Word-synchronization engine
//!
//! The deterministic core of the gateway: given a playback position and the
//! word time intervals the speech service returned, decide which displayed
//! word is current and which are already spoken. Everything here is
//! synchronous, allocation-light, and free of I/O; the HTTP layer and the
//! host's playback events drive it from outside.
//!
//! - [`filter`] normalizes raw transcript tokens for display
//! - [`timeline`] validates timing data and derives the display mapping
//! - [`resolver`] turns a position into the current-word target
//! - [`session`] tracks per-narration visual state across playback events

pub mod filter;
pub mod resolver;
pub mod session;
pub mod timeline;

pub use filter::{DisplayToken, build_display_index, filter_markup, is_punctuation_leading};
pub use resolver::{HighlightFrame, HighlightResolver};
pub use session::{NarrationSession, WordState};
pub use timeline::{TimestampEntry, WordAlignment, WordTimeline};
