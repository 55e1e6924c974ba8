//! Per-narration playback session
//!
//! Owns the mutable highlight state the host drives from playback events:
//! position updates, play/pause, end-of-media, restart. One session lives
//! exactly as long as one generated narration.

use super::resolver::{HighlightFrame, HighlightResolver};
use super::timeline::WordTimeline;

/// Visual state of one display token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordState {
    /// Not reached yet
    #[default]
    Pending,
    /// Being spoken right now; at most one token holds this at a time
    Current,
    /// Already passed during playback
    Spoken,
}

/// Playback-synchronized highlight state for one narration
#[derive(Debug)]
pub struct NarrationSession {
    timeline: WordTimeline,
    resolver: HighlightResolver,
    states: Vec<WordState>,
    playing: bool,
}

impl NarrationSession {
    #[must_use]
    pub fn new(timeline: WordTimeline) -> Self {
        let states = vec![WordState::Pending; timeline.display_tokens().len()];
        Self {
            timeline,
            resolver: HighlightResolver::new(),
            states,
            playing: false,
        }
    }

    /// Whether word-level highlighting can be offered for this narration.
    ///
    /// False when the speech service sent no usable timing data; the host
    /// can still play the audio and may want to show a warning.
    #[must_use]
    pub fn highlighting_available(&self) -> bool {
        !self.timeline.is_empty()
    }

    #[must_use]
    pub fn timeline(&self) -> &WordTimeline {
        &self.timeline
    }

    /// Visual state per display token, index-aligned with
    /// [`WordTimeline::display_tokens`]
    #[must_use]
    pub fn word_states(&self) -> &[WordState] {
        &self.states
    }

    /// Source index of the word last resolved as current
    #[must_use]
    pub const fn current_source_index(&self) -> Option<usize> {
        self.resolver.current()
    }

    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn on_play(&mut self) {
        self.playing = true;
    }

    pub fn on_pause(&mut self) {
        self.playing = false;
    }

    /// Apply one playback position update.
    ///
    /// Returns the frame when the highlight moved, `None` when nothing
    /// changed. Out-of-range positions (negative, or past the last entry)
    /// fall through the resolver's cascade and never panic.
    pub fn on_time_update(&mut self, current_time: f64) -> Option<HighlightFrame> {
        let frame = self.resolver.resolve(current_time, &self.timeline)?;
        self.apply(frame);
        Some(frame)
    }

    /// End-of-media: every display token becomes spoken and no token stays
    /// current, regardless of where resolution had gotten to.
    pub fn on_ended(&mut self) {
        self.playing = false;
        for state in &mut self.states {
            *state = WordState::Spoken;
        }
    }

    /// Restart or seek-to-zero: clear every marking and the resolved
    /// position; the next time update re-establishes state from scratch.
    pub fn restart(&mut self) {
        self.resolver.reset();
        for state in &mut self.states {
            *state = WordState::Pending;
        }
    }

    /// Drop the previous current marking, mark the new target, and mark
    /// everything before it as spoken.
    fn apply(&mut self, frame: HighlightFrame) {
        for state in &mut self.states {
            if *state == WordState::Current {
                *state = WordState::Pending;
            }
        }
        if let Some(display) = frame.display_index {
            for state in &mut self.states[..display] {
                *state = WordState::Spoken;
            }
            self.states[display] = WordState::Current;
        }
    }
}
