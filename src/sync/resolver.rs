//! Highlight resolution
//!
//! Maps a playback position onto the word that should be visually current.
//! Position updates fire many times per second, so the resolver answers
//! with a frame only when the target actually moved.

use super::timeline::WordTimeline;

/// Resolved highlight target for one playback position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightFrame {
    /// Source index of the entry now current
    pub source_index: usize,
    /// Display index of the same entry; `None` when the token was filtered
    /// out, in which case no word is shown as current but the source index
    /// is still tracked
    pub display_index: Option<usize>,
}

/// Sequential highlight state for one narration.
///
/// Invocations are never concurrent: the host delivers position updates one
/// at a time and each resolve is a fast synchronous computation.
#[derive(Debug, Default)]
pub struct HighlightResolver {
    current: Option<usize>,
}

impl HighlightResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last resolved source index, `None` before the first match or after a
    /// reset
    #[must_use]
    pub const fn current(&self) -> Option<usize> {
        self.current
    }

    /// Resolve the playback position against the timeline.
    ///
    /// Returns `Some` only when the target changed since the previous call;
    /// an unchanged target is an idempotent no-op so the host never repaints
    /// on redundant ticks. Entries must already be sorted by start time;
    /// the resolver does not re-sort (the timeline validates on
    /// construction).
    pub fn resolve(&mut self, current_time: f64, timeline: &WordTimeline) -> Option<HighlightFrame> {
        let target = Self::target_source_index(current_time, timeline)?;
        if self.current == Some(target) {
            return None;
        }
        self.current = Some(target);
        Some(HighlightFrame {
            source_index: target,
            display_index: timeline.display_index(target),
        })
    }

    /// Forget the resolved position so the next resolve starts from scratch
    pub fn reset(&mut self) {
        self.current = None;
    }

    /// The rule cascade: an entry whose interval contains the position wins
    /// outright (boundaries inclusive, so zero-duration entries still
    /// match); otherwise an entry already started keeps the highlight
    /// through the silence before the next start; otherwise any positive
    /// position falls back to the first word.
    ///
    /// The fallback covers startup jitter, but on gapped or malformed data
    /// it can jump the highlight backward to word zero. Kept to match the
    /// shipped behavior.
    fn target_source_index(current_time: f64, timeline: &WordTimeline) -> Option<usize> {
        let entries = timeline.entries();

        for (i, entry) in entries.iter().enumerate() {
            if current_time >= entry.start_seconds && current_time <= entry.end_seconds {
                return Some(i);
            }
            if current_time >= entry.start_seconds {
                let next_start = entries
                    .get(i + 1)
                    .map_or(f64::INFINITY, |next| next.start_seconds);
                if current_time < next_start {
                    return Some(i);
                }
            }
        }

        if current_time > 0.0 && !entries.is_empty() {
            return Some(0);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::timeline::TimestampEntry;

    fn timeline(spans: &[(&str, f64, f64)]) -> WordTimeline {
        let entries = spans
            .iter()
            .map(|&(word, start, end)| TimestampEntry {
                word: word.to_string(),
                start_seconds: start,
                end_seconds: end,
            })
            .collect();
        WordTimeline::from_entries(entries).unwrap()
    }

    #[test]
    fn test_first_match_wins() {
        let tl = timeline(&[("a", 0.0, 1.0), ("b", 1.0, 2.0)]);
        let mut resolver = HighlightResolver::new();

        // 1.0 is inside both [0,1] and [1,2]; the earlier entry wins.
        let frame = resolver.resolve(1.0, &tl).unwrap();
        assert_eq!(frame.source_index, 0);
    }

    #[test]
    fn test_resolve_tracks_filtered_source() {
        let tl = timeline(&[("[laugh]", 0.0, 0.5), ("word", 0.5, 1.0)]);
        let mut resolver = HighlightResolver::new();

        let frame = resolver.resolve(0.2, &tl).unwrap();
        assert_eq!(frame.source_index, 0);
        assert_eq!(frame.display_index, None);
        assert_eq!(resolver.current(), Some(0));

        let frame = resolver.resolve(0.7, &tl).unwrap();
        assert_eq!(frame.source_index, 1);
        assert_eq!(frame.display_index, Some(0));
    }

    #[test]
    fn test_empty_timeline_never_resolves() {
        let tl = timeline(&[]);
        let mut resolver = HighlightResolver::new();

        assert!(resolver.resolve(0.0, &tl).is_none());
        assert!(resolver.resolve(5.0, &tl).is_none());
        assert_eq!(resolver.current(), None);
    }
}
