//! Word timing data for one narration

use serde::{Deserialize, Serialize};

use super::filter::{self, DisplayToken};
use crate::{Error, Result};

/// Word-level timing data as the speech service returns it: three parallel
/// arrays where `words[i]` spans
/// `word_start_time_seconds[i]..=word_end_time_seconds[i]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordAlignment {
    pub words: Vec<String>,
    pub word_start_time_seconds: Vec<f64>,
    pub word_end_time_seconds: Vec<f64>,
}

/// One timed token from the speech service.
///
/// The raw text may still contain markup brackets. Position in the owning
/// sequence is the source index; insertion order is chronological order.
#[derive(Debug, Clone, PartialEq)]
pub struct TimestampEntry {
    pub word: String,
    pub start_seconds: f64,
    pub end_seconds: f64,
}

/// Validated, immutable timing data for one narration, plus the derived
/// display-token mapping.
///
/// Created once per generated narration and discarded wholesale when a new
/// one replaces it.
#[derive(Debug, Clone)]
pub struct WordTimeline {
    entries: Vec<TimestampEntry>,
    display: Vec<DisplayToken>,
    display_for_source: Vec<Option<usize>>,
}

impl WordTimeline {
    /// Build a timeline from the speech service's parallel-array shape.
    ///
    /// # Errors
    ///
    /// Fails on mismatched array lengths or on the interval violations
    /// checked by [`WordTimeline::from_entries`]. Malformed timing data is a
    /// contract violation by the speech service and must not silently
    /// mis-highlight.
    pub fn new(alignment: &WordAlignment) -> Result<Self> {
        let n = alignment.words.len();
        if alignment.word_start_time_seconds.len() != n
            || alignment.word_end_time_seconds.len() != n
        {
            return Err(Error::Timestamps(format!(
                "parallel arrays disagree: {n} words, {} start times, {} end times",
                alignment.word_start_time_seconds.len(),
                alignment.word_end_time_seconds.len()
            )));
        }

        let entries = alignment
            .words
            .iter()
            .zip(&alignment.word_start_time_seconds)
            .zip(&alignment.word_end_time_seconds)
            .map(|((word, &start), &end)| TimestampEntry {
                word: word.clone(),
                start_seconds: start,
                end_seconds: end,
            })
            .collect();

        Self::from_entries(entries)
    }

    /// Build a timeline from already-shaped entries.
    ///
    /// An empty sequence is valid: narration text and audio can stand on
    /// their own, the session just reports highlighting as unavailable.
    ///
    /// # Errors
    ///
    /// Fails on negative start times, intervals that end before they start,
    /// or start times that go backward.
    pub fn from_entries(entries: Vec<TimestampEntry>) -> Result<Self> {
        for (i, entry) in entries.iter().enumerate() {
            if entry.start_seconds < 0.0 {
                return Err(Error::Timestamps(format!(
                    "entry {i} has negative start time {}",
                    entry.start_seconds
                )));
            }
            if entry.end_seconds < entry.start_seconds {
                return Err(Error::Timestamps(format!(
                    "entry {i} ends at {} before it starts at {}",
                    entry.end_seconds, entry.start_seconds
                )));
            }
            if i > 0 && entry.start_seconds < entries[i - 1].start_seconds {
                return Err(Error::Timestamps(format!(
                    "entry {i} starts at {} before entry {} at {}",
                    entry.start_seconds,
                    i - 1,
                    entries[i - 1].start_seconds
                )));
            }
        }

        let display = filter::build_display_index(&entries);
        let mut display_for_source = vec![None; entries.len()];
        for token in &display {
            display_for_source[token.source_index] = Some(token.display_index);
        }

        Ok(Self {
            entries,
            display,
            display_for_source,
        })
    }

    /// Raw timestamp entries in source order
    #[must_use]
    pub fn entries(&self) -> &[TimestampEntry] {
        &self.entries
    }

    /// Renderable word sequence, markup-only entries skipped
    #[must_use]
    pub fn display_tokens(&self) -> &[DisplayToken] {
        &self.display
    }

    /// Translate a source index to its display index, if the entry survived
    /// filtering
    #[must_use]
    pub fn display_index(&self, source_index: usize) -> Option<usize> {
        self.display_for_source.get(source_index).copied().flatten()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_deserializes_camel_case() {
        let json = r#"{
            "words": ["hi", "there"],
            "wordStartTimeSeconds": [0.0, 0.5],
            "wordEndTimeSeconds": [0.4, 0.9]
        }"#;
        let alignment: WordAlignment = serde_json::from_str(json).unwrap();
        assert_eq!(alignment.words.len(), 2);

        let timeline = WordTimeline::new(&alignment).unwrap();
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline.display_tokens().len(), 2);
    }

    #[test]
    fn test_display_mapping_is_partial() {
        let timeline = WordTimeline::from_entries(vec![
            TimestampEntry {
                word: "[sigh]".into(),
                start_seconds: 0.0,
                end_seconds: 0.2,
            },
            TimestampEntry {
                word: "word".into(),
                start_seconds: 0.2,
                end_seconds: 0.6,
            },
        ])
        .unwrap();

        assert_eq!(timeline.display_index(0), None);
        assert_eq!(timeline.display_index(1), Some(0));
        assert_eq!(timeline.display_index(7), None);
    }
}
