//! Segmentation results.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::morphology::lexicon::{LexiconEntry, MorphemeClass};

/// A matched morpheme: a byte range of the word and the entry it matched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphemeSpan {
    pub start: usize,
    pub end: usize,
    #[serde(flatten)]
    pub entry: LexiconEntry,
}

impl MorphemeSpan {
    pub fn new(start: usize, end: usize, entry: LexiconEntry) -> Self {
        MorphemeSpan { start, end, entry }
    }

    pub fn text(&self) -> &str {
        &self.entry.surface
    }

    pub fn class(&self) -> MorphemeClass {
        self.entry.class
    }
}

/// A full partition of a word into morphemes with exactly one stem.
///
/// Spans are ordered, contiguous and cover the word, so joining their texts
/// gives the word back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segmentation {
    word: String,
    spans: Vec<MorphemeSpan>,
    stem_index: usize,
}

impl Segmentation {
    /// Assemble a segmentation from spans found by the segmenter.
    ///
    /// Returns `None` unless the spans tile `word` and exactly one of them is
    /// a stem.
    pub fn new<S: Into<String>>(word: S, spans: Vec<MorphemeSpan>) -> Option<Self> {
        let word = word.into();

        let mut offset = 0;
        for span in &spans {
            if span.start != offset
                || span.end <= span.start
                || word.get(span.start..span.end) != Some(span.text())
            {
                return None;
            }
            offset = span.end;
        }
        if offset != word.len() {
            return None;
        }

        let mut stems = spans
            .iter()
            .enumerate()
            .filter(|(_, span)| span.class().is_stem());
        let (stem_index, _) = stems.next()?;
        if stems.next().is_some() {
            return None;
        }

        Some(Segmentation {
            word,
            spans,
            stem_index,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn spans(&self) -> &[MorphemeSpan] {
        &self.spans
    }

    pub fn stem_span(&self) -> &MorphemeSpan {
        &self.spans[self.stem_index]
    }

    pub fn stem(&self) -> &str {
        self.stem_span().text()
    }

    pub fn prefixes(&self) -> &[MorphemeSpan] {
        &self.spans[..self.stem_index]
    }

    pub fn suffixes(&self) -> &[MorphemeSpan] {
        &self.spans[self.stem_index + 1..]
    }

    pub fn morphemes(&self) -> Vec<&str> {
        self.spans.iter().map(MorphemeSpan::text).collect()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Whether the span texts concatenate back to the word.
    pub fn is_lossless(&self) -> bool {
        self.morphemes().concat() == self.word
    }
}

impl fmt::Display for Segmentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.morphemes().join("-"))
    }
}

/// Why a word has no segmentation.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoSegmentation {
    /// No lexicon entry starts anywhere in the word
    #[error("out of vocabulary")]
    OutOfVocabulary,
    /// Entries match, but none of their combinations covers the word
    #[error("no complete segmentation")]
    Incomplete,
    /// The search gave up after its step budget
    #[error("search limit exceeded")]
    SearchLimitExceeded,
}
