//! Stemming on top of segmentation.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::morphology::segmenter::Segmenter;

/// The result of stemming a word.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Stem {
    /// The stem morpheme of a segmented word
    Stemmed(String),
    /// The word itself; no segmentation was found
    Unstemmed(String),
}

impl Stem {
    pub fn as_str(&self) -> &str {
        match self {
            Stem::Stemmed(stem) | Stem::Unstemmed(stem) => stem,
        }
    }

    pub fn is_stemmed(&self) -> bool {
        matches!(self, Stem::Stemmed(_))
    }

    pub fn into_string(self) -> String {
        match self {
            Stem::Stemmed(stem) | Stem::Unstemmed(stem) => stem,
        }
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Reduce a normalized word to its stem.
    fn stem(&self, word: &str) -> Stem;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// Stemmer that takes the root span of the word's segmentation.
#[derive(Clone, Debug)]
pub struct LexiconStemmer {
    segmenter: Arc<Segmenter>,
}

impl LexiconStemmer {
    pub fn new(segmenter: Arc<Segmenter>) -> Self {
        LexiconStemmer { segmenter }
    }

    pub fn segmenter(&self) -> &Arc<Segmenter> {
        &self.segmenter
    }
}

impl Stemmer for LexiconStemmer {
    fn stem(&self, word: &str) -> Stem {
        match self.segmenter.segment(word) {
            Ok(segmentation) => Stem::Stemmed(segmentation.stem().to_string()),
            Err(_) => Stem::Unstemmed(word.to_string()),
        }
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}
