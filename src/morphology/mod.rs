//! Morphology: the lexicon, segmentation and stemming.
//!
//! Everything here works on words already in the canonical orthography (see
//! [`crate::analysis::orthography`]).

pub mod lexicon;
pub mod segmentation;
pub mod segmenter;
pub mod stemmer;

pub use lexicon::{Lexicon, LexiconBuilder, LexiconEntry, LexiconStats, MorphemeClass};
pub use segmentation::{MorphemeSpan, NoSegmentation, Segmentation};
pub use segmenter::{DEFAULT_MAX_SEARCH_STEPS, Segmenter};
pub use stemmer::{LexiconStemmer, Stem, Stemmer};
