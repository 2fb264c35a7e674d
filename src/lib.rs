//! # nahuatl-nlp
//!
//! Morphological analysis for Nahuatl text written in a one-to-one
//! phoneme/grapheme orthography.
//!
//! ## Features
//!
//! - Lexicon of prefixes, roots, suffixes and particles loaded from wordlists
//! - Dictionary-guided segmentation with backtracking
//! - Lexicon-backed stemming
//! - Orthography conversion from modern and classical spellings
//! - A lazy tokenization pipeline and a rule-based part-of-speech tagger
//! - Verb glosses: person, number, negation, tense, object and direction
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use nahuatl_nlp::prelude::*;
//!
//! let lexicon = Lexicon::builder()
//!     .add_builtin_affixes()
//!     .unwrap()
//!     .add_sample_roots()
//!     .unwrap()
//!     .build();
//! let analyzer = NahuatlAnalyzer::new(Arc::new(lexicon)).unwrap();
//!
//! let tokens: Vec<Token> = analyzer.tokenize("Nikoci kalLi").unwrap().collect();
//! assert_eq!(tokens[0].stem.as_deref(), Some("koci"));
//! assert_eq!(tokens[1].morphemes(), vec!["kal", "Li"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod gloss;
pub mod morphology;
pub mod tagger;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, NahuatlAnalyzer};
    pub use crate::analysis::orthography::{Alphabet, Orthography, OrthographyPreset};
    pub use crate::analysis::token::{Token, TokenFlags, TokenType};
    pub use crate::config::{AnalyzerConfig, InvalidCharacterPolicy};
    pub use crate::error::{LoadError, NahuatlError, Result};
    pub use crate::gloss::{Direction, Glosser, VerbGloss, VerbObject, WordGloss};
    pub use crate::morphology::{
        Lexicon, LexiconBuilder, LexiconEntry, MorphemeClass, NoSegmentation, Segmentation,
        Segmenter, Stem, Stemmer,
    };
    pub use crate::tagger::{PosTag, PosTagger, RuleBasedTagger};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
