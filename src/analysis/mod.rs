//! Text analysis: tokenization, orthography normalization and the token
//! filters that attach segmentations and stems.
//!
//! The usual entry point is [`NahuatlAnalyzer`](analyzer::NahuatlAnalyzer),
//! which assembles the full pipeline from an
//! [`AnalyzerConfig`](crate::config::AnalyzerConfig).

pub mod analyzer;
pub mod char_filter;
pub mod orthography;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, NahuatlAnalyzer, PipelineAnalyzer};
pub use orthography::{Alphabet, Orthography, OrthographyPreset};
pub use token::{Token, TokenFlags, TokenStream, TokenType};
