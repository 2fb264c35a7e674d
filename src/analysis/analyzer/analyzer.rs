//! Core analyzer trait definition.
//!
//! An [`Analyzer`] turns raw text into a token stream:
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → ... → Filter N → Token Stream
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](super::pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains
//! - [`NahuatlAnalyzer`](super::nahuatl::NahuatlAnalyzer) - The configured Nahuatl pipeline
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use nahuatl_nlp::analysis::analyzer::analyzer::Analyzer;
//! use nahuatl_nlp::analysis::token::TokenStream;
//! use nahuatl_nlp::error::Result;
//!
//! struct EmptyAnalyzer;
//!
//! impl Analyzer for EmptyAnalyzer {
//!     fn analyze(&self, _text: &str) -> Result<TokenStream> {
//!         Ok(Box::new(std::iter::empty()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "empty"
//!     }
//! }
//!
//! assert_eq!(EmptyAnalyzer.analyze("kali").unwrap().count(), 0);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so that one analyzer can serve several
/// threads, as in batch analysis.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// Every call builds a fresh stream; analyzing the same text twice gives
    /// the same tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
