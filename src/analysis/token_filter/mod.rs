//! Token filter implementations for token transformation.
//!
//! Filters take a token stream and return a new one. All filters here are
//! lazy maps over the incoming stream, except the alphabet filter under the
//! reject policy, which has to see the whole text before it can fail.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Lowercases the normalized form
//! - [`orthography::OrthographyFilter`] - Converts words into the canonical orthography
//! - [`alphabet::AlphabetFilter`] - Flags or rejects characters outside the alphabet
//! - [`segment::SegmentFilter`] - Attaches a morpheme segmentation
//! - [`stem::StemFilter`] - Attaches the stem
//! - [`remove_unsegmented::RemoveUnsegmentedFilter`] - Drops words without a segmentation
//!
//! # Examples
//!
//! ```
//! use nahuatl_nlp::analysis::token::Token;
//! use nahuatl_nlp::analysis::token_filter::Filter;
//! use nahuatl_nlp::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Nikoci", 0), Token::new("KalLi", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].normalized, "nikoci");
//! assert_eq!(filtered[1].normalized, "kalLi");
//! assert_eq!(filtered[1].text, "KalLi");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod alphabet;
pub mod lowercase;
pub mod orthography;
pub mod remove_unsegmented;
pub mod segment;
pub mod stem;

pub use alphabet::{AlphabetFilter, InvalidCharacterPolicy};
pub use lowercase::LowercaseFilter;
pub use orthography::OrthographyFilter;
pub use remove_unsegmented::RemoveUnsegmentedFilter;
pub use segment::SegmentFilter;
pub use stem::StemFilter;
