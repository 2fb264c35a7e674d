//! Tokenizers that split raw text into word, number and punctuation tokens.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// Tokens carry byte offsets into `text` and are produced lazily in text
/// order.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;
pub mod unicode_word;

pub use regex::RegexTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
