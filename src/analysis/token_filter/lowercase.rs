//! Lowercase filter implementation.

use crate::analysis::orthography::Alphabet;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that lowercases the normalized form of every token.
///
/// Uppercase letters that belong to the alphabet are kept: the canonical
/// orthography writes /tɬ/ as `L`, and lowercasing it would turn it into a
/// different phoneme. A word written entirely in capitals carries no case
/// distinction, so it is lowercased in full.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter {
    alphabet: Alphabet,
}

impl LowercaseFilter {
    /// Create a lowercase filter that keeps the canonical `L`.
    pub fn new() -> Self {
        LowercaseFilter {
            alphabet: Alphabet::canonical(),
        }
    }

    /// Create a lowercase filter that keeps the letters of `alphabet`.
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        LowercaseFilter { alphabet }
    }

    fn lowercase(&self, text: &str) -> String {
        if is_all_caps(text) {
            return text.to_lowercase();
        }

        let mut output = String::with_capacity(text.len());
        for c in text.chars() {
            if self.alphabet.contains(c) {
                output.push(c);
            } else {
                output.extend(c.to_lowercase());
            }
        }
        output
    }
}

/// More than one letter and none of them lowercase.
fn is_all_caps(text: &str) -> bool {
    text.chars().filter(|c| c.is_alphabetic()).count() > 1 && !text.chars().any(char::is_lowercase)
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filter = self.clone();
        Ok(Box::new(tokens.map(move |mut token| {
            token.normalized = filter.lowercase(&token.normalized);
            token
        })))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
