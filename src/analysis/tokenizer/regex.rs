//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{NahuatlError, Result};

/// Words, numbers, or any single other non-space character.
pub const DEFAULT_TOKEN_PATTERN: &str = r"[\p{L}\p{M}]+|\p{N}+(?:[.,]\p{N}+)*|[^\s\p{L}\p{M}\p{N}]";

/// A tokenizer that emits every non-empty match of a regular expression.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with [`DEFAULT_TOKEN_PATTERN`].
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_TOKEN_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| NahuatlError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(RegexTokens {
            pattern: Arc::clone(&self.pattern),
            text: Arc::from(text),
            offset: 0,
            position: 0,
        }))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

struct RegexTokens {
    pattern: Arc<Regex>,
    text: Arc<str>,
    offset: usize,
    position: usize,
}

impl Iterator for RegexTokens {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while self.offset <= self.text.len() {
            let mat = self.pattern.find_at(&self.text, self.offset)?;

            if mat.is_empty() {
                // step over one character so the search makes progress
                self.offset = self.text[mat.end()..]
                    .chars()
                    .next()
                    .map_or(self.text.len() + 1, |c| mat.end() + c.len_utf8());
                continue;
            }

            self.offset = mat.end();
            let token = Token::with_offsets(mat.as_str(), self.position, mat.start(), mat.end());
            self.position += 1;
            return Some(token);
        }
        None
    }
}
