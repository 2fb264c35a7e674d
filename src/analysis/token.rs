//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows through the analysis pipeline and the
//! shape handed to downstream consumers such as the POS tagger. It keeps the
//! original text span next to the normalized form, so that orthography
//! conversion never loses track of where a word came from.
//!
//! # Core Types
//!
//! - [`Token`] - A single analyzed token with text, offsets and morphology
//! - [`TokenType`] - Classification of token content (word, number, punctuation)
//! - [`TokenFlags`] - Degradation markers (out of vocabulary, unstemmed, ...)
//! - [`TokenStream`] - Type alias for boxed iterator of tokens
//!
//! # Examples
//!
//! ```
//! use nahuatl_nlp::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("Nikoci", 0, 0, 6);
//! assert_eq!(token.text, "Nikoci");
//! assert_eq!(token.normalized, "Nikoci");
//! assert_eq!(token.token_type, TokenType::Word);
//! assert!(token.segmentation.is_none());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::morphology::segmentation::Segmentation;

/// A token represents a single unit of text after tokenization.
///
/// `text` and the offsets always describe the input as given; every filter
/// works on `normalized` instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text exactly as it appears in the input
    pub text: String,

    /// The normalized form (lowercased, orthography-converted)
    pub normalized: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Token type classification
    pub token_type: TokenType,

    /// Morpheme segmentation of `normalized`, if one was found
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segmentation: Option<Segmentation>,

    /// The stem; set by the stem filter for word tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stem: Option<String>,

    /// Degradation markers
    #[serde(default)]
    pub flags: TokenFlags,
}

/// Token type classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// A word unit, subject to segmentation
    Word,
    /// Digits
    Number,
    /// Punctuation marks and other symbols; never segmented
    Punctuation,
}

/// Flags recording how a token fell short of a full analysis.
///
/// None of these abort processing; they travel with the token instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenFlags {
    /// The word could not be segmented against the lexicon
    pub out_of_vocabulary: bool,

    /// The stem is the unchanged word, not a lexicon root
    pub unstemmed: bool,

    /// The normalized word contains characters outside the orthography
    pub invalid_characters: bool,
}

impl TokenType {
    /// Classify a tokenizer segment.
    pub fn detect(segment: &str) -> TokenType {
        if segment.chars().any(char::is_alphabetic) {
            TokenType::Word
        } else if segment.chars().any(char::is_numeric) {
            TokenType::Number
        } else {
            TokenType::Punctuation
        }
    }
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let end_offset = text.len();
        Self::with_offsets(text, position, 0, end_offset)
    }

    /// Create a new token with text, position, and byte offsets.
    ///
    /// The token type is detected from the text.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        let text = text.into();
        Token {
            normalized: text.clone(),
            token_type: TokenType::detect(&text),
            text,
            position,
            start_offset,
            end_offset,
            segmentation: None,
            stem: None,
            flags: TokenFlags::default(),
        }
    }

    /// Override the detected token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Set the normalized form.
    pub fn with_normalized<S: Into<String>>(mut self, normalized: S) -> Self {
        self.normalized = normalized.into();
        self
    }

    /// Whether this token is a word unit.
    pub fn is_word(&self) -> bool {
        self.token_type == TokenType::Word
    }

    /// Whether a segmentation was found for this token.
    pub fn is_segmented(&self) -> bool {
        self.segmentation.is_some()
    }

    /// Whether this is a word for which no segmentation was found.
    pub fn is_unsegmented_word(&self) -> bool {
        self.is_word() && self.segmentation.is_none()
    }

    /// The morphemes of the segmentation, or the whole normalized form.
    pub fn morphemes(&self) -> Vec<&str> {
        match &self.segmentation {
            Some(segmentation) => segmentation.morphemes(),
            None => vec![self.normalized.as_str()],
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
