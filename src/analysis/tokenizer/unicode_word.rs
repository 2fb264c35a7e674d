//! Unicode word tokenizer implementation.
//!
//! Splits text on Unicode word boundaries (UAX #29). Whitespace is dropped;
//! every punctuation mark becomes its own token, so the output can be laid
//! back over the input.
//!
//! UAX #29 keeps `kali.tepe`, `kali:tepe`, `ni'koci` and `kali2` together as
//! one word. Such segments are split again into runs of letters, runs of
//! digits, and single punctuation characters.
//!
//! # Examples
//!
//! ```
//! use nahuatl_nlp::analysis::token::TokenType;
//! use nahuatl_nlp::analysis::tokenizer::Tokenizer;
//! use nahuatl_nlp::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Nikoci, nimiki.").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[0].text, "Nikoci");
//! assert_eq!(tokens[1].token_type, TokenType::Punctuation);
//! assert_eq!(tokens[2].start_offset, 8);
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(WordBoundTokens {
            text: Arc::from(text),
            offset: 0,
            position: 0,
            pending: VecDeque::new(),
        }))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}

/// Lazy token iterator over an owned copy of the input.
struct WordBoundTokens {
    text: Arc<str>,
    offset: usize,
    position: usize,
    pending: VecDeque<(usize, usize)>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum CharRun {
    Letter,
    Digit,
    Other,
}

impl CharRun {
    fn of(c: char) -> Self {
        if c.is_alphabetic() || unicode_normalization::char::is_combining_mark(c) {
            CharRun::Letter
        } else if c.is_numeric() {
            CharRun::Digit
        } else {
            CharRun::Other
        }
    }
}

/// Byte ranges of the letter runs, digit runs and single other characters
/// inside a word segment.
fn split_word_segment(segment: &str, base: usize) -> VecDeque<(usize, usize)> {
    let mut pieces = VecDeque::new();
    let mut current: Option<(CharRun, usize)> = None;

    for (index, c) in segment.char_indices() {
        let run = CharRun::of(c);
        match current {
            Some((kind, _)) if kind == run && run != CharRun::Other => {}
            Some((_, start)) => {
                pieces.push_back((base + start, base + index));
                current = Some((run, index));
            }
            None => current = Some((run, index)),
        }
    }
    if let Some((_, start)) = current {
        pieces.push_back((base + start, base + segment.len()));
    }
    pieces.retain(|&(start, end)| !segment[start - base..end - base].trim().is_empty());
    pieces
}

impl Iterator for WordBoundTokens {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some((start, end)) = self.pending.pop_front() {
                let token =
                    Token::with_offsets(&self.text[start..end], self.position, start, end);
                self.position += 1;
                return Some(token);
            }

            let rest = &self.text[self.offset..];
            let (index, segment) = rest.split_word_bound_indices().next()?;
            let start = self.offset + index;
            let end = start + segment.len();
            self.offset = end;

            if segment.chars().all(char::is_whitespace) {
                continue;
            }

            if TokenType::detect(segment) == TokenType::Word
                && !segment.chars().all(|c| CharRun::of(c) == CharRun::Letter)
            {
                self.pending = split_word_segment(segment, start);
                continue;
            }

            let token = Token::with_offsets(segment, self.position, start, end);
            self.position += 1;
            return Some(token);
        }
    }
}
