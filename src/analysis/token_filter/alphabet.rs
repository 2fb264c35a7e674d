//! Alphabet check filter.

use serde::{Deserialize, Serialize};

use crate::analysis::orthography::Alphabet;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::{NahuatlError, Result};

/// What to do with a word containing a character outside the alphabet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidCharacterPolicy {
    /// Keep the word, flag it, and leave it unsegmented
    #[default]
    PassThrough,
    /// Fail the whole text
    Reject,
}

/// Checks the normalized form of word tokens against an [`Alphabet`].
#[derive(Clone, Debug)]
pub struct AlphabetFilter {
    alphabet: Alphabet,
    policy: InvalidCharacterPolicy,
}

impl AlphabetFilter {
    pub fn new(alphabet: Alphabet, policy: InvalidCharacterPolicy) -> Self {
        AlphabetFilter { alphabet, policy }
    }

    pub fn policy(&self) -> InvalidCharacterPolicy {
        self.policy
    }

    fn check(alphabet: &Alphabet, mut token: Token) -> Token {
        if token.is_word() && !alphabet.is_valid(&token.normalized) {
            token.flags.invalid_characters = true;
        }
        token
    }
}

impl Filter for AlphabetFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        match self.policy {
            InvalidCharacterPolicy::PassThrough => {
                let alphabet = self.alphabet.clone();
                Ok(Box::new(
                    tokens.map(move |token| Self::check(&alphabet, token)),
                ))
            }
            InvalidCharacterPolicy::Reject => {
                let tokens: Vec<Token> = tokens.collect();
                for token in tokens.iter().filter(|token| token.is_word()) {
                    if let Some((offset, character)) = self.alphabet.first_invalid(&token.normalized)
                    {
                        return Err(NahuatlError::invalid_character(
                            token.normalized.clone(),
                            character,
                            offset,
                        ));
                    }
                }
                Ok(Box::new(tokens.into_iter()))
            }
        }
    }

    fn name(&self) -> &'static str {
        "alphabet"
    }
}
