//! Orthography conversion filter.

use std::fmt;
use std::sync::Arc;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::orthography::{Orthography, OrthographyPreset};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Rewrites the normalized form of word tokens with a [`CharFilter`],
/// normally an [`Orthography`].
///
/// Conversion runs per token, so the token's `text` and offsets keep
/// pointing at the input as written.
#[derive(Clone)]
pub struct OrthographyFilter {
    converter: Arc<dyn CharFilter>,
}

impl OrthographyFilter {
    pub fn new(converter: Arc<dyn CharFilter>) -> Self {
        OrthographyFilter { converter }
    }

    pub fn from_preset(preset: OrthographyPreset) -> Result<Self> {
        Ok(Self::new(Arc::new(Orthography::from_preset(preset)?)))
    }
}

impl fmt::Debug for OrthographyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrthographyFilter")
            .field("converter", &self.converter.name())
            .finish()
    }
}

impl Filter for OrthographyFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let converter = Arc::clone(&self.converter);
        Ok(Box::new(tokens.map(move |mut token| {
            if token.is_word() {
                token.normalized = converter.filter(&token.normalized);
            }
            token
        })))
    }

    fn name(&self) -> &'static str {
        "orthography"
    }
}
