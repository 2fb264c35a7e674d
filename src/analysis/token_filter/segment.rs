//! Segmentation filter.

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::morphology::segmenter::Segmenter;

/// Attaches a morpheme segmentation to every word token.
///
/// Words that fail to segment are flagged `out_of_vocabulary` and passed on.
/// Words already flagged with invalid characters are left alone.
#[derive(Clone, Debug)]
pub struct SegmentFilter {
    segmenter: Arc<Segmenter>,
}

impl SegmentFilter {
    pub fn new(segmenter: Arc<Segmenter>) -> Self {
        SegmentFilter { segmenter }
    }
}

impl Filter for SegmentFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let segmenter = Arc::clone(&self.segmenter);
        Ok(Box::new(tokens.map(move |mut token| {
            if !token.is_word() || token.flags.invalid_characters {
                return token;
            }
            match segmenter.segment(&token.normalized) {
                Ok(segmentation) => token.segmentation = Some(segmentation),
                Err(reason) => {
                    log::debug!("No segmentation for {:?}: {reason}", token.normalized);
                    token.flags.out_of_vocabulary = true;
                }
            }
            token
        })))
    }

    fn name(&self) -> &'static str {
        "segment"
    }
}
