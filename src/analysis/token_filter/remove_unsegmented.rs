//! Filter dropping words without a segmentation.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Removes word tokens that carry no segmentation.
///
/// Numbers and punctuation are never segmented and always pass. Positions
/// of the remaining tokens are left as they were.
#[derive(Clone, Debug, Default)]
pub struct RemoveUnsegmentedFilter;

impl RemoveUnsegmentedFilter {
    pub fn new() -> Self {
        RemoveUnsegmentedFilter
    }
}

impl Filter for RemoveUnsegmentedFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(
            tokens.filter(|token| !token.is_unsegmented_word()),
        ))
    }

    fn name(&self) -> &'static str {
        "remove_unsegmented"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;
    use crate::morphology::lexicon::{Lexicon, MorphemeClass};
    use crate::morphology::segmenter::Segmenter;
    use std::sync::Arc;

    #[test]
    fn test_remove_unsegmented() {
        let lexicon = Lexicon::from_entries([("kal", MorphemeClass::Root)]).unwrap();
        let segmenter = Segmenter::new(Arc::new(lexicon));

        let mut kal = Token::new("kal", 0);
        kal.segmentation = segmenter.segment("kal").ok();
        let tokens = vec![
            kal,
            Token::new("xyz", 1),
            Token::new("12", 2),
            Token::new("!", 3),
        ];

        let result: Vec<Token> = RemoveUnsegmentedFilter::new()
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        let positions: Vec<usize> = result.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 2, 3]);
    }
}
