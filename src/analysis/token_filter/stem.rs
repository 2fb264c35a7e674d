//! Stemming filter.

use std::fmt;
use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::morphology::stemmer::Stemmer;

/// Sets the stem of every word token.
///
/// A segmented token takes the stem of its segmentation. A word that is out
/// of vocabulary or has invalid characters keeps its normalized form and is
/// flagged `unstemmed`. Anything else is handed to the stemmer.
#[derive(Clone)]
pub struct StemFilter {
    stemmer: Arc<dyn Stemmer>,
}

impl StemFilter {
    pub fn new(stemmer: Arc<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }
}

impl fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stemmer = Arc::clone(&self.stemmer);
        Ok(Box::new(tokens.map(move |mut token| {
            if !token.is_word() {
                return token;
            }

            if let Some(segmentation) = &token.segmentation {
                token.stem = Some(segmentation.stem().to_string());
            } else if token.flags.out_of_vocabulary || token.flags.invalid_characters {
                token.stem = Some(token.normalized.clone());
                token.flags.unstemmed = true;
            } else {
                let stem = stemmer.stem(&token.normalized);
                token.flags.unstemmed = !stem.is_stemmed();
                token.stem = Some(stem.into_string());
            }
            token
        })))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;
    use crate::morphology::lexicon::{Lexicon, MorphemeClass};
    use crate::morphology::segmenter::Segmenter;
    use crate::morphology::stemmer::LexiconStemmer;

    #[test]
    fn test_stem_filter() {
        let lexicon = Lexicon::from_entries([
            ("ni", MorphemeClass::Prefix),
            ("koci", MorphemeClass::Root),
        ])
        .unwrap();
        let segmenter = Arc::new(Segmenter::new(Arc::new(lexicon)));
        let filter = StemFilter::new(Arc::new(LexiconStemmer::new(segmenter)));

        let mut oov = Token::new("xyz", 1);
        oov.flags.out_of_vocabulary = true;
        let tokens = vec![Token::new("nikoci", 0), oov, Token::new(",", 2)];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result[0].stem.as_deref(), Some("koci"));
        assert!(!result[0].flags.unstemmed);
        assert_eq!(result[1].stem.as_deref(), Some("xyz"));
        assert!(result[1].flags.unstemmed);
        assert_eq!(result[2].stem, None);
    }
}
