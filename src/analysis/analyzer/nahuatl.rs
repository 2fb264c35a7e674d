//! The Nahuatl analysis pipeline.
//!
//! # Pipeline
//!
//! 1. [`UnicodeWordTokenizer`], or a [`RegexTokenizer`] when a token pattern
//!    is configured
//! 2. [`LowercaseFilter`] (when `lowercase` is set)
//! 3. [`OrthographyFilter`] (when `convert_orthography` is set; lowercases
//!    on its own)
//! 4. [`AlphabetFilter`]
//! 5. [`SegmentFilter`]
//! 6. [`StemFilter`]
//! 7. [`RemoveUnsegmentedFilter`] (when `keep_unsegmented` is unset)
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use nahuatl_nlp::analysis::analyzer::nahuatl::NahuatlAnalyzer;
//! use nahuatl_nlp::morphology::lexicon::Lexicon;
//!
//! let lexicon = Lexicon::builder()
//!     .add_builtin_affixes()
//!     .unwrap()
//!     .add_sample_roots()
//!     .unwrap()
//!     .build();
//! let analyzer = NahuatlAnalyzer::new(Arc::new(lexicon)).unwrap();
//!
//! let tokens: Vec<_> = analyzer.tokenize("Nikoci.").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].stem.as_deref(), Some("koci"));
//! assert_eq!(tokens[0].morphemes(), vec!["ni", "koci"]);
//! ```

use std::sync::Arc;

use rayon::prelude::*;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::{
    AlphabetFilter, LowercaseFilter, OrthographyFilter, RemoveUnsegmentedFilter, SegmentFilter,
    StemFilter,
};
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer, UnicodeWordTokenizer};
use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::morphology::lexicon::Lexicon;
use crate::morphology::segmenter::Segmenter;
use crate::morphology::stemmer::LexiconStemmer;

/// Tokenizes, normalizes, segments and stems Nahuatl text.
#[derive(Clone, Debug)]
pub struct NahuatlAnalyzer {
    inner: PipelineAnalyzer,
    segmenter: Arc<Segmenter>,
    config: AnalyzerConfig,
}

impl NahuatlAnalyzer {
    /// Create an analyzer with the default configuration.
    pub fn new(lexicon: Arc<Lexicon>) -> Result<Self> {
        Self::with_config(lexicon, AnalyzerConfig::default())
    }

    pub fn with_config(lexicon: Arc<Lexicon>, config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        let alphabet = config.alphabet()?;

        let tokenizer: Arc<dyn Tokenizer> = match &config.token_pattern {
            Some(pattern) => Arc::new(RegexTokenizer::with_pattern(pattern)?),
            None => Arc::new(UnicodeWordTokenizer::new()),
        };
        let segmenter =
            Arc::new(Segmenter::new(lexicon).with_max_search_steps(config.max_search_steps));

        let mut inner = PipelineAnalyzer::new(tokenizer).with_name("nahuatl");
        if config.lowercase {
            inner = inner.add_filter(Arc::new(LowercaseFilter::with_alphabet(alphabet.clone())));
        }
        if config.convert_orthography {
            inner = inner.add_filter(Arc::new(OrthographyFilter::from_preset(
                config.orthography,
            )?));
        }
        inner = inner
            .add_filter(Arc::new(AlphabetFilter::new(
                alphabet,
                config.invalid_characters,
            )))
            .add_filter(Arc::new(SegmentFilter::new(Arc::clone(&segmenter))))
            .add_filter(Arc::new(StemFilter::new(Arc::new(LexiconStemmer::new(
                Arc::clone(&segmenter),
            )))));
        if !config.keep_unsegmented {
            inner = inner.add_filter(Arc::new(RemoveUnsegmentedFilter::new()));
        }

        log::debug!("Built analyzer {inner:?}");

        Ok(NahuatlAnalyzer {
            inner,
            segmenter,
            config,
        })
    }

    /// Tokenize a text into analyzed tokens.
    pub fn tokenize(&self, text: &str) -> Result<TokenStream> {
        self.analyze(text)
    }

    /// Analyze many texts in parallel.
    ///
    /// Results come back in the order of `texts`. A text that fails (only
    /// possible under the reject policy) does not affect the others.
    pub fn analyze_batch<S>(&self, texts: &[S]) -> Vec<Result<Vec<Token>>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.analyze(text.as_ref()).map(Iterator::collect))
            .collect()
    }

    pub fn segmenter(&self) -> &Arc<Segmenter> {
        &self.segmenter
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Analyzer for NahuatlAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "nahuatl"
    }
}
