//! Analyzer configuration.
//!
//! [`AnalyzerConfig`] holds every option of the tokenization pipeline. It can
//! be built in code with the `with_*` setters or read from a JSON file; any
//! field left out of the file takes its default.
//!
//! ```
//! use nahuatl_nlp::config::AnalyzerConfig;
//! use nahuatl_nlp::analysis::orthography::OrthographyPreset;
//!
//! let config = AnalyzerConfig::from_json_str(
//!     r#"{ "convert_orthography": true, "orthography": "classical" }"#,
//! )
//! .unwrap();
//!
//! assert!(config.convert_orthography);
//! assert_eq!(config.orthography, OrthographyPreset::Classical);
//! assert!(config.keep_unsegmented);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::orthography::{Alphabet, CANONICAL_ALPHABET, OrthographyPreset};
use crate::analysis::tokenizer::RegexTokenizer;
use crate::error::{NahuatlError, Result};
use crate::morphology::segmenter::DEFAULT_MAX_SEARCH_STEPS;

pub use crate::analysis::token_filter::alphabet::InvalidCharacterPolicy;

/// Options of the tokenization pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Convert each word from `orthography` into the canonical orthography.
    pub convert_orthography: bool,

    /// Source orthography used when `convert_orthography` is set.
    pub orthography: OrthographyPreset,

    /// Lowercase words, keeping uppercase letters of the alphabet.
    ///
    /// Orthography conversion lowercases its input on its own, so with
    /// `convert_orthography` set words are lowercased even when this is off.
    pub lowercase: bool,

    /// Keep words that could not be segmented.
    pub keep_unsegmented: bool,

    pub invalid_characters: InvalidCharacterPolicy,

    /// Characters a normalized word may contain.
    pub alphabet: String,

    /// Candidates the segmenter may try per word before giving up.
    pub max_search_steps: usize,

    /// Regex used instead of Unicode word boundaries.
    pub token_pattern: Option<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            convert_orthography: false,
            orthography: OrthographyPreset::Modern,
            lowercase: true,
            keep_unsegmented: true,
            invalid_characters: InvalidCharacterPolicy::PassThrough,
            alphabet: CANONICAL_ALPHABET.to_string(),
            max_search_steps: DEFAULT_MAX_SEARCH_STEPS,
            token_pattern: None,
        }
    }
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            NahuatlError::invalid_config(format!("cannot read {}: {e}", path.display()))
        })?;
        log::debug!("Loaded analyzer config from {}", path.display());
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: AnalyzerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.alphabet()?;

        if self.max_search_steps == 0 {
            return Err(NahuatlError::invalid_config(
                "max_search_steps must be greater than zero",
            ));
        }

        if let Some(pattern) = &self.token_pattern {
            RegexTokenizer::with_pattern(pattern).map_err(|e| {
                NahuatlError::invalid_config(format!("token_pattern {pattern:?}: {e}"))
            })?;
        }

        Ok(())
    }

    /// The configured alphabet.
    pub fn alphabet(&self) -> Result<Alphabet> {
        Alphabet::new(&self.alphabet)
    }

    pub fn with_convert_orthography(mut self, convert: bool) -> Self {
        self.convert_orthography = convert;
        self
    }

    pub fn with_orthography(mut self, orthography: OrthographyPreset) -> Self {
        self.orthography = orthography;
        self
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn with_keep_unsegmented(mut self, keep: bool) -> Self {
        self.keep_unsegmented = keep;
        self
    }

    pub fn with_invalid_characters(mut self, policy: InvalidCharacterPolicy) -> Self {
        self.invalid_characters = policy;
        self
    }

    pub fn with_alphabet<S: Into<String>>(mut self, alphabet: S) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    pub fn with_max_search_steps(mut self, steps: usize) -> Self {
        self.max_search_steps = steps;
        self
    }

    pub fn with_token_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.token_pattern = Some(pattern.into());
        self
    }
}
