//! Error types for the nahuatl-nlp library.
//!
//! All fallible operations return [`NahuatlError`] through the crate-wide
//! [`Result`] alias. Lexicon loading has its own [`LoadError`] enum, which
//! converts into [`NahuatlError::Load`].
//!
//! Unknown words and ambiguous segmentations are not errors: they are
//! reported as flags on the produced tokens so that a whole text can be
//! processed past them. Only a bad lexicon source (or an invalid character
//! under the `reject` policy) aborts a run.
//!
//! # Examples
//!
//! ```
//! use nahuatl_nlp::error::{NahuatlError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(NahuatlError::invalid_config("alphabet must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for nahuatl-nlp operations.
#[derive(Error, Debug)]
pub enum NahuatlError {
    /// I/O errors (reading input texts, config files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A lexicon source could not be loaded.
    #[error("Lexicon load error: {0}")]
    Load(#[from] LoadError),

    /// Input text contains a character outside the canonical orthography and
    /// the analyzer is configured to reject such texts.
    #[error("Invalid character {character:?} at byte {offset} in {word:?}")]
    InvalidCharacter {
        word: String,
        character: char,
        offset: usize,
    },

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with NahuatlError.
pub type Result<T> = std::result::Result<T, NahuatlError>;

impl NahuatlError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        NahuatlError::Analysis(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        NahuatlError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        NahuatlError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        NahuatlError::Other(msg.into())
    }

    /// Create a new invalid character error.
    pub fn invalid_character<S: Into<String>>(word: S, character: char, offset: usize) -> Self {
        NahuatlError::InvalidCharacter {
            word: word.into(),
            character,
            offset,
        }
    }
}

/// Errors raised while reading a wordlist source into a lexicon.
///
/// `origin` names the source (a file path or `<builtin>`), `line` is 1-based.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read lexicon source {origin}: {cause}")]
    Unreadable { origin: String, cause: io::Error },

    #[error("{origin}:{line}: expected 2 or 3 tab-separated columns, found {found}")]
    ColumnCount {
        origin: String,
        line: usize,
        found: usize,
    },

    #[error("{origin}:{line}: empty surface form")]
    EmptySurface { origin: String, line: usize },

    #[error("{origin}:{line}: unknown morpheme class {class:?}")]
    UnknownClass {
        origin: String,
        line: usize,
        class: String,
    },

    #[error("{origin}:{line}: character {character:?} in {surface:?} is outside the orthography")]
    InvalidCharacter {
        origin: String,
        line: usize,
        surface: String,
        character: char,
    },

    #[error("{origin}:{line}: {surface:?} has the same text as {existing:?} in a different encoding")]
    ConflictingEncoding {
        origin: String,
        line: usize,
        surface: String,
        existing: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = NahuatlError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = NahuatlError::invalid_config("bad alphabet");
        assert_eq!(error.to_string(), "Config error: bad alphabet");

        let error = NahuatlError::invalid_character("niku", 'u', 3);
        assert_eq!(
            error.to_string(),
            "Invalid character 'u' at byte 3 in \"niku\""
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let nahuatl_error = NahuatlError::from(io_error);

        match nahuatl_error {
            NahuatlError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_load_error_conversion() {
        let load_error = LoadError::ColumnCount {
            origin: "roots.tsv".to_string(),
            line: 4,
            found: 5,
        };
        let error: NahuatlError = load_error.into();

        assert!(matches!(error, NahuatlError::Load(_)));
        assert_eq!(
            error.to_string(),
            "Lexicon load error: roots.tsv:4: expected 2 or 3 tab-separated columns, found 5"
        );
    }
}
