//! Char filter implementations for text normalization.
//!
//! Char filters rewrite a string before the morphology sees it. They are the
//! building blocks of an [`Orthography`](crate::analysis::orthography::Orthography):
//! each conversion stage is one char filter, and a whole orthography is itself
//! a char filter that runs its stages in order.
//!
//! # Available Filters
//!
//! - [`mapping::MappingCharFilter`] - Leftmost-longest string substitution
//! - [`lowercase::LowercaseCharFilter`] - Unicode lowercasing
//!
//! # Examples
//!
//! ```
//! use nahuatl_nlp::analysis::char_filter::CharFilter;
//! use nahuatl_nlp::analysis::char_filter::mapping::MappingCharFilter;
//!
//! let filter = MappingCharFilter::new([("tl", "L")]).unwrap();
//! assert_eq!(filter.filter("tlakatl"), "LakaL");
//! ```

/// Trait for character filters that transform a string.
///
/// Implementations must be pure and total: the same input always yields the
/// same output, and every input is accepted.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod mapping;

pub use lowercase::LowercaseCharFilter;
pub use mapping::MappingCharFilter;
