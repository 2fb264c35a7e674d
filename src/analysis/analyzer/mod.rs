//! Analyzers that combine a tokenizer with token filters.

pub mod analyzer;
pub mod nahuatl;
pub mod pipeline;

pub use analyzer::Analyzer;
pub use nahuatl::NahuatlAnalyzer;
pub use pipeline::PipelineAnalyzer;
