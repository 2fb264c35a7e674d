//! Command line argument parsing for the nahuatl CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::analysis::orthography::OrthographyPreset;

/// nahuatl - segmentation, stemming and tagging for Nahuatl text
#[derive(Parser, Debug, Clone)]
#[command(name = "nahuatl")]
#[command(about = "Morphological analysis toolkit for Nahuatl text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct NahuatlArgs {
    /// Verbosity level (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Wordlist file to load (repeatable)
    #[arg(short, long = "lexicon", value_name = "PATH", global = true)]
    pub lexicon: Vec<PathBuf>,

    /// Do not load the built-in affixes and sample roots
    #[arg(long, global = true)]
    pub no_builtin: bool,

    /// Analyzer configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "NAHUATL_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl NahuatlArgs {
    /// Get the effective verbosity level (0=quiet, 1=normal, 2=info, 3+=debug)
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Tokenize text into analyzed tokens
    Tokenize(TextArgs),

    /// Segment words into morphemes
    Segment(SegmentArgs),

    /// Print the stem of every word
    Stem(TextArgs),

    /// Tag every token with a part of speech
    Tag(TextArgs),

    /// Gloss verbs: person, number, negation, tense, object and direction
    Gloss(TextArgs),

    /// Convert text into the canonical orthography
    Convert(ConvertArgs),

    /// Validate the lexicon sources and show statistics
    Lexicon(LexiconArgs),
}

/// Output format.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Source orthography of the input.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrthographyArg {
    Modern,
    Classical,
}

impl From<OrthographyArg> for OrthographyPreset {
    fn from(arg: OrthographyArg) -> Self {
        match arg {
            OrthographyArg::Modern => OrthographyPreset::Modern,
            OrthographyArg::Classical => OrthographyPreset::Classical,
        }
    }
}

/// Arguments shared by the commands that run the full pipeline.
#[derive(Parser, Debug, Clone)]
pub struct TextArgs {
    /// Text to analyze (reads --input or stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Convert words from this orthography before segmenting
    #[arg(short, long)]
    pub orthography: Option<OrthographyArg>,

    /// Drop words that could not be segmented
    #[arg(long)]
    pub drop_unsegmented: bool,
}

/// Arguments for segmenting words
#[derive(Parser, Debug, Clone)]
pub struct SegmentArgs {
    /// Words to segment
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Convert words from this orthography before segmenting
    #[arg(short, long)]
    pub orthography: Option<OrthographyArg>,

    /// List alternative segmentations too
    #[arg(short, long)]
    pub all: bool,

    /// Maximum number of segmentations listed with --all
    #[arg(long, default_value = "10")]
    pub limit: usize,
}

/// Arguments for orthography conversion
#[derive(Parser, Debug, Clone)]
pub struct ConvertArgs {
    /// Text to convert (reads --input or stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Orthography the text is written in
    #[arg(short, long, default_value = "modern")]
    pub orthography: OrthographyArg,
}

/// Arguments for lexicon validation
#[derive(Parser, Debug, Clone)]
pub struct LexiconArgs {
    /// Also print every surface with its classes
    #[arg(long)]
    pub list: bool,
}
