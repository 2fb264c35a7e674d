//! Command implementations for the nahuatl CLI.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;

use crate::analysis::analyzer::NahuatlAnalyzer;
use crate::analysis::orthography::Orthography;
use crate::analysis::token::Token;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::gloss::Glosser;
use crate::morphology::lexicon::{Lexicon, LexiconBuilder};
use crate::tagger::{PosTagger, RuleBasedTagger};

/// Execute a CLI command.
pub fn execute_command(args: NahuatlArgs) -> Result<()> {
    match &args.command {
        Command::Tokenize(text_args) => tokenize(text_args, &args),
        Command::Segment(segment_args) => segment(segment_args, &args),
        Command::Stem(text_args) => stem(text_args, &args),
        Command::Tag(text_args) => tag(text_args, &args),
        Command::Gloss(text_args) => gloss(text_args, &args),
        Command::Convert(convert_args) => convert(convert_args, &args),
        Command::Lexicon(lexicon_args) => lexicon(lexicon_args, &args),
    }
}

/// Tokenize a text and print every token.
fn tokenize(args: &TextArgs, cli_args: &NahuatlArgs) -> Result<()> {
    let tokens = analyze_text(args, cli_args)?;
    output_result(&TokenizeResult { tokens }, cli_args)
}

/// Segment each word given on the command line.
fn segment(args: &SegmentArgs, cli_args: &NahuatlArgs) -> Result<()> {
    let mut config = load_config(cli_args)?;
    if let Some(orthography) = args.orthography {
        config = config
            .with_convert_orthography(true)
            .with_orthography(orthography.into());
    }
    let analyzer = NahuatlAnalyzer::with_config(load_lexicon(cli_args)?, config)?;
    let segmenter = analyzer.segmenter();

    let mut words = Vec::new();
    for word in &args.words {
        for token in analyzer.tokenize(word)?.filter(Token::is_word) {
            let segmentations = if args.all {
                segmenter.segment_all(&token.normalized, args.limit)
            } else {
                token.segmentation.clone().into_iter().collect()
            };
            let failure = if segmentations.is_empty() {
                segmenter.segment(&token.normalized).err()
            } else {
                None
            };
            words.push(WordSegmentations {
                word: token.text,
                normalized: token.normalized,
                segmentations,
                failure,
            });
        }
    }

    output_result(&SegmentResult { words }, cli_args)
}

/// Print the stem of every word in a text.
fn stem(args: &TextArgs, cli_args: &NahuatlArgs) -> Result<()> {
    let stems = analyze_text(args, cli_args)?
        .into_iter()
        .filter(Token::is_word)
        .map(|token| WordStem {
            stemmed: !token.flags.unstemmed,
            stem: token.stem.unwrap_or_else(|| token.normalized.clone()),
            word: token.text,
        })
        .collect();

    output_result(&StemResult { stems }, cli_args)
}

/// Tag every token of a text.
fn tag(args: &TextArgs, cli_args: &NahuatlArgs) -> Result<()> {
    let tokens = analyze_text(args, cli_args)?;
    let tagger = RuleBasedTagger::new();
    log::debug!("Tagging {} tokens with {}", tokens.len(), tagger.name());

    let tags = tagger.tag_all(&tokens);
    let tokens = tokens
        .into_iter()
        .zip(tags)
        .map(|(token, tag)| TaggedToken {
            morphemes: token.morphemes().into_iter().map(str::to_string).collect(),
            text: token.text,
            tag,
        })
        .collect();

    output_result(&TagResult { tokens }, cli_args)
}

/// Gloss every word of a text.
fn gloss(args: &TextArgs, cli_args: &NahuatlArgs) -> Result<()> {
    let tokens: Vec<Token> = analyze_text(args, cli_args)?
        .into_iter()
        .filter(Token::is_word)
        .collect();
    let glosses = Glosser::new().gloss_all(&tokens);
    log::debug!("Glossed {} words", glosses.len());

    let words = tokens
        .into_iter()
        .zip(glosses)
        .map(|(token, gloss)| GlossedWord {
            text: token.text,
            gloss,
        })
        .collect();

    output_result(&GlossResult { words }, cli_args)
}

/// Convert a text into the canonical orthography.
fn convert(args: &ConvertArgs, cli_args: &NahuatlArgs) -> Result<()> {
    let text = read_text(args.text.as_ref(), args.input.as_ref())?;
    let orthography = Orthography::from_preset(args.orthography.into())?;

    let result = ConvertResult {
        orthography: orthography.name().to_string(),
        output: orthography.convert(text.trim_end_matches('\n')),
    };
    output_result(&result, cli_args)
}

/// Load the lexicon sources and report what they contain.
fn lexicon(args: &LexiconArgs, cli_args: &NahuatlArgs) -> Result<()> {
    let lexicon = load_lexicon(cli_args)?;

    let mut sources: Vec<String> = Vec::new();
    if !cli_args.no_builtin {
        sources.push("<builtin:affixes>".to_string());
        sources.push("<builtin:roots>".to_string());
    }
    sources.extend(cli_args.lexicon.iter().map(|path| path.display().to_string()));

    let entries = if args.list {
        let mut entries: Vec<_> = lexicon.iter().cloned().collect();
        entries.sort_by(|a, b| (&a.surface, a.class).cmp(&(&b.surface, b.class)));
        entries
    } else {
        Vec::new()
    };

    let report = LexiconReport {
        sources,
        stats: lexicon.stats(),
        entries,
    };
    output_result(&report, cli_args)
}

fn analyze_text(args: &TextArgs, cli_args: &NahuatlArgs) -> Result<Vec<Token>> {
    let text = read_text(args.text.as_ref(), args.input.as_ref())?;

    let mut config = load_config(cli_args)?;
    if let Some(orthography) = args.orthography {
        config = config
            .with_convert_orthography(true)
            .with_orthography(orthography.into());
    }
    if args.drop_unsegmented {
        config = config.with_keep_unsegmented(false);
    }

    let analyzer = NahuatlAnalyzer::with_config(load_lexicon(cli_args)?, config)?;
    Ok(analyzer.tokenize(&text)?.collect())
}

fn load_config(cli_args: &NahuatlArgs) -> Result<AnalyzerConfig> {
    match &cli_args.config {
        Some(path) => AnalyzerConfig::from_json_file(path),
        None => Ok(AnalyzerConfig::default()),
    }
}

fn load_lexicon(cli_args: &NahuatlArgs) -> Result<Arc<Lexicon>> {
    let mut builder = LexiconBuilder::new();
    if let Some(config_path) = &cli_args.config {
        builder = builder.with_alphabet(AnalyzerConfig::from_json_file(config_path)?.alphabet()?);
    }
    if !cli_args.no_builtin {
        builder = builder.add_builtin_affixes()?.add_sample_roots()?;
    }
    for path in &cli_args.lexicon {
        builder = builder.add_file(path)?;
    }

    let lexicon = builder.build();
    if lexicon.is_empty() {
        log::warn!("The lexicon is empty; no word will be segmented");
    } else {
        log::info!("Loaded lexicon with {} surfaces", lexicon.len());
    }
    Ok(Arc::new(lexicon))
}

/// The text given inline, read from a file, or read from stdin.
fn read_text(text: Option<&String>, input: Option<&PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.clone());
    }
    if let Some(path) = input {
        return Ok(fs::read_to_string(path)?);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
