//! Output formatting for CLI commands.
//!
//! Every command produces one result value. Human output uses its `Display`
//! impl, JSON output its `Serialize` impl.

use std::fmt;

use serde::Serialize;

use crate::analysis::token::Token;
use crate::cli::args::{NahuatlArgs, OutputFormat};
use crate::error::Result;
use crate::gloss::WordGloss;
use crate::morphology::lexicon::{LexiconEntry, LexiconStats};
use crate::morphology::segmentation::{NoSegmentation, Segmentation};
use crate::tagger::PosTag;

/// Result of the `tokenize` command.
#[derive(Debug, Serialize)]
pub struct TokenizeResult {
    pub tokens: Vec<Token>,
}

/// Segmentations of one word.
#[derive(Debug, Serialize)]
pub struct WordSegmentations {
    pub word: String,
    pub normalized: String,
    pub segmentations: Vec<Segmentation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<NoSegmentation>,
}

/// Result of the `segment` command.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    pub words: Vec<WordSegmentations>,
}

/// Stem of one word.
#[derive(Debug, Serialize)]
pub struct WordStem {
    pub word: String,
    pub stem: String,
    pub stemmed: bool,
}

/// Result of the `stem` command.
#[derive(Debug, Serialize)]
pub struct StemResult {
    pub stems: Vec<WordStem>,
}

/// One tagged token.
#[derive(Debug, Serialize)]
pub struct TaggedToken {
    pub text: String,
    pub tag: PosTag,
    pub morphemes: Vec<String>,
}

/// Result of the `tag` command.
#[derive(Debug, Serialize)]
pub struct TagResult {
    pub tokens: Vec<TaggedToken>,
}

/// Gloss of one word.
#[derive(Debug, Serialize)]
pub struct GlossedWord {
    pub text: String,
    pub gloss: WordGloss,
}

/// Result of the `gloss` command.
#[derive(Debug, Serialize)]
pub struct GlossResult {
    pub words: Vec<GlossedWord>,
}

/// Result of the `convert` command.
#[derive(Debug, Serialize)]
pub struct ConvertResult {
    pub orthography: String,
    pub output: String,
}

/// Result of the `lexicon` command.
#[derive(Debug, Serialize)]
pub struct LexiconReport {
    pub sources: Vec<String>,
    pub stats: LexiconStats,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<LexiconEntry>,
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Serialize + fmt::Display>(result: &T, args: &NahuatlArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => print!("{result}"),
        OutputFormat::Json => println!("{}", to_json(result, args.pretty)?),
    }
    Ok(())
}

fn to_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

fn format_flags(token: &Token) -> String {
    let mut flags = Vec::new();
    if token.flags.out_of_vocabulary {
        flags.push("oov");
    }
    if token.flags.unstemmed {
        flags.push("unstemmed");
    }
    if token.flags.invalid_characters {
        flags.push("invalid");
    }
    flags.join(",")
}

impl fmt::Display for TokenizeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            let segmentation = token
                .segmentation
                .as_ref()
                .map_or_else(|| "-".to_string(), ToString::to_string);
            writeln!(
                f,
                "{}\t{}\t{}\t{}\t{}",
                token.text,
                token.normalized,
                segmentation,
                token.stem.as_deref().unwrap_or("-"),
                format_flags(token)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for SegmentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.words {
            match &word.failure {
                Some(reason) => writeln!(f, "{}\t({reason})", word.word)?,
                None => {
                    let parses: Vec<String> =
                        word.segmentations.iter().map(ToString::to_string).collect();
                    writeln!(f, "{}\t{}", word.word, parses.join(" | "))?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for StemResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stem in &self.stems {
            let marker = if stem.stemmed { "" } else { "\t(unstemmed)" };
            writeln!(f, "{}\t{}{marker}", stem.word, stem.stem)?;
        }
        Ok(())
    }
}

impl fmt::Display for TagResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            writeln!(f, "{}\t{}\t{}", token.text, token.tag, token.morphemes.join("-"))?;
        }
        Ok(())
    }
}

impl fmt::Display for GlossResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.words {
            writeln!(f, "{}\t{}", word.text, word.gloss)?;
        }
        Ok(())
    }
}

impl fmt::Display for ConvertResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.output)
    }
}

impl fmt::Display for LexiconReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sources: {}", self.sources.join(", "))?;
        writeln!(f, "Surfaces:  {}", self.stats.surfaces)?;
        writeln!(f, "Prefixes:  {}", self.stats.prefixes)?;
        writeln!(f, "Roots:     {}", self.stats.roots)?;
        writeln!(f, "Suffixes:  {}", self.stats.suffixes)?;
        writeln!(f, "Particles: {}", self.stats.particles)?;
        for entry in &self.entries {
            if entry.features.is_empty() {
                writeln!(f, "{}\t{}", entry.surface, entry.class)?;
            } else {
                writeln!(
                    f,
                    "{}\t{}\t{}",
                    entry.surface,
                    entry.class,
                    entry.features.join(",")
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_tokenize_result_display() {
        let mut token = Token::new("Bdfg", 0).with_normalized("bdfg");
        token.stem = Some("bdfg".to_string());
        token.flags.invalid_characters = true;
        token.flags.unstemmed = true;

        let result = TokenizeResult {
            tokens: vec![token, Token::new(".", 1)],
        };
        assert_eq!(
            result.to_string(),
            "Bdfg\tbdfg\t-\tbdfg\tunstemmed,invalid\n.\t.\t-\t-\t\n"
        );
    }

    #[test]
    fn test_stem_result_display() {
        let result = StemResult {
            stems: vec![
                WordStem {
                    word: "nikoci".to_string(),
                    stem: "koci".to_string(),
                    stemmed: true,
                },
                WordStem {
                    word: "xyz".to_string(),
                    stem: "xyz".to_string(),
                    stemmed: false,
                },
            ],
        };
        assert_eq!(result.to_string(), "nikoci\tkoci\nxyz\txyz\t(unstemmed)\n");
    }

    #[test]
    fn test_gloss_result_display() {
        let result = GlossResult {
            words: vec![
                GlossedWord {
                    text: "Kali".to_string(),
                    gloss: WordGloss::Noun {
                        word: "kali".to_string(),
                        morphemes: vec!["kal".to_string(), "i".to_string()],
                    },
                },
                GlossedWord {
                    text: "xyz".to_string(),
                    gloss: WordGloss::Other {
                        word: "xyz".to_string(),
                    },
                },
            ],
        };
        assert_eq!(result.to_string(), "Kali\tnoun\tkal-i\nxyz\tother\n");

        let json = to_json(&result, false).unwrap();
        assert!(json.contains(r#""kind":"noun""#));
    }

    #[test]
    fn test_json_output() {
        let result = ConvertResult {
            orthography: "classical".to_string(),
            output: "siwaL".to_string(),
        };
        assert_eq!(
            to_json(&result, false).unwrap(),
            r#"{"orthography":"classical","output":"siwaL"}"#
        );
        assert!(to_json(&result, true).unwrap().contains('\n'));
    }
}
