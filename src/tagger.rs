//! Part-of-speech tagging over analyzed tokens.
//!
//! The tagger reads what the pipeline already found: the token type, the
//! segmentation, and the feature labels of the matched lexicon entries. It
//! never re-segments.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use nahuatl_nlp::analysis::analyzer::NahuatlAnalyzer;
//! use nahuatl_nlp::morphology::lexicon::Lexicon;
//! use nahuatl_nlp::tagger::{PosTag, PosTagger, RuleBasedTagger};
//!
//! let lexicon = Lexicon::builder()
//!     .add_builtin_affixes()
//!     .unwrap()
//!     .add_sample_roots()
//!     .unwrap()
//!     .build();
//! let analyzer = NahuatlAnalyzer::new(Arc::new(lexicon)).unwrap();
//! let tokens: Vec<_> = analyzer.tokenize("amo nikoci.").unwrap().collect();
//!
//! let tags = RuleBasedTagger::new().tag_all(&tokens);
//! assert_eq!(tags, vec![PosTag::Particle, PosTag::Verb, PosTag::Punctuation]);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::token::{Token, TokenType};
use crate::morphology::lexicon::MorphemeClass;
use crate::morphology::segmentation::{MorphemeSpan, Segmentation};

/// Suffixes too frequent in both verbs and nouns to decide on their own.
const COMMON_SUFFIXES: &[&str] = &["ko", "s"];

/// Object prefixes that also mark impersonal nouns.
const IMPERSONAL_OBJECTS: &[&str] = &["te", "La"];

/// Third person object prefix joined to an i-initial stem.
const OBJECT_BEFORE_I: &str = "kii";

/// Stem endings typical of verbs.
const VERB_ENDINGS: &[&str] = &["owa", "iya", "oa", "ia"];

/// Part-of-speech tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    Verb,
    Noun,
    Particle,
    Punctuation,
    Numeral,
    Unknown,
}

impl PosTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Verb => "verb",
            PosTag::Noun => "noun",
            PosTag::Particle => "particle",
            PosTag::Punctuation => "punctuation",
            PosTag::Numeral => "numeral",
            PosTag::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for part-of-speech taggers.
pub trait PosTagger: Send + Sync {
    /// Tag a single token.
    fn tag(&self, token: &Token) -> PosTag;

    /// Tag every token, one tag per token in order.
    fn tag_all(&self, tokens: &[Token]) -> Vec<PosTag> {
        tokens.iter().map(|token| self.tag(token)).collect()
    }

    /// Get the name of this tagger.
    fn name(&self) -> &'static str;
}

/// Tagger applying affix rules in a fixed order; the first rule that
/// applies decides.
#[derive(Clone, Debug, Default)]
pub struct RuleBasedTagger;

impl RuleBasedTagger {
    pub fn new() -> Self {
        RuleBasedTagger
    }

    fn tag_segmentation(&self, segmentation: &Segmentation) -> PosTag {
        let stem = segmentation.stem_span();
        let prefixes = segmentation.prefixes();
        let suffixes = segmentation.suffixes();

        if stem.class() == MorphemeClass::Particle {
            return PosTag::Particle;
        }
        if stem.entry.has_feature("verb") {
            return PosTag::Verb;
        }
        if stem.entry.has_feature("noun") {
            return PosTag::Noun;
        }

        // subject directly followed by a personal object: ni-k-, ti-miz-
        if let Some(subject) = prefixes.iter().position(|p| p.entry.has_feature("subject")) {
            let personal_object = prefixes.get(subject + 1).is_some_and(|p| {
                p.entry.has_feature("object") && !IMPERSONAL_OBJECTS.contains(&p.text())
            });
            if personal_object {
                return PosTag::Verb;
            }
        }

        // ki- before a stem starting in i: ki-itta, ki-ilwia
        if segmentation.word().starts_with(OBJECT_BEFORE_I) {
            return PosTag::Verb;
        }

        if any_with(suffixes, "absolutive") {
            return PosTag::Noun;
        }

        let optative = prefixes
            .first()
            .is_some_and(|p| p.entry.has_feature("optative"));
        if optative || VERB_ENDINGS.iter().any(|ending| stem.text().ends_with(ending)) {
            return PosTag::Verb;
        }

        let verbal_suffix = suffixes.iter().any(|s| {
            (s.entry.has_feature("tense") || s.entry.has_feature("directional"))
                && !COMMON_SUFFIXES.contains(&s.text())
        });
        if verbal_suffix {
            return PosTag::Verb;
        }

        if any_with(prefixes, "object") {
            return PosTag::Verb;
        }

        if any_with(prefixes, "possessive") || any_with(suffixes, "diminutive") {
            return PosTag::Noun;
        }

        let common_suffix = suffixes
            .iter()
            .any(|s| COMMON_SUFFIXES.contains(&s.text()));
        if any_with(prefixes, "subject") && common_suffix {
            return PosTag::Verb;
        }

        PosTag::Unknown
    }
}

fn any_with(spans: &[MorphemeSpan], feature: &str) -> bool {
    spans.iter().any(|span| span.entry.has_feature(feature))
}

impl PosTagger for RuleBasedTagger {
    fn tag(&self, token: &Token) -> PosTag {
        match token.token_type {
            TokenType::Punctuation => PosTag::Punctuation,
            TokenType::Number => PosTag::Numeral,
            TokenType::Word => match &token.segmentation {
                Some(segmentation) => self.tag_segmentation(segmentation),
                None => PosTag::Unknown,
            },
        }
    }

    fn name(&self) -> &'static str {
        "rule_based"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::lexicon::{Lexicon, LexiconBuilder};
    use crate::morphology::segmenter::Segmenter;
    use std::sync::Arc;

    /// Builtin affixes plus roots without part-of-speech features, so the
    /// affix rules are what decides.
    fn segmenter() -> Segmenter {
        let lexicon = LexiconBuilder::new()
            .add_builtin_affixes()
            .unwrap()
            .add_source(
                "test",
                "pano\troot\nmiqia\troot\nxoci\troot\npowa\troot\nita\troot\nkal\troot\tnoun\namo\tparticle\n",
            )
            .unwrap()
            .build();
        Segmenter::new(Arc::new(lexicon))
    }

    fn tag(word: &str) -> PosTag {
        let segmenter = segmenter();
        let mut token = Token::new(word, 0);
        token.segmentation = segmenter.segment(word).ok();
        RuleBasedTagger::new().tag(&token)
    }

    #[test]
    fn test_token_types() {
        let tagger = RuleBasedTagger::new();
        assert_eq!(tagger.tag(&Token::new(",", 0)), PosTag::Punctuation);
        assert_eq!(tagger.tag(&Token::new("12", 0)), PosTag::Numeral);
        assert_eq!(tagger.tag(&Token::new("bdfg", 0)), PosTag::Unknown);
    }

    #[test]
    fn test_lexicon_features_decide() {
        assert_eq!(tag("amo"), PosTag::Particle);
        assert_eq!(tag("kal"), PosTag::Noun);
        assert_eq!(tag("nokal"), PosTag::Noun);
    }

    #[test]
    fn test_subject_and_object() {
        assert_eq!(tag("nikpano"), PosTag::Verb);
        // impersonal object alone is not enough
        assert_eq!(tag("nitepanoLi"), PosTag::Noun);
        // the object has to follow the subject directly
        assert_eq!(tag("ninokpanoLi"), PosTag::Noun);
    }

    #[test]
    fn test_object_before_i_stem() {
        assert_eq!(tag("kiitaL"), PosTag::Verb);
        assert_eq!(tag("itaL"), PosTag::Noun);
    }

    #[test]
    fn test_absolutive_makes_noun() {
        assert_eq!(tag("xociL"), PosTag::Noun);
    }

    #[test]
    fn test_optative_and_verb_endings() {
        assert_eq!(tag("xipano"), PosTag::Verb);
        assert_eq!(tag("powa"), PosTag::Verb);
        assert_eq!(tag("miqia"), PosTag::Verb);
    }

    #[test]
    fn test_tense_suffix_and_object_prefix() {
        assert_eq!(tag("panoyaya"), PosTag::Verb);
        assert_eq!(tag("tepano"), PosTag::Verb);
    }

    #[test]
    fn test_possessive_and_diminutive() {
        assert_eq!(tag("ixoci"), PosTag::Noun);
        assert_eq!(tag("panozin"), PosTag::Noun);
    }

    #[test]
    fn test_common_suffix_needs_subject() {
        assert_eq!(tag("nipanoko"), PosTag::Verb);
        assert_eq!(tag("panoko"), PosTag::Unknown);
        assert_eq!(tag("pano"), PosTag::Unknown);
    }

    #[test]
    fn test_tag_all_keeps_order() {
        let tokens = vec![Token::new("12", 0), Token::new("!", 1), Token::new("bdfg", 2)];
        assert_eq!(
            RuleBasedTagger::new().tag_all(&tokens),
            vec![PosTag::Numeral, PosTag::Punctuation, PosTag::Unknown]
        );
    }

    #[test]
    fn test_particle_in_pipeline_lexicon() {
        let lexicon = Lexicon::from_entries([("ye", MorphemeClass::Particle)]).unwrap();
        let segmenter = Segmenter::new(Arc::new(lexicon));
        let mut token = Token::new("ye", 0);
        token.segmentation = segmenter.segment("ye").ok();
        assert_eq!(RuleBasedTagger::new().tag(&token), PosTag::Particle);
    }
}
