//! Grammatical glosses for analyzed words.
//!
//! A verb gloss reads the prefix chain of its segmentation left to right,
//! one slot at a time: negation, past, subject, reflexive, object and
//! direction. Each slot takes at most one prefix; a slot whose prefix is
//! missing is skipped and the next slot looks at the same prefix.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use nahuatl_nlp::analysis::analyzer::NahuatlAnalyzer;
//! use nahuatl_nlp::gloss::{Glosser, VerbObject, WordGloss};
//! use nahuatl_nlp::morphology::lexicon::Lexicon;
//!
//! let lexicon = Lexicon::builder()
//!     .add_builtin_affixes()
//!     .unwrap()
//!     .add_sample_roots()
//!     .unwrap()
//!     .build();
//! let analyzer = NahuatlAnalyzer::new(Arc::new(lexicon)).unwrap();
//! let tokens: Vec<_> = analyzer.tokenize("amo nikita").unwrap().collect();
//!
//! let glosses = Glosser::new().gloss_all(&tokens);
//! let WordGloss::Verb(verb) = &glosses[1] else {
//!     panic!("expected a verb");
//! };
//! assert_eq!(verb.person, 1);
//! assert_eq!(verb.object, Some(VerbObject::ThirdSingular));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::morphology::lexicon::MorphemeClass;
use crate::morphology::segmentation::{MorphemeSpan, Segmentation};
use crate::tagger::{PosTag, PosTagger, RuleBasedTagger};

/// Suffixes marking a plural subject after the optative `xi`.
const OPTATIVE_PLURAL_SUFFIXES: &[&str] = &["kan"];

/// Suffix marking a plural subject.
const PLURAL_SUFFIX: &str = "j";

/// Subject prefixes by number: (plural, surface, person).
const SUBJECTS: &[(bool, &str, u8)] = &[
    (false, "ni", 1),
    (false, "ti", 2),
    (true, "ti", 1),
    (true, "an", 2),
];

/// Object marked by a verb prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbObject {
    FirstSingular,
    SecondSingular,
    ThirdSingular,
    FirstPlural,
    SecondPlural,
    ThirdPlural,
    /// `te`: someone
    ImpersonalPerson,
    /// `La`: something
    ImpersonalNonperson,
}

impl VerbObject {
    pub fn from_prefix(surface: &str) -> Option<Self> {
        let object = match surface {
            "nec" => VerbObject::FirstSingular,
            "miz" => VerbObject::SecondSingular,
            "ki" | "k" | "j" => VerbObject::ThirdSingular,
            "tec" => VerbObject::FirstPlural,
            "mec" => VerbObject::SecondPlural,
            "kin" => VerbObject::ThirdPlural,
            "te" => VerbObject::ImpersonalPerson,
            "La" => VerbObject::ImpersonalNonperson,
            _ => return None,
        };
        Some(object)
    }

    pub fn is_impersonal(&self) -> bool {
        matches!(
            self,
            VerbObject::ImpersonalPerson | VerbObject::ImpersonalNonperson
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VerbObject::FirstSingular => "1-singular",
            VerbObject::SecondSingular => "2-singular",
            VerbObject::ThirdSingular => "3-singular",
            VerbObject::FirstPlural => "1-plural",
            VerbObject::SecondPlural => "2-plural",
            VerbObject::ThirdPlural => "3-plural",
            VerbObject::ImpersonalPerson => "impersonal-person",
            VerbObject::ImpersonalNonperson => "impersonal-nonperson",
        }
    }
}

impl fmt::Display for VerbObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction marked by `wal` (towards the speaker) or `on` (away).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Towards,
    Away,
}

impl Direction {
    pub fn from_prefix(surface: &str) -> Option<Self> {
        match surface {
            "wal" => Some(Direction::Towards),
            "on" => Some(Direction::Away),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Towards => "towards",
            Direction::Away => "away",
        }
    }
}

/// Grammatical reading of a verb.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbGloss {
    pub word: String,
    pub morphemes: Vec<String>,
    pub stem: String,
    pub negative: bool,
    pub past: bool,
    /// Person of the subject: 1, 2 or 3.
    pub person: u8,
    pub plural: bool,
    /// Second person optative (`xi-`).
    pub optative: bool,
    pub reflexive: bool,
    pub object: Option<VerbObject>,
    /// Set only when there is an object prefix.
    pub impersonal: Option<bool>,
    pub direction: Option<Direction>,
}

impl VerbGloss {
    pub fn from_segmentation(segmentation: &Segmentation) -> Self {
        let prefixes = segmentation.prefixes();
        let mut slots = PrefixSlots {
            prefixes,
            cursor: 0,
        };

        let plural = is_plural(segmentation);
        let negative = slots.take_if(|p| p.entry.has_feature("negation")).is_some();
        let past = slots.take_if(|p| p.entry.has_feature("past")).is_some();

        let optative = slots.take_if(|p| p.entry.has_feature("optative")).is_some();
        let person = if optative {
            2
        } else {
            let person = slots.take_map(|p| {
                SUBJECTS
                    .iter()
                    .find(|(number, surface, _)| *number == plural && *surface == p.text())
                    .map(|(_, _, person)| *person)
            });
            person.unwrap_or(3)
        };

        let reflexive = slots
            .take_if(|p| p.text() == "mo" || (person == 1 && p.text() == "no"))
            .is_some();
        let object = slots.take_map(|p| VerbObject::from_prefix(p.text()));
        let direction = slots.take_map(|p| Direction::from_prefix(p.text()));

        VerbGloss {
            word: segmentation.word().to_string(),
            morphemes: segmentation.morphemes().into_iter().map(str::to_string).collect(),
            stem: segmentation.stem().to_string(),
            negative,
            past,
            person,
            plural,
            optative,
            reflexive,
            object,
            impersonal: object.map(|object| object.is_impersonal()),
            direction,
        }
    }
}

/// Plural subject: `-kan` after optative `xi-`, `-j` otherwise.
fn is_plural(segmentation: &Segmentation) -> bool {
    let spans = segmentation.spans();
    let Some(last) = spans.last() else {
        return false;
    };
    let optative = segmentation
        .prefixes()
        .first()
        .is_some_and(|p| p.entry.has_feature("optative"));
    if optative {
        OPTATIVE_PLURAL_SUFFIXES.contains(&last.text())
    } else {
        last.class() == MorphemeClass::Suffix && last.text() == PLURAL_SUFFIX
    }
}

struct PrefixSlots<'a> {
    prefixes: &'a [MorphemeSpan],
    cursor: usize,
}

impl<'a> PrefixSlots<'a> {
    fn take_if(&mut self, accept: impl Fn(&MorphemeSpan) -> bool) -> Option<&'a MorphemeSpan> {
        let prefix = self.prefixes.get(self.cursor).filter(|p| accept(p))?;
        self.cursor += 1;
        Some(prefix)
    }

    fn take_map<T>(&mut self, read: impl Fn(&MorphemeSpan) -> Option<T>) -> Option<T> {
        let value = self.prefixes.get(self.cursor).and_then(read)?;
        self.cursor += 1;
        Some(value)
    }
}

impl fmt::Display for VerbGloss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number = if self.plural { "pl" } else { "sg" };
        write!(f, "{}{number}", self.person)?;
        if self.negative {
            f.write_str(" negative")?;
        }
        if self.past {
            f.write_str(" past")?;
        }
        if self.optative {
            f.write_str(" optative")?;
        }
        if self.reflexive {
            f.write_str(" reflexive")?;
        }
        if let Some(object) = self.object {
            write!(f, " object={object}")?;
        }
        if let Some(direction) = self.direction {
            write!(f, " {}", direction.as_str())?;
        }
        Ok(())
    }
}

/// Gloss of one token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WordGloss {
    Verb(VerbGloss),
    Noun { word: String, morphemes: Vec<String> },
    Other { word: String },
}

impl fmt::Display for WordGloss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordGloss::Verb(verb) => write!(f, "verb\t{}\t{verb}", verb.morphemes.join("-")),
            WordGloss::Noun { morphemes, .. } => write!(f, "noun\t{}", morphemes.join("-")),
            WordGloss::Other { .. } => f.write_str("other"),
        }
    }
}

/// Glosses tokens after tagging them: verbs get a [`VerbGloss`], nouns
/// their morphemes, everything else nothing.
#[derive(Clone, Debug, Default)]
pub struct Glosser<T = RuleBasedTagger> {
    tagger: T,
}

impl Glosser {
    pub fn new() -> Self {
        Glosser {
            tagger: RuleBasedTagger::new(),
        }
    }
}

impl<T: PosTagger> Glosser<T> {
    pub fn with_tagger(tagger: T) -> Self {
        Glosser { tagger }
    }

    pub fn gloss(&self, token: &Token) -> WordGloss {
        let tag = self.tagger.tag(token);
        match (tag, &token.segmentation) {
            (PosTag::Verb, Some(segmentation)) => {
                WordGloss::Verb(VerbGloss::from_segmentation(segmentation))
            }
            (PosTag::Noun, Some(segmentation)) => WordGloss::Noun {
                word: token.normalized.clone(),
                morphemes: segmentation.morphemes().into_iter().map(str::to_string).collect(),
            },
            _ => WordGloss::Other {
                word: token.normalized.clone(),
            },
        }
    }

    pub fn gloss_all(&self, tokens: &[Token]) -> Vec<WordGloss> {
        tokens.iter().map(|token| self.gloss(token)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::lexicon::Lexicon;
    use crate::morphology::segmenter::Segmenter;
    use std::sync::Arc;

    fn segmenter() -> Segmenter {
        let lexicon = Lexicon::builder()
            .add_builtin_affixes()
            .unwrap()
            .add_sample_roots()
            .unwrap()
            .build();
        Segmenter::new(Arc::new(lexicon))
    }

    fn verb(word: &str) -> VerbGloss {
        let segmentation = segmenter().segment(word).unwrap();
        VerbGloss::from_segmentation(&segmentation)
    }

    #[test]
    fn test_subject_person() {
        let gloss = verb("nikoci");
        assert_eq!(gloss.morphemes, vec!["ni", "koci"]);
        assert_eq!((gloss.person, gloss.plural), (1, false));
        assert!(!gloss.negative && !gloss.past && !gloss.optative);
        assert_eq!(gloss.object, None);
        assert_eq!(gloss.impersonal, None);

        assert_eq!(verb("tikoci").person, 2);
        assert_eq!(verb("koci").person, 3);
    }

    #[test]
    fn test_plural_changes_the_subject() {
        let gloss = verb("tikocij");
        assert_eq!(gloss.morphemes, vec!["ti", "koci", "j"]);
        assert_eq!((gloss.person, gloss.plural), (1, true));
    }

    #[test]
    fn test_negation_and_past() {
        let gloss = verb("amonikoci");
        assert!(gloss.negative);
        assert_eq!(gloss.person, 1);

        let gloss = verb("otikoci");
        assert_eq!(gloss.morphemes, vec!["o", "ti", "koci"]);
        assert!(gloss.past);
        assert!(!gloss.negative);
        assert_eq!(gloss.person, 2);
    }

    #[test]
    fn test_optative() {
        let gloss = verb("xikoci");
        assert!(gloss.optative);
        assert_eq!((gloss.person, gloss.plural), (2, false));

        let gloss = verb("xikocikan");
        assert_eq!(gloss.morphemes, vec!["xi", "koci", "kan"]);
        assert!(gloss.optative);
        assert!(gloss.plural);
    }

    #[test]
    fn test_objects() {
        let gloss = verb("nikita");
        assert_eq!(gloss.morphemes, vec!["ni", "k", "ita"]);
        assert_eq!(gloss.object, Some(VerbObject::ThirdSingular));
        assert_eq!(gloss.impersonal, Some(false));

        let gloss = verb("kicoka");
        assert_eq!(gloss.person, 3);
        assert_eq!(gloss.object, Some(VerbObject::ThirdSingular));

        let gloss = verb("nitekoci");
        assert_eq!(gloss.object, Some(VerbObject::ImpersonalPerson));
        assert_eq!(gloss.impersonal, Some(true));
    }

    #[test]
    fn test_reflexive() {
        assert!(verb("nimoita").reflexive);
        assert!(verb("ninoita").reflexive);
        // no- is reflexive only with a first person subject
        assert!(!verb("tinoita").reflexive);
    }

    #[test]
    fn test_direction() {
        let gloss = verb("tiwalkoci");
        assert_eq!(gloss.morphemes, vec!["ti", "wal", "koci"]);
        assert_eq!(gloss.direction, Some(Direction::Towards));
        assert_eq!(gloss.to_string(), "2sg towards");
    }

    #[test]
    fn test_display() {
        let gloss = verb("amonikita");
        assert_eq!(gloss.to_string(), "1sg negative object=3-singular");
    }

    #[test]
    fn test_glosser_follows_the_tag() {
        let segmenter = segmenter();
        let tokens: Vec<Token> = ["nikoci", "kalLi", "qqq", ","]
            .iter()
            .enumerate()
            .map(|(position, word)| {
                let mut token = Token::new(*word, position);
                token.segmentation = segmenter.segment(word).ok();
                token
            })
            .collect();

        let glosses = Glosser::new().gloss_all(&tokens);
        assert!(matches!(&glosses[0], WordGloss::Verb(verb) if verb.stem == "koci"));
        assert_eq!(
            glosses[1],
            WordGloss::Noun {
                word: "kalLi".to_string(),
                morphemes: vec!["kal".to_string(), "Li".to_string()],
            }
        );
        assert_eq!(
            glosses[2],
            WordGloss::Other {
                word: "qqq".to_string()
            }
        );
        assert_eq!(glosses[3].to_string(), "other");
    }

    #[test]
    fn test_json_shape() {
        let gloss = WordGloss::Verb(verb("nitekoci"));
        let json = serde_json::to_value(&gloss).unwrap();
        assert_eq!(json["kind"], "verb");
        assert_eq!(json["object"], "impersonal_person");
        assert_eq!(json["impersonal"], true);
    }
}
