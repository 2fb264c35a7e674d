//! Orthography conversion into the canonical phoneme-to-grapheme form.
//!
//! Nahuatl has been written in several orthographies. The morphology in this
//! crate works on a single canonical one where every phoneme has exactly one
//! grapheme:
//!
//! ```text
//! a e i o      vowels
//! c            /tʃ/   (ch)
//! j            /h/    (saltillo, h)
//! k            /k/    (c, qu)
//! L            /tɬ/   (tl)
//! q            /kʷ/   (cu, kw, ku)
//! s            /s/    (z, ce, ci)
//! w            /w/    (hu, uh, u)
//! z            /ts/   (tz, ts)
//! l m n p t x y
//! ```
//!
//! An [`Orthography`] is an ordered list of [`CharFilter`] stages. Conversion
//! always lowercases first and collapses doubled consonants last.
//!
//! # Examples
//!
//! ```
//! use nahuatl_nlp::analysis::orthography::Orthography;
//!
//! let classical = Orthography::classical().unwrap();
//! assert_eq!(classical.convert("Cihuatl"), "siwaL");
//! assert_eq!(classical.convert("tlaxcalli"), "Laxkali");
//!
//! let modern = Orthography::modern().unwrap();
//! assert_eq!(modern.convert("kuikatl"), "qikaL");
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::{CharFilter, LowercaseCharFilter, MappingCharFilter};
use crate::error::{NahuatlError, Result};

/// The characters of the canonical orthography.
pub const CANONICAL_ALPHABET: &str = "aceijklLmnopqstwxyz";

/// Consonants whose doubling is collapsed at the end of every conversion.
const DOUBLED_CONSONANTS: &str = "cjklmnpqstwxyz";

/// Substitution table of the modern orthography, applied in order.
const MODERN_SUBSTITUTIONS: &[(&str, &[&str])] = &[
    ("c", &["ch"]),
    ("j", &["h"]),
    ("k", &["qu"]),
    ("q", &["kw", "ku"]),
    ("z", &["ts", "tz"]),
    ("w", &["u"]),
    ("L", &["tl"]),
];

/// Substitution table of the classical orthography, applied in order after
/// its `c` has been resolved.
const CLASSICAL_SUBSTITUTIONS: &[(&str, &[&str])] = &[
    ("k", &["qu"]),
    ("s", &["z"]),
    ("z", &["ts"]),
    ("w", &["hu", "uh", "u"]),
    ("L", &["tl"]),
];

/// Resolution of the classical `c` by its following letter.
const CLASSICAL_C: &[(&str, &str)] = &[
    ("ci", "si"),
    ("ce", "se"),
    ("ca", "ka"),
    ("co", "ko"),
    ("cu", "q"),
    ("cz", "s"),
    ("c", "k"),
];

/// Built-in source orthographies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrthographyPreset {
    /// SEP-style modern spelling (k, w, ts, j)
    #[default]
    Modern,
    /// Colonial spelling (c/qu, hu, tz, z)
    Classical,
}

/// The set of characters a normalized word may contain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    chars: BTreeSet<char>,
}

impl Alphabet {
    /// Create an alphabet from the characters of a string.
    pub fn new(chars: &str) -> Result<Self> {
        let chars: BTreeSet<char> = chars.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.is_empty() {
            return Err(NahuatlError::invalid_config("alphabet must not be empty"));
        }
        Ok(Alphabet { chars })
    }

    /// The canonical orthography's alphabet.
    pub fn canonical() -> Self {
        Alphabet {
            chars: CANONICAL_ALPHABET.chars().collect(),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// The first character outside the alphabet, with its byte offset.
    pub fn first_invalid(&self, text: &str) -> Option<(usize, char)> {
        text.char_indices().find(|(_, c)| !self.contains(*c))
    }

    pub fn is_valid(&self, text: &str) -> bool {
        self.first_invalid(text).is_none()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::canonical()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chars: String = self.chars.iter().collect();
        write!(f, "{chars}")
    }
}

/// A converter from one written orthography into the canonical one.
#[derive(Clone)]
pub struct Orthography {
    name: String,
    stages: Vec<Arc<dyn CharFilter>>,
}

impl Orthography {
    /// Build an orthography from a substitution table.
    ///
    /// Each `(phoneme, graphemes)` row becomes one stage, applied in table
    /// order. When `uses_c` is set, the classical reading of `c` runs before
    /// the table.
    pub fn from_substitutions<S: Into<String>>(
        name: S,
        uses_c: bool,
        substitutions: &[(&str, &[&str])],
    ) -> Result<Self> {
        let mut stages: Vec<Arc<dyn CharFilter>> = vec![Arc::new(LowercaseCharFilter::new())];

        if uses_c {
            stages.push(Arc::new(MappingCharFilter::new(CLASSICAL_C.iter().copied())?));
            // "ch" has become "kh" above
            stages.push(Arc::new(MappingCharFilter::new([("kh", "c")])?));
        }

        for (phoneme, graphemes) in substitutions {
            stages.push(Arc::new(MappingCharFilter::new(
                graphemes.iter().map(|grapheme| (*grapheme, *phoneme)),
            )?));
        }

        stages.push(Arc::new(MappingCharFilter::new(DOUBLED_CONSONANTS.chars().map(
            |c| (format!("{c}{c}"), c.to_string()),
        ))?));

        Ok(Orthography {
            name: name.into(),
            stages,
        })
    }

    pub fn modern() -> Result<Self> {
        Self::from_substitutions("modern", false, MODERN_SUBSTITUTIONS)
    }

    pub fn classical() -> Result<Self> {
        Self::from_substitutions("classical", true, CLASSICAL_SUBSTITUTIONS)
    }

    pub fn from_preset(preset: OrthographyPreset) -> Result<Self> {
        match preset {
            OrthographyPreset::Modern => Self::modern(),
            OrthographyPreset::Classical => Self::classical(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Convert text into the canonical orthography.
    pub fn convert(&self, text: &str) -> String {
        self.stages
            .iter()
            .fold(text.to_string(), |text, stage| stage.filter(&text))
    }
}

impl CharFilter for Orthography {
    fn filter(&self, input: &str) -> String {
        self.convert(input)
    }

    fn name(&self) -> &'static str {
        "orthography"
    }
}

impl fmt::Debug for Orthography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Orthography")
            .field("name", &self.name)
            .field(
                "stages",
                &self.stages.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classical_c_resolution() {
        let classical = Orthography::classical().unwrap();

        assert_eq!(classical.convert("cochi"), "koci");
        assert_eq!(classical.convert("choca"), "coka");
        assert_eq!(classical.convert("cuica"), "qika");
        assert_eq!(classical.convert("cemi"), "semi");
    }

    #[test]
    fn test_classical_substitution_order() {
        let classical = Orthography::classical().unwrap();

        // z -> s runs before ts -> z, so "tz" ends up as z
        assert_eq!(classical.convert("tzin"), "zin");
        assert_eq!(classical.convert("quiza"), "kisa");
        assert_eq!(classical.convert("Tlacatl"), "LakaL");
        assert_eq!(classical.convert("Cuauhtemoc"), "qawtemok");
    }

    #[test]
    fn test_modern_orthography() {
        let modern = Orthography::modern().unwrap();

        assert_eq!(modern.convert("tochtli"), "tocLi");
        assert_eq!(modern.convert("tsopelik"), "zopelik");
        assert_eq!(modern.convert("kuali"), "qali");
        assert_eq!(modern.convert("nehua"), "nejwa");
        assert_eq!(modern.name(), "modern");
    }

    #[test]
    fn test_doubled_consonants_collapse() {
        let classical = Orthography::classical().unwrap();
        assert_eq!(classical.convert("calli"), "kali");
        assert_eq!(classical.convert("itta"), "ita");
    }

    #[test]
    fn test_conversion_is_deterministic_and_total() {
        let modern = Orthography::modern().unwrap();
        let input = "¡Ximopanoltih, nochi! 123";
        assert_eq!(modern.convert(input), modern.convert(input));
        assert_eq!(modern.convert(""), "");
    }

    #[test]
    fn test_alphabet() {
        let alphabet = Alphabet::canonical();
        assert!(alphabet.is_valid("nikoci"));
        assert!(alphabet.is_valid("LakaL"));
        assert_eq!(alphabet.first_invalid("nikuika"), Some((3, 'u')));
        assert_eq!(alphabet.to_string(), "Laceijklmnopqstwxyz");

        assert!(Alphabet::new(" ").is_err());
        assert!(Alphabet::new("ab").unwrap().contains('b'));
    }
}
