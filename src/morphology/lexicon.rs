//! Lexicon of roots, particles and affixes.
//!
//! A lexicon maps surface strings to the morpheme classes they can take.
//! It is built once, from wordlist files or in-memory sources, and is
//! read-only afterwards; share it between components with an `Arc`.
//!
//! # Wordlist format
//!
//! One entry per line, tab-separated:
//!
//! ```text
//! # surface   class     features (optional, comma-separated)
//! ni          prefix    subject
//! koci        root      verb
//! me          suffix    absolutive,plural
//! amo         particle
//! ```
//!
//! Lines starting with `#` and blank lines are ignored. Every surface must
//! be written in the lexicon's [`Alphabet`]. Entries repeating a surface and
//! class are merged and their features unioned.
//!
//! # Examples
//!
//! ```
//! use nahuatl_nlp::morphology::lexicon::{Lexicon, MorphemeClass};
//!
//! let lexicon = Lexicon::builder()
//!     .add_source("inline", "ni\tprefix\nkoci\troot\tverb\n")
//!     .unwrap()
//!     .build();
//!
//! assert!(lexicon.lookup("koci").contains(&MorphemeClass::Root));
//! assert_eq!(lexicon.longest_prefix_matches("nikoci"), vec![2]);
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::analysis::orthography::Alphabet;
use crate::error::{LoadError, Result};

const BUILTIN_AFFIXES: &str = include_str!("../../data/affixes.tsv");
const SAMPLE_ROOTS: &str = include_str!("../../data/roots.tsv");

/// Class of a morpheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MorphemeClass {
    Prefix,
    Root,
    Suffix,
    /// A free word that is never segmented and is its own stem.
    Particle,
}

impl MorphemeClass {
    /// Parse a wordlist class column. `stem` is accepted for `root`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "prefix" => Some(MorphemeClass::Prefix),
            "root" | "stem" => Some(MorphemeClass::Root),
            "suffix" => Some(MorphemeClass::Suffix),
            "particle" => Some(MorphemeClass::Particle),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MorphemeClass::Prefix => "prefix",
            MorphemeClass::Root => "root",
            MorphemeClass::Suffix => "suffix",
            MorphemeClass::Particle => "particle",
        }
    }

    /// Whether a span of this class can be the stem of a segmentation.
    pub fn is_stem(&self) -> bool {
        matches!(self, MorphemeClass::Root | MorphemeClass::Particle)
    }
}

impl fmt::Display for MorphemeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lexicon entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// Surface form in the canonical orthography
    pub surface: String,

    /// Morpheme class
    pub class: MorphemeClass,

    /// Feature labels, e.g. `subject`, `absolutive`, or `verb` for a root
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl LexiconEntry {
    pub fn new<S: Into<String>>(surface: S, class: MorphemeClass) -> Self {
        LexiconEntry {
            surface: surface.into(),
            class,
            features: Vec::new(),
        }
    }

    pub fn with_feature<S: Into<String>>(mut self, feature: S) -> Self {
        let feature = feature.into();
        if !self.features.contains(&feature) {
            self.features.push(feature);
        }
        self
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }
}

/// Entry counts per class.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconStats {
    pub surfaces: usize,
    pub prefixes: usize,
    pub roots: usize,
    pub suffixes: usize,
    pub particles: usize,
}

/// Read-only lexicon.
#[derive(Clone, Debug)]
pub struct Lexicon {
    entries: AHashMap<String, Vec<LexiconEntry>>,
    /// Longest surface in bytes; bounds prefix matching.
    max_surface_len: usize,
    alphabet: Alphabet,
}

impl Lexicon {
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::new()
    }

    /// Load wordlist files written in the canonical orthography.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut builder = LexiconBuilder::new();
        for path in paths {
            builder = builder.add_file(path)?;
        }
        Ok(builder.build())
    }

    /// Build a lexicon from `(surface, class)` pairs.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, MorphemeClass)>,
    {
        let mut builder = LexiconBuilder::new();
        for (surface, class) in entries {
            builder = builder.add_entry(LexiconEntry::new(surface, class))?;
        }
        Ok(builder.build())
    }

    /// The classes a surface string can take; empty for unknown strings.
    pub fn lookup(&self, text: &str) -> BTreeSet<MorphemeClass> {
        self.entries(text).iter().map(|entry| entry.class).collect()
    }

    /// The merged entries for a surface string.
    pub fn entries(&self, text: &str) -> &[LexiconEntry] {
        self.entries.get(text).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains_key(text)
    }

    /// Byte lengths of every lexicon surface that is a prefix of `text`,
    /// longest first.
    pub fn longest_prefix_matches(&self, text: &str) -> Vec<usize> {
        self.prefix_matches(text).map(|(len, _)| len).collect()
    }

    /// Lexicon surfaces that are prefixes of `text` with their entries,
    /// longest first.
    pub fn prefix_matches<'a>(
        &'a self,
        text: &'a str,
    ) -> impl Iterator<Item = (usize, &'a [LexiconEntry])> + 'a {
        let mut ends: Vec<usize> = text
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .take_while(|end| *end <= self.max_surface_len)
            .collect();
        ends.reverse();

        ends.into_iter().filter_map(move |end| {
            self.entries
                .get(&text[..end])
                .map(|entries| (end, entries.as_slice()))
        })
    }

    /// Whether any lexicon surface starts anywhere inside `text`.
    pub fn matches_anywhere(&self, text: &str) -> bool {
        text.char_indices()
            .any(|(i, _)| self.prefix_matches(&text[i..]).next().is_some())
    }

    /// Every entry, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &LexiconEntry> {
        self.entries.values().flatten()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Number of distinct surfaces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> LexiconStats {
        let mut stats = LexiconStats {
            surfaces: self.entries.len(),
            ..Default::default()
        };
        for entry in self.entries.values().flatten() {
            match entry.class {
                MorphemeClass::Prefix => stats.prefixes += 1,
                MorphemeClass::Root => stats.roots += 1,
                MorphemeClass::Suffix => stats.suffixes += 1,
                MorphemeClass::Particle => stats.particles += 1,
            }
        }
        stats
    }
}

/// Builder that validates and merges wordlist sources into a [`Lexicon`].
#[derive(Debug)]
pub struct LexiconBuilder {
    alphabet: Alphabet,
    entries: AHashMap<String, Vec<LexiconEntry>>,
    /// NFC form -> surface as first seen, to catch encoding conflicts.
    composed: AHashMap<String, String>,
}

impl LexiconBuilder {
    pub fn new() -> Self {
        LexiconBuilder {
            alphabet: Alphabet::canonical(),
            entries: AHashMap::new(),
            composed: AHashMap::new(),
        }
    }

    /// Validate surfaces against a custom alphabet. Set this before adding
    /// any source.
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Add the wordlist file at `path`.
    pub fn add_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|cause| LoadError::Unreadable {
            origin: origin.clone(),
            cause,
        })?;
        log::debug!("Loading lexicon source {origin}");
        self.add_source(&origin, &content)
    }

    /// Add an in-memory wordlist; `origin` names it in error messages.
    pub fn add_source(mut self, origin: &str, content: &str) -> Result<Self> {
        for (index, raw_line) in content.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw_line.trim_end_matches('\r');
            if trimmed.trim().is_empty() || trimmed.trim_start().starts_with('#') {
                continue;
            }

            let columns: Vec<&str> = trimmed.split('\t').map(str::trim).collect();
            if !(2..=3).contains(&columns.len()) {
                return Err(LoadError::ColumnCount {
                    origin: origin.to_string(),
                    line,
                    found: columns.len(),
                }
                .into());
            }

            let class =
                MorphemeClass::from_label(columns[1]).ok_or_else(|| LoadError::UnknownClass {
                    origin: origin.to_string(),
                    line,
                    class: columns[1].to_string(),
                })?;

            let mut entry = LexiconEntry::new(columns[0], class);
            if let Some(features) = columns.get(2) {
                for feature in features.split(',').map(str::trim).filter(|f| !f.is_empty()) {
                    entry = entry.with_feature(feature);
                }
            }

            self.insert(origin, line, entry)?;
        }
        Ok(self)
    }

    /// Add a single entry.
    pub fn add_entry(mut self, entry: LexiconEntry) -> Result<Self> {
        self.insert("<memory>", 0, entry)?;
        Ok(self)
    }

    /// Add the compiled-in verb and noun affixes.
    pub fn add_builtin_affixes(self) -> Result<Self> {
        self.add_source("<builtin:affixes>", BUILTIN_AFFIXES)
    }

    /// Add the compiled-in sample of roots and particles.
    pub fn add_sample_roots(self) -> Result<Self> {
        self.add_source("<builtin:roots>", SAMPLE_ROOTS)
    }

    pub fn build(self) -> Lexicon {
        let max_surface_len = self.entries.keys().map(String::len).max().unwrap_or(0);
        log::debug!(
            "Built lexicon with {} surfaces (longest {} bytes)",
            self.entries.len(),
            max_surface_len
        );
        Lexicon {
            entries: self.entries,
            max_surface_len,
            alphabet: self.alphabet,
        }
    }

    fn insert(
        &mut self,
        origin: &str,
        line: usize,
        entry: LexiconEntry,
    ) -> std::result::Result<(), LoadError> {
        if entry.surface.is_empty() {
            return Err(LoadError::EmptySurface {
                origin: origin.to_string(),
                line,
            });
        }

        if let Some((_, character)) = self.alphabet.first_invalid(&entry.surface) {
            return Err(LoadError::InvalidCharacter {
                origin: origin.to_string(),
                line,
                surface: entry.surface,
                character,
            });
        }

        let composed: String = entry.surface.nfc().collect();
        match self.composed.get(&composed) {
            Some(existing) if *existing != entry.surface => {
                return Err(LoadError::ConflictingEncoding {
                    origin: origin.to_string(),
                    line,
                    surface: entry.surface,
                    existing: existing.clone(),
                });
            }
            Some(_) => {}
            None => {
                self.composed.insert(composed, entry.surface.clone());
            }
        }

        let homographs = self.entries.entry(entry.surface.clone()).or_default();
        match homographs.iter_mut().find(|e| e.class == entry.class) {
            Some(existing) => {
                let before = existing.features.len();
                for feature in entry.features {
                    if !existing.features.contains(&feature) {
                        existing.features.push(feature);
                    }
                }
                if existing.features.len() == before {
                    log::warn!(
                        "{origin}:{line}: duplicate {} entry {:?} ignored",
                        existing.class,
                        existing.surface
                    );
                }
            }
            None => {
                homographs.push(entry);
                homographs.sort_by_key(|e| e.class);
            }
        }
        Ok(())
    }
}

impl Default for LexiconBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NahuatlError;

    fn sample() -> Lexicon {
        Lexicon::from_entries([
            ("ni", MorphemeClass::Prefix),
            ("koci", MorphemeClass::Root),
            ("k", MorphemeClass::Root),
            ("zin", MorphemeClass::Suffix),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup() {
        let lexicon = sample();
        assert_eq!(
            lexicon.lookup("ni"),
            BTreeSet::from([MorphemeClass::Prefix])
        );
        assert!(lexicon.lookup("xyz").is_empty());
        assert_eq!(lexicon.len(), 4);
    }

    #[test]
    fn test_longest_prefix_matches() {
        let lexicon = sample();
        assert_eq!(lexicon.longest_prefix_matches("kocizin"), vec![4, 1]);
        assert_eq!(lexicon.longest_prefix_matches("nikoci"), vec![2]);
        assert!(lexicon.longest_prefix_matches("xyz").is_empty());
        assert!(lexicon.longest_prefix_matches("").is_empty());
    }

    #[test]
    fn test_matches_anywhere() {
        let lexicon = sample();
        assert!(lexicon.matches_anywhere("xxkx"));
        assert!(!lexicon.matches_anywhere("xyz"));
    }

    #[test]
    fn test_homographs_and_feature_merge() {
        let lexicon = Lexicon::builder()
            .add_source(
                "test",
                "# comment\n\nti\tprefix\tsubject\nti\tsuffix\tdirectional\nme\tsuffix\tabsolutive\nme\tsuffix\tplural\n",
            )
            .unwrap()
            .build();

        assert_eq!(
            lexicon.lookup("ti"),
            BTreeSet::from([MorphemeClass::Prefix, MorphemeClass::Suffix])
        );
        let me = lexicon.entries("me");
        assert_eq!(me.len(), 1);
        assert!(me[0].has_feature("absolutive"));
        assert!(me[0].has_feature("plural"));
    }

    #[test]
    fn test_column_count_error() {
        let result = Lexicon::builder().add_source("bad", "ni\tprefix\tsubject\textra\n");
        match result {
            Err(NahuatlError::Load(LoadError::ColumnCount { line, found, .. })) => {
                assert_eq!(line, 1);
                assert_eq!(found, 4);
            }
            other => panic!("expected column count error, got {other:?}"),
        }

        assert!(Lexicon::builder().add_source("bad", "ni\n").is_err());
    }

    #[test]
    fn test_unknown_class_error() {
        let result = Lexicon::builder().add_source("bad", "ni\tinfix\n");
        assert!(matches!(
            result,
            Err(NahuatlError::Load(LoadError::UnknownClass { .. }))
        ));
    }

    #[test]
    fn test_invalid_character_error() {
        let result = Lexicon::builder().add_source("bad", "# ok\nkuika\troot\n");
        match result {
            Err(NahuatlError::Load(LoadError::InvalidCharacter {
                line, character, ..
            })) => {
                assert_eq!(line, 2);
                assert_eq!(character, 'u');
            }
            other => panic!("expected invalid character error, got {other:?}"),
        }
    }

    #[test]
    fn test_conflicting_encoding_error() {
        let alphabet = Alphabet::new("a\u{e1}\u{301}n").unwrap();
        let result = Lexicon::builder()
            .with_alphabet(alphabet)
            .add_source("accents", "n\u{e1}n\troot\nna\u{301}n\troot\n");

        assert!(matches!(
            result,
            Err(NahuatlError::Load(LoadError::ConflictingEncoding { line: 2, .. }))
        ));
    }

    #[test]
    fn test_builtin_sources_load() {
        let lexicon = Lexicon::builder()
            .add_builtin_affixes()
            .unwrap()
            .add_sample_roots()
            .unwrap()
            .build();

        assert!(lexicon.lookup("ni").contains(&MorphemeClass::Prefix));
        assert!(lexicon.lookup("koci").contains(&MorphemeClass::Root));
        assert!(lexicon.lookup("amo").contains(&MorphemeClass::Particle));

        let stats = lexicon.stats();
        assert!(stats.prefixes > 0);
        assert!(stats.suffixes > 0);
        assert!(stats.roots > 0);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Lexicon::load(&["/nonexistent/roots.tsv"]);
        assert!(matches!(
            result,
            Err(NahuatlError::Load(LoadError::Unreadable { .. }))
        ));
    }
}
