//! Dictionary-guided morpheme segmentation.
//!
//! A word is read left to right as `prefix* root suffix*`. At every offset the
//! segmenter tries the lexicon entries starting there, longest first. Before
//! the root these are roots and prefixes (a root wins over a prefix of the
//! same length); after it, only suffixes. When a choice leads nowhere the
//! search returns to the most recent decision and tries the next shorter
//! candidate, so the first complete parse found is also the greedy one
//! whenever the greedy one exists.
//!
//! The search is a depth-first walk over an explicit stack and is bounded by
//! a step budget.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use nahuatl_nlp::morphology::lexicon::{Lexicon, MorphemeClass};
//! use nahuatl_nlp::morphology::segmenter::Segmenter;
//!
//! let lexicon = Lexicon::from_entries([
//!     ("ni", MorphemeClass::Prefix),
//!     ("koci", MorphemeClass::Root),
//!     ("zin", MorphemeClass::Suffix),
//! ])
//! .unwrap();
//! let segmenter = Segmenter::new(Arc::new(lexicon));
//!
//! let segmentation = segmenter.segment("nikocizin").unwrap();
//! assert_eq!(segmentation.morphemes(), vec!["ni", "koci", "zin"]);
//! assert_eq!(segmentation.stem(), "koci");
//! ```

use std::sync::Arc;

use crate::morphology::lexicon::{Lexicon, LexiconEntry, MorphemeClass};
use crate::morphology::segmentation::{MorphemeSpan, NoSegmentation, Segmentation};

/// Default number of candidates the search may try per word.
pub const DEFAULT_MAX_SEARCH_STEPS: usize = 10_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    BeforeStem,
    AfterStem,
}

#[derive(Debug)]
struct Candidate<'a> {
    end: usize,
    entry: &'a LexiconEntry,
}

/// One decision point: the candidates starting at `offset`.
#[derive(Debug)]
struct Frame<'a> {
    offset: usize,
    phase: Phase,
    candidates: Vec<Candidate<'a>>,
    cursor: usize,
}

impl<'a> Frame<'a> {
    fn next_candidate(&mut self) -> Option<&Candidate<'a>> {
        let candidate = self.candidates.get(self.cursor)?;
        self.cursor += 1;
        Some(candidate)
    }
}

enum SearchEnd {
    Exhausted,
    LimitReached,
    Exceeded,
}

/// Splits normalized words into prefixes, a stem and suffixes.
#[derive(Clone, Debug)]
pub struct Segmenter {
    lexicon: Arc<Lexicon>,
    max_search_steps: usize,
}

impl Segmenter {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Segmenter {
            lexicon,
            max_search_steps: DEFAULT_MAX_SEARCH_STEPS,
        }
    }

    pub fn with_max_search_steps(mut self, max_search_steps: usize) -> Self {
        self.max_search_steps = max_search_steps;
        self
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    pub fn max_search_steps(&self) -> usize {
        self.max_search_steps
    }

    /// Segment a word, returning the first complete parse in search order.
    pub fn segment(&self, word: &str) -> Result<Segmentation, NoSegmentation> {
        if let Some(segmentation) = self.particle(word) {
            return Ok(segmentation);
        }

        let mut found = Vec::with_capacity(1);
        match self.search(word, 1, &mut found) {
            SearchEnd::Exceeded if found.is_empty() => {
                log::debug!(
                    "Segmentation of {word:?} gave up after {} steps",
                    self.max_search_steps
                );
                Err(NoSegmentation::SearchLimitExceeded)
            }
            _ => found.pop().ok_or_else(|| self.failure_reason(word)),
        }
    }

    /// Up to `limit` complete segmentations, in search order.
    ///
    /// The first element, if any, is what [`Segmenter::segment`] returns.
    /// Stops early without error when the step budget runs out.
    pub fn segment_all(&self, word: &str, limit: usize) -> Vec<Segmentation> {
        if limit == 0 {
            return Vec::new();
        }
        if let Some(segmentation) = self.particle(word) {
            return vec![segmentation];
        }

        let mut found = Vec::new();
        if let SearchEnd::Exceeded = self.search(word, limit, &mut found) {
            log::debug!(
                "Stopped listing segmentations of {word:?} after {} steps",
                self.max_search_steps
            );
        }
        found
    }

    fn particle(&self, word: &str) -> Option<Segmentation> {
        let entry = self
            .lexicon
            .entries(word)
            .iter()
            .find(|entry| entry.class == MorphemeClass::Particle)?;
        Segmentation::new(word, vec![MorphemeSpan::new(0, word.len(), entry.clone())])
    }

    fn failure_reason(&self, word: &str) -> NoSegmentation {
        if self.lexicon.matches_anywhere(word) {
            NoSegmentation::Incomplete
        } else {
            NoSegmentation::OutOfVocabulary
        }
    }

    fn candidates<'a>(&'a self, word: &'a str, offset: usize, phase: Phase) -> Vec<Candidate<'a>> {
        let mut candidates = Vec::new();
        for (len, entries) in self.lexicon.prefix_matches(&word[offset..]) {
            let end = offset + len;
            match phase {
                Phase::BeforeStem => {
                    for class in [MorphemeClass::Root, MorphemeClass::Prefix] {
                        candidates.extend(
                            entries
                                .iter()
                                .filter(|entry| entry.class == class)
                                .map(|entry| Candidate { end, entry }),
                        );
                    }
                }
                Phase::AfterStem => {
                    candidates.extend(
                        entries
                            .iter()
                            .filter(|entry| entry.class == MorphemeClass::Suffix)
                            .map(|entry| Candidate { end, entry }),
                    );
                }
            }
        }
        candidates
    }

    fn search(&self, word: &str, limit: usize, found: &mut Vec<Segmentation>) -> SearchEnd {
        if word.is_empty() {
            return SearchEnd::Exhausted;
        }

        let mut stack = vec![Frame {
            offset: 0,
            phase: Phase::BeforeStem,
            candidates: self.candidates(word, 0, Phase::BeforeStem),
            cursor: 0,
        }];
        // path[i] is the span chosen in stack[i]; the top frame has no choice yet
        let mut path: Vec<MorphemeSpan> = Vec::new();
        let mut steps = 0;

        while let Some(frame) = stack.last_mut() {
            let offset = frame.offset;
            let phase = frame.phase;
            let Some(&Candidate { end, entry }) = frame.next_candidate() else {
                stack.pop();
                path.pop();
                continue;
            };

            steps += 1;
            if steps > self.max_search_steps {
                return SearchEnd::Exceeded;
            }

            let next_phase = if entry.class == MorphemeClass::Root {
                Phase::AfterStem
            } else {
                phase
            };
            let span = MorphemeSpan::new(offset, end, entry.clone());

            if end == word.len() {
                if next_phase == Phase::AfterStem {
                    let mut spans = path.clone();
                    spans.push(span);
                    if let Some(segmentation) = Segmentation::new(word, spans) {
                        found.push(segmentation);
                        if found.len() >= limit {
                            return SearchEnd::LimitReached;
                        }
                    }
                }
                continue;
            }

            path.push(span);
            stack.push(Frame {
                offset: end,
                phase: next_phase,
                candidates: self.candidates(word, end, next_phase),
                cursor: 0,
            });
        }

        SearchEnd::Exhausted
    }
}
