use aho_corasick::{AhoCorasick, MatchKind};

use super::CharFilter;
use crate::error::{NahuatlError, Result};

/// Replaces every occurrence of a set of strings in a single left-to-right
/// pass.
///
/// Matching is leftmost-longest, so with both `ku` and `k` as keys the input
/// `kua` is rewritten through `ku`. Replacement output is never rescanned;
/// chained rewrites need separate filters.
#[derive(Clone, Debug)]
pub struct MappingCharFilter {
    ac: AhoCorasick,
    replacements: Vec<String>,
}

impl MappingCharFilter {
    pub fn new<I, K, V>(mapping: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut keys: Vec<String> = Vec::new();
        let mut replacements = Vec::new();

        for (k, v) in mapping {
            let key = k.into();
            if key.is_empty() {
                return Err(NahuatlError::invalid_argument(
                    "mapping keys must not be empty",
                ));
            }
            keys.push(key);
            replacements.push(v.into());
        }

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keys)
            .map_err(|e| NahuatlError::Anyhow(anyhow::Error::from(e)))?;

        Ok(Self { ac, replacements })
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut last_match_end = 0;

        for m in self.ac.find_iter(input) {
            output.push_str(&input[last_match_end..m.start()]);
            output.push_str(&self.replacements[m.pattern().as_usize()]);
            last_match_end = m.end();
        }

        output.push_str(&input[last_match_end..]);
        output
    }

    fn name(&self) -> &'static str {
        "mapping"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_char_filter() {
        let filter = MappingCharFilter::new([("qu", "k"), ("hu", "w")]).unwrap();
        assert_eq!(filter.filter("quahuitl"), "kawitl");
    }

    #[test]
    fn test_mapping_expansion_and_deletion() {
        let filter = MappingCharFilter::new([("a", "aaa"), ("h", "")]).unwrap();
        assert_eq!(filter.filter("bahb"), "baaab");
    }

    #[test]
    fn test_mapping_overlap_prefers_longest() {
        let filter = MappingCharFilter::new([("k", "1"), ("kw", "2")]).unwrap();
        assert_eq!(filter.filter("kwa ka"), "2a 1a");
    }

    #[test]
    fn test_mapping_is_single_pass() {
        // "ts" -> "z" must not be fed back into "z" -> "s".
        let filter = MappingCharFilter::new([("z", "s"), ("ts", "z")]).unwrap();
        assert_eq!(filter.filter("tsaz"), "zas");
    }

    #[test]
    fn test_mapping_multibyte() {
        let filter = MappingCharFilter::new([("ñ", "ny")]).unwrap();
        assert_eq!(filter.filter("niño"), "ninyo");
    }

    #[test]
    fn test_mapping_rejects_empty_key() {
        assert!(MappingCharFilter::new([("", "x")]).is_err());
    }
}
