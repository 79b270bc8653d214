//! Fuzzy station matching.

use std::collections::HashSet;

use crate::domain::Confidence;

use super::normalize::{normalize, words};

/// Maximum number of candidates returned by [`find_matching_stations`].
pub const MAX_MATCHES: usize = 3;

/// A station that plausibly matches some free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate {
    /// Canonical station name, as it appears in the registry.
    pub station_name: String,

    /// How well the free text matched it.
    pub confidence: Confidence,
}

/// Score free text against candidate station names.
///
/// Each candidate lands in the first tier that applies: exact normalized
/// match (100), substring either way (80), then word overlap scored as
/// `overlap / shorter_word_count * 60`, kept only from 30 up. Results are
/// best-first, ties in candidate order, at most [`MAX_MATCHES`].
///
/// Returns an empty list when `raw` is blank or normalizes to nothing.
///
/// # Examples
///
/// ```
/// use ride_server::stations::find_matching_stations;
///
/// let matches = find_matching_stations("14th St Union Sq", ["Union Sq-14 St", "Canal St"]);
/// assert_eq!(matches[0].station_name, "Union Sq-14 St");
/// assert_eq!(matches.len(), 1);
/// ```
pub fn find_matching_stations<I, S>(raw: &str, candidates: I) -> Vec<MatchCandidate>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let needle = normalize(raw);
    if needle.is_empty() {
        return Vec::new();
    }
    let needle_words: HashSet<&str> = words(&needle).collect();

    let mut matches: Vec<MatchCandidate> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let name = candidate.as_ref();
            let confidence = score(&needle, &needle_words, &normalize(name))?;
            Some(MatchCandidate {
                station_name: name.to_string(),
                confidence,
            })
        })
        .collect();

    // Stable sort keeps candidate order among equal scores
    matches.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    matches.truncate(MAX_MATCHES);
    matches
}

/// Score one normalized candidate against the normalized needle.
fn score(needle: &str, needle_words: &HashSet<&str>, candidate: &str) -> Option<Confidence> {
    if candidate.is_empty() {
        return None;
    }

    if needle == candidate {
        return Some(Confidence::EXACT);
    }

    if needle.contains(candidate) || candidate.contains(needle) {
        return Some(Confidence::SUBSTRING);
    }

    let candidate_words: HashSet<&str> = words(candidate).collect();
    let overlap = needle_words.intersection(&candidate_words).count();
    let min_len = needle_words.len().min(candidate_words.len());
    Confidence::from_word_overlap(overlap, min_len)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Capitalized words that survive normalization.
    fn station_name() -> impl Strategy<Value = String> {
        "[A-Z][a-z]{3,8}( [A-Z][a-z]{3,8}){0,2}"
            .prop_filter("must normalize to something", |s| !normalize(s).is_empty())
    }

    proptest! {
        #[test]
        fn exact_self_match(a in station_name(), b in station_name(), c in station_name()) {
            let matches = find_matching_stations(&a, [&a, &b, &c]);
            prop_assert!(!matches.is_empty());
            prop_assert_eq!(&matches[0].station_name, &a);
            prop_assert_eq!(matches[0].confidence, Confidence::EXACT);
        }

        #[test]
        fn no_overlap_no_match(raw in "[0-9]{1,4}( [0-9]{1,4}){0,2}", a in station_name(), b in station_name()) {
            // Digits-only input shares no words or substrings with letters-only names
            let matches = find_matching_stations(&raw, [&a, &b]);
            prop_assert!(matches.is_empty());
        }

        #[test]
        fn never_more_than_three(raw in station_name(), names in proptest::collection::vec(station_name(), 0..10)) {
            let matches = find_matching_stations(&raw, &names);
            prop_assert!(matches.len() <= MAX_MATCHES);
            prop_assert!(matches.iter().all(|m| m.confidence >= Confidence::WORD_OVERLAP_MIN));
        }
    }
}
