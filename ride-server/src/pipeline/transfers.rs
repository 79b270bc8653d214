//! Transfer detection between consecutive rides.

use std::collections::HashSet;
use std::num::NonZeroUsize;

use crate::domain::RideSegment;
use crate::stations::{normalize, words};

/// Default number of words two stop names must share to count as the same
/// place.
const DEFAULT_MIN_SHARED_WORDS: NonZeroUsize = NonZeroUsize::MIN;

/// When two stop names are considered the same place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferRule {
    /// Shared normalized words needed when the normalized names differ.
    pub min_shared_words: NonZeroUsize,
}

impl TransferRule {
    /// Create a rule with the given shared-word threshold.
    pub fn new(min_shared_words: NonZeroUsize) -> Self {
        Self { min_shared_words }
    }

    /// Whether two stop names refer to the same place.
    ///
    /// Names that normalize to nothing are never similar. Otherwise the
    /// names are similar if they normalize to the same text or share at
    /// least `min_shared_words` normalized words.
    pub fn similar(&self, a: &str, b: &str) -> bool {
        let a = normalize(a);
        let b = normalize(b);
        if a.is_empty() || b.is_empty() {
            return false;
        }
        if a == b {
            return true;
        }

        let a_words: HashSet<&str> = words(&a).collect();
        let shared = words(&b)
            .collect::<HashSet<_>>()
            .intersection(&a_words)
            .count();
        shared >= self.min_shared_words.get()
    }
}

impl Default for TransferRule {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SHARED_WORDS)
    }
}

/// Mark each ride whose departing stop matches the next ride's boarding
/// stop as transferred.
///
/// The last ride is left as it is.
pub fn mark_transfers(mut rides: Vec<RideSegment>, rule: &TransferRule) -> Vec<RideSegment> {
    for i in 1..rides.len() {
        if rule.similar(&rides[i - 1].departing_stop, &rides[i].boarding_stop) {
            rides[i - 1].transferred = true;
        }
    }
    rides
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Confidence;

    fn ride(line: &str, from: &str, to: &str) -> RideSegment {
        RideSegment::new(line, from, to, Confidence::DIRECT_TRANSIT)
    }

    fn needing(words: usize) -> TransferRule {
        TransferRule::new(NonZeroUsize::new(words).unwrap())
    }

    fn flags(rides: &[RideSegment]) -> Vec<bool> {
        rides.iter().map(|r| r.transferred).collect()
    }

    #[test]
    fn same_stop_is_a_transfer() {
        let rides = vec![
            ride("6", "Astor Pl", "Union Sq-14 St"),
            ride("L", "14 St-Union Sq", "Bedford Av"),
        ];
        let rides = mark_transfers(rides, &TransferRule::default());
        assert_eq!(flags(&rides), [true, false]);
    }

    #[test]
    fn unrelated_stops_are_not() {
        let rides = vec![
            ride("6", "Astor Pl", "Canal St"),
            ride("A", "Jay St-MetroTech", "High St"),
        ];
        let rides = mark_transfers(rides, &TransferRule::default());
        assert_eq!(flags(&rides), [false, false]);
    }

    #[test]
    fn last_ride_keeps_its_flag() {
        let mut last = ride("L", "8 Av", "Bedford Av");
        last.transferred = true;
        let rides = mark_transfers(vec![last.clone()], &TransferRule::default());
        assert_eq!(rides, vec![last]);
    }

    #[test]
    fn empty_and_single_are_unchanged() {
        assert!(mark_transfers(Vec::new(), &TransferRule::default()).is_empty());

        let single = vec![ride("G", "Court Sq", "Greenpoint Av")];
        assert_eq!(
            mark_transfers(single.clone(), &TransferRule::default()),
            single
        );
    }

    #[test]
    fn threshold_is_configurable() {
        // "42 grand central" vs "42 times": one shared word
        let strict = needing(2);
        assert!(!strict.similar("Grand Central-42 St", "Times Sq-42 St"));
        assert!(TransferRule::default().similar("Grand Central-42 St", "Times Sq-42 St"));
    }

    #[test]
    fn blank_names_are_never_similar() {
        let rule = TransferRule::default();
        assert!(!rule.similar("", "Canal St"));
        assert!(!rule.similar("Canal St", "  "));
    }

    #[test]
    fn names_normalizing_to_nothing_are_never_similar() {
        // both reduce to "" once generic place words are stripped
        let rule = TransferRule::default();
        assert!(!rule.similar("Station", "Subway Stop"));

        let rides = vec![
            ride("6", "Astor Pl", "Station"),
            ride("L", "Subway Stop", "Bedford Av"),
        ];
        assert_eq!(flags(&mark_transfers(rides, &rule)), [false, false]);
    }

    #[test]
    fn default_rule_needs_a_shared_word() {
        assert_eq!(TransferRule::default().min_shared_words.get(), 1);
        assert!(!TransferRule::default().similar("Canal St", "Jay St-MetroTech"));
    }

    #[test]
    fn equal_after_normalization() {
        let rule = needing(5);
        assert!(rule.similar("Canal Street", "canal st"));
    }
}
