//! Confidence scores.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when a confidence value is out of range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid confidence {value}: must be between 0 and 100")]
pub struct InvalidConfidence {
    value: u32,
}

/// How certain the pipeline is about a segment or station match, 0 to 100.
///
/// The value reflects the strategy that produced it. The constants below
/// name the tiers in use; stricter tiers always score higher.
///
/// # Examples
///
/// ```
/// use ride_server::domain::Confidence;
///
/// let c = Confidence::new(80).unwrap();
/// assert_eq!(c.value(), 80);
///
/// assert!(Confidence::new(101).is_err());
/// assert!(Confidence::EXACT > Confidence::DIRECT_TRANSIT);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Confidence(u8);

impl Confidence {
    /// Normalized names are identical.
    pub const EXACT: Confidence = Confidence(100);

    /// Segment read directly from a structured provider transit step.
    pub const DIRECT_TRANSIT: Confidence = Confidence(95);

    /// One normalized name contains the other.
    pub const SUBSTRING: Confidence = Confidence(80);

    /// Ceiling of the word-overlap tier (every word of the shorter name shared).
    pub const WORD_OVERLAP_MAX: Confidence = Confidence(60);

    /// Word-overlap scores below this are discarded.
    pub const WORD_OVERLAP_MIN: Confidence = Confidence(30);

    /// Create a confidence, rejecting values above 100.
    pub fn new(value: u32) -> Result<Self, InvalidConfidence> {
        if value > 100 {
            return Err(InvalidConfidence { value });
        }
        Ok(Confidence(value as u8))
    }

    /// Word-overlap score: `floor(overlap / min_len * 60)`.
    ///
    /// Returns `None` when there is no overlap or the score falls below
    /// [`Confidence::WORD_OVERLAP_MIN`].
    pub fn from_word_overlap(overlap: usize, min_len: usize) -> Option<Self> {
        if overlap == 0 || min_len == 0 {
            return None;
        }
        let max = Self::WORD_OVERLAP_MAX.0 as usize;
        let score = (overlap.min(min_len) * max) / min_len;
        if score < Self::WORD_OVERLAP_MIN.0 as usize {
            return None;
        }
        Some(Confidence(score as u8))
    }

    /// The raw score.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Debug for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Confidence({})", self.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl Serialize for Confidence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}
