//! FDI tooth numbering.
//!
//! Teeth are identified by two-digit FDI notation: the first digit is the
//! quadrant (1 = upper right, 2 = upper left, 3 = lower left, 4 = lower
//! right), the second is the position within the quadrant (1 = central
//! incisor through 8 = third molar).

use crate::{ChartError, Result};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which jaw a tooth belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Jaw {
    /// Maxillary (quadrants 1 and 2).
    Upper,
    /// Mandibular (quadrants 3 and 4).
    Lower,
}

/// A validated FDI tooth number.
///
/// Only the 32 permanent-dentition numbers are accepted: 11-18, 21-28,
/// 31-38, 41-48.
///
/// # Example
///
/// ```
/// use chart_types::{Jaw, ToothNumber};
///
/// let tooth = ToothNumber::new(36)?;
/// assert_eq!(tooth.quadrant(), 3);
/// assert_eq!(tooth.position(), 6);
/// assert_eq!(tooth.jaw(), Jaw::Lower);
///
/// assert!(ToothNumber::new(19).is_err());
/// # Ok::<(), chart_types::ChartError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ToothNumber(u8);

impl ToothNumber {
    /// Create a tooth number, validating FDI notation.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::InvalidToothNumber`] if the value is not one of
    /// the 32 permanent-dentition FDI numbers.
    pub fn new(value: u8) -> Result<Self> {
        let quadrant = value / 10;
        let position = value % 10;
        if (1..=4).contains(&quadrant) && (1..=8).contains(&position) {
            Ok(Self(value))
        } else {
            Err(ChartError::InvalidToothNumber(value))
        }
    }

    /// The raw two-digit FDI value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The quadrant digit (1-4).
    #[must_use]
    pub const fn quadrant(self) -> u8 {
        self.0 / 10
    }

    /// The position within the quadrant (1-8).
    #[must_use]
    pub const fn position(self) -> u8 {
        self.0 % 10
    }

    /// Which jaw this tooth belongs to.
    #[must_use]
    pub const fn jaw(self) -> Jaw {
        if self.0 / 10 <= 2 {
            Jaw::Upper
        } else {
            Jaw::Lower
        }
    }

    /// All 32 permanent teeth in ascending FDI order.
    #[must_use]
    pub fn all() -> impl Iterator<Item = Self> {
        (1u8..=4)
            .flat_map(|q| (1u8..=8).map(move |p| Self(q * 10 + p)))
    }
}

impl fmt::Display for ToothNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for ToothNumber {
    type Error = ChartError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_valid_numbers() {
        for value in [11, 18, 21, 28, 31, 38, 41, 48] {
            let tooth = ToothNumber::new(value).unwrap();
            assert_eq!(tooth.value(), value);
        }
    }

    #[test]
    fn test_invalid_numbers() {
        for value in [0u8, 1, 10, 19, 20, 29, 50, 55, 111] {
            assert_eq!(
                ToothNumber::new(value),
                Err(ChartError::InvalidToothNumber(value)),
                "expected {value} to be rejected"
            );
        }
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_jaw_assignment() {
        assert_eq!(ToothNumber::new(16).unwrap().jaw(), Jaw::Upper);
        assert_eq!(ToothNumber::new(24).unwrap().jaw(), Jaw::Upper);
        assert_eq!(ToothNumber::new(33).unwrap().jaw(), Jaw::Lower);
        assert_eq!(ToothNumber::new(47).unwrap().jaw(), Jaw::Lower);
    }

    #[test]
    fn test_all_teeth() {
        let all: Vec<_> = ToothNumber::all().collect();
        assert_eq!(all.len(), 32);
        assert_eq!(all[0].value(), 11);
        assert_eq!(all[31].value(), 48);
        // Every generated number round-trips through validation.
        for tooth in all {
            assert!(ToothNumber::new(tooth.value()).is_ok());
        }
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_display() {
        assert_eq!(ToothNumber::new(36).unwrap().to_string(), "36");
    }
}
