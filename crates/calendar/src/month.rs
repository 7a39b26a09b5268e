//! Calendar month newtype.

use std::fmt;

use crate::error::CalendarError;

/// Three-letter month abbreviations, index 0 = January.
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Calendar month (1 = January, ..., 12 = December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(u8);

impl Month {
    /// Creates a new `Month` from a 1-indexed month number.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
    pub fn new(month: u8) -> Result<Self, CalendarError> {
        if (1..=12).contains(&month) {
            Ok(Self(month))
        } else {
            Err(CalendarError::InvalidMonth { month })
        }
    }

    /// Returns the 1-indexed month number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the zero-based index (0 = January), handy for `[_; 12]` tables.
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Returns the three-letter English abbreviation (`"Jan"`, ..., `"Dec"`).
    pub fn abbreviation(self) -> &'static str {
        MONTH_ABBREVIATIONS[self.index()]
    }

    /// Iterates over all twelve months in calendar order.
    pub fn all() -> impl Iterator<Item = Month> {
        (1..=12).map(Month)
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(month: u8) -> Result<Self, Self::Error> {
        Self::new(month)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid_range() {
        for m in 1..=12u8 {
            assert_eq!(Month::new(m).unwrap().get(), m);
        }
    }

    #[test]
    fn new_rejects_zero_and_thirteen() {
        assert_eq!(
            Month::new(0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            Month::new(13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn index_is_zero_based() {
        assert_eq!(Month::new(1).unwrap().index(), 0);
        assert_eq!(Month::new(12).unwrap().index(), 11);
    }

    #[test]
    fn abbreviation_and_display() {
        let june = Month::new(6).unwrap();
        assert_eq!(june.abbreviation(), "Jun");
        assert_eq!(june.to_string(), "Jun");
    }

    #[test]
    fn all_yields_twelve_in_order() {
        let months: Vec<u8> = Month::all().map(Month::get).collect();
        assert_eq!(months, (1..=12).collect::<Vec<u8>>());
    }

    #[test]
    fn try_from_round_trip() {
        let m = Month::try_from(9).unwrap();
        assert_eq!(u8::from(m), 9);
        assert!(Month::try_from(42).is_err());
    }

    #[test]
    fn ordering() {
        assert!(Month::new(1).unwrap() < Month::new(12).unwrap());
    }
}
