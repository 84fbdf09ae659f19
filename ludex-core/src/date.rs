//! Calendar values for release-date indexing.
//!
//! A [`ReleaseDate`] is a validated year/month/day with total ordering and
//! day-stepping, backed by `chrono`. The canonical text form is unpadded
//! `year-month-day` (`2021-6-1`, not `2021-06-01`); parsing accepts both
//! padded and unpadded components.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::DateError;

/// A validated calendar date, ordered by (year, month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleaseDate(NaiveDate);

impl ReleaseDate {
    /// Construct a date, rejecting components that name a nonexistent day
    /// (month past 12, day past the end of the month, Feb 29 outside a
    /// leap year).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DateError::NoSuchDate { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The following day, rolling over month and year boundaries.
    ///
    /// Returns `None` only at the end of the supported calendar range.
    pub fn next(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// The preceding day, rolling back month and year boundaries.
    ///
    /// Returns `None` only at the start of the supported calendar range.
    pub fn prev(self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }
}

/// Gregorian leap-year rule: divisible by 4 and not by 100, unless also
/// divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl fmt::Display for ReleaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year(), self.month(), self.day())
    }
}

impl FromStr for ReleaseDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(DateError::Malformed(s.to_string()));
        };
        let year = y.trim().parse().map_err(|_| DateError::Malformed(s.to_string()))?;
        let month = m.trim().parse().map_err(|_| DateError::Malformed(s.to_string()))?;
        let day = d.trim().parse().map_err(|_| DateError::Malformed(s.to_string()))?;
        Self::new(year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_unpadded() {
        let date = ReleaseDate::new(2021, 6, 1).unwrap();
        assert_eq!(date.to_string(), "2021-6-1");
    }

    #[test]
    fn test_format_parse_round_trip() {
        for (y, m, d) in [(2021, 6, 1), (1999, 12, 31), (2024, 2, 29), (2000, 1, 1)] {
            let date = ReleaseDate::new(y, m, d).unwrap();
            let reparsed: ReleaseDate = date.to_string().parse().unwrap();
            assert_eq!(date, reparsed);
        }
    }

    #[test]
    fn test_parse_accepts_padded_components() {
        let padded: ReleaseDate = "2021-06-01".parse().unwrap();
        let unpadded: ReleaseDate = "2021-6-1".parse().unwrap();
        assert_eq!(padded, unpadded);
    }

    #[test]
    fn test_rejects_nonexistent_days() {
        assert!(matches!(
            ReleaseDate::new(2021, 2, 30),
            Err(DateError::NoSuchDate { .. })
        ));
        assert!(ReleaseDate::new(2021, 13, 1).is_err());
        assert!(ReleaseDate::new(2021, 4, 31).is_err());
        assert!(ReleaseDate::new(2023, 2, 29).is_err());
        assert!(ReleaseDate::new(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_rejects_malformed_text() {
        for text in ["", "garbage", "2021-6", "2021/6/1", "2021-6-1-0", "-2021-6-1"] {
            assert!(
                matches!(text.parse::<ReleaseDate>(), Err(DateError::Malformed(_))),
                "{text:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_leap_year_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2400));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_next_rolls_over_boundaries() {
        let end_of_june = ReleaseDate::new(2021, 6, 30).unwrap();
        assert_eq!(end_of_june.next().unwrap(), ReleaseDate::new(2021, 7, 1).unwrap());

        let end_of_year = ReleaseDate::new(2021, 12, 31).unwrap();
        assert_eq!(end_of_year.next().unwrap(), ReleaseDate::new(2022, 1, 1).unwrap());

        let leap_feb = ReleaseDate::new(2024, 2, 28).unwrap();
        assert_eq!(leap_feb.next().unwrap(), ReleaseDate::new(2024, 2, 29).unwrap());

        let common_feb = ReleaseDate::new(2023, 2, 28).unwrap();
        assert_eq!(common_feb.next().unwrap(), ReleaseDate::new(2023, 3, 1).unwrap());
    }

    #[test]
    fn test_prev_rolls_back_boundaries() {
        let new_year = ReleaseDate::new(2022, 1, 1).unwrap();
        assert_eq!(new_year.prev().unwrap(), ReleaseDate::new(2021, 12, 31).unwrap());

        let march_leap = ReleaseDate::new(2024, 3, 1).unwrap();
        assert_eq!(march_leap.prev().unwrap(), ReleaseDate::new(2024, 2, 29).unwrap());

        let march_common = ReleaseDate::new(2023, 3, 1).unwrap();
        assert_eq!(march_common.prev().unwrap(), ReleaseDate::new(2023, 2, 28).unwrap());
    }

    #[test]
    fn test_next_prev_inverse() {
        let date = ReleaseDate::new(2020, 2, 29).unwrap();
        assert_eq!(date.next().unwrap().prev().unwrap(), date);
        assert_eq!(date.prev().unwrap().next().unwrap(), date);
    }

    #[test]
    fn test_ordering() {
        let a = ReleaseDate::new(2020, 5, 9).unwrap();
        let b = ReleaseDate::new(2020, 5, 10).unwrap();
        let c = ReleaseDate::new(2020, 6, 1).unwrap();
        let d = ReleaseDate::new(2021, 1, 1).unwrap();
        assert!(a < b && b < c && c < d);
    }
}
