//! Calendar-month value type.
//!
//! The upstream dataset keys every row by a `"YYYY-MM"` string and relies on
//! zero-padded lexicographic ordering being chronological. [`YearMonth`] makes
//! that invariant a real type: ordering is defined on `(year, month)` and the
//! string form is only a display/wire concern.

use crate::error::{Result, ZeitgeistError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar month, e.g. `2020-03`.
///
/// Ordering is chronological and agrees with lexicographic ordering of the
/// zero-padded `YYYY-MM` string form for all years in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a new `YearMonth`, validating that `month` is in `1..=12`.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(ZeitgeistError::InvalidYearMonth(format!(
                "{year:04}-{month:02}"
            )));
        }
        Ok(Self { year, month })
    }

    /// The calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The calendar month, `1..=12`.
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// The decade this month belongs to, e.g. `1990` for `1994-07`.
    #[must_use]
    pub fn decade(&self) -> i32 {
        self.year.div_euclid(10) * 10
    }

    /// Adds `n` calendar months (negative `n` subtracts), with exact
    /// year-boundary carry. No day component exists, so there is no
    /// end-of-month drift.
    #[must_use]
    pub fn plus_months(&self, n: i32) -> Self {
        let total = self.year * 12 + self.month as i32 - 1 + n;
        Self {
            year: total.div_euclid(12),
            month: total.rem_euclid(12) as u32 + 1,
        }
    }

    /// Subtracts `n` calendar months.
    #[must_use]
    pub fn minus_months(&self, n: u32) -> Self {
        self.plus_months(-(n as i32))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = ZeitgeistError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ZeitgeistError::InvalidYearMonth(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(ym(1958, 1).to_string(), "1958-01");
        assert_eq!(ym(2025, 12).to_string(), "2025-12");
    }

    #[test]
    fn test_parse_roundtrip() {
        let parsed: YearMonth = "2020-03".parse().unwrap();
        assert_eq!(parsed, ym(2020, 3));
        assert_eq!(parsed.to_string(), "2020-03");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("2020".parse::<YearMonth>().is_err());
        assert!("2020-13".parse::<YearMonth>().is_err());
        assert!("2020-00".parse::<YearMonth>().is_err());
        assert!("20-xx".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_ordering_matches_string_ordering() {
        let months = [
            ym(1958, 1),
            ym(1958, 2),
            ym(1999, 12),
            ym(2000, 1),
            ym(2020, 9),
            ym(2020, 10),
        ];
        for pair in months.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].to_string() < pair[1].to_string());
        }
    }

    #[test]
    fn test_month_arithmetic_carries_years() {
        assert_eq!(ym(2020, 1).minus_months(3), ym(2019, 10));
        assert_eq!(ym(2020, 11).plus_months(14), ym(2022, 1));
        assert_eq!(ym(2020, 5).plus_months(-5), ym(2019, 12));
        assert_eq!(ym(2020, 6).plus_months(0), ym(2020, 6));
    }

    #[test]
    fn test_decade() {
        assert_eq!(ym(1994, 7).decade(), 1990);
        assert_eq!(ym(2000, 1).decade(), 2000);
    }

    #[test]
    fn test_serde_uses_string_form() {
        let json = serde_json::to_string(&ym(1969, 7)).unwrap();
        assert_eq!(json, "\"1969-07\"");
        let back: YearMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ym(1969, 7));
    }
}
