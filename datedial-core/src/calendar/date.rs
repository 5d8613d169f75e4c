//! Proleptic Gregorian calendar helpers

use core::fmt;

use chrono::{Datelike, NaiveDate};

/// Longest possible length of each month, February counted as 29
const MONTH_LIMITS: [u8; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Leap year rule: divisible by 4, except centuries not divisible by 400
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`
///
/// Returns 0 for a month outside 1-12.
pub fn days_in_month(month: u8, year: i32) -> u8 {
    match month {
        2 if !is_leap_year(year) => 28,
        1..=12 => MONTH_LIMITS[usize::from(month - 1)],
        _ => 0,
    }
}

/// Longest length `month` can have in any year (February = 29)
///
/// Returns 0 for a month outside 1-12.
pub fn month_limit(month: u8) -> u8 {
    match month {
        1..=12 => MONTH_LIMITS[usize::from(month - 1)],
        _ => 0,
    }
}

/// A valid calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Construct a date, or `None` if it does not exist
    pub fn new(year: i32, month: i32, day: i32) -> Option<Self> {
        let month = u32::try_from(month).ok()?;
        let day = u32::try_from(day).ok()?;
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Six display digits: two-digit year, month, day (`YYMMDD`)
    pub fn digits(&self) -> [u8; 6] {
        // rem_euclid keeps the result in 0..100, so the cast is lossless
        let yy = self.year.rem_euclid(100) as u8;
        [
            yy / 10,
            yy % 10,
            self.month / 10,
            self.month % 10,
            self.day / 10,
            self.day % 10,
        ]
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        // chrono months and days always fit in a u8
        Self {
            year: date.year(),
            month: date.month() as u8,
            day: date.day() as u8,
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(is_leap_year(1980));
        assert!(!is_leap_year(1981));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2, 2000), 29);
        assert_eq!(days_in_month(2, 1900), 28);
        assert_eq!(days_in_month(2, 2024), 29);
        for year in [1965, 1980, 1995, 2000] {
            assert_eq!(days_in_month(4, year), 30);
            assert_eq!(days_in_month(1, year), 31);
            assert_eq!(days_in_month(12, year), 31);
        }
    }

    #[test]
    fn test_days_in_month_out_of_range() {
        assert_eq!(days_in_month(0, 2000), 0);
        assert_eq!(days_in_month(13, 2000), 0);
        assert_eq!(month_limit(0), 0);
    }

    #[test]
    fn test_days_in_month_agrees_with_chrono() {
        for year in 1890..2110 {
            for month in 1..=12u8 {
                let n = days_in_month(month, year);
                assert!(CalendarDate::new(year, i32::from(month), i32::from(n)).is_some());
                assert!(CalendarDate::new(year, i32::from(month), i32::from(n) + 1).is_none());
            }
        }
    }

    #[test]
    fn test_month_limit_is_leap_agnostic() {
        assert_eq!(month_limit(2), 29);
        assert_eq!(month_limit(4), 30);
        assert_eq!(month_limit(7), 31);
    }

    #[test]
    fn test_new_rejects_invalid() {
        assert!(CalendarDate::new(1981, 2, 29).is_none());
        assert!(CalendarDate::new(1979, 4, 31).is_none());
        assert!(CalendarDate::new(1979, 0, 1).is_none());
        assert!(CalendarDate::new(1979, 1, 0).is_none());
        assert!(CalendarDate::new(1979, -1, 1).is_none());
    }

    #[test]
    fn test_display_and_digits() {
        let date = CalendarDate::new(1979, 11, 2).unwrap();
        assert_eq!(date.to_string(), "1979-11-02");
        assert_eq!(date.digits(), [7, 9, 1, 1, 0, 2]);
        let naive = NaiveDate::from_ymd_opt(1979, 11, 2).unwrap();
        assert_eq!(CalendarDate::from(naive), date);
    }
}
