use crate::DateError;
use crate::consts::{
    DAYS_IN_REGULAR_MONTH, LEAP_YEAR_CYCLE, LEAP_YEAR_REMAINDER, MAX_MONTH, MAX_YEAR, MIN_DAY,
    PAGUME, PAGUME_DAYS, PAGUME_DAYS_LEAP,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::num::NonZeroU16;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        let non_zero = NonZeroU16::new(value).ok_or(DateError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(DateError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether this year carries a sixth day of Pagume
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=13)
/// Month 13 is Pagume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    #[inline]
    pub const fn is_pagume(self) -> bool {
        self.get() == PAGUME
    }

    /// Display name of the month, e.g. "Meskerem"
    pub const fn name(self) -> &'static str {
        crate::consts::MONTH_NAMES[(self.get() - 1) as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDay {
            year,
            month,
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;

        if month == 0 || month > MAX_MONTH || value > month_length(year, month) {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// The first day of any month
    pub const fn first() -> Self {
        Self(NonZeroU8::MIN)
    }

    /// The last day of `month` in `year`
    pub const fn last_of(year: u16, month: Month) -> Self {
        Self(NonZeroU8::MIN.saturating_add(days_in_month(year, month) - 1))
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Without year/month context only the widest month can be checked
        if !(MIN_DAY..=DAYS_IN_REGULAR_MONTH).contains(&value) {
            return Err(DateError::InvalidDay {
                year: 0,
                month: 0,
                day: value,
            });
        }
        NonZeroU8::new(value).map(Self).ok_or(DateError::InvalidDay {
            year: 0,
            month: 0,
            day: value,
        })
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// A year is leap when it is one short of a multiple of four (3, 7, 11, ...).
pub const fn is_leap_year(year: u16) -> bool {
    year % LEAP_YEAR_CYCLE == LEAP_YEAR_REMAINDER
}

/// Length of `month` in `year`. Months 1-12 are always 30 days; Pagume is
/// 5 days, or 6 in a leap year.
pub const fn days_in_month(year: u16, month: Month) -> u8 {
    month_length(year, month.get())
}

/// Raw form of [`days_in_month`]; `month` must already be in `1..=MAX_MONTH`.
pub(crate) const fn month_length(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month < PAGUME {
        DAYS_IN_REGULAR_MONTH
    } else if is_leap_year(year) {
        PAGUME_DAYS_LEAP
    } else {
        PAGUME_DAYS
    }
}

/// Checks a raw `(day, month, year)` triple without constructing anything.
pub const fn is_valid_date(day: u8, month: u8, year: u16) -> bool {
    year >= 1
        && year <= MAX_YEAR
        && month >= 1
        && month <= MAX_MONTH
        && day >= MIN_DAY
        && day <= month_length(year, month)
}
