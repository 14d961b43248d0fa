//! Ethiopian calendar dates.
//!
//! Twelve 30-day months followed by Pagume, which has 5 days or 6 in a leap
//! year. Dates convert to and from the proleptic Gregorian calendar through a
//! Julian Day Number ([`DayCount`]); arithmetic, ordering and the
//! `DD/MM/YYYY` text form are all defined on top of that.

mod clock;
mod consts;
mod day_count;
mod prelude;
mod range;
#[cfg(test)]
mod test_utils;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use day_count::{
    DayCount, FIRST_EC_DAY, LAST_EC_DAY, day_count_to_ec, day_count_to_gregorian, ec_to_day_count,
    gregorian_to_day_count,
};
pub use range::{Days, EthiopianDateRange, RangeError};
pub use types::{Day, Month, Year, days_in_month, is_leap_year, is_valid_date};

use crate::prelude::*;
use chrono::{Datelike, Months, NaiveDate, Weekday};
use std::cmp::Ordering;
use std::str::FromStr;

/// The Gregorian side of every conversion.
pub type GregorianDate = NaiveDate;

/// A validated Ethiopian calendar date.
///
/// Values are immutable: every operation returns a new date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:02}/{:02}/{:04}", "day.get()", "month.get()", "year.get()")]
pub struct EthiopianDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {month:02}/{year}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Year {} is outside 1-{}", "_0", MAX_YEAR)]
    YearOutOfRange(i64),
    #[display(fmt = "Day count {_0} is outside the supported range")]
    OutOfRange(i64),
}

impl std::error::Error for DateError {}

impl DateError {
    /// True for errors caused by a `(year, month, day)` triple that names no
    /// real date.
    pub const fn is_invalid_date(&self) -> bool {
        matches!(
            self,
            Self::InvalidYear(_) | Self::InvalidMonth(_) | Self::InvalidDay { .. }
        )
    }
}

impl EthiopianDate {
    /// Creates a date from raw components, validating all three.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `InvalidMonth` or `InvalidDay` for
    /// the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day, year, month)?,
        })
    }

    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component, 13 for Pagume
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Length of this date's month
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year(), self.month)
    }

    pub const fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// Converts to database columns: (year, month, day)
    pub const fn to_columns(&self) -> (u16, u8, u8) {
        (self.year(), self.month(), self.day())
    }

    /// Creates from database columns: (year, month, day)
    ///
    /// # Errors
    /// Returns `DateError` if the columns do not form a valid date.
    pub fn from_columns(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Self::new(year, month, day)
    }
}

// --- conversion ---

impl EthiopianDate {
    pub const fn to_day_count(&self) -> DayCount {
        day_count::raw_day_count(self.year(), self.month(), self.day())
    }

    /// # Errors
    /// Returns `DateError::OutOfRange` outside years `1..=MAX_YEAR`.
    pub fn from_day_count(n: DayCount) -> Result<Self, DateError> {
        day_count_to_ec(n)
    }

    /// # Errors
    /// Returns `DateError::OutOfRange` for Gregorian dates before `1/1/0001`
    /// (0008-08-27) or after the end of `MAX_YEAR`.
    pub fn from_gregorian(date: GregorianDate) -> Result<Self, DateError> {
        day_count_to_ec(gregorian_to_day_count(date))
    }

    /// # Errors
    /// Returns `DateError::OutOfRange` if the host date type cannot hold the
    /// result.
    pub fn to_gregorian(&self) -> Result<GregorianDate, DateError> {
        day_count_to_gregorian(self.to_day_count())
    }

    /// Weekday of the Gregorian equivalent.
    pub const fn day_of_week(&self) -> Weekday {
        // JDN 0 was a Monday
        const WEEKDAYS: [Weekday; 7] = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];
        WEEKDAYS[self.to_day_count().get().rem_euclid(7) as usize]
    }

    pub fn weekday_name(&self) -> &'static str {
        DAY_OF_WEEK_NAMES[self.day_of_week().num_days_from_sunday() as usize]
    }
}

// --- arithmetic ---

impl EthiopianDate {
    /// Moves by whole years, keeping month and day.
    ///
    /// Pagume 6 of a leap year becomes Pagume 5 when the target year is
    /// common; no other day is ever adjusted.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` if the target year is outside
    /// `1..=MAX_YEAR`.
    pub fn add_years(&self, years: i32) -> Result<Self, DateError> {
        let target = i64::from(self.year()) + i64::from(years);
        let year = u16::try_from(target)
            .ok()
            .and_then(|y| Year::new(y).ok())
            .ok_or(DateError::YearOutOfRange(target))?;
        let day = self.day().min(days_in_month(year.get(), self.month));
        Self::new(year.get(), self.month(), day)
    }

    /// Moves by `months` calendar months of the Gregorian equivalent.
    ///
    /// The first of the Gregorian month is shifted and the day of month is
    /// then added back as a day count, so a day past the end of the target
    /// month rolls into the following month (2024-01-31 plus one month is
    /// 2024-03-02).
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves the supported range.
    pub fn add_months(&self, months: i32) -> Result<Self, DateError> {
        let gregorian = self.to_gregorian()?;
        let out_of_range = DateError::OutOfRange(self.to_day_count().get());
        let delta = Months::new(months.unsigned_abs());
        let first = gregorian
            .with_day(1)
            .and_then(|first| {
                if months < 0 {
                    first.checked_sub_months(delta)
                } else {
                    first.checked_add_months(delta)
                }
            })
            .ok_or_else(|| out_of_range.clone())?;
        let shifted = gregorian_to_day_count(first)
            .checked_add(i64::from(gregorian.day()) - 1)
            .ok_or(out_of_range)?;
        Self::from_day_count(shifted)
    }

    /// Moves by `days` days.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves the supported range.
    pub fn add_days(&self, days: i64) -> Result<Self, DateError> {
        let n = self.to_day_count();
        let shifted = n.checked_add(days).ok_or(DateError::OutOfRange(n.get()))?;
        Self::from_day_count(shifted)
    }

    /// Signed number of days from `self` to `other`.
    pub const fn days_until(&self, other: &Self) -> i64 {
        other.to_day_count().get() - self.to_day_count().get()
    }

    /// First day of this date's month
    pub fn start_of_month(&self) -> Self {
        Self {
            day: Day::first(),
            ..*self
        }
    }

    /// Last day of this date's month
    pub fn end_of_month(&self) -> Self {
        Self {
            day: Day::last_of(self.year(), self.month),
            ..*self
        }
    }

    /// First day of the following month, rolling Pagume into the next year.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` past `MAX_YEAR`.
    pub fn next_month_start(&self) -> Result<Self, DateError> {
        if self.month.is_pagume() {
            let year = i64::from(self.year()) + 1;
            let year = u16::try_from(year).map_err(|_| DateError::YearOutOfRange(year))?;
            return Self::new(year, MESKEREM, MIN_DAY).map_err(|_| DateError::YearOutOfRange(year.into()));
        }
        Self::new(self.year(), self.month() + 1, MIN_DAY)
    }

    /// First day of the preceding month, rolling Meskerem back into Pagume.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` before year 1.
    pub fn previous_month_start(&self) -> Result<Self, DateError> {
        if self.month() == MESKEREM {
            let year = i64::from(self.year()) - 1;
            let year = u16::try_from(year).map_err(|_| DateError::YearOutOfRange(year))?;
            return Self::new(year, PAGUME, MIN_DAY).map_err(|_| DateError::YearOutOfRange(year.into()));
        }
        Self::new(self.year(), self.month() - 1, MIN_DAY)
    }
}

// --- public surface as free functions ---

/// # Errors
/// See [`EthiopianDate::from_gregorian`].
pub fn gregorian_to_ec(date: GregorianDate) -> Result<EthiopianDate, DateError> {
    EthiopianDate::from_gregorian(date)
}

/// Converts a raw `(year, month, day)` triple, validating it first.
///
/// # Errors
/// Returns an invalid-date error for a bad triple, or `OutOfRange` from the
/// Gregorian side.
pub fn ec_to_gregorian(year: u16, month: u8, day: u8) -> Result<GregorianDate, DateError> {
    EthiopianDate::new(year, month, day)?.to_gregorian()
}

/// Chronological comparison.
pub fn compare(a: &EthiopianDate, b: &EthiopianDate) -> Ordering {
    a.cmp(b)
}

/// `DD/MM/YYYY`
pub fn format(date: &EthiopianDate) -> String {
    date.to_string()
}

/// Strict `DD/MM/YYYY` parse; `None` on any mismatch or invalid date.
pub fn parse(text: &str) -> Option<EthiopianDate> {
    text.parse()
        .map_err(|err: DateError| log::trace!("rejected {text:?}: {err}"))
        .ok()
}

/// Today's date from the host clock.
///
/// # Errors
/// Returns `DateError::OutOfRange` if the host clock reads a date outside
/// the supported range.
pub fn today() -> Result<EthiopianDate, DateError> {
    today_with(&SystemClock)
}

/// Today's date from `clock`.
///
/// # Errors
/// See [`today`].
pub fn today_with<C: Clock + ?Sized>(clock: &C) -> Result<EthiopianDate, DateError> {
    let gregorian = clock.today();
    let date = EthiopianDate::from_gregorian(gregorian)?;
    log::debug!("today is {date} (Gregorian {gregorian})");
    Ok(date)
}

// --- parsing ---

impl FromStr for EthiopianDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DateError::EmptyInput);
        }

        // Exactly DD/MM/YYYY: fixed width, ASCII digits, fixed separators
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, &b)| match i {
                2 | 5 => b == DATE_SEPARATOR as u8,
                _ => b.is_ascii_digit(),
            });
        if !well_formed {
            return Err(DateError::InvalidFormat(s.to_owned()));
        }

        let day = Self::parse_u8(&s[0..2])?;
        let month = Self::parse_u8(&s[3..5])?;
        let year = Self::parse_u16(&s[6..10])?;

        Self::new(year, month, day)
    }
}

impl EthiopianDate {
    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, DateError> {
        s.parse::<u16>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, DateError> {
        s.parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl PartialOrd for EthiopianDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EthiopianDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_day_count().cmp(&other.to_day_count())
    }
}

impl TryFrom<(u16, u8, u8)> for EthiopianDate {
    type Error = DateError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::from_columns(value.0, value.1, value.2)
    }
}

impl TryFrom<GregorianDate> for EthiopianDate {
    type Error = DateError;

    fn try_from(value: GregorianDate) -> Result<Self, Self::Error> {
        Self::from_gregorian(value)
    }
}

impl serde::Serialize for EthiopianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for EthiopianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
