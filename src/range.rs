use std::{cmp::Ordering, iter::FusedIterator, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{DateError, EthiopianDate, MIN_DAY, RANGE_SEPARATOR, prelude::*};

/// An inclusive span of Ethiopian dates.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}-{end}")]
pub struct EthiopianDateRange {
    start: EthiopianDate,
    end:   EthiopianDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: EthiopianDate, end: EthiopianDate },

    /// Error building or parsing one of the bounds.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl EthiopianDateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: EthiopianDate, end: EthiopianDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Every day of `month` in `year`, for laying out a month grid.
    ///
    /// # Errors
    /// Returns `RangeError::Date` if the year or month is invalid.
    pub fn month(year: u16, month: u8) -> Result<Self, RangeError> {
        let start = EthiopianDate::new(year, month, MIN_DAY)?;
        Self::new(start, start.end_of_month())
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> EthiopianDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> EthiopianDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (EthiopianDate, EthiopianDate) {
        (self.start, self.end)
    }

    /// Checks if the range contains a given date
    pub fn contains(&self, date: &EthiopianDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Checks if this range overlaps with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if this range is completely contained within another range
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Number of days covered, counting both ends
    pub const fn len_days(&self) -> i64 {
        self.start.days_until(&self.end) + 1
    }

    /// Iterates over every day in the range, in order
    pub const fn days(&self) -> Days {
        Days {
            next: Some(self.start),
            end:  self.end,
        }
    }
}

/// Iterator over the days of an [`EthiopianDateRange`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<EthiopianDate>,
    end:  EthiopianDate,
}

impl Iterator for Days {
    type Item = EthiopianDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current < self.end {
            current.add_days(1).ok()
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map_or(0, |next| usize::try_from(next.days_until(&self.end) + 1).unwrap_or(0));
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Days {}

impl FusedIterator for Days {}

impl IntoIterator for EthiopianDateRange {
    type Item = EthiopianDate;
    type IntoIter = Days;

    fn into_iter(self) -> Self::IntoIter {
        self.days()
    }
}

impl FromStr for EthiopianDateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let Some((start_str, end_str)) = trimmed.split_once(RANGE_SEPARATOR) else {
            return Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            )));
        };
        if end_str.contains(RANGE_SEPARATOR) {
            let separator_count = trimmed.matches(RANGE_SEPARATOR).count();
            return Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            )));
        }

        let start = start_str.trim().parse::<EthiopianDate>()?;
        let end = end_str.trim().parse::<EthiopianDate>()?;

        Self::new(start, end)
    }
}

impl PartialOrd for EthiopianDateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EthiopianDateRange {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare start dates first, then end dates
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl Serialize for EthiopianDateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EthiopianDateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
