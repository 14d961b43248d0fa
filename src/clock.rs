//! Sources of "today".
//!
//! Reading the wall clock is the only impure thing this crate does, so it
//! sits behind [`Clock`] and callers can pin it.

use chrono::{Local, NaiveDate};

/// Supplies the current civil Gregorian date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The host's local date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<F: Fn() -> NaiveDate> Clock for F {
    fn today(&self) -> NaiveDate {
        self()
    }
}
