//! Shared constructors for tests. Panics on invalid input.

use chrono::NaiveDate;

use crate::{EthiopianDate, EthiopianDateRange};

pub fn ec(year: u16, month: u8, day: u8) -> EthiopianDate {
    EthiopianDate::new(year, month, day).unwrap_or_else(|err| panic!("bad test date {day}/{month}/{year}: {err}"))
}

pub fn gregorian(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| panic!("bad test date {year}-{month}-{day}"))
}

pub fn range(start: (u16, u8, u8), end: (u16, u8, u8)) -> EthiopianDateRange {
    EthiopianDateRange::new(ec(start.0, start.1, start.2), ec(end.0, end.1, end.2))
        .unwrap_or_else(|err| panic!("bad test range: {err}"))
}
