//! Day-count conversion.
//!
//! Every cross-calendar conversion goes through a Julian Day Number: Gregorian
//! dates and Ethiopian dates are each mapped to and from it with closed-form
//! integer arithmetic.

use chrono::{Datelike, NaiveDate};

use crate::consts::{
    DAYS_IN_CYCLE, DAYS_IN_REGULAR_MONTH, DAYS_IN_YEAR, EPOCH_OFFSET, MAX_MONTH, MAX_YEAR, MESKEREM,
};
use crate::prelude::*;
use crate::{DateError, EthiopianDate};

/// A Julian Day Number: the number of days since noon, 1 January 4713 BC
/// (proleptic Julian), truncated to the civil day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
#[display(fmt = "JDN {_0}")]
pub struct DayCount(i64);

impl DayCount {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Shifts by `days`, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(self, days: i64) -> Option<Self> {
        match self.0.checked_add(days) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

/// Proleptic Gregorian date to day count.
///
/// January and February are treated as months 13 and 14 of the previous
/// year so the leap day falls at the end of the shifted year.
pub fn gregorian_to_day_count(date: NaiveDate) -> DayCount {
    let (mut year, mut month) = (i64::from(date.year()), i64::from(date.month()));
    let day = i64::from(date.day());
    if month <= 2 {
        year -= 1;
        month += 12;
    }
    // March-based month index, 0 = March
    let m = month - 3;
    let y = year + 4800;
    DayCount(
        day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
            + y.div_euclid(400)
            - 32045,
    )
}

/// Exact inverse of [`gregorian_to_day_count`].
///
/// # Errors
/// Returns `DateError::OutOfRange` if the result is outside what `NaiveDate`
/// can represent.
pub fn day_count_to_gregorian(n: DayCount) -> Result<NaiveDate, DateError> {
    let out_of_range = || {
        log::trace!("day count {n} has no Gregorian representation");
        DateError::OutOfRange(n.0)
    };
    if n < gregorian_to_day_count(NaiveDate::MIN) || n > gregorian_to_day_count(NaiveDate::MAX) {
        return Err(out_of_range());
    }

    let a = n.0 + 32044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(DAYS_IN_CYCLE);
    let e = c - (DAYS_IN_CYCLE * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);

    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4800 + m.div_euclid(10);

    let year = i32::try_from(year).map_err(|_| out_of_range())?;
    // month and day are bounded by construction: 1..=12 and 1..=31
    NaiveDate::from_ymd_opt(year, month as u32, day as u32).ok_or_else(out_of_range)
}

/// Ethiopian `(year, month, day)` to day count, validating the triple first.
///
/// # Errors
/// Returns `DateError::InvalidYear`, `InvalidMonth` or `InvalidDay` if the
/// triple names no date.
pub fn ec_to_day_count(year: u16, month: u8, day: u8) -> Result<DayCount, DateError> {
    EthiopianDate::new(year, month, day).map(|date| date.to_day_count())
}

/// `EPOCH_OFFSET + year*365 + floor(year/4) + (month-1)*30 + day`, for
/// components that are already known to be valid.
pub(crate) const fn raw_day_count(year: u16, month: u8, day: u8) -> DayCount {
    let year = year as i64;
    DayCount(
        EPOCH_OFFSET
            + year * DAYS_IN_YEAR
            + year / 4
            + (month as i64 - 1) * DAYS_IN_REGULAR_MONTH as i64
            + day as i64,
    )
}

/// Day count of `1/1/0001`
pub const FIRST_EC_DAY: DayCount = raw_day_count(1, MESKEREM, 1);
/// Day count of the last day of `MAX_YEAR`
pub const LAST_EC_DAY: DayCount = DayCount(raw_day_count(MAX_YEAR + 1, MESKEREM, 1).0 - 1);

/// Inverse of [`ec_to_day_count`].
///
/// # Errors
/// Returns `DateError::OutOfRange` when `n` falls before `1/1/0001` or after
/// the last day of `MAX_YEAR`.
pub fn day_count_to_ec(n: DayCount) -> Result<EthiopianDate, DateError> {
    if n < FIRST_EC_DAY || n > LAST_EC_DAY {
        log::trace!("day count {n} is outside years 1..={MAX_YEAR}");
        return Err(DateError::OutOfRange(n.0));
    }

    // Zero-based ordinal where year Y starts at floor(1461*Y/4)
    let k = n.0 - EPOCH_OFFSET - 1;
    let year = (4 * k + 3).div_euclid(DAYS_IN_CYCLE);
    let day_of_year = k - (DAYS_IN_CYCLE * year).div_euclid(4) + 1;
    let month = ((day_of_year - 1) / i64::from(DAYS_IN_REGULAR_MONTH) + 1).min(i64::from(MAX_MONTH));
    let day = day_of_year - (month - 1) * i64::from(DAYS_IN_REGULAR_MONTH);

    // year, month and day are all within their narrow types here
    EthiopianDate::new(year as u16, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ec, gregorian};

    /// `num_days_from_ce` counts 0001-01-01 as day 1, which is JDN 1 721 426
    const CE_TO_JDN: i64 = 1_721_425;

    #[test]
    fn test_gregorian_reference_points() {
        struct TestCase {
            date: NaiveDate,
            jdn:  i64,
        }

        let cases = [
            TestCase {
                date: gregorian(2000, 1, 1),
                jdn:  2_451_545,
            },
            TestCase {
                date: gregorian(1970, 1, 1),
                jdn:  2_440_588,
            },
            TestCase {
                date: gregorian(1858, 11, 17),
                jdn:  2_400_001,
            },
            TestCase {
                date: gregorian(1, 1, 1),
                jdn:  1_721_426,
            },
            TestCase {
                date: gregorian(2024, 9, 11),
                jdn:  2_460_565,
            },
        ];

        for case in &cases {
            assert_eq!(gregorian_to_day_count(case.date).get(), case.jdn, "{}", case.date);
            assert_eq!(day_count_to_gregorian(DayCount::new(case.jdn)).unwrap(), case.date);
        }
    }

    #[test]
    fn test_gregorian_matches_chrono_day_numbers() {
        let mut date = gregorian(1900, 1, 1);
        let end = gregorian(3000, 1, 1);
        while date <= end {
            let expected = i64::from(date.num_days_from_ce()) + CE_TO_JDN;
            assert_eq!(gregorian_to_day_count(date).get(), expected, "{date}");
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_gregorian_round_trip_leap_days() {
        for year in [1600, 1900, 2000, 2024, 2100, 2400] {
            let feb_end = if year % 400 == 0 || (year % 4 == 0 && year % 100 != 0) { 29 } else { 28 };
            for (month, day) in [(2, feb_end), (3, 1), (12, 31), (1, 1)] {
                let date = gregorian(year, month, day);
                assert_eq!(day_count_to_gregorian(gregorian_to_day_count(date)).unwrap(), date);
            }
        }
    }

    #[test]
    fn test_day_count_to_gregorian_out_of_range() {
        let result = day_count_to_gregorian(DayCount::new(1_000_000_000_000));
        assert!(matches!(result, Err(DateError::OutOfRange(_))));
        assert!(day_count_to_gregorian(DayCount::new(i64::MIN)).is_err());

        let max = gregorian_to_day_count(NaiveDate::MAX);
        assert_eq!(day_count_to_gregorian(max).unwrap(), NaiveDate::MAX);
    }

    #[test]
    fn test_ec_epoch() {
        assert_eq!(raw_day_count(1, 1, 1).get(), 1_724_221);
        assert_eq!(day_count_to_ec(DayCount::new(1_724_221)).unwrap(), ec(1, 1, 1));
    }

    #[test]
    fn test_ec_to_day_count_validates() {
        assert_eq!(ec_to_day_count(2017, 1, 1).unwrap().get(), 2_460_565);
        assert_eq!(ec_to_day_count(2015, 13, 6).unwrap(), raw_day_count(2015, 13, 6));

        assert!(matches!(ec_to_day_count(2016, 14, 40), Err(DateError::InvalidMonth(14))));
        assert!(matches!(ec_to_day_count(2016, 13, 6), Err(DateError::InvalidDay { .. })));
        assert!(matches!(ec_to_day_count(2016, 1, 31), Err(DateError::InvalidDay { .. })));
        assert!(matches!(ec_to_day_count(0, 1, 1), Err(DateError::InvalidYear(0))));
    }

    #[test]
    fn test_ec_new_year_boundaries() {
        // Pagume 6, 2015 (leap) is followed by Meskerem 1, 2016
        let leap_end = raw_day_count(2015, 13, 6);
        assert_eq!(leap_end.get() + 1, raw_day_count(2016, 1, 1).get());
        assert_eq!(day_count_to_ec(leap_end).unwrap(), ec(2015, 13, 6));

        // Pagume 5, 2016 (common) is followed by Meskerem 1, 2017
        let common_end = raw_day_count(2016, 13, 5);
        assert_eq!(common_end.get() + 1, raw_day_count(2017, 1, 1).get());
        assert_eq!(day_count_to_ec(common_end).unwrap(), ec(2016, 13, 5));
    }

    #[test]
    fn test_ec_last_day_of_every_year_in_cycle() {
        for year in 1..=8u16 {
            let last = if year % 4 == 3 { 6 } else { 5 };
            let n = raw_day_count(year, 13, last);
            assert_eq!(day_count_to_ec(n).unwrap(), ec(year, 13, last), "end of {year}");
            assert_eq!(day_count_to_ec(DayCount::new(n.get() + 1)).unwrap(), ec(year + 1, 1, 1));
        }
    }

    #[test]
    fn test_ec_round_trip_every_day_count() {
        let first = raw_day_count(1, 1, 1).get();
        let last = raw_day_count(3000, 13, 5).get();
        for n in first..=last {
            let date = day_count_to_ec(DayCount::new(n)).unwrap();
            assert_eq!(date.to_day_count().get(), n);
        }
    }

    #[test]
    fn test_ec_consecutive_days_are_consecutive_counts() {
        let mut previous = raw_day_count(2010, 1, 1).get();
        for year in 2010..=2020u16 {
            for month in 1..=13u8 {
                for day in 1..=crate::types::month_length(year, month) {
                    if (year, month, day) == (2010, 1, 1) {
                        continue;
                    }
                    let n = raw_day_count(year, month, day).get();
                    assert_eq!(n, previous + 1, "{day}/{month}/{year}");
                    previous = n;
                }
            }
        }
    }

    #[test]
    fn test_day_count_to_ec_out_of_range() {
        assert_eq!(FIRST_EC_DAY, raw_day_count(1, 1, 1));
        assert_eq!(day_count_to_ec(LAST_EC_DAY).unwrap().year(), MAX_YEAR);

        let before_epoch = DayCount::new(raw_day_count(1, 1, 1).get() - 1);
        assert!(matches!(day_count_to_ec(before_epoch), Err(DateError::OutOfRange(_))));

        let last_day = crate::types::month_length(MAX_YEAR, 13);
        let after_max = DayCount::new(raw_day_count(MAX_YEAR, 13, last_day).get() + 1);
        assert!(matches!(day_count_to_ec(after_max), Err(DateError::OutOfRange(_))));

        assert!(day_count_to_ec(DayCount::new(i64::MAX)).is_err());
        assert!(day_count_to_ec(DayCount::new(i64::MIN)).is_err());
    }

    #[test]
    fn test_day_count_display_and_checked_add() {
        let n = DayCount::new(2_460_565);
        assert_eq!(n.to_string(), "JDN 2460565");
        assert_eq!(n.checked_add(1), Some(DayCount::new(2_460_566)));
        assert_eq!(DayCount::new(i64::MAX).checked_add(1), None);
        let raw: i64 = n.into();
        assert_eq!(raw, 2_460_565);
    }
}
