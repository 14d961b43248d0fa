/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (Pagume)
pub const MAX_MONTH: u8 = 13;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for Meskerem, the first month of the year
pub const MESKEREM: u8 = 1;
/// Month number for Pagume, the short intercalary month
pub const PAGUME: u8 = 13;

/// Length of each of the twelve regular months
pub const DAYS_IN_REGULAR_MONTH: u8 = 30;
/// Days in Pagume for common years
pub const PAGUME_DAYS: u8 = 5;
/// Days in Pagume for leap years
pub const PAGUME_DAYS_LEAP: u8 = 6;

/// Leap year occurs every 4 years...
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// ...on the year preceding a multiple of four
pub(crate) const LEAP_YEAR_REMAINDER: u16 = 3;

/// Days in one four-year cycle
pub(crate) const DAYS_IN_CYCLE: i64 = 1461;
/// Days in a common year
pub(crate) const DAYS_IN_YEAR: i64 = 365;

/// Julian Day Number of the day before `1/1/0001`, so that `1/1/0001` lands
/// on JDN 1 724 221 (Gregorian 0008-08-27, Julian 0008-08-29).
pub const EPOCH_OFFSET: i64 = 1_723_855;

/// Date component separator (`DD/MM/YYYY`)
pub const DATE_SEPARATOR: char = '/';
/// Range separator (`DD/MM/YYYY-DD/MM/YYYY`)
pub const RANGE_SEPARATOR: char = '-';

/// Month names, index 0 is Meskerem
pub const MONTH_NAMES: [&str; 13] = [
    "Meskerem", "Tikimt", "Hidar", "Tahsas", "Tir", "Yekatit", "Megabit", "Miyazya", "Ginbot",
    "Sene", "Hamle", "Nehase", "Pagume",
];

/// Weekday names, index 0 is Sunday
pub const DAY_OF_WEEK_NAMES: [&str; 7] = ["Ehud", "Segno", "Maksegno", "Rob", "Hamus", "Arb", "Kidame"];
