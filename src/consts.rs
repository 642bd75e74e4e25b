/// Earliest year a clinic record may carry (inclusive)
pub const MIN_YEAR: i32 = 1900;
/// Latest year a clinic record may carry (inclusive)
pub const MAX_YEAR: i32 = 3000;

/// January
pub const MIN_MONTH: i32 = 1;
/// December
pub const MAX_MONTH: i32 = 12;

/// First day of any month
pub const MIN_DAY: i32 = 1;
/// Absolute day bound, before the month is taken into account
pub const MAX_DAY: i32 = 31;

/// Month number for February
pub const FEBRUARY: i32 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: i32 = 29;

/// Days in each month of a non-leap year (index 0 is unused, months are 1-indexed)
pub const DAYS_IN_MONTH: [i32; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Largest day each month can have in any year.
/// Used when the year is unknown, so February allows the leap day.
pub const CONSERVATIVE_DAYS_IN_MONTH: [i32; 13] = [
    0,  // index 0 unused
    31, // January
    29, // February
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Separator used when displaying dates
pub const DATE_SEPARATOR: char = '-';
