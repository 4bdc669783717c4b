/*!
Civil date-time support for the catalog's convenience API.

Conversion queries speak epoch seconds; this module converts those to
and from the simplified extended ISO-8601 form `YYYY-MM-DDTHH:MM:SS`
(no fractional seconds, no zone suffix; the string renders whatever
instant it is given, UTC or already-shifted local). All arithmetic is
proleptic Gregorian with no dependence on the host's notion of local
time.
*/

use alloc::string::String;

use crate::error::{err, Error};

/// The earliest instant representable as a `DateTime`, i.e.
/// `0000-01-01T00:00:00`.
const EPOCH_MIN: i64 = -62167219200;

/// The latest instant representable as a `DateTime`, i.e.
/// `9999-12-31T23:59:59`.
const EPOCH_MAX: i64 = 253402300799;

const SECONDS_PER_DAY: i64 = 86400;

/// A civil date-time with second precision and no attached zone.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DateTime {
    year: i16,
    month: i8,
    day: i8,
    hour: i8,
    minute: i8,
    second: i8,
}

impl DateTime {
    /// Creates a civil date-time, validating every field.
    ///
    /// Years are restricted to `0..=9999` so that the ISO rendering is
    /// always the fixed-width 19-character form.
    pub fn new(
        year: i16,
        month: i8,
        day: i8,
        hour: i8,
        minute: i8,
        second: i8,
    ) -> Result<DateTime, Error> {
        if !(0..=9999).contains(&year) {
            return Err(err!("year {year} is not in 0..=9999"));
        }
        if !(1..=12).contains(&month) {
            return Err(err!("month {month} is not in 1..=12"));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(err!("day {day} is invalid for {year:04}-{month:02}"));
        }
        if !(0..=23).contains(&hour) {
            return Err(err!("hour {hour} is not in 0..=23"));
        }
        if !(0..=59).contains(&minute) {
            return Err(err!("minute {minute} is not in 0..=59"));
        }
        if !(0..=59).contains(&second) {
            return Err(err!("second {second} is not in 0..=59"));
        }
        Ok(DateTime { year, month, day, hour, minute, second })
    }

    /// Converts epoch seconds to a civil date-time.
    ///
    /// Errors when the instant falls outside year `0..=9999`. Note that
    /// catalog rule instants can legitimately sit below that floor (the
    /// pre-history rule each zone carries), so callers rendering
    /// arbitrary rule starts must handle the error.
    pub fn from_epoch_seconds(instant: i64) -> Result<DateTime, Error> {
        if !(EPOCH_MIN..=EPOCH_MAX).contains(&instant) {
            return Err(err!(
                "instant {instant} is outside the representable \
                 range of years 0..=9999",
            ));
        }
        let days = instant.div_euclid(SECONDS_PER_DAY);
        let secs = instant.rem_euclid(SECONDS_PER_DAY);
        let (year, month, day) = civil_from_days(days);
        Ok(DateTime {
            year: year as i16,
            month: month as i8,
            day: day as i8,
            hour: (secs / 3600) as i8,
            minute: (secs / 60 % 60) as i8,
            second: (secs % 60) as i8,
        })
    }

    /// Converts this civil date-time to epoch seconds.
    pub fn to_epoch_seconds(self) -> i64 {
        let days = days_from_civil(
            self.year as i64,
            self.month as i64,
            self.day as i64,
        );
        days * SECONDS_PER_DAY
            + (self.hour as i64) * 3600
            + (self.minute as i64) * 60
            + self.second as i64
    }

    /// The year, in `0..=9999`.
    pub fn year(self) -> i16 {
        self.year
    }

    /// The month, in `1..=12`.
    pub fn month(self) -> i8 {
        self.month
    }

    /// The day of the month, in `1..=31`.
    pub fn day(self) -> i8 {
        self.day
    }

    /// The hour, in `0..=23`.
    pub fn hour(self) -> i8 {
        self.hour
    }

    /// The minute, in `0..=59`.
    pub fn minute(self) -> i8 {
        self.minute
    }

    /// The second, in `0..=59`.
    pub fn second(self) -> i8 {
        self.second
    }
}

impl core::fmt::Display for DateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute,
            self.second,
        )
    }
}

impl core::str::FromStr for DateTime {
    type Err = Error;

    /// Parses the strict 19-character `YYYY-MM-DDTHH:MM:SS` form.
    fn from_str(string: &str) -> Result<DateTime, Error> {
        let bytes = string.as_bytes();
        if bytes.len() != 19 {
            return Err(err!(
                "expected 19 characters in the form YYYY-MM-DDTHH:MM:SS, \
                 got {} in {string:?}",
                bytes.len(),
            ));
        }
        let separators =
            [(4, b'-'), (7, b'-'), (10, b'T'), (13, b':'), (16, b':')];
        for (i, separator) in separators {
            if bytes[i] != separator {
                return Err(err!(
                    "expected {:?} at offset {i} in {string:?}",
                    separator as char,
                ));
            }
        }
        let digits = |range: core::ops::Range<usize>| -> Result<i16, Error> {
            let mut n: i16 = 0;
            for &byte in &bytes[range] {
                if !byte.is_ascii_digit() {
                    return Err(err!(
                        "expected digit, got {:?} in {string:?}",
                        byte as char,
                    ));
                }
                n = n * 10 + (byte - b'0') as i16;
            }
            Ok(n)
        };
        DateTime::new(
            digits(0..4)?,
            digits(5..7)? as i8,
            digits(8..10)? as i8,
            digits(11..13)? as i8,
            digits(14..16)? as i8,
            digits(17..19)? as i8,
        )
    }
}

/// Renders an instant (epoch seconds) in the simplified extended
/// ISO-8601 form `YYYY-MM-DDTHH:MM:SS`.
pub fn to_iso_string(instant: i64) -> Result<String, Error> {
    use alloc::string::ToString;

    Ok(DateTime::from_epoch_seconds(instant)?.to_string())
}

/// Parses the simplified extended ISO-8601 form `YYYY-MM-DDTHH:MM:SS`
/// into epoch seconds.
pub fn from_iso_string(string: &str) -> Result<i64, Error> {
    Ok(string.parse::<DateTime>()?.to_epoch_seconds())
}

fn is_leap_year(year: i16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(year: i16, month: i8) -> i8 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// Days from the epoch for a proleptic Gregorian date.
///
/// ref: http://howardhinnant.github.io/date_algorithms.html#days_from_civil
fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let doy = (153 * (if month > 2 { month - 3 } else { month + 9 }) + 2) / 5
        + day
        - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe - 719468
}

/// The proleptic Gregorian date for days from the epoch.
///
/// ref: http://howardhinnant.github.io/date_algorithms.html#civil_from_days
fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719468;
    let era = z.div_euclid(146097);
    let doe = z - era * 146097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    (if month <= 2 { y + 1 } else { y }, month, day)
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn known_instants() {
        let tests: &[(i64, &str)] = &[
            (0, "1970-01-01T00:00:00"),
            (-1, "1969-12-31T23:59:59"),
            (1606159221, "2020-11-23T19:20:21"),
            (951782400, "2000-02-29T00:00:00"),
            (951868800, "2000-03-01T00:00:00"),
            (1711846800, "2024-03-31T01:00:00"),
            (EPOCH_MIN, "0000-01-01T00:00:00"),
            (EPOCH_MAX, "9999-12-31T23:59:59"),
        ];
        for &(instant, iso) in tests {
            assert_eq!(to_iso_string(instant).unwrap(), iso);
            assert_eq!(from_iso_string(iso).unwrap(), instant);
        }
    }

    #[test]
    fn rejects_malformed() {
        let tests: &[&str] = &[
            "",
            "2020-11-23",
            "2020-11-23 19:20:21",
            "2020-11-23T19:20:21Z",
            "2020/11/23T19:20:21",
            "2020-13-23T19:20:21",
            "2020-00-23T19:20:21",
            "2020-11-00T19:20:21",
            "2020-02-30T19:20:21",
            "2021-02-29T19:20:21",
            "2020-11-23T24:20:21",
            "2020-11-23T19:60:21",
            "2020-11-23T19:20:60",
            "2020-11-2aT19:20:21",
        ];
        for &input in tests {
            assert!(
                from_iso_string(input).is_err(),
                "expected {input:?} to be rejected",
            );
        }
    }

    #[test]
    fn leap_day_accepted_in_leap_years_only() {
        assert!("2020-02-29T00:00:00".parse::<DateTime>().is_ok());
        assert!("2000-02-29T00:00:00".parse::<DateTime>().is_ok());
        assert!("1900-02-29T00:00:00".parse::<DateTime>().is_err());
    }

    #[test]
    fn out_of_range_instants() {
        assert!(DateTime::from_epoch_seconds(EPOCH_MAX + 1).is_err());
        assert!(DateTime::from_epoch_seconds(EPOCH_MIN - 1).is_err());
        assert!(DateTime::from_epoch_seconds(i64::MAX).is_err());
        assert!(DateTime::from_epoch_seconds(i64::MIN).is_err());
    }

    #[test]
    fn display_matches_parse() {
        let dt = DateTime::new(2024, 3, 31, 1, 0, 0).unwrap();
        assert_eq!(dt.to_string(), "2024-03-31T01:00:00");
        assert_eq!(dt.to_string().parse::<DateTime>().unwrap(), dt);
    }

    quickcheck::quickcheck! {
        fn prop_epoch_roundtrip(instant: i64) -> quickcheck::TestResult {
            let instant = instant % (EPOCH_MAX + 1);
            if instant < EPOCH_MIN {
                return quickcheck::TestResult::discard();
            }
            let dt = DateTime::from_epoch_seconds(instant).unwrap();
            quickcheck::TestResult::from_bool(
                dt.to_epoch_seconds() == instant,
            )
        }
    }
}
