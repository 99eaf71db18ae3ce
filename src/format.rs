// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 The imperial-calendar contributors

//! Fixed-width text forms of zoned date-times.
//!
//! Both calendars print as `YYYY-MM-DDTHH:mm:ss±HH:MM`, the year padded to at
//! least four digits. Parsing is strict about shape: a string that does not
//! match the pattern is [`MalformedDateTime`](CalendarError::MalformedDateTime),
//! while a well-shaped string with a field out of range reports that field.

use crate::error::{CalendarError, Result};
use crate::gregorian::ZonedGregorianDateTime;
use crate::imperial::{ImperialDateTime, ZonedImperialDateTime};
use crate::timezone::{Timezone, Zoned};
use chrono::{DateTime, FixedOffset};
use std::fmt;

/// Shape of `-MM-DDTHH:mm:ss`; `9` is any ASCII digit.
const FIELDS_SHAPE: &[u8] = b"-99-99T99:99:99";

/// Shape of `±HH:MM`; `~` is a sign.
const OFFSET_SHAPE: &[u8] = b"~99:99";

const MIN_YEAR_DIGITS: usize = 4;
const MAX_FRACTION_DIGITS: usize = 3;

/// Write `YYYY-MM-DDTHH:mm:ss`; negative years put the sign before the padding.
pub(crate) fn write_date_time(
    out: &mut impl fmt::Write,
    year: i32,
    [month, day, hour, minute, second]: [u8; 5],
) -> fmt::Result {
    if year < 0 {
        write!(out, "-{:04}", year.unsigned_abs())?;
    } else {
        write!(out, "{year:04}")?;
    }
    write!(out, "-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}")
}

/// `YYYY-MM-DDTHH:mm:ss±HH:MM` for an Imperial local time.
///
/// ```
/// use imperial_calendar::{format::format_imperial, ImperialDateTime, Timezone, Zoned, ZonedImperialDateTime};
/// let local = ImperialDateTime::new(217, 1, 1, 0, 0, 0).unwrap();
/// let zoned = ZonedImperialDateTime::with_timezone(local, Timezone::Utc);
/// assert_eq!(format_imperial(&zoned), "0217-01-01T00:00:00+00:00");
/// ```
pub fn format_imperial(datetime: &ZonedImperialDateTime) -> String {
    datetime.to_string()
}

/// `YYYY-MM-DDTHH:mm:ss±HH:MM` for a Gregorian local time.
pub fn format_gregorian(datetime: &ZonedGregorianDateTime) -> String {
    datetime.to_string()
}

fn fits(bytes: &[u8], shape: &[u8]) -> bool {
    bytes.len() == shape.len()
        && bytes.iter().zip(shape).all(|(&b, &s)| match s {
            b'9' => b.is_ascii_digit(),
            b'~' => b == b'+' || b == b'-',
            _ => b == s,
        })
}

fn two_digits(bytes: &[u8], at: usize) -> u8 {
    (bytes[at] - b'0') * 10 + (bytes[at + 1] - b'0')
}

/// Split off a leading `-MM-DDTHH:mm:ss` if it has the right shape.
fn split_fields(bytes: &[u8]) -> Option<(&[u8], &[u8])> {
    if bytes.len() < FIELDS_SHAPE.len() {
        return None;
    }
    let (fields, rest) = bytes.split_at(FIELDS_SHAPE.len());
    fits(fields, FIELDS_SHAPE).then_some((fields, rest))
}

/// Number of leading ASCII digits.
fn year_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Parse `YYYY-MM-DDTHH:mm:ss±HH:MM` (year four or more digits) as Imperial
/// local time in the trailing offset.
///
/// # Errors
/// * [`CalendarError::MalformedDateTime`] when the text has the wrong shape.
/// * [`CalendarError::TimezoneOutOfRange`] for an offset hour above 23 or
///   minute above 59.
/// * [`CalendarError::InvalidField`] for a year outside
///   [`MIN_YEAR`](crate::MIN_YEAR)`..=`[`MAX_YEAR`](crate::MAX_YEAR), a month
///   outside 1–24, a day past the month's length (leap-aware), or an hour,
///   minute or second out of range.
///
/// ```
/// use imperial_calendar::{format::parse_imperial, Zoned};
/// let zoned = parse_imperial("1425-24-28T12:00:00+09:00").unwrap();
/// assert_eq!(zoned.local().month(), 24);
/// assert_eq!(zoned.offset(), 9.0);
/// assert!(parse_imperial("2025-13-40T99:99:99+00:00").is_err());
/// ```
pub fn parse_imperial(text: &str) -> Result<ZonedImperialDateTime> {
    let malformed = || CalendarError::MalformedDateTime(text.to_string());
    let bytes = text.as_bytes();
    let digits = year_digits(bytes);
    if digits < MIN_YEAR_DIGITS {
        return Err(malformed());
    }
    let (fields, offset) = split_fields(&bytes[digits..]).ok_or_else(malformed)?;
    if !fits(offset, OFFSET_SHAPE) {
        return Err(malformed());
    }

    // All bytes checked above are ASCII, so these slices fall on char boundaries.
    let year: i64 = text[..digits].parse().unwrap_or(i64::MAX);
    let year = i32::try_from(year).map_err(|_| CalendarError::InvalidField {
        field: "year",
        value: year,
    })?;
    let timezone: Timezone = text[text.len() - OFFSET_SHAPE.len()..].parse()?;
    let local = ImperialDateTime::new(
        year,
        two_digits(fields, 1),
        two_digits(fields, 4),
        two_digits(fields, 7),
        two_digits(fields, 10),
        two_digits(fields, 13),
    )?;
    Ok(ZonedImperialDateTime::with_timezone(local, timezone))
}

/// Parse a Gregorian instant with an explicit offset:
/// `YYYY-MM-DDTHH:mm:ss[.sss](Z|±HH:MM)`.
///
/// # Errors
/// [`CalendarError::MalformedDateTime`] when the text has the wrong shape or
/// names a date that does not exist.
///
/// ```
/// use imperial_calendar::format::parse_gregorian;
/// let instant = parse_gregorian("2025-01-01T00:00:00.250Z").unwrap();
/// assert_eq!(instant.timestamp_millis(), 1_735_689_600_250);
/// assert!(parse_gregorian("2025-01-01 00:00:00").is_err());
/// ```
pub fn parse_gregorian(text: &str) -> Result<DateTime<FixedOffset>> {
    let malformed = || CalendarError::MalformedDateTime(text.to_string());
    let bytes = text.as_bytes();
    let digits = year_digits(bytes);
    if digits < MIN_YEAR_DIGITS {
        return Err(malformed());
    }
    let (_, mut rest) = split_fields(&bytes[digits..]).ok_or_else(malformed)?;
    if let Some(after_dot) = rest.strip_prefix(b".") {
        let fraction = year_digits(after_dot);
        if !(1..=MAX_FRACTION_DIGITS).contains(&fraction) {
            return Err(malformed());
        }
        rest = &after_dot[fraction..];
    }
    if rest != b"Z" && !fits(rest, OFFSET_SHAPE) {
        return Err(malformed());
    }
    DateTime::parse_from_rfc3339(text).map_err(|_| malformed())
}
