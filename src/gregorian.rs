// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 The imperial-calendar contributors

//! Proleptic Gregorian date-times.
//!
//! [`GregorianDateTime`] is a naive UTC field set; [`ZonedGregorianDateTime`]
//! is the same fields read as local time in a [`Timezone`]. Timezone shifts go
//! through the Julian Day so that day, month and year carries are handled by
//! the calendar algorithm rather than by field arithmetic.

use crate::calendar::check_year;
use crate::error::{CalendarError, Result};
use crate::format::write_date_time;
use crate::numeric::floor_mod;
use crate::timezone::{Timezone, Zoned};
use crate::transform::{grdt_to_juld, juld_to_grdt};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Offset as _, Timelike};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A naive (UTC) Gregorian date and time with whole-second resolution.
///
/// Fields compare lexicographically from `year` down to `second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "serde_fields::Fields")
)]
pub struct GregorianDateTime {
    pub(crate) year: i32,
    pub(crate) month: u8,
    pub(crate) day: u8,
    pub(crate) hour: u8,
    pub(crate) minute: u8,
    pub(crate) second: u8,
}

impl GregorianDateTime {
    /// Validated constructor.
    ///
    /// # Errors
    /// [`CalendarError::InvalidField`] naming the first field out of range;
    /// the year must lie in [`MIN_YEAR`](crate::MIN_YEAR)`..=`[`MAX_YEAR`](crate::MAX_YEAR).
    pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Result<Self> {
        let invalid = |field, value: u8| CalendarError::InvalidField {
            field,
            value: i64::from(value),
        };
        check_year(year)?;
        if !(1..=12).contains(&month) {
            return Err(invalid("month", month));
        }
        if day < 1 || day > Self::days_in_month(year, month) {
            return Err(invalid("day", day));
        }
        if hour > 23 {
            return Err(invalid("hour", hour));
        }
        if minute > 59 {
            return Err(invalid("minute", minute));
        }
        if second > 59 {
            return Err(invalid("second", second));
        }
        Ok(Self::new_unchecked(year, month, day, hour, minute, second))
    }

    pub(crate) const fn new_unchecked(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    pub const fn second(&self) -> u8 {
        self.second
    }

    pub const fn is_leap_year(year: i32) -> bool {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }

    /// Days in `month` (1–12) of `year`; `0` for an invalid month.
    pub const fn days_in_month(year: i32, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// ISO weekday, 1 (Monday) through 7 (Sunday).
    pub fn weekday(&self) -> u8 {
        // Julian Day Number 0 fell on a Monday.
        floor_mod(grdt_to_juld(self).julian_day_number(), 7) as u8 + 1
    }

    /// Whether the date is a listed public holiday.
    ///
    /// ```
    /// use imperial_calendar::GregorianDateTime;
    /// assert!(GregorianDateTime::new(2020, 2, 24, 0, 0, 0).unwrap().is_holiday());
    /// assert!(!GregorianDateTime::new(2020, 2, 25, 0, 0, 0).unwrap().is_holiday());
    /// ```
    pub fn is_holiday(&self) -> bool {
        HOLIDAYS.contains(&(self.year, self.month, self.day))
    }

    /// Fields of a chrono date-time, dropping sub-second precision.
    pub fn from_chrono(datetime: &NaiveDateTime) -> Self {
        Self::new_unchecked(
            datetime.year(),
            datetime.month() as u8,
            datetime.day() as u8,
            datetime.hour() as u8,
            datetime.minute() as u8,
            datetime.second() as u8,
        )
    }

    /// The chrono equivalent, or `None` outside chrono's supported range.
    pub fn to_chrono(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, u32::from(self.month), u32::from(self.day))?
            .and_hms_opt(
                u32::from(self.hour),
                u32::from(self.minute),
                u32::from(self.second),
            )
    }
}

impl fmt::Display for GregorianDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_date_time(
            f,
            self.year,
            [self.month, self.day, self.hour, self.minute, self.second],
        )
    }
}

/// Listed public holidays as `(year, month, day)`.
const HOLIDAYS: [(i32, u8, u8); 3] = [(2020, 1, 1), (2020, 2, 23), (2020, 2, 24)];

#[cfg(feature = "serde")]
mod serde_fields {
    use super::GregorianDateTime;
    use crate::error::CalendarError;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub(super) struct Fields {
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    }

    impl TryFrom<Fields> for GregorianDateTime {
        type Error = CalendarError;

        fn try_from(f: Fields) -> Result<Self, Self::Error> {
            GregorianDateTime::new(f.year, f.month, f.day, f.hour, f.minute, f.second)
        }
    }
}

impl From<NaiveDateTime> for GregorianDateTime {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::from_chrono(&datetime)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Zoned
// ═══════════════════════════════════════════════════════════════════════════

/// Gregorian wall-clock fields in a fixed-offset timezone.
///
/// Comparison is by the instant denoted, so `09:00+09:00` equals
/// `00:00+00:00`. Use [`same_fields`](Self::same_fields) to compare the raw
/// fields and timezone instead.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ZonedGregorianDateTime {
    local: GregorianDateTime,
    timezone: Timezone,
}

impl ZonedGregorianDateTime {
    pub fn same_fields(&self, other: &Self) -> bool {
        self.local == other.local && self.timezone == other.timezone
    }

    /// ISO weekday of the local date.
    pub fn weekday(&self) -> u8 {
        self.local.weekday()
    }

    /// Whether the local date is a listed public holiday.
    pub fn is_holiday(&self) -> bool {
        self.local.is_holiday()
    }

    /// Build from a chrono date-time, keeping its local fields and offset.
    pub fn from_chrono<Tz: chrono::TimeZone>(datetime: &chrono::DateTime<Tz>) -> Self {
        let offset = datetime.offset().fix().local_minus_utc();
        let timezone = Timezone::from_offset_seconds(offset).unwrap_or_default();
        Self::with_timezone(GregorianDateTime::from_chrono(&datetime.naive_local()), timezone)
    }

    fn shifted(naive: &GregorianDateTime, seconds: i32) -> GregorianDateTime {
        juld_to_grdt(&grdt_to_juld(naive).shifted(f64::from(seconds)))
    }
}

impl Zoned for ZonedGregorianDateTime {
    type Naive = GregorianDateTime;

    fn from_naive(naive: &GregorianDateTime, timezone: Timezone) -> Self {
        Self {
            local: Self::shifted(naive, timezone.offset_seconds()),
            timezone,
        }
    }

    fn with_timezone(local: GregorianDateTime, timezone: Timezone) -> Self {
        Self { local, timezone }
    }

    fn to_naive(&self) -> GregorianDateTime {
        Self::shifted(&self.local, -self.timezone.offset_seconds())
    }

    fn local(&self) -> &GregorianDateTime {
        &self.local
    }

    fn timezone(&self) -> Timezone {
        self.timezone
    }
}

impl PartialEq for ZonedGregorianDateTime {
    fn eq(&self, other: &Self) -> bool {
        self.to_naive() == other.to_naive()
    }
}

impl Eq for ZonedGregorianDateTime {}

impl PartialOrd for ZonedGregorianDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ZonedGregorianDateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_naive().cmp(&other.to_naive())
    }
}

impl fmt::Display for ZonedGregorianDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.local, self.timezone.offset_string())
    }
}
