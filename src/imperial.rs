// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 The imperial-calendar contributors

//! Imperial date-times.
//!
//! [`ImperialDateTime`] is a naive field set on the standard (offset zero)
//! Imperial clock; [`ZonedImperialDateTime`] reads the same fields as local
//! time in a [`Timezone`]. Timezone shifts go through the Imperial Sol
//! Number, mirroring the Julian Day route of the Gregorian calendar.

use crate::calendar::{ImperialYearMonth, MONTH_NAMES};
use crate::error::{CalendarError, Result};
use crate::format::write_date_time;
use crate::holiday::HolidayMars;
use crate::timezone::{Timezone, Zoned};
use crate::transform::{imdt_to_imsn, imsn_to_imdt};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const DAYS_PER_WEEK: u8 = 7;

/// A naive Imperial date and time with whole-second resolution.
///
/// Fields compare lexicographically from `year` down to `second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "serde_fields::Fields")
)]
pub struct ImperialDateTime {
    pub(crate) year: i32,
    pub(crate) month: u8,
    pub(crate) day: u8,
    pub(crate) hour: u8,
    pub(crate) minute: u8,
    pub(crate) second: u8,
}

impl ImperialDateTime {
    /// Validated constructor; the day limit follows the month and leap year.
    ///
    /// # Errors
    /// [`CalendarError::InvalidField`] naming the first field out of range;
    /// the year must lie in [`MIN_YEAR`](crate::MIN_YEAR)`..=`[`MAX_YEAR`](crate::MAX_YEAR).
    ///
    /// ```
    /// use imperial_calendar::ImperialDateTime;
    /// assert!(ImperialDateTime::new(1245, 24, 28, 0, 0, 0).is_ok());
    /// assert!(ImperialDateTime::new(1246, 24, 28, 0, 0, 0).is_err());
    /// ```
    pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Result<Self> {
        let invalid = |field, value: u8| CalendarError::InvalidField {
            field,
            value: i64::from(value),
        };
        let year_month = ImperialYearMonth::new(year, month)?;
        if day < 1 || day > year_month.days() {
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

    pub const fn year_month(&self) -> ImperialYearMonth {
        ImperialYearMonth::new_unchecked(self.year, self.month)
    }

    /// Name of the month, `立春` through `大寒`.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[usize::from(self.month - 1)]
    }

    /// Day of the week, 1 through 7. Every month starts on day 1 of a week.
    pub const fn weekday(&self) -> u8 {
        (self.day - 1) % DAYS_PER_WEEK + 1
    }

    /// The holiday on this date in the current table, if any.
    pub fn holiday(&self) -> Option<HolidayMars> {
        let holiday = HolidayMars::new(self.year, self.month, self.day);
        holiday.is_holiday().then_some(holiday)
    }
}

impl fmt::Display for ImperialDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_date_time(
            f,
            self.year,
            [self.month, self.day, self.hour, self.minute, self.second],
        )
    }
}

#[cfg(feature = "serde")]
mod serde_fields {
    use super::ImperialDateTime;
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

    impl TryFrom<Fields> for ImperialDateTime {
        type Error = CalendarError;

        fn try_from(f: Fields) -> Result<Self, Self::Error> {
            ImperialDateTime::new(f.year, f.month, f.day, f.hour, f.minute, f.second)
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Zoned
// ═══════════════════════════════════════════════════════════════════════════

/// Imperial wall-clock fields in a fixed-offset timezone.
///
/// Comparison is by the instant denoted; [`same_fields`](Self::same_fields)
/// compares the raw fields and timezone.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ZonedImperialDateTime {
    local: ImperialDateTime,
    timezone: Timezone,
}

impl ZonedImperialDateTime {
    pub fn same_fields(&self, other: &Self) -> bool {
        self.local == other.local && self.timezone == other.timezone
    }

    fn shifted(naive: &ImperialDateTime, seconds: i32) -> ImperialDateTime {
        imsn_to_imdt(&imdt_to_imsn(naive).shifted(f64::from(seconds)))
    }
}

impl Zoned for ZonedImperialDateTime {
    type Naive = ImperialDateTime;

    fn from_naive(naive: &ImperialDateTime, timezone: Timezone) -> Self {
        Self {
            local: Self::shifted(naive, timezone.offset_seconds()),
            timezone,
        }
    }

    fn with_timezone(local: ImperialDateTime, timezone: Timezone) -> Self {
        Self { local, timezone }
    }

    fn to_naive(&self) -> ImperialDateTime {
        Self::shifted(&self.local, -self.timezone.offset_seconds())
    }

    fn local(&self) -> &ImperialDateTime {
        &self.local
    }

    fn timezone(&self) -> Timezone {
        self.timezone
    }
}

impl PartialEq for ZonedImperialDateTime {
    fn eq(&self, other: &Self) -> bool {
        self.to_naive() == other.to_naive()
    }
}

impl Eq for ZonedImperialDateTime {}

impl PartialOrd for ZonedImperialDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ZonedImperialDateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_naive().cmp(&other.to_naive())
    }
}

impl fmt::Display for ZonedImperialDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.local, self.timezone.offset_string())
    }
}
