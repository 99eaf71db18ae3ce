// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 The imperial-calendar contributors

//! Fixed UTC offsets and the naive ⇄ zoned conversion interface.
//!
//! Only fixed offsets are modelled. Besides the literal `±HH:MM` form, two
//! aliases are recognised: `UTC` (+00:00) and `Asia/Tokyo` (+09:00, no DST).
//!
//! A *naive* calendar value carries no offset; it denotes UTC for the
//! Gregorian calendar and the standard (offset zero) Imperial time. A
//! *zoned* value pairs local wall-clock fields with a [`Timezone`]. The two
//! are distinct types linked by [`Zoned`].

use crate::error::{CalendarError, Result};
use chrono::{FixedOffset, Offset, Utc};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const SECONDS_PER_HOUR: i32 = 3_600;
const TOKYO_OFFSET_S: i32 = 9 * SECONDS_PER_HOUR;

/// A fixed offset from UTC.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timezone {
    #[default]
    Utc,
    AsiaTokyo,
    Offset(FixedOffset),
}

impl Timezone {
    /// Offset with the given number of seconds east of UTC.
    ///
    /// Returns `None` when the offset is a day or more.
    pub fn from_offset_seconds(seconds: i32) -> Option<Self> {
        FixedOffset::east_opt(seconds).map(Self::Offset)
    }

    /// Seconds east of UTC.
    pub fn offset_seconds(&self) -> i32 {
        match self {
            Self::Utc => 0,
            Self::AsiaTokyo => TOKYO_OFFSET_S,
            Self::Offset(offset) => offset.local_minus_utc(),
        }
    }

    /// Hours east of UTC, fractional for non-whole-hour offsets.
    ///
    /// ```
    /// use imperial_calendar::Timezone;
    /// let tz: Timezone = "-00:15".parse().unwrap();
    /// assert_eq!(tz.offset_hours(), -0.25);
    /// ```
    pub fn offset_hours(&self) -> f64 {
        f64::from(self.offset_seconds()) / f64::from(SECONDS_PER_HOUR)
    }

    pub fn fixed_offset(&self) -> FixedOffset {
        match self {
            Self::Offset(offset) => *offset,
            Self::Utc => Utc.fix(),
            Self::AsiaTokyo => FixedOffset::east_opt(TOKYO_OFFSET_S).unwrap_or_else(|| Utc.fix()),
        }
    }

    /// The offset as `±HH:MM`, whatever the variant.
    pub fn offset_string(&self) -> String {
        let seconds = self.offset_seconds();
        let sign = if seconds < 0 { '-' } else { '+' };
        let minutes = seconds.unsigned_abs() / 60;
        format!("{sign}{:02}:{:02}", minutes / 60, minutes % 60)
    }
}

impl FromStr for Timezone {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "UTC" => return Ok(Self::Utc),
            "Asia/Tokyo" => return Ok(Self::AsiaTokyo),
            _ => {}
        }

        let malformed = || CalendarError::MalformedTimezone(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 6 || bytes[3] != b':' {
            return Err(malformed());
        }
        let sign = match bytes[0] {
            b'+' => 1,
            b'-' => -1,
            _ => return Err(malformed()),
        };
        let two_digits = |at: usize| -> Option<u32> {
            let (hi, lo) = (bytes[at], bytes[at + 1]);
            (hi.is_ascii_digit() && lo.is_ascii_digit())
                .then(|| u32::from(hi - b'0') * 10 + u32::from(lo - b'0'))
        };
        let (hours, minutes) = match (two_digits(1), two_digits(4)) {
            (Some(h), Some(m)) => (h, m),
            _ => return Err(malformed()),
        };
        if hours > 23 || minutes > 59 {
            return Err(CalendarError::TimezoneOutOfRange { hours, minutes });
        }

        let seconds = sign * (hours * 3_600 + minutes * 60) as i32;
        Self::from_offset_seconds(seconds).ok_or(CalendarError::TimezoneOutOfRange { hours, minutes })
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utc => f.write_str("UTC"),
            Self::AsiaTokyo => f.write_str("Asia/Tokyo"),
            Self::Offset(_) => f.write_str(&self.offset_string()),
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Zoned conversion interface
// ═══════════════════════════════════════════════════════════════════════════

/// A calendar value carrying a [`Timezone`], convertible to and from its
/// naive (offset zero) counterpart.
pub trait Zoned: Sized {
    /// The offset-free field set of the same calendar.
    type Naive: Copy;

    /// Express the naive instant `naive` as local fields in `timezone`.
    fn from_naive(naive: &Self::Naive, timezone: Timezone) -> Self;

    /// Attach `timezone` to already-local fields without shifting them.
    fn with_timezone(local: Self::Naive, timezone: Timezone) -> Self;

    /// The naive instant this value denotes.
    fn to_naive(&self) -> Self::Naive;

    /// The local wall-clock fields.
    fn local(&self) -> &Self::Naive;

    fn timezone(&self) -> Timezone;

    /// Offset in hours east of UTC.
    fn offset(&self) -> f64 {
        self.timezone().offset_hours()
    }

    /// The same instant expressed in another timezone.
    fn in_timezone(&self, timezone: Timezone) -> Self {
        Self::from_naive(&self.to_naive(), timezone)
    }
}
