// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 The imperial-calendar contributors

//! Error taxonomy for calendar construction and parsing.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`MalformedTimezone`](CalendarError::MalformedTimezone) | timezone text that is neither `±HH:MM` nor a known alias |
//! | [`TimezoneOutOfRange`](CalendarError::TimezoneOutOfRange) | well-formed `±HH:MM` with hour > 23 or minute > 59 |
//! | [`SecondOutOfRange`](CalendarError::SecondOutOfRange) | explicit sub-day second outside `[0, 86400)` |
//! | [`MalformedDateTime`](CalendarError::MalformedDateTime) | formatted date-time text with the wrong shape |
//! | [`InvalidField`](CalendarError::InvalidField) | a calendar field outside its valid range |
//!
//! None of these are recovered from inside the crate.

use thiserror::Error;

/// Errors raised by the conversion core and the formatting boundary.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Timezone text does not match `±HH:MM` and is not a recognised alias.
    #[error("invalid timezone format: {0:?}")]
    MalformedTimezone(String),

    /// Timezone text is well formed but its value is out of range.
    #[error("invalid timezone value: {hours:02}:{minutes:02}")]
    TimezoneOutOfRange { hours: u32, minutes: u32 },

    /// Sub-day second outside `[0, 86400)`.
    #[error("second is out of range: {0}")]
    SecondOutOfRange(f64),

    /// Formatted date-time text with the wrong shape.
    #[error("invalid date-time format: {0:?}")]
    MalformedDateTime(String),

    /// A calendar field outside the range allowed by its calendar.
    #[error("invalid {field}: {value}")]
    InvalidField { field: &'static str, value: i64 },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CalendarError>;
