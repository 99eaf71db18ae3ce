// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 The imperial-calendar contributors

//! Imperial Sol Number: the flat sol count of the Imperial calendar.
//!
//! Sol `0`, second `0` is the first instant of Imperial year 0, month 1,
//! day 1. Like [`JulianDay`](crate::JulianDay), the value is kept split into
//! a whole sol and a second in `[0, 86400)`, and the second keeps its
//! fraction until the value is decomposed into calendar fields.

use crate::error::{CalendarError, Result};
use crate::numeric::{normalize_day_second, SECONDS_PER_DAY};
use qtty::Days;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point on the Imperial sol axis.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImperialSolNumber {
    day: i64,
    second: f64,
}

impl ImperialSolNumber {
    /// Closeness used by `PartialEq`, in sols.
    pub const TOLERANCE_D: f64 = 1e-5;

    /// Build from a whole sol and a sub-sol second in `[0, 86400)`.
    ///
    /// # Errors
    /// [`CalendarError::SecondOutOfRange`] when `second` is outside the
    /// half-open sol or not finite.
    pub fn new(day: i64, second: f64) -> Result<Self> {
        if !(0.0..SECONDS_PER_DAY).contains(&second) {
            return Err(CalendarError::SecondOutOfRange(second));
        }
        Ok(Self { day, second })
    }

    /// Split a real sol number into its whole and sub-sol parts.
    pub fn from_value(value: f64) -> Self {
        let day = value.floor();
        Self::from_parts(day as i64, (value - day) * SECONDS_PER_DAY)
    }

    pub(crate) fn from_parts(day: i64, second: f64) -> Self {
        let (day, second) = normalize_day_second(day, second);
        Self { day, second }
    }

    #[inline]
    pub const fn day(&self) -> i64 {
        self.day
    }

    #[inline]
    pub const fn second(&self) -> f64 {
        self.second
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.day as f64 + self.second / SECONDS_PER_DAY
    }

    #[inline]
    pub fn quantity(&self) -> Days {
        Days::new(self.value())
    }

    /// This instant moved by `seconds`, re-normalised.
    pub fn shifted(&self, seconds: f64) -> Self {
        Self::from_parts(self.day, self.second + seconds)
    }
}

impl PartialEq for ImperialSolNumber {
    fn eq(&self, other: &Self) -> bool {
        (self.value() - other.value()).abs() <= Self::TOLERANCE_D
    }
}

impl fmt::Display for ImperialSolNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImSN {}", self.value())
    }
}
