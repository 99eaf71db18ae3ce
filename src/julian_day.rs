// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 The imperial-calendar contributors

//! Julian Day as a split `(day, second)` value.
//!
//! The whole-day count and the sub-day seconds are stored separately so that
//! civil-time arithmetic near a day boundary does not lose precision to the
//! ~2.4 million integer part. The second is always normalised into
//! `[0, 86400)`; a Julian Day begins at noon, so second `0` is 12:00 UTC.

use crate::delta_t::{delta_t_for_year, year_number};
use crate::error::{CalendarError, Result};
use crate::numeric::{normalize_day_second, SECONDS_PER_DAY};
use qtty::{Days, Seconds};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point on the Julian Day axis (UT).
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JulianDay {
    day: i64,
    second: f64,
}

impl JulianDay {
    /// First instant of the Gregorian calendar (1582-10-15T00:00 UT).
    pub const CALENDAR_REFORM: f64 = 2_299_160.5;

    /// Closeness used by `PartialEq`, in days.
    pub const TOLERANCE_D: f64 = 1e-5;

    /// Build from a whole day and a sub-day second in `[0, 86400)`.
    ///
    /// # Errors
    /// [`CalendarError::SecondOutOfRange`] when `second` is outside the
    /// half-open day or not finite.
    pub fn new(day: i64, second: f64) -> Result<Self> {
        if !(0.0..SECONDS_PER_DAY).contains(&second) {
            return Err(CalendarError::SecondOutOfRange(second));
        }
        Ok(Self { day, second })
    }

    /// Split a real Julian Day into its whole and sub-day parts.
    ///
    /// ```
    /// use imperial_calendar::JulianDay;
    /// let jd = JulianDay::from_value(2_451_545.25);
    /// assert_eq!(jd.day(), 2_451_545);
    /// assert_eq!(jd.second(), 21_600.0);
    /// ```
    pub fn from_value(value: f64) -> Self {
        let day = value.floor();
        Self::from_parts(day as i64, (value - day) * SECONDS_PER_DAY)
    }

    /// Build from a day and any second offset, carrying whole days.
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

    /// The Julian Day as a single real number.
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

    /// Civil day number, `floor(JD + 0.5)`.
    pub fn julian_day_number(&self) -> i64 {
        (self.value() + 0.5).floor() as i64
    }

    /// ΔT = TT − UT at this instant.
    pub fn delta_t(&self) -> Seconds {
        delta_t_for_year(year_number(self))
    }
}

impl PartialEq for JulianDay {
    fn eq(&self, other: &Self) -> bool {
        (self.value() - other.value()).abs() <= Self::TOLERANCE_D
    }
}

impl fmt::Display for JulianDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {}", self.value())
    }
}

impl From<JulianDay> for Days {
    fn from(jd: JulianDay) -> Self {
        jd.quantity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_seconds_outside_the_day() {
        assert!(JulianDay::new(0, 0.0).is_ok());
        assert!(JulianDay::new(0, 86_399.999).is_ok());
        assert_eq!(
            JulianDay::new(0, 86_400.0),
            Err(CalendarError::SecondOutOfRange(86_400.0))
        );
        assert!(JulianDay::new(0, -0.5).is_err());
        assert!(JulianDay::new(0, f64::NAN).is_err());
    }

    #[test]
    fn from_value_normalises_negative_fractions() {
        let jd = JulianDay::from_value(-0.25);
        assert_eq!(jd.day(), -1);
        assert!((jd.second() - 64_800.0).abs() < 1e-9);
    }

    #[test]
    fn value_recombines() {
        let jd = JulianDay::new(2_440_588, 32_722.0).unwrap();
        assert!((jd.value() - 2_440_588.378_726).abs() < 1e-6);
        assert_eq!(JulianDay::from_value(jd.value()), jd);
    }

    #[test]
    fn shifted_crosses_day_boundaries() {
        let jd = JulianDay::new(100, 80_000.0).unwrap();
        let later = jd.shifted(10_000.0);
        assert_eq!(later.day(), 101);
        assert!((later.second() - 3_600.0).abs() < 1e-9);
        let earlier = jd.shifted(-90_000.0);
        assert_eq!(earlier.day(), 99);
        assert!((earlier.second() - 76_400.0).abs() < 1e-9);
    }

    #[test]
    fn equality_is_closeness() {
        let a = JulianDay::from_value(2_451_545.0);
        assert_eq!(a, JulianDay::from_value(2_451_545.000_009));
        assert_ne!(a, JulianDay::from_value(2_451_545.000_02));
    }

    #[test]
    fn day_number_starts_at_midnight() {
        assert_eq!(JulianDay::from_value(2_451_544.5).julian_day_number(), 2_451_545);
        assert_eq!(JulianDay::from_value(2_451_545.0).julian_day_number(), 2_451_545);
        assert_eq!(JulianDay::from_value(2_451_544.4).julian_day_number(), 2_451_544);
    }

    #[test]
    fn delta_t_at_j2000() {
        let dt = JulianDay::from_value(2_451_545.0).delta_t();
        assert!((dt.value() - 63.86).abs() < 0.01, "{dt}");
    }

    #[test]
    fn delta_t_before_the_reform() {
        // 1000-01-01 Julian, about ΔT(1000) = 1574.2 s.
        let dt = JulianDay::from_value(2_086_307.5).delta_t();
        assert!((dt.value() - 1_574.2).abs() < 1.0, "{dt}");
    }
}
