// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 The imperial-calendar contributors

//! Imperial Martian calendar
//!
//! Conversion between the civil (proleptic Gregorian) calendar and the
//! Imperial calendar of Mars, through a chain of continuous time axes.
//!
//! # Conversion chain
//!
//! ```text
//! GregorianDateTime ⇄ JulianDay ⇄ TerrestrialTime ⇄ MarsSolDate ⇄ ImperialSolNumber ⇄ ImperialDateTime
//! ```
//!
//! Each arrow is a pure function in [`transform`]; [`convert`] strings them
//! together for the common end-to-end cases.
//!
//! # Core types
//!
//! - [`GregorianDateTime`], [`ImperialDateTime`] — naive calendar fields
//!   (UTC and standard Imperial time respectively).
//! - [`ZonedGregorianDateTime`], [`ZonedImperialDateTime`] — local fields
//!   in a [`Timezone`], linked to their naive form by [`Zoned`].
//! - [`JulianDay`], [`ImperialSolNumber`] — whole day plus sub-day second.
//! - [`TerrestrialTime`], [`MarsSolDate`] — continuous instants, both
//!   [`Time<S>`] over a [`TimeScale`] marker.
//! - [`ImperialYear`], [`ImperialMonth`], [`ImperialYearMonth`] — calendar
//!   arithmetic (leap years, month lengths, navigation).
//! - [`HolidayMars`], [`HolidayTable`] — holiday lookup.
//!
//! # ΔT (Delta T)
//!
//! `TT = JD + ΔT / 86400`, with ΔT from piecewise polynomial fits in a
//! fractional year number; see [`delta_t_for_year`] and
//! [`JulianDay::delta_t`].
//!
//! # Example
//!
//! ```
//! use imperial_calendar::{transform::*, GregorianDateTime, ImperialDateTime};
//!
//! let grdt = GregorianDateTime::new(2025, 1, 1, 0, 0, 0).unwrap();
//! let imsn = mrsd_to_imsn(&tert_to_mrsd(&juld_to_tert(&grdt_to_juld(&grdt))));
//! let imdt = imsn_to_imdt(&imsn);
//! assert_eq!(imdt, ImperialDateTime::new(1428, 5, 7, 10, 12, 47).unwrap());
//! ```

mod calendar;
pub mod convert;
mod delta_t;
mod error;
pub mod format;
mod gregorian;
mod holiday;
mod imperial;
pub(crate) mod instant;
mod julian_day;
pub mod numeric;
pub(crate) mod scales;
mod sol_number;
pub mod solar_longitude;
mod timezone;
pub mod transform;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{
    ImperialMonth, ImperialYear, ImperialYearMonth, MAX_YEAR, MILLENNIUM_SOLS, MIN_YEAR,
    MONTHS_PER_YEAR, MONTH_NAMES,
};
pub use delta_t::delta_t_for_year;
pub use error::{CalendarError, Result};
pub use gregorian::{GregorianDateTime, ZonedGregorianDateTime};
pub use holiday::{HolidayMars, HolidayOverride, HolidayTable, HolidayTableBuilder};
pub use imperial::{ImperialDateTime, ZonedImperialDateTime};
pub use instant::{Time, TimeScale};
pub use julian_day::JulianDay;
pub use scales::{MarsSolDate, TerrestrialTime, EARTH_DAYS_PER_SOL, MSD, TT};
pub use sol_number::ImperialSolNumber;
pub use timezone::{Timezone, Zoned};
