// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 The imperial-calendar contributors

//! Pairwise conversions along the calendar chain.
//!
//! ```text
//! GregorianDateTime ⇄ JulianDay ⇄ TerrestrialTime ⇄ MarsSolDate ⇄ ImperialSolNumber ⇄ ImperialDateTime
//!        grdt           juld          tert              mrsd             imsn                imdt
//! ```
//!
//! Every function is pure. Calendar inputs are naive: resolve the timezone
//! with [`Zoned::to_naive`](crate::Zoned::to_naive) first.
//!
//! All steps are exact inverses of each other except
//! [`tert_to_juld`], which inverts ΔT with a single correction step.

use crate::calendar::{date_of_sol_index, sol_index};
use crate::gregorian::GregorianDateTime;
use crate::imperial::ImperialDateTime;
use crate::julian_day::JulianDay;
use crate::numeric::{divmod, floor_div, floor_mod_f64, round_day_second, SECONDS_PER_DAY};
use crate::scales::{MarsSolDate, TerrestrialTime, MSD, TT};
use crate::sol_number::ImperialSolNumber;
use tracing::trace;

/// Julian Day of the proleptic Gregorian epoch day count.
const GREGORIAN_EPOCH_JDN: i64 = 1_721_088;

/// Mean Gregorian month length used by the month term of the day count.
const MEAN_MONTH_D: f64 = 30.59;

/// Sol number of MSD 0 on the Imperial axis.
const IMPERIAL_MSD_OFFSET: i64 = 901_195;

/// Fraction of a sol between the MSD and Imperial day boundaries.
const IMPERIAL_MSD_PHASE: f64 = 0.375;

const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;
const HALF_DAY_S: i64 = 43_200;

// ═══════════════════════════════════════════════════════════════════════════
// Gregorian ⇄ Julian Day
// ═══════════════════════════════════════════════════════════════════════════

/// Naive (UTC) Gregorian fields to Julian Day.
///
/// ```
/// use imperial_calendar::{transform::grdt_to_juld, GregorianDateTime};
/// let j2000 = GregorianDateTime::new(2000, 1, 1, 12, 0, 0).unwrap();
/// assert_eq!(grdt_to_juld(&j2000).value(), 2_451_545.0);
/// ```
pub fn grdt_to_juld(grdt: &GregorianDateTime) -> JulianDay {
    // January and February count as months 13 and 14 of the year before.
    let (year, month) = if grdt.month <= 2 {
        (i64::from(grdt.year) - 1, i64::from(grdt.month) + 12)
    } else {
        (i64::from(grdt.year), i64::from(grdt.month))
    };
    let day = (year as f64 * 365.25).floor() as i64 + floor_div(year, 400) - floor_div(year, 100)
        + ((month - 2) as f64 * MEAN_MONTH_D).floor() as i64
        + i64::from(grdt.day)
        + GREGORIAN_EPOCH_JDN;
    let second = i64::from(grdt.hour) * SECONDS_PER_HOUR
        + i64::from(grdt.minute) * SECONDS_PER_MINUTE
        + i64::from(grdt.second)
        + HALF_DAY_S;
    let juld = JulianDay::from_parts(day, second as f64);
    trace!(%grdt, %juld, "grdt -> juld");
    juld
}

/// Julian Day to naive (UTC) Gregorian fields.
///
/// The second is rounded first; a rounded 86400 carries into the next day.
pub fn juld_to_grdt(juld: &JulianDay) -> GregorianDateTime {
    let (day, second) = round_day_second(juld.day(), juld.second());
    let value = day as f64 + second as f64 / SECONDS_PER_DAY;

    let a0 = (value + 68_569.5).floor();
    let b0 = value + 0.5;
    let a = (a0 / 36_524.25).floor();
    let b = a0 - (36_524.25 * a + 0.75).floor();
    let c = ((b + 1.0) / 365.250_25).floor();
    let d = b - (365.25 * c).floor() + 31.0;
    let e = (d / MEAN_MONTH_D).floor();
    let f = (e / 11.0).floor();
    let year = 100.0 * (a - 49.0) + c + f;
    let month = e - 12.0 * f + 2.0;
    let date = d - (MEAN_MONTH_D * e).floor() + floor_mod_f64(b0, 1.0);

    // Julian Days begin at noon.
    let (hour, rest) = divmod(second, SECONDS_PER_HOUR);
    let (minute, second) = divmod(rest, SECONDS_PER_MINUTE);
    let grdt = GregorianDateTime::new_unchecked(
        year as i32,
        month as u8,
        date.floor() as u8,
        ((hour + 12) % 24) as u8,
        minute as u8,
        second as u8,
    );
    trace!(%juld, %grdt, "juld -> grdt");
    grdt
}

// ═══════════════════════════════════════════════════════════════════════════
// Julian Day ⇄ Terrestrial Time
// ═══════════════════════════════════════════════════════════════════════════

/// `TT = JD + ΔT / 86400`.
pub fn juld_to_tert(juld: &JulianDay) -> TerrestrialTime {
    let delta_t = juld.delta_t();
    let tert = TerrestrialTime::new(juld.value() + delta_t.value() / SECONDS_PER_DAY);
    trace!(%juld, delta_t = delta_t.value(), %tert, "juld -> tert");
    tert
}

/// Inverse of [`juld_to_tert`] by one correction step.
///
/// ΔT is first evaluated at the TT value read as a Julian Day; the
/// resulting estimate is pushed forward again and corrected once by the
/// residual.
pub fn tert_to_juld(tert: &TerrestrialTime) -> JulianDay {
    let tt = tert.value();
    let delta_t = JulianDay::from_value(tt).delta_t();
    let estimate = JulianDay::from_value(tt - delta_t.value() / SECONDS_PER_DAY);
    let residual = tt - juld_to_tert(&estimate).value();
    let juld = JulianDay::from_value(estimate.value() + residual);
    trace!(%tert, %juld, residual, "tert -> juld");
    juld
}

// ═══════════════════════════════════════════════════════════════════════════
// Terrestrial Time ⇄ Mars Sol Date
// ═══════════════════════════════════════════════════════════════════════════

pub fn tert_to_mrsd(tert: &TerrestrialTime) -> MarsSolDate {
    let mrsd = tert.to::<MSD>();
    trace!(%tert, %mrsd, "tert -> mrsd");
    mrsd
}

pub fn mrsd_to_tert(mrsd: &MarsSolDate) -> TerrestrialTime {
    let tert = mrsd.to::<TT>();
    trace!(%mrsd, %tert, "mrsd -> tert");
    tert
}

// ═══════════════════════════════════════════════════════════════════════════
// Mars Sol Date ⇄ Imperial Sol Number
// ═══════════════════════════════════════════════════════════════════════════

/// `ImSN = MSD − 0.375 + 901195`.
pub fn mrsd_to_imsn(mrsd: &MarsSolDate) -> ImperialSolNumber {
    let whole = mrsd.value().floor();
    let fraction = mrsd.value() - whole - IMPERIAL_MSD_PHASE;
    let imsn =
        ImperialSolNumber::from_parts(whole as i64 + IMPERIAL_MSD_OFFSET, fraction * SECONDS_PER_DAY);
    trace!(%mrsd, %imsn, "mrsd -> imsn");
    imsn
}

/// `MSD = ImSN + 0.375 − 901195`.
pub fn imsn_to_mrsd(imsn: &ImperialSolNumber) -> MarsSolDate {
    let mrsd = MarsSolDate::new(
        (imsn.day() - IMPERIAL_MSD_OFFSET) as f64
            + imsn.second() / SECONDS_PER_DAY
            + IMPERIAL_MSD_PHASE,
    );
    trace!(%imsn, %mrsd, "imsn -> mrsd");
    mrsd
}

// ═══════════════════════════════════════════════════════════════════════════
// Imperial Sol Number ⇄ Imperial fields
// ═══════════════════════════════════════════════════════════════════════════

/// Naive Imperial fields to sol number.
///
/// ```
/// use imperial_calendar::{transform::imdt_to_imsn, ImperialDateTime};
/// let imdt = ImperialDateTime::new(1987, 6, 7, 12, 40, 30).unwrap();
/// let imsn = imdt_to_imsn(&imdt);
/// assert_eq!((imsn.day(), imsn.second()), (1_328_646, 45_630.0));
/// ```
pub fn imdt_to_imsn(imdt: &ImperialDateTime) -> ImperialSolNumber {
    let day = sol_index(imdt.year, imdt.month, imdt.day);
    let second = i64::from(imdt.hour) * SECONDS_PER_HOUR
        + i64::from(imdt.minute) * SECONDS_PER_MINUTE
        + i64::from(imdt.second);
    let imsn = ImperialSolNumber::from_parts(day, second as f64);
    trace!(%imdt, %imsn, "imdt -> imsn");
    imsn
}

/// Sol number to naive Imperial fields.
///
/// The second is rounded first; a rounded 86400 carries into the next sol.
pub fn imsn_to_imdt(imsn: &ImperialSolNumber) -> ImperialDateTime {
    let (day, second) = round_day_second(imsn.day(), imsn.second());
    let (year, month, date) = date_of_sol_index(day);
    let (hour, rest) = divmod(second, SECONDS_PER_HOUR);
    let (minute, second) = divmod(rest, SECONDS_PER_MINUTE);
    let imdt = ImperialDateTime::new_unchecked(
        year,
        month,
        date,
        hour as u8,
        minute as u8,
        second as u8,
    );
    trace!(%imsn, %imdt, "imsn -> imdt");
    imdt
}
