// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 The imperial-calendar contributors

//! # ΔT (Delta T) — Earth-rotation correction
//!
//! **ΔT = TT − UT** in seconds, from the piecewise polynomial fits of
//! Espenak & Meeus (*Five Millennium Canon of Solar Eclipses*, NASA/TP-2006-
//! 214141), as used by NASA's eclipse pages.
//!
//! ## Year number
//! The fits are expressed in a fractional *year number*. How that number is
//! obtained depends on which side of the Gregorian calendar reform
//! (JD 2 299 160.5) the Julian Day falls:
//!
//! * before it, the Julian-calendar year is recovered from the 1461-day
//!   quadrennial cycle;
//! * after it, the Gregorian year is taken from the civil date of the Julian
//!   Day, and the fraction is the position of the day between that year's
//!   1 January and the next one, both computed with the forward
//!   Gregorian → Julian Day transform.
//!
//! ## Table
//! Each row of [`SEGMENTS`] covers the year numbers below `until` not covered
//! by an earlier row, and evaluates `Σ cᵢ·uⁱ` with `u = (year − origin) / scale`
//! by Horner's rule.

use crate::gregorian::GregorianDateTime;
use crate::julian_day::JulianDay;
use crate::numeric::divmod_f64;
use crate::transform::grdt_to_juld;
use qtty::Seconds;
use tracing::debug;

/// One polynomial fit of ΔT.
struct Segment {
    /// Exclusive upper bound of the year number.
    until: f64,
    origin: f64,
    scale: f64,
    /// Coefficients in ascending powers of `u`.
    coefficients: &'static [f64],
}

impl Segment {
    #[inline]
    fn evaluate(&self, year: f64) -> f64 {
        let u = (year - self.origin) / self.scale;
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, c| acc * u + c)
    }
}

/// Long-term parabola used outside the historical record on both ends.
const LONG_TERM: &[f64] = &[-20.0, 0.0, 32.0];

#[rustfmt::skip]
const SEGMENTS: [Segment; 14] = [
    Segment { until: -500.0, origin: 1820.0, scale: 100.0, coefficients: LONG_TERM },
    Segment { until: 500.0, origin: 0.0, scale: 100.0, coefficients: &[
        10_583.6, -1_014.41, 33.783_11, -5.952_053, -0.179_845_2, 0.022_174_192, 0.009_031_652_1,
    ] },
    Segment { until: 1600.0, origin: 1000.0, scale: 100.0, coefficients: &[
        1_574.2, -556.01, 71.234_72, 0.319_781, -0.850_346_3, -0.005_050_998, 0.008_357_207_3,
    ] },
    Segment { until: 1700.0, origin: 1600.0, scale: 1.0, coefficients: &[
        120.0, -0.980_8, -0.015_32, 1.0 / 7_129.0,
    ] },
    Segment { until: 1800.0, origin: 1700.0, scale: 1.0, coefficients: &[
        8.83, 0.160_3, -0.005_928_5, 0.000_133_36, -1.0 / 1_174_000.0,
    ] },
    Segment { until: 1860.0, origin: 1800.0, scale: 1.0, coefficients: &[
        13.72, -0.332_447, 0.006_861_2, 0.004_111_6, -0.000_374_36, 0.000_012_127_2,
        -0.000_000_169_9, 0.000_000_000_875,
    ] },
    Segment { until: 1900.0, origin: 1860.0, scale: 1.0, coefficients: &[
        7.62, 0.573_7, -0.251_754, 0.016_806_68, -0.000_447_362_4, 1.0 / 233_174.0,
    ] },
    Segment { until: 1920.0, origin: 1900.0, scale: 1.0, coefficients: &[
        -2.79, 1.494_119, -0.059_893_9, 0.006_196_6, -0.000_197,
    ] },
    Segment { until: 1941.0, origin: 1920.0, scale: 1.0, coefficients: &[
        21.2, 0.844_93, -0.076_1, 0.002_093_6,
    ] },
    Segment { until: 1961.0, origin: 1950.0, scale: 1.0, coefficients: &[
        29.07, 0.407, -1.0 / 233.0, 1.0 / 2_547.0,
    ] },
    Segment { until: 1986.0, origin: 1975.0, scale: 1.0, coefficients: &[
        45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0,
    ] },
    Segment { until: 2005.0, origin: 2000.0, scale: 1.0, coefficients: &[
        63.86, 0.334_5, -0.060_734, 0.001_727_5, 0.000_651_814, 0.000_023_735_99,
    ] },
    Segment { until: 2050.0, origin: 2000.0, scale: 1.0, coefficients: &[
        63.795, 0.128_7, 0.009_1,
    ] },
    Segment { until: f64::INFINITY, origin: 1820.0, scale: 100.0, coefficients: LONG_TERM },
];

/// ΔT in seconds for a fractional year number.
pub fn delta_t_for_year(year: f64) -> Seconds {
    let index = SEGMENTS
        .iter()
        .position(|segment| year < segment.until)
        .unwrap_or(SEGMENTS.len() - 1);
    debug!(year, segment = index, "delta-t segment");
    Seconds::new(SEGMENTS[index].evaluate(year))
}

/// Fractional Julian-calendar year of a Julian Day before the reform.
pub(crate) fn julian_year_number(jd: f64) -> f64 {
    const INTERCEPT: f64 = 1_721_117.5;
    const QUADRENNIUM_D: f64 = 365.0 * 4.0 + 1.0;
    // Days from 1 March to 31 December.
    const MARCH_TO_YEAR_END_D: f64 = 306.0;

    let (quadrennium, remainder) = divmod_f64(jd - INTERCEPT, QUADRENNIUM_D);
    let quadrennial_year = if remainder < 365.0 {
        0.0
    } else if remainder < 365.0 * 2.0 {
        1.0
    } else if remainder < 365.0 * 3.0 {
        2.0
    } else {
        3.0
    };
    let mut year = quadrennium * 4.0 + quadrennial_year;
    // The cycle starts on 1 March; shift to a 1 January origin.
    let mut annual_day = remainder - quadrennial_year * 365.0;
    if annual_day >= MARCH_TO_YEAR_END_D {
        year += 1.0;
        annual_day -= MARCH_TO_YEAR_END_D;
    } else if year % 4.0 == 0.0 {
        annual_day += 31.0 + 29.0;
    } else {
        annual_day += 31.0 + 28.0;
    }
    let year_length = if year % 4.0 == 0.0 { 366.0 } else { 365.0 };
    year + annual_day / year_length
}

/// Fractional Gregorian year of a Julian Day after the reform.
pub(crate) fn gregorian_year_number(juld: &JulianDay) -> f64 {
    let year = crate::transform::juld_to_grdt(juld).year();
    let january_1st = grdt_to_juld(&GregorianDateTime::new_unchecked(year, 1, 1, 0, 0, 0)).value();
    let next_january_1st =
        grdt_to_juld(&GregorianDateTime::new_unchecked(year + 1, 1, 1, 0, 0, 0)).value();
    f64::from(year) + (juld.value() - january_1st) / (next_january_1st - january_1st)
}

/// Year number fed to the ΔT fits for this Julian Day.
pub(crate) fn year_number(juld: &JulianDay) -> f64 {
    if juld.value() < JulianDay::CALENDAR_REFORM {
        julian_year_number(juld.value())
    } else {
        gregorian_year_number(juld)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seconds(year: f64) -> f64 {
        delta_t_for_year(year).value()
    }

    #[test]
    fn segments_are_ordered() {
        for pair in SEGMENTS.windows(2) {
            assert!(pair[0].until < pair[1].until);
        }
    }

    #[test]
    fn segment_origins() {
        assert!((seconds(0.0) - 10_583.6).abs() < 1e-9);
        assert!((seconds(1000.0) - 1_574.2).abs() < 1e-9);
        assert!((seconds(1600.0) - 120.0).abs() < 1e-9);
        assert!((seconds(1700.0) - 8.83).abs() < 1e-9);
        assert!((seconds(1800.0) - 13.72).abs() < 1e-9);
        assert!((seconds(1860.0) - 7.62).abs() < 1e-9);
        assert!((seconds(1900.0) - -2.79).abs() < 1e-9);
        assert!((seconds(1920.0) - 21.2).abs() < 1e-9);
        assert!((seconds(1950.0) - 29.07).abs() < 1e-9);
        assert!((seconds(1975.0) - 45.45).abs() < 1e-9);
        assert!((seconds(2000.0) - 63.86).abs() < 1e-9);
    }

    #[test]
    fn long_term_parabola_on_both_ends() {
        // u = (-1180 - 1820) / 100 = -30
        assert!((seconds(-1180.0) - (-20.0 + 32.0 * 900.0)).abs() < 1e-6);
        // u = (2120 - 1820) / 100 = 3
        assert!((seconds(2120.0) - (-20.0 + 32.0 * 9.0)).abs() < 1e-9);
    }

    #[test]
    fn recent_segment() {
        // 63.795 + 0.1287·20 + 0.0091·400
        assert!((seconds(2020.0) - 70.009).abs() < 1e-9);
    }

    #[test]
    fn segment_boundaries_are_nearly_continuous() {
        for boundary in [1700.0, 1800.0, 1860.0, 1900.0, 1920.0, 1941.0, 1961.0, 1986.0, 2005.0] {
            let below = seconds(boundary - 1e-9);
            let above = seconds(boundary);
            assert!((below - above).abs() < 1.0, "jump at {boundary}: {below} vs {above}");
        }
    }

    #[test]
    fn julian_year_number_sample() {
        // JD 1721423.5 is 1 January AD 1 in the Julian calendar.
        assert!((julian_year_number(1_721_423.5) - 1.0).abs() < 1e-9);
        // Half a common year later.
        let mid = julian_year_number(1_721_423.5 + 182.5);
        assert!((mid - 1.5).abs() < 1e-9);
    }

    #[test]
    fn gregorian_year_number_sample() {
        // 2000-01-01T00:00 and the following midsummer.
        let new_year = JulianDay::from_value(2_451_544.5);
        assert!((gregorian_year_number(&new_year) - 2000.0).abs() < 1e-9);
        let mid = JulianDay::from_value(2_451_544.5 + 183.0);
        assert!((gregorian_year_number(&mid) - 2000.5).abs() < 1e-9);
    }

    #[test]
    fn year_number_switches_at_reform() {
        let before = JulianDay::from_value(JulianDay::CALENDAR_REFORM - 1.0);
        let after = JulianDay::from_value(JulianDay::CALENDAR_REFORM + 1.0);
        let (b, a) = (year_number(&before), year_number(&after));
        assert!(b > 1582.7 && b < 1582.9, "{b}");
        assert!(a > 1582.7 && a < 1582.9, "{a}");
    }
}
