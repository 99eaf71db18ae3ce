// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 The imperial-calendar contributors

//! Time-scale marker types.
//!
//! | Marker | Description | Relation to JD(TT) |
//! |--------|-------------|--------------------|
//! | [`TT`] | Terrestrial Time | identity |
//! | [`MSD`] | Mars Sol Date | `JD = 1.0274912517 · (MSD − 44796 + 0.0009626) + 2451549.5` |
//!
//! The Mars Sol Date mapping anchors MSD 44796.0 to four and a half days
//! after J2000.0, corrected by the 0.0009626-sol epoch offset, with one sol
//! lasting 1.0274912517 Earth days.

use super::instant::{Time, TimeScale};
use qtty::Days;

/// J2000.0 on the Julian Day axis.
pub(crate) const J2000: f64 = 2_451_545.0;

/// Days between J2000.0 and the Mars Sol Date anchor.
const MSD_ANCHOR_OFFSET_D: f64 = 4.5;

/// Mars Sol Date value at the anchor instant.
const MSD_ANCHOR: f64 = 44_796.0;

/// Epoch correction of the Mars Sol Date, in sols.
const MSD_EPOCH_CORRECTION: f64 = 0.000_962_6;

/// Earth days per sol.
pub const EARTH_DAYS_PER_SOL: f64 = 1.027_491_251_7;

/// Terrestrial Time, the uniform axis ephemerides are expressed on.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct TT;

impl TimeScale for TT {
    const LABEL: &'static str = "TT";

    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt
    }
}

/// Mars Sol Date: continuous count of sols since the Mars epoch.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct MSD;

impl TimeScale for MSD {
    const LABEL: &'static str = "MSD";

    #[inline]
    fn to_jd_tt(value: Days) -> Days {
        Days::new(
            EARTH_DAYS_PER_SOL * (value.value() - MSD_ANCHOR + MSD_EPOCH_CORRECTION)
                + J2000
                + MSD_ANCHOR_OFFSET_D,
        )
    }

    #[inline]
    fn from_jd_tt(jd_tt: Days) -> Days {
        Days::new(
            (jd_tt.value() - J2000 - MSD_ANCHOR_OFFSET_D) / EARTH_DAYS_PER_SOL + MSD_ANCHOR
                - MSD_EPOCH_CORRECTION,
        )
    }

    /// Same whole sol and fractional parts within 5e-6 sol.
    #[inline]
    fn same_instant(a: Days, b: Days) -> bool {
        let (a, b) = (a.value(), b.value());
        a.floor() == b.floor() && ((a - a.floor()) - (b - b.floor())).abs() <= 5e-6
    }
}

/// An instant on the Terrestrial Time axis, as a Julian Day in TT.
pub type TerrestrialTime = Time<TT>;

/// An instant as a Mars Sol Date.
pub type MarsSolDate = Time<MSD>;

impl From<Time<TT>> for Time<MSD> {
    #[inline]
    fn from(t: Time<TT>) -> Self {
        t.to::<MSD>()
    }
}

impl From<Time<MSD>> for Time<TT> {
    #[inline]
    fn from(t: Time<MSD>) -> Self {
        t.to::<TT>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn msd_anchor() {
        let tt = Time::<TT>::new(J2000 + MSD_ANCHOR_OFFSET_D);
        let msd = tt.to::<MSD>();
        assert!((msd.value() - (MSD_ANCHOR - MSD_EPOCH_CORRECTION)).abs() < 1e-9);
    }

    #[test]
    fn msd_tt_roundtrip() {
        let msd = Time::<MSD>::new(34_127.295_516_404_454);
        let tt: Time<TT> = msd.into();
        assert!((tt.value() - 2_440_587.500_465_196).abs() < 1e-7);
        let back: Time<MSD> = tt.into();
        assert!((back.value() - msd.value()).abs() < 1e-7);
    }

    #[test]
    fn one_sol_is_longer_than_one_day() {
        let a = Time::<MSD>::new(50_000.0).to::<TT>();
        let b = Time::<MSD>::new(50_001.0).to::<TT>();
        assert!(((b - a).value() - EARTH_DAYS_PER_SOL).abs() < 1e-9);
    }

    #[test]
    fn msd_equality_splits_whole_and_fraction() {
        assert_eq!(Time::<MSD>::new(100.25), Time::<MSD>::new(100.250_001));
        assert_ne!(Time::<MSD>::new(100.25), Time::<MSD>::new(100.26));
        // Across a whole-sol boundary the integer parts differ.
        assert_ne!(Time::<MSD>::new(100.999_999_9), Time::<MSD>::new(101.000_000_1));
    }
}
