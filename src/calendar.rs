// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 The imperial-calendar contributors

//! Imperial calendar arithmetic.
//!
//! ## Rules
//!
//! | Unit | Length |
//! |------|--------|
//! | common year | 668 sols |
//! | leap year (odd, or multiple of 10 but not of 250) | 669 sols |
//! | months 6, 12, 18, 24 | 27 sols |
//! | other months | 28 sols |
//! | month 24 of a leap year | 28 sols |
//!
//! The leap pattern repeats every 1000 years, so a millennium has a fixed
//! length ([`MILLENNIUM_SOLS`]). Mapping a date to its sol index is a sum of
//! three lookups: whole millennia, the cumulative year table inside the
//! millennium, and the cumulative month table inside the year. The inverse
//! searches the same tables.

use crate::error::{CalendarError, Result};
use crate::numeric::{divmod, floor_div, floor_mod};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const MONTHS_PER_YEAR: u8 = 24;

const YEARS_PER_MILLENNIUM: usize = 1000;

/// Earliest year accepted by the validated constructors of either calendar.
pub const MIN_YEAR: i32 = -1_000_000;

/// Latest year accepted by the validated constructors of either calendar.
///
/// An Imperial year lasts about 1.88 Earth years, so every conversion
/// result stays within a few million years and far inside `i32`.
pub const MAX_YEAR: i32 = 1_000_000;

/// Month names, indexed by `month - 1`.
pub const MONTH_NAMES: [&str; MONTHS_PER_YEAR as usize] = [
    "立春", "雨水", "啓蟄", "春分", "清明", "穀雨", "立夏", "小滿", "芒種", "夏至", "小暑", "大暑",
    "立秋", "處暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至", "小寒", "大寒",
];

/// # Errors
/// [`CalendarError::InvalidField`] naming `year` outside
/// [`MIN_YEAR`]`..=`[`MAX_YEAR`].
pub(crate) fn check_year(year: i32) -> Result<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::InvalidField {
            field: "year",
            value: i64::from(year),
        });
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// Year / month
// ═══════════════════════════════════════════════════════════════════════════

/// An Imperial year number (may be zero or negative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImperialYear(pub i32);

impl ImperialYear {
    pub const COMMON_SOLS: u16 = 668;
    pub const LEAP_SOLS: u16 = 669;

    #[inline]
    pub const fn is_leap_year(&self) -> bool {
        let year = self.0;
        year % 2 != 0 || (year % 10 == 0 && year % 250 != 0)
    }

    #[inline]
    pub const fn days(&self) -> u16 {
        if self.is_leap_year() {
            Self::LEAP_SOLS
        } else {
            Self::COMMON_SOLS
        }
    }
}

/// A month number in `1..=24`, independent of any year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImperialMonth(u8);

impl ImperialMonth {
    /// # Errors
    /// [`CalendarError::InvalidField`] unless `1 <= month <= 24`.
    pub fn new(month: u8) -> Result<Self> {
        if !(1..=MONTHS_PER_YEAR).contains(&month) {
            return Err(CalendarError::InvalidField {
                field: "month",
                value: i64::from(month),
            });
        }
        Ok(Self(month))
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.0
    }

    /// Length in a common year.
    #[inline]
    pub const fn days(&self) -> u8 {
        month_days(self.0)
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[usize::from(self.0 - 1)]
    }
}

#[inline]
const fn month_days(month: u8) -> u8 {
    if month % 6 == 0 {
        27
    } else {
        28
    }
}

/// A month of a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImperialYearMonth {
    year: i32,
    month: u8,
}

impl ImperialYearMonth {
    /// # Errors
    /// [`CalendarError::InvalidField`] for a year outside
    /// [`MIN_YEAR`]`..=`[`MAX_YEAR`] or a month outside `1..=24`.
    pub fn new(year: i32, month: u8) -> Result<Self> {
        check_year(year)?;
        ImperialMonth::new(month)?;
        Ok(Self { year, month })
    }

    pub(crate) const fn new_unchecked(year: i32, month: u8) -> Self {
        Self { year, month }
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Length of this month, including the leap sol of month 24.
    pub const fn days(&self) -> u8 {
        let days = month_days(self.month);
        if self.month == MONTHS_PER_YEAR && ImperialYear(self.year).is_leap_year() {
            days + 1
        } else {
            days
        }
    }

    pub const fn next_month(&self) -> Self {
        if self.month == MONTHS_PER_YEAR {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub const fn prev_month(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: MONTHS_PER_YEAR,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Cumulative tables
// ═══════════════════════════════════════════════════════════════════════════

const fn build_year_offsets() -> [i64; YEARS_PER_MILLENNIUM] {
    let mut table = [0_i64; YEARS_PER_MILLENNIUM];
    let mut i = 1;
    while i < YEARS_PER_MILLENNIUM {
        table[i] = table[i - 1] + ImperialYear(i as i32 - 1).days() as i64;
        i += 1;
    }
    table
}

const fn build_month_offsets() -> [i64; MONTHS_PER_YEAR as usize] {
    let mut table = [0_i64; MONTHS_PER_YEAR as usize];
    let mut i = 1;
    while i < MONTHS_PER_YEAR as usize {
        table[i] = table[i - 1] + month_days(i as u8) as i64;
        i += 1;
    }
    table
}

/// Sols before each year of a millennium.
pub(crate) const YEAR_OFFSETS: [i64; YEARS_PER_MILLENNIUM] = build_year_offsets();

/// Sols before each month of a year.
pub(crate) const MONTH_OFFSETS: [i64; MONTHS_PER_YEAR as usize] = build_month_offsets();

/// Sols in 1000 consecutive years.
pub const MILLENNIUM_SOLS: i64 = YEAR_OFFSETS[YEARS_PER_MILLENNIUM - 1]
    + ImperialYear(YEARS_PER_MILLENNIUM as i32 - 1).days() as i64;

/// Zero-based sol index of a calendar date.
pub(crate) fn sol_index(year: i32, month: u8, day: u8) -> i64 {
    let year = i64::from(year);
    let millennia = floor_div(year, YEARS_PER_MILLENNIUM as i64);
    let year_in_millennium = floor_mod(year, YEARS_PER_MILLENNIUM as i64) as usize;
    millennia * MILLENNIUM_SOLS
        + YEAR_OFFSETS[year_in_millennium]
        + MONTH_OFFSETS[usize::from(month) - 1]
        + i64::from(day)
        - 1
}

/// Calendar date of a zero-based sol index.
pub(crate) fn date_of_sol_index(index: i64) -> (i32, u8, u8) {
    let (millennia, in_millennium) = divmod(index, MILLENNIUM_SOLS);
    let year_in_millennium = YEAR_OFFSETS.partition_point(|&offset| offset <= in_millennium) - 1;
    let in_year = in_millennium - YEAR_OFFSETS[year_in_millennium];
    let month_index = MONTH_OFFSETS.partition_point(|&offset| offset <= in_year) - 1;
    let day = in_year - MONTH_OFFSETS[month_index] + 1;
    let year = millennia * YEARS_PER_MILLENNIUM as i64 + year_in_millennium as i64;
    // Sol indices come from bounded years shifted by at most a sol.
    (year as i32, month_index as u8 + 1, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        for year in [1, 10, 1245, -1, -10] {
            assert!(ImperialYear(year).is_leap_year(), "{year}");
            assert_eq!(ImperialYear(year).days(), 669);
        }
        for year in [0, 2, 250, 500, 1246, -2, -250] {
            assert!(!ImperialYear(year).is_leap_year(), "{year}");
            assert_eq!(ImperialYear(year).days(), 668);
        }
    }

    #[test]
    fn month_lengths() {
        for month in 1..=24 {
            let expected = if month % 6 == 0 { 27 } else { 28 };
            assert_eq!(ImperialMonth::new(month).unwrap().days(), expected);
        }
        assert_eq!(ImperialYearMonth::new(1245, 24).unwrap().days(), 28);
        assert_eq!(ImperialYearMonth::new(1246, 24).unwrap().days(), 27);
        assert_eq!(ImperialYearMonth::new(1245, 18).unwrap().days(), 27);
    }

    #[test]
    fn month_validation() {
        assert!(ImperialMonth::new(0).is_err());
        assert_eq!(
            ImperialYearMonth::new(1, 25),
            Err(CalendarError::InvalidField {
                field: "month",
                value: 25
            })
        );
    }

    #[test]
    fn month_names() {
        assert_eq!(ImperialMonth::new(1).unwrap().name(), "立春");
        assert_eq!(ImperialMonth::new(24).unwrap().name(), "大寒");
    }

    #[test]
    fn month_navigation_wraps_years() {
        let last = ImperialYearMonth::new(1398, 24).unwrap();
        assert_eq!(last.next_month(), ImperialYearMonth::new(1399, 1).unwrap());
        let first = ImperialYearMonth::new(1399, 1).unwrap();
        assert_eq!(first.prev_month(), last);
        let mid = ImperialYearMonth::new(1399, 12).unwrap();
        assert_eq!(mid.next_month().prev_month(), mid);
    }

    #[test]
    fn year_range_is_enforced() {
        assert!(ImperialYearMonth::new(MAX_YEAR, 24).is_ok());
        assert!(ImperialYearMonth::new(MIN_YEAR, 1).is_ok());
        for year in [MAX_YEAR + 1, MIN_YEAR - 1, i32::MAX, i32::MIN] {
            assert_eq!(
                ImperialYearMonth::new(year, 1),
                Err(CalendarError::InvalidField {
                    field: "year",
                    value: i64::from(year)
                })
            );
        }
    }

    #[test]
    fn navigation_at_the_year_range_edges() {
        let last = ImperialYearMonth::new(MAX_YEAR, 24).unwrap();
        assert_eq!(last.next_month().year(), MAX_YEAR + 1);
        assert_eq!(last.next_month().prev_month(), last);
        let first = ImperialYearMonth::new(MIN_YEAR, 1).unwrap();
        assert_eq!(first.prev_month().year(), MIN_YEAR - 1);

        let past_end = sol_index(MAX_YEAR, 24, last.days()) + 1;
        assert_eq!(date_of_sol_index(past_end), (MAX_YEAR + 1, 1, 1));
        let before_start = sol_index(MIN_YEAR, 1, 1) - 1;
        assert_eq!(date_of_sol_index(before_start), (MIN_YEAR - 1, 24, 28));
    }

    #[test]
    fn table_totals() {
        assert_eq!(MILLENNIUM_SOLS, 668_596);
        assert_eq!(MONTH_OFFSETS[23], 641);
        assert_eq!(YEAR_OFFSETS[1], 668);
        assert_eq!(YEAR_OFFSETS[2], 668 + 669);
        let year_sum: i64 = (0..24).map(|m| i64::from(month_days(m + 1))).sum();
        assert_eq!(year_sum, 668);
    }

    #[test]
    fn sol_index_fixtures() {
        assert_eq!(sol_index(0, 1, 1), 0);
        assert_eq!(sol_index(1000, 1, 1), 668_596);
        assert_eq!(sol_index(1, 1, 1), 668);
        assert_eq!(sol_index(1987, 6, 7), 1_328_646);
        assert_eq!(sol_index(-1, 24, 28), -1);
    }

    #[test]
    fn sol_index_inverts() {
        for index in (-1_500_000..1_500_000).step_by(997) {
            let (year, month, day) = date_of_sol_index(index);
            assert!((1..=24).contains(&month));
            assert!(day >= 1 && day <= ImperialYearMonth::new(year, month).unwrap().days());
            assert_eq!(sol_index(year, month, day), index);
        }
        assert_eq!(date_of_sol_index(-1), (-1, 24, 28));
        assert_eq!(date_of_sol_index(668_595), (999, 24, 28));
    }
}
