// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 The imperial-calendar contributors

//! Imperial holidays.
//!
//! A [`HolidayTable`] maps `year → month → day → names`. Lookups either name
//! their table explicitly ([`HolidayMars::in_table`], [`HolidayTable::between`])
//! or use the *current* table: the built-in [`HolidayTable::default_table`],
//! unless a test has installed a thread-scoped override with
//! [`HolidayTable::set_up_for_test`].
//!
//! ```
//! use imperial_calendar::{HolidayMars, HolidayTable};
//!
//! let table = HolidayTable::builder()
//!     .insert(1425, 1, 1, "四方節")
//!     .insert(1425, 1, 3, "元始祭")
//!     .build();
//! let holiday = HolidayMars::in_table(&table, 1425, 1, 1);
//! assert!(holiday.is_holiday());
//! assert_eq!(holiday.names(), ["四方節"]);
//! ```

use crate::calendar::ImperialYearMonth;
use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::OnceLock;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

type Days = BTreeMap<u8, Vec<String>>;
type Months = BTreeMap<u8, Days>;

/// Holiday names indexed by Imperial year, month and day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct HolidayTable {
    years: BTreeMap<i32, Months>,
}

/// Incremental construction of a [`HolidayTable`].
#[derive(Debug, Default)]
pub struct HolidayTableBuilder {
    table: HolidayTable,
}

impl HolidayTableBuilder {
    /// Add `name` to the date, after any names already there.
    pub fn insert(mut self, year: i32, month: u8, day: u8, name: impl Into<String>) -> Self {
        self.table.insert(year, month, day, name);
        self
    }

    pub fn build(self) -> HolidayTable {
        self.table
    }
}

thread_local! {
    static OVERRIDE: RefCell<Option<Rc<HolidayTable>>> = const { RefCell::new(None) };
}

/// Restores the table that was current before the override on drop.
///
/// Guards nest; the override lives on one thread, so the guard stays there.
///
/// ```compile_fail
/// fn assert_send<T: Send>() {}
/// assert_send::<imperial_calendar::HolidayOverride>();
/// ```
#[must_use = "the override is removed as soon as the guard is dropped"]
#[derive(Debug)]
pub struct HolidayOverride {
    previous: Option<Rc<HolidayTable>>,
    _not_send: PhantomData<Rc<()>>,
}

impl Drop for HolidayOverride {
    fn drop(&mut self) {
        let previous = self.previous.take();
        let nested = previous.is_some();
        OVERRIDE.with(|slot| *slot.borrow_mut() = previous);
        debug!(nested, "restored previous holiday table");
    }
}

impl HolidayTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> HolidayTableBuilder {
        HolidayTableBuilder::default()
    }

    /// Add `name` to the date, after any names already there.
    pub fn insert(&mut self, year: i32, month: u8, day: u8, name: impl Into<String>) {
        self.years
            .entry(year)
            .or_default()
            .entry(month)
            .or_default()
            .entry(day)
            .or_default()
            .push(name.into());
    }

    /// Names listed for a date; empty when it is not a holiday.
    pub fn names(&self, year: i32, month: u8, day: u8) -> &[String] {
        self.years
            .get(&year)
            .and_then(|months| months.get(&month))
            .and_then(|days| days.get(&day))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Years with at least one entry, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }

    /// Every holiday in `[lhs, rhs]`, chronologically.
    ///
    /// Empty when `lhs` comes after `rhs`. Only years present in the table
    /// are visited.
    pub fn between(&self, lhs: &HolidayMars, rhs: &HolidayMars) -> Vec<HolidayMars> {
        let mut holidays = Vec::new();
        if lhs.ordinal() > rhs.ordinal() || lhs.year > rhs.year {
            return holidays;
        }
        for (&year, months) in self.years.range(lhs.year..=rhs.year) {
            let first_month = if year == lhs.year { lhs.month } else { 1 };
            let last_month = if year == rhs.year { rhs.month } else { u8::MAX };
            if first_month > last_month {
                continue;
            }
            for (&month, days) in months.range(first_month..=last_month) {
                let first_day = if year == lhs.year && month == lhs.month {
                    lhs.day
                } else {
                    1
                };
                let last_day = if year == rhs.year && month == rhs.month {
                    rhs.day
                } else {
                    ImperialYearMonth::new(year, month).map_or(u8::MAX, |ym| ym.days())
                };
                if first_day > last_day {
                    continue;
                }
                holidays.extend(days.range(first_day..=last_day).map(|(&day, names)| {
                    HolidayMars {
                        year,
                        month,
                        day,
                        names: names.clone(),
                    }
                }));
            }
        }
        holidays
    }

    /// The built-in table for years 1425 through 1427.
    pub fn default_table() -> &'static HolidayTable {
        static DEFAULT: OnceLock<HolidayTable> = OnceLock::new();
        DEFAULT.get_or_init(|| {
            let mut table = HolidayTable::new();
            for &(year, month, day, name) in DEFAULT_ENTRIES {
                table.insert(year, month, day, name);
            }
            table
        })
    }

    /// Run `f` against the table in effect on this thread.
    pub fn with_current<R>(f: impl FnOnce(&HolidayTable) -> R) -> R {
        match OVERRIDE.with(|slot| slot.borrow().clone()) {
            Some(table) => f(&table),
            None => f(Self::default_table()),
        }
    }

    /// Replace the current table on this thread until the guard is dropped.
    pub fn set_up_for_test(table: HolidayTable) -> HolidayOverride {
        debug!(years = table.years.len(), "installing holiday table override");
        let previous = OVERRIDE.with(|slot| slot.borrow_mut().replace(Rc::new(table)));
        HolidayOverride {
            previous,
            _not_send: PhantomData,
        }
    }

    /// Restore the default table on this thread, discarding every override.
    pub fn tear_down_for_test() {
        let removed = OVERRIDE.with(|slot| slot.borrow_mut().take());
        if removed.is_some() {
            debug!("restored default holiday table");
        }
    }
}

/// A date in the Imperial calendar together with its holiday names.
///
/// Ordered by `year * 10000 + month * 100 + day`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HolidayMars {
    year: i32,
    month: u8,
    day: u8,
    names: Vec<String>,
}

impl HolidayMars {
    /// Look the date up in the current table.
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        HolidayTable::with_current(|table| Self::in_table(table, year, month, day))
    }

    pub fn in_table(table: &HolidayTable, year: i32, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            names: table.names(year, month, day).to_vec(),
        }
    }

    /// Holidays in `[lhs, rhs]` from the current table.
    pub fn between(lhs: &HolidayMars, rhs: &HolidayMars) -> Vec<HolidayMars> {
        HolidayTable::with_current(|table| table.between(lhs, rhs))
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

    pub fn is_holiday(&self) -> bool {
        !self.names.is_empty()
    }

    /// Names in table order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn ordinal(&self) -> i64 {
        i64::from(self.year) * 10_000 + i64::from(self.month) * 100 + i64::from(self.day)
    }
}

impl PartialOrd for HolidayMars {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HolidayMars {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal()
            .cmp(&other.ordinal())
            .then_with(|| self.names.cmp(&other.names))
    }
}

#[rustfmt::skip]
const DEFAULT_ENTRIES: &[(i32, u8, u8, &str)] = &[
    (1425, 1, 1, "四方節"), (1425, 1, 2, "振替休日"), (1425, 1, 3, "元始祭"),
    (1425, 1, 15, "元宵節"), (1425, 1, 16, "振替休日"),
    (1425, 3, 15, "春季皇靈祭"), (1425, 3, 16, "振替休日"),
    (1425, 5, 17, "神武天皇祭"),
    (1425, 6, 4, "紀元節"),
    (1425, 10, 13, "夏至祭"),
    (1425, 12, 26, "大祓前日"), (1425, 12, 27, "夏越大祓"),
    (1425, 13, 1, "裏元日"), (1425, 13, 2, "振替休日"),
    (1425, 16, 25, "秋季皇靈祭"),
    (1425, 17, 19, "天長節"),
    (1425, 18, 2, "地久節"),
    (1425, 20, 16, "神嘗祭"),
    (1425, 22, 1, "新嘗祭"), (1425, 22, 2, "振替休日"),
    (1425, 24, 26, "大祓前々日"), (1425, 24, 27, "大祓前日"), (1425, 24, 28, "年越大祓"),

    (1426, 1, 1, "四方節"), (1426, 1, 2, "振替休日"), (1426, 1, 3, "元始祭"),
    (1426, 1, 15, "元宵節"), (1426, 1, 16, "振替休日"),
    (1426, 3, 14, "春季皇靈祭"), (1426, 3, 16, "振替休日"),
    (1426, 5, 17, "神武天皇祭"),
    (1426, 6, 4, "紀元節"),
    (1426, 10, 13, "夏至祭"),
    (1426, 12, 26, "大祓前日"), (1426, 12, 27, "夏越大祓"),
    (1426, 13, 1, "裏元日"), (1426, 13, 2, "振替休日"),
    (1426, 16, 24, "秋季皇靈祭"),
    (1426, 17, 19, "天長節"),
    (1426, 18, 2, "地久節"),
    (1426, 20, 16, "神嘗祭"),
    (1426, 22, 1, "新嘗祭"), (1426, 22, 2, "振替休日"),
    (1426, 24, 25, "大祓前々日"), (1426, 24, 26, "大祓前日"), (1426, 24, 27, "年越大祓"),

    (1427, 1, 1, "四方節"), (1427, 1, 2, "振替休日"), (1427, 1, 3, "元始祭"),
    (1427, 1, 15, "元宵節"), (1427, 1, 16, "振替休日"),
    (1427, 3, 14, "春季皇靈祭"), (1427, 3, 16, "振替休日"),
    (1427, 5, 17, "神武天皇祭"),
    (1427, 6, 4, "紀元節"),
    (1427, 10, 13, "夏至祭"),
    (1427, 12, 26, "大祓前日"), (1427, 12, 27, "夏越大祓"),
    (1427, 13, 1, "裏元日"), (1427, 13, 2, "振替休日"),
    (1427, 16, 24, "秋季皇靈祭"),
    (1427, 17, 19, "天長節"),
    (1427, 18, 2, "地久節"),
    (1427, 20, 16, "神嘗祭"),
    (1427, 22, 1, "新嘗祭"), (1427, 22, 2, "振替休日"),
    (1427, 24, 26, "大祓前々日"), (1427, 24, 27, "大祓前日"), (1427, 24, 28, "年越大祓"),
];
