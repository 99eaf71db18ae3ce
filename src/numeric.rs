// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 The imperial-calendar contributors

//! Floor-division arithmetic.
//!
//! Every calendar formula in this crate assumes that the remainder of a
//! division takes the sign of the divisor (floor semantics), so that dates
//! before an epoch decompose the same way as dates after it. Rust's `/` and
//! `%` truncate toward zero instead; these helpers restore floor semantics
//! for both integers and reals.

/// Seconds in one (Earth or Mars) day as used by the split value types.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Seconds in one day as an integer.
pub const SECONDS_PER_DAY_I64: i64 = 86_400;

/// Integer division rounding toward negative infinity.
#[inline]
pub const fn floor_div(a: i64, b: i64) -> i64 {
    a.div_euclid(b) - if b < 0 && a.rem_euclid(b) != 0 { 1 } else { 0 }
}

/// Integer remainder carrying the sign of the divisor.
#[inline]
pub const fn floor_mod(a: i64, b: i64) -> i64 {
    a - floor_div(a, b) * b
}

/// `(floor_div(a, b), floor_mod(a, b))`.
#[inline]
pub const fn divmod(a: i64, b: i64) -> (i64, i64) {
    let q = floor_div(a, b);
    (q, a - q * b)
}

/// Real division rounding toward negative infinity.
#[inline]
pub fn floor_div_f64(a: f64, b: f64) -> f64 {
    (a / b).floor()
}

/// Real remainder carrying the sign of the divisor.
#[inline]
pub fn floor_mod_f64(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

/// `(floor_div_f64(a, b), a - q * b)`.
#[inline]
pub fn divmod_f64(a: f64, b: f64) -> (f64, f64) {
    let q = floor_div_f64(a, b);
    (q, a - q * b)
}

/// Absolute-tolerance closeness.
#[inline]
pub fn is_close(a: f64, b: f64, abs_tol: f64) -> bool {
    (a - b).abs() <= abs_tol
}

/// Split a day count plus an arbitrary second offset into a whole day and a
/// second in `[0, 86400)`.
#[inline]
pub(crate) fn normalize_day_second(day: i64, second: f64) -> (i64, f64) {
    let (carry, second) = divmod_f64(second, SECONDS_PER_DAY);
    let mut day = day + carry as i64;
    let mut second = second;
    // `divmod_f64` can land on the divisor itself when the dividend is a
    // hair below a multiple of it.
    if second >= SECONDS_PER_DAY {
        day += 1;
        second -= SECONDS_PER_DAY;
    }
    (day, second)
}

/// Round a sub-day second to the nearest whole second, carrying a rounded
/// `86400` into the next day.
#[inline]
pub(crate) fn round_day_second(day: i64, second: f64) -> (i64, i64) {
    let rounded = second.round() as i64;
    let (carry, second) = divmod(rounded, SECONDS_PER_DAY_I64);
    (day + carry, second)
}
