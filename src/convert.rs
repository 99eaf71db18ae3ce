// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 The imperial-calendar contributors

//! End-to-end conversions between civil instants and Imperial time.
//!
//! These chain the pairwise steps of [`transform`](crate::transform):
//!
//! ```text
//! DateTime<Utc> → grdt → juld → tert → mrsd → imsn → imdt → zoned imdt
//! zoned imdt → imdt → imsn → mrsd → tert → juld → grdt → zoned grdt
//! ```

use crate::gregorian::{GregorianDateTime, ZonedGregorianDateTime};
use crate::imperial::ZonedImperialDateTime;
use crate::solar_longitude::tert_to_mrls;
use crate::timezone::{Timezone, Zoned};
use crate::transform::{
    grdt_to_juld, imdt_to_imsn, imsn_to_imdt, imsn_to_mrsd, juld_to_grdt, juld_to_tert,
    mrsd_to_imsn, mrsd_to_tert, tert_to_juld, tert_to_mrsd,
};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Imperial local time in `timezone` of a UTC instant.
///
/// Sub-second precision is dropped before conversion.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use imperial_calendar::{convert::gregorian_to_imperial, Timezone};
/// let instant = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
/// let imperial = gregorian_to_imperial(instant, Timezone::AsiaTokyo);
/// assert_eq!(imperial.to_string(), "1428-05-07T19:12:47+09:00");
/// ```
pub fn gregorian_to_imperial(instant: DateTime<Utc>, timezone: Timezone) -> ZonedImperialDateTime {
    let grdt = GregorianDateTime::from_chrono(&instant.naive_utc());
    let tert = juld_to_tert(&grdt_to_juld(&grdt));
    let imdt = imsn_to_imdt(&mrsd_to_imsn(&tert_to_mrsd(&tert)));
    let zoned = ZonedImperialDateTime::from_naive(&imdt, timezone);
    debug!(%grdt, %zoned, "gregorian -> imperial");
    zoned
}

/// Gregorian local time in `timezone` of an Imperial instant.
///
/// ```
/// use imperial_calendar::{convert::imperial_to_gregorian, format::parse_imperial};
/// let imperial = parse_imperial("1428-05-07T10:12:47+00:00").unwrap();
/// let gregorian = imperial_to_gregorian(&imperial, "-05:00".parse().unwrap());
/// assert_eq!(gregorian.to_string(), "2024-12-31T19:00:00-05:00");
/// ```
pub fn imperial_to_gregorian(
    imperial: &ZonedImperialDateTime,
    timezone: Timezone,
) -> ZonedGregorianDateTime {
    let imdt = imperial.to_naive();
    let tert = mrsd_to_tert(&imsn_to_mrsd(&imdt_to_imsn(&imdt)));
    let grdt = juld_to_grdt(&tert_to_juld(&tert));
    let zoned = ZonedGregorianDateTime::from_naive(&grdt, timezone);
    debug!(%imperial, %zoned, "imperial -> gregorian");
    zoned
}

/// Imperial local time in `timezone` at `now`.
///
/// The clock is read by the caller, usually with [`Utc::now`].
pub fn current_imperial(now: DateTime<Utc>, timezone: Timezone) -> ZonedImperialDateTime {
    gregorian_to_imperial(now, timezone)
}

/// Areocentric solar longitude in degrees at a naive (UTC) Gregorian time.
pub fn gregorian_to_solar_longitude(grdt: &GregorianDateTime) -> f64 {
    tert_to_mrls(&juld_to_tert(&grdt_to_juld(grdt)))
}
