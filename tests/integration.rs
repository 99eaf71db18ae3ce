use chrono::{TimeZone, Utc};
use imperial_calendar::convert::{gregorian_to_imperial, imperial_to_gregorian};
use imperial_calendar::format::{format_gregorian, format_imperial, parse_gregorian, parse_imperial};
use imperial_calendar::transform::*;
use imperial_calendar::{
    CalendarError, GregorianDateTime, HolidayMars, HolidayTable, ImperialDateTime,
    ImperialYearMonth, JulianDay, MarsSolDate, TerrestrialTime, Timezone, Zoned,
    ZonedImperialDateTime, MAX_YEAR, MIN_YEAR,
};

#[test]
fn imperial_epoch_fixture() {
    let imdt = ImperialDateTime::new(1, 1, 1, 6, 14, 25).unwrap();
    let imsn = imdt_to_imsn(&imdt);
    assert_eq!(imsn.day(), 668);
    assert!((imsn.value() - 668.260_01).abs() < 1e-4);
    assert_eq!(imsn_to_imdt(&imsn), imdt);
}

#[test]
fn civil_roundtrip_sweep() {
    let start = Utc.with_ymd_and_hms(1900, 1, 1, 3, 17, 41).unwrap();
    for step in 0..800 {
        let instant = start + chrono::Duration::seconds(step * 97 * 86_400 + step * 3_613);
        let imperial = gregorian_to_imperial(instant, Timezone::AsiaTokyo);
        let gregorian = imperial_to_gregorian(&imperial, Timezone::Utc);
        let back = gregorian.to_naive().to_chrono().unwrap().and_utc();
        assert!((back - instant).num_seconds().abs() <= 1, "{instant} -> {back}");
    }
}

#[test]
fn unix_epoch_through_every_axis() {
    let grdt = GregorianDateTime::new(1970, 1, 1, 0, 0, 0).unwrap();
    let juld = grdt_to_juld(&grdt);
    assert_eq!(juld, JulianDay::new(2_440_587, 43_200.0).unwrap());

    let tert = juld_to_tert(&juld);
    assert_eq!(tert, TerrestrialTime::new(2_440_587.500_465_196));

    let mrsd = tert_to_mrsd(&tert);
    assert_eq!(mrsd, MarsSolDate::new(34_127.295_516_404_454));

    let imdt = imsn_to_imdt(&mrsd_to_imsn(&mrsd));
    assert_eq!(imdt, ImperialDateTime::new(1398, 23, 12, 22, 5, 33).unwrap());
}

#[test]
fn api_style_imperial_to_gregorian() {
    let imperial = parse_imperial("1428-05-07T10:12:47+00:00").unwrap();
    let gregorian = imperial_to_gregorian(&imperial, "-05:00".parse().unwrap());
    assert_eq!(format_gregorian(&gregorian), "2024-12-31T19:00:00-05:00");

    assert!(matches!(
        parse_imperial("2025-13-40T99:99:99+00:00"),
        Err(CalendarError::InvalidField { field: "day", .. })
    ));
}

#[test]
fn api_style_gregorian_to_imperial() {
    let instant = parse_gregorian("2025-01-01T00:00:00+00:00").unwrap();
    let imperial = gregorian_to_imperial(instant.with_timezone(&Utc), "+09:00".parse().unwrap());
    assert_eq!(format_imperial(&imperial), "1428-05-07T19:12:47+09:00");
    assert_eq!(imperial.offset(), 9.0);

    assert_eq!(
        parse_gregorian("2025-01-01 00:00:00"),
        Err(CalendarError::MalformedDateTime("2025-01-01 00:00:00".to_string()))
    );
}

#[test]
fn both_calendars_accept_both_aliases() {
    let instant = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    for timezone in [Timezone::Utc, Timezone::AsiaTokyo] {
        let imperial = gregorian_to_imperial(instant, timezone);
        let gregorian = imperial_to_gregorian(&imperial, timezone);
        assert_eq!(gregorian.timezone(), timezone);
        assert_eq!(gregorian.to_naive(), GregorianDateTime::new(2025, 1, 1, 0, 0, 0).unwrap());
    }
}

#[test]
fn timezone_errors_are_distinct() {
    assert!(matches!(
        "+24:00".parse::<Timezone>(),
        Err(CalendarError::TimezoneOutOfRange { hours: 24, minutes: 0 })
    ));
    assert!(matches!(
        "0900".parse::<Timezone>(),
        Err(CalendarError::MalformedTimezone(_))
    ));
}

#[test]
fn zoned_ordering_follows_the_instant() {
    let ahead = parse_imperial("0002-02-02T03:02:02+01:00").unwrap();
    let behind = parse_imperial("0002-02-02T01:02:02-01:00").unwrap();
    assert_eq!(ahead, behind);
    assert!(!ahead.same_fields(&behind));
    let earlier = parse_imperial("0002-02-02T03:02:01+01:00").unwrap();
    assert!(earlier < behind);
}

#[test]
fn year_range_edges_convert_without_overflow() {
    assert!(matches!(
        parse_imperial("1300000000-01-01T00:00:00+00:00"),
        Err(CalendarError::InvalidField { field: "year", .. })
    ));

    let last = parse_imperial("1000000-24-27T23:30:00-01:00").unwrap();
    let naive = last.to_naive();
    assert_eq!(
        (naive.year(), naive.month(), naive.day(), naive.hour(), naive.minute()),
        (MAX_YEAR + 1, 1, 1, 0, 30)
    );
    let gregorian = imperial_to_gregorian(&last, Timezone::Utc).to_naive();
    assert!((1_800_000..2_000_000).contains(&gregorian.year()), "{gregorian}");

    let first = ImperialDateTime::new(MIN_YEAR, 1, 1, 0, 0, 0).unwrap();
    let zoned = ZonedImperialDateTime::from_naive(&first, Timezone::Utc);
    let gregorian = imperial_to_gregorian(&zoned, Timezone::AsiaTokyo).to_naive();
    assert!((-2_000_000..-1_800_000).contains(&gregorian.year()), "{gregorian}");
    assert!((1..=12).contains(&gregorian.month()));
}

#[test]
fn month_navigation_wraps_years() {
    let last = ImperialYearMonth::new(1425, 24).unwrap();
    assert_eq!(last.days(), 28);
    assert_eq!(last.next_month(), ImperialYearMonth::new(1426, 1).unwrap());
    assert_eq!(ImperialYearMonth::new(1426, 1).unwrap().prev_month(), last);
}

#[test]
fn default_holidays_and_override() {
    let holidays = HolidayMars::between(
        &HolidayMars::new(1425, 1, 1),
        &HolidayMars::new(1425, 1, 31),
    );
    assert_eq!(
        holidays.iter().map(HolidayMars::day).collect::<Vec<_>>(),
        [1, 2, 3, 15, 16]
    );

    {
        let _guard = HolidayTable::set_up_for_test(
            HolidayTable::builder()
                .insert(1425, 1, 1, "a")
                .insert(1425, 1, 3, "b")
                .insert(1425, 1, 5, "c")
                .build(),
        );
        let between = |from: u8, to: u8| {
            HolidayMars::between(&HolidayMars::new(1425, 1, from), &HolidayMars::new(1425, 1, to))
                .iter()
                .map(HolidayMars::day)
                .collect::<Vec<_>>()
        };
        assert_eq!(between(1, 5), [1, 3, 5]);
        assert_eq!(between(2, 5), [3, 5]);
        assert_eq!(between(1, 4), [1, 3]);
        assert!(between(5, 1).is_empty());
    }

    assert_eq!(HolidayMars::new(1425, 1, 15).names(), ["元宵節"]);
}

#[cfg(feature = "serde")]
#[test]
fn serde_holiday_table_from_nested_json() {
    let table: HolidayTable =
        serde_json::from_str(r#"{"1425": {"1": {"1": ["四方節"], "3": ["元始祭"]}}}"#).unwrap();
    assert_eq!(table.names(1425, 1, 3), ["元始祭"]);
    assert!(HolidayMars::in_table(&table, 1425, 1, 1).is_holiday());
    assert!(!HolidayMars::in_table(&table, 1425, 1, 2).is_holiday());
}

#[cfg(feature = "serde")]
#[test]
fn serde_rejects_invalid_calendar_fields() {
    let ok = r#"{"year":1425,"month":6,"day":27,"hour":0,"minute":0,"second":0}"#;
    let imdt: ImperialDateTime = serde_json::from_str(ok).unwrap();
    assert_eq!(imdt.day(), 27);

    let bad = r#"{"year":1425,"month":6,"day":28,"hour":0,"minute":0,"second":0}"#;
    assert!(serde_json::from_str::<ImperialDateTime>(bad).is_err());

    let grdt: GregorianDateTime = serde_json::from_str(
        r#"{"year":2020,"month":2,"day":29,"hour":12,"minute":0,"second":0}"#,
    )
    .unwrap();
    assert_eq!(grdt, GregorianDateTime::new(2020, 2, 29, 12, 0, 0).unwrap());
    for bad in [
        r#"{"year":2020,"month":13,"day":1,"hour":0,"minute":0,"second":0}"#,
        r#"{"year":2020,"month":1,"day":0,"hour":0,"minute":0,"second":0}"#,
        r#"{"year":2019,"month":2,"day":29,"hour":0,"minute":0,"second":0}"#,
    ] {
        assert!(serde_json::from_str::<GregorianDateTime>(bad).is_err(), "{bad}");
    }

    let tz: Timezone = serde_json::from_str(r#""Asia/Tokyo""#).unwrap();
    assert_eq!(tz, Timezone::AsiaTokyo);
    assert_eq!(serde_json::to_string(&tz).unwrap(), r#""Asia/Tokyo""#);
}
