use chrono::NaiveDate;
use instalment_core::calendar::{
    Calendar, CalendarDate, CalendarKind, GregorianCalendar, PersianCalendar,
};
use instalment_core::InstalmentError;
use pretty_assertions::assert_eq;

fn gdate(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ===========================================================================
// Persian conversion anchors
// ===========================================================================

#[test]
fn test_nowruz_anchors() {
    let anchors = [
        (gdate(2023, 3, 21), CalendarDate::new(1402, 1, 1)),
        (gdate(2024, 3, 20), CalendarDate::new(1403, 1, 1)),
        (gdate(2025, 3, 21), CalendarDate::new(1404, 1, 1)),
    ];
    for (gregorian, expected) in anchors {
        assert_eq!(PersianCalendar.to_calendar_date(gregorian).unwrap(), expected);
    }
}

#[test]
fn test_mid_year_conversion() {
    assert_eq!(
        PersianCalendar.to_calendar_date(gdate(2026, 10, 14)).unwrap(),
        CalendarDate::new(1405, 7, 22)
    );
    assert_eq!(
        PersianCalendar.to_calendar_date(gdate(2024, 12, 31)).unwrap(),
        CalendarDate::new(1403, 10, 11)
    );
}

#[test]
fn test_consecutive_days_never_skip() {
    // Walk a full year and check the day counter moves by one each step.
    let mut date = gdate(2024, 3, 20);
    let mut prev = PersianCalendar.to_calendar_date(date).unwrap();
    for _ in 0..400 {
        date = date.succ_opt().unwrap();
        let cur = PersianCalendar.to_calendar_date(date).unwrap();
        if cur.month == prev.month {
            assert_eq!(cur.day, prev.day + 1);
        } else {
            assert_eq!(cur.day, 1);
            assert_eq!(
                prev.day,
                PersianCalendar.days_in_month(prev.year, prev.month).unwrap()
            );
        }
        prev = cur;
    }
}

#[test]
fn test_month_length_sums_to_year_length() {
    let leap: u32 = (1..=12)
        .map(|m| PersianCalendar.days_in_month(1403, m).unwrap())
        .sum();
    let common: u32 = (1..=12)
        .map(|m| PersianCalendar.days_in_month(1404, m).unwrap())
        .sum();
    assert_eq!(leap, 366);
    assert_eq!(common, 365);
}

// ===========================================================================
// Month arithmetic through the trait
// ===========================================================================

#[test]
fn test_add_months_into_esfand() {
    let start = CalendarDate::new(1403, 6, 31);
    assert_eq!(
        PersianCalendar.add_months(start, 6).unwrap(),
        CalendarDate::new(1403, 12, 30)
    );
    assert_eq!(
        PersianCalendar.add_months(CalendarDate::new(1404, 6, 31), 6).unwrap(),
        CalendarDate::new(1404, 12, 29)
    );
}

#[test]
fn test_gregorian_add_months_over_many_years() {
    let start = CalendarDate::new(2024, 2, 29);
    assert_eq!(
        GregorianCalendar.add_months(start, 12).unwrap(),
        CalendarDate::new(2025, 2, 28)
    );
    assert_eq!(
        GregorianCalendar.add_months(start, 48).unwrap(),
        CalendarDate::new(2028, 2, 29)
    );
}

#[test]
fn test_month_out_of_range() {
    let err = PersianCalendar.days_in_month(1403, 13).unwrap_err();
    match err {
        InstalmentError::InvalidInput { field, .. } => assert_eq!(field, "month"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

// ===========================================================================
// Selection
// ===========================================================================

#[test]
fn test_calendar_kind_serde() {
    let kind: CalendarKind = serde_json::from_str("\"gregorian\"").unwrap();
    assert_eq!(kind, CalendarKind::Gregorian);
    assert_eq!(serde_json::to_string(&CalendarKind::Persian).unwrap(), "\"persian\"");
    assert_eq!(CalendarKind::default(), CalendarKind::Persian);
}

#[test]
fn test_calendar_kind_factory() {
    assert_eq!(CalendarKind::Gregorian.calendar().name(), "gregorian");
    assert_eq!(CalendarKind::Persian.calendar().name(), "persian");
}
