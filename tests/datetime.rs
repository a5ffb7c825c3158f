use bujo_labels::utils::datetime;
use chrono::{NaiveDate, TimeZone, Utc, Weekday};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_parse_and_format_date() {
    let parsed = datetime::parse_date("2024-03-09").unwrap();
    assert_eq!(parsed, date(2024, 3, 9));
    assert_eq!(datetime::format_ymd(parsed), "2024-03-09");
    assert!(datetime::parse_date("09/03/2024").is_err());
}

#[test]
fn test_parse_timezone() {
    assert!(datetime::parse_timezone("UTC").is_some());
    assert!(datetime::parse_timezone("Asia/Tokyo").is_some());
    assert!(datetime::parse_timezone(" Europe/Berlin ").is_some());
    assert!(datetime::parse_timezone("Mars/Olympus_Mons").is_none());
    assert!(datetime::parse_timezone("").is_none());
}

#[test]
fn test_date_in_timezone() {
    let instant = Utc.with_ymd_and_hms(2024, 6, 30, 22, 30, 0).unwrap();

    let tokyo = datetime::parse_timezone("Asia/Tokyo").unwrap();
    assert_eq!(datetime::date_in_timezone(instant, tokyo), date(2024, 7, 1));

    let utc = datetime::parse_timezone("UTC").unwrap();
    assert_eq!(datetime::date_in_timezone(instant, utc), date(2024, 6, 30));
}

#[test]
fn test_format_human_date() {
    // Monday
    let today = date(2024, 1, 15);

    assert_eq!(datetime::format_human_date(today, today), "today");
    assert_eq!(datetime::format_human_date(date(2024, 1, 16), today), "tomorrow");
    assert_eq!(datetime::format_human_date(date(2024, 1, 14), today), "yesterday");
    assert_eq!(datetime::format_human_date(date(2024, 1, 19), today), "next Friday");
    assert_eq!(datetime::format_human_date(date(2024, 1, 10), today), "last Wednesday");
    assert_eq!(datetime::format_human_date(date(2024, 3, 1), today), "Mar 01");
    assert_eq!(datetime::format_human_date(date(2023, 3, 1), today), "Mar 01, 2023");
}

#[test]
fn test_weekday_name() {
    assert_eq!(datetime::weekday_name(Weekday::Mon), "Monday");
    assert_eq!(datetime::weekday_name(Weekday::Sun), "Sunday");
}
