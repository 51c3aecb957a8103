mod common;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use common::date;
use labhub::core::compute_due_date;
use labhub::utils::date::{
    add_ordinal_suffix, adjust_to_most_recent_friday, clean_and_parse_date, get_fridays_between,
    next_weekday_on_or_after, ordinal_day, parse_anchor, parse_weekday,
};

#[test]
fn parses_month_and_day_from_schedule_text() {
    let cases = [
        ("Monday, 09/01", 9, 1),
        ("Monday, 09/01 SKIPPED FOR HOLIDAY!", 9, 1),
        ("Friday, 12/19", 12, 19),
        ("Tuesday, 9/2", 9, 2),
        ("  Wednesday,   10/15   ", 10, 15),
    ];
    for (text, m, d) in cases {
        let parsed = clean_and_parse_date(text, 2025).unwrap_or_else(|| panic!("{text}"));
        assert_eq!((parsed.month(), parsed.day(), parsed.year()), (m, d, 2025), "{text}");
    }
}

#[test]
fn malformed_dates_are_absent() {
    for text in [
        "",
        "TBD",
        "Monday 09/01",
        "Monday,09/01",
        "Monday, 13/01",
        "Monday, 02/30",
        "Monday, September 1",
        "Monday, 09/01/2025",
        "Monday, 09-01",
    ] {
        assert_eq!(clean_and_parse_date(text, 2025), None, "{text:?}");
    }
}

#[test]
fn uses_the_given_year() {
    assert_eq!(clean_and_parse_date("Sunday, 02/29", 2024), Some(date(2024, 2, 29)));
    assert_eq!(clean_and_parse_date("Sunday, 02/29", 2025), None);
}

#[test]
fn ordinal_suffixes() {
    let expected = [
        (1, "1st"),
        (2, "2nd"),
        (3, "3rd"),
        (4, "4th"),
        (11, "11th"),
        (12, "12th"),
        (13, "13th"),
        (21, "21st"),
        (22, "22nd"),
        (23, "23rd"),
        (30, "30th"),
        (31, "31st"),
    ];
    for (day, text) in expected {
        assert_eq!(ordinal_day(day), text);
    }
}

#[test]
fn formats_full_ordinal_dates() {
    assert_eq!(add_ordinal_suffix(Some(date(2025, 9, 1))), "Monday, September 1st");
    assert_eq!(add_ordinal_suffix(Some(date(2025, 9, 12))), "Friday, September 12th");
    assert_eq!(add_ordinal_suffix(Some(date(2025, 10, 22))), "Wednesday, October 22nd");
    assert_eq!(add_ordinal_suffix(None), "Unknown Date");
}

#[test]
fn fridays_between_is_weekly_and_bounded() {
    let start = date(2025, 1, 1);
    for offset in 0..14 {
        let from = start + Duration::days(offset);
        let to = from + Duration::days(60);
        let fridays: Vec<_> = get_fridays_between(from, to).collect();

        assert!(!fridays.is_empty());
        assert!(fridays.iter().all(|d| d.weekday() == Weekday::Fri));
        assert!(fridays[0] >= from && fridays[0] <= from + Duration::days(6));
        assert!(*fridays.last().unwrap() <= to);
        for w in fridays.windows(2) {
            assert_eq!(w[1] - w[0], Duration::days(7));
        }
    }
}

#[test]
fn fridays_between_is_inclusive_and_restartable() {
    let fridays = get_fridays_between(date(2025, 9, 5), date(2025, 9, 19));
    let first: Vec<_> = fridays.clone().collect();
    assert_eq!(first, vec![date(2025, 9, 5), date(2025, 9, 12), date(2025, 9, 19)]);
    assert_eq!(fridays.collect::<Vec<_>>(), first);

    // Monday to Thursday of the same week holds no Friday.
    assert_eq!(get_fridays_between(date(2025, 9, 1), date(2025, 9, 4)).count(), 0);
}

#[test]
fn adjusts_to_most_recent_friday() {
    let friday = date(2025, 9, 5);
    assert_eq!(adjust_to_most_recent_friday(friday), friday);

    for offset in 1..7 {
        let d = friday + Duration::days(offset);
        let adjusted = adjust_to_most_recent_friday(d);
        assert_eq!(adjusted.weekday(), Weekday::Fri);
        assert!(adjusted <= d);
        assert!(d - adjusted <= Duration::days(6));
        assert_eq!(adjusted, friday);
    }
}

#[test]
fn next_weekday_allows_same_day() {
    let monday = date(2025, 9, 8);
    assert_eq!(next_weekday_on_or_after(monday, Weekday::Mon), Some(monday));
    assert_eq!(next_weekday_on_or_after(monday, Weekday::Wed), Some(date(2025, 9, 10)));
    assert_eq!(next_weekday_on_or_after(monday, Weekday::Sun), Some(date(2025, 9, 14)));
}

#[test]
fn weekday_search_stops_at_the_end_of_the_calendar() {
    let last = NaiveDate::MAX;
    assert_eq!(next_weekday_on_or_after(last, last.weekday()), Some(last));
    assert_eq!(next_weekday_on_or_after(last, last.weekday().succ()), None);

    let fridays: Vec<_> = get_fridays_between(last - Duration::days(3), last).collect();
    assert!(fridays.len() <= 1);
    assert!(fridays.iter().all(|d| d.weekday() == Weekday::Fri));

    let due = compute_due_date(last, &[last.weekday().succ(), last.weekday()]);
    assert_eq!(due, Some(last));
    assert_eq!(compute_due_date(last, &[last.weekday().succ()]), None);
}

#[test]
fn parses_command_line_anchors() {
    assert_eq!(parse_anchor("09-05-2025").unwrap(), date(2025, 9, 5));
    assert_eq!(parse_anchor("2025-09-05").unwrap(), date(2025, 9, 5));
    assert!(parse_anchor("09/05/2025").is_err());
    assert!(parse_anchor("next friday").is_err());
}

#[test]
fn parses_weekday_names() {
    assert_eq!(parse_weekday("Wednesday").unwrap(), Weekday::Wed);
    assert_eq!(parse_weekday("sun").unwrap(), Weekday::Sun);
    assert!(parse_weekday("Someday").is_err());
}
