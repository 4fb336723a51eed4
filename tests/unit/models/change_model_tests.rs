// Order sensitivity and filtering of the change fold

#[path = "../../fixtures/mod.rs"]
mod fixtures;

use fixtures::dates::ymd;
use fixtures::events::{demo_events, first_event};
use pretty_assertions::{assert_eq, assert_ne};
use rust_gantt::models::change::{apply_changes_to_event, EventChange};
use rust_gantt::models::change_log::ChangeLog;
use test_case::test_case;

#[test]
fn test_shift_then_overwrite_end() {
    let changes = vec![
        EventChange::shift_by_days("a", "1", 2),
        EventChange::change_end_date("b", "1", ymd(2024, 1, 17), ymd(2024, 1, 20)),
    ];
    let result = apply_changes_to_event(&first_event(), &changes);
    assert_eq!((result.start, result.end), (ymd(2024, 1, 6), ymd(2024, 1, 20)));
}

#[test]
fn test_overwrite_end_then_shift() {
    let changes = vec![
        EventChange::change_end_date("b", "1", ymd(2024, 1, 15), ymd(2024, 1, 20)),
        EventChange::shift_by_days("a", "1", 2),
    ];
    let result = apply_changes_to_event(&first_event(), &changes);
    assert_eq!((result.start, result.end), (ymd(2024, 1, 6), ymd(2024, 1, 22)));
}

#[test]
fn test_reordering_changes_the_result() {
    let shift = EventChange::shift_by_days("a", "1", 2);
    let end = EventChange::change_end_date("b", "1", ymd(2024, 1, 15), ymd(2024, 1, 20));

    let forward = apply_changes_to_event(&first_event(), &[shift.clone(), end.clone()]);
    let backward = apply_changes_to_event(&first_event(), &[end, shift]);
    assert_ne!(forward, backward);
}

#[test_case(0, ymd(2024, 1, 4), ymd(2024, 1, 15) ; "zero shift")]
#[test_case(7, ymd(2024, 1, 11), ymd(2024, 1, 22) ; "one week forward")]
#[test_case(-10, ymd(2023, 12, 25), ymd(2024, 1, 5) ; "across year boundary")]
fn test_shift_by_days(days: i64, start: chrono::NaiveDate, end: chrono::NaiveDate) {
    let result = apply_changes_to_event(&first_event(), &[EventChange::shift_by_days("a", "1", days)]);
    assert_eq!((result.start, result.end), (start, end));
}

#[test]
fn test_log_only_affects_matching_event() {
    let base = demo_events();
    let mut log = ChangeLog::new();
    log.push(EventChange::change_end_date("a", "2", ymd(2024, 1, 31), ymd(2024, 2, 2)));
    log.push(EventChange::shift_by_days("b", "2", -1));
    log.push(EventChange::change_start_date("c", "1", ymd(2024, 1, 4), ymd(2024, 1, 1)));

    let displayed = log.displayed_events(&base);
    assert_eq!(displayed[0], base[0]);
    assert_eq!((displayed[1].start, displayed[1].end), (ymd(2024, 1, 11), ymd(2024, 2, 1)));
    assert_eq!(log.len(), 3);
}

#[test]
fn test_removing_middle_change_replays_the_rest() {
    let base = demo_events();
    let mut log = ChangeLog::new();
    log.push(EventChange::shift_by_days("a", "1", 1));
    log.push(EventChange::change_end_date("b", "1", ymd(2024, 1, 16), ymd(2024, 1, 25)));
    log.push(EventChange::shift_by_days("c", "1", 1));

    assert_eq!(log.displayed_event(&base[0]).end, ymd(2024, 1, 26));

    log.remove("b");
    let ids: Vec<&str> = log.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
    let event = log.displayed_event(&base[0]);
    assert_eq!((event.start, event.end), (ymd(2024, 1, 6), ymd(2024, 1, 17)));
}

#[test]
fn test_leap_day_end_date() {
    let change = EventChange::change_end_date("a", "1", ymd(2024, 1, 15), fixtures::dates::leap_day_2024());
    assert_eq!(apply_changes_to_event(&first_event(), &[change]).end, ymd(2024, 2, 29));
}
