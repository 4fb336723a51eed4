// Property-based tests for the date grid and the change fold

#[path = "../fixtures/mod.rs"]
mod fixtures;

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_gantt::models::change::{apply_changes_to_event, apply_changes_to_events, EventChange};
use rust_gantt::models::event::Event;
use rust_gantt::models::grid::{column_index, days_between};
use rust_gantt::ui_egui::resize::{ChangeIdGenerator, ResizeController};

struct FixedId;

impl ChangeIdGenerator for FixedId {
    fn next_id(&mut self) -> String {
        "fixed".to_string()
    }
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    // 2000-01-01 plus up to ~50 years
    (0i64..18_000).prop_map(|offset| fixtures::dates::ymd(2000, 1, 1) + Duration::days(offset))
}

fn arb_event() -> impl Strategy<Value = Event> {
    (arb_date(), 0i64..400).prop_map(|(start, len)| {
        Event::new("e", "Event", start, start + Duration::days(len)).unwrap()
    })
}

fn arb_change(event_id: &'static str) -> impl Strategy<Value = EventChange> {
    prop_oneof![
        (-60i64..60).prop_map(move |days| EventChange::shift_by_days("s", event_id, days)),
        arb_date().prop_map(move |d| EventChange::change_end_date("e", event_id, d, d)),
        arb_date().prop_map(move |d| EventChange::change_start_date("t", event_id, d, d)),
    ]
}

proptest! {
    #[test]
    fn days_between_is_complete_and_ascending(start in arb_date(), len in 0i64..500) {
        let end = start + Duration::days(len);
        let days = days_between(start, end).unwrap();

        prop_assert_eq!(days.len() as i64, len + 1);
        prop_assert_eq!(days[0], start);
        prop_assert_eq!(*days.last().unwrap(), end);
        prop_assert!(days.windows(2).all(|w| w[1] - w[0] == Duration::days(1)));
    }

    #[test]
    fn reversed_range_always_fails(start in arb_date(), back in 1i64..500) {
        prop_assert!(days_between(start, start - Duration::days(back)).is_err());
    }

    #[test]
    fn column_index_finds_inside_and_misses_outside(
        start in arb_date(),
        len in 0i64..200,
        probe in -300i64..500,
    ) {
        let days = days_between(start, start + Duration::days(len)).unwrap();
        let target = start + Duration::days(probe);
        match column_index(&days, &target) {
            Some(i) => {
                prop_assert!((0..=len).contains(&probe));
                prop_assert_eq!(days[i], target);
            }
            None => prop_assert!(probe < 0 || probe > len),
        }
    }

    #[test]
    fn fold_of_empty_list_is_identity(event in arb_event()) {
        prop_assert_eq!(apply_changes_to_event(&event, &[] as &[EventChange]), event);
    }

    #[test]
    fn start_date_change_never_moves_start(
        event in arb_event(),
        new_start in arb_date(),
    ) {
        let change = EventChange::change_start_date("c", "e", event.start, new_start);
        let result = apply_changes_to_event(&event, &[change]);
        prop_assert_eq!(result.start, event.start);
    }

    #[test]
    fn fold_is_deterministic_and_keeps_title(
        event in arb_event(),
        changes in proptest::collection::vec(arb_change("e"), 0..12),
    ) {
        let first = apply_changes_to_event(&event, &changes);
        let second = apply_changes_to_event(&event, &changes);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.title, event.title);
        prop_assert_eq!(first.id, event.id);
    }

    #[test]
    fn changes_for_other_events_are_ignored(
        event in arb_event(),
        changes in proptest::collection::vec(arb_change("other"), 0..12),
    ) {
        let displayed = apply_changes_to_events(std::slice::from_ref(&event), &changes);
        prop_assert_eq!(&displayed[0], &event);
    }

    #[test]
    fn drag_result_depends_only_on_net_delta(
        moves in proptest::collection::vec(-40i32..40, 1..20),
    ) {
        // Keep the running width above the clamp so only the net delta matters
        let event = fixtures::events::first_event();
        let mut controller = ResizeController::new(100.0);
        controller.measure(1000.0);
        controller.pointer_down(0.0);
        let mut x = 0.0f32;
        for step in &moves {
            x += *step as f32;
            controller.pointer_move(x);
        }
        let expected_width = 1000.0 + x;
        prop_assert_eq!(controller.width(), Some(expected_width));

        let change = controller.pointer_up(&event, &mut FixedId);
        let moved = moves.iter().any(|s| *s != 0);
        prop_assert_eq!(change.is_some(), moved);
        if let Some(change) = change {
            let days = (11.0 * f64::from(expected_width) / 1000.0).round() as i64;
            let expected = EventChange::change_end_date(
                "fixed",
                "1",
                event.end,
                event.start + Duration::days(days),
            );
            prop_assert_eq!(change, expected);
        }
    }
}
