// Test fixtures - reusable test data
// Provides consistent test data across all test files
#![allow(dead_code)]

use chrono::NaiveDate;
use rust_gantt::models::event::Event;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// First day of the demo window (a Monday)
    pub fn window_start() -> NaiveDate {
        ymd(2023, 12, 25)
    }

    /// Last day of the demo window
    pub fn window_end() -> NaiveDate {
        ymd(2024, 2, 5)
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// 11-day event, Jan 4 to Jan 15
    pub fn first_event() -> Event {
        Event::new("1", "First event", dates::ymd(2024, 1, 4), dates::ymd(2024, 1, 15)).unwrap()
    }

    /// 19-day event, Jan 12 to Jan 31
    pub fn second_event() -> Event {
        Event::new("2", "Second event", dates::ymd(2024, 1, 12), dates::ymd(2024, 1, 31)).unwrap()
    }

    pub fn demo_events() -> Vec<Event> {
        vec![first_event(), second_event()]
    }
}
