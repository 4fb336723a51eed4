// Event Resize System
//
// Enables stretching an event bar by dragging its right edge.
// - Pointer moves resize the bar incrementally (the anchor follows the pointer)
// - Release converts the width ratio into a new end date and emits a change

use std::collections::HashMap;

use crate::models::change::EventChange;
use crate::models::event::Event;
use crate::models::settings::DEFAULT_MIN_BAR_WIDTH;
use crate::utils::date::add_days;

/// Source of identifiers for newly emitted change records
#[cfg_attr(test, mockall::automock)]
pub trait ChangeIdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidChangeIds;

impl ChangeIdGenerator for UuidChangeIds {
    fn next_id(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Pointer state for one bar
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    Idle,
    /// `anchor_x` is the pointer position after the last processed move
    Dragging { anchor_x: f32 },
}

/// Drag-to-resize state machine for a single rendered bar
#[derive(Clone, Debug)]
pub struct ResizeController {
    /// Width from the first non-zero layout measurement; never re-captured
    initial_width: Option<f32>,
    /// Displayed width, follows the pointer while dragging
    width: Option<f32>,
    min_width: f32,
    state: DragState,
    /// Whether any move in the current drag had a non-zero delta
    moved: bool,
}

impl Default for ResizeController {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_BAR_WIDTH)
    }
}

impl ResizeController {
    pub fn new(min_width: f32) -> Self {
        Self {
            initial_width: None,
            width: None,
            min_width,
            state: DragState::Idle,
            moved: false,
        }
    }

    /// Feed a layout measurement of the bar
    ///
    /// Only the first non-zero measurement is kept.
    pub fn measure(&mut self, measured_width: f32) {
        if self.initial_width.is_none() && measured_width > 0.0 {
            self.initial_width = Some(measured_width);
            self.width = Some(measured_width);
        }
    }

    pub fn initial_width(&self) -> Option<f32> {
        self.initial_width
    }

    /// Width to draw, `None` until measured
    pub fn width(&self) -> Option<f32> {
        self.width
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn pointer_down(&mut self, x: f32) {
        self.state = DragState::Dragging { anchor_x: x };
        self.moved = false;
    }

    /// Apply the delta since the last move and re-anchor at `x`
    pub fn pointer_move(&mut self, x: f32) {
        let DragState::Dragging { anchor_x } = self.state else {
            return;
        };

        let delta_x = x - anchor_x;
        if delta_x != 0.0 {
            self.moved = true;
        }
        if let Some(width) = self.width {
            self.width = Some((width + delta_x).max(self.min_width));
        }
        self.state = DragState::Dragging { anchor_x: x };
    }

    /// Finish the drag, returning the end-date change it implies
    ///
    /// `event` must be the event as displayed when the drag began. Returns
    /// `None` when idle, when the pointer never moved, or when the bar was
    /// never measured.
    pub fn pointer_up(
        &mut self,
        event: &Event,
        ids: &mut dyn ChangeIdGenerator,
    ) -> Option<EventChange> {
        if !self.is_dragging() {
            return None;
        }
        self.state = DragState::Idle;

        if !self.moved {
            return None;
        }

        let (initial_width, width) = match (self.initial_width, self.width) {
            (Some(initial), Some(current)) if initial > 0.0 => (initial, current),
            _ => {
                log::warn!(
                    "Skipping resize of event {}: bar width was never measured",
                    event.id
                );
                return None;
            }
        };

        let length_in_days = event.length_in_days();
        let new_length_in_days =
            (length_in_days as f64 * f64::from(width) / f64::from(initial_width)).round() as i64;
        let new_end = add_days(event.start, new_length_in_days)?;

        log::debug!(
            "Resized event {} from {} to {} days ({}px -> {}px)",
            event.id,
            length_in_days,
            new_length_in_days,
            initial_width,
            width
        );

        Some(EventChange::change_end_date(
            ids.next_id(),
            event.id.clone(),
            event.end,
            new_end,
        ))
    }
}

/// One resize controller per rendered bar, keyed by event id
#[derive(Debug)]
pub struct ResizeSet {
    controllers: HashMap<String, ResizeController>,
    min_width: f32,
}

impl Default for ResizeSet {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_BAR_WIDTH)
    }
}

impl ResizeSet {
    pub fn new(min_width: f32) -> Self {
        Self {
            controllers: HashMap::new(),
            min_width,
        }
    }

    pub fn controller_mut(&mut self, event_id: &str) -> &mut ResizeController {
        let min_width = self.min_width;
        self.controllers
            .entry(event_id.to_string())
            .or_insert_with(|| ResizeController::new(min_width))
    }

    pub fn get(&self, event_id: &str) -> Option<&ResizeController> {
        self.controllers.get(event_id)
    }

    /// Id of the bar currently being dragged, if any
    pub fn dragging_event(&self) -> Option<&str> {
        self.controllers
            .iter()
            .find(|(_, c)| c.is_dragging())
            .map(|(id, _)| id.as_str())
    }

    /// Drop all controllers so bars re-measure from a fresh layout
    pub fn reset(&mut self) {
        self.controllers.clear();
    }
}
