//! Theme module for the egui Gantt chart
//!
//! Colors for the day grid, event bars and change list.

use egui::Color32;

/// Colors used when painting the chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GanttTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Header cell background
    pub header_background: Color32,

    /// Header label color
    pub header_text: Color32,

    /// Event bar fill
    pub bar_background: Color32,

    /// Event bar outline
    pub bar_border: Color32,

    /// Event bar outline while it is being resized
    pub bar_border_active: Color32,

    /// Caption inside event bars
    pub bar_text: Color32,

    /// Right-edge resize handle
    pub handle: Color32,

    /// Change list row outline
    pub change_border: Color32,
}

impl GanttTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            header_background: Color32::from_rgb(17, 24, 39),
            header_text: Color32::WHITE,
            bar_background: Color32::from_rgb(243, 244, 246),
            bar_border: Color32::from_rgb(209, 213, 219),
            bar_border_active: Color32::from_rgb(37, 99, 235),
            bar_text: Color32::from_rgb(40, 40, 40),
            handle: Color32::from_rgb(229, 231, 235),
            change_border: Color32::from_rgb(220, 220, 220),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            header_background: Color32::from_rgb(55, 65, 81),
            header_text: Color32::from_rgb(240, 240, 240),
            bar_background: Color32::from_rgb(40, 40, 40),
            bar_border: Color32::from_rgb(75, 85, 99),
            bar_border_active: Color32::from_rgb(96, 165, 250),
            bar_text: Color32::from_rgb(240, 240, 240),
            handle: Color32::from_rgb(60, 60, 60),
            change_border: Color32::from_rgb(60, 60, 60),
        }
    }

    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("dark") {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Apply base visuals to the egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);
    }
}
