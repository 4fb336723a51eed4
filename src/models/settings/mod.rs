// Settings module
// User-tunable chart behavior, persisted as TOML

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Narrowest a bar may be dragged, in pixels
pub const DEFAULT_MIN_BAR_WIDTH: f32 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    /// Weekday whose cells carry a date label
    pub label_weekday: Weekday,
    pub min_bar_width: f32,
    /// Pixel width of one day column in the chart view
    pub column_width: f32,
    pub row_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            label_weekday: Weekday::Mon,
            min_bar_width: DEFAULT_MIN_BAR_WIDTH,
            column_width: 28.0,
            row_height: 28.0,
        }
    }
}

impl Settings {
    pub fn is_dark(&self) -> bool {
        self.theme.eq_ignore_ascii_case("dark")
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        if !(self.min_bar_width > 0.0) {
            return Err("Minimum bar width must be positive".to_string());
        }
        if !(self.column_width > 0.0) {
            return Err("Column width must be positive".to_string());
        }
        if !(self.row_height > 0.0) {
            return Err("Row height must be positive".to_string());
        }
        Ok(())
    }
}
