use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::core::{MonthId, Orientation};
use crate::error::{PickerError, PickerResult};

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can keep picker setup next to the rest of their UI
/// configuration. Callbacks are registered on the engine, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEngineConfig {
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default = "default_number_of_months")]
    pub number_of_months: u32,
    /// First visible month; `None` resolves to the current month at construction.
    #[serde(default)]
    pub initial_visible_month: Option<MonthId>,
    #[serde(default = "default_first_day_of_week")]
    pub first_day_of_week: Weekday,
    #[serde(default)]
    pub enable_outside_days: bool,
    /// chrono strftime pattern for month captions.
    #[serde(default = "default_month_format")]
    pub month_format: String,
    /// Fixed scroll-region height for vertical-scrollable layouts.
    #[serde(default)]
    pub vertical_height: Option<f64>,
    #[serde(default)]
    pub nav_prev: Option<String>,
    #[serde(default)]
    pub nav_next: Option<String>,
}

impl Default for CalendarEngineConfig {
    fn default() -> Self {
        Self::new(Orientation::default())
    }
}

impl CalendarEngineConfig {
    /// Creates a config with the default two-month window.
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            number_of_months: default_number_of_months(),
            initial_visible_month: None,
            first_day_of_week: default_first_day_of_week(),
            enable_outside_days: false,
            month_format: default_month_format(),
            vertical_height: None,
            nav_prev: None,
            nav_next: None,
        }
    }

    #[must_use]
    pub fn with_number_of_months(mut self, number_of_months: u32) -> Self {
        self.number_of_months = number_of_months;
        self
    }

    #[must_use]
    pub fn with_initial_visible_month(mut self, month: MonthId) -> Self {
        self.initial_visible_month = Some(month);
        self
    }

    #[must_use]
    pub fn with_first_day_of_week(mut self, weekday: Weekday) -> Self {
        self.first_day_of_week = weekday;
        self
    }

    #[must_use]
    pub fn with_outside_days(mut self, enabled: bool) -> Self {
        self.enable_outside_days = enabled;
        self
    }

    #[must_use]
    pub fn with_month_format(mut self, pattern: impl Into<String>) -> Self {
        self.month_format = pattern.into();
        self
    }

    /// Sets the scroll-region height used by vertical-scrollable layouts.
    #[must_use]
    pub fn with_vertical_height(mut self, height_px: f64) -> Self {
        self.vertical_height = Some(height_px);
        self
    }

    /// Replaces the built-in navigation icons. `None` keeps the default for that side.
    #[must_use]
    pub fn with_nav_icons(mut self, nav_prev: Option<String>, nav_next: Option<String>) -> Self {
        self.nav_prev = nav_prev;
        self.nav_next = nav_next;
        self
    }

    pub fn to_json_pretty(&self) -> PickerResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PickerError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> PickerResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PickerError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_number_of_months() -> u32 {
    2
}

fn default_first_day_of_week() -> Weekday {
    Weekday::Sun
}

fn default_month_format() -> String {
    "%B %Y".to_owned()
}
