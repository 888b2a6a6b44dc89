use crate::core::validate_month_format;
use crate::error::{PickerError, PickerResult};

use super::CalendarEngineConfig;

/// Upper bound for `number_of_months`; keeps frames and buffers small.
pub(super) const MAX_NUMBER_OF_MONTHS: u32 = 24;

pub(super) fn validate_engine_config(config: &CalendarEngineConfig) -> PickerResult<()> {
    if config.number_of_months == 0 || config.number_of_months > MAX_NUMBER_OF_MONTHS {
        return Err(PickerError::InvalidConfig(format!(
            "number_of_months must be in 1..={MAX_NUMBER_OF_MONTHS}, got {}",
            config.number_of_months
        )));
    }
    if let Some(height) = config.vertical_height {
        if !height.is_finite() || height <= 0.0 {
            return Err(PickerError::InvalidConfig(
                "vertical_height must be finite and > 0".to_owned(),
            ));
        }
    }
    for (side, icon) in [("nav_prev", &config.nav_prev), ("nav_next", &config.nav_next)] {
        if icon.as_deref().is_some_and(|label| label.trim().is_empty()) {
            return Err(PickerError::InvalidConfig(format!(
                "{side} must not be blank when set"
            )));
        }
    }
    validate_month_format(&config.month_format)
}

pub(super) fn validate_plugin_id(plugin_id: &str) -> PickerResult<()> {
    if plugin_id.trim().is_empty() {
        return Err(PickerError::InvalidData(
            "plugin id must not be empty".to_owned(),
        ));
    }
    Ok(())
}
