use serde::{Deserialize, Serialize};

use crate::core::{Orientation, WeekHeader};
use crate::error::{PickerError, PickerResult};
use crate::navigation::NavigationFrame;

use super::MonthGridFrame;

/// Sizing of the element wrapping the animated month strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionContainer {
    pub orientation: Orientation,
    /// Fixed height; `None` lets the host size the container from content.
    pub height_px: Option<f64>,
}

/// Backend-agnostic scene for one picker draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub orientation: Orientation,
    pub container: TransitionContainer,
    pub week_headers: Vec<WeekHeader>,
    pub navigation: NavigationFrame,
    pub grid: MonthGridFrame,
}

impl RenderFrame {
    pub fn validate(&self) -> PickerResult<()> {
        if let Some(height) = self.container.height_px {
            if !height.is_finite() || height < 0.0 {
                return Err(PickerError::InvalidData(
                    "transition container height must be finite and >= 0".to_owned(),
                ));
            }
        }
        if self.week_headers.is_empty() {
            return Err(PickerError::InvalidData(
                "render frame must carry at least one week header".to_owned(),
            ));
        }
        self.grid.validate()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.grid.is_animating
    }
}
