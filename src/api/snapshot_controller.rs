use crate::error::{PickerError, PickerResult};
use crate::render::Renderer;

use super::{CalendarEngine, EngineSnapshot};

impl<R: Renderer> CalendarEngine<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let model = &self.core.model;
        EngineSnapshot {
            orientation: model.orientation,
            lifecycle: self.core.runtime.lifecycle,
            number_of_months: model.number_of_months,
            visible_months: model.window.months().to_vec(),
            phase: model.phase,
            scrollable_month_multiple: model.scrollable_month_multiple,
            dimensions: model.dimensions,
            translation: model.translation,
            deferred_remeasure: self.core.runtime.deferred_remeasure,
            render_count: self.core.runtime.render_count,
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> PickerResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| PickerError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
