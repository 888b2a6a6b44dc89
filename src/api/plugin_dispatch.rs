use tracing::trace;

use crate::core::{MonthId, TransitionPhase};
use crate::extensions::PickerContext;
use crate::render::Renderer;

use super::{CalendarEngine, PickerEvent};

impl<R: Renderer> CalendarEngine<R> {
    pub(super) fn plugin_context(&self) -> PickerContext {
        let model = &self.core.model;
        PickerContext {
            orientation: model.orientation,
            phase: model.phase,
            first_visible_month: model.window.first(),
            last_visible_month: model.window.last(),
            window_len: model.window.len(),
            scrollable_month_multiple: model.scrollable_month_multiple,
            dimensions: model.dimensions,
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PickerEvent) {
        if self.core.runtime.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.core.runtime.plugins {
            plugin.on_event(event, context);
        }
    }

    /// Fires the host callback for an accepted transition request.
    ///
    /// The callback's outcome is not observed; legality checks belong to it.
    pub(super) fn notify_month_click(&mut self, phase: TransitionPhase, incoming: MonthId) {
        let (callback, event) = match phase {
            TransitionPhase::AdvancingToNext => (
                self.core.runtime.on_next_month_click.as_mut(),
                PickerEvent::NextMonthRequested { month: incoming },
            ),
            TransitionPhase::AdvancingToPrev => (
                self.core.runtime.on_prev_month_click.as_mut(),
                PickerEvent::PrevMonthRequested { month: incoming },
            ),
            TransitionPhase::None => return,
        };
        match callback {
            Some(callback) => callback(incoming),
            None => trace!(?phase, "no month click callback registered"),
        }
        self.emit_plugin_event(event);
    }
}
