use tracing::{debug, trace, warn};

use crate::core::{TransitionPhase, TranslationDirective};
use crate::error::PickerResult;
use crate::render::Renderer;

use super::{CalendarEngine, PickerEvent};

impl<R: Renderer> CalendarEngine<R> {
    /// Finalizes the in-flight transition.
    ///
    /// Shifts the window one month in the transition direction, clears the
    /// phase and translation, renders the static frame, and re-measures.
    /// Returns `false` (and changes nothing) when no transition is in flight.
    pub fn commit_transition(&mut self) -> PickerResult<bool> {
        if self.is_unmounted() {
            trace!("commit ignored after unmount");
            return Ok(false);
        }
        let phase = self.core.model.phase;
        if !phase.is_animating() {
            trace!("commit ignored while idle");
            return Ok(false);
        }

        match self.core.model.window.shifted(phase.month_step()) {
            Some(window) => self.core.model.window = window,
            // Unreachable in practice: requests check the incoming month first.
            None => warn!(?phase, "transition target out of range; keeping window"),
        }
        self.core.model.phase = TransitionPhase::None;
        self.core.model.translation = TranslationDirective::identity();
        let replayed_resize = std::mem::take(&mut self.core.runtime.deferred_remeasure);

        debug!(
            ?phase,
            first_month = %self.core.model.window.first(),
            last_month = %self.core.model.window.last(),
            replayed_resize,
            "month transition committed"
        );
        self.emit_plugin_event(PickerEvent::TransitionCommitted {
            phase,
            first_visible_month: self.core.model.window.first(),
        });
        self.render_and_measure()?;
        Ok(true)
    }

    /// Host signal that the transition animation finished.
    pub fn on_transition_end(&mut self) -> PickerResult<bool> {
        self.commit_transition()
    }
}
