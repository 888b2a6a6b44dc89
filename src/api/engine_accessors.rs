use crate::core::{
    Dimensions, MonthId, Orientation, TransitionPhase, TranslationDirective, VisibleMonthWindow,
};
use crate::render::Renderer;

use super::{CalendarEngine, MonthClickCallback};

impl<R: Renderer> CalendarEngine<R> {
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.core.model.orientation
    }

    #[must_use]
    pub fn number_of_months(&self) -> u32 {
        self.core.model.number_of_months
    }

    #[must_use]
    pub fn visible_window(&self) -> &VisibleMonthWindow {
        &self.core.model.window
    }

    #[must_use]
    pub fn visible_months(&self) -> &[MonthId] {
        self.core.model.window.months()
    }

    #[must_use]
    pub fn first_visible_month(&self) -> MonthId {
        self.core.model.window.first()
    }

    #[must_use]
    pub fn transition_phase(&self) -> TransitionPhase {
        self.core.model.phase
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.core.model.phase.is_animating()
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.core.model.dimensions
    }

    #[must_use]
    pub fn scrollable_month_multiple(&self) -> u32 {
        self.core.model.scrollable_month_multiple
    }

    /// Translation the next frame will carry.
    #[must_use]
    pub fn translation(&self) -> TranslationDirective {
        self.core.model.translation
    }

    /// Window length implied by month count and scrollable multiple.
    #[must_use]
    pub fn expected_window_len(&self) -> usize {
        self.core.model.expected_window_len()
    }

    #[must_use]
    pub fn has_deferred_remeasure(&self) -> bool {
        self.core.runtime.deferred_remeasure
    }

    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.core.runtime.render_count
    }

    /// Sets the notification fired with the incoming month of each accepted
    /// backward request. Ignored after unmount.
    pub fn set_on_prev_month_click(&mut self, callback: impl FnMut(MonthId) + 'static) {
        if !self.is_unmounted() {
            self.core.runtime.on_prev_month_click = Some(Box::new(callback) as MonthClickCallback);
        }
    }

    /// Sets the notification fired with the incoming month of each accepted
    /// forward request. Ignored after unmount.
    pub fn set_on_next_month_click(&mut self, callback: impl FnMut(MonthId) + 'static) {
        if !self.is_unmounted() {
            self.core.runtime.on_next_month_click = Some(Box::new(callback) as MonthClickCallback);
        }
    }

    pub fn clear_month_click_callbacks(&mut self) {
        self.core.runtime.on_prev_month_click = None;
        self.core.runtime.on_next_month_click = None;
    }
}
