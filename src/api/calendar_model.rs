use crate::core::{
    Dimensions, MonthId, Orientation, TransitionPhase, TranslationDirective, VisibleMonthWindow,
};

/// Navigation state owned by one engine instance.
///
/// Mutated only by the engine's request/commit/measure operations.
pub(super) struct CalendarModel {
    pub(super) orientation: Orientation,
    pub(super) number_of_months: u32,
    pub(super) window: VisibleMonthWindow,
    pub(super) phase: TransitionPhase,
    pub(super) scrollable_month_multiple: u32,
    pub(super) dimensions: Dimensions,
    pub(super) translation: TranslationDirective,
}

impl CalendarModel {
    pub(super) fn new(
        orientation: Orientation,
        number_of_months: u32,
        window: VisibleMonthWindow,
    ) -> Self {
        Self {
            orientation,
            number_of_months,
            window,
            phase: TransitionPhase::None,
            scrollable_month_multiple: 1,
            dimensions: Dimensions::unmeasured(),
            translation: TranslationDirective::identity(),
        }
    }

    #[must_use]
    pub(super) fn expected_window_len(&self) -> usize {
        let multiple = if self.orientation.is_vertical_scrollable() {
            self.scrollable_month_multiple
        } else {
            1
        };
        self.number_of_months as usize * multiple as usize
    }

    /// Months currently shown: the window plus the incoming month mid-transition.
    pub(super) fn displayed_months(&self) -> Vec<MonthId> {
        let mut months: Vec<MonthId> = self.window.iter().collect();
        match self.window.incoming(self.phase.month_step()) {
            Some(incoming) if self.phase == TransitionPhase::AdvancingToPrev => {
                months.insert(0, incoming);
            }
            Some(incoming) => months.push(incoming),
            None => {}
        }
        months
    }
}
