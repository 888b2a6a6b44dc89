use tracing::{debug, trace, warn};

use crate::core::{TransitionPhase, TranslationDirective};
use crate::error::PickerResult;
use crate::navigation::{NavDirection, NavigationFrame, NavigationIntent};
use crate::render::Renderer;

use super::{CalendarEngine, EngineLifecycle, PickerEvent};

/// Why a navigation request was dropped. Logged, never surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestRejection {
    AlreadyTransitioning,
    PrevInScrollableLayout,
    NotScrollableLayout,
    AffordanceHidden,
    RangeExhausted,
    Unmounted,
}

impl<R: Renderer> CalendarEngine<R> {
    /// Starts a forward transition.
    ///
    /// In vertical-scrollable layouts this reveals more months instead.
    /// Returns `false` when the request was ignored.
    pub fn request_next(&mut self) -> PickerResult<bool> {
        if self.is_unmounted() {
            return Ok(reject(RequestRejection::Unmounted, "next"));
        }
        if self.core.model.orientation.is_vertical_scrollable() {
            return self.request_more_months();
        }
        self.start_transition(TransitionPhase::AdvancingToNext)
    }

    /// Starts a backward transition. Never accepted in vertical-scrollable layouts.
    pub fn request_prev(&mut self) -> PickerResult<bool> {
        if self.is_unmounted() {
            return Ok(reject(RequestRejection::Unmounted, "prev"));
        }
        if self.core.model.orientation.is_vertical_scrollable() {
            return Ok(reject(RequestRejection::PrevInScrollableLayout, "prev"));
        }
        self.start_transition(TransitionPhase::AdvancingToPrev)
    }

    /// Grows the scrollable month multiple by one and reveals the new months.
    pub fn request_more_months(&mut self) -> PickerResult<bool> {
        if self.is_unmounted() {
            return Ok(reject(RequestRejection::Unmounted, "more-months"));
        }
        if !self.core.model.orientation.is_vertical_scrollable() {
            return Ok(reject(RequestRejection::NotScrollableLayout, "more-months"));
        }

        let Some(multiple) = self.core.model.scrollable_month_multiple.checked_add(1) else {
            return Ok(reject(RequestRejection::RangeExhausted, "more-months"));
        };
        let len = self.core.model.number_of_months as usize * multiple as usize;
        let Ok(window) = self.core.model.window.resized(len) else {
            return Ok(reject(RequestRejection::RangeExhausted, "more-months"));
        };

        self.core.model.scrollable_month_multiple = multiple;
        self.core.model.window = window;
        debug!(
            multiple,
            window_len = len,
            last_month = %self.core.model.window.last(),
            "revealed more months"
        );
        self.emit_plugin_event(PickerEvent::MoreMonthsRequested { multiple });
        self.render_and_measure()?;
        Ok(true)
    }

    /// Frame describing the navigation affordances for the current orientation.
    #[must_use]
    pub fn navigation_frame(&self) -> NavigationFrame {
        self.core.presentation.navigation.frame()
    }

    /// Handles activation of the affordance on `direction`.
    pub fn activate_navigation(&mut self, direction: NavDirection) -> PickerResult<bool> {
        match self.core.presentation.navigation.intent_for(direction) {
            Some(intent) => self.dispatch_navigation_intent(intent),
            None => Ok(reject(RequestRejection::AffordanceHidden, "activate")),
        }
    }

    pub fn dispatch_navigation_intent(&mut self, intent: NavigationIntent) -> PickerResult<bool> {
        match intent {
            NavigationIntent::PrevMonth => self.request_prev(),
            NavigationIntent::NextMonth => self.request_next(),
            NavigationIntent::LoadMoreMonths => self.request_more_months(),
        }
    }

    fn start_transition(&mut self, phase: TransitionPhase) -> PickerResult<bool> {
        let request = match phase {
            TransitionPhase::AdvancingToPrev => "prev",
            _ => "next",
        };
        if self.core.model.phase.is_animating() {
            return Ok(reject(RequestRejection::AlreadyTransitioning, request));
        }
        let Some(incoming) = self.core.model.window.incoming(phase.month_step()) else {
            return Ok(reject(RequestRejection::RangeExhausted, request));
        };

        // Measured against the tree as rendered before the phase flips.
        let extent = self.measure_month_extent();
        if phase == TransitionPhase::AdvancingToPrev {
            self.core.model.translation = TranslationDirective::pre_translated(extent);
            trace!(extent, "pre-translating leading month before prepend");
            if let Err(err) = self.render() {
                // Stay idle and untranslated; the request never started.
                self.core.model.translation = TranslationDirective::identity();
                warn!(extent, error = %err, "pre-translation render failed");
                return Err(err);
            }
        }

        self.core.model.phase = phase;
        self.core.model.translation = self.core.model.translation.animating(phase, extent);
        debug!(?phase, incoming = %incoming, extent, "month transition started");

        self.notify_month_click(phase, incoming);
        self.render_and_measure()?;
        Ok(true)
    }

    pub(super) fn is_unmounted(&self) -> bool {
        self.core.runtime.lifecycle == EngineLifecycle::Unmounted
    }
}

fn reject(reason: RequestRejection, request: &'static str) -> bool {
    debug!(?reason, request, "navigation request ignored");
    false
}
