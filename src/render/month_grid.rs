use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::core::{
    Axis, CalendarWeek, MonthId, Orientation, TransitionPhase, TranslationDirective,
    VisibleMonthWindow, month_weeks,
};
use crate::error::{PickerError, PickerResult};
use crate::measure::LayoutAnchor;

/// Where a rendered month sits relative to the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotRole {
    /// Hidden month before the window; incoming on backward transitions.
    LeadingBuffer,
    Window,
    /// Hidden month after the window; incoming on forward transitions.
    TrailingBuffer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSlot {
    pub month: MonthId,
    pub role: SlotRole,
    pub visible: bool,
    pub caption: String,
    pub weeks: Vec<CalendarWeek>,
    /// Offset of this block on top of the grid translation.
    pub offset_px: f64,
}

impl MonthSlot {
    #[must_use]
    pub fn anchor(&self) -> LayoutAnchor {
        LayoutAnchor::Month(self.month)
    }
}

/// Month-level rendering options shared by every slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGridOptions {
    pub orientation: Orientation,
    pub first_day_of_week: Weekday,
    pub enable_outside_days: bool,
    pub month_format: String,
}

/// One render of the month strip.
///
/// The frame is a pure function of window, phase, and translation. While a
/// transition is in flight it carries the outgoing and incoming months
/// together so the renderer can interpolate between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthGridFrame {
    pub orientation: Orientation,
    pub phase: TransitionPhase,
    pub is_animating: bool,
    pub translation_axis: Axis,
    pub translation: TranslationDirective,
    pub months: Vec<MonthSlot>,
}

impl MonthGridFrame {
    #[must_use]
    pub fn build(
        window: &VisibleMonthWindow,
        phase: TransitionPhase,
        translation: TranslationDirective,
        options: &MonthGridOptions,
    ) -> Self {
        let slot = |month: MonthId, role: SlotRole, visible: bool, offset_px: f64| MonthSlot {
            month,
            role,
            visible,
            caption: month.format(&options.month_format),
            weeks: month_weeks(month, options.first_day_of_week, options.enable_outside_days),
            offset_px,
        };

        let buffered = options.orientation.supports_animated_transitions();
        let mut months = Vec::with_capacity(window.len() + 2);
        if buffered {
            if let Some(leading) = window.first().checked_prev() {
                months.push(slot(
                    leading,
                    SlotRole::LeadingBuffer,
                    phase == TransitionPhase::AdvancingToPrev,
                    translation.leading_offset_px,
                ));
            }
        }
        months.extend(
            window
                .iter()
                .map(|month| slot(month, SlotRole::Window, true, 0.0)),
        );
        if buffered {
            if let Some(trailing) = window.last().checked_next() {
                months.push(slot(
                    trailing,
                    SlotRole::TrailingBuffer,
                    phase == TransitionPhase::AdvancingToNext,
                    0.0,
                ));
            }
        }

        Self {
            orientation: options.orientation,
            phase,
            is_animating: phase.is_animating(),
            translation_axis: options.orientation.measurement_axis(),
            translation,
            months,
        }
    }

    pub fn visible_months(&self) -> impl Iterator<Item = MonthId> + '_ {
        self.months
            .iter()
            .filter(|slot| slot.visible)
            .map(|slot| slot.month)
    }

    #[must_use]
    pub fn slot(&self, month: MonthId) -> Option<&MonthSlot> {
        self.months.iter().find(|slot| slot.month == month)
    }

    pub fn validate(&self) -> PickerResult<()> {
        if !self.months.iter().any(|slot| slot.role == SlotRole::Window) {
            return Err(PickerError::InvalidData(
                "month grid frame must contain at least one window month".to_owned(),
            ));
        }
        if !self.translation.grid_offset_px.is_finite()
            || !self.translation.leading_offset_px.is_finite()
        {
            return Err(PickerError::InvalidData(
                "month grid translation must be finite".to_owned(),
            ));
        }
        if self
            .months
            .windows(2)
            .any(|pair| pair[0].month.checked_next() != Some(pair[1].month))
        {
            return Err(PickerError::InvalidData(
                "month grid slots must be contiguous".to_owned(),
            ));
        }
        Ok(())
    }
}
