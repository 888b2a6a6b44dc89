use serde::{Deserialize, Serialize};

use crate::core::{Dimensions, MonthId, Orientation, TransitionPhase};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickerContext {
    pub orientation: Orientation,
    pub phase: TransitionPhase,
    pub first_visible_month: MonthId,
    pub last_visible_month: MonthId,
    pub window_len: usize,
    pub scrollable_month_multiple: u32,
    pub dimensions: Dimensions,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PickerEvent {
    /// A forward transition was accepted; `month` is the incoming month.
    NextMonthRequested { month: MonthId },
    /// A backward transition was accepted; `month` is the incoming month.
    PrevMonthRequested { month: MonthId },
    MoreMonthsRequested { multiple: u32 },
    TransitionCommitted {
        phase: TransitionPhase,
        first_visible_month: MonthId,
    },
    DimensionsChanged { dimensions: Dimensions },
    Rendered { animating: bool },
}

/// Extension hook interface for host-side observers.
///
/// Plugins see events and engine context but cannot mutate engine state.
pub trait PickerPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PickerEvent, context: PickerContext);
}
