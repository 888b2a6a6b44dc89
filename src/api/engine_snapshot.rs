use serde::{Deserialize, Serialize};

use crate::core::{Dimensions, MonthId, Orientation, TransitionPhase, TranslationDirective};

use super::EngineLifecycle;

/// Serializable state snapshot used by regression tests and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub orientation: Orientation,
    pub lifecycle: EngineLifecycle,
    pub number_of_months: u32,
    pub visible_months: Vec<MonthId>,
    pub phase: TransitionPhase,
    pub scrollable_month_multiple: u32,
    pub dimensions: Dimensions,
    pub translation: TranslationDirective,
    pub deferred_remeasure: bool,
    pub render_count: u64,
}
