use super::{
    calendar_model::CalendarModel, engine_runtime::EngineRuntime,
    picker_presentation::PickerPresentation,
};

/// Internal engine state used by the public facade (`CalendarEngine`).
pub(super) struct EngineCore {
    pub(super) model: CalendarModel,
    pub(super) presentation: PickerPresentation,
    pub(super) runtime: EngineRuntime,
}
