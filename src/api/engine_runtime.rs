use serde::{Deserialize, Serialize};

use crate::core::MonthId;
use crate::extensions::PickerPlugin;

/// Host notification fired with the incoming month of an accepted request.
pub type MonthClickCallback = Box<dyn FnMut(MonthId)>;

/// Host lifecycle of an engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EngineLifecycle {
    #[default]
    Created,
    Mounted,
    /// Terminal. Every operation becomes a no-op.
    Unmounted,
}

/// Host-facing runtime wiring kept apart from navigation state.
#[derive(Default)]
pub(super) struct EngineRuntime {
    pub(super) lifecycle: EngineLifecycle,
    pub(super) on_prev_month_click: Option<MonthClickCallback>,
    pub(super) on_next_month_click: Option<MonthClickCallback>,
    pub(super) plugins: Vec<Box<dyn PickerPlugin>>,
    /// Resize observed mid-transition, replayed by the commit.
    pub(super) deferred_remeasure: bool,
    pub(super) render_count: u64,
}

impl EngineRuntime {
    /// Drops every host reference and pending flag.
    pub(super) fn discard(&mut self) {
        self.lifecycle = EngineLifecycle::Unmounted;
        self.on_prev_month_click = None;
        self.on_next_month_click = None;
        self.plugins.clear();
        self.deferred_remeasure = false;
    }
}
