use crate::render::Renderer;

use super::engine_core::EngineCore;

/// Main orchestration facade consumed by host applications.
///
/// `CalendarEngine` owns the visible-month window, the transition phase, and
/// the measured dimensions. It turns navigation intents into transitions,
/// hands frames to the renderer, and measures the result through the
/// renderer's layout probe.
pub struct CalendarEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> CalendarEngine<R> {
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
