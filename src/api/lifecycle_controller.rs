use tracing::debug;

use crate::error::PickerResult;
use crate::render::Renderer;

use super::{CalendarEngine, EngineLifecycle};

impl<R: Renderer> CalendarEngine<R> {
    /// Host mount signal: first render followed by the first measurement.
    ///
    /// Mounting twice only re-renders; mounting after `unmount` does nothing.
    pub fn mount(&mut self) -> PickerResult<()> {
        match self.core.runtime.lifecycle {
            EngineLifecycle::Unmounted => return Ok(()),
            EngineLifecycle::Created | EngineLifecycle::Mounted => {}
        }
        self.core.runtime.lifecycle = EngineLifecycle::Mounted;
        self.render_and_measure()
    }

    /// Tears the engine down with its host.
    ///
    /// A pending transition is abandoned: callbacks and plugins are dropped so
    /// nothing calls back into the host afterwards.
    pub fn unmount(&mut self) {
        if self.is_unmounted() {
            return;
        }
        debug!(
            pending_phase = ?self.core.model.phase,
            plugins = self.core.runtime.plugins.len(),
            "calendar engine unmounted"
        );
        self.core.runtime.discard();
    }

    #[must_use]
    pub fn lifecycle(&self) -> EngineLifecycle {
        self.core.runtime.lifecycle
    }
}
