use crate::error::{PickerError, PickerResult};
use crate::extensions::PickerPlugin;
use crate::render::Renderer;

use super::{CalendarEngine, validation::validate_plugin_id};

impl<R: Renderer> CalendarEngine<R> {
    /// Registers a plugin with unique identifier.
    ///
    /// Registration after unmount is refused so no host hook outlives the engine.
    pub fn register_plugin(&mut self, plugin: Box<dyn PickerPlugin>) -> PickerResult<()> {
        let plugin_id = plugin.id().to_owned();
        validate_plugin_id(&plugin_id)?;
        if self.is_unmounted() {
            return Err(PickerError::InvalidData(format!(
                "cannot register plugin `{plugin_id}` on an unmounted engine"
            )));
        }
        if self.has_plugin(&plugin_id) {
            return Err(PickerError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        self.core.runtime.plugins.push(plugin);
        Ok(())
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        let before = self.core.runtime.plugins.len();
        self.core
            .runtime
            .plugins
            .retain(|plugin| plugin.id() != plugin_id);
        self.core.runtime.plugins.len() != before
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.core.runtime.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.core
            .runtime
            .plugins
            .iter()
            .any(|plugin| plugin.id() == plugin_id)
    }
}
