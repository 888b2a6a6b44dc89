mod frame;
mod month_grid;
mod null_renderer;

pub use frame::{RenderFrame, TransitionContainer};
pub use month_grid::{MonthGridFrame, MonthGridOptions, MonthSlot, SlotRole};
pub use null_renderer::NullRenderer;

use crate::error::PickerResult;
use crate::measure::LayoutProbe;

/// Contract implemented by any rendering backend.
///
/// The backend owns the rendered tree: `render` is the only writer, and the
/// `LayoutProbe` half is the only reader the engine uses to measure it.
pub trait Renderer: LayoutProbe {
    fn render(&mut self, frame: &RenderFrame) -> PickerResult<()>;
}
