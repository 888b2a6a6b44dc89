use crate::error::PickerResult;
use crate::measure::{ComputedBox, LayoutAnchor, LayoutProbe};
use crate::render::{RenderFrame, Renderer};

/// No-op renderer for tests and headless engine usage.
///
/// It validates every frame but lays nothing out, so every measurement
/// resolves as unavailable.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_month_count: usize,
    pub last_visible_count: usize,
    pub last_animating: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PickerResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_month_count = frame.grid.months.len();
        self.last_visible_count = frame.grid.visible_months().count();
        self.last_animating = frame.is_animating();
        Ok(())
    }
}

impl LayoutProbe for NullRenderer {
    fn layout_box(&self, _anchor: LayoutAnchor) -> Option<ComputedBox> {
        None
    }
}
