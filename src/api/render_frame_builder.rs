use crate::core::{Orientation, WeekHeader};
use crate::error::PickerResult;
use crate::render::{MonthGridFrame, RenderFrame, Renderer, TransitionContainer};

use super::{CalendarEngine, PickerEvent};

impl<R: Renderer> CalendarEngine<R> {
    /// Builds the frame for the current window, phase, and translation.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let model = &self.core.model;
        let presentation = &self.core.presentation;
        let orientation = model.orientation;

        let header_count = match orientation {
            Orientation::Horizontal => model.number_of_months as usize,
            Orientation::Vertical | Orientation::VerticalScrollable => 1,
        };
        let header = WeekHeader::starting_on(presentation.grid_options.first_day_of_week);

        let height_px = match orientation {
            Orientation::Horizontal => model.dimensions.height,
            Orientation::Vertical => None,
            Orientation::VerticalScrollable => presentation.vertical_height,
        };

        RenderFrame {
            orientation,
            container: TransitionContainer {
                orientation,
                height_px,
            },
            week_headers: vec![header; header_count],
            navigation: presentation.navigation.frame(),
            grid: MonthGridFrame::build(
                &model.window,
                model.phase,
                model.translation,
                &presentation.grid_options,
            ),
        }
    }

    /// Renders the current frame. No-op after unmount.
    pub fn render(&mut self) -> PickerResult<()> {
        if self.is_unmounted() {
            return Ok(());
        }
        let frame = self.build_render_frame();
        self.renderer.render(&frame)?;
        self.core.runtime.render_count += 1;
        self.emit_plugin_event(PickerEvent::Rendered {
            animating: frame.is_animating(),
        });
        Ok(())
    }

    /// Render followed by a measurement of what was just rendered.
    pub(super) fn render_and_measure(&mut self) -> PickerResult<()> {
        self.render()?;
        self.refresh_dimensions();
        Ok(())
    }
}
