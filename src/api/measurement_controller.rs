use tracing::{debug, trace};

use crate::core::{Axis, Dimensions, MonthId, Orientation};
use crate::measure::{LayoutAnchor, calculate_dimension};
use crate::render::Renderer;

use super::{CalendarEngine, PickerEvent};

impl<R: Renderer> CalendarEngine<R> {
    /// Re-measures the rendered grid without touching window or phase.
    ///
    /// Mid-transition the measurement is deferred to the commit so a
    /// half-applied window is never observed. Returns `true` when measured now.
    pub fn remeasure(&mut self) -> bool {
        if self.is_unmounted() {
            return false;
        }
        if self.core.model.phase.is_animating() {
            self.core.runtime.deferred_remeasure = true;
            debug!("remeasure deferred until transition commit");
            return false;
        }
        self.refresh_dimensions();
        true
    }

    /// Host resize signal.
    pub fn on_resize(&mut self) -> bool {
        self.remeasure()
    }

    /// Measures and stores dimensions; emits an event when they changed.
    pub(super) fn refresh_dimensions(&mut self) -> bool {
        let measured = self.measure_dimensions();
        if measured == self.core.model.dimensions {
            return false;
        }
        self.core.model.dimensions = measured;
        trace!(width = ?measured.width, height = ?measured.height, "dimensions updated");
        self.emit_plugin_event(PickerEvent::DimensionsChanged {
            dimensions: measured,
        });
        true
    }

    fn measure_dimensions(&self) -> Dimensions {
        let model = &self.core.model;
        let months = model.displayed_months();
        let Some(&first) = months.first() else {
            return Dimensions::unmeasured();
        };

        let width = self.month_size(first, Axis::Width).map(|width| {
            // Horizontal grids lay the window side by side; the incoming month
            // scrolls in from outside and does not widen the container.
            match model.orientation {
                Orientation::Horizontal => width * f64::from(model.number_of_months),
                Orientation::Vertical | Orientation::VerticalScrollable => width,
            }
        });

        let height = match model.orientation {
            Orientation::Horizontal => self.max_month_height(&months),
            Orientation::Vertical => self.stacked_month_height(&months),
            Orientation::VerticalScrollable => self
                .renderer
                .layout_box(LayoutAnchor::Grid)
                .map(|grid| calculate_dimension(Some(&grid), Axis::Height, true, false))
                .or_else(|| self.stacked_month_height(&months)),
        };

        if width.is_none() && height.is_none() {
            debug!(anchor = %first, "measurement unavailable; grid not laid out");
        }
        Dimensions::new(width, height)
    }

    /// Border-box size of one rendered month on `axis`, margins included.
    fn month_size(&self, month: MonthId, axis: Axis) -> Option<f64> {
        self.renderer
            .layout_box(LayoutAnchor::Month(month))
            .map(|layout| calculate_dimension(Some(&layout), axis, true, true))
    }

    fn max_month_height(&self, months: &[MonthId]) -> Option<f64> {
        months
            .iter()
            .filter_map(|month| self.month_size(*month, Axis::Height))
            .reduce(f64::max)
    }

    /// Sum of month heights, or `None` if any month is missing from the tree.
    fn stacked_month_height(&self, months: &[MonthId]) -> Option<f64> {
        months
            .iter()
            .map(|month| self.month_size(*month, Axis::Height))
            .sum()
    }

    /// Extent of one month along the orientation axis, `0` when unavailable.
    pub(super) fn measure_month_extent(&self) -> f64 {
        let axis = self.core.model.orientation.measurement_axis();
        let first = self.core.model.window.first();
        let layout = self.renderer.layout_box(LayoutAnchor::Month(first));
        if layout.is_none() {
            trace!(anchor = %first, "month extent unavailable; using 0");
        }
        calculate_dimension(layout.as_ref(), axis, true, true)
    }
}
