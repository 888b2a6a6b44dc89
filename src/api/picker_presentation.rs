use crate::navigation::NavigationControl;
use crate::render::MonthGridOptions;

/// Static presentation inputs resolved from config at construction.
pub(super) struct PickerPresentation {
    pub(super) grid_options: MonthGridOptions,
    pub(super) navigation: NavigationControl,
    pub(super) vertical_height: Option<f64>,
}
