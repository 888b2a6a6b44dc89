use tracing::debug;

use crate::core::{MonthId, VisibleMonthWindow};
use crate::navigation::NavigationControl;
use crate::render::{MonthGridOptions, Renderer};

use super::{
    CalendarEngine, CalendarEngineConfig, calendar_model::CalendarModel, engine_core::EngineCore,
    engine_runtime::EngineRuntime, picker_presentation::PickerPresentation,
    validation::validate_engine_config,
};
use crate::error::PickerResult;

impl<R: Renderer> CalendarEngine<R> {
    /// Creates an idle engine. Nothing is rendered until `mount`.
    pub fn new(renderer: R, config: CalendarEngineConfig) -> PickerResult<Self> {
        validate_engine_config(&config)?;

        let initial_month = match config.initial_visible_month {
            Some(month) => month,
            None => MonthId::current()?,
        };
        let window = VisibleMonthWindow::new(initial_month, config.number_of_months as usize)?;

        debug!(
            orientation = ?config.orientation,
            number_of_months = config.number_of_months,
            initial_month = %initial_month,
            "calendar engine initialized"
        );

        Ok(Self {
            renderer,
            core: EngineCore {
                model: CalendarModel::new(config.orientation, config.number_of_months, window),
                presentation: PickerPresentation {
                    grid_options: MonthGridOptions {
                        orientation: config.orientation,
                        first_day_of_week: config.first_day_of_week,
                        enable_outside_days: config.enable_outside_days,
                        month_format: config.month_format,
                    },
                    navigation: NavigationControl::new(config.orientation)
                        .with_custom_icons(config.nav_prev, config.nav_next),
                    vertical_height: config.vertical_height,
                },
                runtime: EngineRuntime::default(),
            },
        })
    }
}
