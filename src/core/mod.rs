pub mod calendar;
pub mod month;
pub mod orientation;
pub mod transition;
pub mod types;
pub mod window;

pub use calendar::{CalendarWeek, WeekHeader, month_weeks, weekday_label};
pub use month::{MAX_YEAR, MIN_YEAR, MonthId, validate_month_format};
pub use orientation::Orientation;
pub use transition::{TransitionPhase, TranslationDirective};
pub use types::{Axis, Dimensions};
pub use window::VisibleMonthWindow;
