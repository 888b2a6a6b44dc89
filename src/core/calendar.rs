//! Month layout helpers backed by `chrono`.
//!
//! These stand in for the date-arithmetic collaborator: given a month they
//! produce the week rows a month grid lays out. Day-level semantics
//! (selection, blocking, highlighting) stay with the host.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::MonthId;

pub const DAYS_PER_WEEK: usize = 7;

/// One row of a month grid. `None` marks an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarWeek {
    pub days: [Option<NaiveDate>; DAYS_PER_WEEK],
}

impl CalendarWeek {
    /// Dates in this row that belong to `month`.
    pub fn days_in(&self, month: MonthId) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days
            .iter()
            .flatten()
            .copied()
            .filter(move |day| month.contains(*day))
    }
}

/// Ordered weekday header for one month block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekHeader {
    pub weekdays: [Weekday; DAYS_PER_WEEK],
}

impl WeekHeader {
    #[must_use]
    pub fn starting_on(first_day_of_week: Weekday) -> Self {
        let mut weekdays = [first_day_of_week; DAYS_PER_WEEK];
        let mut day = first_day_of_week;
        for slot in weekdays.iter_mut().skip(1) {
            day = day.succ();
            *slot = day;
        }
        Self { weekdays }
    }

    /// Two-letter labels in display order.
    #[must_use]
    pub fn labels(&self) -> [&'static str; DAYS_PER_WEEK] {
        self.weekdays.map(weekday_label)
    }
}

#[must_use]
pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

fn days_between(from: Weekday, to: Weekday) -> u64 {
    let from = u64::from(from.num_days_from_monday());
    let to = u64::from(to.num_days_from_monday());
    (7 + to - from) % 7
}

/// Week rows covering `month`, starting on `first_day_of_week`.
///
/// Cells before the first and after the last day hold the neighbouring
/// months' dates when `enable_outside_days` is set, `None` otherwise.
#[must_use]
pub fn month_weeks(
    month: MonthId,
    first_day_of_week: Weekday,
    enable_outside_days: bool,
) -> Vec<CalendarWeek> {
    let first = month.first_day();
    let lead = days_between(first_day_of_week, first.weekday());
    let cells = lead + u64::from(month.days_in_month());
    let rows = cells.div_ceil(DAYS_PER_WEEK as u64);

    let Some(grid_start) = first.checked_sub_days(Days::new(lead)) else {
        return Vec::new();
    };

    let mut weeks = Vec::with_capacity(rows as usize);
    let mut cursor = Some(grid_start);
    for _ in 0..rows {
        let mut days = [None; DAYS_PER_WEEK];
        for cell in &mut days {
            let Some(date) = cursor else { break };
            if enable_outside_days || month.contains(date) {
                *cell = Some(date);
            }
            cursor = date.succ_opt();
        }
        weeks.push(CalendarWeek { days });
    }
    weeks
}
