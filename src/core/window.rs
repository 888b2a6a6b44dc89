use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{PickerError, PickerResult};

use super::MonthId;

/// Contiguous, strictly increasing run of months eligible for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWindow", into = "RawWindow")]
pub struct VisibleMonthWindow {
    months: SmallVec<[MonthId; 4]>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawWindow {
    months: SmallVec<[MonthId; 4]>,
}

impl TryFrom<RawWindow> for VisibleMonthWindow {
    type Error = PickerError;

    fn try_from(raw: RawWindow) -> PickerResult<Self> {
        let window = Self { months: raw.months };
        if window.months.is_empty() {
            return Err(PickerError::InvalidData(
                "visible month window must hold at least one month".to_owned(),
            ));
        }
        if !window.is_contiguous() {
            return Err(PickerError::InvalidData(format!(
                "visible month window {}..{} has gaps or is out of order",
                window.first(),
                window.last()
            )));
        }
        Ok(window)
    }
}

impl From<VisibleMonthWindow> for RawWindow {
    fn from(window: VisibleMonthWindow) -> Self {
        Self {
            months: window.months,
        }
    }
}

impl VisibleMonthWindow {
    /// Builds `len` consecutive months starting at `first`.
    pub fn new(first: MonthId, len: usize) -> PickerResult<Self> {
        if len == 0 {
            return Err(PickerError::InvalidConfig(
                "visible month window must hold at least one month".to_owned(),
            ));
        }
        let mut months = SmallVec::with_capacity(len);
        let mut cursor = first;
        months.push(cursor);
        for _ in 1..len {
            cursor = cursor.checked_next().ok_or_else(|| {
                PickerError::InvalidConfig(format!(
                    "window of {len} months starting at {first} exceeds the supported range"
                ))
            })?;
            months.push(cursor);
        }
        Ok(Self { months })
    }

    #[must_use]
    pub fn first(&self) -> MonthId {
        self.months.first().copied().unwrap_or(MonthId::EARLIEST)
    }

    #[must_use]
    pub fn last(&self) -> MonthId {
        self.months.last().copied().unwrap_or(MonthId::EARLIEST)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Always `false`; windows are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    #[must_use]
    pub fn months(&self) -> &[MonthId] {
        &self.months
    }

    pub fn iter(&self) -> impl Iterator<Item = MonthId> + '_ {
        self.months.iter().copied()
    }

    #[must_use]
    pub fn contains(&self, month: MonthId) -> bool {
        self.first() <= month && month <= self.last()
    }

    /// Month that would enter the window when advancing by `step` (±1).
    #[must_use]
    pub fn incoming(&self, step: i64) -> Option<MonthId> {
        match step.signum() {
            1 => self.last().checked_offset(step),
            -1 => self.first().checked_offset(step),
            _ => None,
        }
    }

    /// Window of the same length moved by `step` months.
    ///
    /// Returns `None` when the shifted window would leave the supported range.
    #[must_use]
    pub fn shifted(&self, step: i64) -> Option<Self> {
        let first = self.first().checked_offset(step)?;
        Self::new(first, self.len()).ok()
    }

    /// Same first month, new length. Used by incremental reveal.
    pub fn resized(&self, len: usize) -> PickerResult<Self> {
        Self::new(self.first(), len)
    }

    /// Checks contiguity and ordering.
    #[must_use]
    pub fn is_contiguous(&self) -> bool {
        self.months
            .windows(2)
            .all(|pair| pair[0].checked_next() == Some(pair[1]))
    }
}
