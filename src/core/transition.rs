use serde::{Deserialize, Serialize};

/// Direction of the month-advance animation currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionPhase {
    #[default]
    None,
    AdvancingToNext,
    AdvancingToPrev,
}

impl TransitionPhase {
    #[must_use]
    pub const fn is_animating(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Window shift applied when this phase commits.
    #[must_use]
    pub const fn month_step(self) -> i64 {
        match self {
            Self::None => 0,
            Self::AdvancingToNext => 1,
            Self::AdvancingToPrev => -1,
        }
    }
}

/// Translation the month grid applies at render time.
///
/// The engine never moves rendered nodes itself; it hands these offsets to the
/// renderer inside each frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TranslationDirective {
    /// Offset of the whole month strip along the orientation axis.
    pub grid_offset_px: f64,
    /// Extra offset of the leading buffer month, set before a backward
    /// transition so the prepended month starts out of view.
    pub leading_offset_px: f64,
}

impl TranslationDirective {
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            grid_offset_px: 0.0,
            leading_offset_px: 0.0,
        }
    }

    /// Pre-translation recorded before a backward transition starts.
    #[must_use]
    pub fn pre_translated(month_extent_px: f64) -> Self {
        Self {
            grid_offset_px: 0.0,
            leading_offset_px: -month_extent_px,
        }
    }

    /// Directive for the animating frame of `phase`, keeping any pre-translation.
    #[must_use]
    pub fn animating(self, phase: TransitionPhase, month_extent_px: f64) -> Self {
        let grid_offset_px = match phase {
            TransitionPhase::None => 0.0,
            TransitionPhase::AdvancingToNext => -month_extent_px,
            TransitionPhase::AdvancingToPrev => month_extent_px,
        };
        Self {
            grid_offset_px,
            leading_offset_px: self.leading_offset_px,
        }
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self.grid_offset_px == 0.0 && self.leading_offset_px == 0.0
    }
}
