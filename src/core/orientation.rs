use serde::{Deserialize, Serialize};

use super::Axis;

/// Layout of the month grid; fixed for the lifetime of one engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
    VerticalScrollable,
}

impl Orientation {
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }

    /// `true` for both vertical variants.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }

    #[must_use]
    pub const fn is_vertical_scrollable(self) -> bool {
        matches!(self, Self::VerticalScrollable)
    }

    /// Axis months are laid out along, and translated along while animating.
    #[must_use]
    pub const fn measurement_axis(self) -> Axis {
        match self {
            Self::Horizontal => Axis::Width,
            Self::Vertical | Self::VerticalScrollable => Axis::Height,
        }
    }

    /// Scrollable layouts reveal months incrementally instead of animating.
    #[must_use]
    pub const fn supports_animated_transitions(self) -> bool {
        !self.is_vertical_scrollable()
    }
}
