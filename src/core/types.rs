use serde::{Deserialize, Serialize};

/// Layout axis a measurement or translation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Width,
    Height,
}

/// Last-measured size of the rendered month-grid container.
///
/// Either side stays `None` until a measurement succeeds, which is the normal
/// state for headless hosts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl Dimensions {
    #[must_use]
    pub const fn unmeasured() -> Self {
        Self {
            width: None,
            height: None,
        }
    }

    #[must_use]
    pub const fn new(width: Option<f64>, height: Option<f64>) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn get(self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }

    #[must_use]
    pub const fn is_measured(self) -> bool {
        self.width.is_some() || self.height.is_some()
    }
}
