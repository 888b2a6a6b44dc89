use serde::{Deserialize, Serialize};

use crate::core::Axis;

/// Per-side lengths in pixels (padding, border, or margin).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Edges {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Vertical/horizontal shorthand, like `padding: 15px 10px`.
    #[must_use]
    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Sum of the two sides lying on `axis`.
    #[must_use]
    pub fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::Width => self.left + self.right,
            Axis::Height => self.top + self.bottom,
        }
    }
}

/// Computed geometry of one rendered node.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ComputedBox {
    pub content_width: f64,
    pub content_height: f64,
    pub padding: Edges,
    pub border: Edges,
    pub margin: Edges,
}

impl ComputedBox {
    #[must_use]
    pub const fn with_content(content_width: f64, content_height: f64) -> Self {
        Self {
            content_width,
            content_height,
            padding: Edges::uniform(0.0),
            border: Edges::uniform(0.0),
            margin: Edges::uniform(0.0),
        }
    }

    #[must_use]
    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn border(mut self, border: Edges) -> Self {
        self.border = border;
        self
    }

    #[must_use]
    pub fn margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub const fn content(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Width => self.content_width,
            Axis::Height => self.content_height,
        }
    }
}

/// Measures `node` along `axis`.
///
/// Content-box by default. `border_box` adds padding and border on the axis;
/// `include_margin` adds margin on the axis in either mode. An absent node
/// measures `0`.
#[must_use]
pub fn calculate_dimension(
    node: Option<&ComputedBox>,
    axis: Axis,
    border_box: bool,
    include_margin: bool,
) -> f64 {
    let Some(node) = node else {
        return 0.0;
    };

    let mut size = node.content(axis);
    if border_box {
        size += node.padding.along(axis) + node.border.along(axis);
    }
    if include_margin {
        size += node.margin.along(axis);
    }
    size
}
