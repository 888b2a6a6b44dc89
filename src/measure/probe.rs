use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::MonthId;

use super::ComputedBox;

/// Stable handle to a measurable node in the rendered month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutAnchor {
    /// Outer container wrapping every rendered month.
    Grid,
    /// Block of one rendered month, buffer months included.
    Month(MonthId),
}

/// Read access to the geometry of the last rendered tree.
///
/// Implementations must report live layout; the engine does not cache boxes
/// between calls.
pub trait LayoutProbe {
    /// Returns `None` when the anchor is not part of the rendered tree.
    fn layout_box(&self, anchor: LayoutAnchor) -> Option<ComputedBox>;
}

/// Probe backed by an explicit anchor → box table.
///
/// Useful for hosts that lay out months themselves and push the results in,
/// and for tests. Insertion order is kept for stable debug output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticLayoutProbe {
    boxes: IndexMap<LayoutAnchor, ComputedBox>,
}

impl StaticLayoutProbe {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, anchor: LayoutAnchor, layout: ComputedBox) -> Option<ComputedBox> {
        self.boxes.insert(anchor, layout)
    }

    pub fn remove(&mut self, anchor: LayoutAnchor) -> Option<ComputedBox> {
        self.boxes.shift_remove(&anchor)
    }

    pub fn clear(&mut self) {
        self.boxes.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn anchors(&self) -> impl Iterator<Item = LayoutAnchor> + '_ {
        self.boxes.keys().copied()
    }
}

impl LayoutProbe for StaticLayoutProbe {
    fn layout_box(&self, anchor: LayoutAnchor) -> Option<ComputedBox> {
        self.boxes.get(&anchor).copied()
    }
}
