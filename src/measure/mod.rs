//! Box-model measurement of rendered month-grid nodes.

mod box_model;
mod probe;

pub use box_model::{ComputedBox, Edges, calculate_dimension};
pub use probe::{LayoutAnchor, LayoutProbe, StaticLayoutProbe};

pub use crate::core::Axis;
