//! day-picker-rs: calendar navigation and layout engine for date pickers.
//!
//! The crate owns which months are visible, how navigation moves that window,
//! how animated transitions between months are sequenced, and how the
//! rendered grid is measured. Day-level semantics and drawing stay with the
//! host behind the `Renderer` and `LayoutProbe` traits.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod measure;
pub mod navigation;
pub mod render;
pub mod telemetry;

pub use api::{CalendarEngine, CalendarEngineConfig};
pub use error::{PickerError, PickerResult};
