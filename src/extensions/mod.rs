mod plugins;

pub use plugins::{PickerContext, PickerEvent, PickerPlugin};
