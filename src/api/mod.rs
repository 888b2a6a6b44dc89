mod calendar_model;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_runtime;
mod engine_snapshot;
mod json_contract;
mod lifecycle_controller;
mod measurement_controller;
mod navigation_controller;
mod picker_presentation;
mod plugin_dispatch;
mod plugin_registry;
mod render_frame_builder;
mod snapshot_controller;
mod transition_controller;
mod validation;

pub use engine::CalendarEngine;
pub use engine_config::CalendarEngineConfig;
pub use engine_runtime::{EngineLifecycle, MonthClickCallback};
pub use engine_snapshot::EngineSnapshot;
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};

pub use crate::extensions::{PickerContext, PickerEvent, PickerPlugin};
