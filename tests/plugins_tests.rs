use std::cell::RefCell;
use std::rc::Rc;

use day_picker::PickerError;
use day_picker::api::{CalendarEngine, CalendarEngineConfig};
use day_picker::core::{MonthId, Orientation, TransitionPhase};
use day_picker::extensions::{PickerContext, PickerEvent, PickerPlugin};
use day_picker::render::NullRenderer;

#[derive(Clone)]
struct RecordingPlugin {
    id: String,
    events: Rc<RefCell<Vec<(PickerEvent, PickerContext)>>>,
}

impl RecordingPlugin {
    fn new(
        id: impl Into<String>,
        events: Rc<RefCell<Vec<(PickerEvent, PickerContext)>>>,
    ) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl PickerPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: PickerEvent, context: PickerContext) {
        self.events.borrow_mut().push((event, context));
    }
}

fn month(year: i32, month: u32) -> MonthId {
    MonthId::new(year, month).expect("valid month")
}

fn event_kind(event: &PickerEvent) -> &'static str {
    match event {
        PickerEvent::NextMonthRequested { .. } => "next",
        PickerEvent::PrevMonthRequested { .. } => "prev",
        PickerEvent::MoreMonthsRequested { .. } => "more",
        PickerEvent::TransitionCommitted { .. } => "commit",
        PickerEvent::DimensionsChanged { .. } => "dimensions",
        PickerEvent::Rendered { .. } => "rendered",
    }
}

#[test]
fn plugin_receives_deterministic_event_sequence() {
    let config =
        CalendarEngineConfig::new(Orientation::Horizontal).with_initial_visible_month(month(2024, 3));
    let mut engine = CalendarEngine::new(NullRenderer::default(), config).expect("engine init");

    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    engine.mount().expect("mount");
    engine.request_next().expect("next");
    engine.request_next().expect("ignored next");
    engine.commit_transition().expect("commit");
    engine.request_prev().expect("prev");

    let events = events.borrow();
    let kinds: Vec<&'static str> = events.iter().map(|(event, _)| event_kind(event)).collect();
    assert_eq!(
        kinds,
        vec![
            "rendered", "next", "rendered", "commit", "rendered", "rendered", "prev", "rendered",
        ]
    );

    assert_eq!(
        events[1].0,
        PickerEvent::NextMonthRequested {
            month: month(2024, 5)
        }
    );
    assert_eq!(events[1].1.phase, TransitionPhase::AdvancingToNext);
    assert_eq!(
        events[3].0,
        PickerEvent::TransitionCommitted {
            phase: TransitionPhase::AdvancingToNext,
            first_visible_month: month(2024, 4),
        }
    );
    assert_eq!(events[3].1.phase, TransitionPhase::None);
    assert_eq!(events[3].1.last_visible_month, month(2024, 5));
    assert_eq!(
        events[6].0,
        PickerEvent::PrevMonthRequested {
            month: month(2024, 3)
        }
    );
    assert_eq!(events[7].0, PickerEvent::Rendered { animating: true });
}

#[test]
fn scrollable_plugin_sees_more_months_without_navigation_events() {
    let config = CalendarEngineConfig::new(Orientation::VerticalScrollable)
        .with_number_of_months(1)
        .with_initial_visible_month(month(2024, 3));
    let mut engine = CalendarEngine::new(NullRenderer::default(), config).expect("engine init");
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    engine.request_next().expect("load more");
    let events = events.borrow();
    assert_eq!(events[0].0, PickerEvent::MoreMonthsRequested { multiple: 2 });
    assert_eq!(events[0].1.window_len, 2);
    assert_eq!(events[0].1.scrollable_month_multiple, 2);
    assert!(
        events
            .iter()
            .all(|(event, _)| !matches!(event, PickerEvent::NextMonthRequested { .. }))
    );
}

#[test]
fn plugin_registry_enforces_unique_non_empty_ids() {
    let mut engine = CalendarEngine::new(
        NullRenderer::default(),
        CalendarEngineConfig::new(Orientation::Horizontal)
            .with_initial_visible_month(month(2024, 3)),
    )
    .expect("engine init");
    let events = Rc::new(RefCell::new(Vec::new()));

    engine
        .register_plugin(Box::new(RecordingPlugin::new("a", events.clone())))
        .expect("register a");
    let duplicate = engine.register_plugin(Box::new(RecordingPlugin::new("a", events.clone())));
    assert!(matches!(duplicate, Err(PickerError::InvalidData(_))));
    let empty = engine.register_plugin(Box::new(RecordingPlugin::new("", events)));
    assert!(matches!(empty, Err(PickerError::InvalidData(_))));

    assert!(engine.has_plugin("a"));
    assert_eq!(engine.plugin_count(), 1);
    assert!(engine.unregister_plugin("a"));
    assert!(!engine.unregister_plugin("a"));
    assert_eq!(engine.plugin_count(), 0);
}
