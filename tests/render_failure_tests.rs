mod support;

use approx::assert_relative_eq;
use day_picker::api::{CalendarEngine, CalendarEngineConfig, EngineLifecycle};
use day_picker::core::{Orientation, TransitionPhase};
use day_picker::error::PickerError;

use support::{FailingRenderer, MONTH_OUTER_WIDTH, month};

fn engine(orientation: Orientation, fail_on: &[usize]) -> CalendarEngine<FailingRenderer> {
    let config = CalendarEngineConfig::new(orientation)
        .with_number_of_months(2)
        .with_initial_visible_month(month(2024, 3));
    CalendarEngine::new(FailingRenderer::failing_on(fail_on), config).expect("engine init")
}

#[test]
fn failed_pre_translation_render_leaves_engine_idle_and_untranslated() {
    // Attempt 1 mounts, attempt 2 is the pre-translated idle frame.
    let mut engine = engine(Orientation::Horizontal, &[2]);
    engine.mount().expect("mount");

    let err = engine.request_prev().expect_err("pre-translation render fails");
    assert!(matches!(err, PickerError::Render(_)));
    assert_eq!(engine.transition_phase(), TransitionPhase::None);
    assert!(engine.translation().is_identity());
    assert_eq!(engine.visible_months(), &[month(2024, 3), month(2024, 4)]);

    assert!(engine.request_next().expect("next"));
    let translation = engine.translation();
    assert_relative_eq!(translation.grid_offset_px, -MONTH_OUTER_WIDTH);
    assert_relative_eq!(translation.leading_offset_px, 0.0);
}

#[test]
fn transition_commits_after_failed_animating_render() {
    let mut engine = engine(Orientation::Horizontal, &[2]);
    engine.mount().expect("mount");

    assert!(engine.request_next().is_err());
    assert_eq!(engine.transition_phase(), TransitionPhase::AdvancingToNext);
    assert!(!engine.request_next().expect("second request ignored"));

    assert!(engine.on_transition_end().expect("commit"));
    assert_eq!(engine.transition_phase(), TransitionPhase::None);
    assert!(engine.translation().is_identity());
    assert_eq!(engine.visible_months(), &[month(2024, 4), month(2024, 5)]);
}

#[test]
fn failed_commit_render_still_settles_window() {
    let mut engine = engine(Orientation::Vertical, &[3]);
    engine.mount().expect("mount");
    assert!(engine.request_next().expect("next"));

    assert!(engine.commit_transition().is_err());
    assert_eq!(engine.transition_phase(), TransitionPhase::None);
    assert!(engine.translation().is_identity());
    assert_eq!(engine.visible_months(), &[month(2024, 4), month(2024, 5)]);
    assert!(!engine.commit_transition().expect("nothing left to commit"));

    let rendered_before = engine.render_count();
    engine.render().expect("renderer recovered");
    assert_eq!(engine.render_count(), rendered_before + 1);
}

#[test]
fn failed_mount_can_be_retried() {
    let mut engine = engine(Orientation::Horizontal, &[1]);
    assert!(engine.mount().is_err());
    assert_eq!(engine.render_count(), 0);
    assert!(!engine.dimensions().is_measured());

    engine.mount().expect("second mount");
    assert_eq!(engine.lifecycle(), EngineLifecycle::Mounted);
    assert_eq!(engine.render_count(), 1);
    assert_relative_eq!(
        engine.dimensions().width.expect("measured width"),
        MONTH_OUTER_WIDTH * 2.0
    );
}

#[test]
fn failed_reveal_render_keeps_grown_window() {
    let mut engine = engine(Orientation::VerticalScrollable, &[2]);
    engine.mount().expect("mount");

    assert!(engine.request_more_months().is_err());
    assert_eq!(engine.scrollable_month_multiple(), 2);
    assert_eq!(engine.visible_window().len(), engine.expected_window_len());
    assert_eq!(engine.transition_phase(), TransitionPhase::None);
    assert_eq!(engine.render_count(), 1);

    assert!(engine.request_more_months().expect("reveal"));
    assert_eq!(engine.visible_window().len(), 6);
}
