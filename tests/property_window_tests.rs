mod support;

use day_picker::api::{CalendarEngine, CalendarEngineConfig};
use day_picker::core::{MonthId, Orientation, TransitionPhase};
use day_picker::render::{NullRenderer, Renderer};
use proptest::prelude::*;

use support::LayoutRenderer;

#[derive(Debug, Clone, Copy)]
enum Op {
    Next,
    Prev,
    More,
    Commit,
    Resize,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Next),
        Just(Op::Prev),
        Just(Op::More),
        Just(Op::Commit),
        Just(Op::Resize),
    ]
}

fn orientation_strategy() -> impl Strategy<Value = Orientation> {
    prop_oneof![
        Just(Orientation::Horizontal),
        Just(Orientation::Vertical),
        Just(Orientation::VerticalScrollable),
    ]
}

fn apply<R: Renderer>(engine: &mut CalendarEngine<R>, op: Op) {
    match op {
        Op::Next => {
            engine.request_next().expect("next");
        }
        Op::Prev => {
            engine.request_prev().expect("prev");
        }
        Op::More => {
            engine.request_more_months().expect("more");
        }
        Op::Commit => {
            engine.commit_transition().expect("commit");
        }
        Op::Resize => {
            engine.on_resize();
        }
    }
}

fn assert_window_invariants<R: Renderer>(engine: &CalendarEngine<R>) {
    let window = engine.visible_window();
    assert_eq!(window.len(), engine.expected_window_len());
    assert!(window.is_contiguous());
    assert_eq!(
        window.first().months_until(window.last()),
        window.len() as i64 - 1
    );
}

proptest! {
    #[test]
    fn window_stays_contiguous_and_sized(
        orientation in orientation_strategy(),
        number_of_months in 1_u32..=4,
        year in 1990_i32..=2040,
        month in 1_u32..=12,
        ops in prop::collection::vec(op_strategy(), 0..48),
    ) {
        let start = MonthId::new(year, month).expect("valid start");
        let config = CalendarEngineConfig::new(orientation)
            .with_number_of_months(number_of_months)
            .with_initial_visible_month(start);
        let mut engine = CalendarEngine::new(LayoutRenderer::default(), config).expect("engine init");
        engine.mount().expect("mount");

        let mut expected_first = start;
        let mut last_multiple = engine.scrollable_month_multiple();
        for op in ops {
            let phase_before = engine.transition_phase();
            apply(&mut engine, op);
            assert_window_invariants(&engine);

            if phase_before.is_animating() {
                // A second request never replaces the in-flight transition.
                if !matches!(op, Op::Commit) {
                    prop_assert_eq!(engine.transition_phase(), phase_before);
                }
            }
            if matches!(op, Op::Commit) && phase_before.is_animating() {
                let step = phase_before.month_step();
                expected_first = expected_first.checked_offset(step).expect("in range");
            }
            prop_assert_eq!(engine.first_visible_month(), expected_first);

            let multiple = engine.scrollable_month_multiple();
            prop_assert!(multiple >= last_multiple);
            last_multiple = multiple;

            if orientation.is_vertical_scrollable() {
                prop_assert_eq!(engine.transition_phase(), TransitionPhase::None);
            }
        }
    }

    #[test]
    fn transitions_round_trip_to_start(
        number_of_months in 1_u32..=3,
        steps in 1_usize..12,
    ) {
        let start = MonthId::new(2020, 6).expect("valid start");
        let config = CalendarEngineConfig::new(Orientation::Horizontal)
            .with_number_of_months(number_of_months)
            .with_initial_visible_month(start);
        let mut engine = CalendarEngine::new(NullRenderer::default(), config).expect("engine init");
        engine.mount().expect("mount");

        for _ in 0..steps {
            prop_assert!(engine.request_next().expect("next"));
            prop_assert!(engine.commit_transition().expect("commit"));
        }
        prop_assert_eq!(start.months_until(engine.first_visible_month()), steps as i64);
        for _ in 0..steps {
            prop_assert!(engine.request_prev().expect("prev"));
            prop_assert!(engine.commit_transition().expect("commit"));
        }
        prop_assert_eq!(engine.first_visible_month(), start);
        prop_assert!(engine.translation().is_identity());
    }
}
