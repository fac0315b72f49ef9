//! End-to-end element scenarios: show/hide walkthroughs, batch aggregation,
//! baseline return, instant snapping, degraded actions, and rapid
//! retriggering.

use kinestate::action::{ActionData, ActionTarget, StateActionData, TweenedAction};
use kinestate::anim::{Ease, Timing, TimingOverride};
use kinestate::element::selectable::{self, SelectableState, SelectableTrigger};
use kinestate::element::switch::{self, SwitchState, SwitchTrigger};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn fade_data(hidden_alpha: f32) -> ActionData<SwitchState, f32> {
    ActionData::new()
        .state(SwitchState::Show, StateActionData::to_baseline())
        .state(SwitchState::Hide, StateActionData::to_value(hidden_alpha))
}

fn fast_timing() -> Timing {
    Timing {
        duration: 0.05,
        ..Timing::default()
    }
}

#[tokio::test(start_paused = true)]
async fn show_hide_walkthrough() {
    let alpha = Arc::new(Mutex::new(1.0f32));
    let hide_entries = Arc::new(AtomicUsize::new(0));
    let hits = Arc::clone(&hide_entries);

    let fade = TweenedAction::new(
        "fade",
        fade_data(0.0),
        ActionTarget::shared(Arc::clone(&alpha)),
    )
    .unwrap();

    let mut element = switch::switch()
        .timing(fast_timing())
        .action(fade)
        .on_state(SwitchState::Hide, move || {
            hits.fetch_add(1, Ordering::SeqCst);
        })
        .build()
        .unwrap();
    assert_eq!(element.current_state(), SwitchState::Show);

    // Show -> Hide: entry runs, listener fires once after the batch.
    element.fire(SwitchTrigger::OnHide).unwrap();
    assert_eq!(element.current_state(), SwitchState::Hide);
    element.when_execution_completes().await;
    assert_eq!(*alpha.lock().unwrap(), 0.0);
    assert_eq!(hide_entries.load(Ordering::SeqCst), 1);

    // Hide + OnHide is a reentry: state stays Hide, the listener fires again.
    element.fire(SwitchTrigger::OnHide).unwrap();
    assert_eq!(element.current_state(), SwitchState::Hide);
    element.when_execution_completes().await;
    assert_eq!(hide_entries.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn baseline_state_restores_the_starting_value() {
    let alpha = Arc::new(Mutex::new(0.8f32));
    let fade = TweenedAction::new(
        "fade",
        fade_data(0.1),
        ActionTarget::shared(Arc::clone(&alpha)),
    )
    .unwrap();

    let mut element = switch::switch().timing(fast_timing()).action(fade).build().unwrap();

    element.fire(SwitchTrigger::OnHide).unwrap();
    element.when_execution_completes().await;
    assert_eq!(*alpha.lock().unwrap(), 0.1);

    // Show uses the baseline, not any explicit target: back to 0.8.
    element.fire(SwitchTrigger::OnShow).unwrap();
    element.when_execution_completes().await;
    assert_eq!(*alpha.lock().unwrap(), 0.8);
}

#[tokio::test(start_paused = true)]
async fn batch_waits_for_the_slowest_action() {
    let scale = Arc::new(Mutex::new(1.0f32));
    let alpha = Arc::new(Mutex::new(1.0f32));
    let shift = Arc::new(Mutex::new([0.0f32, 0.0]));

    let with_duration = |seconds: f32| TimingOverride {
        use_custom_duration: true,
        duration: seconds,
        ..TimingOverride::default()
    };

    let scale_action = TweenedAction::new(
        "scale",
        ActionData::new()
            .state(SwitchState::Show, StateActionData::to_baseline())
            .state(
                SwitchState::Hide,
                StateActionData::to_value(0.0).with_timing(with_duration(0.1)),
            ),
        ActionTarget::shared(Arc::clone(&scale)),
    )
    .unwrap();
    let fade_action = TweenedAction::new(
        "fade",
        ActionData::new()
            .state(SwitchState::Show, StateActionData::to_baseline())
            .state(
                SwitchState::Hide,
                StateActionData::to_value(0.0).with_timing(with_duration(0.5)),
            ),
        ActionTarget::shared(Arc::clone(&alpha)),
    )
    .unwrap();
    let shift_action = TweenedAction::new(
        "shift",
        ActionData::new()
            .state(SwitchState::Show, StateActionData::to_baseline())
            .state(
                SwitchState::Hide,
                StateActionData::to_value([0.0, -40.0]).with_timing(with_duration(0.3)),
            ),
        ActionTarget::shared(Arc::clone(&shift)),
    )
    .unwrap();

    let mut element = switch::switch()
        .action(scale_action)
        .action(fade_action)
        .action(shift_action)
        .build()
        .unwrap();

    element.fire(SwitchTrigger::OnHide).unwrap();
    let start = tokio::time::Instant::now();
    element.when_execution_completes().await;

    // The composite resolves only once the 0.5s fade does.
    assert!(start.elapsed() >= Duration::from_millis(500));
    assert_eq!(*scale.lock().unwrap(), 0.0);
    assert_eq!(*alpha.lock().unwrap(), 0.0);
    assert_eq!(*shift.lock().unwrap(), [0.0, -40.0]);
}

#[tokio::test(start_paused = true)]
async fn timing_override_inherits_unset_dimensions() {
    let alpha = Arc::new(Mutex::new(1.0f32));
    let action = TweenedAction::new(
        "fade",
        ActionData::new()
            .state(SwitchState::Show, StateActionData::to_baseline())
            .state(
                SwitchState::Hide,
                StateActionData::to_value(0.0).with_timing(TimingOverride {
                    use_custom_duration: true,
                    duration: 2.0,
                    ..TimingOverride::default()
                }),
            ),
        ActionTarget::shared(Arc::clone(&alpha)),
    )
    .unwrap();

    // Element default supplies a 1s delay; the action overrides only the
    // duration.
    let mut element = switch::switch()
        .timing(Timing {
            delay: 1.0,
            duration: 0.1,
            ease: Ease::Linear,
        })
        .action(action)
        .build()
        .unwrap();

    element.fire(SwitchTrigger::OnHide).unwrap();

    // Still untouched while the inherited delay runs.
    tokio::time::sleep(Duration::from_millis(900)).await;
    assert_eq!(*alpha.lock().unwrap(), 1.0);

    let start = tokio::time::Instant::now();
    element.when_execution_completes().await;
    // Rest of the run is the custom 2s duration.
    assert!(start.elapsed() >= Duration::from_millis(2000));
    assert_eq!(*alpha.lock().unwrap(), 0.0);
}

#[tokio::test]
async fn fire_instant_snaps_and_is_idempotent() {
    let alpha = Arc::new(Mutex::new(1.0f32));
    let fade = TweenedAction::new(
        "fade",
        fade_data(0.0),
        ActionTarget::shared(Arc::clone(&alpha)),
    )
    .unwrap();

    let mut element = switch::switch().action(fade).build().unwrap();

    element.fire_instant(SwitchTrigger::OnHide).unwrap();
    assert_eq!(*alpha.lock().unwrap(), 0.0);
    assert!(element.execution_batch().is_resolved());

    // Re-entering Hide instantly lands on the same value.
    element.fire_instant(SwitchTrigger::OnHide).unwrap();
    assert_eq!(*alpha.lock().unwrap(), 0.0);
    element.when_execution_completes().await;
}

#[tokio::test(start_paused = true)]
async fn broken_action_does_not_hang_the_batch() {
    let alpha = Arc::new(Mutex::new(1.0f32));
    let healthy = TweenedAction::new(
        "fade",
        fade_data(0.0),
        ActionTarget::shared(Arc::clone(&alpha)),
    )
    .unwrap();
    // This target can never be read, so setup leaves the action disabled.
    let broken = TweenedAction::new(
        "detached",
        fade_data(0.0),
        ActionTarget::<f32>::new(|| None, |_| {}),
    )
    .unwrap();

    let mut element = switch::switch()
        .timing(fast_timing())
        .action(broken)
        .action(healthy)
        .build()
        .unwrap();

    element.fire(SwitchTrigger::OnHide).unwrap();
    element.when_execution_completes().await;
    assert_eq!(*alpha.lock().unwrap(), 0.0);

    element.fire_instant(SwitchTrigger::OnShow).unwrap();
    assert_eq!(*alpha.lock().unwrap(), 1.0);
}

#[tokio::test(start_paused = true)]
async fn rapid_retrigger_lets_the_last_writer_win() {
    let alpha = Arc::new(Mutex::new(1.0f32));
    let fade = TweenedAction::new(
        "fade",
        ActionData::new()
            .state(SwitchState::Show, StateActionData::to_baseline())
            .state(
                SwitchState::Hide,
                StateActionData::to_value(0.0).with_timing(TimingOverride {
                    use_custom_duration: true,
                    duration: 5.0,
                    ..TimingOverride::default()
                }),
            ),
        ActionTarget::shared(Arc::clone(&alpha)),
    )
    .unwrap();

    let mut element = switch::switch().timing(fast_timing()).action(fade).build().unwrap();

    // Start a long hide, then immediately show again.
    element.fire(SwitchTrigger::OnHide).unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    element.fire(SwitchTrigger::OnShow).unwrap();

    // Only the latest batch is awaited.
    element.when_execution_completes().await;
    assert_eq!(*alpha.lock().unwrap(), 1.0);

    // The superseded hide never writes again.
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(*alpha.lock().unwrap(), 1.0);
}

#[tokio::test(start_paused = true)]
async fn selectable_element_tints_through_interaction() {
    let tint = Arc::new(Mutex::new([1.0f32, 1.0, 1.0, 1.0]));
    let data: ActionData<SelectableState, [f32; 4]> = ActionData::new()
        .state(SelectableState::Normal, StateActionData::to_baseline())
        .state(
            SelectableState::Highlighted,
            StateActionData::to_value([0.9, 0.9, 0.6, 1.0]),
        )
        .state(
            SelectableState::PressedInside,
            StateActionData::to_value([0.7, 0.7, 0.4, 1.0]),
        )
        .state(
            SelectableState::PressedOutside,
            StateActionData::to_value([0.8, 0.8, 0.8, 0.6]),
        );
    let action =
        TweenedAction::new("tint", data, ActionTarget::shared(Arc::clone(&tint))).unwrap();

    let mut element = selectable::selectable()
        .timing(fast_timing())
        .action(action)
        .build()
        .unwrap();

    element.fire(SelectableTrigger::PointerEnter).unwrap();
    element.when_execution_completes().await;
    assert_eq!(element.current_state(), SelectableState::Highlighted);
    assert_eq!(*tint.lock().unwrap(), [0.9, 0.9, 0.6, 1.0]);

    element.fire(SelectableTrigger::PointerDown).unwrap();
    element.when_execution_completes().await;
    assert_eq!(*tint.lock().unwrap(), [0.7, 0.7, 0.4, 1.0]);

    // Releasing inside goes back to Highlighted, then exit returns to the
    // captured baseline tint.
    element.fire(SelectableTrigger::PointerUp).unwrap();
    element.when_execution_completes().await;
    element.fire(SelectableTrigger::PointerExit).unwrap();
    element.when_execution_completes().await;
    assert_eq!(element.current_state(), SelectableState::Normal);
    assert_eq!(*tint.lock().unwrap(), [1.0, 1.0, 1.0, 1.0]);
}

#[tokio::test(start_paused = true)]
async fn ignored_trigger_starts_no_batch() {
    let tint = Arc::new(Mutex::new(0.0f32));
    let action = TweenedAction::new(
        "tint",
        ActionData::<SelectableState, f32>::new()
            .state(SelectableState::Normal, StateActionData::to_baseline())
            .state(SelectableState::Highlighted, StateActionData::to_value(1.0)),
        ActionTarget::shared(Arc::clone(&tint)),
    )
    .unwrap();

    let mut element = selectable::selectable()
        .timing(fast_timing())
        .action(action)
        .build()
        .unwrap();

    // Normal ignores PointerClick outright: no new batch, no state change,
    // no writes.
    element.fire(SelectableTrigger::PointerClick).unwrap();
    assert_eq!(element.current_state(), SelectableState::Normal);
    assert!(element.execution_batch().is_resolved());
    element.when_execution_completes().await;
    assert_eq!(*tint.lock().unwrap(), 0.0);
}
