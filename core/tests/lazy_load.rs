use samcreative_core::{
    effective_quality, ConnectionHint, ImageLoadState, RetryPolicy, SectionLoad, SectionLoadError,
    VisibilityTrigger, SECTION_RETRY,
};

#[test]
fn trigger_fires_once() {
    let mut trigger = VisibilityTrigger::default();
    assert!(trigger.fire());
    assert!(trigger.is_fired());
    assert!(!trigger.fire());
    assert!(!trigger.fire());
}

#[test]
fn image_states_are_terminal() {
    let loaded = ImageLoadState::Placeholder.on_load();
    assert_eq!(loaded, ImageLoadState::Loaded);
    assert_eq!(loaded.on_error(), ImageLoadState::Loaded);

    let failed = ImageLoadState::Placeholder.on_error();
    assert_eq!(failed, ImageLoadState::Failed);
    assert_eq!(failed.on_load(), ImageLoadState::Failed);
    assert!(failed.is_terminal());
    assert!(!ImageLoadState::Placeholder.is_terminal());
}

#[test]
fn quality_drops_on_slow_connections() {
    assert_eq!(effective_quality(85, true), 85);
    assert_eq!(effective_quality(85, false), 65);
    assert_eq!(effective_quality(60, false), 50);
    assert_eq!(effective_quality(10, false), 50);
}

#[test]
fn connection_hint_classification() {
    assert!(ConnectionHint::default().allows_high_quality());
    let slow = ConnectionHint {
        effective_type: Some("3g".to_string()),
        save_data: false,
    };
    assert!(!slow.allows_high_quality());
    let saver = ConnectionHint {
        effective_type: Some("4g".to_string()),
        save_data: true,
    };
    assert!(!saver.allows_high_quality());
}

#[test]
fn retry_delays_back_off() {
    assert_eq!(SECTION_RETRY.delay_before(1), 0);
    assert_eq!(SECTION_RETRY.delay_before(2), 400);
    assert_eq!(SECTION_RETRY.delay_before(3), 1600);
}

#[test]
fn section_load_retries_then_degrades() {
    let policy = RetryPolicy {
        max_attempts: 2,
        base_delay_ms: 10,
        factor: 2,
    };
    let err = || Err(SectionLoadError::Asset("a.jpg".to_string()));
    let state = SectionLoad::Deferred.start().expect("deferred starts");
    assert_eq!(state, SectionLoad::Pending { attempt: 1 });
    let state = state.settle(err(), &policy);
    assert_eq!(state, SectionLoad::Pending { attempt: 2 });
    assert!(!state.should_render());
    let state = state.settle(err(), &policy);
    assert!(state.should_render());
    assert!(state.is_degraded());
    assert_eq!(
        state,
        SectionLoad::Failed {
            attempts: 2,
            error: SectionLoadError::Asset("a.jpg".to_string()),
        }
    );
}

#[test]
fn section_load_success_and_restart_guard() {
    let state = SectionLoad::Deferred.start().expect("deferred starts");
    let state = state.settle(Ok(()), &SECTION_RETRY);
    assert_eq!(state, SectionLoad::Loaded);
    assert!(state.start().is_none());
    assert_eq!(state.settle(Ok(()), &SECTION_RETRY), SectionLoad::Loaded);
}

#[test]
fn late_results_leave_settled_slots_alone() {
    let failed = SectionLoad::Failed {
        attempts: 3,
        error: SectionLoadError::Asset("a.jpg".to_string()),
    };
    assert_eq!(failed.settle(Ok(()), &SECTION_RETRY), failed);
    assert!(failed.start().is_none());

    let err = Err(SectionLoadError::Asset("b.jpg".to_string()));
    assert_eq!(SectionLoad::Deferred.settle(err, &SECTION_RETRY), SectionLoad::Deferred);
}
