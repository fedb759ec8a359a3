use super::*;
use crate::animation::variant::Property;

fn desktop() -> ViewportSnapshot {
    ViewportSnapshot {
        width_px: 1280.0,
        prefers_reduced_motion: false,
    }
}

fn mobile() -> ViewportSnapshot {
    ViewportSnapshot {
        width_px: 375.0,
        prefers_reduced_motion: false,
    }
}

fn region(config: RegionConfig) -> RevealRegion {
    RevealRegion::new(config, desktop())
}

#[test]
fn pre_mount_output_is_visible_with_no_transition() {
    let r = region(RegionConfig::default());
    let out = r.output();
    assert_eq!(out.state, RegionState::Unmounted);
    assert_eq!(out.snapshot.get(Property::Opacity), Some(1.0));
    assert_eq!(out.snapshot.get(Property::TranslateY), Some(0.0));
    assert_eq!(out.timing, Timing::instant());
}

#[test]
fn events_before_mount_are_ignored() {
    let mut r = region(RegionConfig::default());
    assert!(r.handle(RegionEvent::Intersection { ratio: 1.0 }).is_empty());
    assert!(r.handle(RegionEvent::SafetyTimerElapsed).is_empty());
    assert_eq!(r.state(), RegionState::Unmounted);
}

#[test]
fn mount_starts_observation_with_threshold_and_timer() {
    let mut r = region(RegionConfig::default());
    let effects = r.handle(RegionEvent::Mounted);
    assert_eq!(r.state(), RegionState::Observing);
    assert!(r.is_mounted());
    assert_eq!(
        effects.as_slice(),
        &[
            Effect::AttachObserver { threshold: 0.1 },
            Effect::StartSafetyTimer { after_ms: 50 },
        ]
    );
    // Hidden snapshot applies while observing.
    let out = r.output();
    assert_eq!(out.snapshot.get(Property::Opacity), Some(0.0));
    assert_eq!(out.snapshot.get(Property::TranslateY), Some(30.0));
}

#[test]
fn mount_gate_fires_exactly_once() {
    let mut r = region(RegionConfig::default());
    let first = r.handle(RegionEvent::Mounted);
    assert_eq!(first.len(), 2);
    let replay = r.handle(RegionEvent::Mounted);
    assert!(replay.is_empty());
    assert_eq!(r.state(), RegionState::Observing);
}

#[test]
fn intersection_at_threshold_reveals_and_releases_machinery() {
    let mut r = region(RegionConfig::default());
    r.handle(RegionEvent::Mounted);
    let effects = r.handle(RegionEvent::Intersection { ratio: 0.1 });
    assert_eq!(r.state(), RegionState::Visible);
    assert_eq!(
        effects.as_slice(),
        &[Effect::CancelSafetyTimer, Effect::DetachObserver]
    );
    let out = r.output();
    assert_eq!(out.snapshot.get(Property::Opacity), Some(1.0));
    assert_eq!(out.snapshot.get(Property::TranslateY), Some(0.0));
    assert_eq!(out.timing.duration_s, 0.6);
}

#[test]
fn intersection_below_threshold_keeps_observing() {
    let mut r = region(RegionConfig::default());
    r.handle(RegionEvent::Mounted);
    let effects = r.handle(RegionEvent::Intersection { ratio: 0.05 });
    assert!(effects.is_empty());
    assert_eq!(r.state(), RegionState::Observing);
}

#[test]
fn once_regions_never_revert_after_reveal() {
    let mut r = region(RegionConfig::default());
    r.handle(RegionEvent::Mounted);
    r.handle(RegionEvent::Intersection { ratio: 1.0 });
    assert_eq!(r.state(), RegionState::Visible);

    // Simulated exit: area drops to zero. State must not move.
    let effects = r.handle(RegionEvent::Intersection { ratio: 0.0 });
    assert!(effects.is_empty());
    assert_eq!(r.state(), RegionState::Visible);
}

#[test]
fn continuous_regions_reobserve_on_exit() {
    let mut r = region(RegionConfig {
        once: false,
        ..RegionConfig::default()
    });
    r.handle(RegionEvent::Mounted);

    let enter = r.handle(RegionEvent::Intersection { ratio: 0.5 });
    assert_eq!(r.state(), RegionState::Visible);
    // Observer stays attached in continuous mode, so only the timer is
    // cancelled on the first reveal.
    assert_eq!(enter.as_slice(), &[Effect::CancelSafetyTimer]);

    let exit = r.handle(RegionEvent::Intersection { ratio: 0.0 });
    assert!(exit.is_empty());
    assert_eq!(r.state(), RegionState::Observing);

    r.handle(RegionEvent::Intersection { ratio: 0.5 });
    assert_eq!(r.state(), RegionState::Visible);
}

#[test]
fn safety_timer_forces_visibility_when_observer_never_fires() {
    let mut r = region(RegionConfig::default());
    r.handle(RegionEvent::Mounted);
    let effects = r.handle(RegionEvent::SafetyTimerElapsed);
    assert_eq!(r.state(), RegionState::ForcedVisible);
    assert_eq!(effects.as_slice(), &[Effect::DetachObserver]);

    // ForcedVisible selects the same visible snapshot as Visible; there is no
    // parallel override path.
    let out = r.output();
    assert_eq!(out.snapshot.get(Property::Opacity), Some(1.0));
    assert_eq!(out.snapshot.get(Property::TranslateY), Some(0.0));
}

#[test]
fn safety_timer_after_reveal_is_a_no_op() {
    let mut r = region(RegionConfig::default());
    r.handle(RegionEvent::Mounted);
    r.handle(RegionEvent::Intersection { ratio: 1.0 });
    let effects = r.handle(RegionEvent::SafetyTimerElapsed);
    assert!(effects.is_empty());
    assert_eq!(r.state(), RegionState::Visible);
}

#[test]
fn critical_regions_bypass_the_observer_entirely() {
    let mut r = region(RegionConfig {
        critical: true,
        ..RegionConfig::default()
    });
    let effects = r.handle(RegionEvent::Mounted);
    assert!(effects.is_empty());
    assert_eq!(r.state(), RegionState::ForcedVisible);
}

#[test]
fn reduced_motion_bypasses_observer_and_transition() {
    let viewport = ViewportSnapshot {
        width_px: 1280.0,
        prefers_reduced_motion: true,
    };
    let mut r = RevealRegion::new(RegionConfig::default(), viewport);
    assert_eq!(r.policy(), MotionPolicy::None);

    let effects = r.handle(RegionEvent::Mounted);
    assert!(effects.is_empty(), "no observer or timer under policy None");
    assert_eq!(r.state(), RegionState::Visible);

    let out = r.output();
    assert_eq!(out.snapshot.get(Property::Opacity), Some(1.0));
    assert_eq!(out.timing, Timing::instant());
}

#[test]
fn mobile_viewport_bypasses_when_configured() {
    let mut r = RevealRegion::new(RegionConfig::default(), mobile());
    assert_eq!(r.policy(), MotionPolicy::None);
    r.handle(RegionEvent::Mounted);
    assert_eq!(r.state(), RegionState::Visible);
}

#[test]
fn resize_across_breakpoint_releases_live_machinery() {
    let mut r = region(RegionConfig::default());
    r.handle(RegionEvent::Mounted);
    assert_eq!(r.state(), RegionState::Observing);

    let effects = r.handle(RegionEvent::ViewportChanged { snapshot: mobile() });
    assert_eq!(r.state(), RegionState::Visible);
    assert_eq!(
        effects.as_slice(),
        &[Effect::DetachObserver, Effect::CancelSafetyTimer]
    );
    assert_eq!(r.policy(), MotionPolicy::None);
}

#[test]
fn resize_back_to_desktop_never_rehides_content() {
    let mut r = RevealRegion::new(RegionConfig::default(), mobile());
    r.handle(RegionEvent::Mounted);
    assert_eq!(r.state(), RegionState::Visible);

    let effects = r.handle(RegionEvent::ViewportChanged {
        snapshot: desktop(),
    });
    assert!(effects.is_empty());
    assert_eq!(r.state(), RegionState::Visible);
}

#[test]
fn dispose_releases_everything_and_silences_late_callbacks() {
    let mut r = region(RegionConfig::default());
    r.handle(RegionEvent::Mounted);

    let effects = r.dispose();
    assert_eq!(
        effects.as_slice(),
        &[Effect::DetachObserver, Effect::CancelSafetyTimer]
    );
    assert!(r.is_disposed());

    // A late intersection callback must neither produce effects nor move
    // state on a disposed region.
    let late = r.handle(RegionEvent::Intersection { ratio: 1.0 });
    assert!(late.is_empty());
    assert_eq!(r.state(), RegionState::Observing);

    // Dispose is idempotent.
    assert!(r.dispose().is_empty());
}

#[test]
fn dispose_before_mount_has_nothing_to_release() {
    let mut r = region(RegionConfig::default());
    assert!(r.dispose().is_empty());
}

#[test]
fn zero_threshold_reveals_on_any_report() {
    let mut r = region(RegionConfig {
        threshold: 0.0,
        ..RegionConfig::default()
    });
    r.handle(RegionEvent::Mounted);
    r.handle(RegionEvent::Intersection { ratio: 0.0 });
    assert_eq!(r.state(), RegionState::Visible);
}

fn stagger_container() -> RegionConfig {
    RegionConfig {
        stagger_children_s: 0.03,
        ..RegionConfig::default()
    }
}

#[test]
fn staggered_children_follow_the_container_variant() {
    let mut r = region(stagger_container());
    r.handle(RegionEvent::Mounted);

    let child = r.child_output(2, 20);
    assert!(child.animated);
    // Hidden while the container observes, with the slot delay on top.
    assert_eq!(child.snapshot.get(Property::Opacity), Some(0.0));
    assert!((child.timing.delay_s - 0.06).abs() < 1e-12);

    r.handle(RegionEvent::Intersection { ratio: 1.0 });
    let child = r.child_output(2, 20);
    assert_eq!(child.snapshot.get(Property::Opacity), Some(1.0));
}

#[test]
fn children_beyond_the_cap_render_statically() {
    let mut r = region(stagger_container());
    r.handle(RegionEvent::Mounted);

    // Still observing; an over-cap child is already in its end state.
    let child = r.child_output(12, 20);
    assert!(!child.animated);
    assert_eq!(child.snapshot.get(Property::Opacity), Some(1.0));
    assert_eq!(child.timing, Timing::instant());
}

#[test]
fn stagger_delays_are_monotone_within_the_cap() {
    let mut r = region(stagger_container());
    r.handle(RegionEvent::Mounted);
    r.handle(RegionEvent::Intersection { ratio: 1.0 });

    let mut prev = -1.0;
    for i in 0..8 {
        let child = r.child_output(i, 20);
        assert!(child.animated);
        assert!(child.timing.delay_s > prev);
        prev = child.timing.delay_s;
    }
}

#[test]
fn stagger_under_policy_none_applies_no_delays() {
    let mut r = RevealRegion::new(stagger_container(), mobile());
    r.handle(RegionEvent::Mounted);
    let child = r.child_output(3, 10);
    assert_eq!(child.timing, Timing::instant());
    assert_eq!(child.snapshot.get(Property::Opacity), Some(1.0));
}
