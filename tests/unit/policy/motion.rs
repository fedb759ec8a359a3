use super::*;

fn snapshot(width_px: f64, prefers_reduced_motion: bool) -> ViewportSnapshot {
    ViewportSnapshot {
        width_px,
        prefers_reduced_motion,
    }
}

#[test]
fn reduced_motion_preference_always_wins() {
    let policy = resolve_policy(snapshot(1920.0, true), false, MotionSettings::default());
    assert_eq!(policy, MotionPolicy::None);
}

#[test]
fn narrow_viewport_disables_when_configured() {
    let policy = resolve_policy(snapshot(400.0, false), true, MotionSettings::default());
    assert_eq!(policy, MotionPolicy::None);
}

#[test]
fn narrow_viewport_animates_when_not_configured() {
    let policy = resolve_policy(snapshot(400.0, false), false, MotionSettings::default());
    assert_eq!(policy, MotionPolicy::Full);
}

#[test]
fn wide_viewport_animates() {
    let policy = resolve_policy(snapshot(1280.0, false), true, MotionSettings::default());
    assert_eq!(policy, MotionPolicy::Full);
}

#[test]
fn breakpoint_is_exclusive_at_the_boundary() {
    let policy = resolve_policy(
        snapshot(MOBILE_BREAKPOINT_PX, false),
        true,
        MotionSettings::default(),
    );
    assert_eq!(policy, MotionPolicy::Full);
}

#[test]
fn custom_breakpoint_is_respected() {
    let settings = MotionSettings {
        mobile_breakpoint_px: 1024.0,
    };
    let policy = resolve_policy(snapshot(900.0, false), true, settings);
    assert_eq!(policy, MotionPolicy::None);
}
