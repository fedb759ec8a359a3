use super::*;

#[test]
fn cap_bounds_animated_children() {
    let plan = plan(20, StaggerSettings::new(0.03));
    assert_eq!(plan.slots.len(), 8);
    assert_eq!(plan.static_children, 12);
    for (i, slot) in plan.slots.iter().enumerate() {
        assert_eq!(slot.index, i);
        assert!((slot.delay_s - i as f64 * 0.03).abs() < 1e-12);
    }
}

#[test]
fn delays_are_strictly_increasing() {
    let plan = plan(8, StaggerSettings::new(0.02));
    for pair in plan.slots.windows(2) {
        assert!(pair[0].delay_s < pair[1].delay_s);
    }
}

#[test]
fn per_item_delay_is_clamped() {
    let plan = plan(3, StaggerSettings::new(0.4));
    assert_eq!(plan.slots[1].delay_s, MAX_PER_ITEM_DELAY_S);
    assert_eq!(plan.slots[2].delay_s, 2.0 * MAX_PER_ITEM_DELAY_S);
}

#[test]
fn negative_delay_collapses_to_simultaneous() {
    let plan = plan(4, StaggerSettings::new(-1.0));
    assert!(plan.slots.iter().all(|s| s.delay_s == 0.0));
}

#[test]
fn short_lists_get_no_static_children() {
    let plan = plan(3, StaggerSettings::new(0.05));
    assert_eq!(plan.slots.len(), 3);
    assert_eq!(plan.static_children, 0);
}

#[test]
fn empty_list_plans_nothing() {
    let plan = plan(0, StaggerSettings::new(0.05));
    assert!(plan.slots.is_empty());
    assert_eq!(plan.static_children, 0);
}

#[test]
fn custom_cap_cannot_exceed_hard_maximum() {
    let plan = plan(
        50,
        StaggerSettings {
            per_item_delay_s: 0.01,
            max_animated: 30,
        },
    );
    assert_eq!(plan.slots.len(), MAX_ANIMATED_CHILDREN);
    assert_eq!(plan.static_children, 42);
}

#[test]
fn lower_custom_cap_is_honored() {
    let plan = plan(
        10,
        StaggerSettings {
            per_item_delay_s: 0.01,
            max_animated: 4,
        },
    );
    assert_eq!(plan.slots.len(), 4);
    assert_eq!(plan.static_children, 6);
}

#[test]
fn slot_lookup_matches_position() {
    let plan = plan(10, StaggerSettings::new(0.05));
    assert!(plan.slot(0).is_some());
    assert!(plan.slot(7).is_some());
    assert!(plan.slot(8).is_none());
    assert!(plan.slot(9).is_none());
}
