use smallvec::SmallVec;

/// Default hard cap on individually animated children per stagger group.
pub const MAX_ANIMATED_CHILDREN: usize = 8;

/// Default ceiling on the per-item delay, in seconds.
pub const MAX_PER_ITEM_DELAY_S: f64 = 0.05;

/// Stagger tuning for a container region.
///
/// The defaults are empirically tuned, not derived; embedders are expected to
/// validate them on real devices rather than treat them as physical constants.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StaggerSettings {
    /// Delay between consecutive children, in seconds. Clamped to
    /// [`MAX_PER_ITEM_DELAY_S`] when planning.
    pub per_item_delay_s: f64,
    /// Maximum number of children that receive individual timed animation.
    #[serde(default = "default_max_animated")]
    pub max_animated: usize,
}

fn default_max_animated() -> usize {
    MAX_ANIMATED_CHILDREN
}

impl StaggerSettings {
    /// Settings with the default cap and the given per-item delay.
    pub fn new(per_item_delay_s: f64) -> Self {
        Self {
            per_item_delay_s,
            max_animated: MAX_ANIMATED_CHILDREN,
        }
    }
}

/// One animated child slot in a stagger plan.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChildSlot {
    /// Index of the child within the container, in insertion order.
    pub index: usize,
    /// Delay before this child's entrance transition starts, in seconds.
    pub delay_s: f64,
}

/// The bounded plan for a container's staggered children.
///
/// Only the first `max_animated` children get a slot; the rest are counted in
/// [`StaggerPlan::static_children`] and never enter the timing machinery at
/// all, which keeps bookkeeping O(cap) no matter how long the list grows.
#[derive(Clone, Debug, PartialEq)]
pub struct StaggerPlan {
    /// Slots for the animated children, in strictly increasing delay order.
    pub slots: SmallVec<[ChildSlot; MAX_ANIMATED_CHILDREN]>,
    /// Number of trailing children rendered directly in their end state.
    pub static_children: usize,
}

impl StaggerPlan {
    /// The slot for child `index`, or `None` if it renders statically.
    pub fn slot(&self, index: usize) -> Option<ChildSlot> {
        self.slots.get(index).copied()
    }
}

/// Plan delays for a container with `child_count` children.
///
/// Child `i` (for `i < max_animated`) gets `i × min(per_item_delay, 0.05s)`;
/// zero or negative delays collapse the cascade to simultaneous entrances.
pub fn plan(child_count: usize, settings: StaggerSettings) -> StaggerPlan {
    let cap = settings.max_animated.min(MAX_ANIMATED_CHILDREN);
    let step = settings.per_item_delay_s.clamp(0.0, MAX_PER_ITEM_DELAY_S);

    let animated = child_count.min(cap);
    let mut slots = SmallVec::new();
    for index in 0..animated {
        slots.push(ChildSlot {
            index,
            delay_s: index as f64 * step,
        });
    }

    StaggerPlan {
        slots,
        static_children: child_count - animated,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/stagger.rs"]
mod tests;
