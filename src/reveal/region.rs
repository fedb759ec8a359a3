use smallvec::SmallVec;

use crate::animation::stagger::{self, StaggerSettings};
use crate::animation::variant::{self, ResolvedVariant, Snapshot, Timing};
use crate::policy::motion::{MotionPolicy, MotionSettings, ViewportSnapshot, resolve_policy};
use crate::reveal::config::RegionConfig;

/// Lifecycle state of a revealable region.
///
/// `Visible` and `ForcedVisible` map to the same visible snapshot; the split
/// only records *how* the region got there (observer vs. safety net / critical
/// bypass). Both are terminal when the region is configured `once`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RegionState {
    /// Created but the mount gate has not fired; output is the deterministic
    /// pre-interactive default (visible, no transition).
    Unmounted,
    /// Mounted and hidden, not currently observing.
    MountedHidden,
    /// Waiting for an intersection callback or the safety-net timer.
    Observing,
    /// Revealed by an intersection at or above the threshold.
    Visible,
    /// Revealed by the safety net or the critical bypass.
    ForcedVisible,
}

impl RegionState {
    /// Whether this state renders the visible snapshot.
    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Visible | Self::ForcedVisible)
    }
}

/// A host-delivered event driving one region's state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RegionEvent {
    /// First client-side activation pass completed for this region.
    Mounted,
    /// The observer reported an intersection ratio in `[0, 1]`.
    Intersection {
        /// Fraction of the region's area currently inside the viewport.
        ratio: f64,
    },
    /// The safety-net timer elapsed before any intersection was reported.
    SafetyTimerElapsed,
    /// The viewport snapshot changed (resize or preference flip).
    ViewportChanged {
        /// The refreshed snapshot.
        snapshot: ViewportSnapshot,
    },
}

/// A platform resource request emitted by the state machine.
///
/// The engine never touches the platform itself; it tells the embedder which
/// observer/timer to acquire or release, and the embedder feeds the resulting
/// callbacks back in as [`RegionEvent`]s.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    /// Attach an intersection observer with the given area threshold.
    AttachObserver {
        /// Area fraction required to count as intersecting.
        threshold: f64,
    },
    /// Detach the intersection observer.
    DetachObserver,
    /// Start the one-shot safety-net timer.
    StartSafetyTimer {
        /// Timer duration in milliseconds.
        after_ms: u64,
    },
    /// Cancel the pending safety-net timer.
    CancelSafetyTimer,
}

/// Effects emitted by one event; at most a handful, so stored inline.
pub type Effects = SmallVec<[Effect; 4]>;

/// What a consumer renders for a region right now.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionOutput<'a> {
    /// Current lifecycle state.
    pub state: RegionState,
    /// The snapshot to apply: `visible` when revealed (or pre-mount),
    /// `hidden` while waiting.
    pub snapshot: &'a Snapshot,
    /// Transition parameters; zero-length pre-mount and under a `None` policy.
    pub timing: Timing,
}

/// What a consumer renders for one staggered child of a container region.
#[derive(Clone, Debug, PartialEq)]
pub struct ChildOutput<'a> {
    /// The snapshot to apply to this child.
    pub snapshot: &'a Snapshot,
    /// Transition parameters including the child's stagger delay.
    pub timing: Timing,
    /// True when the child has an animated slot; false for children beyond
    /// the cap, which render statically and never enter timing bookkeeping.
    pub animated: bool,
}

/// One revealable region: mount gate, visibility observer bookkeeping,
/// safety net, policy adapter, and variant resolution composed behind a
/// single event-driven state machine.
///
/// Regions are fully independent of each other; the only shared input is the
/// [`ViewportSnapshot`] delivered through events.
#[derive(Clone, Debug)]
pub struct RevealRegion {
    config: RegionConfig,
    resolved: ResolvedVariant,
    settings: MotionSettings,
    policy: MotionPolicy,
    state: RegionState,
    mounted: bool,
    observer_attached: bool,
    timer_armed: bool,
    disposed: bool,
}

impl RevealRegion {
    /// Create a region from its configuration and the current viewport.
    pub fn new(config: RegionConfig, viewport: ViewportSnapshot) -> Self {
        Self::with_settings(config, viewport, MotionSettings::default())
    }

    /// Create a region with explicit policy tuning.
    pub fn with_settings(
        config: RegionConfig,
        viewport: ViewportSnapshot,
        settings: MotionSettings,
    ) -> Self {
        let resolved = variant::resolve(&config.animation, config.distance, config.timing());
        let policy = resolve_policy(viewport, config.disable_on_mobile, settings);
        Self {
            config,
            resolved,
            settings,
            policy,
            state: RegionState::Unmounted,
            mounted: false,
            observer_attached: false,
            timer_armed: false,
            disposed: false,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RegionState {
        self.state
    }

    /// Whether the mount gate has fired.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether this region has been torn down.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// The effective motion policy as of the last viewport snapshot.
    pub fn policy(&self) -> MotionPolicy {
        self.policy
    }

    /// The region's configuration.
    pub fn config(&self) -> &RegionConfig {
        &self.config
    }

    /// Drive the state machine with one host event.
    ///
    /// Events delivered to a disposed region are silent no-ops, so a late
    /// platform callback can never mutate a torn-down region.
    pub fn handle(&mut self, event: RegionEvent) -> Effects {
        if self.disposed {
            return Effects::new();
        }
        match event {
            RegionEvent::Mounted => self.on_mounted(),
            RegionEvent::Intersection { ratio } => self.on_intersection(ratio),
            RegionEvent::SafetyTimerElapsed => self.on_safety_timer(),
            RegionEvent::ViewportChanged { snapshot } => self.on_viewport_changed(snapshot),
        }
    }

    /// Tear the region down: release the observer and timer and ignore all
    /// further events. Idempotent.
    pub fn dispose(&mut self) -> Effects {
        if self.disposed {
            return Effects::new();
        }
        self.disposed = true;
        let mut effects = Effects::new();
        if self.observer_attached {
            self.observer_attached = false;
            effects.push(Effect::DetachObserver);
        }
        if self.timer_armed {
            self.timer_armed = false;
            effects.push(Effect::CancelSafetyTimer);
        }
        effects
    }

    /// What to render right now.
    pub fn output(&self) -> RegionOutput<'_> {
        // Before the mount gate fires, consumers must see the deterministic
        // pre-interactive default: fully visible, no transition. This is what
        // keeps server-rendered and first interactive output identical.
        if !self.mounted {
            return RegionOutput {
                state: self.state,
                snapshot: &self.resolved.visible,
                timing: Timing::instant(),
            };
        }
        let timing = if self.policy == MotionPolicy::None {
            Timing::instant()
        } else {
            self.resolved.timing
        };
        let snapshot = if self.state.is_revealed() {
            &self.resolved.visible
        } else {
            &self.resolved.hidden
        };
        RegionOutput {
            state: self.state,
            snapshot,
            timing,
        }
    }

    /// What to render for child `index` of this container's `child_count`
    /// immediate children.
    ///
    /// Children use the container's own variant. Only the first
    /// `max_animated_children` get an animated slot and a monotonically
    /// increasing delay; the rest always render in the visible end state.
    pub fn child_output(&self, index: usize, child_count: usize) -> ChildOutput<'_> {
        let settings = StaggerSettings {
            per_item_delay_s: self.config.stagger_children_s,
            max_animated: self.config.max_animated_children,
        };
        let plan = stagger::plan(child_count, settings);

        let Some(slot) = plan.slot(index) else {
            return ChildOutput {
                snapshot: &self.resolved.visible,
                timing: Timing::instant(),
                animated: false,
            };
        };

        let base = self.output();
        if base.timing.duration_s == 0.0 {
            // Pre-mount or policy bypass: the child follows the container's
            // instant end state, with no stagger delay applied.
            return ChildOutput {
                snapshot: base.snapshot,
                timing: base.timing,
                animated: true,
            };
        }
        ChildOutput {
            snapshot: base.snapshot,
            timing: base.timing.with_added_delay(slot.delay_s),
            animated: true,
        }
    }

    fn on_mounted(&mut self) -> Effects {
        let mut effects = Effects::new();
        // The mount gate flips exactly once; replays are ignored.
        if self.mounted {
            return effects;
        }
        self.mounted = true;

        if self.policy == MotionPolicy::None {
            // Complete bypass: no observer, no timer, no transition.
            self.state = RegionState::Visible;
            tracing::debug!(state = ?self.state, "mounted with motion disabled");
            return effects;
        }
        if self.config.critical {
            // Above-the-fold content never races the observer.
            self.state = RegionState::ForcedVisible;
            tracing::debug!(state = ?self.state, "mounted critical region");
            return effects;
        }

        self.state = RegionState::Observing;
        self.observer_attached = true;
        self.timer_armed = true;
        effects.push(Effect::AttachObserver {
            threshold: self.config.clamped_threshold(),
        });
        effects.push(Effect::StartSafetyTimer {
            after_ms: self.config.safety_net_ms,
        });
        effects
    }

    fn on_intersection(&mut self, ratio: f64) -> Effects {
        let mut effects = Effects::new();
        if !self.mounted {
            return effects;
        }
        let intersecting = ratio >= self.config.clamped_threshold();

        match (self.state, intersecting) {
            (RegionState::Observing | RegionState::MountedHidden, true) => {
                self.state = RegionState::Visible;
                if self.timer_armed {
                    self.timer_armed = false;
                    effects.push(Effect::CancelSafetyTimer);
                }
                if self.config.once && self.observer_attached {
                    // One-shot semantics: detach permanently on first reveal.
                    self.observer_attached = false;
                    effects.push(Effect::DetachObserver);
                }
                tracing::debug!(ratio, "region revealed by intersection");
            }
            (RegionState::Observing, false) if !self.config.once => {
                self.state = RegionState::MountedHidden;
            }
            (RegionState::Visible | RegionState::ForcedVisible, false) if !self.config.once => {
                // Continuous mode: exit re-arms observation; the observer is
                // still attached, so no new effects are needed.
                self.state = RegionState::Observing;
                tracing::debug!("region exited viewport, re-observing");
            }
            // once=true revealed states are terminal; everything else ignores
            // redundant reports.
            _ => {}
        }
        effects
    }

    fn on_safety_timer(&mut self) -> Effects {
        let mut effects = Effects::new();
        if !self.mounted {
            return effects;
        }
        self.timer_armed = false;
        if matches!(
            self.state,
            RegionState::Observing | RegionState::MountedHidden
        ) {
            // The observer never fired in time; content must not stay hidden.
            self.state = RegionState::ForcedVisible;
            if self.config.once && self.observer_attached {
                self.observer_attached = false;
                effects.push(Effect::DetachObserver);
            }
            tracing::debug!("safety net forced region visible");
        }
        effects
    }

    fn on_viewport_changed(&mut self, snapshot: ViewportSnapshot) -> Effects {
        let mut effects = Effects::new();
        let policy = resolve_policy(snapshot, self.config.disable_on_mobile, self.settings);
        if policy == self.policy {
            return effects;
        }
        self.policy = policy;

        if policy == MotionPolicy::None && self.mounted && !self.state.is_revealed() {
            // Crossing into the no-motion class releases the machinery and
            // shows the end state directly.
            self.state = RegionState::Visible;
            if self.observer_attached {
                self.observer_attached = false;
                effects.push(Effect::DetachObserver);
            }
            if self.timer_armed {
                self.timer_armed = false;
                effects.push(Effect::CancelSafetyTimer);
            }
        }
        // Crossing back to Full never re-hides already revealed content.
        effects
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/region.rs"]
mod tests;
