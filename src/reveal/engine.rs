use crate::policy::motion::{MotionSettings, ViewportSnapshot};
use crate::policy::viewport::ViewportHub;
use crate::reveal::config::RegionConfig;
use crate::reveal::region::{
    ChildOutput, Effects, RegionEvent, RegionOutput, RevealRegion,
};

/// Opaque generational handle to a region owned by a [`RevealEngine`].
///
/// A handle outlives its region harmlessly: once the slot is reused the
/// generation no longer matches and every operation through the stale handle
/// is a silent no-op. This is what makes late platform callbacks safe by
/// construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegionHandle {
    index: u32,
    generation: u32,
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    region: Option<RevealRegion>,
}

/// Owner of many independent regions plus the shared viewport hub.
///
/// Regions never share state with each other; the engine only routes events
/// by handle and fans viewport changes out. Slots are reused through a free
/// list so long-lived pages do not grow the arena unboundedly.
#[derive(Clone, Debug)]
pub struct RevealEngine {
    slots: Vec<Slot>,
    free: Vec<u32>,
    hub: ViewportHub,
    settings: MotionSettings,
}

impl RevealEngine {
    /// Build an engine from the initial viewport snapshot.
    pub fn new(viewport: ViewportSnapshot) -> Self {
        Self::with_settings(viewport, MotionSettings::default())
    }

    /// Build an engine with explicit policy tuning.
    pub fn with_settings(viewport: ViewportSnapshot, settings: MotionSettings) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            hub: ViewportHub::new(viewport),
            settings,
        }
    }

    /// Number of live regions.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.region.is_some()).count()
    }

    /// True when no regions are live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the embedder should currently hold the single global resize
    /// listener.
    pub fn resize_listener_wanted(&self) -> bool {
        self.hub.listener_wanted()
    }

    /// Create a region and return its handle.
    #[tracing::instrument(skip(self, config))]
    pub fn insert(&mut self, config: RegionConfig) -> RegionHandle {
        let region = RevealRegion::with_settings(config, self.hub.snapshot(), self.settings);
        self.hub.subscribe();

        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.region = Some(region);
            return RegionHandle {
                index,
                generation: slot.generation,
            };
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            region: Some(region),
        });
        RegionHandle {
            index,
            generation: 0,
        }
    }

    /// Route one event to a region. Stale handles are silent no-ops.
    pub fn handle(&mut self, handle: RegionHandle, event: RegionEvent) -> Effects {
        match self.region_mut(handle) {
            Some(region) => region.handle(event),
            None => Effects::new(),
        }
    }

    /// Read a region's output, or `None` for a stale handle.
    pub fn output(&self, handle: RegionHandle) -> Option<RegionOutput<'_>> {
        self.region(handle).map(RevealRegion::output)
    }

    /// Read a staggered child's output, or `None` for a stale handle.
    pub fn child_output(
        &self,
        handle: RegionHandle,
        index: usize,
        child_count: usize,
    ) -> Option<ChildOutput<'_>> {
        self.region(handle)
            .map(|r| r.child_output(index, child_count))
    }

    /// Borrow a region, or `None` for a stale handle.
    pub fn region(&self, handle: RegionHandle) -> Option<&RevealRegion> {
        self.slots
            .get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.region.as_ref())
    }

    /// Tear a region down and free its slot.
    ///
    /// Returns the teardown effects (observer detach, timer cancel) for the
    /// embedder to execute. Removing a stale handle is a no-op.
    #[tracing::instrument(skip(self))]
    pub fn remove(&mut self, handle: RegionHandle) -> Effects {
        let Some(slot) = self
            .slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
        else {
            return Effects::new();
        };
        let Some(mut region) = slot.region.take() else {
            return Effects::new();
        };
        let effects = region.dispose();
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        self.hub.unsubscribe();
        effects
    }

    /// Deliver a window resize to every live region.
    ///
    /// Returns the per-region effects for any region whose policy flipped.
    /// No-op resizes (same width) touch nothing.
    pub fn on_resize(&mut self, width_px: f64) -> Vec<(RegionHandle, Effects)> {
        if !self.hub.set_width(width_px) {
            return Vec::new();
        }
        self.fan_out_viewport()
    }

    /// Deliver a reduced-motion preference change to every live region.
    pub fn on_reduced_motion_changed(&mut self, prefers: bool) -> Vec<(RegionHandle, Effects)> {
        if !self.hub.set_prefers_reduced_motion(prefers) {
            return Vec::new();
        }
        self.fan_out_viewport()
    }

    fn fan_out_viewport(&mut self) -> Vec<(RegionHandle, Effects)> {
        let snapshot = self.hub.snapshot();
        let mut out = Vec::new();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let Some(region) = slot.region.as_mut() else {
                continue;
            };
            let effects = region.handle(RegionEvent::ViewportChanged { snapshot });
            if !effects.is_empty() {
                out.push((
                    RegionHandle {
                        index: index as u32,
                        generation: slot.generation,
                    },
                    effects,
                ));
            }
        }
        out
    }

    fn region_mut(&mut self, handle: RegionHandle) -> Option<&mut RevealRegion> {
        self.slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.region.as_mut())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/engine.rs"]
mod tests;
