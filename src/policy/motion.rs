/// Default viewport width below which a region counts as mobile, in pixels.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// The effective animation policy for a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MotionPolicy {
    /// Animate normally: observe, transition, stagger.
    Full,
    /// Complete bypass: render directly in the end state with no transition,
    /// no observer, and no stagger delays.
    None,
}

/// Tuning knobs for policy resolution.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MotionSettings {
    /// Viewport width threshold for the coarse mobile classification.
    pub mobile_breakpoint_px: f64,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
        }
    }
}

/// Read-only snapshot of the process-wide inputs policy depends on.
///
/// Refreshed by the embedder on the corresponding platform events (media query
/// change, window resize) and only ever read by regions.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewportSnapshot {
    /// Current viewport width in pixels.
    pub width_px: f64,
    /// User-level reduced-motion preference.
    pub prefers_reduced_motion: bool,
}

impl Default for ViewportSnapshot {
    fn default() -> Self {
        Self {
            width_px: MOBILE_BREAKPOINT_PX,
            prefers_reduced_motion: false,
        }
    }
}

/// Resolve the effective policy for one region.
///
/// Either input alone is sufficient to disable animation: a reduced-motion
/// preference always wins, and `disable_on_mobile` combined with a narrow
/// viewport does too. Re-evaluated on resize events only, never per frame.
pub fn resolve_policy(
    snapshot: ViewportSnapshot,
    disable_on_mobile: bool,
    settings: MotionSettings,
) -> MotionPolicy {
    if snapshot.prefers_reduced_motion {
        return MotionPolicy::None;
    }
    if disable_on_mobile && snapshot.width_px < settings.mobile_breakpoint_px {
        return MotionPolicy::None;
    }
    MotionPolicy::Full
}

#[cfg(test)]
#[path = "../../tests/unit/policy/motion.rs"]
mod tests;
