use crate::animation::ease::BezierEasing;
use crate::animation::stagger::MAX_ANIMATED_CHILDREN;
use crate::animation::variant::{DEFAULT_DISTANCE, DEFAULT_DURATION_S, Timing, VariantSpec};
use crate::foundation::error::{UnveilError, UnveilResult};

/// Default area threshold for counting a region as in view.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Default safety-net timer duration, in milliseconds.
///
/// Empirically tuned (tens of milliseconds), not derived; kept configurable
/// per region via [`RegionConfig::safety_net_ms`].
pub const DEFAULT_SAFETY_NET_MS: u64 = 50;

/// Full configuration contract for one revealable region.
///
/// Every field has a safe default, and the engine clamps or falls back on
/// degenerate values instead of failing: a misconfigured region must still
/// end up visible. [`RegionConfig::validate`] exists for embedders that want
/// strict rejection up front.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RegionConfig {
    /// Animation variant applied to the region (and to staggered children).
    pub animation: VariantSpec,
    /// Transition duration in seconds.
    pub duration_s: f64,
    /// Slide distance in layout units, used by the slide presets.
    pub distance: f64,
    /// Easing curve for the entrance transition.
    pub easing: BezierEasing,
    /// Delay before the entrance transition starts, in seconds.
    pub delay_s: f64,
    /// Fraction of region area that must intersect the viewport, `[0, 1]`.
    pub threshold: f64,
    /// One-shot semantics: once visible the region never reverts to hidden.
    pub once: bool,
    /// Per-child stagger delay in seconds; `0` disables staggering.
    pub stagger_children_s: f64,
    /// Hard cap on individually animated children of a stagger container.
    pub max_animated_children: usize,
    /// Disable animation entirely on narrow viewports.
    pub disable_on_mobile: bool,
    /// Above-the-fold content: bypass the observer and force visibility
    /// immediately on mount. Explicit per-region configuration, not ambient
    /// document state.
    pub critical: bool,
    /// Safety-net timer duration in milliseconds.
    pub safety_net_ms: u64,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            animation: VariantSpec::SlideUp,
            duration_s: DEFAULT_DURATION_S,
            distance: DEFAULT_DISTANCE,
            easing: BezierEasing::default(),
            delay_s: 0.0,
            threshold: DEFAULT_THRESHOLD,
            once: true,
            stagger_children_s: 0.0,
            max_animated_children: MAX_ANIMATED_CHILDREN,
            disable_on_mobile: true,
            critical: false,
            safety_net_ms: DEFAULT_SAFETY_NET_MS,
        }
    }
}

impl RegionConfig {
    /// The timing implied by this configuration.
    pub fn timing(&self) -> Timing {
        Timing {
            duration_s: self.duration_s.max(0.0),
            delay_s: self.delay_s.max(0.0),
            easing: self.easing,
        }
    }

    /// Threshold clamped to the unit interval.
    pub fn clamped_threshold(&self) -> f64 {
        self.threshold.clamp(0.0, 1.0)
    }

    /// Whether this region staggers its immediate children.
    pub fn staggers_children(&self) -> bool {
        self.stagger_children_s > 0.0
    }

    /// Strict validation for embedders that prefer rejection over fallback.
    pub fn validate(&self) -> UnveilResult<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(UnveilError::config(format!(
                "threshold must be in [0, 1], got {}",
                self.threshold
            )));
        }
        if self.duration_s < 0.0 || self.delay_s < 0.0 || self.stagger_children_s < 0.0 {
            return Err(UnveilError::config(
                "durations and delays must be non-negative",
            ));
        }
        self.animation.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/config.rs"]
mod tests;
