use std::collections::BTreeMap;

use crate::animation::ease::BezierEasing;
use crate::foundation::error::{UnveilError, UnveilResult};

/// Default slide distance in layout units.
pub const DEFAULT_DISTANCE: f64 = 30.0;

/// Default transition duration in seconds.
pub const DEFAULT_DURATION_S: f64 = 0.6;

/// Fixed starting scale for the zoom-in preset.
const ZOOM_IN_FROM_SCALE: f64 = 0.95;

/// An animatable property of a revealed element.
///
/// The set is deliberately closed: reveal variants only ever move, fade, or
/// scale. Ordering is derived so snapshots iterate deterministically.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum Property {
    /// Element opacity in `[0, 1]`.
    Opacity,
    /// Horizontal translation in layout units.
    TranslateX,
    /// Vertical translation in layout units.
    TranslateY,
    /// Uniform scale factor.
    Scale,
}

/// A map of animatable properties to target values.
///
/// Backed by a `BTreeMap` so iteration order, serialization, and equality are
/// all deterministic for a given set of entries.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Snapshot(BTreeMap<Property, f64>);

impl Snapshot {
    /// An empty snapshot.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Iterate the properties in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = (Property, f64)> + '_ {
        self.0.iter().map(|(p, v)| (*p, *v))
    }

    /// Set a property, returning the snapshot for chaining.
    pub fn with(mut self, prop: Property, value: f64) -> Self {
        self.0.insert(prop, value);
        self
    }

    /// Read a property value, if present.
    pub fn get(&self, prop: Property) -> Option<f64> {
        self.0.get(&prop).copied()
    }

    /// True when no properties are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Transition parameters attached to a resolved variant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timing {
    /// Transition duration in seconds.
    #[serde(default = "default_duration")]
    pub duration_s: f64,
    /// Delay before the transition starts, in seconds.
    #[serde(default)]
    pub delay_s: f64,
    /// Easing curve applied over the duration.
    #[serde(default)]
    pub easing: BezierEasing,
}

fn default_duration() -> f64 {
    DEFAULT_DURATION_S
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            duration_s: DEFAULT_DURATION_S,
            delay_s: 0.0,
            easing: BezierEasing::default(),
        }
    }
}

impl Timing {
    /// A zero-length timing: the end state applies with no transition.
    ///
    /// Used for the pre-interactive default and for the reduced-motion bypass.
    pub fn instant() -> Self {
        Self {
            duration_s: 0.0,
            delay_s: 0.0,
            easing: BezierEasing::linear(),
        }
    }

    /// Return this timing with an extra delay added on top.
    pub fn with_added_delay(mut self, delay_s: f64) -> Self {
        self.delay_s += delay_s;
        self
    }
}

/// A declarative animation variant: either a named preset or a custom
/// hidden/visible snapshot pair supplied by the caller.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum VariantSpec {
    /// Opacity 0 → 1, no positional change.
    FadeIn,
    /// Opacity 0 → 1, enters moving up from below (`translateY +distance → 0`).
    SlideUp,
    /// Opacity 0 → 1, enters moving left from the right (`translateX +distance → 0`).
    SlideLeft,
    /// Opacity 0 → 1, enters moving right from the left (`translateX -distance → 0`).
    SlideRight,
    /// Opacity 0 → 1, scale 0.95 → 1.
    ZoomIn,
    /// Caller-supplied snapshots; the resolver validates but never interprets them.
    Custom {
        /// Property values before the region is revealed.
        hidden: Snapshot,
        /// Property values once the region is revealed.
        visible: Snapshot,
    },
}

impl Default for VariantSpec {
    fn default() -> Self {
        Self::SlideUp
    }
}

impl VariantSpec {
    /// Validate a custom spec for strict embedders.
    ///
    /// Preset variants are always valid. A custom variant must carry at least
    /// one property on each side.
    pub fn validate(&self) -> UnveilResult<()> {
        if let Self::Custom { hidden, visible } = self {
            if hidden.is_empty() || visible.is_empty() {
                return Err(UnveilError::variant(
                    "custom variant requires non-empty hidden and visible snapshots",
                ));
            }
        }
        Ok(())
    }
}

/// A fully resolved variant: the hidden/visible snapshot pair plus timing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResolvedVariant {
    /// Property values before reveal.
    pub hidden: Snapshot,
    /// Property values after reveal.
    pub visible: Snapshot,
    /// Transition parameters between the two snapshots.
    pub timing: Timing,
}

/// Resolve a variant spec into its hidden/visible snapshot pair.
///
/// Resolution is pure and deterministic: identical inputs always yield
/// identical snapshot pairs. A custom spec with a missing side falls back to
/// [`VariantSpec::FadeIn`] with default timing rather than failing — the
/// engine never fails hidden.
pub fn resolve(spec: &VariantSpec, distance: f64, timing: Timing) -> ResolvedVariant {
    let (hidden, visible) = match spec {
        VariantSpec::FadeIn => (
            Snapshot::new().with(Property::Opacity, 0.0),
            Snapshot::new().with(Property::Opacity, 1.0),
        ),
        VariantSpec::SlideUp => (
            Snapshot::new()
                .with(Property::Opacity, 0.0)
                .with(Property::TranslateY, distance),
            Snapshot::new()
                .with(Property::Opacity, 1.0)
                .with(Property::TranslateY, 0.0),
        ),
        VariantSpec::SlideLeft => (
            Snapshot::new()
                .with(Property::Opacity, 0.0)
                .with(Property::TranslateX, distance),
            Snapshot::new()
                .with(Property::Opacity, 1.0)
                .with(Property::TranslateX, 0.0),
        ),
        VariantSpec::SlideRight => (
            Snapshot::new()
                .with(Property::Opacity, 0.0)
                .with(Property::TranslateX, -distance),
            Snapshot::new()
                .with(Property::Opacity, 1.0)
                .with(Property::TranslateX, 0.0),
        ),
        VariantSpec::ZoomIn => (
            Snapshot::new()
                .with(Property::Opacity, 0.0)
                .with(Property::Scale, ZOOM_IN_FROM_SCALE),
            Snapshot::new()
                .with(Property::Opacity, 1.0)
                .with(Property::Scale, 1.0),
        ),
        VariantSpec::Custom { hidden, visible } => {
            if hidden.is_empty() || visible.is_empty() {
                tracing::warn!("custom variant with empty snapshot, falling back to FadeIn");
                return resolve(&VariantSpec::FadeIn, distance, Timing::default());
            }
            (hidden.clone(), visible.clone())
        }
    };

    ResolvedVariant {
        hidden,
        visible,
        timing,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/variant.rs"]
mod tests;
