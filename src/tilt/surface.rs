use kurbo::{Point, Rect};

use crate::animation::variant::Timing;
use crate::tilt::controller::{DEFAULT_STRENGTH_DEG, TiltController, TiltSettings};

/// Which element receives the computed rotation transform.
///
/// Pure routing: the choice has no effect on the angles themselves, it only
/// tells the embedder where to apply them (supporting layered parallax-like
/// composition).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LayerTarget {
    /// Apply the rotation to the surface element itself.
    #[default]
    Element,
    /// Propagate the rotation to a nested interactive layer.
    NestedLayer,
}

/// Static rotation applied to the surface regardless of pointer state.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BaseRotation {
    /// Rotation around the x axis, in degrees.
    pub x: f64,
    /// Rotation around the y axis, in degrees.
    pub y: f64,
    /// Rotation around the z axis, in degrees.
    pub z: f64,
}

/// Configuration for a tilt surface.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TiltSurfaceConfig {
    /// Whether the surface responds to the pointer at all.
    pub interactive: bool,
    /// Maximum interactive rotation magnitude in degrees.
    pub strength_deg: f64,
    /// Where the computed rotation is routed.
    pub layer: LayerTarget,
    /// Static rotation composed additively with the interactive component.
    pub base: BaseRotation,
}

impl Default for TiltSurfaceConfig {
    fn default() -> Self {
        Self {
            interactive: true,
            strength_deg: DEFAULT_STRENGTH_DEG,
            layer: LayerTarget::Element,
            base: BaseRotation::default(),
        }
    }
}

/// The composed rotation for the embedder to apply.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltOutput {
    /// Which element the rotation targets.
    pub target: LayerTarget,
    /// Total rotation around the x axis, in degrees.
    pub rotate_x: f64,
    /// Total rotation around the y axis, in degrees.
    pub rotate_y: f64,
    /// Total rotation around the z axis, in degrees.
    pub rotate_z: f64,
    /// Tween timing for this update; `None` means track the pointer
    /// immediately, `Some` means animate (used for the leave reset).
    pub timing: Option<Timing>,
}

/// A tilt surface: base rotation plus an interactive [`TiltController`],
/// with layer routing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltSurface {
    config: TiltSurfaceConfig,
    controller: TiltController,
}

impl TiltSurface {
    /// Build a surface from its configuration.
    pub fn new(config: TiltSurfaceConfig) -> Self {
        let controller = TiltController::new(TiltSettings {
            strength_deg: config.strength_deg,
            enabled: config.interactive,
        });
        Self { config, controller }
    }

    /// Whether the embedder should attach pointer listeners.
    pub fn wants_pointer_listeners(&self) -> bool {
        self.controller.wants_pointer_listeners()
    }

    /// The surface's controller, for direct inspection.
    pub fn controller(&self) -> &TiltController {
        &self.controller
    }

    /// The current composed output with no pending tween.
    pub fn output(&self) -> TiltOutput {
        self.compose(None)
    }

    /// Process a pointer move; the result tracks the pointer immediately.
    pub fn pointer_move(&mut self, position: Point, bounds: Rect) -> TiltOutput {
        self.controller.pointer_move(position, bounds);
        self.compose(None)
    }

    /// Process a pointer leave; the result carries the reset tween timing.
    pub fn pointer_leave(&mut self) -> TiltOutput {
        let timing = self.controller.pointer_leave();
        self.compose(Some(timing))
    }

    fn compose(&self, timing: Option<Timing>) -> TiltOutput {
        // The interactive component is additive with the base rotation only
        // when the surface is interactive; a disabled controller reports zero
        // so the base rotation passes through unchanged.
        let angles = self.controller.angles();
        TiltOutput {
            target: self.config.layer,
            rotate_x: self.config.base.x + angles.rotate_x,
            rotate_y: self.config.base.y + angles.rotate_y,
            rotate_z: self.config.base.z,
            timing,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tilt/surface.rs"]
mod tests;
