use kurbo::{Point, Rect, Vec2};

use crate::animation::variant::Timing;

/// Default interactive tilt magnitude, in degrees.
pub const DEFAULT_STRENGTH_DEG: f64 = 15.0;

/// Tuning for one tilt controller.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TiltSettings {
    /// Maximum rotation magnitude in degrees; reached at the element edges.
    pub strength_deg: f64,
    /// When false the controller is inert: constant zero output, and the
    /// embedder should not attach pointer listeners at all.
    pub enabled: bool,
}

impl Default for TiltSettings {
    fn default() -> Self {
        Self {
            strength_deg: DEFAULT_STRENGTH_DEG,
            enabled: true,
        }
    }
}

/// Interactive rotation derived from the pointer position.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TiltAngles {
    /// Rotation around the x axis, in degrees.
    pub rotate_x: f64,
    /// Rotation around the y axis, in degrees.
    pub rotate_y: f64,
}

impl TiltAngles {
    /// The neutral, centered output.
    pub const ZERO: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };
}

/// Converts pointer position relative to an element's bounds into bounded
/// rotation angles, with a timed reset on pointer leave.
///
/// The offset is normalized so `(0, 0)` is the element center and each axis
/// spans `[-0.5, 0.5]`, with the edges mapping to the full `±strength`
/// rotation; moving the pointer right tilts the right edge away from the
/// viewer (positive `rotate_y`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltController {
    settings: TiltSettings,
    offset: Option<Vec2>,
}

impl TiltController {
    /// Build a controller.
    pub fn new(settings: TiltSettings) -> Self {
        Self {
            settings,
            offset: None,
        }
    }

    /// Whether the embedder should attach pointer listeners for this
    /// controller. Disabled controllers never need them.
    pub fn wants_pointer_listeners(&self) -> bool {
        self.settings.enabled
    }

    /// The last normalized pointer offset, or `None` when the pointer is
    /// outside or absent.
    pub fn offset(&self) -> Option<Vec2> {
        self.offset
    }

    /// The current interactive angles.
    pub fn angles(&self) -> TiltAngles {
        let Some(offset) = self.offset else {
            return TiltAngles::ZERO;
        };
        if !self.settings.enabled {
            return TiltAngles::ZERO;
        }
        // The offset spans [-0.5, 0.5]; the element edge maps to the full
        // ±strength rotation, so the half-unit range is rescaled to ±1.
        TiltAngles {
            rotate_x: -offset.y * 2.0 * self.settings.strength_deg,
            rotate_y: offset.x * 2.0 * self.settings.strength_deg,
        }
    }

    /// Process a pointer move within the element's bounding box.
    ///
    /// Degenerate bounds (zero width or height) normalize to the center, so
    /// the output is always finite.
    pub fn pointer_move(&mut self, position: Point, bounds: Rect) -> TiltAngles {
        if !self.settings.enabled {
            return TiltAngles::ZERO;
        }
        self.offset = Some(normalized_offset(position, bounds));
        self.angles()
    }

    /// Process the pointer leaving the element.
    ///
    /// Clears the offset and returns the timing with which the embedder
    /// should tween the angles back to zero (the crate's standard entrance
    /// timing model).
    pub fn pointer_leave(&mut self) -> Timing {
        self.offset = None;
        Timing::default()
    }
}

/// Normalize `position` against `bounds` to `[-0.5, 0.5]` per axis.
fn normalized_offset(position: Point, bounds: Rect) -> Vec2 {
    let center = bounds.center();
    let x = if bounds.width() > 0.0 {
        ((position.x - center.x) / bounds.width()).clamp(-0.5, 0.5)
    } else {
        0.0
    };
    let y = if bounds.height() > 0.0 {
        ((position.y - center.y) / bounds.height()).clamp(-0.5, 0.5)
    } else {
        0.0
    };
    Vec2::new(x, y)
}

#[cfg(test)]
#[path = "../../tests/unit/tilt/controller.rs"]
mod tests;
