use kurbo::{CubicBez, ParamCurve, ParamCurveDeriv, Point};

/// A 4-point cubic-bezier easing curve with anchors fixed at (0,0) and (1,1).
///
/// `x1/y1` and `x2/y2` are the two inner control points, in the same
/// convention as CSS `cubic-bezier()`. The horizontal coordinates are clamped
/// to `[0, 1]` on construction so the curve stays a function of progress.
///
/// Evaluation is pure: the same `(curve, t)` pair always produces the same
/// eased value, which is what makes resolved variants reproducible.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BezierEasing {
    /// X of the first inner control point, in `[0, 1]`.
    pub x1: f64,
    /// Y of the first inner control point.
    pub y1: f64,
    /// X of the second inner control point, in `[0, 1]`.
    pub x2: f64,
    /// Y of the second inner control point.
    pub y2: f64,
}

impl BezierEasing {
    /// Build an easing curve, clamping the x control coordinates to `[0, 1]`.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }

    /// Identity easing (straight line).
    pub fn linear() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    /// Evaluate the eased value for linear progress `t` in `[0, 1]`.
    ///
    /// `t` outside the unit interval is clamped, matching the sampling
    /// contract of every other timing primitive in the crate.
    pub fn sample(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        let curve = self.as_cubic();
        let s = solve_x_for(curve, t);
        curve.eval(s).y
    }

    fn as_cubic(&self) -> CubicBez {
        CubicBez::new(
            Point::new(0.0, 0.0),
            Point::new(self.x1, self.y1),
            Point::new(self.x2, self.y2),
            Point::new(1.0, 1.0),
        )
    }
}

impl Default for BezierEasing {
    /// The crate-wide default entrance easing, `cubic-bezier(0.215, 0.61, 0.355, 1)`.
    fn default() -> Self {
        Self::new(0.215, 0.61, 0.355, 1.0)
    }
}

impl From<[f64; 4]> for BezierEasing {
    fn from(v: [f64; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<BezierEasing> for [f64; 4] {
    fn from(e: BezierEasing) -> Self {
        [e.x1, e.y1, e.x2, e.y2]
    }
}

/// Invert x(s) = x for the curve parameter `s`.
///
/// Newton iterations first; if the derivative is too flat to converge, fall
/// back to bisection. x is monotone because both inner x coordinates are
/// clamped to the unit interval.
fn solve_x_for(curve: CubicBez, x: f64) -> f64 {
    let deriv = curve.deriv();
    let mut s = x;
    for _ in 0..8 {
        let err = curve.eval(s).x - x;
        if err.abs() < 1e-7 {
            return s;
        }
        let slope = deriv.eval(s).x;
        if slope.abs() < 1e-6 {
            break;
        }
        s = (s - err / slope).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    for _ in 0..32 {
        s = 0.5 * (lo + hi);
        if curve.eval(s).x < x {
            lo = s;
        } else {
            hi = s;
        }
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
