//! Pure animation primitives: easing curves, variant resolution, and bounded
//! stagger planning. Everything in this module is deterministic and free of
//! host state.

/// Cubic-bezier easing evaluation.
pub mod ease;
/// Bounded per-child delay planning for container regions.
pub mod stagger;
/// Variant specs and hidden/visible snapshot resolution.
pub mod variant;
