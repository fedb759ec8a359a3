//! Accessibility and device policy: reduced-motion resolution and shared
//! viewport tracking.

/// Effective animation policy resolution.
pub mod motion;
/// Reference-counted resize subscription hub.
pub mod viewport;
