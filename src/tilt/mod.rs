//! The pointer-tilt subsystem, independent of the reveal chain.

/// Pointer offset to bounded rotation angles.
pub mod controller;
/// Base rotation and interactive layer routing.
pub mod surface;
