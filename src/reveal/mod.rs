//! The reveal subsystem: region configuration, the authoritative state
//! machine, and the arena-backed engine that owns many regions.

/// Region configuration contract and defaults.
pub mod config;
/// Generational-handle arena over regions plus viewport fan-out.
pub mod engine;
/// The per-region state machine and its event/effect protocol.
pub mod region;
