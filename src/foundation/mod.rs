//! Foundation types shared by every other module.

/// Error taxonomy and result alias.
pub mod error;
