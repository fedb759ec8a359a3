/// Convenience result type used across Unveil.
pub type UnveilResult<T> = Result<T, UnveilError>;

/// Top-level error taxonomy used by engine APIs.
///
/// The reveal path itself never surfaces errors: degenerate input is resolved
/// to a safe visible default (content must never fail hidden). These variants
/// exist for the explicit validation entry points embedders can opt into,
/// such as [`crate::RegionConfig::validate`].
#[derive(thiserror::Error, Debug)]
pub enum UnveilError {
    /// Invalid user-provided configuration data.
    #[error("config error: {0}")]
    Config(String),

    /// Errors while validating variant or timing specifications.
    #[error("variant error: {0}")]
    Variant(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UnveilError {
    /// Build a [`UnveilError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`UnveilError::Variant`] value.
    pub fn variant(msg: impl Into<String>) -> Self {
        Self::Variant(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
