//! TWT error types

use thiserror::Error;

/// TWT operation result type
pub type TwtResult<T> = Result<T, TwtError>;

/// TWT error types
///
/// Only [`TwtError::InvalidMac`] is produced while handling tokens. The other
/// variants reject a configuration before any token is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TwtError {
    /// Presented digest does not match the recomputed one.
    ///
    /// Covers a tampered payload, a tampered digest, a wrong secret and a
    /// malformed token alike. The variant carries nothing about which of
    /// those happened.
    #[error("Invalid token MAC")]
    InvalidMac,

    /// Digest length outside `1..=max` for the configured algorithm
    #[error("Invalid digest length {requested}: expected 1..={max} hex characters")]
    InvalidDigestLength {
        /// Requested number of hex characters
        requested: usize,
        /// Full hex digest length of the algorithm
        max: usize,
    },

    /// Unknown MAC algorithm name
    #[error("Unsupported MAC algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// MAC key setup failed
    #[error("MAC initialization error: {0}")]
    MacInitialization(String),

    /// Configuration could not be parsed
    #[error("Invalid token configuration: {0}")]
    InvalidConfig(String),
}

impl TwtError {
    /// Create an unsupported algorithm error
    #[inline]
    #[must_use]
    pub fn unsupported_algorithm(name: impl Into<String>) -> Self {
        Self::UnsupportedAlgorithm(name.into())
    }

    /// Create an invalid configuration error
    #[inline]
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// True when the error is an authentication failure rather than a
    /// configuration problem
    #[inline]
    #[must_use]
    pub fn is_invalid_mac(&self) -> bool {
        matches!(self, Self::InvalidMac)
    }
}
