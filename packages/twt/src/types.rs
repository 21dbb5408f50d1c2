//! TWT type definitions

use crate::algorithms::MacAlgorithm;
use crate::error::{TwtError, TwtResult};
use serde::{Deserialize, Serialize};

/// Digest length of the canonical token variant (full HMAC-MD5)
pub const DEFAULT_DIGEST_LENGTH: usize = 32;

/// Separator used by legacy dot-framed tokens
pub const LEGACY_SEPARATOR: char = '.';

/// Token layout: MAC algorithm, digest truncation and framing.
///
/// The default is the canonical variant: HMAC-MD5, 32 hex characters, no
/// separator. Missing fields take those defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// MAC algorithm
    pub algorithm: MacAlgorithm,
    /// Number of leading hex characters of the MAC kept in the token
    pub digest_length: usize,
    /// Character placed between payload and digest, if any
    pub separator: Option<char>,
}

impl TokenConfig {
    /// Canonical variant: HMAC-MD5, 32 hex characters, no separator
    #[must_use]
    pub const fn canonical() -> Self {
        Self {
            algorithm: MacAlgorithm::Md5,
            digest_length: DEFAULT_DIGEST_LENGTH,
            separator: None,
        }
    }

    /// Legacy variant: `payload.` followed by the full HMAC-SHA1 hex digest
    #[must_use]
    pub const fn legacy_dotted() -> Self {
        Self {
            algorithm: MacAlgorithm::Sha1,
            digest_length: MacAlgorithm::Sha1.hex_len(),
            separator: Some(LEGACY_SEPARATOR),
        }
    }

    /// No separator, untruncated digest of `algorithm`
    #[must_use]
    pub const fn full_digest(algorithm: MacAlgorithm) -> Self {
        Self {
            algorithm,
            digest_length: algorithm.hex_len(),
            separator: None,
        }
    }

    /// Replace the algorithm
    #[must_use]
    pub const fn with_algorithm(mut self, algorithm: MacAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Replace the digest length
    #[must_use]
    pub const fn with_digest_length(mut self, digest_length: usize) -> Self {
        self.digest_length = digest_length;
        self
    }

    /// Replace the separator
    #[must_use]
    pub const fn with_separator(mut self, separator: Option<char>) -> Self {
        self.separator = separator;
        self
    }

    /// Check `0 < digest_length <= algorithm.hex_len()`
    pub fn validate(&self) -> TwtResult<()> {
        let max = self.algorithm.hex_len();
        if self.digest_length == 0 || self.digest_length > max {
            return Err(TwtError::InvalidDigestLength {
                requested: self.digest_length,
                max,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration such as
    /// `{"algorithm": "sha256", "digest_length": 16, "separator": "."}`
    pub fn from_json(json: &str) -> TwtResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| TwtError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Characters a token adds after the payload: separator plus digest
    #[must_use]
    pub const fn suffix_len(&self) -> usize {
        self.digest_length + if self.separator.is_some() { 1 } else { 0 }
    }

    /// Length in characters of a token signed over a payload of
    /// `payload_chars` characters
    #[must_use]
    pub const fn token_len(&self, payload_chars: usize) -> usize {
        payload_chars + self.suffix_len()
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self::canonical()
    }
}

/// Token split into payload and presented digest, borrowed from the token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenParts<'a> {
    /// Everything before the digest (and separator)
    pub payload: &'a str,
    /// Trailing digest segment as presented, possibly malformed
    pub digest: &'a str,
}
