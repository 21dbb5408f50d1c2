//! TWT Builder API - Entry point structs and configuration methods

use super::operations::TokenCodec;
use crate::algorithms::MacAlgorithm;
use crate::error::TwtResult;
use crate::types::{DEFAULT_DIGEST_LENGTH, LEGACY_SEPARATOR, TokenConfig};

/// Direct entry point for token operations
pub struct Twt;

impl Twt {
    /// Builder starting from the canonical configuration
    #[inline]
    #[must_use]
    pub fn builder() -> TwtBuilder {
        TwtBuilder::new()
    }

    /// Canonical codec, no configuration needed
    #[inline]
    #[must_use]
    pub fn codec() -> TokenCodec {
        TokenCodec::canonical()
    }

    /// Algorithm-first builder entry point
    #[inline]
    #[must_use]
    pub fn hmac() -> TwtMasterBuilder {
        TwtMasterBuilder
    }
}

/// Picks the MAC algorithm, keeping its full digest unless told otherwise
#[derive(Debug, Clone, Copy, Default)]
pub struct TwtMasterBuilder;

impl TwtMasterBuilder {
    /// HMAC-MD5, full 32 hex characters
    #[must_use]
    pub fn md5(self) -> TwtBuilder {
        TwtBuilder::new().with_algorithm(MacAlgorithm::Md5).with_full_digest()
    }

    /// HMAC-SHA1, full 40 hex characters
    #[must_use]
    pub fn sha1(self) -> TwtBuilder {
        TwtBuilder::new().with_algorithm(MacAlgorithm::Sha1).with_full_digest()
    }

    /// HMAC-SHA256, full 64 hex characters
    #[must_use]
    pub fn sha256(self) -> TwtBuilder {
        TwtBuilder::new().with_algorithm(MacAlgorithm::Sha256).with_full_digest()
    }

    /// HMAC-SHA384, full 96 hex characters
    #[must_use]
    pub fn sha384(self) -> TwtBuilder {
        TwtBuilder::new().with_algorithm(MacAlgorithm::Sha384).with_full_digest()
    }

    /// HMAC-SHA512, full 128 hex characters
    #[must_use]
    pub fn sha512(self) -> TwtBuilder {
        TwtBuilder::new().with_algorithm(MacAlgorithm::Sha512).with_full_digest()
    }

    /// HMAC-SHA3-256, full 64 hex characters
    #[must_use]
    pub fn sha3_256(self) -> TwtBuilder {
        TwtBuilder::new().with_algorithm(MacAlgorithm::Sha3_256).with_full_digest()
    }

    /// HMAC-SHA3-512, full 128 hex characters
    #[must_use]
    pub fn sha3_512(self) -> TwtBuilder {
        TwtBuilder::new().with_algorithm(MacAlgorithm::Sha3_512).with_full_digest()
    }

    /// Dot-separated full HMAC-SHA1, the legacy token layout
    #[must_use]
    pub fn legacy_dotted(self) -> TwtBuilder {
        self.sha1().with_separator(LEGACY_SEPARATOR)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DigestLength {
    Fixed(usize),
    Full,
}

/// Token configuration builder.
///
/// Starts at the canonical layout. Nothing is validated until
/// [`TwtBuilder::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwtBuilder {
    algorithm: MacAlgorithm,
    digest_length: DigestLength,
    separator: Option<char>,
}

impl TwtBuilder {
    /// Builder with the canonical defaults
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            algorithm: MacAlgorithm::default(),
            digest_length: DigestLength::Fixed(DEFAULT_DIGEST_LENGTH),
            separator: None,
        }
    }

    /// Set the MAC algorithm
    #[inline]
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: MacAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Keep the first `digest_length` hex characters of the MAC
    #[inline]
    #[must_use]
    pub fn with_digest_length(mut self, digest_length: usize) -> Self {
        self.digest_length = DigestLength::Fixed(digest_length);
        self
    }

    /// Keep the whole MAC, whatever algorithm is finally chosen
    #[inline]
    #[must_use]
    pub fn with_full_digest(mut self) -> Self {
        self.digest_length = DigestLength::Full;
        self
    }

    /// Place `separator` between payload and digest
    #[inline]
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Concatenate payload and digest directly
    #[inline]
    #[must_use]
    pub fn without_separator(mut self) -> Self {
        self.separator = None;
        self
    }

    /// Resolved configuration, not yet validated
    #[must_use]
    pub fn config(&self) -> TokenConfig {
        let digest_length = match self.digest_length {
            DigestLength::Fixed(length) => length,
            DigestLength::Full => self.algorithm.hex_len(),
        };
        TokenConfig {
            algorithm: self.algorithm,
            digest_length,
            separator: self.separator,
        }
    }

    /// Validate the configuration and produce a codec
    pub fn build(self) -> TwtResult<TokenCodec> {
        TokenCodec::new(self.config())
    }
}

impl Default for TwtBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl From<TokenConfig> for TwtBuilder {
    fn from(config: TokenConfig) -> Self {
        Self {
            algorithm: config.algorithm,
            digest_length: DigestLength::Fixed(config.digest_length),
            separator: config.separator,
        }
    }
}
