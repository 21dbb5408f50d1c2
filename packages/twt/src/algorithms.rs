//! MAC algorithms available for token digests

use crate::error::TwtError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hash function underlying the HMAC of a token.
///
/// Serialized with its canonical lowercase name (`"md5"`, `"sha3-256"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MacAlgorithm {
    /// HMAC-MD5, the canonical token algorithm
    #[default]
    #[serde(rename = "md5")]
    Md5,
    /// HMAC-SHA1, used by dot-separated legacy tokens
    #[serde(rename = "sha1")]
    Sha1,
    /// HMAC-SHA256
    #[serde(rename = "sha256")]
    Sha256,
    /// HMAC-SHA384
    #[serde(rename = "sha384")]
    Sha384,
    /// HMAC-SHA512
    #[serde(rename = "sha512")]
    Sha512,
    /// HMAC-SHA3-256
    #[serde(rename = "sha3-256")]
    Sha3_256,
    /// HMAC-SHA3-512
    #[serde(rename = "sha3-512")]
    Sha3_512,
}

impl MacAlgorithm {
    /// Every supported algorithm
    pub const ALL: [MacAlgorithm; 7] = [
        MacAlgorithm::Md5,
        MacAlgorithm::Sha1,
        MacAlgorithm::Sha256,
        MacAlgorithm::Sha384,
        MacAlgorithm::Sha512,
        MacAlgorithm::Sha3_256,
        MacAlgorithm::Sha3_512,
    ];

    /// Canonical lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MacAlgorithm::Md5 => "md5",
            MacAlgorithm::Sha1 => "sha1",
            MacAlgorithm::Sha256 => "sha256",
            MacAlgorithm::Sha384 => "sha384",
            MacAlgorithm::Sha512 => "sha512",
            MacAlgorithm::Sha3_256 => "sha3-256",
            MacAlgorithm::Sha3_512 => "sha3-512",
        }
    }

    /// Raw MAC output size in bytes
    #[must_use]
    pub const fn output_size(self) -> usize {
        match self {
            MacAlgorithm::Md5 => 16,
            MacAlgorithm::Sha1 => 20,
            MacAlgorithm::Sha256 | MacAlgorithm::Sha3_256 => 32,
            MacAlgorithm::Sha384 => 48,
            MacAlgorithm::Sha512 | MacAlgorithm::Sha3_512 => 64,
        }
    }

    /// Length of the full lowercase hex digest, the upper bound for truncation
    #[must_use]
    pub const fn hex_len(self) -> usize {
        self.output_size() * 2
    }
}

impl fmt::Display for MacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MacAlgorithm {
    type Err = TwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "md5" | "hmac-md5" => Ok(MacAlgorithm::Md5),
            "sha1" | "sha-1" | "hmac-sha1" => Ok(MacAlgorithm::Sha1),
            "sha256" | "sha-256" | "hmac-sha256" | "hs256" => Ok(MacAlgorithm::Sha256),
            "sha384" | "sha-384" | "hmac-sha384" | "hs384" => Ok(MacAlgorithm::Sha384),
            "sha512" | "sha-512" | "hmac-sha512" | "hs512" => Ok(MacAlgorithm::Sha512),
            "sha3-256" | "hmac-sha3-256" => Ok(MacAlgorithm::Sha3_256),
            "sha3-512" | "hmac-sha3-512" => Ok(MacAlgorithm::Sha3_512),
            _ => Err(TwtError::unsupported_algorithm(s)),
        }
    }
}
