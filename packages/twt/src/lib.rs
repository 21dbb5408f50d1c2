//! Compact HMAC-signed payload tokens (TWT)
//!
//! A token is `payload || [separator] || digest`, where `digest` is the
//! lowercase hex HMAC of the payload under a shared secret, truncated to a
//! configurable number of characters. The canonical layout is HMAC-MD5, 32
//! hex characters, no separator:
//!
//! ```
//! # fn main() -> twt::TwtResult<()> {
//! let token = twt::sign("hello", "secret")?;
//! assert_eq!(token, "hellobade63863c61ed0b3165806ecd6acefc");
//! assert_eq!(twt::verify(&token, "secret")?, "hello");
//! assert!(twt::verify(&token, "wrong-secret").is_err());
//!
//! let short = twt::Twt::builder().with_digest_length(10).build()?;
//! assert_eq!(short.sign("hello", "secret")?, "hellobade63863c");
//! # Ok(())
//! # }
//! ```
//!
//! Other layouts, including the dot-separated HMAC-SHA1 tokens of earlier
//! versions, are configuration only: see [`TokenConfig`] and [`Twt`].

#![forbid(unsafe_code)]

pub mod algorithms;
pub mod api;
pub(crate) mod crypto;
mod error;
mod types;

pub use algorithms::MacAlgorithm;
pub use api::{TokenCodec, Twt, TwtBuilder, TwtMasterBuilder};
pub use error::*;
pub use types::*;

/// Sign `payload` with the canonical layout
pub fn sign(payload: &str, secret: impl AsRef<[u8]>) -> TwtResult<String> {
    TokenCodec::canonical().sign(payload, secret)
}

/// Verify a canonical token and return its payload.
///
/// Fails with [`TwtError::InvalidMac`] for a tampered token or a wrong secret.
pub fn verify(token: &str, secret: impl AsRef<[u8]>) -> TwtResult<&str> {
    TokenCodec::canonical().verify(token, secret)
}

/// Payload of a canonical token, **unverified**.
///
/// Never use the result for trust decisions; see [`TokenCodec::decode`].
#[must_use]
pub fn decode(token: &str) -> &str {
    TokenCodec::canonical().decode(token)
}

/// Whether `token` has the canonical shape; the MAC is not checked
#[must_use]
pub fn validate(token: &str) -> bool {
    TokenCodec::canonical().validate(token)
}
