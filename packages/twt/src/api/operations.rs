//! Token signing, verification and decoding

use super::validation::{is_well_formed, tail_start};
use crate::crypto::hmac::{digests_match, truncated_hex_digest};
use crate::error::{TwtError, TwtResult};
use crate::types::{TokenConfig, TokenParts};

/// Signs and checks tokens for one validated [`TokenConfig`].
///
/// Holds no secret and no mutable state; copy it freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenCodec {
    config: TokenConfig,
}

impl TokenCodec {
    /// Codec for `config`, rejected if its digest length does not fit the
    /// algorithm
    pub fn new(config: TokenConfig) -> TwtResult<Self> {
        config.validate()?;
        tracing::debug!(
            algorithm = %config.algorithm,
            digest_length = config.digest_length,
            separator = ?config.separator,
            "token codec configured"
        );
        Ok(Self { config })
    }

    /// Codec for the canonical variant (HMAC-MD5, 32 hex chars, no separator)
    #[must_use]
    pub const fn canonical() -> Self {
        Self {
            config: TokenConfig::canonical(),
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &TokenConfig {
        &self.config
    }

    /// Sign `payload`, producing `payload [separator] digest`
    pub fn sign(&self, payload: &str, secret: impl AsRef<[u8]>) -> TwtResult<String> {
        let digest = self.digest(payload, secret.as_ref())?;

        let mut token = String::with_capacity(payload.len() + self.config.suffix_len());
        token.push_str(payload);
        if let Some(separator) = self.config.separator {
            token.push(separator);
        }
        token.push_str(&digest);

        tracing::trace!(
            algorithm = %self.config.algorithm,
            payload_len = payload.len(),
            "signed token"
        );
        Ok(token)
    }

    /// Verify `token` under `secret` and return its payload.
    ///
    /// # Errors
    ///
    /// [`TwtError::InvalidMac`] whenever the presented digest differs from the
    /// recomputed one, including wrong secrets and malformed tokens.
    pub fn verify<'t>(&self, token: &'t str, secret: impl AsRef<[u8]>) -> TwtResult<&'t str> {
        let parts = self.split(token);
        let expected = self.digest(parts.payload, secret.as_ref())?;

        if digests_match(expected.as_bytes(), parts.digest.as_bytes()) {
            tracing::trace!(payload_len = parts.payload.len(), "token verified");
            Ok(parts.payload)
        } else {
            tracing::debug!(
                algorithm = %self.config.algorithm,
                token_len = token.len(),
                "token MAC mismatch"
            );
            Err(TwtError::InvalidMac)
        }
    }

    /// Extract the payload **without** verifying the MAC.
    ///
    /// The result is not authenticated: anyone can forge a token that decodes
    /// to any payload. Use it for inspection only and never for trust
    /// decisions; call [`TokenCodec::verify`] for those. Malformed tokens
    /// decode on a best-effort basis and never fail.
    #[must_use]
    pub fn decode<'t>(&self, token: &'t str) -> &'t str {
        self.split(token).payload
    }

    /// Structural check of the token layout; the MAC is not checked
    #[must_use]
    pub fn validate(&self, token: &str) -> bool {
        is_well_formed(&self.config, token)
    }

    /// Split `token` into payload and presented digest.
    ///
    /// The digest is the last `digest_length` characters. With a separator it
    /// must sit immediately before them; otherwise the last occurrence of the
    /// separator is used, and a token without any separator is all payload.
    /// Without a separator, a token shorter than the digest is all digest.
    #[must_use]
    pub fn split<'t>(&self, token: &'t str) -> TokenParts<'t> {
        let tail = tail_start(token, self.config.digest_length);

        let Some(separator) = self.config.separator else {
            return match tail {
                Some(start) => TokenParts {
                    payload: &token[..start],
                    digest: &token[start..],
                },
                None => TokenParts {
                    payload: "",
                    digest: token,
                },
            };
        };

        if let Some(start) = tail {
            if let Some(payload) = token[..start].strip_suffix(separator) {
                return TokenParts {
                    payload,
                    digest: &token[start..],
                };
            }
        }

        match token.rsplit_once(separator) {
            Some((payload, digest)) => TokenParts { payload, digest },
            None => TokenParts {
                payload: token,
                digest: "",
            },
        }
    }

    fn digest(&self, payload: &str, secret: &[u8]) -> TwtResult<String> {
        truncated_hex_digest(
            self.config.algorithm,
            secret,
            payload.as_bytes(),
            self.config.digest_length,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::MacAlgorithm;

    #[test]
    fn test_sign_canonical_vector() {
        let token = TokenCodec::canonical().sign("hello", "secret").unwrap();
        assert_eq!(token, "hellobade63863c61ed0b3165806ecd6acefc");
    }

    #[test]
    fn test_sign_truncated_vector() {
        let codec = TokenCodec::new(TokenConfig::canonical().with_digest_length(10)).unwrap();
        assert_eq!(codec.sign("hello", "secret").unwrap(), "hellobade63863c");
    }

    #[test]
    fn test_new_rejects_oversized_digest() {
        let err = TokenCodec::new(TokenConfig::canonical().with_digest_length(64)).unwrap_err();
        assert_eq!(
            err,
            TwtError::InvalidDigestLength {
                requested: 64,
                max: 32
            }
        );
    }

    #[test]
    fn test_verify_returns_borrowed_payload() {
        let codec = TokenCodec::canonical();
        let token = "hellobade63863c61ed0b3165806ecd6acefc";
        assert_eq!(codec.verify(token, "secret"), Ok("hello"));
        assert_eq!(codec.verify(token, "wrong-secret"), Err(TwtError::InvalidMac));
    }

    #[test]
    fn test_verify_rejects_short_token() {
        let codec = TokenCodec::canonical();
        assert_eq!(codec.verify("", "secret"), Err(TwtError::InvalidMac));
        assert_eq!(codec.verify("bade6386", "secret"), Err(TwtError::InvalidMac));
    }

    #[test]
    fn test_split_without_separator_is_positional() {
        let codec = TokenCodec::new(TokenConfig::canonical().with_digest_length(4)).unwrap();
        let parts = codec.split("a.b.cabcd");
        assert_eq!(parts.payload, "a.b.c");
        assert_eq!(parts.digest, "abcd");

        let parts = codec.split("ab");
        assert_eq!(parts.payload, "");
        assert_eq!(parts.digest, "ab");
    }

    #[test]
    fn test_split_anchors_separator_from_the_right() {
        let codec = TokenCodec::new(TokenConfig::legacy_dotted()).unwrap();
        let token = codec.sign("a.b.c", "k").unwrap();
        let parts = codec.split(&token);
        assert_eq!(parts.payload, "a.b.c");
        assert_eq!(parts.digest.len(), 40);
    }

    #[test]
    fn test_split_separator_fallbacks() {
        let codec = TokenCodec::new(TokenConfig::legacy_dotted()).unwrap();
        let parts = codec.split("hello.invalid hmac");
        assert_eq!(parts.payload, "hello");
        assert_eq!(parts.digest, "invalid hmac");

        let parts = codec.split("no separator here");
        assert_eq!(parts.payload, "no separator here");
        assert_eq!(parts.digest, "");
    }

    #[test]
    fn test_multibyte_payload_round_trip() {
        let codec = TokenCodec::canonical();
        let token = codec.sign("héllo wörld ✓", "secret").unwrap();
        assert_eq!(codec.verify(&token, "secret"), Ok("héllo wörld ✓"));
        assert_eq!(codec.decode(&token), "héllo wörld ✓");
    }

    #[test]
    fn test_multibyte_separator() {
        let config = TokenConfig::full_digest(MacAlgorithm::Sha256).with_separator(Some('§'));
        let codec = TokenCodec::new(config).unwrap();
        let token = codec.sign("x§y", "secret").unwrap();
        assert!(codec.validate(&token));
        assert_eq!(token.chars().count(), config.token_len(3));
        assert_eq!(codec.verify(&token, "secret"), Ok("x§y"));
    }

    #[test]
    fn test_default_codec_is_canonical() {
        assert_eq!(TokenCodec::default(), TokenCodec::canonical());
    }
}
