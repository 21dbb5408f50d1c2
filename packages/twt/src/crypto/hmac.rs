//! HMAC digest computation for token signing and verification

use crate::algorithms::MacAlgorithm;
use crate::error::{TwtError, TwtResult};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};
use sha3::{Sha3_256, Sha3_512};
use subtle::ConstantTimeEq;

type HmacMd5 = Hmac<Md5>;
type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;
type HmacSha3_256 = Hmac<Sha3_256>;
type HmacSha3_512 = Hmac<Sha3_512>;

#[inline]
fn mac_bytes<M: Mac + KeyInit>(secret: &[u8], message: &[u8]) -> TwtResult<Vec<u8>> {
    let mut mac = <M as Mac>::new_from_slice(secret)
        .map_err(|e| TwtError::MacInitialization(e.to_string()))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Raw HMAC of `message` under `secret`
pub(crate) fn sign_raw(
    algorithm: MacAlgorithm,
    secret: &[u8],
    message: &[u8],
) -> TwtResult<Vec<u8>> {
    match algorithm {
        MacAlgorithm::Md5 => mac_bytes::<HmacMd5>(secret, message),
        MacAlgorithm::Sha1 => mac_bytes::<HmacSha1>(secret, message),
        MacAlgorithm::Sha256 => mac_bytes::<HmacSha256>(secret, message),
        MacAlgorithm::Sha384 => mac_bytes::<HmacSha384>(secret, message),
        MacAlgorithm::Sha512 => mac_bytes::<HmacSha512>(secret, message),
        MacAlgorithm::Sha3_256 => mac_bytes::<HmacSha3_256>(secret, message),
        MacAlgorithm::Sha3_512 => mac_bytes::<HmacSha3_512>(secret, message),
    }
}

/// Lowercase hex HMAC keeping only the first `digest_length` characters.
///
/// `digest_length` is clamped to the full hex length; configurations are
/// validated before reaching here.
pub(crate) fn truncated_hex_digest(
    algorithm: MacAlgorithm,
    secret: &[u8],
    message: &[u8],
    digest_length: usize,
) -> TwtResult<String> {
    let mut digest = hex::encode(sign_raw(algorithm, secret, message)?);
    digest.truncate(digest_length);
    Ok(digest)
}

/// Constant-time comparison of two digests.
///
/// Lengths are not secret; unequal lengths return false immediately.
#[inline]
pub(crate) fn digests_match(expected: &[u8], presented: &[u8]) -> bool {
    expected.ct_eq(presented).into()
}
