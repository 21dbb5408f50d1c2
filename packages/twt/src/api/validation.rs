//! Structural token checks
//!
//! Shape only: digest segment length and alphabet, separator placement. The
//! MAC itself is never recomputed here.

use crate::types::TokenConfig;

/// Byte offset where the last `n` characters of `s` begin, or `None` when
/// `s` holds fewer than `n` characters
#[inline]
pub(crate) fn tail_start(s: &str, n: usize) -> Option<usize> {
    if n == 0 {
        return Some(s.len());
    }
    s.char_indices().rev().nth(n - 1).map(|(idx, _)| idx)
}

#[inline]
fn is_lower_hex(segment: &str) -> bool {
    segment
        .bytes()
        .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// True when `token` has the layout `config` produces.
///
/// Requires at least `digest_length` trailing lowercase hex characters,
/// preceded by the separator when one is configured.
#[must_use]
pub fn is_well_formed(config: &TokenConfig, token: &str) -> bool {
    let Some(start) = tail_start(token, config.digest_length) else {
        return false;
    };
    if !is_lower_hex(&token[start..]) {
        return false;
    }
    match config.separator {
        Some(separator) => token[..start].ends_with(separator),
        None => true,
    }
}
