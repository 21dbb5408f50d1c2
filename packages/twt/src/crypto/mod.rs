//! Keyed digest primitives behind token signing

pub mod hmac;
