//! Token API
//!
//! Builders for picking a token layout and the codec that signs, verifies,
//! decodes and validates tokens for it.

pub mod builder;
pub mod operations;
pub mod validation;

pub use builder::{Twt, TwtBuilder, TwtMasterBuilder};
pub use operations::TokenCodec;
pub use validation::is_well_formed;
