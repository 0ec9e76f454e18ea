//! Signed token issuance and validation.
//!
//! The codec is pure with respect to its inputs: it performs no I/O and
//! holds no mutable state beyond the signing material, which is
//! process-wide and read-only after startup.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::{Claims, TokenKind};
pub use decoder::JwtDecoder;
pub use encoder::{JwtEncoder, TokenPair};
