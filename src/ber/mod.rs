//! BER (Basic Encoding Rules) decoding for SNMPv1 traps.
//!
//! Only the subset of X.690 that SNMPv1 uses is supported: single-byte tags
//! and definite-form lengths.

mod decode;
mod length;
pub mod tag;

pub use decode::Decoder;
pub use length::decode_length;
