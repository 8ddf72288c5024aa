//! # snmp-trapv1
//!
//! Decoder for SNMPv1 Trap messages (RFC 1157) in BER.
//!
//! ## Features
//!
//! - Zero-copy BER decoding over [`bytes::Bytes`]
//! - Byte-offset error reporting for every malformed input
//! - Configurable integer, TimeTicks and unknown-value handling via
//!   [`DecodeOptions`]
//! - RFC 3584 mapping of v1 trap codes to SNMPv2 trap OIDs
//!
//! ## Quick Start
//!
//! ```rust
//! let data = [
//!     0x30, 0x26, 0x02, 0x01, 0x00, 0x04, 0x06, b'p', b'u', b'b', b'l', b'i', b'c',
//!     0xA4, 0x19, 0x06, 0x06, 0x2B, 0x06, 0x01, 0x04, 0x01, 0x09,
//!     0x40, 0x04, 10, 0, 0, 1, 0x02, 0x01, 0x06, 0x02, 0x01, 0x01,
//!     0x43, 0x01, 0x00, 0x30, 0x00,
//! ];
//!
//! let msg = snmp_trapv1::decode(&data)?;
//! assert_eq!(msg.community, "public");
//! assert_eq!(msg.trap.agent_addr.to_string(), "10.0.0.1");
//! assert_eq!(msg.trap.enterprise.to_string(), "1.3.6.1.4.1.9");
//! assert!(msg.trap.varbinds.is_empty());
//! # Ok::<(), snmp_trapv1::Error>(())
//! ```
//!
//! ## Decode Options
//!
//! ```rust
//! use bytes::Bytes;
//! use snmp_trapv1::{DecodeOptions, TrapMessage};
//!
//! # let data = Bytes::from_static(&[
//! #     0x30, 0x26, 0x02, 0x01, 0x00, 0x04, 0x06, b'p', b'u', b'b', b'l', b'i', b'c',
//! #     0xA4, 0x19, 0x06, 0x06, 0x2B, 0x06, 0x01, 0x04, 0x01, 0x09,
//! #     0x40, 0x04, 10, 0, 0, 1, 0x02, 0x01, 0x06, 0x02, 0x01, 0x01,
//! #     0x43, 0x01, 0x00, 0x30, 0x00,
//! # ]);
//! let msg = TrapMessage::decode_with(data, &DecodeOptions::strict())?;
//! assert_eq!(msg.trap.time_stamp, "0");
//! # Ok::<(), snmp_trapv1::Error>(())
//! ```

pub mod ber;
pub mod error;
pub mod format;
pub mod message;
pub mod oid;
pub mod options;
pub mod pdu;
pub mod value;
pub mod varbind;

#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use error::{DecodeErrorKind, Error, OidErrorKind, Result};
pub use message::TrapMessage;
pub use oid::Oid;
pub use options::{DecodeOptions, IntegerEncoding, TimeTicksFormat, UnknownValuePolicy};
pub use pdu::{AgentAddress, GenericTrap, TrapV1Pdu};
pub use value::Value;
pub use varbind::VarBind;

/// Decode an SNMPv1 trap message with the default options.
///
/// The input is copied once into a shared buffer; use
/// [`TrapMessage::decode`] to decode from [`bytes::Bytes`] without copying.
pub fn decode(data: &[u8]) -> Result<TrapMessage> {
    TrapMessage::decode(bytes::Bytes::copy_from_slice(data))
}
