//! Error types for snmp-trapv1.
//!
//! This module provides:
//!
//! - [`Error`] - The main error type for all decode operations
//! - [`DecodeErrorKind`] - What went wrong while walking the BER input
//! - [`OidErrorKind`] - Why a dotted OID string was rejected
//!
//! Decoding is fail-fast: the first problem aborts the whole decode call and
//! is reported with the byte offset at which it was detected.
//!
//! # Error Handling Patterns
//!
//! ```
//! use snmp_trapv1::{DecodeErrorKind, Error};
//!
//! // Declares a 10-byte community but supplies only 3 bytes.
//! let data = [0x30, 0x11, 0x02, 0x01, 0x00, 0x04, 0x0A, b'p', b'u', b'b'];
//!
//! match snmp_trapv1::decode(&data) {
//!     Ok(msg) => println!("trap from {}", msg.trap.agent_addr),
//!     Err(Error::Decode { offset, kind: DecodeErrorKind::BufferUnderrun }) => {
//!         println!("datagram truncated at byte {}", offset);
//!     }
//!     Err(e) => println!("undecodable trap: {}", e),
//! }
//! ```
//!
//! Both kind enums are `#[non_exhaustive]` so new failure modes can be added
//! without breaking callers.

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// BER decode error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeErrorKind {
    /// Read past the end of the buffer (or of an enclosing TLV).
    BufferUnderrun,
    /// Expected different tag.
    UnexpectedTag { expected: u8, actual: u8 },
    /// Length does not fit the host integer width.
    InvalidLength,
    /// Indefinite length (0x80) is not supported.
    UnsupportedEncoding,
    /// OID content does not start with the 0x2B (`1.3`) prefix byte.
    InvalidOidPrefix { actual: Option<u8> },
    /// Sub-identifier does not fit in 32 bits.
    SubidentifierOverflow,
    /// Zero-length integer.
    ZeroLengthInteger,
    /// Integer content does not fit in 64 bits.
    IntegerOverflow { length: usize },
    /// VarBind list length does not land on a VarBind boundary.
    MalformedVarBindList,
    /// Message remainder is negative or does not match the trap PDU.
    MalformedMessage,
    /// VarBind value tag not understood (strict mode only).
    UnsupportedVarBindType { tag: u8 },
}

impl std::fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BufferUnderrun => write!(f, "unexpected end of data"),
            Self::UnexpectedTag { expected, actual } => {
                write!(f, "expected tag 0x{:02X}, got 0x{:02X}", expected, actual)
            }
            Self::InvalidLength => write!(f, "length does not fit in {} bits", usize::BITS),
            Self::UnsupportedEncoding => write!(f, "indefinite length encoding not supported"),
            Self::InvalidOidPrefix { actual: Some(b) } => {
                write!(f, "OID must start with 0x2B (1.3), got 0x{:02X}", b)
            }
            Self::InvalidOidPrefix { actual: None } => write!(f, "empty OID"),
            Self::SubidentifierOverflow => write!(f, "OID subidentifier overflow"),
            Self::ZeroLengthInteger => write!(f, "zero-length integer"),
            Self::IntegerOverflow { length } => {
                write!(f, "integer too long: {} bytes", length)
            }
            Self::MalformedVarBindList => {
                write!(f, "varbind list length does not match its entries")
            }
            Self::MalformedMessage => {
                write!(f, "message length inconsistent with its contents")
            }
            Self::UnsupportedVarBindType { tag } => {
                write!(f, "unsupported varbind value type 0x{:02X}", tag)
            }
        }
    }
}

/// OID validation error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum OidErrorKind {
    /// Empty OID string.
    Empty,
    /// Invalid arc value.
    InvalidArc,
}

impl std::fmt::Display for OidErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty OID"),
            Self::InvalidArc => write!(f, "invalid arc value"),
        }
    }
}

/// The main error type for all snmp-trapv1 operations.
///
/// # Example
///
/// ```
/// use snmp_trapv1::{DecodeErrorKind, Error};
///
/// fn is_truncation(error: &Error) -> bool {
///     matches!(error.decode_kind(), Some(DecodeErrorKind::BufferUnderrun))
/// }
///
/// let err = snmp_trapv1::decode(&[0x30, 0x05]).unwrap_err();
/// assert!(is_truncation(&err));
/// assert_eq!(err.offset(), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// BER decoding error.
    #[error("decode error at offset {offset}: {kind}")]
    Decode {
        offset: usize,
        kind: DecodeErrorKind,
    },

    /// Invalid OID format.
    #[error("invalid OID: {kind}")]
    InvalidOid {
        kind: OidErrorKind,
        input: Option<Box<str>>, // Only allocated when parsing string input
    },
}

impl Error {
    /// Create a decode error.
    pub fn decode(offset: usize, kind: DecodeErrorKind) -> Self {
        Self::Decode { offset, kind }
    }

    /// Create an invalid OID error with the input string that failed.
    pub fn invalid_oid_with_input(kind: OidErrorKind, input: impl Into<Box<str>>) -> Self {
        Self::InvalidOid {
            kind,
            input: Some(input.into()),
        }
    }

    /// Get the decode error kind, if this is a decode error.
    pub fn decode_kind(&self) -> Option<DecodeErrorKind> {
        match self {
            Self::Decode { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Get the byte offset at which decoding failed.
    ///
    /// Offsets are relative to the start of the buffer handed to the
    /// top-level decode call.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::Decode { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}
