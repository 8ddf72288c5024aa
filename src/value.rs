//! SNMP varbind value types.
//!
//! SNMPv1 traps seen in the field carry three value types that consumers
//! interpret: OCTET STRING, INTEGER and OBJECT IDENTIFIER. Everything else is
//! kept as an opaque [`Value::Unknown`] so no information is lost.

use crate::ber::{Decoder, tag};
use crate::error::{DecodeErrorKind, Error, Result};
use crate::format::hex;
use crate::oid::Oid;
use crate::options::{DecodeOptions, UnknownValuePolicy};
use bytes::Bytes;

/// Varbind value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value"))]
pub enum Value {
    /// OCTET STRING, one char per content byte (Latin-1).
    ///
    /// Binary payloads are not distinguished from printable text.
    OctetString(String),

    /// INTEGER, decoded per [`IntegerEncoding`](crate::options::IntegerEncoding).
    Integer(i64),

    /// OBJECT IDENTIFIER
    ObjectIdentifier(Oid),

    /// Any other type, with its tag and raw content octets.
    Unknown {
        tag: u8,
        #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_hex"))]
        data: Bytes,
    },
}

#[cfg(feature = "serde")]
fn serialize_hex<S: serde::Serializer>(data: &Bytes, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(&hex::encode(data))
}

impl Value {
    /// Get the string content if this is an OCTET STRING.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::OctetString(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer value if this is an INTEGER.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the OID if this is an OBJECT IDENTIFIER.
    pub fn as_oid(&self) -> Option<&Oid> {
        match self {
            Value::ObjectIdentifier(oid) => Some(oid),
            _ => None,
        }
    }

    /// Returns `true` for values whose type this crate does not decode.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown { .. })
    }

    /// The BER tag this value was decoded from.
    pub fn tag(&self) -> u8 {
        match self {
            Value::OctetString(_) => tag::universal::OCTET_STRING,
            Value::Integer(_) => tag::universal::INTEGER,
            Value::ObjectIdentifier(_) => tag::universal::OBJECT_IDENTIFIER,
            Value::Unknown { tag, .. } => *tag,
        }
    }

    /// SMI type name of the value ("Counter32", "INTEGER", ...), if known.
    pub fn type_name(&self) -> Option<&'static str> {
        tag::name(self.tag())
    }

    /// Decode a value whose type is given by its own tag.
    pub fn decode(decoder: &mut Decoder, opts: &DecodeOptions) -> Result<Self> {
        let at = decoder.offset();
        let tag = decoder.read_tag()?;
        let len = decoder.read_length()?;

        match tag {
            tag::universal::OCTET_STRING => {
                let s = decoder.read_octet_string_value(len)?;
                Ok(Value::OctetString(s))
            }
            tag::universal::INTEGER => {
                let v = decoder.read_integer_value(len, opts.integers())?;
                Ok(Value::Integer(v))
            }
            tag::universal::OBJECT_IDENTIFIER => {
                let oid = decoder.read_oid_value(len)?;
                Ok(Value::ObjectIdentifier(oid))
            }
            _ => match opts.unknown_values() {
                UnknownValuePolicy::Preserve => {
                    let data = decoder.read_bytes(len)?;
                    tracing::debug!(target: "snmp_trapv1::ber", { snmp.offset = %at, tag = %format_args!("0x{:02X}", tag), length = len }, "keeping value of unsupported type as raw bytes");
                    Ok(Value::Unknown { tag, data })
                }
                UnknownValuePolicy::Reject => {
                    let kind = DecodeErrorKind::UnsupportedVarBindType { tag };
                    tracing::debug!(target: "snmp_trapv1::ber", { snmp.offset = %at, kind = %kind }, "rejecting value of unsupported type");
                    Err(Error::decode(at, kind))
                }
            },
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::OctetString(s) => write!(f, "{}", s),
            Value::Integer(v) => write!(f, "{}", v),
            Value::ObjectIdentifier(oid) => write!(f, "{}", oid),
            Value::Unknown { tag, data } => match tag::name(*tag) {
                Some(name) => write!(f, "{}(0x{})", name, hex::encode(data)),
                None => write!(
                    f,
                    "Unknown(tag=0x{:02X}, data=0x{})",
                    tag,
                    hex::encode(data)
                ),
            },
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::OctetString(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<Oid> for Value {
    fn from(oid: Oid) -> Self {
        Value::ObjectIdentifier(oid)
    }
}
