//! BER decoding.
//!
//! Zero-copy decoding using `Bytes` to avoid allocations. Sub-decoders share
//! the parent's buffer and remember their absolute position, so every error
//! offset refers to the buffer handed to the top-level decode call.

use super::length::decode_length;
use super::tag;
use crate::error::{DecodeErrorKind, Error, Result};
use crate::format::hex;
use crate::oid::Oid;
use crate::options::{IntegerEncoding, TimeTicksFormat};
use bytes::Bytes;

/// BER decoder that reads from a byte buffer.
#[derive(Debug)]
pub struct Decoder {
    data: Bytes,
    offset: usize,
    base: usize,
}

impl Decoder {
    /// Create a new decoder from bytes.
    pub fn new(data: Bytes) -> Self {
        Self {
            data,
            offset: 0,
            base: 0,
        }
    }

    /// Create a decoder from a byte slice (copies the data).
    pub fn from_slice(data: &[u8]) -> Self {
        Self::new(Bytes::copy_from_slice(data))
    }

    /// Get the current offset, relative to the top-level buffer.
    pub fn offset(&self) -> usize {
        self.base + self.offset
    }

    /// Get remaining bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Check if we've reached the end.
    pub fn is_empty(&self) -> bool {
        self.offset >= self.data.len()
    }

    fn underrun(&self) -> Error {
        tracing::debug!(target: "snmp_trapv1::ber", { snmp.offset = %self.offset(), kind = %DecodeErrorKind::BufferUnderrun }, "truncated data: unexpected end of input");
        Error::decode(self.offset(), DecodeErrorKind::BufferUnderrun)
    }

    /// Peek at the next byte without consuming it.
    pub fn peek_byte(&self) -> Option<u8> {
        self.data.get(self.offset).copied()
    }

    /// Read a single byte.
    pub fn read_byte(&mut self) -> Result<u8> {
        let Some(&byte) = self.data.get(self.offset) else {
            return Err(self.underrun());
        };
        self.offset += 1;
        Ok(byte)
    }

    /// Read a tag byte.
    pub fn read_tag(&mut self) -> Result<u8> {
        self.read_byte()
    }

    /// Read a BER length.
    pub fn read_length(&mut self) -> Result<usize> {
        let (len, consumed) = decode_length(&self.data[self.offset..], self.offset())?;
        self.offset += consumed;
        Ok(len)
    }

    /// Read raw bytes without copying.
    pub fn read_bytes(&mut self, len: usize) -> Result<Bytes> {
        if len > self.remaining() {
            tracing::debug!(target: "snmp_trapv1::ber", { snmp.offset = %self.offset(), needed = len, available = self.remaining() }, "insufficient data");
            return Err(Error::decode(self.offset(), DecodeErrorKind::BufferUnderrun));
        }
        let bytes = self.data.slice(self.offset..self.offset + len);
        self.offset += len;
        Ok(bytes)
    }

    /// Read and expect a specific tag, returning the content length.
    pub fn expect_tag(&mut self, expected: u8) -> Result<usize> {
        let at = self.offset();
        let tag = self.read_tag()?;
        if tag != expected {
            let kind = DecodeErrorKind::UnexpectedTag {
                expected,
                actual: tag,
            };
            tracing::debug!(target: "snmp_trapv1::ber", { snmp.offset = %at, kind = %kind }, "unexpected tag");
            return Err(Error::decode(at, kind));
        }
        self.read_length()
    }

    /// Read a BER INTEGER.
    pub fn read_integer(&mut self, encoding: IntegerEncoding) -> Result<i64> {
        let len = self.expect_tag(tag::universal::INTEGER)?;
        self.read_integer_value(len, encoding)
    }

    /// Read integer value given the length.
    ///
    /// Content longer than 8 octets is rejected, as is an unsigned value
    /// that does not fit in `i64`.
    pub fn read_integer_value(&mut self, len: usize, encoding: IntegerEncoding) -> Result<i64> {
        let at = self.offset();
        if len == 0 {
            tracing::debug!(target: "snmp_trapv1::ber", { snmp.offset = %at, kind = %DecodeErrorKind::ZeroLengthInteger }, "zero-length integer");
            return Err(Error::decode(at, DecodeErrorKind::ZeroLengthInteger));
        }

        let overflow = || {
            let kind = DecodeErrorKind::IntegerOverflow { length: len };
            tracing::debug!(target: "snmp_trapv1::ber", { snmp.offset = %at, kind = %kind }, "integer overflow");
            Error::decode(at, kind)
        };

        if len > 8 {
            return Err(overflow());
        }

        let bytes = self.read_bytes(len)?;

        match encoding {
            IntegerEncoding::Unsigned => {
                let mut value: u64 = 0;
                for &byte in bytes.iter() {
                    value = (value << 8) | byte as u64;
                }
                i64::try_from(value).map_err(|_| overflow())
            }
            IntegerEncoding::Signed => {
                // Sign extend
                let mut value: i64 = if bytes[0] & 0x80 != 0 { -1 } else { 0 };
                for &byte in bytes.iter() {
                    value = (value << 8) | byte as i64;
                }
                Ok(value)
            }
        }
    }

    /// Read an OCTET STRING, mapping each byte to the char of the same
    /// code point.
    pub fn read_octet_string(&mut self) -> Result<String> {
        let len = self.expect_tag(tag::universal::OCTET_STRING)?;
        self.read_octet_string_value(len)
    }

    /// Read OCTET STRING content given the length.
    pub fn read_octet_string_value(&mut self, len: usize) -> Result<String> {
        let bytes = self.read_bytes(len)?;
        Ok(bytes.iter().map(|&b| b as char).collect())
    }

    /// Read an OBJECT IDENTIFIER.
    pub fn read_oid(&mut self) -> Result<Oid> {
        let len = self.expect_tag(tag::universal::OBJECT_IDENTIFIER)?;
        self.read_oid_value(len)
    }

    /// Read an OID given a pre-read length.
    ///
    /// Shared by [`read_oid`](Self::read_oid) and by callers that dispatched
    /// on the tag themselves (varbind values).
    pub fn read_oid_value(&mut self, len: usize) -> Result<Oid> {
        let at = self.offset();
        let bytes = self.read_bytes(len)?;
        Oid::from_ber(&bytes, at).inspect_err(|e| {
            tracing::debug!(target: "snmp_trapv1::ber", { snmp.offset = %at, content = %hex::Bytes(&bytes), error = %e }, "invalid OID");
        })
    }

    /// Read a NetworkAddress (APPLICATION 0), returning its raw octets.
    ///
    /// The length is not checked against 4.
    pub fn read_ip_address(&mut self) -> Result<Bytes> {
        let len = self.expect_tag(tag::application::IP_ADDRESS)?;
        self.read_bytes(len)
    }

    /// Read TimeTicks (APPLICATION 3) rendered as a decimal string.
    pub fn read_time_ticks(&mut self, format: TimeTicksFormat) -> Result<String> {
        let len = self.expect_tag(tag::application::TIMETICKS)?;
        self.read_time_ticks_value(len, format)
    }

    /// Render TimeTicks content given the length.
    pub fn read_time_ticks_value(&mut self, len: usize, format: TimeTicksFormat) -> Result<String> {
        match format {
            TimeTicksFormat::Concatenated => {
                let bytes = self.read_bytes(len)?;
                Ok(bytes.iter().map(|b| b.to_string()).collect())
            }
            TimeTicksFormat::BigEndian => {
                if len == 0 {
                    // Empty content renders empty, as in concatenated form
                    return Ok(String::new());
                }
                self.read_integer_value(len, IntegerEncoding::Unsigned)
                    .map(|v| v.to_string())
            }
        }
    }

    /// Read a SEQUENCE, returning a decoder for its contents.
    pub fn read_sequence(&mut self) -> Result<Decoder> {
        let len = self.expect_tag(tag::universal::SEQUENCE)?;
        self.sub_decoder(len)
    }

    /// Read a constructed type with a specific tag, returning a decoder for its contents.
    pub fn read_constructed(&mut self, expected_tag: u8) -> Result<Decoder> {
        let len = self.expect_tag(expected_tag)?;
        self.sub_decoder(len)
    }

    /// Create a sub-decoder for a portion of the remaining data.
    pub fn sub_decoder(&mut self, len: usize) -> Result<Decoder> {
        let base = self.offset();
        let content = self.read_bytes(len)?;
        Ok(Decoder {
            data: content,
            offset: 0,
            base,
        })
    }
}
