//! Community-based SNMPv1 trap message.
//!
//! `SEQUENCE { version INTEGER, community OCTET STRING, data Trap-PDU }`

use crate::ber::{Decoder, tag};
use crate::error::{DecodeErrorKind, Error, Result};
use crate::options::DecodeOptions;
use crate::pdu::TrapV1Pdu;
use bytes::Bytes;

/// SNMPv1 trap message: the envelope around one [`TrapV1Pdu`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrapMessage {
    /// SNMP version field (0 for SNMPv1)
    pub version: i64,
    /// Community string, one char per byte
    pub community: String,
    /// The embedded trap
    pub trap: TrapV1Pdu,
    /// Declared content length of the outer SEQUENCE.
    pub length: usize,
    /// Bytes occupied by the outer SEQUENCE, tag and length included.
    pub total_length: usize,
}

impl TrapMessage {
    /// Decode from BER with the default options.
    pub fn decode(data: Bytes) -> Result<Self> {
        Self::decode_with(data, &DecodeOptions::default())
    }

    /// Decode from BER.
    ///
    /// Bytes following the outer SEQUENCE are ignored.
    pub fn decode_with(data: Bytes, opts: &DecodeOptions) -> Result<Self> {
        let mut decoder = Decoder::new(data);
        let msg = Self::decode_from(&mut decoder, opts)?;

        if !decoder.is_empty() {
            tracing::debug!(target: "snmp_trapv1::message", { snmp.offset = %decoder.offset(), trailing = decoder.remaining() }, "ignoring bytes after message");
        }

        Ok(msg)
    }

    /// Decode from an existing decoder, leaving anything after the message
    /// unread.
    pub fn decode_from(decoder: &mut Decoder, opts: &DecodeOptions) -> Result<Self> {
        let start = decoder.offset();
        let length = decoder.expect_tag(tag::universal::SEQUENCE)?;
        let content_start = decoder.offset();

        let version = decoder.read_integer(opts.integers())?;
        if version != 0 {
            tracing::warn!(target: "snmp_trapv1::message", { snmp.offset = %content_start, version }, "unexpected SNMP version in trap message");
        }

        let community = decoder.read_octet_string()?;

        let consumed = decoder.offset() - content_start;
        let Some(remainder) = length.checked_sub(consumed) else {
            tracing::debug!(target: "snmp_trapv1::message", { snmp.offset = %decoder.offset(), length, consumed }, "header fields overrun declared message length");
            return Err(Error::decode(
                decoder.offset(),
                DecodeErrorKind::MalformedMessage,
            ));
        };

        let pdu_start = decoder.offset();
        let mut pdu = decoder.sub_decoder(remainder)?;
        let trap = TrapV1Pdu::decode(&mut pdu, opts)?;

        if trap.total_length != remainder {
            tracing::debug!(target: "snmp_trapv1::message", { snmp.offset = %pdu_start, expected = remainder, actual = trap.total_length }, "trap PDU does not fill message");
            return Err(Error::decode(pdu_start, DecodeErrorKind::MalformedMessage));
        }

        let total_length = (content_start - start) + length;

        Ok(TrapMessage {
            version,
            community,
            trap,
            length,
            total_length,
        })
    }
}
