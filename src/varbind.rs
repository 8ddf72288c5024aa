//! Variable binding (VarBind) type.
//!
//! A VarBind pairs an OID with a value. Trap PDUs carry them in a
//! `SEQUENCE OF VarBind` whose declared length must be filled exactly by its
//! entries.

use crate::ber::{Decoder, tag};
use crate::error::{DecodeErrorKind, Error, Result};
use crate::oid::Oid;
use crate::options::DecodeOptions;
use crate::value::Value;

/// Variable binding - an OID-value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VarBind {
    /// The object identifier.
    pub oid: Oid,
    /// The value.
    pub value: Value,
}

impl VarBind {
    /// Create a new VarBind.
    pub fn new(oid: Oid, value: Value) -> Self {
        Self { oid, value }
    }

    /// Decode from BER.
    pub fn decode(decoder: &mut Decoder, opts: &DecodeOptions) -> Result<Self> {
        let mut seq = decoder.read_sequence()?;
        Self::decode_contents(&mut seq, opts)
    }

    /// Decode the OID and value inside a VarBind SEQUENCE.
    fn decode_contents(seq: &mut Decoder, opts: &DecodeOptions) -> Result<Self> {
        let oid = seq.read_oid()?;
        let value = Value::decode(seq, opts)?;

        if !seq.is_empty() {
            tracing::debug!(target: "snmp_trapv1::ber", { snmp.offset = %seq.offset(), trailing = seq.remaining(), oid = %oid }, "trailing bytes inside varbind");
            return Err(Error::decode(
                seq.offset(),
                DecodeErrorKind::MalformedVarBindList,
            ));
        }

        Ok(VarBind { oid, value })
    }
}

impl std::fmt::Display for VarBind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.oid, self.value)
    }
}

fn malformed(offset: usize) -> Error {
    tracing::debug!(target: "snmp_trapv1::ber", { snmp.offset = %offset, kind = %DecodeErrorKind::MalformedVarBindList }, "varbind list boundary mismatch");
    Error::decode(offset, DecodeErrorKind::MalformedVarBindList)
}

/// Decodes a BER-encoded VarBind list into a vector of VarBinds.
///
/// Expects a SEQUENCE containing zero or more VarBind SEQUENCE elements that
/// fill its declared length exactly. A list that claims more bytes than are
/// available, an entry that crosses the list boundary, or leftover bytes that
/// do not form an entry header fail with
/// [`DecodeErrorKind::MalformedVarBindList`].
pub fn decode_varbind_list(decoder: &mut Decoder, opts: &DecodeOptions) -> Result<Vec<VarBind>> {
    let list_len = decoder.expect_tag(tag::universal::SEQUENCE)?;
    if list_len > decoder.remaining() {
        return Err(malformed(decoder.offset()));
    }
    let mut list = decoder.sub_decoder(list_len)?;

    // Estimate capacity: typical VarBind is 20-50 bytes, use 16 as conservative divisor
    let mut varbinds = Vec::with_capacity((list_len / 16).max(1));

    while !list.is_empty() {
        let entry_start = list.offset();
        let entry_len = match list.expect_tag(tag::universal::SEQUENCE) {
            Ok(len) => len,
            // Slack that is not a whole entry breaks the list boundary
            Err(e)
                if matches!(
                    e.decode_kind(),
                    Some(DecodeErrorKind::BufferUnderrun | DecodeErrorKind::UnexpectedTag { .. })
                ) =>
            {
                return Err(malformed(entry_start));
            }
            Err(e) => return Err(e),
        };
        if entry_len > list.remaining() {
            return Err(malformed(entry_start));
        }
        let mut entry = list.sub_decoder(entry_len)?;
        varbinds.push(VarBind::decode_contents(&mut entry, opts)?);
    }

    Ok(varbinds)
}
