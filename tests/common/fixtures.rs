//! BER fixtures for trap decoding tests.
//!
//! The library only decodes, so tests build their input with the minimal
//! encoder below.

/// Encode a definite-form length, using the short form when possible.
pub fn encode_length(len: usize) -> Vec<u8> {
    if len < 0x80 {
        return vec![len as u8];
    }
    let bytes: Vec<u8> = len
        .to_be_bytes()
        .into_iter()
        .skip_while(|&b| b == 0)
        .collect();
    let mut out = vec![0x80 | bytes.len() as u8];
    out.extend(bytes);
    out
}

/// Build a TLV from a tag and content octets.
pub fn tlv(tag: u8, content: &[u8]) -> Vec<u8> {
    let mut out = vec![tag];
    out.extend(encode_length(content.len()));
    out.extend_from_slice(content);
    out
}

/// Minimal two's-complement content octets for an INTEGER.
pub fn encode_integer(value: i64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let mut start = 0;
    while start < 7 {
        let redundant = (bytes[start] == 0x00 && bytes[start + 1] & 0x80 == 0)
            || (bytes[start] == 0xFF && bytes[start + 1] & 0x80 != 0);
        if !redundant {
            break;
        }
        start += 1;
    }
    bytes[start..].to_vec()
}

/// OID content octets for an OID under `1.3`.
pub fn encode_oid(arcs: &[u32]) -> Vec<u8> {
    assert!(arcs.len() >= 2 && arcs[0] == 1 && arcs[1] == 3, "fixture OIDs start 1.3");
    let mut out = vec![0x2B];
    for &arc in &arcs[2..] {
        let mut groups = vec![(arc & 0x7F) as u8];
        let mut rest = arc >> 7;
        while rest > 0 {
            groups.push(0x80 | (rest & 0x7F) as u8);
            rest >>= 7;
        }
        groups.reverse();
        out.extend(groups);
    }
    out
}

/// A varbind in raw form: OID arcs, value tag, value content.
#[derive(Clone)]
pub struct RawVarBind {
    pub oid: Vec<u32>,
    pub tag: u8,
    pub content: Vec<u8>,
}

impl RawVarBind {
    pub fn encode(&self) -> Vec<u8> {
        let mut body = tlv(0x06, &encode_oid(&self.oid));
        body.extend(tlv(self.tag, &self.content));
        tlv(0x30, &body)
    }
}

/// Builder for complete SNMPv1 trap messages.
///
/// Defaults to the canonical example: version 0, community "public",
/// enterprise 1.3.6.1.4.1.9, agent 10.0.0.1, enterpriseSpecific(6) code 1,
/// one varbind `1.3.6.1.2.1.1.3.0 = "hello"`.
#[derive(Clone)]
pub struct TrapBuilder {
    pub version: i64,
    pub community: Vec<u8>,
    pub enterprise: Vec<u32>,
    pub agent_addr: Vec<u8>,
    pub generic_trap: i64,
    pub specific_trap: i64,
    pub time_stamp: Vec<u8>,
    /// `None` omits the varbind list entirely.
    pub varbinds: Option<Vec<RawVarBind>>,
}

impl Default for TrapBuilder {
    fn default() -> Self {
        Self {
            version: 0,
            community: b"public".to_vec(),
            enterprise: vec![1, 3, 6, 1, 4, 1, 9],
            agent_addr: vec![10, 0, 0, 1],
            generic_trap: 6,
            specific_trap: 1,
            time_stamp: vec![0x01, 0x00],
            varbinds: Some(vec![RawVarBind {
                oid: vec![1, 3, 6, 1, 2, 1, 1, 3, 0],
                tag: 0x04,
                content: b"hello".to_vec(),
            }]),
        }
    }
}

impl TrapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn community(mut self, community: &[u8]) -> Self {
        self.community = community.to_vec();
        self
    }

    pub fn generic_trap(mut self, code: i64) -> Self {
        self.generic_trap = code;
        self
    }

    pub fn specific_trap(mut self, code: i64) -> Self {
        self.specific_trap = code;
        self
    }

    pub fn time_stamp(mut self, content: &[u8]) -> Self {
        self.time_stamp = content.to_vec();
        self
    }

    pub fn no_varbinds(mut self) -> Self {
        self.varbinds = None;
        self
    }

    pub fn varbind(mut self, oid: &[u32], tag: u8, content: &[u8]) -> Self {
        self.varbinds.get_or_insert_with(Vec::new).push(RawVarBind {
            oid: oid.to_vec(),
            tag,
            content: content.to_vec(),
        });
        self
    }

    pub fn clear_varbinds(mut self) -> Self {
        self.varbinds = Some(Vec::new());
        self
    }

    /// Encoded varbind list, including its SEQUENCE header.
    pub fn varbind_list(&self) -> Option<Vec<u8>> {
        let vbs = self.varbinds.as_ref()?;
        let body: Vec<u8> = vbs.iter().flat_map(RawVarBind::encode).collect();
        Some(tlv(0x30, &body))
    }

    /// Trap-PDU content (everything inside the 0xA4 TLV).
    pub fn pdu_content(&self) -> Vec<u8> {
        let mut body = tlv(0x06, &encode_oid(&self.enterprise));
        body.extend(tlv(0x40, &self.agent_addr));
        body.extend(tlv(0x02, &encode_integer(self.generic_trap)));
        body.extend(tlv(0x02, &encode_integer(self.specific_trap)));
        body.extend(tlv(0x43, &self.time_stamp));
        if let Some(list) = self.varbind_list() {
            body.extend(list);
        }
        body
    }

    /// Encoded Trap-PDU.
    pub fn pdu(&self) -> Vec<u8> {
        tlv(0xA4, &self.pdu_content())
    }

    /// Version and community, the message content preceding the PDU.
    pub fn header(&self) -> Vec<u8> {
        let mut body = tlv(0x02, &encode_integer(self.version));
        body.extend(tlv(0x04, &self.community));
        body
    }

    /// Complete message.
    pub fn build(&self) -> Vec<u8> {
        let mut body = self.header();
        body.extend(self.pdu());
        tlv(0x30, &body)
    }
}

#[test]
fn fixture_encoding_matches_hand_assembled_bytes() {
    assert_eq!(encode_length(5), vec![0x05]);
    assert_eq!(encode_length(200), vec![0x81, 200]);
    assert_eq!(encode_length(256), vec![0x82, 0x01, 0x00]);
    assert_eq!(encode_integer(0), vec![0x00]);
    assert_eq!(encode_integer(128), vec![0x00, 0x80]);
    assert_eq!(encode_integer(-1), vec![0xFF]);
    assert_eq!(encode_oid(&[1, 3, 6, 1, 4, 1, 9]), vec![0x2B, 6, 1, 4, 1, 9]);
    assert_eq!(encode_oid(&[1, 3, 128]), vec![0x2B, 0x81, 0x00]);
}
