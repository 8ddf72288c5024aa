//! BER tag constants used by SNMPv1 (RFC 1155, RFC 1157).

/// Universal class tags (X.690).
pub mod universal {
    pub const BOOLEAN: u8 = 0x01;
    pub const INTEGER: u8 = 0x02;
    pub const BIT_STRING: u8 = 0x03;
    pub const OCTET_STRING: u8 = 0x04;
    pub const NULL: u8 = 0x05;
    pub const OBJECT_IDENTIFIER: u8 = 0x06;
    pub const SEQUENCE: u8 = 0x30;
}

/// Application class tags (RFC 1155 / RFC 2578 SMI types).
pub mod application {
    pub const IP_ADDRESS: u8 = 0x40;
    pub const COUNTER32: u8 = 0x41;
    pub const GAUGE32: u8 = 0x42;
    pub const TIMETICKS: u8 = 0x43;
    pub const OPAQUE: u8 = 0x44;
    pub const NSAP_ADDRESS: u8 = 0x45;
    pub const COUNTER64: u8 = 0x46;
    pub const UINTEGER32: u8 = 0x47;
}

/// Context-specific constructed PDU tags.
pub mod pdu {
    pub const TRAP_V1: u8 = 0xA4;
}

/// Human-readable name for a tag, as used in SNMP tooling output.
///
/// Returns `None` for tags outside the SNMPv1 type set.
pub fn name(tag: u8) -> Option<&'static str> {
    let name = match tag {
        universal::BOOLEAN => "BOOLEAN",
        universal::INTEGER => "INTEGER",
        universal::BIT_STRING => "BIT STRING",
        universal::OCTET_STRING => "OCTET STRING",
        universal::NULL => "NULL",
        universal::OBJECT_IDENTIFIER => "OBJECT IDENTIFIER",
        universal::SEQUENCE => "SEQUENCE",
        application::IP_ADDRESS => "IpAddress",
        application::COUNTER32 => "Counter32",
        application::GAUGE32 => "Gauge32",
        application::TIMETICKS => "TimeTicks",
        application::OPAQUE => "Opaque",
        application::NSAP_ADDRESS => "NsapAddress",
        application::COUNTER64 => "Counter64",
        application::UINTEGER32 => "UInteger32",
        pdu::TRAP_V1 => "Trap-PDU",
        _ => return None,
    };
    Some(name)
}
