//! SNMPv1 Trap PDU (RFC 1157 Section 4.1.6).
//!
//! The Trap-PDU has a structure of its own, unlike the request/response
//! PDUs: enterprise, agent address, two trap codes and a timestamp precede
//! the varbind list.

use std::net::Ipv4Addr;

use crate::ber::{Decoder, tag};
use crate::error::{DecodeErrorKind, Error, Result};
use crate::oid::Oid;
use crate::options::DecodeOptions;
use crate::varbind::{VarBind, decode_varbind_list};
use bytes::Bytes;

/// SNMPv1 generic trap types (RFC 1157 Section 4.1.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(i64)]
pub enum GenericTrap {
    /// coldStart(0) - agent is reinitializing, config may change
    ColdStart = 0,
    /// warmStart(1) - agent is reinitializing, config unchanged
    WarmStart = 1,
    /// linkDown(2) - communication link failure
    LinkDown = 2,
    /// linkUp(3) - communication link came up
    LinkUp = 3,
    /// authenticationFailure(4) - improperly authenticated message received
    AuthenticationFailure = 4,
    /// egpNeighborLoss(5) - EGP peer marked down
    EgpNeighborLoss = 5,
    /// enterpriseSpecific(6) - vendor-specific trap, see specific_trap field
    EnterpriseSpecific = 6,
}

impl GenericTrap {
    /// Create from integer value.
    pub fn from_i64(v: i64) -> Option<Self> {
        match v {
            0 => Some(Self::ColdStart),
            1 => Some(Self::WarmStart),
            2 => Some(Self::LinkDown),
            3 => Some(Self::LinkUp),
            4 => Some(Self::AuthenticationFailure),
            5 => Some(Self::EgpNeighborLoss),
            6 => Some(Self::EnterpriseSpecific),
            _ => None,
        }
    }

    /// Get the integer value.
    pub fn as_i64(self) -> i64 {
        self as i64
    }
}

impl std::fmt::Display for GenericTrap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::ColdStart => "coldStart",
            Self::WarmStart => "warmStart",
            Self::LinkDown => "linkDown",
            Self::LinkUp => "linkUp",
            Self::AuthenticationFailure => "authenticationFailure",
            Self::EgpNeighborLoss => "egpNeighborLoss",
            Self::EnterpriseSpecific => "enterpriseSpecific",
        };
        write!(f, "{}", name)
    }
}

/// Agent address (NetworkAddress) as carried on the wire.
///
/// Holds whatever octets the agent sent; a well-formed address has four, but
/// no length is enforced. Displays as dot-joined decimal octets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentAddress(Bytes);

impl AgentAddress {
    /// Wrap raw address octets.
    pub fn new(octets: impl Into<Bytes>) -> Self {
        Self(octets.into())
    }

    /// Raw address octets.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The address as IPv4, if it is exactly four octets long.
    pub fn to_ipv4(&self) -> Option<Ipv4Addr> {
        let octets: [u8; 4] = self.0.as_ref().try_into().ok()?;
        Some(Ipv4Addr::from(octets))
    }
}

impl std::fmt::Display for AgentAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, octet) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", octet)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AgentAddress {
    fn serialize<S: serde::Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

/// snmpTraps (1.3.6.1.6.3.1.1.5), parent of the generic trap OIDs.
const SNMP_TRAPS: [u32; 9] = [1, 3, 6, 1, 6, 3, 1, 1, 5];

/// SNMPv1 Trap PDU (RFC 1157 Section 4.1.6).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrapV1Pdu {
    /// Enterprise OID (sysObjectID of the entity generating the trap)
    pub enterprise: Oid,
    /// Agent address (IP address of the agent generating the trap)
    pub agent_addr: AgentAddress,
    /// Generic trap type
    pub generic_trap: i64,
    /// Specific trap code (meaningful when generic_trap is enterpriseSpecific)
    pub specific_trap: i64,
    /// Time since the agent was last (re)initialized, rendered per
    /// [`TimeTicksFormat`](crate::options::TimeTicksFormat).
    pub time_stamp: String,
    /// Variable bindings, in wire order
    pub varbinds: Vec<VarBind>,
    /// Declared content length of the PDU.
    pub length: usize,
    /// Bytes occupied by the whole PDU, tag and length included.
    pub total_length: usize,
}

impl TrapV1Pdu {
    /// Get the generic trap type as an enum.
    pub fn generic_trap_enum(&self) -> Option<GenericTrap> {
        GenericTrap::from_i64(self.generic_trap)
    }

    /// Check if this is an enterprise-specific trap.
    pub fn is_enterprise_specific(&self) -> bool {
        self.generic_trap == GenericTrap::EnterpriseSpecific.as_i64()
    }

    /// Convert to SNMPv2 trap OID (RFC 3584 Section 3).
    ///
    /// - For generic traps 0-5 (coldStart through egpNeighborLoss):
    ///   the trap OID is `snmpTraps.{generic_trap + 1}` (1.3.6.1.6.3.1.1.5.{1-6})
    /// - For enterprise-specific traps (generic_trap = 6):
    ///   the trap OID is `enterprise.0.specific_trap`
    ///
    /// Returns `None` for a generic code outside 0-6, or a specific code
    /// that is not a valid OID arc.
    ///
    /// # Example
    ///
    /// ```rust
    /// use snmp_trapv1::oid;
    ///
    /// // Enterprise 1.3.6.1.4.1.9, agent 10.0.0.1, enterpriseSpecific(6), specific 1
    /// let data = [
    ///     0x30, 0x26, 0x02, 0x01, 0x00, 0x04, 0x06, b'p', b'u', b'b', b'l', b'i', b'c',
    ///     0xA4, 0x19, 0x06, 0x06, 0x2B, 0x06, 0x01, 0x04, 0x01, 0x09,
    ///     0x40, 0x04, 10, 0, 0, 1, 0x02, 0x01, 0x06, 0x02, 0x01, 0x01,
    ///     0x43, 0x01, 0x00, 0x30, 0x00,
    /// ];
    /// let msg = snmp_trapv1::decode(&data).unwrap();
    /// assert_eq!(msg.trap.v2_trap_oid(), Some(oid!(1, 3, 6, 1, 4, 1, 9, 0, 1)));
    /// ```
    pub fn v2_trap_oid(&self) -> Option<Oid> {
        match self.generic_trap_enum()? {
            GenericTrap::EnterpriseSpecific => {
                let specific = u32::try_from(self.specific_trap).ok()?;
                Some(self.enterprise.child(0).child(specific))
            }
            generic => {
                let trap_num = generic.as_i64() as u32 + 1;
                Some(Oid::from_slice(&SNMP_TRAPS).child(trap_num))
            }
        }
    }

    /// Decode from BER.
    ///
    /// Every field is read from within the PDU's declared content; a field
    /// that would run past it fails even if the surrounding buffer is longer.
    pub fn decode(decoder: &mut Decoder, opts: &DecodeOptions) -> Result<Self> {
        let start = decoder.offset();
        let mut pdu = decoder.read_constructed(tag::pdu::TRAP_V1)?;
        let length = pdu.remaining();
        let total_length = decoder.offset() - start;

        // enterprise OBJECT IDENTIFIER
        let enterprise = pdu.read_oid()?;

        // agent-addr NetworkAddress
        let agent_addr = AgentAddress(pdu.read_ip_address()?);

        let generic_trap = pdu.read_integer(opts.integers())?;
        let specific_trap = pdu.read_integer(opts.integers())?;
        let time_stamp = pdu.read_time_ticks(opts.time_ticks_format())?;

        // variable-bindings, optional on the wire
        let varbinds = match pdu.peek_byte() {
            None => Vec::new(),
            Some(tag::universal::SEQUENCE) => decode_varbind_list(&mut pdu, opts)?,
            Some(actual) => {
                let kind = DecodeErrorKind::UnexpectedTag {
                    expected: tag::universal::SEQUENCE,
                    actual,
                };
                tracing::debug!(target: "snmp_trapv1::pdu", { snmp.offset = %pdu.offset(), kind = %kind }, "expected varbind list after time-stamp");
                return Err(Error::decode(pdu.offset(), kind));
            }
        };

        if !pdu.is_empty() {
            tracing::debug!(target: "snmp_trapv1::pdu", { snmp.offset = %pdu.offset(), trailing = pdu.remaining() }, "content left after varbind list");
            return Err(Error::decode(
                pdu.offset(),
                DecodeErrorKind::MalformedVarBindList,
            ));
        }

        if GenericTrap::from_i64(generic_trap).is_none() {
            tracing::debug!(target: "snmp_trapv1::pdu", { generic_trap, enterprise = %enterprise }, "generic trap code outside RFC 1157 range");
        }

        Ok(TrapV1Pdu {
            enterprise,
            agent_addr,
            generic_trap,
            specific_trap,
            time_stamp,
            varbinds,
            length,
            total_length,
        })
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_agent_address_serializes_as_string() {
        let addr = AgentAddress::new(vec![10, 0, 0, 1]);
        assert_eq!(serde_json::to_string(&addr).unwrap(), r#""10.0.0.1""#);

        let short = AgentAddress::new(vec![192, 168]);
        assert_eq!(serde_json::to_string(&short).unwrap(), r#""192.168""#);
    }

    #[test]
    fn test_generic_trap_serializes_by_name() {
        assert_eq!(
            serde_json::to_string(&GenericTrap::LinkDown).unwrap(),
            r#""LinkDown""#
        );
    }
}
