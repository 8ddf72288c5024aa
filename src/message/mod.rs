//! SNMP message wrappers.
//!
//! A message encapsulates the PDU with the version and community string.
//! SNMPv1 traps only ever arrive in the community-based format, see
//! [`TrapMessage`].

mod community;

pub use community::TrapMessage;
