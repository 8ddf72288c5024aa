//! Shared test infrastructure for snmp-trapv1.
//!
//! Provides a BER fixture builder for assembling trap datagrams byte by byte.

// Allow dead code since not all test files use all utilities
#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::{TrapBuilder, encode_integer, encode_length, encode_oid, tlv};
