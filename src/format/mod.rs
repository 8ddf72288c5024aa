//! Formatting utilities.
//!
//! ## Hex Encoding
//!
//! The [`hex`] module provides hexadecimal encoding and decoding utilities.
//!
//! ```
//! use snmp_trapv1::format::hex;
//!
//! // Encode bytes to hex string
//! assert_eq!(hex::encode(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
//!
//! // Read a captured datagram from a hex dump
//! assert_eq!(hex::decode("30 00").unwrap(), vec![0x30, 0x00]);
//!
//! // Lazy formatting for logging
//! let data = [0x00, 0xff];
//! println!("{}", hex::Bytes(&data)); // prints: 00ff
//! ```

pub mod hex;
