//! Hexadecimal encoding and decoding utilities.
//!
//! Used for rendering opaque varbind payloads and for reading hex dumps of
//! captured datagrams.

use std::fmt;

/// Encode bytes as lowercase hex string.
///
/// # Examples
///
/// ```
/// use snmp_trapv1::format::hex::encode;
///
/// assert_eq!(encode(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
/// assert_eq!(encode(&[0x00, 0xff]), "00ff");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Decode a hex dump to bytes.
///
/// ASCII whitespace between digits is ignored, so output from `xxd -p` or
/// tcpdump-style space-separated octets can be passed in directly.
///
/// # Examples
///
/// ```
/// use snmp_trapv1::format::hex::decode;
///
/// assert_eq!(decode("deadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
/// assert_eq!(decode("30 0A\n02 01").unwrap(), vec![0x30, 0x0a, 0x02, 0x01]);
/// assert!(decode("xyz").is_err());
/// assert!(decode("abc").is_err()); // odd number of digits
/// ```
pub fn decode(s: &str) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(s.len() / 2);
    let mut high: Option<u8> = None;

    for c in s.chars().filter(|c| !c.is_ascii_whitespace()) {
        let Some(nibble) = c.to_digit(16) else {
            return Err(DecodeError::InvalidChar(c));
        };
        let nibble = nibble as u8;
        match high.take() {
            Some(h) => out.push((h << 4) | nibble),
            None => high = Some(nibble),
        }
    }

    if high.is_some() {
        return Err(DecodeError::OddLength);
    }
    Ok(out)
}

/// Error type for hex decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Input has an odd number of hex digits
    #[error("odd number of hex digits")]
    OddLength,
    /// Invalid hexadecimal character
    #[error("invalid hex character {0:?}")]
    InvalidChar(char),
}

/// Lazy hex formatter - only formats when actually displayed.
///
/// This avoids allocation when logging at disabled levels.
///
/// # Examples
///
/// ```
/// use snmp_trapv1::format::hex::Bytes;
///
/// let data = [0xde, 0xad, 0xbe, 0xef];
/// let formatted = format!("{}", Bytes(&data));
/// assert_eq!(formatted, "deadbeef");
/// ```
pub struct Bytes<'a>(pub &'a [u8]);

impl fmt::Debug for Bytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Display for Bytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
