//! Object Identifier (OID) type.
//!
//! OIDs are stored as `SmallVec<[u32; 16]>` to avoid heap allocation for common OIDs.
//!
//! SNMPv1 trap OIDs always live under `iso.org` (`1.3`), so the BER decoder
//! here requires the first content octet to be `0x2B` and only decodes the
//! sub-identifiers that follow it.

use crate::error::{DecodeErrorKind, Error, OidErrorKind, Result};
use smallvec::SmallVec;
use std::fmt;

/// First content octet of every accepted OID: `1 * 40 + 3`.
pub const ISO_ORG_PREFIX: u8 = 0x2B;

/// Object Identifier.
///
/// Stored as a sequence of arc values (u32). Uses SmallVec to avoid
/// heap allocation for OIDs with 16 or fewer arcs.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Oid {
    arcs: SmallVec<[u32; 16]>,
}

impl Oid {
    /// Create an empty OID.
    pub fn empty() -> Self {
        Self {
            arcs: SmallVec::new(),
        }
    }

    /// Create an OID from arc values.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_trapv1::oid::Oid;
    ///
    /// let oid = Oid::new(vec![1, 3, 6, 1, 2, 1]);
    /// assert_eq!(oid.arcs(), &[1, 3, 6, 1, 2, 1]);
    /// ```
    pub fn new(arcs: impl IntoIterator<Item = u32>) -> Self {
        Self {
            arcs: arcs.into_iter().collect(),
        }
    }

    /// Create an OID from a slice of arcs.
    pub fn from_slice(arcs: &[u32]) -> Self {
        Self {
            arcs: SmallVec::from_slice(arcs),
        }
    }

    /// Parse an OID from dotted string notation (e.g., "1.3.6.1.2.1.1.1.0").
    ///
    /// A single leading dot is accepted (`.1.3.6.1` as printed by net-snmp).
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_trapv1::oid::Oid;
    ///
    /// let oid = Oid::parse(".1.3.6.1.4.1.9").unwrap();
    /// assert_eq!(oid.to_string(), "1.3.6.1.4.1.9");
    ///
    /// assert!(Oid::parse("1.3.x").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let body = s.strip_prefix('.').unwrap_or(s);
        if body.is_empty() {
            return Err(Error::invalid_oid_with_input(OidErrorKind::Empty, s));
        }

        let mut arcs = SmallVec::new();
        for part in body.split('.') {
            let arc: u32 = part.parse().map_err(|_| {
                Error::invalid_oid_with_input(OidErrorKind::InvalidArc, s.to_string())
            })?;
            arcs.push(arc);
        }

        Ok(Self { arcs })
    }

    /// Get the arc values.
    pub fn arcs(&self) -> &[u32] {
        &self.arcs
    }

    /// Get the number of arcs.
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Check if the OID is empty.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Check if this OID starts with another OID.
    ///
    /// ```
    /// use snmp_trapv1::oid;
    ///
    /// let sys_uptime = oid!(1, 3, 6, 1, 2, 1, 1, 3, 0);
    /// assert!(sys_uptime.starts_with(&oid!(1, 3, 6, 1, 2, 1, 1)));
    /// assert!(!sys_uptime.starts_with(&oid!(1, 3, 6, 1, 4)));
    /// ```
    pub fn starts_with(&self, other: &Oid) -> bool {
        self.arcs.len() >= other.arcs.len() && self.arcs[..other.arcs.len()] == other.arcs[..]
    }

    /// Create a child OID by appending an arc.
    pub fn child(&self, arc: u32) -> Oid {
        let mut arcs = self.arcs.clone();
        arcs.push(arc);
        Oid { arcs }
    }

    /// Decode OID content octets (tag and length already consumed).
    ///
    /// The first octet must be [`ISO_ORG_PREFIX`]; it expands to the arcs
    /// `1.3`. Every following sub-identifier is base-128 with the top bit of
    /// each octet flagging continuation. `base_offset` is the position of
    /// `data[0]` in the enclosing buffer and is used for error reporting.
    pub fn from_ber(data: &[u8], base_offset: usize) -> Result<Self> {
        match data.first() {
            Some(&ISO_ORG_PREFIX) => {}
            other => {
                return Err(Error::decode(
                    base_offset,
                    DecodeErrorKind::InvalidOidPrefix {
                        actual: other.copied(),
                    },
                ));
            }
        }

        let mut arcs: SmallVec<[u32; 16]> = SmallVec::new();
        arcs.push(1);
        arcs.push(3);

        let mut i = 1;
        while i < data.len() {
            let (arc, consumed) = decode_subidentifier(&data[i..], base_offset + i)?;
            arcs.push(arc);
            i += consumed;
        }

        Ok(Self { arcs })
    }
}

/// Decode a subidentifier, returning (value, bytes_consumed).
fn decode_subidentifier(data: &[u8], base_offset: usize) -> Result<(u32, usize)> {
    let mut value: u32 = 0;
    let mut i = 0;

    loop {
        // Continuation bit set on the last content octet
        let Some(&byte) = data.get(i) else {
            return Err(Error::decode(
                base_offset + i,
                DecodeErrorKind::BufferUnderrun,
            ));
        };
        i += 1;

        // Check for overflow before shifting
        if value > (u32::MAX >> 7) {
            return Err(Error::decode(
                base_offset,
                DecodeErrorKind::SubidentifierOverflow,
            ));
        }

        value = (value << 7) | ((byte & 0x7F) as u32);

        if byte & 0x80 == 0 {
            break;
        }
    }

    Ok((value, i))
}

impl fmt::Debug for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oid({})", self)
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for arc in &self.arcs {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", arc)?;
            first = false;
        }
        Ok(())
    }
}

impl std::str::FromStr for Oid {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<&[u32]> for Oid {
    fn from(arcs: &[u32]) -> Self {
        Self::from_slice(arcs)
    }
}

impl<const N: usize> From<[u32; N]> for Oid {
    fn from(arcs: [u32; N]) -> Self {
        Self::new(arcs)
    }
}

impl PartialOrd for Oid {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Oid {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.arcs.cmp(&other.arcs)
    }
}

/// Macro to create an OID from literal arcs.
///
/// # Examples
///
/// ```
/// use snmp_trapv1::oid;
///
/// let sys_uptime = oid!(1, 3, 6, 1, 2, 1, 1, 3, 0);
/// assert_eq!(sys_uptime.to_string(), "1.3.6.1.2.1.1.3.0");
/// ```
#[macro_export]
macro_rules! oid {
    ($($arc:expr),* $(,)?) => {
        $crate::oid::Oid::from_slice(&[$($arc),*])
    };
}
