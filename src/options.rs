//! Decode configuration.
//!
//! [`DecodeOptions::default()`] reproduces the long-standing behaviour of
//! deployed SNMPv1 trap consumers: integers accumulate unsigned, time-ticks
//! render as the concatenated decimal value of each content byte, and varbind
//! values of unrecognised type are kept as raw [`Value::Unknown`] payloads.
//! Each of these can be switched to the RFC-conformant reading independently.
//!
//! [`Value::Unknown`]: crate::value::Value::Unknown

/// How INTEGER content octets are turned into a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IntegerEncoding {
    /// Big-endian accumulation with no sign extension (`FF` is 255).
    #[default]
    Unsigned,
    /// Two's-complement per X.690 (`FF` is -1).
    Signed,
}

/// How TimeTicks content octets are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TimeTicksFormat {
    /// Each content byte's decimal value, concatenated (`01 00` is "10").
    #[default]
    Concatenated,
    /// A single big-endian unsigned integer (`01 00` is "256").
    BigEndian,
}

/// What to do with a varbind value whose tag is not OCTET STRING, INTEGER
/// or OBJECT IDENTIFIER.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnknownValuePolicy {
    /// Keep the tag and raw content bytes.
    #[default]
    Preserve,
    /// Fail with `UnsupportedVarBindType`.
    Reject,
}

/// Options controlling how a trap is decoded.
///
/// # Example
///
/// ```
/// use snmp_trapv1::{DecodeOptions, IntegerEncoding, TimeTicksFormat};
///
/// let opts = DecodeOptions::new()
///     .integer_encoding(IntegerEncoding::Signed)
///     .time_ticks(TimeTicksFormat::BigEndian);
///
/// assert_eq!(opts.integers(), IntegerEncoding::Signed);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecodeOptions {
    integer_encoding: IntegerEncoding,
    time_ticks: TimeTicksFormat,
    unknown_value: UnknownValuePolicy,
}

impl DecodeOptions {
    /// Create options with the compatibility defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with every RFC-conformant behaviour switched on.
    pub fn strict() -> Self {
        Self {
            integer_encoding: IntegerEncoding::Signed,
            time_ticks: TimeTicksFormat::BigEndian,
            unknown_value: UnknownValuePolicy::Reject,
        }
    }

    /// Set how INTEGER values are decoded (default: unsigned).
    pub fn integer_encoding(mut self, encoding: IntegerEncoding) -> Self {
        self.integer_encoding = encoding;
        self
    }

    /// Set how TimeTicks values are rendered (default: concatenated).
    pub fn time_ticks(mut self, format: TimeTicksFormat) -> Self {
        self.time_ticks = format;
        self
    }

    /// Set the policy for unrecognised varbind values (default: preserve).
    pub fn unknown_value(mut self, policy: UnknownValuePolicy) -> Self {
        self.unknown_value = policy;
        self
    }

    /// How INTEGER values are decoded.
    pub fn integers(&self) -> IntegerEncoding {
        self.integer_encoding
    }

    /// How TimeTicks values are rendered.
    pub fn time_ticks_format(&self) -> TimeTicksFormat {
        self.time_ticks
    }

    /// Policy for unrecognised varbind values.
    pub fn unknown_values(&self) -> UnknownValuePolicy {
        self.unknown_value
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_options_roundtrip() {
        let opts = DecodeOptions::strict();
        let json = serde_json::to_string(&opts).unwrap();
        assert_eq!(
            json,
            r#"{"integer_encoding":"signed","time_ticks":"big_endian","unknown_value":"reject"}"#
        );
        let back: DecodeOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, opts);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let opts: DecodeOptions = serde_json::from_str(r#"{"integer_encoding":"signed"}"#).unwrap();
        assert_eq!(opts.integers(), IntegerEncoding::Signed);
        assert_eq!(opts.time_ticks_format(), TimeTicksFormat::Concatenated);
        assert_eq!(opts.unknown_values(), UnknownValuePolicy::Preserve);

        let opts: DecodeOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, DecodeOptions::default());
    }
}
