//! BER length decoding.
//!
//! Length encoding follows X.690 Section 8.1.3:
//! - Short form: Single byte, bit 8=0, value 0-127
//! - Long form: Initial byte (bit 8=1, bits 7-1=count), followed by length bytes
//! - Indefinite form (0x80): Rejected
//!
//! Long-form values are accumulated with an explicit overflow check, so a
//! length field that does not fit in `usize` is an error rather than a
//! silently wrapped value.

use crate::error::{DecodeErrorKind, Error, Result};

/// Decode a length from bytes, returning (length, bytes_consumed)
///
/// The `base_offset` parameter is used to report error offsets correctly
/// when this is called from within a decoder.
pub fn decode_length(data: &[u8], base_offset: usize) -> Result<(usize, usize)> {
    let Some(&first) = data.first() else {
        return Err(Error::decode(base_offset, DecodeErrorKind::BufferUnderrun));
    };

    if first & 0x80 == 0 {
        // Short form
        return Ok((first as usize, 1));
    }

    // Long form
    let num_octets = (first & 0x7F) as usize;

    if num_octets == 0 {
        // Indefinite length
        return Err(Error::decode(
            base_offset,
            DecodeErrorKind::UnsupportedEncoding,
        ));
    }

    let mut len: usize = 0;
    for i in 0..num_octets {
        let Some(&b) = data.get(1 + i) else {
            return Err(Error::decode(
                base_offset + 1 + i,
                DecodeErrorKind::BufferUnderrun,
            ));
        };
        if len > usize::MAX >> 8 {
            return Err(Error::decode(base_offset, DecodeErrorKind::InvalidLength));
        }
        len = (len << 8) | b as usize;
    }

    Ok((len, 1 + num_octets))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_form() {
        assert_eq!(decode_length(&[0], 0).unwrap(), (0, 1));
        assert_eq!(decode_length(&[127], 0).unwrap(), (127, 1));
        assert_eq!(decode_length(&[1], 0).unwrap(), (1, 1));
    }

    #[test]
    fn test_long_form_1_byte() {
        assert_eq!(decode_length(&[0x81, 128], 0).unwrap(), (128, 2));
        assert_eq!(decode_length(&[0x81, 255], 0).unwrap(), (255, 2));
    }

    #[test]
    fn test_long_form_2_bytes() {
        assert_eq!(decode_length(&[0x82, 0x01, 0x00], 0).unwrap(), (256, 3));
        assert_eq!(decode_length(&[0x82, 0xFF, 0xFF], 0).unwrap(), (65535, 3));
    }

    #[test]
    fn test_long_form_4_bytes() {
        assert_eq!(
            decode_length(&[0x84, 0x01, 0x02, 0x03, 0x04], 0).unwrap(),
            (0x01020304, 5)
        );
    }

    #[test]
    fn test_indefinite_rejected() {
        let err = decode_length(&[0x80], 5).unwrap_err();
        assert_eq!(err, Error::decode(5, DecodeErrorKind::UnsupportedEncoding));
    }

    #[test]
    fn test_empty_input() {
        let err = decode_length(&[], 9).unwrap_err();
        assert_eq!(err, Error::decode(9, DecodeErrorKind::BufferUnderrun));
    }

    #[test]
    fn test_truncated_long_form() {
        // Announces 3 length bytes, supplies 1
        let err = decode_length(&[0x83, 0x01], 10).unwrap_err();
        assert_eq!(err, Error::decode(12, DecodeErrorKind::BufferUnderrun));
    }

    #[test]
    fn test_accept_oversized_length_encoding() {
        // Non-minimal length encodings are valid per X.690 Section 8.1.3.5 Note 2
        assert_eq!(decode_length(&[0x82, 0x00, 0x05], 0).unwrap(), (5, 3));
        assert_eq!(decode_length(&[0x81, 0x01], 0).unwrap(), (1, 2));
        assert_eq!(decode_length(&[0x83, 0x00, 0x00, 0x80], 0).unwrap(), (128, 4));
    }

    #[test]
    fn test_leading_zero_octets_do_not_overflow() {
        // More octets than usize holds, but the value itself is small
        let mut data = vec![0x80 | (usize::BITS / 8 + 2) as u8];
        data.extend(std::iter::repeat_n(0x00, (usize::BITS / 8 + 1) as usize));
        data.push(0x2A);
        let (len, consumed) = decode_length(&data, 0).unwrap();
        assert_eq!(len, 42);
        assert_eq!(consumed, data.len());
    }

    #[test]
    fn test_overflow_rejected() {
        let mut data = vec![0x80 | (usize::BITS / 8 + 1) as u8];
        data.extend(std::iter::repeat_n(0xFF, (usize::BITS / 8 + 1) as usize));
        let err = decode_length(&data, 0).unwrap_err();
        assert_eq!(err, Error::decode(0, DecodeErrorKind::InvalidLength));
    }
}
