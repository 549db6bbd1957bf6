//! Hexadecimal codec for unsigned 64-bit identifier parts.
//!
//! Identifiers are built from one or two 64-bit values; this module owns
//! the conversion between those values and their wire-visible lowercase
//! hexadecimal form.

use crate::ParseError;

/// Encodes `value` as exactly 16 lowercase hexadecimal characters,
/// zero-padded, treating the value as unsigned.
pub fn to_lower_hex(value: u64) -> String {
    format!("{value:016x}")
}

/// Decodes an unsigned 64-bit value from hexadecimal.
///
/// Exact inverse of [`to_lower_hex`] for canonical 16-character strings.
/// Shorter input and uppercase digits are accepted. Fails on the empty
/// string, any character outside `[0-9a-fA-F]`, and values that overflow
/// 64 bits.
pub fn parse_unsigned_hex(hex: &str) -> Result<u64, ParseError> {
    // `from_str_radix` tolerates a leading `+`, which is not a valid
    // identifier character on the wire.
    if hex.bytes().any(|b| !b.is_ascii_hexdigit()) {
        return Err(ParseError::NonHex);
    }
    u64::from_str_radix(hex, 16).map_err(ParseError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    fn codec_test_data() -> Vec<(u64, &'static str)> {
        vec![
            (0, "0000000000000000"),
            (42, "000000000000002a"),
            (999, "00000000000003e7"),
            (5508496025762705295, "4c721bf33e3caf8f"),
            (u64::MAX, "ffffffffffffffff"),
        ]
    }

    #[test]
    fn encodes_fixed_width_lowercase() {
        for (value, hex) in codec_test_data() {
            assert_eq!(to_lower_hex(value), hex);
        }
    }

    #[test]
    fn parse_inverts_encode() {
        for (value, hex) in codec_test_data() {
            assert_eq!(parse_unsigned_hex(hex).unwrap(), value);
        }
    }

    #[test]
    fn parse_accepts_short_and_uppercase_input() {
        assert_eq!(parse_unsigned_hex("2a").unwrap(), 42);
        assert_eq!(parse_unsigned_hex("3E7").unwrap(), 999);
    }

    #[test]
    fn parse_rejects_invalid_input() {
        assert!(parse_unsigned_hex("").is_err());
        assert!(parse_unsigned_hex("zz").is_err());
        assert!(parse_unsigned_hex("0x2a").is_err());
        assert!(parse_unsigned_hex("+000000000000002a").is_err());
        assert!(parse_unsigned_hex("-1").is_err());
        // 17 hexadecimal characters overflow a u64.
        assert!(parse_unsigned_hex("10000000000000000").is_err());
    }
}
