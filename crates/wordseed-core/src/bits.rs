//! Binary-digit string helpers
//!
//! Mnemonic encoding works on strings of `'0'`/`'1'` characters so that the
//! 8-bit byte fields and 11-bit word fields can be re-sliced freely.

/// Prepend `pad` to `s` until it is `width` characters long.
///
/// Strings already at or beyond `width` are returned unchanged.
pub fn left_pad(s: &str, pad: char, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat(pad).take(width - len));
    out.push_str(s);
    out
}

/// Render bytes as a bit-string, 8 bits per byte, MSB first.
pub fn bytes_to_bits(bytes: &[u8]) -> String {
    let mut bits = String::with_capacity(bytes.len() * 8);
    for byte in bytes {
        bits.push_str(&left_pad(&format!("{:b}", byte), '0', 8));
    }
    bits
}

/// Parse a bit-string (an 8-bit byte or an 11-bit word index) as an unsigned integer.
///
/// Any character other than `'1'` counts as a zero bit; callers only feed
/// strings produced by [`bytes_to_bits`] or [`left_pad`].
pub fn bits_to_byte(bits: &str) -> u32 {
    bits.bytes()
        .fold(0u32, |acc, b| (acc << 1) | u32::from(b == b'1'))
}

/// Split a bit-string into fixed-width chunks.
///
/// The final chunk is shorter when `bits.len()` is not a multiple of `width`.
pub(crate) fn chunks(bits: &str, width: usize) -> impl Iterator<Item = &str> {
    bits.as_bytes().chunks(width).map(|chunk| {
        // chunks of an ASCII '0'/'1' string are always valid UTF-8
        std::str::from_utf8(chunk).unwrap_or_default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_pad() {
        assert_eq!(left_pad("101", '0', 8), "00000101");
        assert_eq!(left_pad("", '0', 3), "000");
        assert_eq!(left_pad("11111111111", '0', 11), "11111111111");
        // wider input is left untouched
        assert_eq!(left_pad("110011", '0', 4), "110011");
    }

    #[test]
    fn test_bytes_to_bits_msb_first() {
        assert_eq!(bytes_to_bits(&[0x00]), "00000000");
        assert_eq!(bytes_to_bits(&[0x01]), "00000001");
        assert_eq!(bytes_to_bits(&[0x80, 0xff]), "1000000011111111");
        assert_eq!(bytes_to_bits(&[0x7f; 4]).len(), 32);
        assert_eq!(bytes_to_bits(&[]), "");
    }

    #[test]
    fn test_bits_to_byte() {
        assert_eq!(bits_to_byte("00000000"), 0);
        assert_eq!(bits_to_byte("11111111"), 255);
        assert_eq!(bits_to_byte("11111111111"), 2047);
        assert_eq!(bits_to_byte("00000000001"), 1);
    }

    #[test]
    fn test_bytes_bits_inverse() {
        for byte in 0u8..=255 {
            let bits = bytes_to_bits(&[byte]);
            assert_eq!(bits_to_byte(&bits), u32::from(byte));
        }
    }

    #[test]
    fn test_chunks() {
        let parts: Vec<&str> = chunks("0000000011111111101", 8).collect();
        assert_eq!(parts, vec!["00000000", "11111111", "101"]);
    }
}
