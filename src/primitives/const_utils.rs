//! Const evaluation utilities
//!
//! String comparison and the byte packing used by [`Name`](crate::Name)
//! keys. Everything here runs during const evaluation.

/// Maximum byte length of a string-literal key.
pub const MAX_NAME_LEN: usize = 32;

/// Compare two strings for equality in a const context
pub const fn str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

// =============================================================================
// Raw Byte Packing
// =============================================================================
//
// Pack string bytes directly into u128 words without hashing. Byte `i` of a
// word lives in bits `i * 8 .. i * 8 + 8`.

/// Pack bytes [offset, offset+16) of string into u128
/// Pads with 0 if string is shorter
pub const fn pack_bytes_u128(s: &str, offset: usize) -> u128 {
    let bytes = s.as_bytes();
    let mut result: u128 = 0;
    let mut i = 0;
    while i < 16 {
        let idx = offset + i;
        let byte = if idx < bytes.len() { bytes[idx] } else { 0 };
        result |= (byte as u128) << (i * 8);
        i += 1;
    }
    result
}

/// Low word of a packed key name (bytes 0..16).
pub const fn pack_lo(s: &str) -> u128 { pack_bytes_u128(s, 0) }

/// High word of a packed key name (bytes 16..32).
pub const fn pack_hi(s: &str) -> u128 { pack_bytes_u128(s, 16) }

/// Unpack two words into the zero-padded name buffer.
pub const fn unpack_name(lo: u128, hi: u128) -> [u8; MAX_NAME_LEN] {
    let mut out = [0u8; MAX_NAME_LEN];
    let mut i = 0;
    while i < 16 {
        out[i] = (lo >> (i * 8)) as u8;
        out[i + 16] = (hi >> (i * 8)) as u8;
        i += 1;
    }
    out
}

/// Length of a zero-padded name buffer (position of the first NUL).
pub const fn packed_len(bytes: &[u8; MAX_NAME_LEN]) -> usize {
    let mut i = 0;
    while i < MAX_NAME_LEN {
        if bytes[i] == 0 {
            return i;
        }
        i += 1;
    }
    MAX_NAME_LEN
}

/// View a zero-padded name buffer as a string, dropping the padding.
///
/// Panics during const evaluation when the bytes are not UTF-8, which can
/// only happen for hand-written `Name` parameters.
pub const fn packed_str(bytes: &'static [u8; MAX_NAME_LEN]) -> &'static str {
    let (name, _) = bytes.as_slice().split_at(packed_len(bytes));
    match core::str::from_utf8(name) {
        Ok(s) => s,
        Err(_) => panic!("packed key name is not valid UTF-8"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_eq() {
        assert!(str_eq("foo", "foo"));
        assert!(str_eq("", ""));
        assert!(!str_eq("foo", "fo"));
        assert!(!str_eq("foo", "bar"));
    }

    #[test]
    fn test_pack_unpack() {
        const BYTES: &[u8; MAX_NAME_LEN] = &unpack_name(pack_lo("on_click"), pack_hi("on_click"));
        assert_eq!(packed_len(BYTES), 8);
        assert_eq!(packed_str(BYTES), "on_click");
    }

    #[test]
    fn test_pack_spans_both_words() {
        let name = "a_rather_long_event_name_32bytes";
        assert_eq!(name.len(), MAX_NAME_LEN);
        let bytes = unpack_name(pack_lo(name), pack_hi(name));
        assert_eq!(&bytes[..], name.as_bytes());
        assert_eq!(packed_len(&bytes), MAX_NAME_LEN);
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(pack_lo(""), 0);
        assert_eq!(pack_hi(""), 0);
        const BYTES: &[u8; MAX_NAME_LEN] = &unpack_name(0, 0);
        assert_eq!(packed_str(BYTES), "");
    }
}
