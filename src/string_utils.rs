//! UTF-8 Safe String Utilities
//!
//! Span insertion receives byte offsets from whatever front end drives it,
//! and those offsets can fall inside a multi-byte character. These helpers
//! snap arbitrary indices to valid UTF-8 character boundaries so slicing
//! never panics.

// ─────────────────────────────────────────────────────────────────────────────
// Character Boundary Functions
// ─────────────────────────────────────────────────────────────────────────────

/// Returns the largest index that is less than or equal to `index`
/// and is on a UTF-8 character boundary.
///
/// If `index` is greater than the string length, returns the string length.
/// If `index` is already on a character boundary, returns `index`.
#[inline]
pub fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    if index == 0 {
        return 0;
    }

    // Walk backwards to find the start of the character
    let bytes = s.as_bytes();
    let mut i = index;
    while i > 0 && !is_utf8_char_start(bytes[i]) {
        i -= 1;
    }
    i
}

/// Returns the smallest index that is greater than or equal to `index`
/// and is on a UTF-8 character boundary.
///
/// If `index` is greater than or equal to the string length, returns the
/// string length.
#[inline]
pub fn ceil_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    if index == 0 {
        return 0;
    }

    // Walk forwards to find the start of the next character
    let bytes = s.as_bytes();
    let mut i = index;
    while i < bytes.len() && !is_utf8_char_start(bytes[i]) {
        i += 1;
    }
    i
}

/// Check if a byte is the start of a UTF-8 character.
///
/// A byte is a char start if it's NOT a continuation byte (10xxxxxx).
#[inline]
fn is_utf8_char_start(byte: u8) -> bool {
    (byte & 0b1100_0000) != 0b1000_0000
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_on_ascii() {
        let s = "hello";
        assert_eq!(floor_char_boundary(s, 0), 0);
        assert_eq!(floor_char_boundary(s, 3), 3);
        assert_eq!(floor_char_boundary(s, 5), 5);
        assert_eq!(floor_char_boundary(s, 99), 5);
    }

    #[test]
    fn test_ceil_on_ascii() {
        let s = "hello";
        assert_eq!(ceil_char_boundary(s, 0), 0);
        assert_eq!(ceil_char_boundary(s, 3), 3);
        assert_eq!(ceil_char_boundary(s, 99), 5);
    }

    #[test]
    fn test_floor_inside_multibyte() {
        // 'å' is 2 bytes, starting at byte 6 in "Hei på deg"
        let s = "Hei på deg";
        let inside = 6; // continuation byte of 'å'
        assert!(!s.is_char_boundary(inside));
        let adjusted = floor_char_boundary(s, inside);
        assert!(s.is_char_boundary(adjusted));
        assert!(adjusted < inside);
    }

    #[test]
    fn test_ceil_inside_multibyte() {
        let s = "Hei på deg";
        let inside = 6;
        assert!(!s.is_char_boundary(inside));
        let adjusted = ceil_char_boundary(s, inside);
        assert!(s.is_char_boundary(adjusted));
        assert!(adjusted > inside);
    }

    #[test]
    fn test_boundaries_with_emoji() {
        // 🎉 is 4 bytes starting at byte 6
        let s = "Party 🎉 time";
        for i in 0..=s.len() {
            let lo = floor_char_boundary(s, i);
            let hi = ceil_char_boundary(s, i);
            assert!(s.is_char_boundary(lo));
            assert!(s.is_char_boundary(hi));
            assert!(lo <= i);
        }
    }
}
