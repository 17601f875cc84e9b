//! Caesar cipher over the ASCII Latin alphabet.
//!
//! Letters `A`–`Z` and `a`–`z` are rotated through their own 26-letter
//! alphabet, keeping their case. Every other character, including non-ASCII
//! letters, passes through untouched.

/// Shift used by the `encrypt` command.
pub const DEFAULT_SHIFT: i64 = 3;

const ALPHABET_LEN: i64 = 26;

/// Shift a single character by `shift` positions.
///
/// Characters outside `A`–`Z` and `a`–`z` are returned unchanged.
pub fn shift_char(c: char, shift: i64) -> char {
    let base = if c.is_ascii_uppercase() {
        b'A'
    } else if c.is_ascii_lowercase() {
        b'a'
    } else {
        return c;
    };

    // rem_euclid keeps the offset in 0..26 for negative and huge shifts
    let offset = shift.rem_euclid(ALPHABET_LEN) as u8;
    let position = c as u8 - base;
    ((position + offset) % ALPHABET_LEN as u8 + base) as char
}

/// Encrypt `text` by shifting every ASCII letter `shift` positions.
///
/// Total over all inputs: any integer shift is accepted and the result is
/// periodic in `shift` with period 26.
///
/// # Example
///
/// ```
/// use caesar_guard::cipher::{encrypt, DEFAULT_SHIFT};
///
/// assert_eq!(encrypt("Hello, World!", DEFAULT_SHIFT), "Khoor, Zruog!");
/// ```
pub fn encrypt(text: &str, shift: i64) -> String {
    text.chars().map(|c| shift_char(c, shift)).collect()
}
