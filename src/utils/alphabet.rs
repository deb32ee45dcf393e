//! A-Z alphabet normalization and letter/value mapping.
//!
//! Both cipher engines share the same 26-letter convention: A-Z maps to
//! 0-25, input is uppercased and stripped of whitespace, and anything
//! else is rejected. Padding rules differ per engine and stay there.

use crate::error::CipherError;

/// Number of letters in the cipher alphabet.
pub(crate) const ALPHABET_LEN: i64 = 26;

/// Normalizes raw input into a sequence of uppercase A-Z bytes.
///
/// Whitespace is stripped, ASCII lowercase is uppercased, and any other
/// character is rejected.
///
/// # Parameters
/// - `raw`: Arbitrary caller-supplied key or text.
///
/// # Errors
/// Returns [`CipherError::InvalidCharacter`] with the first offending
/// character if anything outside A-Z remains after stripping.
pub(crate) fn normalize(raw: &str) -> Result<Vec<u8>, CipherError> {
    let mut letters = Vec::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_whitespace() {
            continue;
        }
        let upper = ch.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            letters.push(upper as u8);
        } else {
            return Err(CipherError::InvalidCharacter(ch));
        }
    }
    Ok(letters)
}

/// Maps an uppercase letter byte to its alphabet value in [0, 25].
pub(crate) fn value(letter: u8) -> i64 {
    (letter - b'A') as i64
}

/// Maps an alphabet value in [0, 25] back to its uppercase letter byte.
pub(crate) fn letter(value: i64) -> u8 {
    b'A' + value as u8
}
