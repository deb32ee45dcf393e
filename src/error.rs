//! Error types for the polygraph library.

use thiserror::Error;

/// Errors produced by the polygraph library.
///
/// Every failure carries enough context for a caller to build a
/// user-facing message: the offending character, the rejected size,
/// the reduced determinant, or the symbol count.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Hill key size outside [2, 8], or the flat cell grid does not
    /// contain `size * size` entries.
    #[error("key size must be between 2 and 8, got {size}")]
    InvalidKeySize {
        /// The rejected side length.
        size: usize,
    },

    /// Hill key matrix has a zero determinant and defines no bijection.
    #[error("key matrix is singular (determinant is zero)")]
    SingularKey,

    /// The key determinant, reduced mod 26, shares a factor with 26 and
    /// therefore has no multiplicative inverse. Encryption still works
    /// with such a key; decryption cannot.
    #[error("determinant {det} has no multiplicative inverse modulo 26")]
    NonInvertibleModulus {
        /// Determinant reduced into [0, 25].
        det: i64,
    },

    /// Input text or key contains a character outside A-Z after
    /// uppercasing and whitespace stripping.
    #[error("character {0:?} is outside the A-Z alphabet")]
    InvalidCharacter(char),

    /// Key contains no letters after normalization.
    #[error("key must contain at least one letter")]
    EmptyKey,

    /// Text contains no letters after normalization.
    #[error("text must contain at least one letter")]
    EmptyText,

    /// Playfair key square construction did not yield exactly 25 unique
    /// symbols.
    #[error("key square construction yielded {symbols} symbols, expected 25")]
    InvalidKeySquare {
        /// Number of symbols actually placed.
        symbols: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_key_size() {
        let err = CipherError::InvalidKeySize { size: 9 };
        assert_eq!(format!("{}", err), "key size must be between 2 and 8, got 9");
    }

    #[test]
    fn test_display_singular_key() {
        let err = CipherError::SingularKey;
        assert_eq!(
            format!("{}", err),
            "key matrix is singular (determinant is zero)"
        );
    }

    #[test]
    fn test_display_non_invertible_modulus() {
        let err = CipherError::NonInvertibleModulus { det: 13 };
        assert_eq!(
            format!("{}", err),
            "determinant 13 has no multiplicative inverse modulo 26"
        );
    }

    #[test]
    fn test_display_invalid_character() {
        let err = CipherError::InvalidCharacter('7');
        assert_eq!(
            format!("{}", err),
            "character '7' is outside the A-Z alphabet"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CipherError::EmptyKey, CipherError::EmptyKey);
        assert_ne!(CipherError::EmptyKey, CipherError::EmptyText);
        assert_ne!(
            CipherError::InvalidKeySize { size: 1 },
            CipherError::InvalidKeySize { size: 9 }
        );
    }

    #[test]
    fn test_error_clone() {
        let err = CipherError::InvalidKeySquare { symbols: 24 };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
