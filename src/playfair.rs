//! Playfair cipher engine: digraph substitution over a 5×5 key square.
//!
//! The key square holds the 25 letters A-Z with J folded into I, filled
//! row-major with the deduplicated key followed by the remaining
//! alphabet. Text is split into digraphs (doubled letters and an odd
//! tail are padded with 'X') and each pair is substituted by the
//! row / column / rectangle rules.

use crate::error::CipherError;
use crate::utils::alphabet;

/// Side length of the key square.
const SQUARE_SIDE: usize = 5;

/// Number of symbols in the key square (A-Z with J folded into I).
const SQUARE_SYMBOLS: usize = 25;

/// Letter used to split doubled digraphs and pad odd-length text.
const PAD_LETTER: u8 = b'X';

/// Playfair cipher engine holding a key square.
///
/// The square and a letter→position reverse map are built once at
/// construction and reused for every pair, so lookups are O(1). The
/// engine is immutable afterwards; encrypt/decrypt are pure functions
/// and the engine may be shared across threads.
///
/// # Examples
///
/// ```
/// use polygraph::PlayfairCipher;
///
/// let cipher = PlayfairCipher::new("MONARCHY").unwrap();
/// let encrypted = cipher.encrypt("INSTRUMENTS").unwrap();
/// assert_eq!(encrypted, "GATLMZCLRQXA");
/// assert_eq!(cipher.decrypt(&encrypted).unwrap(), "INSTRUMENTSX");
/// ```
pub struct PlayfairCipher {
    square: [[u8; SQUARE_SIDE]; SQUARE_SIDE],
    positions: [(usize, usize); 26],
}

impl PlayfairCipher {
    /// Builds the key square for a key string.
    ///
    /// The key is uppercased, stripped of whitespace, and J-folded;
    /// letters fill the square in first-occurrence order, followed by
    /// the rest of the alphabet (J excluded) in natural order.
    ///
    /// # Errors
    /// - [`CipherError::InvalidCharacter`] for key characters outside A-Z.
    /// - [`CipherError::EmptyKey`] if no letters remain.
    /// - [`CipherError::InvalidKeySquare`] if construction did not place
    ///   exactly 25 symbols (unreachable with the fixed alphabet; kept
    ///   as a guard on the square invariant).
    pub fn new(key: &str) -> Result<Self, CipherError> {
        let letters = fold_j(alphabet::normalize(key)?);
        if letters.is_empty() {
            return Err(CipherError::EmptyKey);
        }

        let mut order = Vec::with_capacity(SQUARE_SYMBOLS);
        let mut seen = [false; 26];
        let mut place = |letter: u8| {
            let index = (letter - b'A') as usize;
            if !seen[index] {
                seen[index] = true;
                order.push(letter);
            }
        };
        for &letter in &letters {
            place(letter);
        }
        for letter in b'A'..=b'Z' {
            if letter != b'J' {
                place(letter);
            }
        }
        if order.len() != SQUARE_SYMBOLS {
            return Err(CipherError::InvalidKeySquare {
                symbols: order.len(),
            });
        }

        let mut square = [[0u8; SQUARE_SIDE]; SQUARE_SIDE];
        let mut positions = [(0usize, 0usize); 26];
        for (k, &letter) in order.iter().enumerate() {
            let row = k / SQUARE_SIDE;
            let col = k % SQUARE_SIDE;
            square[row][col] = letter;
            positions[(letter - b'A') as usize] = (row, col);
        }
        // J shares I's cell; prepared text never contains J, but the
        // map stays total.
        positions[(b'J' - b'A') as usize] = positions[(b'I' - b'A') as usize];

        Ok(PlayfairCipher { square, positions })
    }

    /// Returns the key square as five 5-letter rows.
    pub fn rows(&self) -> [String; 5] {
        self.square
            .map(|row| row.iter().map(|&b| b as char).collect::<String>())
    }

    /// Encrypts plaintext digraph-by-digraph.
    ///
    /// Same row: each letter shifts one column right (wrapping). Same
    /// column: one row down (wrapping). Rectangle: each letter takes its
    /// partner's column.
    ///
    /// # Errors
    /// - [`CipherError::InvalidCharacter`] for input outside A-Z.
    /// - [`CipherError::EmptyText`] if no letters remain.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        self.transform(plaintext, 1)
    }

    /// Decrypts ciphertext digraph-by-digraph.
    ///
    /// Mirrors [`encrypt`](Self::encrypt): row shifts go left, column
    /// shifts go up, and the rectangle rule is its own inverse. The 'X'
    /// letters inserted by digraph preparation are not stripped.
    ///
    /// # Errors
    /// Same as [`encrypt`](Self::encrypt).
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        self.transform(ciphertext, SQUARE_SIDE - 1)
    }

    /// Shared encrypt/decrypt path; `shift` is +1 mod 5 for encryption
    /// and -1 mod 5 (i.e. 4) for decryption.
    fn transform(&self, raw: &str, shift: usize) -> Result<String, CipherError> {
        let pairs = prepare_digraphs(raw)?;
        let mut out = String::with_capacity(pairs.len() * 2);
        for (a, b) in pairs {
            let (x, y) = self.map_pair(a, b, shift);
            out.push(x as char);
            out.push(y as char);
        }
        Ok(out)
    }

    /// Looks up a letter's (row, col) in the precomputed reverse map.
    fn locate(&self, letter: u8) -> (usize, usize) {
        self.positions[(letter - b'A') as usize]
    }

    /// Applies the row / column / rectangle rule to one digraph.
    fn map_pair(&self, a: u8, b: u8, shift: usize) -> (u8, u8) {
        let (a_row, a_col) = self.locate(a);
        let (b_row, b_col) = self.locate(b);
        if a_row == b_row {
            (
                self.square[a_row][(a_col + shift) % SQUARE_SIDE],
                self.square[b_row][(b_col + shift) % SQUARE_SIDE],
            )
        } else if a_col == b_col {
            (
                self.square[(a_row + shift) % SQUARE_SIDE][a_col],
                self.square[(b_row + shift) % SQUARE_SIDE][b_col],
            )
        } else {
            (self.square[a_row][b_col], self.square[b_row][a_col])
        }
    }
}

/// Replaces every J with I.
fn fold_j(mut letters: Vec<u8>) -> Vec<u8> {
    for letter in letters.iter_mut() {
        if *letter == b'J' {
            *letter = b'I';
        }
    }
    letters
}

/// Splits normalized text into digraphs.
///
/// Scanning left to right: a doubled letter at the scan position emits
/// `(letter, 'X')` and advances one; a lone final letter pairs with 'X'.
fn prepare_digraphs(raw: &str) -> Result<Vec<(u8, u8)>, CipherError> {
    let letters = fold_j(alphabet::normalize(raw)?);
    if letters.is_empty() {
        return Err(CipherError::EmptyText);
    }
    let mut pairs = Vec::with_capacity(letters.len() / 2 + 1);
    let mut i = 0;
    while i < letters.len() {
        if i == letters.len() - 1 || letters[i] == letters[i + 1] {
            pairs.push((letters[i], PAD_LETTER));
            i += 1;
        } else {
            pairs.push((letters[i], letters[i + 1]));
            i += 2;
        }
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_square_monarchy() {
        let cipher = PlayfairCipher::new("MONARCHY").unwrap();
        assert_eq!(cipher.rows(), ["MONAR", "CHYBD", "EFGIK", "LPQST", "UVWXZ"]);
    }

    #[test]
    fn test_key_square_deduplicates_preserving_order() {
        let cipher = PlayfairCipher::new("BALLOON").unwrap();
        assert_eq!(cipher.rows()[0], "BALON");
    }

    #[test]
    fn test_key_square_folds_j_into_i() {
        let cipher = PlayfairCipher::new("JAZZ").unwrap();
        assert_eq!(cipher.rows()[0], "IAZBC");
        let flat: String = cipher.rows().concat();
        assert!(!flat.contains('J'));
        assert_eq!(flat.len(), 25);
    }

    #[test]
    fn test_key_square_unique_symbols() {
        let cipher = PlayfairCipher::new("PLAYFAIR EXAMPLE").unwrap();
        let flat: String = cipher.rows().concat();
        let mut seen = [false; 26];
        for b in flat.bytes() {
            let index = (b - b'A') as usize;
            assert!(!seen[index], "duplicate symbol {}", b as char);
            seen[index] = true;
        }
        assert!(!seen[(b'J' - b'A') as usize]);
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(
            PlayfairCipher::new(""),
            Err(CipherError::EmptyKey)
        ));
        assert!(matches!(
            PlayfairCipher::new("   "),
            Err(CipherError::EmptyKey)
        ));
    }

    #[test]
    fn test_key_with_digits_rejected() {
        assert!(matches!(
            PlayfairCipher::new("CIPHER 123"),
            Err(CipherError::InvalidCharacter('1'))
        ));
    }

    #[test]
    fn test_prepare_digraphs_basic() {
        let pairs = prepare_digraphs("INSTRUMENTS").unwrap();
        let text: Vec<String> = pairs
            .iter()
            .map(|&(a, b)| format!("{}{}", a as char, b as char))
            .collect();
        assert_eq!(text, ["IN", "ST", "RU", "ME", "NT", "SX"]);
    }

    #[test]
    fn test_prepare_digraphs_doubled_letter() {
        let pairs = prepare_digraphs("BALLOON").unwrap();
        let text: Vec<String> = pairs
            .iter()
            .map(|&(a, b)| format!("{}{}", a as char, b as char))
            .collect();
        assert_eq!(text, ["BA", "LX", "LO", "ON"]);
    }

    #[test]
    fn test_prepare_digraphs_folds_j() {
        let pairs = prepare_digraphs("JUMP").unwrap();
        assert_eq!(pairs, vec![(b'I', b'U'), (b'M', b'P')]);
    }

    #[test]
    fn test_prepare_digraphs_single_letter() {
        assert_eq!(prepare_digraphs("A").unwrap(), vec![(b'A', b'X')]);
    }

    #[test]
    fn test_encrypt_instruments_golden() {
        let cipher = PlayfairCipher::new("MONARCHY").unwrap();
        assert_eq!(cipher.encrypt("INSTRUMENTS").unwrap(), "GATLMZCLRQXA");
    }

    #[test]
    fn test_decrypt_instruments_golden() {
        let cipher = PlayfairCipher::new("MONARCHY").unwrap();
        assert_eq!(cipher.decrypt("GATLMZCLRQXA").unwrap(), "INSTRUMENTSX");
    }

    #[test]
    fn test_same_row_wraps() {
        let cipher = PlayfairCipher::new("MONARCHY").unwrap();
        // R and M sit on row 0; R is in the last column and wraps to M.
        assert_eq!(cipher.encrypt("RM").unwrap(), "MO");
        assert_eq!(cipher.decrypt("MO").unwrap(), "RM");
    }

    #[test]
    fn test_same_column_wraps() {
        let cipher = PlayfairCipher::new("MONARCHY").unwrap();
        // M and U share column 0; U is in the last row and wraps to M.
        assert_eq!(cipher.encrypt("MU").unwrap(), "CM");
        assert_eq!(cipher.decrypt("CM").unwrap(), "MU");
    }

    #[test]
    fn test_rectangle_rule_self_inverse() {
        let cipher = PlayfairCipher::new("MONARCHY").unwrap();
        let encrypted = cipher.encrypt("IN").unwrap();
        assert_eq!(encrypted, "GA");
        assert_eq!(cipher.encrypt(&encrypted).unwrap(), "IN");
    }

    #[test]
    fn test_roundtrip_normalized() {
        let cipher = PlayfairCipher::new("KEYWORD").unwrap();
        let encrypted = cipher.encrypt("BALLOON").unwrap();
        assert_eq!(cipher.decrypt(&encrypted).unwrap(), "BALXLOON");
    }

    #[test]
    fn test_text_errors() {
        let cipher = PlayfairCipher::new("MONARCHY").unwrap();
        assert_eq!(cipher.encrypt(""), Err(CipherError::EmptyText));
        assert_eq!(
            cipher.encrypt("HI!"),
            Err(CipherError::InvalidCharacter('!'))
        );
        assert_eq!(cipher.decrypt(" "), Err(CipherError::EmptyText));
    }
}
