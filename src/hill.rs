//! Hill cipher engine: matrix-based polygraphic substitution.
//!
//! The key is an n×n integer matrix (n between 2 and 8). Plaintext is
//! mapped to values 0-25, padded with 'X' to a multiple of n, and each
//! block is multiplied by the key matrix mod 26. Decryption multiplies
//! by the modular inverse matrix `(adjugate · det⁻¹) mod 26`.
//!
//! All determinant and adjugate arithmetic runs over exact `BigInt`
//! values. Floating-point matrix inversion followed by rounding loses
//! correctness for larger or ill-conditioned keys, so it is never used.

use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::error::CipherError;
use crate::utils::alphabet::{self, ALPHABET_LEN};

/// Smallest supported key matrix side length.
const MIN_KEY_SIZE: usize = 2;

/// Largest supported key matrix side length.
const MAX_KEY_SIZE: usize = 8;

/// Letter used to pad plaintext to a multiple of the block size.
const PAD_LETTER: u8 = b'X';

/// Hill cipher engine holding a validated key matrix.
///
/// Construction validates the key (size bounds, exact nonzero
/// determinant); the engine is immutable afterwards and each
/// encrypt/decrypt call is an independent pure function, so a single
/// engine may be shared freely across threads.
///
/// # Examples
///
/// ```
/// use polygraph::HillCipher;
///
/// let cipher = HillCipher::new(&[3, 3, 2, 5], 2).unwrap();
/// let encrypted = cipher.encrypt("HELP").unwrap();
/// assert_eq!(encrypted, "HIAT");
/// assert_eq!(cipher.decrypt(&encrypted).unwrap(), "HELP");
/// ```
pub struct HillCipher {
    size: usize,
    cells: Vec<i64>,
    reduced: Vec<i64>,
    det_mod26: i64,
}

impl HillCipher {
    /// Validates a key matrix and creates an engine for it.
    ///
    /// The determinant is computed exactly over big integers, so any
    /// integer cell values are accepted without overflow or rounding.
    ///
    /// # Parameters
    /// - `cells`: The key matrix in row-major order, `size * size` cells.
    /// - `size`: Side length of the matrix, between 2 and 8.
    ///
    /// # Errors
    /// - [`CipherError::InvalidKeySize`] if `size` is outside [2, 8] or
    ///   `cells` does not hold exactly `size * size` entries.
    /// - [`CipherError::SingularKey`] if the determinant is zero.
    ///
    /// A key whose determinant is nonzero but shares a factor with 26
    /// is accepted here: it can encrypt, and only
    /// [`decrypt`](Self::decrypt) reports it as non-invertible.
    pub fn new(cells: &[i64], size: usize) -> Result<Self, CipherError> {
        if !(MIN_KEY_SIZE..=MAX_KEY_SIZE).contains(&size) {
            return Err(CipherError::InvalidKeySize { size });
        }
        if cells.len() != size * size {
            return Err(CipherError::InvalidKeySize { size });
        }
        let det = determinant(to_bigint_rows(cells, size));
        if det.is_zero() {
            return Err(CipherError::SingularKey);
        }
        let det_mod26 = reduce_mod26(&det);
        let reduced = cells.iter().map(|&c| c.rem_euclid(ALPHABET_LEN)).collect();
        Ok(HillCipher {
            size,
            cells: cells.to_vec(),
            reduced,
            det_mod26,
        })
    }

    /// Returns the side length of the key matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the key determinant reduced into [0, 25].
    pub fn determinant_mod26(&self) -> i64 {
        self.det_mod26
    }

    /// Encrypts plaintext with the key matrix.
    ///
    /// Input is uppercased and stripped of whitespace, padded with 'X'
    /// to a multiple of the block size, and transformed block-by-block.
    ///
    /// # Errors
    /// - [`CipherError::InvalidCharacter`] for input outside A-Z.
    /// - [`CipherError::EmptyText`] if no letters remain.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        let values = self.prepare_text(plaintext)?;
        Ok(self.transform(&self.reduced, &values))
    }

    /// Decrypts ciphertext with the modular inverse of the key matrix.
    ///
    /// The inverse is `(adjugate · det⁻¹) mod 26`, with the adjugate
    /// computed from exact big-integer cofactors. Padding introduced by
    /// [`encrypt`](Self::encrypt) is not stripped; trailing 'X' is a
    /// presentation-layer concern.
    ///
    /// # Errors
    /// - [`CipherError::NonInvertibleModulus`] if the determinant mod 26
    ///   has no multiplicative inverse (gcd with 26 is not 1).
    /// - [`CipherError::InvalidCharacter`] for input outside A-Z.
    /// - [`CipherError::EmptyText`] if no letters remain.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        let inverse = self.inverse_key()?;
        let values = self.prepare_text(ciphertext)?;
        Ok(self.transform(&inverse, &values))
    }

    /// Normalizes text and pads it with 'X' to a block-size multiple.
    fn prepare_text(&self, raw: &str) -> Result<Vec<i64>, CipherError> {
        let letters = alphabet::normalize(raw)?;
        if letters.is_empty() {
            return Err(CipherError::EmptyText);
        }
        let mut values: Vec<i64> = letters.iter().map(|&b| alphabet::value(b)).collect();
        while values.len() % self.size != 0 {
            values.push(alphabet::value(PAD_LETTER));
        }
        Ok(values)
    }

    /// Applies matrix·block mod 26 to every block and collects letters.
    ///
    /// `matrix` cells must already be reduced into [0, 25], so each dot
    /// product stays far below `i64` range.
    fn transform(&self, matrix: &[i64], values: &[i64]) -> String {
        let n = self.size;
        let mut out = String::with_capacity(values.len());
        for block in values.chunks(n) {
            for row in 0..n {
                let mut sum = 0i64;
                for (col, &v) in block.iter().enumerate() {
                    sum += matrix[row * n + col] * v;
                }
                out.push(alphabet::letter(sum.rem_euclid(ALPHABET_LEN)) as char);
            }
        }
        out
    }

    /// Builds the inverse key matrix `(adjugate · det⁻¹) mod 26`.
    fn inverse_key(&self) -> Result<Vec<i64>, CipherError> {
        let det_inv = mod_inverse(self.det_mod26).ok_or(CipherError::NonInvertibleModulus {
            det: self.det_mod26,
        })?;
        let n = self.size;
        let mut inverse = vec![0i64; n * n];
        for row in 0..n {
            for col in 0..n {
                let mut cofactor = determinant(minor_rows(&self.cells, n, row, col));
                if (row + col) % 2 == 1 {
                    cofactor = -cofactor;
                }
                // Transposition of the cofactor matrix yields the adjugate.
                inverse[col * n + row] = (reduce_mod26(&cofactor) * det_inv).rem_euclid(ALPHABET_LEN);
            }
        }
        Ok(inverse)
    }
}

/// Finds the multiplicative inverse of `a` mod 26 by scanning [1, 25].
///
/// The modulus is fixed and tiny, so the brute-force scan is as fast as
/// the extended Euclidean algorithm in practice. Returns `None` when
/// gcd(a, 26) != 1.
fn mod_inverse(a: i64) -> Option<i64> {
    (1..ALPHABET_LEN).find(|x| (a * x) % ALPHABET_LEN == 1)
}

/// Reduces a big integer into [0, 25].
fn reduce_mod26(value: &BigInt) -> i64 {
    let modulus = BigInt::from(ALPHABET_LEN);
    let mut r = value % &modulus;
    if r.is_negative() {
        r += &modulus;
    }
    r.to_i64().expect("value reduced mod 26 fits in i64")
}

/// Copies a row-major cell slice into `BigInt` rows.
fn to_bigint_rows(cells: &[i64], n: usize) -> Vec<Vec<BigInt>> {
    (0..n)
        .map(|row| (0..n).map(|col| BigInt::from(cells[row * n + col])).collect())
        .collect()
}

/// Extracts the minor of `cells` with `skip_row`/`skip_col` removed.
fn minor_rows(cells: &[i64], n: usize, skip_row: usize, skip_col: usize) -> Vec<Vec<BigInt>> {
    let mut rows = Vec::with_capacity(n - 1);
    for row in 0..n {
        if row == skip_row {
            continue;
        }
        let mut out = Vec::with_capacity(n - 1);
        for col in 0..n {
            if col == skip_col {
                continue;
            }
            out.push(BigInt::from(cells[row * n + col]));
        }
        rows.push(out);
    }
    rows
}

/// Exact integer determinant via fraction-free Bareiss elimination.
///
/// Divisions in the Bareiss recurrence are exact over the integers, so
/// the result is the true determinant with no rounding for any cell
/// magnitude. Row swaps flip the sign; a column with no usable pivot
/// means the matrix is singular.
fn determinant(mut m: Vec<Vec<BigInt>>) -> BigInt {
    let n = m.len();
    if n == 1 {
        return m[0][0].clone();
    }
    let mut sign = BigInt::one();
    let mut prev = BigInt::one();
    for k in 0..n - 1 {
        if m[k][k].is_zero() {
            let pivot = (k + 1..n).find(|&r| !m[r][k].is_zero());
            match pivot {
                Some(r) => {
                    m.swap(k, r);
                    sign = -sign;
                }
                None => return BigInt::zero(),
            }
        }
        for i in k + 1..n {
            for j in k + 1..n {
                let num = &m[i][j] * &m[k][k] - &m[i][k] * &m[k][j];
                m[i][j] = num / &prev;
            }
        }
        prev = m[k][k].clone();
    }
    sign * m[n - 1][n - 1].clone()
}
