//! Classical polygraphic substitution ciphers.
//!
//! Two self-contained cipher engines over the 26-letter Latin alphabet
//! (A-Z mapped to 0-25):
//!
//! - [`HillCipher`] — matrix-based, configurable block size 2-8. Key
//!   validation and decryption run on exact big-integer arithmetic, so
//!   determinants and adjugates are never rounded.
//! - [`PlayfairCipher`] — digraph substitution over a 5×5 key square
//!   with J folded into I.
//!
//! The engines share nothing beyond the alphabet convention. Each call
//! is a pure function over an immutable engine; failures are typed
//! [`CipherError`] values, never panics, and no partial output is
//! produced on failure.
//!
//! # Examples
//!
//! Hill cipher, block size 2:
//!
//! ```
//! use polygraph::HillCipher;
//!
//! let cipher = HillCipher::new(&[3, 3, 2, 5], 2)?;
//! let encrypted = cipher.encrypt("HELP")?;
//! assert_eq!(encrypted, "HIAT");
//! assert_eq!(cipher.decrypt(&encrypted)?, "HELP");
//! # Ok::<(), polygraph::CipherError>(())
//! ```
//!
//! Playfair cipher:
//!
//! ```
//! use polygraph::PlayfairCipher;
//!
//! let cipher = PlayfairCipher::new("MONARCHY")?;
//! let encrypted = cipher.encrypt("INSTRUMENTS")?;
//! assert_eq!(encrypted, "GATLMZCLRQXA");
//! // Decryption keeps the 'X' padding; stripping it is the caller's call.
//! assert_eq!(cipher.decrypt(&encrypted)?, "INSTRUMENTSX");
//! # Ok::<(), polygraph::CipherError>(())
//! ```
//!
//! Keys that can encrypt but not decrypt are reported as such:
//!
//! ```
//! use polygraph::{CipherError, HillCipher};
//!
//! // det = 13 shares a factor with 26.
//! let cipher = HillCipher::new(&[1, 1, 0, 13], 2)?;
//! assert!(cipher.encrypt("HELP").is_ok());
//! assert_eq!(
//!     cipher.decrypt("HELP"),
//!     Err(CipherError::NonInvertibleModulus { det: 13 })
//! );
//! # Ok::<(), polygraph::CipherError>(())
//! ```

#![deny(clippy::all)]

pub mod error;

mod hill;
mod playfair;
pub(crate) mod utils;

pub use error::CipherError;
pub use hill::HillCipher;
pub use playfair::PlayfairCipher;
