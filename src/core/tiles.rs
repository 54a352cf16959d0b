//! Tile rack representation
//!
//! A `TileSet` keeps letters in draw order; its signature (letters sorted and
//! concatenated) is the canonical key for comparing racks as multisets.

use super::letters::is_vowel;
use std::fmt;

/// A rack of letter tiles
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileSet {
    letters: Vec<u8>,
}

/// Error type for rack text that cannot become a `TileSet`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    InvalidLength { expected: usize, actual: usize },
    InvalidCharacters,
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Rack must have exactly {expected} tiles, got {actual}")
            }
            Self::InvalidCharacters => write!(f, "Rack must contain only ASCII letters"),
        }
    }
}

impl std::error::Error for TileError {}

impl TileSet {
    /// Wrap already-validated lowercase letters
    #[must_use]
    pub(crate) const fn from_letters(letters: Vec<u8>) -> Self {
        Self { letters }
    }

    /// Parse rack text such as `"CATXXXX"`
    ///
    /// # Errors
    /// Returns `TileError` if the text is not `expected_len` ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use rack_forge::core::TileSet;
    ///
    /// let rack = TileSet::parse("TAC", 3).unwrap();
    /// assert_eq!(rack.signature(), "act");
    /// assert!(TileSet::parse("ta", 3).is_err());
    /// ```
    pub fn parse(text: &str, expected_len: usize) -> Result<Self, TileError> {
        let text = text.trim();
        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(TileError::InvalidCharacters);
        }
        if text.len() != expected_len {
            return Err(TileError::InvalidLength {
                expected: expected_len,
                actual: text.len(),
            });
        }

        Ok(Self {
            letters: text.bytes().map(|b| b.to_ascii_lowercase()).collect(),
        })
    }

    /// Letters in draw order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    /// Number of tiles
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letters sorted ascending and concatenated
    #[must_use]
    pub fn signature(&self) -> String {
        let mut sorted = self.letters.clone();
        sorted.sort_unstable();
        sorted.into_iter().map(char::from).collect()
    }

    /// Number of vowel tiles
    #[must_use]
    pub fn vowel_count(&self) -> usize {
        self.letters.iter().filter(|&&l| is_vowel(l)).count()
    }

    /// Number of non-vowel tiles
    #[must_use]
    pub fn consonant_count(&self) -> usize {
        self.len() - self.vowel_count()
    }
}

impl fmt::Display for TileSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.letters {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}
