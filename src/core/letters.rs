//! Letter values and the weighted tile bag
//!
//! Letters are stored as lowercase ASCII bytes throughout the crate.

use super::TileSet;
use rand::Rng;
use std::fmt;

/// Standard Scrabble point values, indexed by `letter - b'a'`
const POINTS: [u32; 26] = [
    1,  // a
    3,  // b
    3,  // c
    2,  // d
    1,  // e
    4,  // f
    2,  // g
    4,  // h
    1,  // i
    8,  // j
    5,  // k
    1,  // l
    3,  // m
    1,  // n
    1,  // o
    3,  // p
    10, // q
    1,  // r
    1,  // s
    1,  // t
    1,  // u
    4,  // v
    4,  // w
    8,  // x
    4,  // y
    10, // z
];

/// Tile frequencies the rack generator has always sampled from (92 tiles)
pub const GENERATOR_FREQUENCIES: &[(u8, usize)] = &[
    (b'e', 12),
    (b'a', 9),
    (b'i', 8),
    (b'o', 8),
    (b'n', 5),
    (b'r', 5),
    (b't', 5),
    (b'l', 4),
    (b's', 4),
    (b'u', 4),
    (b'd', 2),
    (b'g', 3),
    (b'b', 2),
    (b'c', 2),
    (b'm', 2),
    (b'p', 2),
    (b'f', 2),
    (b'h', 2),
    (b'v', 2),
    (b'w', 2),
    (b'y', 2),
    (b'k', 1),
    (b'j', 1),
    (b'x', 1),
    (b'q', 1),
    (b'z', 1),
];

/// English Scrabble distribution used by the in-game bag, blanks excluded (98 tiles)
pub const STANDARD_FREQUENCIES: &[(u8, usize)] = &[
    (b'a', 9),
    (b'b', 2),
    (b'c', 2),
    (b'd', 4),
    (b'e', 12),
    (b'f', 2),
    (b'g', 3),
    (b'h', 2),
    (b'i', 9),
    (b'j', 1),
    (b'k', 1),
    (b'l', 4),
    (b'm', 2),
    (b'n', 6),
    (b'o', 8),
    (b'p', 2),
    (b'q', 1),
    (b'r', 6),
    (b's', 4),
    (b't', 6),
    (b'u', 4),
    (b'v', 2),
    (b'w', 2),
    (b'x', 1),
    (b'y', 2),
    (b'z', 1),
];

/// Point value of a single letter
///
/// Letters outside `a..=z` (after lowercasing) are worth nothing.
#[inline]
#[must_use]
pub fn letter_points(letter: u8) -> u32 {
    let letter = letter.to_ascii_lowercase();
    if letter.is_ascii_lowercase() {
        POINTS[usize::from(letter - b'a')]
    } else {
        0
    }
}

/// Sum of the letter values of a word
///
/// # Examples
/// ```
/// use rack_forge::core::score_word;
///
/// assert_eq!(score_word("cat"), 5);
/// assert_eq!(score_word("quiz"), 22);
/// ```
#[must_use]
pub fn score_word(word: &str) -> u32 {
    word.bytes().map(letter_points).sum()
}

/// Whether a letter is one of `a e i o u`
#[inline]
#[must_use]
pub const fn is_vowel(letter: u8) -> bool {
    matches!(letter, b'a' | b'e' | b'i' | b'o' | b'u')
}

/// Error building a bag from a frequency table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BagError {
    Empty,
    InvalidLetter(u8),
}

impl fmt::Display for BagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Letter bag must contain at least one tile"),
            Self::InvalidLetter(letter) => {
                write!(f, "Letter bag entry {letter:#04x} is not an ASCII letter")
            }
        }
    }
}

impl std::error::Error for BagError {}

/// Weighted pool of letter tokens
///
/// A letter appearing `n` times in the frequency table occupies `n` positions,
/// so uniform sampling over positions follows the table's weights. Drawing
/// never removes tiles: every draw indexes into the same template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBag {
    tiles: Vec<u8>,
}

impl LetterBag {
    /// Build a bag from `(letter, count)` entries
    ///
    /// # Errors
    /// Returns `BagError` if an entry is not an ASCII letter or the bag ends up empty.
    pub fn from_frequencies(frequencies: &[(u8, usize)]) -> Result<Self, BagError> {
        let mut tiles = Vec::with_capacity(frequencies.iter().map(|&(_, n)| n).sum());
        for &(letter, count) in frequencies {
            if !letter.is_ascii_alphabetic() {
                return Err(BagError::InvalidLetter(letter));
            }
            tiles.extend(std::iter::repeat_n(letter.to_ascii_lowercase(), count));
        }

        if tiles.is_empty() {
            return Err(BagError::Empty);
        }

        Ok(Self { tiles })
    }

    /// The weights racks have always been generated from
    #[must_use]
    pub fn generator() -> Self {
        Self {
            tiles: expand(GENERATOR_FREQUENCIES),
        }
    }

    /// Standard English distribution without blanks
    #[must_use]
    pub fn standard() -> Self {
        Self {
            tiles: expand(STANDARD_FREQUENCIES),
        }
    }

    /// Number of tile positions in the bag
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a constructed bag
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// How many positions hold `letter`
    #[must_use]
    #[allow(clippy::naive_bytecount)]
    pub fn count_of(&self, letter: u8) -> usize {
        self.tiles.iter().filter(|&&t| t == letter).count()
    }

    /// Draw `count` tiles, each chosen independently and uniformly from the bag
    pub fn draw<R: Rng>(&self, rng: &mut R, count: usize) -> TileSet {
        let letters = (0..count)
            .map(|_| self.tiles[rng.random_range(0..self.tiles.len())])
            .collect();
        TileSet::from_letters(letters)
    }
}

impl Default for LetterBag {
    fn default() -> Self {
        Self::generator()
    }
}

fn expand(frequencies: &[(u8, usize)]) -> Vec<u8> {
    frequencies
        .iter()
        .flat_map(|&(letter, count)| std::iter::repeat_n(letter, count))
        .collect()
}
