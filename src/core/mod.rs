//! Core domain types for rack generation
//!
//! Letter values, the weighted tile bag, racks, and word formation checks.
//! Everything here is pure and deterministic apart from the RNG passed to
//! `LetterBag::draw`.

mod letters;
mod matcher;
mod tiles;

pub use letters::{
    BagError, GENERATOR_FREQUENCIES, LetterBag, STANDARD_FREQUENCIES, is_vowel, letter_points,
    score_word,
};
pub use matcher::{can_form, find_valid_words};
pub use tiles::{TileError, TileSet};
