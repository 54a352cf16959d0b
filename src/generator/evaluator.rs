//! Rack evaluation
//!
//! Scores a rack by the words it can spell: the score covers every matched
//! word, while only the first `max_display` words are kept for reports.

use crate::core::{TileSet, find_valid_words, score_word};
use crate::wordlists::Dictionary;

/// A rack together with the words it can spell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatedSet {
    tiles: TileSet,
    words: Vec<String>,
    total_words: usize,
    score: u32,
    vowels: usize,
    consonants: usize,
}

impl EvaluatedSet {
    /// The rack, in draw order
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &TileSet {
        &self.tiles
    }

    /// Matched words in dictionary order, capped at the display limit
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of displayed words
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of matched words before the display cap
    #[inline]
    #[must_use]
    pub const fn total_words(&self) -> usize {
        self.total_words
    }

    /// Sum of letter values over every matched word
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn vowels(&self) -> usize {
        self.vowels
    }

    #[inline]
    #[must_use]
    pub const fn consonants(&self) -> usize {
        self.consonants
    }

    /// Canonical sorted-letter key of the rack
    #[must_use]
    pub fn signature(&self) -> String {
        self.tiles.signature()
    }
}

/// Evaluate a rack against a dictionary
///
/// # Examples
/// ```
/// use rack_forge::core::TileSet;
/// use rack_forge::generator::evaluate;
/// use rack_forge::wordlists::{Dictionary, LengthFilter};
///
/// let dict = Dictionary::from_lines(["cat", "act", "tac", "dog"], LengthFilter::default());
/// let set = evaluate(TileSet::parse("catxxxx", 7).unwrap(), &dict, 10);
///
/// assert_eq!(set.words(), ["cat", "act", "tac"]);
/// assert_eq!(set.score(), 15);
/// ```
#[must_use]
pub fn evaluate(tiles: TileSet, dictionary: &Dictionary, max_display: usize) -> EvaluatedSet {
    let matched = find_valid_words(tiles.letters(), dictionary.iter());
    let score = matched.iter().map(|w| score_word(w)).sum();
    let total_words = matched.len();
    let words = matched
        .into_iter()
        .take(max_display)
        .map(str::to_string)
        .collect();
    let vowels = tiles.vowel_count();
    let consonants = tiles.len() - vowels;

    EvaluatedSet {
        tiles,
        words,
        total_words,
        score,
        vowels,
        consonants,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterBag, can_form};
    use crate::wordlists::LengthFilter;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::from_lines(words, LengthFilter::default())
    }

    fn rack(text: &str) -> TileSet {
        TileSet::parse(text, text.len()).unwrap()
    }

    #[test]
    fn cat_act_tac_scenario() {
        let dictionary = dict(&["cat", "act", "tac", "dog"]);
        let set = evaluate(rack("catxxxx"), &dictionary, 10);

        assert_eq!(set.words(), ["cat", "act", "tac"]);
        assert_eq!(set.total_words(), 3);
        assert_eq!(set.score(), 15);
        assert_eq!(set.vowels(), 1);
        assert_eq!(set.consonants(), 6);
        assert_eq!(set.signature(), "actxxxx");
        assert_eq!(set.tiles().to_string(), "catxxxx");
    }

    #[test]
    fn score_counts_words_beyond_display_cap() {
        let dictionary = dict(&["cat", "act", "tac", "dog"]);
        let set = evaluate(rack("catxxxx"), &dictionary, 2);

        assert_eq!(set.words(), ["cat", "act"]);
        assert_eq!(set.word_count(), 2);
        assert_eq!(set.total_words(), 3);
        assert_eq!(set.score(), 15);
    }

    #[test]
    fn no_matches_scores_zero() {
        let dictionary = dict(&["dog", "cow"]);
        let set = evaluate(rack("zzzzzzz"), &dictionary, 10);

        assert!(set.words().is_empty());
        assert_eq!(set.total_words(), 0);
        assert_eq!(set.score(), 0);
        assert_eq!(set.vowels(), 0);
        assert_eq!(set.consonants(), 7);
    }

    #[test]
    fn duplicate_dictionary_entries_score_twice() {
        let dictionary = dict(&["cat", "cat"]);
        let set = evaluate(rack("catxxxx"), &dictionary, 10);
        assert_eq!(set.words(), ["cat", "cat"]);
        assert_eq!(set.score(), 10);
    }

    #[test]
    fn score_equals_sum_over_formable_words() {
        let dictionary = dict(&[
            "eat", "tea", "ate", "neat", "rate", "tear", "rent", "tern", "stern", "rats", "star",
            "tsar", "arts", "earn", "near", "antler", "rental", "quiz", "zoo", "lose", "sole",
        ]);
        let bag = LetterBag::generator();
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..200 {
            let tiles = bag.draw(&mut rng, 7);
            let expected: u32 = dictionary
                .iter()
                .filter(|w| can_form(w, tiles.letters()))
                .map(score_word)
                .sum();
            let set = evaluate(tiles, &dictionary, 5);
            assert_eq!(set.score(), expected);
            assert!(set.word_count() <= 5);
            assert_eq!(set.vowels() + set.consonants(), 7);
        }
    }
}
