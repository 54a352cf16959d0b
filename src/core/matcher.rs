//! Word formation checks
//!
//! A word can be formed from a rack when the word's letter multiset is
//! contained in the rack's letter multiset.

/// Whether `word` can be spelled from `tiles`
///
/// Each letter of the word consumes one matching tile from a working copy of
/// the rack; the check fails at the first letter with no tile left.
///
/// # Examples
/// ```
/// use rack_forge::core::can_form;
///
/// assert!(can_form("cat", b"tacxxxx"));
/// assert!(!can_form("tact", b"tacxxxx"));
/// ```
#[must_use]
pub fn can_form(word: &str, tiles: &[u8]) -> bool {
    let mut available = tiles.to_vec();
    for letter in word.bytes() {
        match available.iter().position(|&t| t == letter) {
            Some(idx) => {
                available.swap_remove(idx);
            }
            None => return false,
        }
    }
    true
}

/// All words from `words` that can be spelled from `tiles`, in input order
pub fn find_valid_words<'a, I>(tiles: &[u8], words: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    words
        .into_iter()
        .filter(|word| can_form(word, tiles))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn counts(bytes: &[u8]) -> FxHashMap<u8, usize> {
        let mut map = FxHashMap::default();
        for &b in bytes {
            *map.entry(b).or_insert(0) += 1;
        }
        map
    }

    #[test]
    fn anagrams_are_formable() {
        let tiles = b"catxxxx";
        assert!(can_form("cat", tiles));
        assert!(can_form("act", tiles));
        assert!(can_form("tac", tiles));
    }

    #[test]
    fn missing_letter_fails() {
        assert!(!can_form("dog", b"catxxxx"));
    }

    #[test]
    fn repeated_letters_need_repeated_tiles() {
        assert!(!can_form("tatt", b"catxxxx"));
        assert!(can_form("xxxx", b"catxxxx"));
        assert!(!can_form("xxxxx", b"catxxxx"));
    }

    #[test]
    fn empty_word_is_always_formable() {
        assert!(can_form("", b"catxxxx"));
        assert!(can_form("", b""));
    }

    #[test]
    fn non_ascii_word_is_not_formable() {
        assert!(!can_form("café", b"cafeeee"));
    }

    #[test]
    fn matches_multiset_containment() {
        let racks: [&[u8]; 4] = [b"aabbcde", b"eeeeeee", b"quizeat", b"rstlnea"];
        let words = [
            "abbe", "babe", "cab", "dace", "eee", "quiz", "eat", "tea", "neat", "rental",
            "antler", "sealer", "aaa",
        ];

        for rack in racks {
            let rack_counts = counts(rack);
            for word in words {
                let expected = counts(word.as_bytes())
                    .iter()
                    .all(|(ch, n)| rack_counts.get(ch).copied().unwrap_or(0) >= *n);
                assert_eq!(
                    can_form(word, rack),
                    expected,
                    "word {word} vs rack {}",
                    String::from_utf8_lossy(rack)
                );
            }
        }
    }

    #[test]
    fn find_valid_words_preserves_order() {
        let dictionary = ["cat", "act", "tac", "dog"];
        let found = find_valid_words(b"catxxxx", dictionary);
        assert_eq!(found, vec!["cat", "act", "tac"]);
    }

    #[test]
    fn find_valid_words_empty_dictionary() {
        let found = find_valid_words(b"catxxxx", std::iter::empty());
        assert!(found.is_empty());
    }
}
