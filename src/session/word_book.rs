//! Player word list
//!
//! The browser game keeps a user-editable word list under one storage key.
//! `WordBook` is that list as an explicit value: it is loaded from a store,
//! mutated through its methods, and written back to the same store.

use super::store::{KeyValueStore, StoreError};
use crate::wordlists::Dictionary;
use colored::Colorize;

/// Storage key of the word list
pub const WORD_BOOK_KEY: &str = "wordDictionary";

/// Words seeded into a store that has never held a word list
pub const DEFAULT_WORDS: &[&str] = &["apple", "banana", "quiz"];

/// Lowercase word list persisted as a JSON array
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordBook {
    words: Vec<String>,
}

impl WordBook {
    /// Load the word list from `store`
    ///
    /// A missing key seeds [`DEFAULT_WORDS`] and saves them. An unreadable
    /// value is replaced by an empty list and a warning is printed.
    ///
    /// # Errors
    /// Returns `StoreError` if the store itself fails.
    pub fn load<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<Self, StoreError> {
        let Some(raw) = store.get(WORD_BOOK_KEY)? else {
            let book = Self {
                words: DEFAULT_WORDS.iter().map(|w| (*w).to_string()).collect(),
            };
            book.save(store)?;
            return Ok(book);
        };

        Ok(serde_json::from_str::<Vec<String>>(&raw).map_or_else(
            |e| {
                eprintln!(
                    "{} word list under '{WORD_BOOK_KEY}' is unreadable ({e}); starting empty",
                    "warning:".yellow().bold()
                );
                Self::default()
            },
            |words| Self { words },
        ))
    }

    /// Write the list back to `store`
    ///
    /// # Errors
    /// Returns `StoreError` if the store fails.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), StoreError> {
        // A Vec<String> always serializes
        let json = serde_json::to_string(&self.words).unwrap_or_else(|_| "[]".to_string());
        store.set(WORD_BOOK_KEY, json)
    }

    /// Case-insensitive membership
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.words.contains(&word)
    }

    /// Add a word (lowercased) and save if it was new
    ///
    /// Returns whether the word was added.
    ///
    /// # Errors
    /// Returns `StoreError` if saving fails.
    pub fn add_word<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        word: &str,
    ) -> Result<bool, StoreError> {
        let word = word.to_lowercase();
        if self.words.contains(&word) {
            return Ok(false);
        }
        self.words.push(word);
        self.save(store)?;
        Ok(true)
    }

    /// Copy of every word, in insertion order
    #[must_use]
    pub fn all_words(&self) -> Vec<String> {
        self.words.clone()
    }
}

/// Anything that can answer "is this a word?"
pub trait WordSource {
    fn contains_word(&self, word: &str) -> bool;
}

impl WordSource for WordBook {
    fn contains_word(&self, word: &str) -> bool {
        self.is_valid_word(word)
    }
}

impl WordSource for Dictionary {
    fn contains_word(&self, word: &str) -> bool {
        self.contains(&word.to_lowercase())
    }
}

/// Optional word-lookup capability
///
/// Callers that may run without a word list hold `Absent`; every lookup
/// through it reports the word as invalid.
#[derive(Clone, Copy, Default)]
pub enum WordLookup<'a> {
    Present(&'a dyn WordSource),
    #[default]
    Absent,
}

impl<'a> WordLookup<'a> {
    #[must_use]
    pub fn new(source: Option<&'a dyn WordSource>) -> Self {
        source.map_or(Self::Absent, Self::Present)
    }

    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        match self {
            Self::Present(source) => source.contains_word(word),
            Self::Absent => false,
        }
    }

    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;
    use crate::wordlists::LengthFilter;

    #[test]
    fn fresh_store_is_seeded_and_saved() {
        let mut store = MemoryStore::new();
        let book = WordBook::load(&mut store).unwrap();

        assert_eq!(book.all_words(), ["apple", "banana", "quiz"]);
        assert_eq!(
            store.get(WORD_BOOK_KEY).unwrap().as_deref(),
            Some(r#"["apple","banana","quiz"]"#)
        );
    }

    #[test]
    fn existing_list_is_loaded() {
        let mut store = MemoryStore::new();
        store.set(WORD_BOOK_KEY, r#"["cat","dog"]"#.to_string()).unwrap();

        let book = WordBook::load(&mut store).unwrap();
        assert_eq!(book.all_words(), ["cat", "dog"]);
    }

    #[test]
    fn corrupt_list_falls_back_to_empty() {
        let mut store = MemoryStore::new();
        store.set(WORD_BOOK_KEY, "[oops".to_string()).unwrap();

        let book = WordBook::load(&mut store).unwrap();
        assert!(book.all_words().is_empty());
        assert!(!book.is_valid_word("apple"));
        // The corrupt value is left for the next successful save to replace
        assert_eq!(store.get(WORD_BOOK_KEY).unwrap().as_deref(), Some("[oops"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut store = MemoryStore::new();
        let book = WordBook::load(&mut store).unwrap();
        assert!(book.is_valid_word("QUIZ"));
        assert!(book.is_valid_word("Apple"));
        assert!(!book.is_valid_word("pear"));
    }

    #[test]
    fn add_word_lowercases_dedups_and_saves() {
        let mut store = MemoryStore::new();
        let mut book = WordBook::load(&mut store).unwrap();

        assert!(book.add_word(&mut store, "Zebra").unwrap());
        assert!(!book.add_word(&mut store, "ZEBRA").unwrap());
        assert!(!book.add_word(&mut store, "apple").unwrap());
        assert_eq!(book.all_words(), ["apple", "banana", "quiz", "zebra"]);

        let reloaded = WordBook::load(&mut store).unwrap();
        assert_eq!(reloaded, book);
    }

    #[test]
    fn all_words_is_a_copy() {
        let mut store = MemoryStore::new();
        let book = WordBook::load(&mut store).unwrap();
        let mut words = book.all_words();
        words.clear();
        assert_eq!(book.all_words().len(), 3);
    }

    #[test]
    fn absent_lookup_fails_closed() {
        let lookup = WordLookup::Absent;
        assert!(!lookup.is_present());
        assert!(!lookup.is_valid_word("apple"));
        assert!(!WordLookup::default().is_valid_word(""));
    }

    #[test]
    fn present_lookup_delegates() {
        let mut store = MemoryStore::new();
        let book = WordBook::load(&mut store).unwrap();
        let lookup = WordLookup::new(Some(&book));
        assert!(lookup.is_present());
        assert!(lookup.is_valid_word("banana"));
        assert!(!lookup.is_valid_word("cherry"));

        let dictionary = Dictionary::from_lines(["cat"], LengthFilter::default());
        let lookup = WordLookup::Present(&dictionary);
        assert!(lookup.is_valid_word("CAT"));
        assert!(!lookup.is_valid_word("dog"));
    }
}
