//! In-memory word list

/// Shortest word kept by default
pub const DEFAULT_MIN_LEN: usize = 3;

/// Longest word kept by default
pub const DEFAULT_MAX_LEN: usize = 6;

/// Inclusive word-length bounds, counted in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthFilter {
    pub min: usize,
    pub max: usize,
}

impl LengthFilter {
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    #[inline]
    #[must_use]
    pub fn accepts(&self, word: &str) -> bool {
        (self.min..=self.max).contains(&word.chars().count())
    }
}

impl Default for LengthFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LEN, DEFAULT_MAX_LEN)
    }
}

/// Lowercase words in file order
///
/// Duplicates are kept; a word listed twice is matched (and scored) twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Normalize raw lines: trim, lowercase, keep lengths accepted by `filter`
    ///
    /// # Examples
    /// ```
    /// use rack_forge::wordlists::{Dictionary, LengthFilter};
    ///
    /// let dict = Dictionary::from_lines(["  Cat ", "at", "dog"], LengthFilter::default());
    /// assert_eq!(dict.words(), ["cat", "dog"]);
    /// ```
    pub fn from_lines<I, S>(lines: I, filter: LengthFilter) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_lowercase())
            .filter(|word| filter.accepts(word))
            .collect();

        Self { words }
    }

    /// Words in file order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterate words as string slices
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Exact membership test on an already-lowercased word
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}
