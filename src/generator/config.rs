//! Generator tunables and their defaults

use super::GeneratorError;

/// Tiles per rack
pub const DEFAULT_TILE_COUNT: usize = 7;

/// Fewest displayed words a rack needs to be kept
pub const DEFAULT_MIN_WORDS: usize = 3;

/// Most matched words a catalog rack may have
pub const DEFAULT_MAX_WORDS: usize = 10;

/// Words listed per rack in reports
pub const DEFAULT_MAX_DISPLAY: usize = 10;

/// Balanced pairs produced per run
pub const DEFAULT_PAIRS_NEEDED: usize = 10;

/// Catalog racks produced per run
pub const DEFAULT_SETS_NEEDED: usize = 500;

/// How far apart two racks may be and still count as balanced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tolerances {
    pub score: u32,
    pub vowels: usize,
    pub words: usize,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            score: 5,
            vowels: 1,
            words: 1,
        }
    }
}

/// Settings shared by both generation policies
///
/// `target` is the number of pairs (balanced pairing) or racks (catalog) to
/// produce. `max_attempts` of `None` keeps drawing until the target is met.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub tile_count: usize,
    pub min_words: usize,
    pub max_words: usize,
    pub max_display: usize,
    pub target: usize,
    pub tolerances: Tolerances,
    pub max_attempts: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tile_count: DEFAULT_TILE_COUNT,
            min_words: DEFAULT_MIN_WORDS,
            max_words: DEFAULT_MAX_WORDS,
            max_display: DEFAULT_MAX_DISPLAY,
            target: DEFAULT_PAIRS_NEEDED,
            tolerances: Tolerances::default(),
            max_attempts: None,
        }
    }
}

impl GeneratorConfig {
    #[must_use]
    pub const fn with_tile_count(mut self, tile_count: usize) -> Self {
        self.tile_count = tile_count;
        self
    }

    #[must_use]
    pub const fn with_word_range(mut self, min_words: usize, max_words: usize) -> Self {
        self.min_words = min_words;
        self.max_words = max_words;
        self
    }

    #[must_use]
    pub const fn with_max_display(mut self, max_display: usize) -> Self {
        self.max_display = max_display;
        self
    }

    #[must_use]
    pub const fn with_target(mut self, target: usize) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub const fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: Option<u64>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Check settings shared by both policies
    ///
    /// # Errors
    /// Returns `GeneratorError::InvalidConfig` for an empty rack or an inverted word range.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.tile_count == 0 {
            return Err(GeneratorError::invalid(
                "tile_count",
                &self.tile_count,
                "racks need at least one tile",
            ));
        }
        if self.min_words > self.max_words {
            return Err(GeneratorError::invalid(
                "min_words",
                &self.min_words,
                format!("must not exceed max_words ({})", self.max_words),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_generator_constants() {
        let config = GeneratorConfig::default();
        assert_eq!(config.tile_count, 7);
        assert_eq!(config.min_words, 3);
        assert_eq!(config.max_words, 10);
        assert_eq!(config.max_display, 10);
        assert_eq!(config.target, 10);
        assert_eq!(config.tolerances, Tolerances { score: 5, vowels: 1, words: 1 });
        assert_eq!(config.max_attempts, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builders_override_fields() {
        let config = GeneratorConfig::default()
            .with_tile_count(8)
            .with_word_range(2, 4)
            .with_max_display(5)
            .with_target(3)
            .with_max_attempts(Some(100));
        assert_eq!(config.tile_count, 8);
        assert_eq!((config.min_words, config.max_words), (2, 4));
        assert_eq!(config.max_display, 5);
        assert_eq!(config.target, 3);
        assert_eq!(config.max_attempts, Some(100));
    }

    #[test]
    fn zero_tiles_rejected() {
        let err = GeneratorConfig::default().with_tile_count(0).validate();
        assert!(matches!(
            err,
            Err(GeneratorError::InvalidConfig { parameter: "tile_count", .. })
        ));
    }

    #[test]
    fn inverted_word_range_rejected() {
        let err = GeneratorConfig::default().with_word_range(5, 4).validate();
        assert!(matches!(
            err,
            Err(GeneratorError::InvalidConfig { parameter: "min_words", .. })
        ));
    }
}
