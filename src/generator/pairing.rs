//! Balanced pairing
//!
//! Builds head-to-head starting racks: every accepted rack either joins an
//! unmatched pool or is paired with the first pooled rack close enough to it.
//! Matching is first-fit in pool insertion order, not best-fit.

use super::{EvaluatedSet, Generator, GeneratorConfig, GeneratorError, Offer, Tolerances, evaluate};
use crate::core::LetterBag;
use crate::wordlists::Dictionary;
use rand::Rng;

/// Two racks judged fair against each other
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    first: EvaluatedSet,
    second: EvaluatedSet,
}

impl Pair {
    #[must_use]
    pub const fn new(first: EvaluatedSet, second: EvaluatedSet) -> Self {
        Self { first, second }
    }

    /// The rack that was waiting in the pool
    #[inline]
    #[must_use]
    pub const fn first(&self) -> &EvaluatedSet {
        &self.first
    }

    /// The rack that completed the pair
    #[inline]
    #[must_use]
    pub const fn second(&self) -> &EvaluatedSet {
        &self.second
    }
}

/// Whether two racks are within every tolerance
///
/// Word counts compare displayed (capped) words.
#[must_use]
pub fn is_balanced(a: &EvaluatedSet, b: &EvaluatedSet, tolerances: &Tolerances) -> bool {
    a.score().abs_diff(b.score()) <= tolerances.score
        && a.vowels().abs_diff(b.vowels()) <= tolerances.vowels
        && a.word_count().abs_diff(b.word_count()) <= tolerances.words
}

/// Pool-and-pair generator
pub struct BalancedPairing<'a> {
    bag: &'a LetterBag,
    dictionary: &'a Dictionary,
    config: GeneratorConfig,
    pool: Vec<EvaluatedSet>,
    pairs: Vec<Pair>,
}

impl<'a> BalancedPairing<'a> {
    /// Create a pairing run over a bag and dictionary
    ///
    /// # Errors
    /// Returns `GeneratorError::InvalidConfig` if the config fails validation or
    /// the display cap is below `min_words` (no rack could ever be accepted),
    /// and `GeneratorError::EmptyDictionary` if racks need words but there are none.
    pub fn new(
        bag: &'a LetterBag,
        dictionary: &'a Dictionary,
        config: GeneratorConfig,
    ) -> Result<Self, GeneratorError> {
        config.validate()?;
        if config.max_display < config.min_words {
            return Err(GeneratorError::invalid(
                "max_display",
                &config.max_display,
                format!("must be at least min_words ({})", config.min_words),
            ));
        }
        if dictionary.is_empty() && config.min_words > 0 {
            return Err(GeneratorError::EmptyDictionary);
        }

        Ok(Self {
            bag,
            dictionary,
            config,
            pool: Vec::new(),
            pairs: Vec::new(),
        })
    }

    /// Offer an evaluated rack to the pool
    ///
    /// Racks with fewer displayed words than `min_words` are rejected.
    pub fn offer(&mut self, candidate: EvaluatedSet) -> Offer {
        if candidate.word_count() < self.config.min_words {
            return Offer::Rejected;
        }

        let tolerances = &self.config.tolerances;
        if let Some(idx) = self
            .pool
            .iter()
            .position(|entry| is_balanced(entry, &candidate, tolerances))
        {
            let partner = self.pool.remove(idx);
            self.pairs.push(Pair::new(partner, candidate));
            Offer::Paired
        } else {
            self.pool.push(candidate);
            Offer::Pooled
        }
    }

    /// Racks still waiting for a partner, in insertion order
    #[must_use]
    pub fn pool(&self) -> &[EvaluatedSet] {
        &self.pool
    }

    /// Pairs accepted so far
    #[must_use]
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }
}

impl Generator for BalancedPairing<'_> {
    type Output = Vec<Pair>;

    fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn step<R: Rng>(&mut self, rng: &mut R) -> Offer {
        let tiles = self.bag.draw(rng, self.config.tile_count);
        let candidate = evaluate(tiles, self.dictionary, self.config.max_display);
        self.offer(candidate)
    }

    fn accepted(&self) -> usize {
        self.pairs.len()
    }

    fn finish(self) -> Vec<Pair> {
        self.pairs
    }
}
