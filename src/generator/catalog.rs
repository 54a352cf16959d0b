//! Deduplicated rack catalog
//!
//! Collects distinct racks (by signature) whose matched-word count falls in
//! a fixed range, in acceptance order.

use super::{EvaluatedSet, Generator, GeneratorConfig, GeneratorError, Offer, evaluate};
use crate::core::LetterBag;
use crate::wordlists::Dictionary;
use rand::Rng;
use rustc_hash::FxHashSet;

/// Signature-deduplicating generator
pub struct Catalog<'a> {
    bag: &'a LetterBag,
    dictionary: &'a Dictionary,
    config: GeneratorConfig,
    seen: FxHashSet<String>,
    sets: Vec<EvaluatedSet>,
}

impl<'a> Catalog<'a> {
    /// Create a catalog run over a bag and dictionary
    ///
    /// # Errors
    /// Returns `GeneratorError::InvalidConfig` if the config fails validation,
    /// and `GeneratorError::EmptyDictionary` if racks need words but there are none.
    pub fn new(
        bag: &'a LetterBag,
        dictionary: &'a Dictionary,
        config: GeneratorConfig,
    ) -> Result<Self, GeneratorError> {
        config.validate()?;
        if dictionary.is_empty() && config.min_words > 0 {
            return Err(GeneratorError::EmptyDictionary);
        }

        Ok(Self {
            bag,
            dictionary,
            config,
            seen: FxHashSet::default(),
            sets: Vec::new(),
        })
    }

    /// Whether a rack with this signature has already been accepted
    #[must_use]
    pub fn is_seen(&self, signature: &str) -> bool {
        self.seen.contains(signature)
    }

    /// Offer an evaluated rack to the catalog
    ///
    /// The range check uses the uncapped matched-word count.
    pub fn offer(&mut self, candidate: EvaluatedSet) -> Offer {
        let signature = candidate.signature();
        if self.is_seen(&signature) {
            return Offer::Duplicate;
        }

        let range = self.config.min_words..=self.config.max_words;
        if !range.contains(&candidate.total_words()) {
            return Offer::Rejected;
        }

        self.seen.insert(signature);
        self.sets.push(candidate);
        Offer::Accepted
    }

    /// Racks accepted so far, in acceptance order
    #[must_use]
    pub fn sets(&self) -> &[EvaluatedSet] {
        &self.sets
    }
}

impl Generator for Catalog<'_> {
    type Output = Vec<EvaluatedSet>;

    fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn step<R: Rng>(&mut self, rng: &mut R) -> Offer {
        let tiles = self.bag.draw(rng, self.config.tile_count);
        if self.is_seen(&tiles.signature()) {
            return Offer::Duplicate;
        }
        let candidate = evaluate(tiles, self.dictionary, self.config.max_display);
        self.offer(candidate)
    }

    fn accepted(&self) -> usize {
        self.sets.len()
    }

    fn finish(self) -> Vec<EvaluatedSet> {
        self.sets
    }
}
