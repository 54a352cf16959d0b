//! Rack generation
//!
//! Every generator repeats the same cycle: draw a rack from the bag, evaluate
//! it against the dictionary, then accept, pool, pair or discard it. Two
//! policies are provided:
//!
//! - [`BalancedPairing`]: pairs racks whose score, vowel count and word count
//!   are within [`Tolerances`]
//! - [`Catalog`]: collects racks with distinct signatures and a matched-word
//!   count inside a fixed range
//!
//! [`run`] drives either one until its target is reached.

mod catalog;
pub mod config;
mod error;
mod evaluator;
mod pairing;

pub use catalog::Catalog;
pub use config::{GeneratorConfig, Tolerances};
pub use error::GeneratorError;
pub use evaluator::{EvaluatedSet, evaluate};
pub use pairing::{BalancedPairing, Pair, is_balanced};

use rand::Rng;

/// What happened to a single drawn rack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// Outside the accepted word range
    Rejected,
    /// Signature already accepted
    Duplicate,
    /// Waiting in the pool for a partner
    Pooled,
    /// Completed a balanced pair
    Paired,
    /// Added to the catalog
    Accepted,
}

/// Snapshot of a run, reported after every attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub attempts: u64,
    pub accepted: usize,
    pub target: usize,
}

/// A rack generation policy
///
/// Implementors own their accept/pair state; [`run`] owns the loop.
pub trait Generator {
    /// Result handed back once the target is reached
    type Output;

    fn config(&self) -> &GeneratorConfig;

    /// Draw, evaluate and offer one rack
    fn step<R: Rng>(&mut self, rng: &mut R) -> Offer;

    /// Pairs or racks accepted so far
    fn accepted(&self) -> usize;

    fn finish(self) -> Self::Output;
}

/// Step a generator until `config.target` items are accepted
///
/// With `config.max_attempts` unset the loop has no upper bound. `on_step` is
/// called after each attempt.
///
/// # Errors
/// Returns `GeneratorError::AttemptsExhausted` when the attempt budget runs out first.
pub fn run<G, R, F>(mut generator: G, rng: &mut R, mut on_step: F) -> Result<G::Output, GeneratorError>
where
    G: Generator,
    R: Rng,
    F: FnMut(Offer, Progress),
{
    let target = generator.config().target;
    let max_attempts = generator.config().max_attempts;
    let mut attempts: u64 = 0;

    while generator.accepted() < target {
        if max_attempts.is_some_and(|max| attempts >= max) {
            return Err(GeneratorError::AttemptsExhausted {
                attempts,
                accepted: generator.accepted(),
                needed: target,
            });
        }

        attempts += 1;
        let offer = generator.step(rng);
        on_step(
            offer,
            Progress {
                attempts,
                accepted: generator.accepted(),
                target,
            },
        );
    }

    Ok(generator.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterBag;
    use crate::wordlists::{Dictionary, LengthFilter};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn zero_target_returns_immediately() {
        let bag = LetterBag::generator();
        let dictionary = Dictionary::from_lines(["cat"], LengthFilter::default());
        let config = GeneratorConfig::default().with_target(0).with_max_attempts(Some(0));
        let pairing = BalancedPairing::new(&bag, &dictionary, config).unwrap();

        let mut calls = 0;
        let pairs = run(pairing, &mut StdRng::seed_from_u64(1), |_, _| calls += 1).unwrap();
        assert!(pairs.is_empty());
        assert_eq!(calls, 0);
    }

    #[test]
    fn progress_counts_every_attempt() {
        let bag = LetterBag::from_frequencies(&[(b'c', 1), (b'a', 1), (b't', 1)]).unwrap();
        let dictionary = Dictionary::from_lines(["cat", "act"], LengthFilter::default());
        let config = GeneratorConfig::default()
            .with_word_range(1, 10)
            .with_target(4)
            .with_max_attempts(Some(100_000));
        let catalog = Catalog::new(&bag, &dictionary, config).unwrap();

        let mut last = None;
        let mut seen_attempts = 0;
        let sets = run(catalog, &mut StdRng::seed_from_u64(3), |_, progress| {
            seen_attempts += 1;
            assert_eq!(progress.attempts, seen_attempts);
            last = Some(progress);
        })
        .unwrap();

        assert_eq!(sets.len(), 4);
        let last = last.unwrap();
        assert_eq!(last.accepted, 4);
        assert_eq!(last.target, 4);
    }

    #[test]
    fn budget_stops_pairing() {
        let bag = LetterBag::from_frequencies(&[(b'q', 1)]).unwrap();
        let dictionary = Dictionary::from_lines(["cat"], LengthFilter::default());
        let config = GeneratorConfig::default().with_max_attempts(Some(10));
        let pairing = BalancedPairing::new(&bag, &dictionary, config).unwrap();

        let mut rejected = 0;
        let err = run(pairing, &mut StdRng::seed_from_u64(9), |offer, _| {
            assert_eq!(offer, Offer::Rejected);
            rejected += 1;
        })
        .unwrap_err();

        assert_eq!(rejected, 10);
        assert!(matches!(
            err,
            GeneratorError::AttemptsExhausted {
                attempts: 10,
                accepted: 0,
                needed: 10
            }
        ));
    }
}
