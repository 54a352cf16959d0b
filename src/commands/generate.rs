//! Pair and catalog generation runs
//!
//! Drives a generator to completion behind a progress bar and wraps the
//! result as a [`Report`].

use crate::core::LetterBag;
use crate::generator::{
    BalancedPairing, Catalog, Generator, GeneratorConfig, GeneratorError, Offer, run,
};
use crate::output::Report;
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::time::{Duration, Instant};

/// Refresh the attempt counter every this many draws
const MESSAGE_INTERVAL: u64 = 250;

/// Outcome of a completed generation run
#[derive(Debug)]
pub struct GenerationResult {
    pub report: Report,
    pub attempts: u64,
    pub rejected: u64,
    pub duplicates: u64,
    pub duration: Duration,
}

impl GenerationResult {
    /// Accepted items per attempt
    #[must_use]
    pub fn acceptance_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            (self.attempts - self.rejected - self.duplicates) as f64 / self.attempts as f64
        }
    }
}

/// Produce balanced pairs
///
/// # Errors
/// Returns `GeneratorError` for invalid settings or an exhausted attempt budget.
pub fn generate_pairs<R: Rng>(
    bag: &LetterBag,
    dictionary: &Dictionary,
    config: GeneratorConfig,
    rng: &mut R,
    show_progress: bool,
) -> Result<GenerationResult, GeneratorError> {
    let pairing = BalancedPairing::new(bag, dictionary, config)?;
    drive(pairing, rng, "pairs", show_progress, Report::Pairs)
}

/// Produce a deduplicated catalog
///
/// # Errors
/// Returns `GeneratorError` for invalid settings or an exhausted attempt budget.
pub fn generate_catalog<R: Rng>(
    bag: &LetterBag,
    dictionary: &Dictionary,
    config: GeneratorConfig,
    rng: &mut R,
    show_progress: bool,
) -> Result<GenerationResult, GeneratorError> {
    let catalog = Catalog::new(bag, dictionary, config)?;
    drive(catalog, rng, "sets", show_progress, Report::Catalog)
}

fn drive<G, R, F>(
    generator: G,
    rng: &mut R,
    unit: &str,
    show_progress: bool,
    into_report: F,
) -> Result<GenerationResult, GeneratorError>
where
    G: Generator,
    R: Rng,
    F: FnOnce(G::Output) -> Report,
{
    let target = generator.config().target;
    let pb = if show_progress {
        ProgressBar::new(target as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{{bar:40.cyan/blue}}] {{pos}}/{{len}} {unit} | {{msg}}"
            ))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut rejected = 0;
    let mut duplicates = 0;
    let mut attempts = 0;

    let result = run(generator, rng, |offer, progress| {
        attempts = progress.attempts;
        match offer {
            Offer::Rejected => rejected += 1,
            Offer::Duplicate => duplicates += 1,
            Offer::Pooled | Offer::Paired | Offer::Accepted => {}
        }
        pb.set_position(progress.accepted as u64);
        if progress.attempts % MESSAGE_INTERVAL == 0 {
            pb.set_message(format!("{} attempts", progress.attempts));
        }
    });

    match result {
        Ok(output) => {
            pb.finish_with_message(format!("{attempts} attempts"));
            Ok(GenerationResult {
                report: into_report(output),
                attempts,
                rejected,
                duplicates,
                duration: start.elapsed(),
            })
        }
        Err(e) => {
            pb.abandon_with_message("stopped");
            Err(e)
        }
    }
}
