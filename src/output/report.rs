//! Flat text reports
//!
//! Rendering is pure; [`write_report`] writes the full buffer in one call, so
//! an interrupted run leaves no file behind.

use crate::generator::{EvaluatedSet, Pair};
use std::fs;
use std::io;
use std::path::Path;

/// Output of a completed generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Pairs(Vec<Pair>),
    Catalog(Vec<EvaluatedSet>),
}

impl Report {
    /// Number of pairs or racks in the report
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Pairs(pairs) => pairs.len(),
            Self::Catalog(sets) => sets.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render the report text
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Pairs(pairs) => render_pairs(pairs),
            Self::Catalog(sets) => render_catalog(sets),
        }
    }
}

/// One block per pair, 1-indexed, separated by a blank line
///
/// ```text
///
/// Pair 1:
///   P1: catxxxx | Words: cat, act, tac | Score: 15
///   P2: dogxxxx | Words: dog, god | Score: 10
/// ```
#[must_use]
pub fn render_pairs(pairs: &[Pair]) -> String {
    pairs
        .iter()
        .enumerate()
        .map(|(i, pair)| {
            format!(
                "\nPair {}:\n  P1: {}\n  P2: {}",
                i + 1,
                player_line(pair.first()),
                player_line(pair.second())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn player_line(set: &EvaluatedSet) -> String {
    format!(
        "{} | Words: {} | Score: {}",
        set.tiles(),
        set.words().join(", "),
        set.score()
    )
}

/// One `signature : words` line per rack
#[must_use]
pub fn render_catalog(sets: &[EvaluatedSet]) -> String {
    sets.iter()
        .map(|set| format!("{} : {}\n", set.signature(), set.words().join(", ")))
        .collect()
}

/// Render and write a report in a single operation
///
/// # Errors
/// Returns an I/O error if the file cannot be written.
pub fn write_report<P: AsRef<Path>>(path: P, report: &Report) -> io::Result<()> {
    fs::write(path, report.render())
}
