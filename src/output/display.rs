//! Display functions for command results

use crate::commands::GenerationResult;
use crate::generator::EvaluatedSet;
use crate::session::{CurrentGame, PlayerStats};
use colored::Colorize;
use std::path::Path;

/// Print one evaluated rack
pub fn print_evaluated_set(set: &EvaluatedSet) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Rack: {}  (signature {})",
        set.tiles().to_string().to_uppercase().bright_yellow().bold(),
        set.signature()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("   Score:       {}", set.score().to_string().bright_yellow());
    println!(
        "   Vowels:      {} / consonants {}",
        set.vowels(),
        set.consonants()
    );
    println!(
        "   Words:       {} matched, {} shown",
        set.total_words(),
        set.word_count()
    );
    if set.words().is_empty() {
        println!("   {}", "No playable words".red());
    } else {
        println!("   {}", set.words().join(", ").green());
    }
}

/// Print the summary of a finished generation run
pub fn print_generation_result(result: &GenerationResult, output: &Path) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GENERATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Run:".bright_cyan().bold());
    println!("   Accepted:         {}", result.report.len());
    println!("   Attempts:         {}", result.attempts);
    println!("   Rejected:         {}", result.rejected);
    if result.duplicates > 0 {
        println!("   Duplicates:       {}", result.duplicates);
    }
    println!(
        "   Acceptance rate:  {}",
        format!("{:.1}%", result.acceptance_rate() * 100.0).bright_yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!(
        "\n{}",
        format!(
            "✅ Saved {} entries to {}",
            result.report.len(),
            output.display()
        )
        .green()
        .bold()
    );
}

/// Print the current game and player statistics
pub fn print_game_status(current: Option<&CurrentGame>, stats: &PlayerStats) {
    println!("\n🎯 {}", "Current Game".bright_cyan().bold());
    match current {
        Some(game) => {
            println!("   Type:     {}", game.kind);
            println!("   Started:  {}", game.start_time);
            println!("   Score:    {}", game.score);
            println!("   Moves:    {}", game.moves.len());
        }
        None => println!("   {}", "No game in progress".bright_black()),
    }

    println!("\n📈 {}", "Player Stats".bright_cyan().bold());
    println!("   Games played: {}", stats.games_played);
    println!("   Total score:  {}", stats.total_score);
    println!(
        "   Best score:   {}",
        stats.best_score.to_string().bright_yellow()
    );
    if !stats.best_word.is_empty() {
        println!("   Best word:    {}", stats.best_word.to_uppercase());
    }
}
