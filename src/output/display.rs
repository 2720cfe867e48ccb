//! Display functions for command results

use crate::commands::AnswersResult;
use crate::core::WordRank;
use colored::Colorize;

/// Print every answer for a letter set with its points
pub fn print_answers(result: &AnswersResult) {
    let letters = result.letters;
    let outer: String = letters.outer().iter().collect();

    println!("\n{}", "═".repeat(40).yellow());
    println!(
        " {} {} {}",
        "ANSWERS:".bright_yellow().bold(),
        letters.center().to_ascii_uppercase().to_string().black().on_yellow().bold(),
        outer.to_uppercase().bold()
    );
    println!("{}", "═".repeat(40).yellow());

    if result.entries.is_empty() {
        println!("\n   {}", "No words found".red());
        return;
    }

    let width = result
        .entries
        .iter()
        .map(|e| e.word.len())
        .max()
        .unwrap_or(0);

    println!();
    for entry in &result.entries {
        let word = format!("{:<width$}", entry.word);
        let word = if entry.rank == WordRank::Pangram {
            word.black().on_yellow().bold()
        } else {
            word.normal()
        };
        println!(
            "   {word} {:>3}  {}",
            entry.points,
            entry.rank.label().bright_black()
        );
    }

    println!("\n📊 {}", "Summary:".bright_yellow().bold());
    println!("   Words:        {}", result.word_count);
    println!(
        "   Pangrams:     {}",
        format!("{}", result.pangram_count).yellow()
    );
    println!(
        "   Total points: {}",
        format!("{}", result.total_points).bright_yellow().bold()
    );
}
