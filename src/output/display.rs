//! Display functions for command results

use super::formatters::{colored_keyboard, colored_row, empty_row};
use crate::commands::{CheckResult, TodayInfo};
use crate::game::Session;
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of checking a single guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess:  {}",
        result.guess.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_row(&result.guess, &result.feedback));
    println!("  {}", result.feedback.to_emoji());

    if result.feedback.is_perfect() {
        println!("\n{}", "✅ That's the word!".green().bold());
    }
}

/// Print today's puzzle details
pub fn print_today(info: &TodayInfo, reveal: bool) {
    println!(
        "{} #{} ({})",
        "Puzzle".bright_cyan().bold(),
        info.day,
        info.date.format("%Y-%m-%d")
    );
    if reveal {
        println!(
            "Word:   {}",
            info.word.text().to_uppercase().bright_yellow().bold()
        );
    }
}

/// Draw the board and keyboard for line-oriented play
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn write_board<W: Write>(out: &mut W, session: &Session<'_>) -> io::Result<()> {
    writeln!(out)?;
    for row in session.rows() {
        writeln!(out, "  {}", colored_row(&row.word, &row.feedback))?;
    }
    for _ in 0..session.remaining_rows() {
        writeln!(out, "  {}", empty_row())?;
    }
    writeln!(out)?;
    for line in colored_keyboard(session.keyboard()).lines() {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)
}
