//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus, WORD_LENGTH, Word};
use crate::game::{GuessRow, KeyboardState};
use crate::render::{KEYBOARD_ROWS, TileState};
use colored::{ColoredString, Colorize};

/// Colour a single letter tile by its state
#[must_use]
pub fn colored_tile(letter: char, state: TileState) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match state {
        TileState::Correct => text.black().on_green().bold(),
        TileState::Present => text.black().on_yellow().bold(),
        TileState::Absent => text.white().on_bright_black(),
        TileState::Active => text.bold(),
        TileState::Empty => text.dimmed(),
    }
}

/// Render an evaluated guess as coloured tiles
#[must_use]
pub fn colored_row(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.statuses())
        .map(|(c, &status)| colored_tile(c, status.into()).to_string())
        .collect()
}

/// Render the keyboard, each key coloured by its best status so far
#[must_use]
pub fn colored_keyboard(keyboard: &KeyboardState) -> String {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .bytes()
                .map(|b| {
                    let label = format!("{} ", char::from(b).to_ascii_uppercase());
                    match keyboard.status(b) {
                        Some(LetterStatus::Correct) => label.green().bold().to_string(),
                        Some(LetterStatus::Present) => label.yellow().bold().to_string(),
                        Some(LetterStatus::Absent) => label.bright_black().to_string(),
                        None => label,
                    }
                })
                .collect();
            format!("{}{keys}", " ".repeat(indent))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Spoiler-free summary of a finished game
///
/// ```text
/// Wordle 42 3/6
///
/// ⬜🟨⬜⬜⬜
/// 🟨🟩⬜🟩⬜
/// 🟩🟩🟩🟩🟩
/// ```
#[must_use]
pub fn share_text(puzzle: Option<i64>, rows: &[GuessRow], won: bool, max_rows: usize) -> String {
    let score = if won {
        rows.len().to_string()
    } else {
        "X".to_string()
    };
    let title = match puzzle {
        Some(day) => format!("Wordle {day} {score}/{max_rows}"),
        None => format!("Wordle practice {score}/{max_rows}"),
    };

    let grid: Vec<String> = rows.iter().map(|row| row.feedback.to_emoji()).collect();
    format!("{title}\n\n{}", grid.join("\n"))
}

/// Placeholder row for unused guesses
#[must_use]
pub fn empty_row() -> String {
    (0..WORD_LENGTH)
        .map(|_| colored_tile('·', TileState::Empty).to_string())
        .collect()
}
