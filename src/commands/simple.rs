//! Simple line-oriented play
//!
//! Text-based game without the TUI: one guess per line.

use crate::core::WORD_LENGTH;
use crate::game::{Phase, Session, SubmitOutcome};
use crate::output::formatters::share_text;
use crate::output::write_board;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// How a line-oriented game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub phase: Phase,
    pub guesses: usize,
}

impl GameSummary {
    #[must_use]
    pub const fn won(&self) -> bool {
        matches!(self.phase, Phase::Won)
    }
}

/// Run a game reading guesses from `input` and writing to `out`
///
/// Typing `quit` or reaching end of input stops early; the summary then
/// reports the phase the session was left in.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    puzzle: Option<i64>,
    input: &mut R,
    out: &mut W,
) -> io::Result<GameSummary> {
    match puzzle {
        Some(day) => writeln!(out, "{}", format!("Daily puzzle #{day}").bright_cyan().bold())?,
        None => writeln!(out, "{}", "Practice game".bright_cyan().bold())?,
    }
    writeln!(out, "Guess the {WORD_LENGTH}-letter word. Type 'quit' to give up.")?;

    while !session.phase().is_over() {
        write_board(out, session)?;

        let turn = session.rows().len() + 1;
        write!(out, "Guess {turn}/{}: ", session.max_rows())?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let line = line.trim();

        if matches!(line, "quit" | "exit") {
            break;
        }

        let length = line.chars().count();
        if length > WORD_LENGTH {
            writeln!(
                out,
                "{}",
                format!("Too many letters ({length}/{WORD_LENGTH})").yellow()
            )?;
            continue;
        }

        while session.delete_letter() {}
        for c in line.chars() {
            session.press_letter(c);
        }

        match session.submit() {
            SubmitOutcome::Rejected(rejection) => {
                writeln!(out, "{}", rejection.to_string().yellow())?;
            }
            SubmitOutcome::Accepted(_) => {
                session.finish_reveal();
            }
            SubmitOutcome::Ignored => break,
        }
    }

    let summary = GameSummary {
        phase: session.phase(),
        guesses: session.rows().len(),
    };

    if summary.phase.is_over() {
        write_board(out, session)?;
    }

    match summary.phase {
        Phase::Won => {
            writeln!(out, "{}", "🎉 You Win".green().bold())?;
        }
        Phase::Lost => {
            writeln!(
                out,
                "The word was {}",
                session.target().text().to_uppercase().bright_yellow().bold()
            )?;
        }
        Phase::Accepting | Phase::Evaluating => {
            writeln!(out, "👋 Thanks for playing!")?;
            return Ok(summary);
        }
    }

    writeln!(
        out,
        "\n{}",
        share_text(puzzle, session.rows(), summary.won(), session.max_rows())
    )?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(&["crate", "trace", "guild", "plumb"]))
    }

    fn play(script: &str, max_rows: usize) -> (GameSummary, String) {
        let dict = dictionary();
        let mut session = Session::new(Word::new("crate").unwrap(), &dict).with_max_rows(max_rows);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let summary = run_simple(&mut session, Some(7), &mut input, &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn rejected_guesses_do_not_use_rows() {
        let (summary, out) = play("zzzzz\ncra\ncrates\ntrace\ncrate\n", 6);

        assert!(summary.won());
        assert_eq!(summary.guesses, 2);
        assert!(out.contains("Not a word!"));
        assert!(out.contains("Not enough letters (3/5)"));
        assert!(out.contains("Too many letters (6/5)"));
        assert!(out.contains("Wordle 7 2/6"));
    }

    #[test]
    fn losing_reveals_the_word() {
        let (summary, out) = play("guild\nplumb\n", 2);

        assert_eq!(summary.phase, Phase::Lost);
        assert!(out.contains("CRATE"));
        assert!(out.contains("Wordle 7 X/2"));
    }

    #[test]
    fn quit_leaves_game_unfinished() {
        let (summary, out) = play("guild\nquit\n", 6);

        assert_eq!(summary.phase, Phase::Accepting);
        assert_eq!(summary.guesses, 1);
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn end_of_input_stops() {
        let (summary, _) = play("", 6);
        assert_eq!(summary.guesses, 0);
        assert!(!summary.won());
    }
}
