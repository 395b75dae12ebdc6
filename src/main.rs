//! Wordle Daily - CLI
//!
//! Daily word game with TUI and line-oriented modes.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_daily::{
    commands::{PuzzleChoice, check_guess, choose_puzzle, run_simple, today_info},
    config::GameConfig,
    core::Word,
    daily::DaySelector,
    game::Session,
    output::{print_check_result, print_today},
    telemetry::{LogSink, init_logging},
    wordlists::{
        ALLOWED, Dictionary, embedded_dictionary, embedded_targets,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Guess the daily five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Play the puzzle of this date (YYYY-MM-DD)
    #[arg(long, global = true, conflicts_with_all = ["day", "random"])]
    date: Option<NaiveDate>,

    /// Play this puzzle number
    #[arg(long, global = true, conflicts_with = "random", allow_hyphen_values = true)]
    day: Option<i64>,

    /// Practice game against a random target
    #[arg(long, global = true)]
    random: bool,

    /// Config file (default: <config dir>/wordle_daily/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Daily target list, one word per line
    #[arg(long, global = true)]
    targets: Option<PathBuf>,

    /// Accepted-guess list, one word per line
    #[arg(long, global = true)]
    allowed: Option<PathBuf>,

    /// Number of guesses per game
    #[arg(long, global = true)]
    max_rows: Option<usize>,

    /// Log filter when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Write logs to this file (the TUI discards logs otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-oriented mode: one guess per line
    Simple,

    /// Evaluate a single guess
    Check {
        /// The guess to evaluate
        guess: String,

        /// Target word (default: today's word)
        #[arg(short, long)]
        target: Option<String>,
    },

    /// Show today's puzzle number
    Today {
        /// Also print the word
        #[arg(long)]
        reveal: bool,
    },
}

impl Cli {
    fn puzzle_choice(&self) -> PuzzleChoice {
        if self.random {
            PuzzleChoice::Random
        } else if let Some(date) = self.date {
            PuzzleChoice::Date(date)
        } else if let Some(day) = self.day {
            PuzzleChoice::Day(day)
        } else {
            PuzzleChoice::Today
        }
    }

    fn log_sink(&self, tui: bool) -> LogSink {
        match (&self.log_file, tui) {
            (Some(path), _) => LogSink::File(path.clone()),
            (None, true) => LogSink::Discard,
            (None, false) => LogSink::Stderr,
        }
    }
}

/// Load configuration and apply command-line overrides
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = GameConfig::load(cli.config.as_deref()).context("failed to load config")?;

    if let Some(path) = &cli.targets {
        config.targets_path = Some(path.clone());
    }
    if let Some(path) = &cli.allowed {
        config.allowed_path = Some(path.clone());
    }
    if let Some(max_rows) = cli.max_rows {
        config.max_rows = max_rows;
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// Load word lists: embedded by default, files when configured
///
/// Targets are always accepted as guesses.
fn load_wordlists(config: &GameConfig) -> Result<(Vec<Word>, Dictionary)> {
    let targets = match &config.targets_path {
        Some(path) => load_from_file(path).context("failed to load target list")?,
        None => embedded_targets(),
    };

    let dictionary = match &config.allowed_path {
        Some(path) => {
            let allowed = load_from_file(path).context("failed to load allowed list")?;
            Dictionary::with_targets(allowed, &targets)
        }
        None if config.targets_path.is_some() => {
            Dictionary::with_targets(words_from_slice(ALLOWED), &targets)
        }
        None => embedded_dictionary(),
    };

    tracing::debug!(
        targets = targets.len(),
        allowed = dictionary.len(),
        "word lists ready"
    );
    Ok((targets, dictionary))
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    let tui = matches!(command, Commands::Play);

    init_logging(&cli.log_level, cli.log_sink(tui)).context("failed to initialise logging")?;

    let config = load_config(&cli)?;
    let selector = DaySelector::new(config.epoch);
    let (targets, dictionary) = load_wordlists(&config)?;

    match command {
        Commands::Play => run_play_command(&cli, &config, &selector, &targets, &dictionary),
        Commands::Simple => run_simple_command(&cli, &config, &selector, &targets, &dictionary),
        Commands::Check { guess, target } => run_check_command(
            &guess,
            target.as_deref(),
            &cli,
            &selector,
            &targets,
            &dictionary,
        ),
        Commands::Today { reveal } => {
            let info = today_info(&selector, &targets, &Local::now())?;
            print_today(&info, reveal);
            Ok(())
        }
    }
}

fn run_play_command(
    cli: &Cli,
    config: &GameConfig,
    selector: &DaySelector,
    targets: &[Word],
    dictionary: &Dictionary,
) -> Result<()> {
    use wordle_daily::interactive::{App, run_tui};

    let puzzle = choose_puzzle(cli.puzzle_choice(), selector, targets)?;
    tracing::info!(day = ?puzzle.day, "starting TUI game");

    let session = Session::new(puzzle.target.clone(), dictionary).with_max_rows(config.max_rows);
    let app = App::new(session, puzzle, targets, config);
    run_tui(app)
}

fn run_simple_command(
    cli: &Cli,
    config: &GameConfig,
    selector: &DaySelector,
    targets: &[Word],
    dictionary: &Dictionary,
) -> Result<()> {
    let puzzle = choose_puzzle(cli.puzzle_choice(), selector, targets)?;
    let mut session = Session::new(puzzle.target, dictionary).with_max_rows(config.max_rows);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    run_simple(&mut session, puzzle.day, &mut input, &mut out)?;
    Ok(())
}

fn run_check_command(
    guess: &str,
    target: Option<&str>,
    cli: &Cli,
    selector: &DaySelector,
    targets: &[Word],
    dictionary: &Dictionary,
) -> Result<()> {
    let target = match target {
        Some(text) => Word::new(text).with_context(|| format!("invalid target '{text}'"))?,
        None => choose_puzzle(cli.puzzle_choice(), selector, targets)?.target,
    };

    let result = check_guess(guess, &target, dictionary)?;
    print_check_result(&result);
    Ok(())
}
