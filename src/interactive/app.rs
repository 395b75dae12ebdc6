//! TUI application state and logic

use super::input::{Command, map_key};
use super::rendering::{key_at, ui};
use crate::commands::{Puzzle, random_target};
use crate::config::GameConfig;
use crate::core::Word;
use crate::game::{AlertKind, AlertQueue, Phase, RevealStep, Session, SubmitOutcome};
use crate::render::{BoardView, KeyCap, Overlay, render};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

/// Event poll interval; bounds animation granularity
const TICK: Duration = Duration::from_millis(16);

/// Animation and alert durations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Delay between successive tile flips
    pub flip_step: Duration,
    pub shake: Duration,
    pub dance: Duration,
    /// How long an on-screen key stays highlighted after a key press
    pub hover: Duration,
    pub alert: Duration,
    pub win_alert: Duration,
}

impl From<&GameConfig> for Timings {
    fn from(config: &GameConfig) -> Self {
        Self {
            flip_step: config.flip_duration() / 2,
            shake: Duration::from_millis(300),
            dance: config.dance_duration(),
            hover: Duration::from_millis(150),
            alert: config.alert_duration(),
            win_alert: config.win_alert_duration(),
        }
    }
}

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub puzzle: Puzzle,
    pub alerts: AlertQueue,
    pub should_quit: bool,
    targets: &'a [Word],
    timings: Timings,
    next_flip: Option<Instant>,
    shake_until: Option<Instant>,
    dance_until: Option<Instant>,
    hover: Option<(KeyCap, Instant)>,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(
        session: Session<'a>,
        puzzle: Puzzle,
        targets: &'a [Word],
        config: &GameConfig,
    ) -> Self {
        Self {
            session,
            puzzle,
            alerts: AlertQueue::new(config.max_alerts),
            should_quit: false,
            targets,
            timings: Timings::from(config),
            next_flip: None,
            shake_until: None,
            dance_until: None,
            hover: None,
        }
    }

    /// Apply a player command
    pub fn handle_command(&mut self, command: Command, now: Instant) {
        if let Some(cap) = command.key_cap() {
            self.hover = Some((cap, now + self.timings.hover));
        }

        match command {
            Command::Quit => self.should_quit = true,
            Command::NewGame => self.new_game(now),
            Command::Letter(c) => {
                if self.session.accepts_input() {
                    self.session.press_letter(c);
                }
            }
            Command::Delete => {
                if self.session.accepts_input() {
                    self.session.delete_letter();
                }
            }
            Command::Submit => {
                if self.session.accepts_input() {
                    self.submit(now);
                }
            }
        }
    }

    fn submit(&mut self, now: Instant) {
        match self.session.submit() {
            SubmitOutcome::Rejected(rejection) => {
                // Dropped silently when too many alerts are already showing
                self.alerts.push(
                    rejection.to_string(),
                    AlertKind::Advisory,
                    Some(self.timings.alert),
                    now,
                );
                self.shake_until = Some(now + self.timings.shake);
            }
            SubmitOutcome::Accepted(_) => {
                self.next_flip = Some(now + self.timings.flip_step);
            }
            SubmitOutcome::Ignored => {}
        }
    }

    fn new_game(&mut self, now: Instant) {
        if !self.puzzle.is_practice() {
            self.alerts.push(
                "One daily puzzle per day. Use --random for practice games",
                AlertKind::Advisory,
                Some(self.timings.alert * 2),
                now,
            );
            return;
        }

        match random_target(self.targets) {
            Ok(target) => {
                self.session.restart(target.clone());
                self.puzzle.target = target;
                self.alerts.clear();
                self.next_flip = None;
                self.shake_until = None;
                self.dance_until = None;
            }
            Err(err) => tracing::warn!(%err, "cannot start a new game"),
        }
    }

    /// Advance timers: tile flips, effects and alert expiry
    pub fn tick(&mut self, now: Instant) {
        self.alerts.prune(now);

        while let Some(due) = self.next_flip {
            if now < due {
                break;
            }
            match self.session.advance_reveal() {
                Some(RevealStep::Tile { .. }) => {
                    self.next_flip = Some(due + self.timings.flip_step);
                }
                Some(RevealStep::Finished(phase)) => {
                    self.next_flip = None;
                    self.on_finished(phase, now);
                }
                None => self.next_flip = None,
            }
        }
    }

    fn on_finished(&mut self, phase: Phase, now: Instant) {
        match phase {
            Phase::Won => {
                self.alerts.push_evicting(
                    "You Win",
                    AlertKind::Win,
                    Some(self.timings.win_alert),
                    now,
                );
                self.dance_until = Some(now + self.timings.dance);
            }
            Phase::Lost => {
                self.alerts.push_evicting(
                    self.session.target().text().to_uppercase(),
                    AlertKind::Loss,
                    None,
                    now,
                );
                self.shake_until = Some(now + self.timings.shake);
            }
            Phase::Accepting | Phase::Evaluating => {}
        }
    }

    /// True while a reveal animation is running
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.next_flip.is_some()
    }

    /// Front-end overlay at `now`
    #[must_use]
    pub fn overlay(&self, now: Instant) -> Overlay {
        let active = |until: Option<Instant>| until.is_some_and(|t| now < t);
        Overlay {
            alerts: self.alerts.iter().map(|a| a.text.clone()).collect(),
            shake: active(self.shake_until),
            dance: active(self.dance_until),
            hovered: self
                .hover
                .and_then(|(cap, until)| (now < until).then_some(cap)),
        }
    }

    /// Board description for the frame drawn at `now`
    #[must_use]
    pub fn view(&self, now: Instant) -> BoardView {
        render(&self.session, &self.overlay(now))
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App<'_>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut terminal = setup_or_restore(setup_terminal, &mut io::stdout())?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    restore_terminal(terminal.backend_mut())?;
    terminal.show_cursor()?;

    res
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Run `setup`, putting the terminal back if it fails after raw mode is on
fn setup_or_restore<T, W: Write>(setup: impl FnOnce() -> Result<T>, out: &mut W) -> Result<T> {
    setup().inspect_err(|_| {
        if let Err(err) = restore_terminal(out) {
            tracing::warn!(%err, "failed to restore terminal");
        }
    })
}

fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, DisableMouseCapture)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App<'_>) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);

        let view = app.view(now);
        terminal.draw(|f| ui(f, &view, app.puzzle.day))?;

        if app.should_quit {
            break;
        }

        if !event::poll(TICK)? {
            continue;
        }

        let command = match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                key_at(area, mouse.column, mouse.row).map(Command::from)
            }
            _ => None,
        };

        if let Some(command) = command {
            app.handle_command(command, Instant::now());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TileState;
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;

    fn fixtures() -> (Dictionary, Vec<Word>) {
        let words = words_from_slice(&["crate", "trace", "guild", "plumb"]);
        (Dictionary::new(words.clone()), words)
    }

    fn app<'a>(dict: &'a Dictionary, targets: &'a [Word], day: Option<i64>) -> App<'a> {
        let target = Word::new("crate").unwrap();
        let puzzle = Puzzle {
            day,
            target: target.clone(),
        };
        App::new(
            Session::new(target, dict),
            puzzle,
            targets,
            &GameConfig::default(),
        )
    }

    fn type_word(app: &mut App<'_>, word: &str, now: Instant) {
        for c in word.chars() {
            app.handle_command(Command::Letter(c), now);
        }
    }

    #[test]
    fn rejected_submission_alerts_and_shakes() {
        let (dict, targets) = fixtures();
        let mut app = app(&dict, &targets, Some(1));
        let now = Instant::now();

        type_word(&mut app, "gui", now);
        app.handle_command(Command::Submit, now);

        let overlay = app.overlay(now);
        assert_eq!(overlay.alerts, ["Not enough letters (3/5)"]);
        assert!(overlay.shake);
        assert_eq!(app.session.phase(), Phase::Accepting);

        app.tick(now + Duration::from_secs(2));
        assert!(app.overlay(now + Duration::from_secs(2)).alerts.is_empty());
    }

    #[test]
    fn alerts_are_capped() {
        let (dict, targets) = fixtures();
        let mut app = app(&dict, &targets, Some(1));
        let now = Instant::now();

        for _ in 0..20 {
            app.handle_command(Command::Submit, now);
        }
        assert_eq!(app.alerts.len(), 7);
        assert_eq!(app.session.phase(), Phase::Accepting);
    }

    #[test]
    fn reveal_runs_on_timer_and_locks_input() {
        let (dict, targets) = fixtures();
        let mut app = app(&dict, &targets, Some(1));
        let start = Instant::now();

        type_word(&mut app, "trace", start);
        app.handle_command(Command::Submit, start);
        assert!(app.is_animating());

        // Typing during the reveal is dropped
        app.handle_command(Command::Letter('x'), start);
        app.handle_command(Command::Delete, start);

        app.tick(start + Duration::from_millis(60));
        let view = app.view(start + Duration::from_millis(60));
        assert_eq!(view.tiles[0][0].state, TileState::Present);
        assert_eq!(view.tiles[0][1].state, TileState::Active);

        app.tick(start + Duration::from_secs(1));
        assert!(!app.is_animating());
        assert_eq!(app.session.phase(), Phase::Accepting);
        assert_eq!(app.session.pending_letters(), "");
    }

    #[test]
    fn winning_shows_alert_and_dances() {
        let (dict, targets) = fixtures();
        let mut app = app(&dict, &targets, Some(1));
        let start = Instant::now();

        type_word(&mut app, "crate", start);
        app.handle_command(Command::Submit, start);
        let done = start + Duration::from_secs(1);
        app.tick(done);

        assert_eq!(app.session.phase(), Phase::Won);
        let overlay = app.overlay(done);
        assert_eq!(overlay.alerts, ["You Win"]);
        assert!(overlay.dance);
    }

    #[test]
    fn losing_shows_target_persistently() {
        let (dict, targets) = fixtures();
        let target = Word::new("crate").unwrap();
        let puzzle = Puzzle {
            day: Some(1),
            target: target.clone(),
        };
        let session = Session::new(target, &dict).with_max_rows(1);
        let mut app = App::new(session, puzzle, &targets, &GameConfig::default());
        let start = Instant::now();

        type_word(&mut app, "guild", start);
        app.handle_command(Command::Submit, start);
        app.tick(start + Duration::from_secs(1));

        let later = start + Duration::from_secs(600);
        app.tick(later);
        assert_eq!(app.session.phase(), Phase::Lost);
        assert_eq!(app.overlay(later).alerts, ["CRATE"]);
        assert!(app.view(later).lost);
    }

    #[test]
    fn new_game_only_in_practice() {
        let (dict, targets) = fixtures();
        let now = Instant::now();

        let mut daily = app(&dict, &targets, Some(1));
        type_word(&mut daily, "gu", now);
        daily.handle_command(Command::NewGame, now);
        assert_eq!(daily.session.pending_letters(), "gu");
        assert_eq!(daily.alerts.len(), 1);

        let mut practice = app(&dict, &targets, None);
        type_word(&mut practice, "gu", now);
        practice.handle_command(Command::NewGame, now);
        assert_eq!(practice.session.pending_letters(), "");
        assert!(targets.contains(&practice.puzzle.target));
        assert_eq!(practice.session.target(), &practice.puzzle.target);
    }

    #[test]
    fn key_presses_highlight_on_screen_keys() {
        let (dict, targets) = fixtures();
        let mut app = app(&dict, &targets, Some(1));
        let now = Instant::now();

        app.handle_command(Command::Submit, now);
        assert_eq!(app.overlay(now).hovered, Some(KeyCap::Enter));
        assert_eq!(app.overlay(now + Duration::from_secs(1)).hovered, None);
    }

    #[test]
    fn failed_setup_restores_terminal() {
        let mut out = Vec::new();
        let result: Result<()> =
            setup_or_restore(|| Err(anyhow::anyhow!("no terminal")), &mut out);

        assert!(result.is_err());
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
    }

    #[test]
    fn successful_setup_writes_nothing() {
        let mut out = Vec::new();
        let value = setup_or_restore(|| Ok(7), &mut out).unwrap();
        assert_eq!(value, 7);
        assert!(out.is_empty());
    }

    #[test]
    fn quit_sets_flag() {
        let (dict, targets) = fixtures();
        let mut app = app(&dict, &targets, Some(1));
        app.handle_command(Command::Quit, Instant::now());
        assert!(app.should_quit);
    }
}
