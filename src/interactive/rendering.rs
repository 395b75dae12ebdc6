//! TUI rendering with ratatui
//!
//! Draws a `BoardView`: header, guess grid with alerts beside it, on-screen
//! keyboard and a help line. The same geometry is used for mouse hit-testing.

use crate::core::LetterStatus;
use crate::render::{BoardView, KeyCap, TileEffect, TileState, TileView, keyboard_layout};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const TILE_WIDTH: u16 = 5;
const TILE_HEIGHT: u16 = 3;
const KEY_WIDTH: u16 = 5;
const WIDE_KEY_WIDTH: u16 = 7;
const KEY_HEIGHT: u16 = 3;
const GAP: u16 = 1;
const GRID_WIDTH: u16 = 5 * TILE_WIDTH + 4 * GAP;
const ALERT_WIDTH: u16 = 24;

/// Screen regions of the game view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Areas {
    header: Rect,
    grid: Rect,
    alerts: Rect,
    keyboard: Rect,
    footer: Rect,
}

fn areas(area: Rect) -> Areas {
    let [header, body, keyboard, footer] = Layout::vertical([
        Constraint::Length(3),             // Header
        Constraint::Min(0),                // Grid and alerts
        Constraint::Length(3 * KEY_HEIGHT), // Keyboard
        Constraint::Length(1),             // Help
    ])
    .areas(area);

    let [grid, _, alerts] = Layout::horizontal([
        Constraint::Length(GRID_WIDTH),
        Constraint::Length(2),
        Constraint::Length(ALERT_WIDTH),
    ])
    .flex(Flex::Center)
    .areas(body);

    Areas {
        header,
        grid,
        alerts,
        keyboard,
        footer,
    }
}

/// Tile positions, row by row, vertically centred in `grid`
///
/// Tiles that fall outside `grid` come back empty.
fn tile_rects(grid: Rect, rows: usize) -> Vec<Vec<Rect>> {
    let rows_u16 = u16::try_from(rows).unwrap_or(u16::MAX);
    let height = rows_u16.saturating_mul(TILE_HEIGHT);
    let top = grid.y + grid.height.saturating_sub(height) / 2;

    (0..rows_u16)
        .map(|r| {
            (0..5u16)
                .map(|i| {
                    Rect::new(
                        grid.x + i * (TILE_WIDTH + GAP),
                        top.saturating_add(r.saturating_mul(TILE_HEIGHT)),
                        TILE_WIDTH,
                        TILE_HEIGHT,
                    )
                    .intersection(grid)
                })
                .collect()
        })
        .collect()
}

const fn key_width(cap: KeyCap) -> u16 {
    match cap {
        KeyCap::Letter(_) => KEY_WIDTH,
        KeyCap::Enter | KeyCap::Delete => WIDE_KEY_WIDTH,
    }
}

/// Key positions, each row centred in `keyboard`
fn key_rects(keyboard: Rect) -> Vec<Vec<(KeyCap, Rect)>> {
    keyboard_layout()
        .into_iter()
        .zip(0u16..)
        .map(|(row, r)| {
            let count = u16::try_from(row.len()).unwrap_or(u16::MAX);
            let width = row.iter().map(|&cap| key_width(cap)).sum::<u16>()
                + count.saturating_sub(1) * GAP;
            let mut x = keyboard.x + keyboard.width.saturating_sub(width) / 2;
            let y = keyboard.y + r * KEY_HEIGHT;

            row.into_iter()
                .map(|cap| {
                    let rect =
                        Rect::new(x, y, key_width(cap), KEY_HEIGHT).intersection(keyboard);
                    x += key_width(cap) + GAP;
                    (cap, rect)
                })
                .collect()
        })
        .collect()
}

/// On-screen key under a terminal cell, for a frame of size `area`
#[must_use]
pub fn key_at(area: Rect, column: u16, row: u16) -> Option<KeyCap> {
    key_rects(areas(area).keyboard)
        .into_iter()
        .flatten()
        .find(|(_, rect)| {
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        })
        .map(|(cap, _)| cap)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, view: &BoardView, puzzle: Option<i64>) {
    let areas = areas(f.area());

    render_header(f, view, puzzle, areas.header);
    render_grid(f, view, areas.grid);
    render_alerts(f, view, areas.alerts);
    render_keyboard(f, view, areas.keyboard);
    render_help(f, areas.footer);
}

fn render_header(f: &mut Frame, view: &BoardView, puzzle: Option<i64>, area: Rect) {
    let title = match puzzle {
        Some(day) => format!("WORDLE #{day}"),
        None => "WORDLE (practice)".to_string(),
    };
    let status = if view.phase.is_over() {
        String::new()
    } else {
        format!("  |  guesses left: {}", view.remaining_rows)
    };

    let header = Paragraph::new(format!("{title}{status}"))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, view: &BoardView, area: Rect) {
    for (tiles, rects) in view.tiles.iter().zip(tile_rects(area, view.tiles.len())) {
        for (tile, rect) in tiles.iter().zip(rects) {
            if !rect.is_empty() {
                render_tile(f, tile, rect);
            }
        }
    }
}

fn tile_style(state: TileState) -> (Style, Style) {
    let filled = |bg: Color| {
        let style = Style::default().bg(bg).fg(Color::Black);
        (style.add_modifier(Modifier::BOLD), style)
    };
    match state {
        TileState::Empty => (Style::default(), Style::default().fg(Color::DarkGray)),
        TileState::Active => (
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Gray),
        ),
        TileState::Correct => filled(Color::Green),
        TileState::Present => filled(Color::Yellow),
        TileState::Absent => filled(Color::DarkGray),
    }
}

fn render_tile(f: &mut Frame, tile: &TileView, area: Rect) {
    let (mut text_style, mut border_style) = tile_style(tile.state);
    let mut border_type = BorderType::Plain;

    match tile.effect {
        TileEffect::None => {}
        TileEffect::Flipping => {
            border_type = BorderType::Thick;
            text_style = text_style.add_modifier(Modifier::REVERSED);
        }
        TileEffect::Shake => {
            border_style = border_style.fg(Color::Red);
            text_style = text_style.add_modifier(Modifier::RAPID_BLINK);
        }
        TileEffect::Dance => {
            border_type = BorderType::Double;
            text_style = text_style.add_modifier(Modifier::SLOW_BLINK);
        }
    }

    let letter = tile
        .letter
        .map(|c| c.to_ascii_uppercase().to_string())
        .unwrap_or_default();

    let paragraph = Paragraph::new(letter)
        .style(text_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style),
        );
    f.render_widget(paragraph, area);
}

fn render_alerts(f: &mut Frame, view: &BoardView, area: Rect) {
    let color = if view.lost { Color::Red } else { Color::White };
    let items: Vec<ListItem> = view
        .alerts
        .iter()
        .map(|text| {
            ListItem::new(Line::from(text.as_str()).alignment(Alignment::Center)).style(
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();

    f.render_widget(List::new(items), area);
}

fn key_style(status: Option<LetterStatus>) -> Style {
    match status {
        None => Style::default().fg(Color::White),
        Some(LetterStatus::Correct) => Style::default().bg(Color::Green).fg(Color::Black),
        Some(LetterStatus::Present) => Style::default().bg(Color::Yellow).fg(Color::Black),
        Some(LetterStatus::Absent) => Style::default().bg(Color::DarkGray).fg(Color::Gray),
    }
}

fn render_keyboard(f: &mut Frame, view: &BoardView, area: Rect) {
    for (keys, rects) in view.keyboard.iter().zip(key_rects(area)) {
        for (key, (_, rect)) in keys.iter().zip(rects) {
            if rect.is_empty() {
                continue;
            }
            let mut style = key_style(key.status).add_modifier(Modifier::BOLD);
            if key.hovered {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let paragraph = Paragraph::new(key.cap.label())
                .style(style)
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded),
                );
            f.render_widget(paragraph, rect);
        }
    }
}

const HELP: &str =
    "Type letters | Enter: submit | Backspace: delete | Ctrl-N: new practice game | Esc: quit";

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(HELP)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
