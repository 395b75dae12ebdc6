//! Board description built from immutable session state
//!
//! `render` produces a plain value describing every tile and key. Front ends
//! only draw it; nothing here touches a terminal.

use crate::core::{LetterStatus, WORD_LENGTH};
use crate::game::{Phase, Session};

/// Letter rows of the on-screen keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Display state of a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileState {
    Empty,
    /// Holds a letter that has not been evaluated yet
    Active,
    Correct,
    Present,
    Absent,
}

impl From<LetterStatus> for TileState {
    fn from(status: LetterStatus) -> Self {
        match status {
            LetterStatus::Correct => Self::Correct,
            LetterStatus::Present => Self::Present,
            LetterStatus::Absent => Self::Absent,
        }
    }
}

/// Transient animation applied to a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileEffect {
    #[default]
    None,
    Flipping,
    Shake,
    Dance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileView {
    pub letter: Option<char>,
    pub state: TileState,
    pub effect: TileEffect,
}

impl TileView {
    const EMPTY: Self = Self {
        letter: None,
        state: TileState::Empty,
        effect: TileEffect::None,
    };
}

/// A key of the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCap {
    Letter(char),
    Enter,
    Delete,
}

impl KeyCap {
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(c) => c.to_ascii_uppercase().to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Delete => "DEL".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyView {
    pub cap: KeyCap,
    pub status: Option<LetterStatus>,
    pub hovered: bool,
}

/// Presentation state owned by the front end (timers, alerts, hover)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    /// Alert texts, newest first
    pub alerts: Vec<String>,
    /// Shake the active row, or the whole board once lost
    pub shake: bool,
    /// Dance the winning row
    pub dance: bool,
    pub hovered: Option<KeyCap>,
}

/// Everything a front end needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub tiles: Vec<Vec<TileView>>,
    pub keyboard: Vec<Vec<KeyView>>,
    pub alerts: Vec<String>,
    pub phase: Phase,
    pub lost: bool,
    pub remaining_rows: usize,
}

/// Keyboard layout: three letter rows, with Enter and Delete around the last
#[must_use]
pub fn keyboard_layout() -> Vec<Vec<KeyCap>> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut caps: Vec<KeyCap> = row.chars().map(KeyCap::Letter).collect();
            if i == KEYBOARD_ROWS.len() - 1 {
                caps.insert(0, KeyCap::Enter);
                caps.push(KeyCap::Delete);
            }
            caps
        })
        .collect()
}

/// Describe the board for `session` with the front end's `overlay`
#[must_use]
pub fn render(session: &Session<'_>, overlay: &Overlay) -> BoardView {
    let phase = session.phase();
    let committed = session.rows();

    let mut tiles = vec![vec![TileView::EMPTY; WORD_LENGTH]; session.max_rows()];

    for (r, row) in committed.iter().enumerate() {
        let dancing = overlay.dance && phase == Phase::Won && r + 1 == committed.len();
        for (i, tile) in tiles[r].iter_mut().enumerate() {
            *tile = TileView {
                letter: Some(char::from(row.word.char_at(i))),
                state: row.feedback.statuses()[i].into(),
                effect: if dancing {
                    TileEffect::Dance
                } else {
                    TileEffect::None
                },
            };
        }
    }

    let current = committed.len();
    if let Some(reveal) = session.reveal() {
        let row = reveal.row();
        for (i, tile) in tiles[current].iter_mut().enumerate() {
            let flipped = i < reveal.revealed();
            *tile = TileView {
                letter: Some(char::from(row.word.char_at(i))),
                state: if flipped {
                    row.feedback.statuses()[i].into()
                } else {
                    TileState::Active
                },
                effect: if i == reveal.revealed() {
                    TileEffect::Flipping
                } else {
                    TileEffect::None
                },
            };
        }
    } else if phase == Phase::Accepting && current < tiles.len() {
        for (tile, c) in tiles[current].iter_mut().zip(session.pending_letters().chars()) {
            *tile = TileView {
                letter: Some(c),
                state: TileState::Active,
                effect: if overlay.shake {
                    TileEffect::Shake
                } else {
                    TileEffect::None
                },
            };
        }
    }

    let lost = phase == Phase::Lost;
    if lost && overlay.shake {
        for tile in tiles.iter_mut().flatten() {
            tile.effect = TileEffect::Shake;
        }
    }

    let keyboard = keyboard_layout()
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cap| KeyView {
                    cap,
                    status: match cap {
                        KeyCap::Letter(c) => session.keyboard().status(c as u8),
                        KeyCap::Enter | KeyCap::Delete => None,
                    },
                    hovered: overlay.hovered == Some(cap),
                })
                .collect()
        })
        .collect();

    BoardView {
        tiles,
        keyboard,
        alerts: overlay.alerts.clone(),
        phase,
        lost,
        remaining_rows: session.remaining_rows(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(&["crate", "trace", "guild"]))
    }

    fn type_word(session: &mut Session<'_>, word: &str) {
        for c in word.chars() {
            session.press_letter(c);
        }
    }

    #[test]
    fn empty_board() {
        let dict = dictionary();
        let session = Session::new(Word::new("crate").unwrap(), &dict);
        let view = render(&session, &Overlay::default());

        assert_eq!(view.tiles.len(), 6);
        assert!(view.tiles.iter().flatten().all(|t| *t == TileView::EMPTY));
        assert_eq!(view.phase, Phase::Accepting);
        assert!(!view.lost);
    }

    #[test]
    fn pending_letters_are_active_tiles() {
        let dict = dictionary();
        let mut session = Session::new(Word::new("crate").unwrap(), &dict);
        type_word(&mut session, "gu");

        let view = render(&session, &Overlay::default());
        assert_eq!(view.tiles[0][0].letter, Some('g'));
        assert_eq!(view.tiles[0][1].state, TileState::Active);
        assert_eq!(view.tiles[0][2].state, TileState::Empty);
    }

    #[test]
    fn shake_applies_to_active_tiles_only() {
        let dict = dictionary();
        let mut session = Session::new(Word::new("crate").unwrap(), &dict);
        type_word(&mut session, "gu");

        let overlay = Overlay {
            shake: true,
            ..Overlay::default()
        };
        let view = render(&session, &overlay);
        assert_eq!(view.tiles[0][1].effect, TileEffect::Shake);
        assert_eq!(view.tiles[0][2].effect, TileEffect::None);
    }

    #[test]
    fn reveal_in_flight_shows_partial_row() {
        let dict = dictionary();
        let mut session = Session::new(Word::new("crate").unwrap(), &dict);
        type_word(&mut session, "trace");
        session.submit();
        session.advance_reveal();
        session.advance_reveal();

        let view = render(&session, &Overlay::default());
        let row = &view.tiles[0];
        assert_eq!(row[0].state, TileState::Present);
        assert_eq!(row[1].state, TileState::Correct);
        assert_eq!(row[2].state, TileState::Active);
        assert_eq!(row[2].effect, TileEffect::Flipping);
        assert_eq!(row[3].effect, TileEffect::None);
        assert_eq!(view.phase, Phase::Evaluating);
    }

    #[test]
    fn committed_rows_carry_statuses_and_keyboard() {
        let dict = dictionary();
        let mut session = Session::new(Word::new("crate").unwrap(), &dict);
        type_word(&mut session, "guild");
        session.submit();
        session.finish_reveal();

        let view = render(&session, &Overlay::default());
        assert!(view.tiles[0].iter().all(|t| t.state == TileState::Absent));

        let g_key = view
            .keyboard
            .iter()
            .flatten()
            .find(|k| k.cap == KeyCap::Letter('g'))
            .unwrap();
        assert_eq!(g_key.status, Some(LetterStatus::Absent));
    }

    #[test]
    fn winning_row_dances() {
        let dict = dictionary();
        let mut session = Session::new(Word::new("crate").unwrap(), &dict);
        type_word(&mut session, "crate");
        session.submit();
        session.finish_reveal();

        let overlay = Overlay {
            dance: true,
            ..Overlay::default()
        };
        let view = render(&session, &overlay);
        assert!(view.tiles[0].iter().all(|t| t.effect == TileEffect::Dance));
        assert_eq!(view.tiles[1][0].effect, TileEffect::None);
    }

    #[test]
    fn lost_board_shakes_everything() {
        let dict = dictionary();
        let mut session = Session::new(Word::new("crate").unwrap(), &dict).with_max_rows(1);
        type_word(&mut session, "guild");
        session.submit();
        session.finish_reveal();

        let overlay = Overlay {
            shake: true,
            ..Overlay::default()
        };
        let view = render(&session, &overlay);
        assert!(view.lost);
        assert!(view.tiles.iter().flatten().all(|t| t.effect == TileEffect::Shake));
    }

    #[test]
    fn keyboard_layout_has_enter_and_delete() {
        let layout = keyboard_layout();
        assert_eq!(layout.len(), 3);
        assert_eq!(layout[2].first(), Some(&KeyCap::Enter));
        assert_eq!(layout[2].last(), Some(&KeyCap::Delete));
        assert_eq!(layout.iter().flatten().count(), 28);
    }

    #[test]
    fn hovered_key_is_flagged() {
        let dict = dictionary();
        let session = Session::new(Word::new("crate").unwrap(), &dict);
        let overlay = Overlay {
            hovered: Some(KeyCap::Enter),
            ..Overlay::default()
        };
        let view = render(&session, &overlay);
        let hovered: Vec<KeyCap> = view
            .keyboard
            .iter()
            .flatten()
            .filter(|k| k.hovered)
            .map(|k| k.cap)
            .collect();
        assert_eq!(hovered, [KeyCap::Enter]);
    }

    #[test]
    fn key_labels() {
        assert_eq!(KeyCap::Letter('q').label(), "Q");
        assert_eq!(KeyCap::Enter.label(), "ENTER");
        assert_eq!(KeyCap::Delete.label(), "DEL");
    }
}
