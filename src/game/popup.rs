use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect, Size},
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// A pop-up shown on top of the board while the game is paused
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct PausedPopup;

impl PausedPopup {
    /// The size that should be used for the `Rect` passed to
    /// `PausedPopup::render()`
    pub(super) const SIZE: Size = Size {
        width: 20,
        height: 4,
    };
}

impl Widget for PausedPopup {
    /*
     * ┌───── PAUSED ─────┐
     * │ Resume (Space)   │
     * │ Quit (q)         │
     * └──────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        render_popup(
            " PAUSED ",
            [key_line("Resume", "Space"), key_line("Quit", "q")],
            area,
            buf,
        );
    }
}

/// A pop-up shown on top of the board once the game is over
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct GameOverPopup {
    pub(super) score: u32,
}

impl GameOverPopup {
    /// The size that should be used for the `Rect` passed to
    /// `GameOverPopup::render()`
    pub(super) const SIZE: Size = Size {
        width: 20,
        height: 6,
    };
}

impl Widget for GameOverPopup {
    /*
     * ┌─── GAME OVER! ───┐
     * │ Final score: 42  │
     * │                  │
     * │ Restart (Enter)  │
     * │ Quit (q)         │
     * └──────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        render_popup(
            " GAME OVER! ",
            [
                Line::raw(format!("Final score: {}", self.score)),
                Line::default(),
                key_line("Restart", "Enter"),
                key_line("Quit", "q"),
            ],
            area,
            buf,
        );
    }
}

/// Blank out `area` and draw a bordered box in it with the given title &
/// lines of text
fn render_popup<I>(title: &'static str, lines: I, area: Rect, buf: &mut Buffer)
where
    I: IntoIterator<Item = Line<'static>>,
{
    let block = Block::bordered()
        .title(title)
        .title_alignment(Alignment::Center)
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    Clear.render(area, buf);
    block.render(area, buf);
    for (line, row) in lines.into_iter().zip(inner.rows()) {
        line.render(row, buf);
    }
}

/// Render an action and the key that performs it as, e.g., "Quit (q)", with
/// the key highlighted
fn key_line(action: &'static str, key: &'static str) -> Line<'static> {
    Line::from_iter([
        Span::raw(action),
        Span::raw(" ("),
        Span::styled(key, consts::KEY_STYLE),
        Span::raw(")"),
    ])
}
