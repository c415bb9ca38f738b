use super::popup::{GameOverPopup, PausedPopup};
use super::{Snapshot, Status};
use crate::consts;
use crate::util::{center_rect, get_display_area};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};

/// Styles for the things drawn on the board
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Theme {
    pub(crate) snake_head: Style,
    pub(crate) snake_body: Style,
    pub(crate) food: Style,
    pub(crate) collision: Style,
}

impl Default for Theme {
    fn default() -> Theme {
        Theme {
            snake_head: consts::SNAKE_HEAD_STYLE,
            snake_body: consts::SNAKE_BODY_STYLE,
            food: consts::FOOD_STYLE,
            collision: consts::COLLISION_STYLE,
        }
    }
}

/// Widget that draws a snapshot of a game: the score bar, the board, a line
/// of help text, and a pop-up if the game is paused or over
#[derive(Clone, Copy, Debug)]
pub(crate) struct View<'a> {
    snapshot: Snapshot<'a>,
    theme: &'a Theme,
}

impl<'a> View<'a> {
    pub(crate) fn new(snapshot: Snapshot<'a>, theme: &'a Theme) -> View<'a> {
        View { snapshot, theme }
    }
}

impl Widget for View<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(" Score: {}", self.snapshot.score),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let board_area = center_rect(board_area, consts::BOARD_SIZE);
        Block::bordered().render(board_area, buf);
        let mut board = Canvas {
            area: board_area.inner(Margin::new(1, 1)),
            buf,
        };
        let snake = self.snapshot.snake;
        for &pos in snake.body() {
            board.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, self.theme.snake_body);
        }
        board.draw_cell(self.snapshot.food, consts::FOOD_SYMBOL, self.theme.food);
        // Draw the head last so that it's on top of any food that landed
        // under it
        if self.snapshot.status == Status::GameOver {
            board.draw_cell(snake.head(), consts::COLLISION_SYMBOL, self.theme.collision);
        } else {
            board.draw_cell(snake.head(), consts::SNAKE_HEAD_SYMBOL, self.theme.snake_head);
        }

        Line::from_iter([
            Span::raw(" "),
            Span::styled("←↑↓→", consts::KEY_STYLE),
            Span::raw(" Move  "),
            Span::styled("Space", consts::KEY_STYLE),
            Span::raw(" Pause  "),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(" Quit"),
        ])
        .render(help_area, buf);

        match self.snapshot.status {
            Status::Running => (),
            Status::Paused => PausedPopup.render(center_rect(display, PausedPopup::SIZE), buf),
            Status::GameOver => GameOverPopup {
                score: self.snapshot.score,
            }
            .render(center_rect(display, GameOverPopup::SIZE), buf),
        }
    }
}

/// A region of a buffer addressed in grid cells rather than terminal cells
#[derive(Debug)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Draw `symbol` in grid cell `pos`.  Each grid cell is
    /// [`CELL_WIDTH`][consts::CELL_WIDTH] terminal cells wide, and `symbol`
    /// should be that many columns wide as well.
    fn draw_cell(&mut self, pos: Position, symbol: &str, style: Style) {
        let Some(x) = pos
            .x
            .checked_mul(consts::CELL_WIDTH)
            .and_then(|x| self.area.x.checked_add(x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        for (ch, offset) in symbol.chars().zip(0..consts::CELL_WIDTH) {
            let Some(x) = x.checked_add(offset) else {
                return;
            };
            if !self.area.contains(Position { x, y }) {
                return;
            }
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_char(ch);
                cell.set_style(Style::reset().patch(style));
            }
        }
    }
}
