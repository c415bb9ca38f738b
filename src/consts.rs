//! Assorted constants & hard-coded configuration
use crate::game::Direction;
use ratatui::{
    layout::{Position, Size},
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(150);

/// Width & height of the (square) board, in grid cells
pub(crate) const GRID_SIZE: u16 = 20;

/// Number of terminal columns used to draw a single grid cell.  Terminal
/// cells are about twice as tall as they are wide, so this keeps the board
/// looking square.
pub(crate) const CELL_WIDTH: u16 = 2;

/// Size of the board in terminal cells, including its border
pub(crate) const BOARD_SIZE: Size = Size {
    width: GRID_SIZE * CELL_WIDTH + 2,
    height: GRID_SIZE + 2,
};

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window: the board plus a score bar above it and a help line below
/// it.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: BOARD_SIZE.width,
    height: BOARD_SIZE.height + 2,
};

/// The cells occupied by a new snake, head first
pub(crate) const INITIAL_SNAKE: [Position; 2] =
    [Position { x: 10, y: 10 }, Position { x: 10, y: 11 }];

/// The direction a new snake starts out moving in
pub(crate) const INITIAL_DIRECTION: Direction = Direction::North;

/// Where the food is placed at program start.  After a restart, the food is
/// placed randomly instead.
pub(crate) const INITIAL_FOOD: Position = Position { x: 5, y: 5 };

/// Glyph for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: &str = "██";

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: &str = "▓▓";

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: &str = "()";

/// Glyph for the snake's head once the game is over
pub(crate) const COLLISION_SYMBOL: &str = "××";

/// Default style for the snake's head
pub(crate) const SNAKE_HEAD_STYLE: Style = Style::new()
    .fg(Color::LightGreen)
    .add_modifier(Modifier::BOLD);

/// Default style for the snake's body
pub(crate) const SNAKE_BODY_STYLE: Style = Style::new().fg(Color::Green);

/// Default style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Default style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key names shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
