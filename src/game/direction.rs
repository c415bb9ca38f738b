use crate::consts::GRID_SIZE;
use ratatui::layout::Position;

/// The direction in which the snake is heading
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    /// Up the screen, i.e., towards `y = 0`
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Return the position one cell over from `pos` in this direction, or
    /// `None` if that would take it off the board.
    pub(crate) fn advance(self, pos: Position) -> Option<Position> {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::North => y = y.checked_sub(1)?,
            Direction::East => x = x.checked_add(1)?,
            Direction::South => y = y.checked_add(1)?,
            Direction::West => x = x.checked_sub(1)?,
        }
        (x < GRID_SIZE && y < GRID_SIZE).then_some(Position { x, y })
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}
