use super::direction::Direction;
use crate::consts;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// The snake: the cells it occupies and the way it is heading.
///
/// All positions are relative to the top-left corner of the board.  The head
/// is stored apart from the rest of the body so that a snake can never be
/// empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    pub(super) head: Position,

    /// The positions of the rest of the snake, starting with the cell right
    /// behind the head and ending with the tail
    pub(super) body: VecDeque<Position>,

    /// The direction in which the snake is currently heading
    pub(super) direction: Direction,
}

impl Snake {
    /// Create a snake occupying [`INITIAL_SNAKE`][consts::INITIAL_SNAKE] and
    /// heading in [`INITIAL_DIRECTION`][consts::INITIAL_DIRECTION]
    pub(super) fn new() -> Snake {
        let [head, body @ ..] = consts::INITIAL_SNAKE;
        Snake {
            head,
            body: VecDeque::from_iter(body),
            direction: consts::INITIAL_DIRECTION,
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        self.head
    }

    /// Return the positions of the cells behind the head, tail last
    pub(crate) fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    /// Return the direction in which the snake is heading
    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterate over every cell of the snake, head first
    pub(crate) fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Does any part of the snake (tail included) occupy `pos`?
    pub(super) fn occupies(&self, pos: Position) -> bool {
        self.segments().any(|p| p == pos)
    }

    /// Change the snake's direction to `direction`
    pub(super) fn turn(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Return the cell the head would move into next, or `None` if it would
    /// leave the board
    pub(super) fn next_head(&self) -> Option<Position> {
        self.direction.advance(self.head)
    }

    /// Move the head to `pos`, keeping every existing cell
    pub(super) fn push_head(&mut self, pos: Position) {
        self.body.push_front(self.head);
        self.head = pos;
    }

    /// Remove the last cell of the body.  The head is never removed.
    pub(super) fn drop_tail(&mut self) {
        let _ = self.body.pop_back();
    }
}
