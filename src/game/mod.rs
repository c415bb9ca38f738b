mod direction;
mod popup;
mod snake;
mod view;
pub(crate) use self::direction::Direction;
pub(crate) use self::snake::Snake;
pub(crate) use self::view::{Theme, View};
use crate::command::Command;
use crate::consts;
use rand::Rng;
use ratatui::layout::Position;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    state: GameState,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new() -> Self {
        Game::new_with_rng(rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(rng: R) -> Game<R> {
        tracing::info!("Starting new game");
        Game {
            rng,
            state: GameState::new(consts::INITIAL_FOOD),
        }
    }

    /// Advance the game by one tick: move the snake one cell in its current
    /// direction, then either end the game, let the snake eat & grow, or just
    /// move it along.
    ///
    /// Does nothing unless the game is running.
    pub(crate) fn step(&mut self) {
        if self.state.status != Status::Running {
            return;
        }
        let snake = &self.state.snake;
        // The tail is still in place at this point, so moving into the cell
        // it's about to vacate counts as a collision.
        let Some(new_head) = snake.next_head().filter(|&p| !snake.occupies(p)) else {
            tracing::info!(
                score = self.state.score,
                length = self.state.snake.len(),
                "Game over"
            );
            self.state.status = Status::GameOver;
            return;
        };
        tracing::trace!(head = ?new_head, "Moving snake");
        self.state.snake.push_head(new_head);
        if new_head == self.state.food {
            self.state.score += 1;
            tracing::debug!(score = self.state.score, "Snake ate food");
            self.place_food();
        } else {
            self.state.snake.drop_tail();
        }
    }

    /// Carry out a command produced by [`crate::command::on_key()`]
    pub(crate) fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::SetHeading(direction) => {
                if direction != self.state.snake.direction() {
                    tracing::debug!(?direction, "Changing heading");
                    self.state.snake.turn(direction);
                }
            }
            Command::TogglePause => match self.state.status {
                Status::Running => self.pause(),
                Status::Paused => {
                    tracing::info!("Resuming game");
                    self.state.status = Status::Running;
                }
                Status::GameOver => (),
            },
            Command::Restart => self.restart(),
            Command::Ignore => (),
        }
    }

    /// Replace the entire game state with a fresh one.  Unlike at program
    /// start, the new food is placed at random.
    fn restart(&mut self) {
        tracing::info!("Restarting game");
        let food = random_cell(&mut self.rng);
        self.state = GameState::new(food);
    }

    /// Move the food to a random cell.  Cells occupied by the snake are not
    /// avoided, so the food may occasionally land under the snake.
    fn place_food(&mut self) {
        self.state.food = random_cell(&mut self.rng);
        tracing::debug!(food = ?self.state.food, "Placed food");
    }
}

impl<R> Game<R> {
    /// Return a read-only view of everything needed to draw the game
    pub(crate) fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            snake: &self.state.snake,
            food: self.state.food,
            score: self.state.score,
            status: self.state.status,
        }
    }

    pub(crate) fn status(&self) -> Status {
        self.state.status
    }

    /// Return the heading that the next movement step will use
    pub(crate) fn heading(&self) -> Direction {
        self.state.snake.direction()
    }

    /// Pause the game if it's running
    pub(crate) fn pause(&mut self) {
        if self.state.status == Status::Running {
            tracing::info!("Pausing game");
            self.state.status = Status::Paused;
        }
    }
}

/// Everything that gets thrown away when a game is restarted
#[derive(Clone, Debug, Eq, PartialEq)]
struct GameState {
    snake: Snake,
    food: Position,
    score: u32,
    status: Status,
}

impl GameState {
    fn new(food: Position) -> GameState {
        GameState {
            snake: Snake::new(),
            food,
            score: 0,
            status: Status::Running,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Status {
    Running,
    Paused,
    /// The snake ran into a wall or itself.  Only a restart gets out of this
    /// state.
    GameOver,
}

/// A read-only view of a game at a point in time
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot<'a> {
    pub(crate) snake: &'a Snake,
    pub(crate) food: Position,
    pub(crate) score: u32,
    pub(crate) status: Status,
}

/// Pick a cell anywhere on the board, uniformly at random
fn random_cell<R: Rng>(rng: &mut R) -> Position {
    Position::new(
        rng.random_range(0..consts::GRID_SIZE),
        rng.random_range(0..consts::GRID_SIZE),
    )
}
