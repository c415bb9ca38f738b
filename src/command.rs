//! Mapping key presses to game commands
use crate::game::{Direction, Status};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key press that the program responds to
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Toggles pausing
    Space,
    /// Restarts the game after it's over
    Enter,
    /// Exits the program.  This is handled by the application before the
    /// game ever sees it.
    Quit,
}

impl Key {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Key> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Key::Quit),
            (_, KeyCode::Enter) => Some(Key::Enter),
            (m, _) if !normal_modifiers.contains(m) => None,
            (_, KeyCode::Char('q')) => Some(Key::Quit),
            (_, KeyCode::Up) => Some(Key::Up),
            (_, KeyCode::Down) => Some(Key::Down),
            (_, KeyCode::Left) => Some(Key::Left),
            (_, KeyCode::Right) => Some(Key::Right),
            (_, KeyCode::Char(' ')) => Some(Key::Space),
            _ => None,
        }
    }
}

/// A change to apply to the game in response to a key press
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    /// Commit a new heading, to be used by the next movement step
    SetHeading(Direction),
    TogglePause,
    /// Throw away the current game and start a new one
    Restart,
    Ignore,
}

/// Decide what a press of `key` should do, given the snake's committed
/// `heading` and the game's current `status`.
///
/// The pause key works in every status.  Once the game is over, only Enter
/// does anything.  Otherwise, the arrow keys turn the snake, except that
/// turning straight around is ignored; this is checked against `heading`
/// alone, so two quick turns between movement steps can still add up to a
/// reversal.
pub(crate) fn on_key(key: Key, heading: Direction, status: Status) -> Command {
    let wanted = match (status, key) {
        (_, Key::Space) => return Command::TogglePause,
        (Status::GameOver, Key::Enter) => return Command::Restart,
        (Status::GameOver, _) | (_, Key::Enter | Key::Quit) => return Command::Ignore,
        (_, Key::Up) => Direction::North,
        (_, Key::Down) => Direction::South,
        (_, Key::Left) => Direction::West,
        (_, Key::Right) => Direction::East,
    };
    if wanted == heading.reverse() {
        Command::Ignore
    } else {
        Command::SetHeading(wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up.into(), Some(Key::Up))]
    #[case(KeyCode::Down.into(), Some(Key::Down))]
    #[case(KeyCode::Left.into(), Some(Key::Left))]
    #[case(KeyCode::Right.into(), Some(Key::Right))]
    #[case(KeyCode::Char(' ').into(), Some(Key::Space))]
    #[case(KeyCode::Enter.into(), Some(Key::Enter))]
    #[case(KeyCode::Char('q').into(), Some(Key::Quit))]
    #[case(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), Some(Key::Quit))]
    #[case(KeyCode::Char('c').into(), None)]
    #[case(KeyCode::Char('w').into(), None)]
    #[case(KeyCode::Esc.into(), None)]
    #[case(KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT), Some(Key::Up))]
    #[case(KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT), Some(Key::Left))]
    #[case(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::SHIFT), Some(Key::Space))]
    #[case(KeyEvent::new(KeyCode::Up, KeyModifiers::ALT), None)]
    #[case(KeyEvent::new(KeyCode::Down, KeyModifiers::CONTROL), None)]
    #[case(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::ALT), None)]
    fn test_from_key_event(#[case] ev: KeyEvent, #[case] key: Option<Key>) {
        assert_eq!(Key::from_key_event(ev), key);
    }

    #[test]
    fn key_release_is_not_a_press() {
        let ev = KeyEvent::new_with_kind(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(crossterm::event::Event::Key(ev).as_key_press_event(), None);
    }

    #[rstest]
    #[case(Key::Up, Direction::North, Command::SetHeading(Direction::North))]
    #[case(Key::Down, Direction::North, Command::Ignore)]
    #[case(Key::Right, Direction::North, Command::SetHeading(Direction::East))]
    #[case(Key::Left, Direction::North, Command::SetHeading(Direction::West))]
    #[case(Key::Up, Direction::South, Command::Ignore)]
    #[case(Key::Down, Direction::East, Command::SetHeading(Direction::South))]
    #[case(Key::Left, Direction::East, Command::Ignore)]
    #[case(Key::Right, Direction::West, Command::Ignore)]
    #[case(Key::Enter, Direction::North, Command::Ignore)]
    #[case(Key::Quit, Direction::North, Command::Ignore)]
    #[case(Key::Space, Direction::North, Command::TogglePause)]
    fn test_on_key_running(
        #[case] key: Key,
        #[case] heading: Direction,
        #[case] cmd: Command,
    ) {
        assert_eq!(on_key(key, heading, Status::Running), cmd);
    }

    #[rstest]
    #[case(Key::Up, Command::SetHeading(Direction::North))]
    #[case(Key::Down, Command::Ignore)]
    #[case(Key::Right, Command::SetHeading(Direction::East))]
    #[case(Key::Enter, Command::Ignore)]
    #[case(Key::Space, Command::TogglePause)]
    fn test_on_key_paused(#[case] key: Key, #[case] cmd: Command) {
        assert_eq!(on_key(key, Direction::North, Status::Paused), cmd);
    }

    #[rstest]
    #[case(Key::Up, Command::Ignore)]
    #[case(Key::Down, Command::Ignore)]
    #[case(Key::Left, Command::Ignore)]
    #[case(Key::Right, Command::Ignore)]
    #[case(Key::Quit, Command::Ignore)]
    #[case(Key::Enter, Command::Restart)]
    #[case(Key::Space, Command::TogglePause)]
    fn test_on_key_game_over(#[case] key: Key, #[case] cmd: Command) {
        assert_eq!(on_key(key, Direction::East, Status::GameOver), cmd);
    }
}
