use crate::command::{on_key, Key};
use crate::consts;
use crate::game::{Game, Status, Theme, View};
use crossterm::event::{poll, read, Event};
use rand::{rngs::ThreadRng, Rng};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// The running program: a game, the styles to draw it with, and the timer
/// that drives it
#[derive(Clone, Debug)]
pub(crate) struct App<R = ThreadRng> {
    game: Game<R>,
    theme: Theme,
    /// When the next movement step is due.  This is only set while the game
    /// is running; pausing or ending the game stops the clock, and resuming
    /// or restarting starts a fresh period.
    next_tick: Option<Instant>,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(game: Game<R>, theme: Theme) -> App<R> {
        App {
            game,
            theme,
            next_tick: None,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        tracing::info!("Quitting");
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| {
            frame.render_widget(View::new(self.game.snapshot(), &self.theme), frame.area());
        })?;
        Ok(())
    }

    /// Wait for either an input event or the next tick, whichever comes
    /// first, and act on it.  When the game isn't running, there are no
    /// ticks, so this just blocks until an event arrives.
    fn process_input(&mut self) -> io::Result<()> {
        match self.time_to_tick(Instant::now()) {
            Some(wait) if !poll(wait)? => self.tick(),
            _ => self.handle_event(read()?),
        }
        Ok(())
    }

    /// Return how long after `now` the next step is due, starting a fresh
    /// period if none is scheduled.  Returns `None` (and stops the clock) if
    /// the game isn't running.
    fn time_to_tick(&mut self, now: Instant) -> Option<Duration> {
        if self.game.status() == Status::Running {
            let deadline = *self
                .next_tick
                .get_or_insert_with(|| now + consts::TICK_PERIOD);
            Some(deadline.saturating_duration_since(now))
        } else {
            self.next_tick = None;
            None
        }
    }

    /// Move the snake.  The next period starts when it's next asked for, so a
    /// stalled loop gets one step rather than a burst of them.
    fn tick(&mut self) {
        self.game.step();
        self.next_tick = None;
    }

    fn handle_event(&mut self, event: Event) {
        if event == Event::FocusLost {
            self.game.pause();
            return;
        }
        let Some(key) = event.as_key_press_event().and_then(Key::from_key_event) else {
            return;
        };
        if key == Key::Quit {
            self.quitting = true;
        } else {
            self.game
                .apply(on_key(key, self.game.heading(), self.game.status()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use ratatui::{
        backend::TestBackend,
        buffer::Buffer,
        layout::{Position, Rect},
        widgets::Widget,
    };

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_app() -> App<ChaCha12Rng> {
        App::new(
            Game::new_with_rng(ChaCha12Rng::seed_from_u64(RNG_SEED)),
            Theme::default(),
        )
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn quit_with_q() {
        let mut app = new_app();
        app.handle_event(press(KeyCode::Char('q')));
        assert!(app.quitting);
    }

    #[test]
    fn quit_with_ctrl_c() {
        let mut app = new_app();
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.quitting);
    }

    #[test]
    fn quit_after_game_over() {
        let mut app = new_app();
        for _ in 0..11 {
            app.game.step();
        }
        assert_eq!(app.game.status(), Status::GameOver);
        app.handle_event(press(KeyCode::Char('q')));
        assert!(app.quitting);
    }

    #[test]
    fn arrows_turn_snake() {
        let mut app = new_app();
        app.handle_event(press(KeyCode::Left));
        assert_eq!(app.game.heading(), Direction::West);
        app.handle_event(press(KeyCode::Right));
        assert_eq!(app.game.heading(), Direction::West);
        app.handle_event(press(KeyCode::Down));
        assert_eq!(app.game.heading(), Direction::South);
        assert!(!app.quitting);
    }

    #[test]
    fn key_release_ignored() {
        let mut app = new_app();
        app.handle_event(Event::Key(KeyEvent::new_with_kind(
            KeyCode::Left,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        )));
        assert_eq!(app.game.heading(), Direction::North);
    }

    #[test]
    fn space_toggles_pause() {
        let mut app = new_app();
        app.handle_event(press(KeyCode::Char(' ')));
        assert_eq!(app.game.status(), Status::Paused);
        app.handle_event(press(KeyCode::Char(' ')));
        assert_eq!(app.game.status(), Status::Running);
    }

    #[test]
    fn focus_lost_pauses() {
        let mut app = new_app();
        app.handle_event(Event::FocusLost);
        assert_eq!(app.game.status(), Status::Paused);
        app.handle_event(Event::FocusGained);
        assert_eq!(app.game.status(), Status::Paused);
        app.handle_event(Event::FocusLost);
        assert_eq!(app.game.status(), Status::Paused);
    }

    #[test]
    fn enter_restarts_after_game_over() {
        let mut app = new_app();
        app.handle_event(press(KeyCode::Enter));
        assert_eq!(app.game.status(), Status::Running);
        for _ in 0..11 {
            app.game.step();
        }
        assert_eq!(app.game.status(), Status::GameOver);
        app.handle_event(press(KeyCode::Char(' ')));
        assert_eq!(app.game.status(), Status::GameOver);
        app.handle_event(press(KeyCode::Enter));
        assert_eq!(app.game.status(), Status::Running);
        assert_eq!(app.game.snapshot().score, 0);
        assert_eq!(app.game.snapshot().snake.len(), 2);
    }

    #[test]
    fn first_tick_is_one_period_away() {
        let mut app = new_app();
        let start = Instant::now();
        assert_eq!(app.time_to_tick(start), Some(consts::TICK_PERIOD));
        assert_eq!(
            app.time_to_tick(start + Duration::from_millis(50)),
            Some(consts::TICK_PERIOD - Duration::from_millis(50))
        );
        assert_eq!(
            app.time_to_tick(start + consts::TICK_PERIOD),
            Some(Duration::ZERO)
        );
    }

    #[test]
    fn one_step_after_stall() {
        let mut app = new_app();
        let start = Instant::now();
        assert_eq!(app.time_to_tick(start), Some(consts::TICK_PERIOD));
        let late = start + Duration::from_secs(1);
        assert_eq!(app.time_to_tick(late), Some(Duration::ZERO));
        app.tick();
        assert_eq!(app.game.snapshot().snake.head(), Position::new(10, 9));
        assert_eq!(app.time_to_tick(late), Some(consts::TICK_PERIOD));
        assert_eq!(
            app.time_to_tick(late + Duration::from_millis(100)),
            Some(Duration::from_millis(50))
        );
    }

    #[test]
    fn pausing_stops_clock() {
        let mut app = new_app();
        let start = Instant::now();
        assert_eq!(app.time_to_tick(start), Some(consts::TICK_PERIOD));
        app.handle_event(press(KeyCode::Char(' ')));
        let later = start + Duration::from_secs(5);
        assert_eq!(app.time_to_tick(later), None);
        assert_eq!(app.next_tick, None);
        app.handle_event(press(KeyCode::Char(' ')));
        assert_eq!(app.time_to_tick(later), Some(consts::TICK_PERIOD));
    }

    #[test]
    fn no_ticks_after_game_over() {
        let mut app = new_app();
        let start = Instant::now();
        for _ in 0..11 {
            assert!(app.time_to_tick(start).is_some());
            app.tick();
        }
        assert_eq!(app.game.status(), Status::GameOver);
        assert_eq!(app.time_to_tick(start), None);
        app.handle_event(press(KeyCode::Enter));
        assert_eq!(app.time_to_tick(start), Some(consts::TICK_PERIOD));
    }

    #[test]
    fn draw_renders_view() {
        let app = new_app();
        let mut terminal =
            Terminal::new(TestBackend::new(42, 24)).expect("test terminal should be creatable");
        app.draw(&mut terminal).expect("drawing should succeed");
        let area = Rect::new(0, 0, 42, 24);
        let mut expected = Buffer::empty(area);
        View::new(app.game.snapshot(), &app.theme).render(area, &mut expected);
        pretty_assertions::assert_eq!(terminal.backend().buffer(), &expected);
    }
}
