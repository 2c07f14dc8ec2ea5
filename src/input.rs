use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for the snake.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the `(dx, dy)` cell offset of one step; rows grow downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Returns true when both directions lie on the same axis.
    #[must_use]
    pub fn is_parallel_to(self, other: Self) -> bool {
        self.is_horizontal() == other.is_horizontal()
    }
}

/// Logical controls reported by the frontend.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Confirm,
    Quit,
}

/// Edge-triggered controls pressed since the previous frame.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub confirm: bool,
}

impl FrameInput {
    /// A frame with only `direction` pressed.
    #[must_use]
    pub fn direction(direction: Direction) -> Self {
        let mut input = Self::default();
        input.press(GameInput::Direction(direction));
        input
    }

    /// A frame with only the confirm control pressed.
    #[must_use]
    pub fn confirm() -> Self {
        Self {
            confirm: true,
            ..Self::default()
        }
    }

    /// Marks `input` as pressed this frame. `Quit` is not part of the frame feed.
    pub fn press(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(Direction::Up) => self.up = true,
            GameInput::Direction(Direction::Down) => self.down = true,
            GameInput::Direction(Direction::Left) => self.left = true,
            GameInput::Direction(Direction::Right) => self.right = true,
            GameInput::Confirm => self.confirm = true,
            GameInput::Quit => {}
        }
    }

    /// Pressed directions in the fixed order up, down, left, right.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        [
            (self.up, Direction::Up),
            (self.down, Direction::Down),
            (self.left, Direction::Left),
            (self.right, Direction::Right),
        ]
        .into_iter()
        .filter_map(|(pressed, direction)| pressed.then_some(direction))
    }
}

/// Result of draining the terminal event queue for one frame.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PollOutcome {
    Frame(FrameInput),
    Quit,
}

/// Collects crossterm key presses into per-frame input.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Drains every pending terminal event without blocking.
    pub fn poll_frame(&mut self) -> io::Result<PollOutcome> {
        let mut frame = FrameInput::default();

        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };

            match map_key(key) {
                Some(GameInput::Quit) => return Ok(PollOutcome::Quit),
                Some(input) => frame.press(input),
                None => {}
            }
        }

        Ok(PollOutcome::Frame(frame))
    }
}

/// Maps a key event to a logical control. Only presses count as edges.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j') => {
            Some(GameInput::Direction(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h') => {
            Some(GameInput::Direction(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l') => {
            Some(GameInput::Direction(Direction::Right))
        }
        KeyCode::Enter | KeyCode::Char(' ' | 'p' | 'P') => Some(GameInput::Confirm),
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(GameInput::Quit),
        _ => None,
    }
}
