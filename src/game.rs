use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::{
    GridSize, INITIAL_SNAKE_LENGTH, LENGTH_PER_SPEED_LEVEL, SPEED_TABLE, tick_interval_for_speed,
};
use crate::error::GameError;
use crate::food::place_food;
use crate::grid::{Cell, Grid};
use crate::input::{Direction, FrameInput};
use crate::snake::Snake;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    /// Start prompt before the first game.
    New,
    Playing,
    Paused,
    GameOver,
}

/// Events that drive lifecycle transitions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LifecycleEvent {
    /// The confirm/pause control was pressed.
    Confirm,
    /// The snake hit a wall or itself.
    Collision,
}

impl GameStatus {
    /// Returns the state reached from `self` on `event`.
    pub fn on_event(self, event: LifecycleEvent) -> Result<Self, GameError> {
        match (self, event) {
            (Self::New | Self::Paused | Self::GameOver, LifecycleEvent::Confirm) => {
                Ok(Self::Playing)
            }
            (Self::Playing, LifecycleEvent::Confirm) => Ok(Self::Paused),
            (Self::Playing, LifecycleEvent::Collision) => Ok(Self::GameOver),
            (from, event) => Err(GameError::InvalidTransition { from, event }),
        }
    }
}

/// Why the last game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub speed_level: usize,
    pub tick_count: u64,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    frame_counter: u32,
    grid: Grid,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh game on the start screen with an entropy-seeded RNG.
    pub fn new(size: GridSize) -> Result<Self, GameError> {
        Self::with_rng(size, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    pub fn new_with_seed(size: GridSize, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(size: GridSize, mut rng: StdRng) -> Result<Self, GameError> {
        let grid = Grid::new(size);
        let snake = initial_snake(size);
        let food = place_food(&grid, &snake, &mut rng)?;

        Ok(Self {
            snake,
            food,
            speed_level: 0,
            tick_count: 0,
            status: GameStatus::New,
            death_reason: None,
            frame_counter: 0,
            grid,
            rng,
        })
    }

    /// Runs one host frame: input first, then the frame counter and, on the
    /// tick boundary, one simulation step.
    pub fn update(&mut self, input: &FrameInput) -> Result<(), GameError> {
        self.handle_input(input)?;

        if self.status != GameStatus::Playing {
            return Ok(());
        }

        self.frame_counter += 1;
        if self.frame_counter >= self.tick_interval() {
            self.frame_counter = 0;
            self.tick()?;
        }

        Ok(())
    }

    fn handle_input(&mut self, input: &FrameInput) -> Result<(), GameError> {
        if self.status == GameStatus::Playing {
            for direction in input.directions() {
                self.steer(direction);
            }
        }

        if input.confirm {
            self.confirm()?;
        }

        Ok(())
    }

    /// Requests a heading change; ignored outside of play.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }

        let turned = self.snake.set_heading(direction);
        if turned {
            debug!(?direction, "heading changed");
        }
        turned
    }

    /// Applies the confirm/pause control. Restarts the game from `GameOver`.
    pub fn confirm(&mut self) -> Result<(), GameError> {
        let next = match self.status.on_event(LifecycleEvent::Confirm) {
            Ok(next) => next,
            Err(error) => {
                debug!(%error, "ignoring lifecycle event");
                return Ok(());
            }
        };

        if self.status == GameStatus::GameOver {
            self.reset()?;
        }

        info!(from = ?self.status, to = ?next, "status changed");
        self.status = next;
        Ok(())
    }

    /// Advances the simulation by one step.
    pub fn tick(&mut self) -> Result<(), GameError> {
        if self.status != GameStatus::Playing {
            return Ok(());
        }

        self.tick_count += 1;
        self.snake.advance();

        let death = if self.snake.head_out_of_bounds(&self.grid) {
            Some(DeathReason::WallCollision)
        } else if self.snake.collides_with_self() {
            Some(DeathReason::SelfCollision)
        } else {
            None
        };

        if let Some(reason) = death {
            self.end_game(reason);
        } else if self.snake.head() == self.food {
            self.snake.grow();
            self.update_speed_level();
            self.food = place_food(&self.grid, &self.snake, &mut self.rng)?;
        }

        self.snake.clear_movement_buffer();
        Ok(())
    }

    fn end_game(&mut self, reason: DeathReason) {
        match self.status.on_event(LifecycleEvent::Collision) {
            Ok(next) => {
                info!(?reason, score = self.score(), "game over");
                self.status = next;
                self.death_reason = Some(reason);
            }
            Err(error) => debug!(%error, "ignoring lifecycle event"),
        }
    }

    fn update_speed_level(&mut self) {
        let last_level = SPEED_TABLE.len() - 1;
        if self.snake.len() % LENGTH_PER_SPEED_LEVEL == 0 && self.speed_level < last_level {
            self.speed_level += 1;
            debug!(
                level = self.speed_level,
                interval = self.tick_interval(),
                "speed increased"
            );
        }
    }

    fn reset(&mut self) -> Result<(), GameError> {
        self.snake = initial_snake(self.grid.size());
        self.speed_level = 0;
        self.tick_count = 0;
        self.frame_counter = 0;
        self.death_reason = None;
        self.food = place_food(&self.grid, &self.snake, &mut self.rng)?;
        Ok(())
    }

    /// Score equals the snake length.
    #[must_use]
    pub fn score(&self) -> usize {
        self.snake.len()
    }

    /// One-based speed level for display.
    #[must_use]
    pub fn speed_display(&self) -> usize {
        self.speed_level + 1
    }

    /// Frames between simulation steps at the current speed level.
    #[must_use]
    pub fn tick_interval(&self) -> u32 {
        tick_interval_for_speed(self.speed_level)
    }

    /// Frames counted towards the next simulation step.
    #[must_use]
    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.grid.size()
    }
}

/// The snake every game starts with: three segments heading down, centred.
#[must_use]
pub fn initial_snake(size: GridSize) -> Snake {
    let head = Cell::new(
        i32::from(size.width / 2) - 1,
        i32::from(size.total_rows() / 2) - 1,
    );
    Snake::new(INITIAL_SNAKE_LENGTH, head, Direction::Down)
}
