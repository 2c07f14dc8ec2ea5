use std::time::Duration;

/// Logical playfield dimensions passed through the game as a named type.
///
/// `top_offset` is the number of rows above the playfield reserved for the
/// status bar. Playable rows are `top_offset..top_offset + height`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
    pub top_offset: u16,
}

impl GridSize {
    /// Returns the total number of playable cells.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the row count including the status bar offset.
    #[must_use]
    pub fn total_rows(self) -> u16 {
        self.height + self.top_offset
    }
}

/// Number of playable columns.
pub const GRID_WIDTH: u16 = 32;

/// Number of playable rows below the status bar.
pub const GRID_HEIGHT: u16 = 25;

/// Rows reserved above the playfield for the status bar.
pub const STATUS_BAR_ROWS: u16 = 1;

/// Default playfield used by the game.
pub const DEFAULT_GRID: GridSize = GridSize {
    width: GRID_WIDTH,
    height: GRID_HEIGHT,
    top_offset: STATUS_BAR_ROWS,
};

/// Segment count of a freshly spawned snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Frames between simulation ticks, indexed by speed level.
pub const SPEED_TABLE: [u32; 10] = [20, 15, 12, 10, 6, 5, 4, 3, 2, 1];

/// Snake length multiple at which the speed level goes up.
pub const LENGTH_PER_SPEED_LEVEL: usize = 10;

/// Host frame cadence (60 frames per second).
pub const FRAME_DURATION: Duration = Duration::from_micros(16_667);

/// Terminal columns used to draw one grid cell, so cells look square.
pub const CELL_WIDTH: usize = 2;

/// Returns the tick interval in frames for `speed_level`, clamped to the table.
#[must_use]
pub fn tick_interval_for_speed(speed_level: usize) -> u32 {
    SPEED_TABLE[speed_level.min(SPEED_TABLE.len() - 1)]
}
