use rand::Rng;
use tracing::debug;

use crate::error::GameError;
use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// Picks a cell uniformly at random from the cells the snake does not occupy.
///
/// Occupied cells are marked through the grid's index mapping, so a placement
/// costs one pass over the grid plus one over the snake.
pub fn place_food<R: Rng + ?Sized>(
    grid: &Grid,
    snake: &Snake,
    rng: &mut R,
) -> Result<Cell, GameError> {
    let free = free_cells(grid, snake);

    if free.is_empty() {
        return Err(GameError::ExhaustedGrid { cells: grid.len() });
    }

    let cell = free[rng.gen_range(0..free.len())];
    debug!(x = cell.x, y = cell.y, free = free.len(), "placed food");
    Ok(cell)
}

/// Returns every playable cell not covered by the snake, in grid index order.
#[must_use]
pub fn free_cells(grid: &Grid, snake: &Snake) -> Vec<Cell> {
    let mut occupied = vec![false; grid.len()];
    for index in snake.segments().filter_map(|segment| grid.index_of(segment.cell)) {
        occupied[index] = true;
    }

    grid.all_cells()
        .zip(occupied)
        .filter_map(|(cell, taken)| (!taken).then_some(cell))
        .collect()
}
