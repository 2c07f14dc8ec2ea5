use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// Rows are absolute: row 0 belongs to the status bar when the grid has a
/// top offset.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The static set of playable cells.
///
/// Cells are enumerated column-major (column outer, row inner) and that same
/// order backs [`Grid::index_of`] and [`Grid::cell_at`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    size: GridSize,
}

impl Grid {
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        debug_assert!(size.width > 0 && size.height > 0);
        Self { size }
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the number of playable cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size.total_cells()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn top(&self) -> i32 {
        i32::from(self.size.top_offset)
    }

    fn bottom(&self) -> i32 {
        i32::from(self.size.total_rows())
    }

    /// Returns true when `cell` lies inside the playable rectangle.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.x < i32::from(self.size.width)
            && cell.y >= self.top()
            && cell.y < self.bottom()
    }

    /// Iterates over every playable cell in index order.
    pub fn all_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let (top, bottom) = (self.top(), self.bottom());
        (0..i32::from(self.size.width)).flat_map(move |x| (top..bottom).map(move |y| Cell { x, y }))
    }

    /// Maps a playable cell to its dense index, or `None` outside the playfield.
    #[must_use]
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }

        let column = usize::try_from(cell.x).ok()?;
        let row = usize::try_from(cell.y - self.top()).ok()?;
        Some(column * usize::from(self.size.height) + row)
    }

    /// Inverse of [`Grid::index_of`].
    #[must_use]
    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        if index >= self.len() {
            return None;
        }

        let height = usize::from(self.size.height);
        let x = i32::try_from(index / height).ok()?;
        let row = i32::try_from(index % height).ok()?;
        Some(Cell {
            x,
            y: row + self.top(),
        })
    }
}
