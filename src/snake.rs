use std::collections::VecDeque;

use crate::grid::{Cell, Grid};
use crate::input::Direction;

/// One body element with its own position and heading.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Segment {
    pub cell: Cell,
    pub heading: Direction,
}

/// Mutable snake state and the one-turn-per-tick movement buffer.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Segment>,
    heading: Direction,
    turned_this_tick: bool,
    vacated: Option<Segment>,
}

impl Snake {
    /// Creates a straight snake of `length` segments with its head at `head`,
    /// trailing away opposite to `heading`.
    #[must_use]
    pub fn new(length: usize, head: Cell, heading: Direction) -> Self {
        let length = length.max(1);
        let mut body = VecDeque::with_capacity(length);
        let mut cell = head;

        for _ in 0..length {
            body.push_back(Segment { cell, heading });
            cell = cell.step(heading.opposite());
        }

        Self {
            body,
            heading,
            turned_this_tick: false,
            vacated: None,
        }
    }

    /// Creates a snake from explicit segments (front is head).
    ///
    /// The snake heading is taken from the head segment.
    #[must_use]
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        assert!(
            !segments.is_empty(),
            "snake needs at least one segment to have a head"
        );
        let heading = segments[0].heading;

        Self {
            body: VecDeque::from(segments),
            heading,
            turned_this_tick: false,
            vacated: None,
        }
    }

    /// Moves one cell: every segment takes its predecessor's previous cell and
    /// heading, and the head steps along the current heading.
    pub fn advance(&mut self) {
        let head = self.head_segment();
        let next = Segment {
            cell: head.cell.step(self.heading),
            heading: self.heading,
        };

        self.body.push_front(next);
        self.vacated = self.body.pop_back();
    }

    /// Appends a segment behind the tail.
    ///
    /// After an advance this is the cell the tail just left, so the body keeps
    /// following its own path. A snake that has not moved yet grows one cell
    /// opposite to the tail's heading.
    pub fn grow(&mut self) {
        let segment = self.vacated.take().unwrap_or_else(|| {
            let tail = self.tail_segment();
            Segment {
                cell: tail.cell.step(tail.heading.opposite()),
                heading: tail.heading,
            }
        });
        self.body.push_back(segment);
    }

    /// Requests a turn. Returns whether the heading changed.
    ///
    /// Turns along the current axis are ignored, and only one turn is accepted
    /// until [`Snake::clear_movement_buffer`] runs at the next tick.
    pub fn set_heading(&mut self, direction: Direction) -> bool {
        if self.turned_this_tick || direction.is_parallel_to(self.heading) {
            return false;
        }

        self.heading = direction;
        if let Some(head) = self.body.front_mut() {
            head.heading = direction;
        }
        self.turned_this_tick = true;
        true
    }

    /// Re-arms the movement buffer; called once per simulation tick.
    pub fn clear_movement_buffer(&mut self) {
        self.turned_this_tick = false;
    }

    #[must_use]
    pub fn has_turned_this_tick(&self) -> bool {
        self.turned_this_tick
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn collides_with_self(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| segment.cell == head)
    }

    /// Returns true once the head has left the playable rectangle.
    #[must_use]
    pub fn head_out_of_bounds(&self, grid: &Grid) -> bool {
        !grid.contains(self.head())
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.iter().any(|segment| segment.cell == cell)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        self.head_segment().cell
    }

    fn head_segment(&self) -> Segment {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    fn tail_segment(&self) -> Segment {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current travel direction.
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &Segment> + ExactSizeIterator {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::DEFAULT_GRID;
    use crate::grid::{Cell, Grid};
    use crate::input::Direction;

    use super::{Segment, Snake};

    fn cells(snake: &Snake) -> Vec<Cell> {
        snake.segments().map(|segment| segment.cell).collect()
    }

    #[test]
    fn new_snake_trails_opposite_to_heading() {
        let snake = Snake::new(3, Cell::new(15, 12), Direction::Down);

        assert_eq!(
            cells(&snake),
            vec![Cell::new(15, 12), Cell::new(15, 11), Cell::new(15, 10)]
        );
        assert!(snake.segments().all(|s| s.heading == Direction::Down));
    }

    #[test]
    fn advance_shifts_segments_and_preserves_length() {
        let mut snake = Snake::new(3, Cell::new(5, 5), Direction::Right);

        snake.advance();

        assert_eq!(
            cells(&snake),
            vec![Cell::new(6, 5), Cell::new(5, 5), Cell::new(4, 5)]
        );
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn advance_propagates_headings_towards_tail() {
        let mut snake = Snake::new(3, Cell::new(5, 5), Direction::Right);

        assert!(snake.set_heading(Direction::Up));
        snake.advance();
        snake.advance();

        let headings: Vec<Direction> = snake.segments().map(|s| s.heading).collect();
        assert_eq!(
            headings,
            vec![Direction::Up, Direction::Up, Direction::Up]
        );
        assert_eq!(
            cells(&snake),
            vec![Cell::new(5, 3), Cell::new(5, 4), Cell::new(5, 5)]
        );
    }

    #[test]
    fn grow_appends_behind_tail_without_moving_others() {
        let mut snake = Snake::new(2, Cell::new(5, 5), Direction::Down);
        let before = cells(&snake);

        snake.grow();

        assert_eq!(snake.len(), 3);
        assert_eq!(&cells(&snake)[..2], before.as_slice());
        let tail = snake.segments().last().copied();
        assert_eq!(
            tail,
            Some(Segment {
                cell: Cell::new(5, 3),
                heading: Direction::Down,
            })
        );
    }

    #[test]
    fn grow_follows_tail_heading_not_head_heading() {
        let mut snake = Snake::from_segments(vec![
            Segment {
                cell: Cell::new(6, 5),
                heading: Direction::Right,
            },
            Segment {
                cell: Cell::new(6, 6),
                heading: Direction::Up,
            },
        ]);

        snake.grow();

        assert_eq!(snake.segments().last().map(|s| s.cell), Some(Cell::new(6, 7)));
    }

    #[test]
    fn grow_after_turn_refills_vacated_cell() {
        let mut snake = Snake::new(3, Cell::new(0, 10), Direction::Down);

        assert!(snake.set_heading(Direction::Right));
        snake.advance();
        snake.clear_movement_buffer();
        snake.advance();
        snake.grow();

        assert_eq!(
            cells(&snake),
            vec![
                Cell::new(2, 10),
                Cell::new(1, 10),
                Cell::new(0, 10),
                Cell::new(0, 9),
            ]
        );
    }

    #[test]
    fn grow_only_reuses_vacated_cell_once() {
        let mut snake = Snake::new(2, Cell::new(5, 5), Direction::Right);

        snake.advance();
        snake.grow();
        snake.grow();

        assert_eq!(
            cells(&snake),
            vec![
                Cell::new(6, 5),
                Cell::new(5, 5),
                Cell::new(4, 5),
                Cell::new(3, 5),
            ]
        );
    }

    #[test]
    fn parallel_heading_is_rejected() {
        let mut snake = Snake::new(3, Cell::new(5, 5), Direction::Up);

        assert!(!snake.set_heading(Direction::Down));
        assert!(!snake.set_heading(Direction::Up));
        snake.advance();

        assert_eq!(snake.head(), Cell::new(5, 4));
        assert!(!snake.has_turned_this_tick());
    }

    #[test]
    fn only_one_turn_per_tick() {
        let mut snake = Snake::new(3, Cell::new(5, 5), Direction::Up);

        assert!(snake.set_heading(Direction::Left));
        // Down is perpendicular to Left but the buffer is latched.
        assert!(!snake.set_heading(Direction::Down));
        assert_eq!(snake.heading(), Direction::Left);

        snake.advance();
        snake.clear_movement_buffer();
        assert!(snake.set_heading(Direction::Down));
    }

    #[test]
    fn self_collision_detected() {
        let mut snake = Snake::new(5, Cell::new(5, 5), Direction::Right);
        // Curl into the body: up, left, down.
        snake.set_heading(Direction::Up);
        snake.advance();
        snake.clear_movement_buffer();
        snake.set_heading(Direction::Left);
        snake.advance();
        snake.clear_movement_buffer();
        assert!(!snake.collides_with_self());
        snake.set_heading(Direction::Down);
        snake.advance();

        assert!(snake.collides_with_self());
    }

    #[test]
    fn head_out_of_bounds_respects_status_bar_offset() {
        let grid = Grid::new(DEFAULT_GRID);

        let mut snake = Snake::new(1, Cell::new(3, 1), Direction::Up);
        assert!(!snake.head_out_of_bounds(&grid));
        snake.advance();
        assert!(snake.head_out_of_bounds(&grid));

        let mut snake = Snake::new(1, Cell::new(31, 4), Direction::Right);
        snake.advance();
        assert!(snake.head_out_of_bounds(&grid));
    }
}
