use grid_snake::config::DEFAULT_GRID;
use grid_snake::game::{DeathReason, GameState, GameStatus};
use grid_snake::grid::Cell;
use grid_snake::input::{Direction, FrameInput};
use grid_snake::snake::Snake;

fn playing_state(seed: u64) -> GameState {
    let mut state = GameState::new_with_seed(DEFAULT_GRID, seed).expect("grid has room");
    state.status = GameStatus::Playing;
    state
}

fn idle_frames(state: &mut GameState, frames: usize) {
    for _ in 0..frames {
        state.update(&FrameInput::default()).expect("update");
    }
}

fn cells(state: &GameState) -> Vec<Cell> {
    state.snake.segments().map(|segment| segment.cell).collect()
}

#[test]
fn first_tick_after_twenty_idle_frames() {
    let mut state = playing_state(42);
    assert_eq!(
        cells(&state),
        vec![Cell::new(15, 12), Cell::new(15, 11), Cell::new(15, 10)]
    );
    assert_eq!(state.tick_interval(), 20);

    idle_frames(&mut state, 19);
    assert_eq!(state.snake.head(), Cell::new(15, 12));
    assert_eq!(state.frame_counter(), 19);

    idle_frames(&mut state, 1);
    assert_eq!(state.snake.head(), Cell::new(15, 13));
    assert_eq!(state.snake.segments().nth(1).map(|s| s.cell), Some(Cell::new(15, 12)));
    assert_eq!(state.frame_counter(), 0);
    assert_eq!(state.tick_count, 1);
    assert!(!state.snake.has_turned_this_tick());
}

#[test]
fn one_heading_change_per_tick() {
    let mut state = playing_state(7);

    state.update(&FrameInput::direction(Direction::Left)).expect("update");
    assert_eq!(state.snake.heading(), Direction::Left);
    assert!(state.snake.has_turned_this_tick());

    // Perpendicular again, but the buffer is already latched.
    state.update(&FrameInput::direction(Direction::Up)).expect("update");
    // Reversal of the new heading.
    state.update(&FrameInput::direction(Direction::Right)).expect("update");
    assert_eq!(state.snake.heading(), Direction::Left);

    idle_frames(&mut state, 17);
    assert_eq!(state.snake.head(), Cell::new(14, 12));
    assert!(!state.snake.has_turned_this_tick());

    state.update(&FrameInput::direction(Direction::Down)).expect("update");
    assert_eq!(state.snake.heading(), Direction::Down);
}

#[test]
fn simultaneous_presses_cannot_reverse() {
    let mut state = playing_state(8);
    let mut input = FrameInput::direction(Direction::Left);
    input.right = true;
    input.up = true;

    state.update(&input).expect("update");

    // Up is parallel to the current downward travel; Left wins over Right.
    assert_eq!(state.snake.heading(), Direction::Left);
}

#[test]
fn eating_tenth_segment_raises_speed_level() {
    let mut state = playing_state(3);
    state.snake = Snake::new(9, Cell::new(15, 12), Direction::Down);
    state.food = Cell::new(15, 13);

    idle_frames(&mut state, 20);

    assert_eq!(state.snake.len(), 10);
    assert_eq!(state.score(), 10);
    assert_eq!(state.speed_level, 1);
    assert_eq!(state.speed_display(), 2);
    assert_eq!(state.tick_interval(), 15);
    assert_ne!(state.food, Cell::new(15, 13));
    assert!(!state.snake.occupies(state.food));

    idle_frames(&mut state, 15);
    assert_eq!(state.snake.head(), Cell::new(15, 14));
}

#[test]
fn leaving_the_playfield_ends_the_game_on_that_tick() {
    let cases = [
        (Cell::new(0, 10), Direction::Left),
        (Cell::new(31, 10), Direction::Right),
        (Cell::new(10, 25), Direction::Down),
        (Cell::new(10, 1), Direction::Up),
    ];

    for (head, heading) in cases {
        let mut state = playing_state(11);
        state.snake = Snake::new(3, head, heading);
        state.food = Cell::new(20, 20);

        state.tick().expect("tick");

        assert_eq!(state.status, GameStatus::GameOver, "{heading:?} from {head:?}");
        assert_eq!(state.death_reason, Some(DeathReason::WallCollision));
        assert_eq!(state.tick_count, 1);
    }
}

#[test]
fn game_over_ignores_steering_and_time() {
    let mut state = playing_state(12);
    state.snake = Snake::new(3, Cell::new(0, 10), Direction::Left);
    state.tick().expect("tick");
    let frozen = cells(&state);

    for _ in 0..50 {
        state.update(&FrameInput::direction(Direction::Up)).expect("update");
    }

    assert_eq!(cells(&state), frozen);
    assert_eq!(state.status, GameStatus::GameOver);
}

#[test]
fn confirm_after_game_over_restarts() {
    let mut state = playing_state(13);
    state.speed_level = 4;
    state.snake = Snake::new(12, Cell::new(31, 20), Direction::Right);
    state.tick().expect("tick");
    assert_eq!(state.status, GameStatus::GameOver);

    state.update(&FrameInput::confirm()).expect("update");

    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(
        cells(&state),
        vec![Cell::new(15, 12), Cell::new(15, 11), Cell::new(15, 10)]
    );
    assert_eq!(state.snake.heading(), Direction::Down);
    assert_eq!(state.score(), 3);
    assert_eq!(state.speed_level, 0);
    assert_eq!(state.death_reason, None);
    assert!(!state.snake.occupies(state.food));
}

#[test]
fn full_lifecycle_from_start_screen() {
    let mut state = GameState::new_with_seed(DEFAULT_GRID, 21).expect("grid has room");
    assert_eq!(state.status, GameStatus::New);

    state.update(&FrameInput::confirm()).expect("update");
    assert_eq!(state.status, GameStatus::Playing);

    state.update(&FrameInput::confirm()).expect("update");
    assert_eq!(state.status, GameStatus::Paused);

    state.update(&FrameInput::confirm()).expect("update");
    assert_eq!(state.status, GameStatus::Playing);

    // Head starts at row 12 heading down; row 26 is past the bottom edge.
    for _ in 0..(14 * 20) {
        state.update(&FrameInput::default()).expect("update");
        if state.status == GameStatus::GameOver {
            break;
        }
    }

    assert_eq!(state.status, GameStatus::GameOver);
}

#[test]
fn growth_with_tail_on_wall_corner_stays_on_path() {
    let mut state = playing_state(31);
    state.snake = Snake::new(3, Cell::new(0, 10), Direction::Down);
    state.food = Cell::new(2, 10);

    assert!(state.steer(Direction::Right));
    state.tick().expect("tick");
    state.tick().expect("tick");

    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(
        cells(&state),
        vec![
            Cell::new(2, 10),
            Cell::new(1, 10),
            Cell::new(0, 10),
            Cell::new(0, 9),
        ]
    );
    assert!(state.snake.segments().all(|s| state.grid().contains(s.cell)));
}

#[test]
fn growth_during_u_turn_keeps_segments_distinct() {
    let mut state = playing_state(32);
    state.snake = Snake::new(6, Cell::new(5, 10), Direction::Down);
    state.food = Cell::new(20, 20);

    for request in [
        Some(Direction::Right),
        Some(Direction::Down),
        Some(Direction::Left),
        None,
    ] {
        if let Some(direction) = request {
            assert!(state.steer(direction));
        }
        state.tick().expect("tick");
    }

    state.food = Cell::new(4, 10);
    assert!(state.steer(Direction::Up));
    state.tick().expect("tick");

    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(
        cells(&state),
        vec![
            Cell::new(4, 10),
            Cell::new(4, 11),
            Cell::new(5, 11),
            Cell::new(6, 11),
            Cell::new(6, 10),
            Cell::new(5, 10),
            Cell::new(5, 9),
        ]
    );
    let distinct: std::collections::HashSet<Cell> = cells(&state).into_iter().collect();
    assert_eq!(distinct.len(), state.snake.len());
}
