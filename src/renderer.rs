use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::config::{CELL_WIDTH, GridSize};
use crate::game::{GameState, GameStatus};
use crate::grid::{Cell, Grid};
use crate::theme::Theme;
use crate::ui::hud::render_status_bar;
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme) {
    let area = frame.area();
    frame.render_widget(
        Block::new().style(Style::new().bg(theme.background)),
        area,
    );

    let (width, height) = board_dimensions(state.bounds());
    if area.width < width || area.height < height {
        render_too_small(frame, area, theme, width, height);
        return;
    }

    let board = centered(area, width, height);
    let [status_area, field_area] = Layout::vertical([
        Constraint::Length(state.bounds().top_offset),
        Constraint::Min(0),
    ])
    .areas(board);

    render_status_bar(frame, status_area, state, theme);

    let block = Block::bordered().border_style(Style::new().fg(theme.border).bg(theme.background));
    let inner = block.inner(field_area);
    frame.render_widget(block, field_area);

    render_grid(frame, inner, state.grid(), theme);
    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);

    match state.status {
        GameStatus::New => render_start_menu(frame, field_area, theme),
        GameStatus::Paused => render_pause_menu(frame, field_area, theme),
        GameStatus::GameOver => {
            render_game_over_menu(frame, field_area, state.score(), state.death_reason, theme);
        }
        GameStatus::Playing => {}
    }
}

/// Terminal size needed for the status bar plus the bordered playfield.
#[must_use]
pub fn board_dimensions(size: GridSize) -> (u16, u16) {
    let cell_width = u16::try_from(CELL_WIDTH).unwrap_or(u16::MAX);
    (
        size.width.saturating_mul(cell_width).saturating_add(2),
        size.total_rows().saturating_add(2),
    )
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, theme: &Theme, width: u16, height: u16) {
    let lines = vec![
        Line::from("TERMINAL TOO SMALL"),
        Line::from(format!(
            "need {width}x{height}, have {}x{}",
            area.width, area.height
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.text).add_modifier(Modifier::BOLD)),
        area,
    );
}

fn render_grid(frame: &mut Frame<'_>, inner: Rect, grid: &Grid, theme: &Theme) {
    let style = Style::new().fg(theme.grid).bg(theme.background);
    let buffer = frame.buffer_mut();

    for cell in grid.all_cells() {
        if let Some((x, y)) = cell_to_terminal(inner, grid, cell) {
            buffer.set_string(x, y, &theme.empty_glyph, style);
        }
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some((x, y)) = cell_to_terminal(inner, state.grid(), state.food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(
        x,
        y,
        &theme.food_glyph,
        Style::new().fg(theme.food).bg(theme.background),
    );
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let buffer = frame.buffer_mut();

    // Tail first so the head wins on the frame a self-collision is detected.
    for (index, segment) in state.snake.segments().enumerate().rev() {
        let Some((x, y)) = cell_to_terminal(inner, state.grid(), segment.cell) else {
            continue;
        };

        let (glyph, style) = if index == 0 {
            (
                theme.head_glyphs.for_direction(segment.heading),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                theme.body_glyphs.for_direction(segment.heading),
                Style::new().fg(theme.snake_body),
            )
        };

        buffer.set_string(x, y, glyph, style.bg(theme.background));
    }
}

/// Maps a playable cell to the terminal position of its left column.
fn cell_to_terminal(inner: Rect, grid: &Grid, cell: Cell) -> Option<(u16, u16)> {
    if !grid.contains(cell) {
        return None;
    }

    let column = u16::try_from(cell.x).ok()?;
    let row = u16::try_from(cell.y - i32::from(grid.size().top_offset)).ok()?;
    let cell_width = u16::try_from(CELL_WIDTH).ok()?;

    let x = inner.x.saturating_add(column.saturating_mul(cell_width));
    let y = inner.y.saturating_add(row);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
