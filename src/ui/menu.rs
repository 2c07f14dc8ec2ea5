use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::game::DeathReason;
use crate::theme::Theme;

/// Draws the start screen as a centered popup.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    render_screen(
        frame,
        area,
        theme,
        "GO SNAKE",
        vec![
            Line::from("PRESS SPACE TO START"),
            Line::from(""),
            Line::from("Arrows/WASD move · Q quits").style(Style::new().fg(theme.muted)),
        ],
    );
}

/// Draws the pause screen over the frozen board.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    render_screen(
        frame,
        area,
        theme,
        "PAUSE",
        vec![Line::from("PRESS SPACE TO RESUME")],
    );
}

/// Draws the game-over screen with the final score and its cause.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: usize,
    death_reason: Option<DeathReason>,
    theme: &Theme,
) {
    render_screen(
        frame,
        area,
        theme,
        "GAME OVER",
        vec![
            Line::from(format!("SCORE: {score}")),
            Line::from(match death_reason {
                Some(DeathReason::WallCollision) => "You hit the wall",
                Some(DeathReason::SelfCollision) => "You bit yourself",
                None => "",
            })
            .style(Style::new().fg(theme.muted)),
            Line::from(""),
            Line::from("PRESS SPACE TO PLAY AGAIN"),
        ],
    );
}

fn render_screen(
    frame: &mut Frame<'_>,
    area: Rect,
    theme: &Theme,
    title: &'static str,
    body: Vec<Line<'_>>,
) {
    let popup = centered_popup(area, 70, 50);
    frame.render_widget(Clear, popup);

    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border))
        .style(Style::new().bg(theme.background));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [title_row, body_row] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(inner);

    frame.render_widget(
        Paragraph::new(vec![Line::from(""), Line::from(title)])
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.text).add_modifier(Modifier::BOLD)),
        title_row,
    );
    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.text)),
        body_row,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
