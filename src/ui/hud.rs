use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::game::GameState;
use crate::theme::Theme;

const HUD_INNER_MARGIN_X: u16 = 1;

/// Renders the status bar: score on the left, speed level on the right.
pub fn render_status_bar(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) {
    let area = inset_horizontal(area, HUD_INNER_MARGIN_X);
    let [score_area, speed_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

    let base = Style::new().fg(theme.text).bg(theme.background);
    frame.render_widget(
        Paragraph::new(status_line("SCORE", state.score(), theme))
            .alignment(Alignment::Left)
            .style(base),
        score_area,
    );
    frame.render_widget(
        Paragraph::new(status_line("SPEED", state.speed_display(), theme))
            .alignment(Alignment::Right)
            .style(base),
        speed_area,
    );
}

fn status_line(label: &'static str, value: usize, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{label}: ")),
        Span::styled(
            value.to_string(),
            Style::new().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ])
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let total_margin = margin.saturating_mul(2);
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(total_margin),
        height: area.height,
    }
}
