use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};
use crate::ui::colors::SOFT_GREEN;

/// Bordered panel with the title embedded in the top edge.
pub fn render_matrix_box(f: &mut Frame, area: Rect, title: &str, border_color: Color) -> Rect {
    use ratatui::symbols::border;
    use ratatui::widgets::{Block, Borders};

    let clean_title = title.trim().trim_matches('/');

    let block = if !clean_title.is_empty() {
        Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(border_color))
            .title(Line::from(vec![
                Span::styled("\u{2500} ", Style::default().fg(border_color)),
                Span::styled(
                    clean_title,
                    Style::default().fg(border_color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" \u{2500}", Style::default().fg(border_color)),
            ]))
    } else {
        Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(border_color))
    };

    let inner = block.inner(area);
    f.render_widget(block, area);
    inner
}

/// Minimal bordered block with an optional title.
pub fn render_composite_block(f: &mut Frame, area: Rect, title: Option<&str>) -> Rect {
    let t = title.unwrap_or("");
    render_matrix_box(f, area, t, SOFT_GREEN)
}
