use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use crate::app::{App, InputMode, Pane};
use crate::chat::Role;
use crate::ui::colors::{DARK_GREEN, MATRIX_GREEN, TEXT_DIM, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::common::render_matrix_box;

pub fn render_chat_pane(f: &mut Frame, app: &mut App, area: Rect) {
    let is_active = app.active_pane == Pane::Chat || app.input_mode == InputMode::Editing;
    let border_color = if is_active { MATRIX_GREEN } else { DARK_GREEN };

    let inner = render_matrix_box(f, area, "ORACLE_UPLINK", border_color);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Transcript
            Constraint::Length(1), // Input line
        ])
        .split(inner);

    let mut lines: Vec<Line> = Vec::new();
    if app.chat_messages.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " Ask about any league, or anything at all.",
            Style::default().fg(TEXT_SECONDARY),
        )));
        lines.push(Line::from(vec![
            Span::styled(" Try ", Style::default().fg(TEXT_SECONDARY)),
            Span::styled(
                "nba picks",
                Style::default().fg(MATRIX_GREEN).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " for a fresh card.",
                Style::default().fg(TEXT_SECONDARY),
            ),
        ]));
    } else {
        for msg in &app.chat_messages {
            let (who, who_style) = match msg.role {
                Role::User => (
                    "you >",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Role::Assistant => (
                    "oracle >",
                    Style::default().fg(MATRIX_GREEN).add_modifier(Modifier::BOLD),
                ),
            };
            lines.push(Line::from(Span::styled(who, who_style)));
            for text_line in msg.content.lines() {
                lines.push(Line::from(Span::styled(
                    text_line.to_string(),
                    Style::default().fg(TEXT_PRIMARY),
                )));
            }
            lines.push(Line::from(""));
        }
    }

    // Clamp the scroll offset to the bottom of the transcript. New replies
    // set the offset to u16::MAX so they land here and stick to the end.
    let max_scroll = estimated_rows(&lines, chunks[0].width).saturating_sub(chunks[0].height);
    if app.chat_scroll > max_scroll {
        app.chat_scroll = max_scroll;
    }

    let transcript = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.chat_scroll, 0));
    f.render_widget(transcript, chunks[0]);

    render_input_line(f, app, chunks[1]);
}

fn render_input_line(f: &mut Frame, app: &mut App, area: Rect) {
    let input_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let prompt_style = if app.input_mode == InputMode::Editing {
        Style::default().fg(MATRIX_GREEN).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_DIM)
    };
    f.render_widget(Paragraph::new("> ").style(prompt_style), input_chunks[0]);

    let field_area = input_chunks[1];
    if app.chat_input.value().is_empty() && app.input_mode == InputMode::Normal {
        let placeholder = Paragraph::new("press i to ask")
            .style(Style::default().fg(TEXT_DIM).add_modifier(Modifier::ITALIC));
        f.render_widget(placeholder, field_area);
        return;
    }

    let scroll = app.chat_input.visual_scroll(field_area.width.max(1) as usize);
    let field = Paragraph::new(app.chat_input.value())
        .style(Style::default().fg(TEXT_PRIMARY))
        .scroll((0, scroll as u16));
    f.render_widget(field, field_area);

    if app.input_mode == InputMode::Editing {
        f.set_cursor_position((
            field_area.x + (app.chat_input.visual_cursor().max(scroll) - scroll) as u16,
            field_area.y,
        ));
    }
}

/// Rows the transcript occupies once wrapped, counting chars as cells.
/// Close enough for clamping: chat text is plain prose.
fn estimated_rows(lines: &[Line], width: u16) -> u16 {
    let width = width.max(1) as usize;
    lines
        .iter()
        .map(|line| {
            let len: usize = line.spans.iter().map(|s| s.content.chars().count()).sum();
            ((len.max(1) - 1) / width + 1) as u16
        })
        .sum()
}
