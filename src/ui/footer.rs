use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use crate::app::{App, CurrentScreen, InputMode, Pane};
use crate::ui::colors::DARK_GREEN;

pub fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let key_style = Style::default()
        .fg(ratatui::style::Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(ratatui::style::Color::White);

    let mut spans = vec![
        Span::styled(" q ", key_style),
        Span::styled("Quit  ", label_style),
    ];

    if app.input_mode == InputMode::Editing {
        spans.push(Span::styled(" Enter ", key_style));
        spans.push(Span::styled("Send  ", label_style));
        spans.push(Span::styled(" Esc ", key_style));
        spans.push(Span::styled("Stop Editing", label_style));
    } else {
        spans.push(Span::styled(" j/k ", key_style));
        spans.push(Span::styled("Move  ", label_style));

        match app.current_screen {
            CurrentScreen::Dashboard => {
                spans.push(Span::styled(" Tab ", key_style));
                spans.push(Span::styled("Panes  ", label_style));
                spans.push(Span::styled(" f ", key_style));
                spans.push(Span::styled("Fetch All  ", label_style));
                if app.active_pane == Pane::Leagues {
                    spans.push(Span::styled(" Enter ", key_style));
                    spans.push(Span::styled("Fetch League  ", label_style));
                }
                spans.push(Span::styled(" i ", key_style));
                spans.push(Span::styled("Chat  ", label_style));
                spans.push(Span::styled(" y ", key_style));
                spans.push(Span::styled("Copy Picks  ", label_style));
                spans.push(Span::styled(" s ", key_style));
                spans.push(Span::styled("Config  ", label_style));
                spans.push(Span::styled(" ? ", key_style));
                spans.push(Span::styled("Help", label_style));
            }
            CurrentScreen::Settings => {
                spans.push(Span::styled(" Enter ", key_style));
                spans.push(Span::styled("Apply Model  ", label_style));
                spans.push(Span::styled(" Esc ", key_style));
                spans.push(Span::styled("Back", label_style));
            }
        }
    }

    let left_p = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);
    f.render_widget(left_p, area);

    // Transient status (Bottom Right)
    if let Some(status) = &app.status_message {
        let status_spans = vec![
            Span::styled(" :: ", Style::default().fg(DARK_GREEN)),
            Span::styled(
                status.as_str(),
                Style::default()
                    .fg(ratatui::style::Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ", Style::default()),
        ];

        let right_p = Paragraph::new(Line::from(status_spans)).alignment(Alignment::Right);
        f.render_widget(right_p, area);
    }
}
