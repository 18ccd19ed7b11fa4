use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use crate::errors::BetError;
use crate::ui::colors::DARK_GREEN;
use crate::ui::utils::centered_rect;

pub fn render_help_popup(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" // COMMAND_LEGEND ")
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(DARK_GREEN));

    let area = centered_rect(60, 60, area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([Constraint::Length(16), Constraint::Min(0)])
        .split(area);

    let shortcuts = vec![
        "Keyboard Shortcuts:",
        "",
        "  Tab     - Switch Panes (Leagues/Board/Chat)",
        "  j / k   - Navigate Down / Up (or scroll)",
        "  f       - Fetch picks for all leagues",
        "  Enter   - Fetch the selected league",
        "  i       - Type a chat message",
        "  y       - Copy the selected league's picks",
        "  s       - Model settings",
        "  Esc     - Dismiss popups / stop editing",
        "  q       - Quit",
        "",
        "Chat understands league names: ask 'nfl picks'",
        "for a fresh card, or anything else for a plain answer.",
    ];
    let shortcuts_p = Paragraph::new(shortcuts.join("\n"))
        .style(Style::default().fg(ratatui::style::Color::White));
    f.render_widget(shortcuts_p, chunks[0]);
}

pub fn render_error_popup(f: &mut Frame, area: Rect, error: &BetError) {
    let block = Block::default()
        .title(Span::styled(
            " // SYSTEM_ERROR_OVERRIDE ",
            Style::default()
                .fg(ratatui::style::Color::Red)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(ratatui::style::Color::Red));

    let area = centered_rect(60, 30, area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let error_text = Paragraph::new(error.diagnostics())
        .style(Style::default().fg(ratatui::style::Color::White))
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    let dismiss_text = Paragraph::new("Press [Esc] to Acknowledge")
        .style(Style::default().fg(DARK_GREEN))
        .alignment(Alignment::Center);

    f.render_widget(error_text, layout[0]);
    f.render_widget(dismiss_text, layout[1]);
}
