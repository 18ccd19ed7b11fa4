use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Column widths for the dashboard: league sidebar and chat pane. The
/// board takes whatever is left. On narrow terminals the chat pane gives
/// up width first so the board stays readable.
pub fn calculate_dashboard_split(total_width: u16) -> (u16, u16) {
    let sidebar_width = 24;
    let min_board_width = 44;

    let chat_width = ((total_width as u32 * 35 / 100) as u16).clamp(28, 56);

    if sidebar_width + chat_width + min_board_width > total_width {
        (
            sidebar_width.min(total_width / 4),
            (total_width.saturating_sub(sidebar_width) as u32 * 40 / 100) as u16,
        )
    } else {
        (sidebar_width, chat_width)
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
