use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use chrono::Utc;
use chrono_tz::Tz;
use std::str::FromStr;
use crate::app::{App, CurrentScreen};
use crate::ui::colors::{BRIGHT_GREEN, DARK_GREEN, MATRIX_GREEN};

pub fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(52), // Tabs
            Constraint::Min(0),     // Clock + model
        ])
        .split(area);

    let current_tab = match app.current_screen {
        CurrentScreen::Dashboard => 0,
        CurrentScreen::Settings => 1,
    };

    let style_active = Style::default()
        .bg(MATRIX_GREEN)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD);
    let separator = Span::styled(" / ", Style::default().fg(Color::LightBlue));

    let mut spans = vec![Span::styled(
        " // BESTBET_GRID",
        Style::default().fg(MATRIX_GREEN).add_modifier(Modifier::BOLD),
    )];

    spans.push(separator.clone());
    spans.push(if current_tab == 0 {
        Span::styled(" [DASHBOARD] ", style_active)
    } else {
        Span::styled(" DASHBOARD ", Style::default().fg(MATRIX_GREEN))
    });

    spans.push(separator.clone());
    spans.push(if current_tab == 1 {
        Span::styled(" [CORE_CONFIG] ", style_active)
    } else {
        Span::styled(" CORE_CONFIG ", Style::default().fg(MATRIX_GREEN))
    });

    let tabs = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(DARK_GREEN)),
    );
    f.render_widget(tabs, chunks[0]);

    let user_tz: Tz = Tz::from_str(&app.cached_user_timezone).unwrap_or(chrono_tz::UTC);
    let now = Utc::now().with_timezone(&user_tz);
    let time = now.format("%I:%M:%S %p %Z").to_string();

    let stats_text = format!(
        "{} | {} games/league | {}",
        app.config.model.display_name(),
        app.config.games_per_league,
        time
    );
    let stats = Paragraph::new(stats_text)
        .alignment(Alignment::Right)
        .style(Style::default().fg(BRIGHT_GREEN).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(DARK_GREEN)),
        );
    f.render_widget(stats, chunks[1]);
}
