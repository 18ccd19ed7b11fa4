pub mod colors;
pub mod utils;
pub mod common;
pub mod header;
pub mod footer;
pub mod leagues;
pub mod board;
pub mod chat;
pub mod settings;
pub mod popups;
pub mod loading;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, CurrentScreen};
use crate::ui::utils::calculate_dashboard_split;

pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Footer
        ])
        .split(area);

    header::render_header(f, app, chunks[0]);
    footer::render_footer(f, app, chunks[2]);

    let content_area = chunks[1];

    match app.current_screen {
        CurrentScreen::Dashboard => {
            let (sidebar_width, chat_width) = calculate_dashboard_split(content_area.width);

            let h_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(sidebar_width),
                    Constraint::Min(0),
                    Constraint::Length(chat_width),
                ])
                .split(content_area);

            leagues::render_leagues_pane(f, app, h_chunks[0]);
            board::render_board_pane(f, app, h_chunks[1]);
            chat::render_chat_pane(f, app, h_chunks[2]);
        }
        CurrentScreen::Settings => {
            settings::render_settings(f, app, content_area);
        }
    }

    // Overlays
    if app.is_loading {
        loading::render_loading(f, app, area);
    }

    if app.show_help {
        popups::render_help_popup(f, area);
    }

    if let Some(error) = &app.gateway_error {
        popups::render_error_popup(f, area, error);
    }
}
