use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};
use crate::app::{App, InputMode, Pane};
use crate::sports::League;
use crate::ui::colors::{DARK_GREEN, MATRIX_GREEN, TEXT_DIM, TEXT_SECONDARY};

pub fn render_leagues_pane(f: &mut Frame, app: &mut App, area: Rect) {
    let is_active = app.active_pane == Pane::Leagues && app.input_mode == InputMode::Normal;
    let border_color = if is_active { MATRIX_GREEN } else { DARK_GREEN };

    let items: Vec<ListItem> = League::all()
        .iter()
        .map(|league| {
            let mut spans = vec![
                Span::styled(format!(" {} ", league.icon()), Style::default()),
                Span::styled(
                    league.display_name(),
                    Style::default()
                        .fg(league.accent_color())
                        .add_modifier(Modifier::BOLD),
                ),
            ];

            match app.card_for(*league) {
                Some(card) if !card.matchups.is_empty() => {
                    spans.push(Span::styled(
                        format!("  {} picks", card.matchups.len()),
                        Style::default().fg(TEXT_SECONDARY),
                    ));
                }
                Some(_) => {
                    spans.push(Span::styled(
                        "  no games",
                        Style::default().fg(TEXT_DIM),
                    ));
                }
                None => {
                    spans.push(Span::styled("  --", Style::default().fg(TEXT_DIM)));
                }
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(border_color))
                .title(format!(" // LEAGUE_FEEDS ({}) ", League::all().len())),
        )
        .highlight_style(
            Style::default()
                .bg(MATRIX_GREEN)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(" \u{bb} ");

    f.render_stateful_widget(list, area, &mut app.league_list_state);
}
