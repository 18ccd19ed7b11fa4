use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::app::{App, Pane};
use crate::parser::{NO_PICK, NO_REASONING};
use crate::sports::get_team_color_with_fallback;
use crate::ui::colors::{DARK_GREEN, MATRIX_GREEN, TEXT_DIM, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::common::render_matrix_box;

/// The board shows the card for whichever league the sidebar has selected.
pub fn render_board_pane(f: &mut Frame, app: &mut App, area: Rect) {
    let is_active = app.active_pane == Pane::Board;
    let border_color = if is_active { MATRIX_GREEN } else { DARK_GREEN };

    let league = app.selected_league();
    let title = match app.card_for(league) {
        Some(card) => format!("BESTBET_BOARD / {} ({})", league.display_name(), card.matchups.len()),
        None => format!("BESTBET_BOARD / {}", league.display_name()),
    };
    let inner = render_matrix_box(f, area, &title, border_color);

    let user_tz: Tz = Tz::from_str(&app.cached_user_timezone).unwrap_or(chrono_tz::UTC);

    let mut lines: Vec<Line> = Vec::new();

    match app.card_for(league) {
        None => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  No {} picks fetched yet.", league.display_name()),
                Style::default().fg(TEXT_SECONDARY),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("  Press ", Style::default().fg(TEXT_SECONDARY)),
                Span::styled(
                    "f",
                    Style::default().fg(MATRIX_GREEN).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    " to fetch picks for every league,",
                    Style::default().fg(TEXT_SECONDARY),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled("  or ", Style::default().fg(TEXT_SECONDARY)),
                Span::styled(
                    "Enter",
                    Style::default().fg(MATRIX_GREEN).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    " on the league feed for just this one.",
                    Style::default().fg(TEXT_SECONDARY),
                ),
            ]));
        }
        Some(card) => {
            let synced = card
                .fetched_at
                .with_timezone(&user_tz)
                .format("%I:%M %p")
                .to_string();

            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", card.league.icon()), Style::default()),
                Span::styled(
                    card.league.display_name(),
                    Style::default()
                        .fg(card.league.accent_color())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  synced {}", synced),
                    Style::default().fg(TEXT_DIM),
                ),
            ]));
            lines.push(Line::from(""));

            if card.matchups.is_empty() {
                lines.push(Line::from(Span::styled(
                    "    No upcoming games found.",
                    Style::default().fg(TEXT_DIM).add_modifier(Modifier::ITALIC),
                )));
            }

            for (i, matchup) in card.matchups.iter().enumerate() {
                lines.push(Line::from(Span::styled(
                    format!(" {:>2}. {}", i + 1, matchup.game),
                    Style::default().fg(TEXT_PRIMARY),
                )));

                let winner_style = if matchup.winner == NO_PICK {
                    Style::default().fg(TEXT_DIM).add_modifier(Modifier::ITALIC)
                } else {
                    Style::default()
                        .fg(get_team_color_with_fallback(&matchup.winner))
                        .add_modifier(Modifier::BOLD)
                };
                lines.push(Line::from(vec![
                    Span::styled("     BestBet: ", Style::default().fg(TEXT_SECONDARY)),
                    Span::styled(matchup.winner.clone(), winner_style),
                ]));

                let reason_style = if matchup.reason == NO_REASONING {
                    Style::default().fg(TEXT_DIM).add_modifier(Modifier::ITALIC)
                } else {
                    Style::default().fg(TEXT_SECONDARY)
                };
                lines.push(Line::from(Span::styled(
                    format!("     {}", matchup.reason),
                    reason_style,
                )));
                lines.push(Line::from(""));
            }
        }
    }

    // Clamp so the last line stops at the bottom edge. Wrapped reasons can
    // exceed the logical count, leaving a little slack at the very end.
    let max_scroll = (lines.len() as u16).saturating_sub(inner.height);
    if app.board_scroll > max_scroll {
        app.board_scroll = max_scroll;
    }

    let board = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.board_scroll, 0));
    f.render_widget(board, inner);
}
