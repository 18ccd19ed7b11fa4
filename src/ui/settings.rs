use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};
use crate::app::App;
use crate::config::ModelVariant;
use crate::ui::colors::{HIGHLIGHT_BG, MATRIX_GREEN, TEXT_DIM, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::common::{render_composite_block, render_matrix_box};

fn variant_blurb(variant: ModelVariant) -> &'static str {
    match variant {
        ModelVariant::Gpt5 => {
            "Full-size model. Slowest of the three but the strongest picks and reasoning."
        }
        ModelVariant::Gpt5Mini => {
            "Mid-size model. Good balance of latency and pick quality for daily use."
        }
        ModelVariant::Gpt5Nano => {
            "Smallest model. Fastest and cheapest, with noticeably thinner reasoning."
        }
    }
}

pub fn render_settings(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(ModelVariant::all().len() as u16 + 2),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .split(area);

    let items: Vec<ListItem> = ModelVariant::all()
        .iter()
        .map(|variant| {
            let is_current = *variant == app.config.model;
            let prefix = if is_current { "\u{2713} " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(
                    prefix,
                    Style::default().fg(if is_current { MATRIX_GREEN } else { TEXT_DIM }),
                ),
                Span::styled(
                    variant.display_name(),
                    Style::default().fg(if is_current { MATRIX_GREEN } else { TEXT_PRIMARY }),
                ),
                Span::styled(
                    format!("  {}", variant.as_str()),
                    Style::default().fg(TEXT_DIM),
                ),
            ]))
        })
        .collect();

    let inner_list_area = render_composite_block(f, chunks[0], Some("model"));

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(HIGHLIGHT_BG)
                .fg(MATRIX_GREEN)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(" \u{258e}");
    f.render_stateful_widget(list, inner_list_area, &mut app.model_list_state);

    let description = ModelVariant::all()
        .get(app.selected_model_index)
        .copied()
        .map(variant_blurb)
        .unwrap_or("");
    let detail = format!(
        "{}\n\nApplies to the next fetch. {} games are requested per league.",
        description, app.config.games_per_league
    );
    let inner_desc = render_matrix_box(f, chunks[1], "info", TEXT_DIM);
    let desc_block = Paragraph::new(detail)
        .style(Style::default().fg(TEXT_SECONDARY))
        .wrap(Wrap { trim: true });
    f.render_widget(desc_block, inner_desc);

    let key_style = Style::default().fg(MATRIX_GREEN);
    let label_style = Style::default().fg(TEXT_SECONDARY);
    let sep_style = Style::default().fg(TEXT_DIM);
    let hints = Line::from(vec![
        Span::styled("enter", key_style),
        Span::styled(" select", label_style),
        Span::styled(" \u{b7} ", sep_style),
        Span::styled("esc", key_style),
        Span::styled(" back", label_style),
    ]);
    let hints_para = Paragraph::new(hints).alignment(Alignment::Center);
    f.render_widget(hints_para, chunks[2]);
}
