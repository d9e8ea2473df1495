//! Catch card shown after reeling in a fish.

use super::common::{overlay_area, rarity_color};
use river::core::CatchRecord;
use river::lore::LoreBook;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_catch_card(frame: &mut Frame, area: Rect, record: &CatchRecord, lore: &LoreBook) {
    let fish = &record.fish;
    let color = rarity_color(fish.rarity);
    let overlay = overlay_area(frame, area, 44, 14);

    let block = Block::default()
        .title(" You caught a fish! ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            fish.name(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            fish.rarity.name().to_uppercase(),
            Style::default().fg(color),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Weight ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.1} lbs", fish.weight),
                Style::default().fg(Color::White),
            ),
            Span::styled("   Value ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} gold", fish.value),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
    ];
    if record.lore_requested {
        lines.push(Line::from(Span::styled(
            format!("\"{}\"", lore.text_or_pending(fish.id)),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "[Space/Enter] Keep fishing",
        Style::default().fg(Color::DarkGray),
    )));

    let text = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(text, inner);
}
