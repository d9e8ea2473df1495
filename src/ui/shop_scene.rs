//! Dockside shop overlay: gear, selling fish, and chatting with the keeper.

use super::common::{overlay_area, rarity_color, render_status_bar};
use crate::app::{ShopTab, ShopView};
use river::core::GameState;
use river::lore::ChatLog;
use river::shop::{is_owned, SHOP_CATALOG};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_shop(
    frame: &mut Frame,
    area: Rect,
    view: &ShopView,
    state: &GameState,
    chat: &ChatLog,
) {
    let overlay = overlay_area(frame, area, 64, 22);
    let title = format!(" The Dock Shop  [Gold: {}] ", state.player.money);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(inner);

    render_tabs(frame, chunks[0], view.tab);
    match view.tab {
        ShopTab::Gear => render_gear(frame, chunks[1], view, state),
        ShopTab::Sell => render_sell(frame, chunks[1], view, state),
        ShopTab::Chat => render_chat(frame, chunks[1], view, chat),
    }
    if let Some(message) = &view.message {
        frame.render_widget(
            Paragraph::new(message.as_str()).style(Style::default().fg(Color::Cyan)),
            chunks[2],
        );
    }

    let controls: &[(&str, &str)] = match view.tab {
        ShopTab::Chat => &[("[Enter]", "Say"), ("[Tab]", "Next"), ("[Esc]", "Leave")],
        _ => &[
            ("[Up/Down]", "Select"),
            ("[Enter]", "Confirm"),
            ("[Tab]", "Next"),
            ("[Esc]", "Leave"),
        ],
    };
    render_status_bar(frame, chunks[3], "", Color::White, controls);
}

fn render_tabs(frame: &mut Frame, area: Rect, active: ShopTab) {
    let tab = |label: &'static str, which: ShopTab| {
        let style = if which == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(label, style)
    };
    let line = Line::from(vec![
        tab(" Gear ", ShopTab::Gear),
        Span::raw(" "),
        tab(" Sell Fish ", ShopTab::Sell),
        Span::raw(" "),
        tab(" Talk ", ShopTab::Chat),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn selection_style(selected: bool) -> Style {
    if selected {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    }
}

fn render_gear(frame: &mut Frame, area: Rect, view: &ShopView, state: &GameState) {
    let player = &state.player;
    let mut lines = Vec::new();
    for (i, item) in SHOP_CATALOG.iter().enumerate() {
        let owned = is_owned(&player.equipment, item);
        let price = if owned {
            Span::styled("OWNED", Style::default().fg(Color::Green))
        } else if player.money >= item.cost {
            Span::styled(format!("{}g", item.cost), Style::default().fg(Color::Yellow))
        } else {
            Span::styled(format!("{}g", item.cost), Style::default().fg(Color::Red))
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<5} T{} {:<20}", item.kind.name(), item.tier, item.name),
                selection_style(i == view.selected),
            ),
            Span::raw(" "),
            price,
        ]));
        lines.push(Line::from(Span::styled(
            format!("        {}", item.description),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_sell(frame: &mut Frame, area: Rect, view: &ShopView, state: &GameState) {
    let inventory = &state.player.inventory;
    if inventory.is_empty() {
        frame.render_widget(
            Paragraph::new("Your creel is empty. Go catch something!")
                .style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    // Keep the selection on screen.
    let visible = area.height as usize;
    let first = view.selected.saturating_sub(visible.saturating_sub(1));
    let lines: Vec<Line> = inventory
        .iter()
        .enumerate()
        .skip(first)
        .take(visible)
        .map(|(i, fish)| {
            let mut spans = vec![
                Span::styled(
                    format!("{:<16}", fish.name()),
                    selection_style(i == view.selected).fg(rarity_color(fish.rarity)),
                ),
                Span::raw(format!(" {:>6.1} lbs ", fish.weight)),
                Span::styled(format!("{:>5}g", fish.value), Style::default().fg(Color::Yellow)),
            ];
            if let Some(lore) = state.lore.get(fish.id) {
                spans.push(Span::styled(
                    format!("  {}", lore),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            Line::from(spans)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_chat(frame: &mut Frame, area: Rect, view: &ShopView, chat: &ChatLog) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let history = chunks[0].height as usize;
    let mut lines: Vec<Line> = chat
        .lines()
        .iter()
        .map(|line| {
            let color = if line.starts_with("You:") {
                Color::White
            } else {
                Color::LightYellow
            };
            Line::from(Span::styled(line.as_str(), Style::default().fg(color)))
        })
        .collect();
    if chat.is_awaiting_reply() {
        lines.push(Line::from(Span::styled(
            "Keep: ...",
            Style::default().fg(Color::DarkGray),
        )));
    }
    let skip = lines.len().saturating_sub(history);
    let lines: Vec<Line> = lines.into_iter().skip(skip).collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[0]);

    let prompt = Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Yellow)),
        Span::raw(view.chat_input.as_str()),
        Span::styled("_", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(prompt), chunks[1]);
}
