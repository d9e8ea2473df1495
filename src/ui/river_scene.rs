//! River view rendering.
//!
//! Draws sky, dock, water, boat, fishing line, bobber and particles into a
//! cell buffer scaled from world units to terminal cells.

use super::common::{
    create_game_layout, render_info_panel_frame, render_status_bar, render_too_small,
};
use river::core::constants::{PLAYER_MIN_X, SHOP_RANGE_X, VIEWPORT_HEIGHT, VIEWPORT_WIDTH, WATER_Y};
use river::core::GameState;
use river::effects::ParticleKind;
use river::fishing::FishingPhase;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const MIN_WIDTH: u16 = 50;
const MIN_HEIGHT: u16 = 16;
const INFO_PANEL_WIDTH: u16 = 24;

/// Boat sprite, drawn with its left edge at the player's x.
const BOAT_SPRITE: [&str; 3] = ["   o   ", "  /|   ", "\\_____/"];
/// Cell offset of the rod tip relative to the boat's left edge and top row.
const ROD_TIP: (i32, i32) = (5, 0);

const SKY_BG: Color = Color::Rgb(125, 211, 252);
const WATER_BG: Color = Color::Rgb(14, 116, 144);

/// Render the main game screen.
pub fn render_river_scene(frame: &mut Frame, area: Rect, state: &GameState, status: &str) {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    let layout = create_game_layout(frame, area, " River Legends ", Color::Cyan, INFO_PANEL_WIDTH);
    render_play_field(frame, layout.content, state);
    render_status(frame, layout.status_bar, state, status);
    render_info_panel(frame, layout.info_panel, state);
}

#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

/// World-to-cell mapping for one frame.
struct Projection {
    width: usize,
    height: usize,
    camera_x: f64,
}

impl Projection {
    fn col(&self, world_x: f64) -> i32 {
        ((world_x - self.camera_x) / VIEWPORT_WIDTH * self.width as f64).floor() as i32
    }

    fn row(&self, world_y: f64) -> i32 {
        (world_y / VIEWPORT_HEIGHT * self.height as f64).floor() as i32
    }

    fn water_row(&self) -> usize {
        (self.row(WATER_Y).max(0) as usize).min(self.height.saturating_sub(1))
    }
}

struct Buffer {
    cells: Vec<Vec<Cell>>,
}

impl Buffer {
    fn put(&mut self, col: i32, row: i32, ch: char, fg: Color) {
        if col < 0 || row < 0 {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            cell.ch = ch;
            cell.fg = fg;
        }
    }
}

fn render_play_field(frame: &mut Frame, area: Rect, state: &GameState) {
    if area.height < 4 || area.width < 10 {
        return;
    }
    let sim = &state.sim;
    let proj = Projection {
        width: area.width as usize,
        height: area.height as usize,
        camera_x: sim.camera_x,
    };
    let water_row = proj.water_row();

    let mut buffer = Buffer {
        cells: (0..proj.height)
            .map(|row| {
                let bg = if row < water_row { SKY_BG } else { WATER_BG };
                vec![
                    Cell {
                        ch: ' ',
                        fg: Color::White,
                        bg,
                    };
                    proj.width
                ]
            })
            .collect()
    };

    // -- Water surface, scrolling with the camera --
    let wave_phase = sim.tick_count / 8;
    for col in 0..proj.width {
        let world_col = col as u64 + (sim.camera_x / VIEWPORT_WIDTH * proj.width as f64) as u64;
        let ch = if (world_col + wave_phase) % 6 < 3 { '~' } else { '-' };
        buffer.put(col as i32, water_row as i32, ch, Color::Rgb(224, 242, 254));
        for row in water_row + 1..proj.height {
            if (world_col * 7 + row as u64 * 13 + wave_phase) % 23 == 0 {
                buffer.put(col as i32, row as i32, '~', Color::Rgb(56, 189, 248));
            }
        }
    }

    // -- Dock and shop sign --
    let dock_start = proj.col(0.0);
    let dock_end = proj.col(SHOP_RANGE_X);
    for col in dock_start..dock_end {
        buffer.put(col, water_row as i32 - 1, '=', Color::Rgb(120, 80, 40));
    }
    let sign_col = proj.col(PLAYER_MIN_X * 0.5);
    for (i, ch) in "SHOP".chars().enumerate() {
        buffer.put(sign_col + i as i32, water_row as i32 - 3, ch, Color::Yellow);
    }
    buffer.put(sign_col, water_row as i32 - 2, '|', Color::Rgb(120, 80, 40));

    // -- Boat --
    let boat_col = proj.col(sim.player_x);
    let bob = if (sim.tick_count / 20) % 2 == 0 { 0 } else { 1 };
    let boat_top = water_row as i32 - BOAT_SPRITE.len() as i32 + bob;
    for (dy, line) in BOAT_SPRITE.iter().enumerate() {
        for (dx, ch) in line.chars().enumerate() {
            if ch != ' ' {
                buffer.put(boat_col + dx as i32, boat_top + dy as i32, ch, Color::Rgb(120, 53, 15));
            }
        }
    }

    // -- Line and bobber --
    if sim.bobber.active {
        let tip = (boat_col + ROD_TIP.0, boat_top + ROD_TIP.1 - 1);
        buffer.put(tip.0, tip.1, '/', Color::Rgb(68, 64, 60));
        let bobber = (proj.col(sim.bobber.x), proj.row(sim.bobber.y).min(water_row as i32));
        draw_line(&mut buffer, tip, bobber);
        let (ch, color) = match sim.phase {
            FishingPhase::BiteWindow { .. } => ('!', Color::Red),
            _ => ('o', Color::LightRed),
        };
        buffer.put(bobber.0, bobber.1, ch, color);
    }

    // -- Particles --
    for p in state.particles.iter() {
        let ch = if p.life > 0.6 {
            '*'
        } else if p.life > 0.3 {
            '\''
        } else {
            '.'
        };
        let color = match p.kind {
            ParticleKind::Splash => Color::Rgb(165, 243, 252),
            ParticleKind::Wake => Color::White,
        };
        buffer.put(proj.col(p.x), proj.row(p.y), ch, color);
    }

    // -- Render buffer to terminal --
    for (row_idx, row_data) in buffer.cells.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_bg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }
            current_fg = cell.fg;
            current_bg = cell.bg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg).bg(current_bg),
            ));
        }

        let row_area = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

/// Plots a straight line of dots between two cells, endpoints excluded.
fn draw_line(buffer: &mut Buffer, from: (i32, i32), to: (i32, i32)) {
    let steps = (to.0 - from.0).abs().max((to.1 - from.1).abs());
    for i in 1..steps {
        let t = i as f64 / steps as f64;
        let x = from.0 as f64 + (to.0 - from.0) as f64 * t;
        let y = from.1 as f64 + (to.1 - from.1) as f64 * t;
        buffer.put(x.round() as i32, y.round() as i32, '.', Color::Rgb(30, 41, 59));
    }
}

fn render_status(frame: &mut Frame, area: Rect, state: &GameState, status: &str) {
    let (default_text, color) = match state.sim.phase {
        FishingPhase::Idle | FishingPhase::Moving if state.can_open_shop() => {
            ("At the dock. Press S to trade.", Color::Yellow)
        }
        FishingPhase::Idle | FishingPhase::Moving => ("Row out and cast your line.", Color::White),
        FishingPhase::CastingInFlight => ("Casting...", Color::White),
        FishingPhase::WaitingForBite { .. } => ("Waiting for a bite...", Color::Gray),
        FishingPhase::BiteWindow { .. } => ("!!! BITE !!! Reel in!", Color::LightRed),
    };
    let text = if status.is_empty() { default_text } else { status };
    render_status_bar(
        frame,
        area,
        text,
        color,
        &[
            ("[A/D]", "Row"),
            ("[Space]", "Cast/Reel"),
            ("[S]", "Shop"),
            ("[Q]", "Quit"),
        ],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, state: &GameState) {
    let inner = render_info_panel_frame(frame, area);
    let player = &state.player;
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Gold: ", label),
            Span::styled(
                player.money.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Rod:  ", label),
            Span::styled(format!("T{}", player.equipment.rod_tier), value),
        ]),
        Line::from(vec![
            Span::styled("Bait: ", label),
            Span::styled(format!("T{}", player.equipment.bait_tier), value),
        ]),
        Line::from(vec![
            Span::styled("Boat: ", label),
            Span::styled(format!("T{}", player.equipment.boat_tier), value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Creel: ", label),
            Span::styled(format!("{} fish", player.inventory.len()), value),
        ]),
        Line::from(vec![
            Span::styled("Worth: ", label),
            Span::styled(player.inventory_value().to_string(), value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("State: ", label),
            Span::styled(state.sim.phase.name(), value),
        ]),
        Line::from(vec![
            Span::styled("Dist:  ", label),
            Span::styled(format!("{:.0}m", state.sim.player_x / 10.0), value),
        ]),
    ];
    if let FishingPhase::BiteWindow { remaining_ticks } = state.sim.phase {
        lines.push(Line::from(Span::styled(
            format!("Reel! {:.0}", remaining_ticks.max(0.0)),
            Style::default().fg(Color::LightRed),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
