//! Playing-mode scene.
//!
//! Uses a cell buffer for per-character color control: the world is drawn
//! into a 2D grid scaled down from world pixels, then stamped row-by-row as
//! Paragraph widgets.

use super::common::{create_scene_layout, render_status_bar};
use crate::constants::{BG_TILE_WIDTH, CLOUD_TILE_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH, TITLE};
use crate::obstacles::{ObstacleKind, ObstacleManager};
use crate::player::{Dino, DinoState};
use crate::power_ups::PowerUpManager;
use crate::rect::WorldRect;
use crate::session::GameSession;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const GROUND_CHAR: char = '▓';
const GROUND_MARK: char = '░';
const CLOUD_CHARS: &str = "~~~";

/// Cell in the render buffer.
#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
        }
    }
}

/// World-to-buffer scaling for one frame.
struct Viewport {
    width: usize,
    height: usize,
    x_scale: f64,
    y_scale: f64,
}

impl Viewport {
    fn new(area: Rect) -> Self {
        Self {
            width: area.width as usize,
            height: area.height as usize,
            x_scale: area.width as f64 / SCREEN_WIDTH as f64,
            y_scale: area.height as f64 / SCREEN_HEIGHT as f64,
        }
    }

    fn col(&self, world_x: i32) -> i32 {
        (world_x as f64 * self.x_scale).round() as i32
    }

    fn row(&self, world_y: i32) -> i32 {
        (world_y as f64 * self.y_scale).round() as i32
    }
}

/// Render the full playing frame: parallax layers, dino, obstacles,
/// pickups, and the HUD labels.
pub fn render_play_scene(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    dino: &Dino,
    obstacles: &ObstacleManager,
    power_ups: &PowerUpManager,
) {
    let layout = create_scene_layout(
        frame,
        area,
        &format!(" {} ", TITLE),
        Color::LightGreen,
    );

    render_world(frame, layout.content, session, dino, obstacles, power_ups);
    render_status_bar(
        frame,
        layout.status_bar,
        "Run!",
        Color::LightGreen,
        &[
            ("[Space/Up]", "Jump"),
            ("[Down]", "Duck"),
            ("[Esc]", "Menu"),
            ("[Q]", "Quit"),
        ],
    );
}

fn render_world(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    dino: &Dino,
    obstacles: &ObstacleManager,
    power_ups: &PowerUpManager,
) {
    if area.width < 20 || area.height < 6 {
        return;
    }

    let vp = Viewport::new(area);
    let mut buffer: Vec<Vec<Cell>> = vec![vec![Cell::default(); vp.width]; vp.height];

    draw_clouds(&mut buffer, &vp, session);
    draw_track(&mut buffer, &vp, session);
    draw_power_ups(&mut buffer, &vp, power_ups);
    draw_obstacles(&mut buffer, &vp, obstacles);
    draw_dino(&mut buffer, &vp, dino);
    draw_hud(&mut buffer, &vp, session, dino);

    stamp(frame, area, &buffer, vp.width);
}

/// Two cloud copies tiled side by side at the cloud scroll offset.
fn draw_clouds(buffer: &mut [Vec<Cell>], vp: &Viewport, session: &GameSession) {
    let row = vp.row(session.y_pos_cloud);
    if row < 0 || row >= vp.height as i32 {
        return;
    }
    for tile in 0..2 {
        let world_x = session.x_pos_cloud + tile * CLOUD_TILE_WIDTH;
        let col = vp.col(world_x);
        for (i, ch) in CLOUD_CHARS.chars().enumerate() {
            let c = col + i as i32;
            if c >= 0 && c < vp.width as i32 {
                buffer[row as usize][c as usize] = Cell {
                    ch,
                    fg: Color::Gray,
                };
            }
        }
    }
}

/// The scrolling track: a solid ground line plus tick marks whose world
/// positions ride the background offset, making the scroll visible.
fn draw_track(buffer: &mut [Vec<Cell>], vp: &Viewport, session: &GameSession) {
    let ground_row = vp.row(session.y_pos_bg + 24).clamp(0, vp.height as i32 - 1) as usize;

    for cell in buffer[ground_row].iter_mut() {
        *cell = Cell {
            ch: GROUND_CHAR,
            fg: Color::Rgb(110, 90, 60),
        };
    }

    // Tick marks every 110 world px within each of the two tiles
    let mark_row = ground_row.saturating_sub(1);
    for tile in 0..2 {
        let tile_x = session.x_pos_bg + tile * BG_TILE_WIDTH;
        for k in 0..(BG_TILE_WIDTH / 110) {
            let col = vp.col(tile_x + k * 110);
            if col >= 0 && (col as usize) < vp.width && buffer[mark_row][col as usize].ch == ' ' {
                buffer[mark_row][col as usize] = Cell {
                    ch: GROUND_MARK,
                    fg: Color::Rgb(80, 65, 45),
                };
            }
        }
    }
}

fn draw_world_rect(buffer: &mut [Vec<Cell>], vp: &Viewport, rect: WorldRect, ch: char, fg: Color) {
    let col0 = vp.col(rect.x);
    let col1 = vp.col(rect.right()).max(col0 + 1);
    let row0 = vp.row(rect.y);
    let row1 = vp.row(rect.bottom()).max(row0 + 1);

    for row in row0..row1 {
        if row < 0 || row >= vp.height as i32 {
            continue;
        }
        for col in col0..col1 {
            if col >= 0 && col < vp.width as i32 {
                buffer[row as usize][col as usize] = Cell { ch, fg };
            }
        }
    }
}

fn draw_obstacles(buffer: &mut [Vec<Cell>], vp: &Viewport, obstacles: &ObstacleManager) {
    for obstacle in &obstacles.obstacles {
        let (ch, fg) = match obstacle.kind {
            ObstacleKind::SmallCactus => ('|', Color::Rgb(60, 140, 60)),
            ObstacleKind::LargeCactus => ('|', Color::Rgb(40, 120, 40)),
            ObstacleKind::Bird => ('v', Color::Rgb(160, 80, 160)),
        };
        draw_world_rect(buffer, vp, obstacle.rect(), ch, fg);
    }
}

fn draw_power_ups(buffer: &mut [Vec<Cell>], vp: &Viewport, power_ups: &PowerUpManager) {
    for power_up in &power_ups.power_ups {
        let ch = match power_up.kind {
            crate::player::PowerUpKind::Shield => 'S',
            crate::player::PowerUpKind::Hammer => 'H',
            crate::player::PowerUpKind::Neutral => '?',
        };
        draw_world_rect(buffer, vp, power_up.rect(), ch, Color::LightCyan);
    }
}

fn draw_dino(buffer: &mut [Vec<Cell>], vp: &Viewport, dino: &Dino) {
    let color = match dino.kind {
        crate::player::PowerUpKind::Shield => Color::LightCyan,
        crate::player::PowerUpKind::Hammer => Color::LightRed,
        crate::player::PowerUpKind::Neutral => Color::LightYellow,
    };
    let ch = match dino.state {
        DinoState::Ducking => '▄',
        DinoState::Jumping => '█',
        // Two-pose gallop on the ground
        DinoState::Running => {
            if dino.run_anim_frame == 0 {
                '█'
            } else {
                '▌'
            }
        }
    };
    draw_world_rect(buffer, vp, dino.rect(), ch, color);
}

/// Score (right), record (left) and the power-up countdown (center).
fn draw_hud(buffer: &mut [Vec<Cell>], vp: &Viewport, session: &GameSession, dino: &Dino) {
    write_text(
        buffer,
        vp,
        1000,
        &format!("Score: {}", session.score),
        Color::White,
        true,
    );
    write_text(
        buffer,
        vp,
        100,
        &format!("Record: {}", session.record),
        Color::DarkGray,
        false,
    );

    if let Some(remaining) = session.power_up_remaining(dino) {
        if remaining >= 0.0 {
            write_text(
                buffer,
                vp,
                500,
                &format!("{} active for {:.2} s", dino.kind.label(), remaining),
                Color::LightCyan,
                false,
            );
        }
    }
}

/// Write a label on the top row, anchored at a world x position.
fn write_text(
    buffer: &mut [Vec<Cell>],
    vp: &Viewport,
    world_x: i32,
    text: &str,
    fg: Color,
    right_align: bool,
) {
    let mut col = vp.col(world_x);
    if right_align {
        col -= text.len() as i32;
    }
    for (i, ch) in text.chars().enumerate() {
        let c = col + i as i32;
        if c >= 0 && (c as usize) < vp.width {
            buffer[0][c as usize] = Cell { ch, fg };
        }
    }
}

/// Flush the buffer to the terminal, merging same-style runs into spans.
fn stamp(frame: &mut Frame, area: Rect, buffer: &[Vec<Cell>], width: usize) {
    for (row_idx, row_data) in buffer.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            if cell.fg != current_fg && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg),
                ));
            }
            current_fg = cell.fg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg),
            ));
        }

        let line = Paragraph::new(Line::from(spans));
        let row_area = Rect::new(area.x, area.y + row_idx as u16, width as u16, 1);
        if row_area.y < area.y + area.height {
            frame.render_widget(line, row_area);
        }
    }
}

/// Small bold banner shown over the field when a run just ended, before the
/// loop flips back to the menu scene.
pub fn render_run_over_banner(frame: &mut Frame, area: Rect) {
    let text = Paragraph::new(Line::from(Span::styled(
        "*CRASH*",
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    )));
    let y = area.y + area.height / 2;
    let x = area.x + area.width.saturating_sub(7) / 2;
    frame.render_widget(text, Rect::new(x, y, 7, 1));
}
