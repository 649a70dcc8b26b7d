//! Menu scene: first-time welcome or post-death summary.
//!
//! `sync_record` has already run by the time this renders, so the record
//! line always shows the updated value.

use super::common::{create_scene_layout, render_centered_lines, render_status_bar};
use crate::constants::TITLE;
use crate::session::GameSession;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

const DINO_ICON: [&str; 4] = ["   ▄▄▄▄", "   █▄██", "▄█▄█▄", "  █ █"];

/// Render the menu. Which sub-screen shows is decided by the death tally:
/// zero deaths means the player has never run yet.
pub fn render_menu_scene(frame: &mut Frame, area: Rect, session: &GameSession) {
    let layout = create_scene_layout(frame, area, &format!(" {} ", TITLE), Color::LightGreen);

    if session.death_count == 0 {
        render_welcome(frame, layout.content);
        render_status_bar(
            frame,
            layout.status_bar,
            "Ready",
            Color::LightGreen,
            &[("[Enter]", "Start"), ("[Esc]", "Quit")],
        );
    } else {
        render_post_death(frame, layout.content, session);
        render_status_bar(
            frame,
            layout.status_bar,
            "Game over",
            Color::Red,
            &[("[Enter]", "Play again"), ("[Esc]", "Quit")],
        );
    }
}

fn render_welcome(frame: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = icon_lines();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "WELCOME TO DINO RUNNER!",
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press ENTER to start",
        Style::default().fg(Color::White),
    )));

    render_centered_lines(frame, area, lines);
}

fn render_post_death(frame: &mut Frame, area: Rect, session: &GameSession) {
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            format!("Your score: {}", session.score),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("Record: {}", session.record),
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Deaths: {}", session.death_count),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];
    lines.extend(icon_lines());
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press ENTER to play again",
        Style::default().fg(Color::White),
    )));
    lines.push(Line::from(Span::styled(
        "Press ESC to quit",
        Style::default().fg(Color::DarkGray),
    )));

    render_centered_lines(frame, area, lines);
}

fn icon_lines() -> Vec<Line<'static>> {
    DINO_ICON
        .iter()
        .map(|row| {
            Line::from(Span::styled(
                *row,
                Style::default().fg(Color::LightGreen),
            ))
        })
        .collect()
}
