//! Shared scene helpers: outer frame layout and the controls status bar.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Areas of the standard scene layout.
pub struct SceneLayout {
    /// Play field / menu body, inside the outer border.
    pub content: Rect,
    /// Two-line status bar at the bottom.
    pub status_bar: Rect,
}

/// Clear the area and draw the bordered scene frame.
pub fn create_scene_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
) -> SceneLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(inner);

    SceneLayout {
        content: chunks[0],
        status_bar: chunks[1],
    }
}

/// Render the two-line status bar: a status message and a key legend.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let legend = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            legend,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Render centered lines starting at the vertical middle of `area`, offset
/// upward by half the block height.
pub fn render_centered_lines(frame: &mut Frame, area: Rect, lines: Vec<Line>) {
    let height = lines.len() as u16;
    let y = area.y + area.height.saturating_sub(height) / 2;
    let target = Rect::new(area.x, y, area.width, height.min(area.height));
    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, target);
}
