//! Console pane showing lifecycle and submission lines

use crate::app::App;
use crate::state::ConsoleLevel;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn level_color(level: ConsoleLevel) -> Color {
    match level {
        ConsoleLevel::Log => Color::Gray,
        ConsoleLevel::Info => Color::Blue,
        ConsoleLevel::Warn => Color::Yellow,
    }
}

/// Draw the newest console lines that fit, oldest at the top
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let console = app.form.component().console();
    let visible = area.height.saturating_sub(2) as usize;

    let lines: Vec<Line> = if console.is_empty() {
        vec![Line::from(Span::styled(
            "Console is empty",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        console
            .tail(visible)
            .map(|entry| {
                Line::from(vec![
                    Span::styled(
                        format!("{} ", entry.timestamp()),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        format!("[{}] ", entry.level.tag()),
                        Style::default().fg(level_color(entry.level)),
                    ),
                    Span::raw(entry.message.as_str()),
                ])
            })
            .collect()
    };

    let block = Block::default()
        .title(format!(" Console ({}) ", console.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
