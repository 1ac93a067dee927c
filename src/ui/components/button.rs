//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Render a bordered push button; a focused button gets a thick cyan frame
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, is_focused: bool) {
    let (border_type, accent) = if is_focused {
        (BorderType::Thick, Color::Cyan)
    } else {
        (BorderType::Plain, Color::DarkGray)
    };

    let mut label_style = Style::default().fg(if is_focused { accent } else { Color::White });
    if is_focused {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(accent));

    let button = Paragraph::new(Line::styled(label, label_style))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(button, area);
}
