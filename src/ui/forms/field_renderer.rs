//! Field rendering utilities for forms

use crate::state::FieldId;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const CURSOR: &str = "▌";

/// Visible part of a single-line value: the longest tail that fits in
/// `width` terminal columns, so the cursor stays in view
pub fn visible_tail(value: &str, width: usize) -> &str {
    if value.width() <= width {
        return value;
    }
    let mut used = 0;
    let mut start = value.len();
    for (offset, c) in value.char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > width {
            break;
        }
        start = offset;
    }
    &value[start..]
}

/// Draw a controlled text input. `value` always comes from form state.
pub fn draw_field(frame: &mut Frame, area: Rect, field: FieldId, value: &str, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Inner width minus borders and one column for the cursor
    let width = area.width.saturating_sub(3) as usize;

    let content = if value.is_empty() && !is_active {
        Line::from(Span::styled("(empty)", Style::default().fg(Color::DarkGray)))
    } else {
        let cursor = if is_active { CURSOR } else { "" };
        Line::from(vec![
            Span::styled(visible_tail(value, width), style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .title_bottom(Line::from(format!(" #{} ", field.id())).right_aligned())
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(content).block(block), area);
}
