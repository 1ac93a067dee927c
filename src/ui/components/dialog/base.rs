//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    pub accent: Color,
    /// Message content (may contain \n)
    pub message: &'a str,
    /// Hint line at the bottom (e.g., "Press Enter to dismiss")
    pub hint: Option<Line<'a>>,
    pub max_width: u16,
}

/// Centre a `width` x `height` box inside `area`, clamped to it
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Rows the message needs once wrapped to `width` columns
fn wrapped_height(message: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    message
        .split('\n')
        .map(|line| line.chars().count().div_ceil(width).max(1) as u16)
        .sum()
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let text_width = config.max_width.saturating_sub(4); // borders + 1 col padding each side

    // title + blank + message [+ blank + hint] + borders
    let hint_rows = if config.hint.is_some() { 2 } else { 0 };
    let height = 2 + wrapped_height(config.message, text_width) + hint_rows + 2;
    let dialog_area = centered_rect(area, config.max_width, height);

    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(config.message.split('\n').map(Line::from));
    if let Some(hint) = config.hint {
        content.push(Line::from(""));
        content.push(hint);
    }

    let dialog = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.accent))
                .padding(Padding::horizontal(1)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}
