//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{PASTE_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{FormFocus, FORM_HEIGHT, HEADER_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Screen regions, top to bottom
pub struct Regions {
    pub header: Rect,
    pub form: Rect,
    pub console: Rect,
    pub status: Rect,
}

/// Split the screen into header, form, console and status bar
pub fn create_layout(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Length(FORM_HEIGHT),   // Form
            Constraint::Min(0),                // Console
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    Regions {
        header: chunks[0],
        form: chunks[1],
        console: chunks[2],
        status: chunks[3],
    }
}

/// Draw the page heading
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Use State Form",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(title, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" rev {} ", app.form.revision()),
        Style::default().fg(Color::Green),
    )];

    spans.push(Span::styled(
        focus_hints(app.state.focus),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Keyboard hints for the focused element
fn focus_hints(focus: FormFocus) -> String {
    match focus {
        FormFocus::InputA | FormFocus::InputB => format!(
            "Tab:next  Enter/{SUBMIT_SHORTCUT}:submit  {PASTE_SHORTCUT}:paste  ^U:clear  ^L:clear log  Esc:quit"
        ),
        FormFocus::Submit => {
            "Tab:next  Enter/Space:submit  ^R:re-render  ^L:clear log  Esc:quit".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_ui_area_rows() {
        use crate::state::UiArea;

        let regions = create_layout(Rect::new(0, 0, 80, 30));
        assert_eq!(regions.header.y, UiArea::Header.start_y());
        assert_eq!(regions.form.y + 1, UiArea::InputA.start_y());
        assert_eq!(regions.console.y, UiArea::Console.start_y());
        assert_eq!(regions.status.y, 29);
        assert_eq!(regions.status.height, 1);
    }

    #[test]
    fn test_focus_hints() {
        assert!(focus_hints(FormFocus::InputA).contains("paste"));
        assert!(focus_hints(FormFocus::Submit).contains("Space:submit"));
    }
}
