//! Use State Form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{FieldId, FormFocus, FIELD_HEIGHT};
use crate::ui::components::render_button;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Width of the submit button including borders
const SUBMIT_WIDTH: u16 = 12;

/// Draw the form: two labelled inputs and a submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let focus = app.state.focus;
    let state = app.form.state();

    let block = Block::default()
        .title(" form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT), // Input A
            Constraint::Length(FIELD_HEIGHT), // Input B
            Constraint::Length(FIELD_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .split(inner);

    for (row, field) in rows.iter().zip(FieldId::ALL) {
        draw_field(
            frame,
            *row,
            field,
            state.display(field),
            focus == FormFocus::from(field),
        );
    }

    let submit_area = Rect {
        width: SUBMIT_WIDTH.min(rows[2].width),
        ..rows[2]
    };
    render_button(frame, submit_area, "Submit", focus == FormFocus::Submit);
}
