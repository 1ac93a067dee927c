//! UI module for rendering the TUI

mod components;
mod console;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let regions = layout::create_layout(frame.area());

    layout::draw_header(frame, regions.header);
    forms::draw_form(frame, regions.form, app);
    console::draw(frame, regions.console, app);
    layout::draw_status_bar(frame, regions.status, app);

    // Error dialog on top of everything
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}
