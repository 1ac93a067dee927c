//! Application state module

mod app_state;
mod console;
mod forms;
mod ui_area;

pub use app_state::*;
pub use console::*;
pub use forms::*;
pub use ui_area::*;
