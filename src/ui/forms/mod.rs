//! Form rendering module
//!
//! - `field_renderer`: controlled text input rendering
//! - `use_state_form`: the form itself

mod field_renderer;
mod use_state_form;

pub use use_state_form::draw as draw_form;
