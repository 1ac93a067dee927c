//! Minimal component runtime
//!
//! - `state_cell`: owned state with a queued functional update channel
//! - `host`: drives a component's lifecycle hooks around state commits

mod host;
mod state_cell;

pub use host::{Component, Host, HostError, Phase};
pub use state_cell::{StateCell, StateSetter, Transition};
