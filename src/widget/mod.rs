//! The "Use State Form" component
//!
//! Two controlled inputs bound to one [`FormState`], a submit handler that
//! reports both values, and lifecycle hooks that write to the console.

mod event;
mod sink;

pub use event::{SubmitEvent, SubmitTrigger};
pub use sink::{Submission, SubmitSink, TracingSink};

#[cfg(test)]
pub use sink::MockSubmitSink;

use crate::runtime::{Component, StateSetter};
use crate::state::{Console, FieldId, FormState};
use tracing::{debug, info};

pub const MSG_DID_UPDATE: &str = "This code gets executed when componentDidUpdate";
pub const MSG_DID_UNMOUNT: &str = "This code gets executed when componentDidUnmount";
pub const MSG_DID_MOUNT: &str = "This code gets executed when componentDidMount";
pub const MSG_DETACHED: &str = "component detached";

pub struct FormWidget {
    console: Console,
    sink: Box<dyn SubmitSink>,
    submissions: u64,
}

impl FormWidget {
    pub fn new(console: Console) -> Self {
        Self::with_sink(console, Box::new(TracingSink))
    }

    pub fn with_sink(console: Console, sink: Box<dyn SubmitSink>) -> Self {
        Self {
            console,
            sink,
            submissions: 0,
        }
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut Console {
        &mut self.console
    }

    /// Hand the console over, e.g. to a fresh instance after a reload
    pub fn take_console(&mut self) -> Console {
        let capacity = self.console.capacity();
        std::mem::replace(&mut self.console, Console::with_capacity(capacity))
    }

    /// Hand the submission sink over; this instance falls back to tracing
    pub fn take_sink(&mut self) -> Box<dyn SubmitSink> {
        std::mem::replace(&mut self.sink, Box::new(TracingSink))
    }

    pub fn submissions(&self) -> u64 {
        self.submissions
    }

    /// Change handler for a text input.
    ///
    /// The update is a function of whatever state is current when the queue
    /// is drained, never of the value this handler last rendered with.
    pub fn on_field_change(
        &mut self,
        setter: &StateSetter<FormState>,
        field: FieldId,
        value: impl Into<String>,
    ) {
        let value = value.into();
        debug!(field = %field, len = value.len(), "field change queued");
        setter.set_with(move |prev| prev.with_field(field, value));
    }

    /// Edit handler for a text input: `edit` maps the field's current text to
    /// its new text, and runs against the latest state when the queue drains.
    pub fn on_field_edit(
        &mut self,
        setter: &StateSetter<FormState>,
        field: FieldId,
        edit: impl FnOnce(&str) -> String + Send + 'static,
    ) {
        debug!(field = %field, "field edit queued");
        setter.set_with(move |prev| prev.with_field(field, edit(prev.display(field))));
    }

    /// Submit handler: keeps the form in place and reports both values
    pub fn on_submit(&mut self, state: &FormState, event: &mut SubmitEvent) {
        event.prevent_default();
        debug!(trigger = ?event.trigger, "form submit");

        let submission = Submission::from(state);
        self.submissions += 1;
        self.console.log(submission.to_string());
        self.sink.report(&submission);
    }
}

impl Component for FormWidget {
    type State = FormState;

    fn on_attach(&mut self, _state: &FormState) {
        self.console.log(MSG_DID_MOUNT);
    }

    fn on_update(&mut self, _state: &FormState) {
        self.console.log(MSG_DID_UPDATE);
    }

    fn on_update_cleanup(&mut self) {
        self.console.log(MSG_DID_UNMOUNT);
    }

    fn on_state_changed(&mut self, _prev: Option<&FormState>, next: &FormState) {
        let json = serde_json::to_string(next).unwrap_or_else(|_| format!("{next:?}"));
        self.console.log(format!("state has changed:  {json}"));
    }

    fn on_detach(&mut self, _state: &FormState) {
        info!(submissions = self.submissions, "form widget detached");
        self.console.info(MSG_DETACHED);
    }
}
