//! Submit event passed to the form's submit handler

/// What triggered the submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitTrigger {
    /// Enter pressed while the form has focus
    #[default]
    EnterKey,
    /// Submit shortcut (Ctrl+S)
    Shortcut,
    /// Submit button clicked with the mouse
    Click,
}

/// A form submission as seen by the handler.
///
/// Unless a handler calls [`SubmitEvent::prevent_default`], the front end
/// performs the default action afterwards: reloading the form.
#[derive(Debug, Clone, Default)]
pub struct SubmitEvent {
    pub trigger: SubmitTrigger,
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new(trigger: SubmitTrigger) -> Self {
        Self {
            trigger,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
