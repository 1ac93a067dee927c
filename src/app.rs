//! Application state and core logic

use crate::config::FormConfig;
use crate::platform::PASTE_MODIFIER;
use crate::runtime::Host;
use crate::state::{
    pop_char, push_char, sanitize_paste, AppState, Console, FieldId, FormFocus, UiArea,
};
use crate::widget::{FormWidget, SubmitEvent, SubmitTrigger};
use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::{debug, info, warn};

/// Main application struct
pub struct App {
    /// Front-end state (focus, status, errors)
    pub state: AppState,
    /// The hosted form component
    pub form: Host<FormWidget>,
    config: FormConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create the app and attach a form widget that logs submissions via tracing
    pub fn new(config: FormConfig) -> Result<Self> {
        let console = Console::with_capacity(config.console_capacity_or_default());
        let widget = FormWidget::new(console);
        Self::with_widget(config, widget)
    }

    /// Create the app around a prepared widget
    pub fn with_widget(config: FormConfig, widget: FormWidget) -> Result<Self> {
        let mut form = Host::new(widget, config.initial_state());
        form.attach()?;
        Ok(Self {
            state: AppState::default(),
            form,
            config,
            quit: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Detach the form and stop the loop
    pub fn quit(&mut self) -> Result<()> {
        if self.form.is_attached() {
            self.form.detach()?;
        }
        self.quit = true;
        Ok(())
    }

    /// Apply queued state updates; call before every draw
    pub fn commit(&mut self) -> Result<()> {
        if let Some(transition) = self.form.commit()? {
            debug!(revision = transition.revision, "form state committed");
        }
        Ok(())
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.state.has_error() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let focus = self.state.focus;

        match key.code {
            KeyCode::Char('v') if key.modifiers.contains(PASTE_MODIFIER) => self.paste()?,
            KeyCode::Char('s') if ctrl => self.submit(SubmitTrigger::Shortcut)?,
            KeyCode::Char('u') if ctrl => self.clear_focused()?,
            KeyCode::Char('r') if ctrl => self.form.rerender()?,
            KeyCode::Char('l') if ctrl => self.form.component_mut().console_mut().clear(),
            KeyCode::Tab | KeyCode::Down => self.state.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_focus(),
            KeyCode::Enter => self.submit(SubmitTrigger::EnterKey)?,
            KeyCode::Esc => self.quit()?,
            // Space activates a focused button
            KeyCode::Char(' ') if focus == FormFocus::Submit => {
                self.submit(SubmitTrigger::EnterKey)?
            }
            KeyCode::Char(c) if !ctrl => self.edit_focused(move |value| push_char(value, c))?,
            KeyCode::Backspace => self.edit_focused(pop_char)?,
            _ => {}
        }
        Ok(())
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.has_error() {
            return Ok(());
        }
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(());
        }

        match UiArea::at_row(mouse.row) {
            Some(UiArea::InputA) => self.state.focus = FormFocus::InputA,
            Some(UiArea::InputB) => self.state.focus = FormFocus::InputB,
            Some(UiArea::Submit) => {
                self.state.focus = FormFocus::Submit;
                self.submit(SubmitTrigger::Click)?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Terminal was resized: re-render without a state change
    pub fn handle_resize(&mut self) -> Result<()> {
        self.form.rerender()?;
        Ok(())
    }

    /// Run the change handler for the focused input with an edited value
    fn edit_focused(
        &mut self,
        edit: impl FnOnce(&str) -> String + Send + 'static,
    ) -> Result<()> {
        let Some(field) = self.state.focus.field() else {
            return Ok(());
        };
        self.change_field(field, edit)
    }

    fn clear_focused(&mut self) -> Result<()> {
        let Some(field) = self.state.focus.field() else {
            return Ok(());
        };
        self.form
            .dispatch(|widget, _, setter| widget.on_field_change(setter, field, String::new()))?;
        Ok(())
    }

    fn change_field(
        &mut self,
        field: FieldId,
        edit: impl FnOnce(&str) -> String + Send + 'static,
    ) -> Result<()> {
        // The edit reads the field when the queue drains, not the rendered value
        self.form
            .dispatch(|widget, _, setter| widget.on_field_edit(setter, field, edit))?;
        Ok(())
    }

    fn submit(&mut self, trigger: SubmitTrigger) -> Result<()> {
        let mut event = SubmitEvent::new(trigger);
        self.form
            .dispatch(|widget, state, _| widget.on_submit(state, &mut event))?;

        if event.default_prevented() {
            self.state.set_status("Submitted");
        } else {
            self.reload()?;
        }
        Ok(())
    }

    /// Default submit action: replace the form with a fresh instance
    pub(crate) fn reload(&mut self) -> Result<()> {
        info!("reloading form");
        self.form.detach()?;
        let widget = self.form.component_mut();
        let fresh = FormWidget::with_sink(widget.take_console(), widget.take_sink());

        let mut form = Host::new(fresh, self.config.initial_state());
        form.attach()?;
        self.form = form;

        self.state.focus = FormFocus::default();
        self.state.reloads += 1;
        self.state.set_status("Form reloaded");
        Ok(())
    }

    fn paste(&mut self) -> Result<()> {
        let text = match arboard::Clipboard::new().and_then(|mut c| c.get_text()) {
            Ok(text) => text,
            Err(err) => {
                warn!("clipboard read failed: {err}");
                self.form
                    .component_mut()
                    .console_mut()
                    .warn(format!("clipboard unavailable: {err}"));
                self.state.push_error(format!("Could not read clipboard: {err}"));
                return Ok(());
            }
        };
        self.paste_text(&text)
    }

    /// Insert pasted text at the end of the focused input
    pub(crate) fn paste_text(&mut self, text: &str) -> Result<()> {
        if self.state.focus.field().is_none() {
            return Ok(());
        }
        let pasted = sanitize_paste(text);
        let count = pasted.chars().count();
        self.edit_focused(move |value| format!("{value}{pasted}"))?;
        self.state.set_status(format!("Pasted {count} chars"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormState;
    use crate::widget::{MockSubmitSink, Submission, MSG_DID_MOUNT, MSG_DID_UNMOUNT};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn click(row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 5,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Feed a key and commit, like one loop iteration
    fn press(app: &mut App, event: KeyEvent) {
        app.handle_key(event).unwrap();
        app.commit().unwrap();
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, key(KeyCode::Char(c)));
        }
    }

    fn test_app() -> App {
        App::new(FormConfig::default()).unwrap()
    }

    mod typing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_initial_state() {
            let app = test_app();
            assert_eq!(app.form.state(), &FormState::default());
            assert_eq!(app.state.focus, FormFocus::InputA);
            assert!(!app.should_quit());
        }

        #[test]
        fn test_replace_input_a() {
            let mut app = test_app();
            press(&mut app, ctrl('u'));
            type_str(&mut app, "X");
            assert_eq!(app.form.state(), &FormState::new("X", "Value B"));
        }

        #[test]
        fn test_typing_appends_to_focused_input_only() {
            let mut app = test_app();
            press(&mut app, key(KeyCode::Tab));
            type_str(&mut app, "!?");
            assert_eq!(app.form.state(), &FormState::new("Value A", "Value B!?"));
        }

        #[test]
        fn test_backspace_removes_last_char() {
            let mut app = test_app();
            press(&mut app, key(KeyCode::Backspace));
            press(&mut app, key(KeyCode::Backspace));
            assert_eq!(app.form.state(), &FormState::new("Value", "Value B"));
        }

        #[test]
        fn test_clear_b_to_empty() {
            let mut app = test_app();
            press(&mut app, key(KeyCode::Down));
            press(&mut app, ctrl('u'));
            assert_eq!(app.form.state(), &FormState::new("Value A", ""));
        }

        #[test]
        fn test_typing_on_submit_does_nothing() {
            let mut app = test_app();
            app.state.focus = FormFocus::Submit;
            type_str(&mut app, "abc");
            assert_eq!(app.form.state(), &FormState::default());
        }

        #[test]
        fn test_uncommitted_keys_still_merge() {
            // Two handlers run before a commit: both edits survive
            let mut app = test_app();
            app.handle_key(ctrl('u')).unwrap();
            app.state.focus = FormFocus::InputB;
            app.handle_key(ctrl('u')).unwrap();
            app.commit().unwrap();
            assert_eq!(app.form.state(), &FormState::new("", ""));
        }

        #[test]
        fn test_uncommitted_keys_to_same_field_all_land() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('x'))).unwrap();
            app.handle_key(key(KeyCode::Char('y'))).unwrap();
            app.handle_key(key(KeyCode::Backspace)).unwrap();
            app.handle_key(key(KeyCode::Char('z'))).unwrap();
            app.commit().unwrap();
            assert_eq!(app.form.state(), &FormState::new("Value Axz", "Value B"));
            assert_eq!(app.form.revision(), 1);
        }

        #[test]
        fn test_paste_text_strips_newlines() {
            let mut app = test_app();
            app.paste_text(" one\ntwo").unwrap();
            app.commit().unwrap();
            assert_eq!(app.form.state(), &FormState::new("Value A onetwo", "Value B"));
            assert_eq!(app.state.status_message.as_deref(), Some("Pasted 7 chars"));
        }

        #[test]
        fn test_paste_on_submit_ignored() {
            let mut app = test_app();
            app.state.focus = FormFocus::Submit;
            app.paste_text("zzz").unwrap();
            app.commit().unwrap();
            assert_eq!(app.form.state(), &FormState::default());
            assert!(app.state.status_message.is_none());
        }
    }

    mod submitting {
        use super::*;
        use pretty_assertions::assert_eq;

        fn app_expecting(expected: Submission, times: usize) -> App {
            let mut sink = MockSubmitSink::new();
            sink.expect_report()
                .withf(move |s| *s == expected)
                .times(times)
                .return_const(());
            let widget = FormWidget::with_sink(Console::default(), Box::new(sink));
            App::with_widget(FormConfig::default(), widget).unwrap()
        }

        #[test]
        fn test_enter_submits_edited_values() {
            let mut app = app_expecting(Submission::new("X", "Value B"), 1);
            press(&mut app, ctrl('u'));
            type_str(&mut app, "X");
            press(&mut app, key(KeyCode::Enter));
            assert_eq!(app.state.status_message.as_deref(), Some("Submitted"));
            assert_eq!(app.state.reloads, 0);
        }

        #[test]
        fn test_shortcut_submits_empty_b() {
            let mut app = app_expecting(Submission::new("Value A", ""), 1);
            press(&mut app, key(KeyCode::Tab));
            press(&mut app, ctrl('u'));
            press(&mut app, ctrl('s'));
        }

        #[test]
        fn test_space_on_submit_button() {
            let mut app = app_expecting(Submission::new("Value A", "Value B"), 1);
            app.state.focus = FormFocus::Submit;
            press(&mut app, key(KeyCode::Char(' ')));
        }

        #[test]
        fn test_click_submit_button() {
            let mut app = app_expecting(Submission::new("Value A", "Value B"), 1);
            app.handle_mouse(click(UiArea::Submit.start_y() + 1)).unwrap();
            assert_eq!(app.state.focus, FormFocus::Submit);
        }

        #[test]
        fn test_reload_keeps_injected_sink() {
            let mut app = app_expecting(Submission::new("Value A", "Value B"), 1);
            app.reload().unwrap();
            press(&mut app, key(KeyCode::Enter));
            assert_eq!(app.state.reloads, 1);
        }

        #[test]
        fn test_submit_keeps_state() {
            let mut app = app_expecting(Submission::new("Value A", "Value B"), 2);
            press(&mut app, key(KeyCode::Enter));
            press(&mut app, key(KeyCode::Enter));
            assert_eq!(app.form.state(), &FormState::default());
        }
    }

    mod lifecycle {
        use super::*;
        use pretty_assertions::assert_eq;

        fn count(app: &App, message: &str) -> usize {
            app.form
                .component()
                .console()
                .messages()
                .iter()
                .filter(|m| **m == message)
                .count()
        }

        #[test]
        fn test_resize_rerenders_without_state_change() {
            let mut app = test_app();
            let renders = app.form.renders();
            app.handle_resize().unwrap();
            assert_eq!(app.form.renders(), renders + 1);
            assert_eq!(count(&app, MSG_DID_UNMOUNT), 1);
            let changes = app
                .form
                .component()
                .console()
                .messages()
                .iter()
                .filter(|m| m.starts_with("state has changed"))
                .count();
            assert_eq!(changes, 1);
        }

        #[test]
        fn test_ctrl_r_rerenders() {
            let mut app = test_app();
            press(&mut app, ctrl('r'));
            assert_eq!(app.form.renders(), 2);
        }

        #[test]
        fn test_ctrl_l_clears_console() {
            let mut app = test_app();
            press(&mut app, ctrl('l'));
            assert!(app.form.component().console().is_empty());
        }

        #[test]
        fn test_escape_detaches_and_quits() {
            let mut app = test_app();
            press_no_commit(&mut app, key(KeyCode::Esc));
            assert!(app.should_quit());
            assert!(!app.form.is_attached());
            assert_eq!(count(&app, MSG_DID_UNMOUNT), 1);
        }

        #[test]
        fn test_quit_twice_is_harmless() {
            let mut app = test_app();
            app.quit().unwrap();
            app.quit().unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_reload_remounts_with_initial_state() {
            let mut app = test_app();
            press(&mut app, ctrl('u'));
            app.state.focus = FormFocus::Submit;
            app.reload().unwrap();

            assert_eq!(app.form.state(), &FormState::default());
            assert_eq!(app.state.focus, FormFocus::InputA);
            assert_eq!(app.state.reloads, 1);
            // Console survives the reload; each instance mounted once
            assert_eq!(count(&app, MSG_DID_MOUNT), 2);
        }

        fn press_no_commit(app: &mut App, event: KeyEvent) {
            app.handle_key(event).unwrap();
        }
    }

    mod focus_and_errors {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_click_focuses_inputs() {
            let mut app = test_app();
            app.handle_mouse(click(UiArea::InputB.start_y())).unwrap();
            assert_eq!(app.state.focus, FormFocus::InputB);
            app.handle_mouse(click(UiArea::InputA.start_y() + 2)).unwrap();
            assert_eq!(app.state.focus, FormFocus::InputA);
        }

        #[test]
        fn test_non_left_clicks_ignored() {
            let mut app = test_app();
            let mut event = click(UiArea::InputB.start_y());
            event.kind = MouseEventKind::Moved;
            app.handle_mouse(event).unwrap();
            assert_eq!(app.state.focus, FormFocus::InputA);
        }

        #[test]
        fn test_backtab_and_up_move_back() {
            let mut app = test_app();
            press(&mut app, key(KeyCode::BackTab));
            assert_eq!(app.state.focus, FormFocus::Submit);
            press(&mut app, key(KeyCode::Up));
            assert_eq!(app.state.focus, FormFocus::InputB);
        }

        #[test]
        fn test_error_dialog_swallows_keys_until_dismissed() {
            let mut app = test_app();
            app.state.push_error("boom");
            press(&mut app, key(KeyCode::Char('z')));
            assert_eq!(app.form.state(), &FormState::default());

            press(&mut app, key(KeyCode::Esc));
            assert!(!app.state.has_error());
            assert!(!app.should_quit());
        }
    }
}
