//! Form state record and focus handling

use super::field::FieldId;
use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_A: &str = "Value A";
pub const DEFAULT_INPUT_B: &str = "Value B";

/// The single state value held by the form widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_a: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_b: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            input_a: Some(DEFAULT_INPUT_A.to_string()),
            input_b: Some(DEFAULT_INPUT_B.to_string()),
        }
    }
}

impl FormState {
    pub fn new(input_a: impl Into<String>, input_b: impl Into<String>) -> Self {
        Self {
            input_a: Some(input_a.into()),
            input_b: Some(input_b.into()),
        }
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        match field {
            FieldId::InputA => self.input_a.as_deref(),
            FieldId::InputB => self.input_b.as_deref(),
        }
    }

    /// Text shown by a controlled input: a missing value renders empty
    pub fn display(&self, field: FieldId) -> &str {
        self.get(field).unwrap_or("")
    }

    /// Copy of this state with exactly one field replaced
    pub fn with_field(&self, field: FieldId, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        match field {
            FieldId::InputA => next.input_a = Some(value.into()),
            FieldId::InputB => next.input_b = Some(value.into()),
        }
        next
    }
}

/// Focusable elements of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    InputA,
    InputB,
    Submit,
}

impl FormFocus {
    pub fn next(self) -> Self {
        match self {
            FormFocus::InputA => FormFocus::InputB,
            FormFocus::InputB => FormFocus::Submit,
            FormFocus::Submit => FormFocus::InputA,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormFocus::InputA => FormFocus::Submit,
            FormFocus::InputB => FormFocus::InputA,
            FormFocus::Submit => FormFocus::InputB,
        }
    }

    /// The text field under focus, if any
    pub fn field(self) -> Option<FieldId> {
        match self {
            FormFocus::InputA => Some(FieldId::InputA),
            FormFocus::InputB => Some(FieldId::InputB),
            FormFocus::Submit => None,
        }
    }
}

impl From<FieldId> for FormFocus {
    fn from(field: FieldId) -> Self {
        match field {
            FieldId::InputA => FormFocus::InputA,
            FieldId::InputB => FormFocus::InputB,
        }
    }
}
