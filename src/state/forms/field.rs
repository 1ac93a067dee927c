//! Form field identifiers

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown form field `{0}`")]
    UnknownField(String),
}

/// The two keys of the form state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    InputA,
    InputB,
}

impl FieldId {
    pub const ALL: [FieldId; 2] = [FieldId::InputA, FieldId::InputB];

    /// Element id, also used as the state key
    pub fn id(&self) -> &'static str {
        match self {
            FieldId::InputA => "inputA",
            FieldId::InputB => "inputB",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::InputA => "Input A:",
            FieldId::InputB => "Input B:",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FieldId {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inputA" => Ok(FieldId::InputA),
            "inputB" => Ok(FieldId::InputB),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

/// Append a character to a text value, producing the new value
pub fn push_char(value: &str, c: char) -> String {
    let mut next = String::with_capacity(value.len() + c.len_utf8());
    next.push_str(value);
    next.push(c);
    next
}

/// Remove the last character of a text value, producing the new value
pub fn pop_char(value: &str) -> String {
    let mut next = value.to_string();
    next.pop();
    next
}

/// Single-line paste: line breaks become nothing, tabs become spaces
pub fn sanitize_paste(text: &str) -> String {
    text.chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .map(|c| if c == '\t' { ' ' } else { c })
        .collect()
}
