//! Form domain layer
//!
//! Type-safe field identifiers and the state record behind the form.

mod field;
mod form_state;

pub use field::{pop_char, push_char, sanitize_paste, FieldId};
pub use form_state::{FormFocus, FormState, DEFAULT_INPUT_A, DEFAULT_INPUT_B};
