//! Side channel that receives form submissions

use crate::state::FormState;
use serde::Serialize;
use std::fmt;
use tracing::info;

/// Values reported on submit, keyed the way the form logs them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    #[serde(rename = "state.inputA")]
    pub input_a: Option<String>,
    #[serde(rename = "state.inputB")]
    pub input_b: Option<String>,
}

impl Submission {
    #[allow(dead_code)]
    pub fn new(input_a: &str, input_b: &str) -> Self {
        Self {
            input_a: Some(input_a.to_string()),
            input_b: Some(input_b.to_string()),
        }
    }
}

impl From<&FormState> for Submission {
    fn from(state: &FormState) -> Self {
        Self {
            input_a: state.input_a.clone(),
            input_b: state.input_b.clone(),
        }
    }
}

impl fmt::Display for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => write!(f, "{self:?}"),
        }
    }
}

/// Receives each submission. Implementations must not fail.
#[cfg_attr(test, mockall::automock)]
pub trait SubmitSink {
    fn report(&self, submission: &Submission);
}

/// Default sink: one structured tracing event per submission
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl SubmitSink for TracingSink {
    fn report(&self, submission: &Submission) {
        info!(
            input_a = ?submission.input_a,
            input_b = ?submission.input_b,
            "form submitted"
        );
    }
}
