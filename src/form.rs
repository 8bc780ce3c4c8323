//! Form state: input text, last result, in-flight flag

use crate::client::AnalyzeError;
use crate::types::SentimentResult;
use tracing::{error, info};

#[derive(Debug, Default)]
pub struct FormState {
    pub text: String,
    pub result: Option<SentimentResult>,
    pub loading: bool,
}

impl FormState {
    /// Submit is allowed for non-blank text with no request in flight.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.text.trim().is_empty()
    }

    /// Enter the loading state and hand back the text to send.
    /// Returns `None` without touching state when submit isn't allowed.
    pub fn begin_request(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.loading = true;
        self.result = None;
        Some(self.text.clone())
    }

    /// Apply the outcome of the in-flight request. Errors are logged and dropped.
    pub fn finish(&mut self, outcome: Result<SentimentResult, AnalyzeError>) {
        self.loading = false;
        match outcome {
            Ok(result) => {
                info!(label = %result.label, score = ?result.score, "Analysis complete");
                self.result = Some(result);
            }
            Err(e) => {
                error!(error = %e, "Error analyzing sentiment");
            }
        }
    }

    pub fn select_example(&mut self, example: &str) {
        self.text = example.to_string();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.result = None;
    }
}
