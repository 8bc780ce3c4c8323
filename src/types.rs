//! Common types and data structures

use serde::Deserialize;

/// Label the endpoint uses for positive text
pub const LABEL_POSITIVE: &str = "POSITIVE";

/// Response body from the inference endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SentimentResult {
    pub label: String,
    /// Confidence in [0, 1]. Older servers only send the label.
    #[serde(default)]
    pub score: Option<f64>,
}

impl SentimentResult {
    pub fn sentiment(&self) -> Sentiment {
        Sentiment::from_label(&self.label)
    }

    /// Score clamped to [0, 1] for bar rendering
    pub fn fraction(&self) -> Option<f32> {
        self.score
            .filter(|s| s.is_finite())
            .map(|s| s.clamp(0.0, 1.0) as f32)
    }
}

/// Polarity used for styling. Anything that isn't exactly POSITIVE is negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    pub fn from_label(label: &str) -> Self {
        if label == LABEL_POSITIVE {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }
}

/// Reachability of the configured endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndpointStatus {
    #[default]
    Unknown,
    Checking,
    Online,
    Offline,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_positive_label_is_positive() {
        assert_eq!(Sentiment::from_label("POSITIVE"), Sentiment::Positive);
        assert_eq!(Sentiment::from_label("NEGATIVE"), Sentiment::Negative);
        assert_eq!(Sentiment::from_label("positive"), Sentiment::Negative);
        assert_eq!(Sentiment::from_label(""), Sentiment::Negative);
    }

    #[test]
    fn missing_score_deserializes_as_none() {
        let r: SentimentResult = serde_json::from_str(r#"{"label":"NEGATIVE"}"#).unwrap();
        assert_eq!(r.label, "NEGATIVE");
        assert_eq!(r.score, None);
        assert_eq!(r.fraction(), None);
    }

    #[test]
    fn fraction_is_clamped() {
        let r = SentimentResult { label: "POSITIVE".into(), score: Some(1.4) };
        assert_eq!(r.fraction(), Some(1.0));
        let r = SentimentResult { label: "POSITIVE".into(), score: Some(-0.2) };
        assert_eq!(r.fraction(), Some(0.0));
        let r = SentimentResult { label: "POSITIVE".into(), score: Some(f64::NAN) };
        assert_eq!(r.fraction(), None);
    }
}
