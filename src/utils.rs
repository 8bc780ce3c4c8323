//! Utility functions

use crate::constants::APP_NAME;
use std::path::PathBuf;

/// Get the app data directory (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Format a [0, 1] score as a percentage with one decimal, e.g. 0.87 -> "87.0%".
/// Ties round up (0.0625 -> "6.3%"), not to even.
pub fn format_confidence(score: f64) -> String {
    format!("{:.1}%", (score * 1000.0).round() / 10.0)
}

/// Normalize a user-entered endpoint URL. Empty input falls back to the default.
pub fn normalize_endpoint(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return crate::constants::DEFAULT_ENDPOINT.to_string();
    }
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_has_one_decimal() {
        assert_eq!(format_confidence(0.87), "87.0%");
        assert_eq!(format_confidence(0.9234), "92.3%");
        assert_eq!(format_confidence(1.0), "100.0%");
        assert_eq!(format_confidence(0.0), "0.0%");
    }

    #[test]
    fn confidence_ties_round_up() {
        assert_eq!(format_confidence(0.0625), "6.3%");
        assert_eq!(format_confidence(0.1225), "12.3%");
        assert_eq!(format_confidence(0.8725), "87.3%");
    }

    #[test]
    fn endpoint_normalization() {
        assert_eq!(normalize_endpoint("  "), "http://localhost:5000/");
        assert_eq!(normalize_endpoint("127.0.0.1:8000"), "http://127.0.0.1:8000");
        assert_eq!(normalize_endpoint(" https://api.example.com/ "), "https://api.example.com/");
    }
}
