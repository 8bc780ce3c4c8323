//! Application constants and configuration

pub const APP_NAME: &str = "Sentiment Analyzer";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/";

/// How long the reachability check waits before reporting the endpoint offline
pub const PROBE_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

/// Sample reviews offered under the input card
pub const EXAMPLE_REVIEWS: [&str; 5] = [
    "This product is absolutely amazing! I love it so much.",
    "Terrible quality, completely disappointed with my purchase.",
    "The service was okay, nothing special but not bad either.",
    "Outstanding customer support and fast delivery. Highly recommended!",
    "Waste of money. The product broke after just one day.",
];
