//! Endpoint reachability probe

use super::App;
use crate::client::SentimentClient;
use crate::types::EndpointStatus;
use crate::utils::normalize_endpoint;
use eframe::egui;
use tracing::{debug, info, warn};

/// Result of one reachability check, tagged with the endpoint it was taken against
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ProbeResult {
    pub endpoint: String,
    pub online: bool,
}

/// Fold finished checks into the current status. Results for any endpoint other
/// than `current` are stale and dropped.
pub(crate) fn apply_probe_results(
    status: EndpointStatus,
    current: &str,
    results: impl IntoIterator<Item = ProbeResult>,
) -> EndpointStatus {
    results
        .into_iter()
        .filter(|r| r.endpoint == current)
        .fold(status, |_, r| {
            if r.online {
                EndpointStatus::Online
            } else {
                EndpointStatus::Offline
            }
        })
}

/// Normalized endpoint to switch to, or `None` when it matches the current one.
pub(crate) fn endpoint_change(input: &str, current: &str) -> Option<String> {
    let endpoint = normalize_endpoint(input);
    (endpoint != current).then_some(endpoint)
}

impl App {
    /// Probe the endpoint in the background. The result comes back over
    /// `probe_rx`, one message per probe.
    pub fn check_endpoint(&mut self, ctx: &egui::Context) {
        self.endpoint_status = EndpointStatus::Checking;

        let client = self.client.clone();
        let tx = self.probe_tx.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let online = match client.probe().await {
                Ok(()) => {
                    info!(endpoint = %client.endpoint(), "Endpoint reachable");
                    true
                }
                Err(e) => {
                    warn!(endpoint = %client.endpoint(), error = %e, "Endpoint unreachable");
                    false
                }
            };
            let result = ProbeResult { endpoint: client.endpoint().to_string(), online };
            if tx.send(result).is_err() {
                debug!("UI gone before probe finished");
            }
            ctx.request_repaint();
        });
    }

    pub fn poll_endpoint_status(&mut self) {
        let mut finished = Vec::new();
        while let Ok(result) = self.probe_rx.try_recv() {
            finished.push(result);
        }
        self.endpoint_status =
            apply_probe_results(self.endpoint_status, self.client.endpoint(), finished);
    }

    /// Swap to a new endpoint, re-probe it and persist the choice.
    pub fn apply_endpoint(&mut self, ctx: &egui::Context) {
        let Some(endpoint) = endpoint_change(&self.endpoint_input, self.client.endpoint()) else {
            self.endpoint_input = self.client.endpoint().to_string();
            return;
        };
        self.endpoint_input = endpoint.clone();

        match SentimentClient::new(endpoint.clone()) {
            Ok(client) => {
                info!(endpoint = %endpoint, "Endpoint changed");
                self.client = client;
                self.check_endpoint(ctx);
                self.save_settings();
            }
            Err(e) => {
                warn!(endpoint = %endpoint, error = %e, "Failed to build client for endpoint");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(endpoint: &str, online: bool) -> ProbeResult {
        ProbeResult { endpoint: endpoint.into(), online }
    }

    #[test]
    fn stale_result_arriving_last_does_not_mask_fresh_one() {
        let status = apply_probe_results(
            EndpointStatus::Checking,
            "http://b/",
            [result("http://b/", true), result("http://a/", false)],
        );
        assert_eq!(status, EndpointStatus::Online);
    }

    #[test]
    fn only_stale_results_leave_status_alone() {
        let status =
            apply_probe_results(EndpointStatus::Checking, "http://b/", [result("http://a/", true)]);
        assert_eq!(status, EndpointStatus::Checking);
    }

    #[test]
    fn latest_result_for_current_endpoint_wins() {
        let status = apply_probe_results(
            EndpointStatus::Checking,
            "http://b/",
            [result("http://b/", true), result("http://b/", false)],
        );
        assert_eq!(status, EndpointStatus::Offline);
    }

    #[test]
    fn results_delivered_over_channel_in_any_order() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        tx.send(result("http://b/", false)).unwrap();
        tx.send(result("http://a/", true)).unwrap();
        drop(tx);

        let mut finished = Vec::new();
        while let Ok(r) = rx.try_recv() {
            finished.push(r);
        }
        let status = apply_probe_results(EndpointStatus::Checking, "http://b/", finished);
        assert_eq!(status, EndpointStatus::Offline);
    }

    #[test]
    fn endpoint_change_normalizes_and_skips_same_endpoint() {
        assert_eq!(
            endpoint_change("127.0.0.1:8000", "http://localhost:5000/"),
            Some("http://127.0.0.1:8000".to_string())
        );
        assert_eq!(endpoint_change(" http://localhost:5000/ ", "http://localhost:5000/"), None);
        assert_eq!(endpoint_change("", "http://localhost:5000/"), None);
        assert_eq!(
            endpoint_change("", "http://127.0.0.1:8000"),
            Some("http://localhost:5000/".to_string())
        );
    }
}
