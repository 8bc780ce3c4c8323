//! Analysis request lifecycle

use super::{AnalysisOutcome, App};
use crate::client::SentimentClient;
use eframe::egui;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Run one request on the runtime and post the outcome back to the UI.
fn spawn_analysis(
    client: SentimentClient,
    text: String,
    tx: mpsc::UnboundedSender<AnalysisOutcome>,
    ctx: egui::Context,
    runtime: &tokio::runtime::Runtime,
) {
    runtime.spawn(async move {
        let outcome = client.analyze(&text).await;
        if tx.send(outcome).is_err() {
            debug!("UI gone before analysis finished");
        }
        ctx.request_repaint();
    });
}

impl App {
    /// Start an analysis if the form allows it. No-op otherwise.
    pub fn submit(&mut self, ctx: &egui::Context) {
        let Some(text) = self.form.begin_request() else {
            return;
        };

        info!(endpoint = %self.client.endpoint(), "Starting analysis");

        spawn_analysis(
            self.client.clone(),
            text,
            self.outcome_tx.clone(),
            ctx.clone(),
            &self.runtime,
        );
    }

    /// Apply any finished request to the form.
    pub fn poll_analysis(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.form.finish(outcome);
        }
    }
}
