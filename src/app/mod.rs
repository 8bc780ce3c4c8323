//! App module - contains the main application state and logic

mod analysis;
mod health;
mod modals;
mod views;

use self::health::ProbeResult;
use crate::client::{AnalyzeError, SentimentClient};
use crate::form::FormState;
use crate::settings::Settings;
use crate::theme;
use crate::types::*;
use eframe::egui;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Outcome of one analysis request, sent from the runtime back to the UI thread
pub(crate) type AnalysisOutcome = Result<SentimentResult, AnalyzeError>;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) form: FormState,
    pub(crate) focus_input: bool,
    // Network
    pub(crate) client: SentimentClient,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) outcome_tx: mpsc::UnboundedSender<AnalysisOutcome>,
    pub(crate) outcome_rx: mpsc::UnboundedReceiver<AnalysisOutcome>,
    // Endpoint status
    pub(crate) endpoint_status: EndpointStatus,
    pub(crate) probe_started: bool,
    pub(crate) probe_tx: mpsc::UnboundedSender<ProbeResult>,
    pub(crate) probe_rx: mpsc::UnboundedReceiver<ProbeResult>,
    // Settings dialog
    pub(crate) show_settings: bool,
    pub(crate) endpoint_input: String,
    // Window
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let client = SentimentClient::new(settings.endpoint.clone())?;
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let (probe_tx, probe_rx) = mpsc::unbounded_channel();

        Ok(Self {
            form: FormState::default(),
            focus_input: true,
            client,
            runtime,
            outcome_tx,
            outcome_rx,
            endpoint_status: EndpointStatus::Unknown,
            probe_started: false,
            probe_tx,
            probe_rx,
            show_settings: false,
            endpoint_input: settings.endpoint,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        })
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            endpoint: self.client.endpoint().to_string(),
        };
        settings.save(&self.data_dir);
    }
}
