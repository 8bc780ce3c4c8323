//! Reusable UI components
//!
//! Standalone widgets for the result panel and the header. The text and
//! colors they draw come from `ResultView`, which is plain data so it can
//! be checked without a running UI.

use crate::theme;
use crate::types::{EndpointStatus, Sentiment, SentimentResult};
use crate::utils::format_confidence;
use eframe::egui;

/// Everything the result panel needs to draw one analysis result
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub label: String,
    pub icon: &'static str,
    pub confidence: Option<String>,
    pub fraction: Option<f32>,
    pub badge_bg: egui::Color32,
    pub badge_text: egui::Color32,
    pub badge_border: egui::Color32,
    pub bar_fill: egui::Color32,
}

impl ResultView {
    pub fn new(result: &SentimentResult) -> Self {
        let sentiment = result.sentiment();
        let (badge_bg, badge_text, badge_border) = theme::sentiment_colors(sentiment);
        let icon = match sentiment {
            Sentiment::Positive => egui_phosphor::regular::THUMBS_UP,
            Sentiment::Negative => egui_phosphor::regular::THUMBS_DOWN,
        };
        Self {
            label: result.label.clone(),
            icon,
            confidence: result
                .score
                .filter(|s| s.is_finite())
                .map(|s| format!("Confidence: {}", format_confidence(s))),
            fraction: result.fraction(),
            badge_bg,
            badge_text,
            badge_border,
            bar_fill: theme::sentiment_fill(sentiment),
        }
    }
}

/// Pill-shaped badge with icon and label
pub fn sentiment_badge(ui: &mut egui::Ui, view: &ResultView) -> egui::Response {
    egui::Frame::new()
        .fill(view.badge_bg)
        .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, view.badge_border))
        .corner_radius(theme::RADIUS_MEDIUM)
        .inner_margin(egui::Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.x = theme::SPACING_SM;
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(view.icon)
                        .size(theme::FONT_BODY)
                        .color(view.badge_text),
                );
                ui.label(
                    egui::RichText::new(&view.label)
                        .size(theme::FONT_LABEL)
                        .strong()
                        .color(view.badge_text),
                );
            });
        })
        .response
}

/// Horizontal bar filled to `fraction` of its width
pub fn confidence_bar(ui: &mut egui::Ui, fraction: f32, fill: egui::Color32) -> egui::Response {
    let size = egui::vec2(theme::CONFIDENCE_BAR_WIDTH, theme::CONFIDENCE_BAR_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let rounding = theme::CONFIDENCE_BAR_HEIGHT / 2.0;
        painter.rect_filled(rect, rounding, theme::BAR_TRACK);

        // Ease toward the target width
        let animated = ui
            .ctx()
            .animate_value_with_time(response.id, fraction.clamp(0.0, 1.0), 0.5);
        if animated > 0.0 {
            let mut filled = rect;
            filled.set_width(rect.width() * animated);
            painter.rect_filled(filled, rounding, fill);
        }
    }

    response.on_hover_text(format_confidence(fraction as f64))
}

/// Colored dot plus short text for the endpoint status
pub fn status_indicator(ui: &mut egui::Ui, status: EndpointStatus) -> egui::Response {
    let (color, text) = status_style(status);
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = theme::SPACING_SM + 2.0;
        let d = theme::STATUS_DOT_RADIUS * 2.0;
        let (rect, _) = ui.allocate_exact_size(egui::vec2(d, d), egui::Sense::hover());
        ui.painter()
            .circle_filled(rect.center(), theme::STATUS_DOT_RADIUS, color);
        ui.label(
            egui::RichText::new(text)
                .size(theme::FONT_SMALL)
                .color(theme::TEXT_MUTED),
        );
    })
    .response
}

pub fn status_style(status: EndpointStatus) -> (egui::Color32, &'static str) {
    match status {
        EndpointStatus::Unknown => (theme::TEXT_DIM, "Not checked"),
        EndpointStatus::Checking => (theme::STATUS_WARNING, "Checking..."),
        EndpointStatus::Online => (theme::STATUS_SUCCESS, "Online"),
        EndpointStatus::Offline => (theme::STATUS_ERROR, "Offline"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_result_renders_percentage_and_green_badge() {
        let view = ResultView::new(&SentimentResult {
            label: "POSITIVE".into(),
            score: Some(0.87),
        });
        assert_eq!(view.label, "POSITIVE");
        assert_eq!(view.icon, egui_phosphor::regular::THUMBS_UP);
        assert_eq!(view.confidence.as_deref(), Some("Confidence: 87.0%"));
        assert_eq!(view.bar_fill, theme::POSITIVE);
        assert!((view.fraction.unwrap() - 0.87).abs() < 1e-6);
    }

    #[test]
    fn negative_result_uses_negative_styling() {
        let view = ResultView::new(&SentimentResult {
            label: "NEGATIVE".into(),
            score: Some(0.64),
        });
        let (bg, text, border) = theme::sentiment_colors(Sentiment::Negative);
        assert_eq!(view.icon, egui_phosphor::regular::THUMBS_DOWN);
        assert_eq!((view.badge_bg, view.badge_text, view.badge_border), (bg, text, border));
        assert_eq!(view.bar_fill, theme::NEGATIVE);
        assert_eq!(view.confidence.as_deref(), Some("Confidence: 64.0%"));
    }

    #[test]
    fn label_without_score_has_no_confidence() {
        let view = ResultView::new(&SentimentResult { label: "POSITIVE".into(), score: None });
        assert_eq!(view.confidence, None);
        assert_eq!(view.fraction, None);
    }

    #[test]
    fn each_status_has_distinct_text() {
        let texts: Vec<_> = [
            EndpointStatus::Unknown,
            EndpointStatus::Checking,
            EndpointStatus::Online,
            EndpointStatus::Offline,
        ]
        .into_iter()
        .map(|s| status_style(s).1)
        .collect();
        assert_eq!(texts, ["Not checked", "Checking...", "Online", "Offline"]);
    }
}
