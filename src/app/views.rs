//! View rendering (header, input card, result panel, examples)

use super::App;
use crate::constants::EXAMPLE_REVIEWS;
use crate::theme;
use crate::ui::components::{confidence_bar, sentiment_badge, status_indicator, ResultView};
use eframe::egui;
use egui_phosphor::regular as icons;

impl App {
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(theme::SPACING_XL);
            ui.label(
                egui::RichText::new(format!("{}  Sentiment Analyzer", icons::SPARKLE))
                    .size(theme::FONT_DISPLAY)
                    .strong()
                    .color(theme::ACCENT),
            );
            ui.add_space(theme::SPACING_SM);
            ui.label(
                egui::RichText::new(
                    "Analyze the sentiment of reviews and text using AI-powered machine learning",
                )
                .size(theme::FONT_BODY)
                .color(theme::TEXT_MUTED),
            );
        });

        ui.add_space(theme::SPACING_MD);
        ui.horizontal(|ui| {
            status_indicator(ui, self.endpoint_status)
                .on_hover_text(self.client.endpoint());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let gear = ui.add_enabled(
                    !self.form.loading,
                    egui::Button::new(egui::RichText::new(icons::GEAR_SIX).size(theme::FONT_HEADING))
                        .frame(false),
                );
                if gear.on_hover_text("Settings").clicked() {
                    self.endpoint_input = self.client.endpoint().to_string();
                    self.show_settings = true;
                }
            });
        });
        ui.add_space(theme::SPACING_MD);
    }

    pub(crate) fn render_input_card(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        theme::card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(icons::SPARKLE)
                        .size(theme::FONT_TITLE)
                        .color(theme::ACCENT),
                );
                ui.label(egui::RichText::new("Text Analysis").size(theme::FONT_TITLE).strong());
            });
            ui.label(
                egui::RichText::new("Enter a review or any text to analyze its sentiment")
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_MUTED),
            );
            ui.add_space(theme::SPACING_LG);

            // Ctrl/Cmd+Enter submits; consume it before the TextEdit turns it into a newline
            let input_id = ui.make_persistent_id("review_input");
            let input_focused = ui.memory(|m| m.has_focus(input_id));
            let shortcut = input_focused
                && ui.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Enter));

            let response = ui.add(
                egui::TextEdit::multiline(&mut self.form.text)
                    .id(input_id)
                    .hint_text("Enter your review or text here...")
                    .desired_rows(theme::INPUT_ROWS)
                    .desired_width(f32::INFINITY)
                    .interactive(!self.form.loading),
            );
            if self.focus_input {
                self.focus_input = false;
                response.request_focus();
            }

            ui.add_space(theme::SPACING_LG);

            let mut submit = shortcut;
            let mut clear = false;
            ui.horizontal(|ui| {
                let enabled = self.form.can_submit();
                let label = if self.form.loading {
                    "Analyzing...".to_string()
                } else {
                    "Analyze Sentiment".to_string()
                };
                let analyze = ui.add_enabled(enabled, theme::button_accent(label, enabled));
                if self.form.loading {
                    ui.spinner();
                }
                if analyze.clicked() {
                    submit = true;
                }
                if ui
                    .add(theme::button(format!("{}  Clear", icons::ERASER)))
                    .clicked()
                {
                    clear = true;
                }
            });

            if clear {
                self.form.clear();
                self.focus_input = true;
            }
            if submit {
                self.submit(ctx);
            }

            if let Some(result) = &self.form.result {
                ui.add_space(theme::SPACING_XL);
                render_result(ui, &ResultView::new(result));
            }
        });
    }

    pub(crate) fn render_examples_card(&mut self, ui: &mut egui::Ui) {
        theme::card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(egui::RichText::new("Try These Examples").size(theme::FONT_TITLE).strong());
            ui.label(
                egui::RichText::new("Click on any example below to test the sentiment analyzer")
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_MUTED),
            );
            ui.add_space(theme::SPACING_LG);

            for example in EXAMPLE_REVIEWS {
                if example_row(ui, example, !self.form.loading).clicked() {
                    self.form.select_example(example);
                    self.focus_input = true;
                }
                ui.add_space(theme::SPACING_SM);
            }
        });
    }
}

fn render_result(ui: &mut egui::Ui, view: &ResultView) {
    theme::section_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(
            egui::RichText::new("Analysis Result:")
                .size(theme::FONT_HEADING)
                .strong()
                .color(theme::TEXT_SECONDARY),
        );
        ui.add_space(theme::SPACING_MD);
        ui.horizontal(|ui| {
            sentiment_badge(ui, view);
            if let Some(confidence) = &view.confidence {
                ui.add_space(theme::SPACING_SM);
                ui.label(egui::RichText::new(confidence).color(theme::TEXT_MUTED));
            }
            if let Some(fraction) = view.fraction {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    confidence_bar(ui, fraction, view.bar_fill);
                });
            }
        });
    });
}

/// Full-width clickable row showing a quoted example
fn example_row(ui: &mut egui::Ui, text: &str, enabled: bool) -> egui::Response {
    let width = ui.available_width();
    let wrap_width = width - theme::SPACING_LG * 2.0;
    let galley = ui.painter().layout(
        format!("\u{201c}{}\u{201d}", text),
        egui::FontId::proportional(theme::FONT_BODY),
        egui::Color32::PLACEHOLDER,
        wrap_width,
    );
    let height = galley.size().y + theme::SPACING_LG * 2.0;
    let sense = if enabled { egui::Sense::click() } else { egui::Sense::hover() };
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, height), sense);

    if ui.is_rect_visible(rect) {
        let hovered = enabled && response.hovered();
        let fill = if enabled {
            theme::row_fill(&response, theme::BG_INPUT)
        } else {
            theme::BG_INPUT
        };
        let stroke_color = if hovered { theme::ACCENT_MUTED } else { theme::BORDER_SUBTLE };
        let painter = ui.painter();
        painter.rect(
            rect,
            theme::RADIUS_MEDIUM,
            fill,
            egui::Stroke::new(theme::STROKE_DEFAULT, stroke_color),
            egui::StrokeKind::Inside,
        );
        let text_color = if hovered { theme::TEXT_PRIMARY } else { theme::TEXT_SECONDARY };
        painter.galley(
            rect.min + egui::vec2(theme::SPACING_LG, theme::SPACING_LG),
            galley,
            text_color,
        );
    }
    if enabled && response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    response
}
