//! Modal dialogs (loading overlay, settings)

use super::App;
use crate::constants::DEFAULT_ENDPOINT;
use crate::theme;
use eframe::egui;
use egui_phosphor::regular as icons;

impl App {
    /// Blocking overlay shown while a request is in flight. Not dismissable.
    pub(crate) fn render_loading_overlay(&mut self, ctx: &egui::Context) {
        if !self.form.loading {
            return;
        }

        let modal_area = egui::Modal::default_area(egui::Id::new("loading_modal"))
            .default_width(theme::MODAL_WIDTH + theme::SPACING_XL * 2.0);
        egui::Modal::new(egui::Id::new("loading_modal"))
            .area(modal_area)
            .backdrop_color(egui::Color32::from_black_alpha(128))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_min_width(theme::MODAL_WIDTH);
                ui.set_max_width(theme::MODAL_WIDTH);
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new().size(24.0).color(theme::ACCENT));
                    ui.add_space(theme::SPACING_SM);
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new("Loading AI Model")
                                .size(theme::FONT_HEADING)
                                .strong(),
                        );
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(
                                    "Please wait while we initialize the sentiment analysis model...",
                                )
                                .size(theme::FONT_LABEL)
                                .color(theme::TEXT_MUTED),
                            )
                            .wrap(),
                        );
                    });
                });
            });
    }

    pub(crate) fn render_settings_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_settings || self.form.loading {
            return;
        }

        let modal_area = egui::Modal::default_area(egui::Id::new("settings_modal"))
            .default_width(theme::MODAL_WIDTH + theme::SPACING_XL * 2.0);
        let modal = egui::Modal::new(egui::Id::new("settings_modal"))
            .area(modal_area)
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());

        let mut apply = false;
        let mut close = false;
        let modal_response = modal.show(ctx, |ui| {
            ui.set_min_width(theme::MODAL_WIDTH);
            ui.set_max_width(theme::MODAL_WIDTH);

            ui.horizontal(|ui| {
                ui.colored_label(theme::ACCENT, icons::GEAR_SIX);
                ui.strong("Settings");
            });
            ui.add_space(theme::SPACING_MD);
            ui.separator();
            ui.add_space(theme::SPACING_MD);

            ui.label(
                egui::RichText::new("Inference endpoint")
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_MUTED),
            );
            let edit = ui.add(
                egui::TextEdit::singleline(&mut self.endpoint_input)
                    .hint_text(DEFAULT_ENDPOINT)
                    .desired_width(f32::INFINITY),
            );
            if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                apply = true;
            }
            ui.add_space(theme::SPACING_SM);
            if ui
                .add(egui::Button::new(
                    egui::RichText::new("Reset to default")
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                ).frame(false))
                .clicked()
            {
                self.endpoint_input = DEFAULT_ENDPOINT.to_string();
            }

            ui.add_space(theme::SPACING_XL);
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(theme::button_accent(format!("{}  Apply", icons::CHECK), true))
                        .clicked()
                    {
                        apply = true;
                    }
                    ui.add_space(theme::SPACING_MD);
                    if ui.add(theme::button(format!("{}  Cancel", icons::X))).clicked() {
                        close = true;
                    }
                });
            });
        });

        if apply {
            self.apply_endpoint(ctx);
            self.show_settings = false;
        } else if close || modal_response.should_close() {
            self.endpoint_input = self.client.endpoint().to_string();
            self.show_settings = false;
        }
    }
}
