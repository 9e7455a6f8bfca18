//! egui renderer for the prediction form.

mod deployment_guide;
mod form_panel;
mod result_panel;
pub mod style;

use crate::egui_app::controller::PredictionController;
use crate::ml::{Classifier, SurvivalModel};
use eframe::egui::{self, Frame, Margin, RichText, Vec2};

/// Smallest window size that fits the form without clipping.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(560.0, 640.0);

/// Renders the form and result using the shared controller state.
pub struct EguiApp<C = SurvivalModel> {
    controller: PredictionController<C>,
    visuals_set: bool,
}

impl<C: Classifier> EguiApp<C> {
    pub fn new(controller: PredictionController<C>) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        ui.heading(RichText::new("🚢 Titanic Survival Prediction").size(26.0));
        ui.label(
            RichText::new("Enter passenger details to predict survival probability.")
                .color(style::muted_text()),
        );
    }

    fn render_status(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::new().fill(style::palette().bg_primary).inner_margin(Margin::same(4)))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.painter().circle_filled(
                        ui.cursor().min + egui::vec2(6.0, 9.0),
                        6.0,
                        status.badge_color,
                    );
                    ui.add_space(16.0);
                    ui.label(RichText::new(&status.badge_label).strong());
                    ui.separator();
                    ui.label(&status.text);
                });
            });
    }
}

impl<C: Classifier> eframe::App for EguiApp<C> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_header(ui);
                ui.add_space(12.0);
                self.render_form(ui);
                ui.add_space(12.0);
                self.render_result(ui);
                ui.add_space(20.0);
                ui.separator();
                self.render_deployment_guide(ui);
            });
        });
    }
}
