use super::{EguiApp, style};
use crate::config::{CONFIG_FILE_NAME, MODEL_PATH_ENV};
use crate::ml::{Classifier, DEFAULT_MODEL_FILE_NAME};
use eframe::egui::{CollapsingHeader, RichText, Ui};

impl<C: Classifier> EguiApp<C> {
    pub(super) fn render_deployment_guide(&self, ui: &mut Ui) {
        CollapsingHeader::new("📌 Deployment Guide")
            .default_open(false)
            .show(ui, |ui| {
                ui.label("1. Build the application:");
                ui.code("cargo build --release");
                ui.label(format!(
                    "2. Place the trained model artifact ({DEFAULT_MODEL_FILE_NAME}) in the \
                     working directory, point {MODEL_PATH_ENV} at it, or set model.path in \
                     {CONFIG_FILE_NAME}."
                ));
                ui.label("3. Run the app locally:");
                ui.code("cargo run --release");
                ui.label("4. Score a passenger without the UI:");
                ui.code(
                    "cargo run --release --bin titanic-predict -- --model titanic_model.json \
                     --pclass 1 --sex female --age 30 --fare 100 --embarked S",
                );
                ui.add_space(6.0);
                ui.label(
                    RichText::new(format!("Loaded model: {}", self.controller.ui.model.path))
                        .color(style::muted_text()),
                );
            });
    }
}
