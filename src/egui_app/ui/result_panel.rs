use super::{EguiApp, style};
use crate::ml::Classifier;
use eframe::egui::{RichText, Ui};

impl<C: Classifier> EguiApp<C> {
    pub(super) fn render_result(&self, ui: &mut Ui) {
        let Some(result) = &self.controller.ui.result else {
            return;
        };
        let color = style::status_badge_color(result.tone);
        ui.label(
            RichText::new(format!("🎯 Prediction: {}", result.headline))
                .size(22.0)
                .strong()
                .color(color),
        );
        ui.label(
            RichText::new(format!("📊 Survival Probability: {}", result.probability_text))
                .size(22.0)
                .strong(),
        );
    }
}
