//! Shared state types for the egui UI.

use crate::egui_app::ui::style::{self, StatusTone};
use crate::passenger::PassengerInput;
use egui::Color32;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    /// Values currently entered in the form widgets.
    pub form: PassengerInput,
    /// Last successful prediction, cleared on reset or failure.
    pub result: Option<PredictionView>,
    pub model: ModelInfoView,
    pub status: StatusBarState,
}

impl UiState {
    pub fn new(form: PassengerInput, model: ModelInfoView) -> Self {
        Self {
            form,
            result: None,
            status: StatusBarState::ready(&model),
            model,
        }
    }
}

/// Formatted prediction ready for display.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionView {
    pub survived: bool,
    /// Label with its marker, e.g. `✅ Survived`.
    pub headline: String,
    /// Probability with two decimals.
    pub probability_text: String,
    pub tone: StatusTone,
}

/// Describes the loaded classifier.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelInfoView {
    pub label: String,
    pub path: String,
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    pub fn ready(model: &ModelInfoView) -> Self {
        Self {
            text: format!("Model {} loaded from {}", model.label, model.path),
            badge_label: "Ready".into(),
            badge_color: style::status_badge_color(StatusTone::Idle),
        }
    }
}
