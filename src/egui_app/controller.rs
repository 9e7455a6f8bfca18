//! Bridges the form state to the prediction invoker.

use crate::config::FormSettings;
use crate::egui_app::state::{ModelInfoView, StatusBarState, UiState};
use crate::egui_app::ui::style::{self, StatusTone};
use crate::egui_app::view_model;
use crate::ml::Classifier;
use crate::passenger::{PassengerInput, PredictionRequest};
use crate::prediction::{Prediction, PredictionInvoker};

/// Maintains form state and runs predictions for the egui UI.
pub struct PredictionController<C> {
    pub ui: UiState,
    invoker: PredictionInvoker<C>,
    defaults: PassengerInput,
}

impl<C: Classifier> PredictionController<C> {
    /// Build a controller around an already-loaded classifier.
    pub fn new(classifier: C, model: ModelInfoView, form: &FormSettings) -> Self {
        let defaults = PassengerInput {
            age: form.default_age,
            fare: form.default_fare,
            ..PassengerInput::default()
        }
        .clamped();
        Self {
            ui: UiState::new(defaults.clone(), model),
            invoker: PredictionInvoker::new(classifier),
            defaults,
        }
    }

    /// Encode the current form, run the classifier, and publish the result.
    ///
    /// Failures clear the result and surface in the status bar.
    pub fn predict(&mut self) -> Option<Prediction> {
        self.ui.form = self.ui.form.clone().clamped();
        let outcome = PredictionRequest::encode(&self.ui.form)
            .map_err(|err| err.to_string())
            .and_then(|request| self.invoker.invoke(&request).map_err(|err| err.to_string()));
        match outcome {
            Ok(prediction) => {
                let view = view_model::prediction_view(&prediction);
                self.set_status(
                    format!("{} (probability {})", prediction.label(), view.probability_text),
                    prediction.label(),
                    view.tone,
                );
                self.ui.result = Some(view);
                Some(prediction)
            }
            Err(err) => {
                tracing::error!("Prediction failed: {err}");
                self.ui.result = None;
                self.set_status(format!("Prediction failed: {err}"), "Error", StatusTone::Error);
                None
            }
        }
    }

    /// Restore the form defaults and clear the last result.
    pub fn reset_form(&mut self) {
        self.ui.form = self.defaults.clone();
        self.ui.result = None;
        self.ui.status = StatusBarState::ready(&self.ui.model);
    }

    pub fn classifier(&self) -> &C {
        self.invoker.classifier()
    }

    fn set_status(&mut self, text: impl Into<String>, badge: &str, tone: StatusTone) {
        self.ui.status.text = text.into();
        self.ui.status.badge_label = badge.to_string();
        self.ui.status.badge_color = style::status_badge_color(tone);
    }
}
