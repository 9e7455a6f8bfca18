//! Helpers to convert domain data into egui-facing view structs.

use std::path::Path;

use crate::egui_app::state::{ModelInfoView, PredictionView};
use crate::egui_app::ui::style::StatusTone;
use crate::ml::SurvivalModel;
use crate::passenger::{Embarked, PassengerClass};
use crate::prediction::Prediction;

/// Convert a prediction into the result panel view.
pub fn prediction_view(prediction: &Prediction) -> PredictionView {
    let (marker, tone) = if prediction.survived {
        ("✅", StatusTone::Success)
    } else {
        ("❌", StatusTone::Warning)
    };
    PredictionView {
        survived: prediction.survived,
        headline: format!("{marker} {}", prediction.label()),
        probability_text: prediction.probability_text(),
        tone,
    }
}

/// Describe a loaded model for the status bar.
pub fn model_info(model: &SurvivalModel, path: &Path) -> ModelInfoView {
    let kind = model.estimator.kind();
    let label = if model.display_id() == kind {
        kind.to_string()
    } else {
        format!("{} ({kind})", model.display_id())
    };
    ModelInfoView {
        label,
        path: path.display().to_string(),
    }
}

pub fn pclass_choice_label(pclass: PassengerClass) -> String {
    let ordinal = match pclass {
        PassengerClass::First => "1st",
        PassengerClass::Second => "2nd",
        PassengerClass::Third => "3rd",
    };
    format!("{} ({ordinal})", pclass.code())
}

pub fn embarked_choice_label(port: Embarked) -> String {
    format!("{} ({})", port.label(), port.port_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::{Estimator, logreg::LogRegModel};

    #[test]
    fn survived_prediction_view() {
        let view = prediction_view(&Prediction {
            survived: true,
            probability: 0.873,
        });
        assert_eq!(view.headline, "✅ Survived");
        assert_eq!(view.probability_text, "0.87");
        assert_eq!(view.tone, StatusTone::Success);
    }

    #[test]
    fn did_not_survive_prediction_view() {
        let view = prediction_view(&Prediction {
            survived: false,
            probability: 0.1,
        });
        assert_eq!(view.headline, "❌ Did Not Survive");
        assert_eq!(view.probability_text, "0.10");
        assert!(!view.survived);
    }

    #[test]
    fn model_info_falls_back_to_kind() {
        let model = SurvivalModel::new(
            None,
            Estimator::LogisticRegression(LogRegModel {
                weights: vec![0.0; 7],
                bias: 0.0,
            }),
        );
        let info = model_info(&model, Path::new("titanic_model.json"));
        assert_eq!(info.label, "logistic_regression");
        assert_eq!(info.path, "titanic_model.json");
    }

    #[test]
    fn choice_labels() {
        assert_eq!(pclass_choice_label(PassengerClass::Third), "3 (3rd)");
        assert_eq!(embarked_choice_label(Embarked::Queenstown), "Q (Queenstown)");
    }
}
