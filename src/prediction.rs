//! Run the classifier on an encoded passenger and format the outcome.

use thiserror::Error;

use crate::ml::Classifier;
use crate::passenger::PredictionRequest;

/// Label shown when the classifier predicts survival.
pub const SURVIVED_LABEL: &str = "Survived";
/// Label shown for every other prediction.
pub const DID_NOT_SURVIVE_LABEL: &str = "Did Not Survive";

/// Classifier output that cannot be shown as a prediction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("Classifier returned label {0}, expected 0 or 1")]
    InvalidLabel(u8),
    #[error("Classifier returned survival probability {0}, expected a value in [0, 1]")]
    InvalidProbability(f32),
}

/// Outcome of one prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub survived: bool,
    /// Probability of survival in `[0, 1]`.
    pub probability: f32,
}

impl Prediction {
    pub fn label(&self) -> &'static str {
        if self.survived {
            SURVIVED_LABEL
        } else {
            DID_NOT_SURVIVE_LABEL
        }
    }

    /// Probability rounded to two decimals.
    pub fn probability_text(&self) -> String {
        format_probability(self.probability)
    }
}

pub fn format_probability(probability: f32) -> String {
    format!("{probability:.2}")
}

/// Owns the classifier for the lifetime of the caller and runs predictions.
pub struct PredictionInvoker<C> {
    classifier: C,
}

impl<C: Classifier> PredictionInvoker<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Classify the row and estimate its survival probability.
    pub fn invoke(&self, request: &PredictionRequest) -> Result<Prediction, PredictionError> {
        let row = request.features();
        tracing::debug!(?row, "Invoking classifier");
        let label = self.classifier.predict(row);
        let [_, probability] = self.classifier.predict_proba(row);
        let survived = match label {
            0 => false,
            1 => true,
            other => return Err(PredictionError::InvalidLabel(other)),
        };
        if !(0.0..=1.0).contains(&probability) {
            return Err(PredictionError::InvalidProbability(probability));
        }
        let prediction = Prediction {
            survived,
            probability,
        };
        tracing::info!(
            "Prediction: {} (probability {})",
            prediction.label(),
            prediction.probability_text()
        );
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passenger::{
        Embarked, FEATURE_COUNT, PassengerClass, PassengerInput, PredictionRequest, Sex,
    };
    use std::cell::RefCell;

    /// Records every row it sees and answers with fixed outputs.
    struct RecordingClassifier {
        label: u8,
        positive: f32,
        seen: RefCell<Vec<[f32; FEATURE_COUNT]>>,
    }

    impl RecordingClassifier {
        fn new(label: u8, positive: f32) -> Self {
            Self {
                label,
                positive,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl Classifier for RecordingClassifier {
        fn predict(&self, row: &[f32; FEATURE_COUNT]) -> u8 {
            self.seen.borrow_mut().push(*row);
            self.label
        }

        fn predict_proba(&self, row: &[f32; FEATURE_COUNT]) -> [f32; 2] {
            self.seen.borrow_mut().push(*row);
            [1.0 - self.positive, self.positive]
        }
    }

    fn request() -> PredictionRequest {
        PredictionRequest::encode(&PassengerInput {
            pclass: PassengerClass::First,
            sex: Sex::Female,
            age: 30.0,
            fare: 100.0,
            sibsp: 0,
            parch: 0,
            embarked: Embarked::Southampton,
        })
        .unwrap()
    }

    #[test]
    fn passes_encoded_row_unchanged_to_both_operations() {
        let invoker = PredictionInvoker::new(RecordingClassifier::new(1, 0.93));
        invoker.invoke(&request()).unwrap();
        let seen = invoker.classifier().seen.borrow();
        assert_eq!(seen.len(), 2);
        for row in seen.iter() {
            assert_eq!(row, &[1.0, 1.0, 30.0, 100.0, 0.0, 0.0, 2.0]);
        }
    }

    #[test]
    fn label_follows_predict_not_probability() {
        let invoker = PredictionInvoker::new(RecordingClassifier::new(1, 0.42));
        let prediction = invoker.invoke(&request()).unwrap();
        assert!(prediction.survived);
        assert_eq!(prediction.label(), "Survived");
        assert_eq!(prediction.probability_text(), "0.42");

        let invoker = PredictionInvoker::new(RecordingClassifier::new(0, 0.61));
        let prediction = invoker.invoke(&request()).unwrap();
        assert!(!prediction.survived);
        assert_eq!(prediction.label(), "Did Not Survive");
        assert_eq!(prediction.probability_text(), "0.61");
    }

    #[test]
    fn rejects_out_of_range_outputs() {
        let invoker = PredictionInvoker::new(RecordingClassifier::new(2, 0.5));
        assert_eq!(
            invoker.invoke(&request()).unwrap_err(),
            PredictionError::InvalidLabel(2)
        );
        let invoker = PredictionInvoker::new(RecordingClassifier::new(1, 1.2));
        assert!(matches!(
            invoker.invoke(&request()),
            Err(PredictionError::InvalidProbability(_))
        ));
        let invoker = PredictionInvoker::new(RecordingClassifier::new(0, f32::NAN));
        assert!(matches!(
            invoker.invoke(&request()),
            Err(PredictionError::InvalidProbability(_))
        ));
    }

    #[test]
    fn probability_is_rounded_to_two_decimals() {
        assert_eq!(format_probability(0.0), "0.00");
        assert_eq!(format_probability(1.0), "1.00");
        assert_eq!(format_probability(0.876), "0.88");
    }
}
