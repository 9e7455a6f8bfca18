//! Survival classifiers and the artifact they are loaded from.
//!
//! The rest of the crate only sees the [`Classifier`] trait. [`SurvivalModel`]
//! is the JSON-backed implementation loaded once at startup.

pub mod artifact;
pub mod forest;
pub mod gbdt_stump;
pub mod logreg;

pub use artifact::{DEFAULT_MODEL_FILE_NAME, Estimator, MODEL_VERSION, ModelError, SurvivalModel};

use crate::passenger::FEATURE_COUNT;

/// Read-only binary classifier over an encoded passenger row.
pub trait Classifier {
    /// Predicted class label: `1` for survived, `0` otherwise.
    fn predict(&self, row: &[f32; FEATURE_COUNT]) -> u8;

    /// Class probabilities `[p(0), p(1)]`.
    fn predict_proba(&self, row: &[f32; FEATURE_COUNT]) -> [f32; 2];
}

impl<C: Classifier + ?Sized> Classifier for &C {
    fn predict(&self, row: &[f32; FEATURE_COUNT]) -> u8 {
        (**self).predict(row)
    }

    fn predict_proba(&self, row: &[f32; FEATURE_COUNT]) -> [f32; 2] {
        (**self).predict_proba(row)
    }
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn predict(&self, row: &[f32; FEATURE_COUNT]) -> u8 {
        (**self).predict(row)
    }

    fn predict_proba(&self, row: &[f32; FEATURE_COUNT]) -> [f32; 2] {
        (**self).predict_proba(row)
    }
}

/// Numerically-stable logistic function.
pub fn sigmoid(raw: f32) -> f32 {
    if raw >= 0.0 {
        1.0 / (1.0 + (-raw).exp())
    } else {
        let e = raw.exp();
        e / (1.0 + e)
    }
}

/// Label rule shared by every estimator: survived iff `p(1) > 0.5`.
pub fn label_for(positive: f32) -> u8 {
    u8::from(positive > 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_symmetric_and_bounded() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-6);
        assert!((sigmoid(2.0) + sigmoid(-2.0) - 1.0).abs() < 1e-6);
        assert_eq!(sigmoid(1000.0), 1.0);
        assert_eq!(sigmoid(-1000.0), 0.0);
    }

    #[test]
    fn half_probability_is_not_survival() {
        assert_eq!(label_for(0.5), 0);
        assert_eq!(label_for(0.51), 1);
    }
}
