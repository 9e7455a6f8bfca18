//! Gradient-boosted decision stumps for binary survival classification.
//!
//! Each stump adds a scaled vote to a single raw margin, which the logistic
//! function turns into the survival probability.

use serde::{Deserialize, Serialize};

use super::sigmoid;
use crate::passenger::FEATURE_COUNT;

/// Single-node decision tree used as a weak learner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stump {
    /// Feature column used for the split.
    pub feature_index: u16,
    /// Threshold in feature units.
    pub threshold: f32,
    /// Prediction for `feature <= threshold`.
    pub left_value: f32,
    /// Prediction for `feature > threshold`.
    pub right_value: f32,
}

impl Stump {
    /// Predict the stump value for a feature row.
    pub fn predict(&self, row: &[f32; FEATURE_COUNT]) -> f32 {
        let value = row.get(self.feature_index as usize).copied().unwrap_or(0.0);
        if value <= self.threshold {
            self.left_value
        } else {
            self.right_value
        }
    }
}

/// Boosted stump ensemble with a single log-odds output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GbdtStumpModel {
    /// Learning rate applied to each stump prediction.
    pub learning_rate: f32,
    /// Initial log-odds before boosting rounds.
    pub init_raw: f32,
    /// One stump per boosting round.
    pub stumps: Vec<Stump>,
}

impl GbdtStumpModel {
    /// Validate structural invariants of the model.
    pub fn validate(&self) -> Result<(), String> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err("learning_rate must be > 0".to_string());
        }
        if !self.init_raw.is_finite() {
            return Err("init_raw must be finite".to_string());
        }
        for (round_idx, stump) in self.stumps.iter().enumerate() {
            if stump.feature_index as usize >= FEATURE_COUNT {
                return Err(format!(
                    "Round {round_idx} splits on feature {} but rows have {FEATURE_COUNT}",
                    stump.feature_index
                ));
            }
            if !stump.threshold.is_finite()
                || !stump.left_value.is_finite()
                || !stump.right_value.is_finite()
            {
                return Err(format!("Round {round_idx} has non-finite parameters"));
            }
        }
        Ok(())
    }

    /// Raw log-odds for a feature row.
    pub fn predict_raw(&self, row: &[f32; FEATURE_COUNT]) -> f32 {
        self.stumps
            .iter()
            .fold(self.init_raw, |raw, stump| raw + self.learning_rate * stump.predict(row))
    }

    /// Probability of survival.
    pub fn positive_probability(&self, row: &[f32; FEATURE_COUNT]) -> f32 {
        sigmoid(self.predict_raw(row))
    }
}
