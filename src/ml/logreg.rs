//! Logistic regression over the passenger feature row.

use serde::{Deserialize, Serialize};

use super::sigmoid;
use crate::passenger::FEATURE_COUNT;

/// Linear model with one weight per feature column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRegModel {
    pub weights: Vec<f32>,
    pub bias: f32,
}

impl LogRegModel {
    /// Validate the weight count and parameter values.
    pub fn validate(&self) -> Result<(), String> {
        if self.weights.len() != FEATURE_COUNT {
            return Err(format!(
                "weights length {} does not match {FEATURE_COUNT} features",
                self.weights.len()
            ));
        }
        if !self.bias.is_finite() || self.weights.iter().any(|w| !w.is_finite()) {
            return Err("weights and bias must be finite".to_string());
        }
        Ok(())
    }

    /// Raw decision value `w·x + b`.
    pub fn decision(&self, row: &[f32; FEATURE_COUNT]) -> f32 {
        self.weights
            .iter()
            .zip(row.iter())
            .fold(self.bias, |sum, (w, x)| sum + w * x)
    }

    /// Probability of survival.
    pub fn positive_probability(&self, row: &[f32; FEATURE_COUNT]) -> f32 {
        sigmoid(self.decision(row))
    }
}
