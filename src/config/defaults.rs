use std::path::PathBuf;

use crate::ml::DEFAULT_MODEL_FILE_NAME;
use crate::passenger::{clamp_age, clamp_fare};

pub(super) fn default_model_path() -> PathBuf {
    PathBuf::from(DEFAULT_MODEL_FILE_NAME)
}

pub(super) fn default_age() -> f32 {
    30.0
}

pub(super) fn default_fare() -> f32 {
    50.0
}

pub(super) fn normalize_age(age: f32) -> f32 {
    if age.is_finite() {
        clamp_age(age)
    } else {
        default_age()
    }
}

pub(super) fn normalize_fare(fare: f32) -> f32 {
    if fare.is_finite() {
        clamp_fare(fare)
    } else {
        default_fare()
    }
}
