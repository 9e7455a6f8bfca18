use std::path::Path;

use titanic_survival::ml::{Estimator, SurvivalModel, logreg::LogRegModel};

/// Logistic regression with coefficients in the range a Titanic fit produces:
/// women and first-class passengers score high, older third-class men low.
pub fn logreg_model() -> SurvivalModel {
    SurvivalModel::new(
        Some("titanic_logreg_fixture".into()),
        Estimator::LogisticRegression(LogRegModel {
            weights: vec![-1.1, 2.6, -0.04, 0.003, -0.35, -0.1, -0.2],
            bias: 3.2,
        }),
    )
}

pub fn write_model(path: &Path, model: &SurvivalModel) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create model parent dirs");
    }
    let bytes = serde_json::to_vec_pretty(model).expect("serialize model");
    std::fs::write(path, bytes).expect("write model");
}
