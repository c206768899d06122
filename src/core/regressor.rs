use crate::core::{Result, ScoringModel};
use crate::domain::model::{FEATURE_COUNT, FEATURE_NAMES};
use crate::utils::error::PredictError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const LINEAR_REGRESSION: &str = "linear_regression";

/// Portable interchange layout the training pipeline exports instead of its
/// native pickle format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub model_type: String,
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

#[derive(Debug)]
pub struct LinearRegressor {
    coefficients: [f64; FEATURE_COUNT],
    intercept: f64,
}

impl LinearRegressor {
    /// Deserialize the artifact at `path`. Called once before the server
    /// accepts traffic; any failure here means the process must not start.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!("Reading model artifact from: {}", path.display());

        let raw = fs::read(path).map_err(|e| PredictError::ArtifactError {
            message: format!("cannot read '{}': {}", path.display(), e),
        })?;

        let artifact: ModelArtifact =
            serde_json::from_slice(&raw).map_err(|e| PredictError::ArtifactError {
                message: format!("'{}' is not a valid model artifact: {}", path.display(), e),
            })?;

        Self::from_artifact(artifact)
    }

    /// Check the artifact is structurally compatible with the scoring
    /// interface before accepting it.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        if artifact.model_type != LINEAR_REGRESSION {
            return Err(PredictError::ArtifactError {
                message: format!(
                    "unsupported model_type '{}', expected '{}'",
                    artifact.model_type, LINEAR_REGRESSION
                ),
            });
        }

        if artifact.coefficients.len() != FEATURE_COUNT {
            return Err(PredictError::ArtifactError {
                message: format!(
                    "expected {} coefficients, artifact has {}",
                    FEATURE_COUNT,
                    artifact.coefficients.len()
                ),
            });
        }

        if let Some(names) = &artifact.feature_names {
            let canonical = names.len() == FEATURE_COUNT
                && names.iter().zip(FEATURE_NAMES.iter()).all(|(a, b)| a == b);
            if !canonical {
                return Err(PredictError::ArtifactError {
                    message: format!(
                        "artifact feature order {:?} does not match the expected schema",
                        names
                    ),
                });
            }
        }

        if !artifact.intercept.is_finite()
            || artifact.coefficients.iter().any(|c| !c.is_finite())
        {
            return Err(PredictError::ArtifactError {
                message: "artifact contains non-finite coefficients".to_string(),
            });
        }

        let mut coefficients = [0.0f64; FEATURE_COUNT];
        coefficients.copy_from_slice(&artifact.coefficients);

        Ok(Self {
            coefficients,
            intercept: artifact.intercept,
        })
    }
}

impl ScoringModel for LinearRegressor {
    fn score(&self, vector: &[f64; FEATURE_COUNT]) -> Result<f64> {
        let mut score = self.intercept;
        for (coefficient, value) in self.coefficients.iter().zip(vector.iter()) {
            score += coefficient * value;
        }

        if !score.is_finite() {
            return Err(PredictError::ScoringError {
                message: "prediction is not a finite number".to_string(),
            });
        }

        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_artifact() -> ModelArtifact {
        ModelArtifact {
            model_type: LINEAR_REGRESSION.to_string(),
            feature_names: Some(FEATURE_NAMES.iter().map(|s| s.to_string()).collect()),
            coefficients: vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0],
            intercept: 0.5,
        }
    }

    #[test]
    fn test_score_is_intercept_plus_dot_product() {
        let model = LinearRegressor::from_artifact(unit_artifact()).unwrap();
        let mut vector = [0.0f64; FEATURE_COUNT];
        vector[0] = 3.0;
        vector[10] = 2.0;

        let score = model.score(&vector).unwrap();
        assert_eq!(score, 0.5 + 3.0 + 4.0);
    }

    #[test]
    fn test_score_is_deterministic() {
        let model = LinearRegressor::from_artifact(unit_artifact()).unwrap();
        let vector = [1.5f64; FEATURE_COUNT];
        let first = model.score(&vector).unwrap();
        let second = model.score(&vector).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_rejects_wrong_model_type() {
        let mut artifact = unit_artifact();
        artifact.model_type = "random_forest".to_string();
        assert!(LinearRegressor::from_artifact(artifact).is_err());
    }

    #[test]
    fn test_rejects_wrong_coefficient_count() {
        let mut artifact = unit_artifact();
        artifact.coefficients.pop();
        let err = LinearRegressor::from_artifact(artifact).unwrap_err();
        assert!(err.to_string().contains("11"));
    }

    #[test]
    fn test_rejects_reordered_feature_names() {
        let mut artifact = unit_artifact();
        let names = artifact.feature_names.as_mut().unwrap();
        names.swap(0, 10);
        assert!(LinearRegressor::from_artifact(artifact).is_err());
    }

    #[test]
    fn test_accepts_artifact_without_feature_names() {
        let mut artifact = unit_artifact();
        artifact.feature_names = None;
        assert!(LinearRegressor::from_artifact(artifact).is_ok());
    }

    #[test]
    fn test_rejects_non_finite_coefficients() {
        let mut artifact = unit_artifact();
        artifact.coefficients[3] = f64::NAN;
        assert!(LinearRegressor::from_artifact(artifact).is_err());

        let mut artifact = unit_artifact();
        artifact.intercept = f64::INFINITY;
        assert!(LinearRegressor::from_artifact(artifact).is_err());
    }
}
