use std::path::Path;
use tempfile::TempDir;
use wine_quality_api::core::regressor::LinearRegressor;
use wine_quality_api::domain::model::FEATURE_NAMES;
use wine_quality_api::ScoringModel;

fn write_artifact(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn valid_artifact_json() -> String {
    serde_json::json!({
        "model_type": "linear_regression",
        "feature_names": FEATURE_NAMES,
        "coefficients": [
            0.024991, -1.08359, -0.182564, 0.016331, -1.874225, 0.004361,
            -0.003265, -17.881164, -0.413653, 0.916334, 0.276198
        ],
        "intercept": 21.965208
    })
    .to_string()
}

#[test]
fn test_load_valid_artifact_and_score() {
    let dir = TempDir::new().unwrap();
    let path = write_artifact(&dir, "wine_quality.json", &valid_artifact_json());

    let model = LinearRegressor::load(&path).unwrap();

    let vector = [7.4, 0.7, 0.0, 1.9, 0.076, 11.0, 34.0, 0.9978, 3.51, 0.56, 9.4];
    let score = model.score(&vector).unwrap();
    assert!((score - 5.0328379708).abs() < 1e-9);
}

#[test]
fn test_load_shipped_reference_artifact() {
    let model = LinearRegressor::load(Path::new("models/wine_quality.json")).unwrap();

    let vector = [7.4, 0.7, 0.0, 1.9, 0.076, 11.0, 34.0, 0.9978, 3.51, 0.56, 9.4];
    let score = model.score(&vector).unwrap();
    assert!((score - 5.0328379708).abs() < 1e-9);
}

#[test]
fn test_missing_artifact_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does_not_exist.json");

    let err = LinearRegressor::load(&path).unwrap_err();
    assert!(err.to_string().contains("does_not_exist.json"));
}

#[test]
fn test_unreadable_artifact_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_artifact(&dir, "wine_quality.json", "not json at all");

    assert!(LinearRegressor::load(&path).is_err());
}

#[test]
fn test_artifact_with_wrong_shape_is_an_error() {
    let dir = TempDir::new().unwrap();
    let content = serde_json::json!({
        "model_type": "linear_regression",
        "coefficients": [1.0, 2.0, 3.0],
        "intercept": 0.0
    })
    .to_string();
    let path = write_artifact(&dir, "wine_quality.json", &content);

    let err = LinearRegressor::load(&path).unwrap_err();
    assert!(err.to_string().contains("coefficients"));
}

#[test]
fn test_artifact_with_unknown_model_type_is_an_error() {
    let dir = TempDir::new().unwrap();
    let content = valid_artifact_json().replace("linear_regression", "gradient_boosting");
    let path = write_artifact(&dir, "wine_quality.json", &content);

    assert!(LinearRegressor::load(&path).is_err());
}
