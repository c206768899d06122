use crate::domain::model::FEATURE_COUNT;
use crate::utils::error::Result;

/// Vector in, scalar out. The artifact format stays behind this seam.
pub trait ScoringModel: Send + Sync {
    fn score(&self, vector: &[f64; FEATURE_COUNT]) -> Result<f64>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> &str;
    fn model_path(&self) -> &str;
    fn monitor(&self) -> bool;
}
