pub mod regressor;

pub use crate::domain::model::{WineFeatures, FEATURE_COUNT, FEATURE_NAMES};
pub use crate::domain::ports::{ConfigProvider, ScoringModel};
pub use crate::utils::error::Result;
