pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use config::{CliConfig, ResolvedConfig};
pub use core::regressor::LinearRegressor;
pub use domain::model::WineFeatures;
pub use domain::ports::{ConfigProvider, ScoringModel};
pub use utils::error::{PredictError, Result};
