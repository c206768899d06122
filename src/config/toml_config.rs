use crate::config::ResolvedConfig;
use crate::utils::error::{PredictError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerConfig>,
    pub model: Option<ModelConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PredictError::ConfigError {
            message: format!("cannot read config file '{}': {}", path.display(), e),
        })?;

        let config: TomlConfig = toml::from_str(&content).map_err(|e| PredictError::ConfigError {
            message: format!("invalid TOML in '{}': {}", path.display(), e),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// File values override CLI defaults for the fields the file sets.
    pub fn apply_to(&self, resolved: &mut ResolvedConfig) {
        if let Some(server) = &self.server {
            if let Some(bind_address) = &server.bind_address {
                resolved.bind_address = bind_address.clone();
            }
        }

        if let Some(model) = &self.model {
            if let Some(path) = &model.path {
                resolved.model_path = path.clone();
            }
        }

        if let Some(monitoring) = &self.monitoring {
            if let Some(enabled) = monitoring.enabled {
                resolved.monitor = enabled;
            }
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(server) = &self.server {
            if let Some(bind_address) = &server.bind_address {
                validation::validate_bind_address("server.bind_address", bind_address)?;
            }
        }

        if let Some(model) = &self.model {
            // 如果有 [model] 區段，path 為必填
            let path = validation::validate_required_field("model.path", &model.path)?;
            validation::validate_path("model.path", path)?;
        }

        Ok(())
    }
}
