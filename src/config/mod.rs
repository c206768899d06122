pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_MODEL_PATH: &str = "models/wine_quality.json";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "wine-quality-api")]
#[command(about = "HTTP inference service for wine quality prediction")]
pub struct CliConfig {
    #[arg(long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
    pub bind_address: String,

    #[arg(long, env = "MODEL_PATH", default_value = DEFAULT_MODEL_PATH)]
    pub model_path: String,

    #[arg(long, help = "Load additional settings from a TOML file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process resource usage while serving")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON (for containerized deployments)")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 合併 CLI 參數與可選的 TOML 設定檔
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let mut resolved = ResolvedConfig {
            bind_address: self.bind_address.clone(),
            model_path: self.model_path.clone(),
            monitor: self.monitor,
        };

        if let Some(path) = &self.config {
            let file = TomlConfig::from_file(path)?;
            file.apply_to(&mut resolved);
        }

        Ok(resolved)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedConfig {
    pub bind_address: String,
    pub model_path: String,
    pub monitor: bool,
}

impl ConfigProvider for ResolvedConfig {
    fn bind_address(&self) -> &str {
        &self.bind_address
    }

    fn model_path(&self) -> &str {
        &self.model_path
    }

    fn monitor(&self) -> bool {
        self.monitor
    }
}

impl Validate for ResolvedConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_bind_address("bind_address", &self.bind_address)?;
        validation::validate_path("model_path", &self.model_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cli_defaults() -> CliConfig {
        CliConfig {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            model_path: DEFAULT_MODEL_PATH.to_string(),
            config: None,
            verbose: false,
            monitor: false,
            json_logs: false,
        }
    }

    #[test]
    fn test_resolve_without_file_uses_cli_values() {
        let resolved = cli_defaults().resolve().unwrap();
        assert_eq!(resolved.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(resolved.model_path, DEFAULT_MODEL_PATH);
        assert!(resolved.validate().is_ok());
    }

    #[test]
    fn test_resolve_with_file_overrides_cli_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nbind_address = \"0.0.0.0:9999\"\n\n[model]\npath = \"other.json\"\n"
        )
        .unwrap();

        let mut cli = cli_defaults();
        cli.config = Some(file.path().to_str().unwrap().to_string());

        let resolved = cli.resolve().unwrap();
        assert_eq!(resolved.bind_address, "0.0.0.0:9999");
        assert_eq!(resolved.model_path, "other.json");
    }

    #[test]
    fn test_resolve_with_missing_file_fails() {
        let mut cli = cli_defaults();
        cli.config = Some("/nonexistent/wine.toml".to_string());
        assert!(cli.resolve().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_bind_address() {
        let resolved = ResolvedConfig {
            bind_address: "not-an-address".to_string(),
            model_path: DEFAULT_MODEL_PATH.to_string(),
            monitor: false,
        };
        assert!(resolved.validate().is_err());
    }
}
