use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Model artifact error: {message}")]
    ArtifactError { message: String },

    #[error("Scoring error: {message}")]
    ScoringError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Artifact,
    Scoring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PredictError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PredictError::IoError(_) => ErrorCategory::Io,
            PredictError::ConfigError { .. }
            | PredictError::MissingConfigError { .. }
            | PredictError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PredictError::ArtifactError { .. } => ErrorCategory::Artifact,
            PredictError::ScoringError { .. } => ErrorCategory::Scoring,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PredictError::IoError(_) => ErrorSeverity::Medium,
            PredictError::ConfigError { .. }
            | PredictError::MissingConfigError { .. }
            | PredictError::InvalidConfigValueError { .. }
            | PredictError::ScoringError { .. } => ErrorSeverity::High,
            // 沒有模型就無法提供服務
            PredictError::ArtifactError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PredictError::IoError(_) => {
                "Check file permissions and that the path exists".to_string()
            }
            PredictError::ConfigError { .. } => {
                "Review the configuration file and CLI flags".to_string()
            }
            PredictError::MissingConfigError { field } => {
                format!("Provide a value for '{}' via CLI flag or environment", field)
            }
            PredictError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' and restart", field)
            }
            PredictError::ArtifactError { .. } => {
                "Re-export the model artifact from the training pipeline and check --model-path"
                    .to_string()
            }
            PredictError::ScoringError { .. } => {
                "Verify the model artifact coefficients are sane".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PredictError::IoError(e) => format!("File operation failed: {}", e),
            PredictError::ConfigError { message } => format!("Configuration problem: {}", message),
            PredictError::MissingConfigError { field } => {
                format!("Configuration value '{}' is missing", field)
            }
            PredictError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            PredictError::ArtifactError { message } => {
                format!("Model artifact could not be loaded: {}", message)
            }
            PredictError::ScoringError { .. } => "Prediction failed unexpectedly".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PredictError>;
