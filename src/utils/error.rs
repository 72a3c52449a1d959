use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwapError {
    #[error("Missing text parameter")]
    MissingInputError,

    #[error("Advisory request failed: {0}")]
    AdvisoryRequestError(#[from] reqwest::Error),

    #[error("Advisory service returned status {status}: {body}")]
    AdvisoryStatusError { status: u16, body: String },

    #[error("Advisory service returned no content")]
    EmptyAdvisoryError,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parsing error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SwapError {
    /// 錯誤分類標籤，回應中的 error_type 欄位
    pub fn kind(&self) -> &'static str {
        match self {
            SwapError::MissingInputError => "MissingInputError",
            SwapError::AdvisoryRequestError(_) => "AdvisoryRequestError",
            SwapError::AdvisoryStatusError { .. } => "AdvisoryStatusError",
            SwapError::EmptyAdvisoryError => "EmptyAdvisoryError",
            SwapError::SerializationError(_) => "SerializationError",
            SwapError::IoError(_) => "IoError",
            SwapError::ConfigParseError(_) => "ConfigError",
            SwapError::MissingConfigError { .. } => "ConfigError",
            SwapError::InvalidConfigValueError { .. } => "ConfigError",
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SwapError::MissingInputError => "Send a JSON body with a 'text' field",
            SwapError::AdvisoryRequestError(_) => {
                "Check network connectivity and the advisory base URL"
            }
            SwapError::AdvisoryStatusError { .. } => {
                "Verify the API key and model name for the advisory service"
            }
            SwapError::EmptyAdvisoryError => "Retry the request; the upstream reply was empty",
            SwapError::ConfigParseError(_) => "Fix the TOML syntax in the configuration file",
            SwapError::MissingConfigError { .. } => {
                "Set the DEEPSEEK_API_KEY environment variable"
            }
            SwapError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and restart the service"
            }
            _ => "Check the service logs for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, SwapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(SwapError::MissingInputError.kind(), "MissingInputError");
        assert_eq!(
            SwapError::AdvisoryStatusError {
                status: 401,
                body: "unauthorized".to_string()
            }
            .kind(),
            "AdvisoryStatusError"
        );
        assert_eq!(
            SwapError::MissingConfigError {
                field: "DEEPSEEK_API_KEY".to_string()
            }
            .kind(),
            "ConfigError"
        );
    }

    #[test]
    fn test_display_missing_input_matches_wire_message() {
        assert_eq!(
            SwapError::MissingInputError.to_string(),
            "Missing text parameter"
        );
    }
}
