pub mod toml_config;

use crate::utils::error::{Result, SwapError};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const API_KEY_ENV: &str = "DEEPSEEK_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "swap-intent-api")]
#[command(about = "A web service that parses natural-language token swap requests")]
pub struct CliConfig {
    #[arg(long, default_value = "0.0.0.0:5000")]
    pub bind: String,

    #[arg(long, default_value = "https://api.deepseek.com/v1")]
    pub advisory_base_url: String,

    #[arg(long, default_value = "deepseek-chat")]
    pub advisory_model: String,

    #[arg(long, default_value = "0.3")]
    pub temperature: f32,

    #[arg(long, help = "Optional TOML configuration file")]
    pub config_file: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit JSON logs instead of the compact format")]
    pub json_logs: bool,
}

/// 啟動時解析完成的最終配置
///
/// CLI arguments provide the defaults, an optional TOML file overrides them,
/// and the API key always comes from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: String,
    pub advisory_base_url: String,
    pub advisory_model: String,
    pub temperature: f32,
    pub api_key: String,
}

impl AppConfig {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let mut config = Self {
            bind: cli.bind.clone(),
            advisory_base_url: cli.advisory_base_url.clone(),
            advisory_model: cli.advisory_model.clone(),
            temperature: cli.temperature,
            api_key: String::new(),
        };

        if let Some(path) = &cli.config_file {
            let file = TomlConfig::from_file(path)?;
            config.apply(file);
        }

        // 金鑰只從環境變數取得，缺少時在啟動階段就失敗
        config.api_key =
            std::env::var(API_KEY_ENV).map_err(|_| SwapError::MissingConfigError {
                field: API_KEY_ENV.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// TOML 檔案中有設定的欄位覆蓋 CLI 值
    fn apply(&mut self, file: TomlConfig) {
        if let Some(server) = file.server {
            if let Some(bind) = server.bind {
                self.bind = bind;
            }
        }

        if let Some(advisory) = file.advisory {
            if let Some(base_url) = advisory.base_url {
                self.advisory_base_url = base_url;
            }
            if let Some(model) = advisory.model {
                self.advisory_model = model;
            }
            if let Some(temperature) = advisory.temperature {
                self.temperature = temperature;
            }
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_socket_addr("bind", &self.bind)?;
        validation::validate_url("advisory.base_url", &self.advisory_base_url)?;
        validation::validate_non_empty_string("advisory.model", &self.advisory_model)?;
        validation::validate_range("advisory.temperature", self.temperature, 0.0, 2.0)?;
        validation::validate_non_empty_string(API_KEY_ENV, &self.api_key)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AppConfig {
        AppConfig {
            bind: "0.0.0.0:5000".to_string(),
            advisory_base_url: "https://api.deepseek.com/v1".to_string(),
            advisory_model: "deepseek-chat".to_string(),
            temperature: 0.3,
            api_key: "sk-test".to_string(),
        }
    }

    #[test]
    fn test_valid_config_passes_validation() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_invalid_bind_address_fails_validation() {
        let mut config = valid_config();
        config.bind = "not-an-address".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_temperature_out_of_range_fails_validation() {
        let mut config = valid_config();
        config.temperature = 3.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_api_key_fails_validation() {
        let mut config = valid_config();
        config.api_key = "".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_fields_override_cli_defaults() {
        let mut config = valid_config();
        let file = TomlConfig::from_toml_str(
            r#"
[advisory]
model = "deepseek-reasoner"
temperature = 0.7
"#,
        )
        .unwrap();

        config.apply(file);

        assert_eq!(config.advisory_model, "deepseek-reasoner");
        assert_eq!(config.temperature, 0.7);
        // 檔案未設定的欄位保持 CLI 值
        assert_eq!(config.bind, "0.0.0.0:5000");
        assert_eq!(config.advisory_base_url, "https://api.deepseek.com/v1");
    }
}
