//! Library configuration management.

use serde::Deserialize;

/// Library configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoneyConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Extra currencies to register alongside the built-in catalog.
    #[serde(default)]
    pub currencies: Vec<CurrencyDefinition>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "strictmoney=info".to_string()
}

/// A currency declared in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrencyDefinition {
    /// Currency code, e.g. `"XTS"`.
    pub code: String,
    /// Sub-units per main unit.
    #[serde(default = "default_subunit")]
    pub subunit: u64,
}

fn default_subunit() -> u64 {
    100
}

impl MoneyConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest priority first: `config/default`, `config/{RUN_MODE}`,
    /// then `STRICTMONEY__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("STRICTMONEY").separator("__"))
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        tracing::debug!(
            run_mode,
            currencies = loaded.currencies.len(),
            "loaded configuration"
        );
        Ok(loaded)
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed.
    pub fn from_toml_str(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let config = MoneyConfig::from_toml_str("").unwrap();
        assert_eq!(config.logging.filter, "strictmoney=info");
        assert!(!config.logging.json);
        assert!(config.currencies.is_empty());
    }

    #[test]
    fn test_parses_currencies() {
        let config = MoneyConfig::from_toml_str(
            r#"
            [logging]
            filter = "strictmoney=trace"
            json = true

            [[currencies]]
            code = "XTS"

            [[currencies]]
            code = "XBT"
            subunit = 100000000
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.filter, "strictmoney=trace");
        assert!(config.logging.json);
        assert_eq!(
            config.currencies,
            vec![
                CurrencyDefinition {
                    code: "XTS".into(),
                    subunit: 100,
                },
                CurrencyDefinition {
                    code: "XBT".into(),
                    subunit: 100_000_000,
                },
            ]
        );
    }

    #[test]
    fn test_load_reads_environment() {
        temp_env::with_vars(
            [
                ("STRICTMONEY__LOGGING__FILTER", Some("strictmoney=debug")),
                ("RUN_MODE", Some("test-nonexistent")),
            ],
            || {
                let config = MoneyConfig::load().unwrap();
                assert_eq!(config.logging.filter, "strictmoney=debug");
            },
        );
    }

    #[test]
    fn test_malformed_toml_is_error() {
        assert!(MoneyConfig::from_toml_str("[logging\nfilter=").is_err());
    }
}
