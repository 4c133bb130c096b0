use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{DEFAULT_CONFLICT_MODE, DEFAULT_VERSION, SUPPORTED_VERSIONS};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub card: CardConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CardConfig {
    /// vCard version to emit ("3.0" or "4.0").
    pub version: String,
    /// Policy for singleton properties added twice ("ignore" or "overwrite").
    pub conflict_mode: String,
    /// PRODID value; the built-in product identifier is used when unset.
    pub product_id: Option<String>,
}

impl CardConfig {
    /// ## Summary
    /// Returns the configured PRODID, falling back to the built-in identifier.
    #[must_use]
    pub fn product_id(&self) -> &str {
        self.product_id
            .as_deref()
            .unwrap_or(crate::constants::DEFAULT_PRODUCT_ID)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from an optional `config.toml` and environment variables.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::from_sources(
            config::File::with_name("config.toml").required(false),
            environment(),
        )
    }

    /// Builds settings from defaults, then `file`, then `env`. Later sources win.
    fn from_sources<F>(file: F, env: config::Environment) -> Result<Self>
    where
        F: config::Source + Send + Sync + 'static,
    {
        Ok(Config::builder()
            .set_default("card.version", DEFAULT_VERSION)?
            .set_default("card.conflict_mode", DEFAULT_CONFLICT_MODE)?
            .set_default("logging.level", "info")?
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Checks values that deserialization alone cannot reject.
    ///
    /// The conflict mode is not checked here: unknown modes are coerced to
    /// `overwrite` when the document is created.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` for an unsupported card version.
    pub fn validate(&self) -> CoreResult<()> {
        if !SUPPORTED_VERSIONS.contains(&self.card.version.as_str()) {
            return Err(CoreError::InvalidConfiguration(format!(
                "unsupported card version {:?}, expected one of {SUPPORTED_VERSIONS:?}",
                self.card.version
            )));
        }
        Ok(())
    }
}

/// `KUNAI__SECTION__KEY` variables. Values stay strings, so a version such
/// as `3.0` is not reparsed as a number.
fn environment() -> config::Environment {
    config::Environment::with_prefix("KUNAI")
        .convert_case(config::Case::Snake)
        .separator("__")
        .ignore_empty(true)
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading, deserializing or validating the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    settings.validate()?;
    tracing::debug!(version = %settings.card.version, "Configuration validated");

    Ok(settings)
}
