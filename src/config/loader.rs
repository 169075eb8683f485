// Configuration loader
// Loads credentials from ~/.medgate/config.toml or environment variables

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use super::settings::{Config, DEFAULT_API_VERSION, DEFAULT_DEPLOYMENT};

/// Load configuration from the Medgate config file or environment
pub fn load_config() -> Result<Config> {
    // Try loading from ~/.medgate/config.toml first
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let config_path = home.join(".medgate/config.toml");
    if config_path.exists() {
        return load_from_file(&config_path);
    }

    // Fall back to environment variables
    let endpoint = std::env::var("AZURE_OPENAI_ENDPOINT").unwrap_or_default();
    let api_key = std::env::var("AZURE_OPENAI_API_KEY").unwrap_or_default();
    if !endpoint.is_empty() && !api_key.is_empty() {
        return Ok(Config::new(endpoint, api_key));
    }

    bail!(
        "No configuration found. Create ~/.medgate/config.toml:\n\n\
        endpoint = \"https://<resource>.openai.azure.com\"\n\
        api_key = \"<key>\"\n\n\
        Or set environment variables:\n\
        export AZURE_OPENAI_ENDPOINT=\"https://<resource>.openai.azure.com\"\n\
        export AZURE_OPENAI_API_KEY=\"<key>\""
    );
}

/// Load and validate a config file
pub fn load_from_file(path: &Path) -> Result<Config> {
    #[derive(serde::Deserialize)]
    struct TomlConfig {
        endpoint: String,
        api_key: String,
        #[serde(default = "default_api_version")]
        api_version: String,
        #[serde(default = "default_deployment")]
        classifier_deployment: String,
        #[serde(default = "default_deployment")]
        specialist_deployment: String,
    }

    fn default_api_version() -> String {
        DEFAULT_API_VERSION.to_string()
    }

    fn default_deployment() -> String {
        DEFAULT_DEPLOYMENT.to_string()
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let toml_config: TomlConfig =
        toml::from_str(&contents).context("Failed to parse config.toml")?;

    if toml_config.endpoint.is_empty() || toml_config.api_key.is_empty() {
        bail!("Config must set both endpoint and api_key");
    }

    Ok(Config {
        endpoint: toml_config.endpoint,
        api_key: toml_config.api_key,
        api_version: toml_config.api_version,
        classifier_deployment: toml_config.classifier_deployment,
        specialist_deployment: toml_config.specialist_deployment,
    })
}
