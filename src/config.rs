use crate::ingredients::MIN_INGREDIENTS;
use crate::processor::ValidationRules;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main assistant configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AssistantConfig {
    /// Root URL of the recipe backend
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Ingredients required before a recipe can be generated
    #[serde(default = "default_min_ingredients")]
    pub min_ingredients: usize,
    /// Rules applied before saving a recipe
    #[serde(default)]
    pub validation: ValidationRules,
    /// Headlines settings
    #[serde(default)]
    pub news: NewsConfig,
}

/// Configuration for the headlines endpoint
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct NewsConfig {
    /// Two-letter country code forwarded to the news provider
    #[serde(default = "default_country")]
    pub country: String,
    /// Articles per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            country: default_country(),
            page_size: default_page_size(),
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            timeout: default_timeout(),
            min_ingredients: default_min_ingredients(),
            validation: ValidationRules::default(),
            news: NewsConfig::default(),
        }
    }
}

// Default value functions
fn default_backend_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_min_ingredients() -> usize {
    MIN_INGREDIENTS
}

fn default_country() -> String {
    "us".to_string()
}

fn default_page_size() -> u32 {
    10
}

impl AssistantConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_ASSISTANT__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_ASSISTANT__NEWS__PAGE_SIZE
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from the default sources. See [`AssistantConfig::load`].
pub fn load_config() -> Result<AssistantConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested keys
        .add_source(
            Environment::with_prefix("RECIPE_ASSISTANT")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

/// Parse configuration from a TOML string, falling back to defaults for
/// missing keys.
pub fn from_toml_str(toml: &str) -> Result<AssistantConfig, ConfigError> {
    Config::builder()
        .add_source(File::from_str(toml, config::FileFormat::Toml))
        .build()?
        .try_deserialize()
}
