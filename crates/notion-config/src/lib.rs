//! Configuration management for the Notion HTML renderer.
//!
//! Parses `notion.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `notion.token`
//! - `notion.version`
//! - `notion.base_url`
//! - `render.page_href_prefix`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the integration token.
    pub token: Option<String>,
    /// Override the `Notion-Version` header value.
    pub version: Option<String>,
    /// Override debug mode.
    pub debug: Option<bool>,
    /// Override the maximum block nesting depth.
    pub max_depth: Option<usize>,
    /// Override annotation close order.
    pub nested_annotations: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "notion.toml";

/// Default Notion API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";

/// Default `Notion-Version` header value.
pub const DEFAULT_API_VERSION: &str = "2022-06-28";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Notion API connection settings.
    pub notion: NotionConfig,
    /// HTML rendering settings.
    pub render: RenderConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Notion API connection settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NotionConfig {
    /// Integration token sent as `Authorization: Bearer <token>`.
    pub token: String,
    /// API version sent as the `Notion-Version` header.
    pub version: String,
    /// API base URL.
    pub base_url: String,
    /// Global HTTP timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            version: DEFAULT_API_VERSION.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_secs: 30,
        }
    }
}

/// HTML rendering settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Debug mode: fetch failures abort the render and unsupported blocks
    /// are dumped as diagnostic markup.
    pub debug: bool,
    /// Maximum block nesting depth followed by the tree walker.
    pub max_depth: usize,
    /// Prefix for links to other pages; the page id is appended.
    pub page_href_prefix: String,
    /// Close annotation tags in reverse order of opening.
    pub nested_annotations: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            debug: false,
            max_depth: 32,
            page_href_prefix: "?page_id=".to_owned(),
            nested_annotations: false,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`notion.token`").
        field: String,
        /// Error message (e.g., "${`NOTION_TOKEN`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `notion.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(token) = &settings.token {
            self.notion.token.clone_from(token);
        }
        if let Some(version) = &settings.version {
            self.notion.version.clone_from(version);
        }
        if let Some(debug) = settings.debug {
            self.render.debug = debug;
        }
        if let Some(max_depth) = settings.max_depth {
            self.render.max_depth = max_depth;
        }
        if let Some(nested) = settings.nested_annotations {
            self.render.nested_annotations = nested;
        }
    }

    /// Get the validated integration token.
    ///
    /// The token is only required by commands that talk to the API, so it is
    /// not checked by [`Config::validate`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the token is empty.
    pub fn require_token(&self) -> Result<&str, ConfigError> {
        require_non_empty(&self.notion.token, "notion.token")?;
        Ok(&self.notion.token)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_notion()?;
        self.validate_render()?;
        Ok(())
    }

    fn validate_notion(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.notion.version, "notion.version")?;
        require_non_empty(&self.notion.base_url, "notion.base_url")?;
        require_http_url(&self.notion.base_url, "notion.base_url")?;
        if self.notion.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "notion.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_render(&self) -> Result<(), ConfigError> {
        if self.render.max_depth == 0 {
            return Err(ConfigError::Validation(
                "render.max_depth must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.notion.token = expand::expand_env(&self.notion.token, "notion.token")?;
        self.notion.version = expand::expand_env(&self.notion.version, "notion.version")?;
        self.notion.base_url = expand::expand_env(&self.notion.base_url, "notion.base_url")?;
        self.render.page_href_prefix =
            expand::expand_env(&self.render.page_href_prefix, "render.page_href_prefix")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.notion.token, "");
        assert_eq!(config.notion.version, "2022-06-28");
        assert_eq!(config.notion.base_url, "https://api.notion.com/v1");
        assert_eq!(config.notion.timeout_secs, 30);
        assert!(!config.render.debug);
        assert_eq!(config.render.max_depth, 32);
        assert_eq!(config.render.page_href_prefix, "?page_id=");
        assert!(!config.render.nested_annotations);
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.notion.version, DEFAULT_API_VERSION);
        assert_eq!(config.render.max_depth, 32);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[notion]
token = "secret_123"
version = "2021-08-16"
base_url = "http://localhost:8080/v1"
timeout_secs = 5

[render]
debug = true
max_depth = 8
page_href_prefix = "/pages/"
nested_annotations = true
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.notion.token, "secret_123");
        assert_eq!(config.notion.version, "2021-08-16");
        assert_eq!(config.notion.base_url, "http://localhost:8080/v1");
        assert_eq!(config.notion.timeout_secs, 5);
        assert!(config.render.debug);
        assert_eq!(config.render.max_depth, 8);
        assert_eq!(config.render.page_href_prefix, "/pages/");
        assert!(config.render.nested_annotations);
    }

    #[test]
    fn test_require_token_empty() {
        let config = Config::default();
        let err = config.require_token().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("notion.token"));
    }

    #[test]
    fn test_require_token_set() {
        let mut config = Config::default();
        config.notion.token = "secret_abc".to_owned();
        assert_eq!(config.require_token().unwrap(), "secret_abc");
    }

    #[test]
    fn test_validate_rejects_non_http_base_url() {
        let mut config = Config::default();
        config.notion.base_url = "ftp://api.notion.com".to_owned();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("notion.base_url"));
    }

    #[test]
    fn test_validate_rejects_empty_version() {
        let mut config = Config::default();
        config.notion.version = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_depth() {
        let mut config = Config::default();
        config.render.max_depth = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_depth"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.notion.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_cli_settings_token() {
        let mut config = Config::default();
        let overrides = CliSettings {
            token: Some("secret_cli".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.notion.token, "secret_cli");
        assert_eq!(config.notion.version, DEFAULT_API_VERSION); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_multiple() {
        let mut config = Config::default();
        let overrides = CliSettings {
            version: Some("2021-08-16".to_owned()),
            debug: Some(true),
            max_depth: Some(4),
            nested_annotations: Some(true),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.notion.version, "2021-08-16");
        assert!(config.render.debug);
        assert_eq!(config.render.max_depth, 4);
        assert!(config.render.nested_annotations);
        assert_eq!(config.notion.token, ""); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(config.notion.version, DEFAULT_API_VERSION);
        assert!(!config.render.debug);
    }

    #[test]
    fn test_expand_env_vars_token() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("NOTION_CONFIG_TEST_TOKEN", "secret_env");
        }

        let toml = r#"
[notion]
token = "${NOTION_CONFIG_TEST_TOKEN}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();
        assert_eq!(config.notion.token, "secret_env");
    }

    #[test]
    fn test_expand_env_vars_missing_reports_field() {
        let toml = r#"
[notion]
token = "${NOTION_CONFIG_TEST_NEVER_SET}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { ref field, .. } if field == "notion.token"));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let result = Config::load(Some(Path::new("/nonexistent/notion.toml")), None);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_from_file_sets_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[render]\nmax_depth = 3\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.render.max_depth, 3);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_applies_cli_settings_after_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[render]\ndebug = false\n").unwrap();

        let settings = CliSettings {
            debug: Some(true),
            ..Default::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert!(config.render.debug);
    }
}
