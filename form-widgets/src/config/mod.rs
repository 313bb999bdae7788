//! Configuration management for form-widgets
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `FORM_WIDGETS_` prefix, `__` for nesting)
//! 2. `./config.toml` (development)
//! 3. `~/.config/form-widgets/{service}/config.toml` (user config, XDG)
//! 4. `/etc/form-widgets/{service}/config.toml` (system config)
//! 5. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! [templates]
//! base_dir = "./templates"
//! default_style = "bootstrap3"
//! trim_blocks = true
//! lstrip_blocks = true
//! strict_undefined = false
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use form_widgets::config::WidgetConfig;
//! use form_widgets::widgets::WidgetFactory;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = WidgetConfig::load_for_service("my-app")?;
//! let factory = WidgetFactory::from_config(&config);
//! let style = config.templates.style()?;
//! # Ok(())
//! # }
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::widgets::{Style, WidgetError};

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "FORM_WIDGETS_";

/// Template loading and composition settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
    /// Directory that holds the template catalog
    pub base_dir: PathBuf,

    /// Style used when the caller does not name one
    pub default_style: String,

    /// Remove the first newline after a block tag
    pub trim_blocks: bool,

    /// Strip leading whitespace before a block tag
    pub lstrip_blocks: bool,

    /// Fail rendering when a template references missing data
    pub strict_undefined: bool,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("./templates"),
            default_style: Style::CLASSIC.dir().to_string(),
            trim_blocks: true,
            lstrip_blocks: true,
            strict_undefined: false,
        }
    }
}

impl TemplateSettings {
    /// Parse the configured default style
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::InvalidStyle`] if the name is not usable.
    pub fn style(&self) -> Result<Style, WidgetError> {
        Style::new(self.default_style.as_str())
    }
}

/// Complete form-widgets configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WidgetConfig {
    /// Template settings
    #[serde(default)]
    pub templates: TemplateSettings,
}

impl WidgetConfig {
    /// Load configuration for a specific service
    ///
    /// Searches for configuration in XDG-compliant locations with precedence:
    /// 1. Environment variables (`FORM_WIDGETS_*`)
    /// 2. `./config.toml`
    /// 3. `~/.config/form-widgets/{service_name}/config.toml`
    /// 4. `/etc/form-widgets/{service_name}/config.toml`
    /// 5. Defaults
    pub fn load_for_service(service_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::new()
            .merge(Toml::string(&toml::to_string(&Self::default())?));

        let system_config = PathBuf::from("/etc/form-widgets")
            .join(service_name)
            .join("config.toml");
        if system_config.exists() {
            figment = figment.merge(Toml::file(&system_config));
        }

        let user_config = Self::recommended_path(service_name);
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from("./config.toml");
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        let config = figment.extract()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file leaves the defaults in place. Environment variables
    /// still override the file.
    pub fn load_from(path: &str) -> anyhow::Result<Self> {
        let config = Figment::new()
            .merge(Toml::string(&toml::to_string(&Self::default())?))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true))
            .extract()?;

        Ok(config)
    }

    /// Get the recommended XDG config path for a service
    ///
    /// # Example
    ///
    /// ```rust
    /// use form_widgets::config::WidgetConfig;
    ///
    /// let path = WidgetConfig::recommended_path("my-app");
    /// assert!(path.ends_with("my-app/config.toml"));
    /// ```
    #[must_use]
    pub fn recommended_path(service_name: &str) -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./config.toml"),
            |config_dir| {
                config_dir
                    .join("form-widgets")
                    .join(service_name)
                    .join("config.toml")
            },
        )
    }
}
