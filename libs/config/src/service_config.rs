//! Service Configuration Module
//!
//! Provides configuration loading for Fiado services and tools.
//! Layers, lowest precedence first:
//!
//! 1. Built-in defaults from [`crate::service`]
//! 2. Base TOML file (`config/fiado.toml` unless a path is given)
//! 3. Environment file `environments/<env>.toml` next to the base file
//! 4. `FIADO_` environment variables, `__` between section and key
//!    (`FIADO_CHARGE__QR_SIZE=512`)

use crate::service;
use anyhow::{bail, Context, Result};
use config_crate::{Config, Environment, File};
use pix_codec::ValidationLevel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct FiadoConfig {
    /// Global settings
    pub global: GlobalConfig,

    /// Pix payload generation
    pub pix: PixConfig,

    /// Charge links and QR rendering
    pub charge: ChargeConfig,
}

/// Global configuration settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct GlobalConfig {
    /// Default tracing directive when `RUST_LOG` is unset
    pub log_level: String,
}

/// Pix payload settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct PixConfig {
    pub default_merchant_name: String,
    pub default_merchant_city: String,
    /// Check applied to each generated code before it is shown
    pub validation_level: ValidationLevel,
}

/// Charge flow settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ChargeConfig {
    pub public_base_url: String,
    pub qr_renderer_url: String,
    pub qr_size: u32,
    pub whatsapp_base_url: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: service::global::LOG_LEVEL.to_string(),
        }
    }
}

impl Default for PixConfig {
    fn default() -> Self {
        Self {
            default_merchant_name: service::pix::DEFAULT_MERCHANT_NAME.to_string(),
            default_merchant_city: service::pix::DEFAULT_MERCHANT_CITY.to_string(),
            validation_level: ValidationLevel::Shallow,
        }
    }
}

impl Default for ChargeConfig {
    fn default() -> Self {
        Self {
            public_base_url: service::charge::PUBLIC_BASE_URL.to_string(),
            qr_renderer_url: service::charge::QR_RENDERER_URL.to_string(),
            qr_size: service::charge::QR_SIZE_PX,
            whatsapp_base_url: service::charge::WHATSAPP_BASE_URL.to_string(),
        }
    }
}

impl FiadoConfig {
    /// Load configuration from files with environment overrides
    ///
    /// An explicit `base_path` must exist; the default path is optional.
    pub fn load(base_path: Option<&Path>, environment: Option<&str>) -> Result<Self> {
        Self::load_with_env(base_path, environment, None)
    }

    /// Same as [`load`](Self::load), reading `FIADO_` variables from `env_vars`
    /// instead of the process environment when given
    pub fn load_with_env(
        base_path: Option<&Path>,
        environment: Option<&str>,
        env_vars: Option<HashMap<String, String>>,
    ) -> Result<Self> {
        let (base, required) = match base_path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(service::global::CONFIG_PATH), false),
        };

        if !required && !base.exists() {
            debug!("No config file at {:?}, using defaults", base);
        }

        let mut builder = Config::builder().add_source(File::from(base.as_path()).required(required));

        // Add environment-specific overrides if specified
        if let Some(env) = environment {
            let env_file = base
                .parent()
                .unwrap_or(Path::new("."))
                .join("environments")
                .join(format!("{env}.toml"));

            if env_file.exists() {
                info!("Loading environment config: {:?}", env_file);
                builder = builder.add_source(File::from(env_file));
            } else {
                warn!("Environment config not found: {:?}", env_file);
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(service::global::ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env_vars),
        );

        let config: FiadoConfig = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values that would produce broken links or blank merchant fields
    pub fn validate(&self) -> Result<()> {
        if self.pix.default_merchant_name.trim().is_empty() {
            bail!("pix.default_merchant_name must not be empty");
        }
        if self.pix.default_merchant_city.trim().is_empty() {
            bail!("pix.default_merchant_city must not be empty");
        }
        if self.charge.qr_size == 0 {
            bail!("charge.qr_size must be greater than zero");
        }
        for (key, url) in [
            ("charge.public_base_url", &self.charge.public_base_url),
            ("charge.qr_renderer_url", &self.charge.qr_renderer_url),
            ("charge.whatsapp_base_url", &self.charge.whatsapp_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                bail!("{key} must be an http(s) URL, got {url:?}");
            }
        }
        Ok(())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

/// Convenience function to load configuration with defaults
pub fn load_config(path: Option<&Path>, environment: Option<&str>) -> Result<FiadoConfig> {
    FiadoConfig::load(path, environment)
}
