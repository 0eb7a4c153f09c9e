//! # Fiado Centralized Configuration
//!
//! Configuration loading and compile-time defaults shared by Fiado services
//! and the `fiado-pix` tool.
//!
//! ## Features
//!
//! - **Service Defaults**: fallback merchant identity, QR renderer, link bases
//! - **Layered Loading**: TOML file, per-environment file, `FIADO_` variables
//!
//! ## Usage
//!
//! ```rust
//! use fiado_config::{service, FiadoConfig};
//!
//! let config = FiadoConfig::default();
//! assert_eq!(config.pix.default_merchant_name, service::pix::DEFAULT_MERCHANT_NAME);
//! assert_eq!(config.charge.qr_size, 256);
//! ```

pub mod service;
pub mod service_config;

// Re-export commonly used types
pub use service_config::{load_config, ChargeConfig, FiadoConfig, GlobalConfig, PixConfig};
