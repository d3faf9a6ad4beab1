//! TOML loading for the application configuration.
//!
//! The config is compiled into the binary; nothing is read from disk.
//! - `embedded_config()` - Parses the embedded config, reporting errors
//! - `default_config()` - Same, but panics on a bad embed

use anyhow::{bail, Result};

use super::types::AppConfig;

/// Default config embedded in the binary at compile time.
/// Loaded from `src-tauri/config/app.toml`.
const DEFAULT_CONFIG: &str = include_str!("../../config/app.toml");

/// Longest accepted copy-feedback reset delay.
pub const MAX_COPY_RESET_MS: u32 = 60_000;

/// Parse and sanity-check a config document.
pub fn parse_config(content: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(content)?;
    if config.catalog.preferred_printer.trim().is_empty() {
        bail!("catalog.preferred_printer must not be empty");
    }
    if config.feedback.copy_reset_ms == 0 {
        bail!("feedback.copy_reset_ms must be greater than zero");
    }
    if config.feedback.copy_reset_ms > MAX_COPY_RESET_MS {
        bail!(
            "feedback.copy_reset_ms must be at most {} (got {})",
            MAX_COPY_RESET_MS,
            config.feedback.copy_reset_ms
        );
    }
    Ok(config)
}

/// Parse the config embedded in the binary.
pub fn embedded_config() -> Result<AppConfig> {
    parse_config(DEFAULT_CONFIG)
}

/// Get the default config embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_config() -> AppConfig {
    embedded_config().expect("embedded app.toml must be valid")
}
