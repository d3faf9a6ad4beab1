//! Type definitions for the application configuration.
//!
//! Deserialized from TOML and serialized as JSON for the frontend.

use serde::{Deserialize, Serialize};

/// Root configuration loaded from app.toml.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub feedback: FeedbackConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Label of the printer selected on startup
    pub preferred_printer: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FeedbackConfig {
    /// Delay before the copy status returns to idle
    #[serde(default = "default_copy_reset_ms")]
    pub copy_reset_ms: u32,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            copy_reset_ms: default_copy_reset_ms(),
        }
    }
}

fn default_copy_reset_ms() -> u32 {
    1500
}
