use tracing::{info, warn};

use crate::config::{embedded_config, AppConfig};
use crate::error::SceneFinderError;

/// Configuration the frontend applies on startup.
#[tauri::command]
pub fn get_app_config() -> Result<AppConfig, String> {
    let config = embedded_config().map_err(|e| {
        warn!("Failed to load app config: {}", e);
        SceneFinderError::Config(e.to_string())
    })?;
    info!(
        "Serving app config: preferred_printer={}, copy_reset_ms={}",
        config.catalog.preferred_printer, config.feedback.copy_reset_ms
    );
    Ok(config)
}
