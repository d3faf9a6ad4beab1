use tracing::warn;

use crate::error::SceneFinderError;

/// Longest message accepted from the frontend.
const MAX_MESSAGE_LEN: usize = 2048;

/// Log a failure the frontend cannot handle itself (e.g. clipboard denied).
#[tauri::command]
pub fn report_client_error(context: &str, message: &str) -> Result<(), String> {
    if context.trim().is_empty() {
        return Err(SceneFinderError::Diagnostics("Missing error context".to_string()).into());
    }
    let message: String = message.chars().take(MAX_MESSAGE_LEN).collect();
    warn!(context = context, "Frontend error: {}", message);
    Ok(())
}
