mod commands;
pub mod config;
mod error;

pub use error::SceneFinderError;

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .invoke_handler(tauri::generate_handler![
            commands::config::get_app_config,
            commands::diagnostics::report_client_error,
        ])
        .setup(|_app| {
            let config = config::default_config();
            tracing::info!(
                "SceneFinder starting (preferred printer: {})",
                config.catalog.preferred_printer
            );
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
