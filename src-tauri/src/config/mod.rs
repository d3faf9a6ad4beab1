//! Application configuration served to the frontend.
//!
//! The defaults live in `config/app.toml` and are compiled into the binary.
//! The frontend fetches them once on startup through `get_app_config`.

mod loader;
mod types;

pub use loader::{default_config, embedded_config, parse_config, MAX_COPY_RESET_MS};
pub use types::*;
