pub mod config;
pub mod diagnostics;
