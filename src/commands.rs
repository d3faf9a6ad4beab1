use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::catalog::COPY_FEEDBACK_RESET_MS;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
    async fn write_text(text: &str) -> Result<JsValue, JsValue>;
}

// -- Arg structs for serialization --

#[derive(Serialize)]
struct ReportClientErrorArgs {
    context: String,
    message: String,
}

// -- App config matching backend struct --

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CatalogConfig {
    pub preferred_printer: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FeedbackConfig {
    pub copy_reset_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub feedback: FeedbackConfig,
}

impl Default for AppConfig {
    /// Used when the desktop shell is not reachable (e.g. plain browser dev).
    fn default() -> Self {
        Self {
            catalog: CatalogConfig {
                preferred_printer: "Form 4".to_string(),
            },
            feedback: FeedbackConfig {
                copy_reset_ms: COPY_FEEDBACK_RESET_MS,
            },
        }
    }
}

fn js_error_message(err: JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| "Unknown error".to_string())
}

// -- Typed invoke helpers --

pub async fn get_app_config() -> Result<AppConfig, String> {
    let args = serde_wasm_bindgen::to_value(&serde_json::json!({}))
        .map_err(|e| e.to_string())?;

    let result = invoke("get_app_config", args)
        .await
        .map_err(js_error_message)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn report_client_error(context: &str, message: &str) -> Result<(), String> {
    let args = serde_wasm_bindgen::to_value(&ReportClientErrorArgs {
        context: context.to_string(),
        message: message.to_string(),
    })
    .map_err(|e| e.to_string())?;

    invoke("report_client_error", args)
        .await
        .map(|_| ())
        .map_err(js_error_message)
}

// -- Platform clipboard --

pub async fn write_clipboard(text: &str) -> Result<(), String> {
    write_text(text).await.map(|_| ()).map_err(js_error_message)
}
