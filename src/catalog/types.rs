//! Type definitions for the printer/material catalog.
//!
//! Raw types mirror the bundled JSON documents and deserialize leniently.
//! Normalized types are what the rest of the app reads; they are built once
//! and never mutated.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// RAW TYPES (bundled printers.json)
// =============================================================================

/// Root of the bundled printer catalog document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCatalog {
    #[serde(default)]
    pub printer_types: Vec<RawPrinter>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPrinter {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub supported_machine_type_ids: Vec<String>,
    #[serde(default)]
    pub supported_product_names: Vec<String>,
    #[serde(default)]
    pub materials: Vec<RawMaterial>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMaterial {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub material_settings: Vec<RawMaterialSetting>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMaterialSetting {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub scene_settings: RawSceneSettings,
}

/// Scene settings as they appear in the source document.
///
/// Any extra fields (print profiles, resin tank hints, ...) are ignored.
/// `layer_thickness_mm` is kept as a raw value so that numeric strings can
/// be coerced later.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSceneSettings {
    #[serde(default)]
    pub machine_type: String,
    #[serde(default)]
    pub material_code: String,
    #[serde(default)]
    pub layer_thickness_mm: Value,
}

impl RawSceneSettings {
    /// Layer thickness as a finite number, if the source value is usable.
    ///
    /// Accepts JSON numbers and numeric strings. Anything else (missing,
    /// null, garbage text, NaN/inf) yields `None` and the setting is skipped.
    pub fn thickness(&self) -> Option<f64> {
        let value = match &self.layer_thickness_mm {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }?;
        value.is_finite().then_some(value)
    }
}

// =============================================================================
// NORMALIZED TYPES
// =============================================================================

/// The three fields needed to reproduce a print profile choice.
///
/// Field order is the export order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSettings {
    pub machine_type: String,
    pub material_code: String,
    pub layer_thickness_mm: f64,
}

impl SceneSettings {
    /// Pretty-printed JSON with 2-space indentation, as copied to the clipboard.
    pub fn to_pretty_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| e.to_string())
    }
}

/// One distinct thickness variant of a material.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerOption {
    /// `{material_code}-{thickness}`
    pub id: String,
    pub label: String,
    pub thickness_mm: f64,
    pub scene: SceneSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialOption {
    pub code: String,
    pub label: String,
    pub description: String,
    /// Breadcrumbs of every taxonomy leaf that lists this code.
    pub categories: Vec<String>,
    /// Sorted ascending by thickness, one entry per distinct thickness.
    pub layers: Vec<LayerOption>,
}

impl MaterialOption {
    pub fn layer(&self, thickness_mm: f64) -> Option<&LayerOption> {
        self.layers.iter().find(|l| l.thickness_mm == thickness_mm)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrinterOption {
    pub id: String,
    pub label: String,
    pub machine_type_ids: Vec<String>,
    pub product_names: Vec<String>,
    /// Sorted by label; never empty for printers that survive normalization.
    pub materials: Vec<MaterialOption>,
}

impl PrinterOption {
    #[cfg(test)]
    pub fn material(&self, code: &str) -> Option<&MaterialOption> {
        self.materials.iter().find(|m| m.code == code)
    }
}
