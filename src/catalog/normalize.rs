//! Turns the raw printer catalog into sorted, deduplicated options.

use std::cmp::Ordering;

use super::index::CategoryIndex;
use super::types::*;

/// Normalize every printer in the raw catalog.
///
/// Printers without any usable material are dropped; the rest are sorted by label.
pub fn normalize_printers(raw: &RawCatalog, index: &CategoryIndex) -> Vec<PrinterOption> {
    let mut printers: Vec<PrinterOption> = raw
        .printer_types
        .iter()
        .filter_map(|p| normalize_printer(p, index))
        .collect();
    printers.sort_by(|a, b| compare_labels(&a.label, &b.label));
    printers
}

fn normalize_printer(raw: &RawPrinter, index: &CategoryIndex) -> Option<PrinterOption> {
    let mut materials: Vec<MaterialOption> = raw
        .materials
        .iter()
        .map(|m| normalize_material(m, index))
        .filter(|m| !m.layers.is_empty())
        .collect();
    if materials.is_empty() {
        return None;
    }
    materials.sort_by(|a, b| compare_labels(&a.label, &b.label));

    let id = raw
        .supported_machine_type_ids
        .first()
        .cloned()
        .unwrap_or_else(|| slugify(&raw.label));

    Some(PrinterOption {
        id,
        label: raw.label.clone(),
        machine_type_ids: raw.supported_machine_type_ids.clone(),
        product_names: raw.supported_product_names.clone(),
        materials,
    })
}

/// Normalize one material.
///
/// The code comes from the first raw setting (falling back to the label).
/// Settings are deduplicated by thickness with the first one winning, and
/// settings without a usable thickness are skipped.
pub fn normalize_material(raw: &RawMaterial, index: &CategoryIndex) -> MaterialOption {
    let code = raw
        .material_settings
        .first()
        .map(|s| s.scene_settings.material_code.clone())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| raw.label.clone());

    let mut chosen: Vec<(f64, &RawMaterialSetting)> = Vec::new();
    for setting in &raw.material_settings {
        let Some(thickness) = setting.scene_settings.thickness() else {
            continue;
        };
        if chosen.iter().any(|(t, _)| *t == thickness) {
            continue;
        }
        chosen.push((thickness, setting));
    }
    chosen.sort_by(|a, b| a.0.total_cmp(&b.0));

    let layers = chosen
        .into_iter()
        .map(|(thickness, setting)| LayerOption {
            id: format!("{}-{}", code, thickness),
            label: setting.label.clone(),
            thickness_mm: thickness,
            scene: SceneSettings {
                machine_type: setting.scene_settings.machine_type.clone(),
                material_code: setting.scene_settings.material_code.clone(),
                layer_thickness_mm: thickness,
            },
        })
        .collect();

    MaterialOption {
        categories: index.paths_for(&code).to_vec(),
        code,
        label: raw.label.clone(),
        description: raw.description.clone(),
        layers,
    }
}

/// Case-insensitive label comparison with a byte-order tiebreak.
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Lowercase the label and collapse every run of non-alphanumerics into `-`.
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut pending_dash = false;
    for ch in label.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
