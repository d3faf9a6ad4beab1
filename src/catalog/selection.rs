//! User selection over the catalog and the views derived from it.
//!
//! A [`Selection`] is never trusted as-is: every change goes through
//! [`Selection::repaired`], which snaps the material and thickness back onto
//! values the current printer and filters actually offer.

use std::collections::{BTreeMap, BTreeSet};

use super::types::{LayerOption, MaterialOption, PrinterOption};
use super::Catalog;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub printer_id: String,
    /// Category node ids; empty means no filtering.
    pub category_filters: BTreeSet<String>,
    pub material_code: String,
    /// Exact thickness of the chosen layer option.
    pub thickness_mm: Option<f64>,
}

impl Selection {
    /// Starting selection: the preferred printer if present, else the first
    /// one, with material and thickness filled in.
    pub fn initial(catalog: &Catalog, preferred_printer: &str) -> Self {
        let printer_id = catalog
            .printers
            .iter()
            .find(|p| p.label == preferred_printer)
            .or_else(|| catalog.printers.first())
            .map(|p| p.id.clone())
            .unwrap_or_default();

        Self {
            printer_id,
            ..Self::default()
        }
        .repaired(catalog)
    }

    /// Re-establish the selection invariants against the catalog.
    ///
    /// - the material is one of the filtered materials, else the first of
    ///   them, else empty
    /// - the thickness is one of that material's layers, else its first
    ///   layer, else none
    pub fn repaired(mut self, catalog: &Catalog) -> Self {
        let printer = catalog.printer(&self.printer_id);
        let materials = filtered_materials(catalog, printer, &self.category_filters);

        let material = materials
            .iter()
            .find(|m| m.code == self.material_code)
            .or_else(|| materials.first())
            .copied();
        self.material_code = material.map(|m| m.code.clone()).unwrap_or_default();

        let previous = self.thickness_mm;
        self.thickness_mm = material.and_then(|m| {
            previous
                .and_then(|t| m.layer(t))
                .or_else(|| m.layers.first())
                .map(|l| l.thickness_mm)
        });

        self
    }

    pub fn with_printer(mut self, printer_id: &str, catalog: &Catalog) -> Self {
        self.printer_id = printer_id.to_string();
        self.repaired(catalog)
    }

    pub fn with_material(mut self, code: &str, catalog: &Catalog) -> Self {
        self.material_code = code.to_string();
        self.repaired(catalog)
    }

    pub fn with_thickness(mut self, thickness_mm: f64, catalog: &Catalog) -> Self {
        self.thickness_mm = Some(thickness_mm);
        self.repaired(catalog)
    }

    /// Add the filter if absent, remove it if present.
    pub fn toggle_filter(mut self, node_id: &str, catalog: &Catalog) -> Self {
        if !self.category_filters.remove(node_id) {
            self.category_filters.insert(node_id.to_string());
        }
        self.repaired(catalog)
    }

    pub fn clear_filters(mut self, catalog: &Catalog) -> Self {
        self.category_filters.clear();
        self.repaired(catalog)
    }
}

/// Read-only views computed from a catalog and a selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionView<'a> {
    pub printer: Option<&'a PrinterOption>,
    /// Materials of the printer that pass the category filters.
    pub materials: Vec<&'a MaterialOption>,
    pub material: Option<&'a MaterialOption>,
    /// Layer matching the selected thickness; carries the scene payload.
    pub layer: Option<&'a LayerOption>,
}

impl<'a> SelectionView<'a> {
    pub fn derive(catalog: &'a Catalog, selection: &Selection) -> Self {
        let printer = catalog.printer(&selection.printer_id);
        let materials = filtered_materials(catalog, printer, &selection.category_filters);
        let material = materials
            .iter()
            .find(|m| m.code == selection.material_code)
            .copied();
        let layer = material.and_then(|m| selection.thickness_mm.and_then(|t| m.layer(t)));

        Self {
            printer,
            materials,
            material,
            layer,
        }
    }
}

/// Materials of `printer` whose code is in any of the selected categories.
///
/// With no filters every material passes. Filters combine with OR.
pub fn filtered_materials<'a>(
    catalog: &Catalog,
    printer: Option<&'a PrinterOption>,
    filters: &BTreeSet<String>,
) -> Vec<&'a MaterialOption> {
    let Some(printer) = printer else {
        return Vec::new();
    };
    if filters.is_empty() {
        return printer.materials.iter().collect();
    }

    let allowed = catalog.index.codes_matching(filters);
    printer
        .materials
        .iter()
        .filter(|m| allowed.contains(m.code.as_str()))
        .collect()
}

/// For every category node, how many of the printer's materials it covers.
///
/// Display only; filtering never looks at these numbers.
pub fn category_counts<'a>(
    catalog: &'a Catalog,
    printer: Option<&PrinterOption>,
) -> BTreeMap<&'a str, usize> {
    catalog
        .index
        .node_ids()
        .map(|(id, codes)| {
            let count = printer
                .map(|p| p.materials.iter().filter(|m| codes.contains(&m.code)).count())
                .unwrap_or(0);
            (id.as_str(), count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::RawCatalog;
    use serde_json::json;

    fn setting(code: &str, machine: &str, thickness: f64) -> serde_json::Value {
        json!({
            "label": format!("{:.3} mm", thickness),
            "scene_settings": {
                "machine_type": machine,
                "material_code": code,
                "layer_thickness_mm": thickness
            }
        })
    }

    fn material(label: &str, code: &str, machine: &str, thicknesses: &[f64]) -> serde_json::Value {
        let settings: Vec<_> = thicknesses
            .iter()
            .map(|t| setting(code, machine, *t))
            .collect();
        json!({ "label": label, "description": "", "material_settings": settings })
    }

    fn catalog() -> Catalog {
        let raw: RawCatalog = serde_json::from_value(json!({
            "printer_types": [
                {
                    "label": "Form 4",
                    "supported_machine_type_ids": ["FORM-4-0"],
                    "materials": [
                        material("Castable Wax", "FLCW4001", "FORM-4-0", &[0.05]),
                        material("Draft Model", "RS-F2-DM", "FORM-4-0", &[0.1, 0.2]),
                        material("Grey V5", "FLGPGR05", "FORM-4-0", &[0.025, 0.05, 0.1])
                    ]
                },
                {
                    "label": "Form 3+",
                    "supported_machine_type_ids": ["FORM-3-1"],
                    "materials": [
                        material("Grey V4", "FLGPGR04", "FORM-3-1", &[0.05, 0.1]),
                        material("Tough 2000", "FLTO2K02", "FORM-3-1", &[0.1])
                    ]
                }
            ]
        }))
        .unwrap();

        let taxonomy = json!({
            "dental": { "models": ["RS-F2-DM"] },
            "jewelry": { "casting": ["FLCW4001"] },
            "engineering": ["FLTO2K02"],
            "functional": ["FLGPGR05", "FLTO2K02"]
        });
        Catalog::from_parts(&raw, &taxonomy)
    }

    fn filters(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_initial_prefers_configured_printer() {
        let catalog = catalog();
        let sel = Selection::initial(&catalog, "Form 4");
        assert_eq!(sel.printer_id, "FORM-4-0");
        assert_eq!(sel.material_code, "FLCW4001");
        assert_eq!(sel.thickness_mm, Some(0.05));
        assert!(sel.category_filters.is_empty());
    }

    #[test]
    fn test_initial_falls_back_to_first_printer() {
        let catalog = catalog();
        let sel = Selection::initial(&catalog, "Form 5");
        assert_eq!(sel.printer_id, "FORM-3-1");
        assert_eq!(sel.material_code, "FLGPGR04");
    }

    #[test]
    fn test_initial_on_empty_catalog() {
        let empty = Catalog::default();
        let sel = Selection::initial(&empty, "Form 4");
        assert_eq!(sel, Selection::default());
        let view = SelectionView::derive(&empty, &sel);
        assert!(view.printer.is_none());
        assert!(view.materials.is_empty());
        assert!(view.layer.is_none());
    }

    #[test]
    fn test_no_filter_shows_all_printer_materials() {
        let catalog = catalog();
        let sel = Selection::initial(&catalog, "Form 4");
        let view = SelectionView::derive(&catalog, &sel);
        assert_eq!(view.materials.len(), 3);
    }

    #[test]
    fn test_disjoint_filters_union() {
        let catalog = catalog();
        let sel = Selection::initial(&catalog, "Form 4")
            .toggle_filter("dental", &catalog)
            .toggle_filter("jewelry/casting", &catalog);

        let view = SelectionView::derive(&catalog, &sel);
        let codes: Vec<_> = view.materials.iter().map(|m| m.code.as_str()).collect();
        assert_eq!(codes, vec!["FLCW4001", "RS-F2-DM"]);
    }

    #[test]
    fn test_toggle_filter_twice_removes_it() {
        let catalog = catalog();
        let sel = Selection::initial(&catalog, "Form 4")
            .toggle_filter("dental", &catalog)
            .toggle_filter("dental", &catalog);
        assert!(sel.category_filters.is_empty());
    }

    #[test]
    fn test_filter_repairs_material_and_thickness() {
        let catalog = catalog();
        let sel = Selection::initial(&catalog, "Form 4")
            .with_material("FLGPGR05", &catalog)
            .with_thickness(0.025, &catalog)
            .toggle_filter("dental", &catalog);

        assert_eq!(sel.material_code, "RS-F2-DM");
        assert_eq!(sel.thickness_mm, Some(0.1));
    }

    #[test]
    fn test_printer_switch_resets_material() {
        let catalog = catalog();
        let sel = Selection::initial(&catalog, "Form 4")
            .toggle_filter("dental", &catalog)
            .with_material("RS-F2-DM", &catalog)
            .with_thickness(0.2, &catalog);
        assert_eq!(sel.material_code, "RS-F2-DM");
        assert_eq!(sel.thickness_mm, Some(0.2));

        // Form 3+ carries nothing under dental
        let switched = sel.clone().with_printer("FORM-3-1", &catalog);
        assert_eq!(switched.category_filters, filters(&["dental"]));
        assert_eq!(switched.material_code, "");
        assert_eq!(switched.thickness_mm, None);

        // Without the filter the first Form 3+ material is picked
        let unfiltered = switched.clear_filters(&catalog);
        assert_eq!(unfiltered.material_code, "FLGPGR04");
        assert_eq!(unfiltered.thickness_mm, Some(0.05));
    }

    #[test]
    fn test_printer_switch_picks_first_of_new_filtered_list() {
        let catalog = catalog();
        let sel = Selection::initial(&catalog, "Form 4")
            .toggle_filter("functional", &catalog)
            .with_thickness(0.025, &catalog);
        assert_eq!(sel.material_code, "FLGPGR05");
        assert_eq!(sel.thickness_mm, Some(0.025));

        // Form 3+ only has Tough 2000 under functional, and no 0.025 layer
        let switched = sel.with_printer("FORM-3-1", &catalog);
        assert_eq!(switched.category_filters, filters(&["functional"]));
        assert_eq!(switched.material_code, "FLTO2K02");
        assert_eq!(switched.thickness_mm, Some(0.1));

        let view = SelectionView::derive(&catalog, &switched);
        let codes: Vec<_> = view.materials.iter().map(|m| m.code.as_str()).collect();
        assert_eq!(codes, vec!["FLTO2K02"]);
        assert_eq!(view.layer.map(|l| l.scene.material_code.as_str()), Some("FLTO2K02"));
    }

    #[test]
    fn test_reselecting_printer_keeps_material() {
        let catalog = catalog();
        let sel = Selection::initial(&catalog, "Form 3+")
            .with_material("FLTO2K02", &catalog)
            .toggle_filter("engineering", &catalog);
        assert_eq!(sel.material_code, "FLTO2K02");

        let back = sel.with_printer("FORM-3-1", &catalog);
        assert_eq!(back.material_code, "FLTO2K02");
    }

    #[test]
    fn test_unknown_thickness_snaps_to_first() {
        let catalog = catalog();
        let sel = Selection::initial(&catalog, "Form 4")
            .with_material("FLGPGR05", &catalog)
            .with_thickness(0.3, &catalog);
        assert_eq!(sel.thickness_mm, Some(0.025));
    }

    #[test]
    fn test_view_resolves_scene_payload() {
        let catalog = catalog();
        let sel = Selection::initial(&catalog, "Form 4")
            .with_material("FLGPGR05", &catalog)
            .with_thickness(0.05, &catalog);
        let view = SelectionView::derive(&catalog, &sel);

        let layer = view.layer.unwrap();
        assert_eq!(layer.scene.machine_type, "FORM-4-0");
        assert_eq!(layer.scene.material_code, "FLGPGR05");
        assert_eq!(layer.scene.layer_thickness_mm, 0.05);

        let exported = layer.scene.to_pretty_json().unwrap();
        let parsed: crate::catalog::SceneSettings = serde_json::from_str(&exported).unwrap();
        assert_eq!(parsed, layer.scene);
    }

    #[test]
    fn test_unknown_filter_yields_nothing() {
        let catalog = catalog();
        let sel = Selection::initial(&catalog, "Form 4").toggle_filter("nope", &catalog);
        let view = SelectionView::derive(&catalog, &sel);
        assert!(view.materials.is_empty());
        assert!(view.material.is_none());
        assert_eq!(sel.material_code, "");
    }

    #[test]
    fn test_category_counts_per_printer() {
        let catalog = catalog();
        let form4 = catalog.printer("FORM-4-0");
        let counts = category_counts(&catalog, form4);
        assert_eq!(counts["dental"], 1);
        assert_eq!(counts["dental/models"], 1);
        assert_eq!(counts["jewelry"], 1);
        assert_eq!(counts["engineering"], 0);

        let form3 = catalog.printer("FORM-3-1");
        let counts = category_counts(&catalog, form3);
        assert_eq!(counts["engineering"], 1);
        assert_eq!(counts["dental"], 0);

        let counts = category_counts(&catalog, None);
        assert!(counts.values().all(|c| *c == 0));
    }

    #[test]
    fn test_counts_do_not_gate_filtering() {
        let catalog = catalog();
        // engineering counts 0 on Form 4 but can still be selected
        let sel = Selection::initial(&catalog, "Form 4")
            .toggle_filter("engineering", &catalog)
            .toggle_filter("dental", &catalog);
        let view = SelectionView::derive(&catalog, &sel);
        assert_eq!(view.materials.len(), 1);
        assert!(sel.category_filters.contains("engineering"));
    }

    #[test]
    fn test_repair_is_stable() {
        let catalog = catalog();
        let sel = Selection::initial(&catalog, "Form 4").toggle_filter("jewelry", &catalog);
        assert_eq!(sel.clone().repaired(&catalog), sel);
    }
}
