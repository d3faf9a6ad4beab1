//! Generators and tree helpers shared by the catalog property tests.

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use super::taxonomy::CategoryNode;
use super::types::*;

// ---------------------------------------------------------------------------
// Taxonomy documents
// ---------------------------------------------------------------------------

/// Material code from a small alphabet so the same code shows up under
/// several leaves.
pub fn arb_code() -> impl Strategy<Value = String> {
    "[A-E][0-3]"
}

/// Taxonomy key. `-` and `_` both appear so that sibling keys can share a label.
pub fn arb_key() -> impl Strategy<Value = String> {
    "[a-c]{1,2}([-_][a-c]{1,2})?"
}

fn arb_node() -> impl Strategy<Value = Value> {
    let leaf = prop::collection::vec(arb_code(), 0..5)
        .prop_map(|codes| Value::Array(codes.into_iter().map(Value::String).collect()));
    leaf.prop_recursive(3, 32, 4, |inner| {
        prop::collection::vec((arb_key(), inner), 1..4)
            .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>()))
    })
}

/// Nested taxonomy document: an object whose values are code arrays or
/// further objects, up to three levels deep.
pub fn arb_taxonomy() -> impl Strategy<Value = Value> {
    prop::collection::vec((arb_key(), arb_node()), 0..5)
        .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>()))
}

/// Every node of the tree, parents before children.
pub fn all_nodes(nodes: &[CategoryNode]) -> Vec<&CategoryNode> {
    let mut out = Vec::new();
    for node in nodes {
        out.push(node);
        out.extend(all_nodes(node.children()));
    }
    out
}

// ---------------------------------------------------------------------------
// Raw printer catalog
// ---------------------------------------------------------------------------

/// Thickness as the source may carry it: mostly a few repeated numbers,
/// sometimes a numeric string, sometimes unusable.
pub fn arb_raw_thickness() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => prop::sample::select(vec![0.025, 0.05, 0.1, 0.2]).prop_map(|t| json!(t)),
        1 => prop::sample::select(vec!["0.05", " 0.1 "]).prop_map(|t| json!(t)),
        1 => Just(Value::Null),
        1 => Just(json!("adaptive")),
    ]
}

/// Material whose settings share one code and carry distinct labels, so the
/// surviving layer for each thickness can be traced back to its setting.
pub fn arb_raw_material() -> impl Strategy<Value = RawMaterial> {
    (arb_code(), prop::collection::vec(arb_raw_thickness(), 0..10)).prop_map(
        |(code, thicknesses)| {
            let material_settings = thicknesses
                .into_iter()
                .enumerate()
                .map(|(i, thickness)| RawMaterialSetting {
                    label: format!("setting {}", i),
                    scene_settings: RawSceneSettings {
                        machine_type: "FORM-4-0".to_string(),
                        material_code: code.clone(),
                        layer_thickness_mm: thickness,
                    },
                })
                .collect();
            RawMaterial {
                label: format!("Resin {}", code),
                description: String::new(),
                material_settings,
            }
        },
    )
}

pub fn arb_raw_catalog() -> impl Strategy<Value = RawCatalog> {
    let printer = (
        "[A-Za-z]{1,5} [0-9]",
        prop::collection::vec("FORM-[0-9]-[0-9]", 0..2),
        prop::collection::vec(arb_raw_material(), 0..4),
    )
        .prop_map(|(label, machine_ids, materials)| RawPrinter {
            label,
            supported_machine_type_ids: machine_ids,
            supported_product_names: Vec::new(),
            materials,
        });
    prop::collection::vec(printer, 0..4).prop_map(|printer_types| RawCatalog { printer_types })
}

// ---------------------------------------------------------------------------
// Export payloads
// ---------------------------------------------------------------------------

/// Scene payload with a thickness on a 0.001 mm grid.
pub fn arb_scene() -> impl Strategy<Value = SceneSettings> {
    (any::<String>(), "[A-Z0-9-]{1,12}", 1u32..2000).prop_map(
        |(machine_type, material_code, microns)| SceneSettings {
            machine_type,
            material_code,
            layer_thickness_mm: f64::from(microns) / 1000.0,
        },
    )
}
