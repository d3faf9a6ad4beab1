//! Category tree built from the nested taxonomy document.
//!
//! Each key of the document becomes a node. Arrays are leaves holding
//! material codes, objects are branches whose codes are the union of their
//! descendants.

use serde::Serialize;
use serde_json::{Map, Value};

/// A node in the category taxonomy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryNode {
    /// Slash-joined key path from the root, e.g. `dental/models`.
    pub id: String,
    pub label: String,
    /// Own codes for leaves, union of descendant codes for branches.
    /// Deduplicated, first-seen order.
    pub codes: Vec<String>,
    pub kind: CategoryKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CategoryKind {
    Leaf { codes: Vec<String> },
    Branch { children: Vec<CategoryNode> },
}

impl CategoryNode {
    /// Codes listed directly on this node (leaves only).
    pub fn own_codes(&self) -> &[String] {
        match &self.kind {
            CategoryKind::Leaf { codes } => codes,
            CategoryKind::Branch { .. } => &[],
        }
    }

    pub fn children(&self) -> &[CategoryNode] {
        match &self.kind {
            CategoryKind::Leaf { .. } => &[],
            CategoryKind::Branch { children } => children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, CategoryKind::Leaf { .. })
    }
}

/// Build the category tree from a taxonomy document.
///
/// Anything other than a JSON object yields an empty tree.
pub fn build_category_tree(document: &Value) -> Vec<CategoryNode> {
    match document {
        Value::Object(map) => build_children(map, ""),
        _ => Vec::new(),
    }
}

fn build_children(map: &Map<String, Value>, parent_id: &str) -> Vec<CategoryNode> {
    map.iter()
        .map(|(key, value)| build_node(key, value, parent_id))
        .collect()
}

fn build_node(key: &str, value: &Value, parent_id: &str) -> CategoryNode {
    let id = if parent_id.is_empty() {
        key.to_string()
    } else {
        format!("{}/{}", parent_id, key)
    };
    let label = category_label(key);

    match value {
        Value::Array(entries) => {
            let mut codes = Vec::new();
            for code in entries.iter().filter_map(Value::as_str) {
                push_unique(&mut codes, code);
            }
            CategoryNode {
                id,
                label,
                codes: codes.clone(),
                kind: CategoryKind::Leaf { codes },
            }
        }
        other => {
            let children = match other {
                Value::Object(map) => build_children(map, &id),
                _ => Vec::new(),
            };
            let mut codes = Vec::new();
            for code in children.iter().flat_map(|c| c.codes.iter()) {
                push_unique(&mut codes, code);
            }
            CategoryNode {
                id,
                label,
                codes,
                kind: CategoryKind::Branch { children },
            }
        }
    }
}

fn push_unique(codes: &mut Vec<String>, code: &str) {
    if !codes.iter().any(|c| c == code) {
        codes.push(code.to_string());
    }
}

/// Turn a taxonomy key into a display label: `dental-models` -> `Dental Models`.
pub fn category_label(key: &str) -> String {
    key.split(['-', '_'])
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
