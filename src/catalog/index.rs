//! Lookup tables derived from the category tree.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::taxonomy::CategoryNode;

/// Separator between labels in a breadcrumb.
pub const BREADCRUMB_SEPARATOR: &str = " \u{203A} ";

/// Flattened view of the taxonomy used for filtering and display.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryIndex {
    /// node id -> aggregated codes
    codes_by_node: BTreeMap<String, BTreeSet<String>>,
    /// material code -> sorted, distinct breadcrumbs
    paths_by_code: BTreeMap<String, Vec<String>>,
}

impl CategoryIndex {
    pub fn build(tree: &[CategoryNode]) -> Self {
        let mut codes_by_node = BTreeMap::new();
        flatten(tree, &mut codes_by_node);

        let mut paths_by_code: BTreeMap<String, Vec<String>> = BTreeMap::new();
        index_paths(tree, &[], &mut paths_by_code);
        for paths in paths_by_code.values_mut() {
            paths.sort();
            paths.dedup();
        }

        Self {
            codes_by_node,
            paths_by_code,
        }
    }

    /// Aggregated codes for a node, `None` if the id is unknown.
    pub fn codes_for(&self, node_id: &str) -> Option<&BTreeSet<String>> {
        self.codes_by_node.get(node_id)
    }

    /// Breadcrumbs for a code; empty if the code is uncategorized.
    pub fn paths_for(&self, code: &str) -> &[String] {
        self.paths_by_code
            .get(code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Union of the aggregated codes of every given node id.
    /// Unknown ids contribute nothing.
    pub fn codes_matching<'a, I>(&self, node_ids: I) -> BTreeSet<&str>
    where
        I: IntoIterator<Item = &'a String>,
    {
        node_ids
            .into_iter()
            .filter_map(|id| self.codes_for(id))
            .flat_map(|codes| codes.iter().map(String::as_str))
            .collect()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.codes_by_node.iter()
    }

    #[cfg(test)]
    pub fn node_count(&self) -> usize {
        self.codes_by_node.len()
    }
}

fn flatten(nodes: &[CategoryNode], out: &mut BTreeMap<String, BTreeSet<String>>) {
    for node in nodes {
        out.insert(node.id.clone(), node.codes.iter().cloned().collect());
        flatten(node.children(), out);
    }
}

fn index_paths(
    nodes: &[CategoryNode],
    parent_labels: &[&str],
    out: &mut BTreeMap<String, Vec<String>>,
) {
    for node in nodes {
        let mut labels = parent_labels.to_vec();
        labels.push(&node.label);

        if node.is_leaf() {
            let breadcrumb = labels.join(BREADCRUMB_SEPARATOR);
            for code in node.own_codes() {
                out.entry(code.clone())
                    .or_default()
                    .push(breadcrumb.clone());
            }
        } else {
            index_paths(node.children(), &labels, out);
        }
    }
}
