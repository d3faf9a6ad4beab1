//! Bundled printer/material catalog and the lookups built over it.
//!
//! Everything here is plain data transformation with no browser calls, so
//! it is unit-tested natively.
//!
//! # Pipeline
//!
//! - **Taxonomy**: nested category document -> tree of [`CategoryNode`]
//! - **Index**: tree -> node id to codes, code to breadcrumbs
//! - **Normalize**: raw printer catalog + index -> sorted [`PrinterOption`]s
//! - **Selection**: catalog + user picks -> repaired [`Selection`] and derived [`SelectionView`]
//!
//! The bundled datasets are parsed once into a process-wide [`Catalog`]
//! (see [`bundled`]).

mod feedback;
mod index;
mod normalize;
mod selection;
#[cfg(test)]
mod test_support;
mod taxonomy;
mod types;

use std::sync::LazyLock;

pub use feedback::{reset_timeout, CopyFeedback, CopyStatus, COPY_FEEDBACK_RESET_MS};
pub use index::{CategoryIndex, BREADCRUMB_SEPARATOR};
pub use selection::{category_counts, Selection, SelectionView};
pub use taxonomy::CategoryNode;
pub use types::*;

use normalize::normalize_printers;
use taxonomy::build_category_tree;

const BUNDLED_PRINTERS: &str = include_str!("../../data/printers.json");
const BUNDLED_CATEGORIES: &str = include_str!("../../data/categories.json");

static BUNDLED: LazyLock<Result<Catalog, String>> =
    LazyLock::new(|| Catalog::from_json(BUNDLED_PRINTERS, BUNDLED_CATEGORIES));

static EMPTY: LazyLock<Catalog> = LazyLock::new(Catalog::default);

/// Query-ready catalog: category tree, its index, and normalized printers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub categories: Vec<CategoryNode>,
    pub index: CategoryIndex,
    pub printers: Vec<PrinterOption>,
}

impl Catalog {
    /// Build a catalog from the two source documents.
    ///
    /// A taxonomy that is not valid JSON is treated as having no categories.
    /// An unreadable printer document is an error.
    pub fn from_json(printers_json: &str, categories_json: &str) -> Result<Self, String> {
        let raw: RawCatalog = serde_json::from_str(printers_json)
            .map_err(|e| format!("Failed to parse printer catalog: {}", e))?;
        let taxonomy: serde_json::Value = serde_json::from_str(categories_json).unwrap_or_default();
        Ok(Self::from_parts(&raw, &taxonomy))
    }

    pub fn from_parts(raw: &RawCatalog, taxonomy: &serde_json::Value) -> Self {
        let categories = build_category_tree(taxonomy);
        let index = CategoryIndex::build(&categories);
        let printers = normalize_printers(raw, &index);
        Self {
            categories,
            index,
            printers,
        }
    }

    pub fn printer(&self, id: &str) -> Option<&PrinterOption> {
        self.printers.iter().find(|p| p.id == id)
    }
}

/// The catalog compiled into the binary, parsed on first use.
pub fn bundled() -> Result<&'static Catalog, &'static str> {
    BUNDLED.as_ref().map_err(String::as_str)
}

/// An empty catalog for when the bundled one cannot be read.
pub fn empty() -> &'static Catalog {
    &EMPTY
}
