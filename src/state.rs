use std::collections::BTreeMap;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::catalog::{self, Catalog, CopyFeedback, SceneSettings, Selection, SelectionView};
use crate::commands::{self, AppConfig};

/// Shared finder state, provided once by `App` and read by every page.
#[derive(Clone, Copy)]
pub struct FinderContext {
    pub catalog: &'static Catalog,
    pub config: RwSignal<AppConfig>,
    pub selection: RwSignal<Selection>,
    pub feedback: RwSignal<CopyFeedback>,
}

impl FinderContext {
    pub fn new(catalog: &'static Catalog) -> Self {
        let config = AppConfig::default();
        let selection = Selection::initial(catalog, &config.catalog.preferred_printer);
        Self {
            catalog,
            config: RwSignal::new(config),
            selection: RwSignal::new(selection),
            feedback: RwSignal::new(CopyFeedback::default()),
        }
    }

    /// Current derived view. Re-run inside reactive closures.
    pub fn view(&self) -> SelectionView<'static> {
        let catalog = self.catalog;
        self.selection.with(|sel| SelectionView::derive(catalog, sel))
    }

    /// Occurrence count per category node for the selected printer.
    pub fn category_counts(&self) -> BTreeMap<&'static str, usize> {
        let catalog = self.catalog;
        self.selection.with(|sel| {
            catalog::category_counts(catalog, catalog.printer(&sel.printer_id))
        })
    }

    pub fn apply_config(&self, config: AppConfig) {
        let selection = Selection::initial(self.catalog, &config.catalog.preferred_printer);
        self.config.set(config);
        self.selection.set(selection);
    }

    pub fn select_printer(&self, id: String) {
        let catalog = self.catalog;
        self.selection
            .update(|sel| *sel = std::mem::take(sel).with_printer(&id, catalog));
    }

    pub fn select_material(&self, code: String) {
        let catalog = self.catalog;
        self.selection
            .update(|sel| *sel = std::mem::take(sel).with_material(&code, catalog));
    }

    pub fn select_thickness(&self, thickness_mm: f64) {
        let catalog = self.catalog;
        self.selection
            .update(|sel| *sel = std::mem::take(sel).with_thickness(thickness_mm, catalog));
    }

    pub fn toggle_filter(&self, node_id: String) {
        let catalog = self.catalog;
        self.selection
            .update(|sel| *sel = std::mem::take(sel).toggle_filter(&node_id, catalog));
    }

    pub fn clear_filters(&self) {
        let catalog = self.catalog;
        self.selection
            .update(|sel| *sel = std::mem::take(sel).clear_filters(catalog));
    }

    /// Copy the scene payload to the clipboard and flash the outcome.
    pub fn copy_scene(&self, scene: SceneSettings) {
        let feedback = self.feedback;
        let reset_ms = self.config.with_untracked(|c| c.feedback.copy_reset_ms);

        spawn_local(async move {
            let outcome = match scene.to_pretty_json() {
                Ok(text) => commands::write_clipboard(&text).await,
                Err(e) => Err(e),
            };

            let generation = feedback
                .try_update(|f| f.record(outcome.is_ok()))
                .unwrap_or_default();

            let callback = wasm_bindgen::closure::Closure::once(move || {
                feedback.update(|f| f.expire(generation));
            });
            if let Some(window) = web_sys::window() {
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.as_ref().unchecked_ref(),
                    catalog::reset_timeout(reset_ms),
                );
            }
            callback.forget();

            if let Err(e) = outcome {
                web_sys::console::error_1(&format!("Clipboard write failed: {}", e).into());
                let _ = commands::report_client_error("clipboard", &e).await;
            }
        });
    }
}

pub fn use_finder() -> FinderContext {
    expect_context::<FinderContext>()
}
