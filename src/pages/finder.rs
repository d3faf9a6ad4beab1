use leptos::prelude::*;

use crate::components::category_panel::CategoryPanel;
use crate::components::scene_preview::ScenePreview;
use crate::components::searchable_select::{SearchableSelect, SelectOption};
use crate::state::use_finder;

#[component]
pub fn FinderPage() -> impl IntoView {
    let finder = use_finder();

    let printer_options = Signal::derive(move || {
        finder
            .catalog
            .printers
            .iter()
            .map(|p| SelectOption {
                value: p.id.clone(),
                label: p.label.clone(),
                group: "Printers".to_string(),
            })
            .collect::<Vec<_>>()
    });

    // Materials are grouped under the top-level label of their first category.
    let material_options = Signal::derive(move || {
        finder
            .view()
            .materials
            .into_iter()
            .map(|m| SelectOption {
                value: m.code.clone(),
                label: m.label.clone(),
                group: m
                    .categories
                    .first()
                    .and_then(|c| c.split(crate::catalog::BREADCRUMB_SEPARATOR).next())
                    .unwrap_or("Uncategorized")
                    .to_string(),
            })
            .collect::<Vec<_>>()
    });

    let printer_value = Signal::derive(move || finder.selection.with(|s| s.printer_id.clone()));
    let material_value =
        Signal::derive(move || finder.selection.with(|s| s.material_code.clone()));

    let material_summary = move || {
        let view = finder.view();
        let total = view.printer.map(|p| p.materials.len()).unwrap_or(0);
        format!("{} of {} materials", view.materials.len(), total)
    };

    let description = move || {
        finder
            .view()
            .material
            .map(|m| m.description.clone())
            .unwrap_or_default()
    };

    view! {
        <div class="page finder-page">
            <h2>"Find Scene Settings"</h2>
            <p class="page-description">
                "Pick a printer, narrow materials by application, and copy the settings for a layer thickness."
            </p>

            <div class="finder-layout">
                <aside class="finder-filters">
                    <CategoryPanel />
                </aside>

                <div class="finder-main">
                    <div class="form-group">
                        <label for="printer-select">"Printer"</label>
                        <SearchableSelect
                            id="printer-select"
                            placeholder="Select a printer"
                            noun="printer"
                            options=printer_options
                            value=printer_value
                            on_select=move |id: String| finder.select_printer(id)
                        />
                    </div>

                    <div class="form-group">
                        <label for="material-select">
                            "Material"
                            <span class="field-hint">{material_summary}</span>
                        </label>
                        <SearchableSelect
                            id="material-select"
                            placeholder="No materials match the selected applications"
                            noun="material"
                            options=material_options
                            value=material_value
                            on_select=move |code: String| finder.select_material(code)
                        />
                        <Show when=move || !description().is_empty()>
                            <p class="material-description">{description}</p>
                        </Show>
                    </div>

                    <ScenePreview />
                </div>
            </div>
        </div>
    }
}
