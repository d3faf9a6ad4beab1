use leptos::prelude::*;

use crate::catalog::MaterialOption;
use crate::state::use_finder;

/// Result card for one material: categories plus one copy action per thickness.
#[component]
pub fn MaterialCard(material: &'static MaterialOption) -> impl IntoView {
    let finder = use_finder();
    let code = material.code.as_str();

    let is_selected = move || finder.selection.with(|s| s.material_code == code);
    let selected_thickness = move || finder.selection.with(|s| s.thickness_mm);

    let categories = if material.categories.is_empty() {
        view! { <span class="material-category uncategorized">"Uncategorized"</span> }.into_any()
    } else {
        material
            .categories
            .iter()
            .map(|c| view! { <span class="material-category">{c.clone()}</span> })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <div class="material-card" class:selected=is_selected>
            <div class="material-card-header">
                <div class="material-card-title">
                    <span class="material-name">{material.label.clone()}</span>
                    <span class="material-code">{material.code.clone()}</span>
                </div>
                <button
                    class="btn-small"
                    on:click=move |_| finder.select_material(code.to_string())
                >
                    "Select"
                </button>
            </div>

            <p class="material-description">{material.description.clone()}</p>

            <div class="material-categories">{categories}</div>

            <div class="material-layers">
                {material.layers.iter().map(|layer| {
                    let thickness = layer.thickness_mm;
                    let is_current = move || {
                        is_selected() && selected_thickness() == Some(thickness)
                    };
                    view! {
                        <button
                            class="btn btn-secondary layer-copy"
                            class:current=is_current
                            title=format!("Copy {} settings", layer.label)
                            on:click=move |_| finder.copy_scene(layer.scene.clone())
                        >
                            {layer.label.clone()}
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
