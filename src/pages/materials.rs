use leptos::prelude::*;

use crate::components::material_card::MaterialCard;
use crate::components::status_badge::CopyStatusBadge;
use crate::state::use_finder;

/// Grid of every material passing the current printer and category filters.
#[component]
pub fn MaterialsPage() -> impl IntoView {
    let finder = use_finder();

    let heading = move || {
        let view = finder.view();
        match view.printer {
            Some(p) => format!("{} materials for {}", view.materials.len(), p.label),
            None => "No printer selected".to_string(),
        }
    };
    let filter_count = move || finder.selection.with(|s| s.category_filters.len());

    view! {
        <div class="page materials-page">
            <div class="materials-header">
                <h2>{heading}</h2>
                <CopyStatusBadge />
            </div>
            <Show when=move || { filter_count() > 0 }>
                <p class="page-description">
                    {move || format!("Filtered by {} application categories.", filter_count())}
                    <button class="btn-small" on:click=move |_| finder.clear_filters()>
                        "Show all"
                    </button>
                </p>
            </Show>

            <div class="card-grid">
                <For
                    each=move || finder.view().materials
                    key=|m| m.code.clone()
                    children=move |m| view! { <MaterialCard material=m /> }
                />
            </div>

            <Show when=move || finder.view().materials.is_empty()>
                <p class="empty-state">"No materials match the selected applications."</p>
            </Show>
        </div>
    }
}
