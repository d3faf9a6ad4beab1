use leptos::prelude::*;

use crate::components::status_badge::CopyStatusBadge;
use crate::state::use_finder;

/// Layer-thickness picker plus the resolved scene-settings payload.
#[component]
pub fn ScenePreview() -> impl IntoView {
    let finder = use_finder();

    let layers = move || {
        finder
            .view()
            .material
            .map(|m| m.layers.clone())
            .unwrap_or_default()
    };
    let selected = move || finder.selection.with(|s| s.thickness_mm);
    let scene = move || finder.view().layer.map(|l| l.scene.clone());

    view! {
        <div class="scene-preview">
            <h3 class="scene-preview-title">"Scene Settings"</h3>

            <div class="form-group">
                <label>"Layer Thickness"</label>
                {move || {
                    let layers = layers();
                    if layers.is_empty() {
                        return view! {
                            <p class="empty-state">"Select a material to see layer options."</p>
                        }.into_any();
                    }
                    view! {
                        <div class="thickness-options">
                            {layers.into_iter().map(|layer| {
                                let thickness = layer.thickness_mm;
                                let is_selected = move || selected() == Some(thickness);
                                view! {
                                    <button
                                        class="thickness-option"
                                        class:selected=is_selected
                                        title=layer.label.clone()
                                        on:click=move |_| finder.select_thickness(thickness)
                                    >
                                        {format!("{} mm", thickness)}
                                    </button>
                                }
                            }).collect::<Vec<_>>()}
                        </div>
                    }.into_any()
                }}
            </div>

            {move || match scene() {
                Some(scene) => {
                    let preview = scene
                        .to_pretty_json()
                        .unwrap_or_else(|e| format!("Failed to render settings: {}", e));
                    let machine_type = scene.machine_type.clone();
                    let material_code = scene.material_code.clone();
                    let thickness = format!("{} mm", scene.layer_thickness_mm);
                    view! {
                        <div class="scene-preview-info">
                            <div class="preview-row">
                                <span class="preview-label">"Machine Type"</span>
                                <span class="preview-value">{machine_type}</span>
                            </div>
                            <div class="preview-row">
                                <span class="preview-label">"Material Code"</span>
                                <span class="preview-value">{material_code}</span>
                            </div>
                            <div class="preview-row">
                                <span class="preview-label">"Layer Thickness"</span>
                                <span class="preview-value">{thickness}</span>
                            </div>
                        </div>
                        <pre class="scene-json">{preview}</pre>
                        <div class="scene-preview-actions">
                            <CopyStatusBadge />
                            <button
                                class="btn btn-primary"
                                on:click=move |_| finder.copy_scene(scene.clone())
                            >
                                "Copy to Clipboard"
                            </button>
                        </div>
                    }.into_any()
                }
                None => view! {
                    <p class="no-scene">"No layer option selected."</p>
                }.into_any(),
            }}
        </div>
    }
}
