use leptos::prelude::*;

use crate::state::use_finder;

#[component]
pub fn Sidebar() -> impl IntoView {
    let finder = use_finder();

    let printer_label = move || {
        finder
            .view()
            .printer
            .map(|p| p.label.clone())
            .unwrap_or_else(|| "No printer".to_string())
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"SceneFinder"</h1>
                <p class="sidebar-subtitle">"Print Settings Reference"</p>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/" class="nav-link">"Finder"</a>
                </li>
                <li class="nav-item">
                    <a href="/materials" class="nav-link">"Materials"</a>
                </li>
            </ul>
            <div class="sidebar-footer">
                <span class="sidebar-printer">{printer_label}</span>
            </div>
        </nav>
    }
}
