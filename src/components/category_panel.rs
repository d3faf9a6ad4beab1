use std::collections::{BTreeMap, BTreeSet};

use leptos::prelude::*;

use crate::catalog::CategoryNode;
use crate::state::{use_finder, FinderContext};

/// Multi-select category filter tree.
///
/// One checkbox per node, branches expand on demand, and each row shows how
/// many of the selected printer's materials fall under it.
#[component]
pub fn CategoryPanel() -> impl IntoView {
    let finder = use_finder();
    let expanded = RwSignal::new(BTreeSet::<String>::new());
    let counts = Memo::new(move |_| finder.category_counts());

    let active_count = move || finder.selection.with(|s| s.category_filters.len());

    view! {
        <section class="category-panel">
            <div class="category-panel-header">
                <h3>"Applications"</h3>
                <Show when=move || { active_count() > 0 }>
                    <button class="btn-small" on:click=move |_| finder.clear_filters()>
                        {move || format!("Clear ({})", active_count())}
                    </button>
                </Show>
            </div>
            {if finder.catalog.categories.is_empty() {
                view! { <p class="empty-state">"No categories available."</p> }.into_any()
            } else {
                view! {
                    <ul class="category-tree">
                        {finder
                            .catalog
                            .categories
                            .iter()
                            .map(|node| category_row(node, finder, expanded, counts))
                            .collect::<Vec<_>>()}
                    </ul>
                }.into_any()
            }}
        </section>
    }
}

fn category_row(
    node: &'static CategoryNode,
    finder: FinderContext,
    expanded: RwSignal<BTreeSet<String>>,
    counts: Memo<BTreeMap<&'static str, usize>>,
) -> AnyView {
    let id = node.id.as_str();
    let has_children = !node.children().is_empty();

    let is_checked = move || finder.selection.with(|s| s.category_filters.contains(id));
    let is_expanded = move || expanded.with(|e| e.contains(id));
    let count = move || counts.with(|c| c.get(id).copied().unwrap_or(0));

    let toggle_expand = move |_| {
        expanded.update(|e| {
            if !e.remove(id) {
                e.insert(id.to_string());
            }
        })
    };

    let children = move || {
        if !has_children || !is_expanded() {
            return view! { <div style="display:none"></div> }.into_any();
        }
        view! {
            <ul class="category-children">
                {node
                    .children()
                    .iter()
                    .map(|child| category_row(child, finder, expanded, counts))
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any()
    };

    view! {
        <li class="category-row" class:leaf=!has_children>
            <div class="category-line" class:empty=move || count() == 0>
                {if has_children {
                    view! {
                        <button class="category-expand" on:click=toggle_expand>
                            {move || if is_expanded() { "\u{25BE}" } else { "\u{25B8}" }}
                        </button>
                    }.into_any()
                } else {
                    view! { <span class="category-expand-spacer"></span> }.into_any()
                }}
                <label class="category-label">
                    <input
                        type="checkbox"
                        prop:checked=is_checked
                        on:change=move |_| finder.toggle_filter(id.to_string())
                    />
                    <span>{node.label.clone()}</span>
                </label>
                <span class="category-count">{count}</span>
            </div>
            {children}
        </li>
    }
    .into_any()
}
