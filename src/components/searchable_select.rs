use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// A single option in the searchable select.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub group: String,
}

/// Options sharing a group name.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionGroup {
    pub name: String,
    pub options: Vec<SelectOption>,
}

/// Keep the options whose label contains `query` (case-insensitive) and
/// bucket them by group. Groups and options keep their arrival order.
pub fn group_options(options: &[SelectOption], query: &str) -> Vec<OptionGroup> {
    let query = query.trim().to_lowercase();
    let mut groups: Vec<OptionGroup> = Vec::new();

    let matching = options
        .iter()
        .filter(|o| query.is_empty() || o.label.to_lowercase().contains(&query));
    for option in matching {
        match groups.iter_mut().find(|g| g.name == option.group) {
            Some(group) => group.options.push(option.clone()),
            None => groups.push(OptionGroup {
                name: option.group.clone(),
                options: vec![option.clone()],
            }),
        }
    }
    groups
}

fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Dropdown with a search box.
///
/// Closed, it shows the selected label. Open, it shows a filter input over
/// the grouped options. There is no way to clear the value.
#[component]
pub fn SearchableSelect(
    id: &'static str,
    placeholder: &'static str,
    /// Singular noun for the result count, e.g. "material".
    noun: &'static str,
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    #[prop(into)] value: Signal<String>,
    on_select: impl Fn(String) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let is_open = RwSignal::new(false);
    let query = RwSignal::new(String::new());
    let container_ref = NodeRef::<leptos::html::Div>::new();

    let close = move || {
        is_open.set(false);
        query.set(String::new());
    };

    let pick = move |picked: String| {
        on_select(picked);
        close();
    };

    // Registered once per instance, removed when the component unmounts.
    let outside_click = window_event_listener(ev::mousedown, move |event| {
        if !is_open.get_untracked() {
            return;
        }
        let inside = match (container_ref.get_untracked(), event.target()) {
            (Some(container), Some(target)) => target
                .dyn_ref::<web_sys::Node>()
                .is_some_and(|node| container.contains(Some(node))),
            _ => false,
        };
        if !inside {
            close();
        }
    });
    on_cleanup(move || outside_click.remove());

    let closed_view = move || {
        let current = value.get();
        let selected = options.with(|opts| {
            opts.iter()
                .find(|o| o.value == current)
                .map(|o| o.label.clone())
        });
        let (text, class) = match selected {
            Some(label) => (label, "ss-display has-value"),
            None => (placeholder.to_string(), "ss-display"),
        };
        view! {
            <div class=class on:click=move |_| is_open.set(true)>
                <span class="ss-display-text">{text}</span>
                <span class="ss-chevron">"\u{25BE}"</span>
            </div>
        }
    };

    let dropdown = move || {
        let groups = options.with(|opts| group_options(opts, &query.get()));
        let count: usize = groups.iter().map(|g| g.options.len()).sum();
        if count == 0 {
            return view! {
                <div class="ss-dropdown">
                    <div class="ss-empty">{format!("No matching {}s", noun)}</div>
                </div>
            }
            .into_any();
        }

        let current = value.get();
        let group_views = groups
            .into_iter()
            .map(|group| {
                let rows = group
                    .options
                    .into_iter()
                    .map(|option| {
                        let class = if option.value == current {
                            "ss-option selected"
                        } else {
                            "ss-option"
                        };
                        let picked = option.value;
                        view! {
                            <div class=class on:mousedown=move |_| pick(picked.clone())>
                                {option.label}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>();
                view! {
                    <div class="ss-group">
                        <div class="ss-group-label">{group.name}</div>
                        {rows}
                    </div>
                }
            })
            .collect::<Vec<_>>();

        view! {
            <div class="ss-dropdown" id=format!("{}-dropdown", id)>
                <div class="ss-options">
                    {group_views}
                    <div class="ss-count">{count_label(count, noun)}</div>
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="searchable-select" class:open=move || is_open.get() node_ref=container_ref>
            <style>{include_str!("searchable_select.css")}</style>
            <Show when=move || is_open.get() fallback=closed_view>
                <input
                    type="text"
                    class="ss-search input"
                    placeholder="Type to search..."
                    prop:value=move || query.get()
                    on:input=move |event| query.set(event_target_value(&event))
                    on:keydown=move |event: ev::KeyboardEvent| {
                        if event.key() == "Escape" {
                            close();
                        }
                    }
                    autofocus=true
                />
                {dropdown}
            </Show>
        </div>
    }
}
