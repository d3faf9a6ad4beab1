use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;
use wasm_bindgen_futures::spawn_local;

use crate::catalog;
use crate::commands;
use crate::components::sidebar::Sidebar;
use crate::pages::finder::FinderPage;
use crate::pages::materials::MaterialsPage;
use crate::state::FinderContext;

#[component]
pub fn App() -> impl IntoView {
    let catalog = match catalog::bundled() {
        Ok(catalog) => catalog,
        Err(e) => {
            web_sys::console::error_1(&format!("Bundled catalog unavailable: {}", e).into());
            catalog::empty()
        }
    };

    let finder = FinderContext::new(catalog);
    provide_context(finder);

    // Pick up the shell's configuration; keep the defaults when running without it
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_app_config().await {
                Ok(config) => {
                    if config != finder.config.get_untracked() {
                        finder.apply_config(config);
                    }
                }
                Err(e) => {
                    web_sys::console::warn_1(
                        &format!("Using default app config: {}", e).into(),
                    );
                }
            }
        });
    });

    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=FinderPage />
                        <Route path=path!("/materials") view=MaterialsPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
