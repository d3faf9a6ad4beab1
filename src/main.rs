mod app;
mod catalog;
mod commands;
mod components;
mod pages;
mod state;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
