#![allow(non_snake_case)]

use dioxus::prelude::*;

// Modules
mod components;
mod content;
mod routes;
mod stores;
mod utils;

use stores::theme_store;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting slatepress");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Restore the persisted color scheme before first paint settles
    use_effect(move || {
        theme_store::init_theme();
    });

    rsx! {
        Router::<routes::Route> {}
    }
}
