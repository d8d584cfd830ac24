use dioxus::prelude::*;

use crate::components::icons::{MoonIcon, SunIcon};
use crate::stores::theme_store;

/// Light/dark toggle button shown in the site header
#[component]
pub fn ThemeToggle() -> Element {
    // Reading the global signal subscribes this component to scheme changes
    let dark = theme_store::is_dark();

    rsx! {
        button {
            class: "p-2 rounded-full hover:bg-accent transition cursor-pointer",
            title: if dark { "Switch to light mode" } else { "Switch to dark mode" },
            onclick: move |_| theme_store::toggle_theme(),
            if dark {
                SunIcon { class: "w-5 h-5" }
            } else {
                MoonIcon { class: "w-5 h-5" }
            }
        }
    }
}
