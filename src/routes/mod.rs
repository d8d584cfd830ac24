use dioxus::prelude::*;

pub mod home;
pub mod post;

use home::Home;
use post::PostPage;

use crate::components::ThemeToggle;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/posts/:slug")]
        PostPage { slug: String },

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-background text-foreground transition-colors",
            div {
                class: "max-w-2xl mx-auto px-4",
                header {
                    class: "flex items-center justify-between py-6 border-b border-border",
                    Link {
                        to: Route::Home {},
                        class: "text-lg font-bold hover:opacity-80 transition",
                        "slatepress"
                    }
                    ThemeToggle {}
                }
                main {
                    class: "py-8",
                    Outlet::<Route> {}
                }
                footer {
                    class: "py-8 border-t border-border text-sm text-muted-foreground",
                    "Written in Rust, rendered in your browser."
                }
            }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "py-12 text-center",
            h1 { class: "text-2xl font-bold mb-2", "Page not found" }
            p {
                class: "text-muted-foreground",
                "Nothing lives at /{path}."
            }
        }
    }
}
