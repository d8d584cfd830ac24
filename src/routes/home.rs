use dioxus::prelude::*;

use crate::content;
use crate::routes::Route;

/// Post index
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            for post in content::posts() {
                article {
                    class: "mb-10",
                    Link {
                        to: Route::PostPage { slug: post.slug.to_string() },
                        class: "group",
                        h2 {
                            class: "text-xl font-bold group-hover:underline",
                            "{post.title}"
                        }
                    }
                    time {
                        class: "text-sm text-muted-foreground",
                        datetime: "{post.date}",
                        "{post.date}"
                    }
                    p {
                        class: "mt-2 text-muted-foreground",
                        "{post.summary}"
                    }
                }
            }
        }
    }
}
