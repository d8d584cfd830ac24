use dioxus::prelude::*;

use crate::components::CodeBlock;
use crate::content::{self, Section};

/// A single blog post
#[component]
pub fn PostPage(slug: String) -> Element {
    let Some(post) = content::find(&slug) else {
        // Authoring error or stale link; the rest of the site keeps working.
        return rsx! {
            div {
                class: "py-12 text-center",
                h1 { class: "text-2xl font-bold mb-2", "Post not found" }
                p { class: "text-muted-foreground", "No post is published at \"{slug}\"." }
            }
        };
    };

    rsx! {
        article {
            h1 { class: "text-3xl font-bold mb-1", "{post.title}" }
            time {
                class: "text-sm text-muted-foreground",
                datetime: "{post.date}",
                "{post.date}"
            }
            div {
                class: "mt-6",
                for section in post.sections {
                    {render_section(*section)}
                }
            }
        }
    }
}

fn render_section(section: Section) -> Element {
    match section {
        Section::Heading(text) => rsx! {
            h2 { class: "text-xl font-bold mt-8 mb-3", "{text}" }
        },
        Section::Prose(text) => rsx! {
            p { class: "my-4 leading-relaxed", "{text}" }
        },
        Section::Code { language, source } => rsx! {
            CodeBlock {
                source: source.to_string(),
                language: language.to_string(),
            }
        },
    }
}
