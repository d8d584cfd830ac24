use dioxus::prelude::*;

use crate::components::icons::{CheckIcon, CopyIcon};
use crate::utils::clipboard::copy_to_clipboard;
use crate::utils::copy_feedback::{CopyFeedback, REVERT_DELAY_MS};

/// A code snippet with a copy-to-clipboard button.
///
/// The source text is an explicit prop, so the button is bound to exactly
/// the text it copies rather than to a position in the surrounding markup.
/// The "Copied!" label is shown as soon as the button is clicked, before
/// the clipboard write settles; a rejected write is logged and the label
/// still reverts on schedule.
#[component]
pub fn CodeBlock(source: String, language: String) -> Element {
    let mut feedback = use_signal(CopyFeedback::default);

    let source_for_copy = source.clone();
    let handle_copy = move |_| {
        let text = source_for_copy.clone();
        let generation = feedback.write().arm();

        spawn(async move {
            if let Err(e) = copy_to_clipboard(&text).await {
                log::error!("Failed to copy code block: {:?}", e);
            }
        });

        // Revert is measured from the click, not from clipboard settle.
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(REVERT_DELAY_MS).await;
            feedback.write().revert(generation);
        });
    };

    let confirmed = feedback.read().is_confirmed();

    rsx! {
        div {
            class: "group relative my-6 rounded-lg border border-border bg-muted overflow-hidden",
            div {
                class: "flex items-center justify-between px-4 py-1.5 border-b border-border text-xs text-muted-foreground",
                span { class: "font-mono", "{language}" }
                button {
                    class: "flex items-center gap-1.5 px-2 py-1 rounded hover:bg-accent transition cursor-pointer",
                    onclick: handle_copy,
                    if confirmed {
                        CheckIcon { class: "w-4 h-4" }
                        span { "Copied!" }
                    } else {
                        CopyIcon { class: "w-4 h-4" }
                        span { "Copy" }
                    }
                }
            }
            pre {
                class: "p-4 overflow-x-auto text-sm leading-relaxed",
                code { class: "font-mono", "{source}" }
            }
        }
    }
}
