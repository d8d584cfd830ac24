use super::{Post, Section};

/// All published posts, newest first
pub fn posts() -> &'static [Post] {
    POSTS
}

static POSTS: &[Post] = &[Post {
    slug: "rewriting-this-blog-in-rust",
    title: "Rewriting this blog in Rust",
    date: "2026-08-14",
    summary: "What it took to move a hand-written static site onto Dioxus, \
              and the two small behaviors that justified shipping WASM at all.",
    sections: &[
        Section::Prose(
            "This site used to be a folder of HTML files and a dozen lines of \
             JavaScript. The JavaScript did exactly two things: remember whether \
             you wanted the dark theme, and put a copy button on code blocks. \
             When I moved the site onto Dioxus I kept the scope identical, which \
             made it a nice exercise in porting behavior rather than inventing it.",
        ),
        Section::Heading("Persisting the theme"),
        Section::Prose(
            "The theme preference is one localStorage slot and one style \
             property on the document element. Setting the color-scheme \
             property is enough for the browser to restyle native form \
             controls and scrollbars, and the stylesheet keys custom colors \
             off the same property. The only subtlety is that a storage write \
             can fail in private browsing, and the visual change should land \
             anyway:",
        ),
        Section::Code {
            language: "rust",
            source: "pub fn set_preference<S: PreferenceSink>(sink: &mut S, scheme: &str) {\n    sink.apply(scheme);\n    if let Err(e) = sink.persist(scheme) {\n        log::warn!(\"Could not persist color scheme preference: {e}\");\n    }\n}",
        },
        Section::Prose(
            "Putting the document and localStorage behind a small trait looks \
             like ceremony for a blog, but it means the whole contract runs \
             under plain cargo test with an in-memory sink instead of a \
             browser.",
        ),
        Section::Heading("Copy buttons without stuck labels"),
        Section::Prose(
            "The copy button is the fun one. Clicking it writes the snippet to \
             the clipboard and swaps the label to a checkmark for half a \
             second. The original JavaScript leaned on setTimeout and never \
             cancelled anything, so double-clicking raced two timers against \
             each other. The port keeps a generation counter per button: every \
             click takes a new generation, and a revert only applies if its \
             generation is still current.",
        ),
        Section::Code {
            language: "rust",
            source: "let generation = feedback.write().arm();\n\nspawn(async move {\n    gloo_timers::future::TimeoutFuture::new(REVERT_DELAY_MS).await;\n    feedback.write().revert(generation);\n});",
        },
        Section::Prose(
            "The label flips before the clipboard promise settles. That is \
             deliberate: the write almost never fails outside of permission \
             lockdowns, and feedback that waits on a permission prompt feels \
             broken. If the write does fail it goes to the console log, and \
             the label reverts on schedule either way.",
        ),
        Section::Heading("Was it worth it?"),
        Section::Prose(
            "For two behaviors, honestly, a dozen lines of JavaScript were \
             fine. But both behaviors now have tests, the binding between a \
             copy button and its text is a typed prop instead of a DOM \
             traversal that breaks when the markup shifts, and writing posts \
             as data means the next interactive widget gets a real component \
             model to land in.",
        ),
    ],
}];
