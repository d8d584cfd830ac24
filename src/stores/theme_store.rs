use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(ColorScheme::Light),
            "dark" => Some(ColorScheme::Dark),
            _ => None,
        }
    }
}

/// Global color-scheme state
pub static THEME: GlobalSignal<ColorScheme> = Signal::global(ColorScheme::default);

const STORAGE_KEY: &str = "slatepress_theme";

/// Where a scheme value lands: the document rendering hook and the durable
/// per-origin store. Abstracted so tests can substitute an in-memory double
/// for the real browser environment.
pub trait PreferenceSink {
    /// Update the rendering hook with `scheme`, verbatim.
    fn apply(&mut self, scheme: &str);

    /// Persist `scheme` under the well-known key, overwriting any prior value.
    fn persist(&mut self, scheme: &str) -> anyhow::Result<()>;
}

/// Production sink: sets the `color-scheme` style property on the root
/// document element (native form controls and scrollbars key off it, and
/// author stylesheets can too) and writes localStorage.
pub struct DocumentSink;

impl PreferenceSink for DocumentSink {
    fn apply(&mut self, scheme: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;

            let root = web_sys::window()
                .and_then(|win| win.document())
                .and_then(|doc| doc.document_element());
            if let Some(root) = root {
                if let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() {
                    root.style().set_property("color-scheme", scheme).ok();
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = scheme;
    }

    fn persist(&mut self, scheme: &str) -> anyhow::Result<()> {
        LocalStorage::set(STORAGE_KEY, scheme)?;
        Ok(())
    }
}

/// Apply and persist a scheme value.
///
/// The value is not validated: anything outside "light"/"dark" is applied
/// and stored verbatim. A persistence failure (quota, private browsing) is
/// logged and swallowed so the visual change always lands.
pub fn set_preference<S: PreferenceSink>(sink: &mut S, scheme: &str) {
    sink.apply(scheme);
    if let Err(e) = sink.persist(scheme) {
        log::warn!("Could not persist color scheme preference: {e}");
    }
}

/// Set the scheme from the UI and persist it
pub fn set_theme(scheme: ColorScheme) {
    *THEME.write() = scheme;
    set_preference(&mut DocumentSink, scheme.as_str());
    log::info!("Color scheme changed to: {:?}", scheme);
}

/// Toggle between light and dark
pub fn toggle_theme() {
    let next = match *THEME.read() {
        ColorScheme::Light => ColorScheme::Dark,
        ColorScheme::Dark => ColorScheme::Light,
    };
    set_theme(next);
}

/// Check if dark mode is active
pub fn is_dark() -> bool {
    *THEME.read() == ColorScheme::Dark
}

/// Restore the scheme on page load: stored preference first, system
/// preference when nothing has been persisted yet.
pub fn init_theme() {
    if let Ok(stored) = LocalStorage::get::<String>(STORAGE_KEY) {
        // Whatever was last persisted is restored verbatim; the toggle
        // signal only follows values it understands.
        DocumentSink.apply(&stored);
        if let Some(scheme) = ColorScheme::from_str(&stored) {
            *THEME.write() = scheme;
        }
        log::info!("Restored color scheme from storage: {stored}");
    } else {
        // No choice made yet: follow the system preference without
        // persisting it, so the slot stays empty until the user toggles.
        let scheme = system_default();
        *THEME.write() = scheme;
        DocumentSink.apply(scheme.as_str());
        log::info!("No stored color scheme, using system default: {:?}", scheme);
    }
}

fn system_default() -> ColorScheme {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(query)) = win.match_media("(prefers-color-scheme: dark)") {
                if query.matches() {
                    return ColorScheme::Dark;
                }
            }
        }
    }
    ColorScheme::Light
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    #[derive(Default)]
    struct RecordingSink {
        applied: Vec<String>,
        stored: Option<String>,
        fail_persist: bool,
    }

    impl PreferenceSink for RecordingSink {
        fn apply(&mut self, scheme: &str) {
            self.applied.push(scheme.to_string());
        }

        fn persist(&mut self, scheme: &str) -> anyhow::Result<()> {
            if self.fail_persist {
                bail!("storage disabled");
            }
            self.stored = Some(scheme.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_set_preference_round_trip() {
        let mut sink = RecordingSink::default();
        set_preference(&mut sink, "dark");
        assert_eq!(sink.applied.last().map(String::as_str), Some("dark"));
        assert_eq!(sink.stored.as_deref(), Some("dark"));

        set_preference(&mut sink, "light");
        assert_eq!(sink.applied.last().map(String::as_str), Some("light"));
        assert_eq!(sink.stored.as_deref(), Some("light"));
    }

    #[test]
    fn test_set_preference_idempotent() {
        let mut once = RecordingSink::default();
        set_preference(&mut once, "dark");

        let mut twice = RecordingSink::default();
        set_preference(&mut twice, "dark");
        set_preference(&mut twice, "dark");

        assert_eq!(once.applied.last(), twice.applied.last());
        assert_eq!(once.stored, twice.stored);
    }

    #[test]
    fn test_set_preference_last_write_wins() {
        let mut sink = RecordingSink::default();
        set_preference(&mut sink, "dark");
        set_preference(&mut sink, "light");
        assert_eq!(sink.stored.as_deref(), Some("light"));
        assert_eq!(sink.applied, vec!["dark", "light"]);
    }

    #[test]
    fn test_set_preference_passes_unknown_values_verbatim() {
        let mut sink = RecordingSink::default();
        set_preference(&mut sink, "solarized");
        assert_eq!(sink.applied.last().map(String::as_str), Some("solarized"));
        assert_eq!(sink.stored.as_deref(), Some("solarized"));
    }

    #[test]
    fn test_persist_failure_still_applies() {
        let mut sink = RecordingSink {
            fail_persist: true,
            ..Default::default()
        };
        set_preference(&mut sink, "dark");
        assert_eq!(sink.applied.last().map(String::as_str), Some("dark"));
        assert_eq!(sink.stored, None);
    }

    #[test]
    fn test_color_scheme_str_round_trip() {
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            assert_eq!(ColorScheme::from_str(scheme.as_str()), Some(scheme));
        }
        assert_eq!(ColorScheme::from_str("system"), None);
        assert_eq!(ColorScheme::from_str(""), None);
    }
}
