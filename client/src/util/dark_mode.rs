//! Light/dark theme initialization and toggle.
//!
//! Reads the stored theme from `localStorage` and applies a `data-theme`
//! attribute to the `<html>` element. Toggle writes back to `localStorage`
//! and updates that attribute. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "loanlink-theme";

/// Stored theme value -> dark flag. Unknown values mean "no preference".
pub fn parse_theme(raw: &str) -> Option<bool> {
    match raw.trim() {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

pub fn theme_name(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Read the theme preference.
///
/// Returns the stored choice, or the system `prefers-color-scheme` when
/// nothing usable is stored.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Some(dark) = storage.get_item(STORAGE_KEY).ok().flatten().as_deref().and_then(parse_theme) {
                return dark;
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", theme_name(dark));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Toggle the theme and persist the new choice.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(STORAGE_KEY, theme_name(next));
        }
    }
    next
}
