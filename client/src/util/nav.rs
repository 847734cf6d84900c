//! Navigation from event handlers and async tasks.
//!
//! The router's navigate function is only used inside an effect owned by the
//! component; handlers request a move through the `Copy` [`Redirect`] handle.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[derive(Clone, Copy)]
pub struct Redirect(RwSignal<Option<(String, bool)>>);

impl Redirect {
    /// Install the navigation effect. Call from a component body.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let target = RwSignal::new(None::<(String, bool)>);
        let navigate = use_navigate();
        Effect::new(move || {
            let Some((path, replace)) = target.get() else {
                return;
            };
            target.set(None);
            navigate(&path, NavigateOptions { replace, ..Default::default() });
        });
        Self(target)
    }

    pub fn to(self, path: impl Into<String>) {
        let _ = self.0.try_set(Some((path.into(), false)));
    }

    /// Navigate without leaving a history entry.
    pub fn replace(self, path: impl Into<String>) {
        let _ = self.0.try_set(Some((path.into(), true)));
    }
}
