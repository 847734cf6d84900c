//! Outcome reporting for user actions.
//!
//! Event handlers cannot reach context, so components grab a [`Notifier`]
//! in their body and move the `Copy` handle into callbacks and async blocks.

use leptos::prelude::*;
use lending::ApiError;

use crate::net::query::{Mutation, QueryCache};
use crate::state::toast::{ToastKind, ToastState};

#[derive(Clone, Copy)]
pub struct Notifier {
    cache: RwSignal<QueryCache>,
    toasts: RwSignal<ToastState>,
}

impl Notifier {
    /// Capture the cache and toast contexts. Call from a component body.
    pub fn from_context() -> Self {
        Self {
            cache: expect_context::<RwSignal<QueryCache>>(),
            toasts: expect_context::<RwSignal<ToastState>>(),
        }
    }

    pub fn success(self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn info(self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    pub fn error(self, err: &ApiError) {
        self.push(ToastKind::Error, err.to_string());
    }

    /// A client-side refusal that never reached the network.
    pub fn refuse(self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    /// A write succeeded: mark stale reads and tell the user.
    pub fn completed(self, mutation: Mutation, message: impl Into<String>) {
        let _ = self.cache.try_update(|c| c.invalidate(mutation));
        self.success(message);
    }

    fn push(self, kind: ToastKind, message: String) {
        let Some(id) = self.toasts.try_update(|t| t.push(kind, message)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let toasts = self.toasts;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(crate::state::toast::TOAST_TIMEOUT_MS).await;
                let _ = toasts.try_update(|t| t.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    }
}
