//! Toast host and helpers for transient notifications.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Push a toast that expires on its own after a few seconds.
pub fn show(toasts: RwSignal<ToastState>, kind: ToastKind, text: &str) {
    let mut id = 0;
    toasts.update(|state| id = state.push(kind, text));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(4)).await;
        toasts.update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

pub fn show_success(toasts: RwSignal<ToastState>, text: &str) {
    show(toasts, ToastKind::Success, text);
}

pub fn show_error(toasts: RwSignal<ToastState>, text: &str) {
    show(toasts, ToastKind::Error, text);
}

/// Renders the toast stack in the top-right corner.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.with(|state| state.toasts.clone())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class>
                            <span>{toast.text.clone()}</span>
                            <button
                                class="toast__dismiss"
                                on:click=move |_| toasts.update(|state| state.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
