//! Email verification page. Consumes the one-shot `justRegistered`
//! marker so arriving here straight from registration reads differently
//! from a direct visit.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::toast;
use crate::state::toast::ToastState;
use crate::util::storage::{self, Flag};

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(query.get_untracked().get("email").unwrap_or_default());
    let code = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    // One-shot marker from the registration page; read-and-delete.
    let from_registration = storage::take_flag(Flag::JustRegistered);
    if from_registration {
        toast::show_success(toasts, "Registration successful! Check your email for a code.");
    }

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let code_value = code.get_untracked();
        if email_value.trim().is_empty() || code_value.trim().is_empty() {
            toast::show_error(toasts, "Please enter your email and verification code.");
            return;
        }

        pending.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::verify_email(&email_value, &code_value).await {
                    Ok(body) if body.success => {
                        toast::show_success(
                            toasts,
                            body.message.as_deref().unwrap_or("Email verified!"),
                        );
                        gloo_timers::future::sleep(std::time::Duration::from_millis(600)).await;
                        navigate("/auth/login", NavigateOptions::default());
                    }
                    Ok(body) => {
                        toast::show_error(
                            toasts,
                            body.message.as_deref().unwrap_or("Verification failed."),
                        );
                    }
                    Err(e) => toast::show_error(toasts, &e.to_string()),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, email_value, code_value);
            pending.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Verify your email"</h1>
            <form on:submit=submit>
                <label class="auth-page__label">
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__label">
                    "Verification code"
                    <input
                        type="text"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                    {move || if pending.get() { "Verifying..." } else { "Verify" }}
                </button>
            </form>
        </div>
    }
}
