//! Login page. A successful login writes both tokens through the auth
//! controller (which raises the one-shot continuation flag) and then
//! navigates to the exam list.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast;
use crate::state::auth::{self, AuthState};
use crate::state::toast::ToastState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if email_value.trim().is_empty() || password_value.is_empty() {
            toast::show_error(toasts, "Please enter your email and password.");
            return;
        }

        pending.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(body) if body.success => {
                        if let (Some(access), Some(refresh)) =
                            (body.access_token, body.refresh_token)
                        {
                            auth::login(auth, &access, &refresh);
                            toast::show_success(
                                toasts,
                                body.message.as_deref().unwrap_or("Login successful!"),
                            );
                            gloo_timers::future::sleep(std::time::Duration::from_millis(600))
                                .await;
                            navigate("/exam", NavigateOptions::default());
                        } else {
                            toast::show_error(toasts, "Malformed login response.");
                        }
                    }
                    Ok(body) => {
                        toast::show_error(
                            toasts,
                            body.message.as_deref().unwrap_or("Login failed."),
                        );
                    }
                    Err(e) => toast::show_error(toasts, &e.to_string()),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, auth, email_value, password_value);
            pending.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Sign in with email"</h1>
            <p class="auth-page__hint">
                "Enter your email and password to access your account."
            </p>
            <form on:submit=submit>
                <label class="auth-page__label">
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        disabled=move || pending.get()
                    />
                </label>
                <label class="auth-page__label">
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        disabled=move || pending.get()
                    />
                </label>
                <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                    {move || if pending.get() { "Logging in..." } else { "Get Started" }}
                </button>
            </form>
            <p class="auth-page__alt">
                "Don't have an account? " <a href="/auth/register">"Sign Up"</a>
            </p>
        </div>
    }
}
