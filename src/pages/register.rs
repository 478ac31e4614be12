//! Registration page. Success raises the one-shot `justRegistered` flag
//! and moves on to email verification.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast;
use crate::state::toast::ToastState;
use crate::util::storage::{self, Flag};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let firstname = RwSignal::new(String::new());
    let lastname = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let dob = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let request = crate::net::types::RegisterRequest {
            firstname: firstname.get_untracked(),
            lastname: lastname.get_untracked(),
            email: email.get_untracked(),
            dob: dob.get_untracked(),
            password: password.get_untracked(),
        };
        if request.email.trim().is_empty() || request.password.is_empty() {
            toast::show_error(toasts, "Please fill in the required fields.");
            return;
        }

        pending.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let email_value = request.email.clone();
                match crate::net::api::register(&request).await {
                    Ok(body) if body.success => {
                        storage::set_flag(Flag::JustRegistered);
                        toast::show_success(
                            toasts,
                            body.message.as_deref().unwrap_or("Registration successful!"),
                        );
                        gloo_timers::future::sleep(std::time::Duration::from_millis(600)).await;
                        let target = format!(
                            "/auth/verify-email?email={}",
                            js_sys::encode_uri_component(&email_value)
                        );
                        navigate(&target, NavigateOptions::default());
                    }
                    Ok(body) => {
                        toast::show_error(
                            toasts,
                            body.message.as_deref().unwrap_or("Registration failed."),
                        );
                    }
                    Err(e) => toast::show_error(toasts, &e.to_string()),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, request);
            pending.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Create your account"</h1>
            <form on:submit=submit>
                <label class="auth-page__label">
                    "First name"
                    <input
                        type="text"
                        prop:value=move || firstname.get()
                        on:input=move |ev| firstname.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__label">
                    "Last name"
                    <input
                        type="text"
                        prop:value=move || lastname.get()
                        on:input=move |ev| lastname.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__label">
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__label">
                    "Date of birth"
                    <input
                        type="date"
                        prop:value=move || dob.get()
                        on:input=move |ev| dob.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__label">
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                    {move || if pending.get() { "Submitting..." } else { "Sign Up" }}
                </button>
            </form>
            <p class="auth-page__alt">
                "Already registered? " <a href="/auth/login">"Sign in"</a>
            </p>
        </div>
    }
}
