//! Top navigation bar with login/logout affordances.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{self, AuthState};

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        auth::logout(auth);
        navigate("/", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">"ExamHub"</a>
            <div class="navbar__links">
                <Show
                    when=move || auth.with(|state| state.logged_in)
                    fallback=|| {
                        view! {
                            <a href="/auth/login" class="navbar__link">"Log in"</a>
                            <a href="/auth/register" class="navbar__link">"Sign up"</a>
                        }
                    }
                >
                    <a href="/exam" class="navbar__link">"Exams"</a>
                    <a href="/profile" class="navbar__link">"Profile"</a>
                    <button class="navbar__logout" on:click=on_logout.clone()>
                        "Log out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
