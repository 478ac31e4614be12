//! Public landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="home-page">
            <h1>"ExamHub"</h1>
            <p>"Practice exams, track your progress, improve your score."</p>
            <Show
                when=move || auth.with(|state| state.logged_in)
                fallback=|| {
                    view! {
                        <a href="/auth/login" class="btn btn--primary">"Get Started"</a>
                    }
                }
            >
                <a href="/exam" class="btn btn--primary">"Go to Exams"</a>
            </Show>
        </div>
    }
}
