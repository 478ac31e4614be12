//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::modal::ModalHost;
use crate::components::navbar::Navbar;
use crate::components::require_auth::Guarded;
use crate::components::toast::ToastHost;
use crate::pages::{
    exam_detail::ExamDetailPage, exams::ExamsPage, home::HomePage, login::LoginPage,
    profile::ProfilePage, register::RegisterPage, verify_email::VerifyEmailPage,
};
use crate::state::auth::{self, AuthState};
use crate::state::modal::ModalState;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the three shared state contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let modal = RwSignal::new(ModalState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(modal);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/examhub.css"/>
        <Title text="ExamHub"/>

        <Router>
            <AppChrome/>
        </Router>
    }
}

/// Everything that needs router context: the navigation-driven session
/// effects, the shared overlays, and the route table.
#[component]
fn AppChrome() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let modal = expect_context::<RwSignal<ModalState>>();
    let location = use_location();

    // Route change is the re-validation point: every navigation re-derives
    // auth state from storage. Reaching the login or home page through any
    // path also force-closes a lingering dialog.
    Effect::new(move || {
        let path = location.pathname.get();
        auth::validate(auth);
        if path == "/" || path == "/auth/login" {
            modal.update(ModalState::close);
        }
    });

    view! {
        <Navbar/>
        <ModalHost/>
        <ToastHost/>
        <main>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Guarded><HomePage/></Guarded> }
                />
                <Route
                    path=(StaticSegment("auth"), StaticSegment("login"))
                    view=|| view! { <Guarded><LoginPage/></Guarded> }
                />
                <Route
                    path=(StaticSegment("auth"), StaticSegment("register"))
                    view=|| view! { <Guarded><RegisterPage/></Guarded> }
                />
                <Route
                    path=(StaticSegment("auth"), StaticSegment("verify-email"))
                    view=|| view! { <Guarded><VerifyEmailPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("exam")
                    view=|| view! { <Guarded><ExamsPage/></Guarded> }
                />
                <Route
                    path=(StaticSegment("exam"), ParamSegment("id"))
                    view=|| view! { <Guarded><ExamDetailPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <Guarded><ProfilePage/></Guarded> }
                />
            </Routes>
        </main>
    }
}
