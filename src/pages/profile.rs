//! Protected profile page backed by `POST /api/auth/me`.

use leptos::prelude::*;

use crate::net::types::Profile;
use crate::state::auth::AuthState;
use crate::state::modal::ModalState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let modal = expect_context::<RwSignal<ModalState>>();

    let profile = LocalResource::new(move || {
        let user_id = auth.get().user_id;
        async move {
            match user_id {
                Some(id) => crate::net::api::fetch_profile(auth, modal, id).await.ok(),
                None => None,
            }
        }
    });

    view! {
        <div class="profile-page">
            <h1>"Your Profile"</h1>
            <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                {move || {
                    profile
                        .get()
                        .map(|loaded| match loaded {
                            Some(user) => profile_card(&user).into_any(),
                            None => {
                                view! { <p>"Profile could not be loaded."</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

fn profile_card(user: &Profile) -> impl IntoView {
    view! {
        <dl class="profile-card">
            <dt>"Name"</dt>
            <dd>{format!("{} {}", user.firstname, user.lastname)}</dd>
            <dt>"Email"</dt>
            <dd>{user.email.clone()}</dd>
            <dt>"Date of birth"</dt>
            <dd>{user.dob.clone().unwrap_or_else(|| "-".to_owned())}</dd>
            <dt>"Member since"</dt>
            <dd>{user.create_at.clone().unwrap_or_else(|| "-".to_owned())}</dd>
        </dl>
    }
}
