//! Modal host: renders the single shared dialog and executes its
//! confirm action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{self, AuthState};
use crate::state::modal::{ModalAction, ModalState};

/// Renders [`ModalState`] when open. Confirm runs the stored action and
/// closes; the cancel affordance exists only for non-forced dialogs.
#[component]
pub fn ModalHost() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let modal = expect_context::<RwSignal<ModalState>>();
    let navigate = use_navigate();

    let on_confirm = move |_| {
        let action = modal.with_untracked(|m| m.action);
        modal.update(|m| m.confirm_pending = true);
        match action {
            ModalAction::None => {}
            ModalAction::GoToLogin => navigate("/auth/login", NavigateOptions::default()),
            ModalAction::EndSessionThenLogin => {
                auth::logout(auth);
                navigate("/auth/login", NavigateOptions::default());
            }
            ModalAction::GoToExams => navigate("/exam", NavigateOptions::default()),
        }
        modal.update(ModalState::close);
    };

    view! {
        <Show when=move || modal.with(|m| m.is_open)>
            <div class="modal-backdrop">
                <div class="modal">
                    <h2 class="modal__title">{move || modal.with(|m| m.title.clone())}</h2>
                    <p class="modal__message">{move || modal.with(|m| m.message.clone())}</p>
                    <div class="modal__actions">
                        <Show when=move || modal.with(|m| !m.forced && m.cancel_label.is_some())>
                            <button
                                class="btn"
                                on:click=move |_| modal.update(ModalState::close)
                            >
                                {move || {
                                    modal.with(|m| m.cancel_label.clone().unwrap_or_default())
                                }}
                            </button>
                        </Show>
                        <button
                            class="btn btn--primary"
                            disabled=move || modal.with(|m| m.confirm_pending)
                            on:click=on_confirm.clone()
                        >
                            {move || {
                                modal.with(|m| {
                                    if m.confirm_pending {
                                        "Processing...".to_owned()
                                    } else {
                                        m.confirm_label.clone()
                                    }
                                })
                            }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
