//! Route guard wrapper.
//!
//! Wraps every routed page. On each render it classifies the current
//! path, reads the shared auth state, and evaluates the guard decision
//! table; blocked navigations raise the matching forced dialog through
//! the notification gate (checking `is_open` first so a second guard
//! instance on the same navigation cannot stack a dialog).

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::state::guard::{self, BlockKind, GuardDecision, GuardInput, RouteClass};
use crate::state::modal::ModalState;
use crate::util::storage::{self, Flag};

/// Renders its children only when the guard decision is `Render`.
#[component]
pub fn Guarded(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let modal = expect_context::<RwSignal<ModalState>>();
    let location = use_location();

    // Sticky within this mount: once the one-shot flag is consumed on an
    // auth-entry route, later re-renders of the same navigation still
    // count as the login continuation.
    let continuation = StoredValue::new(false);

    let decision = Memo::new(move |_| {
        let state = auth.get();
        let route = guard::classify(&location.pathname.get());

        let just_logged_in = if route == RouteClass::AuthEntry {
            if storage::take_flag(Flag::JustLoggedIn) {
                continuation.set_value(true);
            }
            continuation.get_value()
        } else {
            continuation.set_value(false);
            false
        };

        guard::decide(&GuardInput {
            resolving: state.resolving,
            logged_in: state.logged_in,
            route,
            just_logged_in,
            seen_session: storage::flag_is_set(Flag::SeenSession),
        })
    });

    Effect::new(move || {
        if let GuardDecision::Block(kind) = decision.get() {
            modal.update(|m| {
                if m.is_open {
                    return;
                }
                match kind {
                    BlockKind::AuthRequired => m.open_auth_required(),
                    BlockKind::SessionExpired => m.open_session_expired(),
                    BlockKind::AlreadyLoggedIn => m.open_access_restricted(),
                }
            });
        }
    });

    view! {
        <Show when=move || decision.get() == GuardDecision::Render>
            {children()}
        </Show>
    }
}
