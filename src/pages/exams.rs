//! Protected exam list: the subject's exam log plus a start-new-exam
//! action. All fetches go through the authenticated request wrapper, so
//! an expired access token is renewed transparently on the first 401.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast;
use crate::net::types::ExamSummary;
use crate::state::auth::AuthState;
use crate::state::modal::ModalState;
use crate::state::toast::ToastState;

#[component]
pub fn ExamsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let modal = expect_context::<RwSignal<ModalState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let starting = RwSignal::new(false);

    let exams = LocalResource::new(move || {
        let user_id = auth.get().user_id;
        async move {
            match user_id {
                Some(id) => crate::net::api::fetch_exam_logs(auth, modal, id)
                    .await
                    .unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });

    let on_start = move |_| {
        if starting.get_untracked() {
            return;
        }
        let Some(user_id) = auth.with_untracked(|state| state.user_id) else {
            return;
        };
        starting.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::generate_random_exam(auth, modal, user_id).await {
                    Ok(exam_id) => {
                        navigate(&format!("/exam/{exam_id}"), NavigateOptions::default());
                    }
                    Err(e) => toast::show_error(toasts, &e.to_string()),
                }
                starting.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, toasts, user_id);
            starting.set(false);
        }
    };

    view! {
        <div class="exams-page">
            <header class="exams-page__header">
                <h1>"Your Exams"</h1>
                <button
                    class="btn btn--primary"
                    disabled=move || starting.get()
                    on:click=on_start
                >
                    {move || if starting.get() { "Preparing..." } else { "+ New Exam" }}
                </button>
            </header>

            <Suspense fallback=move || view! { <p>"Loading exams..."</p> }>
                {move || {
                    exams
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <p class="exams-page__empty">
                                        "No exams yet. Start one to begin practicing."
                                    </p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <ul class="exams-page__list">
                                        {list
                                            .into_iter()
                                            .map(|exam: ExamSummary| {
                                                let href = format!("/exam/{}", exam.exam_id);
                                                let status = if exam.is_completed {
                                                    "Completed"
                                                } else {
                                                    "In progress"
                                                };
                                                view! {
                                                    <li class="exams-page__item">
                                                        <a href=href>
                                                            {format!("Exam #{}", exam.exam_id)}
                                                        </a>
                                                        <span class="exams-page__status">{status}</span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
