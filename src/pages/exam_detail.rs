//! Protected exam detail view with the resource-ownership guard.
//!
//! The login guard has already run by the time this renders; this page
//! additionally cross-checks the requested exam id against the subject's
//! own exam log. A mismatch raises the forced "Access Denied" dialog,
//! whose confirm returns to the exam list rather than the login page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::ExamQuestion;
use crate::state::auth::AuthState;
use crate::state::guard;
use crate::state::modal::ModalState;

#[derive(Clone, Debug, PartialEq)]
enum DetailView {
    Pending,
    Denied,
    Failed(String),
    Ready { questions: Vec<ExamQuestion>, completed: bool },
}

#[component]
pub fn ExamDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let modal = expect_context::<RwSignal<ModalState>>();
    let params = use_params_map();

    let data = LocalResource::new(move || {
        let exam_id = params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok());
        let user_id = auth.get().user_id;
        async move {
            let (Some(exam_id), Some(user_id)) = (exam_id, user_id) else {
                return DetailView::Pending;
            };

            let own_ids = match crate::net::api::fetch_exam_logs(auth, modal, user_id).await {
                Ok(list) => list.into_iter().map(|e| e.exam_id).collect::<Vec<_>>(),
                Err(e) => return DetailView::Failed(e.to_string()),
            };
            if !guard::owns_exam(exam_id, &own_ids) {
                return DetailView::Denied;
            }

            match crate::net::api::fetch_exam_detail(auth, modal, exam_id).await {
                Ok(detail) => DetailView::Ready {
                    questions: detail.exam_detail,
                    completed: detail.is_completed,
                },
                Err(e) => DetailView::Failed(e.to_string()),
            }
        }
    });

    // Ownership violation surfaces through the notification gate; the
    // is_open check keeps this from stacking on an existing dialog.
    Effect::new(move || {
        if data.get() == Some(DetailView::Denied) {
            modal.update(|m| {
                if !m.is_open {
                    m.open_access_denied();
                }
            });
        }
    });

    view! {
        <div class="exam-detail-page">
            <a href="/exam" class="exam-detail-page__back">"Back to Exams"</a>
            <Suspense fallback=move || view! { <p>"Loading exam..."</p> }>
                {move || {
                    data.get()
                        .map(|detail| match detail {
                            DetailView::Pending | DetailView::Denied => ().into_any(),
                            DetailView::Failed(message) => {
                                view! { <p class="exam-detail-page__error">{message}</p> }
                                    .into_any()
                            }
                            DetailView::Ready { questions, completed } => {
                                let score = score_of(&questions);
                                let total = questions.len();
                                view! {
                                    <h1>"Examination Answers"</h1>
                                    <Show when=move || completed>
                                        <p class="exam-detail-page__score">
                                            {format!("Score: {score} / {total}")}
                                        </p>
                                    </Show>
                                    <ol class="exam-detail-page__questions">
                                        {questions
                                            .iter()
                                            .map(|question| question_item(question, completed))
                                            .collect::<Vec<_>>()}
                                    </ol>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Number of questions whose selected option is the correct one.
fn score_of(questions: &[ExamQuestion]) -> usize {
    questions
        .iter()
        .filter(|q| {
            q.selected_option_id.is_some_and(|selected| {
                q.options
                    .iter()
                    .any(|o| o.option_id == selected && o.is_correct == 1)
            })
        })
        .count()
}

fn question_item(question: &ExamQuestion, completed: bool) -> impl IntoView {
    let options = question
        .options
        .iter()
        .map(|option| {
            let class = if completed {
                if option.is_correct == 1 {
                    "option option--correct"
                } else if question.selected_option_id == Some(option.option_id) {
                    "option option--wrong"
                } else {
                    "option"
                }
            } else {
                "option"
            };
            view! { <li class=class>{option.option_text.clone()}</li> }
        })
        .collect::<Vec<_>>();

    view! {
        <li class="question">
            <p class="question__text">{question.question_text.clone()}</p>
            <ul class="question__options">{options}</ul>
        </li>
    }
}
