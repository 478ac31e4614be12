use super::*;

#[test]
fn login_response_uses_camel_case_token_fields() {
    let body: LoginResponse = serde_json::from_str(
        r#"{"success":true,"accessToken":"a.b.c","refreshToken":"d.e.f","message":"Login successful"}"#,
    )
    .expect("login response");
    assert!(body.success);
    assert_eq!(body.access_token.as_deref(), Some("a.b.c"));
    assert_eq!(body.refresh_token.as_deref(), Some("d.e.f"));
}

#[test]
fn login_response_tolerates_missing_tokens_on_failure() {
    let body: LoginResponse =
        serde_json::from_str(r#"{"success":false,"message":"Invalid password"}"#)
            .expect("login response");
    assert!(!body.success);
    assert_eq!(body.access_token, None);
    assert_eq!(body.refresh_token, None);
}

#[test]
fn refresh_response_reads_access_token() {
    let body: RefreshResponse =
        serde_json::from_str(r#"{"accessToken":"new.token.here"}"#).expect("refresh response");
    assert_eq!(body.access_token, "new.token.here");
}

#[test]
fn me_response_wraps_profile_in_array() {
    let body: MeResponse = serde_json::from_str(
        r#"{"user":[{"user_id":7,"firstname":"Ada","lastname":"L","email":"ada@example.com","DOB":"1990-01-01"}]}"#,
    )
    .expect("me response");
    assert_eq!(body.user.len(), 1);
    assert_eq!(body.user[0].user_id, 7);
    assert_eq!(body.user[0].dob.as_deref(), Some("1990-01-01"));
}

#[test]
fn exam_list_defaults_to_empty() {
    let body: ExamListResponse = serde_json::from_str("{}").expect("exam list");
    assert!(body.exams.is_empty());
}

#[test]
fn exam_detail_parses_questions_and_completion() {
    let body: ExamDetailResponse = serde_json::from_str(
        r#"{
            "is_completed": true,
            "exam_detail": [{
                "exam_id": 3,
                "question_id": 11,
                "question_text": "2+2?",
                "selected_option_id": 21,
                "options": [
                    {"option_id":21,"option_text":"4","is_correct":1},
                    {"option_id":22,"option_text":"5","is_correct":0}
                ]
            }]
        }"#,
    )
    .expect("exam detail");
    assert!(body.is_completed);
    assert_eq!(body.exam_detail.len(), 1);
    assert_eq!(body.exam_detail[0].options[0].is_correct, 1);
}
