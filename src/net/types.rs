//! Serde shapes of the remote service contract.
//!
//! Field names follow the server: auth responses use camelCase token
//! fields, exam payloads use snake_case.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// `POST /api/auth/login` response.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /api/auth/register` and `PUT /api/auth/verify` response.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatusResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /api/auth/refresh` response.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}

/// `POST /api/auth/register` request body.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct RegisterRequest {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub dob: String,
    pub password: String,
}

/// One user profile as returned by `POST /api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Profile {
    pub user_id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    #[serde(rename = "DOB", default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub create_at: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// `POST /api/auth/me` response: the server wraps the profile in a
/// one-element array.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MeResponse {
    pub user: Vec<Profile>,
}

/// One row of the subject's exam log.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExamSummary {
    pub exam_id: i64,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub create_at: Option<String>,
    #[serde(default)]
    pub finish_at: Option<String>,
}

/// `GET /api/exam/examID` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExamListResponse {
    #[serde(default)]
    pub exams: Vec<ExamSummary>,
}

/// `POST /api/exam/random` response.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RandomExamResponse {
    pub exam_id: i64,
}

/// One answer option within a question.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExamOption {
    pub option_id: i64,
    pub option_text: String,
    /// 1 when correct, 0 otherwise (server encodes booleans as ints here).
    #[serde(default)]
    pub is_correct: u8,
}

/// One answered question in an exam's history.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExamQuestion {
    pub exam_id: i64,
    pub question_id: i64,
    #[serde(default)]
    pub skill_name: Option<String>,
    pub question_text: String,
    #[serde(default)]
    pub selected_option_id: Option<i64>,
    #[serde(default)]
    pub options: Vec<ExamOption>,
}

/// `POST /api/exam/history` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExamDetailResponse {
    #[serde(default)]
    pub exam_detail: Vec<ExamQuestion>,
    #[serde(default)]
    pub is_completed: bool,
}
