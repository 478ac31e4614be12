//! REST calls against the remote service.
//!
//! The auth-entry calls (`login`, `register`, `verify_email`, `refresh`)
//! go out bare; everything else is routed through
//! [`crate::net::authed::send_json`], which attaches the access token and
//! renews it once on a 401.

use leptos::prelude::RwSignal;

use crate::net::authed::{self, Method};
use crate::net::error::ApiError;
use crate::net::types::{
    ExamDetailResponse, ExamListResponse, ExamSummary, LoginResponse, MeResponse, Profile,
    RandomExamResponse, RegisterRequest, StatusResponse,
};
use crate::state::auth::AuthState;
use crate::state::modal::ModalState;

#[cfg(feature = "hydrate")]
use crate::net::error::is_auth_rejection;

/// Parse a response whose body carries a success flag and message even on
/// rejection statuses. Falls back to a status error when the body does
/// not parse.
#[cfg(feature = "hydrate")]
async fn parse_flagged<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    let status = resp.status();
    match resp.json::<T>().await {
        Ok(body) => Ok(body),
        Err(e) if (200..300).contains(&status) => Err(ApiError::Decode(e.to_string())),
        Err(_) => Err(ApiError::Status(status)),
    }
}

/// `POST /api/auth/login`.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        parse_flagged(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// `POST /api/auth/register`.
pub async fn register(request: &RegisterRequest) -> Result<StatusResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        parse_flagged(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// `PUT /api/auth/verify`.
pub async fn verify_email(email: &str, code: &str) -> Result<StatusResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email, "code": code });
        let resp = gloo_net::http::Request::put("/api/auth/verify")
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        parse_flagged(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, code);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// `POST /api/auth/refresh` — exchange the refresh token for a new access
/// token. The refresh token rides in the `Authorization` header.
///
/// Authorization-rejection statuses map to [`ApiError::RefreshRejected`];
/// other failures keep their own class so callers can tell a dead session
/// from a flaky network.
pub(crate) async fn refresh(refresh_token: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/refresh")
            .header("Authorization", refresh_token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        if is_auth_rejection(status) {
            return Err(ApiError::RefreshRejected);
        }
        if !resp.ok() {
            return Err(ApiError::Status(status));
        }
        let body: crate::net::types::RefreshResponse =
            resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.access_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = refresh_token;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// `POST /api/auth/me` — fetch the authenticated subject's profile.
pub async fn fetch_profile(
    auth: RwSignal<AuthState>,
    modal: RwSignal<ModalState>,
    user_id: i64,
) -> Result<Profile, ApiError> {
    let body = serde_json::json!({ "user_id": user_id });
    let me: MeResponse =
        authed::send_json(Method::Post, "/api/auth/me", Some(&body), auth, modal).await?;
    me.user
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::Decode("empty user list".to_owned()))
}

/// `GET /api/exam/examID` — the subject's exam log.
pub async fn fetch_exam_logs(
    auth: RwSignal<AuthState>,
    modal: RwSignal<ModalState>,
    user_id: i64,
) -> Result<Vec<ExamSummary>, ApiError> {
    let path = format!("/api/exam/examID?user_id={user_id}");
    let list: ExamListResponse = authed::send_json(Method::Get, &path, None, auth, modal).await?;
    Ok(list.exams)
}

/// `POST /api/exam/random` — generate a fresh exam, returning its id.
pub async fn generate_random_exam(
    auth: RwSignal<AuthState>,
    modal: RwSignal<ModalState>,
    user_id: i64,
) -> Result<i64, ApiError> {
    let body = serde_json::json!({ "user_id": user_id });
    let resp: RandomExamResponse =
        authed::send_json(Method::Post, "/api/exam/random", Some(&body), auth, modal).await?;
    Ok(resp.exam_id)
}

/// `POST /api/exam/history` — questions and answers for one exam.
pub async fn fetch_exam_detail(
    auth: RwSignal<AuthState>,
    modal: RwSignal<ModalState>,
    exam_id: i64,
) -> Result<ExamDetailResponse, ApiError> {
    let body = serde_json::json!({ "exam_id": exam_id });
    authed::send_json(Method::Post, "/api/exam/history", Some(&body), auth, modal).await
}
