//! Authenticated request wrapper.
//!
//! Attaches the current access token to outbound calls. A 401 answer
//! triggers one renewal and one retry; a 401 on the retry propagates.
//! At most one retry per logical call, never a loop. Other statuses pass
//! through untouched — business-logic errors are not interpreted here.

#[cfg(test)]
#[path = "authed_test.rs"]
mod authed_test;

use leptos::prelude::RwSignal;

use crate::net::error::ApiError;
use crate::state::auth::AuthState;
use crate::state::modal::ModalState;

#[cfg(feature = "hydrate")]
use crate::net::renew;
#[cfg(feature = "hydrate")]
use crate::util::storage::{self, TokenKind};

/// HTTP methods the remote contract uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// What to do with a response status at a given attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Disposition {
    /// Hand the response to body decoding (which maps error statuses).
    Done,
    /// First 401: renew the access token and retry once.
    RenewAndRetry,
    /// 401 after the retry: give up.
    Fail,
}

pub(crate) fn disposition(status: u16, retried: bool) -> Disposition {
    match (status, retried) {
        (401, false) => Disposition::RenewAndRetry,
        (401, true) => Disposition::Fail,
        _ => Disposition::Done,
    }
}

#[cfg(feature = "hydrate")]
async fn issue(
    method: Method,
    path: &str,
    body: Option<&serde_json::Value>,
    token: &str,
) -> Result<gloo_net::http::Response, ApiError> {
    let builder = match method {
        Method::Get => gloo_net::http::Request::get(path),
        Method::Post => gloo_net::http::Request::post(path),
        Method::Put => gloo_net::http::Request::put(path),
    }
    .header("Authorization", token);

    let sent = match body {
        Some(json) => {
            builder
                .json(json)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
        }
        None => builder.send().await,
    };
    sent.map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn decode_body<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    let status = resp.status();
    if !resp.ok() {
        return Err(ApiError::Status(status));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Issue an authenticated JSON request and decode the response body.
pub async fn send_json<T: serde::de::DeserializeOwned>(
    method: Method,
    path: &str,
    body: Option<&serde_json::Value>,
    auth: RwSignal<AuthState>,
    modal: RwSignal<ModalState>,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = storage::token(TokenKind::Access).unwrap_or_default();
        let resp = issue(method, path, body, &token).await?;

        match disposition(resp.status(), false) {
            Disposition::RenewAndRetry => {
                let fresh = renew::renew(auth, modal).await?;
                let retry = issue(method, path, body, &fresh).await?;
                match disposition(retry.status(), true) {
                    Disposition::Fail => Err(ApiError::Unauthorized),
                    _ => decode_body(retry).await,
                }
            }
            _ => decode_body(resp).await,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body, auth, modal);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
