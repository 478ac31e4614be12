//! Bearer token inspection.
//!
//! Decodes the payload segment of a compact JWT and evaluates expiry.
//! Everything here is pure and fails closed: any malformed input yields
//! `None`, which callers must treat as "not authenticated". No state is
//! read or written, and nothing is cached.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Claims embedded in an access or refresh token payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct Claims {
    pub user_id: i64,
    #[serde(default)]
    pub iat: i64,
    pub exp: i64,
}

/// Decode a token's payload segment into [`Claims`].
///
/// Strips an optional `Bearer ` prefix, takes the middle segment of the
/// compact form, base64url-decodes it, and parses the JSON claims.
/// Returns `None` for any malformed input; never panics.
pub fn decode(token: &str) -> Option<Claims> {
    let raw = token.strip_prefix("Bearer ").unwrap_or(token);
    let payload = raw.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.as_bytes()).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Whether `token` decodes and is unexpired at `now` (Unix seconds).
///
/// Expiry is strict: a token whose `exp` equals `now` is no longer valid.
pub fn is_valid_at(token: &str, now: i64) -> bool {
    decode(token).is_some_and(|claims| now < claims.exp)
}

/// The subject identifier embedded in `token`, if it decodes.
pub fn subject_of(token: &str) -> Option<i64> {
    decode(token).map(|claims| claims.user_id)
}

/// Current Unix time in seconds.
pub fn now_unix() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0) as i64;
        secs
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        i64::try_from(secs).unwrap_or(i64::MAX)
    }
}
