//! Caller identity extraction.
//!
//! Authentication itself happens in a fronting proxy; by the time a request
//! reaches this service the authenticated username is carried in a header.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{request::Parts, StatusCode};

/// Header the fronting proxy sets to the authenticated username.
pub const PRINCIPAL_HEADER: &str = "x-forwarded-user";

/// The authenticated caller. Rejects with 401 when the header is absent.
#[derive(Debug, Clone)]
pub struct Principal(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(PRINCIPAL_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(|value| Principal(value.to_string()))
            .ok_or((
                StatusCode::UNAUTHORIZED,
                "no authenticated user".to_string(),
            ))
    }
}
