use std::num::IntErrorKind;

use axum::{
    extract::{FromRequestParts, Path},
    http::{request::Parts, StatusCode},
};

/// Integer path parameter.
///
/// Segments that are not a plain decimal integer (letters, a leading `+`)
/// are rejected with 404, as if no route had matched. Negative integers
/// below `i64::MIN` still bind, as [`NumPath::BelowRange`], so the sign
/// check can reject them. Positive integers above `i64::MAX` do not bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumPath {
    Int(i64),
    BelowRange,
}

impl<S> FromRequestParts<S> for NumPath
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::NOT_FOUND)?;
        parse_num(&raw).ok_or_else(|| {
            tracing::debug!(segment = %raw, "path segment is not an integer");
            StatusCode::NOT_FOUND
        })
    }
}

fn parse_num(raw: &str) -> Option<NumPath> {
    if raw.starts_with('+') {
        return None;
    }
    match raw.parse::<i64>() {
        Ok(n) => Some(NumPath::Int(n)),
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => Some(NumPath::BelowRange),
        Err(_) => None,
    }
}
