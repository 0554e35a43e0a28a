use axum::Json;
use serde::Serialize;

use crate::error::ApiError;
use crate::extract::NumPath;
use crate::fibonacci::fibonacci;

#[derive(Debug, Serialize)]
pub struct FibResponse {
    pub input: i64,
    pub fibonacci_sequence: u128,
}

/// `GET /hello/{num}`
pub async fn hello(path: NumPath) -> Result<Json<FibResponse>, ApiError> {
    let num = match path {
        NumPath::Int(num) => num,
        NumPath::BelowRange => {
            tracing::debug!("rejecting negative input below i64 range");
            return Err(ApiError::NegativeInput);
        }
    };
    let n = u64::try_from(num).map_err(|_| {
        tracing::debug!(num, "rejecting negative input");
        ApiError::NegativeInput
    })?;

    tracing::debug!(n, "computing fibonacci");
    // The recursion is CPU bound; keep it off the async workers.
    let result = tokio::task::spawn_blocking(move || fibonacci(n))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    tracing::debug!(n, result = %result, "fibonacci computed");

    Ok(Json(FibResponse {
        input: num,
        fibonacci_sequence: result,
    }))
}
