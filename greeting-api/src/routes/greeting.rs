use axum::{Json, http::StatusCode};
use serde::Serialize;

/// The fixed message served by this process.
pub const GREETING: &str = "Hello World8!";

/// Response body for `GET /test`.
#[derive(Serialize)]
pub struct GreetingResponse {
    pub message: &'static str,
}

/// `GET /test`
///
/// Returns the fixed greeting document. The handler takes no input from the
/// request and holds no state, so repeated calls are indistinguishable.
pub async fn greeting() -> (StatusCode, Json<GreetingResponse>) {
    (StatusCode::OK, Json(GreetingResponse { message: GREETING }))
}
