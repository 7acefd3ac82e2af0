//! Explicit route registration.

use axum::{Router, routing::get};

use crate::routes::greeting;

/// Builds the service router.
///
/// One route is registered; requests for any other path fall through to
/// axum's default 404 fallback, and non-GET methods on `/test` are answered
/// with 405 by the method router.
pub fn router() -> Router {
    Router::new().route("/test", get(greeting::greeting))
}
