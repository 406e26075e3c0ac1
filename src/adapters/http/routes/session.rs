use axum::{Extension, Json, Router, response::IntoResponse, routing::get};
use visionboard_types::{SessionDetails, VerifiedInitData};

use crate::adapters::http::app_state::AppState;

/// Returns a router for session endpoints.
/// Note: The tma_auth middleware is applied in mod.rs when merging this router.
pub fn router() -> Router<AppState> {
    Router::new().route("/session", get(current_session))
}

/// GET /api/session
/// Returns the identity carried by the caller's verified initData.
async fn current_session(Extension(init_data): Extension<VerifiedInitData>) -> impl IntoResponse {
    Json(SessionDetails::from(&init_data))
}
