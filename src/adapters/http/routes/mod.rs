pub mod health;
pub mod session;

use axum::{Router, middleware};

use crate::{
    adapters::http::{app_state::AppState, middleware::tma_auth},
    app_error::AppError,
};

/// Public routes plus the `/api` routes that sit behind initData auth.
pub fn router(app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .merge(session::router())
        .route_layer(middleware::from_fn_with_state(app_state.clone(), tma_auth));

    Router::new()
        .merge(health::router())
        .nest("/api", protected)
        .fallback(not_found)
}

async fn not_found() -> AppError {
    AppError::NotFound
}
