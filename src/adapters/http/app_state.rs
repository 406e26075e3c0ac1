use std::sync::Arc;

use axum::extract::FromRef;

use crate::{infra::config::AppConfig, use_cases::session::SessionUseCases};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub session_use_cases: Arc<SessionUseCases>,
}

impl FromRef<AppState> for Arc<SessionUseCases> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.session_use_cases.clone()
    }
}
