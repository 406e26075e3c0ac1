use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use visionboard_types::ErrorCode;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        match &self {
            AppError::InvalidInitData(reason) => {
                tracing::warn!(reason = reason.kind(), error = %reason, "Request rejected")
            }
            _ => tracing::warn!(error = ?self, "Request rejected"),
        }

        match self {
            AppError::MissingAuthorization => {
                error_resp(StatusCode::UNAUTHORIZED, ErrorCode::MissingAuthorization, None)
            }
            AppError::InvalidAuthorization(msg) => error_resp(
                StatusCode::BAD_REQUEST,
                ErrorCode::InvalidAuthorization,
                Some(msg),
            ),
            AppError::InvalidInitData(reason) => {
                error_resp(StatusCode::UNAUTHORIZED, reason.public_code(), None)
            }
            AppError::NotFound => error_resp(StatusCode::NOT_FOUND, ErrorCode::NotFound, None),
        }
    }
}

fn error_resp(status: StatusCode, code: ErrorCode, message: Option<String>) -> Response {
    let body = match message {
        Some(msg) => serde_json::json!({ "code": code.as_str(), "message": msg }),
        None => serde_json::json!({ "code": code.as_str() }),
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use visionboard_types::InitDataError;

    use super::*;

    #[test]
    fn init_data_rejections_share_one_status() {
        for reason in [
            InitDataError::EmptyInput,
            InitDataError::MissingField("hash"),
            InitDataError::Expired {
                age_secs: 4000,
                max_age_secs: 3600,
            },
            InitDataError::SignatureMismatch,
        ] {
            let response = AppError::InvalidInitData(reason).into_response();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            AppError::MissingAuthorization.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::InvalidAuthorization("x".into())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
    }
}
