use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::{
    app_error::{AppError, AppResult},
    use_cases::session::SessionUseCases,
};

const TMA_SCHEME: &str = "tma";

/// Authenticates a request from its `Authorization: tma <initData>` header.
///
/// On success the [`visionboard_types::VerifiedInitData`] is stored in the
/// request extensions for handlers to pick up with `Extension`.
pub async fn tma_auth(
    State(sessions): State<Arc<SessionUseCases>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or(AppError::MissingAuthorization)?
        .to_str()
        .map_err(|_| AppError::InvalidAuthorization("header is not valid ASCII".into()))?;

    tracing::debug!(
        method = %request.method(),
        path = %request.uri().path(),
        "Authenticating request"
    );

    let init_data = sessions.authenticate(tma_credential(header)?)?;

    request.extensions_mut().insert(init_data);

    Ok(next.run(request).await)
}

/// Splits `tma <initData>` and returns the raw initData.
fn tma_credential(header: &str) -> AppResult<&str> {
    let (scheme, credential) = header.split_once(' ').ok_or_else(|| {
        AppError::InvalidAuthorization("expected 'tma <initData>'".into())
    })?;

    if credential.trim().is_empty() {
        return Err(AppError::MissingAuthorization);
    }

    if !scheme.eq_ignore_ascii_case(TMA_SCHEME) {
        return Err(AppError::InvalidAuthorization(format!(
            "unsupported scheme '{}', expected 'tma'",
            scheme
        )));
    }

    Ok(credential)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tma_credential_extracts_raw_init_data() {
        assert_eq!(
            tma_credential("tma auth_date=1&hash=ab").unwrap(),
            "auth_date=1&hash=ab"
        );
    }

    #[test]
    fn tma_credential_scheme_is_case_insensitive() {
        assert_eq!(tma_credential("TMA x=1").unwrap(), "x=1");
        assert_eq!(tma_credential("Tma x=1").unwrap(), "x=1");
    }

    #[test]
    fn tma_credential_keeps_everything_after_first_space() {
        assert_eq!(tma_credential("tma a=1 b=2").unwrap(), "a=1 b=2");
    }

    #[test]
    fn tma_credential_rejects_missing_separator() {
        assert!(matches!(
            tma_credential("tma"),
            Err(AppError::InvalidAuthorization(_))
        ));
    }

    #[test]
    fn tma_credential_rejects_empty_value() {
        assert!(matches!(
            tma_credential("tma "),
            Err(AppError::MissingAuthorization)
        ));
        assert!(matches!(
            tma_credential("tma    "),
            Err(AppError::MissingAuthorization)
        ));
    }

    #[test]
    fn tma_credential_rejects_other_schemes() {
        assert!(matches!(
            tma_credential("Bearer eyJtoken"),
            Err(AppError::InvalidAuthorization(_))
        ));
        assert!(matches!(
            tma_credential("tmax x=1"),
            Err(AppError::InvalidAuthorization(_))
        ));
    }
}
