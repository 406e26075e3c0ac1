use thiserror::Error;
use visionboard_types::InitDataError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authorization header is required")]
    MissingAuthorization,

    #[error("Invalid Authorization header: {0}")]
    InvalidAuthorization(String),

    /// The inner reason is for logs only; clients get a uniform response.
    #[error("Invalid or tampered init data")]
    InvalidInitData(#[from] InitDataError),

    #[error("Not found")]
    NotFound,
}

pub type AppResult<T> = Result<T, AppError>;
