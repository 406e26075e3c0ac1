use secrecy::{ExposeSecret, SecretString};
use tracing::instrument;
use visionboard_types::{VerifiedInitData, validate_init_data};

use crate::app_error::{AppError, AppResult};

/// Authenticates Mini App sessions from their signed initData.
#[derive(Clone)]
pub struct SessionUseCases {
    bot_token: SecretString,
    max_age_secs: u64,
}

impl SessionUseCases {
    pub fn new(bot_token: SecretString, max_age_secs: u64) -> Self {
        Self {
            bot_token,
            max_age_secs,
        }
    }

    pub fn max_age_secs(&self) -> u64 {
        self.max_age_secs
    }

    /// Verifies raw initData and returns the caller's identity.
    ///
    /// Never records the credential itself; rejections are logged with
    /// their reason and surfaced as [`AppError::InvalidInitData`].
    #[instrument(skip_all, fields(max_age_secs = self.max_age_secs))]
    pub fn authenticate(&self, init_data_raw: &str) -> AppResult<VerifiedInitData> {
        match validate_init_data(
            init_data_raw,
            self.bot_token.expose_secret(),
            self.max_age_secs,
        ) {
            Ok(init_data) => {
                tracing::debug!(user_id = ?init_data.user_id(), "initData verified");
                Ok(init_data)
            }
            Err(err) => {
                tracing::warn!(reason = err.kind(), error = %err, "initData rejected");
                Err(AppError::InvalidInitData(err))
            }
        }
    }
}
