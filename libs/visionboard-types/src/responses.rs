use serde::{Deserialize, Serialize};

use crate::{VerifiedInitData, WebAppUser};

/// Session details returned to the Mini App after authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDetails {
    /// Telegram user ID, if the credential carried a user
    pub user_id: Option<i64>,

    pub user: Option<WebAppUser>,

    /// Unix timestamp when the credential was issued
    pub auth_date: i64,

    pub chat_type: Option<String>,
    pub chat_instance: Option<String>,
    pub start_param: Option<String>,
}

impl From<&VerifiedInitData> for SessionDetails {
    fn from(init_data: &VerifiedInitData) -> Self {
        Self {
            user_id: init_data.user_id(),
            user: init_data.user.clone(),
            auth_date: init_data.auth_date,
            chat_type: init_data.chat_type.clone(),
            chat_instance: init_data.chat_instance.clone(),
            start_param: init_data.start_param.clone(),
        }
    }
}
