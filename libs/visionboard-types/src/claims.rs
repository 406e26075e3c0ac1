use serde::{Deserialize, Serialize};

/// Telegram user object carried in the `user` field of initData.
///
/// Only `id` is guaranteed by the platform. Fields this type does not name
/// are kept in `extra` so nothing the client signed is silently dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebAppUser {
    /// Telegram user ID
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// IETF language tag of the user's client (e.g., "en")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allows_write_to_pm: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Identity claim extracted from a credential whose signature checked out.
///
/// Deliberately not `Deserialize` and `#[non_exhaustive]`: the only way to
/// obtain one outside this crate is through [`crate::validate_init_data`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct VerifiedInitData {
    /// `None` when the credential carried no `user` field.
    pub user: Option<WebAppUser>,

    /// Unix timestamp (seconds) at which the platform issued the credential
    pub auth_date: i64,

    pub query_id: Option<String>,
    pub chat_instance: Option<String>,
    pub chat_type: Option<String>,
    pub start_param: Option<String>,
}

impl VerifiedInitData {
    pub(crate) fn new(
        user: Option<WebAppUser>,
        auth_date: i64,
        query_id: Option<String>,
        chat_instance: Option<String>,
        chat_type: Option<String>,
        start_param: Option<String>,
    ) -> Self {
        Self {
            user,
            auth_date,
            query_id,
            chat_instance,
            chat_type,
            start_param,
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_app_user_minimal() {
        let user: WebAppUser = serde_json::from_str(r#"{"id":42}"#).unwrap();
        assert_eq!(user.id, 42);
        assert!(user.first_name.is_none());
        assert!(user.extra.is_empty());
    }

    #[test]
    fn test_web_app_user_keeps_unknown_fields() {
        let user: WebAppUser = serde_json::from_str(
            r#"{"id":7,"first_name":"Ann","username":"ann","added_to_attachment_menu":true}"#,
        )
        .unwrap();

        assert_eq!(user.first_name.as_deref(), Some("Ann"));
        assert_eq!(user.username.as_deref(), Some("ann"));
        assert_eq!(
            user.extra.get("added_to_attachment_menu"),
            Some(&serde_json::Value::Bool(true))
        );

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["added_to_attachment_menu"], true);
        assert!(json.get("last_name").is_none());
    }

    #[test]
    fn test_web_app_user_requires_integer_id() {
        assert!(serde_json::from_str::<WebAppUser>(r#"{"first_name":"x"}"#).is_err());
        assert!(serde_json::from_str::<WebAppUser>(r#"{"id":"42"}"#).is_err());
    }

    #[test]
    fn test_user_id_accessor() {
        let user: WebAppUser = serde_json::from_str(r#"{"id":99}"#).unwrap();
        let claim = VerifiedInitData::new(Some(user), 1700000000, None, None, None, None);
        assert_eq!(claim.user_id(), Some(99));

        let anonymous = VerifiedInitData::new(None, 1700000000, None, None, None, None);
        assert_eq!(anonymous.user_id(), None);
    }
}
