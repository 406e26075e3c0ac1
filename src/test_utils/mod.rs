//! Shared fixtures for handler and use-case tests.

use std::net::SocketAddr;

use secrecy::SecretString;
use time::OffsetDateTime;
use visionboard_types::sign_init_data;

use crate::{
    adapters::http::app_state::AppState,
    infra::{config::AppConfig, setup::init_app_state},
};

pub const TEST_BOT_TOKEN: &str = "000000:ABC";

pub fn now_unix() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

/// Fresh initData for `user_id`, signed with [`TEST_BOT_TOKEN`].
pub fn signed_init_data(user_id: i64) -> String {
    let auth_date = now_unix().to_string();
    let user = format!(r#"{{"id":{},"first_name":"Test"}}"#, user_id);
    sign_init_data(
        &[
            ("auth_date", &auth_date),
            ("user", &user),
            ("chat_type", "private"),
        ],
        TEST_BOT_TOKEN,
    )
}

/// Builds a test config, letting the caller tweak fields.
pub fn create_test_config(f: impl FnOnce(&mut AppConfig)) -> AppConfig {
    let mut config = AppConfig {
        bot_token: SecretString::new(TEST_BOT_TOKEN.into()),
        init_data_max_age_secs: 3600,
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        cors_origins: vec!["http://localhost:3000".to_string()],
        log_file: "test.log".to_string(),
    };
    f(&mut config);
    config
}

pub fn create_test_app_state(config: AppConfig) -> AppState {
    init_app_state(config)
}
