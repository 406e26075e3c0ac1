use std::net::SocketAddr;

use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

pub struct AppConfig {
    /// Telegram bot token. Signs every initData the platform issues for this bot.
    /// SECURITY: never log or return this value.
    pub bot_token: SecretString,
    /// How long a signed initData stays valid after its auth_date.
    pub init_data_max_age_secs: u64,
    pub bind_addr: SocketAddr,
    /// Origins allowed to call the API from a browser (the Mini App frontends).
    pub cors_origins: Vec<String>,
    /// Destination of the structured JSON log.
    pub log_file: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bot_token: SecretString = SecretString::new(get_env::<String>("BOT_TOKEN").into());

        let init_data_max_age_secs: u64 = get_env_default("INIT_DATA_MAX_AGE_SECS", 3600);

        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 8000)));
        let cors_origins = split_origins(&get_env_default(
            "CORS_ORIGINS",
            DEFAULT_CORS_ORIGINS.to_string(),
        ));
        let log_file: String = get_env_default("LOG_FILE", "app.log".to_string());

        Self {
            bot_token,
            init_data_max_age_secs,
            bind_addr,
            cors_origins,
            log_file,
        }
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
