use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use time::OffsetDateTime;
use url::form_urlencoded;

use crate::{
    InitDataError, VerifiedInitData, WebAppUser,
    init_data::{InitDataFields, data_check_string, parse_init_data},
};

type HmacSha256 = Hmac<Sha256>;

/// Fixed HMAC key the platform uses to turn a bot token into a signing key.
const WEB_APP_DATA: &[u8] = b"WebAppData";

/// Derives the initData signing key from a bot token.
///
/// `HMAC-SHA256(key = "WebAppData", message = bot_token)`. A plain SHA-256
/// of the token is a different scheme and is not accepted by the platform.
///
/// # Example
/// ```
/// use visionboard_types::derive_signing_key;
///
/// let key = derive_signing_key("000000:ABC");
/// assert_eq!(key.len(), 32);
/// ```
pub fn derive_signing_key(bot_token: &str) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(WEB_APP_DATA).expect("HMAC accepts any key length");
    mac.update(bot_token.as_bytes());

    let mut key = [0u8; 32];
    key.copy_from_slice(&mac.finalize().into_bytes());
    key
}

/// Computes the lowercase-hex signature of a data-check string.
pub fn sign_data_check_string(data_check_string: &str, signing_key: &[u8; 32]) -> String {
    let mut mac = HmacSha256::new_from_slice(signing_key).expect("HMAC accepts any key length");
    mac.update(data_check_string.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Produces a signed initData string for the given pairs, in the given order.
///
/// Any `hash` pair in the input is ignored. The output is percent-encoded
/// twice over, so it survives [`parse_init_data`] for values containing
/// `&`, `=`, `+` or `%`. Intended for fixtures and local tooling.
pub fn sign_init_data(pairs: &[(&str, &str)], bot_token: &str) -> String {
    let fields: InitDataFields = pairs
        .iter()
        .filter(|(key, _)| *key != "hash")
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

    let hash = sign_data_check_string(&data_check_string(&fields), &derive_signing_key(bot_token));

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs.iter().filter(|(key, _)| *key != "hash") {
        serializer.append_pair(key, value);
    }
    serializer.append_pair("hash", &hash);

    urlencoding::encode(&serializer.finish()).into_owned()
}

/// Verifies a raw initData string against the bot token, using the current
/// UTC time for the expiry check.
pub fn validate_init_data(
    raw: &str,
    bot_token: &str,
    max_age_secs: u64,
) -> Result<VerifiedInitData, InitDataError> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    validate_init_data_at(raw, bot_token, max_age_secs, now)
}

/// Verifies a raw initData string against the bot token as of `now`
/// (Unix seconds).
///
/// Only credentials older than `max_age_secs` are rejected; an `auth_date`
/// in the future is accepted.
pub fn validate_init_data_at(
    raw: &str,
    bot_token: &str,
    max_age_secs: u64,
    now: i64,
) -> Result<VerifiedInitData, InitDataError> {
    let mut fields = parse_init_data(raw)?;

    // The signature never covers itself.
    let received_hash = fields
        .remove("hash")
        .ok_or(InitDataError::MissingField("hash"))?;

    let auth_date: i64 = fields
        .get("auth_date")
        .ok_or(InitDataError::MissingField("auth_date"))?
        .parse()
        .map_err(|e: std::num::ParseIntError| {
            InitDataError::ParseFailure(format!("auth_date: {}", e))
        })?;

    let age_secs = now.saturating_sub(auth_date);
    let max_age = i64::try_from(max_age_secs).unwrap_or(i64::MAX);
    if age_secs > max_age {
        return Err(InitDataError::Expired {
            age_secs,
            max_age_secs,
        });
    }

    let expected_hash =
        sign_data_check_string(&data_check_string(&fields), &derive_signing_key(bot_token));

    if !hashes_match(&expected_hash, &received_hash) {
        return Err(InitDataError::SignatureMismatch);
    }

    let user = fields
        .get("user")
        .map(|raw_user| serde_json::from_str::<WebAppUser>(raw_user))
        .transpose()
        .map_err(|e| InitDataError::ParseFailure(format!("user: {}", e)))?;

    Ok(VerifiedInitData::new(
        user,
        auth_date,
        fields.remove("query_id"),
        fields.remove("chat_instance"),
        fields.remove("chat_type"),
        fields.remove("start_param"),
    ))
}

/// Constant-time comparison; timing does not depend on where the digests
/// first differ.
fn hashes_match(expected: &str, received: &str) -> bool {
    expected.as_bytes().ct_eq(received.as_bytes()).into()
}
