use std::collections::BTreeMap;

use url::form_urlencoded;

use crate::InitDataError;

/// Decoded initData fields keyed in byte order.
pub type InitDataFields = BTreeMap<String, String>;

/// Parses a raw initData string into its key/value fields.
///
/// The whole string is percent-decoded once, then split as an
/// `application/x-www-form-urlencoded` query, which decodes each key and
/// value again. When a key appears more than once, the last value wins.
/// Pairs without `=` are kept with an empty value.
pub fn parse_init_data(raw: &str) -> Result<InitDataFields, InitDataError> {
    if raw.trim().is_empty() {
        return Err(InitDataError::EmptyInput);
    }

    let decoded =
        urlencoding::decode(raw).map_err(|e| InitDataError::ParseFailure(e.to_string()))?;

    let fields: InitDataFields = form_urlencoded::parse(decoded.as_bytes())
        .into_owned()
        .collect();

    if fields.is_empty() {
        return Err(InitDataError::ParseFailure("no key/value pairs".into()));
    }

    Ok(fields)
}

/// Builds the data-check string: `key=value` lines sorted by key, joined by
/// `\n`, without a trailing newline.
///
/// The caller must have removed `hash` already.
pub fn data_check_string(fields: &InitDataFields) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("\n")
}
