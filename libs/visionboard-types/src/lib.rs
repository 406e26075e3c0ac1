//! Shared types and crypto primitives for Visionboard authentication.
//!
//! This crate provides:
//! - Telegram Mini App initData parsing and signature verification
//! - The verified identity claim (`VerifiedInitData`, `WebAppUser`)
//! - The verification error taxonomy and client-facing error codes
//! - API response types
//!
//! Verification is synchronous and free of I/O; the bot token is always
//! passed in by the caller.

mod claims;
mod crypto;
mod errors;
mod init_data;
mod responses;

pub use claims::{VerifiedInitData, WebAppUser};
pub use crypto::{
    derive_signing_key, sign_data_check_string, sign_init_data, validate_init_data,
    validate_init_data_at,
};
pub use errors::{ErrorCode, InitDataError};
pub use init_data::{InitDataFields, data_check_string, parse_init_data};
pub use responses::SessionDetails;
