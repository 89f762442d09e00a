//! Share-link token minting and validity rules.
//!
//! A share token grants anonymous read access to exactly one wishlist. Tokens
//! are 256 bits drawn from the thread-local CSPRNG and hex encoded; they are
//! never derived from ids or counters. Issuing a new token leaves earlier
//! tokens for the same wishlist valid.

use rand::Rng;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Number of random bytes in a share token.
pub const SHARE_TOKEN_BYTES: usize = 32;

/// Length of the hex-encoded token string.
pub const SHARE_TOKEN_LEN: usize = SHARE_TOKEN_BYTES * 2;

/// Longest lifetime a share link may be issued with (one year).
pub const MAX_SHARE_TTL_HOURS: i64 = 24 * 365;

/// Path segment under which the frontend serves shared wishlists.
pub const SHARED_PATH: &str = "shared";

/// Generate a new random share token.
pub fn generate_share_token() -> String {
    let mut bytes = [0u8; SHARE_TOKEN_BYTES];
    rand::rng().fill(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Returns `true` if `token` has the shape of a token we could have issued.
///
/// Used to reject garbage before touching storage.
pub fn is_well_formed_token(token: &str) -> bool {
    token.len() == SHARE_TOKEN_LEN && token.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Compute the expiry for a new share from an optional lifetime in hours.
///
/// `None` yields a link that never expires.
pub fn share_expiry(now: Timestamp, ttl_hours: Option<i64>) -> Result<Option<Timestamp>, CoreError> {
    match ttl_hours {
        None => Ok(None),
        Some(hours) if (1..=MAX_SHARE_TTL_HOURS).contains(&hours) => {
            Ok(Some(now + chrono::Duration::hours(hours)))
        }
        Some(_) => Err(CoreError::Validation(format!(
            "expires_in_hours must be between 1 and {MAX_SHARE_TTL_HOURS}"
        ))),
    }
}

/// Check that a share with the given expiry is still usable at `now`.
pub fn ensure_share_active(expires_at: Option<Timestamp>, now: Timestamp) -> Result<(), CoreError> {
    match expires_at {
        Some(at) if at <= now => Err(CoreError::Gone("Share link has expired".into())),
        _ => Ok(()),
    }
}

/// Build the public link handed to the wishlist owner.
pub fn build_share_link(base_url: &str, token: &str) -> String {
    format!("{}/{SHARED_PATH}/{token}", base_url.trim_end_matches('/'))
}
