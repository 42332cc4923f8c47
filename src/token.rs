use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Duration;
use rand::{rngs::OsRng, RngCore};

/// Random bytes behind each token. Base64 turns 24 bytes into exactly 32
/// characters, the width of the `token` column.
pub const TOKEN_BYTES: usize = 24;

/// Lifetime given to a freshly minted token when the caller has no opinion.
pub const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 36_000;

/// A token expiring within this many seconds is replaced rather than handed out.
pub const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;

pub fn default_token_lifetime() -> Duration {
    Duration::seconds(DEFAULT_TOKEN_LIFETIME_SECS)
}

pub(crate) fn refresh_margin() -> Duration {
    Duration::seconds(TOKEN_REFRESH_MARGIN_SECS)
}

/// Mints a new opaque bearer token from the OS random source.
pub fn generate_token() -> String {
    let mut buf = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut buf);
    STANDARD.encode(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::TOKEN_MAX;

    #[test]
    fn token_fills_the_column_exactly() {
        let token = generate_token();
        assert_eq!(token.len(), TOKEN_MAX as usize);
        assert_eq!(STANDARD.decode(&token).unwrap().len(), TOKEN_BYTES);
    }

    #[test]
    fn tokens_differ() {
        assert_ne!(generate_token(), generate_token());
    }
}
