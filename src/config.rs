use std::env;
use std::str::FromStr;

use chrono::{Duration, Utc};

use crate::error::{IdentityError, Result};
use crate::token::DEFAULT_TOKEN_LIFETIME_SECS;

pub const DEFAULT_ADMIN_GROUP: &str = "flicket_admin";
pub const DEFAULT_PER_PAGE: u64 = 10;
pub const DEFAULT_MAX_PER_PAGE: u64 = 100;

/// Settings consulted by the identity operations.
///
/// Nothing in the crate reads these from global state; callers pass the
/// relevant field into each operation.
#[derive(Clone, Debug)]
pub struct IdentityConfig {
    /// Members of the group with this name are administrators.
    pub admin_group_name: String,
    pub bcrypt_cost: u32,
    pub token_lifetime: Duration,
    pub default_per_page: u64,
    pub max_per_page: u64,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            admin_group_name: DEFAULT_ADMIN_GROUP.to_string(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
            token_lifetime: Duration::seconds(DEFAULT_TOKEN_LIFETIME_SECS),
            default_per_page: DEFAULT_PER_PAGE,
            max_per_page: DEFAULT_MAX_PER_PAGE,
        }
    }
}

impl IdentityConfig {
    /// Loads `.env` if present, then overrides defaults from
    /// `FLICKET_ADMIN_GROUP`, `FLICKET_BCRYPT_COST`,
    /// `FLICKET_TOKEN_LIFETIME_SECS`, `FLICKET_PER_PAGE` and
    /// `FLICKET_MAX_PER_PAGE`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let token_secs: i64 = parse_env("FLICKET_TOKEN_LIFETIME_SECS")?
            .unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS);

        Ok(Self {
            admin_group_name: env::var("FLICKET_ADMIN_GROUP")
                .unwrap_or(defaults.admin_group_name),
            bcrypt_cost: parse_env("FLICKET_BCRYPT_COST")?.unwrap_or(defaults.bcrypt_cost),
            token_lifetime: token_lifetime(token_secs)?,
            default_per_page: parse_env("FLICKET_PER_PAGE")?.unwrap_or(defaults.default_per_page),
            max_per_page: parse_env("FLICKET_MAX_PER_PAGE")?.unwrap_or(defaults.max_per_page),
        })
    }

    /// Page size for an API request: the default when none was asked for,
    /// never more than `max_per_page` and never zero.
    pub fn per_page(&self, requested: Option<u64>) -> u64 {
        requested
            .unwrap_or(self.default_per_page)
            .min(self.max_per_page)
            .max(1)
    }
}

/// Accepts a positive lifetime whose expiry, counted from now, is still a
/// representable timestamp.
fn token_lifetime(secs: i64) -> Result<Duration> {
    let invalid = |message: &str| IdentityError::Config {
        key: "FLICKET_TOKEN_LIFETIME_SECS".to_string(),
        message: message.to_string(),
    };
    if secs <= 0 {
        return Err(invalid("must be positive"));
    }
    let lifetime = Duration::try_seconds(secs).ok_or_else(|| invalid("out of range"))?;
    Utc::now()
        .naive_utc()
        .checked_add_signed(lifetime)
        .ok_or_else(|| invalid("out of range"))?;
    Ok(lifetime)
}

fn parse_env<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map(Some).map_err(|e: T::Err| IdentityError::Config {
            key: key.to_string(),
            message: e.to_string(),
        }),
        Err(_) => Ok(None),
    }
}
