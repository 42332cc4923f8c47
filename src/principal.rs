//! Authentication and authorization on top of the user entity.
//!
//! These operations only talk to storage through [`UserRepository`]. Both
//! `is_admin` and `check_password` look the account up again instead of
//! trusting the fields already held by `self`, so they see membership or
//! password changes committed by another request since `self` was loaded.

use chrono::{Duration, Utc};
use sea_orm::Set;

use crate::entity::user;
use crate::error::{IdentityError, Result};
use crate::password::verify_password;
use crate::repository::UserRepository;
use crate::token::{generate_token, refresh_margin};

/// The "logged-in principal" contract consumed by the session layer.
pub trait Principal {
    fn is_authenticated(&self) -> bool;
    fn is_active(&self) -> bool;
    fn is_anonymous(&self) -> bool;
    /// Identity stored in the session; resolves back through the repository.
    fn get_id(&self) -> String;
}

// Accounts have no deactivation state, so every stored user is a normal,
// active, logged-in principal.
impl Principal for user::Model {
    fn is_authenticated(&self) -> bool {
        true
    }

    fn is_active(&self) -> bool {
        true
    }

    fn is_anonymous(&self) -> bool {
        false
    }

    fn get_id(&self) -> String {
        self.id.to_string()
    }
}

impl user::Model {
    /// True when the account belongs to the group named `admin_group_name`.
    pub async fn is_admin<R>(&self, repo: &R, admin_group_name: &str) -> Result<bool>
    where
        R: UserRepository + ?Sized,
    {
        let Some(fresh) = repo.find_by_id(self.id).await? else {
            return Ok(false);
        };
        let groups = repo.groups_of(fresh.id).await?;
        Ok(groups.iter().any(|g| g.group_name == admin_group_name))
    }

    /// Verifies `plaintext` against the digest currently stored for this
    /// username. An unknown username is a mismatch, not an error.
    pub async fn check_password<R>(&self, repo: &R, plaintext: &str) -> Result<bool>
    where
        R: UserRepository + ?Sized,
    {
        match repo.find_by_username(&self.username).await? {
            Some(stored) => verify_password(plaintext, &stored.password),
            None => Ok(false),
        }
    }

    /// Returns the current API token, minting and storing a new one when
    /// there is none or it expires within the next minute.
    ///
    /// Repeated calls inside the validity window return the same token and
    /// write nothing. A non-positive `expires_in`, or one that pushes the
    /// expiry past the representable range, is rejected with
    /// [`IdentityError::TokenLifetime`].
    pub async fn get_token<R>(&mut self, repo: &R, expires_in: Duration) -> Result<String>
    where
        R: UserRepository + ?Sized,
    {
        let now = Utc::now().naive_utc();
        if expires_in <= Duration::zero() {
            return Err(IdentityError::TokenLifetime(expires_in));
        }
        if let (Some(token), Some(expiration)) = (&self.token, self.token_expiration) {
            if expiration > now + refresh_margin() {
                tracing::debug!(user_id = self.id, "reusing api token");
                return Ok(token.clone());
            }
        }

        // 192 random bits; the loop only guards the unique column
        let mut token = generate_token();
        while repo.find_by_token(&token).await?.is_some() {
            token = generate_token();
        }
        let expiration = now
            .checked_add_signed(expires_in)
            .ok_or(IdentityError::TokenLifetime(expires_in))?;

        let mut active: user::ActiveModel = self.clone().into();
        active.token = Set(Some(token.clone()));
        active.token_expiration = Set(Some(expiration));
        *self = repo.save(active).await?;

        tracing::debug!(user_id = self.id, %expiration, "issued api token");
        Ok(token)
    }

    /// Expires the current token one second in the past. The token string
    /// stays on the row but no longer validates.
    pub async fn revoke_token<R>(&mut self, repo: &R) -> Result<()>
    where
        R: UserRepository + ?Sized,
    {
        let expiration = Utc::now().naive_utc() - Duration::seconds(1);

        let mut active: user::ActiveModel = self.clone().into();
        active.token_expiration = Set(Some(expiration));
        *self = repo.save(active).await?;

        tracing::debug!(user_id = self.id, "revoked api token");
        Ok(())
    }

    /// Resolves a bearer token to its owner while the token is unexpired.
    pub async fn check_token<R>(repo: &R, token: &str) -> Result<Option<user::Model>>
    where
        R: UserRepository + ?Sized,
    {
        let Some(user) = repo.find_by_token(token).await? else {
            return Ok(None);
        };
        match user.token_expiration {
            Some(expiration) if Utc::now().naive_utc() < expiration => Ok(Some(user)),
            _ => Ok(None),
        }
    }
}
