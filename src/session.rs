//! Cookie-session login on top of [`tower_sessions::Session`].
//!
//! Only the principal id is kept in the session; the account is loaded
//! again through the repository on every request.

use tower_sessions::Session;

use crate::entity::user;
use crate::error::Result;
use crate::principal::Principal;
use crate::repository::UserRepository;

/// Session key holding the logged-in principal's id.
pub const PRINCIPAL_KEY: &str = "_user_id";

/// Records `principal` as the session's user. The session id is cycled
/// first so a pre-login id cannot be reused.
pub async fn login<P: Principal + ?Sized>(session: &Session, principal: &P) -> Result<()> {
    session.cycle_id().await?;
    session.insert(PRINCIPAL_KEY, principal.get_id()).await?;
    tracing::debug!(principal = %principal.get_id(), "logged in");
    Ok(())
}

/// Drops the session's data and its stored record.
pub async fn logout(session: &Session) -> Result<()> {
    session.flush().await?;
    tracing::debug!("logged out");
    Ok(())
}

/// Loads the session's user. A missing key, an unparsable id or an id
/// whose account no longer exists all yield `None`.
pub async fn current_user<R>(session: &Session, repo: &R) -> Result<Option<user::Model>>
where
    R: UserRepository + ?Sized,
{
    let Some(raw) = session.get::<String>(PRINCIPAL_KEY).await? else {
        return Ok(None);
    };
    let Ok(id) = raw.parse::<i32>() else {
        tracing::warn!(principal = %raw, "session holds an unparsable principal id");
        return Ok(None);
    };
    repo.find_by_id(id).await
}
