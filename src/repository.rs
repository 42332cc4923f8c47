use async_trait::async_trait;

use crate::api::Page;
use crate::entity::{group, user};
use crate::error::Result;

/// Data access used by the identity operations.
///
/// Schema lives in [`crate::entity`]; this trait is the only way the
/// operations in [`crate::principal`] reach the database, which keeps them
/// usable against any backing store. [`crate::IdentityStore`] is the
/// Sea-ORM implementation.
///
/// Every lookup that finds no row returns `Ok(None)` or an empty list.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<user::Model>>;

    async fn find_by_username(&self, username: &str) -> Result<Option<user::Model>>;

    async fn find_by_token(&self, token: &str) -> Result<Option<user::Model>>;

    /// Inserts the account when its id is unset, updates it otherwise, and
    /// returns the stored row. Constraint violations surface here.
    async fn save(&self, user: user::ActiveModel) -> Result<user::Model>;

    /// Groups the user belongs to, ordered by group name.
    async fn groups_of(&self, user_id: i32) -> Result<Vec<group::Model>>;

    /// Members of a group, ordered by user id.
    async fn members_of(&self, group_id: i32) -> Result<Vec<user::Model>>;

    /// One page of all accounts ordered by id. `page` is 1-based.
    async fn paginate_users(&self, page: u64, per_page: u64) -> Result<Page<user::Model>>;
}
