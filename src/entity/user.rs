//! User account entity.
//!
//! Maps to the `flicket_users` table. The row carries the account's
//! identity, its bcrypt password digest and the current API token.

use std::fmt;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ConnectionTrait, Set};

/// Sea-ORM entity model representing a user account.
///
/// # Database Schema
///
/// | Column           | Type                   | Notes                              |
/// |------------------|------------------------|------------------------------------|
/// | id               | INTEGER (Primary Key)  | auto-increment                     |
/// | username         | VARCHAR(24)            | unique, indexed                    |
/// | name             | VARCHAR(60)            | display name                       |
/// | password         | VARBINARY(60)          | bcrypt digest, never plaintext     |
/// | email            | VARCHAR(60)            | unique                             |
/// | date_added       | TIMESTAMP              | registration time, UTC             |
/// | date_modified    | TIMESTAMP NULL         | touched on every update, UTC       |
/// | job_title        | VARCHAR(64) NULL       |                                    |
/// | avatar           | VARCHAR(64) NULL       |                                    |
/// | total_posts      | INTEGER                | maintained by the posting layer    |
/// | token            | VARCHAR(32) NULL       | unique, indexed                    |
/// | token_expiration | TIMESTAMP NULL         | paired with `token`, UTC           |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flicket_users")]
pub struct Model {
    /// Surrogate key, also the principal id kept in sessions.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Login name.
    #[sea_orm(unique, indexed)]
    pub username: String,
    /// Display name.
    pub name: String,
    /// bcrypt digest bytes.
    pub password: Vec<u8>,
    #[sea_orm(unique)]
    pub email: String,
    /// Registration time, naive UTC.
    pub date_added: DateTime,
    /// Last update, naive UTC. `None` until the row is first updated.
    pub date_modified: Option<DateTime>,
    pub job_title: Option<String>,
    /// Avatar file name, managed by the upload layer.
    pub avatar: Option<String>,
    /// Number of posts authored, maintained outside this crate.
    pub total_posts: i32,
    /// Current bearer token, if one was ever issued.
    #[sea_orm(unique, indexed)]
    pub token: Option<String>,
    /// Instant the token stops validating, naive UTC.
    pub token_expiration: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_group::Entity")]
    UserGroup,
}

impl Related<super::user_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserGroup.def()
    }
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_group::Relation::Group.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_group::Relation::User.def().rev())
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if !insert {
            self.date_modified = Set(Some(Utc::now().naive_utc()));
        }
        Ok(self)
    }
}

impl ActiveModel {
    /// Builds an unpersisted account from registration data.
    ///
    /// `password` must already be a digest (see [`crate::password::hash_password`]).
    /// Hand the result to [`crate::UserRepository::save`] to store it.
    pub fn register(
        username: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        password: Vec<u8>,
        date_added: DateTime,
        job_title: Option<String>,
    ) -> Self {
        Self {
            id: NotSet,
            username: Set(username.into()),
            name: Set(name.into()),
            password: Set(password),
            email: Set(email.into()),
            date_added: Set(date_added),
            date_modified: NotSet,
            job_title: Set(job_title),
            avatar: Set(None),
            total_posts: Set(0),
            token: Set(None),
            token_expiration: Set(None),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<User {}>", self.username)
    }
}
