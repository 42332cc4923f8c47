//! Named user group entity, mapped to `flicket_group`.

use std::fmt;

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

/// Sea-ORM entity model representing a named group.
///
/// # Database Schema
///
/// | Column     | Type                  | Notes                          |
/// |------------|-----------------------|--------------------------------|
/// | id         | INTEGER (Primary Key) | auto-increment                 |
/// | group_name | VARCHAR(64)           | matched by name for `is_admin` |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flicket_group")]
pub struct Model {
    /// Surrogate key.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Group name; membership of the configured admin group grants
    /// administrator rights.
    pub group_name: String,
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

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_group::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_group::Relation::Group.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Builds an unpersisted group.
    pub fn named(group_name: impl Into<String>) -> Self {
        Self {
            id: NotSet,
            group_name: Set(group_name.into()),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.group_name)
    }
}
