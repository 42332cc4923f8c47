use sea_orm_migration::prelude::*;

use crate::limits;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    #[sea_orm(iden = "flicket_users")]
    Table,
    Id,
    Username,
    Name,
    Password,
    Email,
    DateAdded,
    DateModified,
    JobTitle,
    Avatar,
    TotalPosts,
    Token,
    TokenExpiration,
}

#[derive(DeriveIden)]
enum Group {
    #[sea_orm(iden = "flicket_group")]
    Table,
    Id,
    GroupName,
}

#[derive(DeriveIden)]
enum UserGroup {
    #[sea_orm(iden = "flicket_groups")]
    Table,
    UserId,
    GroupId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(User::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(User::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(User::Username).string_len(limits::USERNAME_MAX).not_null())
                .col(ColumnDef::new(User::Name).string_len(limits::NAME_MAX).not_null())
                .col(ColumnDef::new(User::Password).var_binary(limits::PASSWORD_MAX).not_null())
                .col(
                    ColumnDef::new(User::Email)
                        .string_len(limits::EMAIL_MAX)
                        .not_null()
                        .unique_key(),
                )
                .col(ColumnDef::new(User::DateAdded).timestamp().not_null())
                .col(ColumnDef::new(User::DateModified).timestamp().null())
                .col(ColumnDef::new(User::JobTitle).string_len(limits::JOB_TITLE_MAX).null())
                .col(ColumnDef::new(User::Avatar).string_len(limits::AVATAR_MAX).null())
                .col(ColumnDef::new(User::TotalPosts).integer().not_null().default(0))
                .col(ColumnDef::new(User::Token).string_len(limits::TOKEN_MAX).null())
                .col(ColumnDef::new(User::TokenExpiration).timestamp().null())
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("ix_flicket_users_username")
                .table(User::Table)
                .col(User::Username)
                .unique()
                .to_owned(),
        )
        .await?;

        // NULL tokens do not collide under a unique index
        m.create_index(
            Index::create()
                .name("ix_flicket_users_token")
                .table(User::Table)
                .col(User::Token)
                .unique()
                .to_owned(),
        )
        .await?;

        m.create_table(
            Table::create()
                .table(Group::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Group::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(Group::GroupName).string_len(limits::GROUP_MAX).not_null())
                .to_owned(),
        )
        .await?;

        m.create_table(
            Table::create()
                .table(UserGroup::Table)
                .if_not_exists()
                .col(ColumnDef::new(UserGroup::UserId).integer().not_null())
                .col(ColumnDef::new(UserGroup::GroupId).integer().not_null())
                .primary_key(
                    Index::create()
                        .name("pk_flicket_groups")
                        .col(UserGroup::UserId)
                        .col(UserGroup::GroupId),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_flicket_groups_user")
                        .from(UserGroup::Table, UserGroup::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_flicket_groups_group")
                        .from(UserGroup::Table, UserGroup::GroupId)
                        .to(Group::Table, Group::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_flicket_groups_group")
                .table(UserGroup::Table)
                .col(UserGroup::GroupId)
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(UserGroup::Table).to_owned())
            .await?;
        m.drop_table(Table::drop().table(Group::Table).to_owned())
            .await?;
        m.drop_table(Table::drop().table(User::Table).to_owned())
            .await?;
        Ok(())
    }
}
