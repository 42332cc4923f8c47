//! Database entity models for flicket-identity.
//!
//! This module contains the Sea-ORM entity definitions for the identity
//! tables. Table names, column names and column types (timestamps are
//! naive UTC) match the existing Flicket schema so the crate can be pointed
//! at a database that already holds accounts.

/// User accounts (`flicket_users`).
pub mod user;

/// Named groups (`flicket_group`).
pub mod group;

/// User/group membership join table (`flicket_groups`).
pub mod user_group;
