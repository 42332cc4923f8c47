//! Field-size limits of the identity tables.
//!
//! The maximum lengths size the columns created by the migration. Saving
//! through the model does not check them; callers accepting user input run
//! [`crate::NewUser::validate`] or [`check_group_name`] first, otherwise
//! oversized values only fail when the database rejects them.

use crate::error::{IdentityError, Result};

pub const USERNAME_MIN: u32 = 4;
pub const USERNAME_MAX: u32 = 24;
pub const NAME_MIN: u32 = 4;
pub const NAME_MAX: u32 = 60;
pub const EMAIL_MIN: u32 = 6;
pub const EMAIL_MAX: u32 = 60;
pub const PASSWORD_MIN: u32 = 6;
/// Bounds the plaintext too; bcrypt digests are 60 bytes.
pub const PASSWORD_MAX: u32 = 60;
pub const GROUP_MIN: u32 = 3;
pub const GROUP_MAX: u32 = 64;
pub const JOB_TITLE_MAX: u32 = 64;
pub const AVATAR_MAX: u32 = 64;
/// Base64 of the 24 random token bytes.
pub const TOKEN_MAX: u32 = 32;

/// Fails with [`IdentityError::FieldLength`] unless `value` has between
/// `min` and `max` characters.
pub fn check_length(field: &'static str, value: &str, min: u32, max: u32) -> Result<()> {
    let len = value.chars().count();
    if len < min as usize || len > max as usize {
        return Err(IdentityError::FieldLength { field, min, max });
    }
    Ok(())
}

pub fn check_group_name(group_name: &str) -> Result<()> {
    check_length("group_name", group_name, GROUP_MIN, GROUP_MAX)
}
