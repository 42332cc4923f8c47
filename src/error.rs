use thiserror::Error;

/// Errors raised by the identity model.
///
/// Lookups that find nothing are not errors: they come back as `None` or
/// `false`. What remains are failures of the collaborators the model leans
/// on (database, bcrypt, session store) and misconfiguration.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Database failure, including unique-constraint violations on save.
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),

    /// The stored password digest could not be used by bcrypt.
    #[error("password hashing failed: {0}")]
    Password(#[from] bcrypt::BcryptError),

    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// No route is registered under this endpoint name.
    #[error("unknown endpoint: {0}")]
    UnknownEndpoint(String),

    #[error("endpoint {endpoint} requires parameter {param}")]
    MissingRouteParam { endpoint: String, param: String },

    #[error("invalid configuration value for {key}: {message}")]
    Config { key: String, message: String },

    /// The requested token lifetime is not positive, or its expiry falls
    /// outside the representable date range.
    #[error("token lifetime {0} is out of range")]
    TokenLifetime(chrono::Duration),

    /// Registration data outside the field-size limits.
    #[error("{field} must be between {min} and {max} characters")]
    FieldLength {
        field: &'static str,
        min: u32,
        max: u32,
    },
}

pub type Result<T> = std::result::Result<T, IdentityError>;
