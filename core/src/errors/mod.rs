//! Domain-specific error types and error handling.

use thiserror::Error;

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account is inactive")]
    AccountInactive,

    #[error("Insufficient permissions")]
    InsufficientPermissions,
}

/// Token validation and generation errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Token generation failed: {message}")]
    GenerationFailed { message: String },
}

/// Input validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Email already exists: {email}")]
    DuplicateEmail { email: String },

    #[error("Invalid value for {field}: {message}")]
    InvalidField { field: String, message: String },
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Feature not implemented: {feature}")]
    NotImplemented { feature: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Stable error code used in API error envelopes
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::NotFound { .. } => "NOT_FOUND",
            DomainError::NotImplemented { .. } => "NOT_IMPLEMENTED",
            DomainError::Database { .. } => "DATABASE_ERROR",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
            DomainError::Auth(AuthError::InvalidCredentials) => "INVALID_CREDENTIALS",
            DomainError::Auth(AuthError::AccountInactive) => "ACCOUNT_INACTIVE",
            DomainError::Auth(AuthError::InsufficientPermissions) => "INSUFFICIENT_PERMISSIONS",
            DomainError::Token(TokenError::TokenExpired) => "TOKEN_EXPIRED",
            DomainError::Token(TokenError::InvalidToken) => "INVALID_TOKEN",
            DomainError::Token(TokenError::InvalidRefreshToken) => "INVALID_REFRESH_TOKEN",
            DomainError::Token(TokenError::GenerationFailed { .. }) => "TOKEN_GENERATION_FAILED",
            DomainError::Validation(ValidationError::DuplicateEmail { .. }) => "DUPLICATE_EMAIL",
            DomainError::Validation(ValidationError::InvalidField { .. }) => "INVALID_FIELD",
        }
    }
}
