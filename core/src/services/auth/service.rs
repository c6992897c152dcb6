//! Login and token refresh flows

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::token::{TokenPair, UserSummary};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

/// Email/password credentials presented at login
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Authentication service issuing token pairs for verified credentials
pub struct AuthService<U: UserRepository> {
    user_repository: Arc<U>,
    token_service: Arc<TokenService>,
}

impl<U: UserRepository> AuthService<U> {
    /// Create a new authentication service
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Verify credentials and issue an access/refresh token pair
    ///
    /// Lookup failure and password mismatch produce the same
    /// `InvalidCredentials` error so the response never reveals whether
    /// the email is registered.
    pub async fn login(&self, credentials: LoginCredentials) -> DomainResult<TokenPair> {
        let user = self
            .user_repository
            .find_by_email(&credentials.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.is_active() {
            warn!(user_id = %user.id, "login attempt on inactive account");
            return Err(AuthError::AccountInactive.into());
        }

        let password_matches = bcrypt::verify(&credentials.password, &user.password_hash)
            .map_err(|e| DomainError::Internal {
                message: format!("Password verification failed: {}", e),
            })?;
        if !password_matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        let access_token = self.token_service.generate_access_token(&user)?;
        let refresh_token = self.token_service.generate_refresh_token(&user)?;

        info!(user_id = %user.id, "user logged in");
        Ok(TokenPair::new(
            access_token,
            refresh_token,
            UserSummary::from(&user),
        ))
    }

    /// Exchange a refresh token for a new token pair
    ///
    /// The presented token is validated (signature, expiry, token type),
    /// but the rotation itself is not built yet: re-authenticating from a
    /// stored token requires reloading the principal, which this service
    /// does not do. The call therefore always ends in an explicit
    /// not-implemented error rather than silently succeeding.
    pub async fn refresh_token(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        self.token_service.validate_refresh_token(refresh_token)?;

        Err(DomainError::NotImplemented {
            feature: "refresh token rotation".to_string(),
        })
    }
}
