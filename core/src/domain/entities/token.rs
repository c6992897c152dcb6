//! Token pair and JWT claim types issued at login.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::{User, UserRole};

/// Access token lifetime reported to clients, in seconds
pub const ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 86_400;

/// Marker distinguishing access tokens from refresh tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Compact user representation embedded in the login response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: user.role,
        }
    }
}

/// Access + refresh token pair returned by the login endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,

    /// Summary of the authenticated user
    pub user: UserSummary,
}

impl TokenPair {
    /// Bundle freshly issued tokens with the user summary
    pub fn new(access_token: String, refresh_token: String, user: UserSummary) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_in: ACCESS_TOKEN_EXPIRY_SECONDS,
            user,
        }
    }
}

/// JWT claims carried by both token types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id as a string
    pub sub: String,

    /// User email
    pub email: String,

    /// Role at issue time
    pub role: UserRole,

    /// Whether this is an access or refresh token
    pub token_type: TokenType,

    /// Issuer
    pub iss: String,

    /// Issued-at, seconds since epoch
    pub iat: i64,

    /// Expiry, seconds since epoch
    pub exp: i64,

    /// Unique token id
    pub jti: String,
}

impl Claims {
    /// Build claims for a user and token type with the given lifetime
    pub fn new(user: &User, token_type: TokenType, issuer: &str, expiry_seconds: i64) -> Self {
        let now = Utc::now();
        let expires_at = now + Duration::seconds(expiry_seconds);

        Self {
            sub: user.id.to_string(),
            email: user.email.clone(),
            role: user.role,
            token_type,
            iss: issuer.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Parse the subject claim back into a user id
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    /// Whether this token is a refresh token
    pub fn is_refresh(&self) -> bool {
        self.token_type == TokenType::Refresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_user() -> User {
        User::new(
            "admin@worklog.io".to_string(),
            "hash".to_string(),
            "Ada".to_string(),
            "Admin".to_string(),
            UserRole::Admin,
            None,
            NaiveDate::from_ymd_opt(2022, 1, 3).unwrap(),
        )
    }

    #[test]
    fn test_token_pair_expiry_constant() {
        let user = sample_user();
        let pair = TokenPair::new(
            "access".to_string(),
            "refresh".to_string(),
            UserSummary::from(&user),
        );
        assert_eq!(pair.expires_in, 86_400);
        assert_eq!(pair.user.role, UserRole::Admin);
    }

    #[test]
    fn test_claims_subject_round_trip() {
        let user = sample_user();
        let claims = Claims::new(&user, TokenType::Access, "worklog", 900);
        assert_eq!(claims.user_id().unwrap(), user.id);
        assert!(!claims.is_refresh());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_user_summary_from_user() {
        let user = sample_user();
        let summary = UserSummary::from(&user);
        assert_eq!(summary.id, user.id);
        assert_eq!(summary.email, user.email);
        assert_eq!(summary.first_name, "Ada");
    }
}
