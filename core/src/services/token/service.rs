//! JWT token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, TokenType};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service signing and validating HS256 JWTs
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issue an access token for a user
    pub fn generate_access_token(&self, user: &User) -> Result<String, DomainError> {
        let claims = Claims::new(
            user,
            TokenType::Access,
            &self.config.issuer,
            self.config.access_token_expiry,
        );
        self.encode(&claims)
    }

    /// Issue a refresh token for a user
    pub fn generate_refresh_token(&self, user: &User) -> Result<String, DomainError> {
        let claims = Claims::new(
            user,
            TokenType::Refresh,
            &self.config.issuer,
            self.config.refresh_token_expiry,
        );
        self.encode(&claims)
    }

    /// Validate any token and return its claims
    pub fn validate_token(&self, token: &str) -> Result<Claims, DomainError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                _ => TokenError::InvalidToken,
            }
        })?;
        Ok(data.claims)
    }

    /// Validate a token that must be an access token
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        let claims = self.validate_token(token)?;
        if claims.is_refresh() {
            return Err(TokenError::InvalidToken.into());
        }
        Ok(claims)
    }

    /// Validate a token that must be a refresh token
    pub fn validate_refresh_token(&self, token: &str) -> Result<Claims, DomainError> {
        let claims = self.validate_token(token)?;
        if !claims.is_refresh() {
            return Err(TokenError::InvalidRefreshToken.into());
        }
        Ok(claims)
    }

    fn encode(&self, claims: &Claims) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            TokenError::GenerationFailed {
                message: e.to_string(),
            }
            .into()
        })
    }
}
