//! HS256 token issuing and validation

use crate::auth::models::AdminClaims;
use chrono::{DateTime, Duration, Utc};
use gallery_core::constants::TOKEN_EXPIRY_HOURS;
use gallery_core::AppError;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// Signs and verifies admin tokens with a shared secret.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry: Duration,
}

impl JwtService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked in `validate_token_at` so the boundary instant is rejected.
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expiry: Duration::hours(TOKEN_EXPIRY_HOURS),
        }
    }

    pub fn issue_token(&self, username: &str) -> Result<String, AppError> {
        self.issue_token_at(username, Utc::now())
    }

    pub fn issue_token_at(&self, username: &str, now: DateTime<Utc>) -> Result<String, AppError> {
        let claims = AdminClaims {
            username: username.to_string(),
            iat: now.timestamp(),
            exp: (now + self.expiry).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to generate token: {}", e)))
    }

    pub fn validate_token(&self, token: &str) -> Result<AdminClaims, AppError> {
        self.validate_token_at(token, Utc::now())
    }

    /// Verify the signature and reject tokens with `now >= exp`.
    pub fn validate_token_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<AdminClaims, AppError> {
        let data = decode::<AdminClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;

        if now.timestamp() >= data.claims.exp {
            return Err(AppError::Unauthorized("Token expired".to_string()));
        }

        Ok(data.claims)
    }
}
