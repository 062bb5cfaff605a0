use crate::auth::jwt::JwtService;
use crate::auth::models::AdminClaims;
use gallery_core::{AppError, AuthConfig};
use subtle::ConstantTimeEq;

/// Single-admin credential check and token gate.
///
/// Built once from [`AuthConfig`]; unset values are reported per request as
/// `ServerMisconfigured`.
#[derive(Clone)]
pub struct AuthService {
    admin_username: Option<String>,
    admin_password: Option<String>,
    jwt: Option<JwtService>,
}

fn secure_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

impl AuthService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            admin_username: config.admin_username.clone(),
            admin_password: config.admin_password.clone(),
            jwt: config.jwt_secret.as_deref().map(JwtService::new),
        }
    }

    fn jwt(&self) -> Result<&JwtService, AppError> {
        self.jwt
            .as_ref()
            .ok_or_else(|| AppError::ServerMisconfigured("JWT_SECRET not set".to_string()))
    }

    /// Check the submitted credentials and issue an access token.
    pub fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        let (Some(admin_username), Some(admin_password)) =
            (self.admin_username.as_deref(), self.admin_password.as_deref())
        else {
            return Err(AppError::ServerMisconfigured(
                "ADMIN_USERNAME or ADMIN_PASSWORD not set".to_string(),
            ));
        };

        // Evaluate both comparisons before branching.
        let username_ok = secure_compare(username, admin_username);
        let password_ok = secure_compare(password, admin_password);
        if !(username_ok & password_ok) {
            tracing::warn!(username = %username, "Admin login rejected");
            return Err(AppError::InvalidCredentials);
        }

        let token = self.jwt()?.issue_token(username)?;
        tracing::info!(username = %username, "Admin login succeeded");
        Ok(token)
    }

    /// Validate a bearer token and return its claims.
    pub fn validate(&self, token: &str) -> Result<AdminClaims, AppError> {
        self.jwt()?.validate_token(token)
    }
}
