//! Authentication service for access token verification.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, errors::ErrorKind};
use serde_json::json;

use crate::domain::claims::Claims;
use crate::error::AppError;

/// Verifies HS256 access tokens signed with the configured JWT secret.
///
/// Issuing tokens is the job of the login flow; this service only checks the
/// signature and expiry and hands back the claims.
pub struct AuthService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `jwt_secret` - HMAC key; must match the value tokens were signed with
    pub fn new(jwt_secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Verifies a raw bearer token and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the signature is invalid, the token
    /// is malformed or it has expired.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let reason = match e.kind() {
                    ErrorKind::ExpiredSignature => "Token has expired",
                    ErrorKind::InvalidSignature => "Signature verification failed",
                    _ => "Invalid token",
                };
                tracing::debug!(error = %e, "Access token rejected");
                AppError::unauthorized("Unauthorized", json!({ "reason": reason }))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn test_secret() -> &'static str {
        "test-jwt-secret"
    }

    fn now() -> u64 {
        chrono::Utc::now().timestamp() as u64
    }

    fn sign(secret: &str, roles: &[&str], exp: u64) -> String {
        let claims = Claims {
            sub: "jdoe".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            exp,
            iat: Some(now()),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_verify_success() {
        let service = AuthService::new(test_secret());
        let token = sign(test_secret(), &["admin"], now() + 3600);

        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, "jdoe");
        assert!(claims.is_admin());
    }

    #[test]
    fn test_verify_wrong_secret() {
        let service = AuthService::new(test_secret());
        let token = sign("another-secret", &["admin"], now() + 3600);

        let result = service.verify(&token);

        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[test]
    fn test_verify_expired() {
        let service = AuthService::new(test_secret());
        let token = sign(test_secret(), &["user"], now() - 60);

        match service.verify(&token) {
            Err(AppError::Unauthorized { details, .. }) => {
                assert_eq!(details["reason"], "Token has expired");
            }
            other => panic!("expected unauthorized, got {:?}", other),
        }
    }

    #[test]
    fn test_verify_garbage() {
        let service = AuthService::new(test_secret());
        assert!(service.verify("not-a-jwt").is_err());
        assert!(service.verify("").is_err());
    }
}
