//! Access token claims.

use serde::{Deserialize, Serialize};

/// Role granted to administrators.
pub const ROLE_ADMIN: &str = "admin";

/// Role granted to regular users resetting their own password.
pub const ROLE_USER: &str = "user";

/// Claims carried by a verified access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Username of the account the token was issued to.
    pub sub: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub exp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
}

impl Claims {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }

    pub fn is_user(&self) -> bool {
        self.has_role(ROLE_USER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(roles: &[&str]) -> Claims {
        Claims {
            sub: "jdoe".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            exp: 0,
            iat: None,
        }
    }

    #[test]
    fn test_roles() {
        assert!(claims(&["admin"]).is_admin());
        assert!(!claims(&["admin"]).is_user());
        assert!(claims(&["user"]).is_user());
        assert!(!claims(&[]).is_admin());
        assert!(claims(&["user", "admin"]).has_role("admin"));
    }

    #[test]
    fn test_missing_roles_deserialize_empty() {
        let c: Claims = serde_json::from_str(r#"{"sub": "jdoe", "exp": 1}"#).unwrap();
        assert!(c.roles.is_empty());
        assert!(c.iat.is_none());
    }
}
