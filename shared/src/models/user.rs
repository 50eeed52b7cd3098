//! User Model

use serde::{Deserialize, Serialize};

/// User role
///
/// Anything that is not literally `"admin"` reads back as [`Role::Guest`],
/// so a malformed role can never grant privileges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    Guest,
}

impl Role {
    /// Parse a stored role string; unknown values fall back to guest
    pub fn parse(value: &str) -> Self {
        match value {
            "admin" => Role::Admin,
            _ => Role::Guest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User record (keyed by email)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Register user payload
///
/// Role is never taken from the client; new users start as guests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        let admin: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(admin, Role::Admin);
        let guest: Role = serde_json::from_str("\"guest\"").unwrap();
        assert_eq!(guest, Role::Guest);
        let unknown: Role = serde_json::from_str("\"superuser\"").unwrap();
        assert_eq!(unknown, Role::Guest);
    }

    #[test]
    fn test_role_parse_stored_value() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("Admin"), Role::Guest);
        assert_eq!(Role::parse(""), Role::Guest);
    }

    #[test]
    fn test_user_without_role_is_guest() {
        let user: User =
            serde_json::from_str(r#"{"id":"u1","email":"a@b.c","name":"Ann"}"#).unwrap();
        assert_eq!(user.role, Role::Guest);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_register_ignores_role() {
        let body: UserCreate =
            serde_json::from_str(r#"{"email":"a@b.c","role":"admin"}"#).unwrap();
        assert_eq!(body.email, "a@b.c");
        let stored = serde_json::to_value(&body).unwrap();
        assert!(stored.get("role").is_none());
    }
}
