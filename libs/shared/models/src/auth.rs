use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Patient,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Patient => "patient",
        }
    }
}

/// Claims carried by the signed session token: subject id, email, role,
/// issued-at and expiry (24 hours after issuance).
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: i64,
    pub email: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// The authenticated caller, as recovered from a validated token. Inserted
/// into request extensions by the auth middleware.
#[derive(Debug, Clone, Serialize)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::to_string(&Role::Patient).unwrap(),
            "\"patient\""
        );
    }
}
