//! Login request and reply.

use serde::{Deserialize, Serialize};

use super::deserialize_id;

/// Body of `POST /login`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// The authenticated user as echoed back by the server.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserInfo {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Reply to `POST /login`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_login_decodes() {
        let json = r#"{"success": true, "user": {"id": 4, "username": "jane", "is_admin": false}}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        let user = response.user.unwrap();
        assert_eq!(user.id, "4");
        assert_eq!(user.username, "jane");
        assert!(!user.is_admin);
    }

    #[test]
    fn test_failed_login_decodes() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"success": false, "message": "Invalid credentials"}"#)
                .unwrap();
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("Invalid credentials"));
        assert!(response.user.is_none());
    }

    #[test]
    fn test_request_shape() {
        let request = LoginRequest {
            username: "jane".to_string(),
            password: "secret".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"username": "jane", "password": "secret"})
        );
    }
}
