//! Login exchange with the library backend (`POST /api/login`)

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AppError, AppResult};

/// Login request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// Backend sends the id quoted; older builds sent a bare number
    #[serde(rename = "userId", deserialize_with = "deserialize_user_id")]
    pub user_id: String,
    pub username: String,
    pub role: String,
    #[serde(default)]
    pub jwt: Option<String>,
}

/// Error body returned with non-2xx login/signup responses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiError {
    pub fn message(&self) -> &str {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or("Login failed")
    }
}

impl LoginResponse {
    /// Parse a raw `/api/login` response body.
    ///
    /// Bodies flagged `"success": false` are turned into an authentication
    /// error carrying the backend's message.
    pub fn from_body(body: &str) -> AppResult<Self> {
        let value: serde_json::Value = serde_json::from_str(body)?;

        if value.get("success").and_then(|v| v.as_bool()) == Some(false) {
            let api_error: ApiError = serde_json::from_value(value)?;
            return Err(AppError::Authentication(api_error.message().to_string()));
        }

        Ok(serde_json::from_value(value)?)
    }
}

fn default_success() -> bool {
    true
}

fn deserialize_user_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawUserId {
        Text(String),
        Number(i64),
    }

    Ok(match RawUserId::deserialize(deserializer)? {
        RawUserId::Text(s) => s,
        RawUserId::Number(n) => n.to_string(),
    })
}
