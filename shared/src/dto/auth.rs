use serde::{Deserialize, Serialize};

/// Login credentials, sent form-encoded to `POST /api/login`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginForm {
    /// Email address or phone number
    pub username: String,
    pub password: String,
}

/// Account role chosen at registration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Buyer,
    Seller,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Buyer => "Buyer",
            Role::Seller => "Seller",
        }
    }
}

/// Registration request (`POST /api/register`, JSON body)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub role: Role,
    pub full_name: String,
}

/// Access token issued by `POST /api/login`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

/// One entry of a request-validation error list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationIssue {
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<serde_json::Value>,
}

/// The `detail` field of an API error body.
///
/// The API answers either with a plain message (`{"detail": "Incorrect password"}`)
/// or, for rejected request bodies, with a list of validation issues.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Issues(Vec<ValidationIssue>),
    Other(serde_json::Value),
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
}

impl ErrorResponse {
    /// Human-readable message carried by the body, if there is one.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            ErrorDetail::Message(msg) if !msg.trim().is_empty() => Some(msg.clone()),
            ErrorDetail::Issues(issues) if !issues.is_empty() => Some(
                issues
                    .iter()
                    .map(|issue| issue.msg.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            _ => None,
        }
    }
}
