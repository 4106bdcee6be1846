//! # Access Token Claims
//!
//! Reads the identity out of a JWT access token. The signature is not verified and
//! `exp` is not enforced: the server is the authority, and an expired token simply
//! makes the next API call fail.

use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

use crate::core::error::{AppError, Result};

/// Identity claims carried in the token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClaims {
    /// Subject: the username (email or phone) the token was issued to
    pub sub: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl UserClaims {
    /// Name shown in the header: the full name when the token carries one.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.sub)
    }
}

/// Decode the payload segment of `token`.
pub fn decode_claims(token: &str) -> Result<UserClaims> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_), None) if !payload.is_empty() => payload,
        _ => return Err(AppError::Session("Malformed access token".to_string())),
    };

    // Some issuers keep the padding; the URL-safe engine rejects it.
    let bytes = general_purpose::URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| AppError::Session(format!("Malformed access token: {}", e)))?;

    serde_json::from_slice::<UserClaims>(&bytes)
        .map_err(|e| AppError::Session(format!("Unreadable token claims: {}", e)))
}

/// Build an unsigned token carrying `claims`, for tests and stub servers.
#[cfg(test)]
pub(crate) fn encode_unsigned(claims: &serde_json::Value) -> String {
    let header = general_purpose::URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = general_purpose::URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{}.{}.signature", header, payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_claims() {
        let token = encode_unsigned(&json!({
            "sub": "ravi@example.in",
            "full_name": "Ravi Kumar",
            "role": "buyer",
            "exp": 1_900_000_000
        }));

        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "ravi@example.in");
        assert_eq!(claims.role.as_deref(), Some("buyer"));
        assert_eq!(claims.exp, Some(1_900_000_000));
        assert_eq!(claims.display_name(), "Ravi Kumar");
    }

    #[test]
    fn test_display_name_falls_back_to_subject() {
        let claims = decode_claims(&encode_unsigned(&json!({"sub": "9876543210"}))).unwrap();
        assert_eq!(claims.display_name(), "9876543210");
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        for token in ["", "opaque", "a.b", "a..c", "a.!!!.c", "a.b.c.d"] {
            assert!(
                matches!(decode_claims(token), Err(AppError::Session(_))),
                "{token:?} should be rejected"
            );
        }

        let no_subject = encode_unsigned(&json!({"role": "buyer"}));
        assert!(decode_claims(&no_subject).is_err());
    }
}
