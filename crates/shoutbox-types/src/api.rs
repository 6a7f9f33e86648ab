use serde::{Deserialize, Serialize};

// -- Session --

/// Claims embedded in the signed session token. Canonical definition lives
/// here so the API layer and its tests agree on the shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Authenticated username.
    pub sub: String,
    /// Expiry as a Unix timestamp in seconds.
    pub exp: usize,
}

// -- Auth --

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

// -- Messages --

/// Form body for `POST /send`. Both fields are optional at the HTTP layer;
/// entries with a missing or empty field are accepted but never stored.
#[derive(Debug, Deserialize)]
pub struct SendMessageForm {
    pub message: Option<String>,
    pub timestamp: Option<String>,
}

/// One board message as served by `GET /retrieve`. Exactly the two
/// client-visible fields, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "message")]
    pub text: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_serializes_with_wire_field_names() {
        let message = Message {
            text: "hello".into(),
            timestamp: "2024-01-01T00:00:00Z".into(),
        };

        let json = serde_json::to_string(&message).unwrap();
        assert_eq!(json, r#"{"message":"hello","timestamp":"2024-01-01T00:00:00Z"}"#);
    }

    #[test]
    fn send_form_tolerates_missing_fields() {
        let form: SendMessageForm = serde_json::from_str("{}").unwrap();
        assert!(form.message.is_none());
        assert!(form.timestamp.is_none());
    }
}
