//! Request DTOs for the cache service API

use serde::Deserialize;
use serde_json::Value;

use crate::cache::{Ttl, MAX_KEY_LENGTH};

/// Request body for the SET operation (PUT /set)
///
/// # Fields
/// - `key`: The cache key to store the value under
/// - `value`: Any JSON value
/// - `ttl`: Optional TTL in seconds; absent uses the default, `<= 0` never expires
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    pub key: String,
    pub value: Value,
    #[serde(default)]
    pub ttl: Option<f64>,
}

impl SetRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        if self.key.len() > MAX_KEY_LENGTH {
            return Some(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            ));
        }
        if self.ttl.is_some_and(f64::is_nan) {
            return Some("TTL must be a number of seconds".to_string());
        }
        None
    }

    /// Expiration policy requested by this body.
    pub fn ttl(&self) -> Ttl {
        self.ttl.map_or(Ttl::Default, Ttl::from_secs_f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_set_request_deserialize() {
        let json = r#"{"key": "oauth_state_1", "value": {"state": "1"}}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.key, "oauth_state_1");
        assert_eq!(req.value["state"], "1");
        assert!(req.ttl.is_none());
        assert_eq!(req.ttl(), Ttl::Default);
    }

    #[test]
    fn test_set_request_with_fractional_ttl() {
        let json = r#"{"key": "test", "value": "hello", "ttl": 0.5}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.ttl(), Ttl::After(Duration::from_millis(500)));
    }

    #[test]
    fn test_set_request_zero_ttl_never_expires() {
        let json = r#"{"key": "test", "value": 1, "ttl": 0}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.ttl(), Ttl::Never);
    }

    #[test]
    fn test_validate_empty_key() {
        let req = SetRequest {
            key: "".to_string(),
            value: Value::Null,
            ttl: None,
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_key_too_long() {
        let req = SetRequest {
            key: "x".repeat(MAX_KEY_LENGTH + 1),
            value: Value::Null,
            ttl: None,
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_valid_request() {
        let req = SetRequest {
            key: "valid_key".to_string(),
            value: Value::from("test"),
            ttl: Some(60.0),
        };
        assert!(req.validate().is_none());
    }
}
