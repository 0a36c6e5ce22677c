//! Redaction of secrets in debug output

use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::value::RawValue;

/// Replacement for every sensitive value
pub const REDACTED: &str = "***REDACTED***";

const SENSITIVE_KEYS: &[&str] = &[
    "password",
    "pass",
    "pwd",
    "access_token",
    "refresh_token",
    "token",
    "authorization",
];

/// Case-insensitive match against the sensitive key set
pub fn is_sensitive_key(key: &str) -> bool {
    SENSITIVE_KEYS
        .iter()
        .any(|sensitive| key.eq_ignore_ascii_case(sensitive))
}

/// Mask sensitive values in a JSON document.
///
/// Keys keep their document order and every other leaf is copied verbatim,
/// so numbers like `1e2` are not rewritten. Non-JSON input is returned
/// unchanged.
pub fn redact_sensitive_json(raw: &str) -> String {
    match serde_json::from_str::<&RawValue>(raw) {
        Ok(value) => redact_raw(value),
        Err(_) => raw.to_string(),
    }
}

fn redact_raw(value: &RawValue) -> String {
    let text = value.get();
    match text.trim_start().as_bytes().first() {
        Some(b'{') => match serde_json::from_str::<Members>(text) {
            Ok(Members(members)) => {
                let body: Vec<String> = members
                    .into_iter()
                    .map(|(key, entry)| {
                        let entry = if is_sensitive_key(&key) {
                            format!("\"{}\"", REDACTED)
                        } else {
                            redact_raw(entry)
                        };
                        format!("{}:{}", quote(&key), entry)
                    })
                    .collect();
                format!("{{{}}}", body.join(","))
            }
            Err(_) => text.to_string(),
        },
        Some(b'[') => match serde_json::from_str::<Vec<&RawValue>>(text) {
            Ok(items) => {
                let body: Vec<String> = items.into_iter().map(redact_raw).collect();
                format!("[{}]", body.join(","))
            }
            Err(_) => text.to_string(),
        },
        _ => text.to_string(),
    }
}

fn quote(key: &str) -> String {
    serde_json::to_string(key).unwrap_or_else(|_| format!("\"{}\"", key))
}

/// Object members in document order, values left unparsed
struct Members<'a>(Vec<(String, &'a RawValue)>);

impl<'de> Deserialize<'de> for Members<'de> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MembersVisitor;

        impl<'de> Visitor<'de> for MembersVisitor {
            type Value = Members<'de>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut members = Vec::new();
                while let Some(entry) = map.next_entry::<String, &'de RawValue>()? {
                    members.push(entry);
                }
                Ok(Members(members))
            }
        }

        deserializer.deserialize_map(MembersVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn redact(value: serde_json::Value) -> serde_json::Value {
        serde_json::from_str(&redact_sensitive_json(&value.to_string())).unwrap()
    }

    #[test]
    fn test_top_level_password_redacted() {
        let out = redact(json!({"email": "a@b.c", "password": "hunter2"}));
        assert_eq!(out, json!({"email": "a@b.c", "password": REDACTED}));
    }

    #[test]
    fn test_nested_and_array_tokens_redacted() {
        let out = redact(json!({
            "session": {"access_token": "abc", "expires": 3600},
            "items": [{"token": "t1", "name": "one"}, {"Refresh_Token": "r", "id": 2}]
        }));
        assert_eq!(
            out,
            json!({
                "session": {"access_token": REDACTED, "expires": 3600},
                "items": [{"token": REDACTED, "name": "one"}, {"Refresh_Token": REDACTED, "id": 2}]
            })
        );
    }

    #[test]
    fn test_sensitive_key_with_object_value_is_replaced_whole() {
        let out = redact(json!({"authorization": {"scheme": "Bearer", "value": "x"}}));
        assert_eq!(out, json!({"authorization": REDACTED}));
    }

    #[test]
    fn test_non_sensitive_values_preserved() {
        let input = json!({
            "name": "tenant-a",
            "quota": {"cpu": 4, "memory_gb": 8.5},
            "tags": ["x", null, true]
        });
        assert_eq!(redact(input.clone()), input);
    }

    #[test]
    fn test_key_order_and_number_text_preserved() {
        let raw = r#"{"name":"a","amount":1e2,"big":18446744073709551616,"password":"x"}"#;
        assert_eq!(
            redact_sensitive_json(raw),
            r#"{"name":"a","amount":1e2,"big":18446744073709551616,"password":"***REDACTED***"}"#
        );
    }

    #[test]
    fn test_nested_leaves_copied_verbatim() {
        let raw = r#"{"z": [1.50, {"token": "t", "n": -0.0}], "a": "caf\u00e9"}"#;
        assert_eq!(
            redact_sensitive_json(raw),
            r#"{"z":[1.50,{"token":"***REDACTED***","n":-0.0}],"a":"caf\u00e9"}"#
        );
    }

    #[test]
    fn test_invalid_json_unchanged() {
        assert_eq!(redact_sensitive_json("password=hunter2"), "password=hunter2");
        assert_eq!(redact_sensitive_json(""), "");
    }

    #[test]
    fn test_is_sensitive_key() {
        for key in [
            "password",
            "PASSWORD",
            "Pass",
            "pwd",
            "access_token",
            "Token",
            "Authorization",
        ] {
            assert!(is_sensitive_key(key), "{} should be sensitive", key);
        }
        for key in ["email", "tokens", "passcode", "user", "refresh"] {
            assert!(!is_sensitive_key(key), "{} should not be sensitive", key);
        }
    }
}
