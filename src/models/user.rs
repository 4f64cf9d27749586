//! User record type.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single user as listed by the Reqres API.
///
/// Every field is optional: live payloads may omit keys, and the fallback
/// dataset carries no `id` or `avatar`. Missing keys decode to `None` and
/// are written as empty CSV cells. A field of an unexpected JSON type
/// is coerced or dropped instead of failing the whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub last_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub avatar: Option<String>,
}

/// Strings pass through, numbers and booleans are stringified,
/// anything else (null, arrays, objects) becomes `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// Integers pass through, numeric strings are parsed, anything else is `None`.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

impl UserRecord {
    /// Build a record with names and email only (no id, no avatar).
    pub fn named(first_name: &str, last_name: &str, email: &str) -> Self {
        Self {
            id: None,
            email: Some(email.to_string()),
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            avatar: None,
        }
    }

    /// The `[first, last, email]` cells of a report row, empty where absent.
    pub fn csv_cells(&self) -> [&str; 3] {
        [
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or(""),
            self.email.as_deref().unwrap_or(""),
        ]
    }
}
