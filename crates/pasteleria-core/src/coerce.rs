//! # Field Coercion
//!
//! Lenient deserializers for entity fields sent by browser forms.
//!
//! ```text
//! ┌───────────────────────┬───────────────────────┬───────────────────────┐
//! │ JSON value            │ text field            │ number field          │
//! ├───────────────────────┼───────────────────────┼───────────────────────┤
//! │ null / absent         │ None                  │ None                  │
//! │ "abc"                 │ Some("abc")           │ error                 │
//! │ "10", " 2.5 "         │ Some("10")            │ Some(10), Some(2.5)   │
//! │ ""                    │ Some("")              │ None                  │
//! │ 123                   │ Some("123")           │ Some(123)             │
//! │ true / false          │ Some("true")          │ Some(1) / Some(0)     │
//! │ [..] / {..}           │ error                 │ error                 │
//! └───────────────────────┴───────────────────────┴───────────────────────┘
//! ```
//!
//! Numbers are kept as [`serde_json::Number`], so `10` is returned as `10`
//! and not `10.0`.

use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Accepts any scalar and keeps its text form.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) => Err(D::Error::invalid_type(Unexpected::Seq, &"a string")),
        Value::Object(_) => Err(D::Error::invalid_type(Unexpected::Map, &"a string")),
    }
}

/// Accepts a number, a numeric string or a boolean.
pub fn number<'de, D>(deserializer: D) -> Result<Option<Number>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(Some(n)),
        Value::Bool(b) => Ok(Some(Number::from(u8::from(b)))),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<Number>()
                .map(Some)
                .map_err(|_| D::Error::invalid_value(Unexpected::Str(&s), &"a number"))
        }
        Value::Array(_) => Err(D::Error::invalid_type(Unexpected::Seq, &"a number")),
        Value::Object(_) => Err(D::Error::invalid_type(Unexpected::Map, &"a number")),
    }
}
