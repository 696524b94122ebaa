//! Token values and their text form inside style keys.
//!
//! The part of a key after `__` is produced by [`TokenValue::to_key_text`] and
//! read back by [`TokenValue::parse_key_text`]. The encoding is deterministic:
//!
//! - numbers print without a fraction when integral (`16`, `-4`) and with the
//!   shortest round-trip form otherwise (`0.5`); `-0` prints as `0`
//! - booleans print `true` / `false`
//! - strings print raw at the top level and JSON-quoted inside arrays
//! - arrays print as compact JSON: `[10,15,5,[0,0,0,0.5]]`
//!
//! Order and elements of arrays are preserved exactly, so two equal values
//! always produce the same key text.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StyleKeyError};

/// Delimiter between the head of a key and its value payload.
pub const VALUE_DELIMITER: &str = "__";

/// A primitive or array token value, as authored in a decoration subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<TokenValue>),
}

impl From<bool> for TokenValue {
    fn from(b: bool) -> Self {
        TokenValue::Bool(b)
    }
}

impl From<f64> for TokenValue {
    fn from(n: f64) -> Self {
        TokenValue::Number(n)
    }
}

impl From<i64> for TokenValue {
    fn from(n: i64) -> Self {
        TokenValue::Number(n as f64)
    }
}

impl From<&str> for TokenValue {
    fn from(s: &str) -> Self {
        TokenValue::Text(s.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(s: String) -> Self {
        TokenValue::Text(s)
    }
}

impl<T: Into<TokenValue>> From<Vec<T>> for TokenValue {
    fn from(items: Vec<T>) -> Self {
        TokenValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl TokenValue {
    /// Renders the value as it appears after `__` in a style key.
    ///
    /// `property` is only used to build error messages. Fails when the text
    /// would not read back as the same value: non-finite numbers, empty
    /// strings, strings containing `__`, or raw strings starting with `[`.
    pub fn to_key_text(&self, property: &str) -> Result<String> {
        let mut out = String::new();
        match self {
            TokenValue::Text(s) => {
                if s.is_empty() || s.starts_with('[') {
                    return Err(StyleKeyError::unsupported_value(property, s, property));
                }
                out.push_str(s);
            }
            other => other.write_nested(&mut out, property)?,
        }
        if out.contains(VALUE_DELIMITER) {
            return Err(StyleKeyError::unsupported_value(property, &out, property));
        }
        Ok(out)
    }

    fn write_nested(&self, out: &mut String, property: &str) -> Result<()> {
        match self {
            TokenValue::Bool(b) => {
                let _ = write!(out, "{}", b);
            }
            TokenValue::Number(n) => {
                let text = format_number(*n).ok_or_else(|| {
                    StyleKeyError::unsupported_value(property, &n.to_string(), property)
                })?;
                out.push_str(&text);
            }
            TokenValue::Text(s) => {
                let quoted = serde_json::to_string(s)
                    .map_err(|_| StyleKeyError::unsupported_value(property, s, property))?;
                out.push_str(&quoted);
            }
            TokenValue::List(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    item.write_nested(out, property)?;
                }
                out.push(']');
            }
        }
        Ok(())
    }

    /// Reads a key value segment back into a token value.
    ///
    /// Text starting with `[` is parsed as a JSON array; `true`/`false` become
    /// booleans, numeric text becomes a number and anything else is kept as
    /// text. Returns `None` for malformed arrays or arrays holding objects or
    /// nulls.
    pub fn parse_key_text(text: &str) -> Option<TokenValue> {
        if text.starts_with('[') {
            let json: serde_json::Value = serde_json::from_str(text).ok()?;
            return Self::from_json(&json);
        }
        match text {
            "true" => Some(TokenValue::Bool(true)),
            "false" => Some(TokenValue::Bool(false)),
            _ => match parse_number(text) {
                Some(n) => Some(TokenValue::Number(n)),
                None => Some(TokenValue::Text(text.to_string())),
            },
        }
    }

    fn from_json(json: &serde_json::Value) -> Option<TokenValue> {
        match json {
            serde_json::Value::Bool(b) => Some(TokenValue::Bool(*b)),
            serde_json::Value::Number(n) => n.as_f64().map(TokenValue::Number),
            serde_json::Value::String(s) => Some(TokenValue::Text(s.clone())),
            serde_json::Value::Array(items) => items
                .iter()
                .map(Self::from_json)
                .collect::<Option<Vec<_>>>()
                .map(TokenValue::List),
            serde_json::Value::Null | serde_json::Value::Object(_) => None,
        }
    }

    /// Returns the number, if this is a number value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            TokenValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the items, if this is a list value.
    pub fn as_list(&self) -> Option<&[TokenValue]> {
        match self {
            TokenValue::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Formats a number the way it appears in keys and CSS declarations.
///
/// Returns `None` for NaN and infinities.
pub fn format_number(n: f64) -> Option<String> {
    if !n.is_finite() {
        return None;
    }
    if n == 0.0 {
        return Some("0".to_string());
    }
    if n.fract() == 0.0 && n.abs() < 1e15 {
        return Some(format!("{}", n as i64));
    }
    Some(format!("{}", n))
}

/// Parses a finite number written by [`format_number`].
///
/// Rejects text that `f64::from_str` would accept but keys never contain,
/// such as `inf`, `NaN`, a leading `+` or surrounding whitespace.
pub fn parse_number(text: &str) -> Option<f64> {
    let body = text.strip_prefix('-').unwrap_or(text);
    let well_formed = !body.is_empty()
        && body.chars().all(|c| c.is_ascii_digit() || c == '.')
        && body.chars().next().is_some_and(|c| c.is_ascii_digit())
        && body.matches('.').count() <= 1;
    if !well_formed {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Encodes a list of numbers as a compact array, e.g. `[0,100,50,1]`.
pub(crate) fn number_list_text(values: &[f64], property: &str) -> Result<String> {
    TokenValue::List(values.iter().copied().map(TokenValue::Number).collect())
        .to_key_text(property)
}
