//! Decoration keys: `property__value`, validated against allowed values.

use crate::css::CssRule;
use crate::error::{Result, StyleKeyError};
use crate::value::{format_number, parse_number, TokenValue, VALUE_DELIMITER};
use crate::vocab::{DecorationProperty, DecorationRule, StyleProperty};

use super::grammar::{canonical_value, property_error, split_key};

pub(crate) fn decode(key: &str) -> Result<CssRule> {
    let parts = split_key::<DecorationProperty>(key).map_err(|e| property_error(e, key))?;
    let property = parts.property;

    // Decorations are state-independent.
    if parts.qualifier.is_some() {
        return Err(StyleKeyError::invalid_format(key));
    }

    let text = parts.value;
    let unsupported = || StyleKeyError::unsupported_value(property.name(), text, key);
    if text.contains(VALUE_DELIMITER) || canonical_value(text).is_none() {
        return Err(unsupported());
    }

    let css_value = css_value(property.rule(), text).ok_or_else(unsupported)?;
    Ok(CssRule::new(key, "").declare(property.css_name(), css_value))
}

fn css_value(rule: DecorationRule, text: &str) -> Option<String> {
    match rule {
        DecorationRule::Keyword(allowed) => allowed
            .iter()
            .find(|allowed| **allowed == text)
            .map(|k| k.to_string()),
        DecorationRule::Flag { on, off } => match text {
            "true" => Some(on.to_string()),
            "false" => Some(off.to_string()),
            _ => None,
        },
        DecorationRule::Weight => match text {
            "normal" | "bold" => Some(text.to_string()),
            _ => {
                let weight = parse_number(text)?;
                let valid = (100.0..=900.0).contains(&weight) && weight % 100.0 == 0.0;
                valid.then(|| format_number(weight)).flatten()
            }
        },
        DecorationRule::FontList => {
            let names = text_list(text)?;
            Some(
                names
                    .iter()
                    .map(|name| quote_if_needed(name))
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        }
        DecorationRule::FeatureList => {
            let tags = text_list(text)?;
            Some(
                tags.iter()
                    .map(|tag| quote(tag))
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        }
    }
}

/// A non-empty array of non-empty strings.
fn text_list(text: &str) -> Option<Vec<String>> {
    let items = match TokenValue::parse_key_text(text)? {
        TokenValue::List(items) if !items.is_empty() => items,
        _ => return None,
    };
    items
        .into_iter()
        .map(|item| match item {
            TokenValue::Text(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        })
        .collect()
}

fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    let _ = cssparser::serialize_string(text, &mut out);
    out
}

/// Family names that are plain identifiers stay bare (`sans-serif`,
/// `Inter`, `-apple-system`); anything else is quoted (`"Open Sans"`).
fn quote_if_needed(name: &str) -> String {
    let start = name.strip_prefix('-').unwrap_or(name);
    let bare = start
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    if bare {
        name.to_string()
    } else {
        quote(name)
    }
}
