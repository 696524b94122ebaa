//! Style-key tokenizer.
//!
//! Splits a key into property, qualifier and value using the property tables
//! and the size / breakpoint / state vocabularies. Delimiters are only
//! trusted where a vocabulary match confirms them.

use crate::error::{Result, StyleKeyError};
use crate::value::{TokenValue, VALUE_DELIMITER};
use crate::vocab::{
    match_property, Breakpoint, InteractionState, PropertyMatch, SizeToken, StyleProperty,
};

/// Separator between a size token and a breakpoint token, and between a
/// state and the reference marker.
pub(crate) const SEGMENT_DELIMITER: &str = "::";

/// Marker for reference-indirection colors.
pub(crate) const REFERENCE_MARKER: &str = "ref";

/// A key split at its outer delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KeyParts<'k, P> {
    pub property: P,
    /// Text between `--` and `__`, if the key is qualified.
    pub qualifier: Option<&'k str>,
    /// Text after the first `__` that follows the qualifier.
    pub value: &'k str,
}

/// Why the head of a key could not be matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeadError<'k> {
    /// Empty key or no `__` anywhere.
    Format,
    /// No property of the family prefixes the key.
    Missing(&'k str),
    /// A property prefixes the key but no delimiter follows it.
    Near(&'k str),
}

pub(crate) fn split_key<P: StyleProperty>(key: &str) -> std::result::Result<KeyParts<'_, P>, HeadError<'_>> {
    if key.is_empty() || !key.contains(VALUE_DELIMITER) {
        return Err(HeadError::Format);
    }

    let (property, rest) = match match_property::<P>(key) {
        PropertyMatch::Found { property, rest } => (property, rest),
        PropertyMatch::Near { head } => return Err(HeadError::Near(head)),
        PropertyMatch::Missing { head } => return Err(HeadError::Missing(head)),
    };

    if let Some(value) = rest.strip_prefix(VALUE_DELIMITER) {
        return Ok(KeyParts {
            property,
            qualifier: None,
            value,
        });
    }

    // `rest` starts with `--`.
    let body = &rest[2..];
    let split = body.find(VALUE_DELIMITER).ok_or(HeadError::Format)?;
    Ok(KeyParts {
        property,
        qualifier: Some(&body[..split]),
        value: &body[split + VALUE_DELIMITER.len()..],
    })
}

/// Maps a head error the way every non-dimension family does.
pub(crate) fn property_error(err: HeadError<'_>, key: &str) -> StyleKeyError {
    match err {
        HeadError::Format => StyleKeyError::invalid_format(key),
        HeadError::Missing(head) | HeadError::Near(head) => StyleKeyError::UnsupportedProperty {
            property: head.to_string(),
            key: key.to_string(),
        },
    }
}

/// Parses a `size` or `size::breakpoint` qualifier.
///
/// The size token is found by vocabulary membership; only then is the
/// remainder checked for `::breakpoint`. Qualifiers the encoders never
/// write are format errors: a bare `s:all` (the key is unqualified) and an
/// explicit `::bp:all` (the key drops it).
pub(crate) fn parse_size_qualifier(qualifier: &str, key: &str) -> Result<(SizeToken, Breakpoint)> {
    for size in SizeToken::ALL {
        let Some(rest) = qualifier.strip_prefix(size.as_str()) else {
            continue;
        };
        if rest.is_empty() {
            if size.is_default() {
                return Err(StyleKeyError::invalid_format(key));
            }
            return Ok((size, Breakpoint::All));
        }
        let Some(bp_text) = rest.strip_prefix(SEGMENT_DELIMITER) else {
            continue;
        };
        if bp_text.contains(SEGMENT_DELIMITER) {
            return Err(StyleKeyError::InvalidMediaQueryPattern {
                key: key.to_string(),
            });
        }
        let bp = Breakpoint::lookup(bp_text).ok_or_else(|| StyleKeyError::InvalidMediaToken {
            token: bp_text.to_string(),
            key: key.to_string(),
        })?;
        if bp.is_default() {
            return Err(StyleKeyError::invalid_format(key));
        }
        return Ok((size, bp));
    }

    let token = qualifier
        .split(SEGMENT_DELIMITER)
        .next()
        .unwrap_or(qualifier);
    Err(StyleKeyError::InvalidCustomToken {
        token: token.to_string(),
        key: key.to_string(),
    })
}

/// Reads a value segment, accepting only the text the encoders write for
/// that value: `16` but not `16.0` or `-0`, `[0,0,0,1]` but not
/// `[0, 0, 0, 1.0]`.
pub(crate) fn canonical_value(text: &str) -> Option<TokenValue> {
    let value = TokenValue::parse_key_text(text)?;
    let canonical = value.to_key_text("").ok()?;
    (canonical == text).then_some(value)
}

/// Parses a non-rest interaction state segment.
///
/// `rest` is never written as a qualifier, so an explicit `--rest` is a
/// format error rather than an alias of the unqualified key.
pub(crate) fn parse_state(text: &str, key: &str) -> Result<InteractionState> {
    let state = InteractionState::lookup(text).ok_or_else(|| StyleKeyError::UnsupportedState {
        state: text.to_string(),
        key: key.to_string(),
    })?;
    if state.is_rest() {
        return Err(StyleKeyError::invalid_format(key));
    }
    Ok(state)
}
