//! Border-radius keys.
//!
//! Direct states use `borderRadius__v` / `borderRadius--state__v`. Values
//! nested under `selected` use `borderRadius--selected__v` for the rest
//! state and `borderRadius--selected:state__v` otherwise; the selector
//! takes the pseudo of the innermost state.

use crate::css::CssRule;
use crate::error::{Result, StyleKeyError};
use crate::value::{format_number, VALUE_DELIMITER};
use crate::vocab::{InteractionState, RadiusProperty, StyleProperty};

use super::grammar::{canonical_value, parse_state, property_error, split_key};

/// Separator between `selected` and a nested state.
pub(crate) const NESTED_STATE_DELIMITER: char = ':';

pub(crate) fn decode(key: &str) -> Result<CssRule> {
    let parts = split_key::<RadiusProperty>(key).map_err(|e| property_error(e, key))?;
    let property = parts.property;

    let state = match parts.qualifier {
        None => InteractionState::Rest,
        Some(qualifier) => match qualifier.split_once(NESTED_STATE_DELIMITER) {
            Some((outer, inner)) => {
                if parse_state(outer, key)? != InteractionState::Selected {
                    return Err(StyleKeyError::invalid_format(key));
                }
                let inner = parse_state(inner, key)?;
                if inner == InteractionState::Selected {
                    return Err(StyleKeyError::invalid_format(key));
                }
                inner
            }
            None => parse_state(qualifier, key)?,
        },
    };

    let unsupported = || StyleKeyError::unsupported_value(property.name(), parts.value, key);
    if parts.value.contains(VALUE_DELIMITER) {
        return Err(unsupported());
    }
    let radius = canonical_value(parts.value)
        .and_then(|value| value.as_number())
        .and_then(format_number)
        .ok_or_else(unsupported)?;

    Ok(CssRule::new(key, state.pseudo()).declare(property.css_name(), format!("{}px", radius)))
}
