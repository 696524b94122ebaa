//! Shadow keys: `shadow__[x,y,blur,[h,s,l,a]]` and
//! `shadow--state__[x,y,blur,[h,s,l,a]]`.

use crate::color::Hsla;
use crate::css::CssRule;
use crate::error::{Result, StyleKeyError};
use crate::value::{format_number, TokenValue, VALUE_DELIMITER};
use crate::vocab::{InteractionState, ShadowProperty, StyleProperty};

use super::grammar::{canonical_value, parse_state, property_error, split_key};

pub(crate) fn decode(key: &str) -> Result<CssRule> {
    let parts = split_key::<ShadowProperty>(key).map_err(|e| property_error(e, key))?;
    let property = parts.property;

    let state = match parts.qualifier {
        Some(qualifier) => parse_state(qualifier, key)?,
        None => InteractionState::Rest,
    };

    let unsupported = || StyleKeyError::unsupported_value(property.name(), parts.value, key);
    if parts.value.contains(VALUE_DELIMITER) {
        return Err(unsupported());
    }
    let value = canonical_value(parts.value).ok_or_else(unsupported)?;
    let Some([x, y, blur, color]) = value.as_list() else {
        return Err(unsupported());
    };

    let mut lengths = Vec::with_capacity(3);
    for length in [x, y, blur] {
        let px = length.as_number().and_then(format_number).ok_or_else(unsupported)?;
        lengths.push(format!("{}px", px));
    }

    let components: Vec<f64> = color
        .as_list()
        .and_then(|items| items.iter().map(TokenValue::as_number).collect())
        .ok_or_else(|| {
            StyleKeyError::invalid_color(format!("shadow color in '{}' is not an [h, s, l, a] tuple", key))
        })?;
    let color = Hsla::from_components(&components)?;
    if !color.is_normalized() {
        return Err(unsupported());
    }
    let hex = color.to_hex();

    Ok(CssRule::new(key, state.pseudo())
        .declare(property.css_name(), format!("{} {}", lengths.join(" "), hex)))
}
