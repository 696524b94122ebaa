//! Color keys.
//!
//! ```text
//! backgroundColor__[0,0,100,1]               rest
//! backgroundColor--hover__[0,0,90,1]         state
//! textColor__ref::[0,0,0,1]                  rest, inherited from ancestor
//! textColor--hover::ref__[0,0,0,1]           state, inherited from ancestor
//! ```

use crate::color::Hsla;
use crate::css::{escape_class, CssRule, Selector};
use crate::error::{Result, StyleKeyError};
use crate::value::{format_number, TokenValue, VALUE_DELIMITER};
use crate::vocab::{InteractionState, PaletteProperty, StyleProperty};

use super::grammar::{
    canonical_value, parse_state, property_error, split_key, REFERENCE_MARKER, SEGMENT_DELIMITER,
};
use super::KeyDecoder;

pub(crate) fn decode(decoder: &KeyDecoder, key: &str) -> Result<CssRule> {
    let parts = split_key::<PaletteProperty>(key).map_err(|e| property_error(e, key))?;
    let property = parts.property;

    let (state, is_reference, payload) = match parts.qualifier {
        None => match parts
            .value
            .strip_prefix(REFERENCE_MARKER)
            .and_then(|rest| rest.strip_prefix(SEGMENT_DELIMITER))
        {
            Some(payload) => (InteractionState::Rest, true, payload),
            None => (InteractionState::Rest, false, parts.value),
        },
        Some(qualifier) => {
            let marker = format!("{}{}", SEGMENT_DELIMITER, REFERENCE_MARKER);
            match qualifier.strip_suffix(marker.as_str()) {
                Some(state) => (parse_state(state, key)?, true, parts.value),
                None => (parse_state(qualifier, key)?, false, parts.value),
            }
        }
    };

    let unsupported = || StyleKeyError::unsupported_value(property.name(), payload, key);
    if payload.is_empty() || payload.contains(VALUE_DELIMITER) {
        return Err(unsupported());
    }
    let value = canonical_value(payload).ok_or_else(unsupported)?;
    let items = value.as_list().ok_or_else(unsupported)?;

    let (css_property, css_value) = match items.first() {
        Some(TokenValue::Text(kind)) if kind == "linear" => {
            let css_property = property.gradient_css_name().ok_or_else(unsupported)?;
            let gradient = linear_gradient(&items[1..], &unsupported).ok_or_else(unsupported)??;
            (css_property, gradient)
        }
        _ => (property.css_name(), color_hex(items, &unsupported)?),
    };

    let mut rule = CssRule::new(key, state.pseudo()).declare(css_property, css_value);
    if is_reference {
        rule = rule.with_selector(Selector::Inherited {
            ancestor: format!(
                ".{}{}",
                escape_class(decoder.ancestor_class()),
                state.activation()
            ),
        });
    }
    Ok(rule)
}

/// `[h, s, l, a]` as hex. Anything but four numbers is a color format error;
/// components outside their ranges are never written by the encoders and
/// are rejected with `unsupported`.
fn color_hex(items: &[TokenValue], unsupported: &dyn Fn() -> StyleKeyError) -> Result<String> {
    let components: Vec<f64> = items
        .iter()
        .map(TokenValue::as_number)
        .collect::<Option<_>>()
        .ok_or_else(|| {
            StyleKeyError::invalid_color(format!("expected an [h, s, l, a] tuple, got {:?}", items))
        })?;
    let color = Hsla::from_components(&components)?;
    if !color.is_normalized() {
        return Err(unsupported());
    }
    Ok(color.to_hex())
}

/// `angle, [[h,s,l,a],pos], …` as a `linear-gradient()`.
///
/// The outer `None` means the gradient is structurally malformed; the inner
/// error is a bad color tuple inside an otherwise valid stop.
fn linear_gradient(
    items: &[TokenValue],
    unsupported: &dyn Fn() -> StyleKeyError,
) -> Option<Result<String>> {
    let (angle, stops) = items.split_first()?;
    let angle = format_number(angle.as_number()?)?;
    if stops.len() < 2 {
        return None;
    }

    let mut parts = Vec::with_capacity(stops.len());
    for stop in stops {
        let [color, at] = stop.as_list()? else {
            return None;
        };
        let color = match color_hex(color.as_list()?, unsupported) {
            Ok(hex) => hex,
            Err(err) => return Some(Err(err)),
        };
        parts.push(format!("{} {}%", color, format_number(at.as_number()?)?));
    }
    Some(Ok(format!("linear-gradient({}deg, {})", angle, parts.join(", "))))
}
