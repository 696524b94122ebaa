//! Dimension keys: `property__v`, `property--size__v`,
//! `property--size::breakpoint__v`.

use crate::css::CssRule;
use crate::error::{Result, StyleKeyError};
use crate::value::{format_number, VALUE_DELIMITER};
use crate::vocab::{Breakpoint, DimensionProperty, SizeToken, StyleProperty, Unit};

use super::grammar::{canonical_value, parse_size_qualifier, split_key, HeadError};
use super::KeyDecoder;

pub(crate) fn decode(decoder: &KeyDecoder, key: &str) -> Result<CssRule> {
    let parts = split_key::<DimensionProperty>(key).map_err(|err| match err {
        HeadError::Format => StyleKeyError::invalid_format(key),
        HeadError::Missing(_) => StyleKeyError::NoMatchingDimensionKey {
            key: key.to_string(),
        },
        HeadError::Near(head) => StyleKeyError::NoStandardDimensionKey {
            property: head.to_string(),
            key: key.to_string(),
        },
    })?;
    let property = parts.property;

    if parts.value.contains(VALUE_DELIMITER) {
        return Err(StyleKeyError::InvalidMediaQueryPattern {
            key: key.to_string(),
        });
    }

    let (_size, bp): (SizeToken, Breakpoint) = match parts.qualifier {
        Some(qualifier) => parse_size_qualifier(qualifier, key)?,
        None => (SizeToken::All, Breakpoint::All),
    };

    let unsupported = || StyleKeyError::unsupported_value(property.name(), parts.value, key);
    let number = canonical_value(parts.value)
        .and_then(|value| value.as_number())
        .ok_or_else(unsupported)?;
    let css_value = match property.unit() {
        Unit::Px => format!("{}px", format_number(number).ok_or_else(unsupported)?),
        Unit::Rem => format!(
            "{}rem",
            format_number(number / decoder.rem_base()).ok_or_else(unsupported)?
        ),
    };

    let min_width = decoder.breakpoints().min_width(bp);
    let class_name = if min_width.is_some() {
        format!(
            "{}--{}{}{}",
            property.name(),
            bp.short_suffix(),
            VALUE_DELIMITER,
            parts.value
        )
    } else {
        key.to_string()
    };

    Ok(CssRule::new(class_name, "")
        .declare(property.css_name(), css_value)
        .within_media(min_width))
}
