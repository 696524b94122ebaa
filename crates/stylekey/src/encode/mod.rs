//! Style-key encoders, one per token family.
//!
//! Each encoder turns one token subtree into the canonical keys it
//! produces. Keys are plain strings: the registry decodes them into rules,
//! and the same value always yields the same key.
//!
//! ```rust
//! use stylekey::encode::encode_scale;
//! use stylekey::schema::ScaleValue;
//!
//! let keys = encode_scale("paddingTop", &ScaleValue::Direct(16.0)).unwrap();
//! assert_eq!(keys, vec!["paddingTop__16"]);
//! ```

mod decoration;
mod palette;
mod radius;
mod scale;
mod shadow;

pub use decoration::encode_decoration;
pub use palette::encode_palette;
pub use radius::encode_radius;
pub use scale::encode_scale;
pub use shadow::{encode_shadow, resolve_shadow, ShadowQuad};

use crate::error::{Result, StyleKeyError};
use crate::value::{format_number, VALUE_DELIMITER};
use crate::vocab::property::QUALIFIER_DELIMITER;
use crate::vocab::StyleProperty;

/// Looks up a property of family `P` by its key name.
pub(crate) fn lookup_property<P: StyleProperty>(name: &str) -> Result<P> {
    P::ALL
        .iter()
        .copied()
        .find(|property| property.name() == name)
        .ok_or_else(|| StyleKeyError::UnsupportedProperty {
            property: name.to_string(),
            key: name.to_string(),
        })
}

/// Assembles `property[--qualifier]__value`.
pub(crate) fn compose(property: &str, qualifier: Option<&str>, value: &str) -> String {
    match qualifier {
        Some(qualifier) => format!(
            "{}{}{}{}{}",
            property, QUALIFIER_DELIMITER, qualifier, VALUE_DELIMITER, value
        ),
        None => format!("{}{}{}", property, VALUE_DELIMITER, value),
    }
}

/// Key text of a bare number.
pub(crate) fn number_text(n: f64, property: &str) -> Result<String> {
    format_number(n).ok_or_else(|| StyleKeyError::unsupported_value(property, &n.to_string(), property))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::DimensionProperty;

    #[test]
    fn test_compose() {
        assert_eq!(compose("paddingTop", None, "16"), "paddingTop__16");
        assert_eq!(
            compose("textColor", Some("hover::ref"), "[0,0,0,1]"),
            "textColor--hover::ref__[0,0,0,1]"
        );
    }

    #[test]
    fn test_lookup_property() {
        assert_eq!(
            lookup_property::<DimensionProperty>("textSize").unwrap(),
            DimensionProperty::TextSize
        );
        assert!(matches!(
            lookup_property::<DimensionProperty>("fontSize"),
            Err(StyleKeyError::UnsupportedProperty { property, .. }) if property == "fontSize"
        ));
    }
}
