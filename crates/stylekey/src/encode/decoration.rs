//! Decoration keys: `property__value`, one per authored property.

use crate::error::Result;
use crate::value::TokenValue;
use crate::vocab::{DecorationProperty, StyleProperty};

use super::{compose, lookup_property};

/// Encodes one decoration property as `property__value`.
///
/// The value is not checked against the property's allowed set here; that
/// happens when the key is decoded.
pub fn encode_decoration(property: &str, value: &TokenValue) -> Result<String> {
    let property = lookup_property::<DecorationProperty>(property)?;
    let text = value.to_key_text(property.name())?;
    Ok(compose(property.name(), None, &text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StyleKeyError;

    #[test]
    fn test_primitives() {
        assert_eq!(
            encode_decoration("borderStyle", &"solid".into()).unwrap(),
            "borderStyle__solid"
        );
        assert_eq!(
            encode_decoration("italic", &true.into()).unwrap(),
            "italic__true"
        );
        assert_eq!(
            encode_decoration("fontWeight", &TokenValue::Number(600.0)).unwrap(),
            "fontWeight__600"
        );
    }

    #[test]
    fn test_array_keeps_order() {
        let value = TokenValue::from(vec!["Inter", "sans-serif"]);
        assert_eq!(
            encode_decoration("fontFamily", &value).unwrap(),
            r#"fontFamily__["Inter","sans-serif"]"#
        );
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            encode_decoration("textShadow", &"x".into()),
            Err(StyleKeyError::UnsupportedProperty { .. })
        ));
        assert!(matches!(
            encode_decoration("borderStyle", &"a__b".into()),
            Err(StyleKeyError::UnsupportedValue { .. })
        ));
    }
}
