//! Border-radius keys, including the nested `selected` sub-map.

use crate::decode::NESTED_STATE_DELIMITER;
use crate::error::{Result, StyleKeyError};
use crate::schema::{RadiusTokens, RadiusValue};
use crate::vocab::{InteractionState, RadiusProperty, StyleProperty};

use super::{compose, number_text};

/// Encodes a border-radius subtree.
///
/// A nested map is only allowed under `selected`, and may not itself
/// contain `selected`. Its rest entry shares the key of a direct `selected`
/// value.
pub fn encode_radius(tokens: &RadiusTokens) -> Result<Vec<String>> {
    let name = RadiusProperty::BorderRadius.name();
    let mut keys = Vec::new();

    for (state, value) in &tokens.states {
        match value {
            RadiusValue::Direct(n) => {
                let qualifier = (!state.is_rest()).then(|| state.as_str());
                keys.push(compose(name, qualifier, &number_text(*n, name)?));
            }
            RadiusValue::Nested(inner) => {
                if *state != InteractionState::Selected {
                    return Err(StyleKeyError::unsupported_value(
                        name,
                        &format!("nested states under '{}'", state),
                        name,
                    ));
                }
                for (inner_state, n) in inner {
                    let qualifier = match inner_state {
                        InteractionState::Selected => {
                            return Err(StyleKeyError::unsupported_value(
                                name,
                                "'selected' nested under 'selected'",
                                name,
                            ))
                        }
                        InteractionState::Rest => state.as_str().to_string(),
                        other => format!("{}{}{}", state, NESTED_STATE_DELIMITER, other),
                    };
                    keys.push(compose(name, Some(qualifier.as_str()), &number_text(*n, name)?));
                }
            }
        }
    }
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(yaml: &str) -> RadiusTokens {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_direct_states() {
        assert_eq!(
            encode_radius(&tokens("rest: 4\nhover: 6\n")).unwrap(),
            vec!["borderRadius__4", "borderRadius--hover__6"]
        );
    }

    #[test]
    fn test_nested_selected() {
        assert_eq!(
            encode_radius(&tokens("selected: { rest: 6, hover: 8 }\n")).unwrap(),
            vec!["borderRadius--selected__6", "borderRadius--selected:hover__8"]
        );
    }

    #[test]
    fn test_nested_elsewhere_rejected() {
        assert!(matches!(
            encode_radius(&tokens("hover: { rest: 6 }\n")),
            Err(StyleKeyError::UnsupportedValue { .. })
        ));
        assert!(matches!(
            encode_radius(&tokens("selected: { selected: 6 }\n")),
            Err(StyleKeyError::UnsupportedValue { .. })
        ));
    }
}
