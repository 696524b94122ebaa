//! Color keys, flattened across semantic groups.

use crate::color::ColorValue;
use crate::decode::{REFERENCE_MARKER, SEGMENT_DELIMITER};
use crate::error::{Result, StyleKeyError};
use crate::schema::PaletteValue;
use crate::vocab::{PaletteProperty, StyleProperty};

use super::{compose, lookup_property};

/// Encodes one palette property across all of its semantic groups.
///
/// | | rest | other state |
/// |---|---|---|
/// | direct | `property__v` | `property--state__v` |
/// | reference | `property__ref::v` | `property--state::ref__v` |
///
/// Groups sharing a color produce the same key more than once; the
/// registry counts each occurrence.
pub fn encode_palette(property: &str, value: &PaletteValue) -> Result<Vec<String>> {
    let property = lookup_property::<PaletteProperty>(property)?;
    let name = property.name();

    let mut keys = Vec::new();
    for (_group, states) in value.groups() {
        for (state, entry) in states {
            let color = entry.color();
            if matches!(color, ColorValue::Gradient { .. }) && property.gradient_css_name().is_none() {
                return Err(StyleKeyError::unsupported_value(name, "gradient", name));
            }
            let text = color.key_text(name)?;

            let key = match (state.is_rest(), entry.is_reference()) {
                (true, false) => compose(name, None, &text),
                (false, false) => compose(name, Some(state.as_str()), &text),
                (true, true) => compose(
                    name,
                    None,
                    &format!("{}{}{}", REFERENCE_MARKER, SEGMENT_DELIMITER, text),
                ),
                (false, true) => {
                    let qualifier =
                        format!("{}{}{}", state.as_str(), SEGMENT_DELIMITER, REFERENCE_MARKER);
                    compose(name, Some(qualifier.as_str()), &text)
                }
            };
            keys.push(key);
        }
    }
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::GradientStop;
    use crate::schema::ColorEntry;
    use crate::vocab::InteractionState;
    use indexmap::IndexMap;

    fn solid(h: f64, s: f64, l: f64, a: f64) -> ColorValue {
        ColorValue::Solid(vec![h, s, l, a])
    }

    #[test]
    fn test_direct_states() {
        let states: IndexMap<_, _> = [
            (InteractionState::Rest, ColorEntry::Direct(solid(0.0, 0.0, 100.0, 1.0))),
            (InteractionState::Hover, ColorEntry::Direct(solid(0.0, 0.0, 95.0, 1.0))),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            encode_palette("backgroundColor", &PaletteValue::States(states)).unwrap(),
            vec![
                "backgroundColor__[0,0,100,1]",
                "backgroundColor--hover__[0,0,95,1]"
            ]
        );
    }

    #[test]
    fn test_reference_asymmetry() {
        let states: IndexMap<_, _> = [
            (
                InteractionState::Rest,
                ColorEntry::Reference {
                    target: solid(0.0, 0.0, 0.0, 1.0),
                },
            ),
            (
                InteractionState::Hover,
                ColorEntry::Reference {
                    target: solid(0.0, 0.0, 0.0, 1.0),
                },
            ),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            encode_palette("textColor", &PaletteValue::States(states)).unwrap(),
            vec![
                "textColor__ref::[0,0,0,1]",
                "textColor--hover::ref__[0,0,0,1]"
            ]
        );
    }

    #[test]
    fn test_groups_flatten_in_order() {
        let group = |l: f64| -> IndexMap<InteractionState, ColorEntry> {
            [(InteractionState::Rest, ColorEntry::Direct(solid(0.0, 0.0, l, 1.0)))]
                .into_iter()
                .collect()
        };
        let groups: IndexMap<String, _> = [
            ("primary".to_string(), group(10.0)),
            ("danger".to_string(), group(20.0)),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            encode_palette("textColor", &PaletteValue::Groups(groups)).unwrap(),
            vec!["textColor__[0,0,10,1]", "textColor__[0,0,20,1]"]
        );
    }

    #[test]
    fn test_gradient_only_on_background() {
        let gradient = ColorValue::Gradient {
            angle: 90.0,
            stops: vec![
                GradientStop {
                    color: vec![0.0, 0.0, 0.0, 1.0],
                    at: 0.0,
                },
                GradientStop {
                    color: vec![0.0, 0.0, 100.0, 1.0],
                    at: 100.0,
                },
            ],
        };
        let states: IndexMap<_, _> = [(InteractionState::Rest, ColorEntry::Direct(gradient))]
            .into_iter()
            .collect();
        let value = PaletteValue::States(states);
        assert_eq!(
            encode_palette("backgroundColor", &value).unwrap(),
            vec![r#"backgroundColor__["linear",90,[[0,0,0,1],0],[[0,0,100,1],100]]"#]
        );
        assert!(matches!(
            encode_palette("textColor", &value),
            Err(StyleKeyError::UnsupportedValue { .. })
        ));
    }

    #[test]
    fn test_out_of_range_components_are_normalized() {
        let states: IndexMap<_, _> = [
            (InteractionState::Rest, ColorEntry::Direct(solid(360.0, 100.0, 50.0, 1.0))),
            (InteractionState::Hover, ColorEntry::Direct(solid(-120.0, 150.0, 50.0, 2.0))),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            encode_palette("textColor", &PaletteValue::States(states)).unwrap(),
            vec!["textColor__[0,100,50,1]", "textColor--hover__[240,100,50,1]"]
        );
    }

    #[test]
    fn test_bad_tuple() {
        let states: IndexMap<_, _> = [(
            InteractionState::Rest,
            ColorEntry::Direct(ColorValue::Solid(vec![0.0, 0.0])),
        )]
        .into_iter()
        .collect();
        assert!(matches!(
            encode_palette("textColor", &PaletteValue::States(states)),
            Err(StyleKeyError::InvalidHexFormat { .. })
        ));
    }
}
