//! Dimension keys.
//!
//! A scale value is a bare number or a map of size variants, each of which
//! may itself be a map of breakpoints. `bp:all` never appears in a key, and
//! `s:all` only appears in front of a real breakpoint, so each authored value
//! has exactly one spelling.

use crate::decode::SEGMENT_DELIMITER;
use crate::error::Result;
use crate::schema::{ScaleValue, SizedValue};
use crate::vocab::{Breakpoint, DimensionProperty, SizeToken, StyleProperty};

use super::{compose, lookup_property, number_text};

/// Encodes one dimension property.
///
/// - a bare number, or any value under `s:all` with the default breakpoint,
///   gives `property__v`
/// - a number (or `bp:all`) under another size gives `property--size__v`
/// - any other breakpoint gives `property--size::breakpoint__v`
pub fn encode_scale(property: &str, value: &ScaleValue) -> Result<Vec<String>> {
    let property = lookup_property::<DimensionProperty>(property)?;
    let name = property.name();

    let sizes = match value {
        ScaleValue::Direct(n) => return Ok(vec![compose(name, None, &number_text(*n, name)?)]),
        ScaleValue::Sized(sizes) => sizes,
    };

    let mut keys = Vec::new();
    for (size, sized) in sizes {
        match sized {
            SizedValue::Direct(n) => keys.push(sized_key(name, *size, Breakpoint::All, *n)?),
            SizedValue::Responsive(breakpoints) => {
                for (bp, n) in breakpoints {
                    keys.push(sized_key(name, *size, *bp, *n)?);
                }
            }
        }
    }
    Ok(keys)
}

fn sized_key(name: &str, size: SizeToken, bp: Breakpoint, n: f64) -> Result<String> {
    let value = number_text(n, name)?;
    let qualifier = match (size.is_default(), bp.is_default()) {
        (true, true) => None,
        (false, true) => Some(size.as_str().to_string()),
        (_, false) => Some(format!("{}{}{}", size.as_str(), SEGMENT_DELIMITER, bp.as_str())),
    };
    Ok(compose(name, qualifier.as_deref(), &value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn sized(entries: Vec<(SizeToken, SizedValue)>) -> ScaleValue {
        ScaleValue::Sized(entries.into_iter().collect())
    }

    #[test]
    fn test_bare_number() {
        assert_eq!(
            encode_scale("paddingTop", &ScaleValue::Direct(16.0)).unwrap(),
            vec!["paddingTop__16"]
        );
    }

    #[test]
    fn test_size_qualified() {
        let value = sized(vec![
            (SizeToken::All, SizedValue::Direct(12.0)),
            (SizeToken::Sm, SizedValue::Direct(8.0)),
        ]);
        assert_eq!(
            encode_scale("gap", &value).unwrap(),
            vec!["gap__12", "gap--s:sm:1__8"]
        );
    }

    #[test]
    fn test_breakpoint_qualified() {
        let breakpoints: IndexMap<Breakpoint, f64> =
            [(Breakpoint::All, 14.0), (Breakpoint::Lg1, 16.0)].into_iter().collect();
        let value = sized(vec![(SizeToken::Sm, SizedValue::Responsive(breakpoints))]);
        assert_eq!(
            encode_scale("paddingTop", &value).unwrap(),
            vec!["paddingTop--s:sm:1__14", "paddingTop--s:sm:1::bp:lg:1__16"]
        );
    }

    #[test]
    fn test_default_size_and_breakpoint_collapse() {
        let breakpoints: IndexMap<Breakpoint, f64> =
            [(Breakpoint::All, 16.0), (Breakpoint::Md1, 20.0)].into_iter().collect();
        let value = sized(vec![(SizeToken::All, SizedValue::Responsive(breakpoints))]);
        assert_eq!(
            encode_scale("textSize", &value).unwrap(),
            vec!["textSize__16", "textSize--s:all::bp:md:1__20"]
        );
    }

    #[test]
    fn test_errors() {
        assert!(encode_scale("zIndex", &ScaleValue::Direct(1.0)).is_err());
        assert!(encode_scale("width", &ScaleValue::Direct(f64::NAN)).is_err());
    }
}
