//! Property-based tests for stylekey using proptest.

use proptest::prelude::*;
use stylekey::encode::encode_decoration;
use stylekey::{
    format_number, parse_number, short_token, token_index, AllocationOrder, ClassNaming, Hsla,
    KeyDecoder, Registry, TokenValue,
};

// ============================================================================
// Test helpers
// ============================================================================

fn is_hex_color(hex: &str) -> bool {
    hex.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 4 | 6 | 8)
            && digits.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
    })
}

// Keys that always decode: dimension keys with small integer values.
fn dimension_key_strategy() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["paddingTop", "gap", "width", "textSize", "marginLeft"]),
        0u32..64,
    )
        .prop_map(|(property, value)| format!("{}__{}", property, value))
}

// Font family names as they appear in CSS: identifiers bare, others quoted.
fn css_font_name(name: &str) -> String {
    if name.contains(' ') {
        format!("\"{}\"", name)
    } else {
        name.to_string()
    }
}

// (property, value, expected CSS value) drawn from every kind of decoration
// property: keywords, flags, weights, font lists and feature lists.
fn decoration_case_strategy() -> impl Strategy<Value = (&'static str, TokenValue, String)> {
    prop_oneof![
        prop::sample::select(vec![
            ("borderStyle", "solid"),
            ("borderStyle", "dotted"),
            ("textDecoration", "line-through"),
            ("textTransform", "uppercase"),
            ("textAlign", "center"),
            ("textAlign", "end"),
            ("fontStyle", "italic"),
            ("fontWeight", "bold"),
        ])
        .prop_map(|(property, keyword)| (property, TokenValue::from(keyword), keyword.to_string())),
        (
            prop::sample::select(vec![
                ("italic", "italic", "normal"),
                ("underline", "underline", "none"),
            ]),
            any::<bool>(),
        )
            .prop_map(|((property, on, off), flag)| {
                let css = if flag { on } else { off };
                (property, TokenValue::Bool(flag), css.to_string())
            }),
        (1u32..=9).prop_map(|step| {
            let weight = step * 100;
            ("fontWeight", TokenValue::Number(weight as f64), weight.to_string())
        }),
        prop::collection::vec(
            prop::sample::select(vec!["Inter", "Open Sans", "-apple-system", "serif", "sans-serif"]),
            1..4,
        )
        .prop_map(|names| {
            let css = names.iter().map(|n| css_font_name(n)).collect::<Vec<_>>().join(", ");
            ("fontFamily", TokenValue::from(names), css)
        }),
        prop::collection::vec(prop::sample::select(vec!["tnum", "ss01", "liga"]), 1..4).prop_map(
            |tags| {
                let css = tags
                    .iter()
                    .map(|t| format!("\"{}\"", t))
                    .collect::<Vec<_>>()
                    .join(", ");
                ("fontFeatures", TokenValue::from(tags), css)
            }
        ),
    ]
}

// ============================================================================
// Short tokens
// ============================================================================

proptest! {
    /// Every index maps to a token that maps back to it.
    #[test]
    fn short_token_round_trips(index in 0usize..1_000_000) {
        prop_assert_eq!(token_index(&short_token(index)), Some(index));
    }

    /// Tokens grow in (length, lexicographic) order.
    #[test]
    fn short_tokens_are_strictly_ordered(index in 0usize..1_000_000) {
        let current = short_token(index);
        let next = short_token(index + 1);
        prop_assert!(
            (current.len(), current.as_str()) < (next.len(), next.as_str()),
            "{} !< {}", current, next
        );
    }

    /// Tokens only use lowercase letters.
    #[test]
    fn short_tokens_are_lowercase(index in any::<u32>()) {
        let token = short_token(index as usize);
        prop_assert!(token.bytes().all(|b| b.is_ascii_lowercase()));
    }
}

// ============================================================================
// Number text
// ============================================================================

proptest! {
    /// Formatted numbers parse back to the same value.
    #[test]
    fn number_text_round_trips(n in -1.0e9f64..1.0e9) {
        let text = format_number(n).unwrap();
        prop_assert_eq!(parse_number(&text), Some(if n == 0.0 { 0.0 } else { n }));
    }

    /// Integral values never carry a fraction.
    #[test]
    fn integers_format_without_fraction(n in -1_000_000i64..1_000_000) {
        let text = format_number(n as f64).unwrap();
        prop_assert_eq!(text, n.to_string());
    }
}

// ============================================================================
// Colors
// ============================================================================

proptest! {
    /// Any finite HSLA input produces a well-formed lowercase hex color.
    #[test]
    fn hex_output_is_well_formed(
        h in -720.0f64..720.0,
        s in -10.0f64..110.0,
        l in -10.0f64..110.0,
        a in -0.5f64..1.5,
    ) {
        let hex = Hsla::new(h, s, l, a).to_hex();
        prop_assert!(is_hex_color(&hex), "bad hex {}", hex);
    }

    /// Opaque colors never carry an alpha channel.
    #[test]
    fn opaque_colors_have_no_alpha(
        h in 0.0f64..360.0,
        s in 0.0f64..100.0,
        l in 0.0f64..100.0,
    ) {
        let hex = Hsla::new(h, s, l, 1.0).to_hex();
        prop_assert!(hex.len() == 4 || hex.len() == 7, "bad hex {}", hex);
    }

    /// Colors decode to the same hex the codec produces.
    #[test]
    fn color_keys_decode_to_codec_hex(
        h in 0u32..360,
        s in 0u32..=100,
        l in 0u32..=100,
    ) {
        let key = format!("textColor__[{},{},{},1]", h, s, l);
        let rule = KeyDecoder::new().decode(&key).unwrap();
        let expected = Hsla::new(h as f64, s as f64, l as f64, 1.0).to_hex();
        prop_assert_eq!(&rule.declarations[0].value, &expected);
    }
}

// ============================================================================
// Decoration round trip
// ============================================================================

proptest! {
    /// Encoding then decoding a decoration gives a declaration matching the
    /// authored value, and encoding it again reuses the same key.
    #[test]
    fn decoration_values_round_trip(case in decoration_case_strategy()) {
        let (property, value, css) = case;
        let key = encode_decoration(property, &value).unwrap();

        let rule = KeyDecoder::new().decode(&key).unwrap();
        prop_assert_eq!(&rule.declarations[0].value, &css);

        let mut registry = Registry::new();
        registry.register(&key).unwrap();
        let again = encode_decoration(property, &value).unwrap();
        prop_assert_eq!(&again, &key);
        let entry = registry.register(&again).unwrap();
        prop_assert_eq!(entry.uses, 2);
        prop_assert_eq!(registry.len(), 1);
    }
}

// ============================================================================
// Registry
// ============================================================================

proptest! {
    /// Total usage equals the number of registrations; entries equal the
    /// number of distinct keys.
    #[test]
    fn registry_counts_every_registration(
        keys in prop::collection::vec(dimension_key_strategy(), 0..60),
    ) {
        let mut registry = Registry::new();
        for key in &keys {
            registry.register(key).unwrap();
        }

        let mut distinct = keys.clone();
        distinct.sort();
        distinct.dedup();

        prop_assert_eq!(registry.len(), distinct.len());
        prop_assert_eq!(registry.iter().map(|e| e.uses).sum::<usize>(), keys.len());
    }

    /// Splitting registrations across two registries and merging gives the
    /// same counts and, with sorted allocation, the same class map.
    #[test]
    fn merge_matches_single_registry(
        keys in prop::collection::vec(dimension_key_strategy(), 0..60),
        split in 0usize..60,
    ) {
        let split = split.min(keys.len());

        let mut single = Registry::new();
        for key in &keys {
            single.register(key).unwrap();
        }

        let mut left = Registry::new();
        let mut right = Registry::new();
        for key in &keys[..split] {
            left.register(key).unwrap();
        }
        for key in &keys[split..] {
            right.register(key).unwrap();
        }
        left.merge(right);

        for key in &keys {
            prop_assert_eq!(left.uses(key), single.uses(key));
        }
        prop_assert_eq!(
            left.finish(AllocationOrder::Sorted, ClassNaming::Short).class_map(),
            single.finish(AllocationOrder::Sorted, ClassNaming::Short).class_map()
        );
    }

    /// Allocated classes are distinct.
    #[test]
    fn allocated_classes_are_unique(
        keys in prop::collection::vec(dimension_key_strategy(), 0..60),
    ) {
        let mut registry = Registry::new();
        for key in &keys {
            registry.register(key).unwrap();
        }
        let map = registry.finish(AllocationOrder::Insertion, ClassNaming::Short).class_map();
        let mut classes: Vec<&String> = map.values().collect();
        let total = classes.len();
        classes.sort();
        classes.dedup();
        prop_assert_eq!(classes.len(), total);
    }
}
