//! Property tables for every token family and the longest-prefix matcher.
//!
//! A key starts with a property name immediately followed by `__` (value) or
//! `--` (qualifier). Names may prefix one another (`padding` and
//! `paddingTop`), so matching picks the longest name that is followed by a
//! delimiter rather than the first one that happens to prefix the key.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Delimiter between the property (or value payload) and a qualifier.
pub const QUALIFIER_DELIMITER: &str = "--";

/// A property of one token family.
pub trait StyleProperty: Copy + Sized + 'static {
    /// Every property of the family.
    const ALL: &'static [Self];

    /// Name as it appears in keys (camelCase).
    fn name(&self) -> &'static str;

    /// CSS property the declaration targets.
    fn css_name(&self) -> &'static str;
}

/// Outcome of matching a key against a property table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyMatch<'k, P> {
    /// A property followed by a delimiter; `rest` starts at that delimiter.
    Found { property: P, rest: &'k str },
    /// A property name prefixes the key but is followed by something other
    /// than a delimiter. Carries the key's head up to its first delimiter.
    Near { head: &'k str },
    /// No property name prefixes the key.
    Missing { head: &'k str },
}

/// Matches the head of `key` against the properties of `P`.
pub fn match_property<P: StyleProperty>(key: &str) -> PropertyMatch<'_, P> {
    let mut best: Option<P> = None;
    let mut near = false;

    for property in P::ALL {
        let name = property.name();
        let Some(rest) = key.strip_prefix(name) else {
            continue;
        };
        if rest.starts_with("__") || rest.starts_with(QUALIFIER_DELIMITER) {
            if best.map_or(true, |b| b.name().len() < name.len()) {
                best = Some(*property);
            }
        } else {
            near = true;
        }
    }

    match best {
        Some(property) => PropertyMatch::Found {
            property,
            rest: &key[property.name().len()..],
        },
        None if near => PropertyMatch::Near { head: key_head(key) },
        None => PropertyMatch::Missing { head: key_head(key) },
    }
}

/// The key up to its first `__` or `--`, used in error messages.
pub fn key_head(key: &str) -> &str {
    let end = [key.find("__"), key.find(QUALIFIER_DELIMITER)]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(key.len());
    &key[..end]
}

/// The token families a key can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Decoration,
    Scale,
    Palette,
    Shadow,
    Radius,
}

impl Family {
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Decoration => "decoration",
            Family::Scale => "scale",
            Family::Palette => "palette",
            Family::Shadow => "shadow",
            Family::Radius => "radius",
        }
    }

    /// Finds the family whose property table holds the longest matching name.
    pub fn detect(key: &str) -> Option<Family> {
        [
            (Family::Decoration, found_len::<DecorationProperty>(key)),
            (Family::Scale, found_len::<DimensionProperty>(key)),
            (Family::Palette, found_len::<PaletteProperty>(key)),
            (Family::Shadow, found_len::<ShadowProperty>(key)),
            (Family::Radius, found_len::<RadiusProperty>(key)),
        ]
        .into_iter()
        .filter_map(|(family, len)| len.map(|len| (family, len)))
        .max_by_key(|(_, len)| *len)
        .map(|(family, _)| family)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn found_len<P: StyleProperty>(key: &str) -> Option<usize> {
    match match_property::<P>(key) {
        PropertyMatch::Found { property, .. } => Some(property.name().len()),
        _ => None,
    }
}

// ─── Decoration ─────────────────────────────────────────────────────────────

/// How a decoration value is validated and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorationRule {
    /// One keyword from a fixed set, emitted as-is.
    Keyword(&'static [&'static str]),
    /// A boolean switching between two CSS values.
    Flag { on: &'static str, off: &'static str },
    /// A numeric weight (100–900, step 100) or `normal` / `bold`.
    Weight,
    /// A non-empty list of font family names.
    FontList,
    /// A non-empty list of OpenType feature tags.
    FeatureList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecorationProperty {
    BorderStyle,
    TextDecoration,
    TextTransform,
    TextAlign,
    FontStyle,
    FontWeight,
    Italic,
    Underline,
    FontFamily,
    FontFeatures,
}

impl DecorationProperty {
    pub fn rule(&self) -> DecorationRule {
        match self {
            DecorationProperty::BorderStyle => {
                DecorationRule::Keyword(&["none", "dotted", "dashed", "solid"])
            }
            DecorationProperty::TextDecoration => {
                DecorationRule::Keyword(&["none", "underline", "overline", "line-through"])
            }
            DecorationProperty::TextTransform => {
                DecorationRule::Keyword(&["none", "uppercase", "lowercase", "capitalize"])
            }
            DecorationProperty::TextAlign => {
                DecorationRule::Keyword(&["left", "center", "right", "justify", "start", "end"])
            }
            DecorationProperty::FontStyle => DecorationRule::Keyword(&["normal", "italic"]),
            DecorationProperty::FontWeight => DecorationRule::Weight,
            DecorationProperty::Italic => DecorationRule::Flag {
                on: "italic",
                off: "normal",
            },
            DecorationProperty::Underline => DecorationRule::Flag {
                on: "underline",
                off: "none",
            },
            DecorationProperty::FontFamily => DecorationRule::FontList,
            DecorationProperty::FontFeatures => DecorationRule::FeatureList,
        }
    }
}

impl StyleProperty for DecorationProperty {
    const ALL: &'static [Self] = &[
        DecorationProperty::BorderStyle,
        DecorationProperty::TextDecoration,
        DecorationProperty::TextTransform,
        DecorationProperty::TextAlign,
        DecorationProperty::FontStyle,
        DecorationProperty::FontWeight,
        DecorationProperty::Italic,
        DecorationProperty::Underline,
        DecorationProperty::FontFamily,
        DecorationProperty::FontFeatures,
    ];

    fn name(&self) -> &'static str {
        match self {
            DecorationProperty::BorderStyle => "borderStyle",
            DecorationProperty::TextDecoration => "textDecoration",
            DecorationProperty::TextTransform => "textTransform",
            DecorationProperty::TextAlign => "textAlign",
            DecorationProperty::FontStyle => "fontStyle",
            DecorationProperty::FontWeight => "fontWeight",
            DecorationProperty::Italic => "italic",
            DecorationProperty::Underline => "underline",
            DecorationProperty::FontFamily => "fontFamily",
            DecorationProperty::FontFeatures => "fontFeatures",
        }
    }

    fn css_name(&self) -> &'static str {
        match self {
            DecorationProperty::BorderStyle => "border-style",
            DecorationProperty::TextDecoration | DecorationProperty::Underline => {
                "text-decoration"
            }
            DecorationProperty::TextTransform => "text-transform",
            DecorationProperty::TextAlign => "text-align",
            DecorationProperty::FontStyle | DecorationProperty::Italic => "font-style",
            DecorationProperty::FontWeight => "font-weight",
            DecorationProperty::FontFamily => "font-family",
            DecorationProperty::FontFeatures => "font-feature-settings",
        }
    }
}

// ─── Dimension ──────────────────────────────────────────────────────────────

/// CSS length unit of a dimension property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Px,
    /// Authored in px, emitted in rem.
    Rem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionProperty {
    Padding,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    Margin,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    Gap,
    RowGap,
    ColumnGap,
    Width,
    MinWidth,
    MaxWidth,
    Height,
    MinHeight,
    MaxHeight,
    BorderWidth,
    OutlineWidth,
    OutlineOffset,
    LetterSpacing,
    TextSize,
    LineHeight,
}

impl DimensionProperty {
    /// `rem` for the text-size family, `px` otherwise.
    pub fn unit(&self) -> Unit {
        match self {
            DimensionProperty::TextSize | DimensionProperty::LineHeight => Unit::Rem,
            _ => Unit::Px,
        }
    }
}

impl StyleProperty for DimensionProperty {
    const ALL: &'static [Self] = &[
        DimensionProperty::Padding,
        DimensionProperty::PaddingTop,
        DimensionProperty::PaddingRight,
        DimensionProperty::PaddingBottom,
        DimensionProperty::PaddingLeft,
        DimensionProperty::Margin,
        DimensionProperty::MarginTop,
        DimensionProperty::MarginRight,
        DimensionProperty::MarginBottom,
        DimensionProperty::MarginLeft,
        DimensionProperty::Gap,
        DimensionProperty::RowGap,
        DimensionProperty::ColumnGap,
        DimensionProperty::Width,
        DimensionProperty::MinWidth,
        DimensionProperty::MaxWidth,
        DimensionProperty::Height,
        DimensionProperty::MinHeight,
        DimensionProperty::MaxHeight,
        DimensionProperty::BorderWidth,
        DimensionProperty::OutlineWidth,
        DimensionProperty::OutlineOffset,
        DimensionProperty::LetterSpacing,
        DimensionProperty::TextSize,
        DimensionProperty::LineHeight,
    ];

    fn name(&self) -> &'static str {
        match self {
            DimensionProperty::Padding => "padding",
            DimensionProperty::PaddingTop => "paddingTop",
            DimensionProperty::PaddingRight => "paddingRight",
            DimensionProperty::PaddingBottom => "paddingBottom",
            DimensionProperty::PaddingLeft => "paddingLeft",
            DimensionProperty::Margin => "margin",
            DimensionProperty::MarginTop => "marginTop",
            DimensionProperty::MarginRight => "marginRight",
            DimensionProperty::MarginBottom => "marginBottom",
            DimensionProperty::MarginLeft => "marginLeft",
            DimensionProperty::Gap => "gap",
            DimensionProperty::RowGap => "rowGap",
            DimensionProperty::ColumnGap => "columnGap",
            DimensionProperty::Width => "width",
            DimensionProperty::MinWidth => "minWidth",
            DimensionProperty::MaxWidth => "maxWidth",
            DimensionProperty::Height => "height",
            DimensionProperty::MinHeight => "minHeight",
            DimensionProperty::MaxHeight => "maxHeight",
            DimensionProperty::BorderWidth => "borderWidth",
            DimensionProperty::OutlineWidth => "outlineWidth",
            DimensionProperty::OutlineOffset => "outlineOffset",
            DimensionProperty::LetterSpacing => "letterSpacing",
            DimensionProperty::TextSize => "textSize",
            DimensionProperty::LineHeight => "lineHeight",
        }
    }

    fn css_name(&self) -> &'static str {
        match self {
            DimensionProperty::Padding => "padding",
            DimensionProperty::PaddingTop => "padding-top",
            DimensionProperty::PaddingRight => "padding-right",
            DimensionProperty::PaddingBottom => "padding-bottom",
            DimensionProperty::PaddingLeft => "padding-left",
            DimensionProperty::Margin => "margin",
            DimensionProperty::MarginTop => "margin-top",
            DimensionProperty::MarginRight => "margin-right",
            DimensionProperty::MarginBottom => "margin-bottom",
            DimensionProperty::MarginLeft => "margin-left",
            DimensionProperty::Gap => "gap",
            DimensionProperty::RowGap => "row-gap",
            DimensionProperty::ColumnGap => "column-gap",
            DimensionProperty::Width => "width",
            DimensionProperty::MinWidth => "min-width",
            DimensionProperty::MaxWidth => "max-width",
            DimensionProperty::Height => "height",
            DimensionProperty::MinHeight => "min-height",
            DimensionProperty::MaxHeight => "max-height",
            DimensionProperty::BorderWidth => "border-width",
            DimensionProperty::OutlineWidth => "outline-width",
            DimensionProperty::OutlineOffset => "outline-offset",
            DimensionProperty::LetterSpacing => "letter-spacing",
            DimensionProperty::TextSize => "font-size",
            DimensionProperty::LineHeight => "line-height",
        }
    }
}

// ─── Palette ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteProperty {
    BackgroundColor,
    TextColor,
    BorderColor,
    OutlineColor,
    IconColor,
}

impl PaletteProperty {
    /// CSS property used for gradient values, if the property accepts them.
    pub fn gradient_css_name(&self) -> Option<&'static str> {
        match self {
            PaletteProperty::BackgroundColor => Some("background-image"),
            _ => None,
        }
    }
}

impl StyleProperty for PaletteProperty {
    const ALL: &'static [Self] = &[
        PaletteProperty::BackgroundColor,
        PaletteProperty::TextColor,
        PaletteProperty::BorderColor,
        PaletteProperty::OutlineColor,
        PaletteProperty::IconColor,
    ];

    fn name(&self) -> &'static str {
        match self {
            PaletteProperty::BackgroundColor => "backgroundColor",
            PaletteProperty::TextColor => "textColor",
            PaletteProperty::BorderColor => "borderColor",
            PaletteProperty::OutlineColor => "outlineColor",
            PaletteProperty::IconColor => "iconColor",
        }
    }

    fn css_name(&self) -> &'static str {
        match self {
            PaletteProperty::BackgroundColor => "background-color",
            PaletteProperty::TextColor => "color",
            PaletteProperty::BorderColor => "border-color",
            PaletteProperty::OutlineColor => "outline-color",
            PaletteProperty::IconColor => "fill",
        }
    }
}

// ─── Effects ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowProperty {
    Shadow,
}

impl StyleProperty for ShadowProperty {
    const ALL: &'static [Self] = &[ShadowProperty::Shadow];

    fn name(&self) -> &'static str {
        "shadow"
    }

    fn css_name(&self) -> &'static str {
        "box-shadow"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RadiusProperty {
    BorderRadius,
}

impl StyleProperty for RadiusProperty {
    const ALL: &'static [Self] = &[RadiusProperty::BorderRadius];

    fn name(&self) -> &'static str {
        "borderRadius"
    }

    fn css_name(&self) -> &'static str {
        "border-radius"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_prefix_wins() {
        match match_property::<DimensionProperty>("paddingTop__16") {
            PropertyMatch::Found { property, rest } => {
                assert_eq!(property, DimensionProperty::PaddingTop);
                assert_eq!(rest, "__16");
            }
            other => panic!("Expected Found, got {:?}", other),
        }
        match match_property::<DimensionProperty>("padding__16") {
            PropertyMatch::Found { property, .. } => {
                assert_eq!(property, DimensionProperty::Padding)
            }
            other => panic!("Expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_near_and_missing() {
        assert_eq!(
            match_property::<DimensionProperty>("paddingTopX__4"),
            PropertyMatch::Near {
                head: "paddingTopX"
            }
        );
        assert_eq!(
            match_property::<DimensionProperty>("zIndex__4"),
            PropertyMatch::Missing { head: "zIndex" }
        );
    }

    #[test]
    fn test_family_detection() {
        assert_eq!(Family::detect("borderStyle__solid"), Some(Family::Decoration));
        assert_eq!(Family::detect("borderWidth__1"), Some(Family::Scale));
        assert_eq!(Family::detect("borderColor__[0,0,0,1]"), Some(Family::Palette));
        assert_eq!(Family::detect("borderRadius__4"), Some(Family::Radius));
        assert_eq!(Family::detect("shadow--hover__[0,0,0,[0,0,0,1]]"), Some(Family::Shadow));
        assert_eq!(Family::detect("unknown__1"), None);
    }

    #[test]
    fn test_property_names_are_unique_across_families() {
        let mut names: Vec<&str> = Vec::new();
        names.extend(DecorationProperty::ALL.iter().map(|p| p.name()));
        names.extend(DimensionProperty::ALL.iter().map(|p| p.name()));
        names.extend(PaletteProperty::ALL.iter().map(|p| p.name()));
        names.extend(ShadowProperty::ALL.iter().map(|p| p.name()));
        names.extend(RadiusProperty::ALL.iter().map(|p| p.name()));
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_text_size_family_uses_rem() {
        assert_eq!(DimensionProperty::TextSize.unit(), Unit::Rem);
        assert_eq!(DimensionProperty::PaddingTop.unit(), Unit::Px);
    }
}
