//! Style-key decoder and CSS emitter.
//!
//! [`KeyDecoder`] turns a style key back into a [`CssRule`]. Each family has
//! its own grammar, all sharing the vocabulary-driven tokenizer in
//! `grammar`:
//!
//! | Family | Key | CSS |
//! |---|---|---|
//! | decoration | `borderStyle__solid` | `border-style: solid` |
//! | scale | `paddingTop--s:sm:1::bp:lg:1__16` | `@media (min-width: 1024px) { … padding-top: 16px }` |
//! | palette | `textColor--hover::ref__[0,0,0,1]` | `.k:hover, .group:hover .k { color: #000 }` |
//! | shadow | `shadow__[0,2,4,[0,0,0,0.5]]` | `box-shadow: 0px 2px 4px #00000080` |
//! | radius | `borderRadius--selected:hover__8` | `.k:hover { border-radius: 8px }` |
//!
//! Malformed keys always produce a [`StyleKeyError`]; nothing is emitted for
//! them.
//!
//! ```rust
//! use stylekey::KeyDecoder;
//!
//! let decoder = KeyDecoder::new();
//! let rule = decoder.decode("textSize__16").unwrap();
//! assert_eq!(rule.render(), ".textSize__16 { font-size: 1rem; }");
//! ```

mod decoration;
mod dimension;
mod grammar;
mod palette;
mod radius;
mod shadow;

pub(crate) use grammar::{REFERENCE_MARKER, SEGMENT_DELIMITER};
pub(crate) use radius::NESTED_STATE_DELIMITER;

use crate::css::CssRule;
use crate::error::{Result, StyleKeyError};
use crate::value::VALUE_DELIMITER;
use crate::vocab::property::key_head;
use crate::vocab::{match_property, BreakpointTable, DimensionProperty, Family, PropertyMatch};

/// Default class of the ancestor whose state reference colors follow.
pub const DEFAULT_ANCESTOR_CLASS: &str = "group";

/// Pixels per `rem` for the text-size family.
pub const DEFAULT_REM_BASE: f64 = 16.0;

/// Decodes style keys into CSS rules.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyDecoder {
    breakpoints: BreakpointTable,
    ancestor_class: String,
    rem_base: f64,
}

impl Default for KeyDecoder {
    fn default() -> Self {
        Self {
            breakpoints: BreakpointTable::default(),
            ancestor_class: DEFAULT_ANCESTOR_CLASS.to_string(),
            rem_base: DEFAULT_REM_BASE,
        }
    }
}

impl KeyDecoder {
    /// Decoder with the default breakpoint thresholds, `group` ancestor
    /// class and a 16px rem.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_breakpoints(mut self, breakpoints: BreakpointTable) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    pub fn with_ancestor_class(mut self, class: impl Into<String>) -> Self {
        self.ancestor_class = class.into();
        self
    }

    pub fn with_rem_base(mut self, rem_base: f64) -> Self {
        self.rem_base = rem_base;
        self
    }

    pub fn breakpoints(&self) -> &BreakpointTable {
        &self.breakpoints
    }

    pub fn ancestor_class(&self) -> &str {
        &self.ancestor_class
    }

    pub fn rem_base(&self) -> f64 {
        self.rem_base
    }

    /// Decodes a key of any family.
    ///
    /// The family is the one whose property table matches the longest
    /// prefix of the key.
    pub fn decode(&self, key: &str) -> Result<CssRule> {
        match Family::detect(key) {
            Some(family) => self.decode_as(family, key),
            None => Err(undetected(key)),
        }
    }

    /// Decodes a key with the grammar of `family`.
    pub fn decode_as(&self, family: Family, key: &str) -> Result<CssRule> {
        match family {
            Family::Decoration => self.decode_decoration(key),
            Family::Scale => self.decode_dimension(key),
            Family::Palette => self.decode_color(key),
            Family::Shadow => self.decode_shadow(key),
            Family::Radius => self.decode_radius(key),
        }
    }

    pub fn decode_decoration(&self, key: &str) -> Result<CssRule> {
        decoration::decode(key)
    }

    pub fn decode_dimension(&self, key: &str) -> Result<CssRule> {
        dimension::decode(self, key)
    }

    pub fn decode_color(&self, key: &str) -> Result<CssRule> {
        palette::decode(self, key)
    }

    pub fn decode_shadow(&self, key: &str) -> Result<CssRule> {
        shadow::decode(key)
    }

    pub fn decode_radius(&self, key: &str) -> Result<CssRule> {
        radius::decode(key)
    }
}

fn undetected(key: &str) -> StyleKeyError {
    if key.is_empty() || !key.contains(VALUE_DELIMITER) {
        return StyleKeyError::invalid_format(key);
    }
    match match_property::<DimensionProperty>(key) {
        PropertyMatch::Near { head } => StyleKeyError::NoStandardDimensionKey {
            property: head.to_string(),
            key: key.to_string(),
        },
        _ => StyleKeyError::UnsupportedProperty {
            property: key_head(key).to_string(),
            key: key.to_string(),
        },
    }
}
