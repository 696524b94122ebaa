//! Design-token schema: component → element → token family subtrees.
//!
//! A schema is authored as YAML (or JSON). Each element carries up to five
//! optional family subtrees; absent subtrees are simply skipped by the
//! walker. Property names are kept as strings here and validated by the
//! encoders, so a misspelled property surfaces as a [`StyleKeyError`]
//! naming the element rather than a parse failure.
//!
//! ```yaml
//! button:
//!   root:
//!     decoration:
//!       borderStyle: solid
//!       fontFamily: [Inter, sans-serif]
//!     scale:
//!       paddingTop: 8
//!       textSize:
//!         s:sm:1: 14
//!         s:lg:1:
//!           bp:all: 16
//!           bp:lg:1: 18
//!     palette:
//!       backgroundColor:
//!         rest: [0, 0, 100, 1]
//!         hover: [0, 0, 95, 1]
//!       textColor:
//!         primary:
//!           rest: [210, 80, 40, 1]
//!           hover: { ref: [210, 80, 30, 1] }
//!     shadow:
//!       x: { rest: 0 }
//!       y: { rest: 1, hover: 2 }
//!       blur: { rest: 2, hover: 4 }
//!       color: { rest: [0, 0, 0, 0.2] }
//!     radius:
//!       rest: 4
//!       selected: { rest: 6, hover: 8 }
//! ```
//!
//! [`StyleKeyError`]: crate::StyleKeyError

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::color::ColorValue;
use crate::error::LoadError;
use crate::value::TokenValue;
use crate::vocab::{Breakpoint, InteractionState, SizeToken};

/// Name of the semantic group a bare state map belongs to.
pub const NEUTRAL_GROUP: &str = "neutral";

/// A full design-token schema, in authoring order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    pub components: IndexMap<String, ComponentTokens>,
}

impl Schema {
    /// Parses a schema from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Yaml`] if the document is not valid YAML or does
    /// not have the schema's shape.
    pub fn from_yaml(yaml: &str) -> Result<Self, LoadError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses a schema from JSON.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Every `(component, element, tokens)` triple, in authoring order.
    pub fn elements(&self) -> impl Iterator<Item = (&str, &str, &ElementTokens)> {
        self.components.iter().flat_map(|(component, tokens)| {
            tokens
                .elements
                .iter()
                .map(move |(element, tokens)| (component.as_str(), element.as_str(), tokens))
        })
    }
}

/// The elements of one component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentTokens {
    pub elements: IndexMap<String, ElementTokens>,
}

/// The token subtrees of one element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElementTokens {
    pub decoration: Option<IndexMap<String, TokenValue>>,
    pub scale: Option<IndexMap<String, ScaleValue>>,
    pub palette: Option<IndexMap<String, PaletteValue>>,
    pub shadow: Option<ShadowTokens>,
    pub radius: Option<RadiusTokens>,
}

// ─── Scale ──────────────────────────────────────────────────────────────────

/// A dimension value: a bare number or a map of size variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScaleValue {
    Direct(f64),
    Sized(IndexMap<SizeToken, SizedValue>),
}

/// The value of one size variant: a number or a map of breakpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizedValue {
    Direct(f64),
    Responsive(IndexMap<Breakpoint, f64>),
}

// ─── Palette ────────────────────────────────────────────────────────────────

/// A color applied directly, or only when inherited from an ancestor's
/// matching state (`{ ref: [h, s, l, a] }`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorEntry {
    Reference {
        #[serde(rename = "ref")]
        target: ColorValue,
    },
    Direct(ColorValue),
}

impl ColorEntry {
    pub fn color(&self) -> &ColorValue {
        match self {
            ColorEntry::Reference { target } => target,
            ColorEntry::Direct(color) => color,
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, ColorEntry::Reference { .. })
    }
}

/// The colors of one palette property.
///
/// A bare state map is the implicit `neutral` group; otherwise the map is
/// keyed by semantic group (`primary`, `danger`, …). Group names organize
/// authoring only and do not appear in keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PaletteValue {
    States(IndexMap<InteractionState, ColorEntry>),
    Groups(IndexMap<String, IndexMap<InteractionState, ColorEntry>>),
}

/// One entry of a palette map before it is known to be a state or a group.
#[derive(Deserialize)]
#[serde(untagged)]
enum PaletteSlot {
    Color(ColorEntry),
    Group(IndexMap<String, ColorEntry>),
}

fn state_named<E: serde::de::Error>(name: &str, group: Option<&str>) -> Result<InteractionState, E> {
    InteractionState::lookup(name).ok_or_else(|| {
        let expected = InteractionState::ALL.map(|state| state.as_str()).join(", ");
        match group {
            Some(group) => E::custom(format!(
                "unknown interaction state '{}' in group '{}' (expected one of {})",
                name, group, expected
            )),
            None => E::custom(format!(
                "unknown interaction state '{}' (expected one of {})",
                name, expected
            )),
        }
    })
}

impl<'de> Deserialize<'de> for PaletteValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let slots = IndexMap::<String, PaletteSlot>::deserialize(deserializer)?;

        let mut states = IndexMap::new();
        let mut groups = IndexMap::new();
        for (name, slot) in slots {
            match slot {
                PaletteSlot::Color(entry) => {
                    states.insert(state_named::<D::Error>(&name, None)?, entry);
                }
                PaletteSlot::Group(entries) => {
                    if InteractionState::lookup(&name).is_some() {
                        return Err(D::Error::custom(format!(
                            "state '{}' must hold a color, not a map of states",
                            name
                        )));
                    }
                    let mut group = IndexMap::new();
                    for (state, entry) in entries {
                        group.insert(state_named::<D::Error>(&state, Some(&name))?, entry);
                    }
                    groups.insert(name, group);
                }
            }
        }

        match (states.is_empty(), groups.is_empty()) {
            (_, true) => Ok(PaletteValue::States(states)),
            (true, false) => Ok(PaletteValue::Groups(groups)),
            (false, false) => Err(D::Error::custom(
                "palette mixes interaction states with semantic groups",
            )),
        }
    }
}

impl PaletteValue {
    /// The semantic groups of this value, in authoring order.
    pub fn groups(&self) -> Vec<(&str, &IndexMap<InteractionState, ColorEntry>)> {
        match self {
            PaletteValue::States(states) => vec![(NEUTRAL_GROUP, states)],
            PaletteValue::Groups(groups) => groups
                .iter()
                .map(|(name, states)| (name.as_str(), states))
                .collect(),
        }
    }
}

// ─── Effects ────────────────────────────────────────────────────────────────

/// Shadow components, each keyed by state. Missing states fall back to
/// `rest`, then to `0` / opaque black.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShadowTokens {
    pub x: IndexMap<InteractionState, f64>,
    pub y: IndexMap<InteractionState, f64>,
    pub blur: IndexMap<InteractionState, f64>,
    pub color: IndexMap<InteractionState, Vec<f64>>,
}

/// Border radii by state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RadiusTokens {
    pub states: IndexMap<InteractionState, RadiusValue>,
}

/// A radius, or (under `selected` only) a nested map of states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RadiusValue {
    Direct(f64),
    Nested(IndexMap<InteractionState, f64>),
}
