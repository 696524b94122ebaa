//! Shadow keys.
//!
//! A shadow is authored as four per-state component maps. Every state named
//! in any of them gets a fully resolved `[x,y,blur,[h,s,l,a]]` quad.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::color::{Hsla, OPAQUE_BLACK};
use crate::error::Result;
use crate::schema::ShadowTokens;
use crate::value::TokenValue;
use crate::vocab::{InteractionState, ShadowProperty, StyleProperty};

use super::compose;

/// The four components of one `box-shadow`, fully resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadowQuad {
    pub x: f64,
    pub y: f64,
    pub blur: f64,
    #[serde(serialize_with = "serialize_hsla")]
    pub color: Hsla,
}

fn serialize_hsla<S: serde::Serializer>(color: &Hsla, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    color.components().serialize(serializer)
}

impl ShadowQuad {
    /// Payload text: `[x,y,blur,[h,s,l,a]]`, with the color normalized.
    pub fn key_text(&self) -> Result<String> {
        let color = TokenValue::List(
            self.color
                .normalized()
                .components()
                .into_iter()
                .map(TokenValue::Number)
                .collect(),
        );
        TokenValue::List(vec![
            TokenValue::Number(self.x),
            TokenValue::Number(self.y),
            TokenValue::Number(self.blur),
            color,
        ])
        .to_key_text(ShadowProperty::Shadow.name())
    }
}

/// Resolves a quad for `rest` and for every state named in any component.
///
/// Each component falls back from the state's own value to the rest value,
/// then to `0` (lengths) or opaque black (color). States come out in
/// canonical order.
pub fn resolve_shadow(tokens: &ShadowTokens) -> Result<Vec<(InteractionState, ShadowQuad)>> {
    let mut states: BTreeSet<InteractionState> = BTreeSet::new();
    states.insert(InteractionState::Rest);
    states.extend(tokens.x.keys().copied());
    states.extend(tokens.y.keys().copied());
    states.extend(tokens.blur.keys().copied());
    states.extend(tokens.color.keys().copied());

    let length = |map: &indexmap::IndexMap<InteractionState, f64>, state: &InteractionState| {
        map.get(state)
            .or_else(|| map.get(&InteractionState::Rest))
            .copied()
            .unwrap_or(0.0)
    };

    states
        .into_iter()
        .map(|state| -> Result<(InteractionState, ShadowQuad)> {
            let color = match tokens
                .color
                .get(&state)
                .or_else(|| tokens.color.get(&InteractionState::Rest))
            {
                Some(components) => Hsla::from_components(components)?,
                None => OPAQUE_BLACK,
            };
            let quad = ShadowQuad {
                x: length(&tokens.x, &state),
                y: length(&tokens.y, &state),
                blur: length(&tokens.blur, &state),
                color,
            };
            Ok((state, quad))
        })
        .collect()
}

/// Encodes a shadow subtree: `shadow__[…]` for rest, `shadow--state__[…]`
/// for every other state.
pub fn encode_shadow(tokens: &ShadowTokens) -> Result<Vec<String>> {
    let name = ShadowProperty::Shadow.name();
    resolve_shadow(tokens)?
        .into_iter()
        .map(|(state, quad)| -> Result<String> {
            let text = quad.key_text()?;
            let qualifier = (!state.is_rest()).then(|| state.as_str());
            Ok(compose(name, qualifier, &text))
        })
        .collect()
}
