//! Interaction states and their selectors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A UI interaction state, in canonical emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InteractionState {
    Rest,
    Hover,
    Pressed,
    Selected,
    Focus,
    Disabled,
    ReadOnly,
}

impl InteractionState {
    pub const ALL: [InteractionState; 7] = [
        InteractionState::Rest,
        InteractionState::Hover,
        InteractionState::Pressed,
        InteractionState::Selected,
        InteractionState::Focus,
        InteractionState::Disabled,
        InteractionState::ReadOnly,
    ];

    /// State name as it appears in keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionState::Rest => "rest",
            InteractionState::Hover => "hover",
            InteractionState::Pressed => "pressed",
            InteractionState::Selected => "selected",
            InteractionState::Focus => "focus",
            InteractionState::Disabled => "disabled",
            InteractionState::ReadOnly => "readOnly",
        }
    }

    /// Pseudo-selector appended to the element's own class.
    ///
    /// Empty for states applied through an activation class instead.
    pub fn pseudo(&self) -> &'static str {
        match self {
            InteractionState::Rest | InteractionState::Selected | InteractionState::Disabled => "",
            InteractionState::Hover => ":hover",
            InteractionState::Pressed => ":active",
            InteractionState::Focus => ":focus-visible",
            InteractionState::ReadOnly => ":read-only",
        }
    }

    /// Selector suffix on the ancestor class when a value is inherited from
    /// an ancestor's state.
    pub fn activation(&self) -> &'static str {
        match self {
            InteractionState::Rest => "",
            InteractionState::Hover => ":hover",
            InteractionState::Pressed => ":active",
            InteractionState::Selected => ".is-selected",
            InteractionState::Focus => ":focus-within",
            InteractionState::Disabled => ".is-disabled",
            InteractionState::ReadOnly => ".is-read-only",
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, InteractionState::Rest)
    }

    pub fn lookup(text: &str) -> Option<InteractionState> {
        Self::ALL.into_iter().find(|s| s.as_str() == text)
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| format!("unknown interaction state: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_class_states_have_no_pseudo() {
        assert_eq!(InteractionState::Rest.pseudo(), "");
        assert_eq!(InteractionState::Selected.pseudo(), "");
        assert_eq!(InteractionState::Disabled.pseudo(), "");
        assert_eq!(InteractionState::Hover.pseudo(), ":hover");
    }

    #[test]
    fn test_serde_names_match_key_names() {
        for state in InteractionState::ALL {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{}\"", state.as_str()));
        }
    }

    #[test]
    fn test_canonical_order_starts_at_rest() {
        let mut states = InteractionState::ALL.to_vec();
        states.reverse();
        states.sort();
        assert_eq!(states[0], InteractionState::Rest);
        assert_eq!(states, InteractionState::ALL.to_vec());
    }
}
