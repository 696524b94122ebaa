//! Error types for style-key encoding, decoding and loading.
//!
//! Every failure names the offending key (or the key being built) so a bad
//! token can be traced back to the schema. Decoders never return a silent
//! `None` for a malformed key: they always fail with a [`StyleKeyError`].

use thiserror::Error;

use crate::vocab::Family;

/// Error raised while encoding a token subtree or decoding a style key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleKeyError {
    /// The key prefix does not match any property of the attempted family.
    #[error("unsupported property '{property}' in style key '{key}'")]
    UnsupportedProperty { property: String, key: String },

    /// The value segment is missing, empty, carries extra delimiters, or is
    /// not allowed for the property.
    #[error("unsupported value '{value}' for property '{property}' in style key '{key}'")]
    UnsupportedValue {
        property: String,
        value: String,
        key: String,
    },

    /// The key lacks the minimum delimiter structure.
    #[error("invalid style key format: '{key}'")]
    InvalidKeyFormat { key: String },

    /// No dimension property matches the key prefix.
    #[error("no dimension property matches style key '{key}'")]
    NoMatchingDimensionKey { key: String },

    /// A dimension property name prefixes the key but is not followed by a
    /// delimiter, e.g. `paddingTopX__4`.
    #[error("'{property}' is not a standard dimension property (style key '{key}')")]
    NoStandardDimensionKey { property: String, key: String },

    /// The breakpoint qualifier is not a known breakpoint token.
    #[error("invalid media token '{token}' in style key '{key}'")]
    InvalidMediaToken { token: String, key: String },

    /// The key has more segments than the breakpoint-qualified grammar allows.
    #[error("invalid media query pattern in style key '{key}'")]
    InvalidMediaQueryPattern { key: String },

    /// The size qualifier is not a known size token.
    #[error("invalid size token '{token}' in style key '{key}'")]
    InvalidCustomToken { token: String, key: String },

    /// The state segment is not a known interaction state.
    #[error("unsupported interaction state '{state}' in style key '{key}'")]
    UnsupportedState { state: String, key: String },

    /// Color input is not an HSLA 4-tuple or not a well-formed hex string.
    #[error("invalid color format: {input}")]
    InvalidHexFormat { input: String },
}

impl StyleKeyError {
    pub(crate) fn unsupported_value(property: &str, value: &str, key: &str) -> Self {
        StyleKeyError::UnsupportedValue {
            property: property.to_string(),
            value: value.to_string(),
            key: key.to_string(),
        }
    }

    pub(crate) fn invalid_format(key: &str) -> Self {
        StyleKeyError::InvalidKeyFormat {
            key: key.to_string(),
        }
    }

    pub(crate) fn invalid_color(input: impl Into<String>) -> Self {
        StyleKeyError::InvalidHexFormat {
            input: input.into(),
        }
    }
}

/// Error raised while loading a schema or a configuration document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// YAML parse error.
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parse error.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Breakpoint thresholds must increase strictly with the breakpoint order.
    #[error("breakpoint '{token}' ({px}px) must be wider than '{previous}' ({previous_px}px)")]
    BreakpointOrder {
        token: String,
        px: u32,
        previous: String,
        previous_px: u32,
    },

    /// The default breakpoint never produces a media query and cannot be
    /// given a threshold.
    #[error("the default breakpoint 'bp:all' cannot be given a threshold")]
    DefaultBreakpointThreshold,

    #[error("rem base must be a positive number, got {0}")]
    InvalidRemBase(f64),
}

/// Error raised by a compilation pass.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error(transparent)]
    Config(#[from] LoadError),

    /// A token subtree failed to encode, or one of its keys failed to decode.
    #[error("{component}.{element} ({family}): {source}")]
    Token {
        component: String,
        element: String,
        family: Family,
        #[source]
        source: StyleKeyError,
    },
}

/// Result type for style-key operations.
pub type Result<T> = std::result::Result<T, StyleKeyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_value_display_names_everything() {
        let err = StyleKeyError::unsupported_value(
            "borderStyle",
            "wavy",
            "borderStyle__wavy",
        );
        let msg = err.to_string();
        assert!(msg.contains("borderStyle"));
        assert!(msg.contains("wavy"));
        assert!(msg.contains("borderStyle__wavy"));
    }

    #[test]
    fn test_invalid_media_token_display() {
        let err = StyleKeyError::InvalidMediaToken {
            token: "bp:huge".to_string(),
            key: "width--s:all::bp:huge__4".to_string(),
        };
        assert!(err.to_string().contains("bp:huge"));
    }

    #[test]
    fn test_load_error_from_yaml() {
        let yaml_err = serde_yaml::from_str::<u32>("[").unwrap_err();
        let err: LoadError = yaml_err.into();
        assert!(matches!(err, LoadError::Yaml(_)));
    }

    #[test]
    fn test_compile_error_names_location() {
        let err = CompileError::Token {
            component: "button".to_string(),
            element: "label".to_string(),
            family: Family::Decoration,
            source: StyleKeyError::unsupported_value(
                "borderStyle",
                "wavy",
                "borderStyle__wavy",
            ),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("button.label (decoration):"));
        assert!(msg.contains("wavy"));
    }
}
