//! Schema walker: the compilation pass.
//!
//! [`compile`] visits every element of a [`Schema`], encodes each present
//! family subtree, registers the resulting keys and materializes the
//! registry:
//!
//! ```text
//! Schema ─▶ encoders ─▶ Registry (count, decode) ─▶ CompiledStyles
//!                                                    ├─ stylesheet()
//!                                                    └─ class_map()
//! ```
//!
//! ```rust
//! use stylekey::{compile, CompileConfig, Schema};
//!
//! let schema = Schema::from_yaml(r#"
//! button:
//!   root:
//!     scale:
//!       paddingTop: 16
//!       textSize: 16
//! "#).unwrap();
//!
//! let compilation = compile(&schema, &CompileConfig::default()).unwrap();
//! assert_eq!(compilation.styles.class_for("paddingTop__16"), Some("a"));
//! assert_eq!(
//!     compilation.styles.stylesheet(),
//!     ".a { padding-top: 16px; }\n.b { font-size: 1rem; }\n"
//! );
//! ```

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, debug_span, warn};

use crate::config::{CompileConfig, ErrorPolicy};
use crate::encode::{encode_decoration, encode_palette, encode_radius, encode_scale, encode_shadow};
use crate::error::{CompileError, Result, StyleKeyError};
use crate::registry::{CompiledStyles, Registry};
use crate::schema::{ElementTokens, Schema};
use crate::vocab::Family;

/// A token that was skipped under [`ErrorPolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub component: String,
    pub element: String,
    pub family: Family,
    #[serde(serialize_with = "serialize_error")]
    pub error: StyleKeyError,
}

fn serialize_error<S: serde::Serializer>(
    error: &StyleKeyError,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// The keys one element uses, grouped by family.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementStyles {
    pub component: String,
    pub element: String,
    pub keys: IndexMap<Family, Vec<String>>,
}

impl ElementStyles {
    /// Every key of the element, in family then authoring order.
    pub fn all_keys(&self) -> impl Iterator<Item = &str> {
        self.keys.values().flatten().map(String::as_str)
    }
}

/// Output of one compilation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Compilation {
    pub styles: CompiledStyles,
    pub elements: Vec<ElementStyles>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Output of [`walk`]: per-element keys and skipped tokens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalkOutput {
    pub elements: Vec<ElementStyles>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Compiles a schema into atomic styles.
///
/// # Errors
///
/// Returns [`CompileError::Config`] for invalid settings, and under
/// [`ErrorPolicy::Abort`] the first token error.
pub fn compile(schema: &Schema, config: &CompileConfig) -> std::result::Result<Compilation, CompileError> {
    let span = debug_span!("compile", components = schema.components.len());
    let _guard = span.enter();

    let mut registry = Registry::with_decoder(config.decoder()?);
    let output = walk(schema, &mut registry, config.on_error)?;
    let styles = registry.finish(config.allocation, config.naming);

    Ok(Compilation {
        styles,
        elements: output.elements,
        diagnostics: output.diagnostics,
    })
}

/// Encodes and registers every token of `schema` into `registry`.
///
/// Registries filled by separate walks can be [merged](Registry::merge).
pub fn walk(
    schema: &Schema,
    registry: &mut Registry,
    policy: ErrorPolicy,
) -> std::result::Result<WalkOutput, CompileError> {
    let mut output = WalkOutput::default();

    for (component, element, tokens) in schema.elements() {
        let mut styles = ElementStyles {
            component: component.to_string(),
            element: element.to_string(),
            keys: IndexMap::new(),
        };

        for (family, encoded) in encode_element(tokens) {
            let keys = match encoded {
                Ok(keys) => keys,
                Err(error) => {
                    report(&mut output, policy, component, element, family, error)?;
                    continue;
                }
            };

            for key in keys {
                if let Err(error) = registry.register_as(family, &key) {
                    report(&mut output, policy, component, element, family, error)?;
                    continue;
                }
                let registered = styles.keys.entry(family).or_default();
                if !registered.contains(&key) {
                    registered.push(key);
                }
            }
        }

        debug!(
            component,
            element,
            keys = styles.all_keys().count(),
            "walked element"
        );
        output.elements.push(styles);
    }

    Ok(output)
}

/// Aborts, or records the error and lets the walk continue.
fn report(
    output: &mut WalkOutput,
    policy: ErrorPolicy,
    component: &str,
    element: &str,
    family: Family,
    error: StyleKeyError,
) -> std::result::Result<(), CompileError> {
    if policy == ErrorPolicy::Abort {
        return Err(CompileError::Token {
            component: component.to_string(),
            element: element.to_string(),
            family,
            source: error,
        });
    }
    warn!(component, element, %family, %error, "skipped style token");
    output.diagnostics.push(Diagnostic {
        component: component.to_string(),
        element: element.to_string(),
        family,
        error,
    });
    Ok(())
}

/// Encodes every present subtree of an element, one result per property
/// (decoration, scale, palette) or per subtree (shadow, radius).
fn encode_element(tokens: &ElementTokens) -> Vec<(Family, Result<Vec<String>>)> {
    let mut encoded = Vec::new();

    if let Some(decoration) = &tokens.decoration {
        for (property, value) in decoration {
            encoded.push((
                Family::Decoration,
                encode_decoration(property, value).map(|key| vec![key]),
            ));
        }
    }
    if let Some(scale) = &tokens.scale {
        for (property, value) in scale {
            encoded.push((Family::Scale, encode_scale(property, value)));
        }
    }
    if let Some(palette) = &tokens.palette {
        for (property, value) in palette {
            encoded.push((Family::Palette, encode_palette(property, value)));
        }
    }
    if let Some(shadow) = &tokens.shadow {
        encoded.push((Family::Shadow, encode_shadow(shadow)));
    }
    if let Some(radius) = &tokens.radius {
        encoded.push((Family::Radius, encode_radius(radius)));
    }
    encoded
}
