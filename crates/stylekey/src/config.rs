//! Compilation settings.
//!
//! Everything has a default, so an empty document is a valid configuration:
//!
//! ```yaml
//! allocation: sorted       # insertion | sorted
//! naming: short            # short | verbose
//! on_error: skip           # abort | skip
//! ancestor_class: group
//! rem_base: 16
//! breakpoints:
//!   bp:lg:1: 1100
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::decode::{KeyDecoder, DEFAULT_ANCESTOR_CLASS, DEFAULT_REM_BASE};
use crate::error::LoadError;
use crate::vocab::{Breakpoint, BreakpointTable};

/// Order in which registry entries receive short tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationOrder {
    /// First-registration order, matching a sequential traversal.
    #[default]
    Insertion,
    /// Keys sorted before allocation, so merged registries allocate the
    /// same tokens regardless of how they were built.
    Sorted,
}

/// How emitted rules are named.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassNaming {
    /// The allocated short token (`a`, `b`, …, `aa`).
    #[default]
    Short,
    /// The key-derived class name.
    Verbose,
}

/// What a compilation does when a token fails to encode or decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Stop at the first error.
    #[default]
    Abort,
    /// Record a diagnostic and carry on with the next token.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompileConfig {
    pub allocation: AllocationOrder,
    pub naming: ClassNaming,
    pub on_error: ErrorPolicy,
    /// Class of the ancestor that reference colors follow.
    pub ancestor_class: String,
    /// Pixels per rem for the text-size family.
    pub rem_base: f64,
    /// Threshold overrides, in pixels.
    pub breakpoints: IndexMap<Breakpoint, u32>,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            allocation: AllocationOrder::default(),
            naming: ClassNaming::default(),
            on_error: ErrorPolicy::default(),
            ancestor_class: DEFAULT_ANCESTOR_CLASS.to_string(),
            rem_base: DEFAULT_REM_BASE,
            breakpoints: IndexMap::new(),
        }
    }
}

impl CompileConfig {
    /// Parses and validates a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Yaml`] for malformed YAML or unknown fields, and
    /// the validation errors of [`decoder`](Self::decoder).
    pub fn from_yaml(yaml: &str) -> Result<Self, LoadError> {
        let config: CompileConfig = serde_yaml::from_str(yaml)?;
        config.decoder()?;
        Ok(config)
    }

    /// Builds the key decoder these settings describe.
    ///
    /// # Errors
    ///
    /// Fails when breakpoint overrides break the strict ordering, or when
    /// `rem_base` is not a positive number.
    pub fn decoder(&self) -> Result<KeyDecoder, LoadError> {
        if !(self.rem_base.is_finite() && self.rem_base > 0.0) {
            return Err(LoadError::InvalidRemBase(self.rem_base));
        }
        let breakpoints = BreakpointTable::with_overrides(&self.breakpoints)?;
        Ok(KeyDecoder::new()
            .with_breakpoints(breakpoints)
            .with_ancestor_class(self.ancestor_class.clone())
            .with_rem_base(self.rem_base))
    }
}
