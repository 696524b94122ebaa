//! Stylekey - Compiles design-token trees into atomic CSS.
//!
//! A design system describes its components as a tree of tokens: colors,
//! spacing scales, text decorations, shadows and border radii, organized by
//! component → element → interaction state → breakpoint. Stylekey flattens
//! that tree into a set of atomic rules, each addressed by a compact
//! **style key** that carries everything needed to rebuild the rule:
//!
//! ```text
//! paddingTop__16                       padding-top: 16px
//! textSize__16                         font-size: 1rem
//! paddingTop--s:sm:1::bp:lg:1__16      @media (min-width: 1024px) { padding-top: 16px }
//! textColor--hover::ref__[0,0,0,1]     .k:hover, .group:hover .k { color: #000 }
//! shadow__[0,2,4,[0,0,0,0.5]]          box-shadow: 0px 2px 4px #00000080
//! ```
//!
//! Identical keys are deduplicated across the whole schema and each one is
//! given a minimal class name (`a`, `b`, …, `aa`).
//!
//! # Quick Start
//!
//! ```rust
//! use stylekey::{compile, CompileConfig, Schema};
//!
//! let schema = Schema::from_yaml(r#"
//! button:
//!   root:
//!     decoration:
//!       borderStyle: solid
//!     scale:
//!       paddingTop: 8
//!     palette:
//!       backgroundColor:
//!         rest: [0, 100, 50, 1]
//!         hover: [0, 100, 40, 1]
//!   label:
//!     scale:
//!       paddingTop: 8
//! "#).unwrap();
//!
//! let compilation = compile(&schema, &CompileConfig::default()).unwrap();
//! let styles = &compilation.styles;
//!
//! assert_eq!(styles.class_for("borderStyle__solid"), Some("a"));
//! assert_eq!(styles.get("paddingTop__8").unwrap().uses, 2);
//! assert!(styles
//!     .stylesheet()
//!     .contains(".c { background-color: #f00; }"));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! Schema ─▶ walker ─▶ encoders ─▶ Registry ─▶ CompiledStyles
//!                                   │             ├─ stylesheet()
//!                                   └─ KeyDecoder └─ class_map()
//! ```
//!
//! - [`schema`]: the token tree, loaded from YAML or JSON
//! - [`encode`]: one encoder per family, token subtree → keys
//! - [`KeyDecoder`]: key → [`CssRule`], validated against the vocabularies
//! - [`Registry`]: usage counting and short-token allocation
//! - [`color`]: HSLA → hex codec
//!
//! # Errors
//!
//! Every malformed key or value produces a [`StyleKeyError`] naming the key.
//! [`compile`] either stops at the first one or, with
//! [`ErrorPolicy::Skip`], records a [`Diagnostic`] and carries on.
//!
//! # Logging
//!
//! The crate emits `tracing` events (a span per compilation, debug events
//! per element, warnings for skipped tokens) and installs no subscriber.

pub mod color;
mod config;
mod css;
mod decode;
pub mod encode;
mod error;
mod registry;
pub mod schema;
mod value;
pub mod vocab;
mod walker;

// Re-export public API
pub use color::{minify_hex, ColorValue, GradientStop, Hsla, Rgba};
pub use config::{AllocationOrder, ClassNaming, CompileConfig, ErrorPolicy};
pub use css::{escape_class, CssRule, Declaration, Selector};
pub use decode::{KeyDecoder, DEFAULT_ANCESTOR_CLASS, DEFAULT_REM_BASE};
pub use error::{CompileError, LoadError, Result, StyleKeyError};
pub use registry::{short_token, token_index, ClassEntry, CompiledStyles, Registry, StyleEntry};
pub use schema::Schema;
pub use value::{format_number, parse_number, TokenValue};
pub use vocab::{Breakpoint, BreakpointTable, Family, InteractionState, SizeToken};
pub use walker::{compile, walk, Compilation, Diagnostic, ElementStyles, WalkOutput};
