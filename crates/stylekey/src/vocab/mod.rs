//! Fixed token vocabularies.
//!
//! Keys are parsed against these tables, never by guessing from their
//! syntax: size and breakpoint tokens contain `:` themselves, so the only
//! reliable way to find a split point is to check candidate substrings for
//! membership.
//!
//! - [`SizeToken`]: component-size variants (`s:sm:1`)
//! - [`Breakpoint`]: viewport breakpoints with min-width thresholds (`bp:lg:1`)
//! - [`InteractionState`]: UI states and their pseudo-selectors
//! - [`property`]: per-family property tables and CSS names

mod breakpoint;
pub mod property;
mod size;
mod state;

pub use breakpoint::{Breakpoint, BreakpointTable};
pub use property::{
    match_property, DecorationProperty, DecorationRule, DimensionProperty, Family,
    PaletteProperty, PropertyMatch, RadiusProperty, ShadowProperty, StyleProperty, Unit,
};
pub use size::SizeToken;
pub use state::InteractionState;
